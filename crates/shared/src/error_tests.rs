use rstest::rstest;

use crate::error::AppError;

#[rstest]
#[case(AppError::Forbidden("test".into()), 403, "FORBIDDEN")]
#[case(AppError::NotFound("test".into()), 404, "NOT_FOUND")]
#[case(AppError::Validation("test".into()), 400, "VALIDATION_ERROR")]
#[case(AppError::Database("test".into()), 500, "DATABASE_ERROR")]
#[case(AppError::ExternalService("test".into()), 500, "EXTERNAL_SERVICE_ERROR")]
fn test_app_error_mapping(#[case] error: AppError, #[case] status: u16, #[case] code: &str) {
    assert_eq!(error.status_code(), status);
    assert_eq!(error.error_code(), code);
    assert_eq!(error.is_client_error(), status < 500);
    assert_eq!(error.message(), "test");
}

#[test]
fn test_app_error_display() {
    assert_eq!(
        AppError::NotFound("Ad not found".into()).to_string(),
        "Not found: Ad not found"
    );
    assert_eq!(
        AppError::Forbidden("msg".into()).to_string(),
        "Access denied: msg"
    );
    assert_eq!(
        AppError::ExternalService("msg".into()).to_string(),
        "External service error: msg"
    );
}
