// Error mapping between layers, no HTTP server or database involved.
use actix_web::http::StatusCode;

use crate::auth::AuthError;
use crate::errors::domain::{ConflictKind, DomainError, InfraErrorKind, NotFoundKind};
use crate::AppError;

#[test]
fn maps_validation_to_400() {
    let app: AppError = DomainError::validation("password is incorrect").into();
    assert_eq!(app.code(), "VALIDATION_ERROR");
    assert_eq!(app.status(), StatusCode::BAD_REQUEST);
}

#[test]
fn maps_conflicts() {
    let app: AppError = DomainError::conflict(ConflictKind::UniqueEmail, "email exists").into();
    assert_eq!(app.code(), "UNIQUE_EMAIL");
    assert_eq!(app.status(), StatusCode::CONFLICT);

    let app: AppError = DomainError::conflict(ConflictKind::UniquePhone, "phone exists").into();
    assert_eq!(app.code(), "UNIQUE_PHONE");

    let app: AppError =
        DomainError::conflict(ConflictKind::Other("x".to_string()), "generic").into();
    assert_eq!(app.code(), "CONFLICT");
}

#[test]
fn maps_not_found() {
    let app: AppError = DomainError::not_found(NotFoundKind::Manager, "no manager").into();
    assert_eq!(app.code(), "MANAGER_NOT_FOUND");
    assert_eq!(app.status(), StatusCode::NOT_FOUND);

    let app: AppError = DomainError::not_found(NotFoundKind::Client, "no client").into();
    assert_eq!(app.code(), "CLIENT_NOT_FOUND");
}

#[test]
fn maps_infra() {
    let app: AppError = DomainError::infra(InfraErrorKind::DbUnavailable, "down").into();
    assert_eq!(app.code(), "DB_UNAVAILABLE");
    assert_eq!(app.status(), StatusCode::SERVICE_UNAVAILABLE);

    let app: AppError = DomainError::infra(InfraErrorKind::Timeout, "slow").into();
    assert_eq!(app.status(), StatusCode::GATEWAY_TIMEOUT);

    let app: AppError = DomainError::infra(InfraErrorKind::DataCorruption, "bad row").into();
    assert_eq!(app.code(), "DB_ERROR");
    assert_eq!(app.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn authorize_failures_collapse_to_unauthorized() {
    let rejected = [
        AuthError::MissingToken,
        AuthError::MalformedPayload,
        AuthError::InvalidSignature,
        AuthError::TokenExpired,
        AuthError::PrincipalNotFound,
    ];

    for err in rejected {
        let app: AppError = err.into();
        assert!(matches!(app, AppError::Unauthorized));
        assert_eq!(app.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(app.code(), "UNAUTHORIZED");
    }
}

#[test]
fn credential_failures_share_one_code() {
    let unknown: AppError = AuthError::NoSuchPrincipal.into();
    let wrong: AppError = AuthError::InvalidCredentials.into();

    assert_eq!(unknown.code(), "INVALID_CREDENTIALS");
    assert_eq!(wrong.code(), unknown.code());
    assert_eq!(wrong.to_string(), unknown.to_string());
}

#[test]
fn store_failures_are_not_auth_failures() {
    let err = AuthError::Store(DomainError::infra(InfraErrorKind::DbUnavailable, "down"));
    let app: AppError = err.into();
    assert_eq!(app.status(), StatusCode::SERVICE_UNAVAILABLE);
}
