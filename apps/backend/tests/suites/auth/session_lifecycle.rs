// Issue-then-verify over the full session lifetime, on both stores.

use actix_web::cookie::Cookie;
use actix_web::http::StatusCode;
use actix_web::test;
use portal_backend::auth::{AuthError, Claims};
use portal_backend::{AppState, StateBuilder, SESSION_TTL};
use portal_test_support::problem_details::assert_problem_details;
use time::macros::datetime;
use time::{Duration, OffsetDateTime};

use crate::common::{admin_app, memory_state, seed_manager, sqlite_state, test_security};

const NOW: OffsetDateTime = datetime!(2030-01-01 09:00:00 UTC);

async fn login_authorize_expire(state: AppState) {
    let manager_id = seed_manager(&state, "a@x.com", "secret").await;
    let auth = &state.admin.auth;

    let token = auth.login_at("a@x.com", "secret", NOW).await.unwrap();
    let wire = token.to_string();

    let claims = auth.authorize_at(Some(&wire), NOW).await.unwrap();
    assert_eq!(claims.subject_id, manager_id);
    assert_eq!(claims.expires_at, Some(NOW + SESSION_TTL));

    let last_valid = NOW + SESSION_TTL - Duration::milliseconds(1);
    assert!(auth.authorize_at(Some(&wire), last_valid).await.is_ok());

    let just_after = NOW + SESSION_TTL + Duration::milliseconds(1);
    assert!(matches!(
        auth.authorize_at(Some(&wire), just_after).await,
        Err(AuthError::TokenExpired)
    ));
}

#[tokio::test]
async fn manager_session_lifecycle_in_memory() {
    login_authorize_expire(memory_state().await).await;
}

#[tokio::test]
async fn manager_session_lifecycle_on_sqlite() {
    login_authorize_expire(sqlite_state().await).await;
}

#[tokio::test]
async fn unknown_email_is_no_such_principal() {
    let state = memory_state().await;
    seed_manager(&state, "a@x.com", "secret").await;

    let result = state.admin.auth.login_at("b@x.com", "secret", NOW).await;
    assert!(matches!(result, Err(AuthError::NoSuchPrincipal)));
}

#[actix_web::test]
async fn rejected_sessions_all_render_as_unauthorized() {
    let security = test_security();
    let state = StateBuilder::new(security.clone()).build().await.unwrap();
    let manager_id = seed_manager(&state, "a@x.com", "secret").await;
    let app = admin_app(&state).await;

    let signer = security.admin_signer();
    let expired = signer
        .sign(&Claims::new(
            manager_id,
            Some(OffsetDateTime::now_utc() - Duration::seconds(1)),
        ))
        .unwrap()
        .to_string();
    let ghost = signer
        .sign(&Claims::new(uuid::Uuid::new_v4(), None))
        .unwrap()
        .to_string();
    let valid = signer
        .sign(&Claims::new(manager_id, None))
        .unwrap()
        .to_string();
    let mut tampered = valid.clone().into_bytes();
    tampered[2] = if tampered[2] == b'A' { b'B' } else { b'A' };
    let tampered = String::from_utf8(tampered).unwrap();

    let mut details = Vec::new();
    let cases = [
        None,
        Some("garbage"),
        Some(expired.as_str()),
        Some(ghost.as_str()),
        Some(tampered.as_str()),
    ];
    for cookie_value in cases {
        let mut req = test::TestRequest::get().uri("/session");
        if let Some(v) = cookie_value {
            req = req.cookie(Cookie::new("admin_session", v.to_string()));
        }
        let resp = test::call_service(&app, req.to_request()).await;
        let problem =
            assert_problem_details(resp, "UNAUTHORIZED", StatusCode::UNAUTHORIZED, None).await;
        details.push(problem.detail);
    }
    details.dedup();
    assert_eq!(details.len(), 1);

    let req = test::TestRequest::get()
        .uri("/session")
        .cookie(Cookie::new("admin_session", valid))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
}
