// Admin portal login, logout and session endpoints over HTTP.

use actix_web::cookie::SameSite;
use actix_web::http::{header, StatusCode};
use actix_web::test;
use portal_test_support::problem_details::assert_problem_details;
use portal_test_support::unique_helpers::unique_email;

use portal_backend::config::BootstrapManager;
use portal_backend::StateBuilder;

use crate::common::{admin_app, memory_state, seed_manager, session_cookie, test_security};

fn login_request(email: &str, password: &str) -> actix_http::Request {
    test::TestRequest::post()
        .uri("/login")
        .set_form([("email", email), ("password", password)])
        .to_request()
}

#[actix_web::test]
async fn login_sets_cookie_and_redirects() {
    let state = memory_state().await;
    let email = unique_email("manager");
    seed_manager(&state, &email, "secret").await;
    let app = admin_app(&state).await;

    let resp = test::call_service(&app, login_request(&email, "secret")).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/");

    let cookie = session_cookie(&resp, "admin_session").expect("session cookie");
    assert!(!cookie.value().is_empty());
    assert_eq!(cookie.http_only(), Some(true));
    assert_eq!(cookie.same_site(), Some(SameSite::Strict));
    assert_eq!(cookie.path(), Some("/"));
    assert!(cookie.expires_datetime().is_some());
}

#[actix_web::test]
async fn session_returns_logged_in_manager() {
    let state = memory_state().await;
    let email = unique_email("manager");
    let id = seed_manager(&state, &email, "secret").await;
    let app = admin_app(&state).await;

    let resp = test::call_service(&app, login_request(&email.to_uppercase(), "secret")).await;
    let cookie = session_cookie(&resp, "admin_session").unwrap();

    let req = test::TestRequest::get()
        .uri("/session")
        .cookie(cookie)
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["id"], id.to_string());
    assert_eq!(body["email"], email);
    assert_eq!(body["firstName"], "Test");
    assert!(body.get("passwordHash").is_none());
}

#[actix_web::test]
async fn unknown_email_and_wrong_password_look_the_same() {
    let state = memory_state().await;
    let email = unique_email("manager");
    seed_manager(&state, &email, "secret").await;
    let app = admin_app(&state).await;

    let unknown = test::call_service(&app, login_request("nobody@example.com", "secret")).await;
    assert!(session_cookie(&unknown, "admin_session").is_none());
    let unknown = assert_problem_details(
        unknown,
        "INVALID_CREDENTIALS",
        StatusCode::UNAUTHORIZED,
        Some("Invalid credentials"),
    )
    .await;

    let wrong = test::call_service(&app, login_request(&email, "not-the-password")).await;
    let wrong = assert_problem_details(
        wrong,
        "INVALID_CREDENTIALS",
        StatusCode::UNAUTHORIZED,
        None,
    )
    .await;

    assert_eq!(unknown.detail, wrong.detail);
    assert_eq!(unknown.title, wrong.title);
}

#[actix_web::test]
async fn malformed_form_is_bad_request() {
    let state = memory_state().await;
    let app = admin_app(&state).await;

    let req = test::TestRequest::post()
        .uri("/login")
        .set_form([("email", "a@x.com")])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_problem_details(resp, "BAD_REQUEST", StatusCode::BAD_REQUEST, None).await;
}

#[actix_web::test]
async fn logout_clears_cookie() {
    let state = memory_state().await;
    let app = admin_app(&state).await;

    let req = test::TestRequest::post().uri("/logout").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/login");

    let cookie = session_cookie(&resp, "admin_session").expect("removal cookie");
    assert_eq!(cookie.value(), "");
    assert_eq!(
        cookie.expires_datetime(),
        Some(time::OffsetDateTime::UNIX_EPOCH)
    );
}

#[actix_web::test]
async fn bootstrap_manager_logs_in_on_sqlite() {
    let state = StateBuilder::new(test_security())
        .with_db("sqlite::memory:")
        .with_bootstrap_manager(Some(BootstrapManager {
            email: "ops@example.com".into(),
            password: "hunter2".into(),
        }))
        .build()
        .await
        .expect("state with bootstrap manager should build");
    let app = admin_app(&state).await;

    let resp = test::call_service(&app, login_request("ops@example.com", "hunter2")).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert!(session_cookie(&resp, "admin_session").is_some());

    let again = state
        .admin
        .managers
        .ensure(portal_backend::services::CreateManager {
            first_name: "Other".into(),
            last_name: "Person".into(),
            email: "OPS@example.com".into(),
            password: "different".into(),
        })
        .await
        .expect("existing email is not an error");
    assert!(!again);
}
