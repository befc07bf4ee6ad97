// Tokens minted on one boundary are never accepted by the other.

use actix_web::cookie::Cookie;
use actix_web::http::{header, StatusCode};
use actix_web::test;
use portal_test_support::problem_details::assert_problem_details;
use serde_json::{json, Value};

use crate::common::{admin_app, console_app, memory_state, seed_manager, session_cookie};

#[actix_web::test]
async fn admin_cookie_token_is_rejected_by_console() {
    let state = memory_state().await;
    seed_manager(&state, "a@x.com", "secret").await;
    let admin = admin_app(&state).await;
    let console = console_app(&state).await;

    let req = test::TestRequest::post()
        .uri("/login")
        .set_form([("email", "a@x.com"), ("password", "secret")])
        .to_request();
    let resp = test::call_service(&admin, req).await;
    let cookie = session_cookie(&resp, "admin_session").unwrap();

    let req = test::TestRequest::get()
        .uri("/api/v0/clients/me")
        .insert_header((header::AUTHORIZATION, format!("Bearer {}", cookie.value())))
        .to_request();
    let resp = test::call_service(&console, req).await;
    assert_problem_details(resp, "UNAUTHORIZED", StatusCode::UNAUTHORIZED, None).await;
}

#[actix_web::test]
async fn console_token_is_rejected_by_admin() {
    let state = memory_state().await;
    let admin = admin_app(&state).await;
    let console = console_app(&state).await;

    let req = test::TestRequest::post()
        .uri("/api/v0/auth/login")
        .set_json(json!({ "phone": "555-0100", "token": "1" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&console, req).await;
    let token = body["token"].as_str().unwrap().to_string();

    let req = test::TestRequest::get()
        .uri("/session")
        .cookie(Cookie::new("admin_session", token))
        .to_request();
    let resp = test::call_service(&admin, req).await;
    assert_problem_details(resp, "UNAUTHORIZED", StatusCode::UNAUTHORIZED, None).await;
}
