// Console API: phone login, profile and profile updates.

use actix_web::http::{header, StatusCode};
use actix_web::test;
use portal_test_support::problem_details::assert_problem_details;
use portal_test_support::unique_helpers::unique_phone;
use serde_json::{json, Value};

use crate::common::{console_app, memory_state, sqlite_state};

async fn login<S>(app: &S, phone: &str) -> String
where
    S: actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    >,
{
    let req = test::TestRequest::post()
        .uri("/api/v0/auth/login")
        .set_json(json!({ "phone": phone, "token": "123456" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(app, req).await;
    body["token"].as_str().expect("token in body").to_string()
}

#[actix_web::test]
async fn same_phone_logs_into_same_client() {
    let state = sqlite_state().await;
    let app = console_app(&state).await;

    let first = login(&app, "555-0100").await;
    let second = login(&app, "555-0100").await;

    let mut ids = Vec::new();
    for token in [&first, &second] {
        let req = test::TestRequest::get()
            .uri("/api/v0/clients/me")
            .insert_header((header::AUTHORIZATION, format!("Bearer {token}")))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["phone"], "555-0100");
        ids.push(body["id"].as_str().unwrap().to_string());
    }
    assert_eq!(ids[0], ids[1]);
}

#[actix_web::test]
async fn bare_token_header_is_accepted() {
    let state = memory_state().await;
    let app = console_app(&state).await;
    let token = login(&app, &unique_phone()).await;

    let req = test::TestRequest::get()
        .uri("/api/v0/clients/me")
        .insert_header((header::AUTHORIZATION, token))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
}

#[actix_web::test]
async fn missing_header_is_unauthorized() {
    let state = memory_state().await;
    let app = console_app(&state).await;

    let req = test::TestRequest::get().uri("/api/v0/clients/me").to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details(resp, "UNAUTHORIZED", StatusCode::UNAUTHORIZED, None).await;
}

#[actix_web::test]
async fn login_body_is_validated() {
    let state = memory_state().await;
    let app = console_app(&state).await;

    let blank = test::TestRequest::post()
        .uri("/api/v0/auth/login")
        .set_json(json!({ "phone": "  ", "token": "1" }))
        .to_request();
    let resp = test::call_service(&app, blank).await;
    assert_problem_details(resp, "VALIDATION_ERROR", StatusCode::BAD_REQUEST, Some("phone")).await;

    let broken = test::TestRequest::post()
        .uri("/api/v0/auth/login")
        .insert_header((header::CONTENT_TYPE, "application/json"))
        .set_payload("{\"phone\":")
        .to_request();
    let resp = test::call_service(&app, broken).await;
    assert_problem_details(resp, "BAD_REQUEST", StatusCode::BAD_REQUEST, Some("Invalid JSON")).await;
}

#[actix_web::test]
async fn update_profile() {
    let state = sqlite_state().await;
    let app = console_app(&state).await;
    let token = login(&app, "555-0111").await;

    let req = test::TestRequest::patch()
        .uri("/api/v0/clients")
        .insert_header((header::AUTHORIZATION, format!("Bearer {token}")))
        .set_json(json!({ "firstName": "Grace", "email": "Grace@Example.com" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["firstName"], "Grace");
    assert_eq!(body["email"], "Grace@Example.com");
    assert_eq!(body["phone"], "555-0111");

    let req = test::TestRequest::get()
        .uri("/api/v0/clients/me")
        .insert_header((header::AUTHORIZATION, format!("Bearer {token}")))
        .to_request();
    let me: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(me, body);
}

#[actix_web::test]
async fn update_to_taken_phone_conflicts() {
    let state = sqlite_state().await;
    let app = console_app(&state).await;
    login(&app, "555-0001").await;
    let token = login(&app, "555-0002").await;

    let req = test::TestRequest::patch()
        .uri("/api/v0/clients")
        .insert_header((header::AUTHORIZATION, format!("Bearer {token}")))
        .set_json(json!({ "phone": "555-0001" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details(resp, "UNIQUE_PHONE", StatusCode::CONFLICT, None).await;
}
