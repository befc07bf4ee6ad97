use actix_web::http::{header, StatusCode};
use actix_web::test;
use portal_test_support::problem_details::assert_problem_details;

use crate::common::{admin_app, console_app, memory_state};

#[actix_web::test]
async fn problem_trace_id_matches_request_id() {
    let state = memory_state().await;
    let app = admin_app(&state).await;

    let req = test::TestRequest::get().uri("/session").to_request();
    let resp = test::call_service(&app, req).await;
    let request_id = resp
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned)
        .expect("x-request-id header");

    let problem = assert_problem_details(resp, "UNAUTHORIZED", StatusCode::UNAUTHORIZED, None).await;
    assert_eq!(problem.trace_id, request_id);
    assert_eq!(problem.title, "Unauthorized");
    assert!(problem.type_.ends_with("/UNAUTHORIZED"));
}

#[actix_web::test]
async fn each_request_gets_its_own_trace_id() {
    let state = memory_state().await;
    let app = console_app(&state).await;

    let mut ids = Vec::new();
    for _ in 0..2 {
        let req = test::TestRequest::get().uri("/api/v0/clients/me").to_request();
        let resp = test::call_service(&app, req).await;
        let problem =
            assert_problem_details(resp, "UNAUTHORIZED", StatusCode::UNAUTHORIZED, None).await;
        ids.push(problem.trace_id);
    }
    assert_ne!(ids[0], ids[1]);
    assert_ne!(ids[0], "unknown");
}

#[actix_web::test]
async fn malformed_form_is_problem_details() {
    let state = memory_state().await;
    let app = admin_app(&state).await;

    let req = test::TestRequest::post()
        .uri("/login")
        .insert_header((header::CONTENT_TYPE, "application/x-www-form-urlencoded"))
        .set_payload("email=a%40x.com")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details(resp, "BAD_REQUEST", StatusCode::BAD_REQUEST, Some("form")).await;
}

#[actix_web::test]
async fn unknown_update_fields_are_rejected() {
    let state = memory_state().await;
    let app = console_app(&state).await;

    let req = test::TestRequest::post()
        .uri("/api/v0/auth/login")
        .set_json(serde_json::json!({ "phone": "555-0100", "token": "1" }))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    let token = body["token"].as_str().unwrap().to_string();

    let req = test::TestRequest::patch()
        .uri("/api/v0/clients")
        .insert_header((header::AUTHORIZATION, format!("Bearer {token}")))
        .set_json(serde_json::json!({ "nickname": "x" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details(resp, "BAD_REQUEST", StatusCode::BAD_REQUEST, Some("Invalid JSON")).await;
}
