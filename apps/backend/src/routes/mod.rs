use actix_web::{web, HttpResponse};

use crate::error::AppError;

pub mod admin;
pub mod console;
pub mod health;

/// Routes of the admin portal server.
///
/// Expects `web::Data<AdminState>` to be registered on the app.
pub fn configure_admin(cfg: &mut web::ServiceConfig) {
    cfg.app_data(form_config())
        .configure(health::configure_routes)
        .configure(admin::configure_routes);
}

/// Routes of the console API server.
///
/// Expects `web::Data<ConsoleState>` to be registered on the app.
pub fn configure_console(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::configure_routes)
        .service(web::scope("/api/v0").configure(console::configure_routes));
}

/// Form bodies that fail to parse become Problem Details like every other error.
fn form_config() -> web::FormConfig {
    web::FormConfig::default()
        .limit(16 * 1024)
        .error_handler(|err, _req| {
            tracing::debug!(error = %err, "form parsing failed");
            AppError::bad_request("BAD_REQUEST", "Invalid form body").into()
        })
}

/// 303 redirect, used after form posts.
pub(crate) fn see_other(location: &str) -> actix_web::HttpResponseBuilder {
    let mut builder = HttpResponse::SeeOther();
    builder.insert_header((actix_web::http::header::LOCATION, location.to_string()));
    builder
}
