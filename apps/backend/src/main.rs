use actix_web::{web, App, HttpServer};
use portal_backend::config::AppConfig;
use portal_backend::middleware::RequestSpan;
use portal_backend::routes;
use portal_backend::{telemetry, StateBuilder};
use tracing::{error, info};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = telemetry::init_tracing() {
        eprintln!("{e}");
    }

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    let state = match StateBuilder::new(config.security.clone())
        .with_db(config.database_url.clone())
        .with_bootstrap_manager(config.bootstrap_manager.clone())
        .build()
        .await
    {
        Ok(state) => state,
        Err(e) => {
            error!(error = %e, "failed to build application state");
            std::process::exit(1);
        }
    };

    let db = state.db().cloned().map(web::Data::new);
    let admin = web::Data::new(state.admin.clone());
    let console = web::Data::new(state.console.clone());

    let admin_db = db.clone();
    let admin_server = HttpServer::new(move || {
        let mut app = App::new().wrap(RequestSpan).app_data(admin.clone());
        if let Some(db) = &admin_db {
            app = app.app_data(db.clone());
        }
        app.configure(routes::configure_admin)
    })
    .bind((config.admin_bind.host.as_str(), config.admin_bind.port))?
    .run();

    let console_server = HttpServer::new(move || {
        let mut app = App::new().wrap(RequestSpan).app_data(console.clone());
        if let Some(db) = &db {
            app = app.app_data(db.clone());
        }
        app.configure(routes::configure_console)
    })
    .bind((config.console_bind.host.as_str(), config.console_bind.port))?
    .run();

    info!(admin = %config.admin_bind, console = %config.console_bind, "servers listening");

    // each server handles SIGINT/SIGTERM itself; an error from either ends the process
    tokio::try_join!(admin_server, console_server)?;
    Ok(())
}
