use std::net::SocketAddr;

use axum::{Router, middleware::from_fn};
use sea_orm_migration::MigratorTrait;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use api::auth::middleware::log_request;
use api::routes::routes;
use api::state::AppState;
use migration::Migrator;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let _log_guard = common::logger::init_logging(
        &common::config::log_file(),
        &common::config::log_level(),
    );

    let db = db::connect().await;
    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    let app_state = AppState::new(db);

    let app = Router::new()
        .nest("/api", routes(app_state))
        .layer(from_fn(log_request))
        .layer(CorsLayer::very_permissive());

    let addr: SocketAddr = format!("{}:{}", common::config::host(), common::config::port())
        .parse()
        .expect("Invalid HOST or PORT");

    tracing::info!(
        "Starting {} on http://{}",
        common::config::project_name(),
        addr
    );

    let listener = TcpListener::bind(&addr).await.expect("Failed to bind");
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .expect("Server crashed");
}
