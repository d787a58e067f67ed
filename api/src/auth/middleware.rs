use std::net::SocketAddr;

use axum::{
    body::Body,
    extract::ConnectInfo,
    http::Request,
    middleware::Next,
    response::Response,
};

/// Logs every request with method, path, status and caller identity when a
/// token is present. Applied as an outermost layer so it also sees
/// responses produced by the guards.
pub async fn log_request(req: Request<Body>, next: Next) -> Response {
    let method = req.method().clone();
    let uri = req.uri().clone();
    let addr = req
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(a)| a.to_string())
        .unwrap_or_else(|| "unknown".to_string());

    let started = std::time::Instant::now();
    let response = next.run(req).await;
    let elapsed = started.elapsed();

    tracing::info!(
        target: "api::request",
        "{} {} -> {} ({} ms) from {}",
        method,
        uri,
        response.status(),
        elapsed.as_millis(),
        addr
    );

    response
}
