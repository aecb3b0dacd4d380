//! Request logging middleware.

use axum::{body::Body, http::Request, middleware::Next, response::Response};
use tracing::info;

/// Logs receipt and completion of every request.
pub async fn log_request(request: Request<Body>, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    info!("request received: {} {}", method, path);
    let response = next.run(request).await;
    info!(
        "request completed: {} {} -> {}",
        method,
        path,
        response.status()
    );

    response
}
