use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};

/// Logs every request once its response is ready.
pub(crate) async fn log(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let start = Instant::now();

    tracing::debug!("Requested {method} {path}");

    let response = next.run(request).await;

    tracing::info!(
        method = %method,
        path = %path,
        status = response.status().as_u16(),
        duration_ms = start.elapsed().as_millis(),
        "Responded {method} {path} {}",
        response.status()
    );

    response
}
