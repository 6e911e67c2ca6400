//! HTTP API route definitions.

use axum::{
    http::{header, HeaderName},
    middleware,
    response::Response,
    routing::get,
    Router,
};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use super::error::panic_response;
use super::handlers::{health, home, metrics, not_found, ready, ServiceState};

static X_POWERED_BY: HeaderName = HeaderName::from_static("x-powered-by");

/// Create the API router.
pub fn create_router(state: ServiceState) -> Router {
    let router = Router::new()
        .route("/", get(home))
        // Health endpoints
        .route("/health", get(health))
        .route("/ready", get(ready))
        .route("/metrics", get(metrics))
        .fallback(not_found)
        .with_state(state);

    with_service_layers(router)
}

/// Wrap a router in the layers every response passes through.
fn with_service_layers(router: Router) -> Router {
    router
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(middleware::map_response(scrub_headers))
        .layer(TraceLayer::new_for_http())
}

/// Strip headers that identify the server software.
async fn scrub_headers(mut response: Response) -> Response {
    let headers = response.headers_mut();
    headers.remove(header::SERVER);
    headers.remove(&X_POWERED_BY);
    response
}
