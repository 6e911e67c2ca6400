//! HTTP API module: greeting, health, readiness and metrics endpoints.

pub mod error;
pub mod handlers;
pub mod routes;

pub use error::ApiError;
pub use handlers::ServiceState;
pub use routes::create_router;
