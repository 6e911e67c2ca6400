//! Minimal HTTP service with operational endpoints.
//!
//! Serves a plain-text greeting on `/` plus liveness (`/health`), readiness
//! (`/ready`) and uptime (`/metrics`) probes as JSON. Unmatched routes and
//! handler failures map to uniform JSON error bodies.
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Process-level error types
//! - [`api`]: Router, handlers and error responses
//! - [`logging`]: Log subscriber setup
//! - [`utils`]: Utility functions

pub mod api;
pub mod config;
pub mod error;
pub mod logging;
pub mod utils;

pub use config::Config;
pub use error::{Result, ServiceError};
