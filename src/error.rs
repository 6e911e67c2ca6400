//! Unified error types for the service process.

use thiserror::Error;

/// Errors that stop the service from starting or keep it from serving.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Configuration loaded but holds unusable values.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_convert_with_context() {
        let err: ServiceError =
            std::io::Error::new(std::io::ErrorKind::AddrInUse, "port taken").into();

        assert!(matches!(err, ServiceError::Io(_)));
        assert_eq!(err.to_string(), "io error: port taken");
    }

    #[test]
    fn invalid_config_displays_reason() {
        let err = ServiceError::InvalidConfig("PORT must be between 1 and 65535".to_string());
        assert_eq!(
            err.to_string(),
            "invalid configuration: PORT must be between 1 and 65535"
        );
    }
}
