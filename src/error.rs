//! Error types for FitPlan.

/// Top-level error type for the service.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Agent error: {0}")]
    Agent(#[from] AgentError),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Profile validation errors. These halt the flow before any model call.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ValidationError {
    #[error("Required fields missing or zero: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("{field} out of range: {value} (allowed {min}-{max})")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

/// Errors from the hosted-model gateway. Surfaced to the user, never retried.
#[derive(Debug, thiserror::Error)]
pub enum AgentError {
    #[error("Agent {agent} request failed: {reason}")]
    RequestFailed { agent: String, reason: String },

    #[error("Agent {agent} returned an empty response")]
    EmptyResponse { agent: String },
}

/// Result type alias for the service.
pub type Result<T> = std::result::Result<T, Error>;
