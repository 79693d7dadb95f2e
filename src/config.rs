//! Configuration types.

use secrecy::SecretString;

use crate::error::ConfigError;

/// Hosted model used when FITPLAN_MODEL is not set.
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash-exp";
/// Port used when FITPLAN_PORT is not set.
pub const DEFAULT_PORT: u16 = 8080;

/// Service configuration, read once at startup and passed explicitly to the
/// gateway (the credential never lands in process environment).
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Hosted-model API credential.
    pub api_key: SecretString,
    /// Model id for all three agents.
    pub model: String,
    /// HTTP listen port.
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .or_else(|_| std::env::var("GOOGLE_API_KEY"))
            .map_err(|_| ConfigError::MissingEnvVar("GEMINI_API_KEY".to_string()))?;

        let model = std::env::var("FITPLAN_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let port = match std::env::var("FITPLAN_PORT") {
            Ok(raw) => raw.parse().map_err(|e| ConfigError::InvalidValue {
                key: "FITPLAN_PORT".to_string(),
                message: format!("{}: {}", raw, e),
            })?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            api_key: SecretString::from(api_key),
            model,
            port,
        })
    }
}
