use crate::error::AppError;
use serde::Deserialize;
use std::env;

/// Default preference order: most capable/cheapest first.
const DEFAULT_PREFERRED_MODELS: &str =
    "models/gemini-1.5-flash-latest,models/gemini-1.5-pro,models/gemini-1.0-pro";

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub gemini: GeminiSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeminiSettings {
    /// Empty when `GEMINI_API_KEY` is unset; the service still starts and
    /// serves pages, with generation disabled.
    pub api_key: String,

    /// Ordered model preference list for the startup resolver.
    pub preferred_models: Vec<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self, AppError> {
        let port = get_env("APP_PORT", "8080")
            .parse::<u16>()
            .map_err(|e| AppError::ConfigError(anyhow::anyhow!("invalid APP_PORT: {}", e)))?;

        let preferred_models = get_env("GEMINI_PREFERRED_MODELS", DEFAULT_PREFERRED_MODELS)
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>();

        if preferred_models.is_empty() {
            return Err(AppError::ConfigError(anyhow::anyhow!(
                "GEMINI_PREFERRED_MODELS must name at least one model"
            )));
        }

        Ok(AppConfig {
            server: ServerConfig {
                host: get_env("APP_HOST", "0.0.0.0"),
                port,
            },
            gemini: GeminiSettings {
                api_key: env::var("GEMINI_API_KEY").unwrap_or_default(),
                preferred_models,
            },
        })
    }
}

fn get_env(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
