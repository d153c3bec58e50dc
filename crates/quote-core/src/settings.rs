use crate::error::GenerateError;
use crate::quote::Quote;
use crate::theme::ThemeVariant;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const CONFIG_FILE: &str = "quote-widget.toml";
pub const ENV_PREFIX: &str = "QUOTE_WIDGET_";

const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
const DEFAULT_API_KEY_ENV: &str = "GEMINI_API_KEY";

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    pub theme: ThemeVariant,
    pub api_base: String,
    pub model: String,
    /// Name of the environment variable holding the API key. The key itself
    /// never lives in the config file.
    pub api_key_env: String,
    /// Unset means no timeout beyond what the transport enforces.
    pub request_timeout_secs: Option<u64>,
    pub log_level: String,
    pub log_file: String,
    /// Replaces the built-in quote list when non-empty.
    pub quotes: Vec<Quote>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: ThemeVariant::default(),
            api_base: DEFAULT_API_BASE.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            request_timeout_secs: None,
            log_level: "info".to_string(),
            log_file: "quote-widget.log".to_string(),
            quotes: Vec::new(),
        }
    }
}

impl Settings {
    /// Load from `quote-widget.toml` in the working directory, then
    /// `QUOTE_WIDGET_*` environment variables.
    pub fn new() -> Result<Self, Box<figment::Error>> {
        Self::load(Path::new(CONFIG_FILE))
    }

    pub fn load(config_path: &Path) -> Result<Self, Box<figment::Error>> {
        Self::from_figment(Self::figment(config_path))
    }

    /// Defaults < TOML file < environment.
    pub fn figment(config_path: &Path) -> Figment {
        Figment::new()
            .merge(Serialized::defaults(Settings::default()))
            .merge(Toml::file(config_path))
            .merge(Env::prefixed(ENV_PREFIX))
    }

    pub fn from_figment(figment: Figment) -> Result<Self, Box<figment::Error>> {
        figment.extract().map_err(Box::new)
    }

    /// Read the API key from the configured environment variable. Called on
    /// every request so a key exported after startup is picked up.
    pub fn api_key(&self) -> Result<String, GenerateError> {
        match std::env::var(&self.api_key_env) {
            Ok(key) if !key.trim().is_empty() => Ok(key),
            _ => Err(GenerateError::MissingCredential {
                var: self.api_key_env.clone(),
            }),
        }
    }
}
