use config::{Config, ConfigError, File};
use serde::Deserialize;

use super::Environment;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub gateway: GatewaySettings,
    pub extraction: ExtractionSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    /// Browser origins allowed by CORS. Empty means any origin.
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GatewaySettings {
    pub base_url: String,
    pub default_model: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExtractionSettings {
    pub max_pdf_size_mb: usize,
    pub fetch_timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub json: bool,
    pub filter: String,
}

impl ExtractionSettings {
    pub fn max_pdf_size_bytes(&self) -> usize {
        self.max_pdf_size_mb * 1024 * 1024
    }
}

impl Settings {
    /// Layers built-in defaults, `appsettings.{env}.toml` (optional) and
    /// `APP_`-prefixed environment variables such as `APP_GATEWAY__BASE_URL`.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("server.allowed_origins", Vec::<String>::new())?
            .set_default("gateway.base_url", "http://localhost:11434/api")?
            .set_default("gateway.default_model", "qwen2.5-coder:32b")?
            .set_default("gateway.timeout_secs", 300)?
            .set_default("extraction.max_pdf_size_mb", 20)?
            .set_default("extraction.fetch_timeout_secs", 20)?
            .set_default("logging.json", false)?
            .set_default("logging.filter", "info,chatbridge=debug,tower_http=debug")?
            .add_source(
                File::with_name(&format!("appsettings.{}", environment.as_str())).required(false),
            )
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("server.allowed_origins")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}
