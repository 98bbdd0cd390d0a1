use std::env;

use config::{Config, ConfigError};
use serde::Deserialize;

use crate::upload::filter::RejectionPolicy;

static CONFIG_FILE: &str = "./DeliveryIntake.toml";
static DEFAULT_ADDRESS: &str = "0.0.0.0";
static DEFAULT_PORT: i64 = 5000;
static DEFAULT_UPLOAD_DIR: &str = "uploads";
static DEFAULT_REJECTION_POLICY: &str = "silent-drop";
/// 50 MiB
static DEFAULT_MAX_SIZE_BYTES: i64 = 50 * 1024 * 1024;
static DEFAULT_LOG_LEVEL: &str = "info";

/// config properties for the http listener
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
}

/// config properties for accepting and storing uploaded files
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct UploadConfig {
    pub directory: String,
    #[serde(rename = "rejectionpolicy")]
    pub rejection_policy: RejectionPolicy,
    /// the request body is cut off after this many bytes, which fails the multipart parse
    #[serde(rename = "maxsizebytes")]
    pub max_size_bytes: u64,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct LoggingConfig {
    pub level: String,
}

/// config properties for the whole of this application
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct IntakeConfig {
    pub server: ServerConfig,
    pub upload: UploadConfig,
    pub logging: LoggingConfig,
}

impl Default for IntakeConfig {
    fn default() -> Self {
        IntakeConfig {
            server: ServerConfig {
                address: DEFAULT_ADDRESS.to_string(),
                port: DEFAULT_PORT as u16,
            },
            upload: UploadConfig {
                directory: DEFAULT_UPLOAD_DIR.to_string(),
                rejection_policy: RejectionPolicy::SilentDrop,
                max_size_bytes: DEFAULT_MAX_SIZE_BYTES as u64,
            },
            logging: LoggingConfig {
                level: DEFAULT_LOG_LEVEL.to_string(),
            },
        }
    }
}

/// Parses the config file located at ./DeliveryIntake.toml, if it exists, and layers the `PORT`
/// environment variable on top of it. Anything not set in either place falls back to its default
pub fn parse_config() -> Result<IntakeConfig, ConfigError> {
    build_config(CONFIG_FILE, env::var("PORT").ok())
}

fn build_config(file_name: &str, port: Option<String>) -> Result<IntakeConfig, ConfigError> {
    Config::builder()
        .set_default("server.address", DEFAULT_ADDRESS)?
        .set_default("server.port", DEFAULT_PORT)?
        .set_default("upload.directory", DEFAULT_UPLOAD_DIR)?
        .set_default("upload.rejectionpolicy", DEFAULT_REJECTION_POLICY)?
        .set_default("upload.maxsizebytes", DEFAULT_MAX_SIZE_BYTES)?
        .set_default("logging.level", DEFAULT_LOG_LEVEL)?
        // a missing file is fine, we just run on the defaults
        .add_source(config::File::with_name(file_name).required(false))
        .set_override_option("server.port", port)?
        .build()?
        .try_deserialize()
}
