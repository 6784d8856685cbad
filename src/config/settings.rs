use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{Error, Result};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// General configuration
    #[serde(default)]
    pub general: GeneralConfig,

    /// API server configuration
    #[serde(default)]
    pub api: ApiConfig,

    /// Certificate storage configuration
    #[serde(default)]
    pub storage: StorageConfig,
}

/// General configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Application name
    pub app_name: String,

    /// Log level
    pub log_level: String,

    /// Emit logs as JSON
    pub structured_logging: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            app_name: "certmint".to_string(),
            log_level: "info".to_string(),
            structured_logging: true,
        }
    }
}

/// API server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// API listen address
    pub listen_addr: String,

    /// API listen port
    pub listen_port: u16,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0".to_string(),
            listen_port: 8080,
        }
    }
}

/// Certificate storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Storage backend (file, s3, memory)
    pub backend: String,

    /// Root directory for the file backend
    pub dir: PathBuf,

    /// Bucket name for the s3 backend
    pub s3_bucket: Option<String>,

    /// Access key ID for the s3 backend
    pub s3_access_key_id: Option<String>,

    /// Secret access key for the s3 backend
    pub s3_secret_access_key: Option<String>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: "file".to_string(),
            dir: PathBuf::from("./data/certs"),
            s3_bucket: None,
            s3_access_key_id: None,
            s3_secret_access_key: None,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            api: ApiConfig::default(),
            storage: StorageConfig::default(),
        }
    }
}

impl Settings {
    /// Load configuration from environment variables and configuration files
    pub fn load() -> Result<Self> {
        use config::{Config, Environment, File};
        use std::env;

        let mut builder = Config::builder();

        // Add default values
        builder = builder.add_source(Config::try_from(&Self::default())?);

        // Add configuration from files
        if let Ok(config_path) = env::var("CONFIG_FILE") {
            builder = builder.add_source(File::with_name(&config_path));
        } else {
            builder = builder.add_source(File::with_name("config/default").required(false));

            let env = env::var("APP_ENV").unwrap_or_else(|_| "development".into());
            builder = builder.add_source(File::with_name(&format!("config/{}", env)).required(false));
        }

        // Add environment variables
        builder = builder.add_source(Environment::with_prefix("CERTMINT").separator("__"));

        // Build and convert
        let config = builder.build()?;
        let settings: Settings = config.try_deserialize()?;

        settings.validate()?;
        Ok(settings)
    }

    /// Get API address string
    pub fn api_address(&self) -> String {
        format!("{}:{}", self.api.listen_addr, self.api.listen_port)
    }

    /// Check if configuration is valid
    pub fn validate(&self) -> Result<()> {
        match self.storage.backend.as_str() {
            "file" => {
                if self.storage.dir.as_os_str().is_empty() {
                    return Err(Error::Config(
                        "Storage directory cannot be empty for the file backend".into(),
                    ));
                }
            }
            "s3" => {
                if self.storage.s3_bucket.as_deref().unwrap_or("").is_empty() {
                    return Err(Error::Config(
                        "S3 bucket must be configured for the s3 backend".into(),
                    ));
                }
            }
            "memory" => {}
            other => {
                return Err(Error::Config(format!(
                    "Unsupported storage backend: {}",
                    other
                )));
            }
        }

        Ok(())
    }
}
