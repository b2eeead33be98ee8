use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_MEDIA_ROOT: &str = "media";
const DEFAULT_APP_HOST: &str = "0.0.0.0";
const DEFAULT_APP_PORT: u16 = 8080;

pub struct Config {
    pub database_url: String,
    pub media_root: String,
    pub app_host: String,
    pub app_port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            media_root: std::env::var("MEDIA_ROOT")
                .unwrap_or_else(|_| DEFAULT_MEDIA_ROOT.to_string()),
            app_host: std::env::var("APP_HOST").unwrap_or_else(|_| DEFAULT_APP_HOST.to_string()),
            app_port: match std::env::var("APP_PORT") {
                Ok(value) => value
                    .parse()
                    .map_err(|_| ConfigError::InvalidEnvVar("APP_PORT".to_string()))?,
                Err(_) => DEFAULT_APP_PORT,
            },
        })
    }
}
