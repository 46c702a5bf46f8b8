use std::path::PathBuf;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

pub struct Config {
    pub database_url: String,
    pub bind_address: String,

    pub aws_region: String,
    pub aws_bucket_name: String,
    /// Base URL that uploaded object keys are appended to. Derived from the bucket
    /// and region when `AWS_PUBLIC_URL` is not set.
    pub aws_public_url: String,
    /// Directory uploads are staged in before being sent to the bucket. The system
    /// temporary directory when `UPLOAD_TEMP_DIR` is not set.
    pub upload_temp_dir: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |name: &str| -> Result<String, ConfigError> {
            lookup(name)
                .filter(|value| !value.is_empty())
                .ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };

        let aws_region = require("AWS_REGION")?;
        let aws_bucket_name = require("AWS_BUCKET_NAME")?;

        let aws_public_url = match lookup("AWS_PUBLIC_URL").filter(|value| !value.is_empty()) {
            Some(url) if url.starts_with("http://") || url.starts_with("https://") => {
                url.trim_end_matches('/').to_string()
            }
            Some(url) => {
                return Err(ConfigError::InvalidValue {
                    name: "AWS_PUBLIC_URL".to_string(),
                    reason: format!("'{}' is not an http(s) URL", url),
                }
                .into())
            }
            None => format!("https://{}.s3.{}.amazonaws.com", aws_bucket_name, aws_region),
        };

        Ok(Self {
            database_url: require("DATABASE_URL")?,
            bind_address: lookup("BIND_ADDRESS")
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            aws_region,
            aws_bucket_name,
            aws_public_url,
            upload_temp_dir: lookup("UPLOAD_TEMP_DIR")
                .filter(|value| !value.is_empty())
                .map(PathBuf::from),
        })
    }
}
