use std::env;
use thiserror::Error;

/// Hard upper bound on file parts per upload request.
pub const MAX_FILES: usize = 10;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{key} has an invalid value: {value}")]
    Invalid { key: &'static str, value: String },
}

/// Object store destination and credentials
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// AWS region, e.g. "eu-west-1"
    pub region: String,

    pub access_key_id: String,

    pub secret_access_key: String,

    /// Target bucket; every uploaded file lands at the bucket root
    pub bucket: String,

    /// Custom endpoint for S3-compatible stores (MinIO etc.).
    /// Enables path-style addressing when set.
    pub endpoint: Option<String>,
}

impl StorageConfig {
    /// Load storage settings from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or(ConfigError::Missing(key))
        };

        Ok(Self {
            region: required("AWS_REGION")?,
            access_key_id: required("AWS_ACCESS_KEY_ID")?,
            secret_access_key: required("AWS_SECRET_ACCESS_KEY")?,
            bucket: required("S3_BUCKET")?,
            endpoint: lookup("S3_ENDPOINT").filter(|v| !v.trim().is_empty()),
        })
    }
}

/// Limits and assets for the upload endpoint
#[derive(Debug, Clone)]
pub struct UploadConfig {
    /// Maximum file parts per request (default: 10, never above `MAX_FILES`)
    pub max_files: usize,

    /// Maximum request body size in bytes (default: 100 MB)
    pub max_body_size: usize,

    /// Landing page served at `/` (default: "public/index.html")
    pub index_path: String,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_files: MAX_FILES,
            max_body_size: 100 * 1024 * 1024, // 100 MB
            index_path: "public/index.html".to_string(),
        }
    }
}

impl UploadConfig {
    /// Load upload limits from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let default = Self::default();

        let max_files = match lookup("MAX_FILES") {
            Some(v) => match v.parse::<usize>() {
                Ok(n) if (1..=MAX_FILES).contains(&n) => n,
                _ => {
                    return Err(ConfigError::Invalid {
                        key: "MAX_FILES",
                        value: v,
                    });
                }
            },
            None => default.max_files,
        };

        let max_body_size = match lookup("MAX_BODY_SIZE") {
            Some(v) => v.parse().map_err(|_| ConfigError::Invalid {
                key: "MAX_BODY_SIZE",
                value: v.clone(),
            })?,
            None => default.max_body_size,
        };

        Ok(Self {
            max_files,
            max_body_size,
            index_path: lookup("INDEX_PATH").unwrap_or(default.index_path),
        })
    }
}
