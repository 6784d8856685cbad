use async_trait::async_trait;
use tracing::warn;

use crate::cert::CertBundle;
use crate::config::StorageConfig;
use crate::error::{Error, Result};
use crate::store::CertStore;

/// Object-storage backed store
///
/// Carries the configuration and contract shape for keeping certificates in
/// an S3-style bucket. The remote calls themselves are not implemented:
/// every operation fails with an internal error.
// TODO: wire up an S3 client (e.g. aws-sdk-s3) once remote storage is needed
pub struct S3Store {
    bucket: String,
    #[allow(dead_code)]
    access_key_id: Option<String>,
    #[allow(dead_code)]
    secret_access_key: Option<String>,
}

impl S3Store {
    /// Create an S3 store from storage configuration
    pub fn new(config: &StorageConfig) -> Result<Self> {
        let bucket = config
            .s3_bucket
            .clone()
            .filter(|b| !b.is_empty())
            .ok_or_else(|| {
                Error::Config("S3 bucket must be configured for the s3 backend".into())
            })?;

        warn!(
            "S3 store selected for bucket {}, but the s3 backend is not implemented",
            bucket
        );

        Ok(Self {
            bucket,
            access_key_id: config.s3_access_key_id.clone(),
            secret_access_key: config.s3_secret_access_key.clone(),
        })
    }
}

#[async_trait]
impl CertStore for S3Store {
    async fn write(&self, _bundle: &CertBundle) -> Result<()> {
        Err(Error::Internal(
            "S3 storage backend is not implemented".into(),
        ))
    }

    async fn read(&self, _serial: i64) -> Result<CertBundle> {
        Err(Error::Internal(
            "S3 storage backend is not implemented".into(),
        ))
    }

    async fn delete(&self, _serial: i64) -> Result<()> {
        Err(Error::Internal(
            "S3 storage backend is not implemented".into(),
        ))
    }
}
