pub mod file;
pub mod memory;
pub mod s3;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use s3::S3Store;

use async_trait::async_trait;
use std::sync::Arc;

use crate::cert::CertBundle;
use crate::config::Settings;
use crate::error::{Error, Result};

/// Storage interface for issued certificates
///
/// Serials are assigned by the issuance engine; stores treat them purely as
/// opaque lookup keys. Reads never return private key material: the key is
/// surfaced to the caller once, at issuance time.
#[async_trait]
pub trait CertStore: Send + Sync {
    /// Persist the certificate keyed by its serial; an existing artifact
    /// under the same serial is overwritten
    async fn write(&self, bundle: &CertBundle) -> Result<()>;

    /// Load the certificate stored under the given serial
    async fn read(&self, serial: i64) -> Result<CertBundle>;

    /// Remove the certificate stored under the given serial
    async fn delete(&self, serial: i64) -> Result<()>;
}

/// Create a certificate store based on configuration
pub fn create_store(config: &Settings) -> Result<Arc<dyn CertStore>> {
    match config.storage.backend.as_str() {
        "file" => Ok(Arc::new(FileStore::new(config.storage.dir.clone())?)),
        "s3" => Ok(Arc::new(S3Store::new(&config.storage)?)),
        "memory" => Ok(Arc::new(MemoryStore::new())),
        other => Err(Error::Config(format!(
            "Unsupported storage backend: {}",
            other
        ))),
    }
}
