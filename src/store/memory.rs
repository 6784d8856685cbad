use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::cert::CertBundle;
use crate::error::{Error, Result};
use crate::store::CertStore;

/// In-memory store for tests and ephemeral deployments
///
/// Mirrors the file store's contract, including dropping private key
/// material on write.
#[derive(Default)]
pub struct MemoryStore {
    certs: Mutex<HashMap<i64, String>>,
}

impl MemoryStore {
    /// Create an empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CertStore for MemoryStore {
    async fn write(&self, bundle: &CertBundle) -> Result<()> {
        let mut certs = self.certs.lock().unwrap();
        certs.insert(bundle.serial, bundle.cert_pem.clone());
        Ok(())
    }

    async fn read(&self, serial: i64) -> Result<CertBundle> {
        let certs = self.certs.lock().unwrap();
        let cert_pem = certs
            .get(&serial)
            .cloned()
            .ok_or_else(|| Error::NotFound(format!("No certificate with serial {}", serial)))?;

        Ok(CertBundle {
            cert_pem,
            key_pem: String::new(),
            serial,
        })
    }

    async fn delete(&self, serial: i64) -> Result<()> {
        let mut certs = self.certs.lock().unwrap();
        certs
            .remove(&serial)
            .map(|_| ())
            .ok_or_else(|| Error::NotFound(format!("No certificate with serial {}", serial)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bundle(serial: i64) -> CertBundle {
        CertBundle {
            cert_pem: "dummydata".to_string(),
            key_pem: "dummykey".to_string(),
            serial,
        }
    }

    #[tokio::test]
    async fn test_memory_round_trip() {
        let store = MemoryStore::new();

        store.write(&bundle(1)).await.unwrap();

        let read_back = store.read(1).await.unwrap();
        assert_eq!(read_back.cert_pem, "dummydata");
        assert_eq!(read_back.serial, 1);
        assert!(read_back.key_pem.is_empty());

        store.delete(1).await.unwrap();
        assert!(matches!(
            store.read(1).await.unwrap_err(),
            Error::NotFound(_)
        ));
    }

    #[tokio::test]
    async fn test_memory_missing_serial_is_not_found() {
        let store = MemoryStore::new();

        assert!(matches!(
            store.read(5).await.unwrap_err(),
            Error::NotFound(_)
        ));
        assert!(matches!(
            store.delete(5).await.unwrap_err(),
            Error::NotFound(_)
        ));
    }
}
