use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;
use tracing::debug;

use crate::cert::CertBundle;
use crate::error::{Error, Result};
use crate::store::CertStore;

/// Stores one PEM file per serial under a flat root directory
///
/// Existence of the per-serial file is the index; there is no manifest.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Create a file store rooted at the given directory, creating it if
    /// it does not exist yet
    pub fn new(root: PathBuf) -> Result<Self> {
        std::fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    fn cert_path(&self, serial: i64) -> PathBuf {
        self.root.join(format!("{}.crt", serial))
    }
}

#[async_trait]
impl CertStore for FileStore {
    async fn write(&self, bundle: &CertBundle) -> Result<()> {
        let path = self.cert_path(bundle.serial);

        // Write to a temp file and rename so a failed write is never
        // observable by a concurrent read of the same serial.
        let tmp = path.with_extension("crt.tmp");
        fs::write(&tmp, bundle.cert_pem.as_bytes()).await?;
        fs::rename(&tmp, &path).await?;

        // The private key is only returned in the issuance response and is
        // not written to disk.
        debug!("Stored certificate {} at {}", bundle.serial, path.display());
        Ok(())
    }

    async fn read(&self, serial: i64) -> Result<CertBundle> {
        let bytes = match fs::read(self.cert_path(serial)).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(Error::NotFound(format!(
                    "No certificate with serial {}",
                    serial
                )));
            }
            Err(e) => return Err(e.into()),
        };

        let cert_pem = String::from_utf8(bytes).map_err(|e| {
            Error::Internal(format!(
                "Stored certificate {} is not valid UTF-8: {}",
                serial, e
            ))
        })?;

        Ok(CertBundle {
            cert_pem,
            key_pem: String::new(),
            serial,
        })
    }

    async fn delete(&self, serial: i64) -> Result<()> {
        match fs::remove_file(self.cert_path(serial)).await {
            Ok(()) => {
                debug!("Deleted certificate {}", serial);
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Err(Error::NotFound(format!(
                "No certificate with serial {}",
                serial
            ))),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn bundle(serial: i64, cert: &str) -> CertBundle {
        CertBundle {
            cert_pem: cert.to_string(),
            key_pem: "dummykey".to_string(),
            serial,
        }
    }

    #[tokio::test]
    async fn test_file_ops() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path().to_path_buf()).unwrap();

        store.write(&bundle(1, "dummydata")).await.unwrap();

        // Confirm the cert was written where expected
        assert!(dir.path().join("1.crt").exists());

        let read_back = store.read(1).await.unwrap();
        assert_eq!(read_back.cert_pem, "dummydata");
        assert_eq!(read_back.serial, 1);

        // Key material is never readable from the store
        assert!(read_back.key_pem.is_empty());

        store.delete(1).await.unwrap();
        assert!(!dir.path().join("1.crt").exists());
    }

    #[tokio::test]
    async fn test_read_missing_serial_is_not_found() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path().to_path_buf()).unwrap();

        let err = store.read(42).await.unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_missing_serial_is_not_found() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path().to_path_buf()).unwrap();

        let err = store.delete(42).await.unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[tokio::test]
    async fn test_deleted_serial_stays_gone() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path().to_path_buf()).unwrap();

        store.write(&bundle(7, "dummydata")).await.unwrap();
        store.delete(7).await.unwrap();

        let err = store.read(7).await.unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[tokio::test]
    async fn test_duplicate_serial_overwrites() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path().to_path_buf()).unwrap();

        store.write(&bundle(9, "first")).await.unwrap();
        store.write(&bundle(9, "second")).await.unwrap();

        let read_back = store.read(9).await.unwrap();
        assert_eq!(read_back.cert_pem, "second");

        // No temp files left behind
        assert!(!dir.path().join("9.crt.tmp").exists());
    }

    #[tokio::test]
    async fn test_distinct_serials_do_not_interfere() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path().to_path_buf()).unwrap();

        store.write(&bundle(1, "one")).await.unwrap();
        store.write(&bundle(2, "two")).await.unwrap();
        store.delete(1).await.unwrap();

        let read_back = store.read(2).await.unwrap();
        assert_eq!(read_back.cert_pem, "two");
    }
}
