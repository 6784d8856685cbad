use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::cert::CertBundle;
use crate::store::CertStore;

/// Shared state available to API handlers
#[derive(Clone)]
pub struct ApiState {
    /// Certificate store selected at startup
    pub store: Arc<dyn CertStore>,
}

/// Certificate payload returned by the API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CertificateResponse {
    /// PEM-armored certificate
    pub cert: String,

    /// PEM-armored private key, present only in issuance responses
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    /// Serial number identifying the certificate in the store
    pub serial: i64,
}

impl From<CertBundle> for CertificateResponse {
    fn from(bundle: CertBundle) -> Self {
        let key = if bundle.key_pem.is_empty() {
            None
        } else {
            Some(bundle.key_pem)
        };

        Self {
            cert: bundle.cert_pem,
            key,
            serial: bundle.serial,
        }
    }
}

/// Health probe payload
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Current service status
    pub status: String,
    /// Service version
    pub version: String,
}
