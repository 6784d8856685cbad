use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Certificate issuance request
///
/// Filled in by callers and handed to [`crate::cert::CertIssuer`]. Optional
/// subject fields that are absent or empty are omitted from the issued
/// certificate's subject.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CertificateRequest {
    /// DNS subject alternative names, at least one required
    pub names: Vec<String>,

    /// Start of the validity window, defaults to now
    #[serde(default)]
    pub valid_from: Option<DateTime<Utc>>,

    /// End of the validity window, defaults to now + 30 days
    #[serde(default)]
    pub valid_to: Option<DateTime<Utc>>,

    /// Issue a CA certificate
    #[serde(default)]
    pub is_ca: bool,

    /// Organization (O), defaults to "Acme Inc"
    #[serde(default)]
    pub organization_name: Option<String>,

    /// Country (C)
    #[serde(default)]
    pub country_name: Option<String>,

    /// State or province (ST)
    #[serde(default)]
    pub state_name: Option<String>,

    /// Locality (L)
    #[serde(default)]
    pub locality_name: Option<String>,

    /// Organizational unit (OU)
    #[serde(default)]
    pub organizational_unit: Option<String>,

    /// Common name (CN), defaults to the first DNS name
    #[serde(default)]
    pub common_name: Option<String>,

    /// Email address, added to the SAN section
    #[serde(default)]
    pub email_address: Option<String>,
}

/// PEM material for an issued certificate and its private key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertBundle {
    /// PEM-armored signed certificate
    pub cert_pem: String,

    /// PEM-armored private key, only populated at issuance time
    pub key_pem: String,

    /// Serial number assigned by the issuer, used as the storage key
    pub serial: i64,
}
