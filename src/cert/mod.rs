pub mod issuer;
pub mod types;

pub use issuer::CertIssuer;
pub use types::{CertBundle, CertificateRequest};
