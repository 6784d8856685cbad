//! certmint - Self-signed X.509 certificate issuance and storage
//!
//! Issues self-signed certificates on demand and persists them under their
//! serial numbers with swappable storage backends.

// Foundational layer
pub mod config;
pub mod error;
pub mod telemetry;

// Core layer
pub mod cert;
pub mod store;

// Interface layer
pub mod api;

pub use crate::cert::{CertBundle, CertIssuer, CertificateRequest};
pub use crate::error::{Error, Result};
pub use crate::store::CertStore;
