use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::info;

use crate::api::errors::ApiError;
use crate::api::types::{ApiState, CertificateResponse};
use crate::cert::{CertIssuer, CertificateRequest};

/// Issue a new self-signed certificate and persist it
///
/// # Route
///
/// `POST /certificates`
pub async fn create_certificate(
    State(state): State<ApiState>,
    Json(request): Json<CertificateRequest>,
) -> Result<(StatusCode, Json<CertificateResponse>), ApiError> {
    let bundle = CertIssuer::generate_self_signed(&request)?;
    state.store.write(&bundle).await?;

    info!("Issued certificate {} for {:?}", bundle.serial, request.names);
    Ok((StatusCode::CREATED, Json(bundle.into())))
}

/// Fetch a stored certificate by serial
///
/// The private key is not part of the response: it is only returned once,
/// by the issuing call.
///
/// # Route
///
/// `GET /certificates/:serial`
pub async fn fetch_certificate(
    State(state): State<ApiState>,
    Path(serial): Path<i64>,
) -> Result<Json<CertificateResponse>, ApiError> {
    let bundle = state.store.read(serial).await?;
    Ok(Json(bundle.into()))
}

/// Delete a stored certificate by serial
///
/// # Route
///
/// `DELETE /certificates/:serial`
pub async fn remove_certificate(
    State(state): State<ApiState>,
    Path(serial): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.store.delete(serial).await?;

    info!("Deleted certificate {}", serial);
    Ok(StatusCode::ACCEPTED)
}
