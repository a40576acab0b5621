use axum::extract::{Path, State};
use tracing::instrument;

use crate::server::{AppState, errors::AppError, responses::CrlResponse};
use crate::store::CrlStore;

const CRL_EXTENSION: &str = ".crl";

/// Serves `GET /crls/{ca_name}.crl` as a DER encoded CRL.
#[instrument(skip(state))]
pub async fn get_crl<S: CrlStore>(
    State(state): State<AppState<S>>,
    Path(file_name): Path<String>,
) -> Result<CrlResponse, AppError> {
    let ca_name = match file_name.strip_suffix(CRL_EXTENSION) {
        Some(ca_name) if !ca_name.is_empty() => ca_name,
        _ => return Err(AppError::InvalidPath),
    };
    tracing::info!("Fetching CRL for CA {ca_name}");

    // Request scoped store handle, released on every return path
    let store = state.store.clone();
    let crl = match store.find_crl_by_ca_name(ca_name).await {
        Ok(Some(crl)) => crl,
        Ok(None) => return Err(AppError::CrlNotFound(ca_name.to_string())),
        Err(e) => {
            tracing::error!("Failed to look up CRL for CA {ca_name}: {e}");
            return Err(AppError::CrlNotFound(ca_name.to_string()));
        }
    };

    tracing::info!("Serving CRL for CA {ca_name}");
    let der = crl
        .to_der()
        .map_err(|e| AppError::decode(ca_name, e))?;
    Ok(CrlResponse::new(der))
}
