use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::crl::DecodeError;

#[derive(Error, Debug)]
pub enum AppError {
    /// The request path does not name a `.crl` resource.
    #[error("Not Found")]
    InvalidPath,

    #[error("Could not find CRL for CA {0}")]
    CrlNotFound(String),

    #[error("Error while decoding CRL for {ca_name} to DER format: {source}")]
    Decode {
        ca_name: String,
        #[source]
        source: DecodeError,
    },
}

impl AppError {
    pub fn decode(ca_name: impl Into<String>, source: DecodeError) -> Self {
        AppError::Decode {
            ca_name: ca_name.into(),
            source,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidPath | AppError::CrlNotFound(_) => StatusCode::NOT_FOUND,
            AppError::Decode { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match &self {
            AppError::InvalidPath => tracing::warn!("Request path does not name a CRL"),
            AppError::CrlNotFound(_) => tracing::warn!("{self}"),
            AppError::Decode { .. } => tracing::error!("{self}"),
        }
        (status, self.to_string()).into_response()
    }
}
