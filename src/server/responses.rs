use axum::{
    http::{StatusCode, header::CONTENT_TYPE},
    response::{IntoResponse, Response},
};

use crate::crl::PKIX_CRL_CONTENT_TYPE;

/// A DER encoded CRL served as `application/pkix-crl`.
#[derive(Debug)]
pub struct CrlResponse(Vec<u8>);

impl CrlResponse {
    pub fn new(der: Vec<u8>) -> Self {
        Self(der)
    }
}

impl IntoResponse for CrlResponse {
    fn into_response(self) -> Response {
        (
            StatusCode::OK,
            [(CONTENT_TYPE, PKIX_CRL_CONTENT_TYPE)],
            self.0,
        )
            .into_response()
    }
}
