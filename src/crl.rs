//! CRL records and the PEM to DER decoder.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const PEM_HEADER: &str = "-----BEGIN X509 CRL-----";
pub const PEM_FOOTER: &str = "-----END X509 CRL-----";

/// Media type for DER encoded CRLs (RFC 5280, section 4.2.1.13)
pub const PKIX_CRL_CONTENT_TYPE: &str = "application/pkix-crl";

/// A CRL as published by the issuing CA, keyed by the CA name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Crl {
    pub ca_name: String,
    pub crl_pem: String,
}

impl Crl {
    pub fn new(ca_name: impl Into<String>, crl_pem: impl Into<String>) -> Self {
        Self {
            ca_name: ca_name.into(),
            crl_pem: crl_pem.into(),
        }
    }

    /// Decodes the stored PEM into DER bytes.
    pub fn to_der(&self) -> Result<Vec<u8>, DecodeError> {
        decode_crl(&self.crl_pem)
    }
}

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("missing `-----BEGIN X509 CRL-----` line")]
    MissingHeader,

    #[error("missing `-----END X509 CRL-----` line")]
    MissingFooter,

    #[error("unexpected content outside of the PEM armor")]
    UnexpectedContent,

    #[error("invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),
}

/// Strips the `X509 CRL` armor from `pem` and base64 decodes the body.
///
/// The header and footer must each sit on a line of their own. Line breaks
/// inside the armor are ignored, so wrapped bodies and CRLF line endings are
/// accepted. Only whitespace may appear outside the armor.
pub fn decode_crl(pem: &str) -> Result<Vec<u8>, DecodeError> {
    let start = pem.find(PEM_HEADER).ok_or(DecodeError::MissingHeader)?;
    let (leading, rest) = pem.split_at(start);
    let rest = &rest[PEM_HEADER.len()..];
    let rest = strip_line_break(rest).ok_or(DecodeError::MissingHeader)?;

    let end = if rest.starts_with(PEM_FOOTER) {
        0
    } else {
        rest.find(&format!("\n{PEM_FOOTER}"))
            .ok_or(DecodeError::MissingFooter)?
            + 1
    };
    let (body, trailing) = rest.split_at(end);
    let trailing = &trailing[PEM_FOOTER.len()..];

    if !leading.trim().is_empty() || !trailing.trim().is_empty() {
        return Err(DecodeError::UnexpectedContent);
    }

    let body: String = body.lines().map(str::trim).collect();
    Ok(STANDARD.decode(body)?)
}

fn strip_line_break(s: &str) -> Option<&str> {
    s.strip_prefix("\r\n").or_else(|| s.strip_prefix('\n'))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIMPLE_PEM: &str = "-----BEGIN X509 CRL-----\nMTIzNDU2Nzg5\n-----END X509 CRL-----\n";

    #[test]
    fn test_decode_simple_crl() {
        let der = decode_crl(SIMPLE_PEM).unwrap();
        assert_eq!(der, b"123456789");
    }

    #[test]
    fn test_decode_wrapped_body() {
        let payload: Vec<u8> = (0..=255u8).collect();
        let encoded = STANDARD.encode(&payload);
        let wrapped = encoded
            .as_bytes()
            .chunks(64)
            .map(|line| std::str::from_utf8(line).unwrap())
            .collect::<Vec<_>>()
            .join("\n");
        let pem = format!("{PEM_HEADER}\n{wrapped}\n{PEM_FOOTER}\n");

        assert_eq!(decode_crl(&pem).unwrap(), payload);
    }

    #[test]
    fn test_decode_crlf_line_endings() {
        let pem = "-----BEGIN X509 CRL-----\r\nMTIzNDU2Nzg5\r\n-----END X509 CRL-----\r\n";
        assert_eq!(decode_crl(pem).unwrap(), b"123456789");
    }

    #[test]
    fn test_decode_without_trailing_newline() {
        let pem = "-----BEGIN X509 CRL-----\nMTIzNDU2Nzg5\n-----END X509 CRL-----";
        assert_eq!(decode_crl(pem).unwrap(), b"123456789");
    }

    #[test]
    fn test_decode_rejects_missing_armor() {
        let err = decode_crl("12345").unwrap_err();
        assert!(matches!(err, DecodeError::MissingHeader));
    }

    #[test]
    fn test_decode_rejects_missing_footer() {
        let err = decode_crl("-----BEGIN X509 CRL-----\nMTIzNDU2Nzg5\n").unwrap_err();
        assert!(matches!(err, DecodeError::MissingFooter));
    }

    #[test]
    fn test_decode_rejects_inline_armor() {
        let err = decode_crl("-----BEGIN X509 CRL-----MTIzNDU2Nzg5-----END X509 CRL-----")
            .unwrap_err();
        assert!(matches!(err, DecodeError::MissingHeader));
    }

    #[test]
    fn test_decode_rejects_footer_not_on_own_line() {
        let pem = "-----BEGIN X509 CRL-----\nMTIzNDU2Nzg5-----END X509 CRL-----\n";
        let err = decode_crl(pem).unwrap_err();
        assert!(matches!(err, DecodeError::MissingFooter));
    }

    #[test]
    fn test_decode_empty_body() {
        let pem = "-----BEGIN X509 CRL-----\n-----END X509 CRL-----\n";
        assert_eq!(decode_crl(pem).unwrap(), b"");
    }

    #[test]
    fn test_decode_rejects_invalid_base64() {
        let pem = "-----BEGIN X509 CRL-----\nMTIzN*U2Nzg5\n-----END X509 CRL-----\n";
        let err = decode_crl(pem).unwrap_err();
        assert!(matches!(err, DecodeError::Base64(_)));
    }

    #[test]
    fn test_decode_rejects_bad_padding() {
        let pem = "-----BEGIN X509 CRL-----\nMTIzNDU2Nzg\n-----END X509 CRL-----\n";
        let err = decode_crl(pem).unwrap_err();
        assert!(matches!(err, DecodeError::Base64(_)));
    }

    #[test]
    fn test_decode_rejects_second_crl() {
        let pem = format!("{SIMPLE_PEM}{SIMPLE_PEM}");
        let err = decode_crl(&pem).unwrap_err();
        assert!(matches!(err, DecodeError::UnexpectedContent));
    }

    #[test]
    fn test_crl_record_json_layout() {
        let crl = Crl::new("MyCAName", SIMPLE_PEM);
        let json = serde_json::to_value(&crl).unwrap();

        assert_eq!(json["ca_name"], "MyCAName");
        assert_eq!(json["crl_pem"], SIMPLE_PEM);
        assert_eq!(crl.to_der().unwrap(), b"123456789");
    }
}
