//! # CSRF Tokens
//!
//! - Every page with vote buttons gets a token in `<meta name="csrf-token">`
//! - A token is `{issued_at}.{signature}`, the signature being HMAC-SHA256 of the unix
//!   timestamp under the server secret
//! - Nothing is stored, any instance sharing the secret can check any token
//! - The token stays valid for the configured TTL and can be reused within it
//! - `POST /vote` must echo it back in the `X-CSRFToken` header
use std::time::Duration;

use axum::http::HeaderMap;
use bank::payloads::CSRF_HEADER;
use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use hmac::{Hmac, Mac, digest::InvalidLength};
use sha2::Sha256;

use crate::{error::AppError, utils::unix_now};

type HmacSha256 = Hmac<Sha256>;

pub struct CsrfTokens {
    ttl: Duration,
    mac: HmacSha256,
}

impl CsrfTokens {
    pub fn new(secret: &[u8], ttl: Duration) -> Result<Self, InvalidLength> {
        Ok(Self {
            ttl,
            mac: HmacSha256::new_from_slice(secret)?,
        })
    }

    pub fn issue(&self) -> String {
        self.issue_at(unix_now())
    }

    pub fn issue_at(&self, now: u64) -> String {
        let signature = self.sign(now).finalize().into_bytes();

        format!("{now}.{}", URL_SAFE_NO_PAD.encode(signature))
    }

    pub fn verify(&self, headers: &HeaderMap) -> Result<(), AppError> {
        self.verify_at(headers, unix_now())
    }

    pub fn verify_at(&self, headers: &HeaderMap, now: u64) -> Result<(), AppError> {
        let token = headers
            .get(CSRF_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or(AppError::CsrfMissing)?;

        let (issued_at, signature) = token.split_once('.').ok_or(AppError::CsrfInvalid)?;
        let issued_at: u64 = issued_at.parse().map_err(|_| AppError::CsrfInvalid)?;
        let signature = URL_SAFE_NO_PAD
            .decode(signature)
            .map_err(|_| AppError::CsrfInvalid)?;

        self.sign(issued_at)
            .verify_slice(&signature)
            .map_err(|_| AppError::CsrfInvalid)?;

        // a future timestamp means the clock stepped back since issue
        if issued_at > now || now - issued_at >= self.ttl.as_secs() {
            return Err(AppError::CsrfInvalid);
        }

        Ok(())
    }

    fn sign(&self, issued_at: u64) -> HmacSha256 {
        let mut mac = self.mac.clone();
        mac.update(issued_at.to_string().as_bytes());
        mac
    }
}

#[cfg(test)]
mod tests {
    use axum::http::{HeaderName, HeaderValue};

    use super::*;

    const NOW: u64 = 1_792_108_800;

    fn tokens(secret: &str) -> CsrfTokens {
        CsrfTokens::new(secret.as_bytes(), Duration::from_secs(60)).unwrap()
    }

    fn headers(token: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_bytes(CSRF_HEADER.as_bytes()).unwrap(),
            HeaderValue::from_str(token).unwrap(),
        );
        headers
    }

    #[test]
    fn test_issued_token_verifies() {
        let tokens = tokens("secret");
        let token = tokens.issue();

        assert!(tokens.verify(&headers(&token)).is_ok());
        assert!(tokens.verify(&headers(&token)).is_ok());
    }

    #[test]
    fn test_token_shape() {
        let token = tokens("secret").issue_at(NOW);
        let (issued_at, signature) = token.split_once('.').unwrap();

        assert_eq!(issued_at, NOW.to_string());
        assert_eq!(URL_SAFE_NO_PAD.decode(signature).unwrap().len(), 32);
    }

    #[test]
    fn test_missing_and_malformed() {
        let tokens = tokens("secret");

        assert!(matches!(
            tokens.verify(&HeaderMap::new()),
            Err(AppError::CsrfMissing)
        ));
        assert!(matches!(
            tokens.verify(&headers("  ")),
            Err(AppError::CsrfMissing)
        ));

        let unsigned = format!("{NOW}.");
        for forged in ["not-a-token", "abc.def", "123.!!!", unsigned.as_str()] {
            assert!(matches!(
                tokens.verify_at(&headers(forged), NOW),
                Err(AppError::CsrfInvalid)
            ));
        }
    }

    #[test]
    fn test_expiry() {
        let tokens = tokens("secret");
        let token = tokens.issue_at(NOW);

        assert!(tokens.verify_at(&headers(&token), NOW + 59).is_ok());
        assert!(matches!(
            tokens.verify_at(&headers(&token), NOW + 60),
            Err(AppError::CsrfInvalid)
        ));
        assert!(matches!(
            tokens.verify_at(&headers(&token), NOW - 1),
            Err(AppError::CsrfInvalid)
        ));
    }

    #[test]
    fn test_tampered_timestamp() {
        let tokens = tokens("secret");
        let token = tokens.issue_at(NOW);
        let (_, signature) = token.split_once('.').unwrap();

        let extended = format!("{}.{signature}", NOW + 3600);
        assert!(matches!(
            tokens.verify_at(&headers(&extended), NOW + 3600),
            Err(AppError::CsrfInvalid)
        ));
    }

    #[test]
    fn test_shared_secret_needs_no_state() {
        let issuer = tokens("shared");
        let replica = tokens("shared");
        let stranger = tokens("other");

        for offset in 0..50_000 {
            issuer.issue_at(NOW + offset % 30);
        }

        let token = issuer.issue_at(NOW);
        assert!(replica.verify_at(&headers(&token), NOW + 1).is_ok());
        assert!(matches!(
            stranger.verify_at(&headers(&token), NOW + 1),
            Err(AppError::CsrfInvalid)
        ));
    }
}
