use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use bank::payloads::VoteResponse;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Malformed payload")]
    MalformedPayload,

    #[error("Weapon ID is missing")]
    MissingWeaponId,

    #[error("Unknown weapon id {0}")]
    UnknownWeapon(i64),

    #[error("The CSRF token is missing.")]
    CsrfMissing,

    #[error("The CSRF token is invalid.")]
    CsrfInvalid,

    #[error("Too many requests")]
    RateLimited,

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Render error: {0}")]
    Render(#[from] minijinja::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::MalformedPayload
            | AppError::MissingWeaponId
            | AppError::UnknownWeapon(_)
            | AppError::CsrfMissing
            | AppError::CsrfInvalid => StatusCode::BAD_REQUEST,
            AppError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            AppError::Store(_) | AppError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(VoteResponse::failed(self.to_string()))).into_response()
    }
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error(transparent)]
    Redis(#[from] redis::RedisError),
}

#[derive(Error, Debug)]
pub enum StateError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error("Unusable CSRF secret")]
    CsrfSecret,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid {key} value: {reason}")]
    Invalid { key: &'static str, reason: String },
}
