use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use roster::StoreError;
use thiserror::Error;
use tracing::{error, warn};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum AppError {
    #[error("No contact found for {0}")]
    NotFound(String),

    /// A route handler ran without a parameter its route guarantees. Always a routing defect.
    #[error("Missing required route parameter: {0}")]
    PreconditionViolation(&'static str),

    #[error("Malformed payload")]
    MalformedPayload,
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => AppError::NotFound(id),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::NotFound(id) => {
                warn!("Contact {id} not found");
                StatusCode::NOT_FOUND
            }
            AppError::PreconditionViolation(param) => {
                error!("Precondition violated, route parameter {param} missing");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::MalformedPayload => StatusCode::BAD_REQUEST,
        };

        (status, self.to_string()).into_response()
    }
}
