use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        rejection::JsonRejection,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use staffetta_core::{NotFoundResponse, StatusResponse};
use thiserror::Error;

pub type ServerResult<T> = Result<T, ServerError>;

/// Errori degli handler. Nessuno diventa un errore di trasporto: ogni variante è
/// resa come payload JSON con status 200.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Validazione fallita o risorsa assente, già in forma strutturata.
    #[error("{}", .0.message)]
    Rejected(#[from] staffetta_core::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("multipart error: {0}")]
    Multipart(#[from] MultipartError),

    #[error("multipart error: {0}")]
    MultipartRejected(#[from] MultipartRejection),

    #[error("malformed request body: {0}")]
    Body(#[from] JsonRejection),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        match self {
            ServerError::Rejected(err) if err.is_not_found() => {
                tracing::debug!(what = %err.message, "resource not found");
                (StatusCode::OK, Json(NotFoundResponse { error: err.message })).into_response()
            }
            ServerError::Rejected(err) => {
                tracing::debug!(code = %err.code, message = %err.message, "request rejected");
                (StatusCode::OK, Json(StatusResponse::from(err))).into_response()
            }
            other => {
                tracing::warn!(error = %other, "request failed");
                (StatusCode::OK, Json(StatusResponse::error(other.to_string()))).into_response()
            }
        }
    }
}
