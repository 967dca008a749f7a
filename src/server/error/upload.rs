use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Reasons a PDF upload is rejected before anything is stored.
///
/// Every variant results in 400 Bad Request with the display message as body.
#[derive(Error, Debug, PartialEq)]
pub enum UploadError {
    #[error("No file uploaded")]
    MissingFile,

    #[error("Only PDF files are allowed")]
    NotPdf,

    #[error("File exceeds the maximum size of {limit} bytes")]
    TooLarge { limit: usize },

    #[error("ficheType is required")]
    MissingFicheType,

    #[error("Invalid ficheType '{0}'")]
    InvalidFicheType(String),

    #[error("Invalid clientId '{0}'")]
    InvalidClientId(String),

    #[error("Client {0} not found")]
    ClientNotFound(i32),

    #[error("formData must be valid JSON")]
    InvalidFormData,

    #[error("Invalid multipart body")]
    InvalidMultipart,
}

impl IntoResponse for UploadError {
    fn into_response(self) -> Response {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
