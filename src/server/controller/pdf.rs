use axum::{
    extract::{multipart::MultipartError, Multipart, Path, Query, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        pdf::{PdfDto, UploadPdfForm, UploadPdfResponseDto},
    },
    server::{
        error::{upload::UploadError, AppError},
        middleware::auth::AuthGuard,
        model::pdf::{PdfFilter, PdfWithRelations, UploadPdfParam, MAX_PDF_SIZE, PDF_MIME_TYPE},
        service::pdf::PdfService,
        state::AppState,
    },
};

/// Tag for grouping PDF endpoints in OpenAPI documentation
pub static PDF_TAG: &str = "pdf";

/// Name used when the file part carries no filename.
const DEFAULT_ORIGINAL_NAME: &str = "document.pdf";

#[derive(Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct PdfListQuery {
    /// One of formation, license, plan, presence, evaluation
    pub fiche_type: Option<String>,
    /// Surrogate ID of the client
    pub client_id: Option<String>,
}

/// Upload a PDF document.
///
/// Accepts a multipart form with the file in the `pdf` part plus `ficheType`,
/// optional `clientId`, and optional `formData` (a JSON-encoded string). The file
/// part is read chunk by chunk and rejected as soon as it passes 10 MiB.
///
/// # Access Control
/// - Any authenticated user
///
/// # Returns
/// - `201 Created` - Stored document reference
/// - `400 Bad Request` - Missing file, non-PDF content type, oversized file, or
///   invalid form fields
/// - `401 Unauthorized` - User not authenticated
/// - `500 Internal Server Error` - Filesystem or database error
#[utoipa::path(
    post,
    path = "/pdf/upload",
    tag = PDF_TAG,
    request_body(content = UploadPdfForm, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Successfully uploaded PDF", body = UploadPdfResponseDto),
        (status = 400, description = "Rejected upload", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upload_pdf(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let mut file: Option<(String, Option<String>, Vec<u8>)> = None;
    let mut fiche_type = None;
    let mut client_id = None;
    let mut form_data = None;

    while let Some(mut field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().map(str::to_string);

        match name.as_deref() {
            Some("pdf") => {
                let original_name = field
                    .file_name()
                    .map(str::to_string)
                    .unwrap_or_else(|| DEFAULT_ORIGINAL_NAME.to_string());
                let content_type = field.content_type().map(str::to_string);

                let mut bytes = Vec::new();
                while let Some(chunk) = field.chunk().await.map_err(multipart_error)? {
                    if bytes.len() + chunk.len() > MAX_PDF_SIZE {
                        return Err(UploadError::TooLarge {
                            limit: MAX_PDF_SIZE,
                        }
                        .into());
                    }
                    bytes.extend_from_slice(&chunk);
                }

                file = Some((original_name, content_type, bytes));
            }
            Some("ficheType") => fiche_type = Some(field.text().await.map_err(multipart_error)?),
            Some("clientId") => client_id = Some(field.text().await.map_err(multipart_error)?),
            Some("formData") => form_data = Some(field.text().await.map_err(multipart_error)?),
            _ => {}
        }
    }

    let Some((original_name, content_type, bytes)) = file else {
        return Err(UploadError::MissingFile.into());
    };

    let pdf = PdfService::new(&state.db, &state.storage)
        .upload(UploadPdfParam {
            original_name,
            content_type,
            bytes,
            fiche_type,
            client_id,
            form_data,
            created_by: Some(user.id),
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(UploadPdfResponseDto {
            message: "PDF uploaded successfully".to_string(),
            pdf: pdf.into_uploaded_dto(),
        }),
    ))
}

/// List stored PDF documents, newest first.
///
/// Each item carries a `client` summary and a `createdBy` summary, `null` when the
/// reference is unset or no longer exists.
///
/// # Access Control
/// - Any authenticated user
#[utoipa::path(
    get,
    path = "/pdf",
    tag = PDF_TAG,
    params(PdfListQuery),
    responses(
        (status = 200, description = "Successfully retrieved PDFs", body = Vec<PdfDto>),
        (status = 400, description = "Invalid filter", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_pdfs(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<PdfListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let filter = PdfFilter::from_query(query.fiche_type, query.client_id)?;

    let pdfs = PdfService::new(&state.db, &state.storage)
        .list(filter)
        .await?;

    let dtos: Vec<PdfDto> = pdfs.into_iter().map(PdfWithRelations::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Download a stored PDF.
///
/// Responds with the file content, served inline under its original name.
///
/// # Access Control
/// - Any authenticated user
///
/// # Returns
/// - `200 OK` - PDF bytes
/// - `401 Unauthorized` - User not authenticated
/// - `404 Not Found` - No record, or the record's file is missing on disk
/// - `500 Internal Server Error` - Filesystem or database error
#[utoipa::path(
    get,
    path = "/pdf/{id}",
    tag = PDF_TAG,
    params(
        ("id" = i32, Path, description = "PDF ID")
    ),
    responses(
        (status = 200, description = "PDF content", content_type = "application/pdf", body = Vec<u8>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "PDF or file not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_pdf(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let (pdf, bytes) = PdfService::new(&state.db, &state.storage)
        .download(id)
        .await?;

    let disposition = HeaderValue::from_str(&content_disposition(&pdf.original_name))
        .map_err(|e| AppError::InternalError(format!("Invalid Content-Disposition: {}", e)))?;

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, HeaderValue::from_static(PDF_MIME_TYPE)),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        bytes,
    ))
}

/// Delete a stored PDF.
///
/// Removes the file (an already missing file is not an error), then the record.
///
/// # Access Control
/// - Any authenticated user
#[utoipa::path(
    delete,
    path = "/pdf/{id}",
    tag = PDF_TAG,
    params(
        ("id" = i32, Path, description = "PDF ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted PDF", body = MessageDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "PDF not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_pdf(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    PdfService::new(&state.db, &state.storage).delete(id).await?;

    Ok((StatusCode::OK, Json(MessageDto::new("PDF deleted successfully"))))
}

/// Maps multipart read failures to upload errors.
///
/// The body limit layer reports an oversized request as 413; that is the same
/// rejection as an oversized file part.
fn multipart_error(err: MultipartError) -> UploadError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        UploadError::TooLarge {
            limit: MAX_PDF_SIZE,
        }
    } else {
        tracing::debug!("Rejected multipart body: {}", err);
        UploadError::InvalidMultipart
    }
}

/// Builds an `inline` Content-Disposition value for the original filename.
///
/// `filename` carries an ASCII-only fallback; `filename*` carries the exact name,
/// percent-encoded as UTF-8.
pub(crate) fn content_disposition(original_name: &str) -> String {
    let fallback: String = original_name
        .chars()
        .map(|c| match c {
            ' '..='~' if c != '"' && c != '\\' => c,
            _ => '_',
        })
        .collect();

    if fallback == original_name {
        return format!("inline; filename=\"{}\"", original_name);
    }

    let mut encoded = String::with_capacity(original_name.len() * 3);
    for byte in original_name.bytes() {
        if byte.is_ascii_alphanumeric() || b"-._~".contains(&byte) {
            encoded.push(byte as char);
        } else {
            encoded.push_str(&format!("%{:02X}", byte));
        }
    }

    format!(
        "inline; filename=\"{}\"; filename*=UTF-8''{}",
        fallback, encoded
    )
}
