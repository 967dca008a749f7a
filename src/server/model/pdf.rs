//! PDF document domain models and parameters.
//!
//! A PDF record is the metadata index of one file in the upload directory. Upload
//! parameters arrive as raw multipart values and are validated by
//! `UploadPdfParam::validate` before anything touches the disk.

use chrono::{DateTime, Utc};

use crate::{
    model::pdf::{FicheType, PdfDto, UploadedPdfDto},
    server::{
        error::{internal::InternalError, upload::UploadError, AppError},
        model::{client::Client, user::User},
    },
};

/// The only content type accepted for uploads.
pub const PDF_MIME_TYPE: &str = "application/pdf";

/// Upload ceiling in bytes (10 MiB).
pub const MAX_PDF_SIZE: usize = 10 * 1024 * 1024;

#[derive(Debug, Clone, PartialEq)]
pub struct Pdf {
    pub id: i32,
    /// Generated storage name, unique in the upload directory.
    pub filename: String,
    pub original_name: String,
    pub path: String,
    pub size: u64,
    pub mimetype: String,
    pub fiche_type: FicheType,
    pub client_id: Option<i32>,
    pub form_data: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
    pub created_by: Option<i32>,
}

impl Pdf {
    /// Converts an entity model to the PDF domain model.
    ///
    /// # Returns
    /// - `Ok(Pdf)` - The converted domain model
    /// - `Err(AppError::InternalErr(UnknownFicheType))` - Stored fiche type is not one of
    ///   the known tags
    /// - `Err(AppError::InternalErr(InvalidPdfSize))` - Stored size is negative
    pub fn from_entity(entity: entity::pdf::Model) -> Result<Self, AppError> {
        let fiche_type =
            entity
                .fiche_type
                .parse::<FicheType>()
                .map_err(|value| InternalError::UnknownFicheType {
                    pdf_id: entity.id,
                    value,
                })?;

        let size = u64::try_from(entity.size).map_err(|_| InternalError::InvalidPdfSize {
            pdf_id: entity.id,
            size: entity.size,
        })?;

        Ok(Self {
            id: entity.id,
            filename: entity.filename,
            original_name: entity.original_name,
            path: entity.path,
            size,
            mimetype: entity.mimetype,
            fiche_type,
            client_id: entity.client_id,
            form_data: entity.form_data,
            created_at: entity.created_at,
            created_by: entity.created_by,
        })
    }

    /// Relative URL the document can be downloaded from.
    pub fn url(&self) -> String {
        format!("/pdf/{}", self.id)
    }

    pub fn into_uploaded_dto(self) -> UploadedPdfDto {
        UploadedPdfDto {
            url: self.url(),
            id: self.id,
            filename: self.filename,
            original_name: self.original_name,
        }
    }
}

/// PDF record with its client and creator resolved.
///
/// Either side is `None` when the reference is unset or dangling.
#[derive(Debug, Clone, PartialEq)]
pub struct PdfWithRelations {
    pub pdf: Pdf,
    pub client: Option<Client>,
    pub creator: Option<User>,
}

impl PdfWithRelations {
    pub fn into_dto(self) -> PdfDto {
        PdfDto {
            id: self.pdf.id,
            filename: self.pdf.filename,
            original_name: self.pdf.original_name,
            size: self.pdf.size as i64,
            mimetype: self.pdf.mimetype,
            fiche_type: self.pdf.fiche_type,
            client_id: self.pdf.client_id,
            client: self.client.map(Client::into_summary_dto),
            form_data: self.pdf.form_data,
            created_at: self.pdf.created_at,
            created_by: self.creator.map(User::into_summary_dto),
        }
    }
}

/// Filters for listing PDF records. `None` means no filter on that column.
#[derive(Debug, Clone, Default)]
pub struct PdfFilter {
    pub fiche_type: Option<FicheType>,
    pub client_id: Option<i32>,
}

impl PdfFilter {
    /// Parses raw query values. Blank values mean no filter.
    ///
    /// # Returns
    /// - `Ok(PdfFilter)` - Parsed filter
    /// - `Err(AppError::BadRequest)` - Unknown fiche type or non-numeric client ID
    pub fn from_query(
        fiche_type: Option<String>,
        client_id: Option<String>,
    ) -> Result<Self, AppError> {
        let fiche_type = non_blank(fiche_type)
            .map(|value| {
                value
                    .parse::<FicheType>()
                    .map_err(|value| AppError::BadRequest(format!("Invalid ficheType '{}'", value)))
            })
            .transpose()?;

        let client_id = non_blank(client_id)
            .map(|value| {
                value
                    .parse::<i32>()
                    .map_err(|_| AppError::BadRequest(format!("Invalid clientId '{}'", value)))
            })
            .transpose()?;

        Ok(Self {
            fiche_type,
            client_id,
        })
    }
}

/// Raw upload as read from the multipart body.
#[derive(Debug, Clone)]
pub struct UploadPdfParam {
    pub original_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
    pub fiche_type: Option<String>,
    pub client_id: Option<String>,
    pub form_data: Option<String>,
    pub created_by: Option<i32>,
}

/// Upload that passed every check that does not need the database.
#[derive(Debug, Clone)]
pub struct ValidatedUpload {
    pub original_name: String,
    pub bytes: Vec<u8>,
    pub fiche_type: FicheType,
    pub client_id: Option<i32>,
    pub form_data: Option<serde_json::Value>,
    pub created_by: Option<i32>,
}

impl UploadPdfParam {
    /// Checks content type, size, and auxiliary fields.
    ///
    /// Blank `clientId` and `formData` values are treated as absent, as are a
    /// `formData` of JSON `null`.
    ///
    /// # Returns
    /// - `Ok(ValidatedUpload)` - Upload may be written
    /// - `Err(UploadError)` - First failing check
    pub fn validate(self) -> Result<ValidatedUpload, UploadError> {
        if self.content_type.as_deref() != Some(PDF_MIME_TYPE) {
            return Err(UploadError::NotPdf);
        }

        if self.bytes.len() > MAX_PDF_SIZE {
            return Err(UploadError::TooLarge {
                limit: MAX_PDF_SIZE,
            });
        }

        let fiche_type = match non_blank(self.fiche_type) {
            Some(value) => value
                .parse::<FicheType>()
                .map_err(UploadError::InvalidFicheType)?,
            None => return Err(UploadError::MissingFicheType),
        };

        let client_id = non_blank(self.client_id)
            .map(|value| {
                value
                    .parse::<i32>()
                    .map_err(|_| UploadError::InvalidClientId(value))
            })
            .transpose()?;

        let form_data = non_blank(self.form_data)
            .map(|value| {
                serde_json::from_str::<serde_json::Value>(&value)
                    .map_err(|_| UploadError::InvalidFormData)
            })
            .transpose()?
            .filter(|value| !value.is_null());

        Ok(ValidatedUpload {
            original_name: self.original_name,
            bytes: self.bytes,
            fiche_type,
            client_id,
            form_data,
            created_by: self.created_by,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Parameters for inserting the metadata row of a stored file.
#[derive(Debug, Clone)]
pub struct CreatePdfParam {
    pub filename: String,
    pub original_name: String,
    pub path: String,
    pub size: u64,
    pub mimetype: String,
    pub fiche_type: FicheType,
    pub client_id: Option<i32>,
    pub form_data: Option<serde_json::Value>,
    pub created_by: Option<i32>,
}

/// Outcome of comparing the upload directory with the PDF table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReconcileReport {
    /// Files removed because no record referenced them.
    pub removed_orphans: Vec<String>,
    /// IDs of records whose file is missing.
    pub missing_artifacts: Vec<i32>,
}
