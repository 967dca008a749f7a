use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{client::ClientSummaryDto, user::UserSummaryDto};

/// Kind of form a stored PDF was generated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum FicheType {
    Formation,
    License,
    Plan,
    Presence,
    Evaluation,
}

impl FicheType {
    pub const ALL: [FicheType; 5] = [
        FicheType::Formation,
        FicheType::License,
        FicheType::Plan,
        FicheType::Presence,
        FicheType::Evaluation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FicheType::Formation => "formation",
            FicheType::License => "license",
            FicheType::Plan => "plan",
            FicheType::Presence => "presence",
            FicheType::Evaluation => "evaluation",
        }
    }
}

impl fmt::Display for FicheType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FicheType {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        FicheType::ALL
            .into_iter()
            .find(|fiche_type| fiche_type.as_str() == value)
            .ok_or_else(|| value.to_string())
    }
}

/// Stored PDF metadata with its referenced client and creator resolved.
///
/// `client` and `createdBy` are `null` when the reference is unset or points at a row
/// that no longer exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PdfDto {
    pub id: i32,
    pub filename: String,
    pub original_name: String,
    pub size: i64,
    pub mimetype: String,
    pub fiche_type: FicheType,
    pub client_id: Option<i32>,
    pub client: Option<ClientSummaryDto>,
    #[schema(value_type = Option<Object>)]
    pub form_data: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
    pub created_by: Option<UserSummaryDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UploadedPdfDto {
    pub id: i32,
    pub filename: String,
    pub original_name: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UploadPdfResponseDto {
    pub message: String,
    pub pdf: UploadedPdfDto,
}

/// Multipart form accepted by `POST /pdf/upload`. Only used for API documentation;
/// the handler reads the parts one by one.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)]
pub struct UploadPdfForm {
    #[schema(value_type = String, format = Binary)]
    pub pdf: Vec<u8>,
    pub fiche_type: FicheType,
    pub client_id: Option<i32>,
    /// JSON-encoded form values.
    pub form_data: Option<String>,
}
