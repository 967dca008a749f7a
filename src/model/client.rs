use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClientDto {
    pub id: i32,
    pub client_id: String,
    pub name: String,
    pub matricule_fiscal: String,
    pub address: String,
    pub phone: String,
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
    pub created_by: Option<i32>,
}

/// Client fields as submitted. Required fields are checked when the body is
/// converted into `CreateClientParam` so missing values produce a 400 with a
/// readable message.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateClientDto {
    pub client_id: Option<String>,
    pub name: Option<String>,
    pub matricule_fiscal: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

/// Partial update; absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateClientDto {
    pub client_id: Option<String>,
    pub name: Option<String>,
    pub matricule_fiscal: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

/// Client summary attached to listed documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClientSummaryDto {
    pub id: i32,
    pub client_id: String,
    pub name: String,
}
