//! Client domain models and parameters.
//!
//! Provides the client domain model, conversions from entity and into DTOs, and the
//! validated parameter types for creation and partial updates.

use chrono::{DateTime, Utc};

use crate::{
    model::client::{ClientDto, ClientSummaryDto, CreateClientDto, UpdateClientDto},
    server::{
        error::AppError,
        model::{optional_required_field, optional_text, require_field},
    },
};

/// Client of the training center.
///
/// `client_id` is the unique business code; `id` is the surrogate key used in URLs
/// and by PDF records.
#[derive(Debug, Clone, PartialEq)]
pub struct Client {
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

impl Client {
    /// Converts an entity model to a client domain model at the repository boundary.
    pub fn from_entity(entity: entity::client::Model) -> Self {
        Self {
            id: entity.id,
            client_id: entity.client_id,
            name: entity.name,
            matricule_fiscal: entity.matricule_fiscal,
            address: entity.address,
            phone: entity.phone,
            email: entity.email,
            created_at: entity.created_at,
            created_by: entity.created_by,
        }
    }

    /// Converts the client domain model to a DTO for API responses.
    pub fn into_dto(self) -> ClientDto {
        ClientDto {
            id: self.id,
            client_id: self.client_id,
            name: self.name,
            matricule_fiscal: self.matricule_fiscal,
            address: self.address,
            phone: self.phone,
            email: self.email,
            created_at: self.created_at,
            created_by: self.created_by,
        }
    }

    pub fn into_summary_dto(self) -> ClientSummaryDto {
        ClientSummaryDto {
            id: self.id,
            client_id: self.client_id,
            name: self.name,
        }
    }
}

/// Parameters for creating a new client.
///
/// Constructed through `from_dto`, which rejects missing or blank required fields.
#[derive(Debug, Clone)]
pub struct CreateClientParam {
    pub client_id: String,
    pub name: String,
    pub matricule_fiscal: String,
    pub address: String,
    pub phone: String,
    pub email: Option<String>,
    pub created_by: Option<i32>,
}

impl CreateClientParam {
    /// Validates a create request body.
    ///
    /// # Arguments
    /// - `dto` - Submitted client fields
    /// - `created_by` - ID of the authenticated user creating the client
    ///
    /// # Returns
    /// - `Ok(CreateClientParam)` - All required fields present
    /// - `Err(AppError::BadRequest)` - A required field is missing or blank
    pub fn from_dto(dto: CreateClientDto, created_by: Option<i32>) -> Result<Self, AppError> {
        Ok(Self {
            client_id: require_field(dto.client_id, "clientId")?,
            name: require_field(dto.name, "name")?,
            matricule_fiscal: require_field(dto.matricule_fiscal, "matriculeFiscal")?,
            address: require_field(dto.address, "address")?,
            phone: require_field(dto.phone, "phone")?,
            email: optional_text(dto.email),
            created_by,
        })
    }
}

/// Parameters for a partial client update. `None` leaves the column untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateClientParam {
    pub client_id: Option<String>,
    pub name: Option<String>,
    pub matricule_fiscal: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

impl UpdateClientParam {
    /// Validates an update request body; provided required fields must not be blank.
    pub fn from_dto(dto: UpdateClientDto) -> Result<Self, AppError> {
        Ok(Self {
            client_id: optional_required_field(dto.client_id, "clientId")?,
            name: optional_required_field(dto.name, "name")?,
            matricule_fiscal: optional_required_field(dto.matricule_fiscal, "matriculeFiscal")?,
            address: optional_required_field(dto.address, "address")?,
            phone: optional_required_field(dto.phone, "phone")?,
            email: dto.email.map(|e| e.trim().to_string()),
        })
    }
}
