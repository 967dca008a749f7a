//! PDF record factory.
//!
//! Inserts metadata rows only; tests that need the artifact on disk write it
//! themselves at the configured `path`.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test PDF records with customizable fields.
pub struct PdfFactory<'a> {
    db: &'a DatabaseConnection,
    filename: String,
    original_name: String,
    path: String,
    fiche_type: String,
    client_id: Option<i32>,
    form_data: Option<serde_json::Value>,
    created_at: DateTime<Utc>,
    created_by: Option<i32>,
}

impl<'a> PdfFactory<'a> {
    /// Creates a new PdfFactory with default values.
    ///
    /// Defaults:
    /// - filename: `"{id}-0.pdf"`
    /// - original_name: `"document-{id}.pdf"`
    /// - path: `"uploads/{filename}"`
    /// - fiche_type: `"formation"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let filename = format!("{}-0.pdf", id);
        Self {
            db,
            path: format!("uploads/{}", filename),
            filename,
            original_name: format!("document-{}.pdf", id),
            fiche_type: "formation".to_string(),
            client_id: None,
            form_data: None,
            created_at: Utc::now(),
            created_by: None,
        }
    }

    /// Sets the storage path recorded on the row.
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    /// Sets the generated storage filename.
    pub fn filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = filename.into();
        self
    }

    /// Sets the original upload name.
    pub fn original_name(mut self, original_name: impl Into<String>) -> Self {
        self.original_name = original_name.into();
        self
    }

    /// Sets the fiche-type tag.
    pub fn fiche_type(mut self, fiche_type: impl Into<String>) -> Self {
        self.fiche_type = fiche_type.into();
        self
    }

    /// Sets the referenced client id.
    pub fn client_id(mut self, client_id: i32) -> Self {
        self.client_id = Some(client_id);
        self
    }

    /// Sets the structured form data blob.
    pub fn form_data(mut self, form_data: serde_json::Value) -> Self {
        self.form_data = Some(form_data);
        self
    }

    /// Sets the creating user's id.
    pub fn created_by(mut self, user_id: i32) -> Self {
        self.created_by = Some(user_id);
        self
    }

    /// Sets the creation timestamp, used to control list ordering.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the PDF record.
    ///
    /// # Returns
    /// - `Ok(entity::pdf::Model)` - Created PDF entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::pdf::Model, DbErr> {
        entity::pdf::ActiveModel {
            id: ActiveValue::NotSet,
            filename: ActiveValue::Set(self.filename),
            original_name: ActiveValue::Set(self.original_name),
            path: ActiveValue::Set(self.path),
            size: ActiveValue::Set(0),
            mimetype: ActiveValue::Set("application/pdf".to_string()),
            fiche_type: ActiveValue::Set(self.fiche_type),
            client_id: ActiveValue::Set(self.client_id),
            form_data: ActiveValue::Set(self.form_data),
            created_at: ActiveValue::Set(self.created_at),
            created_by: ActiveValue::Set(self.created_by),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a PDF record with default values pointing at `path`.
pub async fn create_pdf(db: &DatabaseConnection, path: &str) -> Result<entity::pdf::Model, DbErr> {
    PdfFactory::new(db).path(path).build().await
}
