//! PDF metadata repository.
//!
//! Rows here index files in the upload directory. The repository never touches the
//! filesystem; pairing file and row is the service's job.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::{
    error::AppError,
    model::pdf::{CreatePdfParam, Pdf, PdfFilter},
};

pub struct PdfRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PdfRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts the metadata row of a stored file.
    ///
    /// # Returns
    /// - `Ok(Pdf)` - The created record
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(&self, param: CreatePdfParam) -> Result<Pdf, AppError> {
        let entity = entity::pdf::ActiveModel {
            filename: ActiveValue::Set(param.filename),
            original_name: ActiveValue::Set(param.original_name),
            path: ActiveValue::Set(param.path),
            size: ActiveValue::Set(param.size as i64),
            mimetype: ActiveValue::Set(param.mimetype),
            fiche_type: ActiveValue::Set(param.fiche_type.to_string()),
            client_id: ActiveValue::Set(param.client_id),
            form_data: ActiveValue::Set(param.form_data),
            created_at: ActiveValue::Set(Utc::now()),
            created_by: ActiveValue::Set(param.created_by),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Pdf::from_entity(entity)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Pdf>, AppError> {
        entity::prelude::Pdf::find_by_id(id)
            .one(self.db)
            .await?
            .map(Pdf::from_entity)
            .transpose()
    }

    /// Gets PDF records matching the filter, newest first.
    pub async fn get_filtered(&self, filter: PdfFilter) -> Result<Vec<Pdf>, AppError> {
        let mut query = entity::prelude::Pdf::find();

        if let Some(fiche_type) = filter.fiche_type {
            query = query.filter(entity::pdf::Column::FicheType.eq(fiche_type.as_str()));
        }
        if let Some(client_id) = filter.client_id {
            query = query.filter(entity::pdf::Column::ClientId.eq(client_id));
        }

        query
            .order_by_desc(entity::pdf::Column::CreatedAt)
            .order_by_desc(entity::pdf::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Pdf::from_entity)
            .collect()
    }

    /// Gets `(id, filename)` of every record.
    ///
    /// Reads only the two columns so rows with corrupt values elsewhere still count
    /// as references during reconciliation.
    pub async fn get_all_filenames(&self) -> Result<Vec<(i32, String)>, DbErr> {
        entity::prelude::Pdf::find()
            .select_only()
            .column(entity::pdf::Column::Id)
            .column(entity::pdf::Column::Filename)
            .order_by_asc(entity::pdf::Column::Id)
            .into_tuple()
            .all(self.db)
            .await
    }

    /// Deletes a PDF record by ID.
    ///
    /// # Returns
    /// - `Ok(true)` - Record deleted
    /// - `Ok(false)` - No record with that ID
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Pdf::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
