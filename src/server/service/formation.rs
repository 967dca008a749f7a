use sea_orm::DatabaseConnection;

use crate::server::{
    data::formation::FormationRepository,
    error::AppError,
    model::formation::{CreateFormationParam, Formation, UpdateFormationParam},
    util::db::is_unique_violation,
};

const DUPLICATE_FORMATION_ID: &str = "Formation ID already exists";

/// Software filter value meaning "every software".
pub const ALL_SOFTWARE: &str = "all";

pub struct FormationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FormationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a formation with its schedule.
    ///
    /// # Returns
    /// - `Ok(Formation)` - The created formation
    /// - `Err(AppError::Conflict)` - `formation_id` already taken
    pub async fn create(&self, param: CreateFormationParam) -> Result<Formation, AppError> {
        let formation = FormationRepository::new(self.db)
            .create(param)
            .await
            .map_err(map_conflict)?;

        tracing::info!(
            "Created formation {} ({}) with {} schedule days",
            formation.id,
            formation.formation_id,
            formation.schedule.len()
        );

        Ok(formation)
    }

    /// Lists formations, newest first.
    ///
    /// # Arguments
    /// - `software` - Exact software to match; `None`, blank, or `"all"` lists everything
    pub async fn get_all(&self, software: Option<String>) -> Result<Vec<Formation>, AppError> {
        let software = software.filter(|s| !s.trim().is_empty() && s != ALL_SOFTWARE);

        Ok(FormationRepository::new(self.db)
            .get_all(software.as_deref())
            .await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Formation>, AppError> {
        Ok(FormationRepository::new(self.db).find_by_id(id).await?)
    }

    /// Merges the provided fields into a formation; a provided schedule replaces the
    /// current one. Returns `None` if the formation doesn't exist.
    pub async fn update(
        &self,
        id: i32,
        param: UpdateFormationParam,
    ) -> Result<Option<Formation>, AppError> {
        FormationRepository::new(self.db)
            .update(id, param)
            .await
            .map_err(map_conflict)
    }

    /// Deletes a formation and its schedule. Returns false if it didn't exist.
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let deleted = FormationRepository::new(self.db).delete(id).await?;

        if deleted {
            tracing::info!("Deleted formation {}", id);
        }

        Ok(deleted)
    }
}

fn map_conflict(err: sea_orm::DbErr) -> AppError {
    if is_unique_violation(&err) {
        AppError::Conflict(DUPLICATE_FORMATION_ID.to_string())
    } else {
        err.into()
    }
}
