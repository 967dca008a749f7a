//! Formation factory for creating test formation entities and their schedule rows.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test formations with customizable fields.
///
/// Schedule days added with `schedule_day` are inserted after the formation in the
/// order they were added.
pub struct FormationFactory<'a> {
    db: &'a DatabaseConnection,
    formation_id: String,
    name: String,
    software: String,
    schedule: Vec<(String, String)>,
    created_at: DateTime<Utc>,
}

impl<'a> FormationFactory<'a> {
    /// Creates a new FormationFactory with default values.
    ///
    /// Defaults:
    /// - formation_id: `"formation-{id}"`
    /// - name: `"Formation {id}"`
    /// - software: `"SOLIDWORKS"`
    /// - no schedule days
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            formation_id: format!("formation-{}", id),
            name: format!("Formation {}", id),
            software: "SOLIDWORKS".to_string(),
            schedule: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Sets the business identifier.
    pub fn formation_id(mut self, formation_id: impl Into<String>) -> Self {
        self.formation_id = formation_id.into();
        self
    }

    /// Sets the formation name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the associated software name.
    pub fn software(mut self, software: impl Into<String>) -> Self {
        self.software = software.into();
        self
    }

    /// Appends a schedule day with the given label and content.
    pub fn schedule_day(mut self, day: impl Into<String>, content: impl Into<String>) -> Self {
        self.schedule.push((day.into(), content.into()));
        self
    }

    /// Sets the creation timestamp, used to control list ordering.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the formation and its schedule days.
    ///
    /// # Returns
    /// - `Ok(entity::formation::Model)` - Created formation entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::formation::Model, DbErr> {
        let formation = entity::formation::ActiveModel {
            id: ActiveValue::NotSet,
            formation_id: ActiveValue::Set(self.formation_id),
            name: ActiveValue::Set(self.name),
            formation_ref: ActiveValue::Set("REF-001".to_string()),
            software: ActiveValue::Set(self.software),
            prerequisites: ActiveValue::Set(None),
            objectives: ActiveValue::Set(None),
            competencies: ActiveValue::Set(None),
            is_custom: ActiveValue::Set(false),
            original_id: ActiveValue::Set(None),
            created_at: ActiveValue::Set(self.created_at),
            created_by: ActiveValue::Set(None),
        }
        .insert(self.db)
        .await?;

        for (position, (day, content)) in self.schedule.into_iter().enumerate() {
            entity::formation_schedule_day::ActiveModel {
                id: ActiveValue::NotSet,
                formation_id: ActiveValue::Set(formation.id),
                position: ActiveValue::Set(position as i32),
                day: ActiveValue::Set(day),
                content: ActiveValue::Set(content),
                methods: ActiveValue::Set("Exercices pratiques".to_string()),
                theory_hours: ActiveValue::Set("3".to_string()),
                practice_hours: ActiveValue::Set("3".to_string()),
            }
            .insert(self.db)
            .await?;
        }

        Ok(formation)
    }
}

/// Creates a formation with default values and no schedule.
pub async fn create_formation(db: &DatabaseConnection) -> Result<entity::formation::Model, DbErr> {
    FormationFactory::new(db).build().await
}
