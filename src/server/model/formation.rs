//! Formation domain models and parameters.
//!
//! A formation is a catalog entry for a training course with an ordered, per-day
//! program. Schedule days are stored in their own table and reassembled here in
//! `position` order.

use chrono::{DateTime, Utc};

use crate::{
    model::formation::{CreateFormationDto, FormationDto, ScheduleDayDto, UpdateFormationDto},
    server::{
        error::AppError,
        model::{optional_required_field, optional_text, require_field},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Formation {
    pub id: i32,
    pub formation_id: String,
    pub name: String,
    pub formation_ref: String,
    pub software: String,
    pub prerequisites: Option<String>,
    pub objectives: Option<String>,
    pub competencies: Option<String>,
    pub schedule: Vec<ScheduleDay>,
    /// Marks a copy customized for one client from an original catalog entry.
    pub is_custom: bool,
    /// `formation_id` of the catalog entry this copy was made from.
    pub original_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub created_by: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScheduleDay {
    pub day: String,
    pub content: String,
    pub methods: String,
    pub theory_hours: String,
    pub practice_hours: String,
}

impl Formation {
    /// Converts a formation entity and its schedule rows into the domain model.
    ///
    /// # Arguments
    /// - `entity` - The formation row
    /// - `days` - Schedule rows of this formation, in any order
    pub fn from_entity(
        entity: entity::formation::Model,
        mut days: Vec<entity::formation_schedule_day::Model>,
    ) -> Self {
        days.sort_by_key(|d| d.position);

        Self {
            id: entity.id,
            formation_id: entity.formation_id,
            name: entity.name,
            formation_ref: entity.formation_ref,
            software: entity.software,
            prerequisites: entity.prerequisites,
            objectives: entity.objectives,
            competencies: entity.competencies,
            schedule: days.into_iter().map(ScheduleDay::from_entity).collect(),
            is_custom: entity.is_custom,
            original_id: entity.original_id,
            created_at: entity.created_at,
            created_by: entity.created_by,
        }
    }

    pub fn into_dto(self) -> FormationDto {
        FormationDto {
            id: self.id,
            formation_id: self.formation_id,
            name: self.name,
            formation_ref: self.formation_ref,
            software: self.software,
            prerequisites: self.prerequisites,
            objectives: self.objectives,
            competencies: self.competencies,
            schedule: self.schedule.into_iter().map(ScheduleDay::into_dto).collect(),
            is_custom: self.is_custom,
            original_id: self.original_id,
            created_at: self.created_at,
            created_by: self.created_by,
        }
    }
}

impl ScheduleDay {
    pub fn from_entity(entity: entity::formation_schedule_day::Model) -> Self {
        Self {
            day: entity.day,
            content: entity.content,
            methods: entity.methods,
            theory_hours: entity.theory_hours,
            practice_hours: entity.practice_hours,
        }
    }

    pub fn into_dto(self) -> ScheduleDayDto {
        ScheduleDayDto {
            day: self.day,
            content: self.content,
            methods: self.methods,
            theory_hours: self.theory_hours,
            practice_hours: self.practice_hours,
        }
    }
}

impl From<ScheduleDayDto> for ScheduleDay {
    fn from(dto: ScheduleDayDto) -> Self {
        Self {
            day: dto.day,
            content: dto.content,
            methods: dto.methods,
            theory_hours: dto.theory_hours,
            practice_hours: dto.practice_hours,
        }
    }
}

/// Parameters for creating a formation together with its schedule.
#[derive(Debug, Clone)]
pub struct CreateFormationParam {
    pub formation_id: String,
    pub name: String,
    pub formation_ref: String,
    pub software: String,
    pub prerequisites: Option<String>,
    pub objectives: Option<String>,
    pub competencies: Option<String>,
    pub schedule: Vec<ScheduleDay>,
    pub is_custom: bool,
    pub original_id: Option<String>,
    pub created_by: Option<i32>,
}

impl CreateFormationParam {
    /// Validates a create request body.
    ///
    /// # Returns
    /// - `Ok(CreateFormationParam)` - All required fields present
    /// - `Err(AppError::BadRequest)` - `formationId`, `name`, `formationRef`, or
    ///   `software` missing or blank
    pub fn from_dto(dto: CreateFormationDto, created_by: Option<i32>) -> Result<Self, AppError> {
        Ok(Self {
            formation_id: require_field(dto.formation_id, "formationId")?,
            name: require_field(dto.name, "name")?,
            formation_ref: require_field(dto.formation_ref, "formationRef")?,
            software: require_field(dto.software, "software")?,
            prerequisites: optional_text(dto.prerequisites),
            objectives: optional_text(dto.objectives),
            competencies: optional_text(dto.competencies),
            schedule: dto.schedule.into_iter().map(ScheduleDay::from).collect(),
            is_custom: dto.is_custom.unwrap_or(false),
            original_id: optional_text(dto.original_id),
            created_by,
        })
    }
}

/// Parameters for a partial formation update.
///
/// `schedule: Some(_)` replaces every schedule day; `None` keeps the current program.
#[derive(Debug, Clone, Default)]
pub struct UpdateFormationParam {
    pub formation_id: Option<String>,
    pub name: Option<String>,
    pub formation_ref: Option<String>,
    pub software: Option<String>,
    pub prerequisites: Option<String>,
    pub objectives: Option<String>,
    pub competencies: Option<String>,
    pub schedule: Option<Vec<ScheduleDay>>,
    pub is_custom: Option<bool>,
    pub original_id: Option<String>,
}

impl UpdateFormationParam {
    pub fn from_dto(dto: UpdateFormationDto) -> Result<Self, AppError> {
        Ok(Self {
            formation_id: optional_required_field(dto.formation_id, "formationId")?,
            name: optional_required_field(dto.name, "name")?,
            formation_ref: optional_required_field(dto.formation_ref, "formationRef")?,
            software: optional_required_field(dto.software, "software")?,
            prerequisites: dto.prerequisites,
            objectives: dto.objectives,
            competencies: dto.competencies,
            schedule: dto
                .schedule
                .map(|days| days.into_iter().map(ScheduleDay::from).collect()),
            is_custom: dto.is_custom,
            original_id: dto.original_id,
        })
    }
}
