use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FormationDto {
    pub id: i32,
    pub formation_id: String,
    pub name: String,
    pub formation_ref: String,
    pub software: String,
    pub prerequisites: Option<String>,
    pub objectives: Option<String>,
    pub competencies: Option<String>,
    pub schedule: Vec<ScheduleDayDto>,
    pub is_custom: bool,
    pub original_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub created_by: Option<i32>,
}

/// One day of a formation program. Hours are free text ("3", "3h30", ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct ScheduleDayDto {
    pub day: String,
    pub content: String,
    pub methods: String,
    pub theory_hours: String,
    pub practice_hours: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateFormationDto {
    pub formation_id: Option<String>,
    pub name: Option<String>,
    pub formation_ref: Option<String>,
    pub software: Option<String>,
    pub prerequisites: Option<String>,
    pub objectives: Option<String>,
    pub competencies: Option<String>,
    pub schedule: Vec<ScheduleDayDto>,
    pub is_custom: Option<bool>,
    pub original_id: Option<String>,
}

/// Partial update; a provided `schedule` replaces the whole program.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateFormationDto {
    pub formation_id: Option<String>,
    pub name: Option<String>,
    pub formation_ref: Option<String>,
    pub software: Option<String>,
    pub prerequisites: Option<String>,
    pub objectives: Option<String>,
    pub competencies: Option<String>,
    pub schedule: Option<Vec<ScheduleDayDto>>,
    pub is_custom: Option<bool>,
    pub original_id: Option<String>,
}
