use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Creator summary attached to listed documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserSummaryDto {
    pub id: i32,
    pub name: String,
    pub email: String,
}
