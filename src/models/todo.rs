use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::error::AppError;

/// Accepted values for [`Todo::status`].
pub const STATUS_RANGE: RangeInclusive<i64> = 1..=3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
#[schema(example = json!({"id": 1, "content": "The is my first todo", "status": 1}))]
pub struct Todo {
    /// The auto-generated id of the todo
    pub id: i64,
    /// The todo content
    pub content: String,
    /// Status of the todo, between 1 and 3
    pub status: i64,
}

/// Body of a create or update request. Any `id` sent by the client is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({"content": "The is my first todo", "status": 1}))]
pub struct TodoPayload {
    pub content: String,
    #[schema(minimum = 1, maximum = 3)]
    pub status: i64,
}

impl TodoPayload {
    pub fn validate(&self) -> Result<(), AppError> {
        if STATUS_RANGE.contains(&self.status) {
            Ok(())
        } else {
            Err(AppError::InvalidStatus(self.status))
        }
    }
}
