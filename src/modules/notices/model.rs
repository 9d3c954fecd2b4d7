use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::store::Document;

/// Stored notice document. Notices hang off a school and nothing else.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Notice {
    pub id: Uuid,
    pub title: String,
    pub details: String,
    pub date: DateTime<Utc>,
    pub school_id: Uuid,
}

impl Document for Notice {
    const COLLECTION: &'static str = "notices";

    fn id(&self) -> Uuid {
        self.id
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateNoticeDto {
    #[validate(length(min = 1, max = 200, message = "title must be 1-200 characters"))]
    pub title: String,
    #[validate(length(min = 1, message = "details must not be empty"))]
    pub details: String,
    pub date: DateTime<Utc>,
    pub school_id: Uuid,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateNoticeDto {
    #[validate(length(min = 1, max = 200, message = "title must be 1-200 characters"))]
    pub title: Option<String>,
    #[validate(length(min = 1, message = "details must not be empty"))]
    pub details: Option<String>,
    pub date: Option<DateTime<Utc>>,
}
