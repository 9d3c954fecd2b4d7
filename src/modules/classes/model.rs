use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::store::Document;

/// Stored class document. Class names are unique within a school.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SchoolClass {
    pub id: Uuid,
    pub name: String,
    pub school_id: Uuid,
}

impl Document for SchoolClass {
    const COLLECTION: &'static str = "classes";

    fn id(&self) -> Uuid {
        self.id
    }
}

/// Class with its owning school's name resolved.
#[derive(Debug, Serialize, ToSchema)]
pub struct ClassDetail {
    pub id: Uuid,
    pub name: String,
    pub school_id: Uuid,
    pub school_name: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateClassDto {
    #[validate(length(min = 1, max = 100, message = "name must be 1-100 characters"))]
    pub name: String,
    pub school_id: Uuid,
}
