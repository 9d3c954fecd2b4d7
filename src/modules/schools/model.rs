use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::store::Document;

/// Stored school account. One account per tenant; everything else in the
/// system is scoped to a school through its `school_id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct School {
    pub id: Uuid,
    pub school_name: String,
    pub email: String,
    pub password: String,
    pub created_at: DateTime<Utc>,
}

impl Document for School {
    const COLLECTION: &'static str = "schools";

    fn id(&self) -> Uuid {
        self.id
    }
}

/// School account with the password hash stripped; the only shape that
/// leaves the API.
#[derive(Debug, Serialize, ToSchema)]
pub struct SchoolView {
    pub id: Uuid,
    pub school_name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<School> for SchoolView {
    fn from(school: School) -> Self {
        Self {
            id: school.id,
            school_name: school.school_name,
            email: school.email,
            created_at: school.created_at,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterSchoolDto {
    #[validate(length(min = 1, max = 100, message = "school_name must be 1-100 characters"))]
    pub school_name: String,
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    #[validate(length(min = 6, message = "password must be at least 6 characters"))]
    pub password: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SchoolLoginDto {
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateSchoolDto {
    #[validate(length(min = 1, max = 100, message = "school_name must be 1-100 characters"))]
    pub school_name: Option<String>,
    #[validate(email(message = "email must be a valid address"))]
    pub email: Option<String>,
    #[validate(length(min = 6, message = "password must be at least 6 characters"))]
    pub password: Option<String>,
}
