use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::store::Document;

/// Stored complaint document. `user_id` references a student but is never
/// validated or cascaded; a missing poster just resolves to a null name.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Complaint {
    pub id: Uuid,
    pub user_id: Uuid,
    pub complaint: String,
    pub date: DateTime<Utc>,
    pub school_id: Uuid,
}

impl Document for Complaint {
    const COLLECTION: &'static str = "complaints";

    fn id(&self) -> Uuid {
        self.id
    }
}

/// Complaint with the posting student's display name resolved.
#[derive(Debug, Serialize, ToSchema)]
pub struct ComplaintView {
    pub id: Uuid,
    pub user_id: Uuid,
    pub user_name: Option<String>,
    pub complaint: String,
    pub date: DateTime<Utc>,
    pub school_id: Uuid,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateComplaintDto {
    pub user_id: Uuid,
    #[validate(length(min = 1, message = "complaint must not be empty"))]
    pub complaint: String,
    pub date: DateTime<Utc>,
    pub school_id: Uuid,
}
