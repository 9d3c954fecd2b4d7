use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::store::Document;

/// Stored subject document. `teacher_id` is a back-reference maintained by
/// teacher registration/reassignment; the subject never owns the teacher.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Subject {
    pub id: Uuid,
    pub name: String,
    pub code: String,
    /// Number of schedulable sessions; bounds student attendance entries.
    pub sessions: u32,
    pub class_id: Uuid,
    pub school_id: Uuid,
    pub teacher_id: Option<Uuid>,
}

impl Document for Subject {
    const COLLECTION: &'static str = "subjects";

    fn id(&self) -> Uuid {
        self.id
    }
}

/// Subject with its class name resolved, for school-wide listings.
#[derive(Debug, Serialize, ToSchema)]
pub struct SubjectListView {
    pub id: Uuid,
    pub name: String,
    pub code: String,
    pub sessions: u32,
    pub class_id: Uuid,
    pub class_name: Option<String>,
    pub school_id: Uuid,
    pub teacher_id: Option<Uuid>,
}

/// Subject with class and assigned-teacher names resolved.
#[derive(Debug, Serialize, ToSchema)]
pub struct SubjectDetail {
    pub id: Uuid,
    pub name: String,
    pub code: String,
    pub sessions: u32,
    pub class_id: Uuid,
    pub class_name: Option<String>,
    pub school_id: Uuid,
    pub teacher_id: Option<Uuid>,
    pub teacher_name: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct SubjectSpec {
    #[validate(length(min = 1, max = 100, message = "subject name must be 1-100 characters"))]
    pub name: String,
    #[validate(length(min = 1, max = 20, message = "subject code must be 1-20 characters"))]
    pub code: String,
    #[validate(range(min = 1, message = "sessions must be at least 1"))]
    pub sessions: u32,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateSubjectsDto {
    pub class_id: Uuid,
    pub school_id: Uuid,
    #[validate(length(min = 1, message = "subjects must not be empty"), nested)]
    pub subjects: Vec<SubjectSpec>,
}
