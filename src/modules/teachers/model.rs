use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::modules::value_types::AttendanceStatus;
use crate::store::Document;

/// Stored teacher document. A teacher teaches exactly one subject at a time;
/// `subject_id` is cleared when that subject is deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Teacher {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password: String,
    pub school_id: Uuid,
    pub class_id: Uuid,
    pub subject_id: Option<Uuid>,
    /// At most one entry per calendar date.
    pub attendance: Vec<TeacherAttendance>,
}

impl Document for Teacher {
    const COLLECTION: &'static str = "teachers";

    fn id(&self) -> Uuid {
        self.id
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TeacherAttendance {
    pub date: DateTime<Utc>,
    pub status: AttendanceStatus,
}

/// Teacher with the password hash stripped.
#[derive(Debug, Serialize, ToSchema)]
pub struct TeacherView {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub school_id: Uuid,
    pub class_id: Uuid,
    pub subject_id: Option<Uuid>,
    pub attendance: Vec<TeacherAttendance>,
}

impl From<Teacher> for TeacherView {
    fn from(teacher: Teacher) -> Self {
        Self {
            id: teacher.id,
            name: teacher.name,
            email: teacher.email,
            school_id: teacher.school_id,
            class_id: teacher.class_id,
            subject_id: teacher.subject_id,
            attendance: teacher.attendance,
        }
    }
}

/// Listing shape: subject and class names resolved, no attendance payload.
#[derive(Debug, Serialize, ToSchema)]
pub struct TeacherListView {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub school_id: Uuid,
    pub class_id: Uuid,
    pub class_name: Option<String>,
    pub subject_id: Option<Uuid>,
    pub subject_name: Option<String>,
}

/// Full detail: every display reference resolved.
#[derive(Debug, Serialize, ToSchema)]
pub struct TeacherDetail {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub school_id: Uuid,
    pub school_name: Option<String>,
    pub class_id: Uuid,
    pub class_name: Option<String>,
    pub subject_id: Option<Uuid>,
    pub subject_name: Option<String>,
    pub subject_sessions: Option<u32>,
    pub attendance: Vec<TeacherAttendance>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterTeacherDto {
    #[validate(length(min = 1, max = 100, message = "name must be 1-100 characters"))]
    pub name: String,
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    #[validate(length(min = 6, message = "password must be at least 6 characters"))]
    pub password: String,
    pub school_id: Uuid,
    pub class_id: Uuid,
    pub subject_id: Uuid,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct TeacherLoginDto {
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ReassignSubjectDto {
    pub subject_id: Uuid,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct TeacherAttendanceDto {
    pub date: DateTime<Utc>,
    pub status: AttendanceStatus,
}
