use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::modules::value_types::AttendanceStatus;
use crate::store::Document;

/// Stored student document. Roll numbers are unique within a class of a
/// school. Exam results hold at most one entry per subject; attendance holds
/// at most one entry per (subject, calendar date) and is bounded per subject
/// by that subject's session count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    pub id: Uuid,
    pub name: String,
    pub roll_number: u32,
    pub class_id: Uuid,
    pub school_id: Uuid,
    pub password: String,
    pub exam_results: Vec<ExamResult>,
    pub attendance: Vec<StudentAttendance>,
}

impl Document for Student {
    const COLLECTION: &'static str = "students";

    fn id(&self) -> Uuid {
        self.id
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ExamResult {
    pub subject_id: Uuid,
    pub marks_obtained: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StudentAttendance {
    pub subject_id: Uuid,
    pub date: DateTime<Utc>,
    pub status: AttendanceStatus,
}

/// Student with the password hash stripped.
#[derive(Debug, Serialize, ToSchema)]
pub struct StudentView {
    pub id: Uuid,
    pub name: String,
    pub roll_number: u32,
    pub class_id: Uuid,
    pub school_id: Uuid,
    pub exam_results: Vec<ExamResult>,
    pub attendance: Vec<StudentAttendance>,
}

impl From<Student> for StudentView {
    fn from(student: Student) -> Self {
        Self {
            id: student.id,
            name: student.name,
            roll_number: student.roll_number,
            class_id: student.class_id,
            school_id: student.school_id,
            exam_results: student.exam_results,
            attendance: student.attendance,
        }
    }
}

/// Listing shape with the class name resolved.
#[derive(Debug, Serialize, ToSchema)]
pub struct StudentListView {
    pub id: Uuid,
    pub name: String,
    pub roll_number: u32,
    pub class_id: Uuid,
    pub class_name: Option<String>,
    pub school_id: Uuid,
}

/// Login response: display references resolved, results and attendance
/// intentionally omitted (fetch the detail endpoint for those).
#[derive(Debug, Serialize, ToSchema)]
pub struct StudentLoginView {
    pub id: Uuid,
    pub name: String,
    pub roll_number: u32,
    pub class_id: Uuid,
    pub class_name: Option<String>,
    pub school_id: Uuid,
    pub school_name: Option<String>,
}

/// Full detail: subject names resolved into results and attendance, and the
/// owning subject's session bound echoed on each attendance entry.
#[derive(Debug, Serialize, ToSchema)]
pub struct StudentDetail {
    pub id: Uuid,
    pub name: String,
    pub roll_number: u32,
    pub class_id: Uuid,
    pub class_name: Option<String>,
    pub school_id: Uuid,
    pub school_name: Option<String>,
    pub exam_results: Vec<ExamResultView>,
    pub attendance: Vec<StudentAttendanceView>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ExamResultView {
    pub subject_id: Uuid,
    pub subject_name: Option<String>,
    pub marks_obtained: u32,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StudentAttendanceView {
    pub subject_id: Uuid,
    pub subject_name: Option<String>,
    pub sessions: Option<u32>,
    pub date: DateTime<Utc>,
    pub status: AttendanceStatus,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterStudentDto {
    #[validate(length(min = 1, max = 100, message = "name must be 1-100 characters"))]
    pub name: String,
    pub roll_number: u32,
    pub class_id: Uuid,
    pub school_id: Uuid,
    #[validate(length(min = 6, message = "password must be at least 6 characters"))]
    pub password: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct StudentLoginDto {
    pub roll_number: u32,
    #[validate(length(min = 1, message = "student_name is required"))]
    pub student_name: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateStudentDto {
    #[validate(length(min = 1, max = 100, message = "name must be 1-100 characters"))]
    pub name: Option<String>,
    pub roll_number: Option<u32>,
    pub class_id: Option<Uuid>,
    #[validate(length(min = 6, message = "password must be at least 6 characters"))]
    pub password: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ExamResultDto {
    pub subject_id: Uuid,
    #[validate(range(max = 100, message = "marks_obtained must be at most 100"))]
    pub marks_obtained: u32,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct StudentAttendanceDto {
    pub subject_id: Uuid,
    pub date: DateTime<Utc>,
    pub status: AttendanceStatus,
}
