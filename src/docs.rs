use utoipa::OpenApi;

use crate::modules::classes::model::{ClassDetail, CreateClassDto, SchoolClass};
use crate::modules::complaints::model::{Complaint, ComplaintView, CreateComplaintDto};
use crate::modules::notices::model::{CreateNoticeDto, Notice, UpdateNoticeDto};
use crate::modules::schools::model::{
    RegisterSchoolDto, SchoolLoginDto, SchoolView, UpdateSchoolDto,
};
use crate::modules::students::model::{
    ExamResult, ExamResultDto, ExamResultView, RegisterStudentDto, StudentAttendance,
    StudentAttendanceDto, StudentAttendanceView, StudentDetail, StudentListView, StudentLoginDto,
    StudentLoginView, StudentView, UpdateStudentDto,
};
use crate::modules::subjects::model::{
    CreateSubjectsDto, Subject, SubjectDetail, SubjectListView, SubjectSpec,
};
use crate::modules::teachers::model::{
    ReassignSubjectDto, RegisterTeacherDto, TeacherAttendance, TeacherAttendanceDto, TeacherDetail,
    TeacherListView, TeacherLoginDto, TeacherView,
};
use crate::modules::value_types::AttendanceStatus;
use crate::utils::response::{DeleteResult, Message, UpdateResult};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::schools::controller::register_school,
        crate::modules::schools::controller::school_login,
        crate::modules::schools::controller::get_school,
        crate::modules::schools::controller::update_school,
        crate::modules::schools::controller::delete_school,
        crate::modules::classes::controller::create_class,
        crate::modules::classes::controller::get_classes,
        crate::modules::classes::controller::get_class_detail,
        crate::modules::classes::controller::get_class_students,
        crate::modules::classes::controller::delete_class,
        crate::modules::classes::controller::delete_classes,
        crate::modules::subjects::controller::create_subjects,
        crate::modules::subjects::controller::get_subjects,
        crate::modules::subjects::controller::get_class_subjects,
        crate::modules::subjects::controller::get_free_subjects,
        crate::modules::subjects::controller::get_subject_detail,
        crate::modules::subjects::controller::delete_subject,
        crate::modules::subjects::controller::delete_subjects,
        crate::modules::subjects::controller::delete_class_subjects,
        crate::modules::teachers::controller::register_teacher,
        crate::modules::teachers::controller::teacher_login,
        crate::modules::teachers::controller::get_teachers,
        crate::modules::teachers::controller::get_teacher_detail,
        crate::modules::teachers::controller::reassign_teacher_subject,
        crate::modules::teachers::controller::record_teacher_attendance,
        crate::modules::teachers::controller::delete_teacher,
        crate::modules::teachers::controller::delete_teachers,
        crate::modules::teachers::controller::delete_class_teachers,
        crate::modules::students::controller::register_student,
        crate::modules::students::controller::student_login,
        crate::modules::students::controller::get_students,
        crate::modules::students::controller::get_student_detail,
        crate::modules::students::controller::update_student,
        crate::modules::students::controller::delete_student,
        crate::modules::students::controller::delete_students,
        crate::modules::students::controller::delete_class_students,
        crate::modules::students::controller::update_exam_result,
        crate::modules::students::controller::record_student_attendance,
        crate::modules::students::controller::clear_subject_attendance,
        crate::modules::students::controller::clear_school_attendance,
        crate::modules::students::controller::clear_student_subject_attendance,
        crate::modules::students::controller::clear_student_attendance,
        crate::modules::notices::controller::create_notice,
        crate::modules::notices::controller::get_notices,
        crate::modules::notices::controller::update_notice,
        crate::modules::notices::controller::delete_notice,
        crate::modules::notices::controller::delete_notices,
        crate::modules::complaints::controller::create_complaint,
        crate::modules::complaints::controller::get_complaints,
    ),
    components(
        schemas(
            AttendanceStatus,
            SchoolView,
            RegisterSchoolDto,
            SchoolLoginDto,
            UpdateSchoolDto,
            SchoolClass,
            ClassDetail,
            CreateClassDto,
            Subject,
            SubjectListView,
            SubjectDetail,
            SubjectSpec,
            CreateSubjectsDto,
            TeacherView,
            TeacherListView,
            TeacherDetail,
            TeacherAttendance,
            RegisterTeacherDto,
            TeacherLoginDto,
            ReassignSubjectDto,
            TeacherAttendanceDto,
            StudentView,
            StudentListView,
            StudentLoginView,
            StudentDetail,
            ExamResult,
            ExamResultView,
            StudentAttendance,
            StudentAttendanceView,
            RegisterStudentDto,
            StudentLoginDto,
            UpdateStudentDto,
            ExamResultDto,
            StudentAttendanceDto,
            Notice,
            CreateNoticeDto,
            UpdateNoticeDto,
            Complaint,
            ComplaintView,
            CreateComplaintDto,
            Message,
            DeleteResult,
            UpdateResult,
        )
    ),
    tags(
        (name = "Schools", description = "School account registration and management"),
        (name = "Classes", description = "Class registry"),
        (name = "Subjects", description = "Subject catalog and assignments"),
        (name = "Teachers", description = "Teacher directory and attendance"),
        (name = "Students", description = "Student directory, exam results and attendance"),
        (name = "Notices", description = "School notice board"),
        (name = "Complaints", description = "Student complaint log")
    ),
    info(
        title = "Classtrack API",
        description = "Multi-tenant school management REST API",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;
