use std::collections::HashMap;

use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::modules::classes::model::SchoolClass;
use crate::modules::schools::model::School;
use crate::modules::students::model::{
    ExamResult, ExamResultDto, ExamResultView, RegisterStudentDto, Student, StudentAttendance,
    StudentAttendanceDto, StudentAttendanceView, StudentDetail, StudentListView, StudentLoginDto,
    StudentLoginView, StudentView, UpdateStudentDto,
};
use crate::modules::subjects::model::Subject;
use crate::store::Store;
use crate::utils::errors::AppError;
use crate::utils::password::PasswordHasher;
use crate::utils::response::UpdateResult;

pub struct StudentService;

impl StudentService {
    #[instrument(skip(store, hasher, dto), fields(student.roll = %dto.roll_number))]
    pub async fn register(
        store: &Store,
        hasher: &PasswordHasher,
        dto: RegisterStudentDto,
    ) -> Result<StudentView, AppError> {
        let students = store.collection::<Student>();

        if students
            .find_one(|s| {
                s.roll_number == dto.roll_number
                    && s.class_id == dto.class_id
                    && s.school_id == dto.school_id
            })?
            .is_some()
        {
            warn!("Attempted to register student with existing roll number");
            // Historically a 400, not a 409; kept for client compatibility.
            return Err(AppError::bad_request(anyhow::anyhow!(
                "Roll number already exists"
            )));
        }

        let student = Student {
            id: Uuid::new_v4(),
            name: dto.name,
            roll_number: dto.roll_number,
            class_id: dto.class_id,
            school_id: dto.school_id,
            password: hasher.hash(&dto.password)?,
            exam_results: Vec::new(),
            attendance: Vec::new(),
        };
        students.insert(&student)?;

        info!(student.id = %student.id, "Student registered");
        Ok(student.into())
    }

    /// Students authenticate by roll number and exact name rather than an
    /// email. The login response omits results and attendance.
    #[instrument(skip(store, hasher, dto))]
    pub async fn login(
        store: &Store,
        hasher: &PasswordHasher,
        dto: StudentLoginDto,
    ) -> Result<StudentLoginView, AppError> {
        let student = store
            .collection::<Student>()
            .find_one(|s| s.roll_number == dto.roll_number && s.name == dto.student_name)?
            .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Student not found")))?;

        if !hasher.verify(&dto.password, &student.password)? {
            warn!(student.id = %student.id, "Failed student login");
            return Err(AppError::unauthorized(anyhow::anyhow!("Invalid password")));
        }

        let class_name = store
            .collection::<SchoolClass>()
            .find_by_id(student.class_id)?
            .map(|c| c.name);
        let school_name = store
            .collection::<School>()
            .find_by_id(student.school_id)?
            .map(|s| s.school_name);

        Ok(StudentLoginView {
            id: student.id,
            name: student.name,
            roll_number: student.roll_number,
            class_id: student.class_id,
            class_name,
            school_id: student.school_id,
            school_name,
        })
    }

    #[instrument(skip(store))]
    pub async fn list_by_school(
        store: &Store,
        school_id: Uuid,
    ) -> Result<Vec<StudentListView>, AppError> {
        let students = store
            .collection::<Student>()
            .find(|s| s.school_id == school_id)?;

        let class_names: HashMap<Uuid, String> = store
            .collection::<SchoolClass>()
            .find(|c| c.school_id == school_id)?
            .into_iter()
            .map(|c| (c.id, c.name))
            .collect();

        Ok(students
            .into_iter()
            .map(|s| StudentListView {
                class_name: class_names.get(&s.class_id).cloned(),
                id: s.id,
                name: s.name,
                roll_number: s.roll_number,
                class_id: s.class_id,
                school_id: s.school_id,
            })
            .collect())
    }

    #[instrument(skip(store))]
    pub async fn get_detail(store: &Store, id: Uuid) -> Result<StudentDetail, AppError> {
        let student = store
            .collection::<Student>()
            .find_by_id(id)?
            .ok_or_else(|| AppError::not_found(anyhow::anyhow!("No student found")))?;

        let class_name = store
            .collection::<SchoolClass>()
            .find_by_id(student.class_id)?
            .map(|c| c.name);
        let school_name = store
            .collection::<School>()
            .find_by_id(student.school_id)?
            .map(|s| s.school_name);
        let subjects: HashMap<Uuid, (String, u32)> = store
            .collection::<Subject>()
            .find(|s| s.school_id == student.school_id)?
            .into_iter()
            .map(|s| (s.id, (s.name, s.sessions)))
            .collect();

        let exam_results = student
            .exam_results
            .into_iter()
            .map(|r| ExamResultView {
                subject_name: subjects.get(&r.subject_id).map(|(name, _)| name.clone()),
                subject_id: r.subject_id,
                marks_obtained: r.marks_obtained,
            })
            .collect();
        let attendance = student
            .attendance
            .into_iter()
            .map(|a| StudentAttendanceView {
                subject_name: subjects.get(&a.subject_id).map(|(name, _)| name.clone()),
                sessions: subjects.get(&a.subject_id).map(|(_, sessions)| *sessions),
                subject_id: a.subject_id,
                date: a.date,
                status: a.status,
            })
            .collect();

        Ok(StudentDetail {
            id: student.id,
            name: student.name,
            roll_number: student.roll_number,
            class_id: student.class_id,
            class_name,
            school_id: student.school_id,
            school_name,
            exam_results,
            attendance,
        })
    }

    /// Students are leaves: deleting one cascades nowhere.
    #[instrument(skip(store))]
    pub async fn delete(store: &Store, id: Uuid) -> Result<StudentView, AppError> {
        let deleted = store
            .collection::<Student>()
            .delete_by_id(id)?
            .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Student not found")))?;
        info!(student.id = %id, "Student deleted");
        Ok(deleted.into())
    }

    #[instrument(skip(store))]
    pub async fn delete_all_for_school(store: &Store, school_id: Uuid) -> Result<u64, AppError> {
        Ok(store
            .collection::<Student>()
            .delete_many(|s| s.school_id == school_id)?)
    }

    #[instrument(skip(store))]
    pub async fn delete_all_for_class(store: &Store, class_id: Uuid) -> Result<u64, AppError> {
        Ok(store
            .collection::<Student>()
            .delete_many(|s| s.class_id == class_id)?)
    }

    #[instrument(skip(store, hasher, dto))]
    pub async fn update(
        store: &Store,
        hasher: &PasswordHasher,
        id: Uuid,
        dto: UpdateStudentDto,
    ) -> Result<StudentView, AppError> {
        let password = match &dto.password {
            Some(plain) => Some(hasher.hash(plain)?),
            None => None,
        };

        let updated = store
            .collection::<Student>()
            .update_by_id(id, |student| {
                if let Some(name) = dto.name {
                    student.name = name;
                }
                if let Some(roll_number) = dto.roll_number {
                    student.roll_number = roll_number;
                }
                if let Some(class_id) = dto.class_id {
                    student.class_id = class_id;
                }
                if let Some(hash) = password {
                    student.password = hash;
                }
            })?
            .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Student not found")))?;

        Ok(updated.into())
    }

    /// Upserts one exam result, keyed by subject; the whole student record
    /// is persisted back.
    #[instrument(skip(store, dto))]
    pub async fn upsert_exam_result(
        store: &Store,
        id: Uuid,
        dto: ExamResultDto,
    ) -> Result<StudentView, AppError> {
        let students = store.collection::<Student>();
        let mut student = students
            .find_by_id(id)?
            .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Student not found")))?;

        match student
            .exam_results
            .iter()
            .position(|r| r.subject_id == dto.subject_id)
        {
            Some(i) => student.exam_results[i].marks_obtained = dto.marks_obtained,
            None => student.exam_results.push(ExamResult {
                subject_id: dto.subject_id,
                marks_obtained: dto.marks_obtained,
            }),
        }
        students.replace(&student)?;

        Ok(student.into())
    }

    /// Upserts one attendance entry, keyed by (subject, calendar date). A
    /// new entry is refused once the subject's session count is exhausted;
    /// overwriting an existing date never consumes capacity.
    #[instrument(skip(store, dto))]
    pub async fn record_attendance(
        store: &Store,
        id: Uuid,
        dto: StudentAttendanceDto,
    ) -> Result<StudentView, AppError> {
        let students = store.collection::<Student>();
        let mut student = students
            .find_by_id(id)?
            .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Student not found")))?;
        let subject = store
            .collection::<Subject>()
            .find_by_id(dto.subject_id)?
            .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Subject not found")))?;

        let day = dto.date.date_naive();
        match student
            .attendance
            .iter()
            .position(|a| a.subject_id == dto.subject_id && a.date.date_naive() == day)
        {
            Some(i) => student.attendance[i].status = dto.status,
            None => {
                let attended = student
                    .attendance
                    .iter()
                    .filter(|a| a.subject_id == dto.subject_id)
                    .count();
                if attended as u32 >= subject.sessions {
                    warn!(student.id = %id, subject.id = %dto.subject_id, "Attendance limit reached");
                    return Err(AppError::bad_request(anyhow::anyhow!(
                        "Maximum attendance limit reached"
                    )));
                }
                student.attendance.push(StudentAttendance {
                    subject_id: dto.subject_id,
                    date: dto.date,
                    status: dto.status,
                });
            }
        }
        students.replace(&student)?;

        Ok(student.into())
    }

    /// Pulls one subject's entries from every student holding any. Mass
    /// update: matching zero students is a success.
    #[instrument(skip(store))]
    pub async fn clear_attendance_for_subject(
        store: &Store,
        subject_id: Uuid,
    ) -> Result<UpdateResult, AppError> {
        let modified_count = store.collection::<Student>().update_many(
            |s| s.attendance.iter().any(|a| a.subject_id == subject_id),
            |s| s.attendance.retain(|a| a.subject_id != subject_id),
        )?;
        Ok(UpdateResult { modified_count })
    }

    /// Empties the attendance of every student of the school.
    #[instrument(skip(store))]
    pub async fn clear_attendance_for_school(
        store: &Store,
        school_id: Uuid,
    ) -> Result<UpdateResult, AppError> {
        let modified_count = store
            .collection::<Student>()
            .update_many(|s| s.school_id == school_id, |s| s.attendance.clear())?;
        Ok(UpdateResult { modified_count })
    }

    /// Pulls one subject's entries from one student. No existence check; an
    /// unknown student simply modifies nothing.
    #[instrument(skip(store))]
    pub async fn clear_attendance_entry_for_subject(
        store: &Store,
        student_id: Uuid,
        subject_id: Uuid,
    ) -> Result<UpdateResult, AppError> {
        let modified = store
            .collection::<Student>()
            .update_by_id(student_id, |s| {
                s.attendance.retain(|a| a.subject_id != subject_id)
            })?;
        Ok(UpdateResult {
            modified_count: modified.is_some() as u64,
        })
    }

    /// Empties one student's attendance. Same vacuous-success semantics.
    #[instrument(skip(store))]
    pub async fn clear_all_attendance(
        store: &Store,
        student_id: Uuid,
    ) -> Result<UpdateResult, AppError> {
        let modified = store
            .collection::<Student>()
            .update_by_id(student_id, |s| s.attendance.clear())?;
        Ok(UpdateResult {
            modified_count: modified.is_some() as u64,
        })
    }
}
