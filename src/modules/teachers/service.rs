use std::collections::{HashMap, HashSet};

use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::modules::classes::model::SchoolClass;
use crate::modules::schools::model::School;
use crate::modules::subjects::model::Subject;
use crate::modules::teachers::model::{
    RegisterTeacherDto, ReassignSubjectDto, Teacher, TeacherAttendance, TeacherAttendanceDto,
    TeacherDetail, TeacherListView, TeacherLoginDto, TeacherView,
};
use crate::store::Store;
use crate::utils::errors::AppError;
use crate::utils::password::PasswordHasher;
use crate::utils::response::DeleteResult;

pub struct TeacherService;

impl TeacherService {
    /// Registers a teacher, then points the chosen subject back at them.
    ///
    /// The back-reference write is a separate step: if it fails, the teacher
    /// record stays and the error is surfaced as-is.
    #[instrument(skip(store, hasher, dto), fields(teacher.email = %dto.email))]
    pub async fn register(
        store: &Store,
        hasher: &PasswordHasher,
        dto: RegisterTeacherDto,
    ) -> Result<TeacherView, AppError> {
        let teachers = store.collection::<Teacher>();

        if teachers.find_one(|t| t.email == dto.email)?.is_some() {
            warn!("Attempted to register teacher with existing email");
            // Historically a 400, not a 409; kept for client compatibility.
            return Err(AppError::bad_request(anyhow::anyhow!(
                "Email already exists"
            )));
        }

        let teacher = Teacher {
            id: Uuid::new_v4(),
            name: dto.name,
            email: dto.email,
            password: hasher.hash(&dto.password)?,
            school_id: dto.school_id,
            class_id: dto.class_id,
            subject_id: Some(dto.subject_id),
            attendance: Vec::new(),
        };
        teachers.insert(&teacher)?;

        store
            .collection::<Subject>()
            .update_by_id(dto.subject_id, |s| s.teacher_id = Some(teacher.id))?;

        info!(teacher.id = %teacher.id, "Teacher registered");
        Ok(teacher.into())
    }

    #[instrument(skip(store, hasher, dto), fields(teacher.email = %dto.email))]
    pub async fn login(
        store: &Store,
        hasher: &PasswordHasher,
        dto: TeacherLoginDto,
    ) -> Result<TeacherDetail, AppError> {
        let teacher = store
            .collection::<Teacher>()
            .find_one(|t| t.email == dto.email)?
            .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Teacher not found")))?;

        if !hasher.verify(&dto.password, &teacher.password)? {
            warn!(teacher.id = %teacher.id, "Failed teacher login");
            return Err(AppError::unauthorized(anyhow::anyhow!("Invalid password")));
        }

        Self::resolve_detail(store, teacher)
    }

    #[instrument(skip(store))]
    pub async fn list_by_school(
        store: &Store,
        school_id: Uuid,
    ) -> Result<Vec<TeacherListView>, AppError> {
        let teachers = store
            .collection::<Teacher>()
            .find(|t| t.school_id == school_id)?;

        let class_names: HashMap<Uuid, String> = store
            .collection::<SchoolClass>()
            .find(|c| c.school_id == school_id)?
            .into_iter()
            .map(|c| (c.id, c.name))
            .collect();
        let subject_names: HashMap<Uuid, String> = store
            .collection::<Subject>()
            .find(|s| s.school_id == school_id)?
            .into_iter()
            .map(|s| (s.id, s.name))
            .collect();

        Ok(teachers
            .into_iter()
            .map(|t| TeacherListView {
                class_name: class_names.get(&t.class_id).cloned(),
                subject_name: t
                    .subject_id
                    .and_then(|sid| subject_names.get(&sid).cloned()),
                id: t.id,
                name: t.name,
                email: t.email,
                school_id: t.school_id,
                class_id: t.class_id,
                subject_id: t.subject_id,
            })
            .collect())
    }

    #[instrument(skip(store))]
    pub async fn get_detail(store: &Store, id: Uuid) -> Result<TeacherDetail, AppError> {
        let teacher = store
            .collection::<Teacher>()
            .find_by_id(id)?
            .ok_or_else(|| AppError::not_found(anyhow::anyhow!("No teacher found")))?;
        Self::resolve_detail(store, teacher)
    }

    /// Moves the teacher to a new subject and points that subject back at
    /// them. The previous subject's back-reference is left untouched; it
    /// still names this teacher until something else overwrites it.
    #[instrument(skip(store))]
    pub async fn reassign_subject(
        store: &Store,
        teacher_id: Uuid,
        dto: ReassignSubjectDto,
    ) -> Result<TeacherView, AppError> {
        let updated = store
            .collection::<Teacher>()
            .update_by_id(teacher_id, |t| t.subject_id = Some(dto.subject_id))?
            .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Teacher not found")))?;

        store
            .collection::<Subject>()
            .update_by_id(dto.subject_id, |s| s.teacher_id = Some(teacher_id))?;

        info!(teacher.id = %teacher_id, subject.id = %dto.subject_id, "Teacher reassigned");
        Ok(updated.into())
    }

    #[instrument(skip(store))]
    pub async fn delete(store: &Store, id: Uuid) -> Result<TeacherView, AppError> {
        let deleted = store
            .collection::<Teacher>()
            .delete_by_id(id)?
            .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Teacher not found")))?;

        store
            .collection::<Subject>()
            .update_many(|s| s.teacher_id == Some(id), |s| s.teacher_id = None)?;

        info!(teacher.id = %id, "Teacher deleted");
        Ok(deleted.into())
    }

    #[instrument(skip(store))]
    pub async fn delete_all_for_school(
        store: &Store,
        school_id: Uuid,
    ) -> Result<DeleteResult, AppError> {
        Self::delete_batch(store, |t: &Teacher| t.school_id == school_id).await
    }

    #[instrument(skip(store))]
    pub async fn delete_all_for_class(
        store: &Store,
        class_id: Uuid,
    ) -> Result<DeleteResult, AppError> {
        Self::delete_batch(store, |t: &Teacher| t.class_id == class_id).await
    }

    /// Bulk delete; the teacher ids are captured with a `find` before the
    /// delete so the subject back-references can be cleared afterwards.
    async fn delete_batch(
        store: &Store,
        filter: impl Fn(&Teacher) -> bool,
    ) -> Result<DeleteResult, AppError> {
        let teachers = store.collection::<Teacher>();

        let ids: HashSet<Uuid> = teachers.find(&filter)?.into_iter().map(|t| t.id).collect();
        if ids.is_empty() {
            return Err(AppError::not_found(anyhow::anyhow!(
                "No teachers found to delete"
            )));
        }

        let deleted_count = teachers.delete_many(|t| ids.contains(&t.id))?;
        store.collection::<Subject>().update_many(
            |s| s.teacher_id.is_some_and(|tid| ids.contains(&tid)),
            |s| s.teacher_id = None,
        )?;

        info!(deleted = %deleted_count, "Teachers deleted and subjects unassigned");
        Ok(DeleteResult { deleted_count })
    }

    /// Upserts one attendance entry, keyed by calendar date; time-of-day on
    /// the submitted timestamp is ignored for matching.
    #[instrument(skip(store, dto))]
    pub async fn record_attendance(
        store: &Store,
        id: Uuid,
        dto: TeacherAttendanceDto,
    ) -> Result<TeacherView, AppError> {
        let updated = store
            .collection::<Teacher>()
            .update_by_id(id, |teacher| {
                let day = dto.date.date_naive();
                match teacher
                    .attendance
                    .iter()
                    .position(|a| a.date.date_naive() == day)
                {
                    Some(i) => teacher.attendance[i].status = dto.status,
                    None => teacher.attendance.push(TeacherAttendance {
                        date: dto.date,
                        status: dto.status,
                    }),
                }
            })?
            .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Teacher not found")))?;

        Ok(updated.into())
    }

    fn resolve_detail(store: &Store, teacher: Teacher) -> Result<TeacherDetail, AppError> {
        let school_name = store
            .collection::<School>()
            .find_by_id(teacher.school_id)?
            .map(|s| s.school_name);
        let class_name = store
            .collection::<SchoolClass>()
            .find_by_id(teacher.class_id)?
            .map(|c| c.name);
        let subject = match teacher.subject_id {
            Some(sid) => store.collection::<Subject>().find_by_id(sid)?,
            None => None,
        };

        Ok(TeacherDetail {
            id: teacher.id,
            name: teacher.name,
            email: teacher.email,
            school_id: teacher.school_id,
            school_name,
            class_id: teacher.class_id,
            class_name,
            subject_id: teacher.subject_id,
            subject_name: subject.as_ref().map(|s| s.name.clone()),
            subject_sessions: subject.map(|s| s.sessions),
            attendance: teacher.attendance,
        })
    }
}
