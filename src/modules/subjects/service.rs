use std::collections::{HashMap, HashSet};

use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::modules::classes::model::SchoolClass;
use crate::modules::students::model::Student;
use crate::modules::subjects::model::{
    CreateSubjectsDto, Subject, SubjectDetail, SubjectListView,
};
use crate::modules::teachers::model::Teacher;
use crate::store::Store;
use crate::utils::errors::AppError;
use crate::utils::response::DeleteResult;

pub struct SubjectService;

impl SubjectService {
    /// Inserts a batch of subjects for one class.
    ///
    /// The duplicate-code check inspects only the first element of the batch,
    /// as the callers have always submitted batches with a single shared-fate
    /// code path; later elements are inserted unchecked.
    #[instrument(skip(store, dto), fields(subject.count = dto.subjects.len()))]
    pub async fn create_batch(
        store: &Store,
        dto: CreateSubjectsDto,
    ) -> Result<Vec<Subject>, AppError> {
        let subjects = store.collection::<Subject>();

        if let Some(first) = dto.subjects.first()
            && subjects
                .find_one(|s| s.code == first.code && s.school_id == dto.school_id)?
                .is_some()
        {
            warn!(subject.code = %first.code, "Attempted to create subject with existing code");
            return Err(AppError::bad_request(anyhow::anyhow!(
                "Subject code must be unique; it already exists"
            )));
        }

        let batch: Vec<Subject> = dto
            .subjects
            .into_iter()
            .map(|spec| Subject {
                id: Uuid::new_v4(),
                name: spec.name,
                code: spec.code,
                sessions: spec.sessions,
                class_id: dto.class_id,
                school_id: dto.school_id,
                teacher_id: None,
            })
            .collect();
        subjects.insert_many(&batch)?;

        info!(subject.count = batch.len(), "Subjects created");
        Ok(batch)
    }

    #[instrument(skip(store))]
    pub async fn list_by_school(
        store: &Store,
        school_id: Uuid,
    ) -> Result<Vec<SubjectListView>, AppError> {
        let subjects = store
            .collection::<Subject>()
            .find(|s| s.school_id == school_id)?;

        let class_names: HashMap<Uuid, String> = store
            .collection::<SchoolClass>()
            .find(|c| c.school_id == school_id)?
            .into_iter()
            .map(|c| (c.id, c.name))
            .collect();

        Ok(subjects
            .into_iter()
            .map(|s| SubjectListView {
                class_name: class_names.get(&s.class_id).cloned(),
                id: s.id,
                name: s.name,
                code: s.code,
                sessions: s.sessions,
                class_id: s.class_id,
                school_id: s.school_id,
                teacher_id: s.teacher_id,
            })
            .collect())
    }

    #[instrument(skip(store))]
    pub async fn list_by_class(store: &Store, class_id: Uuid) -> Result<Vec<Subject>, AppError> {
        Ok(store
            .collection::<Subject>()
            .find(|s| s.class_id == class_id)?)
    }

    /// Subjects of a class that have no teacher assigned yet.
    #[instrument(skip(store))]
    pub async fn list_free(store: &Store, class_id: Uuid) -> Result<Vec<Subject>, AppError> {
        Ok(store
            .collection::<Subject>()
            .find(|s| s.class_id == class_id && s.teacher_id.is_none())?)
    }

    #[instrument(skip(store))]
    pub async fn get_detail(store: &Store, id: Uuid) -> Result<SubjectDetail, AppError> {
        let subject = store
            .collection::<Subject>()
            .find_by_id(id)?
            .ok_or_else(|| AppError::not_found(anyhow::anyhow!("No subject found")))?;

        let class_name = store
            .collection::<SchoolClass>()
            .find_by_id(subject.class_id)?
            .map(|c| c.name);
        let teacher_name = match subject.teacher_id {
            Some(teacher_id) => store
                .collection::<Teacher>()
                .find_by_id(teacher_id)?
                .map(|t| t.name),
            None => None,
        };

        Ok(SubjectDetail {
            id: subject.id,
            name: subject.name,
            code: subject.code,
            sessions: subject.sessions,
            class_id: subject.class_id,
            class_name,
            school_id: subject.school_id,
            teacher_id: subject.teacher_id,
            teacher_name,
        })
    }

    /// Deletes one subject, unassigns it from any teacher pointing at it,
    /// and scrubs it from every student's exam results and attendance.
    #[instrument(skip(store))]
    pub async fn delete(store: &Store, id: Uuid) -> Result<Subject, AppError> {
        let deleted = store
            .collection::<Subject>()
            .delete_by_id(id)?
            .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Subject not found")))?;

        store
            .collection::<Teacher>()
            .update_many(|t| t.subject_id == Some(id), |t| t.subject_id = None)?;
        store.collection::<Student>().update_many(
            |s| {
                s.exam_results.iter().any(|r| r.subject_id == id)
                    || s.attendance.iter().any(|a| a.subject_id == id)
            },
            |s| {
                s.exam_results.retain(|r| r.subject_id != id);
                s.attendance.retain(|a| a.subject_id != id);
            },
        )?;

        info!(subject.id = %id, "Subject deleted and references scrubbed");
        Ok(deleted)
    }

    #[instrument(skip(store))]
    pub async fn delete_all_for_school(
        store: &Store,
        school_id: Uuid,
    ) -> Result<DeleteResult, AppError> {
        Self::delete_batch(store, |s: &Subject| s.school_id == school_id).await
    }

    #[instrument(skip(store))]
    pub async fn delete_all_for_class(
        store: &Store,
        class_id: Uuid,
    ) -> Result<DeleteResult, AppError> {
        Self::delete_batch(store, |s: &Subject| s.class_id == class_id).await
    }

    /// Bulk delete with the same two cascade effects as [`Self::delete`].
    ///
    /// The matching ids must be captured with a `find` before the delete
    /// executes; a delete only reports an aggregate count, so there is
    /// nothing to recover them from afterwards.
    async fn delete_batch(
        store: &Store,
        filter: impl Fn(&Subject) -> bool,
    ) -> Result<DeleteResult, AppError> {
        let subjects = store.collection::<Subject>();

        let ids: HashSet<Uuid> = subjects.find(&filter)?.into_iter().map(|s| s.id).collect();
        let deleted_count = subjects.delete_many(|s| ids.contains(&s.id))?;

        store.collection::<Teacher>().update_many(
            |t| t.subject_id.is_some_and(|sid| ids.contains(&sid)),
            |t| t.subject_id = None,
        )?;
        store.collection::<Student>().update_many(
            |s| {
                s.exam_results.iter().any(|r| ids.contains(&r.subject_id))
                    || s.attendance.iter().any(|a| ids.contains(&a.subject_id))
            },
            |s| {
                s.exam_results.retain(|r| !ids.contains(&r.subject_id));
                s.attendance.retain(|a| !ids.contains(&a.subject_id));
            },
        )?;

        info!(deleted = %deleted_count, "Subjects deleted and references scrubbed");
        Ok(DeleteResult { deleted_count })
    }
}
