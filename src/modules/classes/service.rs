use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::modules::classes::model::{ClassDetail, CreateClassDto, SchoolClass};
use crate::modules::schools::model::School;
use crate::modules::students::model::{Student, StudentView};
use crate::modules::subjects::model::Subject;
use crate::modules::teachers::model::Teacher;
use crate::store::Store;
use crate::utils::errors::AppError;
use crate::utils::response::DeleteResult;

pub struct ClassService;

impl ClassService {
    #[instrument(skip(store, dto), fields(class.name = %dto.name))]
    pub async fn create(store: &Store, dto: CreateClassDto) -> Result<SchoolClass, AppError> {
        let classes = store.collection::<SchoolClass>();

        if classes
            .find_one(|c| c.name == dto.name && c.school_id == dto.school_id)?
            .is_some()
        {
            warn!("Attempted to create class with existing name");
            return Err(AppError::conflict(anyhow::anyhow!(
                "Class name already exists"
            )));
        }

        let class = SchoolClass {
            id: Uuid::new_v4(),
            name: dto.name,
            school_id: dto.school_id,
        };
        classes.insert(&class)?;

        info!(class.id = %class.id, "Class created");
        Ok(class)
    }

    /// Empty result set is reported as not-found, by convention.
    #[instrument(skip(store))]
    pub async fn list_by_school(
        store: &Store,
        school_id: Uuid,
    ) -> Result<Vec<SchoolClass>, AppError> {
        let classes = store
            .collection::<SchoolClass>()
            .find(|c| c.school_id == school_id)?;

        if classes.is_empty() {
            return Err(AppError::not_found(anyhow::anyhow!("No classes found")));
        }
        Ok(classes)
    }

    #[instrument(skip(store))]
    pub async fn get_detail(store: &Store, id: Uuid) -> Result<ClassDetail, AppError> {
        let class = store
            .collection::<SchoolClass>()
            .find_by_id(id)?
            .ok_or_else(|| AppError::not_found(anyhow::anyhow!("No class found")))?;

        let school_name = store
            .collection::<School>()
            .find_by_id(class.school_id)?
            .map(|s| s.school_name);

        Ok(ClassDetail {
            id: class.id,
            name: class.name,
            school_id: class.school_id,
            school_name,
        })
    }

    #[instrument(skip(store))]
    pub async fn list_students(store: &Store, class_id: Uuid) -> Result<Vec<StudentView>, AppError> {
        let students = store
            .collection::<Student>()
            .find(|s| s.class_id == class_id)?;

        if students.is_empty() {
            return Err(AppError::not_found(anyhow::anyhow!("No students found")));
        }
        Ok(students.into_iter().map(StudentView::from).collect())
    }

    /// Deletes the class and everything bound to it (students, subjects,
    /// teachers of that class). Sequential writes, no rollback.
    #[instrument(skip(store))]
    pub async fn delete(store: &Store, id: Uuid) -> Result<SchoolClass, AppError> {
        let deleted = store
            .collection::<SchoolClass>()
            .delete_by_id(id)?
            .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Class not found")))?;

        store
            .collection::<Student>()
            .delete_many(|s| s.class_id == id)?;
        store
            .collection::<Subject>()
            .delete_many(|s| s.class_id == id)?;
        store
            .collection::<Teacher>()
            .delete_many(|t| t.class_id == id)?;

        info!(class.id = %id, "Class deleted with scoped records");
        Ok(deleted)
    }

    /// Bulk variant of [`Self::delete`], scoped by school.
    #[instrument(skip(store))]
    pub async fn delete_all_for_school(
        store: &Store,
        school_id: Uuid,
    ) -> Result<DeleteResult, AppError> {
        let deleted_count = store
            .collection::<SchoolClass>()
            .delete_many(|c| c.school_id == school_id)?;

        if deleted_count == 0 {
            return Err(AppError::not_found(anyhow::anyhow!(
                "No classes found to delete"
            )));
        }

        store
            .collection::<Student>()
            .delete_many(|s| s.school_id == school_id)?;
        store
            .collection::<Subject>()
            .delete_many(|s| s.school_id == school_id)?;
        store
            .collection::<Teacher>()
            .delete_many(|t| t.school_id == school_id)?;

        info!(school.id = %school_id, deleted = %deleted_count, "Classes deleted with scoped records");
        Ok(DeleteResult { deleted_count })
    }
}
