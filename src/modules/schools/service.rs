use chrono::Utc;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::modules::classes::model::SchoolClass;
use crate::modules::complaints::model::Complaint;
use crate::modules::notices::model::Notice;
use crate::modules::schools::model::{
    RegisterSchoolDto, School, SchoolLoginDto, SchoolView, UpdateSchoolDto,
};
use crate::modules::students::model::Student;
use crate::modules::subjects::model::Subject;
use crate::modules::teachers::model::Teacher;
use crate::store::Store;
use crate::utils::errors::AppError;
use crate::utils::password::PasswordHasher;

pub struct SchoolService;

impl SchoolService {
    #[instrument(skip(store, hasher, dto), fields(school.name = %dto.school_name))]
    pub async fn register(
        store: &Store,
        hasher: &PasswordHasher,
        dto: RegisterSchoolDto,
    ) -> Result<SchoolView, AppError> {
        let schools = store.collection::<School>();

        if schools.find_one(|s| s.email == dto.email)?.is_some() {
            warn!("Attempted to register school with existing email");
            return Err(AppError::conflict(anyhow::anyhow!("Email already exists")));
        }
        if schools
            .find_one(|s| s.school_name == dto.school_name)?
            .is_some()
        {
            warn!("Attempted to register school with existing name");
            return Err(AppError::conflict(anyhow::anyhow!(
                "School name already exists"
            )));
        }

        let school = School {
            id: Uuid::new_v4(),
            school_name: dto.school_name,
            email: dto.email,
            password: hasher.hash(&dto.password)?,
            created_at: Utc::now(),
        };
        schools.insert(&school)?;

        info!(school.id = %school.id, "School registered");
        Ok(school.into())
    }

    #[instrument(skip(store, hasher, dto), fields(school.email = %dto.email))]
    pub async fn login(
        store: &Store,
        hasher: &PasswordHasher,
        dto: SchoolLoginDto,
    ) -> Result<SchoolView, AppError> {
        let school = store
            .collection::<School>()
            .find_one(|s| s.email == dto.email)?
            .ok_or_else(|| AppError::not_found(anyhow::anyhow!("School not found")))?;

        if !hasher.verify(&dto.password, &school.password)? {
            warn!(school.id = %school.id, "Failed school login");
            return Err(AppError::unauthorized(anyhow::anyhow!("Invalid password")));
        }

        Ok(school.into())
    }

    #[instrument(skip(store))]
    pub async fn get(store: &Store, id: Uuid) -> Result<SchoolView, AppError> {
        let school = store
            .collection::<School>()
            .find_by_id(id)?
            .ok_or_else(|| AppError::not_found(anyhow::anyhow!("No school found")))?;
        Ok(school.into())
    }

    #[instrument(skip(store, hasher, dto))]
    pub async fn update(
        store: &Store,
        hasher: &PasswordHasher,
        id: Uuid,
        dto: UpdateSchoolDto,
    ) -> Result<SchoolView, AppError> {
        let password = match &dto.password {
            Some(plain) => Some(hasher.hash(plain)?),
            None => None,
        };

        let updated = store
            .collection::<School>()
            .update_by_id(id, |school| {
                if let Some(name) = dto.school_name {
                    school.school_name = name;
                }
                if let Some(email) = dto.email {
                    school.email = email;
                }
                if let Some(hash) = password {
                    school.password = hash;
                }
            })?
            .ok_or_else(|| AppError::not_found(anyhow::anyhow!("School not found")))?;

        Ok(updated.into())
    }

    /// Removes the school and everything scoped to it. The per-collection
    /// deletes are independent of one another and run in arbitrary order; a
    /// failure partway leaves earlier deletes committed.
    #[instrument(skip(store))]
    pub async fn delete(store: &Store, id: Uuid) -> Result<(), AppError> {
        if store.collection::<School>().delete_by_id(id)?.is_none() {
            return Err(AppError::not_found(anyhow::anyhow!("School not found")));
        }

        store
            .collection::<SchoolClass>()
            .delete_many(|c| c.school_id == id)?;
        store
            .collection::<Student>()
            .delete_many(|s| s.school_id == id)?;
        store
            .collection::<Teacher>()
            .delete_many(|t| t.school_id == id)?;
        store
            .collection::<Subject>()
            .delete_many(|s| s.school_id == id)?;
        store
            .collection::<Notice>()
            .delete_many(|n| n.school_id == id)?;
        store
            .collection::<Complaint>()
            .delete_many(|c| c.school_id == id)?;

        info!(school.id = %id, "School deleted with all scoped records");
        Ok(())
    }
}
