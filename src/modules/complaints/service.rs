use std::collections::HashMap;

use tracing::{info, instrument};
use uuid::Uuid;

use crate::modules::complaints::model::{Complaint, ComplaintView, CreateComplaintDto};
use crate::modules::students::model::Student;
use crate::store::Store;
use crate::utils::errors::AppError;

pub struct ComplaintService;

impl ComplaintService {
    #[instrument(skip(store, dto))]
    pub async fn create(store: &Store, dto: CreateComplaintDto) -> Result<Complaint, AppError> {
        let complaint = Complaint {
            id: Uuid::new_v4(),
            user_id: dto.user_id,
            complaint: dto.complaint,
            date: dto.date,
            school_id: dto.school_id,
        };
        store.collection::<Complaint>().insert(&complaint)?;
        info!(complaint.id = %complaint.id, "Complaint filed");
        Ok(complaint)
    }

    #[instrument(skip(store))]
    pub async fn list_by_school(
        store: &Store,
        school_id: Uuid,
    ) -> Result<Vec<ComplaintView>, AppError> {
        let complaints = store
            .collection::<Complaint>()
            .find(|c| c.school_id == school_id)?;
        if complaints.is_empty() {
            return Err(AppError::not_found(anyhow::anyhow!("No complaints found")));
        }

        let student_names: HashMap<Uuid, String> = store
            .collection::<Student>()
            .find(|s| s.school_id == school_id)?
            .into_iter()
            .map(|s| (s.id, s.name))
            .collect();

        Ok(complaints
            .into_iter()
            .map(|c| ComplaintView {
                user_name: student_names.get(&c.user_id).cloned(),
                id: c.id,
                user_id: c.user_id,
                complaint: c.complaint,
                date: c.date,
                school_id: c.school_id,
            })
            .collect())
    }
}
