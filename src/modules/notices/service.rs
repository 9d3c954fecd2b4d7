use tracing::{info, instrument};
use uuid::Uuid;

use crate::modules::notices::model::{CreateNoticeDto, Notice, UpdateNoticeDto};
use crate::store::Store;
use crate::utils::errors::AppError;
use crate::utils::response::DeleteResult;

pub struct NoticeService;

impl NoticeService {
    #[instrument(skip(store, dto))]
    pub async fn create(store: &Store, dto: CreateNoticeDto) -> Result<Notice, AppError> {
        let notice = Notice {
            id: Uuid::new_v4(),
            title: dto.title,
            details: dto.details,
            date: dto.date,
            school_id: dto.school_id,
        };
        store.collection::<Notice>().insert(&notice)?;
        info!(notice.id = %notice.id, "Notice posted");
        Ok(notice)
    }

    #[instrument(skip(store))]
    pub async fn list_by_school(store: &Store, school_id: Uuid) -> Result<Vec<Notice>, AppError> {
        let notices = store
            .collection::<Notice>()
            .find(|n| n.school_id == school_id)?;
        if notices.is_empty() {
            return Err(AppError::not_found(anyhow::anyhow!("No notices found")));
        }
        Ok(notices)
    }

    #[instrument(skip(store, dto))]
    pub async fn update(
        store: &Store,
        id: Uuid,
        dto: UpdateNoticeDto,
    ) -> Result<Notice, AppError> {
        store
            .collection::<Notice>()
            .update_by_id(id, |notice| {
                if let Some(title) = dto.title {
                    notice.title = title;
                }
                if let Some(details) = dto.details {
                    notice.details = details;
                }
                if let Some(date) = dto.date {
                    notice.date = date;
                }
            })?
            .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Notice not found")))
    }

    #[instrument(skip(store))]
    pub async fn delete(store: &Store, id: Uuid) -> Result<Notice, AppError> {
        let deleted = store
            .collection::<Notice>()
            .delete_by_id(id)?
            .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Notice not found")))?;
        info!(notice.id = %id, "Notice deleted");
        Ok(deleted)
    }

    #[instrument(skip(store))]
    pub async fn delete_all_for_school(
        store: &Store,
        school_id: Uuid,
    ) -> Result<DeleteResult, AppError> {
        let deleted_count = store
            .collection::<Notice>()
            .delete_many(|n| n.school_id == school_id)?;
        if deleted_count == 0 {
            return Err(AppError::not_found(anyhow::anyhow!(
                "No notices found to delete"
            )));
        }
        Ok(DeleteResult { deleted_count })
    }
}
