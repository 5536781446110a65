use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;

use crate::entities::hizmet::{Column, Entity as Hizmet, HizmetTuru, Model as HizmetModel};
use crate::errors::ServiceError;
use crate::repositories::Repository;

use super::{icerir, BaseRepository};

#[derive(Debug, Clone)]
pub struct HizmetRepository {
    base: BaseRepository,
}

impl HizmetRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn find_all(&self) -> Result<Vec<HizmetModel>, ServiceError> {
        Hizmet::find()
            .order_by_asc(Column::HizmetAd)
            .all(self.base.get_db())
            .await
            .map_err(ServiceError::db_error)
    }

    pub async fn find_by_id(&self, hizmet_id: i32) -> Result<Option<HizmetModel>, ServiceError> {
        Hizmet::find_by_id(hizmet_id)
            .one(self.base.get_db())
            .await
            .map_err(ServiceError::db_error)
    }

    pub async fn find_by_tur(&self, tur: HizmetTuru) -> Result<Vec<HizmetModel>, ServiceError> {
        Hizmet::find()
            .filter(Column::Tur.eq(tur))
            .order_by_asc(Column::HizmetAd)
            .all(self.base.get_db())
            .await
            .map_err(ServiceError::db_error)
    }

    pub async fn search_by_ad(&self, term: &str) -> Result<Vec<HizmetModel>, ServiceError> {
        let hepsi = Hizmet::find()
            .order_by_asc(Column::HizmetAd)
            .all(self.base.get_db())
            .await
            .map_err(ServiceError::db_error)?;
        Ok(hepsi.into_iter().filter(|m| icerir(&m.hizmet_ad, term)).collect())
    }
}
