use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;

use crate::entities::cari::{CariTuru, Column, Entity as Cari, Model as CariModel};
use crate::errors::ServiceError;
use crate::repositories::Repository;

use super::{icerir, BaseRepository};

/// Read access to trading parties
#[derive(Debug, Clone)]
pub struct CariRepository {
    base: BaseRepository,
}

impl CariRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// All parties ordered by trade name
    pub async fn find_all(&self) -> Result<Vec<CariModel>, ServiceError> {
        Cari::find()
            .order_by_asc(Column::Unvan)
            .all(self.base.get_db())
            .await
            .map_err(ServiceError::db_error)
    }

    pub async fn find_by_id(&self, cari_id: i32) -> Result<Option<CariModel>, ServiceError> {
        Cari::find_by_id(cari_id)
            .one(self.base.get_db())
            .await
            .map_err(ServiceError::db_error)
    }

    pub async fn find_by_kod(&self, cari_kod: &str) -> Result<Option<CariModel>, ServiceError> {
        Cari::find()
            .filter(Column::CariKod.eq(cari_kod))
            .one(self.base.get_db())
            .await
            .map_err(ServiceError::db_error)
    }

    pub async fn find_by_tur(&self, tur: CariTuru) -> Result<Vec<CariModel>, ServiceError> {
        Cari::find()
            .filter(Column::Tur.eq(tur))
            .order_by_asc(Column::Unvan)
            .all(self.base.get_db())
            .await
            .map_err(ServiceError::db_error)
    }

    pub async fn find_by_vergi_no(
        &self,
        vergi_no: &str,
    ) -> Result<Option<CariModel>, ServiceError> {
        Cari::find()
            .filter(Column::VergiNo.eq(vergi_no))
            .one(self.base.get_db())
            .await
            .map_err(ServiceError::db_error)
    }

    /// Case-insensitive substring match on the trade name
    pub async fn search_by_unvan(&self, term: &str) -> Result<Vec<CariModel>, ServiceError> {
        let hepsi = Cari::find()
            .order_by_asc(Column::Unvan)
            .all(self.base.get_db())
            .await
            .map_err(ServiceError::db_error)?;
        Ok(hepsi.into_iter().filter(|m| icerir(&m.unvan, term)).collect())
    }
}
