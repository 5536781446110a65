use chrono::NaiveDate;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;

use crate::entities::kur::{self, Entity as Kur};
use crate::entities::para_birimi::{self, Entity as ParaBirimi};
use crate::errors::ServiceError;
use crate::repositories::Repository;

use super::BaseRepository;

/// Read access to currencies and their exchange-rate history
#[derive(Debug, Clone)]
pub struct ParaBirimiRepository {
    base: BaseRepository,
}

impl ParaBirimiRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn find_all(&self) -> Result<Vec<para_birimi::Model>, ServiceError> {
        ParaBirimi::find()
            .order_by_asc(para_birimi::Column::ParaKod)
            .all(self.base.get_db())
            .await
            .map_err(ServiceError::db_error)
    }

    pub async fn find_by_kod(
        &self,
        para_kod: &str,
    ) -> Result<Option<para_birimi::Model>, ServiceError> {
        ParaBirimi::find_by_id(para_kod.to_string())
            .one(self.base.get_db())
            .await
            .map_err(ServiceError::db_error)
    }

    /// Rate history of one currency, newest first
    pub async fn kur_gecmisi(&self, para_kod: &str) -> Result<Vec<kur::Model>, ServiceError> {
        Kur::find()
            .filter(kur::Column::ParaKod.eq(para_kod))
            .order_by_desc(kur::Column::KurTarihi)
            .order_by_desc(kur::Column::KurId)
            .all(self.base.get_db())
            .await
            .map_err(ServiceError::db_error)
    }

    /// Rate recorded for exactly `tarih`; the latest entry wins when several exist
    pub async fn kur_bul(
        &self,
        para_kod: &str,
        tarih: NaiveDate,
    ) -> Result<Option<kur::Model>, ServiceError> {
        Kur::find()
            .filter(kur::Column::ParaKod.eq(para_kod))
            .filter(kur::Column::KurTarihi.eq(tarih))
            .order_by_desc(kur::Column::KurId)
            .one(self.base.get_db())
            .await
            .map_err(ServiceError::db_error)
    }

    pub async fn find_kurlar_arasinda(
        &self,
        baslangic: NaiveDate,
        bitis: NaiveDate,
    ) -> Result<Vec<kur::Model>, ServiceError> {
        Kur::find()
            .filter(kur::Column::KurTarihi.between(baslangic, bitis))
            .order_by_asc(kur::Column::KurTarihi)
            .order_by_asc(kur::Column::ParaKod)
            .all(self.base.get_db())
            .await
            .map_err(ServiceError::db_error)
    }

    /// Most recent rate of a currency
    pub async fn guncel_kur(&self, para_kod: &str) -> Result<Option<kur::Model>, ServiceError> {
        Kur::find()
            .filter(kur::Column::ParaKod.eq(para_kod))
            .order_by_desc(kur::Column::KurTarihi)
            .order_by_desc(kur::Column::KurId)
            .one(self.base.get_db())
            .await
            .map_err(ServiceError::db_error)
    }
}
