use chrono::{DateTime, Utc};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;

use crate::entities::atik::{self, Entity as Atik};
use crate::entities::atik_nedeni::{self, Entity as AtikNedeni};
use crate::errors::ServiceError;
use crate::repositories::Repository;

use super::BaseRepository;

/// Read access to waste records and their reasons
#[derive(Debug, Clone)]
pub struct AtikRepository {
    base: BaseRepository,
}

impl AtikRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn nedenler(&self) -> Result<Vec<atik_nedeni::Model>, ServiceError> {
        AtikNedeni::find()
            .order_by_asc(atik_nedeni::Column::Aciklama)
            .all(self.base.get_db())
            .await
            .map_err(ServiceError::db_error)
    }

    pub async fn find_all(&self) -> Result<Vec<atik::Model>, ServiceError> {
        Atik::find()
            .order_by_desc(atik::Column::Tarih)
            .all(self.base.get_db())
            .await
            .map_err(ServiceError::db_error)
    }

    pub async fn find_by_urun(&self, urun_id: i32) -> Result<Vec<atik::Model>, ServiceError> {
        Atik::find()
            .filter(atik::Column::UrunId.eq(urun_id))
            .order_by_desc(atik::Column::Tarih)
            .all(self.base.get_db())
            .await
            .map_err(ServiceError::db_error)
    }

    pub async fn find_by_tarih_araligi(
        &self,
        baslangic: DateTime<Utc>,
        bitis: DateTime<Utc>,
    ) -> Result<Vec<atik::Model>, ServiceError> {
        Atik::find()
            .filter(atik::Column::Tarih.between(baslangic, bitis))
            .order_by_asc(atik::Column::Tarih)
            .all(self.base.get_db())
            .await
            .map_err(ServiceError::db_error)
    }
}
