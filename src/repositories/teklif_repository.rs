use chrono::{DateTime, Utc};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;

use crate::entities::siparis::{self, Entity as Siparis, SiparisDurumu};
use crate::entities::teklif::{self, Entity as Teklif, TeklifDurumu};
use crate::entities::teklif_detay::{self, Entity as TeklifDetay};
use crate::errors::ServiceError;
use crate::repositories::Repository;

use super::BaseRepository;

/// Read access to quotes and their lines
#[derive(Debug, Clone)]
pub struct TeklifRepository {
    base: BaseRepository,
}

impl TeklifRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn find_all(&self) -> Result<Vec<teklif::Model>, ServiceError> {
        Teklif::find()
            .order_by_desc(teklif::Column::TeklifTarihi)
            .all(self.base.get_db())
            .await
            .map_err(ServiceError::db_error)
    }

    pub async fn find_by_id(&self, teklif_id: i32) -> Result<Option<teklif::Model>, ServiceError> {
        Teklif::find_by_id(teklif_id)
            .one(self.base.get_db())
            .await
            .map_err(ServiceError::db_error)
    }

    pub async fn detaylar(&self, teklif_id: i32) -> Result<Vec<teklif_detay::Model>, ServiceError> {
        TeklifDetay::find()
            .filter(teklif_detay::Column::TeklifId.eq(teklif_id))
            .order_by_asc(teklif_detay::Column::DetayId)
            .all(self.base.get_db())
            .await
            .map_err(ServiceError::db_error)
    }

    pub async fn find_by_cari(&self, cari_id: i32) -> Result<Vec<teklif::Model>, ServiceError> {
        Teklif::find()
            .filter(teklif::Column::CariId.eq(cari_id))
            .order_by_desc(teklif::Column::TeklifTarihi)
            .all(self.base.get_db())
            .await
            .map_err(ServiceError::db_error)
    }

    pub async fn find_by_durum(
        &self,
        durum: TeklifDurumu,
    ) -> Result<Vec<teklif::Model>, ServiceError> {
        Teklif::find()
            .filter(teklif::Column::Durum.eq(durum))
            .order_by_desc(teklif::Column::TeklifTarihi)
            .all(self.base.get_db())
            .await
            .map_err(ServiceError::db_error)
    }

    pub async fn find_by_tarih_araligi(
        &self,
        baslangic: DateTime<Utc>,
        bitis: DateTime<Utc>,
    ) -> Result<Vec<teklif::Model>, ServiceError> {
        Teklif::find()
            .filter(teklif::Column::TeklifTarihi.between(baslangic, bitis))
            .order_by_asc(teklif::Column::TeklifTarihi)
            .all(self.base.get_db())
            .await
            .map_err(ServiceError::db_error)
    }
}

#[derive(Debug, Clone)]
pub struct SiparisRepository {
    base: BaseRepository,
}

impl SiparisRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn find_all(&self) -> Result<Vec<siparis::Model>, ServiceError> {
        Siparis::find()
            .order_by_desc(siparis::Column::SiparisTarihi)
            .all(self.base.get_db())
            .await
            .map_err(ServiceError::db_error)
    }

    pub async fn find_by_id(&self, siparis_id: i32) -> Result<Option<siparis::Model>, ServiceError> {
        Siparis::find_by_id(siparis_id)
            .one(self.base.get_db())
            .await
            .map_err(ServiceError::db_error)
    }

    pub async fn find_by_cari(&self, cari_id: i32) -> Result<Vec<siparis::Model>, ServiceError> {
        Siparis::find()
            .filter(siparis::Column::CariId.eq(cari_id))
            .order_by_desc(siparis::Column::SiparisTarihi)
            .all(self.base.get_db())
            .await
            .map_err(ServiceError::db_error)
    }

    pub async fn find_by_teklif(&self, teklif_id: i32) -> Result<Vec<siparis::Model>, ServiceError> {
        Siparis::find()
            .filter(siparis::Column::TeklifId.eq(teklif_id))
            .all(self.base.get_db())
            .await
            .map_err(ServiceError::db_error)
    }

    pub async fn find_by_durum(
        &self,
        durum: SiparisDurumu,
    ) -> Result<Vec<siparis::Model>, ServiceError> {
        Siparis::find()
            .filter(siparis::Column::Durum.eq(durum))
            .order_by_desc(siparis::Column::SiparisTarihi)
            .all(self.base.get_db())
            .await
            .map_err(ServiceError::db_error)
    }

    pub async fn find_by_tarih_araligi(
        &self,
        baslangic: DateTime<Utc>,
        bitis: DateTime<Utc>,
    ) -> Result<Vec<siparis::Model>, ServiceError> {
        Siparis::find()
            .filter(siparis::Column::SiparisTarihi.between(baslangic, bitis))
            .order_by_asc(siparis::Column::SiparisTarihi)
            .all(self.base.get_db())
            .await
            .map_err(ServiceError::db_error)
    }
}
