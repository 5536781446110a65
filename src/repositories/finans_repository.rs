use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;

use crate::entities::cek_senet::{
    self, CekSenetDurumu, CekSenetTuru, CekSenetYonu, Entity as CekSenet,
};
use crate::entities::finans_hareketi::{self, Entity as FinansHareketi, FinansIslemTuru};
use crate::entities::kasa_banka::{self, Entity as KasaBanka, HesapTuru};
use crate::errors::ServiceError;
use crate::repositories::Repository;

use super::{icerir, BaseRepository};

#[derive(Debug, Clone)]
pub struct KasaBankaRepository {
    base: BaseRepository,
}

impl KasaBankaRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn find_all(&self) -> Result<Vec<kasa_banka::Model>, ServiceError> {
        KasaBanka::find()
            .order_by_asc(kasa_banka::Column::HesapAdi)
            .all(self.base.get_db())
            .await
            .map_err(ServiceError::db_error)
    }

    pub async fn find_by_id(
        &self,
        hesap_id: i32,
    ) -> Result<Option<kasa_banka::Model>, ServiceError> {
        KasaBanka::find_by_id(hesap_id)
            .one(self.base.get_db())
            .await
            .map_err(ServiceError::db_error)
    }

    pub async fn find_by_tur(&self, tur: HesapTuru) -> Result<Vec<kasa_banka::Model>, ServiceError> {
        KasaBanka::find()
            .filter(kasa_banka::Column::Tur.eq(tur))
            .order_by_asc(kasa_banka::Column::HesapAdi)
            .all(self.base.get_db())
            .await
            .map_err(ServiceError::db_error)
    }

    pub async fn search_by_ad(&self, term: &str) -> Result<Vec<kasa_banka::Model>, ServiceError> {
        let hepsi = KasaBanka::find()
            .order_by_asc(kasa_banka::Column::HesapAdi)
            .all(self.base.get_db())
            .await
            .map_err(ServiceError::db_error)?;
        Ok(hepsi.into_iter().filter(|m| icerir(&m.hesap_adi, term)).collect())
    }
}

/// Read access to financial movements
#[derive(Debug, Clone)]
pub struct FinansRepository {
    base: BaseRepository,
}

impl FinansRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn find_all(&self) -> Result<Vec<finans_hareketi::Model>, ServiceError> {
        FinansHareketi::find()
            .order_by_desc(finans_hareketi::Column::Tarih)
            .all(self.base.get_db())
            .await
            .map_err(ServiceError::db_error)
    }

    pub async fn find_by_id(
        &self,
        hareket_id: i32,
    ) -> Result<Option<finans_hareketi::Model>, ServiceError> {
        FinansHareketi::find_by_id(hareket_id)
            .one(self.base.get_db())
            .await
            .map_err(ServiceError::db_error)
    }

    pub async fn find_by_hesap(
        &self,
        hesap_id: i32,
    ) -> Result<Vec<finans_hareketi::Model>, ServiceError> {
        FinansHareketi::find()
            .filter(finans_hareketi::Column::HesapId.eq(hesap_id))
            .order_by_desc(finans_hareketi::Column::Tarih)
            .all(self.base.get_db())
            .await
            .map_err(ServiceError::db_error)
    }

    pub async fn find_by_cari(
        &self,
        cari_id: i32,
    ) -> Result<Vec<finans_hareketi::Model>, ServiceError> {
        FinansHareketi::find()
            .filter(finans_hareketi::Column::CariId.eq(cari_id))
            .order_by_desc(finans_hareketi::Column::Tarih)
            .all(self.base.get_db())
            .await
            .map_err(ServiceError::db_error)
    }

    pub async fn find_by_islem_turu(
        &self,
        islem_turu: FinansIslemTuru,
    ) -> Result<Vec<finans_hareketi::Model>, ServiceError> {
        FinansHareketi::find()
            .filter(finans_hareketi::Column::IslemTuru.eq(islem_turu))
            .order_by_desc(finans_hareketi::Column::Tarih)
            .all(self.base.get_db())
            .await
            .map_err(ServiceError::db_error)
    }

    pub async fn find_by_tarih_araligi(
        &self,
        baslangic: DateTime<Utc>,
        bitis: DateTime<Utc>,
    ) -> Result<Vec<finans_hareketi::Model>, ServiceError> {
        FinansHareketi::find()
            .filter(finans_hareketi::Column::Tarih.between(baslangic, bitis))
            .order_by_asc(finans_hareketi::Column::Tarih)
            .all(self.base.get_db())
            .await
            .map_err(ServiceError::db_error)
    }
}

/// Read access to checks and promissory notes
#[derive(Debug, Clone)]
pub struct CekSenetRepository {
    base: BaseRepository,
}

impl CekSenetRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// All documents by due date
    pub async fn find_all(&self) -> Result<Vec<cek_senet::Model>, ServiceError> {
        CekSenet::find()
            .order_by_asc(cek_senet::Column::VadeTarihi)
            .all(self.base.get_db())
            .await
            .map_err(ServiceError::db_error)
    }

    pub async fn find_by_id(&self, evrak_id: i32) -> Result<Option<cek_senet::Model>, ServiceError> {
        CekSenet::find_by_id(evrak_id)
            .one(self.base.get_db())
            .await
            .map_err(ServiceError::db_error)
    }

    pub async fn find_by_tur(
        &self,
        tur: CekSenetTuru,
    ) -> Result<Vec<cek_senet::Model>, ServiceError> {
        CekSenet::find()
            .filter(cek_senet::Column::Tur.eq(tur))
            .order_by_asc(cek_senet::Column::VadeTarihi)
            .all(self.base.get_db())
            .await
            .map_err(ServiceError::db_error)
    }

    pub async fn find_by_yon(
        &self,
        yon: CekSenetYonu,
    ) -> Result<Vec<cek_senet::Model>, ServiceError> {
        CekSenet::find()
            .filter(cek_senet::Column::Yon.eq(yon))
            .order_by_asc(cek_senet::Column::VadeTarihi)
            .all(self.base.get_db())
            .await
            .map_err(ServiceError::db_error)
    }

    pub async fn find_by_durum(
        &self,
        durum: CekSenetDurumu,
    ) -> Result<Vec<cek_senet::Model>, ServiceError> {
        CekSenet::find()
            .filter(cek_senet::Column::Durum.eq(durum))
            .order_by_asc(cek_senet::Column::VadeTarihi)
            .all(self.base.get_db())
            .await
            .map_err(ServiceError::db_error)
    }

    pub async fn find_by_vade_araligi(
        &self,
        baslangic: NaiveDate,
        bitis: NaiveDate,
    ) -> Result<Vec<cek_senet::Model>, ServiceError> {
        CekSenet::find()
            .filter(cek_senet::Column::VadeTarihi.between(baslangic, bitis))
            .order_by_asc(cek_senet::Column::VadeTarihi)
            .all(self.base.get_db())
            .await
            .map_err(ServiceError::db_error)
    }
}
