use chrono::{DateTime, Utc};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;

use crate::entities::fatura::{self, Entity as Fatura, FaturaTuru};
use crate::entities::fatura_hizmet_kalemi::{self, Entity as FaturaHizmetKalemi};
use crate::entities::stok_giris_cikis::{self, Entity as StokGirisCikis, StokIslemTuru};
use crate::errors::ServiceError;
use crate::repositories::Repository;

use super::BaseRepository;

/// Read access to invoices and the lines they own
#[derive(Debug, Clone)]
pub struct FaturaRepository {
    base: BaseRepository,
}

impl FaturaRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// All invoices, newest first
    pub async fn find_all(&self) -> Result<Vec<fatura::Model>, ServiceError> {
        Fatura::find()
            .order_by_desc(fatura::Column::FaturaTarihi)
            .all(self.base.get_db())
            .await
            .map_err(ServiceError::db_error)
    }

    pub async fn find_by_id(&self, fatura_id: i32) -> Result<Option<fatura::Model>, ServiceError> {
        Fatura::find_by_id(fatura_id)
            .one(self.base.get_db())
            .await
            .map_err(ServiceError::db_error)
    }

    pub async fn find_by_cari(&self, cari_id: i32) -> Result<Vec<fatura::Model>, ServiceError> {
        Fatura::find()
            .filter(fatura::Column::CariId.eq(cari_id))
            .order_by_desc(fatura::Column::FaturaTarihi)
            .all(self.base.get_db())
            .await
            .map_err(ServiceError::db_error)
    }

    pub async fn find_by_tur(&self, tur: FaturaTuru) -> Result<Vec<fatura::Model>, ServiceError> {
        Fatura::find()
            .filter(fatura::Column::Tur.eq(tur))
            .order_by_desc(fatura::Column::FaturaTarihi)
            .all(self.base.get_db())
            .await
            .map_err(ServiceError::db_error)
    }

    pub async fn find_by_fatura_no(
        &self,
        fatura_no: &str,
    ) -> Result<Option<fatura::Model>, ServiceError> {
        Fatura::find()
            .filter(fatura::Column::FaturaNo.eq(fatura_no))
            .one(self.base.get_db())
            .await
            .map_err(ServiceError::db_error)
    }

    /// Invoices dated within `[baslangic, bitis]`, optionally of one type
    pub async fn find_by_tarih_araligi(
        &self,
        baslangic: DateTime<Utc>,
        bitis: DateTime<Utc>,
        tur: Option<FaturaTuru>,
    ) -> Result<Vec<fatura::Model>, ServiceError> {
        let mut query = Fatura::find().filter(fatura::Column::FaturaTarihi.between(baslangic, bitis));
        if let Some(tur) = tur {
            query = query.filter(fatura::Column::Tur.eq(tur));
        }
        query
            .order_by_asc(fatura::Column::FaturaTarihi)
            .all(self.base.get_db())
            .await
            .map_err(ServiceError::db_error)
    }

    pub async fn stok_hareketleri(
        &self,
        fatura_id: i32,
    ) -> Result<Vec<stok_giris_cikis::Model>, ServiceError> {
        StokGirisCikis::find()
            .filter(stok_giris_cikis::Column::FaturaId.eq(fatura_id))
            .order_by_asc(stok_giris_cikis::Column::HareketId)
            .all(self.base.get_db())
            .await
            .map_err(ServiceError::db_error)
    }

    pub async fn hizmet_kalemleri(
        &self,
        fatura_id: i32,
    ) -> Result<Vec<fatura_hizmet_kalemi::Model>, ServiceError> {
        FaturaHizmetKalemi::find()
            .filter(fatura_hizmet_kalemi::Column::FaturaId.eq(fatura_id))
            .order_by_asc(fatura_hizmet_kalemi::Column::KalemId)
            .all(self.base.get_db())
            .await
            .map_err(ServiceError::db_error)
    }

    pub async fn find_all_stok_hareketleri(
        &self,
    ) -> Result<Vec<stok_giris_cikis::Model>, ServiceError> {
        StokGirisCikis::find()
            .order_by_desc(stok_giris_cikis::Column::Tarih)
            .all(self.base.get_db())
            .await
            .map_err(ServiceError::db_error)
    }

    pub async fn find_stok_hareketi(
        &self,
        hareket_id: i32,
    ) -> Result<Option<stok_giris_cikis::Model>, ServiceError> {
        StokGirisCikis::find_by_id(hareket_id)
            .one(self.base.get_db())
            .await
            .map_err(ServiceError::db_error)
    }

    pub async fn stok_hareketleri_by_urun(
        &self,
        urun_id: i32,
    ) -> Result<Vec<stok_giris_cikis::Model>, ServiceError> {
        StokGirisCikis::find()
            .filter(stok_giris_cikis::Column::UrunId.eq(urun_id))
            .order_by_desc(stok_giris_cikis::Column::Tarih)
            .all(self.base.get_db())
            .await
            .map_err(ServiceError::db_error)
    }

    pub async fn stok_hareketleri_by_islem_turu(
        &self,
        islem_turu: StokIslemTuru,
    ) -> Result<Vec<stok_giris_cikis::Model>, ServiceError> {
        StokGirisCikis::find()
            .filter(stok_giris_cikis::Column::IslemTuru.eq(islem_turu))
            .order_by_desc(stok_giris_cikis::Column::Tarih)
            .all(self.base.get_db())
            .await
            .map_err(ServiceError::db_error)
    }

    pub async fn stok_hareketleri_by_tarih(
        &self,
        baslangic: DateTime<Utc>,
        bitis: DateTime<Utc>,
    ) -> Result<Vec<stok_giris_cikis::Model>, ServiceError> {
        StokGirisCikis::find()
            .filter(stok_giris_cikis::Column::Tarih.between(baslangic, bitis))
            .order_by_asc(stok_giris_cikis::Column::Tarih)
            .all(self.base.get_db())
            .await
            .map_err(ServiceError::db_error)
    }
}
