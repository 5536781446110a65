use crate::{
    db::{self, DbPool},
    entities::{
        cari,
        cek_senet::{self, CekSenetDurumu, CekSenetTuru, CekSenetYonu, Entity as CekSenet},
        finans_hareketi,
    },
    errors::ServiceError,
    repositories::CekSenetRepository,
    services::{bos_ise_none, ledger, validate_positive_decimal},
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ColumnTrait, Condition, EntityTrait, Set};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, instrument};
use validator::Validate;

/// A received or issued check or promissory note.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CekSenetGirdisi {
    #[serde(default)]
    pub evrak_id: Option<i32>,
    #[serde(default)]
    pub cari_id: Option<i32>,
    pub tur: CekSenetTuru,
    pub yon: CekSenetYonu,
    pub vade_tarihi: NaiveDate,
    #[validate(custom = "validate_positive_decimal")]
    pub tutar: Decimal,
    #[serde(default)]
    pub durum: Option<CekSenetDurumu>,
    #[validate(length(max = 100))]
    #[serde(default)]
    pub banka_adi: Option<String>,
}

pub struct CekSenetService {
    db_pool: Arc<DbPool>,
    repo: CekSenetRepository,
}

impl CekSenetService {
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self {
            repo: CekSenetRepository::new(db_pool.clone()),
            db_pool,
        }
    }

    /// Registers a document, or rewrites it when `evrak_id` is given.
    /// New documents start in the portfolio.
    #[instrument(skip(self, girdi), fields(tur = %girdi.tur, yon = %girdi.yon))]
    pub async fn kaydet(&self, girdi: CekSenetGirdisi) -> Result<cek_senet::Model, ServiceError> {
        girdi.validate()?;

        let evrak = db::in_transaction(&self.db_pool, "cek_senet.kaydet", move |txn| {
            Box::pin(async move {
                if let Some(cari_id) = girdi.cari_id {
                    cari::Entity::find_by_id(cari_id)
                        .one(txn)
                        .await
                        .map_err(ServiceError::db_error)?
                        .ok_or_else(|| ServiceError::not_found("Party", cari_id))?;
                }

                let tutar = girdi.tutar.round_dp(2);
                let banka_adi = bos_ise_none(girdi.banka_adi);

                match girdi.evrak_id {
                    Some(id) => {
                        let mevcut = CekSenet::find_by_id(id)
                            .one(txn)
                            .await
                            .map_err(ServiceError::db_error)?
                            .ok_or_else(|| ServiceError::not_found("Check/note", id))?;
                        let mut active: cek_senet::ActiveModel = mevcut.into();
                        active.cari_id = Set(girdi.cari_id);
                        active.tur = Set(girdi.tur);
                        active.yon = Set(girdi.yon);
                        active.vade_tarihi = Set(girdi.vade_tarihi);
                        active.tutar = Set(tutar);
                        if let Some(durum) = girdi.durum {
                            active.durum = Set(durum);
                        }
                        active.banka_adi = Set(banka_adi);
                        active.update(txn).await.map_err(ServiceError::db_error)
                    }
                    None => cek_senet::ActiveModel {
                        cari_id: Set(girdi.cari_id),
                        tur: Set(girdi.tur),
                        yon: Set(girdi.yon),
                        vade_tarihi: Set(girdi.vade_tarihi),
                        tutar: Set(tutar),
                        durum: Set(girdi.durum.unwrap_or(CekSenetDurumu::Portfoyde)),
                        banka_adi: Set(banka_adi),
                        ..Default::default()
                    }
                    .insert(txn)
                    .await
                    .map_err(ServiceError::db_error),
                }
            })
        })
        .await?;

        info!(evrak_id = evrak.evrak_id, vade = %evrak.vade_tarihi, "Check/note saved");
        Ok(evrak)
    }

    #[instrument(skip(self))]
    pub async fn durum_guncelle(
        &self,
        evrak_id: i32,
        durum: CekSenetDurumu,
    ) -> Result<cek_senet::Model, ServiceError> {
        db::in_transaction(&self.db_pool, "cek_senet.durum_guncelle", move |txn| {
            Box::pin(async move {
                let mevcut = CekSenet::find_by_id(evrak_id)
                    .one(txn)
                    .await
                    .map_err(ServiceError::db_error)?
                    .ok_or_else(|| ServiceError::not_found("Check/note", evrak_id))?;
                let mut active: cek_senet::ActiveModel = mevcut.into();
                active.durum = Set(durum);
                active.update(txn).await.map_err(ServiceError::db_error)
            })
        })
        .await
    }

    /// Deletes the document. Movements that settled it are reverted first.
    #[instrument(skip(self))]
    pub async fn sil(&self, evrak_id: i32) -> Result<(), ServiceError> {
        db::in_transaction(&self.db_pool, "cek_senet.sil", move |txn| {
            Box::pin(async move {
                CekSenet::find_by_id(evrak_id)
                    .one(txn)
                    .await
                    .map_err(ServiceError::db_error)?
                    .ok_or_else(|| ServiceError::not_found("Check/note", evrak_id))?;

                ledger::finans_hareketlerini_geri_al(
                    txn,
                    Condition::all().add(finans_hareketi::Column::EvrakId.eq(evrak_id)),
                )
                .await?;

                CekSenet::delete_by_id(evrak_id)
                    .exec(txn)
                    .await
                    .map_err(ServiceError::db_error)?;
                Ok(())
            })
        })
        .await
    }

    pub async fn find_all(&self) -> Result<Vec<cek_senet::Model>, ServiceError> {
        self.repo.find_all().await
    }

    pub async fn find_by_id(&self, evrak_id: i32) -> Result<Option<cek_senet::Model>, ServiceError> {
        self.repo.find_by_id(evrak_id).await
    }

    pub async fn find_by_tur(&self, tur: CekSenetTuru) -> Result<Vec<cek_senet::Model>, ServiceError> {
        self.repo.find_by_tur(tur).await
    }

    pub async fn find_by_yon(&self, yon: CekSenetYonu) -> Result<Vec<cek_senet::Model>, ServiceError> {
        self.repo.find_by_yon(yon).await
    }

    pub async fn find_by_durum(
        &self,
        durum: CekSenetDurumu,
    ) -> Result<Vec<cek_senet::Model>, ServiceError> {
        self.repo.find_by_durum(durum).await
    }

    /// Documents falling due between the two dates, inclusive.
    pub async fn find_by_vade_araligi(
        &self,
        baslangic: NaiveDate,
        bitis: NaiveDate,
    ) -> Result<Vec<cek_senet::Model>, ServiceError> {
        self.repo.find_by_vade_araligi(baslangic, bitis).await
    }
}
