use crate::{
    db::{self, DbPool},
    entities::{
        bakiye_etkisi::EtkiKaynagi,
        fatura,
        stok_giris_cikis::{self, Entity as StokGirisCikis, StokIslemTuru},
        urun,
    },
    errors::ServiceError,
    repositories::FaturaRepository,
    services::{
        bos_ise_none,
        ledger::{self, Etki},
        validate_non_negative_decimal, validate_positive_decimal,
    },
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, EntityTrait, Set};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, instrument};
use validator::Validate;

/// A single stock movement on an existing invoice.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct StokHareketiGirdisi {
    #[serde(default)]
    pub hareket_id: Option<i32>,
    pub fatura_id: i32,
    pub urun_id: i32,
    #[serde(default)]
    pub siparis_id: Option<i32>,
    pub islem_turu: StokIslemTuru,
    #[validate(range(min = 1))]
    pub miktar: i32,
    #[validate(custom = "validate_non_negative_decimal")]
    pub birim_fiyat: Decimal,
    #[serde(default)]
    pub tarih: Option<DateTime<Utc>>,
    #[validate(length(equal = 3))]
    #[serde(default)]
    pub para_birimi: Option<String>,
    #[validate(custom = "validate_positive_decimal")]
    #[serde(default)]
    pub kur: Option<Decimal>,
}

pub struct StokService {
    db_pool: Arc<DbPool>,
    repo: FaturaRepository,
}

impl StokService {
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self {
            repo: FaturaRepository::new(db_pool.clone()),
            db_pool,
        }
    }

    /// Inserts or rewrites a movement and reconciles its stock effect.
    #[instrument(skip(self, girdi), fields(urun_id = girdi.urun_id, islem_turu = %girdi.islem_turu))]
    pub async fn kaydet(
        &self,
        girdi: StokHareketiGirdisi,
    ) -> Result<stok_giris_cikis::Model, ServiceError> {
        girdi.validate()?;

        let hareket = db::in_transaction(&self.db_pool, "stok.kaydet", move |txn| {
            Box::pin(async move {
                fatura::Entity::find_by_id(girdi.fatura_id)
                    .one(txn)
                    .await
                    .map_err(ServiceError::db_error)?
                    .ok_or_else(|| ServiceError::not_found("Invoice", girdi.fatura_id))?;
                urun::Entity::find_by_id(girdi.urun_id)
                    .one(txn)
                    .await
                    .map_err(ServiceError::db_error)?
                    .ok_or_else(|| ServiceError::not_found("Product", girdi.urun_id))?;

                let tarih = girdi.tarih.unwrap_or_else(Utc::now);
                let para_birimi = bos_ise_none(girdi.para_birimi).map(|k| k.to_uppercase());
                let kur = girdi.kur.unwrap_or(Decimal::ONE);

                let hareket = match girdi.hareket_id {
                    Some(id) => {
                        let mevcut = StokGirisCikis::find_by_id(id)
                            .one(txn)
                            .await
                            .map_err(ServiceError::db_error)?
                            .ok_or_else(|| ServiceError::not_found("Stock movement", id))?;
                        let mut active: stok_giris_cikis::ActiveModel = mevcut.into();
                        active.fatura_id = Set(girdi.fatura_id);
                        active.urun_id = Set(girdi.urun_id);
                        active.siparis_id = Set(girdi.siparis_id);
                        active.islem_turu = Set(girdi.islem_turu);
                        active.miktar = Set(girdi.miktar);
                        active.birim_fiyat = Set(girdi.birim_fiyat);
                        active.tarih = Set(tarih);
                        active.para_birimi = Set(para_birimi);
                        active.kur = Set(kur);
                        active.update(txn).await.map_err(ServiceError::db_error)?
                    }
                    None => stok_giris_cikis::ActiveModel {
                        fatura_id: Set(girdi.fatura_id),
                        urun_id: Set(girdi.urun_id),
                        siparis_id: Set(girdi.siparis_id),
                        islem_turu: Set(girdi.islem_turu),
                        miktar: Set(girdi.miktar),
                        birim_fiyat: Set(girdi.birim_fiyat),
                        tarih: Set(tarih),
                        para_birimi: Set(para_birimi),
                        kur: Set(kur),
                        ..Default::default()
                    }
                    .insert(txn)
                    .await
                    .map_err(ServiceError::db_error)?,
                };

                ledger::reconcile(
                    txn,
                    EtkiKaynagi::StokHareketi,
                    hareket.hareket_id,
                    vec![Etki::urun(
                        hareket.urun_id,
                        hareket.islem_turu.stok_etkisi(hareket.miktar),
                    )],
                )
                .await?;
                Ok(hareket)
            })
        })
        .await?;

        info!(hareket_id = hareket.hareket_id, "Stock movement saved");
        Ok(hareket)
    }

    #[instrument(skip(self))]
    pub async fn sil(&self, hareket_id: i32) -> Result<(), ServiceError> {
        db::in_transaction(&self.db_pool, "stok.sil", move |txn| {
            Box::pin(async move {
                StokGirisCikis::find_by_id(hareket_id)
                    .one(txn)
                    .await
                    .map_err(ServiceError::db_error)?
                    .ok_or_else(|| ServiceError::not_found("Stock movement", hareket_id))?;
                ledger::geri_al(txn, EtkiKaynagi::StokHareketi, &[hareket_id]).await?;
                StokGirisCikis::delete_by_id(hareket_id)
                    .exec(txn)
                    .await
                    .map_err(ServiceError::db_error)?;
                Ok(())
            })
        })
        .await
    }

    pub async fn find_all(&self) -> Result<Vec<stok_giris_cikis::Model>, ServiceError> {
        self.repo.find_all_stok_hareketleri().await
    }

    pub async fn find_by_id(
        &self,
        hareket_id: i32,
    ) -> Result<Option<stok_giris_cikis::Model>, ServiceError> {
        self.repo.find_stok_hareketi(hareket_id).await
    }

    pub async fn find_by_fatura(
        &self,
        fatura_id: i32,
    ) -> Result<Vec<stok_giris_cikis::Model>, ServiceError> {
        self.repo.stok_hareketleri(fatura_id).await
    }

    pub async fn find_by_urun(
        &self,
        urun_id: i32,
    ) -> Result<Vec<stok_giris_cikis::Model>, ServiceError> {
        self.repo.stok_hareketleri_by_urun(urun_id).await
    }

    pub async fn find_by_islem_turu(
        &self,
        islem_turu: StokIslemTuru,
    ) -> Result<Vec<stok_giris_cikis::Model>, ServiceError> {
        self.repo.stok_hareketleri_by_islem_turu(islem_turu).await
    }

    pub async fn find_by_tarih_araligi(
        &self,
        baslangic: DateTime<Utc>,
        bitis: DateTime<Utc>,
    ) -> Result<Vec<stok_giris_cikis::Model>, ServiceError> {
        self.repo.stok_hareketleri_by_tarih(baslangic, bitis).await
    }
}
