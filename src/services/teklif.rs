use crate::{
    db::{self, DbPool},
    entities::{
        cari,
        siparis::{self, SiparisDurumu},
        teklif::{self, Entity as Teklif, TeklifDurumu},
        teklif_detay::{self, Entity as TeklifDetay},
        urun,
    },
    errors::ServiceError,
    repositories::TeklifRepository,
    services::validate_non_negative_decimal,
};
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, instrument};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TeklifSatiri {
    pub urun_id: i32,
    #[validate(range(min = 1))]
    pub miktar: i32,
    #[validate(custom = "validate_non_negative_decimal")]
    pub birim_fiyat: Decimal,
}

/// A quote with its lines. Saving an existing quote replaces its lines.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TeklifGirdisi {
    #[serde(default)]
    pub teklif_id: Option<i32>,
    pub cari_id: i32,
    #[serde(default)]
    pub teklif_tarihi: Option<DateTime<Utc>>,
    #[serde(default)]
    pub gecerlilik_tarihi: Option<NaiveDate>,
    #[serde(default)]
    pub durum: Option<TeklifDurumu>,
    #[validate]
    pub satirlar: Vec<TeklifSatiri>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TeklifDetayi {
    pub teklif: teklif::Model,
    pub detaylar: Vec<teklif_detay::Model>,
}

/// Σ miktar × birim_fiyat, rounded to cents.
pub fn teklif_toplami(satirlar: &[TeklifSatiri]) -> Decimal {
    satirlar
        .iter()
        .map(|s| Decimal::from(s.miktar) * s.birim_fiyat)
        .sum::<Decimal>()
        .round_dp(2)
}

pub struct TeklifService {
    db_pool: Arc<DbPool>,
    repo: TeklifRepository,
}

impl TeklifService {
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self {
            repo: TeklifRepository::new(db_pool.clone()),
            db_pool,
        }
    }

    #[instrument(skip(self, girdi), fields(cari_id = girdi.cari_id))]
    pub async fn kaydet(&self, girdi: TeklifGirdisi) -> Result<TeklifDetayi, ServiceError> {
        girdi.validate()?;
        let toplam = teklif_toplami(&girdi.satirlar);

        let detay = db::in_transaction(&self.db_pool, "teklif.kaydet", move |txn| {
            Box::pin(async move {
                cari::Entity::find_by_id(girdi.cari_id)
                    .one(txn)
                    .await
                    .map_err(ServiceError::db_error)?
                    .ok_or_else(|| ServiceError::not_found("Party", girdi.cari_id))?;
                for satir in &girdi.satirlar {
                    urun::Entity::find_by_id(satir.urun_id)
                        .one(txn)
                        .await
                        .map_err(ServiceError::db_error)?
                        .ok_or_else(|| ServiceError::not_found("Product", satir.urun_id))?;
                }

                let teklif = match girdi.teklif_id {
                    Some(id) => {
                        let mevcut = Teklif::find_by_id(id)
                            .one(txn)
                            .await
                            .map_err(ServiceError::db_error)?
                            .ok_or_else(|| ServiceError::not_found("Quote", id))?;
                        let mut active: teklif::ActiveModel = mevcut.into();
                        active.cari_id = Set(girdi.cari_id);
                        if let Some(tarih) = girdi.teklif_tarihi {
                            active.teklif_tarihi = Set(tarih);
                        }
                        active.gecerlilik_tarihi = Set(girdi.gecerlilik_tarihi);
                        if let Some(durum) = girdi.durum {
                            active.durum = Set(durum);
                        }
                        active.toplam_tutar = Set(toplam);
                        active.update(txn).await.map_err(ServiceError::db_error)?
                    }
                    None => teklif::ActiveModel {
                        cari_id: Set(girdi.cari_id),
                        teklif_tarihi: Set(girdi.teklif_tarihi.unwrap_or_else(Utc::now)),
                        gecerlilik_tarihi: Set(girdi.gecerlilik_tarihi),
                        durum: Set(girdi.durum.unwrap_or(TeklifDurumu::Bekliyor)),
                        toplam_tutar: Set(toplam),
                        ..Default::default()
                    }
                    .insert(txn)
                    .await
                    .map_err(ServiceError::db_error)?,
                };

                TeklifDetay::delete_many()
                    .filter(teklif_detay::Column::TeklifId.eq(teklif.teklif_id))
                    .exec(txn)
                    .await
                    .map_err(ServiceError::db_error)?;

                let mut detaylar = Vec::with_capacity(girdi.satirlar.len());
                for satir in &girdi.satirlar {
                    let detay = teklif_detay::ActiveModel {
                        teklif_id: Set(teklif.teklif_id),
                        urun_id: Set(satir.urun_id),
                        miktar: Set(satir.miktar),
                        birim_fiyat: Set(satir.birim_fiyat),
                        ..Default::default()
                    }
                    .insert(txn)
                    .await
                    .map_err(ServiceError::db_error)?;
                    detaylar.push(detay);
                }

                Ok(TeklifDetayi { teklif, detaylar })
            })
        })
        .await?;

        info!(
            teklif_id = detay.teklif.teklif_id,
            toplam = %detay.teklif.toplam_tutar,
            "Quote saved"
        );
        Ok(detay)
    }

    #[instrument(skip(self))]
    pub async fn durum_guncelle(
        &self,
        teklif_id: i32,
        durum: TeklifDurumu,
    ) -> Result<teklif::Model, ServiceError> {
        db::in_transaction(&self.db_pool, "teklif.durum_guncelle", move |txn| {
            Box::pin(async move {
                let mevcut = Teklif::find_by_id(teklif_id)
                    .one(txn)
                    .await
                    .map_err(ServiceError::db_error)?
                    .ok_or_else(|| ServiceError::not_found("Quote", teklif_id))?;
                let mut active: teklif::ActiveModel = mevcut.into();
                active.durum = Set(durum);
                active.update(txn).await.map_err(ServiceError::db_error)
            })
        })
        .await
    }

    /// Turns an approved quote into an order awaiting preparation.
    #[instrument(skip(self))]
    pub async fn siparise_donustur(&self, teklif_id: i32) -> Result<siparis::Model, ServiceError> {
        let siparis = db::in_transaction(&self.db_pool, "teklif.siparise_donustur", move |txn| {
            Box::pin(async move {
                let teklif = Teklif::find_by_id(teklif_id)
                    .one(txn)
                    .await
                    .map_err(ServiceError::db_error)?
                    .ok_or_else(|| ServiceError::not_found("Quote", teklif_id))?;
                if teklif.durum != TeklifDurumu::Onaylandi {
                    return Err(ServiceError::InvalidOperation(format!(
                        "Quote {} is {}; only approved quotes can become orders",
                        teklif_id, teklif.durum
                    )));
                }

                siparis::ActiveModel {
                    teklif_id: Set(Some(teklif.teklif_id)),
                    cari_id: Set(teklif.cari_id),
                    siparis_tarihi: Set(Utc::now()),
                    durum: Set(SiparisDurumu::Hazirlaniyor),
                    ..Default::default()
                }
                .insert(txn)
                .await
                .map_err(ServiceError::db_error)
            })
        })
        .await?;

        info!(teklif_id, siparis_id = siparis.siparis_id, "Quote converted to order");
        Ok(siparis)
    }

    /// Deletes the quote with its lines. Orders converted from it keep
    /// existing without the reference.
    #[instrument(skip(self))]
    pub async fn sil(&self, teklif_id: i32) -> Result<(), ServiceError> {
        db::in_transaction(&self.db_pool, "teklif.sil", move |txn| {
            Box::pin(async move {
                let sonuc = Teklif::delete_by_id(teklif_id)
                    .exec(txn)
                    .await
                    .map_err(ServiceError::db_error)?;
                if sonuc.rows_affected == 0 {
                    return Err(ServiceError::not_found("Quote", teklif_id));
                }
                Ok(())
            })
        })
        .await
    }

    pub async fn find_all(&self) -> Result<Vec<teklif::Model>, ServiceError> {
        self.repo.find_all().await
    }

    pub async fn find_by_id(&self, teklif_id: i32) -> Result<Option<teklif::Model>, ServiceError> {
        self.repo.find_by_id(teklif_id).await
    }

    pub async fn detaylar(&self, teklif_id: i32) -> Result<Vec<teklif_detay::Model>, ServiceError> {
        self.repo.detaylar(teklif_id).await
    }

    pub async fn find_by_cari(&self, cari_id: i32) -> Result<Vec<teklif::Model>, ServiceError> {
        self.repo.find_by_cari(cari_id).await
    }

    pub async fn find_by_durum(
        &self,
        durum: TeklifDurumu,
    ) -> Result<Vec<teklif::Model>, ServiceError> {
        self.repo.find_by_durum(durum).await
    }

    pub async fn find_by_tarih_araligi(
        &self,
        baslangic: DateTime<Utc>,
        bitis: DateTime<Utc>,
    ) -> Result<Vec<teklif::Model>, ServiceError> {
        self.repo.find_by_tarih_araligi(baslangic, bitis).await
    }
}
