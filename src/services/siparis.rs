use crate::{
    db::{self, DbPool},
    entities::{
        cari,
        siparis::{self, Entity as Siparis, SiparisDurumu},
        teklif,
    },
    errors::ServiceError,
    repositories::SiparisRepository,
};
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, EntityTrait, Set};
use std::sync::Arc;
use tracing::{info, instrument};

pub struct SiparisService {
    db_pool: Arc<DbPool>,
    repo: SiparisRepository,
}

impl SiparisService {
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self {
            repo: SiparisRepository::new(db_pool.clone()),
            db_pool,
        }
    }

    /// Opens an order for a party, optionally linked to the quote it came from.
    #[instrument(skip(self))]
    pub async fn olustur(
        &self,
        cari_id: i32,
        teklif_id: Option<i32>,
    ) -> Result<siparis::Model, ServiceError> {
        let siparis = db::in_transaction(&self.db_pool, "siparis.olustur", move |txn| {
            Box::pin(async move {
                cari::Entity::find_by_id(cari_id)
                    .one(txn)
                    .await
                    .map_err(ServiceError::db_error)?
                    .ok_or_else(|| ServiceError::not_found("Party", cari_id))?;
                if let Some(id) = teklif_id {
                    teklif::Entity::find_by_id(id)
                        .one(txn)
                        .await
                        .map_err(ServiceError::db_error)?
                        .ok_or_else(|| ServiceError::not_found("Quote", id))?;
                }

                siparis::ActiveModel {
                    teklif_id: Set(teklif_id),
                    cari_id: Set(cari_id),
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

        info!(siparis_id = siparis.siparis_id, "Order created");
        Ok(siparis)
    }

    #[instrument(skip(self))]
    pub async fn durum_guncelle(
        &self,
        siparis_id: i32,
        durum: SiparisDurumu,
    ) -> Result<siparis::Model, ServiceError> {
        db::in_transaction(&self.db_pool, "siparis.durum_guncelle", move |txn| {
            Box::pin(async move {
                let mevcut = Siparis::find_by_id(siparis_id)
                    .one(txn)
                    .await
                    .map_err(ServiceError::db_error)?
                    .ok_or_else(|| ServiceError::not_found("Order", siparis_id))?;
                let mut active: siparis::ActiveModel = mevcut.into();
                active.durum = Set(durum);
                active.update(txn).await.map_err(ServiceError::db_error)
            })
        })
        .await
    }

    /// Stock movements referencing the order keep existing without the link.
    #[instrument(skip(self))]
    pub async fn sil(&self, siparis_id: i32) -> Result<(), ServiceError> {
        db::in_transaction(&self.db_pool, "siparis.sil", move |txn| {
            Box::pin(async move {
                let sonuc = Siparis::delete_by_id(siparis_id)
                    .exec(txn)
                    .await
                    .map_err(ServiceError::db_error)?;
                if sonuc.rows_affected == 0 {
                    return Err(ServiceError::not_found("Order", siparis_id));
                }
                Ok(())
            })
        })
        .await
    }

    pub async fn find_all(&self) -> Result<Vec<siparis::Model>, ServiceError> {
        self.repo.find_all().await
    }

    pub async fn find_by_id(&self, siparis_id: i32) -> Result<Option<siparis::Model>, ServiceError> {
        self.repo.find_by_id(siparis_id).await
    }

    pub async fn find_by_cari(&self, cari_id: i32) -> Result<Vec<siparis::Model>, ServiceError> {
        self.repo.find_by_cari(cari_id).await
    }

    pub async fn find_by_teklif(&self, teklif_id: i32) -> Result<Vec<siparis::Model>, ServiceError> {
        self.repo.find_by_teklif(teklif_id).await
    }

    pub async fn find_by_durum(
        &self,
        durum: SiparisDurumu,
    ) -> Result<Vec<siparis::Model>, ServiceError> {
        self.repo.find_by_durum(durum).await
    }

    pub async fn find_by_tarih_araligi(
        &self,
        baslangic: DateTime<Utc>,
        bitis: DateTime<Utc>,
    ) -> Result<Vec<siparis::Model>, ServiceError> {
        self.repo.find_by_tarih_araligi(baslangic, bitis).await
    }
}
