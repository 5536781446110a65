use crate::{
    db::{self, DbPool},
    entities::{
        atik::{self, Entity as Atik},
        atik_nedeni, urun,
    },
    errors::ServiceError,
    repositories::AtikRepository,
    services::validate_not_blank,
};
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, EntityTrait, Set};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, instrument};
use validator::Validate;

/// Waste record. It documents the loss only; stock on hand is adjusted
/// through a stock movement when needed.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AtikGirdisi {
    pub urun_id: i32,
    #[serde(default)]
    pub neden_id: Option<i32>,
    #[validate(range(min = 1))]
    pub miktar: i32,
    #[serde(default)]
    pub tarih: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AtikNedeniGirdisi {
    #[validate(length(min = 1, max = 200), custom = "validate_not_blank")]
    pub aciklama: String,
}

pub struct AtikService {
    db_pool: Arc<DbPool>,
    repo: AtikRepository,
}

impl AtikService {
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self {
            repo: AtikRepository::new(db_pool.clone()),
            db_pool,
        }
    }

    #[instrument(skip(self, girdi))]
    pub async fn neden_ekle(
        &self,
        girdi: AtikNedeniGirdisi,
    ) -> Result<atik_nedeni::Model, ServiceError> {
        girdi.validate()?;
        atik_nedeni::ActiveModel {
            aciklama: Set(girdi.aciklama.trim().to_string()),
            ..Default::default()
        }
        .insert(self.db_pool.as_ref())
        .await
        .map_err(ServiceError::db_error)
    }

    #[instrument(skip(self, girdi), fields(urun_id = girdi.urun_id, miktar = girdi.miktar))]
    pub async fn kaydet(&self, girdi: AtikGirdisi) -> Result<atik::Model, ServiceError> {
        girdi.validate()?;

        let atik = db::in_transaction(&self.db_pool, "atik.kaydet", move |txn| {
            Box::pin(async move {
                urun::Entity::find_by_id(girdi.urun_id)
                    .one(txn)
                    .await
                    .map_err(ServiceError::db_error)?
                    .ok_or_else(|| ServiceError::not_found("Product", girdi.urun_id))?;
                if let Some(neden_id) = girdi.neden_id {
                    atik_nedeni::Entity::find_by_id(neden_id)
                        .one(txn)
                        .await
                        .map_err(ServiceError::db_error)?
                        .ok_or_else(|| ServiceError::not_found("Waste reason", neden_id))?;
                }

                atik::ActiveModel {
                    urun_id: Set(girdi.urun_id),
                    neden_id: Set(girdi.neden_id),
                    miktar: Set(girdi.miktar),
                    tarih: Set(girdi.tarih.unwrap_or_else(Utc::now)),
                    ..Default::default()
                }
                .insert(txn)
                .await
                .map_err(ServiceError::db_error)
            })
        })
        .await?;

        info!(atik_id = atik.atik_id, "Waste recorded");
        Ok(atik)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, atik_id: i32) -> Result<(), ServiceError> {
        let sonuc = Atik::delete_by_id(atik_id)
            .exec(self.db_pool.as_ref())
            .await
            .map_err(ServiceError::db_error)?;
        if sonuc.rows_affected == 0 {
            return Err(ServiceError::not_found("Waste record", atik_id));
        }
        Ok(())
    }

    pub async fn nedenler(&self) -> Result<Vec<atik_nedeni::Model>, ServiceError> {
        self.repo.nedenler().await
    }

    pub async fn find_all(&self) -> Result<Vec<atik::Model>, ServiceError> {
        self.repo.find_all().await
    }

    pub async fn find_by_urun(&self, urun_id: i32) -> Result<Vec<atik::Model>, ServiceError> {
        self.repo.find_by_urun(urun_id).await
    }

    pub async fn find_by_tarih_araligi(
        &self,
        baslangic: DateTime<Utc>,
        bitis: DateTime<Utc>,
    ) -> Result<Vec<atik::Model>, ServiceError> {
        self.repo.find_by_tarih_araligi(baslangic, bitis).await
    }
}
