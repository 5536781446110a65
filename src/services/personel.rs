use crate::{
    db::{self, DbPool},
    entities::{
        finans_hareketi,
        personel::{self, Entity as Personel},
    },
    errors::ServiceError,
    repositories::PersonelRepository,
    services::{bos_ise_none, ledger, validate_non_negative_decimal, validate_not_blank},
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ColumnTrait, Condition, EntityTrait, Set};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, instrument};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PersonelGirdisi {
    #[validate(length(min = 1, max = 100), custom = "validate_not_blank")]
    pub ad_soyad: String,
    #[validate(length(max = 50))]
    #[serde(default)]
    pub gorev: Option<String>,
    #[validate(custom = "validate_non_negative_decimal")]
    #[serde(default)]
    pub maas: Option<Decimal>,
    #[serde(default)]
    pub ise_giris_tarihi: Option<NaiveDate>,
}

pub struct PersonelService {
    db_pool: Arc<DbPool>,
    repo: PersonelRepository,
}

impl PersonelService {
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self {
            repo: PersonelRepository::new(db_pool.clone()),
            db_pool,
        }
    }

    /// Hires an employee; new records are active.
    #[instrument(skip(self, girdi))]
    pub async fn create(&self, girdi: PersonelGirdisi) -> Result<personel::Model, ServiceError> {
        girdi.validate()?;

        let personel = personel::ActiveModel {
            ad_soyad: Set(girdi.ad_soyad.trim().to_string()),
            gorev: Set(bos_ise_none(girdi.gorev)),
            maas: Set(girdi.maas),
            ise_giris_tarihi: Set(girdi.ise_giris_tarihi),
            aktif_mi: Set(true),
            ..Default::default()
        }
        .insert(self.db_pool.as_ref())
        .await
        .map_err(ServiceError::db_error)?;

        info!(personel_id = personel.personel_id, "Employee created");
        Ok(personel)
    }

    #[instrument(skip(self, girdi))]
    pub async fn update(
        &self,
        personel_id: i32,
        girdi: PersonelGirdisi,
    ) -> Result<personel::Model, ServiceError> {
        girdi.validate()?;

        db::in_transaction(&self.db_pool, "personel.update", move |txn| {
            Box::pin(async move {
                let mevcut = Personel::find_by_id(personel_id)
                    .one(txn)
                    .await
                    .map_err(ServiceError::db_error)?
                    .ok_or_else(|| ServiceError::not_found("Employee", personel_id))?;
                let mut active: personel::ActiveModel = mevcut.into();
                active.ad_soyad = Set(girdi.ad_soyad.trim().to_string());
                active.gorev = Set(bos_ise_none(girdi.gorev));
                active.maas = Set(girdi.maas);
                active.ise_giris_tarihi = Set(girdi.ise_giris_tarihi);
                active.update(txn).await.map_err(ServiceError::db_error)
            })
        })
        .await
    }

    /// Marks the employee inactive. The record and its salary history stay.
    #[instrument(skip(self))]
    pub async fn isten_cikar(&self, personel_id: i32) -> Result<personel::Model, ServiceError> {
        db::in_transaction(&self.db_pool, "personel.isten_cikar", move |txn| {
            Box::pin(async move {
                let mevcut = Personel::find_by_id(personel_id)
                    .one(txn)
                    .await
                    .map_err(ServiceError::db_error)?
                    .ok_or_else(|| ServiceError::not_found("Employee", personel_id))?;
                let mut active: personel::ActiveModel = mevcut.into();
                active.aktif_mi = Set(false);
                active.update(txn).await.map_err(ServiceError::db_error)
            })
        })
        .await
    }

    /// Deletes the employee. Salary movements paid to them are reverted before
    /// the cascade removes them.
    #[instrument(skip(self))]
    pub async fn delete(&self, personel_id: i32) -> Result<(), ServiceError> {
        db::in_transaction(&self.db_pool, "personel.delete", move |txn| {
            Box::pin(async move {
                Personel::find_by_id(personel_id)
                    .one(txn)
                    .await
                    .map_err(ServiceError::db_error)?
                    .ok_or_else(|| ServiceError::not_found("Employee", personel_id))?;

                ledger::finans_hareketlerini_geri_al(
                    txn,
                    Condition::all().add(finans_hareketi::Column::PersonelId.eq(personel_id)),
                )
                .await?;

                Personel::delete_by_id(personel_id)
                    .exec(txn)
                    .await
                    .map_err(ServiceError::db_error)?;
                Ok(())
            })
        })
        .await
    }

    pub async fn find_all(&self) -> Result<Vec<personel::Model>, ServiceError> {
        self.repo.find_all().await
    }

    pub async fn find_by_id(&self, personel_id: i32) -> Result<Option<personel::Model>, ServiceError> {
        self.repo.find_by_id(personel_id).await
    }

    pub async fn find_by_aktif(&self, aktif_mi: bool) -> Result<Vec<personel::Model>, ServiceError> {
        self.repo.find_by_aktif(aktif_mi).await
    }

    pub async fn find_by_gorev(&self, gorev: &str) -> Result<Vec<personel::Model>, ServiceError> {
        self.repo.find_by_gorev(gorev.trim()).await
    }

    pub async fn search_by_ad(&self, term: &str) -> Result<Vec<personel::Model>, ServiceError> {
        self.repo.search_by_ad(term).await
    }
}
