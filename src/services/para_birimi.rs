use crate::{
    db::{self, DbPool},
    entities::{
        kur,
        para_birimi::{self, Entity as ParaBirimi},
    },
    errors::ServiceError,
    repositories::ParaBirimiRepository,
    services::{bos_ise_none, validate_positive_decimal},
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, EntityTrait, Set};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, instrument};
use validator::{Validate, ValidationError};

pub const VARSAYILAN_KUR_KAYNAGI: &str = "TCMB";

fn validate_para_kodu(kod: &str) -> Result<(), ValidationError> {
    if kod.len() == 3 && kod.chars().all(|c| c.is_ascii_alphabetic()) {
        Ok(())
    } else {
        let mut err = ValidationError::new("para_kod");
        err.message = Some("Currency code must be three letters".into());
        Err(err)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ParaBirimiGirdisi {
    #[validate(custom = "validate_para_kodu")]
    pub para_kod: String,
    #[validate(length(max = 50))]
    #[serde(default)]
    pub aciklama: Option<String>,
    #[validate(length(max = 5))]
    #[serde(default)]
    pub sembol: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct KurGirdisi {
    #[validate(custom = "validate_para_kodu")]
    pub para_kod: String,
    pub kur_tarihi: NaiveDate,
    #[validate(custom = "validate_positive_decimal")]
    pub kur: Decimal,
    #[validate(length(max = 50))]
    #[serde(default)]
    pub kaynak: Option<String>,
}

/// Currencies and their daily rates.
pub struct ParaBirimiService {
    db_pool: Arc<DbPool>,
    repo: ParaBirimiRepository,
}

impl ParaBirimiService {
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self {
            repo: ParaBirimiRepository::new(db_pool.clone()),
            db_pool,
        }
    }

    #[instrument(skip(self, girdi), fields(para_kod = %girdi.para_kod))]
    pub async fn create(&self, girdi: ParaBirimiGirdisi) -> Result<para_birimi::Model, ServiceError> {
        girdi.validate()?;
        let kod = girdi.para_kod.to_uppercase();

        let para = db::in_transaction(&self.db_pool, "para_birimi.create", move |txn| {
            Box::pin(async move {
                let mevcut = ParaBirimi::find_by_id(kod.clone())
                    .one(txn)
                    .await
                    .map_err(ServiceError::db_error)?;
                if mevcut.is_some() {
                    return Err(ServiceError::Conflict(format!(
                        "Currency {} already exists",
                        kod
                    )));
                }

                para_birimi::ActiveModel {
                    para_kod: Set(kod),
                    aciklama: Set(bos_ise_none(girdi.aciklama)),
                    sembol: Set(bos_ise_none(girdi.sembol)),
                }
                .insert(txn)
                .await
                .map_err(ServiceError::db_error)
            })
        })
        .await?;

        info!(para_kod = %para.para_kod, "Currency registered");
        Ok(para)
    }

    /// Removes a currency with its rate history. Invoices quoting it lose the reference.
    #[instrument(skip(self))]
    pub async fn delete(&self, para_kod: &str) -> Result<(), ServiceError> {
        let kod = para_kod.trim().to_uppercase();
        db::in_transaction(&self.db_pool, "para_birimi.delete", move |txn| {
            Box::pin(async move {
                let sonuc = ParaBirimi::delete_by_id(kod.clone())
                    .exec(txn)
                    .await
                    .map_err(ServiceError::db_error)?;
                if sonuc.rows_affected == 0 {
                    return Err(ServiceError::not_found("Currency", kod));
                }
                Ok(())
            })
        })
        .await
    }

    /// Records a rate. The source defaults to the central bank.
    #[instrument(skip(self, girdi), fields(para_kod = %girdi.para_kod, tarih = %girdi.kur_tarihi))]
    pub async fn kur_ekle(&self, girdi: KurGirdisi) -> Result<kur::Model, ServiceError> {
        girdi.validate()?;
        let kod = girdi.para_kod.to_uppercase();

        let kayit = db::in_transaction(&self.db_pool, "para_birimi.kur_ekle", move |txn| {
            Box::pin(async move {
                ParaBirimi::find_by_id(kod.clone())
                    .one(txn)
                    .await
                    .map_err(ServiceError::db_error)?
                    .ok_or_else(|| ServiceError::not_found("Currency", &kod))?;

                kur::ActiveModel {
                    para_kod: Set(kod),
                    kur_tarihi: Set(girdi.kur_tarihi),
                    kur: Set(girdi.kur),
                    kaynak: Set(bos_ise_none(girdi.kaynak)
                        .unwrap_or_else(|| VARSAYILAN_KUR_KAYNAGI.to_string())),
                    ..Default::default()
                }
                .insert(txn)
                .await
                .map_err(ServiceError::db_error)
            })
        })
        .await?;

        debug!(kur_id = kayit.kur_id, kur = %kayit.kur, "Exchange rate recorded");
        Ok(kayit)
    }

    pub async fn find_all(&self) -> Result<Vec<para_birimi::Model>, ServiceError> {
        self.repo.find_all().await
    }

    pub async fn find_by_kod(&self, para_kod: &str) -> Result<Option<para_birimi::Model>, ServiceError> {
        self.repo.find_by_kod(&para_kod.trim().to_uppercase()).await
    }

    pub async fn kur_gecmisi(&self, para_kod: &str) -> Result<Vec<kur::Model>, ServiceError> {
        self.repo.kur_gecmisi(&para_kod.trim().to_uppercase()).await
    }

    pub async fn kur_bul(
        &self,
        para_kod: &str,
        tarih: NaiveDate,
    ) -> Result<Option<kur::Model>, ServiceError> {
        self.repo.kur_bul(&para_kod.trim().to_uppercase(), tarih).await
    }

    pub async fn find_kurlar_arasinda(
        &self,
        baslangic: NaiveDate,
        bitis: NaiveDate,
    ) -> Result<Vec<kur::Model>, ServiceError> {
        self.repo.find_kurlar_arasinda(baslangic, bitis).await
    }

    pub async fn guncel_kur(&self, para_kod: &str) -> Result<Option<kur::Model>, ServiceError> {
        self.repo.guncel_kur(&para_kod.trim().to_uppercase()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("TRY", true)]
    #[case("usd", true)]
    #[case("EU", false)]
    #[case("EURO", false)]
    #[case("U$D", false)]
    fn currency_codes(#[case] kod: &str, #[case] gecerli: bool) {
        assert_eq!(validate_para_kodu(kod).is_ok(), gecerli);
    }
}
