use crate::{
    db::{self, DbPool},
    entities::{
        finans_hareketi,
        kasa_banka::{self, Entity as KasaBanka, HesapTuru},
    },
    errors::ServiceError,
    repositories::KasaBankaRepository,
    services::{ledger, validate_not_blank},
};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ColumnTrait, Condition, EntityTrait, Set};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, instrument, warn};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct HesapGirdisi {
    #[validate(length(min = 1, max = 100), custom = "validate_not_blank")]
    pub hesap_adi: String,
    pub tur: HesapTuru,
}

/// Cash, bank and POS accounts.
pub struct KasaBankaService {
    db_pool: Arc<DbPool>,
    repo: KasaBankaRepository,
}

impl KasaBankaService {
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self {
            repo: KasaBankaRepository::new(db_pool.clone()),
            db_pool,
        }
    }

    /// Opens an account with `acilis_bakiyesi` as its starting balance.
    #[instrument(skip(self, girdi))]
    pub async fn create(
        &self,
        girdi: HesapGirdisi,
        acilis_bakiyesi: Decimal,
    ) -> Result<kasa_banka::Model, ServiceError> {
        girdi.validate()?;

        let hesap = kasa_banka::ActiveModel {
            hesap_adi: Set(girdi.hesap_adi.trim().to_string()),
            tur: Set(girdi.tur),
            bakiye: Set(acilis_bakiyesi.round_dp(2)),
            ..Default::default()
        }
        .insert(self.db_pool.as_ref())
        .await
        .map_err(ServiceError::db_error)?;

        info!(hesap_id = hesap.hesap_id, tur = %hesap.tur, "Account opened");
        Ok(hesap)
    }

    /// Renames or retypes an account. The balance is left alone.
    #[instrument(skip(self, girdi))]
    pub async fn update(
        &self,
        hesap_id: i32,
        girdi: HesapGirdisi,
    ) -> Result<kasa_banka::Model, ServiceError> {
        girdi.validate()?;

        db::in_transaction(&self.db_pool, "kasa_banka.update", move |txn| {
            Box::pin(async move {
                let mevcut = KasaBanka::find_by_id(hesap_id)
                    .one(txn)
                    .await
                    .map_err(ServiceError::db_error)?
                    .ok_or_else(|| ServiceError::not_found("Account", hesap_id))?;
                let mut active: kasa_banka::ActiveModel = mevcut.into();
                active.hesap_adi = Set(girdi.hesap_adi.trim().to_string());
                active.tur = Set(girdi.tur);
                active.update(txn).await.map_err(ServiceError::db_error)
            })
        })
        .await
    }

    /// Deletes the account. Movements booked on it are reverted before the
    /// cascade removes them, so party balances they touched are restored.
    #[instrument(skip(self))]
    pub async fn delete(&self, hesap_id: i32) -> Result<(), ServiceError> {
        db::in_transaction(&self.db_pool, "kasa_banka.delete", move |txn| {
            Box::pin(async move {
                KasaBanka::find_by_id(hesap_id)
                    .one(txn)
                    .await
                    .map_err(ServiceError::db_error)?
                    .ok_or_else(|| ServiceError::not_found("Account", hesap_id))?;

                ledger::finans_hareketlerini_geri_al(
                    txn,
                    Condition::all().add(finans_hareketi::Column::HesapId.eq(hesap_id)),
                )
                .await?;

                KasaBanka::delete_by_id(hesap_id)
                    .exec(txn)
                    .await
                    .map_err(ServiceError::db_error)?;
                Ok(())
            })
        })
        .await
    }

    /// Adds `tutar` to the balance outside the ledger.
    #[instrument(skip(self))]
    pub async fn bakiye_guncelle(&self, hesap_id: i32, tutar: Decimal) -> Result<(), ServiceError> {
        let bulundu = db::in_transaction(&self.db_pool, "kasa_banka.bakiye_guncelle", move |txn| {
            Box::pin(async move { ledger::hesap_bakiyesine_ekle(txn, hesap_id, tutar).await })
        })
        .await?;

        if !bulundu {
            warn!(hesap_id, %tutar, "Balance update for unknown account ignored");
        }
        Ok(())
    }

    /// Sum of all account balances.
    pub async fn toplam_bakiye(&self) -> Result<Decimal, ServiceError> {
        let hesaplar = self.repo.find_all().await?;
        Ok(hesaplar.iter().map(|h| h.bakiye).sum::<Decimal>().round_dp(2))
    }

    pub async fn find_all(&self) -> Result<Vec<kasa_banka::Model>, ServiceError> {
        self.repo.find_all().await
    }

    pub async fn find_by_id(&self, hesap_id: i32) -> Result<Option<kasa_banka::Model>, ServiceError> {
        self.repo.find_by_id(hesap_id).await
    }

    pub async fn find_by_tur(&self, tur: HesapTuru) -> Result<Vec<kasa_banka::Model>, ServiceError> {
        self.repo.find_by_tur(tur).await
    }

    pub async fn search_by_ad(&self, term: &str) -> Result<Vec<kasa_banka::Model>, ServiceError> {
        self.repo.search_by_ad(term).await
    }
}
