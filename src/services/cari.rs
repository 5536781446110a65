use crate::{
    db::{self, DbPool},
    entities::{
        cari::{self, CariTuru, Entity as Cari},
        cek_senet, fatura, finans_hareketi,
    },
    errors::ServiceError,
    repositories::CariRepository,
    services::{bos_ise_none, ledger, validate_not_blank},
};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, QueryFilter, QuerySelect, Set,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, instrument, warn};
use validator::Validate;

/// Fields an operator may set on a party. The balance is never among them.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CariGirdisi {
    #[validate(length(min = 1, max = 20), custom = "validate_not_blank")]
    pub cari_kod: String,
    #[validate(length(min = 1, max = 200), custom = "validate_not_blank")]
    pub unvan: String,
    pub tur: CariTuru,
    #[validate(length(max = 20))]
    pub vergi_no: Option<String>,
}

/// Party ledger: CRUD plus the explicit balance adjustment.
pub struct CariService {
    db_pool: Arc<DbPool>,
    repo: CariRepository,
}

impl CariService {
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self {
            repo: CariRepository::new(db_pool.clone()),
            db_pool,
        }
    }

    #[instrument(skip(self, girdi))]
    pub async fn create(&self, girdi: CariGirdisi) -> Result<cari::Model, ServiceError> {
        girdi.validate()?;

        let cari = db::in_transaction(&self.db_pool, "cari.create", move |txn| {
            Box::pin(async move {
                let kod = girdi.cari_kod.trim().to_string();
                let mevcut = Cari::find()
                    .filter(cari::Column::CariKod.eq(kod.as_str()))
                    .one(txn)
                    .await
                    .map_err(ServiceError::db_error)?;
                if mevcut.is_some() {
                    return Err(ServiceError::Conflict(format!(
                        "Party code {} is already in use",
                        kod
                    )));
                }

                cari::ActiveModel {
                    cari_kod: Set(kod),
                    unvan: Set(girdi.unvan.trim().to_string()),
                    tur: Set(girdi.tur),
                    vergi_no: Set(bos_ise_none(girdi.vergi_no)),
                    guncel_bakiye: Set(Decimal::ZERO),
                    ..Default::default()
                }
                .insert(txn)
                .await
                .map_err(ServiceError::db_error)
            })
        })
        .await?;

        info!(cari_id = cari.cari_id, cari_kod = %cari.cari_kod, "Party created");
        Ok(cari)
    }

    #[instrument(skip(self, girdi))]
    pub async fn update(
        &self,
        cari_id: i32,
        girdi: CariGirdisi,
    ) -> Result<cari::Model, ServiceError> {
        girdi.validate()?;

        db::in_transaction(&self.db_pool, "cari.update", move |txn| {
            Box::pin(async move {
                let mevcut = Cari::find_by_id(cari_id)
                    .one(txn)
                    .await
                    .map_err(ServiceError::db_error)?
                    .ok_or_else(|| ServiceError::not_found("Party", cari_id))?;

                let kod = girdi.cari_kod.trim().to_string();
                if kod != mevcut.cari_kod {
                    let cakisan = Cari::find()
                        .filter(cari::Column::CariKod.eq(kod.as_str()))
                        .filter(cari::Column::CariId.ne(cari_id))
                        .one(txn)
                        .await
                        .map_err(ServiceError::db_error)?;
                    if cakisan.is_some() {
                        return Err(ServiceError::Conflict(format!(
                            "Party code {} is already in use",
                            kod
                        )));
                    }
                }

                let mut active: cari::ActiveModel = mevcut.into();
                active.cari_kod = Set(kod);
                active.unvan = Set(girdi.unvan.trim().to_string());
                active.tur = Set(girdi.tur);
                active.vergi_no = Set(bos_ise_none(girdi.vergi_no));
                active.update(txn).await.map_err(ServiceError::db_error)
            })
        })
        .await
    }

    /// Deletes a party with everything it owns, reverting the balance
    /// effects of the invoices and financial movements removed with it.
    #[instrument(skip(self))]
    pub async fn delete(&self, cari_id: i32) -> Result<(), ServiceError> {
        db::in_transaction(&self.db_pool, "cari.delete", move |txn| {
            Box::pin(async move {
                Cari::find_by_id(cari_id)
                    .one(txn)
                    .await
                    .map_err(ServiceError::db_error)?
                    .ok_or_else(|| ServiceError::not_found("Party", cari_id))?;

                let fatura_idler: Vec<i32> = fatura::Entity::find()
                    .select_only()
                    .column(fatura::Column::FaturaId)
                    .filter(fatura::Column::CariId.eq(cari_id))
                    .into_tuple()
                    .all(txn)
                    .await
                    .map_err(ServiceError::db_error)?;
                ledger::faturalari_geri_al(txn, &fatura_idler).await?;

                let evrak_idler: Vec<i32> = cek_senet::Entity::find()
                    .select_only()
                    .column(cek_senet::Column::EvrakId)
                    .filter(cek_senet::Column::CariId.eq(cari_id))
                    .into_tuple()
                    .all(txn)
                    .await
                    .map_err(ServiceError::db_error)?;
                ledger::finans_hareketlerini_geri_al(
                    txn,
                    Condition::any()
                        .add(finans_hareketi::Column::CariId.eq(cari_id))
                        .add(finans_hareketi::Column::EvrakId.is_in(evrak_idler)),
                )
                .await?;

                Cari::delete_by_id(cari_id)
                    .exec(txn)
                    .await
                    .map_err(ServiceError::db_error)?;
                Ok(())
            })
        })
        .await?;

        info!(cari_id, "Party deleted");
        Ok(())
    }

    /// Adds `tutar` to the party balance outside the ledger.
    /// Unknown parties are ignored with a warning.
    #[instrument(skip(self))]
    pub async fn bakiye_guncelle(&self, cari_id: i32, tutar: Decimal) -> Result<(), ServiceError> {
        let bulundu = db::in_transaction(&self.db_pool, "cari.bakiye_guncelle", move |txn| {
            Box::pin(async move { ledger::cari_bakiyesine_ekle(txn, cari_id, tutar).await })
        })
        .await?;

        if !bulundu {
            warn!(cari_id, %tutar, "Balance update for unknown party ignored");
        }
        Ok(())
    }

    pub async fn find_all(&self) -> Result<Vec<cari::Model>, ServiceError> {
        self.repo.find_all().await
    }

    pub async fn find_by_id(&self, cari_id: i32) -> Result<Option<cari::Model>, ServiceError> {
        self.repo.find_by_id(cari_id).await
    }

    pub async fn find_by_kod(&self, cari_kod: &str) -> Result<Option<cari::Model>, ServiceError> {
        self.repo.find_by_kod(cari_kod.trim()).await
    }

    pub async fn find_by_tur(&self, tur: CariTuru) -> Result<Vec<cari::Model>, ServiceError> {
        self.repo.find_by_tur(tur).await
    }

    pub async fn find_by_vergi_no(
        &self,
        vergi_no: &str,
    ) -> Result<Option<cari::Model>, ServiceError> {
        self.repo.find_by_vergi_no(vergi_no.trim()).await
    }

    #[instrument(skip(self))]
    pub async fn search_by_unvan(&self, term: &str) -> Result<Vec<cari::Model>, ServiceError> {
        self.repo.search_by_unvan(term).await
    }
}
