use crate::{
    db::{self, DbPool},
    entities::{
        kategori,
        stok_giris_cikis,
        urun::{self, Entity as Urun},
    },
    errors::ServiceError,
    repositories::UrunRepository,
    services::{ledger, validate_non_negative_decimal, validate_not_blank},
};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, EntityTrait, Set};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, instrument, warn};
use validator::Validate;

fn varsayilan_minimum_stok() -> i32 {
    10
}

/// Product card. Stock on hand is only set at creation as the opening stock.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UrunGirdisi {
    #[validate(length(min = 1, max = 100), custom = "validate_not_blank")]
    pub urun_ad: String,
    pub kategori_id: i32,
    #[validate(custom = "validate_non_negative_decimal")]
    #[serde(default)]
    pub mevcut_satis_fiyati: Decimal,
    #[validate(range(min = 0))]
    #[serde(default = "varsayilan_minimum_stok")]
    pub minimum_stok_seviyesi: i32,
}

pub struct UrunService {
    db_pool: Arc<DbPool>,
    repo: UrunRepository,
}

impl UrunService {
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self {
            repo: UrunRepository::new(db_pool.clone()),
            db_pool,
        }
    }

    async fn kategori_var_mi<C: ConnectionTrait>(
        conn: &C,
        kategori_id: i32,
    ) -> Result<(), ServiceError> {
        kategori::Entity::find_by_id(kategori_id)
            .one(conn)
            .await
            .map_err(ServiceError::db_error)?
            .map(|_| ())
            .ok_or_else(|| ServiceError::not_found("Category", kategori_id))
    }

    #[instrument(skip(self, girdi))]
    pub async fn create(
        &self,
        girdi: UrunGirdisi,
        acilis_stogu: i32,
    ) -> Result<urun::Model, ServiceError> {
        girdi.validate()?;
        if acilis_stogu < 0 {
            return Err(ServiceError::InvalidInput(
                "Opening stock must not be negative".to_string(),
            ));
        }

        let urun = db::in_transaction(&self.db_pool, "urun.create", move |txn| {
            Box::pin(async move {
                Self::kategori_var_mi(txn, girdi.kategori_id).await?;
                urun::ActiveModel {
                    urun_ad: Set(girdi.urun_ad.trim().to_string()),
                    kategori_id: Set(girdi.kategori_id),
                    mevcut_satis_fiyati: Set(girdi.mevcut_satis_fiyati),
                    minimum_stok_seviyesi: Set(girdi.minimum_stok_seviyesi),
                    mevcut_stok_miktari: Set(acilis_stogu),
                    ..Default::default()
                }
                .insert(txn)
                .await
                .map_err(ServiceError::db_error)
            })
        })
        .await?;

        info!(urun_id = urun.urun_id, "Product created");
        Ok(urun)
    }

    /// Updates the product card. Stock on hand is left alone.
    #[instrument(skip(self, girdi))]
    pub async fn update(&self, urun_id: i32, girdi: UrunGirdisi) -> Result<urun::Model, ServiceError> {
        girdi.validate()?;

        db::in_transaction(&self.db_pool, "urun.update", move |txn| {
            Box::pin(async move {
                let mevcut = Urun::find_by_id(urun_id)
                    .one(txn)
                    .await
                    .map_err(ServiceError::db_error)?
                    .ok_or_else(|| ServiceError::not_found("Product", urun_id))?;
                Self::kategori_var_mi(txn, girdi.kategori_id).await?;

                let mut active: urun::ActiveModel = mevcut.into();
                active.urun_ad = Set(girdi.urun_ad.trim().to_string());
                active.kategori_id = Set(girdi.kategori_id);
                active.mevcut_satis_fiyati = Set(girdi.mevcut_satis_fiyati);
                active.minimum_stok_seviyesi = Set(girdi.minimum_stok_seviyesi);
                active.update(txn).await.map_err(ServiceError::db_error)
            })
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, urun_id: i32) -> Result<(), ServiceError> {
        db::in_transaction(&self.db_pool, "urun.delete", move |txn| {
            Box::pin(async move {
                Urun::find_by_id(urun_id)
                    .one(txn)
                    .await
                    .map_err(ServiceError::db_error)?
                    .ok_or_else(|| ServiceError::not_found("Product", urun_id))?;

                ledger::stok_hareketlerini_geri_al(
                    txn,
                    Condition::all().add(stok_giris_cikis::Column::UrunId.eq(urun_id)),
                )
                .await?;

                Urun::delete_by_id(urun_id)
                    .exec(txn)
                    .await
                    .map_err(ServiceError::db_error)?;
                Ok(())
            })
        })
        .await
    }

    /// Adds `miktar` (negative to remove) to the stock on hand outside the ledger.
    /// Unknown products are ignored with a warning.
    #[instrument(skip(self))]
    pub async fn stok_guncelle(&self, urun_id: i32, miktar: i32) -> Result<(), ServiceError> {
        let bulundu = db::in_transaction(&self.db_pool, "urun.stok_guncelle", move |txn| {
            Box::pin(async move { ledger::stoga_ekle(txn, urun_id, miktar).await })
        })
        .await?;

        if !bulundu {
            warn!(urun_id, miktar, "Stock update for unknown product ignored");
        }
        Ok(())
    }

    pub async fn find_all(&self) -> Result<Vec<urun::Model>, ServiceError> {
        self.repo.find_all().await
    }

    pub async fn find_by_id(&self, urun_id: i32) -> Result<Option<urun::Model>, ServiceError> {
        self.repo.find_by_id(urun_id).await
    }

    pub async fn find_by_kategori(&self, kategori_id: i32) -> Result<Vec<urun::Model>, ServiceError> {
        self.repo.find_by_kategori(kategori_id).await
    }

    pub async fn search_by_ad(&self, term: &str) -> Result<Vec<urun::Model>, ServiceError> {
        self.repo.search_by_ad(term).await
    }

    /// Products below their minimum stock level.
    pub async fn kritik_stoklar(&self) -> Result<Vec<urun::Model>, ServiceError> {
        self.repo.kritik_stoklar().await
    }
}
