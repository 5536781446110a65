use crate::{
    db::{self, DbPool},
    entities::{
        kategori::{self, Entity as Kategori},
        stok_giris_cikis, urun,
    },
    errors::ServiceError,
    repositories::KategoriRepository,
    services::{ledger, validate_not_blank},
};
use sea_orm::{ActiveModelTrait, ColumnTrait, Condition, EntityTrait, QueryFilter, QuerySelect, Set};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, instrument};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct KategoriGirdisi {
    #[validate(length(min = 1, max = 50), custom = "validate_not_blank")]
    pub kategori_ad: String,
}

pub struct KategoriService {
    db_pool: Arc<DbPool>,
    repo: KategoriRepository,
}

impl KategoriService {
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self {
            repo: KategoriRepository::new(db_pool.clone()),
            db_pool,
        }
    }

    /// Category names are unique.
    #[instrument(skip(self, girdi))]
    pub async fn create(&self, girdi: KategoriGirdisi) -> Result<kategori::Model, ServiceError> {
        girdi.validate()?;
        let ad = girdi.kategori_ad.trim().to_string();

        let kategori = db::in_transaction(&self.db_pool, "kategori.create", move |txn| {
            Box::pin(async move {
                let mevcut = Kategori::find()
                    .filter(kategori::Column::KategoriAd.eq(ad.as_str()))
                    .one(txn)
                    .await
                    .map_err(ServiceError::db_error)?;
                if mevcut.is_some() {
                    return Err(ServiceError::Conflict(format!(
                        "Category {} already exists",
                        ad
                    )));
                }

                kategori::ActiveModel {
                    kategori_ad: Set(ad),
                    ..Default::default()
                }
                .insert(txn)
                .await
                .map_err(ServiceError::db_error)
            })
        })
        .await?;

        info!(kategori_id = kategori.kategori_id, "Category created");
        Ok(kategori)
    }

    /// Deletes a category and, through the cascade, its products. Stock moved
    /// on those products is reverted first.
    #[instrument(skip(self))]
    pub async fn delete(&self, kategori_id: i32) -> Result<(), ServiceError> {
        db::in_transaction(&self.db_pool, "kategori.delete", move |txn| {
            Box::pin(async move {
                Kategori::find_by_id(kategori_id)
                    .one(txn)
                    .await
                    .map_err(ServiceError::db_error)?
                    .ok_or_else(|| ServiceError::not_found("Category", kategori_id))?;

                let urun_idler: Vec<i32> = urun::Entity::find()
                    .select_only()
                    .column(urun::Column::UrunId)
                    .filter(urun::Column::KategoriId.eq(kategori_id))
                    .into_tuple()
                    .all(txn)
                    .await
                    .map_err(ServiceError::db_error)?;
                ledger::stok_hareketlerini_geri_al(
                    txn,
                    Condition::all().add(stok_giris_cikis::Column::UrunId.is_in(urun_idler)),
                )
                .await?;

                Kategori::delete_by_id(kategori_id)
                    .exec(txn)
                    .await
                    .map_err(ServiceError::db_error)?;
                Ok(())
            })
        })
        .await
    }

    pub async fn find_all(&self) -> Result<Vec<kategori::Model>, ServiceError> {
        self.repo.find_all().await
    }

    pub async fn find_by_id(
        &self,
        kategori_id: i32,
    ) -> Result<Option<kategori::Model>, ServiceError> {
        self.repo.find_by_id(kategori_id).await
    }

    pub async fn find_by_ad(&self, ad: &str) -> Result<Option<kategori::Model>, ServiceError> {
        self.repo.find_by_ad(ad.trim()).await
    }
}
