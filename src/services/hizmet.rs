use crate::{
    db::{self, DbPool},
    entities::hizmet::{self, Entity as Hizmet, HizmetTuru},
    errors::ServiceError,
    repositories::HizmetRepository,
    services::validate_not_blank,
};
use sea_orm::{ActiveModelTrait, EntityTrait, Set};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

fn varsayilan_kdv() -> i32 {
    20
}

/// Service item billed on invoices as an amount line.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct HizmetGirdisi {
    #[validate(length(min = 1, max = 100), custom = "validate_not_blank")]
    pub hizmet_ad: String,
    #[serde(default)]
    pub tur: Option<HizmetTuru>,
    #[validate(range(min = 0, max = 100))]
    #[serde(default = "varsayilan_kdv")]
    pub kdv_orani: i32,
}

pub struct HizmetService {
    db_pool: Arc<DbPool>,
    repo: HizmetRepository,
}

impl HizmetService {
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self {
            repo: HizmetRepository::new(db_pool.clone()),
            db_pool,
        }
    }

    #[instrument(skip(self, girdi))]
    pub async fn create(&self, girdi: HizmetGirdisi) -> Result<hizmet::Model, ServiceError> {
        girdi.validate()?;
        hizmet::ActiveModel {
            hizmet_ad: Set(girdi.hizmet_ad.trim().to_string()),
            tur: Set(girdi.tur),
            kdv_orani: Set(girdi.kdv_orani),
            ..Default::default()
        }
        .insert(self.db_pool.as_ref())
        .await
        .map_err(ServiceError::db_error)
    }

    /// Removes the item and the invoice service lines that reference it.
    #[instrument(skip(self))]
    pub async fn delete(&self, hizmet_id: i32) -> Result<(), ServiceError> {
        db::in_transaction(&self.db_pool, "hizmet.delete", move |txn| {
            Box::pin(async move {
                let sonuc = Hizmet::delete_by_id(hizmet_id)
                    .exec(txn)
                    .await
                    .map_err(ServiceError::db_error)?;
                if sonuc.rows_affected == 0 {
                    return Err(ServiceError::not_found("Service item", hizmet_id));
                }
                Ok(())
            })
        })
        .await
    }

    pub async fn find_all(&self) -> Result<Vec<hizmet::Model>, ServiceError> {
        self.repo.find_all().await
    }

    pub async fn find_by_id(&self, hizmet_id: i32) -> Result<Option<hizmet::Model>, ServiceError> {
        self.repo.find_by_id(hizmet_id).await
    }

    pub async fn find_by_tur(&self, tur: HizmetTuru) -> Result<Vec<hizmet::Model>, ServiceError> {
        self.repo.find_by_tur(tur).await
    }

    pub async fn search_by_ad(&self, term: &str) -> Result<Vec<hizmet::Model>, ServiceError> {
        self.repo.search_by_ad(term).await
    }
}
