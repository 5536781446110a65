use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;

use crate::entities::kategori::{self, Entity as Kategori};
use crate::entities::urun::{Column, Entity as Urun, Model as UrunModel};
use crate::errors::ServiceError;
use crate::repositories::Repository;

use super::{icerir, BaseRepository};

#[derive(Debug, Clone)]
pub struct KategoriRepository {
    base: BaseRepository,
}

impl KategoriRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn find_all(&self) -> Result<Vec<kategori::Model>, ServiceError> {
        Kategori::find()
            .order_by_asc(kategori::Column::KategoriAd)
            .all(self.base.get_db())
            .await
            .map_err(ServiceError::db_error)
    }

    pub async fn find_by_id(
        &self,
        kategori_id: i32,
    ) -> Result<Option<kategori::Model>, ServiceError> {
        Kategori::find_by_id(kategori_id)
            .one(self.base.get_db())
            .await
            .map_err(ServiceError::db_error)
    }

    pub async fn find_by_ad(&self, ad: &str) -> Result<Option<kategori::Model>, ServiceError> {
        Kategori::find()
            .filter(kategori::Column::KategoriAd.eq(ad))
            .one(self.base.get_db())
            .await
            .map_err(ServiceError::db_error)
    }
}

/// Read access to products
#[derive(Debug, Clone)]
pub struct UrunRepository {
    base: BaseRepository,
}

impl UrunRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn find_all(&self) -> Result<Vec<UrunModel>, ServiceError> {
        Urun::find()
            .order_by_asc(Column::UrunAd)
            .all(self.base.get_db())
            .await
            .map_err(ServiceError::db_error)
    }

    pub async fn find_by_id(&self, urun_id: i32) -> Result<Option<UrunModel>, ServiceError> {
        Urun::find_by_id(urun_id)
            .one(self.base.get_db())
            .await
            .map_err(ServiceError::db_error)
    }

    pub async fn find_by_kategori(&self, kategori_id: i32) -> Result<Vec<UrunModel>, ServiceError> {
        Urun::find()
            .filter(Column::KategoriId.eq(kategori_id))
            .order_by_asc(Column::UrunAd)
            .all(self.base.get_db())
            .await
            .map_err(ServiceError::db_error)
    }

    pub async fn search_by_ad(&self, term: &str) -> Result<Vec<UrunModel>, ServiceError> {
        let hepsi = Urun::find()
            .order_by_asc(Column::UrunAd)
            .all(self.base.get_db())
            .await
            .map_err(ServiceError::db_error)?;
        Ok(hepsi.into_iter().filter(|m| icerir(&m.urun_ad, term)).collect())
    }

    /// Products whose stock on hand is strictly below their minimum level
    pub async fn kritik_stoklar(&self) -> Result<Vec<UrunModel>, ServiceError> {
        Urun::find()
            .filter(Expr::col(Column::MevcutStokMiktari).lt(Expr::col(Column::MinimumStokSeviyesi)))
            .order_by_asc(Column::MevcutStokMiktari)
            .all(self.base.get_db())
            .await
            .map_err(ServiceError::db_error)
    }
}
