use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;

use crate::entities::personel::{Column, Entity as Personel, Model as PersonelModel};
use crate::errors::ServiceError;
use crate::repositories::Repository;

use super::{icerir, BaseRepository};

#[derive(Debug, Clone)]
pub struct PersonelRepository {
    base: BaseRepository,
}

impl PersonelRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn find_all(&self) -> Result<Vec<PersonelModel>, ServiceError> {
        Personel::find()
            .order_by_asc(Column::AdSoyad)
            .all(self.base.get_db())
            .await
            .map_err(ServiceError::db_error)
    }

    pub async fn find_by_id(&self, personel_id: i32) -> Result<Option<PersonelModel>, ServiceError> {
        Personel::find_by_id(personel_id)
            .one(self.base.get_db())
            .await
            .map_err(ServiceError::db_error)
    }

    pub async fn find_by_aktif(&self, aktif_mi: bool) -> Result<Vec<PersonelModel>, ServiceError> {
        Personel::find()
            .filter(Column::AktifMi.eq(aktif_mi))
            .order_by_asc(Column::AdSoyad)
            .all(self.base.get_db())
            .await
            .map_err(ServiceError::db_error)
    }

    pub async fn find_by_gorev(&self, gorev: &str) -> Result<Vec<PersonelModel>, ServiceError> {
        Personel::find()
            .filter(Column::Gorev.eq(gorev))
            .order_by_asc(Column::AdSoyad)
            .all(self.base.get_db())
            .await
            .map_err(ServiceError::db_error)
    }

    pub async fn search_by_ad(&self, term: &str) -> Result<Vec<PersonelModel>, ServiceError> {
        let hepsi = Personel::find()
            .order_by_asc(Column::AdSoyad)
            .all(self.base.get_db())
            .await
            .map_err(ServiceError::db_error)?;
        Ok(hepsi.into_iter().filter(|m| icerir(&m.ad_soyad, term)).collect())
    }
}
