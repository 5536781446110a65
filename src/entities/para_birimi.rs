use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Currencies, keyed by their three letter code (`TRY`, `USD`, ...).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "para_birimleri")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub para_kod: String,
    pub aciklama: Option<String>,
    pub sembol: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::kur::Entity")]
    Kur,
}

impl Related<super::kur::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Kur.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
