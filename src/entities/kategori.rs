use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "kategoriler")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub kategori_id: i32,
    #[sea_orm(unique)]
    pub kategori_ad: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::urun::Entity")]
    Urun,
}

impl Related<super::urun::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Urun.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
