use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "atik_nedenleri")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub neden_id: i32,
    pub aciklama: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::atik::Entity")]
    Atik,
}

impl Related<super::atik::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Atik.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
