use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Recorded waste (spoiled or damaged goods) of a product.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "atiklar")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub atik_id: i32,
    pub urun_id: i32,
    pub neden_id: Option<i32>,
    pub miktar: i32,
    pub tarih: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::urun::Entity",
        from = "Column::UrunId",
        to = "super::urun::Column::UrunId",
        on_delete = "Cascade"
    )]
    Urun,
    #[sea_orm(
        belongs_to = "super::atik_nedeni::Entity",
        from = "Column::NedenId",
        to = "super::atik_nedeni::Column::NedenId",
        on_delete = "Cascade"
    )]
    AtikNedeni,
}

impl Related<super::urun::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Urun.def()
    }
}

impl Related<super::atik_nedeni::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AtikNedeni.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
