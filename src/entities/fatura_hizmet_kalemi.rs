use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "fatura_hizmet_kalemleri")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub kalem_id: i32,
    pub fatura_id: i32,
    pub hizmet_id: i32,
    pub aciklama: Option<String>,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub tutar: Decimal,
    pub para_birimi: Option<String>,
    #[sea_orm(column_type = "Decimal(Some((16, 6)))")]
    pub kur: Decimal,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::fatura::Entity",
        from = "Column::FaturaId",
        to = "super::fatura::Column::FaturaId",
        on_delete = "Cascade"
    )]
    Fatura,
    #[sea_orm(
        belongs_to = "super::hizmet::Entity",
        from = "Column::HizmetId",
        to = "super::hizmet::Column::HizmetId",
        on_delete = "Cascade"
    )]
    Hizmet,
}

impl Related<super::fatura::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Fatura.def()
    }
}

impl Related<super::hizmet::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Hizmet.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
