use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "teklif_detaylari")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub detay_id: i32,
    pub teklif_id: i32,
    pub urun_id: i32,
    pub miktar: i32,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub birim_fiyat: Decimal,
}

impl Model {
    pub fn satir_toplami(&self) -> Decimal {
        Decimal::from(self.miktar) * self.birim_fiyat
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::teklif::Entity",
        from = "Column::TeklifId",
        to = "super::teklif::Column::TeklifId",
        on_delete = "Cascade"
    )]
    Teklif,
    #[sea_orm(
        belongs_to = "super::urun::Entity",
        from = "Column::UrunId",
        to = "super::urun::Column::UrunId",
        on_delete = "Cascade"
    )]
    Urun,
}

impl Related<super::teklif::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Teklif.def()
    }
}

impl Related<super::urun::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Urun.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
