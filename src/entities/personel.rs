use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "personeller")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub personel_id: i32,
    pub ad_soyad: String,
    pub gorev: Option<String>,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub maas: Option<Decimal>,
    pub ise_giris_tarihi: Option<NaiveDate>,
    pub aktif_mi: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::finans_hareketi::Entity")]
    FinansHareketi,
}

impl Related<super::finans_hareketi::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FinansHareketi.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
