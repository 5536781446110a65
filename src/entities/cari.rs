use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Whether the party buys from or sells to the business.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    EnumIter,
    DeriveActiveEnum,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(10))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum CariTuru {
    #[sea_orm(string_value = "ALICI")]
    Alici,
    #[sea_orm(string_value = "SATICI")]
    Satici,
}

/// The `cariler` table: trading parties (customers and suppliers).
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "cariler")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub cari_id: i32,

    /// Short unique code typed by the operator, e.g. `C-001`.
    #[sea_orm(unique)]
    pub cari_kod: String,

    /// Trade name.
    pub unvan: String,

    pub tur: CariTuru,

    pub vergi_no: Option<String>,

    /// Running balance. Positive means the party owes the business.
    #[sea_orm(column_type = "Decimal(Some((15, 2)))")]
    pub guncel_bakiye: Decimal,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::fatura::Entity")]
    Fatura,
    #[sea_orm(has_many = "super::finans_hareketi::Entity")]
    FinansHareketi,
    #[sea_orm(has_many = "super::teklif::Entity")]
    Teklif,
    #[sea_orm(has_many = "super::siparis::Entity")]
    Siparis,
    #[sea_orm(has_many = "super::cek_senet::Entity")]
    CekSenet,
}

impl Related<super::fatura::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Fatura.def()
    }
}

impl Related<super::finans_hareketi::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FinansHareketi.def()
    }
}

impl Related<super::teklif::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Teklif.def()
    }
}

impl Related<super::siparis::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Siparis.def()
    }
}

impl Related<super::cek_senet::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CekSenet.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
