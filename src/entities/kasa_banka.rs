use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Kind of money account.
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
pub enum HesapTuru {
    #[sea_orm(string_value = "KASA")]
    Kasa,
    #[sea_orm(string_value = "BANKA")]
    Banka,
    #[sea_orm(string_value = "POS")]
    Pos,
}

/// The `kasa_banka` table: cash boxes, bank accounts and card terminals.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "kasa_banka")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub hesap_id: i32,
    pub hesap_adi: String,
    pub tur: HesapTuru,
    #[sea_orm(column_type = "Decimal(Some((15, 2)))")]
    pub bakiye: Decimal,
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
