use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

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
pub enum CekSenetTuru {
    #[sea_orm(string_value = "CEK")]
    Cek,
    #[sea_orm(string_value = "SENET")]
    Senet,
}

/// Received from a party or issued to one.
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
pub enum CekSenetYonu {
    #[sea_orm(string_value = "ALINAN")]
    Alinan,
    #[sea_orm(string_value = "VERILEN")]
    Verilen,
}

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
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum CekSenetDurumu {
    #[sea_orm(string_value = "PORTFOYDE")]
    Portfoyde,
    #[sea_orm(string_value = "TAHSIL_EDILDI")]
    TahsilEdildi,
    #[sea_orm(string_value = "ODENDI")]
    Odendi,
    #[sea_orm(string_value = "CIRO_EDILDI")]
    CiroEdildi,
    #[sea_orm(string_value = "KARSILIKSIZ")]
    Karsiliksiz,
}

/// The `cek_senetler` table: checks and promissory notes.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "cek_senetler")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub evrak_id: i32,
    pub cari_id: Option<i32>,
    pub tur: CekSenetTuru,
    pub yon: CekSenetYonu,
    pub vade_tarihi: NaiveDate,
    #[sea_orm(column_type = "Decimal(Some((15, 2)))")]
    pub tutar: Decimal,
    pub durum: CekSenetDurumu,
    pub banka_adi: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::cari::Entity",
        from = "Column::CariId",
        to = "super::cari::Column::CariId",
        on_delete = "Cascade"
    )]
    Cari,
    #[sea_orm(has_many = "super::finans_hareketi::Entity")]
    FinansHareketi,
}

impl Related<super::cari::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Cari.def()
    }
}

impl Related<super::finans_hareketi::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FinansHareketi.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
