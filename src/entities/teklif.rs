use chrono::{DateTime, NaiveDate, Utc};
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
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum TeklifDurumu {
    #[sea_orm(string_value = "BEKLIYOR")]
    Bekliyor,
    #[sea_orm(string_value = "ONAYLANDI")]
    Onaylandi,
    #[sea_orm(string_value = "REDDEDILDI")]
    Reddedildi,
}

/// The `teklifler` table: price quotes.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "teklifler")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub teklif_id: i32,
    pub cari_id: i32,
    pub teklif_tarihi: DateTime<Utc>,
    pub gecerlilik_tarihi: Option<NaiveDate>,
    pub durum: TeklifDurumu,
    #[sea_orm(column_type = "Decimal(Some((15, 2)))")]
    pub toplam_tutar: Decimal,
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
    #[sea_orm(has_many = "super::teklif_detay::Entity")]
    TeklifDetay,
    #[sea_orm(has_many = "super::siparis::Entity")]
    Siparis,
}

impl Related<super::cari::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Cari.def()
    }
}

impl Related<super::teklif_detay::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TeklifDetay.def()
    }
}

impl Related<super::siparis::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Siparis.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
