use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Kind of row that produced a balance effect.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    DeriveActiveEnum,
    Serialize,
    Deserialize,
    strum::Display,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum EtkiKaynagi {
    #[sea_orm(string_value = "FATURA")]
    Fatura,
    #[sea_orm(string_value = "STOK_HAREKETI")]
    StokHareketi,
    #[sea_orm(string_value = "FINANS_HAREKETI")]
    FinansHareketi,
}

/// Aggregate whose running total an effect moved.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    DeriveActiveEnum,
    Serialize,
    Deserialize,
    strum::Display,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(10))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum EtkiHedefi {
    /// `cariler.guncel_bakiye`
    #[sea_orm(string_value = "CARI")]
    Cari,
    /// `kasa_banka.bakiye`
    #[sea_orm(string_value = "HESAP")]
    Hesap,
    /// `urunler.mevcut_stok_miktari`
    #[sea_orm(string_value = "URUN")]
    Urun,
}

/// The `bakiye_etkileri` table: one row per (source row, target aggregate) effect
/// currently applied. At most one row exists per `(kaynak, kaynak_id, hedef)`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "bakiye_etkileri")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub etki_id: i32,
    pub kaynak: EtkiKaynagi,
    pub kaynak_id: i32,
    pub hedef: EtkiHedefi,
    pub hedef_id: i32,
    /// Signed amount added to the target; a quantity when the target is a product.
    #[sea_orm(column_type = "Decimal(Some((15, 2)))")]
    pub tutar: Decimal,
    pub olusturma_tarihi: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
