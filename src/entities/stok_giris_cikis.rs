use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Direction of a stock movement.
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
pub enum StokIslemTuru {
    #[sea_orm(string_value = "GIRIS")]
    Giris,
    #[sea_orm(string_value = "CIKIS")]
    Cikis,
}

impl StokIslemTuru {
    /// Signed quantity applied to the product's stock.
    pub fn stok_etkisi(self, miktar: i32) -> i32 {
        match self {
            StokIslemTuru::Giris => miktar,
            StokIslemTuru::Cikis => -miktar,
        }
    }
}

/// The `stok_giris_cikis` table: one stock movement line of an invoice.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "stok_giris_cikis")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub hareket_id: i32,
    pub fatura_id: i32,
    pub urun_id: i32,
    pub siparis_id: Option<i32>,
    pub islem_turu: StokIslemTuru,
    pub miktar: i32,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub birim_fiyat: Decimal,
    pub tarih: DateTime<Utc>,
    pub para_birimi: Option<String>,
    #[sea_orm(column_type = "Decimal(Some((16, 6)))")]
    pub kur: Decimal,
}

impl Model {
    pub fn satir_toplami(&self) -> Decimal {
        Decimal::from(self.miktar) * self.birim_fiyat
    }
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
        belongs_to = "super::urun::Entity",
        from = "Column::UrunId",
        to = "super::urun::Column::UrunId",
        on_delete = "Cascade"
    )]
    Urun,
    #[sea_orm(
        belongs_to = "super::siparis::Entity",
        from = "Column::SiparisId",
        to = "super::siparis::Column::SiparisId",
        on_delete = "SetNull"
    )]
    Siparis,
}

impl Related<super::fatura::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Fatura.def()
    }
}

impl Related<super::urun::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Urun.def()
    }
}

impl Related<super::siparis::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Siparis.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
