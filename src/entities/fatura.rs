use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::stok_giris_cikis::StokIslemTuru;

/// Purchase or sale.
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
pub enum FaturaTuru {
    #[sea_orm(string_value = "ALIS")]
    Alis,
    #[sea_orm(string_value = "SATIS")]
    Satis,
}

impl FaturaTuru {
    /// Goods come in on a purchase and go out on a sale.
    pub fn stok_yonu(self) -> StokIslemTuru {
        match self {
            FaturaTuru::Alis => StokIslemTuru::Giris,
            FaturaTuru::Satis => StokIslemTuru::Cikis,
        }
    }

    /// Signed effect of an invoice total on the party balance.
    pub fn cari_etkisi(self, genel_toplam: Decimal) -> Decimal {
        match self {
            FaturaTuru::Satis => genel_toplam,
            FaturaTuru::Alis => -genel_toplam,
        }
    }
}

/// The `faturalar` table. Owns its stock movements and service lines.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "faturalar")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub fatura_id: i32,
    pub cari_id: i32,
    pub fatura_tarihi: DateTime<Utc>,
    #[sea_orm(unique)]
    pub fatura_no: String,
    pub tur: FaturaTuru,
    #[sea_orm(column_type = "Decimal(Some((15, 2)))")]
    pub genel_toplam: Decimal,
    pub aciklama: Option<String>,
    pub para_birimi: Option<String>,
    #[sea_orm(column_type = "Decimal(Some((16, 6)))")]
    pub kur: Decimal,
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
    #[sea_orm(
        belongs_to = "super::para_birimi::Entity",
        from = "Column::ParaBirimi",
        to = "super::para_birimi::Column::ParaKod",
        on_delete = "SetNull"
    )]
    ParaBirimi,
    #[sea_orm(has_many = "super::stok_giris_cikis::Entity")]
    StokGirisCikis,
    #[sea_orm(has_many = "super::fatura_hizmet_kalemi::Entity")]
    FaturaHizmetKalemi,
}

impl Related<super::cari::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Cari.def()
    }
}

impl Related<super::para_birimi::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ParaBirimi.def()
    }
}

impl Related<super::stok_giris_cikis::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StokGirisCikis.def()
    }
}

impl Related<super::fatura_hizmet_kalemi::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FaturaHizmetKalemi.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::str::FromStr;

    #[test]
    fn invoice_type_drives_stock_direction() {
        assert_eq!(FaturaTuru::Alis.stok_yonu(), StokIslemTuru::Giris);
        assert_eq!(FaturaTuru::Satis.stok_yonu(), StokIslemTuru::Cikis);
    }

    #[test]
    fn sales_raise_and_purchases_lower_party_balance() {
        assert_eq!(FaturaTuru::Satis.cari_etkisi(dec!(150.00)), dec!(150.00));
        assert_eq!(FaturaTuru::Alis.cari_etkisi(dec!(150.00)), dec!(-150.00));
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!(FaturaTuru::from_str("satis").unwrap(), FaturaTuru::Satis);
        assert_eq!(FaturaTuru::Alis.to_string(), "ALIS");
    }
}
