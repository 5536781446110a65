use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Kind of money movement.
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
pub enum FinansIslemTuru {
    /// Money collected from a party into an account.
    #[sea_orm(string_value = "TAHSILAT")]
    Tahsilat,
    /// Money paid from an account to a party.
    #[sea_orm(string_value = "ODEME")]
    Odeme,
    /// Salary paid from an account; never touches a party balance.
    #[sea_orm(string_value = "MAAS")]
    Maas,
}

impl FinansIslemTuru {
    /// Signed effect on the account balance.
    pub fn hesap_etkisi(self, tutar: Decimal) -> Decimal {
        match self {
            FinansIslemTuru::Tahsilat => tutar,
            FinansIslemTuru::Odeme | FinansIslemTuru::Maas => -tutar,
        }
    }

    /// Signed effect on the party balance, `None` when the party is unaffected.
    pub fn cari_etkisi(self, tutar: Decimal) -> Option<Decimal> {
        match self {
            FinansIslemTuru::Tahsilat => Some(-tutar),
            FinansIslemTuru::Odeme => Some(tutar),
            FinansIslemTuru::Maas => None,
        }
    }
}

/// The `finans_hareketleri` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "finans_hareketleri")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub hareket_id: i32,
    pub hesap_id: Option<i32>,
    pub cari_id: Option<i32>,
    pub personel_id: Option<i32>,
    /// Check or note the movement settles, if any.
    pub evrak_id: Option<i32>,
    pub islem_turu: FinansIslemTuru,
    #[sea_orm(column_type = "Decimal(Some((15, 2)))")]
    pub tutar: Decimal,
    pub tarih: DateTime<Utc>,
    pub para_birimi: Option<String>,
    #[sea_orm(column_type = "Decimal(Some((16, 6)))")]
    pub kur: Decimal,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::kasa_banka::Entity",
        from = "Column::HesapId",
        to = "super::kasa_banka::Column::HesapId",
        on_delete = "Cascade"
    )]
    KasaBanka,
    #[sea_orm(
        belongs_to = "super::cari::Entity",
        from = "Column::CariId",
        to = "super::cari::Column::CariId",
        on_delete = "Cascade"
    )]
    Cari,
    #[sea_orm(
        belongs_to = "super::personel::Entity",
        from = "Column::PersonelId",
        to = "super::personel::Column::PersonelId",
        on_delete = "Cascade"
    )]
    Personel,
    #[sea_orm(
        belongs_to = "super::cek_senet::Entity",
        from = "Column::EvrakId",
        to = "super::cek_senet::Column::EvrakId",
        on_delete = "Cascade"
    )]
    CekSenet,
}

impl Related<super::kasa_banka::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::KasaBanka.def()
    }
}

impl Related<super::cari::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Cari.def()
    }
}

impl Related<super::personel::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Personel.def()
    }
}

impl Related<super::cek_senet::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CekSenet.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn collection_fills_account_and_settles_party() {
        assert_eq!(FinansIslemTuru::Tahsilat.hesap_etkisi(dec!(100)), dec!(100));
        assert_eq!(
            FinansIslemTuru::Tahsilat.cari_etkisi(dec!(100)),
            Some(dec!(-100))
        );
    }

    #[test]
    fn payment_drains_account_and_raises_party() {
        assert_eq!(FinansIslemTuru::Odeme.hesap_etkisi(dec!(40)), dec!(-40));
        assert_eq!(FinansIslemTuru::Odeme.cari_etkisi(dec!(40)), Some(dec!(40)));
    }

    #[test]
    fn salary_only_touches_the_account() {
        assert_eq!(FinansIslemTuru::Maas.hesap_etkisi(dec!(25)), dec!(-25));
        assert_eq!(FinansIslemTuru::Maas.cari_etkisi(dec!(25)), None);
    }
}
