use chrono::{DateTime, Utc};
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
pub enum SiparisDurumu {
    #[sea_orm(string_value = "HAZIRLANIYOR")]
    Hazirlaniyor,
    #[sea_orm(string_value = "SEVK_EDILDI")]
    SevkEdildi,
    #[sea_orm(string_value = "TESLIM_EDILDI")]
    TeslimEdildi,
    #[sea_orm(string_value = "IPTAL")]
    Iptal,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "siparisler")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub siparis_id: i32,
    /// Quote this order was converted from.
    pub teklif_id: Option<i32>,
    pub cari_id: i32,
    pub siparis_tarihi: DateTime<Utc>,
    pub durum: SiparisDurumu,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::teklif::Entity",
        from = "Column::TeklifId",
        to = "super::teklif::Column::TeklifId",
        on_delete = "SetNull"
    )]
    Teklif,
    #[sea_orm(
        belongs_to = "super::cari::Entity",
        from = "Column::CariId",
        to = "super::cari::Column::CariId",
        on_delete = "Cascade"
    )]
    Cari,
}

impl Related<super::teklif::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Teklif.def()
    }
}

impl Related<super::cari::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Cari.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
