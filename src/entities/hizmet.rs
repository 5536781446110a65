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
pub enum HizmetTuru {
    #[sea_orm(string_value = "GELIR")]
    Gelir,
    #[sea_orm(string_value = "GIDER")]
    Gider,
}

/// Billable (or purchased) service items used on invoice service lines.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "hizmetler")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub hizmet_id: i32,
    pub hizmet_ad: String,
    pub tur: Option<HizmetTuru>,
    pub kdv_orani: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::fatura_hizmet_kalemi::Entity")]
    FaturaHizmetKalemi,
}

impl Related<super::fatura_hizmet_kalemi::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FaturaHizmetKalemi.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
