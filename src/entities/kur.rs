use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Historical exchange rate of a currency against the local currency.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "kurlar")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub kur_id: i32,
    pub para_kod: String,
    pub kur_tarihi: NaiveDate,
    #[sea_orm(column_type = "Decimal(Some((16, 6)))")]
    pub kur: Decimal,
    /// Publisher of the rate, `TCMB` unless stated otherwise.
    pub kaynak: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::para_birimi::Entity",
        from = "Column::ParaKod",
        to = "super::para_birimi::Column::ParaKod",
        on_delete = "Cascade"
    )]
    ParaBirimi,
}

impl Related<super::para_birimi::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ParaBirimi.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
