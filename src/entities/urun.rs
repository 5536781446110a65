use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// The `urunler` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "urunler")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub urun_id: i32,

    pub urun_ad: String,

    pub kategori_id: i32,

    /// Current list price used as the default unit price on invoices.
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub mevcut_satis_fiyati: Decimal,

    /// Stock level under which the product is reported as critical.
    pub minimum_stok_seviyesi: i32,

    /// Quantity on hand. Changed only by stock movements after creation.
    pub mevcut_stok_miktari: i32,
}

impl Model {
    /// True when the quantity on hand is strictly below the configured minimum.
    pub fn kritik_stokta(&self) -> bool {
        self.mevcut_stok_miktari < self.minimum_stok_seviyesi
    }

    /// Quantity on hand valued at the current sale price.
    pub fn stok_degeri(&self) -> Decimal {
        Decimal::from(self.mevcut_stok_miktari) * self.mevcut_satis_fiyati
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::kategori::Entity",
        from = "Column::KategoriId",
        to = "super::kategori::Column::KategoriId",
        on_delete = "Cascade"
    )]
    Kategori,
    #[sea_orm(has_many = "super::stok_giris_cikis::Entity")]
    StokGirisCikis,
}

impl Related<super::kategori::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Kategori.def()
    }
}

impl Related<super::stok_giris_cikis::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StokGirisCikis.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
