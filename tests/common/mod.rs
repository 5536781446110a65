#![allow(dead_code)]

use std::sync::Arc;

use rust_decimal::Decimal;
use sea_orm::{ConnectOptions, Database};
use ticari::{
    config::AppConfig,
    db,
    entities::{
        kasa_banka, kategori, CariModel, CariTuru, FaturaTuru, HesapTuru, UrunModel,
    },
    services::{
        cari::CariGirdisi,
        fatura::{FaturaDetayi, FaturaGirdisi, FaturaSatiri},
        kasa_banka::HesapGirdisi,
        kategori::KategoriGirdisi,
        urun::UrunGirdisi,
    },
    AppState,
};

/// Application state over a fresh in-memory SQLite database.
pub struct TestApp {
    pub state: AppState,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_config(AppConfig::new("sqlite::memory:".to_string(), "test".to_string())).await
    }

    pub async fn with_config(mut cfg: AppConfig) -> Self {
        // each pooled connection to :memory: would see its own empty database
        cfg.db_max_connections = 1;
        cfg.db_min_connections = 1;

        let mut opt = ConnectOptions::new(cfg.database_url.clone());
        opt.max_connections(1).min_connections(1).sqlx_logging(false);
        let pool = Database::connect(opt).await.expect("in-memory sqlite");
        db::run_migrations(&pool).await.expect("migrations");

        let state = AppState::from_pool(Arc::new(pool), Arc::new(cfg));
        Self { state }
    }

    pub async fn cari(&self, kod: &str, tur: CariTuru) -> CariModel {
        self.state
            .services
            .cari
            .create(CariGirdisi {
                cari_kod: kod.to_string(),
                unvan: format!("{} Ticaret Ltd.", kod),
                tur,
                vergi_no: None,
            })
            .await
            .expect("create party")
    }

    pub async fn kategori(&self, ad: &str) -> kategori::Model {
        self.state
            .services
            .kategori
            .create(KategoriGirdisi {
                kategori_ad: ad.to_string(),
            })
            .await
            .expect("create category")
    }

    pub async fn urun(&self, ad: &str, fiyat: Decimal, stok: i32) -> UrunModel {
        let kategori = match self
            .state
            .services
            .kategori
            .find_by_ad("Genel")
            .await
            .expect("category lookup")
        {
            Some(k) => k,
            None => self.kategori("Genel").await,
        };
        self.state
            .services
            .urun
            .create(
                UrunGirdisi {
                    urun_ad: ad.to_string(),
                    kategori_id: kategori.kategori_id,
                    mevcut_satis_fiyati: fiyat,
                    minimum_stok_seviyesi: 10,
                },
                stok,
            )
            .await
            .expect("create product")
    }

    pub async fn hesap(&self, ad: &str, acilis: Decimal) -> kasa_banka::Model {
        self.state
            .services
            .kasa_banka
            .create(
                HesapGirdisi {
                    hesap_adi: ad.to_string(),
                    tur: HesapTuru::Kasa,
                },
                acilis,
            )
            .await
            .expect("create account")
    }

    /// Saves a KDV-free invoice with one line per `(urun_id, miktar, birim_fiyat)`.
    pub async fn fatura(
        &self,
        cari_id: i32,
        tur: FaturaTuru,
        satirlar: &[(i32, i32, Decimal)],
    ) -> FaturaDetayi {
        self.state
            .services
            .fatura
            .kaydet(fatura_girdisi(cari_id, tur, satirlar))
            .await
            .expect("save invoice")
    }

    pub async fn bakiye(&self, cari_id: i32) -> Decimal {
        self.state
            .services
            .cari
            .find_by_id(cari_id)
            .await
            .expect("party lookup")
            .expect("party exists")
            .guncel_bakiye
    }

    pub async fn stok(&self, urun_id: i32) -> i32 {
        self.state
            .services
            .urun
            .find_by_id(urun_id)
            .await
            .expect("product lookup")
            .expect("product exists")
            .mevcut_stok_miktari
    }

    pub async fn hesap_bakiyesi(&self, hesap_id: i32) -> Decimal {
        self.state
            .services
            .kasa_banka
            .find_by_id(hesap_id)
            .await
            .expect("account lookup")
            .expect("account exists")
            .bakiye
    }
}

pub fn fatura_girdisi(
    cari_id: i32,
    tur: FaturaTuru,
    satirlar: &[(i32, i32, Decimal)],
) -> FaturaGirdisi {
    let mut girdi = FaturaGirdisi::new(cari_id, tur);
    girdi.kdv_orani = Some(0);
    girdi.satirlar = satirlar
        .iter()
        .map(|&(urun_id, miktar, birim_fiyat)| FaturaSatiri {
            hareket_id: None,
            urun_id,
            miktar,
            birim_fiyat: Some(birim_fiyat),
            islem_turu: None,
            siparis_id: None,
        })
        .collect();
    girdi
}
