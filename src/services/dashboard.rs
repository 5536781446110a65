use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::{
    db::DbPool,
    entities::{fatura::FaturaTuru, urun},
    errors::ServiceError,
    repositories::{CariRepository, FaturaRepository, KasaBankaRepository, UrunRepository},
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StokOzeti {
    pub urun_sayisi: usize,
    /// Σ stock on hand × current sale price
    pub stok_degeri: Decimal,
    pub kritik_stok_sayisi: usize,
    pub kritik_stoklar: Vec<urun::Model>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardOzeti {
    /// Sum of every cash, bank and POS balance
    pub toplam_kasa: Decimal,
    /// Sum of positive party balances
    pub toplam_alacak: Decimal,
    /// Sum of negative party balances, as a positive amount
    pub toplam_borc: Decimal,
    pub stok: StokOzeti,
    pub donem_satis_toplami: Decimal,
    pub donem_alis_toplami: Decimal,
    pub olusturma_zamani: DateTime<Utc>,
}

/// Read-only summary figures for the home screen.
#[derive(Clone)]
pub struct DashboardService {
    cariler: CariRepository,
    urunler: UrunRepository,
    faturalar: FaturaRepository,
    hesaplar: KasaBankaRepository,
}

impl DashboardService {
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self {
            cariler: CariRepository::new(db_pool.clone()),
            urunler: UrunRepository::new(db_pool.clone()),
            faturalar: FaturaRepository::new(db_pool.clone()),
            hesaplar: KasaBankaRepository::new(db_pool),
        }
    }

    #[instrument(skip(self))]
    pub async fn ozet(
        &self,
        baslangic: DateTime<Utc>,
        bitis: DateTime<Utc>,
    ) -> Result<DashboardOzeti, ServiceError> {
        let toplam_kasa = self
            .hesaplar
            .find_all()
            .await?
            .iter()
            .map(|h| h.bakiye)
            .sum::<Decimal>();

        let (toplam_alacak, toplam_borc) = self.cariler.find_all().await?.iter().fold(
            (Decimal::ZERO, Decimal::ZERO),
            |(alacak, borc), cari| {
                if cari.guncel_bakiye.is_sign_positive() {
                    (alacak + cari.guncel_bakiye, borc)
                } else {
                    (alacak, borc - cari.guncel_bakiye)
                }
            },
        );

        let stok = self.stok_ozeti().await?;

        let donem = self
            .faturalar
            .find_by_tarih_araligi(baslangic, bitis, None)
            .await?;
        let donem_toplami = |tur: FaturaTuru| -> Decimal {
            donem
                .iter()
                .filter(|f| f.tur == tur)
                .map(|f| f.genel_toplam)
                .sum()
        };

        let ozet = DashboardOzeti {
            toplam_kasa: toplam_kasa.round_dp(2),
            toplam_alacak: toplam_alacak.round_dp(2),
            toplam_borc: toplam_borc.round_dp(2),
            stok,
            donem_satis_toplami: donem_toplami(FaturaTuru::Satis).round_dp(2),
            donem_alis_toplami: donem_toplami(FaturaTuru::Alis).round_dp(2),
            olusturma_zamani: Utc::now(),
        };

        info!(
            toplam_kasa = %ozet.toplam_kasa,
            kritik = ozet.stok.kritik_stok_sayisi,
            "Dashboard summary generated"
        );
        Ok(ozet)
    }

    pub async fn stok_ozeti(&self) -> Result<StokOzeti, ServiceError> {
        let urunler = self.urunler.find_all().await?;
        let stok_degeri = urunler.iter().map(urun::Model::stok_degeri).sum::<Decimal>();
        let kritik_stoklar: Vec<urun::Model> =
            urunler.iter().filter(|u| u.kritik_stokta()).cloned().collect();

        Ok(StokOzeti {
            urun_sayisi: urunler.len(),
            stok_degeri: stok_degeri.round_dp(2),
            kritik_stok_sayisi: kritik_stoklar.len(),
            kritik_stoklar,
        })
    }
}
