use std::sync::Arc;

use crate::{
    config::AppConfig,
    db::DbPool,
    services::{
        atik::AtikService, cari::CariService, cek_senet::CekSenetService,
        dashboard::DashboardService, fatura::FaturaService, finans::FinansService,
        hizmet::HizmetService, kasa_banka::KasaBankaService, kategori::KategoriService,
        para_birimi::ParaBirimiService, personel::PersonelService, siparis::SiparisService,
        stok::StokService, teklif::TeklifService, urun::UrunService,
    },
};

/// Factory for creating service instances with shared dependencies
pub struct ServiceFactory {
    db_pool: Arc<DbPool>,
    config: Option<Arc<AppConfig>>,
}

impl ServiceFactory {
    /// Creates a factory using built-in invoice defaults
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self {
            db_pool,
            config: None,
        }
    }

    /// Creates a factory whose invoice service follows the configured defaults
    pub fn with_config(db_pool: Arc<DbPool>, config: Arc<AppConfig>) -> Self {
        Self {
            db_pool,
            config: Some(config),
        }
    }

    pub fn cari_service(&self) -> CariService {
        CariService::new(self.db_pool.clone())
    }

    pub fn kategori_service(&self) -> KategoriService {
        KategoriService::new(self.db_pool.clone())
    }

    pub fn urun_service(&self) -> UrunService {
        UrunService::new(self.db_pool.clone())
    }

    pub fn fatura_service(&self) -> FaturaService {
        match &self.config {
            Some(config) => FaturaService::with_config(self.db_pool.clone(), config),
            None => FaturaService::new(self.db_pool.clone()),
        }
    }

    pub fn stok_service(&self) -> StokService {
        StokService::new(self.db_pool.clone())
    }

    pub fn hizmet_service(&self) -> HizmetService {
        HizmetService::new(self.db_pool.clone())
    }

    pub fn kasa_banka_service(&self) -> KasaBankaService {
        KasaBankaService::new(self.db_pool.clone())
    }

    pub fn finans_service(&self) -> FinansService {
        FinansService::new(self.db_pool.clone())
    }

    pub fn cek_senet_service(&self) -> CekSenetService {
        CekSenetService::new(self.db_pool.clone())
    }

    pub fn para_birimi_service(&self) -> ParaBirimiService {
        ParaBirimiService::new(self.db_pool.clone())
    }

    pub fn personel_service(&self) -> PersonelService {
        PersonelService::new(self.db_pool.clone())
    }

    pub fn teklif_service(&self) -> TeklifService {
        TeklifService::new(self.db_pool.clone())
    }

    pub fn siparis_service(&self) -> SiparisService {
        SiparisService::new(self.db_pool.clone())
    }

    pub fn atik_service(&self) -> AtikService {
        AtikService::new(self.db_pool.clone())
    }

    pub fn dashboard_service(&self) -> DashboardService {
        DashboardService::new(self.db_pool.clone())
    }

    /// Gets a reference to the database pool
    pub fn db_pool(&self) -> &Arc<DbPool> {
        &self.db_pool
    }
}

/// Service container holding all service instances
#[derive(Clone)]
pub struct ServiceContainer {
    pub cari: Arc<CariService>,
    pub kategori: Arc<KategoriService>,
    pub urun: Arc<UrunService>,
    pub fatura: Arc<FaturaService>,
    pub stok: Arc<StokService>,
    pub hizmet: Arc<HizmetService>,
    pub kasa_banka: Arc<KasaBankaService>,
    pub finans: Arc<FinansService>,
    pub cek_senet: Arc<CekSenetService>,
    pub para_birimi: Arc<ParaBirimiService>,
    pub personel: Arc<PersonelService>,
    pub teklif: Arc<TeklifService>,
    pub siparis: Arc<SiparisService>,
    pub atik: Arc<AtikService>,
    pub dashboard: Arc<DashboardService>,
}

impl ServiceContainer {
    /// Creates a new service container with all services initialized
    pub fn new(factory: &ServiceFactory) -> Self {
        Self {
            cari: Arc::new(factory.cari_service()),
            kategori: Arc::new(factory.kategori_service()),
            urun: Arc::new(factory.urun_service()),
            fatura: Arc::new(factory.fatura_service()),
            stok: Arc::new(factory.stok_service()),
            hizmet: Arc::new(factory.hizmet_service()),
            kasa_banka: Arc::new(factory.kasa_banka_service()),
            finans: Arc::new(factory.finans_service()),
            cek_senet: Arc::new(factory.cek_senet_service()),
            para_birimi: Arc::new(factory.para_birimi_service()),
            personel: Arc::new(factory.personel_service()),
            teklif: Arc::new(factory.teklif_service()),
            siparis: Arc::new(factory.siparis_service()),
            atik: Arc::new(factory.atik_service()),
            dashboard: Arc::new(factory.dashboard_service()),
        }
    }
}
