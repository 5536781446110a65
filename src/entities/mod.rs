// Parties and catalog
pub mod cari;
pub mod kategori;
pub mod urun;

// Currencies
pub mod kur;
pub mod para_birimi;

// Invoicing and stock
pub mod fatura;
pub mod fatura_hizmet_kalemi;
pub mod hizmet;
pub mod stok_giris_cikis;

// Money
pub mod cek_senet;
pub mod finans_hareketi;
pub mod kasa_banka;
pub mod personel;

// Sales pipeline
pub mod siparis;
pub mod teklif;
pub mod teklif_detay;

// Waste
pub mod atik;
pub mod atik_nedeni;

// Applied balance effects
pub mod bakiye_etkisi;

pub use cari::{CariTuru, Entity as Cari, Model as CariModel};
pub use cek_senet::{CekSenetDurumu, CekSenetTuru, CekSenetYonu, Model as CekSenetModel};
pub use fatura::{Entity as Fatura, FaturaTuru, Model as FaturaModel};
pub use finans_hareketi::{FinansIslemTuru, Model as FinansHareketiModel};
pub use hizmet::HizmetTuru;
pub use kasa_banka::{HesapTuru, Model as KasaBankaModel};
pub use siparis::{Model as SiparisModel, SiparisDurumu};
pub use stok_giris_cikis::{Model as StokGirisCikisModel, StokIslemTuru};
pub use teklif::{Model as TeklifModel, TeklifDurumu};
pub use urun::{Entity as Urun, Model as UrunModel};
