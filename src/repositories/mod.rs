use sea_orm::DatabaseConnection;
use std::sync::Arc;

pub mod atik_repository;
pub mod cari_repository;
pub mod fatura_repository;
pub mod finans_repository;
pub mod hizmet_repository;
pub mod para_birimi_repository;
pub mod personel_repository;
pub mod teklif_repository;
pub mod urun_repository;

pub use atik_repository::AtikRepository;
pub use cari_repository::CariRepository;
pub use fatura_repository::FaturaRepository;
pub use finans_repository::{CekSenetRepository, FinansRepository, KasaBankaRepository};
pub use hizmet_repository::HizmetRepository;
pub use para_birimi_repository::ParaBirimiRepository;
pub use personel_repository::PersonelRepository;
pub use teklif_repository::{SiparisRepository, TeklifRepository};
pub use urun_repository::{KategoriRepository, UrunRepository};

/// Repository trait for common database operations
pub trait Repository {
    fn get_db(&self) -> &DatabaseConnection;
}

#[derive(Debug, Clone)]
pub struct BaseRepository {
    db: Arc<DatabaseConnection>,
}

impl BaseRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl Repository for BaseRepository {
    fn get_db(&self) -> &DatabaseConnection {
        &self.db
    }
}

/// Folds text for name search: lowercase, with Turkish letters reduced to their ASCII base.
///
/// `Şeker`, `ŞEKER` and `seker` all fold to `seker`. SQLite's `LOWER` only folds ASCII,
/// so search compares folded strings in Rust instead of in SQL.
pub fn arama_anahtari(metin: &str) -> String {
    let mut anahtar = String::with_capacity(metin.len());
    for c in metin.chars() {
        match c {
            'I' | 'ı' | 'İ' => anahtar.push('i'),
            'Ş' | 'ş' => anahtar.push('s'),
            'Ğ' | 'ğ' => anahtar.push('g'),
            'Ü' | 'ü' => anahtar.push('u'),
            'Ö' | 'ö' => anahtar.push('o'),
            'Ç' | 'ç' => anahtar.push('c'),
            '\u{307}' => {}
            _ => anahtar.extend(c.to_lowercase()),
        }
    }
    anahtar
}

/// Substring match under [`arama_anahtari`]. The term is literal text; an empty term matches.
pub(crate) fn icerir(deger: &str, aranan: &str) -> bool {
    arama_anahtari(deger).contains(&arama_anahtari(aranan.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("ŞEKER GIDA A.Ş.", "şeker", true)]
    #[case("ŞEKER GIDA A.Ş.", "Şeker", true)]
    #[case("ŞEKER GIDA A.Ş.", "gıda", true)]
    #[case("ŞEKER GIDA A.Ş.", "gida", true)]
    #[case("ŞEKER GIDA A.Ş.", "a.ş.", true)]
    #[case("İZMİR Çelik", "izmir ÇEL", true)]
    #[case("Öğüt Dağıtım", "ogut dagitim", true)]
    #[case("%50 İndirimli Vida", "%50", true)]
    #[case("Vida 500", "50%", false)]
    #[case("Vida_1", "a_1", true)]
    #[case("Vida 21", "a_1", false)]
    #[case("Ahşap", "  ", true)]
    fn folds_turkish_letters_and_keeps_wildcards_literal(
        #[case] deger: &str,
        #[case] aranan: &str,
        #[case] beklenen: bool,
    ) {
        assert_eq!(icerir(deger, aranan), beklenen);
    }
}
