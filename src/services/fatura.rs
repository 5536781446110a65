use crate::{
    config::AppConfig,
    db::{self, DbPool},
    entities::{
        bakiye_etkisi::EtkiKaynagi,
        cari,
        fatura::{self, Entity as Fatura, FaturaTuru},
        fatura_hizmet_kalemi, hizmet, para_birimi,
        stok_giris_cikis::{self, StokIslemTuru},
        urun,
    },
    errors::ServiceError,
    repositories::FaturaRepository,
    services::{
        bos_ise_none,
        ledger::{self, Etki},
        validate_non_negative_decimal, validate_positive_decimal,
    },
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseTransaction, EntityTrait,
    QueryFilter, Set,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, instrument};
use uuid::Uuid;
use validator::Validate;

pub const VARSAYILAN_KDV_ORANI: u32 = 20;
pub const VARSAYILAN_PARA_BIRIMI: &str = "TRY";

/// Invoice number handed out when the operator leaves it empty:
/// `FAT-<yyyymmdd>-<8 hex>`.
pub fn yeni_fatura_no() -> String {
    let ek = Uuid::new_v4().simple().to_string();
    format!("FAT-{}-{}", Utc::now().format("%Y%m%d"), &ek[..8])
}

/// Totals of an invoice form.
///
/// Each product line contributes `miktar × birim_fiyat` to the subtotal and
/// the same amount times the KDV rate to the tax. Service lines are added to
/// the grand total as they are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FaturaHesabi {
    pub ara_toplam: Decimal,
    pub kdv_toplami: Decimal,
    pub hizmet_toplami: Decimal,
    pub genel_toplam: Decimal,
}

impl FaturaHesabi {
    pub fn hesapla<S, H>(satirlar: S, hizmet_tutarlari: H, kdv_orani: u32) -> Self
    where
        S: IntoIterator<Item = (i32, Decimal)>,
        H: IntoIterator<Item = Decimal>,
    {
        let oran = Decimal::from(kdv_orani) / Decimal::ONE_HUNDRED;
        let mut ara_toplam = Decimal::ZERO;
        let mut kdv_toplami = Decimal::ZERO;
        for (miktar, birim_fiyat) in satirlar {
            let satir = Decimal::from(miktar) * birim_fiyat;
            ara_toplam += satir;
            kdv_toplami += satir * oran;
        }
        let hizmet_toplami: Decimal = hizmet_tutarlari.into_iter().sum();

        Self {
            ara_toplam: ara_toplam.round_dp(2),
            kdv_toplami: kdv_toplami.round_dp(2),
            hizmet_toplami: hizmet_toplami.round_dp(2),
            genel_toplam: (ara_toplam + kdv_toplami + hizmet_toplami).round_dp(2),
        }
    }
}

/// One product line of an invoice. Lines carrying a `hareket_id` update that
/// stock movement of the invoice in place.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FaturaSatiri {
    #[serde(default)]
    pub hareket_id: Option<i32>,
    pub urun_id: i32,
    #[validate(range(min = 1))]
    pub miktar: i32,
    /// Defaults to the product's current sale price.
    #[validate(custom = "validate_non_negative_decimal")]
    #[serde(default)]
    pub birim_fiyat: Option<Decimal>,
    /// Defaults to the direction implied by the invoice type.
    #[serde(default)]
    pub islem_turu: Option<StokIslemTuru>,
    #[serde(default)]
    pub siparis_id: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct HizmetSatiri {
    pub hizmet_id: i32,
    #[validate(length(max = 200))]
    #[serde(default)]
    pub aciklama: Option<String>,
    #[validate(custom = "validate_non_negative_decimal")]
    pub tutar: Decimal,
}

/// Invoice with its lines. Without `fatura_id` a new invoice is created;
/// with it the existing invoice is rewritten and its balance effects reconciled.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FaturaGirdisi {
    #[serde(default)]
    pub fatura_id: Option<i32>,
    pub cari_id: i32,
    #[validate(length(min = 1, max = 50))]
    #[serde(default)]
    pub fatura_no: Option<String>,
    #[serde(default)]
    pub fatura_tarihi: Option<DateTime<Utc>>,
    pub tur: FaturaTuru,
    #[validate(length(max = 500))]
    #[serde(default)]
    pub aciklama: Option<String>,
    #[validate(length(equal = 3))]
    #[serde(default)]
    pub para_birimi: Option<String>,
    #[validate(custom = "validate_positive_decimal")]
    #[serde(default)]
    pub kur: Option<Decimal>,
    /// Overrides the computed grand total.
    #[validate(custom = "validate_non_negative_decimal")]
    #[serde(default)]
    pub genel_toplam: Option<Decimal>,
    #[validate(range(max = 100))]
    #[serde(default)]
    pub kdv_orani: Option<u32>,
    #[validate]
    #[serde(default)]
    pub satirlar: Vec<FaturaSatiri>,
    #[validate]
    #[serde(default)]
    pub hizmetler: Vec<HizmetSatiri>,
}

impl FaturaGirdisi {
    pub fn new(cari_id: i32, tur: FaturaTuru) -> Self {
        Self {
            fatura_id: None,
            cari_id,
            fatura_no: None,
            fatura_tarihi: None,
            tur,
            aciklama: None,
            para_birimi: None,
            kur: None,
            genel_toplam: None,
            kdv_orani: None,
            satirlar: Vec::new(),
            hizmetler: Vec::new(),
        }
    }
}

/// An invoice together with the rows it owns.
#[derive(Debug, Clone, Serialize)]
pub struct FaturaDetayi {
    pub fatura: fatura::Model,
    pub stok_hareketleri: Vec<stok_giris_cikis::Model>,
    pub hizmet_kalemleri: Vec<fatura_hizmet_kalemi::Model>,
}

/// Invoicing: saving an invoice moves stock and the party balance.
pub struct FaturaService {
    db_pool: Arc<DbPool>,
    repo: FaturaRepository,
    varsayilan_para_birimi: String,
    varsayilan_kdv_orani: u32,
}

impl FaturaService {
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self {
            repo: FaturaRepository::new(db_pool.clone()),
            db_pool,
            varsayilan_para_birimi: VARSAYILAN_PARA_BIRIMI.to_string(),
            varsayilan_kdv_orani: VARSAYILAN_KDV_ORANI,
        }
    }

    pub fn with_config(db_pool: Arc<DbPool>, config: &AppConfig) -> Self {
        Self {
            varsayilan_para_birimi: config.default_currency.clone(),
            varsayilan_kdv_orani: config.default_kdv_orani,
            ..Self::new(db_pool)
        }
    }

    /// Saves an invoice with its product and service lines in one transaction.
    #[instrument(skip(self, girdi), fields(cari_id = girdi.cari_id, tur = %girdi.tur))]
    pub async fn kaydet(&self, girdi: FaturaGirdisi) -> Result<FaturaDetayi, ServiceError> {
        girdi.validate()?;
        let varsayilan_para_birimi = self.varsayilan_para_birimi.clone();
        let kdv_orani = girdi.kdv_orani.unwrap_or(self.varsayilan_kdv_orani);

        let fatura_id = db::in_transaction(&self.db_pool, "fatura.kaydet", move |txn| {
            Box::pin(async move {
                Self::kaydet_txn(txn, girdi, &varsayilan_para_birimi, kdv_orani).await
            })
        })
        .await?;

        let detay = self
            .detay(fatura_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Invoice", fatura_id))?;
        info!(
            fatura_id,
            fatura_no = %detay.fatura.fatura_no,
            genel_toplam = %detay.fatura.genel_toplam,
            "Invoice saved"
        );
        Ok(detay)
    }

    async fn kaydet_txn(
        txn: &DatabaseTransaction,
        girdi: FaturaGirdisi,
        varsayilan_para_birimi: &str,
        kdv_orani: u32,
    ) -> Result<i32, ServiceError> {
        cari::Entity::find_by_id(girdi.cari_id)
            .one(txn)
            .await
            .map_err(ServiceError::db_error)?
            .ok_or_else(|| ServiceError::not_found("Party", girdi.cari_id))?;

        // Fields left empty on an update keep their stored values
        let mevcut = match girdi.fatura_id {
            Some(id) => Some(
                Fatura::find_by_id(id)
                    .one(txn)
                    .await
                    .map_err(ServiceError::db_error)?
                    .ok_or_else(|| ServiceError::not_found("Invoice", id))?,
            ),
            None => None,
        };

        let para_birimi = match (
            bos_ise_none(girdi.para_birimi.clone()),
            mevcut.as_ref().and_then(|m| m.para_birimi.clone()),
        ) {
            (None, Some(kayitli)) => Some(kayitli),
            (istenen, _) => Self::para_birimi_coz(txn, istenen, varsayilan_para_birimi).await?,
        };
        let kur = girdi
            .kur
            .or_else(|| mevcut.as_ref().map(|m| m.kur))
            .unwrap_or(Decimal::ONE);
        let tarih = girdi
            .fatura_tarihi
            .or_else(|| mevcut.as_ref().map(|m| m.fatura_tarihi))
            .unwrap_or_else(Utc::now);
        let stok_yonu = girdi.tur.stok_yonu();

        // Resolve product lines against the catalog
        let mut satirlar = Vec::with_capacity(girdi.satirlar.len());
        for satir in &girdi.satirlar {
            let urun = urun::Entity::find_by_id(satir.urun_id)
                .one(txn)
                .await
                .map_err(ServiceError::db_error)?
                .ok_or_else(|| ServiceError::not_found("Product", satir.urun_id))?;
            satirlar.push(CozulmusSatir {
                hareket_id: satir.hareket_id,
                urun_id: urun.urun_id,
                miktar: satir.miktar,
                birim_fiyat: satir.birim_fiyat.unwrap_or(urun.mevcut_satis_fiyati),
                islem_turu: satir.islem_turu.unwrap_or(stok_yonu),
                siparis_id: satir.siparis_id,
            });
        }

        for kalem in &girdi.hizmetler {
            hizmet::Entity::find_by_id(kalem.hizmet_id)
                .one(txn)
                .await
                .map_err(ServiceError::db_error)?
                .ok_or_else(|| ServiceError::not_found("Service item", kalem.hizmet_id))?;
        }

        let hesap = FaturaHesabi::hesapla(
            satirlar.iter().map(|s| (s.miktar, s.birim_fiyat)),
            girdi.hizmetler.iter().map(|h| h.tutar),
            kdv_orani,
        );
        let genel_toplam = girdi.genel_toplam.unwrap_or(hesap.genel_toplam);

        let fatura_no = bos_ise_none(girdi.fatura_no.clone())
            .or_else(|| mevcut.as_ref().map(|m| m.fatura_no.clone()))
            .unwrap_or_else(yeni_fatura_no);
        let mut no_sorgusu = Fatura::find().filter(fatura::Column::FaturaNo.eq(fatura_no.as_str()));
        if let Some(id) = girdi.fatura_id {
            no_sorgusu = no_sorgusu.filter(fatura::Column::FaturaId.ne(id));
        }
        if no_sorgusu
            .one(txn)
            .await
            .map_err(ServiceError::db_error)?
            .is_some()
        {
            return Err(ServiceError::Conflict(format!(
                "Invoice number {} is already in use",
                fatura_no
            )));
        }

        let fatura = match mevcut {
            Some(mevcut) => {
                let mut active: fatura::ActiveModel = mevcut.into();
                active.cari_id = Set(girdi.cari_id);
                active.fatura_tarihi = Set(tarih);
                active.fatura_no = Set(fatura_no);
                active.tur = Set(girdi.tur);
                active.genel_toplam = Set(genel_toplam);
                active.aciklama = Set(bos_ise_none(girdi.aciklama.clone()));
                active.para_birimi = Set(para_birimi.clone());
                active.kur = Set(kur);
                active.update(txn).await.map_err(ServiceError::db_error)?
            }
            None => fatura::ActiveModel {
                cari_id: Set(girdi.cari_id),
                fatura_tarihi: Set(tarih),
                fatura_no: Set(fatura_no),
                tur: Set(girdi.tur),
                genel_toplam: Set(genel_toplam),
                aciklama: Set(bos_ise_none(girdi.aciklama.clone())),
                para_birimi: Set(para_birimi.clone()),
                kur: Set(kur),
                ..Default::default()
            }
            .insert(txn)
            .await
            .map_err(ServiceError::db_error)?,
        };

        Self::stok_satirlarini_esitle(txn, &fatura, satirlar).await?;
        Self::hizmet_kalemlerini_yaz(txn, &fatura, &girdi.hizmetler).await?;

        let ozet = ledger::reconcile(
            txn,
            EtkiKaynagi::Fatura,
            fatura.fatura_id,
            vec![Etki::cari(fatura.cari_id, fatura.tur.cari_etkisi(fatura.genel_toplam))],
        )
        .await?;
        debug!(fatura_id = fatura.fatura_id, ?ozet, "Invoice party effect reconciled");

        Ok(fatura.fatura_id)
    }

    /// An explicit currency must exist. The configured default is only used
    /// when it is registered.
    async fn para_birimi_coz<C: ConnectionTrait>(
        conn: &C,
        istenen: Option<String>,
        varsayilan: &str,
    ) -> Result<Option<String>, ServiceError> {
        let (kod, acik) = match bos_ise_none(istenen) {
            Some(kod) => (kod.to_uppercase(), true),
            None => (varsayilan.to_uppercase(), false),
        };
        let kayitli = para_birimi::Entity::find_by_id(kod.clone())
            .one(conn)
            .await
            .map_err(ServiceError::db_error)?
            .is_some();
        match (kayitli, acik) {
            (true, _) => Ok(Some(kod)),
            (false, true) => Err(ServiceError::not_found("Currency", kod)),
            (false, false) => Ok(None),
        }
    }

    async fn stok_satirlarini_esitle(
        txn: &DatabaseTransaction,
        fatura: &fatura::Model,
        satirlar: Vec<CozulmusSatir>,
    ) -> Result<(), ServiceError> {
        let mut mevcut: HashMap<i32, stok_giris_cikis::Model> = stok_giris_cikis::Entity::find()
            .filter(stok_giris_cikis::Column::FaturaId.eq(fatura.fatura_id))
            .all(txn)
            .await
            .map_err(ServiceError::db_error)?
            .into_iter()
            .map(|m| (m.hareket_id, m))
            .collect();

        let mut yazilanlar = Vec::with_capacity(satirlar.len());
        for satir in satirlar {
            let model = match satir.hareket_id {
                Some(hareket_id) => {
                    let eski = mevcut.remove(&hareket_id).ok_or_else(|| {
                        ServiceError::InvalidInput(format!(
                            "Stock movement {} does not belong to invoice {}",
                            hareket_id, fatura.fatura_id
                        ))
                    })?;
                    let mut active: stok_giris_cikis::ActiveModel = eski.into();
                    active.urun_id = Set(satir.urun_id);
                    active.siparis_id = Set(satir.siparis_id);
                    active.islem_turu = Set(satir.islem_turu);
                    active.miktar = Set(satir.miktar);
                    active.birim_fiyat = Set(satir.birim_fiyat);
                    active.tarih = Set(fatura.fatura_tarihi);
                    active.para_birimi = Set(fatura.para_birimi.clone());
                    active.kur = Set(fatura.kur);
                    active.update(txn).await.map_err(ServiceError::db_error)?
                }
                None => stok_giris_cikis::ActiveModel {
                    fatura_id: Set(fatura.fatura_id),
                    urun_id: Set(satir.urun_id),
                    siparis_id: Set(satir.siparis_id),
                    islem_turu: Set(satir.islem_turu),
                    miktar: Set(satir.miktar),
                    birim_fiyat: Set(satir.birim_fiyat),
                    tarih: Set(fatura.fatura_tarihi),
                    para_birimi: Set(fatura.para_birimi.clone()),
                    kur: Set(fatura.kur),
                    ..Default::default()
                }
                .insert(txn)
                .await
                .map_err(ServiceError::db_error)?,
            };
            yazilanlar.push(model);
        }

        // Lines dropped from the form
        let silinecek: Vec<i32> = mevcut.into_keys().collect();
        if !silinecek.is_empty() {
            ledger::geri_al(txn, EtkiKaynagi::StokHareketi, &silinecek).await?;
            stok_giris_cikis::Entity::delete_many()
                .filter(stok_giris_cikis::Column::HareketId.is_in(silinecek))
                .exec(txn)
                .await
                .map_err(ServiceError::db_error)?;
        }

        for hareket in &yazilanlar {
            ledger::reconcile(
                txn,
                EtkiKaynagi::StokHareketi,
                hareket.hareket_id,
                vec![Etki::urun(
                    hareket.urun_id,
                    hareket.islem_turu.stok_etkisi(hareket.miktar),
                )],
            )
            .await?;
        }
        Ok(())
    }

    async fn hizmet_kalemlerini_yaz(
        txn: &DatabaseTransaction,
        fatura: &fatura::Model,
        kalemler: &[HizmetSatiri],
    ) -> Result<(), ServiceError> {
        fatura_hizmet_kalemi::Entity::delete_many()
            .filter(fatura_hizmet_kalemi::Column::FaturaId.eq(fatura.fatura_id))
            .exec(txn)
            .await
            .map_err(ServiceError::db_error)?;

        for kalem in kalemler {
            fatura_hizmet_kalemi::ActiveModel {
                fatura_id: Set(fatura.fatura_id),
                hizmet_id: Set(kalem.hizmet_id),
                aciklama: Set(bos_ise_none(kalem.aciklama.clone())),
                tutar: Set(kalem.tutar),
                para_birimi: Set(fatura.para_birimi.clone()),
                kur: Set(fatura.kur),
                ..Default::default()
            }
            .insert(txn)
            .await
            .map_err(ServiceError::db_error)?;
        }
        Ok(())
    }

    /// Deletes an invoice and reverts the stock and party balance it moved.
    #[instrument(skip(self))]
    pub async fn sil(&self, fatura_id: i32) -> Result<(), ServiceError> {
        db::in_transaction(&self.db_pool, "fatura.sil", move |txn| {
            Box::pin(async move {
                Fatura::find_by_id(fatura_id)
                    .one(txn)
                    .await
                    .map_err(ServiceError::db_error)?
                    .ok_or_else(|| ServiceError::not_found("Invoice", fatura_id))?;

                ledger::faturalari_geri_al(txn, &[fatura_id]).await?;
                Fatura::delete_by_id(fatura_id)
                    .exec(txn)
                    .await
                    .map_err(ServiceError::db_error)?;
                Ok(())
            })
        })
        .await?;

        info!(fatura_id, "Invoice deleted");
        Ok(())
    }

    pub async fn find_all(&self) -> Result<Vec<fatura::Model>, ServiceError> {
        self.repo.find_all().await
    }

    pub async fn find_by_id(&self, fatura_id: i32) -> Result<Option<fatura::Model>, ServiceError> {
        self.repo.find_by_id(fatura_id).await
    }

    pub async fn detay(&self, fatura_id: i32) -> Result<Option<FaturaDetayi>, ServiceError> {
        let Some(fatura) = self.repo.find_by_id(fatura_id).await? else {
            return Ok(None);
        };
        let stok_hareketleri = self.repo.stok_hareketleri(fatura_id).await?;
        let hizmet_kalemleri = self.repo.hizmet_kalemleri(fatura_id).await?;
        Ok(Some(FaturaDetayi {
            fatura,
            stok_hareketleri,
            hizmet_kalemleri,
        }))
    }

    pub async fn find_by_cari(&self, cari_id: i32) -> Result<Vec<fatura::Model>, ServiceError> {
        self.repo.find_by_cari(cari_id).await
    }

    pub async fn find_by_tur(&self, tur: FaturaTuru) -> Result<Vec<fatura::Model>, ServiceError> {
        self.repo.find_by_tur(tur).await
    }

    pub async fn find_by_fatura_no(
        &self,
        fatura_no: &str,
    ) -> Result<Option<fatura::Model>, ServiceError> {
        self.repo.find_by_fatura_no(fatura_no.trim()).await
    }

    pub async fn find_by_tarih_araligi(
        &self,
        baslangic: DateTime<Utc>,
        bitis: DateTime<Utc>,
    ) -> Result<Vec<fatura::Model>, ServiceError> {
        self.repo.find_by_tarih_araligi(baslangic, bitis, None).await
    }

    /// Service lines of an invoice
    pub async fn hizmet_kalemleri(
        &self,
        fatura_id: i32,
    ) -> Result<Vec<fatura_hizmet_kalemi::Model>, ServiceError> {
        self.repo.hizmet_kalemleri(fatura_id).await
    }

    /// Sum of sale invoice totals dated within `[baslangic, bitis]`.
    #[instrument(skip(self))]
    pub async fn toplam_satis(
        &self,
        baslangic: DateTime<Utc>,
        bitis: DateTime<Utc>,
    ) -> Result<Decimal, ServiceError> {
        let faturalar = self
            .repo
            .find_by_tarih_araligi(baslangic, bitis, Some(FaturaTuru::Satis))
            .await?;
        Ok(faturalar.iter().map(|f| f.genel_toplam).sum())
    }
}

struct CozulmusSatir {
    hareket_id: Option<i32>,
    urun_id: i32,
    miktar: i32,
    birim_fiyat: Decimal,
    islem_turu: StokIslemTuru,
    siparis_id: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn totals_include_kdv_and_services() {
        let hesap = FaturaHesabi::hesapla(
            vec![(2, dec!(50)), (1, dec!(100))],
            vec![dec!(30)],
            20,
        );
        assert_eq!(hesap.ara_toplam, dec!(200));
        assert_eq!(hesap.kdv_toplami, dec!(40));
        assert_eq!(hesap.hizmet_toplami, dec!(30));
        assert_eq!(hesap.genel_toplam, dec!(270));
    }

    #[test]
    fn zero_rate_leaves_subtotal() {
        let hesap = FaturaHesabi::hesapla(vec![(3, dec!(1.5))], Vec::new(), 0);
        assert_eq!(hesap.kdv_toplami, Decimal::ZERO);
        assert_eq!(hesap.genel_toplam, dec!(4.5));
    }

    #[test]
    fn empty_form_totals_zero() {
        let hesap = FaturaHesabi::hesapla(Vec::new(), Vec::new(), VARSAYILAN_KDV_ORANI);
        assert_eq!(hesap.genel_toplam, Decimal::ZERO);
    }

    #[test]
    fn generated_numbers_have_prefix() {
        let no = yeni_fatura_no();
        assert!(no.starts_with("FAT-"));
        let parcalar: Vec<&str> = no.split('-').collect();
        assert_eq!(parcalar.len(), 3);
        assert_eq!(parcalar[1].len(), 8);
        assert_eq!(parcalar[2].len(), 8);
        assert_ne!(no, yeni_fatura_no());
    }
}
