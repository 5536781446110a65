//! Property-based tests for the ledger and invoice arithmetic.
//!
//! Random sequences of saves, edits and deletes must leave every balance equal
//! to the sum of the effects of the rows that still exist.

mod common;

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use ticari::{
    entities::{CariTuru, FaturaTuru, FinansIslemTuru, StokIslemTuru},
    services::{fatura::FaturaHesabi, finans::FinansGirdisi, stok::StokHareketiGirdisi},
};

use common::TestApp;

#[derive(Debug, Clone)]
enum StokIslemi {
    Ekle(StokIslemTuru, i32),
    Duzenle(usize, StokIslemTuru, i32),
    Sil(usize),
}

fn islem_turu_strategy() -> impl Strategy<Value = StokIslemTuru> {
    prop_oneof![Just(StokIslemTuru::Giris), Just(StokIslemTuru::Cikis)]
}

fn stok_islemi_strategy() -> impl Strategy<Value = StokIslemi> {
    prop_oneof![
        3 => (islem_turu_strategy(), 1i32..50).prop_map(|(t, m)| StokIslemi::Ekle(t, m)),
        2 => (any::<usize>(), islem_turu_strategy(), 1i32..50)
            .prop_map(|(i, t, m)| StokIslemi::Duzenle(i, t, m)),
        1 => any::<usize>().prop_map(StokIslemi::Sil),
    ]
}

#[derive(Debug, Clone)]
enum FinansIslemi {
    Ekle(FinansIslemTuru, u32),
    Duzenle(usize, FinansIslemTuru, u32),
    Sil(usize),
}

fn finans_turu_strategy() -> impl Strategy<Value = FinansIslemTuru> {
    prop_oneof![
        Just(FinansIslemTuru::Tahsilat),
        Just(FinansIslemTuru::Odeme),
        Just(FinansIslemTuru::Maas),
    ]
}

fn finans_islemi_strategy() -> impl Strategy<Value = FinansIslemi> {
    prop_oneof![
        3 => (finans_turu_strategy(), 1u32..10_000).prop_map(|(t, k)| FinansIslemi::Ekle(t, k)),
        2 => (any::<usize>(), finans_turu_strategy(), 1u32..10_000)
            .prop_map(|(i, t, k)| FinansIslemi::Duzenle(i, t, k)),
        1 => any::<usize>().prop_map(FinansIslemi::Sil),
    ]
}

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap()
}

async fn stok_senaryosu(islemler: Vec<StokIslemi>) -> (i32, i32) {
    let app = TestApp::new().await;
    let cari = app.cari("P001", CariTuru::Alici).await;
    let urun = app.urun("Ozellik", dec!(1), 100).await;
    let fatura = app.fatura(cari.cari_id, FaturaTuru::Satis, &[]).await;
    let stok = &app.state.services.stok;

    let girdi = |hareket_id, islem_turu, miktar| StokHareketiGirdisi {
        hareket_id,
        fatura_id: fatura.fatura.fatura_id,
        urun_id: urun.urun_id,
        siparis_id: None,
        islem_turu,
        miktar,
        birim_fiyat: dec!(1),
        tarih: None,
        para_birimi: None,
        kur: None,
    };

    let mut canli: Vec<i32> = Vec::new();
    for islem in islemler {
        match islem {
            StokIslemi::Ekle(tur, miktar) => {
                let h = stok.kaydet(girdi(None, tur, miktar)).await.unwrap();
                canli.push(h.hareket_id);
            }
            StokIslemi::Duzenle(i, tur, miktar) if !canli.is_empty() => {
                let id = canli[i % canli.len()];
                stok.kaydet(girdi(Some(id), tur, miktar)).await.unwrap();
            }
            StokIslemi::Sil(i) if !canli.is_empty() => {
                let id = canli.remove(i % canli.len());
                stok.sil(id).await.unwrap();
            }
            _ => {}
        }
    }

    let beklenen = 100
        + stok
            .find_by_urun(urun.urun_id)
            .await
            .unwrap()
            .iter()
            .map(|h| h.islem_turu.stok_etkisi(h.miktar))
            .sum::<i32>();
    (app.stok(urun.urun_id).await, beklenen)
}

async fn finans_senaryosu(islemler: Vec<FinansIslemi>) -> [(Decimal, Decimal); 2] {
    let app = TestApp::new().await;
    let cari = app.cari("P002", CariTuru::Alici).await;
    let hesap = app.hesap("Kasa", dec!(0)).await;
    let finans = &app.state.services.finans;

    let girdi = |hareket_id, tur: FinansIslemTuru, kurus: u32| {
        let mut g = FinansGirdisi::new(tur, Decimal::new(i64::from(kurus), 2));
        g.hareket_id = hareket_id;
        g.hesap_id = Some(hesap.hesap_id);
        g.cari_id = Some(cari.cari_id);
        g
    };

    let mut canli: Vec<i32> = Vec::new();
    for islem in islemler {
        match islem {
            FinansIslemi::Ekle(tur, kurus) => {
                let h = finans.kaydet(girdi(None, tur, kurus)).await.unwrap();
                canli.push(h.hareket_id);
            }
            FinansIslemi::Duzenle(i, tur, kurus) if !canli.is_empty() => {
                let id = canli[i % canli.len()];
                finans.kaydet(girdi(Some(id), tur, kurus)).await.unwrap();
            }
            FinansIslemi::Sil(i) if !canli.is_empty() => {
                let id = canli.remove(i % canli.len());
                finans.sil(id).await.unwrap();
            }
            _ => {}
        }
    }

    let hareketler = finans.find_by_hesap(hesap.hesap_id).await.unwrap();
    let hesap_beklenen: Decimal = hareketler
        .iter()
        .map(|h| h.islem_turu.hesap_etkisi(h.tutar))
        .sum();
    let cari_beklenen: Decimal = hareketler
        .iter()
        .filter_map(|h| h.islem_turu.cari_etkisi(h.tutar))
        .sum();

    [
        (app.hesap_bakiyesi(hesap.hesap_id).await, hesap_beklenen),
        (app.bakiye(cari.cari_id).await, cari_beklenen),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn stock_on_hand_matches_surviving_movements(
        islemler in prop::collection::vec(stok_islemi_strategy(), 1..20)
    ) {
        let (gercek, beklenen) = runtime().block_on(stok_senaryosu(islemler));
        prop_assert_eq!(gercek, beklenen);
    }

    #[test]
    fn balances_match_surviving_financial_movements(
        islemler in prop::collection::vec(finans_islemi_strategy(), 1..20)
    ) {
        for (gercek, beklenen) in runtime().block_on(finans_senaryosu(islemler)) {
            prop_assert_eq!(gercek.round_dp(2), beklenen.round_dp(2));
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn invoice_total_is_subtotal_plus_tax_plus_services(
        satirlar in prop::collection::vec((1i32..1000, 0i64..100_000), 0..10),
        hizmetler in prop::collection::vec(0i64..100_000, 0..4),
        kdv in 0u32..=100,
    ) {
        let satirlar: Vec<(i32, Decimal)> = satirlar
            .into_iter()
            .map(|(m, kurus)| (m, Decimal::new(kurus, 2)))
            .collect();
        let hizmetler: Vec<Decimal> = hizmetler.into_iter().map(|k| Decimal::new(k, 2)).collect();

        let hesap = FaturaHesabi::hesapla(satirlar.clone(), hizmetler.clone(), kdv);

        let ara: Decimal = satirlar.iter().map(|(m, f)| Decimal::from(*m) * f).sum();
        prop_assert_eq!(hesap.ara_toplam, ara.round_dp(2));
        prop_assert_eq!(hesap.hizmet_toplami, hizmetler.iter().copied().sum::<Decimal>());
        prop_assert!(hesap.kdv_toplami >= Decimal::ZERO);
        let fark = (hesap.genel_toplam - hesap.ara_toplam - hesap.kdv_toplami - hesap.hizmet_toplami).abs();
        prop_assert!(fark <= dec!(0.01), "rounding drift {}", fark);
        if kdv == 0 {
            prop_assert_eq!(hesap.kdv_toplami, Decimal::ZERO);
        }
    }
}
