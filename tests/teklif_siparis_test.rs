mod common;

use assert_matches::assert_matches;
use chrono::{Duration, Utc};
use rust_decimal_macros::dec;
use ticari::{
    entities::{CariTuru, FaturaTuru, SiparisDurumu, TeklifDurumu},
    errors::ServiceError,
    services::teklif::{TeklifGirdisi, TeklifSatiri},
};

use common::TestApp;

fn teklif_girdisi(cari_id: i32, satirlar: Vec<TeklifSatiri>) -> TeklifGirdisi {
    TeklifGirdisi {
        teklif_id: None,
        cari_id,
        teklif_tarihi: None,
        gecerlilik_tarihi: None,
        durum: None,
        satirlar,
    }
}

#[tokio::test]
async fn only_approved_quotes_become_orders() {
    let app = TestApp::new().await;
    let musteri = app.cari("Q001", CariTuru::Alici).await;
    let urun = app.urun("Vana", dec!(45), 30).await;
    let teklifler = &app.state.services.teklif;

    let detay = teklifler
        .kaydet(teklif_girdisi(
            musteri.cari_id,
            vec![TeklifSatiri {
                urun_id: urun.urun_id,
                miktar: 4,
                birim_fiyat: dec!(45),
            }],
        ))
        .await
        .unwrap();
    assert_eq!(detay.teklif.durum, TeklifDurumu::Bekliyor);
    assert_eq!(detay.teklif.toplam_tutar, dec!(180));

    assert_matches!(
        teklifler.siparise_donustur(detay.teklif.teklif_id).await,
        Err(ServiceError::InvalidOperation(_))
    );

    teklifler
        .durum_guncelle(detay.teklif.teklif_id, TeklifDurumu::Onaylandi)
        .await
        .unwrap();
    let siparis = teklifler
        .siparise_donustur(detay.teklif.teklif_id)
        .await
        .unwrap();

    assert_eq!(siparis.durum, SiparisDurumu::Hazirlaniyor);
    assert_eq!(siparis.cari_id, musteri.cari_id);
    assert_eq!(siparis.teklif_id, Some(detay.teklif.teklif_id));
    assert_eq!(
        app.state
            .services
            .siparis
            .find_by_teklif(detay.teklif.teklif_id)
            .await
            .unwrap()
            .len(),
        1
    );
    // quotes carry no stock or balance effect
    assert_eq!(app.stok(urun.urun_id).await, 30);
    assert_eq!(app.bakiye(musteri.cari_id).await, dec!(0));
}

#[tokio::test]
async fn resaving_a_quote_replaces_its_lines() {
    let app = TestApp::new().await;
    let musteri = app.cari("Q002", CariTuru::Alici).await;
    let a = app.urun("A", dec!(10), 0).await;
    let b = app.urun("B", dec!(20), 0).await;
    let teklifler = &app.state.services.teklif;

    let ilk = teklifler
        .kaydet(teklif_girdisi(
            musteri.cari_id,
            vec![
                TeklifSatiri {
                    urun_id: a.urun_id,
                    miktar: 1,
                    birim_fiyat: dec!(10),
                },
                TeklifSatiri {
                    urun_id: b.urun_id,
                    miktar: 1,
                    birim_fiyat: dec!(20),
                },
            ],
        ))
        .await
        .unwrap();

    let mut girdi = teklif_girdisi(
        musteri.cari_id,
        vec![TeklifSatiri {
            urun_id: b.urun_id,
            miktar: 3,
            birim_fiyat: dec!(18),
        }],
    );
    girdi.teklif_id = Some(ilk.teklif.teklif_id);
    girdi.durum = Some(TeklifDurumu::Reddedildi);
    let guncel = teklifler.kaydet(girdi).await.unwrap();

    assert_eq!(guncel.detaylar.len(), 1);
    assert_eq!(guncel.teklif.toplam_tutar, dec!(54));
    assert_eq!(guncel.teklif.durum, TeklifDurumu::Reddedildi);
    assert_eq!(
        teklifler
            .find_by_durum(TeklifDurumu::Reddedildi)
            .await
            .unwrap()
            .len(),
        1
    );
}

#[tokio::test]
async fn orders_follow_their_status_changes() {
    let app = TestApp::new().await;
    let musteri = app.cari("Q003", CariTuru::Alici).await;
    let siparisler = &app.state.services.siparis;

    let siparis = siparisler.olustur(musteri.cari_id, None).await.unwrap();
    siparisler
        .durum_guncelle(siparis.siparis_id, SiparisDurumu::SevkEdildi)
        .await
        .unwrap();

    assert_eq!(
        siparisler
            .find_by_durum(SiparisDurumu::SevkEdildi)
            .await
            .unwrap()
            .len(),
        1
    );
    assert_matches!(
        siparisler.olustur(musteri.cari_id, Some(404)).await,
        Err(ServiceError::NotFound(_))
    );

    siparisler.sil(siparis.siparis_id).await.unwrap();
    assert!(siparisler.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn dashboard_summarises_cash_balances_stock_and_period_totals() {
    let app = TestApp::new().await;
    let musteri = app.cari("Q004", CariTuru::Alici).await;
    let tedarikci = app.cari("Q005", CariTuru::Satici).await;
    let urun = app.urun("Musluk", dec!(10), 20).await;
    app.urun("Conta", dec!(2), 1).await;
    app.hesap("Kasa", dec!(300)).await;
    app.hesap("Banka", dec!(700)).await;

    app.fatura(musteri.cari_id, FaturaTuru::Satis, &[(urun.urun_id, 5, dec!(10))])
        .await;
    app.fatura(tedarikci.cari_id, FaturaTuru::Alis, &[(urun.urun_id, 10, dec!(6))])
        .await;

    let simdi = Utc::now();
    let ozet = app
        .state
        .services
        .dashboard
        .ozet(simdi - Duration::days(1), simdi + Duration::days(1))
        .await
        .unwrap();

    assert_eq!(ozet.toplam_kasa, dec!(1000));
    assert_eq!(ozet.toplam_alacak, dec!(50));
    assert_eq!(ozet.toplam_borc, dec!(60));
    assert_eq!(ozet.donem_satis_toplami, dec!(50));
    assert_eq!(ozet.donem_alis_toplami, dec!(60));
    assert_eq!(ozet.stok.urun_sayisi, 2);
    // Musluk: 20 - 5 + 10 = 25 at 10, Conta: 1 at 2
    assert_eq!(ozet.stok.stok_degeri, dec!(252));
    assert_eq!(ozet.stok.kritik_stok_sayisi, 1);
    assert_eq!(ozet.stok.kritik_stoklar[0].urun_ad, "Conta");
}
