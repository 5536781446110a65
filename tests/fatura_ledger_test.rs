mod common;

use assert_matches::assert_matches;
use rust_decimal_macros::dec;
use ticari::{
    config::AppConfig,
    entities::{CariTuru, FaturaTuru},
    errors::ServiceError,
    services::fatura::{FaturaSatiri, HizmetSatiri},
};

use common::{fatura_girdisi, TestApp};

#[tokio::test]
async fn sale_invoice_raises_party_balance_and_issues_stock() {
    let app = TestApp::new().await;
    let musteri = app.cari("M001", CariTuru::Alici).await;
    let urun = app.urun("Vida", dec!(2.50), 100).await;

    let detay = app
        .fatura(musteri.cari_id, FaturaTuru::Satis, &[(urun.urun_id, 40, dec!(2.50))])
        .await;

    assert_eq!(detay.fatura.genel_toplam, dec!(100));
    assert_eq!(detay.stok_hareketleri.len(), 1);
    assert_eq!(app.bakiye(musteri.cari_id).await, dec!(100));
    assert_eq!(app.stok(urun.urun_id).await, 60);
}

#[tokio::test]
async fn purchase_invoice_lowers_party_balance_and_receives_stock() {
    let app = TestApp::new().await;
    let tedarikci = app.cari("T001", CariTuru::Satici).await;
    let urun = app.urun("Somun", dec!(1), 5).await;

    app.fatura(tedarikci.cari_id, FaturaTuru::Alis, &[(urun.urun_id, 20, dec!(0.75))])
        .await;

    assert_eq!(app.bakiye(tedarikci.cari_id).await, dec!(-15));
    assert_eq!(app.stok(urun.urun_id).await, 25);
}

#[tokio::test]
async fn default_kdv_is_applied_per_line_and_services_are_added() {
    let app = TestApp::new().await;
    let musteri = app.cari("M002", CariTuru::Alici).await;
    let urun = app.urun("Kablo", dec!(10), 50).await;
    let nakliye = app
        .state
        .services
        .hizmet
        .create(ticari::services::hizmet::HizmetGirdisi {
            hizmet_ad: "Nakliye".into(),
            tur: None,
            kdv_orani: 20,
        })
        .await
        .unwrap();

    let mut girdi = fatura_girdisi(musteri.cari_id, FaturaTuru::Satis, &[(urun.urun_id, 5, dec!(10))]);
    girdi.kdv_orani = None;
    girdi.hizmetler = vec![HizmetSatiri {
        hizmet_id: nakliye.hizmet_id,
        aciklama: Some("Teslimat".into()),
        tutar: dec!(25),
    }];
    let detay = app.state.services.fatura.kaydet(girdi).await.unwrap();

    // 50 + 20% KDV + 25 service
    assert_eq!(detay.fatura.genel_toplam, dec!(85));
    assert_eq!(detay.hizmet_kalemleri.len(), 1);
    assert_eq!(app.bakiye(musteri.cari_id).await, dec!(85));
}

#[tokio::test]
async fn line_price_defaults_to_catalog_price() {
    let app = TestApp::new().await;
    let musteri = app.cari("M003", CariTuru::Alici).await;
    let urun = app.urun("Pense", dec!(12), 10).await;

    let mut girdi = fatura_girdisi(musteri.cari_id, FaturaTuru::Satis, &[]);
    girdi.satirlar = vec![FaturaSatiri {
        hareket_id: None,
        urun_id: urun.urun_id,
        miktar: 2,
        birim_fiyat: None,
        islem_turu: None,
        siparis_id: None,
    }];
    let detay = app.state.services.fatura.kaydet(girdi).await.unwrap();

    assert_eq!(detay.stok_hareketleri[0].birim_fiyat, dec!(12));
    assert_eq!(detay.fatura.genel_toplam, dec!(24));
}

#[tokio::test]
async fn resaving_an_unchanged_invoice_is_idempotent() {
    let app = TestApp::new().await;
    let musteri = app.cari("M004", CariTuru::Alici).await;
    let urun = app.urun("Civata", dec!(3), 100).await;

    let ilk = app
        .fatura(musteri.cari_id, FaturaTuru::Satis, &[(urun.urun_id, 10, dec!(3))])
        .await;

    // number and date left empty: the stored ones must be kept
    let mut girdi = fatura_girdisi(musteri.cari_id, FaturaTuru::Satis, &[]);
    girdi.fatura_id = Some(ilk.fatura.fatura_id);
    girdi.satirlar = vec![FaturaSatiri {
        hareket_id: Some(ilk.stok_hareketleri[0].hareket_id),
        urun_id: urun.urun_id,
        miktar: 10,
        birim_fiyat: Some(dec!(3)),
        islem_turu: None,
        siparis_id: None,
    }];
    app.state.services.fatura.kaydet(girdi.clone()).await.unwrap();
    let son = app.state.services.fatura.kaydet(girdi).await.unwrap();

    assert_eq!(son.fatura.fatura_no, ilk.fatura.fatura_no);
    assert_eq!(son.fatura.fatura_tarihi, ilk.fatura.fatura_tarihi);
    assert_eq!(app.bakiye(musteri.cari_id).await, dec!(30));
    assert_eq!(app.stok(urun.urun_id).await, 90);
}

#[tokio::test]
async fn editing_an_invoice_applies_only_the_difference() {
    let app = TestApp::new().await;
    let musteri = app.cari("M005", CariTuru::Alici).await;
    let urun = app.urun("Matkap", dec!(100), 20).await;

    let ilk = app
        .fatura(musteri.cari_id, FaturaTuru::Satis, &[(urun.urun_id, 4, dec!(100))])
        .await;
    assert_eq!(app.bakiye(musteri.cari_id).await, dec!(400));
    assert_eq!(app.stok(urun.urun_id).await, 16);

    let mut girdi = fatura_girdisi(musteri.cari_id, FaturaTuru::Satis, &[]);
    girdi.fatura_id = Some(ilk.fatura.fatura_id);
    girdi.satirlar = vec![FaturaSatiri {
        hareket_id: Some(ilk.stok_hareketleri[0].hareket_id),
        urun_id: urun.urun_id,
        miktar: 6,
        birim_fiyat: Some(dec!(100)),
        islem_turu: None,
        siparis_id: None,
    }];
    let duzeltilmis = app.state.services.fatura.kaydet(girdi).await.unwrap();

    assert_eq!(duzeltilmis.fatura.fatura_no, ilk.fatura.fatura_no);
    assert_eq!(app.bakiye(musteri.cari_id).await, dec!(600));
    assert_eq!(app.stok(urun.urun_id).await, 14);
}

#[tokio::test]
async fn resaving_without_a_date_keeps_the_invoice_in_its_period() {
    let app = TestApp::new().await;
    let musteri = app.cari("M014", CariTuru::Alici).await;
    let urun = app.urun("Firca", dec!(4), 10).await;
    let gecen_ay = chrono::Utc::now() - chrono::Duration::days(40);

    let mut girdi = fatura_girdisi(musteri.cari_id, FaturaTuru::Satis, &[(urun.urun_id, 1, dec!(4))]);
    girdi.fatura_tarihi = Some(gecen_ay);
    girdi.fatura_no = Some("FAT-ESKI-1".into());
    let ilk = app.state.services.fatura.kaydet(girdi).await.unwrap();

    let mut yeniden = fatura_girdisi(musteri.cari_id, FaturaTuru::Satis, &[]);
    yeniden.fatura_id = Some(ilk.fatura.fatura_id);
    yeniden.satirlar = vec![FaturaSatiri {
        hareket_id: Some(ilk.stok_hareketleri[0].hareket_id),
        urun_id: urun.urun_id,
        miktar: 2,
        birim_fiyat: Some(dec!(4)),
        islem_turu: None,
        siparis_id: None,
    }];
    let detay = app.state.services.fatura.kaydet(yeniden).await.unwrap();

    assert_eq!(detay.fatura.fatura_no, "FAT-ESKI-1");
    let donem = app
        .state
        .services
        .fatura
        .toplam_satis(
            gecen_ay - chrono::Duration::days(1),
            gecen_ay + chrono::Duration::days(1),
        )
        .await
        .unwrap();
    assert_eq!(donem, dec!(8));
}

#[tokio::test]
async fn party_balance_is_sales_minus_purchases() {
    let app = TestApp::new().await;
    let cari = app.cari("M015", CariTuru::Alici).await;
    let urun = app.urun("Zincir", dec!(10), 100).await;

    app.fatura(cari.cari_id, FaturaTuru::Satis, &[(urun.urun_id, 2, dec!(10))])
        .await;
    let ikinci = app
        .fatura(cari.cari_id, FaturaTuru::Satis, &[(urun.urun_id, 3, dec!(12.5))])
        .await;
    app.fatura(cari.cari_id, FaturaTuru::Alis, &[(urun.urun_id, 4, dec!(6))])
        .await;

    // 20 + 37.5 - 24
    assert_eq!(app.bakiye(cari.cari_id).await, dec!(33.5));

    app.state.services.fatura.sil(ikinci.fatura.fatura_id).await.unwrap();
    assert_eq!(app.bakiye(cari.cari_id).await, dec!(-4));
}

#[tokio::test]
async fn dropping_a_line_reverts_its_stock() {
    let app = TestApp::new().await;
    let musteri = app.cari("M006", CariTuru::Alici).await;
    let a = app.urun("A", dec!(1), 50).await;
    let b = app.urun("B", dec!(1), 50).await;

    let ilk = app
        .fatura(
            musteri.cari_id,
            FaturaTuru::Satis,
            &[(a.urun_id, 5, dec!(1)), (b.urun_id, 7, dec!(1))],
        )
        .await;
    let a_satiri = ilk
        .stok_hareketleri
        .iter()
        .find(|s| s.urun_id == a.urun_id)
        .unwrap();

    let mut girdi = fatura_girdisi(musteri.cari_id, FaturaTuru::Satis, &[]);
    girdi.fatura_id = Some(ilk.fatura.fatura_id);
    girdi.fatura_no = Some(ilk.fatura.fatura_no.clone());
    girdi.satirlar = vec![FaturaSatiri {
        hareket_id: Some(a_satiri.hareket_id),
        urun_id: a.urun_id,
        miktar: 5,
        birim_fiyat: Some(dec!(1)),
        islem_turu: None,
        siparis_id: None,
    }];
    let detay = app.state.services.fatura.kaydet(girdi).await.unwrap();

    assert_eq!(detay.stok_hareketleri.len(), 1);
    assert_eq!(app.stok(a.urun_id).await, 45);
    assert_eq!(app.stok(b.urun_id).await, 50);
    assert_eq!(app.bakiye(musteri.cari_id).await, dec!(5));
}

#[tokio::test]
async fn deleting_an_invoice_reverts_stock_and_balance() {
    let app = TestApp::new().await;
    let musteri = app.cari("M007", CariTuru::Alici).await;
    let urun = app.urun("Testere", dec!(40), 30).await;

    let detay = app
        .fatura(musteri.cari_id, FaturaTuru::Satis, &[(urun.urun_id, 3, dec!(40))])
        .await;
    app.state.services.fatura.sil(detay.fatura.fatura_id).await.unwrap();

    assert_eq!(app.bakiye(musteri.cari_id).await, dec!(0));
    assert_eq!(app.stok(urun.urun_id).await, 30);
    assert!(app
        .state
        .services
        .stok
        .find_by_fatura(detay.fatura.fatura_id)
        .await
        .unwrap()
        .is_empty());
    assert_matches!(
        app.state.services.fatura.sil(detay.fatura.fatura_id).await,
        Err(ServiceError::NotFound(_))
    );
}

#[tokio::test]
async fn duplicate_invoice_number_conflicts() {
    let app = TestApp::new().await;
    let musteri = app.cari("M008", CariTuru::Alici).await;
    let urun = app.urun("Eldiven", dec!(5), 10).await;

    let mut girdi = fatura_girdisi(musteri.cari_id, FaturaTuru::Satis, &[(urun.urun_id, 1, dec!(5))]);
    girdi.fatura_no = Some("FAT-2024-001".into());
    app.state.services.fatura.kaydet(girdi.clone()).await.unwrap();

    assert_matches!(
        app.state.services.fatura.kaydet(girdi).await,
        Err(ServiceError::Conflict(_))
    );
    // the rejected save left no trace
    assert_eq!(app.bakiye(musteri.cari_id).await, dec!(5));
    assert_eq!(app.stok(urun.urun_id).await, 9);
}

#[tokio::test]
async fn unknown_party_or_product_is_not_found() {
    let app = TestApp::new().await;
    let musteri = app.cari("M009", CariTuru::Alici).await;

    assert_matches!(
        app.state
            .services
            .fatura
            .kaydet(fatura_girdisi(999, FaturaTuru::Satis, &[]))
            .await,
        Err(ServiceError::NotFound(_))
    );
    assert_matches!(
        app.state
            .services
            .fatura
            .kaydet(fatura_girdisi(musteri.cari_id, FaturaTuru::Satis, &[(999, 1, dec!(1))]))
            .await,
        Err(ServiceError::NotFound(_))
    );
}

#[tokio::test]
async fn explicit_currency_must_be_registered() {
    let app = TestApp::new().await;
    let musteri = app.cari("M010", CariTuru::Alici).await;

    let mut girdi = fatura_girdisi(musteri.cari_id, FaturaTuru::Satis, &[]);
    girdi.para_birimi = Some("usd".into());
    assert_matches!(
        app.state.services.fatura.kaydet(girdi.clone()).await,
        Err(ServiceError::NotFound(_))
    );

    app.state
        .services
        .para_birimi
        .create(ticari::services::para_birimi::ParaBirimiGirdisi {
            para_kod: "USD".into(),
            aciklama: Some("Amerikan Dolari".into()),
            sembol: Some("$".into()),
        })
        .await
        .unwrap();
    let detay = app.state.services.fatura.kaydet(girdi).await.unwrap();
    assert_eq!(detay.fatura.para_birimi.as_deref(), Some("USD"));
}

#[tokio::test]
async fn unregistered_default_currency_is_left_empty() {
    let app = TestApp::new().await;
    let musteri = app.cari("M011", CariTuru::Alici).await;

    let detay = app
        .fatura(musteri.cari_id, FaturaTuru::Satis, &[])
        .await;

    assert_eq!(detay.fatura.para_birimi, None);
    assert!(detay.fatura.fatura_no.starts_with("FAT-"));
}

#[tokio::test]
async fn configured_kdv_rate_is_used() {
    let mut cfg = AppConfig::new("sqlite::memory:".into(), "test".into());
    cfg.default_kdv_orani = 10;
    let app = TestApp::with_config(cfg).await;
    let musteri = app.cari("M012", CariTuru::Alici).await;
    let urun = app.urun("Kalem", dec!(10), 10).await;

    let mut girdi = fatura_girdisi(musteri.cari_id, FaturaTuru::Satis, &[(urun.urun_id, 1, dec!(10))]);
    girdi.kdv_orani = None;
    let detay = app.state.services.fatura.kaydet(girdi).await.unwrap();

    assert_eq!(detay.fatura.genel_toplam, dec!(11));
}

#[tokio::test]
async fn sales_total_counts_only_sales_in_range() {
    let app = TestApp::new().await;
    let musteri = app.cari("M013", CariTuru::Alici).await;
    let tedarikci = app.cari("T013", CariTuru::Satici).await;
    let urun = app.urun("Boya", dec!(10), 100).await;

    app.fatura(musteri.cari_id, FaturaTuru::Satis, &[(urun.urun_id, 2, dec!(10))])
        .await;
    app.fatura(musteri.cari_id, FaturaTuru::Satis, &[(urun.urun_id, 3, dec!(10))])
        .await;
    app.fatura(tedarikci.cari_id, FaturaTuru::Alis, &[(urun.urun_id, 50, dec!(6))])
        .await;

    let simdi = chrono::Utc::now();
    let toplam = app
        .state
        .services
        .fatura
        .toplam_satis(simdi - chrono::Duration::days(1), simdi + chrono::Duration::days(1))
        .await
        .unwrap();
    assert_eq!(toplam, dec!(50));

    let gecen_yil = app
        .state
        .services
        .fatura
        .toplam_satis(simdi - chrono::Duration::days(400), simdi - chrono::Duration::days(300))
        .await
        .unwrap();
    assert_eq!(gecen_yil, dec!(0));
}
