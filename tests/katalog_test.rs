mod common;

use assert_matches::assert_matches;
use chrono::NaiveDate;
use rust_decimal_macros::dec;
use ticari::{
    entities::{CariTuru, FaturaTuru},
    errors::ServiceError,
    services::{
        atik::{AtikGirdisi, AtikNedeniGirdisi},
        cari::CariGirdisi,
        kategori::KategoriGirdisi,
        para_birimi::{KurGirdisi, ParaBirimiGirdisi},
        personel::PersonelGirdisi,
    },
};

use common::TestApp;

#[tokio::test]
async fn party_codes_are_unique() {
    let app = TestApp::new().await;
    let ilk = app.cari("C001", CariTuru::Alici).await;
    let ikinci = app.cari("C002", CariTuru::Alici).await;

    assert_matches!(
        app.state
            .services
            .cari
            .create(CariGirdisi {
                cari_kod: "C001".into(),
                unvan: "Baska Firma".into(),
                tur: CariTuru::Satici,
                vergi_no: None,
            })
            .await,
        Err(ServiceError::Conflict(_))
    );

    // renaming onto an existing code conflicts, keeping the own code does not
    assert_matches!(
        app.state
            .services
            .cari
            .update(
                ikinci.cari_id,
                CariGirdisi {
                    cari_kod: "C001".into(),
                    unvan: ikinci.unvan.clone(),
                    tur: ikinci.tur,
                    vergi_no: None,
                },
            )
            .await,
        Err(ServiceError::Conflict(_))
    );
    let guncel = app
        .state
        .services
        .cari
        .update(
            ilk.cari_id,
            CariGirdisi {
                cari_kod: "C001".into(),
                unvan: "Yeni Unvan A.S.".into(),
                tur: CariTuru::Alici,
                vergi_no: Some("1234567890".into()),
            },
        )
        .await
        .unwrap();
    assert_eq!(guncel.unvan, "Yeni Unvan A.S.");
    assert_eq!(
        app.state
            .services
            .cari
            .find_by_vergi_no("1234567890")
            .await
            .unwrap()
            .map(|c| c.cari_id),
        Some(ilk.cari_id)
    );
}

#[tokio::test]
async fn category_names_are_unique() {
    let app = TestApp::new().await;
    app.kategori("Hirdavat").await;

    assert_matches!(
        app.state
            .services
            .kategori
            .create(KategoriGirdisi {
                kategori_ad: "Hirdavat".into(),
            })
            .await,
        Err(ServiceError::Conflict(_))
    );
}

#[tokio::test]
async fn name_search_ignores_case() {
    let app = TestApp::new().await;
    app.cari("S001", CariTuru::Alici).await;
    app.cari("S002", CariTuru::Satici).await;
    app.urun("Celik Vida", dec!(1), 0).await;
    app.urun("Ahsap Vida", dec!(1), 0).await;
    app.urun("Cekic", dec!(1), 0).await;

    let cariler = app.state.services.cari.search_by_unvan("s001 TIC").await.unwrap();
    assert_eq!(cariler.len(), 1);

    let urunler = app.state.services.urun.search_by_ad("VIDA").await.unwrap();
    assert_eq!(urunler.len(), 2);

    let satici = app
        .state
        .services
        .cari
        .find_by_tur(CariTuru::Satici)
        .await
        .unwrap();
    assert_eq!(satici.len(), 1);
}

#[tokio::test]
async fn name_search_folds_turkish_letters() {
    let app = TestApp::new().await;
    let seker = app
        .state
        .services
        .cari
        .create(CariGirdisi {
            cari_kod: "TR01".into(),
            unvan: "ŞEKER GIDA A.Ş.".into(),
            tur: CariTuru::Alici,
            vergi_no: None,
        })
        .await
        .unwrap();
    app.cari("TR02", CariTuru::Alici).await;

    for term in ["ŞEKER", "Şeker", "şeker", "seker", "gıda", "GIDA", "gida", "a.ş."] {
        let bulunan = app.state.services.cari.search_by_unvan(term).await.unwrap();
        assert_eq!(bulunan.len(), 1, "term {:?}", term);
        assert_eq!(bulunan[0].cari_id, seker.cari_id);
    }

    app.urun("Çelik Vida %50", dec!(1), 0).await;
    app.urun("Vida 500", dec!(1), 0).await;
    let yuzde = app.state.services.urun.search_by_ad("%50").await.unwrap();
    assert_eq!(yuzde.len(), 1);
    assert_eq!(yuzde[0].urun_ad, "Çelik Vida %50");
    assert_eq!(app.state.services.urun.search_by_ad("çELİK").await.unwrap().len(), 1);
}

#[tokio::test]
async fn products_require_an_existing_category() {
    let app = TestApp::new().await;

    assert_matches!(
        app.state
            .services
            .urun
            .create(
                ticari::services::urun::UrunGirdisi {
                    urun_ad: "Yetim".into(),
                    kategori_id: 77,
                    mevcut_satis_fiyati: dec!(1),
                    minimum_stok_seviyesi: 1,
                },
                0,
            )
            .await,
        Err(ServiceError::NotFound(_))
    );
}

#[tokio::test]
async fn critical_stock_lists_products_under_their_minimum() {
    let app = TestApp::new().await;
    let az = app.urun("Az", dec!(1), 3).await;
    app.urun("Bol", dec!(1), 50).await;

    let kritik = app.state.services.urun.kritik_stoklar().await.unwrap();
    assert_eq!(kritik.len(), 1);
    assert_eq!(kritik[0].urun_id, az.urun_id);
}

#[tokio::test]
async fn deleting_a_party_reverts_its_invoices_and_payments() {
    let app = TestApp::new().await;
    let musteri = app.cari("D001", CariTuru::Alici).await;
    let urun = app.urun("Kasa Anahtari", dec!(10), 40).await;
    let kasa = app.hesap("Kasa", dec!(0)).await;

    app.fatura(musteri.cari_id, FaturaTuru::Satis, &[(urun.urun_id, 4, dec!(10))])
        .await;
    let mut tahsilat = ticari::services::finans::FinansGirdisi::new(
        ticari::entities::FinansIslemTuru::Tahsilat,
        dec!(40),
    );
    tahsilat.hesap_id = Some(kasa.hesap_id);
    tahsilat.cari_id = Some(musteri.cari_id);
    app.state.services.finans.kaydet(tahsilat).await.unwrap();
    assert_eq!(app.stok(urun.urun_id).await, 36);
    assert_eq!(app.hesap_bakiyesi(kasa.hesap_id).await, dec!(40));

    app.state.services.cari.delete(musteri.cari_id).await.unwrap();

    assert_eq!(app.stok(urun.urun_id).await, 40);
    assert_eq!(app.hesap_bakiyesi(kasa.hesap_id).await, dec!(0));
    assert!(app.state.services.fatura.find_all().await.unwrap().is_empty());
    assert!(app.state.services.finans.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn deleting_a_product_keeps_invoice_balances() {
    let app = TestApp::new().await;
    let musteri = app.cari("D002", CariTuru::Alici).await;
    let urun = app.urun("Silinecek", dec!(5), 10).await;

    app.fatura(musteri.cari_id, FaturaTuru::Satis, &[(urun.urun_id, 2, dec!(5))])
        .await;
    app.state.services.urun.delete(urun.urun_id).await.unwrap();

    // the invoice stays, and with it the party balance
    assert_eq!(app.bakiye(musteri.cari_id).await, dec!(10));
    assert!(app.state.services.urun.find_by_id(urun.urun_id).await.unwrap().is_none());
}

#[tokio::test]
async fn waste_is_recorded_without_moving_stock() {
    let app = TestApp::new().await;
    let urun = app.urun("Cam", dec!(3), 20).await;
    let neden = app
        .state
        .services
        .atik
        .neden_ekle(AtikNedeniGirdisi {
            aciklama: "Kirildi".into(),
        })
        .await
        .unwrap();

    app.state
        .services
        .atik
        .kaydet(AtikGirdisi {
            urun_id: urun.urun_id,
            neden_id: Some(neden.neden_id),
            miktar: 4,
            tarih: None,
        })
        .await
        .unwrap();

    assert_eq!(app.stok(urun.urun_id).await, 20);
    assert_eq!(
        app.state.services.atik.find_by_urun(urun.urun_id).await.unwrap().len(),
        1
    );
    assert_matches!(
        app.state
            .services
            .atik
            .kaydet(AtikGirdisi {
                urun_id: urun.urun_id,
                neden_id: Some(999),
                miktar: 1,
                tarih: None,
            })
            .await,
        Err(ServiceError::NotFound(_))
    );
}

#[tokio::test]
async fn exchange_rates_are_kept_per_day() {
    let app = TestApp::new().await;
    let para = &app.state.services.para_birimi;
    para.create(ParaBirimiGirdisi {
        para_kod: "eur".into(),
        aciklama: Some("Euro".into()),
        sembol: None,
    })
    .await
    .unwrap();

    assert_matches!(
        para.create(ParaBirimiGirdisi {
            para_kod: "EUR".into(),
            aciklama: None,
            sembol: None,
        })
        .await,
        Err(ServiceError::Conflict(_))
    );

    let gun = |d| NaiveDate::from_ymd_opt(2024, 5, d).unwrap();
    for (d, kur) in [(1, dec!(34.5)), (2, dec!(34.75)), (3, dec!(35))] {
        para.kur_ekle(KurGirdisi {
            para_kod: "EUR".into(),
            kur_tarihi: gun(d),
            kur,
            kaynak: None,
        })
        .await
        .unwrap();
    }

    let guncel = para.guncel_kur("eur").await.unwrap().unwrap();
    assert_eq!(guncel.kur, dec!(35));
    assert_eq!(guncel.kaynak, "TCMB");
    assert_eq!(para.kur_bul("EUR", gun(2)).await.unwrap().unwrap().kur, dec!(34.75));
    assert!(para.kur_bul("EUR", gun(9)).await.unwrap().is_none());
    assert_eq!(para.kur_gecmisi("EUR").await.unwrap().len(), 3);
    assert_eq!(para.find_kurlar_arasinda(gun(2), gun(3)).await.unwrap().len(), 2);

    assert_matches!(
        para.kur_ekle(KurGirdisi {
            para_kod: "GBP".into(),
            kur_tarihi: gun(1),
            kur: dec!(40),
            kaynak: None,
        })
        .await,
        Err(ServiceError::NotFound(_))
    );
}

#[tokio::test]
async fn dismissed_employees_leave_the_active_list() {
    let app = TestApp::new().await;
    let personel = &app.state.services.personel;
    let ali = personel
        .create(PersonelGirdisi {
            ad_soyad: "Ali Demir".into(),
            gorev: Some("Depo".into()),
            maas: None,
            ise_giris_tarihi: None,
        })
        .await
        .unwrap();
    personel
        .create(PersonelGirdisi {
            ad_soyad: "Zeynep Kaya".into(),
            gorev: Some("Satis".into()),
            maas: None,
            ise_giris_tarihi: None,
        })
        .await
        .unwrap();

    let cikan = personel.isten_cikar(ali.personel_id).await.unwrap();
    assert!(!cikan.aktif_mi);

    assert_eq!(personel.find_by_aktif(true).await.unwrap().len(), 1);
    assert_eq!(personel.find_by_aktif(false).await.unwrap().len(), 1);
    assert_eq!(personel.search_by_ad("demir").await.unwrap().len(), 1);
}
