mod common;

use assert_matches::assert_matches;
use chrono::NaiveDate;
use rust_decimal_macros::dec;
use ticari::{
    entities::{CariTuru, CekSenetDurumu, CekSenetTuru, CekSenetYonu, FinansIslemTuru},
    errors::ServiceError,
    services::{
        cek_senet::CekSenetGirdisi, finans::FinansGirdisi, personel::PersonelGirdisi,
    },
};

use common::TestApp;

fn hareket(
    tur: FinansIslemTuru,
    tutar: rust_decimal::Decimal,
    hesap_id: Option<i32>,
    cari_id: Option<i32>,
) -> FinansGirdisi {
    let mut girdi = FinansGirdisi::new(tur, tutar);
    girdi.hesap_id = hesap_id;
    girdi.cari_id = cari_id;
    girdi
}

#[tokio::test]
async fn collection_fills_account_and_settles_receivable() {
    let app = TestApp::new().await;
    let kasa = app.hesap("Merkez Kasa", dec!(1000)).await;
    let musteri = app.cari("M100", CariTuru::Alici).await;
    app.state
        .services
        .cari
        .bakiye_guncelle(musteri.cari_id, dec!(500))
        .await
        .unwrap();

    app.state
        .services
        .finans
        .kaydet(hareket(
            FinansIslemTuru::Tahsilat,
            dec!(200),
            Some(kasa.hesap_id),
            Some(musteri.cari_id),
        ))
        .await
        .unwrap();

    assert_eq!(app.hesap_bakiyesi(kasa.hesap_id).await, dec!(1200));
    assert_eq!(app.bakiye(musteri.cari_id).await, dec!(300));
}

#[tokio::test]
async fn payment_drains_account_and_reduces_payable() {
    let app = TestApp::new().await;
    let banka = app.hesap("Banka", dec!(1000)).await;
    let tedarikci = app.cari("T100", CariTuru::Satici).await;
    app.state
        .services
        .cari
        .bakiye_guncelle(tedarikci.cari_id, dec!(-400))
        .await
        .unwrap();

    app.state
        .services
        .finans
        .kaydet(hareket(
            FinansIslemTuru::Odeme,
            dec!(250),
            Some(banka.hesap_id),
            Some(tedarikci.cari_id),
        ))
        .await
        .unwrap();

    assert_eq!(app.hesap_bakiyesi(banka.hesap_id).await, dec!(750));
    assert_eq!(app.bakiye(tedarikci.cari_id).await, dec!(-150));
}

#[tokio::test]
async fn salary_only_moves_the_account() {
    let app = TestApp::new().await;
    let kasa = app.hesap("Kasa", dec!(5000)).await;
    let personel = app
        .state
        .services
        .personel
        .create(PersonelGirdisi {
            ad_soyad: "Ayse Yilmaz".into(),
            gorev: Some("Muhasebe".into()),
            maas: Some(dec!(3000)),
            ise_giris_tarihi: NaiveDate::from_ymd_opt(2023, 3, 1),
        })
        .await
        .unwrap();

    let mut girdi = hareket(FinansIslemTuru::Maas, dec!(3000), Some(kasa.hesap_id), None);
    girdi.personel_id = Some(personel.personel_id);
    app.state.services.finans.kaydet(girdi).await.unwrap();

    assert_eq!(app.hesap_bakiyesi(kasa.hesap_id).await, dec!(2000));
}

#[tokio::test]
async fn editing_the_amount_applies_the_difference() {
    let app = TestApp::new().await;
    let kasa = app.hesap("Kasa", dec!(0)).await;
    let musteri = app.cari("M101", CariTuru::Alici).await;

    let ilk = app
        .state
        .services
        .finans
        .kaydet(hareket(
            FinansIslemTuru::Tahsilat,
            dec!(100),
            Some(kasa.hesap_id),
            Some(musteri.cari_id),
        ))
        .await
        .unwrap();

    let mut duzeltme = hareket(
        FinansIslemTuru::Tahsilat,
        dec!(150),
        Some(kasa.hesap_id),
        Some(musteri.cari_id),
    );
    duzeltme.hareket_id = Some(ilk.hareket_id);
    app.state.services.finans.kaydet(duzeltme.clone()).await.unwrap();
    app.state.services.finans.kaydet(duzeltme).await.unwrap();

    assert_eq!(app.hesap_bakiyesi(kasa.hesap_id).await, dec!(150));
    assert_eq!(app.bakiye(musteri.cari_id).await, dec!(-150));
}

#[tokio::test]
async fn moving_a_movement_to_another_account_reverts_the_first() {
    let app = TestApp::new().await;
    let kasa = app.hesap("Kasa", dec!(0)).await;
    let banka = app.hesap("Banka", dec!(0)).await;

    let ilk = app
        .state
        .services
        .finans
        .kaydet(hareket(FinansIslemTuru::Tahsilat, dec!(80), Some(kasa.hesap_id), None))
        .await
        .unwrap();

    let mut tasi = hareket(FinansIslemTuru::Tahsilat, dec!(80), Some(banka.hesap_id), None);
    tasi.hareket_id = Some(ilk.hareket_id);
    app.state.services.finans.kaydet(tasi).await.unwrap();

    assert_eq!(app.hesap_bakiyesi(kasa.hesap_id).await, dec!(0));
    assert_eq!(app.hesap_bakiyesi(banka.hesap_id).await, dec!(80));
}

#[tokio::test]
async fn deleting_a_movement_reverts_it() {
    let app = TestApp::new().await;
    let kasa = app.hesap("Kasa", dec!(100)).await;
    let tedarikci = app.cari("T101", CariTuru::Satici).await;

    let odeme = app
        .state
        .services
        .finans
        .kaydet(hareket(
            FinansIslemTuru::Odeme,
            dec!(60),
            Some(kasa.hesap_id),
            Some(tedarikci.cari_id),
        ))
        .await
        .unwrap();
    app.state.services.finans.sil(odeme.hareket_id).await.unwrap();

    assert_eq!(app.hesap_bakiyesi(kasa.hesap_id).await, dec!(100));
    assert_eq!(app.bakiye(tedarikci.cari_id).await, dec!(0));
    assert_matches!(
        app.state.services.finans.sil(odeme.hareket_id).await,
        Err(ServiceError::NotFound(_))
    );
}

#[tokio::test]
async fn deleting_an_account_restores_party_balances() {
    let app = TestApp::new().await;
    let kasa = app.hesap("Kasa", dec!(0)).await;
    let musteri = app.cari("M102", CariTuru::Alici).await;

    app.state
        .services
        .finans
        .kaydet(hareket(
            FinansIslemTuru::Tahsilat,
            dec!(40),
            Some(kasa.hesap_id),
            Some(musteri.cari_id),
        ))
        .await
        .unwrap();
    assert_eq!(app.bakiye(musteri.cari_id).await, dec!(-40));

    app.state.services.kasa_banka.delete(kasa.hesap_id).await.unwrap();

    assert_eq!(app.bakiye(musteri.cari_id).await, dec!(0));
    assert!(app
        .state
        .services
        .finans
        .find_by_cari(musteri.cari_id)
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn deleting_a_check_reverts_movements_referencing_it() {
    let app = TestApp::new().await;
    let banka = app.hesap("Banka", dec!(0)).await;
    let musteri = app.cari("M103", CariTuru::Alici).await;

    let cek = app
        .state
        .services
        .cek_senet
        .kaydet(CekSenetGirdisi {
            evrak_id: None,
            cari_id: Some(musteri.cari_id),
            tur: CekSenetTuru::Cek,
            yon: CekSenetYonu::Alinan,
            vade_tarihi: NaiveDate::from_ymd_opt(2030, 1, 15).unwrap(),
            tutar: dec!(750),
            durum: None,
            banka_adi: Some("Ziraat".into()),
        })
        .await
        .unwrap();
    assert_eq!(cek.durum, CekSenetDurumu::Portfoyde);

    let mut tahsilat = hareket(
        FinansIslemTuru::Tahsilat,
        dec!(750),
        Some(banka.hesap_id),
        Some(musteri.cari_id),
    );
    tahsilat.evrak_id = Some(cek.evrak_id);
    app.state.services.finans.kaydet(tahsilat).await.unwrap();
    app.state
        .services
        .cek_senet
        .durum_guncelle(cek.evrak_id, CekSenetDurumu::TahsilEdildi)
        .await
        .unwrap();

    app.state.services.cek_senet.sil(cek.evrak_id).await.unwrap();

    assert_eq!(app.hesap_bakiyesi(banka.hesap_id).await, dec!(0));
    assert_eq!(app.bakiye(musteri.cari_id).await, dec!(0));
}

#[tokio::test]
async fn unknown_references_are_rejected_without_side_effects() {
    let app = TestApp::new().await;
    let kasa = app.hesap("Kasa", dec!(10)).await;

    assert_matches!(
        app.state
            .services
            .finans
            .kaydet(hareket(
                FinansIslemTuru::Tahsilat,
                dec!(5),
                Some(kasa.hesap_id),
                Some(4242),
            ))
            .await,
        Err(ServiceError::NotFound(_))
    );
    assert_eq!(app.hesap_bakiyesi(kasa.hesap_id).await, dec!(10));
}

#[tokio::test]
async fn non_positive_amounts_fail_validation() {
    let app = TestApp::new().await;
    let kasa = app.hesap("Kasa", dec!(0)).await;

    assert_matches!(
        app.state
            .services
            .finans
            .kaydet(hareket(FinansIslemTuru::Odeme, dec!(0), Some(kasa.hesap_id), None))
            .await,
        Err(ServiceError::ValidationError(_))
    );
}

#[tokio::test]
async fn total_balance_sums_every_account() {
    let app = TestApp::new().await;
    app.hesap("Kasa", dec!(100)).await;
    app.hesap("Banka", dec!(250.5)).await;

    assert_eq!(
        app.state.services.kasa_banka.toplam_bakiye().await.unwrap(),
        dec!(350.5)
    );
}
