//! Balance propagation.
//!
//! Every invoice, stock movement and financial movement records the effects it
//! has applied to party balances, account balances and product stock in
//! `bakiye_etkileri`. Saving a source row reconciles the effects it should have
//! against the recorded ones, so a re-save applies nothing twice and an edit
//! applies only the difference. Deleting a source reconciles against an empty
//! set, which reverts everything it applied.

use chrono::Utc;
use metrics::counter;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, EntityTrait, QueryFilter,
    QuerySelect, Set,
};
use serde::Serialize;
use tracing::{debug, warn};

use crate::entities::bakiye_etkisi::{self, EtkiHedefi, EtkiKaynagi};
use crate::entities::{cari, finans_hareketi, kasa_banka, stok_giris_cikis, urun};
use crate::errors::ServiceError;

/// One effect a source row should have on one aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Etki {
    pub hedef: EtkiHedefi,
    pub hedef_id: i32,
    pub tutar: Decimal,
}

impl Etki {
    pub fn cari(cari_id: i32, tutar: Decimal) -> Self {
        Self {
            hedef: EtkiHedefi::Cari,
            hedef_id: cari_id,
            tutar,
        }
    }

    pub fn hesap(hesap_id: i32, tutar: Decimal) -> Self {
        Self {
            hedef: EtkiHedefi::Hesap,
            hedef_id: hesap_id,
            tutar,
        }
    }

    pub fn urun(urun_id: i32, miktar: i32) -> Self {
        Self {
            hedef: EtkiHedefi::Urun,
            hedef_id: urun_id,
            tutar: Decimal::from(miktar),
        }
    }
}

/// What a reconciliation changed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Mutabakat {
    pub korunan: usize,
    pub geri_alinan: usize,
    pub uygulanan: usize,
}

impl Mutabakat {
    pub fn degisiklik_yok(&self) -> bool {
        self.geri_alinan == 0 && self.uygulanan == 0
    }
}

fn yuvarla(tutar: Decimal) -> Decimal {
    tutar.round_dp(2)
}

fn hedef_etiketi(hedef: EtkiHedefi) -> &'static str {
    match hedef {
        EtkiHedefi::Cari => "cari",
        EtkiHedefi::Hesap => "hesap",
        EtkiHedefi::Urun => "urun",
    }
}

/// Brings the applied effects of `(kaynak, kaynak_id)` in line with `istenen`.
///
/// Zero effects are dropped. At most one effect per target kind is allowed.
/// Must run inside the caller's transaction.
pub async fn reconcile<C>(
    conn: &C,
    kaynak: EtkiKaynagi,
    kaynak_id: i32,
    istenen: Vec<Etki>,
) -> Result<Mutabakat, ServiceError>
where
    C: ConnectionTrait,
{
    let mut istenen: Vec<Etki> = istenen
        .into_iter()
        .map(|e| Etki {
            tutar: yuvarla(e.tutar),
            ..e
        })
        .filter(|e| !e.tutar.is_zero())
        .collect();

    for (i, etki) in istenen.iter().enumerate() {
        if istenen[..i].iter().any(|o| o.hedef == etki.hedef) {
            return Err(ServiceError::InternalError(format!(
                "{} {} produces more than one {} effect",
                kaynak, kaynak_id, etki.hedef
            )));
        }
    }

    let mevcut = bakiye_etkisi::Entity::find()
        .filter(bakiye_etkisi::Column::Kaynak.eq(kaynak))
        .filter(bakiye_etkisi::Column::KaynakId.eq(kaynak_id))
        .all(conn)
        .await
        .map_err(ServiceError::db_error)?;

    let mut ozet = Mutabakat::default();

    for kayit in mevcut {
        let kayitli = yuvarla(kayit.tutar);
        let ayni = istenen
            .iter()
            .position(|e| e.hedef == kayit.hedef && e.hedef_id == kayit.hedef_id && e.tutar == kayitli);

        match ayni {
            Some(idx) => {
                istenen.remove(idx);
                ozet.korunan += 1;
            }
            None => {
                hedefe_uygula(conn, kayit.hedef, kayit.hedef_id, -kayitli, false).await?;
                bakiye_etkisi::Entity::delete_by_id(kayit.etki_id)
                    .exec(conn)
                    .await
                    .map_err(ServiceError::db_error)?;
                counter!("ticari_ledger.effects_reverted", 1, "hedef" => hedef_etiketi(kayit.hedef));
                ozet.geri_alinan += 1;
            }
        }
    }

    for etki in istenen {
        hedefe_uygula(conn, etki.hedef, etki.hedef_id, etki.tutar, true).await?;
        bakiye_etkisi::ActiveModel {
            kaynak: Set(kaynak),
            kaynak_id: Set(kaynak_id),
            hedef: Set(etki.hedef),
            hedef_id: Set(etki.hedef_id),
            tutar: Set(etki.tutar),
            olusturma_tarihi: Set(Utc::now()),
            ..Default::default()
        }
        .insert(conn)
        .await
        .map_err(ServiceError::db_error)?;
        counter!("ticari_ledger.effects_applied", 1, "hedef" => hedef_etiketi(etki.hedef));
        ozet.uygulanan += 1;
    }

    debug!(
        %kaynak,
        kaynak_id,
        korunan = ozet.korunan,
        geri_alinan = ozet.geri_alinan,
        uygulanan = ozet.uygulanan,
        "Balance effects reconciled"
    );

    Ok(ozet)
}

/// Reverts every effect of the given source rows.
pub async fn geri_al<C>(
    conn: &C,
    kaynak: EtkiKaynagi,
    kaynak_idler: &[i32],
) -> Result<Mutabakat, ServiceError>
where
    C: ConnectionTrait,
{
    let mut toplam = Mutabakat::default();
    for &kaynak_id in kaynak_idler {
        let ozet = reconcile(conn, kaynak, kaynak_id, Vec::new()).await?;
        toplam.geri_alinan += ozet.geri_alinan;
    }
    Ok(toplam)
}

/// Reverts the invoices and the stock movements they own.
/// Used before a cascade removes them.
pub async fn faturalari_geri_al<C>(conn: &C, fatura_idler: &[i32]) -> Result<Mutabakat, ServiceError>
where
    C: ConnectionTrait,
{
    if fatura_idler.is_empty() {
        return Ok(Mutabakat::default());
    }
    let mut ozet = stok_hareketlerini_geri_al(
        conn,
        Condition::all().add(stok_giris_cikis::Column::FaturaId.is_in(fatura_idler.to_vec())),
    )
    .await?;
    ozet.geri_alinan += geri_al(conn, EtkiKaynagi::Fatura, fatura_idler)
        .await?
        .geri_alinan;
    Ok(ozet)
}

/// Reverts every stock movement matching `kosul`.
pub async fn stok_hareketlerini_geri_al<C>(conn: &C, kosul: Condition) -> Result<Mutabakat, ServiceError>
where
    C: ConnectionTrait,
{
    let idler: Vec<i32> = stok_giris_cikis::Entity::find()
        .select_only()
        .column(stok_giris_cikis::Column::HareketId)
        .filter(kosul)
        .into_tuple()
        .all(conn)
        .await
        .map_err(ServiceError::db_error)?;
    geri_al(conn, EtkiKaynagi::StokHareketi, &idler).await
}

/// Reverts every financial movement matching `kosul`.
pub async fn finans_hareketlerini_geri_al<C>(
    conn: &C,
    kosul: Condition,
) -> Result<Mutabakat, ServiceError>
where
    C: ConnectionTrait,
{
    let idler: Vec<i32> = finans_hareketi::Entity::find()
        .select_only()
        .column(finans_hareketi::Column::HareketId)
        .filter(kosul)
        .into_tuple()
        .all(conn)
        .await
        .map_err(ServiceError::db_error)?;
    geri_al(conn, EtkiKaynagi::FinansHareketi, &idler).await
}

/// Adds `delta` to the target's running total.
///
/// A missing target is an error when applying. When reverting it is skipped,
/// since the aggregate the effect was applied to no longer exists.
async fn hedefe_uygula<C>(
    conn: &C,
    hedef: EtkiHedefi,
    hedef_id: i32,
    delta: Decimal,
    eksik_hedef_hatadir: bool,
) -> Result<(), ServiceError>
where
    C: ConnectionTrait,
{
    let bulundu = match hedef {
        EtkiHedefi::Cari => cari_bakiyesine_ekle(conn, hedef_id, delta).await?,
        EtkiHedefi::Hesap => hesap_bakiyesine_ekle(conn, hedef_id, delta).await?,
        EtkiHedefi::Urun => {
            let miktar = delta.trunc().to_i32().ok_or_else(|| {
                ServiceError::InvalidInput(format!("Stock delta {} is out of range", delta))
            })?;
            stoga_ekle(conn, hedef_id, miktar).await?
        }
    };

    if bulundu {
        Ok(())
    } else if eksik_hedef_hatadir {
        Err(ServiceError::not_found(hedef_etiketi(hedef), hedef_id))
    } else {
        warn!(%hedef, hedef_id, %delta, "Reverting effect on a missing target; skipped");
        Ok(())
    }
}

/// Adds `delta` to a party balance. Returns false when the party does not exist.
pub(crate) async fn cari_bakiyesine_ekle<C>(
    conn: &C,
    cari_id: i32,
    delta: Decimal,
) -> Result<bool, ServiceError>
where
    C: ConnectionTrait,
{
    let Some(cari) = cari::Entity::find_by_id(cari_id)
        .one(conn)
        .await
        .map_err(ServiceError::db_error)?
    else {
        return Ok(false);
    };

    let yeni = yuvarla(cari.guncel_bakiye + delta);
    let mut active: cari::ActiveModel = cari.into();
    active.guncel_bakiye = Set(yeni);
    active.update(conn).await.map_err(ServiceError::db_error)?;
    Ok(true)
}

/// Adds `delta` to an account balance. Returns false when the account does not exist.
pub(crate) async fn hesap_bakiyesine_ekle<C>(
    conn: &C,
    hesap_id: i32,
    delta: Decimal,
) -> Result<bool, ServiceError>
where
    C: ConnectionTrait,
{
    let Some(hesap) = kasa_banka::Entity::find_by_id(hesap_id)
        .one(conn)
        .await
        .map_err(ServiceError::db_error)?
    else {
        return Ok(false);
    };

    let yeni = yuvarla(hesap.bakiye + delta);
    let mut active: kasa_banka::ActiveModel = hesap.into();
    active.bakiye = Set(yeni);
    active.update(conn).await.map_err(ServiceError::db_error)?;
    Ok(true)
}

/// Adds `miktar` to a product's stock. Returns false when the product does not exist.
pub(crate) async fn stoga_ekle<C>(conn: &C, urun_id: i32, miktar: i32) -> Result<bool, ServiceError>
where
    C: ConnectionTrait,
{
    let Some(urun) = urun::Entity::find_by_id(urun_id)
        .one(conn)
        .await
        .map_err(ServiceError::db_error)?
    else {
        return Ok(false);
    };

    let yeni = urun.mevcut_stok_miktari.checked_add(miktar).ok_or_else(|| {
        ServiceError::InvalidInput(format!("Stock of product {} overflows", urun_id))
    })?;
    let mut active: urun::ActiveModel = urun.into();
    active.mevcut_stok_miktari = Set(yeni);
    active.update(conn).await.map_err(ServiceError::db_error)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{cari::CariTuru, kategori};
    use crate::test_support::bellek_db;
    use rust_decimal_macros::dec;
    use sea_orm::DatabaseConnection;

    async fn cari_olustur(db: &DatabaseConnection) -> cari::Model {
        cari::ActiveModel {
            cari_kod: Set("C-1".to_string()),
            unvan: Set("Deneme Ltd".to_string()),
            tur: Set(CariTuru::Alici),
            vergi_no: Set(None),
            guncel_bakiye: Set(Decimal::ZERO),
            ..Default::default()
        }
        .insert(db)
        .await
        .unwrap()
    }

    async fn urun_olustur(db: &DatabaseConnection, stok: i32) -> urun::Model {
        let kategori = kategori::ActiveModel {
            kategori_ad: Set("Genel".to_string()),
            ..Default::default()
        }
        .insert(db)
        .await
        .unwrap();
        urun::ActiveModel {
            urun_ad: Set("Vida".to_string()),
            kategori_id: Set(kategori.kategori_id),
            mevcut_satis_fiyati: Set(dec!(2.5)),
            minimum_stok_seviyesi: Set(10),
            mevcut_stok_miktari: Set(stok),
            ..Default::default()
        }
        .insert(db)
        .await
        .unwrap()
    }

    async fn bakiye(db: &DatabaseConnection, cari_id: i32) -> Decimal {
        cari::Entity::find_by_id(cari_id)
            .one(db)
            .await
            .unwrap()
            .unwrap()
            .guncel_bakiye
    }

    #[tokio::test]
    async fn reapplying_the_same_effect_is_a_noop() {
        let db = bellek_db().await;
        let cari = cari_olustur(&db).await;

        let ilk = reconcile(&db, EtkiKaynagi::Fatura, 1, vec![Etki::cari(cari.cari_id, dec!(150))])
            .await
            .unwrap();
        let ikinci = reconcile(&db, EtkiKaynagi::Fatura, 1, vec![Etki::cari(cari.cari_id, dec!(150))])
            .await
            .unwrap();

        assert_eq!(ilk.uygulanan, 1);
        assert!(ikinci.degisiklik_yok());
        assert_eq!(bakiye(&db, cari.cari_id).await, dec!(150));
    }

    #[tokio::test]
    async fn changed_amount_applies_only_the_difference() {
        let db = bellek_db().await;
        let cari = cari_olustur(&db).await;

        reconcile(&db, EtkiKaynagi::Fatura, 7, vec![Etki::cari(cari.cari_id, dec!(100))])
            .await
            .unwrap();
        let ozet = reconcile(&db, EtkiKaynagi::Fatura, 7, vec![Etki::cari(cari.cari_id, dec!(60))])
            .await
            .unwrap();

        assert_eq!(ozet.geri_alinan, 1);
        assert_eq!(ozet.uygulanan, 1);
        assert_eq!(bakiye(&db, cari.cari_id).await, dec!(60));
    }

    #[tokio::test]
    async fn reverting_restores_stock() {
        let db = bellek_db().await;
        let urun = urun_olustur(&db, 20).await;

        reconcile(&db, EtkiKaynagi::StokHareketi, 3, vec![Etki::urun(urun.urun_id, -5)])
            .await
            .unwrap();
        let stok = urun::Entity::find_by_id(urun.urun_id).one(&db).await.unwrap().unwrap();
        assert_eq!(stok.mevcut_stok_miktari, 15);

        geri_al(&db, EtkiKaynagi::StokHareketi, &[3]).await.unwrap();
        let stok = urun::Entity::find_by_id(urun.urun_id).one(&db).await.unwrap().unwrap();
        assert_eq!(stok.mevcut_stok_miktari, 20);
    }

    #[tokio::test]
    async fn applying_to_missing_target_fails() {
        let db = bellek_db().await;
        let err = reconcile(&db, EtkiKaynagi::FinansHareketi, 1, vec![Etki::hesap(404, dec!(10))])
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn two_effects_on_the_same_target_kind_are_rejected() {
        let db = bellek_db().await;
        let err = reconcile(
            &db,
            EtkiKaynagi::FinansHareketi,
            1,
            vec![Etki::cari(1, dec!(10)), Etki::cari(2, dec!(10))],
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ServiceError::InternalError(_)));
    }

    #[tokio::test]
    async fn zero_effects_are_not_recorded() {
        let db = bellek_db().await;
        let cari = cari_olustur(&db).await;
        let ozet = reconcile(&db, EtkiKaynagi::Fatura, 1, vec![Etki::cari(cari.cari_id, Decimal::ZERO)])
            .await
            .unwrap();
        assert_eq!(ozet, Mutabakat::default());
        let kayitlar = bakiye_etkisi::Entity::find().all(&db).await.unwrap();
        assert!(kayitlar.is_empty());
    }
}
