use crate::{
    db::{self, DbPool},
    entities::{
        bakiye_etkisi::EtkiKaynagi,
        cari, cek_senet,
        finans_hareketi::{self, Entity as FinansHareketi, FinansIslemTuru},
        kasa_banka, personel,
    },
    errors::ServiceError,
    repositories::FinansRepository,
    services::{
        bos_ise_none,
        ledger::{self, Etki},
        validate_positive_decimal,
    },
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, Set};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, instrument};
use validator::Validate;

/// A collection, payment or salary movement.
///
/// The account and party are both optional; a side that is absent is simply
/// not touched.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FinansGirdisi {
    #[serde(default)]
    pub hareket_id: Option<i32>,
    #[serde(default)]
    pub hesap_id: Option<i32>,
    #[serde(default)]
    pub cari_id: Option<i32>,
    #[serde(default)]
    pub personel_id: Option<i32>,
    #[serde(default)]
    pub evrak_id: Option<i32>,
    pub islem_turu: FinansIslemTuru,
    #[validate(custom = "validate_positive_decimal")]
    pub tutar: Decimal,
    #[serde(default)]
    pub tarih: Option<DateTime<Utc>>,
    #[validate(length(equal = 3))]
    #[serde(default)]
    pub para_birimi: Option<String>,
    #[validate(custom = "validate_positive_decimal")]
    #[serde(default)]
    pub kur: Option<Decimal>,
}

impl FinansGirdisi {
    pub fn new(islem_turu: FinansIslemTuru, tutar: Decimal) -> Self {
        Self {
            hareket_id: None,
            hesap_id: None,
            cari_id: None,
            personel_id: None,
            evrak_id: None,
            islem_turu,
            tutar,
            tarih: None,
            para_birimi: None,
            kur: None,
        }
    }

    /// Effects the movement should have on account and party balances.
    pub fn etkiler(&self) -> Vec<Etki> {
        etkiler(self.islem_turu, self.tutar, self.hesap_id, self.cari_id)
    }
}

fn etkiler(
    islem_turu: FinansIslemTuru,
    tutar: Decimal,
    hesap_id: Option<i32>,
    cari_id: Option<i32>,
) -> Vec<Etki> {
    let mut etkiler = Vec::with_capacity(2);
    if let Some(hesap_id) = hesap_id {
        etkiler.push(Etki::hesap(hesap_id, islem_turu.hesap_etkisi(tutar)));
    }
    if let (Some(cari_id), Some(tutar)) = (cari_id, islem_turu.cari_etkisi(tutar)) {
        etkiler.push(Etki::cari(cari_id, tutar));
    }
    etkiler
}

pub struct FinansService {
    db_pool: Arc<DbPool>,
    repo: FinansRepository,
}

impl FinansService {
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self {
            repo: FinansRepository::new(db_pool.clone()),
            db_pool,
        }
    }

    async fn referanslari_dogrula<C: ConnectionTrait>(
        conn: &C,
        girdi: &FinansGirdisi,
    ) -> Result<(), ServiceError> {
        if let Some(id) = girdi.hesap_id {
            kasa_banka::Entity::find_by_id(id)
                .one(conn)
                .await
                .map_err(ServiceError::db_error)?
                .ok_or_else(|| ServiceError::not_found("Account", id))?;
        }
        if let Some(id) = girdi.cari_id {
            cari::Entity::find_by_id(id)
                .one(conn)
                .await
                .map_err(ServiceError::db_error)?
                .ok_or_else(|| ServiceError::not_found("Party", id))?;
        }
        if let Some(id) = girdi.personel_id {
            personel::Entity::find_by_id(id)
                .one(conn)
                .await
                .map_err(ServiceError::db_error)?
                .ok_or_else(|| ServiceError::not_found("Employee", id))?;
        }
        if let Some(id) = girdi.evrak_id {
            cek_senet::Entity::find_by_id(id)
                .one(conn)
                .await
                .map_err(ServiceError::db_error)?
                .ok_or_else(|| ServiceError::not_found("Check/note", id))?;
        }
        Ok(())
    }

    /// Records a movement, or rewrites it when `hareket_id` is given, and
    /// reconciles its account and party effects.
    #[instrument(skip(self, girdi), fields(islem_turu = %girdi.islem_turu, tutar = %girdi.tutar))]
    pub async fn kaydet(&self, girdi: FinansGirdisi) -> Result<finans_hareketi::Model, ServiceError> {
        girdi.validate()?;

        let hareket = db::in_transaction(&self.db_pool, "finans.kaydet", move |txn| {
            Box::pin(async move {
                Self::referanslari_dogrula(txn, &girdi).await?;

                let istenen = girdi.etkiler();
                let tarih = girdi.tarih.unwrap_or_else(Utc::now);
                let para_birimi = bos_ise_none(girdi.para_birimi).map(|k| k.to_uppercase());
                let kur = girdi.kur.unwrap_or(Decimal::ONE);
                let tutar = girdi.tutar.round_dp(2);

                let hareket = match girdi.hareket_id {
                    Some(id) => {
                        let mevcut = FinansHareketi::find_by_id(id)
                            .one(txn)
                            .await
                            .map_err(ServiceError::db_error)?
                            .ok_or_else(|| ServiceError::not_found("Financial movement", id))?;
                        let mut active: finans_hareketi::ActiveModel = mevcut.into();
                        active.hesap_id = Set(girdi.hesap_id);
                        active.cari_id = Set(girdi.cari_id);
                        active.personel_id = Set(girdi.personel_id);
                        active.evrak_id = Set(girdi.evrak_id);
                        active.islem_turu = Set(girdi.islem_turu);
                        active.tutar = Set(tutar);
                        active.tarih = Set(tarih);
                        active.para_birimi = Set(para_birimi);
                        active.kur = Set(kur);
                        active.update(txn).await.map_err(ServiceError::db_error)?
                    }
                    None => finans_hareketi::ActiveModel {
                        hesap_id: Set(girdi.hesap_id),
                        cari_id: Set(girdi.cari_id),
                        personel_id: Set(girdi.personel_id),
                        evrak_id: Set(girdi.evrak_id),
                        islem_turu: Set(girdi.islem_turu),
                        tutar: Set(tutar),
                        tarih: Set(tarih),
                        para_birimi: Set(para_birimi),
                        kur: Set(kur),
                        ..Default::default()
                    }
                    .insert(txn)
                    .await
                    .map_err(ServiceError::db_error)?,
                };

                ledger::reconcile(txn, EtkiKaynagi::FinansHareketi, hareket.hareket_id, istenen)
                    .await?;
                Ok(hareket)
            })
        })
        .await?;

        info!(hareket_id = hareket.hareket_id, "Financial movement saved");
        Ok(hareket)
    }

    /// Reverts the movement's effects and deletes it.
    #[instrument(skip(self))]
    pub async fn sil(&self, hareket_id: i32) -> Result<(), ServiceError> {
        db::in_transaction(&self.db_pool, "finans.sil", move |txn| {
            Box::pin(async move {
                FinansHareketi::find_by_id(hareket_id)
                    .one(txn)
                    .await
                    .map_err(ServiceError::db_error)?
                    .ok_or_else(|| ServiceError::not_found("Financial movement", hareket_id))?;
                ledger::geri_al(txn, EtkiKaynagi::FinansHareketi, &[hareket_id]).await?;
                FinansHareketi::delete_by_id(hareket_id)
                    .exec(txn)
                    .await
                    .map_err(ServiceError::db_error)?;
                Ok(())
            })
        })
        .await
    }

    pub async fn find_all(&self) -> Result<Vec<finans_hareketi::Model>, ServiceError> {
        self.repo.find_all().await
    }

    pub async fn find_by_id(
        &self,
        hareket_id: i32,
    ) -> Result<Option<finans_hareketi::Model>, ServiceError> {
        self.repo.find_by_id(hareket_id).await
    }

    pub async fn find_by_hesap(
        &self,
        hesap_id: i32,
    ) -> Result<Vec<finans_hareketi::Model>, ServiceError> {
        self.repo.find_by_hesap(hesap_id).await
    }

    pub async fn find_by_cari(
        &self,
        cari_id: i32,
    ) -> Result<Vec<finans_hareketi::Model>, ServiceError> {
        self.repo.find_by_cari(cari_id).await
    }

    pub async fn find_by_islem_turu(
        &self,
        islem_turu: FinansIslemTuru,
    ) -> Result<Vec<finans_hareketi::Model>, ServiceError> {
        self.repo.find_by_islem_turu(islem_turu).await
    }

    pub async fn find_by_tarih_araligi(
        &self,
        baslangic: DateTime<Utc>,
        bitis: DateTime<Utc>,
    ) -> Result<Vec<finans_hareketi::Model>, ServiceError> {
        self.repo.find_by_tarih_araligi(baslangic, bitis).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::bakiye_etkisi::EtkiHedefi;
    use rust_decimal_macros::dec;

    #[test]
    fn collection_targets_both_sides() {
        let mut girdi = FinansGirdisi::new(FinansIslemTuru::Tahsilat, dec!(250));
        girdi.hesap_id = Some(1);
        girdi.cari_id = Some(9);

        let etkiler = girdi.etkiler();
        assert_eq!(etkiler, vec![Etki::hesap(1, dec!(250)), Etki::cari(9, dec!(-250))]);
    }

    #[test]
    fn missing_sides_are_skipped() {
        let mut girdi = FinansGirdisi::new(FinansIslemTuru::Odeme, dec!(80));
        girdi.cari_id = Some(4);

        let etkiler = girdi.etkiler();
        assert_eq!(etkiler.len(), 1);
        assert_eq!(etkiler[0].hedef, EtkiHedefi::Cari);
        assert_eq!(etkiler[0].tutar, dec!(80));
    }

    #[test]
    fn salary_never_touches_the_party() {
        let mut girdi = FinansGirdisi::new(FinansIslemTuru::Maas, dec!(30000));
        girdi.hesap_id = Some(2);
        girdi.cari_id = Some(3);

        assert_eq!(girdi.etkiler(), vec![Etki::hesap(2, dec!(-30000))]);
    }

    #[test]
    fn non_positive_amount_fails_validation() {
        let girdi = FinansGirdisi::new(FinansIslemTuru::Tahsilat, dec!(0));
        assert!(girdi.validate().is_err());
    }
}
