use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_cariler_table::Migration),
            Box::new(m20240101_000002_create_catalog_tables::Migration),
            Box::new(m20240101_000003_create_currency_tables::Migration),
            Box::new(m20240101_000004_create_sales_pipeline_tables::Migration),
            Box::new(m20240101_000005_create_invoicing_tables::Migration),
            Box::new(m20240101_000006_create_finance_tables::Migration),
            Box::new(m20240101_000007_create_waste_tables::Migration),
            Box::new(m20240101_000008_create_bakiye_etkileri_table::Migration),
        ]
    }
}

mod m20240101_000001_create_cariler_table {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000001_create_cariler_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Cariler::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Cariler::CariId)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(Cariler::CariKod)
                                .string_len(20)
                                .not_null()
                                .unique_key(),
                        )
                        .col(ColumnDef::new(Cariler::Unvan).string_len(200).not_null())
                        .col(ColumnDef::new(Cariler::Tur).string_len(10).not_null())
                        .col(ColumnDef::new(Cariler::VergiNo).string_len(20).null())
                        .col(
                            ColumnDef::new(Cariler::GuncelBakiye)
                                .decimal_len(15, 2)
                                .not_null()
                                .default(0),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_cariler_unvan")
                        .table(Cariler::Table)
                        .col(Cariler::Unvan)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Cariler::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum Cariler {
        Table,
        CariId,
        CariKod,
        Unvan,
        Tur,
        VergiNo,
        GuncelBakiye,
    }
}

mod m20240101_000002_create_catalog_tables {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000002_create_catalog_tables"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Kategoriler::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Kategoriler::KategoriId)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(Kategoriler::KategoriAd)
                                .string_len(50)
                                .not_null()
                                .unique_key(),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(Urunler::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Urunler::UrunId)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Urunler::UrunAd).string_len(100).not_null())
                        .col(ColumnDef::new(Urunler::KategoriId).integer().not_null())
                        .col(
                            ColumnDef::new(Urunler::MevcutSatisFiyati)
                                .decimal_len(10, 2)
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(Urunler::MinimumStokSeviyesi)
                                .integer()
                                .not_null()
                                .default(10),
                        )
                        .col(
                            ColumnDef::new(Urunler::MevcutStokMiktari)
                                .integer()
                                .not_null()
                                .default(0),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_urunler_kategori_id")
                                .from(Urunler::Table, Urunler::KategoriId)
                                .to(Kategoriler::Table, Kategoriler::KategoriId)
                                .on_delete(ForeignKeyAction::Cascade)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_urunler_kategori_id")
                        .table(Urunler::Table)
                        .col(Urunler::KategoriId)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Urunler::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(Kategoriler::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Kategoriler {
        Table,
        KategoriId,
        KategoriAd,
    }

    #[derive(DeriveIden)]
    pub(super) enum Urunler {
        Table,
        UrunId,
        UrunAd,
        KategoriId,
        MevcutSatisFiyati,
        MinimumStokSeviyesi,
        MevcutStokMiktari,
    }
}

mod m20240101_000003_create_currency_tables {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000003_create_currency_tables"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(ParaBirimleri::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(ParaBirimleri::ParaKod)
                                .string_len(3)
                                .not_null()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(ParaBirimleri::Aciklama).string_len(50).null())
                        .col(ColumnDef::new(ParaBirimleri::Sembol).string_len(5).null())
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(Kurlar::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Kurlar::KurId)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Kurlar::ParaKod).string_len(3).not_null())
                        .col(ColumnDef::new(Kurlar::KurTarihi).date().not_null())
                        .col(ColumnDef::new(Kurlar::Kur).decimal_len(16, 6).not_null())
                        .col(
                            ColumnDef::new(Kurlar::Kaynak)
                                .string_len(50)
                                .not_null()
                                .default("TCMB"),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_kurlar_para_kod")
                                .from(Kurlar::Table, Kurlar::ParaKod)
                                .to(ParaBirimleri::Table, ParaBirimleri::ParaKod)
                                .on_delete(ForeignKeyAction::Cascade)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_kurlar_para_kod_tarih")
                        .table(Kurlar::Table)
                        .col(Kurlar::ParaKod)
                        .col(Kurlar::KurTarihi)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Kurlar::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(ParaBirimleri::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum ParaBirimleri {
        Table,
        ParaKod,
        Aciklama,
        Sembol,
    }

    #[derive(DeriveIden)]
    enum Kurlar {
        Table,
        KurId,
        ParaKod,
        KurTarihi,
        Kur,
        Kaynak,
    }
}

mod m20240101_000004_create_sales_pipeline_tables {
    use super::m20240101_000001_create_cariler_table::Cariler;
    use super::m20240101_000002_create_catalog_tables::Urunler;
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000004_create_sales_pipeline_tables"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Teklifler::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Teklifler::TeklifId)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Teklifler::CariId).integer().not_null())
                        .col(
                            ColumnDef::new(Teklifler::TeklifTarihi)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(ColumnDef::new(Teklifler::GecerlilikTarihi).date().null())
                        .col(
                            ColumnDef::new(Teklifler::Durum)
                                .string_len(20)
                                .not_null()
                                .default("BEKLIYOR"),
                        )
                        .col(
                            ColumnDef::new(Teklifler::ToplamTutar)
                                .decimal_len(15, 2)
                                .not_null()
                                .default(0),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_teklifler_cari_id")
                                .from(Teklifler::Table, Teklifler::CariId)
                                .to(Cariler::Table, Cariler::CariId)
                                .on_delete(ForeignKeyAction::Cascade)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(TeklifDetaylari::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(TeklifDetaylari::DetayId)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(TeklifDetaylari::TeklifId).integer().not_null())
                        .col(ColumnDef::new(TeklifDetaylari::UrunId).integer().not_null())
                        .col(ColumnDef::new(TeklifDetaylari::Miktar).integer().not_null())
                        .col(
                            ColumnDef::new(TeklifDetaylari::BirimFiyat)
                                .decimal_len(10, 2)
                                .not_null(),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_teklif_detaylari_teklif_id")
                                .from(TeklifDetaylari::Table, TeklifDetaylari::TeklifId)
                                .to(Teklifler::Table, Teklifler::TeklifId)
                                .on_delete(ForeignKeyAction::Cascade)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_teklif_detaylari_urun_id")
                                .from(TeklifDetaylari::Table, TeklifDetaylari::UrunId)
                                .to(Urunler::Table, Urunler::UrunId)
                                .on_delete(ForeignKeyAction::Cascade)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(Siparisler::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Siparisler::SiparisId)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Siparisler::TeklifId).integer().null())
                        .col(ColumnDef::new(Siparisler::CariId).integer().not_null())
                        .col(
                            ColumnDef::new(Siparisler::SiparisTarihi)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Siparisler::Durum)
                                .string_len(20)
                                .not_null()
                                .default("HAZIRLANIYOR"),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_siparisler_teklif_id")
                                .from(Siparisler::Table, Siparisler::TeklifId)
                                .to(Teklifler::Table, Teklifler::TeklifId)
                                .on_delete(ForeignKeyAction::SetNull)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_siparisler_cari_id")
                                .from(Siparisler::Table, Siparisler::CariId)
                                .to(Cariler::Table, Cariler::CariId)
                                .on_delete(ForeignKeyAction::Cascade)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_teklifler_cari_id")
                        .table(Teklifler::Table)
                        .col(Teklifler::CariId)
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_siparisler_cari_id")
                        .table(Siparisler::Table)
                        .col(Siparisler::CariId)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Siparisler::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(TeklifDetaylari::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(Teklifler::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Teklifler {
        Table,
        TeklifId,
        CariId,
        TeklifTarihi,
        GecerlilikTarihi,
        Durum,
        ToplamTutar,
    }

    #[derive(DeriveIden)]
    enum TeklifDetaylari {
        Table,
        DetayId,
        TeklifId,
        UrunId,
        Miktar,
        BirimFiyat,
    }

    #[derive(DeriveIden)]
    pub(super) enum Siparisler {
        Table,
        SiparisId,
        TeklifId,
        CariId,
        SiparisTarihi,
        Durum,
    }
}

mod m20240101_000005_create_invoicing_tables {
    use super::m20240101_000001_create_cariler_table::Cariler;
    use super::m20240101_000002_create_catalog_tables::Urunler;
    use super::m20240101_000003_create_currency_tables::ParaBirimleri;
    use super::m20240101_000004_create_sales_pipeline_tables::Siparisler;
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000005_create_invoicing_tables"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Hizmetler::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Hizmetler::HizmetId)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Hizmetler::HizmetAd).string_len(100).not_null())
                        .col(ColumnDef::new(Hizmetler::Tur).string_len(10).null())
                        .col(
                            ColumnDef::new(Hizmetler::KdvOrani)
                                .integer()
                                .not_null()
                                .default(20),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(Faturalar::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Faturalar::FaturaId)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Faturalar::CariId).integer().not_null())
                        .col(
                            ColumnDef::new(Faturalar::FaturaTarihi)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Faturalar::FaturaNo)
                                .string_len(50)
                                .not_null()
                                .unique_key(),
                        )
                        .col(ColumnDef::new(Faturalar::Tur).string_len(10).not_null())
                        .col(
                            ColumnDef::new(Faturalar::GenelToplam)
                                .decimal_len(15, 2)
                                .not_null()
                                .default(0),
                        )
                        .col(ColumnDef::new(Faturalar::Aciklama).string_len(500).null())
                        .col(ColumnDef::new(Faturalar::ParaBirimi).string_len(3).null())
                        .col(
                            ColumnDef::new(Faturalar::Kur)
                                .decimal_len(16, 6)
                                .not_null()
                                .default(1),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_faturalar_cari_id")
                                .from(Faturalar::Table, Faturalar::CariId)
                                .to(Cariler::Table, Cariler::CariId)
                                .on_delete(ForeignKeyAction::Cascade)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_faturalar_para_birimi")
                                .from(Faturalar::Table, Faturalar::ParaBirimi)
                                .to(ParaBirimleri::Table, ParaBirimleri::ParaKod)
                                .on_delete(ForeignKeyAction::SetNull)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(StokGirisCikis::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(StokGirisCikis::HareketId)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(StokGirisCikis::FaturaId).integer().not_null())
                        .col(ColumnDef::new(StokGirisCikis::UrunId).integer().not_null())
                        .col(ColumnDef::new(StokGirisCikis::SiparisId).integer().null())
                        .col(
                            ColumnDef::new(StokGirisCikis::IslemTuru)
                                .string_len(10)
                                .not_null(),
                        )
                        .col(ColumnDef::new(StokGirisCikis::Miktar).integer().not_null())
                        .col(
                            ColumnDef::new(StokGirisCikis::BirimFiyat)
                                .decimal_len(10, 2)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(StokGirisCikis::Tarih)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(ColumnDef::new(StokGirisCikis::ParaBirimi).string_len(3).null())
                        .col(
                            ColumnDef::new(StokGirisCikis::Kur)
                                .decimal_len(16, 6)
                                .not_null()
                                .default(1),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_stok_giris_cikis_fatura_id")
                                .from(StokGirisCikis::Table, StokGirisCikis::FaturaId)
                                .to(Faturalar::Table, Faturalar::FaturaId)
                                .on_delete(ForeignKeyAction::Cascade)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_stok_giris_cikis_urun_id")
                                .from(StokGirisCikis::Table, StokGirisCikis::UrunId)
                                .to(Urunler::Table, Urunler::UrunId)
                                .on_delete(ForeignKeyAction::Cascade)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_stok_giris_cikis_siparis_id")
                                .from(StokGirisCikis::Table, StokGirisCikis::SiparisId)
                                .to(Siparisler::Table, Siparisler::SiparisId)
                                .on_delete(ForeignKeyAction::SetNull)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(FaturaHizmetKalemleri::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(FaturaHizmetKalemleri::KalemId)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(FaturaHizmetKalemleri::FaturaId)
                                .integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(FaturaHizmetKalemleri::HizmetId)
                                .integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(FaturaHizmetKalemleri::Aciklama)
                                .string_len(200)
                                .null(),
                        )
                        .col(
                            ColumnDef::new(FaturaHizmetKalemleri::Tutar)
                                .decimal_len(10, 2)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(FaturaHizmetKalemleri::ParaBirimi)
                                .string_len(3)
                                .null(),
                        )
                        .col(
                            ColumnDef::new(FaturaHizmetKalemleri::Kur)
                                .decimal_len(16, 6)
                                .not_null()
                                .default(1),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_fatura_hizmet_kalemleri_fatura_id")
                                .from(FaturaHizmetKalemleri::Table, FaturaHizmetKalemleri::FaturaId)
                                .to(Faturalar::Table, Faturalar::FaturaId)
                                .on_delete(ForeignKeyAction::Cascade)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_fatura_hizmet_kalemleri_hizmet_id")
                                .from(FaturaHizmetKalemleri::Table, FaturaHizmetKalemleri::HizmetId)
                                .to(Hizmetler::Table, Hizmetler::HizmetId)
                                .on_delete(ForeignKeyAction::Cascade)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_faturalar_cari_id")
                        .table(Faturalar::Table)
                        .col(Faturalar::CariId)
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_faturalar_tarih")
                        .table(Faturalar::Table)
                        .col(Faturalar::FaturaTarihi)
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_stok_giris_cikis_fatura_id")
                        .table(StokGirisCikis::Table)
                        .col(StokGirisCikis::FaturaId)
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_stok_giris_cikis_urun_id")
                        .table(StokGirisCikis::Table)
                        .col(StokGirisCikis::UrunId)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(FaturaHizmetKalemleri::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(StokGirisCikis::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(Faturalar::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(Hizmetler::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Hizmetler {
        Table,
        HizmetId,
        HizmetAd,
        Tur,
        KdvOrani,
    }

    #[derive(DeriveIden)]
    enum Faturalar {
        Table,
        FaturaId,
        CariId,
        FaturaTarihi,
        FaturaNo,
        Tur,
        GenelToplam,
        Aciklama,
        ParaBirimi,
        Kur,
    }

    #[derive(DeriveIden)]
    enum StokGirisCikis {
        Table,
        HareketId,
        FaturaId,
        UrunId,
        SiparisId,
        IslemTuru,
        Miktar,
        BirimFiyat,
        Tarih,
        ParaBirimi,
        Kur,
    }

    #[derive(DeriveIden)]
    enum FaturaHizmetKalemleri {
        Table,
        KalemId,
        FaturaId,
        HizmetId,
        Aciklama,
        Tutar,
        ParaBirimi,
        Kur,
    }
}

mod m20240101_000006_create_finance_tables {
    use super::m20240101_000001_create_cariler_table::Cariler;
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000006_create_finance_tables"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(KasaBanka::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(KasaBanka::HesapId)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(KasaBanka::HesapAdi).string_len(100).not_null())
                        .col(ColumnDef::new(KasaBanka::Tur).string_len(10).not_null())
                        .col(
                            ColumnDef::new(KasaBanka::Bakiye)
                                .decimal_len(15, 2)
                                .not_null()
                                .default(0),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(Personeller::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Personeller::PersonelId)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Personeller::AdSoyad).string_len(100).not_null())
                        .col(ColumnDef::new(Personeller::Gorev).string_len(50).null())
                        .col(ColumnDef::new(Personeller::Maas).decimal_len(10, 2).null())
                        .col(ColumnDef::new(Personeller::IseGirisTarihi).date().null())
                        .col(
                            ColumnDef::new(Personeller::AktifMi)
                                .boolean()
                                .not_null()
                                .default(true),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(CekSenetler::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(CekSenetler::EvrakId)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(CekSenetler::CariId).integer().null())
                        .col(ColumnDef::new(CekSenetler::Tur).string_len(10).not_null())
                        .col(ColumnDef::new(CekSenetler::Yon).string_len(10).not_null())
                        .col(ColumnDef::new(CekSenetler::VadeTarihi).date().not_null())
                        .col(ColumnDef::new(CekSenetler::Tutar).decimal_len(15, 2).not_null())
                        .col(
                            ColumnDef::new(CekSenetler::Durum)
                                .string_len(20)
                                .not_null()
                                .default("PORTFOYDE"),
                        )
                        .col(ColumnDef::new(CekSenetler::BankaAdi).string_len(100).null())
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_cek_senetler_cari_id")
                                .from(CekSenetler::Table, CekSenetler::CariId)
                                .to(Cariler::Table, Cariler::CariId)
                                .on_delete(ForeignKeyAction::Cascade)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(FinansHareketleri::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(FinansHareketleri::HareketId)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(FinansHareketleri::HesapId).integer().null())
                        .col(ColumnDef::new(FinansHareketleri::CariId).integer().null())
                        .col(ColumnDef::new(FinansHareketleri::PersonelId).integer().null())
                        .col(ColumnDef::new(FinansHareketleri::EvrakId).integer().null())
                        .col(
                            ColumnDef::new(FinansHareketleri::IslemTuru)
                                .string_len(20)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(FinansHareketleri::Tutar)
                                .decimal_len(15, 2)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(FinansHareketleri::Tarih)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(ColumnDef::new(FinansHareketleri::ParaBirimi).string_len(3).null())
                        .col(
                            ColumnDef::new(FinansHareketleri::Kur)
                                .decimal_len(16, 6)
                                .not_null()
                                .default(1),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_finans_hareketleri_hesap_id")
                                .from(FinansHareketleri::Table, FinansHareketleri::HesapId)
                                .to(KasaBanka::Table, KasaBanka::HesapId)
                                .on_delete(ForeignKeyAction::Cascade)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_finans_hareketleri_cari_id")
                                .from(FinansHareketleri::Table, FinansHareketleri::CariId)
                                .to(Cariler::Table, Cariler::CariId)
                                .on_delete(ForeignKeyAction::Cascade)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_finans_hareketleri_personel_id")
                                .from(FinansHareketleri::Table, FinansHareketleri::PersonelId)
                                .to(Personeller::Table, Personeller::PersonelId)
                                .on_delete(ForeignKeyAction::Cascade)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_finans_hareketleri_evrak_id")
                                .from(FinansHareketleri::Table, FinansHareketleri::EvrakId)
                                .to(CekSenetler::Table, CekSenetler::EvrakId)
                                .on_delete(ForeignKeyAction::Cascade)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_finans_hareketleri_hesap_id")
                        .table(FinansHareketleri::Table)
                        .col(FinansHareketleri::HesapId)
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_finans_hareketleri_cari_id")
                        .table(FinansHareketleri::Table)
                        .col(FinansHareketleri::CariId)
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_cek_senetler_vade_tarihi")
                        .table(CekSenetler::Table)
                        .col(CekSenetler::VadeTarihi)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(FinansHareketleri::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(CekSenetler::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(Personeller::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(KasaBanka::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum KasaBanka {
        Table,
        HesapId,
        HesapAdi,
        Tur,
        Bakiye,
    }

    #[derive(DeriveIden)]
    enum Personeller {
        Table,
        PersonelId,
        AdSoyad,
        Gorev,
        Maas,
        IseGirisTarihi,
        AktifMi,
    }

    #[derive(DeriveIden)]
    enum CekSenetler {
        Table,
        EvrakId,
        CariId,
        Tur,
        Yon,
        VadeTarihi,
        Tutar,
        Durum,
        BankaAdi,
    }

    #[derive(DeriveIden)]
    enum FinansHareketleri {
        Table,
        HareketId,
        HesapId,
        CariId,
        PersonelId,
        EvrakId,
        IslemTuru,
        Tutar,
        Tarih,
        ParaBirimi,
        Kur,
    }
}

mod m20240101_000007_create_waste_tables {
    use super::m20240101_000002_create_catalog_tables::Urunler;
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000007_create_waste_tables"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(AtikNedenleri::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(AtikNedenleri::NedenId)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(AtikNedenleri::Aciklama)
                                .string_len(100)
                                .not_null(),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(Atiklar::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Atiklar::AtikId)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Atiklar::UrunId).integer().not_null())
                        .col(ColumnDef::new(Atiklar::NedenId).integer().null())
                        .col(ColumnDef::new(Atiklar::Miktar).integer().not_null())
                        .col(
                            ColumnDef::new(Atiklar::Tarih)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_atiklar_urun_id")
                                .from(Atiklar::Table, Atiklar::UrunId)
                                .to(Urunler::Table, Urunler::UrunId)
                                .on_delete(ForeignKeyAction::Cascade)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_atiklar_neden_id")
                                .from(Atiklar::Table, Atiklar::NedenId)
                                .to(AtikNedenleri::Table, AtikNedenleri::NedenId)
                                .on_delete(ForeignKeyAction::Cascade)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Atiklar::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(AtikNedenleri::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum AtikNedenleri {
        Table,
        NedenId,
        Aciklama,
    }

    #[derive(DeriveIden)]
    enum Atiklar {
        Table,
        AtikId,
        UrunId,
        NedenId,
        Miktar,
        Tarih,
    }
}

mod m20240101_000008_create_bakiye_etkileri_table {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000008_create_bakiye_etkileri_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(BakiyeEtkileri::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(BakiyeEtkileri::EtkiId)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(BakiyeEtkileri::Kaynak).string_len(20).not_null())
                        .col(ColumnDef::new(BakiyeEtkileri::KaynakId).integer().not_null())
                        .col(ColumnDef::new(BakiyeEtkileri::Hedef).string_len(10).not_null())
                        .col(ColumnDef::new(BakiyeEtkileri::HedefId).integer().not_null())
                        .col(
                            ColumnDef::new(BakiyeEtkileri::Tutar)
                                .decimal_len(15, 2)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(BakiyeEtkileri::OlusturmaTarihi)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .to_owned(),
                )
                .await?;

            // One applied effect per source row and target kind
            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("uq_bakiye_etkileri_kaynak_hedef")
                        .table(BakiyeEtkileri::Table)
                        .col(BakiyeEtkileri::Kaynak)
                        .col(BakiyeEtkileri::KaynakId)
                        .col(BakiyeEtkileri::Hedef)
                        .unique()
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_bakiye_etkileri_hedef")
                        .table(BakiyeEtkileri::Table)
                        .col(BakiyeEtkileri::Hedef)
                        .col(BakiyeEtkileri::HedefId)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(BakiyeEtkileri::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum BakiyeEtkileri {
        Table,
        EtkiId,
        Kaynak,
        KaynakId,
        Hedef,
        HedefId,
        Tutar,
        OlusturmaTarihi,
    }
}
