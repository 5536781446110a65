use std::str::FromStr;

use anyhow::{anyhow, bail, Context, Result};
use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, Utc};
use clap::{ArgAction, Args, Parser, Subcommand};
use rust_decimal::Decimal;
use serde::Serialize;
use ticari::{
    bootstrap,
    config::{self, AppConfig},
    entities::{
        CariTuru, CekSenetDurumu, CekSenetTuru, CekSenetYonu, FaturaTuru, FinansIslemTuru,
        HesapTuru, HizmetTuru, SiparisDurumu, StokIslemTuru, TeklifDurumu,
    },
    services::{
        atik::{AtikGirdisi, AtikNedeniGirdisi},
        cari::CariGirdisi,
        cek_senet::CekSenetGirdisi,
        fatura::{FaturaGirdisi, FaturaSatiri, HizmetSatiri},
        finans::FinansGirdisi,
        hizmet::HizmetGirdisi,
        kasa_banka::HesapGirdisi,
        kategori::KategoriGirdisi,
        para_birimi::{KurGirdisi, ParaBirimiGirdisi},
        personel::PersonelGirdisi,
        stok::StokHareketiGirdisi,
        teklif::{TeklifGirdisi, TeklifSatiri},
        urun::UrunGirdisi,
    },
    AppState,
};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = config::load_config_logged().context("failed to load application config")?;
    config::init_tracing(config.log_level(), config.log_json);

    match cli.command {
        Commands::Bootstrap(args) => return handle_bootstrap(&config, args, cli.json).await,
        Commands::Migrate => return handle_migrate(config).await,
        _ => {}
    }

    let state = AppState::start(config)
        .await
        .map_err(|e| anyhow!(e.user_message()))
        .context("failed to open database")?;
    let json = cli.json;

    match cli.command {
        Commands::Cari(command) => handle_cari_command(&state, command, json).await,
        Commands::Kategori(command) => handle_kategori_command(&state, command, json).await,
        Commands::Urun(command) => handle_urun_command(&state, command, json).await,
        Commands::Fatura(command) => handle_fatura_command(&state, command, json).await,
        Commands::Stok(command) => handle_stok_command(&state, command, json).await,
        Commands::Kasa(command) => handle_kasa_command(&state, command, json).await,
        Commands::Finans(command) => handle_finans_command(&state, command, json).await,
        Commands::Teklif(command) => handle_teklif_command(&state, command, json).await,
        Commands::Siparis(command) => handle_siparis_command(&state, command, json).await,
        Commands::Cek(command) => handle_cek_command(&state, command, json).await,
        Commands::Para(command) => handle_para_command(&state, command, json).await,
        Commands::Hizmet(command) => handle_hizmet_command(&state, command, json).await,
        Commands::Personel(command) => handle_personel_command(&state, command, json).await,
        Commands::Atik(command) => handle_atik_command(&state, command, json).await,
        Commands::Dashboard(args) => handle_dashboard(&state, args, json).await,
        Commands::Bootstrap(_) | Commands::Migrate => Ok(()),
    }
}

#[derive(Parser)]
#[command(name = "ticari", about = "Trade management CLI: parties, stock, invoices and accounts", version)]
struct Cli {
    #[arg(
        long,
        global = true,
        action = ArgAction::SetTrue,
        help = "Render command output as pretty JSON when available"
    )]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Prepare the database engine and the application database
    Bootstrap(BootstrapArgs),
    /// Apply pending schema migrations
    Migrate,
    #[command(subcommand)]
    Cari(CariCommands),
    #[command(subcommand)]
    Kategori(KategoriCommands),
    #[command(subcommand)]
    Urun(UrunCommands),
    #[command(subcommand)]
    Fatura(FaturaCommands),
    #[command(subcommand)]
    Stok(StokCommands),
    #[command(subcommand)]
    Kasa(KasaCommands),
    #[command(subcommand)]
    Finans(FinansCommands),
    #[command(subcommand)]
    Teklif(TeklifCommands),
    #[command(subcommand)]
    Siparis(SiparisCommands),
    #[command(subcommand)]
    Cek(CekCommands),
    #[command(subcommand)]
    Para(ParaCommands),
    #[command(subcommand)]
    Hizmet(HizmetCommands),
    #[command(subcommand)]
    Personel(PersonelCommands),
    #[command(subcommand)]
    Atik(AtikCommands),
    Dashboard(DashboardArgs),
}

#[derive(Args)]
struct BootstrapArgs {
    #[arg(long, action = ArgAction::SetTrue, help = "Run the configured installer when the engine is missing")]
    install: bool,
}

#[derive(Args)]
struct IdArg {
    id: i32,
}

#[derive(Args)]
struct SearchArg {
    term: String,
}

#[derive(Args)]
struct RangeArgs {
    #[arg(long, help = "First day, YYYY-MM-DD")]
    from: NaiveDate,
    #[arg(long, help = "Last day, YYYY-MM-DD (inclusive)")]
    to: NaiveDate,
}

impl RangeArgs {
    fn bounds(&self) -> (DateTime<Utc>, DateTime<Utc>) {
        (
            self.from.and_time(NaiveTime::MIN).and_utc(),
            self.to
                .and_hms_milli_opt(23, 59, 59, 999)
                .unwrap_or_else(|| self.to.and_time(NaiveTime::MIN))
                .and_utc(),
        )
    }
}

#[derive(Args)]
struct AmountArgs {
    id: i32,
    #[arg(allow_hyphen_values = true)]
    tutar: Decimal,
}

// ----- cari -----

#[derive(Subcommand)]
enum CariCommands {
    List,
    Get(IdArg),
    Kod { kod: String },
    Tur { tur: CariTuru },
    VergiNo { vergi_no: String },
    Search(SearchArg),
    Create(CariArgs),
    Update {
        id: i32,
        #[command(flatten)]
        args: CariArgs,
    },
    Delete(IdArg),
    /// Add an amount (negative to subtract) to the party balance
    Bakiye(AmountArgs),
}

#[derive(Args)]
struct CariArgs {
    #[arg(long)]
    kod: String,
    #[arg(long)]
    unvan: String,
    #[arg(long)]
    tur: CariTuru,
    #[arg(long)]
    vergi_no: Option<String>,
}

impl From<CariArgs> for CariGirdisi {
    fn from(args: CariArgs) -> Self {
        CariGirdisi {
            cari_kod: args.kod,
            unvan: args.unvan,
            tur: args.tur,
            vergi_no: args.vergi_no,
        }
    }
}

async fn handle_cari_command(state: &AppState, command: CariCommands, json: bool) -> Result<()> {
    let service = &state.services.cari;
    let line = |c: &ticari::entities::CariModel| {
        format!("- [{}] {} {} ({}) bakiye {}", c.cari_id, c.cari_kod, c.unvan, c.tur, c.guncel_bakiye)
    };
    match command {
        CariCommands::List => render_list(&service.find_all().await.map_err(user_error)?, json, line),
        CariCommands::Get(a) => render_one(service.find_by_id(a.id).await.map_err(user_error)?, json, line),
        CariCommands::Kod { kod } => {
            render_one(service.find_by_kod(&kod).await.map_err(user_error)?, json, line)
        }
        CariCommands::Tur { tur } => {
            render_list(&service.find_by_tur(tur).await.map_err(user_error)?, json, line)
        }
        CariCommands::VergiNo { vergi_no } => render_one(
            service.find_by_vergi_no(&vergi_no).await.map_err(user_error)?,
            json,
            line,
        ),
        CariCommands::Search(a) => {
            render_list(&service.search_by_unvan(&a.term).await.map_err(user_error)?, json, line)
        }
        CariCommands::Create(args) => {
            let cari = service.create(args.into()).await.map_err(user_error)?;
            render_item(&cari, json, line)
        }
        CariCommands::Update { id, args } => {
            let cari = service.update(id, args.into()).await.map_err(user_error)?;
            render_item(&cari, json, line)
        }
        CariCommands::Delete(a) => {
            service.delete(a.id).await.map_err(user_error)?;
            done(json, format!("Party {} deleted", a.id))
        }
        CariCommands::Bakiye(a) => {
            service.bakiye_guncelle(a.id, a.tutar).await.map_err(user_error)?;
            done(json, format!("Party {} balance adjusted by {}", a.id, a.tutar))
        }
    }
}

// ----- kategori -----

#[derive(Subcommand)]
enum KategoriCommands {
    List,
    Get(IdArg),
    Ad { ad: String },
    Create { ad: String },
    Delete(IdArg),
}

async fn handle_kategori_command(
    state: &AppState,
    command: KategoriCommands,
    json: bool,
) -> Result<()> {
    let service = &state.services.kategori;
    let line = |k: &ticari::entities::kategori::Model| format!("- [{}] {}", k.kategori_id, k.kategori_ad);
    match command {
        KategoriCommands::List => render_list(&service.find_all().await.map_err(user_error)?, json, line),
        KategoriCommands::Get(a) => {
            render_one(service.find_by_id(a.id).await.map_err(user_error)?, json, line)
        }
        KategoriCommands::Ad { ad } => {
            render_one(service.find_by_ad(&ad).await.map_err(user_error)?, json, line)
        }
        KategoriCommands::Create { ad } => {
            let kategori = service
                .create(KategoriGirdisi { kategori_ad: ad })
                .await
                .map_err(user_error)?;
            render_item(&kategori, json, line)
        }
        KategoriCommands::Delete(a) => {
            service.delete(a.id).await.map_err(user_error)?;
            done(json, format!("Category {} deleted", a.id))
        }
    }
}

// ----- urun -----

#[derive(Subcommand)]
enum UrunCommands {
    List,
    Get(IdArg),
    Kategori(IdArg),
    Search(SearchArg),
    /// Products below their minimum stock level
    Kritik,
    Create {
        #[command(flatten)]
        args: UrunArgs,
        #[arg(long, default_value_t = 0)]
        acilis_stogu: i32,
    },
    Update {
        id: i32,
        #[command(flatten)]
        args: UrunArgs,
    },
    Delete(IdArg),
    /// Add a quantity (negative to remove) to the stock on hand
    Stok {
        id: i32,
        #[arg(allow_hyphen_values = true)]
        miktar: i32,
    },
}

#[derive(Args)]
struct UrunArgs {
    #[arg(long)]
    ad: String,
    #[arg(long)]
    kategori: i32,
    #[arg(long, default_value = "0")]
    fiyat: Decimal,
    #[arg(long, default_value_t = 10)]
    minimum: i32,
}

impl From<UrunArgs> for UrunGirdisi {
    fn from(args: UrunArgs) -> Self {
        UrunGirdisi {
            urun_ad: args.ad,
            kategori_id: args.kategori,
            mevcut_satis_fiyati: args.fiyat,
            minimum_stok_seviyesi: args.minimum,
        }
    }
}

async fn handle_urun_command(state: &AppState, command: UrunCommands, json: bool) -> Result<()> {
    let service = &state.services.urun;
    let line = |u: &ticari::entities::UrunModel| {
        format!(
            "- [{}] {} stok {} (min {}) fiyat {}{}",
            u.urun_id,
            u.urun_ad,
            u.mevcut_stok_miktari,
            u.minimum_stok_seviyesi,
            u.mevcut_satis_fiyati,
            if u.kritik_stokta() { " KRITIK" } else { "" }
        )
    };
    match command {
        UrunCommands::List => render_list(&service.find_all().await.map_err(user_error)?, json, line),
        UrunCommands::Get(a) => render_one(service.find_by_id(a.id).await.map_err(user_error)?, json, line),
        UrunCommands::Kategori(a) => {
            render_list(&service.find_by_kategori(a.id).await.map_err(user_error)?, json, line)
        }
        UrunCommands::Search(a) => {
            render_list(&service.search_by_ad(&a.term).await.map_err(user_error)?, json, line)
        }
        UrunCommands::Kritik => {
            render_list(&service.kritik_stoklar().await.map_err(user_error)?, json, line)
        }
        UrunCommands::Create { args, acilis_stogu } => {
            let urun = service.create(args.into(), acilis_stogu).await.map_err(user_error)?;
            render_item(&urun, json, line)
        }
        UrunCommands::Update { id, args } => {
            let urun = service.update(id, args.into()).await.map_err(user_error)?;
            render_item(&urun, json, line)
        }
        UrunCommands::Delete(a) => {
            service.delete(a.id).await.map_err(user_error)?;
            done(json, format!("Product {} deleted", a.id))
        }
        UrunCommands::Stok { id, miktar } => {
            service.stok_guncelle(id, miktar).await.map_err(user_error)?;
            done(json, format!("Product {} stock adjusted by {}", id, miktar))
        }
    }
}

// ----- fatura -----

#[derive(Subcommand)]
enum FaturaCommands {
    List,
    Get(IdArg),
    Cari(IdArg),
    Tur { tur: FaturaTuru },
    No { fatura_no: String },
    Aralik {
        #[command(flatten)]
        range: RangeArgs,
        #[arg(long)]
        tur: Option<FaturaTuru>,
    },
    /// Sales total in a date range
    ToplamSatis(RangeArgs),
    /// Create an invoice, or rewrite it with --id
    Kaydet(FaturaArgs),
    Sil(IdArg),
}

#[derive(Args)]
struct FaturaArgs {
    #[arg(long)]
    id: Option<i32>,
    #[arg(long)]
    cari: i32,
    #[arg(long)]
    tur: FaturaTuru,
    #[arg(long)]
    no: Option<String>,
    #[arg(long)]
    aciklama: Option<String>,
    #[arg(long)]
    para_birimi: Option<String>,
    #[arg(long)]
    kur: Option<Decimal>,
    #[arg(long)]
    kdv: Option<u32>,
    #[arg(long, help = "Override the computed grand total")]
    toplam: Option<Decimal>,
    #[arg(long = "satir", value_parser = parse_fatura_satiri, help = "Product line urun_id:miktar[:birim_fiyat]")]
    satirlar: Vec<FaturaSatiri>,
    #[arg(long = "hizmet", value_parser = parse_hizmet_satiri, help = "Service line hizmet_id:tutar")]
    hizmetler: Vec<HizmetSatiri>,
}

fn parse_fatura_satiri(value: &str) -> Result<FaturaSatiri, String> {
    let parts: Vec<&str> = value.split(':').collect();
    let (urun, miktar, fiyat) = match parts.as_slice() {
        [urun, miktar] => (urun, miktar, None),
        [urun, miktar, fiyat] => (urun, miktar, Some(fiyat)),
        _ => return Err(format!("expected urun_id:miktar[:birim_fiyat], got {}", value)),
    };
    Ok(FaturaSatiri {
        hareket_id: None,
        urun_id: urun.parse().map_err(|e| format!("urun_id: {}", e))?,
        miktar: miktar.parse().map_err(|e| format!("miktar: {}", e))?,
        birim_fiyat: fiyat
            .map(|f| Decimal::from_str(f).map_err(|e| format!("birim_fiyat: {}", e)))
            .transpose()?,
        islem_turu: None,
        siparis_id: None,
    })
}

fn parse_hizmet_satiri(value: &str) -> Result<HizmetSatiri, String> {
    let (hizmet, tutar) = value
        .split_once(':')
        .ok_or_else(|| format!("expected hizmet_id:tutar, got {}", value))?;
    Ok(HizmetSatiri {
        hizmet_id: hizmet.parse().map_err(|e| format!("hizmet_id: {}", e))?,
        aciklama: None,
        tutar: Decimal::from_str(tutar).map_err(|e| format!("tutar: {}", e))?,
    })
}

async fn handle_fatura_command(state: &AppState, command: FaturaCommands, json: bool) -> Result<()> {
    let service = &state.services.fatura;
    let line = |f: &ticari::entities::FaturaModel| {
        format!(
            "- [{}] {} {} cari {} toplam {} {}",
            f.fatura_id,
            f.fatura_no,
            f.tur,
            f.cari_id,
            f.genel_toplam,
            f.para_birimi.as_deref().unwrap_or("")
        )
    };
    match command {
        FaturaCommands::List => render_list(&service.find_all().await.map_err(user_error)?, json, line),
        FaturaCommands::Get(a) => {
            let detay = service.detay(a.id).await.map_err(user_error)?;
            match detay {
                Some(d) if json => print_json(&d),
                Some(d) => {
                    println!("{}", line(&d.fatura));
                    for s in &d.stok_hareketleri {
                        println!(
                            "    urun {} {} x{} @ {}",
                            s.urun_id, s.islem_turu, s.miktar, s.birim_fiyat
                        );
                    }
                    for h in &d.hizmet_kalemleri {
                        println!("    hizmet {} {}", h.hizmet_id, h.tutar);
                    }
                    Ok(())
                }
                None => bail!("Invoice {} not found", a.id),
            }
        }
        FaturaCommands::Cari(a) => {
            render_list(&service.find_by_cari(a.id).await.map_err(user_error)?, json, line)
        }
        FaturaCommands::Tur { tur } => {
            render_list(&service.find_by_tur(tur).await.map_err(user_error)?, json, line)
        }
        FaturaCommands::No { fatura_no } => render_one(
            service.find_by_fatura_no(&fatura_no).await.map_err(user_error)?,
            json,
            line,
        ),
        FaturaCommands::Aralik { range, tur } => {
            let (from, to) = range.bounds();
            let faturalar: Vec<_> = service
                .find_by_tarih_araligi(from, to)
                .await
                .map_err(user_error)?
                .into_iter()
                .filter(|f| tur.map_or(true, |t| f.tur == t))
                .collect();
            render_list(&faturalar, json, line)
        }
        FaturaCommands::ToplamSatis(range) => {
            let (from, to) = range.bounds();
            let toplam = service.toplam_satis(from, to).await.map_err(user_error)?;
            if json {
                print_json(&serde_json::json!({ "toplam_satis": toplam }))
            } else {
                println!("Sales total {} .. {}: {}", range.from, range.to, toplam);
                Ok(())
            }
        }
        FaturaCommands::Kaydet(args) => {
            let mut girdi = FaturaGirdisi::new(args.cari, args.tur);
            girdi.fatura_id = args.id;
            girdi.fatura_no = args.no;
            girdi.aciklama = args.aciklama;
            girdi.para_birimi = args.para_birimi;
            girdi.kur = args.kur;
            girdi.kdv_orani = args.kdv;
            girdi.genel_toplam = args.toplam;
            girdi.satirlar = args.satirlar;
            girdi.hizmetler = args.hizmetler;
            let detay = service.kaydet(girdi).await.map_err(user_error)?;
            render_item(&detay, json, |d| line(&d.fatura))
        }
        FaturaCommands::Sil(a) => {
            service.sil(a.id).await.map_err(user_error)?;
            done(json, format!("Invoice {} deleted", a.id))
        }
    }
}

// ----- stok -----

#[derive(Subcommand)]
enum StokCommands {
    List,
    Get(IdArg),
    Fatura(IdArg),
    Urun(IdArg),
    Tur { tur: StokIslemTuru },
    Aralik(RangeArgs),
    /// Record a movement on an existing invoice, or rewrite it with --id
    Kaydet(StokArgs),
    Sil(IdArg),
}

#[derive(Args)]
struct StokArgs {
    #[arg(long)]
    id: Option<i32>,
    #[arg(long)]
    fatura: i32,
    #[arg(long)]
    urun: i32,
    #[arg(long)]
    siparis: Option<i32>,
    #[arg(long)]
    tur: StokIslemTuru,
    #[arg(long)]
    miktar: i32,
    #[arg(long)]
    fiyat: Decimal,
}

async fn handle_stok_command(state: &AppState, command: StokCommands, json: bool) -> Result<()> {
    let service = &state.services.stok;
    let line = |s: &ticari::entities::StokGirisCikisModel| {
        format!(
            "- [{}] fatura {} urun {} {} x{} @ {} ({})",
            s.hareket_id, s.fatura_id, s.urun_id, s.islem_turu, s.miktar, s.birim_fiyat, s.tarih
        )
    };
    match command {
        StokCommands::List => render_list(&service.find_all().await.map_err(user_error)?, json, line),
        StokCommands::Get(a) => render_one(service.find_by_id(a.id).await.map_err(user_error)?, json, line),
        StokCommands::Fatura(a) => {
            render_list(&service.find_by_fatura(a.id).await.map_err(user_error)?, json, line)
        }
        StokCommands::Urun(a) => {
            render_list(&service.find_by_urun(a.id).await.map_err(user_error)?, json, line)
        }
        StokCommands::Tur { tur } => {
            render_list(&service.find_by_islem_turu(tur).await.map_err(user_error)?, json, line)
        }
        StokCommands::Aralik(range) => {
            let (from, to) = range.bounds();
            render_list(
                &service.find_by_tarih_araligi(from, to).await.map_err(user_error)?,
                json,
                line,
            )
        }
        StokCommands::Kaydet(args) => {
            let hareket = service
                .kaydet(StokHareketiGirdisi {
                    hareket_id: args.id,
                    fatura_id: args.fatura,
                    urun_id: args.urun,
                    siparis_id: args.siparis,
                    islem_turu: args.tur,
                    miktar: args.miktar,
                    birim_fiyat: args.fiyat,
                    tarih: None,
                    para_birimi: None,
                    kur: None,
                })
                .await
                .map_err(user_error)?;
            render_item(&hareket, json, line)
        }
        StokCommands::Sil(a) => {
            service.sil(a.id).await.map_err(user_error)?;
            done(json, format!("Stock movement {} deleted", a.id))
        }
    }
}

// ----- kasa -----

#[derive(Subcommand)]
enum KasaCommands {
    List,
    Get(IdArg),
    Tur { tur: HesapTuru },
    Search(SearchArg),
    /// Sum of all account balances
    Toplam,
    Create {
        #[arg(long)]
        ad: String,
        #[arg(long)]
        tur: HesapTuru,
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        acilis: Decimal,
    },
    Update {
        id: i32,
        #[arg(long)]
        ad: String,
        #[arg(long)]
        tur: HesapTuru,
    },
    Delete(IdArg),
    Bakiye(AmountArgs),
}

async fn handle_kasa_command(state: &AppState, command: KasaCommands, json: bool) -> Result<()> {
    let service = &state.services.kasa_banka;
    let line = |h: &ticari::entities::KasaBankaModel| {
        format!("- [{}] {} ({}) bakiye {}", h.hesap_id, h.hesap_adi, h.tur, h.bakiye)
    };
    match command {
        KasaCommands::List => render_list(&service.find_all().await.map_err(user_error)?, json, line),
        KasaCommands::Get(a) => render_one(service.find_by_id(a.id).await.map_err(user_error)?, json, line),
        KasaCommands::Tur { tur } => {
            render_list(&service.find_by_tur(tur).await.map_err(user_error)?, json, line)
        }
        KasaCommands::Search(a) => {
            render_list(&service.search_by_ad(&a.term).await.map_err(user_error)?, json, line)
        }
        KasaCommands::Toplam => {
            let toplam = service.toplam_bakiye().await.map_err(user_error)?;
            if json {
                print_json(&serde_json::json!({ "toplam_bakiye": toplam }))
            } else {
                println!("Total balance: {}", toplam);
                Ok(())
            }
        }
        KasaCommands::Create { ad, tur, acilis } => {
            let hesap = service
                .create(HesapGirdisi { hesap_adi: ad, tur }, acilis)
                .await
                .map_err(user_error)?;
            render_item(&hesap, json, line)
        }
        KasaCommands::Update { id, ad, tur } => {
            let hesap = service
                .update(id, HesapGirdisi { hesap_adi: ad, tur })
                .await
                .map_err(user_error)?;
            render_item(&hesap, json, line)
        }
        KasaCommands::Delete(a) => {
            service.delete(a.id).await.map_err(user_error)?;
            done(json, format!("Account {} deleted", a.id))
        }
        KasaCommands::Bakiye(a) => {
            service.bakiye_guncelle(a.id, a.tutar).await.map_err(user_error)?;
            done(json, format!("Account {} balance adjusted by {}", a.id, a.tutar))
        }
    }
}

// ----- finans -----

#[derive(Subcommand)]
enum FinansCommands {
    List,
    Get(IdArg),
    Hesap(IdArg),
    Cari(IdArg),
    Tur { tur: FinansIslemTuru },
    Aralik(RangeArgs),
    /// Record a collection, payment or salary, or rewrite it with --id
    Kaydet(FinansArgs),
    Sil(IdArg),
}

#[derive(Args)]
struct FinansArgs {
    #[arg(long)]
    id: Option<i32>,
    #[arg(long)]
    tur: FinansIslemTuru,
    #[arg(long)]
    tutar: Decimal,
    #[arg(long)]
    hesap: Option<i32>,
    #[arg(long)]
    cari: Option<i32>,
    #[arg(long)]
    personel: Option<i32>,
    #[arg(long)]
    evrak: Option<i32>,
    #[arg(long)]
    para_birimi: Option<String>,
    #[arg(long)]
    kur: Option<Decimal>,
}

async fn handle_finans_command(state: &AppState, command: FinansCommands, json: bool) -> Result<()> {
    let service = &state.services.finans;
    let line = |f: &ticari::entities::FinansHareketiModel| {
        format!(
            "- [{}] {} {} hesap {:?} cari {:?} ({})",
            f.hareket_id, f.islem_turu, f.tutar, f.hesap_id, f.cari_id, f.tarih
        )
    };
    match command {
        FinansCommands::List => render_list(&service.find_all().await.map_err(user_error)?, json, line),
        FinansCommands::Get(a) => {
            render_one(service.find_by_id(a.id).await.map_err(user_error)?, json, line)
        }
        FinansCommands::Hesap(a) => {
            render_list(&service.find_by_hesap(a.id).await.map_err(user_error)?, json, line)
        }
        FinansCommands::Cari(a) => {
            render_list(&service.find_by_cari(a.id).await.map_err(user_error)?, json, line)
        }
        FinansCommands::Tur { tur } => {
            render_list(&service.find_by_islem_turu(tur).await.map_err(user_error)?, json, line)
        }
        FinansCommands::Aralik(range) => {
            let (from, to) = range.bounds();
            render_list(
                &service.find_by_tarih_araligi(from, to).await.map_err(user_error)?,
                json,
                line,
            )
        }
        FinansCommands::Kaydet(args) => {
            let mut girdi = FinansGirdisi::new(args.tur, args.tutar);
            girdi.hareket_id = args.id;
            girdi.hesap_id = args.hesap;
            girdi.cari_id = args.cari;
            girdi.personel_id = args.personel;
            girdi.evrak_id = args.evrak;
            girdi.para_birimi = args.para_birimi;
            girdi.kur = args.kur;
            let hareket = service.kaydet(girdi).await.map_err(user_error)?;
            render_item(&hareket, json, line)
        }
        FinansCommands::Sil(a) => {
            service.sil(a.id).await.map_err(user_error)?;
            done(json, format!("Financial movement {} deleted", a.id))
        }
    }
}

// ----- teklif -----

#[derive(Subcommand)]
enum TeklifCommands {
    List,
    Get(IdArg),
    Cari(IdArg),
    Durum { durum: TeklifDurumu },
    Aralik(RangeArgs),
    Kaydet(TeklifArgs),
    /// Change the status of a quote
    DurumGuncelle { id: i32, durum: TeklifDurumu },
    /// Convert an approved quote into an order
    Siparis(IdArg),
    Sil(IdArg),
}

#[derive(Args)]
struct TeklifArgs {
    #[arg(long)]
    id: Option<i32>,
    #[arg(long)]
    cari: i32,
    #[arg(long, help = "Valid until, YYYY-MM-DD")]
    gecerlilik: Option<NaiveDate>,
    #[arg(long)]
    durum: Option<TeklifDurumu>,
    #[arg(long = "satir", value_parser = parse_teklif_satiri, help = "Quote line urun_id:miktar:birim_fiyat")]
    satirlar: Vec<TeklifSatiri>,
}

fn parse_teklif_satiri(value: &str) -> Result<TeklifSatiri, String> {
    let parts: Vec<&str> = value.split(':').collect();
    let [urun, miktar, fiyat] = parts.as_slice() else {
        return Err(format!("expected urun_id:miktar:birim_fiyat, got {}", value));
    };
    Ok(TeklifSatiri {
        urun_id: urun.parse().map_err(|e| format!("urun_id: {}", e))?,
        miktar: miktar.parse().map_err(|e| format!("miktar: {}", e))?,
        birim_fiyat: Decimal::from_str(fiyat).map_err(|e| format!("birim_fiyat: {}", e))?,
    })
}

async fn handle_teklif_command(state: &AppState, command: TeklifCommands, json: bool) -> Result<()> {
    let service = &state.services.teklif;
    let line = |t: &ticari::entities::TeklifModel| {
        format!(
            "- [{}] cari {} {} toplam {} ({})",
            t.teklif_id, t.cari_id, t.durum, t.toplam_tutar, t.teklif_tarihi
        )
    };
    match command {
        TeklifCommands::List => render_list(&service.find_all().await.map_err(user_error)?, json, line),
        TeklifCommands::Get(a) => {
            let teklif = service
                .find_by_id(a.id)
                .await
                .map_err(user_error)?
                .ok_or_else(|| anyhow!("Quote {} not found", a.id))?;
            let detaylar = service.detaylar(a.id).await.map_err(user_error)?;
            if json {
                print_json(&serde_json::json!({ "teklif": teklif, "detaylar": detaylar }))
            } else {
                println!("{}", line(&teklif));
                for d in &detaylar {
                    println!("    urun {} x{} @ {}", d.urun_id, d.miktar, d.birim_fiyat);
                }
                Ok(())
            }
        }
        TeklifCommands::Cari(a) => {
            render_list(&service.find_by_cari(a.id).await.map_err(user_error)?, json, line)
        }
        TeklifCommands::Durum { durum } => {
            render_list(&service.find_by_durum(durum).await.map_err(user_error)?, json, line)
        }
        TeklifCommands::Aralik(range) => {
            let (from, to) = range.bounds();
            render_list(
                &service.find_by_tarih_araligi(from, to).await.map_err(user_error)?,
                json,
                line,
            )
        }
        TeklifCommands::Kaydet(args) => {
            let detay = service
                .kaydet(TeklifGirdisi {
                    teklif_id: args.id,
                    cari_id: args.cari,
                    teklif_tarihi: None,
                    gecerlilik_tarihi: args.gecerlilik,
                    durum: args.durum,
                    satirlar: args.satirlar,
                })
                .await
                .map_err(user_error)?;
            render_item(&detay, json, |d| line(&d.teklif))
        }
        TeklifCommands::DurumGuncelle { id, durum } => {
            let teklif = service.durum_guncelle(id, durum).await.map_err(user_error)?;
            render_item(&teklif, json, line)
        }
        TeklifCommands::Siparis(a) => {
            let siparis = service.siparise_donustur(a.id).await.map_err(user_error)?;
            render_item(&siparis, json, siparis_line)
        }
        TeklifCommands::Sil(a) => {
            service.sil(a.id).await.map_err(user_error)?;
            done(json, format!("Quote {} deleted", a.id))
        }
    }
}

// ----- siparis -----

#[derive(Subcommand)]
enum SiparisCommands {
    List,
    Get(IdArg),
    Cari(IdArg),
    Durum { durum: SiparisDurumu },
    Aralik(RangeArgs),
    Olustur {
        #[arg(long)]
        cari: i32,
        #[arg(long)]
        teklif: Option<i32>,
    },
    DurumGuncelle { id: i32, durum: SiparisDurumu },
    Sil(IdArg),
}

fn siparis_line(s: &ticari::entities::SiparisModel) -> String {
    format!(
        "- [{}] cari {} teklif {:?} {} ({})",
        s.siparis_id, s.cari_id, s.teklif_id, s.durum, s.siparis_tarihi
    )
}

async fn handle_siparis_command(
    state: &AppState,
    command: SiparisCommands,
    json: bool,
) -> Result<()> {
    let service = &state.services.siparis;
    match command {
        SiparisCommands::List => {
            render_list(&service.find_all().await.map_err(user_error)?, json, siparis_line)
        }
        SiparisCommands::Get(a) => render_one(
            service.find_by_id(a.id).await.map_err(user_error)?,
            json,
            siparis_line,
        ),
        SiparisCommands::Cari(a) => render_list(
            &service.find_by_cari(a.id).await.map_err(user_error)?,
            json,
            siparis_line,
        ),
        SiparisCommands::Durum { durum } => render_list(
            &service.find_by_durum(durum).await.map_err(user_error)?,
            json,
            siparis_line,
        ),
        SiparisCommands::Aralik(range) => {
            let (from, to) = range.bounds();
            render_list(
                &service.find_by_tarih_araligi(from, to).await.map_err(user_error)?,
                json,
                siparis_line,
            )
        }
        SiparisCommands::Olustur { cari, teklif } => {
            let siparis = service.olustur(cari, teklif).await.map_err(user_error)?;
            render_item(&siparis, json, siparis_line)
        }
        SiparisCommands::DurumGuncelle { id, durum } => {
            let siparis = service.durum_guncelle(id, durum).await.map_err(user_error)?;
            render_item(&siparis, json, siparis_line)
        }
        SiparisCommands::Sil(a) => {
            service.sil(a.id).await.map_err(user_error)?;
            done(json, format!("Order {} deleted", a.id))
        }
    }
}

// ----- cek -----

#[derive(Subcommand)]
enum CekCommands {
    List,
    Get(IdArg),
    Tur { tur: CekSenetTuru },
    Yon { yon: CekSenetYonu },
    Durum { durum: CekSenetDurumu },
    /// Documents falling due in a date range
    Vade(RangeArgs),
    Kaydet(CekArgs),
    DurumGuncelle { id: i32, durum: CekSenetDurumu },
    Sil(IdArg),
}

#[derive(Args)]
struct CekArgs {
    #[arg(long)]
    id: Option<i32>,
    #[arg(long)]
    cari: Option<i32>,
    #[arg(long)]
    tur: CekSenetTuru,
    #[arg(long)]
    yon: CekSenetYonu,
    #[arg(long)]
    vade: NaiveDate,
    #[arg(long)]
    tutar: Decimal,
    #[arg(long)]
    durum: Option<CekSenetDurumu>,
    #[arg(long)]
    banka: Option<String>,
}

async fn handle_cek_command(state: &AppState, command: CekCommands, json: bool) -> Result<()> {
    let service = &state.services.cek_senet;
    let line = |c: &ticari::entities::CekSenetModel| {
        format!(
            "- [{}] {} {} {} vade {} {}",
            c.evrak_id, c.tur, c.yon, c.tutar, c.vade_tarihi, c.durum
        )
    };
    match command {
        CekCommands::List => render_list(&service.find_all().await.map_err(user_error)?, json, line),
        CekCommands::Get(a) => render_one(service.find_by_id(a.id).await.map_err(user_error)?, json, line),
        CekCommands::Tur { tur } => {
            render_list(&service.find_by_tur(tur).await.map_err(user_error)?, json, line)
        }
        CekCommands::Yon { yon } => {
            render_list(&service.find_by_yon(yon).await.map_err(user_error)?, json, line)
        }
        CekCommands::Durum { durum } => {
            render_list(&service.find_by_durum(durum).await.map_err(user_error)?, json, line)
        }
        CekCommands::Vade(range) => render_list(
            &service
                .find_by_vade_araligi(range.from, range.to)
                .await
                .map_err(user_error)?,
            json,
            line,
        ),
        CekCommands::Kaydet(args) => {
            let evrak = service
                .kaydet(CekSenetGirdisi {
                    evrak_id: args.id,
                    cari_id: args.cari,
                    tur: args.tur,
                    yon: args.yon,
                    vade_tarihi: args.vade,
                    tutar: args.tutar,
                    durum: args.durum,
                    banka_adi: args.banka,
                })
                .await
                .map_err(user_error)?;
            render_item(&evrak, json, line)
        }
        CekCommands::DurumGuncelle { id, durum } => {
            let evrak = service.durum_guncelle(id, durum).await.map_err(user_error)?;
            render_item(&evrak, json, line)
        }
        CekCommands::Sil(a) => {
            service.sil(a.id).await.map_err(user_error)?;
            done(json, format!("Check/note {} deleted", a.id))
        }
    }
}

// ----- para -----

#[derive(Subcommand)]
enum ParaCommands {
    List,
    Get { kod: String },
    Create {
        kod: String,
        #[arg(long)]
        aciklama: Option<String>,
        #[arg(long)]
        sembol: Option<String>,
    },
    Delete { kod: String },
    /// Record an exchange rate
    KurEkle {
        kod: String,
        #[arg(long)]
        tarih: NaiveDate,
        #[arg(long)]
        kur: Decimal,
        #[arg(long)]
        kaynak: Option<String>,
    },
    /// Rate history of a currency, newest first
    Kurlar { kod: String },
    /// Rate of a currency on one day
    Kur {
        kod: String,
        #[arg(long)]
        tarih: NaiveDate,
    },
    /// All rates recorded in a date range
    KurAralik(RangeArgs),
    /// Most recent rate of a currency
    GuncelKur { kod: String },
}

async fn handle_para_command(state: &AppState, command: ParaCommands, json: bool) -> Result<()> {
    let service = &state.services.para_birimi;
    let para_line = |p: &ticari::entities::para_birimi::Model| {
        format!(
            "- {} {} {}",
            p.para_kod,
            p.sembol.as_deref().unwrap_or(""),
            p.aciklama.as_deref().unwrap_or("")
        )
    };
    let kur_line = |k: &ticari::entities::kur::Model| {
        format!("- {} {} {} ({})", k.para_kod, k.kur_tarihi, k.kur, k.kaynak)
    };
    match command {
        ParaCommands::List => render_list(&service.find_all().await.map_err(user_error)?, json, para_line),
        ParaCommands::Get { kod } => {
            render_one(service.find_by_kod(&kod).await.map_err(user_error)?, json, para_line)
        }
        ParaCommands::Create {
            kod,
            aciklama,
            sembol,
        } => {
            let para = service
                .create(ParaBirimiGirdisi {
                    para_kod: kod,
                    aciklama,
                    sembol,
                })
                .await
                .map_err(user_error)?;
            render_item(&para, json, para_line)
        }
        ParaCommands::Delete { kod } => {
            service.delete(&kod).await.map_err(user_error)?;
            done(json, format!("Currency {} deleted", kod))
        }
        ParaCommands::KurEkle {
            kod,
            tarih,
            kur,
            kaynak,
        } => {
            let kayit = service
                .kur_ekle(KurGirdisi {
                    para_kod: kod,
                    kur_tarihi: tarih,
                    kur,
                    kaynak,
                })
                .await
                .map_err(user_error)?;
            render_item(&kayit, json, kur_line)
        }
        ParaCommands::Kurlar { kod } => {
            render_list(&service.kur_gecmisi(&kod).await.map_err(user_error)?, json, kur_line)
        }
        ParaCommands::Kur { kod, tarih } => {
            render_one(service.kur_bul(&kod, tarih).await.map_err(user_error)?, json, kur_line)
        }
        ParaCommands::KurAralik(range) => render_list(
            &service
                .find_kurlar_arasinda(range.from, range.to)
                .await
                .map_err(user_error)?,
            json,
            kur_line,
        ),
        ParaCommands::GuncelKur { kod } => {
            render_one(service.guncel_kur(&kod).await.map_err(user_error)?, json, kur_line)
        }
    }
}

// ----- hizmet -----

#[derive(Subcommand)]
enum HizmetCommands {
    List,
    Get(IdArg),
    Tur { tur: HizmetTuru },
    Search(SearchArg),
    Create {
        #[arg(long)]
        ad: String,
        #[arg(long)]
        tur: Option<HizmetTuru>,
        #[arg(long, default_value_t = 20)]
        kdv: i32,
    },
    Delete(IdArg),
}

async fn handle_hizmet_command(state: &AppState, command: HizmetCommands, json: bool) -> Result<()> {
    let service = &state.services.hizmet;
    let line = |h: &ticari::entities::hizmet::Model| {
        format!(
            "- [{}] {} {} KDV %{}",
            h.hizmet_id,
            h.hizmet_ad,
            h.tur.map(|t| t.to_string()).unwrap_or_default(),
            h.kdv_orani
        )
    };
    match command {
        HizmetCommands::List => render_list(&service.find_all().await.map_err(user_error)?, json, line),
        HizmetCommands::Get(a) => {
            render_one(service.find_by_id(a.id).await.map_err(user_error)?, json, line)
        }
        HizmetCommands::Tur { tur } => {
            render_list(&service.find_by_tur(tur).await.map_err(user_error)?, json, line)
        }
        HizmetCommands::Search(a) => {
            render_list(&service.search_by_ad(&a.term).await.map_err(user_error)?, json, line)
        }
        HizmetCommands::Create { ad, tur, kdv } => {
            let hizmet = service
                .create(HizmetGirdisi {
                    hizmet_ad: ad,
                    tur,
                    kdv_orani: kdv,
                })
                .await
                .map_err(user_error)?;
            render_item(&hizmet, json, line)
        }
        HizmetCommands::Delete(a) => {
            service.delete(a.id).await.map_err(user_error)?;
            done(json, format!("Service item {} deleted", a.id))
        }
    }
}

// ----- personel -----

#[derive(Subcommand)]
enum PersonelCommands {
    List,
    Get(IdArg),
    Aktif {
        #[arg(long, action = ArgAction::SetTrue, help = "List former employees instead")]
        pasif: bool,
    },
    Gorev { gorev: String },
    Search(SearchArg),
    Create(PersonelArgs),
    Update {
        id: i32,
        #[command(flatten)]
        args: PersonelArgs,
    },
    /// Mark an employee as no longer active
    IstenCikar(IdArg),
    Delete(IdArg),
}

#[derive(Args)]
struct PersonelArgs {
    #[arg(long)]
    ad: String,
    #[arg(long)]
    gorev: Option<String>,
    #[arg(long)]
    maas: Option<Decimal>,
    #[arg(long, help = "Start date, YYYY-MM-DD")]
    giris: Option<NaiveDate>,
}

impl From<PersonelArgs> for PersonelGirdisi {
    fn from(args: PersonelArgs) -> Self {
        PersonelGirdisi {
            ad_soyad: args.ad,
            gorev: args.gorev,
            maas: args.maas,
            ise_giris_tarihi: args.giris,
        }
    }
}

async fn handle_personel_command(
    state: &AppState,
    command: PersonelCommands,
    json: bool,
) -> Result<()> {
    let service = &state.services.personel;
    let line = |p: &ticari::entities::personel::Model| {
        format!(
            "- [{}] {} {}{}",
            p.personel_id,
            p.ad_soyad,
            p.gorev.as_deref().unwrap_or(""),
            if p.aktif_mi { "" } else { " (ayrildi)" }
        )
    };
    match command {
        PersonelCommands::List => render_list(&service.find_all().await.map_err(user_error)?, json, line),
        PersonelCommands::Get(a) => {
            render_one(service.find_by_id(a.id).await.map_err(user_error)?, json, line)
        }
        PersonelCommands::Aktif { pasif } => {
            render_list(&service.find_by_aktif(!pasif).await.map_err(user_error)?, json, line)
        }
        PersonelCommands::Gorev { gorev } => {
            render_list(&service.find_by_gorev(&gorev).await.map_err(user_error)?, json, line)
        }
        PersonelCommands::Search(a) => {
            render_list(&service.search_by_ad(&a.term).await.map_err(user_error)?, json, line)
        }
        PersonelCommands::Create(args) => {
            let personel = service.create(args.into()).await.map_err(user_error)?;
            render_item(&personel, json, line)
        }
        PersonelCommands::Update { id, args } => {
            let personel = service.update(id, args.into()).await.map_err(user_error)?;
            render_item(&personel, json, line)
        }
        PersonelCommands::IstenCikar(a) => {
            let personel = service.isten_cikar(a.id).await.map_err(user_error)?;
            render_item(&personel, json, line)
        }
        PersonelCommands::Delete(a) => {
            service.delete(a.id).await.map_err(user_error)?;
            done(json, format!("Employee {} deleted", a.id))
        }
    }
}

// ----- atik -----

#[derive(Subcommand)]
enum AtikCommands {
    List,
    Urun(IdArg),
    Aralik(RangeArgs),
    Nedenler,
    NedenEkle { aciklama: String },
    Kaydet {
        #[arg(long)]
        urun: i32,
        #[arg(long)]
        miktar: i32,
        #[arg(long)]
        neden: Option<i32>,
    },
    Delete(IdArg),
}

async fn handle_atik_command(state: &AppState, command: AtikCommands, json: bool) -> Result<()> {
    let service = &state.services.atik;
    let line = |a: &ticari::entities::atik::Model| {
        format!(
            "- [{}] urun {} x{} neden {:?} ({})",
            a.atik_id, a.urun_id, a.miktar, a.neden_id, a.tarih
        )
    };
    let neden_line =
        |n: &ticari::entities::atik_nedeni::Model| format!("- [{}] {}", n.neden_id, n.aciklama);
    match command {
        AtikCommands::List => render_list(&service.find_all().await.map_err(user_error)?, json, line),
        AtikCommands::Urun(a) => {
            render_list(&service.find_by_urun(a.id).await.map_err(user_error)?, json, line)
        }
        AtikCommands::Aralik(range) => {
            let (from, to) = range.bounds();
            render_list(
                &service.find_by_tarih_araligi(from, to).await.map_err(user_error)?,
                json,
                line,
            )
        }
        AtikCommands::Nedenler => {
            render_list(&service.nedenler().await.map_err(user_error)?, json, neden_line)
        }
        AtikCommands::NedenEkle { aciklama } => {
            let neden = service
                .neden_ekle(AtikNedeniGirdisi { aciklama })
                .await
                .map_err(user_error)?;
            render_item(&neden, json, neden_line)
        }
        AtikCommands::Kaydet { urun, miktar, neden } => {
            let atik = service
                .kaydet(AtikGirdisi {
                    urun_id: urun,
                    neden_id: neden,
                    miktar,
                    tarih: None,
                })
                .await
                .map_err(user_error)?;
            render_item(&atik, json, line)
        }
        AtikCommands::Delete(a) => {
            service.delete(a.id).await.map_err(user_error)?;
            done(json, format!("Waste record {} deleted", a.id))
        }
    }
}

// ----- dashboard -----

#[derive(Args)]
struct DashboardArgs {
    #[arg(long, help = "Period start, YYYY-MM-DD; defaults to the first day of this month")]
    from: Option<NaiveDate>,
    #[arg(long, help = "Period end, YYYY-MM-DD; defaults to today")]
    to: Option<NaiveDate>,
}

async fn handle_dashboard(state: &AppState, args: DashboardArgs, json: bool) -> Result<()> {
    let today = Utc::now().date_naive();
    let from = args
        .from
        .or_else(|| today.with_day(1))
        .unwrap_or(today);
    let range = RangeArgs {
        from,
        to: args.to.unwrap_or(today),
    };
    let (start, end) = range.bounds();

    let ozet = state
        .services
        .dashboard
        .ozet(start, end)
        .await
        .map_err(user_error)?;

    if json {
        return print_json(&ozet);
    }
    println!("Period {} .. {}", range.from, range.to);
    println!("  Cash and bank total : {}", ozet.toplam_kasa);
    println!("  Receivables         : {}", ozet.toplam_alacak);
    println!("  Payables            : {}", ozet.toplam_borc);
    println!("  Stock value         : {}", ozet.stok.stok_degeri);
    println!("  Sales in period     : {}", ozet.donem_satis_toplami);
    println!("  Purchases in period : {}", ozet.donem_alis_toplami);
    println!("  Critical stock      : {}", ozet.stok.kritik_stok_sayisi);
    for urun in &ozet.stok.kritik_stoklar {
        println!(
            "    - {} ({} < {})",
            urun.urun_ad, urun.mevcut_stok_miktari, urun.minimum_stok_seviyesi
        );
    }
    Ok(())
}

// ----- bootstrap / migrate -----

async fn handle_bootstrap(config: &AppConfig, args: BootstrapArgs, json: bool) -> Result<()> {
    let result = bootstrap::run_configured(&config.bootstrap, args.install).await;
    if json {
        print_json(&result)?;
    } else if result.success {
        println!(
            "Bootstrap complete; connect with {}",
            result.connection_url.as_deref().unwrap_or("-")
        );
    }
    if !result.success {
        bail!(
            "bootstrap failed: {}",
            result.error_message.as_deref().unwrap_or("unknown error")
        );
    }
    Ok(())
}

async fn handle_migrate(mut config: AppConfig) -> Result<()> {
    // startup applies pending migrations, after the bootstrap when one is configured
    config.auto_migrate = true;
    AppState::start(config)
        .await
        .map_err(|e| anyhow!(e.to_string()))
        .context("failed to apply migrations")?;
    println!("Migrations applied");
    Ok(())
}

// ----- rendering -----

fn user_error(err: ticari::errors::ServiceError) -> anyhow::Error {
    anyhow!(err.user_message())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn render_list<T: Serialize>(items: &[T], json: bool, line: impl Fn(&T) -> String) -> Result<()> {
    if json {
        return print_json(&items);
    }
    if items.is_empty() {
        println!("No records");
    }
    for item in items {
        println!("{}", line(item));
    }
    Ok(())
}

fn render_item<T: Serialize>(item: &T, json: bool, line: impl Fn(&T) -> String) -> Result<()> {
    if json {
        print_json(item)
    } else {
        println!("{}", line(item));
        Ok(())
    }
}

fn render_one<T: Serialize>(item: Option<T>, json: bool, line: impl Fn(&T) -> String) -> Result<()> {
    match item {
        Some(item) => render_item(&item, json, line),
        None if json => print_json(&serde_json::Value::Null),
        None => bail!("Not found"),
    }
}

fn done(json: bool, message: String) -> Result<()> {
    if json {
        print_json(&serde_json::json!({ "ok": true, "message": message }))
    } else {
        println!("{}", message);
        Ok(())
    }
}
