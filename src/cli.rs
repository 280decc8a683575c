// src/cli.rs
use std::io;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::config::consts::*;
use crate::config::options::{
    parse_cookie_pair, CrawlOptions, DashboardOptions, DataOptions, ExportFormat, ExportOptions, ProfileRange,
};
use crate::data::{CountrySelection, DataSet};
use crate::error::Result;
use crate::log::{self as applog, LogTarget};
use crate::progress::LogProgress;
use crate::{file, report, scrape};

#[derive(Parser, Debug)]
#[command(name = "market_lens", version, about = "Crawl an onion market and report on its offers and vendors")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Walk home → vendor profiles → offer pages and save offers.csv / vendors.csv
    Crawl(CrawlArgs),
    /// Print every dashboard chapter as text
    Report(ReportArgs),
    /// Write the offer or vendor table (filtered) to CSV/TSV
    Export(ExportArgs),
}

#[derive(Args, Debug)]
pub struct CrawlArgs {
    /// Market home page
    #[arg(long, env = ENV_URL)]
    pub url: String,
    /// SOCKS proxy; "none" connects directly
    #[arg(long, env = ENV_PROXY, default_value = DEFAULT_PROXY)]
    pub proxy: String,
    /// Session cookies as `name=value; name2=value2`
    #[arg(long, env = ENV_COOKIES)]
    pub cookies: Option<String>,
    /// One cookie `name=value` (repeatable)
    #[arg(long = "cookie")]
    pub cookie: Vec<String>,
    #[arg(long, env = ENV_USER_AGENT, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,
    /// Pause between requests
    #[arg(long, env = ENV_PAUSE_MS, default_value_t = REQUEST_PAUSE_MS)]
    pub pause_ms: u64,
    /// Profile links to skip from the top of the home page
    #[arg(long, default_value_t = 0)]
    pub skip: usize,
    /// Profile links to crawl after skipping
    #[arg(long)]
    pub limit: Option<usize>,
    /// Output directory for offers.csv / vendors.csv
    #[arg(short, long, default_value = DEFAULT_DATA_DIR)]
    pub out: PathBuf,
    /// Print (title, price) pairs to stdout
    #[arg(long)]
    pub print: bool,
}

#[derive(Args, Debug)]
pub struct DataArgs {
    /// Directory holding offers.csv and vendors.csv
    #[arg(long, default_value = DEFAULT_DATA_DIR)]
    pub data: PathBuf,
    /// Shipping-from countries to keep (repeatable); default all
    #[arg(long = "country")]
    pub countries: Vec<String>,
}

impl DataArgs {
    fn selection(&self) -> CountrySelection {
        if self.countries.is_empty() {
            CountrySelection::All
        } else {
            CountrySelection::from_picked(&self.countries)
        }
    }
}

#[derive(Args, Debug)]
pub struct ReportArgs {
    #[command(flatten)]
    pub data: DataArgs,
    /// Countries/categories with fewer offers are bucketed or left out
    #[arg(long, default_value_t = MIN_OFFERS_DEFAULT)]
    pub min_offers: u32,
    /// Write the report here instead of stdout
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum TableKind {
    Offers,
    Vendors,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum FormatArg {
    Csv,
    Tsv,
}

#[derive(Args, Debug)]
pub struct ExportArgs {
    #[command(flatten)]
    pub data: DataArgs,
    #[arg(long, value_enum)]
    pub table: TableKind,
    /// Columns to keep, in order (comma separated)
    #[arg(long, value_delimiter = ',')]
    pub columns: Vec<String>,
    /// Keep only the last N rows
    #[arg(long)]
    pub rows: Option<usize>,
    #[arg(long, value_enum, default_value = "csv")]
    pub format: FormatArg,
    #[arg(long)]
    pub no_headers: bool,
    /// Output file
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

pub fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    applog::init(LogTarget::Stderr);
    let cli = Cli::parse();
    match cli.command {
        Command::Crawl(a) => run_crawl(a),
        Command::Report(a) => run_report(a),
        Command::Export(a) => run_export(a),
    }
}

pub fn crawl_options(a: &CrawlArgs) -> Result<CrawlOptions> {
    let mut cookies = match &a.cookies {
        Some(text) => CrawlOptions::parse_cookies(text)?,
        None => Vec::new(),
    };
    for c in &a.cookie {
        cookies.push(parse_cookie_pair(c)?);
    }
    let proxy = match a.proxy.trim() {
        "" | "none" => None,
        p => Some(s!(p)),
    };
    Ok(CrawlOptions {
        base_url: a.url.clone(),
        proxy,
        cookies,
        user_agent: a.user_agent.clone(),
        pause_ms: a.pause_ms,
        profiles: ProfileRange { skip: a.skip, limit: a.limit },
        out_dir: a.out.clone(),
        print: a.print,
    })
}

fn run_crawl(a: CrawlArgs) -> Result<()> {
    let opts = crawl_options(&a)?;
    let mut progress = LogProgress::new();
    let out = scrape::crawl(&opts, Some(&mut progress))?;
    if opts.print {
        scrape::print_offers(&mut io::stdout().lock(), &out.offers)?;
    }
    scrape::save(&out, &opts.out_dir)?;
    Ok(())
}

fn run_report(a: ReportArgs) -> Result<()> {
    let ds = DataSet::load(&DataOptions::in_dir(&a.data.data))?;
    let mut opts = DashboardOptions { countries: a.data.selection(), ..DashboardOptions::default() };
    opts.set_min_offers(a.min_offers);
    let text = report::render(&ds, &opts);
    match a.out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    file::ensure_directory(parent)?;
                }
            }
            std::fs::write(&path, text)?;
            logf!("Report written to {}", path.display());
        }
        None => print!("{text}"),
    }
    Ok(())
}

fn run_export(a: ExportArgs) -> Result<()> {
    let ds = DataSet::load(&DataOptions::in_dir(&a.data.data))?;
    let sel = ds.select(&a.data.selection());
    let mut table = match a.table {
        TableKind::Offers => sel.offer_table(),
        TableKind::Vendors => sel.vendor_table(),
    };
    if !a.columns.is_empty() {
        table = table.project(&a.columns);
    }
    if let Some(n) = a.rows {
        table = table.tail(n);
    }

    let mut export = ExportOptions::default();
    export.format = match a.format {
        FormatArg::Csv => ExportFormat::Csv,
        FormatArg::Tsv => ExportFormat::Tsv,
    };
    export.include_headers = !a.no_headers;
    let default_name = match a.table {
        TableKind::Offers => "offers",
        TableKind::Vendors => "vendors",
    };
    let out = a.out.unwrap_or_else(|| PathBuf::from(DEFAULT_OUT_DIR).join(default_name));
    export.set_path(&out.to_string_lossy());

    let path = file::export_table(&export, &table)?;
    println!("{}", path.display());
    Ok(())
}
