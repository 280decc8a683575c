// src/config/options.rs
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use super::consts::*;
use crate::data::CountrySelection;
use crate::error::{Error, Result};

#[derive(Clone, Debug, PartialEq)]
pub struct AppOptions {
    pub data: DataOptions,
    pub export: ExportOptions,
    pub dashboard: DashboardOptions,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            data: DataOptions::default(),
            export: ExportOptions::default(),
            dashboard: DashboardOptions::default(),
        }
    }
}

/* ---------------- Crawl ---------------- */

/// Which slice of the home page's profile links to walk.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileRange {
    pub skip: usize,
    pub limit: Option<usize>,
}

impl ProfileRange {
    pub fn apply<T>(&self, items: Vec<T>) -> Vec<T> {
        let it = items.into_iter().skip(self.skip);
        match self.limit {
            Some(n) => it.take(n).collect(),
            None => it.collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CrawlOptions {
    /// Home page of the market, e.g. `http://<host>.onion/home`
    pub base_url: String,
    /// `None` connects directly (useful against a local mirror)
    pub proxy: Option<String>,
    pub cookies: Vec<(String, String)>,
    pub user_agent: String,
    pub pause_ms: u64,
    pub profiles: ProfileRange,
    pub out_dir: PathBuf,
    /// Echo `(title, price)` pairs to stdout
    pub print: bool,
}

impl Default for CrawlOptions {
    fn default() -> Self {
        Self {
            base_url: s!(),
            proxy: Some(s!(DEFAULT_PROXY)),
            cookies: Vec::new(),
            user_agent: s!(DEFAULT_USER_AGENT),
            pause_ms: REQUEST_PAUSE_MS,
            profiles: ProfileRange::default(),
            out_dir: PathBuf::from(DEFAULT_DATA_DIR),
            print: false,
        }
    }
}

impl CrawlOptions {
    /// Parse `name=value; name2=value2` (the format browsers show in dev tools).
    pub fn parse_cookies(text: &str) -> Result<Vec<(String, String)>> {
        let mut out = Vec::new();
        for part in text.split(';') {
            let part = part.trim();
            if part.is_empty() { continue; }
            out.push(parse_cookie_pair(part)?);
        }
        Ok(out)
    }

    /// Value for the `Cookie` request header, if any cookies are configured.
    pub fn cookie_header(&self) -> Option<String> {
        if self.cookies.is_empty() {
            return None;
        }
        let pairs: Vec<String> = self.cookies
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect();
        Some(pairs.join("; "))
    }
}

pub fn parse_cookie_pair(part: &str) -> Result<(String, String)> {
    let (name, value) = part
        .split_once('=')
        .ok_or_else(|| Error::Config(format!("cookie `{part}` is not name=value")))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(Error::Config(format!("cookie `{part}` has no name")));
    }
    Ok((s!(name), s!(value.trim())))
}

/* ---------------- Data ---------------- */

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataOptions {
    pub offers: PathBuf,
    pub vendors: PathBuf,
}

impl Default for DataOptions {
    fn default() -> Self {
        Self::in_dir(DEFAULT_DATA_DIR)
    }
}

impl DataOptions {
    pub fn in_dir<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref();
        Self {
            offers: dir.join(OFFERS_FILE),
            vendors: dir.join(VENDORS_FILE),
        }
    }
}

/* ---------------- Dashboard ---------------- */

#[derive(Clone, Debug, PartialEq)]
pub struct DashboardOptions {
    pub countries: CountrySelection,
    /// Countries/categories below this many offers are bucketed or hidden
    pub min_offers: u32,
    pub bins: usize,
    /// "Now" for months-since-registration
    pub reference_date: NaiveDate,
}

impl Default for DashboardOptions {
    fn default() -> Self {
        let (y, m, d) = REFERENCE_DATE;
        Self {
            countries: CountrySelection::All,
            min_offers: MIN_OFFERS_DEFAULT,
            bins: HISTOGRAM_BINS,
            reference_date: NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default(),
        }
    }
}

impl DashboardOptions {
    /// Snap to the slider grid.
    pub fn set_min_offers(&mut self, v: u32) {
        let v = v.clamp(MIN_OFFERS_LO, MIN_OFFERS_HI);
        self.min_offers = MIN_OFFERS_LO + (v - MIN_OFFERS_LO) / MIN_OFFERS_STEP * MIN_OFFERS_STEP;
    }
}

/* ---------------- Export ---------------- */

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> u8 {
        match self { ExportFormat::Csv => b',', ExportFormat::Tsv => b'\t' }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    out_path: OutputPath,
    pub include_headers: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            out_path: OutputPath::default(),
            include_headers: true,
        }
    }
}

impl ExportOptions {
    /// `<dir>/<stem>.<ext>`; an extension typed by the user wins over the format's.
    pub fn out_path(&self) -> PathBuf {
        let file = match &self.out_path.ext {
            Some(ext) => {
                let mut f = self.out_path.file_stem.clone();
                f.push(".");
                f.push(ext);
                f
            }
            None => {
                let mut f = self.out_path.file_stem.clone();
                f.push(".");
                f.push(self.format.ext());
                f
            }
        };
        self.out_path.dir.join(file)
    }

    /// Path for one table of a multi-table export: `<dir>/<stem>_<suffix>.<ext>`.
    pub fn out_path_for(&self, suffix: &str) -> PathBuf {
        let base = self.out_path();
        let stem = base.file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or_default();
        let ext = base.extension().map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| s!(self.format.ext()));
        base.with_file_name(join!(&stem, "_", suffix, ".", &ext))
    }

    /// Parse user text into dir + stem (+ explicit extension, if typed).
    pub fn set_path(&mut self, text: &str) {
        let p = Path::new(text.trim());
        if let Some(parent) = p.parent() {
            self.out_path.dir = parent.to_path_buf();
        }
        if let Some(stem) = p.file_stem() {
            self.out_path.file_stem = stem.to_os_string();
        }
        self.out_path.ext = p.extension().map(|e| e.to_string_lossy().into_owned());
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct OutputPath {
    dir: PathBuf,
    file_stem: OsString, // without extension
    ext: Option<String>,
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_stem: OsString::from(DEFAULT_FILE),
            ext: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cookies_parse_browser_format() {
        let c = CrawlOptions::parse_cookies("ray_id=abc; XSRF-TOKEN=ey%3D%3D ;").unwrap();
        assert_eq!(c, vec![(s!("ray_id"), s!("abc")), (s!("XSRF-TOKEN"), s!("ey%3D%3D"))]);

        let opts = CrawlOptions { cookies: c, ..CrawlOptions::default() };
        assert_eq!(opts.cookie_header().unwrap(), "ray_id=abc; XSRF-TOKEN=ey%3D%3D");
    }

    #[test]
    fn cookie_without_equals_is_rejected() {
        assert!(CrawlOptions::parse_cookies("session").is_err());
        assert!(CrawlOptions::parse_cookies("=v").is_err());
    }

    #[test]
    fn profile_range_slices_like_skip_take() {
        let r = ProfileRange { skip: 2, limit: Some(3) };
        assert_eq!(r.apply((0..10).collect()), vec![2, 3, 4]);
        let r = ProfileRange { skip: 8, limit: None };
        assert_eq!(r.apply((0..10).collect()), vec![8, 9]);
    }

    #[test]
    fn min_offers_snaps_to_slider_grid() {
        let mut d = DashboardOptions::default();
        d.set_min_offers(57);
        assert_eq!(d.min_offers, 50);
        d.set_min_offers(9000);
        assert_eq!(d.min_offers, 500);
        d.set_min_offers(0);
        assert_eq!(d.min_offers, 10);
    }
}
