// tests/crawl_pages.rs
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use url::Url;

use market_lens::config::options::{CrawlOptions, DataOptions, ProfileRange};
use market_lens::data::DataSet;
use market_lens::progress::Progress;
use market_lens::scrape::{self, Fetch};
use market_lens::Error;

const BASE: &str = "http://market.onion/home";

/// Saved pages keyed by absolute URL.
struct SavedPages {
    base: Url,
    pages: HashMap<String, &'static str>,
}

impl SavedPages {
    fn market() -> Self {
        let pages = [
            (BASE, include_str!("fixtures/home.html")),
            ("http://market.onion/profile/acme", include_str!("fixtures/profile_acme.html")),
            ("http://market.onion/profile/bolt", include_str!("fixtures/profile_bolt.html")),
            ("http://market.onion/items?vendor=acme&page=1", include_str!("fixtures/offers_acme.html")),
            ("http://market.onion/items?vendor=bolt", include_str!("fixtures/offers_bolt.html")),
        ];
        Self {
            base: Url::parse(BASE).unwrap(),
            pages: pages.into_iter().map(|(u, p)| (u.to_string(), p)).collect(),
        }
    }
}

impl Fetch for SavedPages {
    fn base(&self) -> &Url {
        &self.base
    }
    fn fetch(&self, url: &Url) -> market_lens::Result<String> {
        match self.pages.get(url.as_str()) {
            Some(p) => Ok(p.to_string()),
            None => Err(Error::Status { url: url.to_string(), status: 404 }),
        }
    }
}

#[derive(Default)]
struct Recorder {
    total: usize,
    done: Vec<String>,
    urls: usize,
    finished: bool,
}

impl Progress for Recorder {
    fn begin(&mut self, total: usize) { self.total = total; }
    fn log(&mut self, _msg: &str) { self.urls += 1; }
    fn item_done(&mut self, label: &str) { self.done.push(label.to_string()); }
    fn finish(&mut self) { self.finished = true; }
}

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("market_lens_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

fn opts() -> CrawlOptions {
    CrawlOptions { base_url: s(BASE), proxy: None, ..CrawlOptions::default() }
}

fn s(v: &str) -> String {
    v.to_string()
}

#[test]
fn crawl_walks_home_profiles_and_offer_pages() {
    let mut rec = Recorder::default();
    let out = scrape::crawl_with(&SavedPages::market(), &opts(), Some(&mut rec)).unwrap();

    assert_eq!(out.pages_fetched, 5);
    assert_eq!(rec.total, 2);
    assert_eq!(rec.urls, 5);
    assert_eq!(rec.done, vec!["Acme Labs", "bolt"]);
    assert!(rec.finished);

    let names: Vec<&str> = out.vendors.iter().map(|v| v.vendor.as_str()).collect();
    assert_eq!(names, vec!["Acme Labs", "bolt"]);
    assert_eq!(out.vendors[0].feedback_total, "124");
    assert_eq!(out.vendors[1].rank, "Top seller");
    assert_eq!(out.vendors[1].verification_label(), "No verification level");

    assert_eq!(out.offers.len(), 3);
    let coke = &out.offers[0];
    assert_eq!(coke.vendor, "Acme Labs");
    assert_eq!(coke.highest_category(), "Cocaine");
    assert_eq!(coke.shipping_from, "Netherlands");
    assert_eq!(coke.shipping_to, "Worldwide");
    assert_eq!(out.offers[1].price_usd(), Some(1250.0));
    assert_eq!(out.offers[2].vendor, "bolt");
    assert_eq!(out.offers[2].title, "Kush 28g");
}

#[test]
fn profile_range_limits_the_walk() {
    let mut o = opts();
    o.profiles = ProfileRange { skip: 1, limit: Some(5) };
    let out = scrape::crawl_with(&SavedPages::market(), &o, None).unwrap();
    assert_eq!(out.vendors.len(), 1);
    assert_eq!(out.vendors[0].vendor, "bolt");
    assert_eq!(out.pages_fetched, 3);
}

#[test]
fn missing_offer_page_stops_the_crawl() {
    let mut pages = SavedPages::market();
    pages.pages.remove("http://market.onion/items?vendor=bolt");
    let mut rec = Recorder::default();
    let err = scrape::crawl_with(&pages, &opts(), Some(&mut rec)).unwrap_err();
    assert!(matches!(err, Error::Status { status: 404, .. }), "{err}");
    // acme finished; bolt's offer page failed
    assert_eq!(rec.done, vec!["Acme Labs"]);
    assert!(rec.finished);
}

#[test]
fn progress_finishes_when_home_has_no_profiles() {
    let mut pages = SavedPages::market();
    pages.pages.insert(BASE.to_string(), "<html><body>captcha</body></html>");
    let mut rec = Recorder::default();
    let err = scrape::crawl_with(&pages, &opts(), Some(&mut rec)).unwrap_err();
    assert!(matches!(err, Error::MissingElement { .. }), "{err}");
    assert_eq!(rec.total, 0);
    assert!(rec.finished);
}

#[test]
fn saved_crawl_loads_back_as_dataset() {
    let out = scrape::crawl_with(&SavedPages::market(), &opts(), None).unwrap();
    let dir = tmp_dir("crawl_roundtrip");
    let (offers, vendors) = scrape::save(&out, &dir).unwrap();
    assert!(offers.ends_with("offers.csv"));
    assert!(vendors.ends_with("vendors.csv"));

    let ds = DataSet::load(&DataOptions::in_dir(&dir)).unwrap();
    assert_eq!(ds.offers, out.offers);
    assert_eq!(ds.vendors, out.vendors);
    assert_eq!(ds.shipping_from_countries(), vec!["Netherlands", ""]);
}
