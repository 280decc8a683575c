// src/scrape.rs
//
// Depth-2 crawl: home → vendor profiles → vendor offer pages. Sequential,
// one session, no retries; the first failure ends the crawl.

use std::io::Write;
use std::path::{Path, PathBuf};

use url::Url;

use crate::{
    config::consts::{OFFERS_FILE, VENDORS_FILE},
    config::options::CrawlOptions,
    core::net::Session,
    error::{Error, Result},
    progress::Progress,
    records::{Offer, Vendor},
    specs, store,
};

/// Page source for the crawl. `Session` is the real one; tests feed saved pages.
pub trait Fetch {
    fn base(&self) -> &Url;
    fn fetch(&self, url: &Url) -> Result<String>;

    fn resolve(&self, href: &str) -> Result<Url> {
        Ok(self.base().join(href.trim())?)
    }
}

impl Fetch for Session {
    fn base(&self) -> &Url {
        Session::base(self)
    }
    fn fetch(&self, url: &Url) -> Result<String> {
        self.get(url)
    }
    fn resolve(&self, href: &str) -> Result<Url> {
        Session::resolve(self, href)
    }
}

#[derive(Clone, Debug, Default)]
pub struct CrawlOutput {
    pub vendors: Vec<Vendor>,
    pub offers: Vec<Offer>,
    pub pages_fetched: usize,
}

/// Open a session and crawl (no IO besides the network).
pub fn crawl(opts: &CrawlOptions, progress: Option<&mut dyn Progress>) -> Result<CrawlOutput> {
    let session = Session::open(opts)?;
    let out = crawl_with(&session, opts, progress);
    logd!("Session: {} request(s) sent", session.requests_made());
    out
}

/// Depth-2 walk over `src`. `progress.finish()` runs whether the walk succeeds or not.
pub fn crawl_with(
    src: &dyn Fetch,
    opts: &CrawlOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<CrawlOutput> {
    let mut out = CrawlOutput::default();
    let walked = walk(src, opts, &mut out, &mut progress);

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    match walked {
        Ok(()) => {
            logf!(
                "Crawl: {} vendor(s), {} offer(s), {} page(s)",
                out.vendors.len(), out.offers.len(), out.pages_fetched
            );
            Ok(out)
        }
        Err(e) => {
            loge!("Crawl: stopped after {} page(s): {e}", out.pages_fetched);
            Err(e)
        }
    }
}

fn walk(
    src: &dyn Fetch,
    opts: &CrawlOptions,
    out: &mut CrawlOutput,
    progress: &mut Option<&mut dyn Progress>,
) -> Result<()> {
    let home = src.base().clone();
    let home_html = fetch_logged(src, &home, out, progress)?;

    let links = specs::home::profile_links(&home_html);
    if links.is_empty() {
        return Err(Error::MissingElement { what: "vendor profile links", url: home.to_string() });
    }
    let found = links.len();
    let profiles = opts.profiles.apply(links);
    logf!("Home: {found} profile link(s), crawling {}", profiles.len());

    if let Some(p) = progress.as_deref_mut() {
        p.begin(profiles.len());
    }

    for href in &profiles {
        let url = src.resolve(href)?;
        let html = fetch_logged(src, &url, out, progress)?;

        let vendor = specs::profile::vendor_info(&html, url.as_str());
        if vendor.vendor.is_empty() {
            return Err(Error::MissingElement { what: "vendor name", url: url.to_string() });
        }

        for offer_href in specs::profile::offer_links(&html) {
            let offer_url = src.resolve(&offer_href)?;
            let page = fetch_logged(src, &offer_url, out, progress)?;
            out.offers.extend(specs::offers::extract(&page, &vendor.vendor));
        }

        if let Some(p) = progress.as_deref_mut() {
            p.item_done(&vendor.vendor);
        }
        out.vendors.push(vendor);
    }
    Ok(())
}

fn fetch_logged(
    src: &dyn Fetch,
    url: &Url,
    out: &mut CrawlOutput,
    progress: &mut Option<&mut dyn Progress>,
) -> Result<String> {
    if let Some(p) = progress.as_deref_mut() {
        p.log(url.as_str());
    }
    let body = src.fetch(url)?;
    out.pages_fetched += 1;
    Ok(body)
}

/// Write `offers.csv` and `vendors.csv` into `dir`.
pub fn save(output: &CrawlOutput, dir: &Path) -> Result<(PathBuf, PathBuf)> {
    let offers = dir.join(OFFERS_FILE);
    let vendors = dir.join(VENDORS_FILE);
    store::save_offers(&offers, &output.offers)?;
    store::save_vendors(&vendors, &output.vendors)?;
    logf!("Saved {} and {}", offers.display(), vendors.display());
    Ok((offers, vendors))
}

/// `(title, price)` per line.
pub fn print_offers<W: Write>(w: &mut W, offers: &[Offer]) -> Result<()> {
    for o in offers {
        writeln!(w, "({:?}, {:?})", o.title, o.price)?;
    }
    Ok(())
}
