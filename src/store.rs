// src/store.rs
//
// CSV load/save of the two datasets. Columns are matched by header name
// (case-insensitive, a few historical spellings accepted), so column order and
// extra columns (e.g. a leading unnamed index) don't matter.

use std::fs;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Writer};

use crate::error::{Error, Result};
use crate::records::{Offer, OfferRow, Vendor, VendorRow};

/// Position of each wanted column in a file's header row.
struct Columns(Vec<Option<usize>>);

impl Columns {
    /// `wanted[i]` lists the accepted header spellings for field `i`.
    fn map(headers: &StringRecord, wanted: &[&[&str]]) -> Self {
        let norm: Vec<String> = headers.iter().map(|h| h.trim().to_lowercase()).collect();
        let pos = wanted
            .iter()
            .map(|names| norm.iter().position(|h| !h.is_empty() && names.contains(&h.as_str())))
            .collect();
        Columns(pos)
    }

    fn require(&self, i: usize, file: &Path, column: &'static str) -> Result<()> {
        match self.0[i] {
            Some(_) => Ok(()),
            None => Err(Error::MissingColumn { file: file.to_path_buf(), column }),
        }
    }

    fn get(&self, rec: &StringRecord, i: usize) -> String {
        self.0[i]
            .and_then(|c| rec.get(c))
            .map(|v| s!(v.trim()))
            .unwrap_or_default()
    }
}

const OFFER_COLUMNS: &[&[&str]] = &[
    &["vendor"],
    &["category_level_1", "category level 1"],
    &["category_level_2", "category level 2"],
    &["category_level_3", "category level 3"],
    &["title"],
    &["price in $", "price"],
    &["shipping_from", "shipping from"],
    &["shipping_to", "shipping to"],
];

const VENDOR_COLUMNS: &[&[&str]] = &[
    &["vendor"],
    &["rank"],
    &["verification", "verifcation"],
    &["transactions"],
    &["feedback_positive"],
    &["feedback_neutral"],
    &["feedback_negative"],
    &["feedback_total", "feedback"],
    &["positive_feedback", "positive"],
    &["since", "member since", "registered"],
];

fn reader(path: &Path) -> Result<csv::Reader<fs::File>> {
    Ok(ReaderBuilder::new().flexible(true).from_path(path)?)
}

pub fn load_offers(path: &Path) -> Result<Vec<Offer>> {
    let mut rdr = reader(path)?;
    let cols = Columns::map(rdr.headers()?, OFFER_COLUMNS);
    cols.require(0, path, "vendor")?;
    cols.require(4, path, "title")?;

    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        out.push(Offer {
            vendor: cols.get(&rec, 0),
            category_level_1: cols.get(&rec, 1),
            category_level_2: cols.get(&rec, 2),
            category_level_3: cols.get(&rec, 3),
            title: cols.get(&rec, 4),
            price: cols.get(&rec, 5),
            shipping_from: cols.get(&rec, 6),
            shipping_to: cols.get(&rec, 7),
        });
    }
    logf!("Loaded {} offer(s) from {}", out.len(), path.display());
    Ok(out)
}

pub fn load_vendors(path: &Path) -> Result<Vec<Vendor>> {
    let mut rdr = reader(path)?;
    let cols = Columns::map(rdr.headers()?, VENDOR_COLUMNS);
    cols.require(0, path, "vendor")?;

    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        out.push(Vendor {
            vendor: cols.get(&rec, 0),
            rank: cols.get(&rec, 1),
            verification: cols.get(&rec, 2),
            transactions: cols.get(&rec, 3),
            feedback_positive: cols.get(&rec, 4),
            feedback_neutral: cols.get(&rec, 5),
            feedback_negative: cols.get(&rec, 6),
            feedback_total: cols.get(&rec, 7),
            positive_feedback: cols.get(&rec, 8),
            since: cols.get(&rec, 9),
        });
    }
    logf!("Loaded {} vendor(s) from {}", out.len(), path.display());
    Ok(out)
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

pub fn save_offers(path: &Path, offers: &[Offer]) -> Result<()> {
    ensure_parent(path)?;
    let mut w = Writer::from_path(path)?;
    for o in offers {
        w.serialize(OfferRow::from(o))?;
    }
    if offers.is_empty() {
        w.write_record(crate::records::OFFER_HEADERS)?;
    }
    w.flush()?;
    Ok(())
}

pub fn save_vendors(path: &Path, vendors: &[Vendor]) -> Result<()> {
    ensure_parent(path)?;
    let mut w = Writer::from_path(path)?;
    for v in vendors {
        w.serialize(VendorRow::from(v))?;
    }
    if vendors.is_empty() {
        w.write_record(crate::records::VENDOR_HEADERS)?;
    }
    w.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env::temp_dir;

    fn write(name: &str, body: &str) -> std::path::PathBuf {
        let dir = temp_dir().join("market_lens_store_unit");
        fs::create_dir_all(&dir).unwrap();
        let p = dir.join(name);
        fs::write(&p, body).unwrap();
        p
    }

    #[test]
    fn offers_ignore_index_and_accept_price_header() {
        let p = write(
            "offers_idx.csv",
            ",Vendor,title,price in $,shipping_from,extra\n0,acme,Haze,\"USD 1,200.00\",Netherlands,x\n",
        );
        let offers = load_offers(&p).unwrap();
        assert_eq!(offers.len(), 1);
        assert_eq!(offers[0].vendor, "acme");
        assert_eq!(offers[0].price_usd(), Some(1200.0));
        assert_eq!(offers[0].shipping_from, "Netherlands");
        assert!(offers[0].category_level_1.is_empty());
    }

    #[test]
    fn vendors_accept_misspelled_verification() {
        let p = write("vendors_typo.csv", "vendor,rank,verifcation,since\nacme,Rank 2,Verification Level 1,Jan 2020\n");
        let v = load_vendors(&p).unwrap();
        assert_eq!(v[0].verification, "Verification Level 1");
        assert_eq!(v[0].since, "Jan 2020");
    }

    #[test]
    fn missing_title_column_is_an_error() {
        let p = write("offers_no_title.csv", "vendor,price\nacme,1\n");
        let err = load_offers(&p).unwrap_err();
        assert!(matches!(err, Error::MissingColumn { column: "title", .. }));
    }

    #[test]
    fn empty_save_still_writes_headers() {
        let p = temp_dir().join("market_lens_store_unit").join("nested").join("empty.csv");
        save_offers(&p, &[]).unwrap();
        let text = fs::read_to_string(&p).unwrap();
        assert!(text.starts_with("vendor,category_level_1"));
    }
}
