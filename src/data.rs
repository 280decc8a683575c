// src/data.rs
//
// In-memory datasets and the views the dashboard works on.
//
// - DataSet:   both tables, loaded once per process and never written back.
// - Selection: zero-copy view (row indexes) of the offers shipping from the
//              picked countries and the vendors behind them.
// - Table:     owned header + string rows, for display and export boundaries.

use std::collections::HashSet;

use crate::config::consts::ALL_COUNTRIES;
use crate::config::options::DataOptions;
use crate::error::Result;
use crate::records::{Offer, OfferRow, Vendor, VendorRow, OFFER_HEADERS, VENDOR_HEADERS};
use crate::store;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum CountrySelection {
    #[default]
    All,
    Only(Vec<String>),
}

impl CountrySelection {
    /// From a multiselect's picks. "All countries" anywhere in the picks wins.
    pub fn from_picked<S: AsRef<str>>(picked: &[S]) -> Self {
        if picked.iter().any(|p| p.as_ref() == ALL_COUNTRIES) {
            return CountrySelection::All;
        }
        CountrySelection::Only(picked.iter().map(|p| s!(p.as_ref())).collect())
    }

    pub fn contains(&self, country: &str) -> bool {
        match self {
            CountrySelection::All => true,
            CountrySelection::Only(v) => v.iter().any(|c| c == country),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct DataSet {
    pub offers: Vec<Offer>,
    pub vendors: Vec<Vendor>,
}

impl DataSet {
    pub fn new(offers: Vec<Offer>, vendors: Vec<Vendor>) -> Self {
        Self { offers, vendors }
    }

    pub fn load(opts: &DataOptions) -> Result<Self> {
        let offers = store::load_offers(&opts.offers)?;
        let vendors = store::load_vendors(&opts.vendors)?;
        Ok(Self { offers, vendors })
    }

    pub fn is_empty(&self) -> bool {
        self.offers.is_empty() && self.vendors.is_empty()
    }

    /// Distinct shipping-from values, first-seen order.
    pub fn shipping_from_countries(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.offers
            .iter()
            .map(|o| o.shipping_from.as_str())
            .filter(|c| seen.insert(*c))
            .map(String::from)
            .collect()
    }

    pub fn select(&self, countries: &CountrySelection) -> Selection<'_> {
        let offer_ix: Vec<usize> = self
            .offers
            .iter()
            .enumerate()
            .filter(|(_, o)| countries.contains(&o.shipping_from))
            .map(|(i, _)| i)
            .collect();

        let vendor_ix = match countries {
            CountrySelection::All => (0..self.vendors.len()).collect(),
            CountrySelection::Only(_) => {
                let names: HashSet<&str> =
                    offer_ix.iter().map(|&i| self.offers[i].vendor.as_str()).collect();
                self.vendors
                    .iter()
                    .enumerate()
                    .filter(|(_, v)| names.contains(v.vendor.as_str()))
                    .map(|(i, _)| i)
                    .collect()
            }
        };

        Selection { offer_ix, vendor_ix, raw: self }
    }

    pub fn all(&self) -> Selection<'_> {
        self.select(&CountrySelection::All)
    }
}

/// Filtered view. Holds row indexes into the DataSet.
#[derive(Clone, Debug)]
pub struct Selection<'a> {
    offer_ix: Vec<usize>,
    vendor_ix: Vec<usize>,
    raw: &'a DataSet,
}

impl<'a> Selection<'a> {
    pub fn offers(&self) -> Vec<&'a Offer> {
        self.offer_ix.iter().map(|&i| &self.raw.offers[i]).collect()
    }

    pub fn vendors(&self) -> Vec<&'a Vendor> {
        self.vendor_ix.iter().map(|&i| &self.raw.vendors[i]).collect()
    }

    pub fn offer_count(&self) -> usize { self.offer_ix.len() }
    pub fn vendor_count(&self) -> usize { self.vendor_ix.len() }

    /// Materialize owned rows (for UI/export boundaries).
    pub fn offer_table(&self) -> Table {
        Table {
            headers: OFFER_HEADERS.iter().map(|h| s!(*h)).collect(),
            rows: self.offer_ix.iter().map(|&i| OfferRow::from(&self.raw.offers[i]).cells()).collect(),
        }
    }

    pub fn vendor_table(&self) -> Table {
        Table {
            headers: VENDOR_HEADERS.iter().map(|h| s!(*h)).collect(),
            rows: self.vendor_ix.iter().map(|&i| VendorRow::from(&self.raw.vendors[i]).cells()).collect(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Keep `columns` in the given order. Unknown names are skipped.
    pub fn project<S: AsRef<str>>(self, columns: &[S]) -> Self {
        let ix: Vec<usize> = columns
            .iter()
            .filter_map(|c| self.headers.iter().position(|h| h == c.as_ref()))
            .collect();
        Self {
            headers: ix.iter().map(|&i| self.headers[i].clone()).collect(),
            rows: self
                .rows
                .into_iter()
                .map(|r| ix.iter().map(|&i| r.get(i).cloned().unwrap_or_default()).collect())
                .collect(),
        }
    }

    pub fn head(mut self, n: usize) -> Self {
        self.rows.truncate(n);
        self
    }

    pub fn tail(mut self, n: usize) -> Self {
        let skip = self.rows.len().saturating_sub(n);
        self.rows.drain(..skip);
        self
    }

    pub fn len(&self) -> usize { self.rows.len() }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }
}
