// src/records.rs
//
// The two flat record types. Fields stay as scraped (strings); typed views
// are lenient accessors that return None on anything unparseable. Vendor
// names are the only link between the two and are not validated.

use chrono::NaiveDate;
use serde::Serialize;

use crate::config::consts::{NO_VERIFICATION, UNKNOWN};
use crate::core::sanitize::{parse_count, parse_date, parse_price, strip_prefix_ci};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Offer {
    pub vendor: String,
    pub category_level_1: String,
    pub category_level_2: String,
    pub category_level_3: String,
    pub title: String,
    /// Raw price text, e.g. "USD 1,250.00"
    pub price: String,
    pub shipping_from: String,
    /// Country or "Worldwide"
    pub shipping_to: String,
}

impl Offer {
    /// Deepest category level present, or "" if none.
    pub fn highest_category(&self) -> &str {
        [&self.category_level_3, &self.category_level_2, &self.category_level_1]
            .into_iter()
            .map(|c| c.trim())
            .find(|c| !c.is_empty())
            .unwrap_or("")
    }

    pub fn price_usd(&self) -> Option<f64> {
        parse_price(&self.price)
    }

    /// Fill category levels from a breadcrumb (top level first). Extra levels are dropped.
    pub fn set_categories<S: AsRef<str>>(&mut self, levels: &[S]) {
        let mut it = levels.iter().map(|s| s.as_ref().trim().to_string());
        self.category_level_1 = it.next().unwrap_or_default();
        self.category_level_2 = it.next().unwrap_or_default();
        self.category_level_3 = it.next().unwrap_or_default();
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Vendor {
    pub vendor: String,
    /// e.g. "Rank 2", "Top seller"
    pub rank: String,
    /// e.g. "Verification Level 3"; empty when unverified
    pub verification: String,
    pub transactions: String,
    pub feedback_positive: String,
    pub feedback_neutral: String,
    pub feedback_negative: String,
    pub feedback_total: String,
    /// Positive feedback percentage, e.g. "98.5%"
    pub positive_feedback: String,
    /// Registration date as printed
    pub since: String,
}

impl Vendor {
    pub fn transactions_n(&self) -> Option<u64> {
        parse_count(&self.transactions)
    }

    pub fn feedback_total_n(&self) -> Option<u64> {
        parse_count(&self.feedback_total)
    }

    pub fn positive_pct(&self) -> Option<f64> {
        parse_price(&self.positive_feedback)
    }

    pub fn since_date(&self) -> Option<NaiveDate> {
        parse_date(&self.since)
    }

    /// Level without the "Verification " prefix; unverified vendors get a label of their own.
    pub fn verification_label(&self) -> String {
        let v = strip_prefix_ci(&self.verification, "verification ");
        if v.is_empty() { s!(NO_VERIFICATION) } else { s!(v) }
    }

    pub fn rank_label(&self) -> String {
        let r = self.rank.trim();
        if r.is_empty() { s!(UNKNOWN) } else { s!(r) }
    }
}

/* ---------------- CSV shapes ---------------- */

pub const OFFER_HEADERS: &[&str] = &[
    "vendor", "category_level_1", "category_level_2", "category_level_3",
    "highest_category", "title", "price in $", "shipping_from", "shipping_to",
];

pub const VENDOR_HEADERS: &[&str] = &[
    "vendor", "rank", "verification", "transactions", "feedback_positive",
    "feedback_neutral", "feedback_negative", "feedback_total", "positive_feedback", "since",
];

/// Serialized offer row (canonical column order, derived highest category included).
#[derive(Serialize)]
pub struct OfferRow<'a> {
    pub vendor: &'a str,
    pub category_level_1: &'a str,
    pub category_level_2: &'a str,
    pub category_level_3: &'a str,
    pub highest_category: &'a str,
    pub title: &'a str,
    #[serde(rename = "price in $")]
    pub price: &'a str,
    pub shipping_from: &'a str,
    pub shipping_to: &'a str,
}

impl<'a> From<&'a Offer> for OfferRow<'a> {
    fn from(o: &'a Offer) -> Self {
        Self {
            vendor: &o.vendor,
            category_level_1: &o.category_level_1,
            category_level_2: &o.category_level_2,
            category_level_3: &o.category_level_3,
            highest_category: o.highest_category(),
            title: &o.title,
            price: &o.price,
            shipping_from: &o.shipping_from,
            shipping_to: &o.shipping_to,
        }
    }
}

impl OfferRow<'_> {
    pub fn cells(&self) -> Vec<String> {
        [
            self.vendor, self.category_level_1, self.category_level_2, self.category_level_3,
            self.highest_category, self.title, self.price, self.shipping_from, self.shipping_to,
        ]
        .into_iter()
        .map(String::from)
        .collect()
    }
}

#[derive(Serialize)]
pub struct VendorRow<'a> {
    pub vendor: &'a str,
    pub rank: &'a str,
    pub verification: &'a str,
    pub transactions: &'a str,
    pub feedback_positive: &'a str,
    pub feedback_neutral: &'a str,
    pub feedback_negative: &'a str,
    pub feedback_total: &'a str,
    pub positive_feedback: &'a str,
    pub since: &'a str,
}

impl<'a> From<&'a Vendor> for VendorRow<'a> {
    fn from(v: &'a Vendor) -> Self {
        Self {
            vendor: &v.vendor,
            rank: &v.rank,
            verification: &v.verification,
            transactions: &v.transactions,
            feedback_positive: &v.feedback_positive,
            feedback_neutral: &v.feedback_neutral,
            feedback_negative: &v.feedback_negative,
            feedback_total: &v.feedback_total,
            positive_feedback: &v.positive_feedback,
            since: &v.since,
        }
    }
}

impl VendorRow<'_> {
    pub fn cells(&self) -> Vec<String> {
        [
            self.vendor, self.rank, self.verification, self.transactions, self.feedback_positive,
            self.feedback_neutral, self.feedback_negative, self.feedback_total,
            self.positive_feedback, self.since,
        ]
        .into_iter()
        .map(String::from)
        .collect()
    }
}
