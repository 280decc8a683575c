// src/stats/insights.rs
//
// Cross-table aggregates: offers joined to vendors by name (left join; a
// vendor name missing from the vendor table lands in "Unknown").

use std::collections::{BTreeMap, BTreeSet, HashMap};

use chrono::NaiveDate;

use crate::config::consts::UNKNOWN;
use crate::records::{Offer, Vendor};

use super::group_values;
use super::vendors::{transactions_per_month, Level};

/// Offer prices grouped by the selling vendor's rank or verification label.
pub fn price_by_group(offers: &[&Offer], vendors: &[&Vendor], level: Level) -> Vec<(String, Vec<f64>)> {
    let by_name: HashMap<&str, &Vendor> = vendors.iter().map(|v| (v.vendor.as_str(), *v)).collect();
    group_values(offers.iter().filter_map(|o| {
        let price = o.price_usd()?;
        let group = match by_name.get(o.vendor.as_str()) {
            Some(v) => level.label(v),
            None => s!(UNKNOWN),
        };
        Some((group, price))
    }))
}

/// Transactions per active month, grouped by `level`.
pub fn transactions_per_month_by(
    vendors: &[&Vendor],
    level: Level,
    reference: NaiveDate,
) -> Vec<(String, Vec<f64>)> {
    group_values(
        vendors
            .iter()
            .filter_map(|v| transactions_per_month(v, reference).map(|t| (level.label(v), t))),
    )
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CategoryDepth {
    /// category_level_2
    Level2,
    /// deepest level present
    Highest,
}

/// Number of distinct categories each vendor sells in, sorted by vendor name.
pub fn categories_per_vendor(offers: &[&Offer], depth: CategoryDepth) -> Vec<(String, usize)> {
    let mut map: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();
    for o in offers {
        let cat = match depth {
            CategoryDepth::Level2 => o.category_level_2.trim(),
            CategoryDepth::Highest => o.highest_category(),
        };
        let set = map.entry(o.vendor.as_str()).or_default();
        if !cat.is_empty() {
            set.insert(cat);
        }
    }
    map.into_iter().map(|(v, cats)| (s!(v), cats.len())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offer(vendor: &str, cats: &[&str], price: &str) -> Offer {
        let mut o = Offer { vendor: s!(vendor), price: s!(price), ..Offer::default() };
        o.set_categories(cats);
        o
    }

    #[test]
    fn prices_follow_vendor_labels() {
        let vendors = [
            Vendor { vendor: s!("a"), rank: s!("Rank 1"), ..Vendor::default() },
            Vendor { vendor: s!("b"), rank: s!("Rank 2"), ..Vendor::default() },
        ];
        let offers = [
            offer("a", &[], "10"),
            offer("a", &[], "20"),
            offer("b", &[], "5"),
            offer("ghost", &[], "1"),
            offer("b", &[], "free"),
        ];
        let v: Vec<&Vendor> = vendors.iter().collect();
        let o: Vec<&Offer> = offers.iter().collect();
        assert_eq!(
            price_by_group(&o, &v, Level::Rank),
            vec![(s!("Rank 1"), vec![10.0, 20.0]), (s!("Rank 2"), vec![5.0]), (s!("Unknown"), vec![1.0])]
        );
        assert_eq!(price_by_group(&o, &v, Level::Verification)[0].0, "No verification level");
    }

    #[test]
    fn distinct_categories_per_vendor() {
        let offers = [
            offer("a", &["Drugs", "Cannabis", "Weed"], "1"),
            offer("a", &["Drugs", "Cannabis", "Hash"], "1"),
            offer("a", &["Drugs", "Opioids"], "1"),
            offer("b", &[], "1"),
        ];
        let o: Vec<&Offer> = offers.iter().collect();
        assert_eq!(categories_per_vendor(&o, CategoryDepth::Level2), vec![(s!("a"), 2), (s!("b"), 0)]);
        assert_eq!(categories_per_vendor(&o, CategoryDepth::Highest), vec![(s!("a"), 3), (s!("b"), 0)]);
    }
}
