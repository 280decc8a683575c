// src/stats/mod.rs
//! Aggregates behind the dashboard charts and the text report.
//!
//! Everything here is pure and works on borrowed records (`&[&Offer]`,
//! `&[&Vendor]`) as handed out by a [`crate::data::Selection`]. Unparseable
//! prices, counts and dates are skipped, never defaulted to zero.

pub mod counts;
pub mod distribution;
pub mod insights;
pub mod prices;
pub mod vendors;

use std::collections::BTreeMap;

/// Collect `(group, value)` pairs into groups sorted by name.
pub fn group_values<I>(pairs: I) -> Vec<(String, Vec<f64>)>
where
    I: IntoIterator<Item = (String, f64)>,
{
    let mut map: BTreeMap<String, Vec<f64>> = BTreeMap::new();
    for (k, v) in pairs {
        map.entry(k).or_default().push(v);
    }
    map.into_iter().collect()
}

pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}
