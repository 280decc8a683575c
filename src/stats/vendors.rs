// src/stats/vendors.rs
use std::collections::{BTreeMap, HashMap};

use chrono::{Datelike, NaiveDate};

use crate::config::consts::{ALL_LEVELS, ALL_RANKS};
use crate::records::{Offer, Vendor};

use super::counts::value_counts;

/// The two ordinal trust labels a vendor carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Rank,
    Verification,
}

impl Level {
    pub fn label(&self, v: &Vendor) -> String {
        match self {
            Level::Rank => v.rank_label(),
            Level::Verification => v.verification_label(),
        }
    }

    /// The multiselect entry that disables the filter.
    pub fn all_label(&self) -> &'static str {
        match self {
            Level::Rank => ALL_RANKS,
            Level::Verification => ALL_LEVELS,
        }
    }
}

pub fn level_counts(vendors: &[&Vendor], level: Level) -> Vec<(String, usize)> {
    value_counts(vendors.iter().map(|v| level.label(v)))
}

pub fn rank_counts(vendors: &[&Vendor]) -> Vec<(String, usize)> {
    level_counts(vendors, Level::Rank)
}

pub fn verification_counts(vendors: &[&Vendor]) -> Vec<(String, usize)> {
    level_counts(vendors, Level::Verification)
}

/// Distinct labels of `level`, sorted, for filter widgets.
pub fn level_labels(vendors: &[&Vendor], level: Level) -> Vec<String> {
    let mut v: Vec<String> = level_counts(vendors, level).into_iter().map(|(l, _)| l).collect();
    v.sort();
    v
}

/// Keep vendors whose `level` label is picked. Picking the "All …" entry keeps everyone; picking nothing keeps no one.
pub fn filter_levels<'a, S: AsRef<str>>(vendors: &[&'a Vendor], picks: &[S], level: Level) -> Vec<&'a Vendor> {
    if picks.iter().any(|p| p.as_ref() == level.all_label()) {
        return vendors.to_vec();
    }
    vendors
        .iter()
        .copied()
        .filter(|v| {
            let l = level.label(v);
            picks.iter().any(|p| p.as_ref() == l)
        })
        .collect()
}

/// Offer count per vendor, in vendor order; vendors without offers get 0.
pub fn offers_per_vendor(offers: &[&Offer], vendors: &[&Vendor]) -> Vec<(String, usize)> {
    let mut n: HashMap<&str, usize> = HashMap::new();
    for o in offers {
        *n.entry(o.vendor.as_str()).or_default() += 1;
    }
    vendors
        .iter()
        .map(|v| (v.vendor.clone(), n.get(v.vendor.as_str()).copied().unwrap_or(0)))
        .collect()
}

/// Running total of registrations per month (first of month), oldest first.
/// Vendors without a parseable date are skipped.
pub fn cumulative_by_month(vendors: &[&Vendor]) -> Vec<(NaiveDate, usize)> {
    let mut per_month: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for v in vendors {
        if let Some(month) = v.since_date().and_then(|d| d.with_day(1)) {
            *per_month.entry(month).or_default() += 1;
        }
    }
    let mut running = 0;
    per_month
        .into_iter()
        .map(|(m, n)| {
            running += n;
            (m, running)
        })
        .collect()
}

/// Whole months between registration and `reference` (calendar months, day ignored).
pub fn months_active(since: NaiveDate, reference: NaiveDate) -> i32 {
    (reference.year() - since.year()) * 12 + (reference.month() as i32 - since.month() as i32)
}

/// Transactions per month active. `None` without a count, a date, or a positive month span.
pub fn transactions_per_month(v: &Vendor, reference: NaiveDate) -> Option<f64> {
    let tx = v.transactions_n()?;
    let months = months_active(v.since_date()?, reference);
    if months <= 0 {
        return None;
    }
    Some(tx as f64 / months as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vendor(name: &str, rank: &str, ver: &str, since: &str, tx: &str) -> Vendor {
        Vendor {
            vendor: s!(name),
            rank: s!(rank),
            verification: s!(ver),
            since: s!(since),
            transactions: s!(tx),
            ..Vendor::default()
        }
    }

    fn sample() -> Vec<Vendor> {
        vec![
            vendor("a", "Rank 1", "Verification Level 2", "Jan 05, 2020", "120"),
            vendor("b", "Rank 2", "", "Jan 20, 2020", "10"),
            vendor("c", "Rank 1", "Verification Level 2", "Mar 2021", "x"),
            vendor("d", "", "Verification Level 1", "", "5"),
        ]
    }

    #[test]
    fn counts_per_level() {
        let v = sample();
        let r: Vec<&Vendor> = v.iter().collect();
        assert_eq!(rank_counts(&r)[0], (s!("Rank 1"), 2));
        assert_eq!(
            verification_counts(&r),
            vec![(s!("Level 2"), 2), (s!("Level 1"), 1), (s!("No verification level"), 1)]
        );
    }

    #[test]
    fn level_filter_honours_all_entry() {
        let v = sample();
        let r: Vec<&Vendor> = v.iter().collect();
        assert_eq!(filter_levels(&r, &[ALL_LEVELS, "Level 1"], Level::Verification).len(), 4);
        let l2 = filter_levels(&r, &["Level 2"], Level::Verification);
        assert_eq!(l2.iter().map(|v| v.vendor.as_str()).collect::<Vec<_>>(), vec!["a", "c"]);
        assert_eq!(filter_levels(&r, &["Unknown"], Level::Rank)[0].vendor, "d");
    }

    #[test]
    fn empty_level_pick_selects_no_one() {
        let v = sample();
        let r: Vec<&Vendor> = v.iter().collect();
        assert!(filter_levels::<&str>(&r, &[], Level::Verification).is_empty());
        assert!(filter_levels::<&str>(&r, &[], Level::Rank).is_empty());
    }

    #[test]
    fn offers_joined_onto_vendors() {
        let v = sample();
        let r: Vec<&Vendor> = v.iter().collect();
        let o = [Offer { vendor: s!("a"), ..Offer::default() }, Offer { vendor: s!("zz"), ..Offer::default() }];
        let ro: Vec<&Offer> = o.iter().collect();
        let n = offers_per_vendor(&ro, &r);
        assert_eq!(n[0], (s!("a"), 1));
        assert_eq!(n[1], (s!("b"), 0));
        assert_eq!(n.len(), 4);
    }

    #[test]
    fn registrations_accumulate_by_month() {
        let v = sample();
        let r: Vec<&Vendor> = v.iter().collect();
        let d = |y, m| NaiveDate::from_ymd_opt(y, m, 1).unwrap();
        assert_eq!(cumulative_by_month(&r), vec![(d(2020, 1), 2), (d(2021, 3), 3)]);
    }

    #[test]
    fn transactions_per_month_uses_calendar_months() {
        let v = sample();
        let reference = NaiveDate::from_ymd_opt(2021, 4, 18).unwrap();
        // Jan 2020 → Apr 2021 = 15 months
        assert_eq!(transactions_per_month(&v[0], reference), Some(8.0));
        assert_eq!(transactions_per_month(&v[2], reference), None);
        assert_eq!(transactions_per_month(&v[3], reference), None);
        let fresh = vendor("e", "", "", "Apr 02, 2021", "3");
        assert_eq!(transactions_per_month(&fresh, reference), None);
    }
}
