// src/stats/prices.rs
use std::collections::{BTreeMap, HashMap};

use crate::config::consts::UNKNOWN;
use crate::records::Offer;

use super::mean;

#[derive(Clone, Debug, PartialEq)]
pub struct CategoryPrices {
    pub category: String,
    pub prices: Vec<f64>,
}

fn category_of(o: &Offer) -> &str {
    match o.highest_category() {
        "" => UNKNOWN,
        c => c,
    }
}

/// Parsed prices per highest category, categories sorted by name.
/// Offers with an unparseable price are left out.
pub fn category_prices(offers: &[&Offer]) -> Vec<CategoryPrices> {
    let mut map: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
    for o in offers {
        if let Some(p) = o.price_usd() {
            map.entry(category_of(o)).or_default().push(p);
        }
    }
    map.into_iter()
        .map(|(c, prices)| CategoryPrices { category: s!(c), prices })
        .collect()
}

/// Mean price per category, highest first.
pub fn category_means(cats: &[CategoryPrices]) -> Vec<(String, f64)> {
    let mut out: Vec<(String, f64)> = cats
        .iter()
        .filter_map(|c| mean(&c.prices).map(|m| (c.category.clone(), m)))
        .collect();
    out.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    out
}

/// Categories with at least `min` offers (priced or not), with their parsed prices.
pub fn frequent_categories(offers: &[&Offer], min: usize) -> Vec<CategoryPrices> {
    let mut n: HashMap<&str, usize> = HashMap::new();
    for o in offers {
        *n.entry(category_of(o)).or_default() += 1;
    }
    category_prices(offers)
        .into_iter()
        .filter(|c| n.get(c.category.as_str()).copied().unwrap_or(0) >= min)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offer(cat: &str, price: &str) -> Offer {
        let mut o = Offer { price: s!(price), ..Offer::default() };
        o.set_categories(&["Drugs", cat]);
        o
    }

    #[test]
    fn prices_grouped_and_averaged() {
        let v = vec![offer("Cannabis", "10"), offer("Cannabis", "30"), offer("Opioids", "100"), offer("Opioids", "n/a")];
        let refs: Vec<&Offer> = v.iter().collect();

        let cats = category_prices(&refs);
        assert_eq!(cats.len(), 2);
        assert_eq!(cats[0].category, "Cannabis");
        assert_eq!(cats[1].prices, vec![100.0]);

        let means = category_means(&cats);
        assert_eq!(means, vec![(s!("Opioids"), 100.0), (s!("Cannabis"), 20.0)]);
    }

    #[test]
    fn frequent_counts_unpriced_offers_too() {
        let v = vec![offer("Cannabis", "10"), offer("Opioids", "100"), offer("Opioids", "?")];
        let refs: Vec<&Offer> = v.iter().collect();
        let f = frequent_categories(&refs, 2);
        assert_eq!(f, vec![CategoryPrices { category: s!("Opioids"), prices: vec![100.0] }]);
    }
}
