// src/report.rs
//
// Plain-text rendering of every dashboard chapter's aggregates. Output is
// deterministic for a given DataSet + options.

use crate::config::consts::{OTHER_COUNTRIES, REPORT_OFFER_ROWS, REPORT_VENDOR_ROWS};
use crate::config::options::DashboardOptions;
use crate::core::country;
use crate::data::{DataSet, Table};
use crate::records::{Offer, Vendor};
use crate::stats::{
    counts::{bucket_small, value_counts},
    distribution::BoxStats,
    insights::{categories_per_vendor, price_by_group, transactions_per_month_by, CategoryDepth},
    prices::{category_means, category_prices, frequent_categories},
    vendors::{cumulative_by_month, offers_per_vendor, rank_counts, verification_counts, Level},
};

pub fn render(ds: &DataSet, opts: &DashboardOptions) -> String {
    let sel = ds.select(&opts.countries);
    let offers = sel.offers();
    let vendors = sel.vendors();

    let mut out = String::new();
    line(&mut out, "MARKET REPORT");
    line(&mut out, &format!("Offers: {}  Vendors: {}", offers.len(), vendors.len()));
    line(&mut out, &format!("Countries: {}", countries_label(opts)));

    section(&mut out, "1. Data");
    heading(&mut out, "Offers (first rows)");
    text_table(&mut out, &sel.offer_table().project(&["vendor", "highest_category", "title", "price in $", "shipping_from"]).head(REPORT_OFFER_ROWS));
    heading(&mut out, "Vendors (first rows)");
    text_table(&mut out, &sel.vendor_table().project(&["vendor", "rank", "verification", "transactions"]).head(REPORT_VENDOR_ROWS));

    render_offer_graphs(&mut out, &offers, opts);
    render_vendor_graphs(&mut out, &offers, &vendors);
    render_insights(&mut out, &offers, &vendors, opts);

    out
}

fn render_offer_graphs(out: &mut String, offers: &[&Offer], opts: &DashboardOptions) {
    let min = opts.min_offers as usize;
    section(out, "2. Offer graphs");

    let from = bucket_small(value_counts(offers.iter().map(|o| &o.shipping_from)), min, OTHER_COUNTRIES);
    heading(out, &format!("Shipping from (< {min} offers bucketed)"));
    count_table(out, "country", &from);

    let to = bucket_small(value_counts(offers.iter().map(|o| &o.shipping_to)), min, OTHER_COUNTRIES);
    heading(out, &format!("Shipping to (< {min} offers bucketed)"));
    count_table(out, "country", &to);

    heading(out, "Country codes");
    let rows = value_counts(offers.iter().map(|o| &o.shipping_from))
        .into_iter()
        .map(|(c, n)| vec![country::alpha3(&c).unwrap_or("-").to_string(), c, n.to_string()])
        .collect();
    text_table(out, &table(&["iso_alpha", "country", "count"], rows));

    heading(out, "Mean price per category ($)");
    mean_table(out, &category_means(&category_prices(offers)));

    heading(out, &format!("Mean price per frequent category (>= {min} offers)"));
    mean_table(out, &category_means(&frequent_categories(offers, min)));
}

fn render_vendor_graphs(out: &mut String, offers: &[&Offer], vendors: &[&Vendor]) {
    section(out, "3. Vendor graphs");

    heading(out, "Vendors registered (cumulative)");
    let rows = cumulative_by_month(vendors)
        .into_iter()
        .map(|(m, n)| vec![m.format("%Y-%m").to_string(), n.to_string()])
        .collect();
    text_table(out, &table(&["month", "vendors"], rows));

    heading(out, "Ranks");
    count_table(out, "rank", &rank_counts(vendors));
    heading(out, "Verification levels");
    count_table(out, "verification", &verification_counts(vendors));

    heading(out, "Distributions");
    let tx: Vec<f64> = vendors.iter().filter_map(|v| v.transactions_n()).map(|n| n as f64).collect();
    let per_vendor: Vec<f64> = offers_per_vendor(offers, vendors).into_iter().map(|(_, n)| n as f64).collect();
    let feedback: Vec<f64> = vendors.iter().filter_map(|v| v.feedback_total_n()).map(|n| n as f64).collect();
    let positive: Vec<f64> = vendors.iter().filter_map(|v| v.positive_pct()).collect();
    box_table(out, "measure", vec![
        (s!("transactions"), tx),
        (s!("offers per vendor"), per_vendor),
        (s!("feedback total"), feedback),
        (s!("positive feedback %"), positive),
    ]);
}

fn render_insights(out: &mut String, offers: &[&Offer], vendors: &[&Vendor], opts: &DashboardOptions) {
    section(out, "4. Insights");

    heading(out, &format!("Transactions per month by verification (as of {})", opts.reference_date));
    box_table(out, "verification", transactions_per_month_by(vendors, Level::Verification, opts.reference_date));

    heading(out, "Price ($) by rank");
    box_table(out, "rank", price_by_group(offers, vendors, Level::Rank));

    heading(out, "Price ($) by verification");
    box_table(out, "verification", price_by_group(offers, vendors, Level::Verification));

    heading(out, "Distinct categories per vendor");
    let l2 = categories_per_vendor(offers, CategoryDepth::Level2).into_iter().map(|(_, n)| n as f64).collect();
    let hi = categories_per_vendor(offers, CategoryDepth::Highest).into_iter().map(|(_, n)| n as f64).collect();
    box_table(out, "depth", vec![(s!("level 2"), l2), (s!("highest"), hi)]);
}

/* ---------------- Text helpers ---------------- */

fn countries_label(opts: &DashboardOptions) -> String {
    match &opts.countries {
        crate::data::CountrySelection::All => s!("all"),
        crate::data::CountrySelection::Only(v) if v.is_empty() => s!("none"),
        crate::data::CountrySelection::Only(v) => v.join(", "),
    }
}

fn line(out: &mut String, text: &str) {
    out.push_str(text);
    out.push('\n');
}

fn section(out: &mut String, title: &str) {
    out.push('\n');
    line(out, &join!("== ", title, " =="));
}

fn heading(out: &mut String, title: &str) {
    out.push('\n');
    line(out, &join!("-- ", title));
}

fn table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    Table { headers: headers.iter().map(|h| s!(*h)).collect(), rows }
}

fn count_table(out: &mut String, label: &str, counts: &[(String, usize)]) {
    let rows = counts.iter().map(|(l, n)| vec![l.clone(), n.to_string()]).collect();
    text_table(out, &table(&[label, "count"], rows));
}

fn mean_table(out: &mut String, means: &[(String, f64)]) {
    let rows = means.iter().map(|(c, m)| vec![c.clone(), format!("{m:.2}")]).collect();
    text_table(out, &table(&["category", "mean"], rows));
}

fn box_table(out: &mut String, label: &str, groups: Vec<(String, Vec<f64>)>) {
    let rows = groups
        .into_iter()
        .filter_map(|(g, vals)| {
            let b = BoxStats::from_values(&vals)?;
            Some(vec![
                g,
                b.n.to_string(),
                format!("{:.2}", b.min),
                format!("{:.2}", b.q1),
                format!("{:.2}", b.median),
                format!("{:.2}", b.q3),
                format!("{:.2}", b.max),
            ])
        })
        .collect();
    text_table(out, &table(&[label, "n", "min", "q1", "median", "q3", "max"], rows));
}

/// Left-aligned columns padded to the widest cell.
fn text_table(out: &mut String, t: &Table) {
    if t.rows.is_empty() {
        line(out, "(no data)");
        return;
    }
    let mut widths: Vec<usize> = t.headers.iter().map(|h| h.chars().count()).collect();
    for r in &t.rows {
        for (i, c) in r.iter().enumerate() {
            if let Some(w) = widths.get_mut(i) {
                *w = (*w).max(c.chars().count());
            }
        }
    }
    let fmt_row = |cells: &[String]| -> String {
        let padded: Vec<String> = cells
            .iter()
            .zip(&widths)
            .map(|(c, w)| format!("{c:<w$}", w = *w))
            .collect();
        s!(padded.join("  ").trim_end())
    };
    line(out, &fmt_row(&t.headers));
    for r in &t.rows {
        line(out, &fmt_row(r));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::CountrySelection;

    fn ds() -> DataSet {
        let mut o1 = Offer { vendor: s!("a"), title: s!("Haze"), price: s!("USD 10.00"), shipping_from: s!("Netherlands"), shipping_to: s!("Worldwide"), ..Offer::default() };
        o1.set_categories(&["Drugs", "Cannabis"]);
        let mut o2 = o1.clone();
        o2.price = s!("USD 30.00");
        let o3 = Offer { vendor: s!("b"), title: s!("Pills"), price: s!("5"), shipping_from: s!("Germany"), ..Offer::default() };
        DataSet::new(
            vec![o1, o2, o3],
            vec![
                Vendor { vendor: s!("a"), rank: s!("Rank 1"), transactions: s!("30"), since: s!("Jan 2021"), ..Vendor::default() },
                Vendor { vendor: s!("b"), ..Vendor::default() },
            ],
        )
    }

    #[test]
    fn report_lists_every_chapter() {
        let text = render(&ds(), &DashboardOptions::default());
        for s in ["== 1. Data ==", "== 2. Offer graphs ==", "== 3. Vendor graphs ==", "== 4. Insights =="] {
            assert!(text.contains(s), "missing {s}");
        }
        assert!(text.contains("Offers: 3  Vendors: 2"));
        // both countries are below the default threshold of 50
        assert!(text.contains("Other countries  3"));
        assert!(text.contains("NLD"));
        assert!(text.contains("Cannabis  20.00"));
    }

    #[test]
    fn report_respects_country_filter_and_is_stable() {
        let mut opts = DashboardOptions::default();
        opts.countries = CountrySelection::Only(vec![s!("Germany")]);
        let a = render(&ds(), &opts);
        assert!(a.contains("Offers: 1  Vendors: 1"));
        assert!(a.contains("Countries: Germany"));
        assert_eq!(a, render(&ds(), &opts));
    }
}
