// src/specs/profile.rs
//
// Vendor profile page: metadata rows + links to the vendor's offer listings.
// Metadata is read from label/value rows (tables or <dl>), matched by label
// keywords, so attribute order and extra rows don't matter.

use scraper::Html;

use crate::config::consts::OFFERS_HREF;
use crate::core::html::{first_text, hrefs_containing, labelled_values};
use crate::core::sanitize::{last_path_segment, parse_count};
use crate::records::Vendor;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Field {
    Rank,
    Verification,
    Transactions,
    Feedback,
    Positive,
    Since,
}

fn classify(label: &str) -> Option<Field> {
    // "positive feedback" before "feedback"
    if label.contains("positive") {
        Some(Field::Positive)
    } else if label.contains("verification") || label.contains("verified") {
        Some(Field::Verification)
    } else if label.contains("rank") {
        Some(Field::Rank)
    } else if label.contains("transactions") || label.contains("sales") {
        Some(Field::Transactions)
    } else if label.contains("feedback") {
        Some(Field::Feedback)
    } else if label.contains("since") || label.contains("registered") || label.contains("joined") {
        Some(Field::Since)
    } else {
        None
    }
}

/// Links to this vendor's offer listing pages (href contains "items" and "vendor").
pub fn offer_links(html_doc: &str) -> Vec<String> {
    let doc = Html::parse_document(html_doc);
    hrefs_containing(&doc, &OFFERS_HREF)
}

/// Vendor record from a profile page. Fields the page doesn't show stay empty.
pub fn vendor_info(html_doc: &str, profile_url: &str) -> Vendor {
    let doc = Html::parse_document(html_doc);
    let root = doc.root_element();

    let vendor = first_text(root, ".vendor-name")
        .or_else(|| last_path_segment(profile_url))
        .or_else(|| first_text(root, "h1"))
        .unwrap_or_default();

    let mut v = Vendor { vendor, ..Vendor::default() };

    for (label, value) in labelled_values(&doc) {
        let Some(field) = classify(&label) else { continue };
        let slot = match field {
            Field::Rank => &mut v.rank,
            Field::Verification => &mut v.verification,
            Field::Transactions => &mut v.transactions,
            Field::Positive => &mut v.positive_feedback,
            Field::Since => &mut v.since,
            Field::Feedback => {
                if v.feedback_total.is_empty() {
                    set_feedback(&mut v, &value);
                }
                continue;
            }
        };
        // First row wins; later duplicates (e.g. footer summaries) are ignored.
        if slot.is_empty() {
            *slot = value;
        }
    }

    logd!("Profile: {} rank={:?} verification={:?}", v.vendor, v.rank, v.verification);
    v
}

/// "+120 / 3 / -1" → positive/neutral/negative and their sum; a single number is the total.
fn set_feedback(v: &mut Vendor, value: &str) {
    let parts: Vec<&str> = value.split('/').map(str::trim).collect();
    if parts.len() == 3 {
        let counts: Vec<Option<u64>> = parts.iter().map(|p| parse_count(p)).collect();
        if let [Some(p), Some(n), Some(m)] = counts[..] {
            v.feedback_positive = p.to_string();
            v.feedback_neutral = n.to_string();
            v.feedback_negative = m.to_string();
            v.feedback_total = (p + n + m).to_string();
            return;
        }
    }
    if let Some(total) = parse_count(value) {
        v.feedback_total = total.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <h1>Market</h1>
        <div class="profile">
          <span class="vendor-name"> Acme Labs </span>
          <table class="stats">
            <tr><th>Rank</th><td>Rank 2</td></tr>
            <tr><th>Verification</th><td>Verification Level 3</td></tr>
            <tr><th>Transactions</th><td>1,204</td></tr>
            <tr><th>Feedback</th><td>+120 / 3 / -1</td></tr>
            <tr><th>Positive feedback</th><td>96.8%</td></tr>
          </table>
          <dl><dt>Member since:</dt><dd>Mar 12, 2020</dd></dl>
          <a href="/items?vendor=acme&amp;page=1">Offers</a>
          <a href="/items?vendor=acme&amp;page=2">2</a>
          <a href="/items?category=4">Stimulants</a>
        </div>"#;

    #[test]
    fn reads_metadata_rows() {
        let v = vendor_info(PAGE, "http://m.onion/profile/acme");
        assert_eq!(v.vendor, "Acme Labs");
        assert_eq!(v.rank, "Rank 2");
        assert_eq!(v.verification, "Verification Level 3");
        assert_eq!(v.transactions, "1,204");
        assert_eq!(v.feedback_positive, "120");
        assert_eq!(v.feedback_negative, "1");
        assert_eq!(v.feedback_total, "124");
        assert_eq!(v.positive_feedback, "96.8%");
        assert_eq!(v.since, "Mar 12, 2020");
    }

    #[test]
    fn name_falls_back_to_url_segment() {
        let v = vendor_info("<h1>Market</h1><table><tr><th>Feedback</th><td>77</td></tr></table>",
            "http://m.onion/profile/zeta/");
        assert_eq!(v.vendor, "zeta");
        assert_eq!(v.feedback_total, "77");
        assert!(v.rank.is_empty());
    }

    #[test]
    fn offer_links_need_items_and_vendor() {
        assert_eq!(offer_links(PAGE), vec!["/items?vendor=acme&page=1", "/items?vendor=acme&page=2"]);
    }
}
