// src/specs/offers.rs
//
// Vendor offer listing page.
//
// Two layouts are handled:
// - item mode: each offer sits in an `.item` container (div/tr/li) holding
//   `a.title`, `span.Price`, a `.category` breadcrumb and `.shipping-from` /
//   `.shipping-to` labels.
// - zip mode: no containers; every `a.title` and every `span.Price` on the page
//   are paired in order. Surplus on either side is dropped.

use scraper::{ElementRef, Html};

use crate::core::html::{first_text, select_all, select_texts};
use crate::records::Offer;

pub fn extract(html_doc: &str, vendor: &str) -> Vec<Offer> {
    let doc = Html::parse_document(html_doc);
    let root = doc.root_element();

    let items = select_all(root, ".item");
    let offers = if items.is_empty() {
        zip_mode(root, vendor)
    } else {
        items.into_iter().filter_map(|it| item_offer(it, vendor)).collect()
    };

    logd!("Offers: {} for {}", offers.len(), vendor);
    offers
}

fn item_offer(item: ElementRef<'_>, vendor: &str) -> Option<Offer> {
    let title = first_text(item, "a.title")?;

    let mut offer = Offer {
        vendor: s!(vendor),
        title,
        price: first_text(item, "span.Price").unwrap_or_default(),
        shipping_from: first_text(item, ".shipping-from").map(value_part).unwrap_or_default(),
        shipping_to: first_text(item, ".shipping-to").map(value_part).unwrap_or_default(),
        ..Offer::default()
    };

    let mut crumbs = select_texts(item, ".category a");
    if crumbs.is_empty() {
        crumbs = select_texts(item, ".category span");
    }
    crumbs.retain(|c| !c.is_empty() && c != "/" && c != "»" && c != ">");
    offer.set_categories(&crumbs);

    Some(offer)
}

fn zip_mode(root: ElementRef<'_>, vendor: &str) -> Vec<Offer> {
    let titles = select_texts(root, "a.title[href]");
    let prices = select_texts(root, "span.Price");
    if titles.len() != prices.len() {
        logw!(
            "Offers: {} title(s) vs {} price(s) for {}; pairing in order",
            titles.len(), prices.len(), vendor
        );
    }
    titles
        .into_iter()
        .zip(prices)
        .map(|(title, price)| Offer {
            vendor: s!(vendor),
            title,
            price,
            ..Offer::default()
        })
        .collect()
}

/// "Ships from: Netherlands" → "Netherlands"
fn value_part(text: String) -> String {
    match text.split_once(':') {
        Some((_, v)) => s!(v.trim()),
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zip_mode_pairs_titles_and_prices() {
        let page = r#"
            <a class="title" href="/items/1"> 5g  Cocaine </a><span class="Price">USD 300.00</span>
            <a class="title" href="/items/2">10 x XTC</a><span class="Price">USD 45.00</span>
            <a class="title">no href</a>
            <span class="Price">USD 1.00</span>"#;
        let offers = extract(page, "acme");
        // two titles with href, three prices: surplus price dropped
        assert_eq!(offers.len(), 2);
        assert_eq!(offers[0].title, "5g Cocaine");
        assert_eq!(offers[0].price, "USD 300.00");
        assert_eq!(offers[1].title, "10 x XTC");
        assert_eq!(offers[1].vendor, "acme");
        assert!(offers[1].category_level_1.is_empty());
    }

    #[test]
    fn item_mode_reads_categories_and_shipping() {
        let page = r#"
            <div class="item">
              <div class="category"><a>Drugs</a> / <a>Stimulants</a> / <a>Cocaine</a></div>
              <a class="title" href="/items/1">Colombian 1g</a>
              <span class="Price">USD 1,050.00</span>
              <span class="shipping-from">Ships from: Netherlands</span>
              <span class="shipping-to">Ships to: Worldwide</span>
            </div>
            <div class="item"><span class="Price">USD 3</span></div>
            <div class="item">
              <div class="category"><span>Drugs</span><span>Cannabis</span></div>
              <a class="title" href="/items/2">Haze 10g</a>
            </div>"#;
        let offers = extract(page, "acme");
        assert_eq!(offers.len(), 2);

        let a = &offers[0];
        assert_eq!(a.category_level_1, "Drugs");
        assert_eq!(a.category_level_3, "Cocaine");
        assert_eq!(a.highest_category(), "Cocaine");
        assert_eq!(a.price_usd(), Some(1050.0));
        assert_eq!(a.shipping_from, "Netherlands");
        assert_eq!(a.shipping_to, "Worldwide");

        let b = &offers[1];
        assert_eq!(b.highest_category(), "Cannabis");
        assert!(b.price.is_empty());
        assert!(b.shipping_from.is_empty());
    }
}
