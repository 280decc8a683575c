// src/core/html.rs
//
// Small helpers over `scraper`'s selector API. Selectors are page constants;
// a selector that fails to parse is logged and matches nothing.

use scraper::{ElementRef, Html, Selector};

use super::sanitize::normalize_ws;

pub fn selector(css: &str) -> Option<Selector> {
    match Selector::parse(css) {
        Ok(s) => Some(s),
        Err(e) => {
            loge!("Bad selector `{css}`: {e:?}");
            None
        }
    }
}

/// Whitespace-normalized text content of an element.
pub fn text_of(el: ElementRef<'_>) -> String {
    normalize_ws(&el.text().collect::<String>())
}

pub fn select_all<'a>(root: ElementRef<'a>, css: &str) -> Vec<ElementRef<'a>> {
    match selector(css) {
        Some(sel) => root.select(&sel).collect(),
        None => Vec::new(),
    }
}

pub fn select_texts(root: ElementRef<'_>, css: &str) -> Vec<String> {
    select_all(root, css).into_iter().map(text_of).collect()
}

/// First match with non-empty text.
pub fn first_text(root: ElementRef<'_>, css: &str) -> Option<String> {
    select_all(root, css)
        .into_iter()
        .map(text_of)
        .find(|t| !t.is_empty())
}

/// Every `a[href]` whose href contains all `needles`, in document order, first occurrence kept.
pub fn hrefs_containing(doc: &Html, needles: &[&str]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for a in select_all(doc.root_element(), "a[href]") {
        let Some(href) = a.value().attr("href") else { continue };
        let href = href.trim();
        if href.is_empty() || !needles.iter().all(|n| href.contains(n)) {
            continue;
        }
        if !out.iter().any(|h| h == href) {
            out.push(s!(href));
        }
    }
    out
}

/// Label/value pairs from `<tr><th|td>label</th><td>value</td></tr>` and `<dl><dt/><dd/></dl>`.
/// Labels are lowercased and stripped of a trailing ':'.
pub fn labelled_values(doc: &Html) -> Vec<(String, String)> {
    let root = doc.root_element();
    let mut out = Vec::new();

    for tr in select_all(root, "tr") {
        let cells = select_all(tr, "th, td");
        if cells.len() < 2 { continue; }
        let label = clean_label(&text_of(cells[0]));
        if label.is_empty() { continue; }
        out.push((label, text_of(cells[1])));
    }

    for dl in select_all(root, "dl") {
        let mut label: Option<String> = None;
        for child in dl.child_elements() {
            match child.value().name() {
                "dt" => label = Some(clean_label(&text_of(child))),
                "dd" => {
                    if let Some(l) = label.take() {
                        if !l.is_empty() { out.push((l, text_of(child))); }
                    }
                }
                _ => {}
            }
        }
    }
    out
}

fn clean_label(s: &str) -> String {
    s.trim().trim_end_matches(':').trim().to_lowercase()
}
