// src/gui/router.rs
use super::pages::{self, Page};

/// Chapters, in menu order.
pub static PAGES: &[&'static dyn Page] = &[
    &pages::preface::PAGE,
    &pages::data::PAGE,
    &pages::offer_graphs::PAGE,
    &pages::vendor_graphs::PAGE,
    &pages::insights::PAGE,
    &pages::reports::PAGE,
];

pub fn all_pages() -> &'static [&'static dyn Page] {
    PAGES
}
