// src/specs/mod.rs
//! # Page contracts
//!
//! One module per page shape the crawler visits. Each spec encodes *where the
//! data lives in the HTML* and nothing else.
//!
//! ## What lives here
//! - **Pure HTML parsing**: every function takes page text and returns links or
//!   records. No network, no files.
//! - **Link filters**: substring matches on `href` (`profile` on the home page,
//!   `items` + `vendor` on profiles).
//! - **Field extraction** by tag/class (`a.title`, `span.Price`, label/value rows).
//!
//! ## What does **not** live here
//! - Fetching, pacing, ordering of the traversal (`scrape`).
//! - Persistence (`store`) and any aggregation (`stats`).
//!
//! ## Typical call chain
//! ```text
//! scrape::crawl → Session::get(home)    → home::profile_links
//!               → Session::get(profile) → profile::{vendor_info, offer_links}
//!               → Session::get(offers)  → offers::extract
//! ```
//!
//! ## Testing notes
//! Specs are tested offline against saved pages under `tests/fixtures/`.
pub mod home;
pub mod offers;
pub mod profile;
