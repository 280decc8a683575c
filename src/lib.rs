// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod specs;

pub mod data;
pub mod file;
pub mod gui;
pub mod progress;
pub mod records;
pub mod report;
pub mod scrape;
pub mod stats;
pub mod store;

pub use error::{Error, Result};
