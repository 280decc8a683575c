// src/core/mod.rs

pub mod country;
pub mod html;
pub mod net;
pub mod sanitize;
