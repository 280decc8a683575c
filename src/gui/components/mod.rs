// src/gui/components/mod.rs
pub mod charts;
pub mod data_table;
pub mod export_bar;
pub mod multiselect;
pub mod sidebar;
