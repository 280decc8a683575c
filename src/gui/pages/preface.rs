// src/gui/pages/preface.rs
use eframe::egui;

use crate::gui::app::App;

pub struct PrefacePage;
pub static PAGE: PrefacePage = PrefacePage;

const INTRO: &str = "\
This dashboard summarises drug offers and vendor profiles collected from an onion-service \
marketplace. A small crawler walked the market's home page, every linked vendor profile and \
each vendor's offer listings, and stored what it found in two tables: offers.csv and vendors.csv.

The data is a snapshot of the moment it was crawled. Offers, vendors and prices may be outdated, \
and everything shown is self-reported by the vendors (shipping countries included).

The chapters in the left panel start with a guided read (data, offer graphs, vendor graphs, \
insights) and end with a sandbox where you can filter the tables yourself and export them. \
Chapter-specific controls appear in the sidebar under the chapter list.";

impl super::Page for PrefacePage {
    fn title(&self) -> &'static str { "0. Preface" }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        super::subheading(ui, "Insights into dark web drug selling");
        ui.label(INTRO);

        super::subheading(ui, "Loaded data");
        let opts = &app.state.options.data;
        egui::Grid::new("preface_files").num_columns(3).striped(true).show(ui, |ui| {
            ui.label("offers");
            ui.monospace(opts.offers.display().to_string());
            ui.label(format!("{} rows", app.data.offers.len()));
            ui.end_row();
            ui.label("vendors");
            ui.monospace(opts.vendors.display().to_string());
            ui.label(format!("{} rows", app.data.vendors.len()));
            ui.end_row();
        });
        if app.data.is_empty() {
            ui.colored_label(ui.visuals().warn_fg_color, "No data loaded; run `cli crawl` or place the CSVs above.");
        }
    }
}
