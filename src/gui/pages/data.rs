// src/gui/pages/data.rs
use eframe::egui;

use crate::gui::{app::App, components::data_table};

pub struct DataPage;
pub static PAGE: DataPage = DataPage;

const OFFER_COLUMNS: &[(&str, &str)] = &[
    ("vendor", "profile name of the seller"),
    ("category_level_1..3", "breadcrumb of the listing, top level first"),
    ("highest_category", "deepest category present"),
    ("title", "listing title"),
    ("price in $", "asking price, USD"),
    ("shipping_from / shipping_to", "self-reported origin and destination"),
];

const VENDOR_COLUMNS: &[(&str, &str)] = &[
    ("rank", "sales bracket given by the market"),
    ("verification", "number of other markets with positive history"),
    ("transactions", "completed sales"),
    ("feedback_*", "feedback counts and positive share"),
    ("since", "registration date"),
];

impl super::Page for DataPage {
    fn title(&self) -> &'static str { "1. Data" }

    fn draw_sidebar(&self, ui: &mut egui::Ui, app: &mut App) {
        super::country_filter(ui, app);
    }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        let sel = app.selection();
        ui.label(format!(
            "{} offers from {} vendors match the country filter.",
            sel.offer_count(),
            sel.vendor_count()
        ));
        let offers = sel.offer_table();
        let vendors = sel.vendor_table();

        super::subheading(ui, "Offers");
        glossary(ui, "offer_columns", OFFER_COLUMNS);
        let gui = &mut app.state.gui;
        let t = data_table::controls(ui, "offers", offers, &mut gui.offers_view);
        data_table::draw(ui, "offers_table", &t.head(gui.offers_view.rows));

        super::subheading(ui, "Vendors");
        glossary(ui, "vendor_columns", VENDOR_COLUMNS);
        let t = data_table::controls(ui, "vendors", vendors, &mut gui.vendors_view);
        data_table::draw(ui, "vendors_table", &t.head(gui.vendors_view.rows));
    }
}

fn glossary(ui: &mut egui::Ui, id: &str, rows: &[(&str, &str)]) {
    egui::Grid::new(id).num_columns(2).spacing([16.0, 2.0]).show(ui, |ui| {
        for (col, what) in rows {
            ui.monospace(*col);
            ui.label(*what);
            ui.end_row();
        }
    });
    ui.add_space(4.0);
}
