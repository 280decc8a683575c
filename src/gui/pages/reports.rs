// src/gui/pages/reports.rs
use eframe::egui;

use crate::gui::{app::App, components::{data_table, export_bar}};

pub struct ReportsPage;
pub static PAGE: ReportsPage = ReportsPage;

impl super::Page for ReportsPage {
    fn title(&self) -> &'static str { "5. Create your own report" }

    fn draw_sidebar(&self, ui: &mut egui::Ui, app: &mut App) {
        super::country_filter(ui, app);
    }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        ui.label("Pick countries in the sidebar and columns below, then export what you see.");

        let (offers, vendors) = {
            let sel = app.selection();
            (sel.offer_table(), sel.vendor_table())
        };

        let gui = &mut app.state.gui;
        super::subheading(ui, "Offers");
        let offers = data_table::controls(ui, "report_offers", offers, &mut gui.report_offers_view);
        data_table::draw(ui, "report_offers_table", &offers.clone().tail(gui.report_offers_view.rows));

        super::subheading(ui, "Vendors");
        let vendors = data_table::controls(ui, "report_vendors", vendors, &mut gui.report_vendors_view);
        data_table::draw(ui, "report_vendors_table", &vendors.clone().tail(gui.report_vendors_view.rows));

        super::subheading(ui, "Export");
        ui.label(format!("Exports all {} offer and {} vendor rows with the picked columns.", offers.len(), vendors.len()));
        export_bar::draw(ui, app, &[("offers", &offers), ("vendors", &vendors)]);
    }
}
