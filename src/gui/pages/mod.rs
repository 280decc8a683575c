// src/gui/pages/mod.rs
use eframe::egui;

use crate::{
    config::options::DashboardOptions,
    gui::{app::App, components::multiselect},
    stats::distribution::BoxStats,
};

pub mod data;
pub mod insights;
pub mod offer_graphs;
pub mod preface;
pub mod reports;
pub mod vendor_graphs;

/// One dashboard chapter. Pages are stateless; everything they change lives in `App`.
pub trait Page: Send + Sync + 'static {
    fn title(&self) -> &'static str;

    /// Chapter controls shown in the sidebar under the menu.
    fn draw_sidebar(&self, _ui: &mut egui::Ui, _app: &mut App) {}

    /// Chapter body (central panel, already inside a vertical scroll area).
    fn draw(&self, ui: &mut egui::Ui, app: &mut App);
}

/// The shipping-from country multiselect shared by chapters 1, 2 and 5.
pub(crate) fn country_filter(ui: &mut egui::Ui, app: &mut App) {
    ui.label("Select what country/countries you want to see the data of.");
    multiselect::draw(
        ui,
        "Countries",
        &app.country_options,
        &mut app.state.gui.selected_countries,
    );
}

/// Dashboard options with the sidebar's current country picks.
pub(crate) fn dashboard_options(app: &App) -> DashboardOptions {
    DashboardOptions {
        countries: app.country_selection(),
        ..app.state.options.dashboard.clone()
    }
}

pub(crate) fn subheading(ui: &mut egui::Ui, text: &str) {
    ui.add_space(12.0);
    ui.label(egui::RichText::new(text).strong().size(16.0));
    ui.add_space(4.0);
}

/// Five-number summaries for each non-empty group.
pub(crate) fn box_groups(groups: Vec<(String, Vec<f64>)>) -> Vec<(String, BoxStats)> {
    groups
        .into_iter()
        .filter_map(|(g, vals)| BoxStats::from_values(&vals).map(|b| (g, b)))
        .collect()
}
