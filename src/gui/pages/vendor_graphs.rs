// src/gui/pages/vendor_graphs.rs
use eframe::egui;

use crate::{
    gui::{app::App, components::{charts, multiselect}},
    stats::{
        distribution::histogram,
        vendors::{cumulative_by_month, filter_levels, offers_per_vendor, rank_counts, verification_counts, Level},
    },
};

pub struct VendorGraphsPage;
pub static PAGE: VendorGraphsPage = VendorGraphsPage;

const RANKS: &str = "Rank 0 means 0-9 items sold, Rank 1 means 10-99 items sold, and so on \
upward. A top seller has more than 1000 sales.";

const LEVELS: &str = "The verification level is the number of other markets on which \
the vendor can show a positive selling history.";

impl super::Page for VendorGraphsPage {
    fn title(&self) -> &'static str { "3. Vendor graphs" }

    fn draw_sidebar(&self, ui: &mut egui::Ui, app: &mut App) {
        ui.label("Filter the transaction graphs:");
        multiselect::draw(
            ui,
            "Verification",
            &app.verification_options,
            &mut app.state.gui.selected_verifications,
        );
        ui.add_space(8.0);
        ui.label("Filter the offers-per-vendor graphs:");
        multiselect::draw(ui, "Rank", &app.rank_options, &mut app.state.gui.selected_ranks);
    }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        let bins = app.state.options.dashboard.bins;
        let gui = &app.state.gui;
        let all = app.data.all();
        let offers = all.offers();
        let vendors = all.vendors();
        if vendors.is_empty() {
            ui.weak("No vendors loaded.");
            return;
        }

        super::subheading(ui, "Vendors registered over time");
        let series: Vec<(String, f64)> = cumulative_by_month(&vendors)
            .into_iter()
            .map(|(m, n)| (m.format("%Y-%m").to_string(), n as f64))
            .collect();
        charts::line(ui, &series);

        super::subheading(ui, "Vendor ranks");
        ui.label(RANKS);
        let ranks = rank_counts(&vendors);
        charts::pie(ui, &ranks);
        charts::bars_usize(ui, &ranks);

        super::subheading(ui, "Verification levels");
        ui.label(LEVELS);
        let levels = verification_counts(&vendors);
        charts::pie(ui, &levels);
        charts::bars_usize(ui, &levels);

        super::subheading(ui, "Transactions per vendor");
        let picked = filter_levels(&vendors, &gui.selected_verifications, Level::Verification);
        let tx: Vec<f64> = picked.iter().filter_map(|v| v.transactions_n()).map(|n| n as f64).collect();
        charts::histogram(ui, &histogram(&tx, bins));
        charts::boxes(ui, &super::box_groups(vec![(s!("transactions"), tx)]));

        super::subheading(ui, "Offers per vendor");
        let picked = filter_levels(&vendors, &gui.selected_ranks, Level::Rank);
        let per_vendor: Vec<f64> = offers_per_vendor(&offers, &picked).into_iter().map(|(_, n)| n as f64).collect();
        charts::histogram(ui, &histogram(&per_vendor, bins));
        charts::boxes(ui, &super::box_groups(vec![(s!("offers"), per_vendor)]));

        super::subheading(ui, "Total feedback per vendor");
        let feedback: Vec<f64> = vendors.iter().filter_map(|v| v.feedback_total_n()).map(|n| n as f64).collect();
        charts::histogram(ui, &histogram(&feedback, bins));
    }
}
