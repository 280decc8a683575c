// src/gui/pages/insights.rs
use eframe::egui;

use crate::{
    gui::{app::App, components::charts},
    stats::{
        distribution::histogram,
        insights::{categories_per_vendor, price_by_group, transactions_per_month_by, CategoryDepth},
        vendors::Level,
    },
};

pub struct InsightsPage;
pub static PAGE: InsightsPage = InsightsPage;

const HYPOTHESES: [&str; 7] = [
    "Vendors either specialise in one kind of product or sell a wide range.",
    "The country an offer ships from says something about its price.",
    "More trusted vendors ask higher prices.",
    "More trusted vendors make more transactions per month.",
    "Shipping worldwide goes with more deals.",
    "Higher ranked vendors sell more specialised products.",
    "Higher ranked vendors ask higher prices.",
];

impl super::Page for InsightsPage {
    fn title(&self) -> &'static str { "4. Insights" }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        let reference = app.state.options.dashboard.reference_date;
        let all = app.data.all();
        let offers = all.offers();
        let vendors = all.vendors();

        super::subheading(ui, "Questions we set out with");
        for h in HYPOTHESES {
            ui.label(join!("• ", h));
        }

        super::subheading(ui, "Do trusted vendors sell more?");
        ui.label(format!("Transactions per month since registration, counted up to {reference}."));
        let tpm = transactions_per_month_by(&vendors, Level::Verification, reference);
        charts::boxes(ui, &super::box_groups(tpm));

        super::subheading(ui, "Do higher ranked vendors ask more?");
        charts::boxes(ui, &super::box_groups(price_by_group(&offers, &vendors, Level::Rank)));

        super::subheading(ui, "Do verified vendors ask more?");
        charts::boxes(ui, &super::box_groups(price_by_group(&offers, &vendors, Level::Verification)));

        super::subheading(ui, "Specialists or generalists?");
        let bins = app.state.options.dashboard.bins;
        for (label, depth) in [("Level-2 categories per vendor", CategoryDepth::Level2), ("Deepest categories per vendor", CategoryDepth::Highest)] {
            ui.label(label);
            let n: Vec<f64> = categories_per_vendor(&offers, depth).into_iter().map(|(_, n)| n as f64).collect();
            charts::histogram(ui, &histogram(&n, bins));
        }
    }
}
