// src/gui/pages/offer_graphs.rs
use eframe::egui;

use crate::{
    config::consts::{MIN_OFFERS_HI, MIN_OFFERS_LO, MIN_OFFERS_STEP, OTHER_COUNTRIES},
    core::country,
    data::Table,
    gui::{app::App, components::{charts, data_table}},
    stats::{
        counts::{bucket_small, value_counts},
        prices::{category_means, category_prices, frequent_categories},
    },
};

pub struct OfferGraphsPage;
pub static PAGE: OfferGraphsPage = OfferGraphsPage;

impl super::Page for OfferGraphsPage {
    fn title(&self) -> &'static str { "2. Offer graphs" }

    fn draw_sidebar(&self, ui: &mut egui::Ui, app: &mut App) {
        super::country_filter(ui, app);
        ui.add_space(8.0);

        let dash = &mut app.state.options.dashboard;
        let mut v = dash.min_offers;
        let slider = egui::Slider::new(&mut v, MIN_OFFERS_LO..=MIN_OFFERS_HI)
            .step_by(MIN_OFFERS_STEP as f64)
            .text("min offers");
        if ui.add(slider).changed() {
            dash.set_min_offers(v);
            logd!("UI: min_offers → {}", dash.min_offers);
        }
    }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        let opts = super::dashboard_options(app);
        let min = opts.min_offers as usize;
        let sel = app.data.select(&opts.countries);
        let offers = sel.offers();
        if offers.is_empty() {
            ui.weak("No offers ship from the selected countries.");
            return;
        }

        super::subheading(ui, "Where are offers shipped from?");
        ui.label(format!("Countries with fewer than {min} offers are grouped as \"{OTHER_COUNTRIES}\"."));
        let from = value_counts(offers.iter().map(|o| &o.shipping_from));
        charts::pie(ui, &bucket_small(from.clone(), min, OTHER_COUNTRIES));

        super::subheading(ui, "Where are offers shipped to?");
        let to = value_counts(offers.iter().map(|o| &o.shipping_to));
        charts::pie(ui, &bucket_small(to, min, OTHER_COUNTRIES));

        super::subheading(ui, "Offers per country of origin");
        let codes = Table {
            headers: vec![s!("iso_alpha"), s!("country"), s!("count")],
            rows: from
                .into_iter()
                .map(|(c, n)| vec![s!(country::alpha3(&c).unwrap_or("-")), c, n.to_string()])
                .collect(),
        };
        data_table::draw(ui, "country_codes", &codes);

        super::subheading(ui, "Prices per category ($)");
        let cats = category_prices(&offers);
        charts::strip(ui, &cats);
        ui.label("Mean price per category, highest first:");
        charts::bars(ui, &category_means(&cats));

        super::subheading(ui, &format!("Categories with at least {min} offers"));
        let frequent = frequent_categories(&offers, min);
        if frequent.is_empty() {
            ui.weak("No category reaches the threshold; lower it in the sidebar.");
            return;
        }
        charts::strip(ui, &frequent);
        charts::bars(ui, &category_means(&frequent));
    }
}
