// src/gui/app.rs
use eframe::egui;

use crate::{
    config::{consts::ALL_COUNTRIES, state::AppState},
    data::{CountrySelection, DataSet, Selection},
    error::{Error, Result},
    log::{self as applog, LogTarget},
    stats::vendors::{level_labels, Level},
};

use super::{components, pages::Page, router};

pub fn run(options: eframe::NativeOptions) -> Result<()> {
    applog::init(LogTarget::File);
    eframe::run_native(
        "Market Lens",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )
    .map_err(|e| Error::Gui(e.to_string()))
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // both tables, loaded once
    pub data: DataSet,

    // multiselect choices, "All …" first
    pub country_options: Vec<String>,
    pub verification_options: Vec<String>,
    pub rank_options: Vec<String>,

    // output text field UX (we map this <-> ExportOptions)
    pub out_path_text: String,
    pub out_path_dirty: bool,

    pub status: String,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let out_path_text = state.options.export.out_path().to_string_lossy().into_owned();
        let mut app = Self {
            state,
            data: DataSet::default(),
            country_options: Vec::new(),
            verification_options: Vec::new(),
            rank_options: Vec::new(),
            out_path_text,
            out_path_dirty: false,
            status: s!("Idle"),
        };
        app.reload();
        app
    }

    /// (Re)load both CSVs from the configured data paths.
    pub fn reload(&mut self) {
        let opts = &self.state.options.data;
        match DataSet::load(opts) {
            Ok(ds) => {
                logf!("Init: offers={} vendors={}", ds.offers.len(), ds.vendors.len());
                self.status = format!("Loaded {} offers, {} vendors", ds.offers.len(), ds.vendors.len());
                self.data = ds;
            }
            Err(e) => {
                loge!("Init: could not load data: {e}");
                self.status = format!("No data: {e}");
                self.data = DataSet::default();
            }
        }
        self.refresh_options();
    }

    fn refresh_options(&mut self) {
        let all = self.data.all();
        let vendors = all.vendors();

        self.country_options = std::iter::once(s!(ALL_COUNTRIES))
            .chain(self.data.shipping_from_countries())
            .collect();
        self.verification_options = std::iter::once(s!(Level::Verification.all_label()))
            .chain(level_labels(&vendors, Level::Verification))
            .collect();
        self.rank_options = std::iter::once(s!(Level::Rank.all_label()))
            .chain(level_labels(&vendors, Level::Rank))
            .collect();
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn current_index(&self) -> usize { self.state.gui.current_page_index }

    #[inline]
    pub fn set_current_index(&mut self, idx: usize) { self.state.gui.current_page_index = idx; }

    #[inline]
    pub fn current_page(&self) -> &'static dyn Page {
        let pages = router::all_pages();
        pages[self.current_index().min(pages.len() - 1)]
    }

    #[inline]
    pub fn status<T: Into<String>>(&mut self, msg: T) {
        self.status = msg.into();
    }

    pub fn country_selection(&self) -> CountrySelection {
        CountrySelection::from_picked(&self.state.gui.selected_countries)
    }

    pub fn selection(&self) -> Selection<'_> {
        self.data.select(&self.country_selection())
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("chapters")
            .resizable(true)
            .default_width(240.0)
            .show(ctx, |ui| {
                components::sidebar::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            let page = self.current_page();
            ui.heading(page.title());
            ui.separator();
            egui::ScrollArea::vertical()
                .id_salt(("page", self.current_index()))
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    page.draw(ui, self);
                });
        });
    }
}
