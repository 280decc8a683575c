// src/gui/components/sidebar.rs
//
// Chapter menu on top, then the current chapter's own controls, then status.

use eframe::egui;

use crate::gui::{app::App, router};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Chapters");

    let cur = app.current_index();
    let mut picked = cur;
    for (idx, page) in router::all_pages().iter().enumerate() {
        ui.radio_value(&mut picked, idx, page.title());
    }
    if picked != cur {
        logf!("UI: Chapter {} → {}", router::all_pages()[cur].title(), router::all_pages()[picked].title());
        app.set_current_index(picked);
    }

    ui.separator();
    app.current_page().draw_sidebar(ui, app);

    ui.with_layout(egui::Layout::bottom_up(egui::Align::LEFT), |ui| {
        if ui.button("Reload data").clicked() {
            app.reload();
        }
        ui.label(egui::RichText::new(&app.status).small());
        ui.separator();
    });
}
