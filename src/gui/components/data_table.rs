// src/gui/components/data_table.rs
//
// Read-only table view plus the column picker / row count controls that go
// with it. Purely a view; the caller owns the Table and the TableView state.

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::config::state::TableView;
use crate::data::Table;

const MAX_ROWS: usize = 500;

/// Column checkboxes and a row-count slider; returns the table reduced to them.
pub fn controls(ui: &mut egui::Ui, id: &str, table: Table, view: &mut TableView) -> Table {
    view.ensure_columns(table.headers.len());

    egui::CollapsingHeader::new("Columns")
        .id_salt((id, "columns"))
        .default_open(false)
        .show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                for (i, h) in table.headers.iter().enumerate() {
                    if let Some(flag) = view.visible.get_mut(i) {
                        if ui.checkbox(flag, h).changed() {
                            logd!("UI: {id} column `{h}` → {flag}");
                        }
                    }
                }
            });
        });

    let max = table.len().clamp(1, MAX_ROWS);
    view.rows = view.rows.min(max);
    ui.add(egui::Slider::new(&mut view.rows, 1..=max).text("rows"));

    let keep: Vec<String> = view
        .selected_columns()
        .into_iter()
        .filter_map(|i| table.headers.get(i).cloned())
        .collect();
    table.project(&keep)
}

pub fn draw(ui: &mut egui::Ui, id: &str, table: &Table) {
    if table.headers.is_empty() {
        ui.weak("(no columns selected)");
        return;
    }
    if table.is_empty() {
        ui.weak("(no rows)");
    }

    let numeric: Vec<bool> = (0..table.headers.len())
        .map(|c| {
            let mut cells = table.rows.iter().filter_map(|r| r.get(c)).filter(|s| !s.is_empty()).peekable();
            cells.peek().is_some() && cells.all(|s| s.parse::<f64>().is_ok())
        })
        .collect();

    let mut builder = TableBuilder::new(ui)
        .id_salt(id)
        .striped(true)
        .resizable(true)
        .max_scroll_height(320.0)
        .cell_layout(Layout::left_to_right(Align::Center));
    for _ in &table.headers {
        builder = builder.column(Column::auto().at_least(40.0).at_most(360.0).clip(true));
    }

    builder
        .header(22.0, |mut header| {
            for h in &table.headers {
                header.col(|ui| {
                    ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                    ui.label(RichText::new(h).strong());
                });
            }
        })
        .body(|body| {
            body.rows(18.0, table.rows.len(), |mut row| {
                let r = &table.rows[row.index()];
                for (c, is_num) in numeric.iter().enumerate() {
                    let cell = r.get(c).map(String::as_str).unwrap_or("");
                    row.col(|ui| {
                        ui.style_mut().wrap_mode = Some(TextWrapMode::Truncate);
                        if *is_num {
                            ui.with_layout(Layout::right_to_left(Align::Center), |ui| { ui.label(cell); });
                        } else {
                            ui.label(cell);
                        }
                    });
                }
            });
        });
}
