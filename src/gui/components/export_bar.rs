// src/gui/components/export_bar.rs

use eframe::egui;

use crate::{config::options::ExportFormat, data::Table, file, gui::app::App};

#[derive(Clone, Copy, PartialEq, Eq)]
enum UiFormat { Csv, Tsv }

/// Format, headers and output path controls, plus Copy / Export for `tables`
/// (`(name, table)`; each exports to `<stem>_<name>.<ext>`).
pub fn draw(ui: &mut egui::Ui, app: &mut App, tables: &[(&str, &Table)]) {
    {
        let export = &mut app.state.options.export;

        // --- Format + Include headers ---
        let prev_fmt = match export.format {
            ExportFormat::Csv => UiFormat::Csv,
            ExportFormat::Tsv => UiFormat::Tsv,
        };
        let mut fmt = prev_fmt;

        ui.horizontal(|ui| {
            ui.label("Format:");
            ui.selectable_value(&mut fmt, UiFormat::Csv, "CSV");
            ui.selectable_value(&mut fmt, UiFormat::Tsv, "TSV");

            let before_headers = export.include_headers;
            ui.checkbox(&mut export.include_headers, "Include headers");
            if export.include_headers != before_headers {
                logf!("UI: Include_headers → {}", export.include_headers);
            }
        });

        if fmt != prev_fmt {
            export.format = match fmt {
                UiFormat::Csv => ExportFormat::Csv,
                UiFormat::Tsv => ExportFormat::Tsv,
            };
            logf!("UI: Export format → {:?}", export.format);
            if !app.out_path_dirty {
                app.out_path_text = export.out_path().to_string_lossy().into_owned();
            }
        }
    }

    // --- Output field ---
    ui.horizontal(|ui| {
        ui.label("Output:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.out_path_text).font(egui::TextStyle::Monospace))
            .changed()
        {
            app.out_path_dirty = true;
            logd!("UI: out_path_text changed (dirty=true) → {}", app.out_path_text);
        }
    });

    // --- Actions (Copy / Export) ---
    ui.horizontal(|ui| {
        if ui.button("Copy offers").clicked() {
            copy_first(ui, app, tables);
        }

        if ui.button("Export").clicked() {
            if tables.iter().all(|(_, t)| t.is_empty()) {
                app.status("Nothing to export");
                logd!("Export: Clicked, but there's nothing to export");
            } else {
                if app.out_path_dirty {
                    app.state.options.export.set_path(&app.out_path_text);
                    logf!("Export: Out path set → {}", app.state.options.export.out_path().display());
                    app.out_path_dirty = false;
                }
                match file::export_tables(&app.state.options.export, tables) {
                    Ok(paths) => {
                        let last = paths.last().map(|p| p.display().to_string()).unwrap_or_default();
                        logf!("Export: OK count={} last={}", paths.len(), last);
                        app.status(format!("Exported {} file(s). Last: {last}", paths.len()));
                    }
                    Err(e) => {
                        loge!("Export: Error: {e}");
                        app.status(format!("Export error: {e}"));
                    }
                }
            }
        }
    });
}

fn copy_first(ui: &mut egui::Ui, app: &mut App, tables: &[(&str, &Table)]) {
    let Some((name, table)) = tables.first() else { return };
    if table.is_empty() {
        app.status("Nothing to copy");
        return;
    }
    let export = &app.state.options.export;
    match file::to_delimited_string(table, export.format.delim(), export.include_headers) {
        Ok(text) => {
            ui.ctx().copy_text(text);
            logf!("Copy: {name} rows={}", table.len());
            app.status("Copied to clipboard");
        }
        Err(e) => {
            loge!("Copy: Error: {e}");
            app.status(format!("Copy error: {e}"));
        }
    }
}
