// src/gui/components/multiselect.rs
//
// Checkbox list standing in for a multiselect. The first option is the
// "All …" entry: ticking it clears the others, ticking anything else clears it.

use eframe::egui;

/// Returns true when the selection changed.
pub fn draw(ui: &mut egui::Ui, label: &str, options: &[String], selected: &mut Vec<String>) -> bool {
    let mut changed = false;
    egui::CollapsingHeader::new(format!("{label} ({})", summary(selected)))
        .id_salt(label)
        .default_open(true)
        .show(ui, |ui| {
            egui::ScrollArea::vertical()
                .id_salt((label, "scroll"))
                .max_height(220.0)
                .show(ui, |ui| {
                    for (i, opt) in options.iter().enumerate() {
                        let mut on = selected.contains(opt);
                        if ui.checkbox(&mut on, opt).changed() {
                            toggle(selected, options, i, on);
                            changed = true;
                        }
                    }
                });
        });
    if changed {
        logf!("UI: {label} → {:?}", selected);
    }
    changed
}

fn toggle(selected: &mut Vec<String>, options: &[String], i: usize, on: bool) {
    let opt = &options[i];
    if !on {
        selected.retain(|s| s != opt);
        return;
    }
    if i == 0 {
        selected.clear();
    } else if let Some(all) = options.first() {
        selected.retain(|s| s != all);
    }
    selected.push(opt.clone());
}

fn summary(selected: &[String]) -> String {
    match selected.len() {
        0 => s!("none"),
        1 => selected[0].clone(),
        n => format!("{n} picked"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_entry_is_exclusive() {
        let opts = vec![s!("All countries"), s!("Spain"), s!("Germany")];
        let mut sel = vec![s!("All countries")];
        toggle(&mut sel, &opts, 1, true);
        assert_eq!(sel, vec!["Spain"]);
        toggle(&mut sel, &opts, 2, true);
        assert_eq!(sel, vec!["Spain", "Germany"]);
        toggle(&mut sel, &opts, 0, true);
        assert_eq!(sel, vec!["All countries"]);
        toggle(&mut sel, &opts, 0, false);
        assert!(sel.is_empty());
        assert_eq!(summary(&sel), "none");
    }
}
