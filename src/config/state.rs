// src/config/state.rs
use super::consts::{
    ALL_COUNTRIES, ALL_LEVELS, ALL_RANKS, DATA_PREVIEW_ROWS, REPORT_OFFER_ROWS, REPORT_VENDOR_ROWS,
};
use super::options::AppOptions;

/// Column picker + row count for one previewed table.
#[derive(Clone, Debug, Default)]
pub struct TableView {
    /// Visible flag per source column; empty = all visible
    pub visible: Vec<bool>,
    pub rows: usize,
}

impl TableView {
    pub fn with_rows(rows: usize) -> Self {
        Self { visible: Vec::new(), rows }
    }

    /// Resize the mask when the table shape changes (new dataset loaded).
    pub fn ensure_columns(&mut self, n: usize) {
        if self.visible.len() != n {
            self.visible = vec![true; n];
        }
    }

    pub fn selected_columns(&self) -> Vec<usize> {
        self.visible
            .iter()
            .enumerate()
            .filter_map(|(i, v)| v.then_some(i))
            .collect()
    }
}

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Active chapter index into router::PAGES
    pub current_page_index: usize,

    /// Sidebar multiselect; may contain ALL_COUNTRIES
    pub selected_countries: Vec<String>,
    pub selected_verifications: Vec<String>,
    pub selected_ranks: Vec<String>,

    // chapter 1 previews (head)
    pub offers_view: TableView,
    pub vendors_view: TableView,
    // chapter 5 previews (tail)
    pub report_offers_view: TableView,
    pub report_vendors_view: TableView,

    pub window_w: u32,
    pub window_h: u32,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            current_page_index: 0,
            selected_countries: vec![s!(ALL_COUNTRIES)],
            selected_verifications: vec![s!(ALL_LEVELS)],
            selected_ranks: vec![s!(ALL_RANKS)],
            offers_view: TableView::with_rows(DATA_PREVIEW_ROWS),
            vendors_view: TableView::with_rows(DATA_PREVIEW_ROWS),
            report_offers_view: TableView::with_rows(REPORT_OFFER_ROWS),
            report_vendors_view: TableView::with_rows(REPORT_VENDOR_ROWS),
            window_w: 1280,
            window_h: 800,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_view_resets_mask_on_shape_change() {
        let mut v = TableView::with_rows(5);
        v.ensure_columns(3);
        v.visible[1] = false;
        assert_eq!(v.selected_columns(), vec![0, 2]);

        v.ensure_columns(3);
        assert_eq!(v.selected_columns(), vec![0, 2]);

        v.ensure_columns(4);
        assert_eq!(v.selected_columns(), vec![0, 1, 2, 3]);
    }
}
