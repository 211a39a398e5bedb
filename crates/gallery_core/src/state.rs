use std::collections::HashSet;

use crate::view_model::{AppViewModel, CategoryButton, ImageTile};
use crate::Record;

/// Snapshot of everything the view can see.
///
/// Transitions go through [`crate::update`], which consumes a snapshot and
/// returns the next one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    items: Vec<Record>,
    is_loading: bool,
    error: Option<String>,
    selected_category: Option<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records in server response order.
    pub fn items(&self) -> &[Record] {
        &self.items
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn selected_category(&self) -> Option<&str> {
        self.selected_category.as_deref()
    }

    /// Distinct categories across `items`, in order of first appearance.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.items
            .iter()
            .map(|record| record.category.as_str())
            .filter(|category| seen.insert(*category))
            .collect()
    }

    /// Items matching the selected category, or all items when none is selected.
    pub fn visible_items(&self) -> Vec<&Record> {
        self.items
            .iter()
            .filter(|record| match self.selected_category.as_deref() {
                Some(selected) => record.category == selected,
                None => true,
            })
            .collect()
    }

    pub fn view(&self) -> AppViewModel {
        let selected = self.selected_category.as_deref();
        let category_buttons = self
            .categories()
            .into_iter()
            .map(|category| CategoryButton {
                label: category.to_string(),
                enabled: Some(category) != selected,
            })
            .collect();
        let tiles: Vec<ImageTile> = self
            .visible_items()
            .into_iter()
            .map(ImageTile::from_record)
            .collect();
        let show_grid = !tiles.is_empty() && !self.is_loading;

        AppViewModel {
            category_buttons,
            loading: self.is_loading,
            error: self.error.clone(),
            tiles,
            show_grid,
        }
    }

    // A new attempt leaves a previous error in place until it completes.
    pub(crate) fn begin_load(&mut self) {
        self.is_loading = true;
    }

    pub(crate) fn finish_load(&mut self, records: Vec<Record>) {
        self.items = records;
        self.error = None;
        self.is_loading = false;
    }

    pub(crate) fn fail_load(&mut self, message: String) {
        self.error = Some(message);
        self.is_loading = false;
    }

    pub(crate) fn select_category(&mut self, category: String) {
        self.selected_category = Some(category);
    }
}
