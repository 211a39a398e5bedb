use crate::Record;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub category_buttons: Vec<CategoryButton>,
    pub loading: bool,
    pub error: Option<String>,
    pub tiles: Vec<ImageTile>,
    /// Grid is hidden while loading and when the filter matches nothing.
    pub show_grid: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryButton {
    pub label: String,
    /// The currently selected category renders disabled.
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageTile {
    pub author: String,
    pub category: String,
    pub path: String,
}

impl ImageTile {
    pub(crate) fn from_record(record: &Record) -> Self {
        Self {
            author: record.author.clone(),
            category: record.category.clone(),
            path: record.path.clone(),
        }
    }
}
