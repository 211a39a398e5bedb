use crate::Record;

/// Requests originating from the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// User asked for a (re)load of the record list.
    LoadRequested,
    /// User picked a category filter.
    CategorySelected(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    Intent(Intent),
    /// A fetch started by `Effect::FetchRecords` succeeded.
    RecordsLoaded(Vec<Record>),
    /// A fetch started by `Effect::FetchRecords` failed with this message.
    LoadFailed(String),
}

impl From<Intent> for Msg {
    fn from(intent: Intent) -> Self {
        Msg::Intent(intent)
    }
}
