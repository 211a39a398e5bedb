#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Fetch the full record list; the result comes back as
    /// `Msg::RecordsLoaded` or `Msg::LoadFailed`.
    FetchRecords,
}
