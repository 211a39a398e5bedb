//! Gallery engine: record fetching and the controller that drives the core state machine.
mod controller;
mod fetch;
mod settings;
mod types;

pub use controller::Controller;
pub use fetch::{Fetcher, ReqwestFetcher};
pub use settings::{FetchSettings, DEFAULT_BASE_URL, RECORDS_PATH};
pub use types::{FailureKind, FetchError};
