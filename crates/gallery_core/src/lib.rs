//! Gallery core: pure state machine and view-model helpers.
mod effect;
mod msg;
mod record;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::{Intent, Msg};
pub use record::Record;
pub use state::AppState;
pub use update::update;
pub use view_model::{AppViewModel, CategoryButton, ImageTile};
