use crate::{AppState, Effect, Intent, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Intent(Intent::LoadRequested) => {
            // Loads are allowed to overlap; whichever completes last wins.
            state.begin_load();
            vec![Effect::FetchRecords]
        }
        Msg::Intent(Intent::CategorySelected(category)) => {
            state.select_category(category);
            Vec::new()
        }
        Msg::RecordsLoaded(records) => {
            state.finish_load(records);
            Vec::new()
        }
        Msg::LoadFailed(message) => {
            state.fail_load(message);
            Vec::new()
        }
    };

    (state, effects)
}
