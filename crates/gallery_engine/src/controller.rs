use std::sync::Arc;

use gallery_core::{update, AppState, Effect, Intent, Msg};
use gallery_logging::{gallery_debug, gallery_info, gallery_warn};
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

use crate::Fetcher;

/// Owns the current [`AppState`], turns intents into transitions and runs the
/// resulting effects on a tokio runtime.
///
/// Every transition publishes a full snapshot to all subscribers. Dropping or
/// disposing the controller cancels in-flight fetches; their results are
/// never published.
pub struct Controller {
    shared: Arc<Shared>,
}

// Field order matters: the fetcher must be released before subscribers see
// the channel close.
struct Shared {
    fetcher: Arc<dyn Fetcher>,
    state_tx: watch::Sender<AppState>,
    runtime: Handle,
    shutdown: CancellationToken,
}

impl Controller {
    pub fn new(fetcher: Arc<dyn Fetcher>, runtime: Handle) -> Self {
        let (state_tx, _) = watch::channel(AppState::new());
        Self {
            shared: Arc::new(Shared {
                fetcher,
                state_tx,
                runtime,
                shutdown: CancellationToken::new(),
            }),
        }
    }

    /// Applies an intent. Returns as soon as the resulting snapshot is
    /// published; any fetch it starts completes in the background.
    pub fn handle(&self, intent: Intent) {
        gallery_debug!("Handling intent {:?}", intent);
        self.shared.dispatch(intent.into());
    }

    /// Receiver that always holds the latest snapshot.
    pub fn subscribe(&self) -> watch::Receiver<AppState> {
        self.shared.state_tx.subscribe()
    }

    pub fn state(&self) -> AppState {
        self.shared.state_tx.borrow().clone()
    }

    /// Stops all publication and releases the fetcher once in-flight fetches unwind.
    pub fn dispose(self) {
        gallery_info!("Disposing controller");
        drop(self);
    }
}

impl Drop for Controller {
    fn drop(&mut self) {
        self.shared.shutdown.cancel();
    }
}

impl Shared {
    fn dispatch(self: &Arc<Self>, msg: Msg) {
        if self.shutdown.is_cancelled() {
            gallery_debug!("Dropping {:?}; controller disposed", msg);
            return;
        }

        let mut effects = Vec::new();
        self.state_tx.send_modify(|state| {
            let (next, requested) = update(std::mem::take(state), msg);
            *state = next;
            effects = requested;
        });

        for effect in effects {
            self.run_effect(effect);
        }
    }

    fn run_effect(self: &Arc<Self>, effect: Effect) {
        match effect {
            Effect::FetchRecords => {
                let shared = Arc::clone(self);
                self.runtime.spawn(async move {
                    let result = tokio::select! {
                        _ = shared.shutdown.cancelled() => {
                            gallery_debug!("Abandoning in-flight fetch");
                            return;
                        }
                        result = shared.fetcher.fetch_all() => result,
                    };
                    let msg = match result {
                        Ok(records) => Msg::RecordsLoaded(records),
                        Err(err) => {
                            gallery_warn!("Fetch failed ({}): {}", err.kind, err.message);
                            Msg::LoadFailed(err.message)
                        }
                    };
                    shared.dispatch(msg);
                });
            }
        }
    }
}
