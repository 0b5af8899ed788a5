//! Root navigation orchestrator.
//!
//! Tells the navigation layer which root screen to render. The screen is
//! derived again from every committed startup status and shown when it
//! differs from the one on display.

use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, info_span, warn, Instrument};

use ws_core::navigation::{derive_root_screen, RootScreen};
use ws_core::ports::NavigatorPort;
use ws_core::startup::{StartupAction, StartupStatus};
use ws_core::store::AppState;

use crate::store::Store;

pub struct RootOrchestrator {
    store: Store,
    navigator: Arc<dyn NavigatorPort>,
}

impl RootOrchestrator {
    pub fn new(store: Store, navigator: Arc<dyn NavigatorPort>) -> Self {
        Self { store, navigator }
    }

    /// Screen for the current committed state.
    pub fn current_screen(&self) -> RootScreen {
        derive_root_screen(self.store.select(|state| state.startup.status))
    }

    /// Show the initial screen, start loading and follow status changes. The
    /// task runs until aborted.
    pub fn spawn(self) -> JoinHandle<()> {
        // Subscribe before dispatching so the first transition is not missed.
        let receiver = self.store.subscribe();
        let span = info_span!("usecase.root_orchestrator");
        tokio::spawn(self.run(receiver).instrument(span))
    }

    async fn run(self, mut receiver: watch::Receiver<Arc<AppState>>) {
        let status = receiver.borrow_and_update().startup.status;
        let mut shown = derive_root_screen(status);
        self.show(&shown, status).await;

        info!("starting app");
        self.store.dispatch(StartupAction::SetLoading);

        while receiver.changed().await.is_ok() {
            let status = receiver.borrow_and_update().startup.status;
            let screen = derive_root_screen(status);
            if screen == shown {
                continue;
            }
            debug!(
                from = shown.route().name(),
                to = screen.route().name(),
                ?status,
                "root screen changed"
            );
            self.show(&screen, status).await;
            shown = screen;
        }
    }

    async fn show(&self, screen: &RootScreen, status: StartupStatus) {
        info!(route = screen.route().name(), ?status, "showing root screen");
        if let Err(err) = self.navigator.show(screen.clone()).await {
            warn!(error = %err, "navigator rejected root screen");
        }
    }
}
