//! Startup bootstrap effect.
//!
//! Runs the boot-time initializer whenever loading starts or the app is reset.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info};

use ws_core::ports::BootstrapInitializerPort;
use ws_core::startup::{StartupAction, StartupStatus};
use ws_core::store::{Action, ActionKind};

use crate::store::{is_any_of, Effect, ListenerApi, ListenerMiddleware};

/// Initializes boot resources and moves startup to onboarding, or to the
/// error status when initialization fails.
pub struct StartupBootstrap {
    initializer: Arc<dyn BootstrapInitializerPort>,
}

impl StartupBootstrap {
    pub fn new(initializer: Arc<dyn BootstrapInitializerPort>) -> Self {
        Self { initializer }
    }
}

#[async_trait]
impl Effect for StartupBootstrap {
    async fn run(&self, _action: Action, api: ListenerApi) -> anyhow::Result<()> {
        match self.initializer.initialize().await {
            Ok(()) => {
                info!("bootstrap resources initialized");
                api.dispatch(StartupAction::SetStatus(StartupStatus::WaitOnboarding));
            }
            Err(err) => {
                error!(error = %err, "bootstrap initialization failed");
                api.dispatch(StartupAction::SetError);
            }
        }
        Ok(())
    }
}

/// Register the startup listeners.
pub fn add_startup_listeners(
    middleware: &mut ListenerMiddleware,
    initializer: Arc<dyn BootstrapInitializerPort>,
) {
    middleware.start_listening(
        "startup.bootstrap",
        is_any_of(&[ActionKind::StartupSetLoading, ActionKind::PreferencesReset]),
        Arc::new(StartupBootstrap::new(initializer)),
    );
}
