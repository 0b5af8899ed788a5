//! Headless navigator: records the root screen in the log.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::watch;
use tracing::info;

use ws_core::navigation::RootScreen;
use ws_core::ports::{NavigatorError, NavigatorPort};
use ws_infra::LocaleCatalog;

/// Logs every root screen it is asked to show and keeps the last one.
pub struct LoggingNavigator {
    catalog: Arc<LocaleCatalog>,
    current: watch::Sender<Option<RootScreen>>,
}

impl LoggingNavigator {
    pub fn new(catalog: Arc<LocaleCatalog>) -> Self {
        let (current, _) = watch::channel(None);
        Self { catalog, current }
    }

    /// Follow the screens shown so far.
    pub fn subscribe(&self) -> watch::Receiver<Option<RootScreen>> {
        self.current.subscribe()
    }
}

#[async_trait]
impl NavigatorPort for LoggingNavigator {
    async fn show(&self, screen: RootScreen) -> Result<(), NavigatorError> {
        let route = screen.route().name();
        match &screen {
            RootScreen::Loading { title_key } => {
                info!(route, title = %self.catalog.translate(title_key), "root screen");
            }
            RootScreen::Onboarding => info!(route, "root screen"),
            RootScreen::GenericError(content) => info!(
                route,
                pictogram = content.pictogram,
                title = content.title,
                body = content.body,
                "root screen"
            ),
        }
        self.current.send_replace(Some(screen));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ws_core::navigation::ErrorScreenContent;

    #[tokio::test]
    async fn keeps_last_screen() {
        let navigator = LoggingNavigator::new(Arc::new(LocaleCatalog::new("global")));
        let receiver = navigator.subscribe();

        navigator.show(RootScreen::Onboarding).await.unwrap();
        navigator
            .show(RootScreen::GenericError(ErrorScreenContent::GENERIC))
            .await
            .unwrap();

        assert_eq!(
            *receiver.borrow(),
            Some(RootScreen::GenericError(ErrorScreenContent::GENERIC))
        );
    }
}
