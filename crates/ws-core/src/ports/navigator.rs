use async_trait::async_trait;
use thiserror::Error;

use crate::navigation::RootScreen;

#[derive(Debug, Error)]
pub enum NavigatorError {
    #[error("navigator unavailable: {0}")]
    Unavailable(String),
}

/// Navigation layer told which root screen to render.
#[async_trait]
pub trait NavigatorPort: Send + Sync {
    async fn show(&self, screen: RootScreen) -> Result<(), NavigatorError>;
}
