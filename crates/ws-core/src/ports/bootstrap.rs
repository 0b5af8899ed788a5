use async_trait::async_trait;
use thiserror::Error;

/// Failure of the boot-time initializer. There is no partial success.
#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("bootstrap resource missing: {0}")]
    MissingResource(String),

    #[error("bootstrap resource invalid: {0}")]
    InvalidResource(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Opaque asynchronous initialization run while the app is loading
/// (localization resources, in practice).
#[async_trait]
pub trait BootstrapInitializerPort: Send + Sync {
    async fn initialize(&self) -> Result<(), BootstrapError>;
}
