//! Process entry: configuration, tracing, runtime, wiring, shutdown.

use anyhow::Context;
use tracing::info;

use ws_platform::DirsAppDirsAdapter;

use super::config::load_app_config;
use super::tracing::init_tracing_subscriber;
use super::wiring::wire_dependencies;

/// Run the shell until Ctrl-C.
pub fn run_app() -> anyhow::Result<()> {
    let config = load_app_config()?;
    let dirs = DirsAppDirsAdapter::new()
        .get_app_dirs(&config)
        .context("Failed to resolve application directories")?;

    let log_dir = config.log_to_file.then_some(dirs.app_log_dir.as_path());
    init_tracing_subscriber(log_dir).context("Failed to initialize tracing")?;
    info!(
        profile = config.profile.as_deref().unwrap_or("default"),
        data_root = %dirs.app_data_root.display(),
        "wallet shell starting"
    );

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to build tokio runtime")?;

    runtime.block_on(async {
        let app = wire_dependencies(&config, &dirs).await?;
        tokio::signal::ctrl_c()
            .await
            .context("Failed to listen for shutdown signal")?;
        info!("shutdown requested");
        app.shutdown().await;
        Ok(())
    })
}
