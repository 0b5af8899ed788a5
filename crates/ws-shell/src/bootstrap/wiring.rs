//! Dependency wiring.
//!
//! Builds every adapter, rehydrates persisted state, registers listeners and
//! starts the background tasks. Nothing else in the process constructs
//! concrete adapters.

use std::sync::Arc;

use anyhow::Context;
use tokio::task::JoinHandle;
use tracing::{info, info_span, warn, Instrument};

use ws_app::listeners::add_startup_listeners;
use ws_app::usecases::{RootOrchestrator, StatePersistor};
use ws_app::{ListenerMiddleware, Store};
use ws_core::persistence::PersistedState;
use ws_core::ports::KeyValueStoragePort;
use ws_core::{AppConfig, AppState};
use ws_infra::{FileKeyValueStorage, LocaleBootstrap, LocaleCatalog};
use ws_platform::{create_secure_storage, AppDirs, SecureKeyValueStorage};

use super::navigator::LoggingNavigator;

/// Running application: the store plus its background tasks.
pub struct AppRuntime {
    pub store: Store,
    pub catalog: Arc<LocaleCatalog>,
    pub navigator: Arc<LoggingNavigator>,
    /// Keychain-or-file backend for identification secrets. `None` when the
    /// platform offers neither.
    pub secure_storage: Option<Arc<dyn KeyValueStoragePort>>,
    persistor: StatePersistor,
    tasks: Vec<JoinHandle<()>>,
}

impl AppRuntime {
    /// Stop background tasks and write the final snapshot. Tasks are joined
    /// first so no in-flight write lands after the final flush.
    pub async fn shutdown(self) {
        let AppRuntime {
            store,
            persistor,
            tasks,
            ..
        } = self;

        for task in tasks {
            task.abort();
            if let Err(err) = task.await {
                if !err.is_cancelled() {
                    warn!(error = %err, "background task failed");
                }
            }
        }

        let current = PersistedState::from_state(&store.state());
        if let Err(err) = persistor.flush(&PersistedState::default(), &current).await {
            warn!(error = %err, "final state flush failed");
        }
        info!("runtime stopped");
    }
}

/// Secret storage for the identification flow, scoped by profile.
fn build_secure_storage(
    config: &AppConfig,
    dirs: &AppDirs,
) -> Option<Arc<dyn KeyValueStoragePort>> {
    match create_secure_storage(dirs.app_data_root.clone(), config.profile.as_deref()) {
        Ok(backend) => Some(Arc::new(SecureKeyValueStorage::new(backend))),
        Err(err) => {
            warn!(error = %err, "secure storage unavailable");
            None
        }
    }
}

/// Wire the application against the on-disk layout in `dirs`. Persisted
/// slices always live under `<data>/storage`.
pub async fn wire_dependencies(config: &AppConfig, dirs: &AppDirs) -> anyhow::Result<AppRuntime> {
    let span = info_span!("bootstrap.wire", data_root = %dirs.app_data_root.display());
    async {
        let storage = Arc::new(FileKeyValueStorage::with_defaults(
            dirs.app_data_root.clone(),
        ));
        let secure_storage = build_secure_storage(config, dirs);
        wire_with_storage(config, storage, secure_storage).await
    }
    .instrument(span)
    .await
}

/// Wire the application against the given storage backends.
pub async fn wire_with_storage(
    config: &AppConfig,
    storage: Arc<dyn KeyValueStoragePort>,
    secure_storage: Option<Arc<dyn KeyValueStoragePort>>,
) -> anyhow::Result<AppRuntime> {
    let persistor = StatePersistor::new(storage);
    let initial = persistor.rehydrate().await.rehydrate(AppState::default());
    info!(
        onboarding_complete = initial.preferences.is_onboarding_complete,
        debug_mode = initial.debug.is_debug_mode_enabled,
        secure_storage = secure_storage.is_some(),
        "state rehydrated"
    );

    let catalog = Arc::new(LocaleCatalog::new(config.locale.default_namespace.clone()));
    let initializer = Arc::new(LocaleBootstrap::new(config.locale.clone(), catalog.clone()));

    let mut listeners = ListenerMiddleware::new();
    add_startup_listeners(&mut listeners, initializer);

    let store = Store::builder()
        .initial_state(initial)
        .listeners(listeners)
        .stale_effects(config.stale_effects)
        .build()
        .context("Failed to build state store")?;

    let navigator = Arc::new(LoggingNavigator::new(catalog.clone()));
    let tasks = vec![
        persistor.spawn(&store),
        RootOrchestrator::new(store.clone(), navigator.clone()).spawn(),
    ];

    Ok(AppRuntime {
        store,
        catalog,
        navigator,
        secure_storage,
        persistor,
        tasks,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::time::Duration;

    use ws_core::config::LocaleConfig;
    use ws_core::navigation::RootScreen;
    use ws_core::persistence::PREFERENCES_KEY;
    use ws_core::preferences::PreferencesAction;
    use ws_core::startup::StartupStatus;
    use ws_infra::InMemoryKeyValueStorage;

    fn dirs_in(root: &std::path::Path) -> AppDirs {
        AppDirs {
            app_data_root: root.join("data"),
            app_log_dir: root.join("data/logs"),
        }
    }

    fn config_with_locales(dir: &std::path::Path) -> AppConfig {
        AppConfig {
            locale: LocaleConfig {
                locales_dir: dir.to_path_buf(),
                namespaces: vec!["global".into()],
                ..LocaleConfig::default()
            },
            ..AppConfig::default()
        }
    }

    async fn wait_for_screen(runtime: &AppRuntime, expected: RootScreen) {
        let mut receiver = runtime.navigator.subscribe();
        tokio::time::timeout(Duration::from_secs(5), async {
            while receiver.borrow_and_update().as_ref() != Some(&expected) {
                receiver.changed().await.unwrap();
            }
        })
        .await
        .expect("screen shown");
    }

    #[tokio::test]
    async fn wires_a_runtime_that_reaches_onboarding() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("it")).unwrap();
        fs::write(
            temp_dir.path().join("it/global.json"),
            r#"{"loading":{"title":"Caricamento"}}"#,
        )
        .unwrap();

        let storage = Arc::new(InMemoryKeyValueStorage::new());
        let runtime =
            wire_with_storage(&config_with_locales(temp_dir.path()), storage.clone(), None)
                .await
                .unwrap();

        wait_for_screen(&runtime, RootScreen::Onboarding).await;
        assert_eq!(
            runtime.store.select(|s| s.startup.status),
            StartupStatus::WaitOnboarding
        );
        assert_eq!(runtime.catalog.translate("loading.title"), "Caricamento");

        runtime.shutdown().await;
        assert!(storage.get(PREFERENCES_KEY).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn missing_locales_show_the_error_screen() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let runtime = wire_with_storage(
            &config_with_locales(&temp_dir.path().join("absent")),
            Arc::new(InMemoryKeyValueStorage::new()),
            None,
        )
        .await
        .unwrap();

        wait_for_screen(
            &runtime,
            RootScreen::GenericError(ws_core::navigation::ErrorScreenContent::GENERIC),
        )
        .await;
        runtime.shutdown().await;
    }

    #[tokio::test]
    async fn persisted_slices_land_in_the_data_storage_dir() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let dirs = dirs_in(temp_dir.path());
        let config = config_with_locales(&temp_dir.path().join("absent"));

        let runtime = wire_dependencies(&config, &dirs).await.unwrap();
        runtime.store.dispatch(PreferencesAction::SetBiometricEnabled(true));
        runtime.shutdown().await;

        let file = dirs
            .app_data_root
            .join("storage")
            .join("persist%3Apreferences.json");
        assert!(file.is_file(), "missing {}", file.display());

        let restarted = wire_dependencies(&config, &dirs).await.unwrap();
        assert!(restarted.store.select(|s| s.preferences.is_biometric_enabled));
        restarted.shutdown().await;
    }

    #[tokio::test]
    async fn shutdown_persists_the_last_dispatch() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let storage = Arc::new(FileKeyValueStorage::new(temp_dir.path().join("storage")));
        let config = config_with_locales(&temp_dir.path().join("absent"));

        let runtime = wire_with_storage(&config, storage.clone(), None)
            .await
            .unwrap();
        for round in 0..20 {
            runtime
                .store
                .dispatch(PreferencesAction::SetBiometricEnabled(round % 2 == 0));
        }
        runtime.store.dispatch(PreferencesAction::SetOnboardingDone);
        runtime.shutdown().await;

        let state = StatePersistor::new(storage)
            .rehydrate()
            .await
            .rehydrate(AppState::default());
        assert!(state.preferences.is_onboarding_complete);
        assert!(!state.preferences.is_biometric_enabled);
    }
}
