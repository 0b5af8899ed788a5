//! Application state store.
//!
//! The store is the only owner of [`AppState`]. Every transition goes through
//! [`Store::dispatch`], which reduces all slices under one lock, publishes the
//! new snapshot and only then hands the committed action to the listener
//! middleware.

mod listener;

pub use listener::{is_any_of, Effect, ListenerApi, ListenerMiddleware, Matcher};

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use tokio::runtime::Handle;
use tokio::sync::{watch, Notify};
use tracing::{debug, info_span, warn, Instrument};

use ws_core::config::StaleEffectPolicy;
use ws_core::store::{self as core_store, Action, AppState};

/// Errors produced while building the store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store requires a tokio runtime to run effects: {0}")]
    NoRuntime(#[from] tokio::runtime::TryCurrentError),
}

struct Committed {
    state: Arc<AppState>,
    /// Bumped on every reset broadcast.
    epoch: u64,
}

struct StoreInner {
    committed: Mutex<Committed>,
    snapshots: watch::Sender<Arc<AppState>>,
    listeners: ListenerMiddleware,
    stale_effects: StaleEffectPolicy,
    runtime: Handle,
    in_flight: AtomicUsize,
    settled: Notify,
}

/// Cloneable handle to the single application state container.
#[derive(Clone)]
pub struct Store {
    inner: Arc<StoreInner>,
}

/// Builder for [`Store`].
pub struct StoreBuilder {
    initial: AppState,
    listeners: ListenerMiddleware,
    stale_effects: StaleEffectPolicy,
}

impl StoreBuilder {
    /// Start from a rehydrated state instead of the initial one.
    pub fn initial_state(mut self, state: AppState) -> Self {
        self.initial = state;
        self
    }

    pub fn listeners(mut self, listeners: ListenerMiddleware) -> Self {
        self.listeners = listeners;
        self
    }

    pub fn stale_effects(mut self, policy: StaleEffectPolicy) -> Self {
        self.stale_effects = policy;
        self
    }

    /// Build the store. Must be called from within a tokio runtime; effects
    /// are spawned on it.
    pub fn build(self) -> Result<Store, StoreError> {
        let runtime = Handle::try_current()?;
        let state = Arc::new(self.initial);
        let (snapshots, _) = watch::channel(state.clone());

        Ok(Store {
            inner: Arc::new(StoreInner {
                committed: Mutex::new(Committed { state, epoch: 0 }),
                snapshots,
                listeners: self.listeners,
                stale_effects: self.stale_effects,
                runtime,
                in_flight: AtomicUsize::new(0),
                settled: Notify::new(),
            }),
        })
    }
}

impl Store {
    pub fn builder() -> StoreBuilder {
        StoreBuilder {
            initial: AppState::default(),
            listeners: ListenerMiddleware::new(),
            stale_effects: StaleEffectPolicy::default(),
        }
    }

    /// Apply a transition. Reducers run synchronously; matching effects are
    /// scheduled afterwards and are not awaited.
    pub fn dispatch(&self, action: impl Into<Action>) {
        self.commit(action.into(), None);
    }

    /// Current committed snapshot. Callers must treat it as read-only.
    pub fn state(&self) -> Arc<AppState> {
        self.lock().state.clone()
    }

    /// Run a selector against the current snapshot.
    pub fn select<T>(&self, selector: impl FnOnce(&AppState) -> T) -> T {
        selector(&self.state())
    }

    /// Receive every committed snapshot (latest value wins).
    pub fn subscribe(&self) -> watch::Receiver<Arc<AppState>> {
        self.inner.snapshots.subscribe()
    }

    /// Current reset epoch.
    pub fn epoch(&self) -> u64 {
        self.lock().epoch
    }

    /// Wait until no effect is running.
    pub async fn settled(&self) {
        loop {
            let notified = self.inner.settled.notified();
            if self.inner.in_flight.load(Ordering::SeqCst) == 0 {
                return;
            }
            notified.await;
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Committed> {
        // Reducers never panic, so a poisoned lock still holds a consistent state.
        self.inner
            .committed
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Commit `action`. `origin_epoch` is set when an effect dispatches; the
    /// transition is dropped if a reset happened since that effect started and
    /// the policy says so. Returns whether the transition was applied.
    fn commit(&self, action: Action, origin_epoch: Option<u64>) -> bool {
        let epoch = {
            let mut committed = self.lock();

            if let Some(origin) = origin_epoch.filter(|origin| *origin != committed.epoch) {
                match self.inner.stale_effects {
                    StaleEffectPolicy::Discard => {
                        warn!(
                            action = %action.kind(),
                            origin_epoch = origin,
                            current_epoch = committed.epoch,
                            "discarding transition from effect started before reset"
                        );
                        return false;
                    }
                    StaleEffectPolicy::Accept => {
                        debug!(
                            action = %action.kind(),
                            origin_epoch = origin,
                            current_epoch = committed.epoch,
                            "accepting transition from effect started before reset"
                        );
                    }
                }
            }

            let next = core_store::reduce(&committed.state, &action);
            if action.broadcast().is_some() {
                committed.epoch += 1;
            }
            committed.state = Arc::new(next);
            // Published under the lock so subscribers see commits in order.
            self.inner.snapshots.send_replace(committed.state.clone());
            committed.epoch
        };

        debug!(action = %action.kind(), epoch, "transition committed");
        self.run_listeners(&action, epoch);
        true
    }

    fn run_listeners(&self, action: &Action, epoch: u64) {
        for listener in self.inner.listeners.matching(action) {
            let effect = listener.effect();
            let api = ListenerApi::new(self.clone(), epoch);
            let action = action.clone();
            let guard = InFlightGuard::enter(self.inner.clone());
            let span = info_span!(
                "listener.effect",
                listener = listener.name(),
                action = %action.kind(),
                epoch
            );

            self.inner.runtime.spawn(
                async move {
                    let _guard = guard;
                    if let Err(err) = effect.run(action, api).await {
                        warn!(error = %err, "listener effect failed");
                    }
                }
                .instrument(span),
            );
        }
    }
}

struct InFlightGuard {
    inner: Arc<StoreInner>,
}

impl InFlightGuard {
    fn enter(inner: Arc<StoreInner>) -> Self {
        inner.in_flight.fetch_add(1, Ordering::SeqCst);
        Self { inner }
    }
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        if self.inner.in_flight.fetch_sub(1, Ordering::SeqCst) == 1 {
            self.inner.settled.notify_waiters();
        }
    }
}
