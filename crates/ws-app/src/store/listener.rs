//! Listener middleware.
//!
//! An explicit table of `(matcher, effect)` pairs. After each commit the store
//! runs every effect whose matcher accepts the action as its own tokio task.
//! Effects that match the same action run concurrently, in no particular order.

use std::sync::Arc;

use async_trait::async_trait;

use ws_core::store::{Action, ActionKind, AppState};

use super::Store;

/// Predicate deciding whether an effect runs for a committed action.
pub type Matcher = Box<dyn Fn(&Action) -> bool + Send + Sync>;

/// Build a matcher accepting any of the given action kinds.
pub fn is_any_of(kinds: &[ActionKind]) -> Matcher {
    let kinds = kinds.to_vec();
    Box::new(move |action| kinds.contains(&action.kind()))
}

/// Asynchronous side effect triggered by a committed action.
///
/// Errors are logged by the store and never retried. An effect that needs a
/// recovery path dispatches it itself.
#[async_trait]
pub trait Effect: Send + Sync {
    async fn run(&self, action: Action, api: ListenerApi) -> anyhow::Result<()>;
}

/// Capabilities handed to a running effect.
pub struct ListenerApi {
    store: Store,
    epoch: u64,
}

impl ListenerApi {
    pub(super) fn new(store: Store, epoch: u64) -> Self {
        Self { store, epoch }
    }

    /// Dispatch a follow-up transition. Returns `false` when the transition
    /// was dropped because a reset happened after this effect started.
    pub fn dispatch(&self, action: impl Into<Action>) -> bool {
        self.store.commit(action.into(), Some(self.epoch))
    }

    /// Current committed snapshot.
    pub fn state(&self) -> Arc<AppState> {
        self.store.state()
    }

    /// Epoch in which this effect was started.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }
}

pub(super) struct Listener {
    name: &'static str,
    matcher: Matcher,
    effect: Arc<dyn Effect>,
}

impl Listener {
    pub(super) fn name(&self) -> &'static str {
        self.name
    }

    pub(super) fn effect(&self) -> Arc<dyn Effect> {
        self.effect.clone()
    }
}

/// Registry of listeners, fixed once the store is built.
#[derive(Default)]
pub struct ListenerMiddleware {
    listeners: Vec<Listener>,
}

impl ListenerMiddleware {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an effect.
    pub fn start_listening(
        &mut self,
        name: &'static str,
        matcher: Matcher,
        effect: Arc<dyn Effect>,
    ) -> &mut Self {
        tracing::debug!(listener = name, "listener registered");
        self.listeners.push(Listener {
            name,
            matcher,
            effect,
        });
        self
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    pub(super) fn matching<'a>(&'a self, action: &'a Action) -> impl Iterator<Item = &'a Listener> {
        self.listeners
            .iter()
            .filter(move |listener| (listener.matcher)(action))
    }
}
