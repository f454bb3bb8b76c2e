// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::Debug;

use crate::redux::{
    ListManager, ReducerFnWrapper, SelectSubscriber, StateHistory, SubscriberItem,
    SubscriptionId,
};

/// Actions must provide the one that the [`Store`] dispatches to its reducer, without any
/// prior state, in order to build the initial state.
pub trait InitAction {
    fn init() -> Self;
}

/// Single threaded Redux store.
///
/// - [`Store::dispatch`] takes `&mut self`, so an action is fully reduced and every
///   subscriber notified before the next action can be accepted.
/// - Each change of state bumps [`Store::version`]. Collaborators that prefer polling over
///   callbacks can compare version stamps instead of subscribing.
pub struct Store<S, A>
where
    S: 'static,
    A: 'static,
{
    state: S,
    version: u64,
    reducer: ReducerFnWrapper<S, A>,
    subscriber_manager: ListManager<SubscriberItem<S>>,
    history: StateHistory<S>,
}

impl<S, A> Debug for Store<S, A>
where
    S: Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state)
            .field("version", &self.version)
            .field("subscriber_count", &self.subscriber_manager.len())
            .field("history_len", &self.history.len())
            .finish()
    }
}

impl<S, A> Store<S, A>
where
    S: Clone + PartialEq + Debug + 'static,
    A: InitAction + Debug + 'static,
{
    pub fn new(
        reducer_fn: impl Fn(Option<&S>, &A) -> S + Send + Sync + 'static,
    ) -> Self {
        Self::with_history(ReducerFnWrapper::from(reducer_fn), StateHistory::default())
    }

    pub fn with_history(reducer: ReducerFnWrapper<S, A>, mut history: StateHistory<S>) -> Self {
        let init_action = A::init();
        let state = reducer.invoke(None, &init_action);
        history.push(&state);

        // % is Display, ? is Debug.
        tracing::debug!(
            message = "🏁 store created",
            init_action = ?init_action,
            state = ?state
        );

        Self {
            state,
            version: 0,
            reducer,
            subscriber_manager: ListManager::new(),
            history,
        }
    }

    #[must_use]
    pub fn state(&self) -> &S { &self.state }

    #[must_use]
    pub fn get_state(&self) -> S { self.state.clone() }

    #[must_use]
    pub fn version(&self) -> u64 { self.version }

    #[must_use]
    pub fn history(&self) -> &StateHistory<S> { &self.history }

    /// Run the reducer, then notify subscribers. Returns `true` if the state changed.
    pub fn dispatch(&mut self, action: &A) -> bool {
        let new_state = self.reducer.invoke(Some(&self.state), action);
        let changed = new_state != self.state;

        if changed {
            self.history.push(&new_state);
            self.state = new_state;
            self.version += 1;
        }

        let mut notified = 0_usize;
        for (_, subscriber) in self.subscriber_manager.iter_mut() {
            if subscriber.notify(&self.state) {
                notified += 1;
            }
        }

        // % is Display, ? is Debug.
        tracing::debug!(
            message = "📨 dispatch",
            action = ?action,
            changed = %changed,
            version = %self.version,
            notified = %notified
        );

        changed
    }

    /// Register `on_change` to receive the value of `selector`. It is called immediately
    /// with the current value, and then after each dispatch that changes that value.
    pub fn select<T, Sel, F>(&mut self, selector: Sel, on_change: F) -> SubscriptionId
    where
        T: PartialEq + 'static,
        Sel: Fn(&S) -> T + 'static,
        F: FnMut(&T) + 'static,
    {
        self.add_subscriber(Box::new(SelectSubscriber::new(selector, on_change)))
    }

    pub fn add_subscriber(&mut self, mut subscriber: SubscriberItem<S>) -> SubscriptionId {
        subscriber.notify(&self.state);
        let id = self.subscriber_manager.push(subscriber);

        // % is Display, ? is Debug.
        tracing::debug!(message = "➕ subscribe", id = %id);

        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let removed = self.subscriber_manager.remove(id).is_some();

        // % is Display, ? is Debug.
        tracing::debug!(message = "➖ unsubscribe", id = %id, removed = %removed);

        removed
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize { self.subscriber_manager.len() }
}
