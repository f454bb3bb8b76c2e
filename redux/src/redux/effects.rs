// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{collections::VecDeque, fmt::Debug};

use crate::redux::{InitAction, Store};

/// Side effects live outside the reducers. An effect looks at each action after it has
/// been reduced, does whatever async work it needs (eg: talk to a service), and may
/// answer with a follow up action (eg: a success or failure action).
///
/// Effects never get access to the [`Store`]. This is what keeps the reducers pure, and
/// the store free of re-entrant dispatches. Returning the follow up action is the only
/// way to get data back into the state.
pub trait Effect<A> {
    fn run(&self, action: &A) -> impl Future<Output = Option<A>>;
}

/// An effect that never produces anything. Useful when a store has no side effects.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoEffect;

impl<A> Effect<A> for NoEffect {
    async fn run(&self, _action: &A) -> Option<A> { None }
}

/// Dispatch `action`, then run `effect` on it, and keep dispatching follow up actions
/// until the effect has nothing more to say. Actions are processed one at a time, in the
/// order they were produced.
///
/// Returns the number of actions that were dispatched.
pub async fn dispatch_with_effects<S, A, E>(
    store: &mut Store<S, A>,
    effect: &E,
    action: A,
) -> usize
where
    S: Clone + PartialEq + Debug + 'static,
    A: InitAction + Debug + 'static,
    E: Effect<A>,
{
    let mut queue = VecDeque::from([action]);
    let mut dispatched = 0;

    while let Some(action) = queue.pop_front() {
        store.dispatch(&action);
        dispatched += 1;

        if let Some(follow_up) = effect.run(&action).await {
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "⚡ effect produced follow up action",
                action = ?action,
                follow_up = ?follow_up
            );
            queue.push_back(follow_up);
        }
    }

    dispatched
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[derive(Debug, Clone, PartialEq)]
    enum Action {
        Init,
        Fetch,
        FetchSuccess(Vec<u8>),
    }

    impl InitAction for Action {
        fn init() -> Self { Action::Init }
    }

    fn reducer(state: Option<&Vec<u8>>, action: &Action) -> Vec<u8> {
        match action {
            Action::FetchSuccess(it) => it.clone(),
            Action::Init | Action::Fetch => state.cloned().unwrap_or_default(),
        }
    }

    struct FetchEffect;

    impl Effect<Action> for FetchEffect {
        async fn run(&self, action: &Action) -> Option<Action> {
            match action {
                Action::Fetch => {
                    tokio::task::yield_now().await;
                    Some(Action::FetchSuccess(vec![1, 2, 3]))
                }
                _ => None,
            }
        }
    }

    #[tokio::test]
    async fn test_follow_up_action_is_dispatched() {
        let mut store = Store::new(reducer);
        let count = dispatch_with_effects(&mut store, &FetchEffect, Action::Fetch).await;

        assert_eq!(count, 2);
        assert_eq!(*store.state(), vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_no_effect_only_dispatches_once() {
        let mut store = Store::new(reducer);
        let count = dispatch_with_effects(&mut store, &NoEffect, Action::Fetch).await;

        assert_eq!(count, 1);
        assert!(store.state().is_empty());
    }
}
