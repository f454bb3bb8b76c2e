// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::Debug, sync::Arc};

/// Reducer function. `None` means "no state yet", and the reducer must produce its
/// default state in that case.
pub type ReducerFn<S, A> = dyn Fn(Option<&S>, &A) -> S + Sync + Send + 'static;

/// Cheap to clone handle to a reducer function.
#[derive(Clone)]
pub struct ReducerFnWrapper<S, A>
where
    S: 'static,
    A: 'static,
{
    fn_ref: Arc<ReducerFn<S, A>>,
}

impl<S, A> Debug for ReducerFnWrapper<S, A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ReducerFnWrapper")
    }
}

impl<S, A> ReducerFnWrapper<S, A>
where
    S: 'static,
    A: 'static,
{
    pub fn from(
        fn_ref: impl Fn(Option<&S>, &A) -> S + Send + Sync + 'static,
    ) -> ReducerFnWrapper<S, A> {
        Self {
            fn_ref: Arc::new(fn_ref),
        }
    }

    pub fn invoke(&self, state: Option<&S>, action: &A) -> S {
        let reducer_fn = &self.fn_ref;
        reducer_fn(state, action)
    }
}
