// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The pages don't know any field rules. They ask a [`FormValidator`] for a
//! [`ValidationReport`], and only care whether it has messages or not.

use std::collections::BTreeMap;

/// Field name to human readable message. An empty report means the form is valid.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationReport {
    pub messages: BTreeMap<String, String>,
}

impl ValidationReport {
    #[must_use]
    pub fn valid() -> Self { Self::default() }

    #[must_use]
    pub fn with_message(mut self, field: &str, message: &str) -> Self {
        self.messages.insert(field.to_string(), message.to_string());
        self
    }

    #[must_use]
    pub fn is_valid(&self) -> bool { self.messages.is_empty() }

    #[must_use]
    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.messages.get(field).map(String::as_str)
    }
}

/// Validation lives outside of this crate. Anything that can look at a form and produce
/// a [`ValidationReport`] will do, including a plain closure.
pub trait FormValidator<F> {
    fn validate(&self, form: &F) -> ValidationReport;
}

impl<F, T> FormValidator<F> for T
where
    T: Fn(&F) -> ValidationReport,
{
    fn validate(&self, form: &F) -> ValidationReport { self(form) }
}
