//! Per-boundary execution context.
//!
//! One `ExecutionContext` spans the mutations between two reconciliations.
//! It owns the transient conservation counter and the first error recorded by
//! any mutation. The surrounding framework rolls a failed transaction back by
//! restoring a clone taken before the transaction started.

use super::errors::BalanceError;
use dl_telemetry::{metric_inc, RECONCILER_ERRORS};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExecutionContext {
    conservation_counter: i128,
    first_error: Option<BalanceError>,
}

impl ExecutionContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Net balance delta applied to unassociated addresses since the last
    /// reconciliation.
    pub fn conservation_counter(&self) -> i128 {
        self.conservation_counter
    }

    /// The first error recorded in this context, if any.
    pub fn error(&self) -> Option<&BalanceError> {
        self.first_error.as_ref()
    }

    pub fn has_error(&self) -> bool {
        self.first_error.is_some()
    }

    /// Records the error of `result` if none was recorded yet, then hands the
    /// result back unchanged.
    pub(crate) fn record<T>(&mut self, result: Result<T, BalanceError>) -> Result<T, BalanceError> {
        if let Err(err) = &result {
            metric_inc!(RECONCILER_ERRORS, &[err.kind().as_str()]);
            if self.first_error.is_none() {
                self.first_error = Some(err.clone());
            }
        }
        result
    }

    pub(crate) fn checked_counter_add(&self, delta: i128) -> Option<i128> {
        self.conservation_counter.checked_add(delta)
    }

    pub(crate) fn set_counter(&mut self, value: i128) {
        self.conservation_counter = value;
    }
}
