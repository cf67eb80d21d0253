//! # Action-Value Table
//!
//! Tabular Q-values: one row of [`Action::COUNT`] values per [`State`].
//! Rows are created up front for every state, so a lookup for a state that
//! is not in the table is reported as [`HestiaError::UnknownState`] rather
//! than silently inserting a row.
//!
//! The learning loop is the only writer; policies read through `&self`.

pub mod persistence;

pub use persistence::TableFormat;

use crate::error::{HestiaError, Result};
use crate::types::{Action, State};
use ndarray::Array1;
use std::collections::BTreeMap;

/// Q-value of a single state-action pair
pub type QValue = f64;

/// Q-values for every state, indexed by [`Action::index`]
#[derive(Debug, Clone, PartialEq)]
pub struct ActionValueTable {
    rows: BTreeMap<State, Array1<QValue>>,
}

impl ActionValueTable {
    /// Zero-initialised table covering every state and action
    pub fn new() -> Self {
        Self::zeros(State::all())
    }

    /// Zero-initialised table covering the given states
    pub fn zeros<I: IntoIterator<Item = State>>(states: I) -> Self {
        let rows = states
            .into_iter()
            .map(|state| (state, Array1::zeros(Action::COUNT)))
            .collect();
        ActionValueTable { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn contains(&self, state: &State) -> bool {
        self.rows.contains_key(state)
    }

    /// States in their fixed ordering
    pub fn states(&self) -> impl Iterator<Item = &State> {
        self.rows.keys()
    }

    /// All Q-values of `state`
    pub fn row(&self, state: &State) -> Result<&Array1<QValue>> {
        self.rows
            .get(state)
            .ok_or_else(|| HestiaError::unknown_state(state))
    }

    pub fn value(&self, state: &State, action: Action) -> Result<QValue> {
        Ok(self.row(state)?[action.index()])
    }

    pub fn set(&mut self, state: &State, action: Action, value: QValue) -> Result<()> {
        let row = self
            .rows
            .get_mut(state)
            .ok_or_else(|| HestiaError::unknown_state(state))?;
        row[action.index()] = value;
        Ok(())
    }

    /// Add a zero row for `state` if it is missing
    pub fn ensure_row(&mut self, state: State) {
        self.rows
            .entry(state)
            .or_insert_with(|| Array1::zeros(Action::COUNT));
    }

    /// Highest Q-value in the row of `state`
    pub fn max_value(&self, state: &State) -> Result<QValue> {
        Ok(self
            .row(state)?
            .iter()
            .fold(QValue::NEG_INFINITY, |max, &v| max.max(v)))
    }

    /// Greedy action for `state`; ties go to the earliest action in
    /// [`Action::ALL`].
    pub fn best_action(&self, state: &State) -> Result<Action> {
        let row = self.row(state)?;
        let mut best = Action::ALL[0];
        for action in Action::ALL.iter().skip(1) {
            if row[action.index()] > row[best.index()] {
                best = *action;
            }
        }
        Ok(best)
    }

    /// Greedy action of every state, in state order
    pub fn greedy_policy(&self) -> Vec<(State, Action)> {
        self.rows
            .keys()
            .filter_map(|state| self.best_action(state).ok().map(|a| (*state, a)))
            .collect()
    }
}

impl Default for ActionValueTable {
    fn default() -> Self {
        Self::new()
    }
}
