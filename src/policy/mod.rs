//! # Policy Models
//!
//! Action selection over the action-value table. The table is passed in on
//! every call; policies never own or mutate it.
//!
//! - [`EpsilonGreedyPolicy`]: explores with probability epsilon, otherwise
//!   takes the greedy action with a fixed tie-break order
//! - [`RandomPolicy`]: uniform over all actions, ignores the table

use crate::error::{HestiaError, Result};
use crate::table::ActionValueTable;
use crate::types::{Action, State};
use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};

pub const DEFAULT_EPSILON: f64 = 0.1;

/// Chooses an action for a state
pub trait PolicyModel {
    fn sample(
        &self,
        state: &State,
        table: &ActionValueTable,
        rng: &mut dyn RngCore,
    ) -> Result<Action>;

    /// Current exploration rate (if applicable)
    fn exploration_rate(&self) -> Option<f64> {
        None
    }
}

/// Epsilon-greedy policy: a uniformly random action with probability
/// `epsilon`, the best known action otherwise.
///
/// Exploitation on a state with no table row fails with `UnknownState`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EpsilonGreedyPolicy {
    epsilon: f64,
}

impl EpsilonGreedyPolicy {
    pub fn new(epsilon: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&epsilon) {
            return Err(HestiaError::invalid_parameter(
                "epsilon".to_string(),
                format!("must be in [0, 1], got {}", epsilon),
            ));
        }
        Ok(EpsilonGreedyPolicy { epsilon })
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }
}

impl Default for EpsilonGreedyPolicy {
    fn default() -> Self {
        EpsilonGreedyPolicy {
            epsilon: DEFAULT_EPSILON,
        }
    }
}

impl PolicyModel for EpsilonGreedyPolicy {
    fn sample(
        &self,
        state: &State,
        table: &ActionValueTable,
        rng: &mut dyn RngCore,
    ) -> Result<Action> {
        if rng.gen::<f64>() < self.epsilon {
            // Exploration: random action
            Ok(Action::ALL[rng.gen_range(0..Action::COUNT)])
        } else {
            // Exploitation: best action from the table
            table.best_action(state)
        }
    }

    fn exploration_rate(&self) -> Option<f64> {
        Some(self.epsilon)
    }
}

/// Uniformly random policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RandomPolicy;

impl PolicyModel for RandomPolicy {
    fn sample(
        &self,
        _state: &State,
        _table: &ActionValueTable,
        rng: &mut dyn RngCore,
    ) -> Result<Action> {
        Ok(Action::ALL[rng.gen_range(0..Action::COUNT)])
    }

    fn exploration_rate(&self) -> Option<f64> {
        Some(1.0)
    }
}
