//! # Generative Models
//!
//! The three world models of the burning-room process. Each is a small value
//! type behind a trait; the Bayesian belief update in
//! [`belief::update_histogram`](crate::belief::update_histogram) only sees
//! the traits.
//!
//! - [`BurningRoomTransition`]: stochastic next-state sampler
//! - [`BurningRoomReward`]: deterministic reward for a transition
//! - [`BurningRoomObservation`]: observation sampler and likelihood
//!
//! All sampling draws from a caller-supplied `RngCore`, so a training run has
//! exactly one random source.

pub mod observation;
pub mod reward;
pub mod transition;

pub use observation::BurningRoomObservation;
pub use reward::{BurningRoomReward, RewardVariant};
pub use transition::{BurningRoomTransition, DEFAULT_HARM_PROBABILITY};

use crate::types::{Action, Observation, State};
use rand::RngCore;

/// Samples `next_state ~ T(. | state, action)`
pub trait TransitionModel {
    fn sample(&self, state: &State, action: Action, rng: &mut dyn RngCore) -> State;

    /// All reachable next states with their probabilities
    fn outcomes(&self, state: &State, action: Action) -> Vec<(State, f64)>;

    /// `T(next_state | state, action)`
    fn probability(&self, next_state: &State, state: &State, action: Action) -> f64 {
        self.outcomes(state, action)
            .iter()
            .filter(|(candidate, _)| candidate == next_state)
            .map(|(_, p)| p)
            .sum()
    }
}

/// Scores a transition
pub trait RewardModel {
    fn sample(&self, state: &State, action: Action, next_state: &State) -> f64;
}

/// Samples `o ~ O(. | next_state, action)` and evaluates its likelihood
pub trait ObservationModel {
    fn sample(&self, next_state: &State, action: Action, rng: &mut dyn RngCore) -> Observation;

    fn probability(&self, observation: &Observation, next_state: &State, action: Action) -> f64;
}
