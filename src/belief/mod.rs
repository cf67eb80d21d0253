//! # Belief Module
//!
//! A belief is a probability distribution over the hidden [`State`] of the
//! room. The agent never sees the state directly; it samples candidates from
//! its belief.
//!
//! ## Available Components
//!
//! - `BeliefState` trait: weighted sampling and enumeration
//! - `Histogram`: exact discrete distribution over a set of states
//! - `update::update_histogram`: Bayesian reweighting after an action and
//!   observation. Training does not use it; the belief stays at its prior.

pub mod update;

pub use update::update_histogram;

use crate::error::{HestiaError, Result};
use crate::types::{Preference, State};
use ndarray::Array1;
use rand::distributions::{Distribution, WeightedIndex};
use rand::RngCore;

/// Allowed distance between the total mass and 1.0
pub const PROBABILITY_TOLERANCE: f64 = 1e-9;

/// Core trait for belief representations
pub trait BeliefState {
    /// Draw a state according to the stored probabilities
    fn sample(&self, rng: &mut dyn RngCore) -> State;

    /// Every stored state and its probability, zero-mass entries included
    fn enumerate(&self) -> Vec<(State, f64)>;

    /// Probability mass assigned to `state`
    fn probability(&self, state: &State) -> f64;

    /// Shannon entropy in nats (uncertainty measure)
    fn entropy(&self) -> f64 {
        self.enumerate()
            .iter()
            .filter(|(_, p)| *p > 0.0)
            .map(|(_, p)| -p * p.ln())
            .sum()
    }
}

/// Discrete belief stored as an explicit state -> probability table
#[derive(Debug, Clone)]
pub struct Histogram {
    states: Vec<State>,
    probabilities: Array1<f64>,
    sampler: WeightedIndex<f64>,
}

impl Histogram {
    /// Build a histogram, failing unless the masses form a distribution
    pub fn new<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (State, f64)>,
    {
        let mut states = Vec::new();
        let mut masses = Vec::new();

        for (state, mass) in entries {
            if !mass.is_finite() || mass < 0.0 {
                return Err(HestiaError::InvalidDistribution(format!(
                    "probability {} for state [{}] is not a finite non-negative number",
                    mass, state
                )));
            }
            if states.contains(&state) {
                return Err(HestiaError::InvalidDistribution(format!(
                    "state [{}] listed more than once",
                    state
                )));
            }
            states.push(state);
            masses.push(mass);
        }

        if states.is_empty() {
            return Err(HestiaError::InvalidDistribution("belief has no states".to_string()));
        }

        let total: f64 = masses.iter().sum();
        if (total - 1.0).abs() > PROBABILITY_TOLERANCE {
            return Err(HestiaError::InvalidDistribution(format!(
                "probabilities sum to {}, expected 1.0",
                total
            )));
        }

        let sampler = WeightedIndex::new(&masses)
            .map_err(|e| HestiaError::InvalidDistribution(e.to_string()))?;

        Ok(Histogram {
            states,
            probabilities: Array1::from_vec(masses),
            sampler,
        })
    }

    /// Equal mass on every given state
    pub fn uniform(states: &[State]) -> Result<Self> {
        let mass = 1.0 / states.len().max(1) as f64;
        Histogram::new(states.iter().map(|s| (*s, mass)))
    }

    /// Point mass on a single state
    pub fn certain(state: State) -> Result<Self> {
        Histogram::new([(state, 1.0)])
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn states(&self) -> &[State] {
        &self.states
    }
}

impl BeliefState for Histogram {
    fn sample(&self, rng: &mut dyn RngCore) -> State {
        self.states[self.sampler.sample(rng)]
    }

    fn enumerate(&self) -> Vec<(State, f64)> {
        self.states
            .iter()
            .copied()
            .zip(self.probabilities.iter().copied())
            .collect()
    }

    fn probability(&self, state: &State) -> f64 {
        self.states
            .iter()
            .position(|s| s == state)
            .map(|idx| self.probabilities[idx])
            .unwrap_or(0.0)
    }
}

/// Prior belief the agent starts from: the human always prefers the object,
/// and fire is more likely than not.
pub fn initial_belief() -> Result<Histogram> {
    Histogram::new([
        (State::new(true, true, true, Preference::Object), 0.2),
        (State::new(false, true, true, Preference::Object), 0.2),
        (State::new(true, false, true, Preference::Object), 0.2),
        (State::new(true, true, false, Preference::Object), 0.2),
        (State::new(false, false, true, Preference::Object), 0.1),
        (State::new(false, true, false, Preference::Object), 0.1),
    ])
}
