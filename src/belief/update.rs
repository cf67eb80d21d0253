use super::{BeliefState, Histogram};
use crate::error::{HestiaError, Result};
use crate::models::{ObservationModel, TransitionModel};
use crate::types::{Action, Observation, State};

/// Exact Bayesian update of a histogram belief
///
/// `b'(s') = O(o | s', a) * sum_s T(s' | s, a) * b(s)`, normalised. States
/// that end up with zero mass are dropped from the result.
///
/// Fails when the observation has zero likelihood under every predicted state.
pub fn update_histogram(
    belief: &Histogram,
    action: Action,
    observation: &Observation,
    transition: &dyn TransitionModel,
    observation_model: &dyn ObservationModel,
) -> Result<Histogram> {
    let prior = belief.enumerate();

    let mut posterior: Vec<(State, f64)> = State::all()
        .into_iter()
        .filter_map(|next_state| {
            let predicted: f64 = prior
                .iter()
                .map(|(state, mass)| transition.probability(&next_state, state, action) * mass)
                .sum();
            let likelihood = observation_model.probability(observation, &next_state, action);
            let weight = likelihood * predicted;
            (weight > 0.0).then_some((next_state, weight))
        })
        .collect();

    let total: f64 = posterior.iter().map(|(_, w)| w).sum();
    if total <= 0.0 {
        return Err(HestiaError::InvalidDistribution(format!(
            "observation [{}] after {} is impossible under the current belief",
            observation, action
        )));
    }

    for (_, weight) in posterior.iter_mut() {
        *weight /= total;
    }

    log::debug!(
        "Belief update after {} / [{}]: {} -> {} states",
        action,
        observation,
        prior.len(),
        posterior.len()
    );

    Histogram::new(posterior)
}
