use super::ObservationModel;
use crate::types::{Action, Observation, State};
use rand::RngCore;
use serde::{Deserialize, Serialize};

/// Likelihood reported for any observation after a non-informative action.
///
/// This is a flat placeholder, not a calibrated probability: it does not sum
/// to one over the observation space.
pub const UNINFORMATIVE_LIKELIHOOD: f64 = 0.5;

/// Asking reveals fire status and preference exactly; every other action
/// reveals nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BurningRoomObservation;

impl BurningRoomObservation {
    pub fn new() -> Self {
        BurningRoomObservation
    }
}

impl ObservationModel for BurningRoomObservation {
    fn sample(&self, next_state: &State, action: Action, _rng: &mut dyn RngCore) -> Observation {
        match action {
            Action::Ask => Observation::new(next_state.fire, next_state.human_preference),
            Action::ShortGrab | Action::LongGrab => Observation::unknown(),
        }
    }

    fn probability(&self, observation: &Observation, next_state: &State, action: Action) -> f64 {
        match action {
            Action::Ask => {
                let matches = observation.fire_status == Some(next_state.fire)
                    && observation.preference == Some(next_state.human_preference);
                if matches {
                    1.0
                } else {
                    0.0
                }
            }
            Action::ShortGrab | Action::LongGrab => UNINFORMATIVE_LIKELIHOOD,
        }
    }
}
