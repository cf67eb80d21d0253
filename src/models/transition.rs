use super::TransitionModel;
use crate::error::{HestiaError, Result};
use crate::types::{Action, State};
use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};

/// Chance that a short grab into a burning room harms the agent
pub const DEFAULT_HARM_PROBABILITY: f64 = 0.7;

/// Physical dynamics of the burning room
///
/// - `ShortGrab` with fire: the agent is harmed with `harm_probability`,
///   otherwise the object is saved. Without fire the object is always saved.
/// - `LongGrab`: the object is always saved.
/// - `Ask`: nothing changes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BurningRoomTransition {
    harm_probability: f64,
}

impl BurningRoomTransition {
    pub fn new(harm_probability: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&harm_probability) {
            return Err(HestiaError::invalid_parameter(
                "harm_probability".to_string(),
                format!("must be in [0, 1], got {}", harm_probability),
            ));
        }
        Ok(BurningRoomTransition { harm_probability })
    }

    pub fn harm_probability(&self) -> f64 {
        self.harm_probability
    }
}

impl Default for BurningRoomTransition {
    fn default() -> Self {
        BurningRoomTransition {
            harm_probability: DEFAULT_HARM_PROBABILITY,
        }
    }
}

impl TransitionModel for BurningRoomTransition {
    fn sample(&self, state: &State, action: Action, rng: &mut dyn RngCore) -> State {
        match action {
            Action::ShortGrab => {
                if state.fire && rng.gen::<f64>() < self.harm_probability {
                    state.with_agent_safe(false)
                } else {
                    state.with_object_safe(true)
                }
            }
            Action::LongGrab => state.with_object_safe(true),
            Action::Ask => *state,
        }
    }

    fn outcomes(&self, state: &State, action: Action) -> Vec<(State, f64)> {
        match action {
            Action::ShortGrab if state.fire => {
                let harmed = state.with_agent_safe(false);
                let saved = state.with_object_safe(true);
                if harmed == saved {
                    vec![(saved, 1.0)]
                } else {
                    vec![
                        (harmed, self.harm_probability),
                        (saved, 1.0 - self.harm_probability),
                    ]
                }
            }
            Action::ShortGrab | Action::LongGrab => vec![(state.with_object_safe(true), 1.0)],
            Action::Ask => vec![(*state, 1.0)],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Preference;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_rejects_out_of_range_probability() {
        assert!(BurningRoomTransition::new(1.5).is_err());
        assert!(BurningRoomTransition::new(-0.1).is_err());
        assert!(BurningRoomTransition::new(0.0).is_ok());
    }

    #[test]
    fn test_outcomes_sum_to_one() {
        let model = BurningRoomTransition::default();
        for state in State::all() {
            for action in Action::ALL {
                let total: f64 = model.outcomes(&state, action).iter().map(|(_, p)| p).sum();
                assert!((total - 1.0).abs() < 1e-12, "{} / {}", state, action);
            }
        }
    }

    #[test]
    fn test_harm_and_save_are_exclusive() {
        // Agent already harmed and object already safe: both branches coincide
        let state = State::new(true, true, false, Preference::Agent);
        let model = BurningRoomTransition::default();
        assert_eq!(model.outcomes(&state, Action::ShortGrab), vec![(state, 1.0)]);
        assert_eq!(model.probability(&state, &state, Action::ShortGrab), 1.0);
    }

    #[test]
    fn test_short_grab_without_fire_always_saves() {
        let model = BurningRoomTransition::new(1.0).unwrap();
        let mut rng = StdRng::seed_from_u64(11);

        for state in State::all().into_iter().filter(|s| !s.fire) {
            for _ in 0..50 {
                let next = model.sample(&state, Action::ShortGrab, &mut rng);
                assert_eq!(next, state.with_object_safe(true));
                assert_eq!(next.agent_safe, state.agent_safe);
            }
        }
    }

    #[test]
    fn test_short_grab_frequency() {
        let model = BurningRoomTransition::default();
        let state = State::new(true, false, true, Preference::Object);
        let mut rng = StdRng::seed_from_u64(7);

        let trials = 10_000;
        let harmed = (0..trials)
            .filter(|_| !model.sample(&state, Action::ShortGrab, &mut rng).agent_safe)
            .count();
        let rate = harmed as f64 / trials as f64;
        assert!((rate - 0.7).abs() < 0.03, "harm rate {}", rate);
    }
}
