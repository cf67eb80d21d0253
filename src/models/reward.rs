use super::RewardModel;
use crate::types::{Action, State};
use serde::{Deserialize, Serialize};

pub const HARM_PENALTY: f64 = -10.0;
pub const SHORT_GRAB_REWARD: f64 = 10.0;
pub const LONG_GRAB_REWARD: f64 = 6.0;
pub const ASK_COST: f64 = -0.5;
pub const DEFAULT_PENALTY: f64 = -5.0;

/// Reward shaping scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RewardVariant {
    /// A short grab that neither harms the agent nor leaves the object safe
    /// falls through to the default penalty.
    Simple,
    /// A short grab is scored on every outcome: harm, unsafe object, success.
    #[default]
    Refined,
}

/// Reward for a `(state, action, next_state)` transition
///
/// Conditions are read from `next_state`, the outcome of the action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BurningRoomReward {
    variant: RewardVariant,
}

impl BurningRoomReward {
    pub fn new(variant: RewardVariant) -> Self {
        BurningRoomReward { variant }
    }

    pub fn variant(&self) -> RewardVariant {
        self.variant
    }

    fn short_grab(&self, outcome: &State) -> f64 {
        let harmed = outcome.fire && !outcome.agent_safe;
        match self.variant {
            RewardVariant::Simple => {
                if harmed {
                    HARM_PENALTY
                } else if outcome.object_safe {
                    SHORT_GRAB_REWARD
                } else {
                    DEFAULT_PENALTY
                }
            }
            RewardVariant::Refined => {
                if harmed {
                    HARM_PENALTY
                } else if !outcome.object_safe {
                    DEFAULT_PENALTY
                } else {
                    SHORT_GRAB_REWARD
                }
            }
        }
    }
}

impl RewardModel for BurningRoomReward {
    fn sample(&self, _state: &State, action: Action, next_state: &State) -> f64 {
        match action {
            Action::ShortGrab => self.short_grab(next_state),
            Action::LongGrab if next_state.object_safe => LONG_GRAB_REWARD,
            Action::LongGrab => DEFAULT_PENALTY,
            Action::Ask => ASK_COST,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Preference;

    fn state(fire: bool, object_safe: bool, agent_safe: bool) -> State {
        State::new(fire, object_safe, agent_safe, Preference::Object)
    }

    #[test]
    fn test_harm_penalty_wins() {
        for variant in [RewardVariant::Simple, RewardVariant::Refined] {
            let model = BurningRoomReward::new(variant);
            let before = state(true, false, true);
            let after = state(true, true, false);
            assert_eq!(model.sample(&before, Action::ShortGrab, &after), HARM_PENALTY);
        }
    }

    #[test]
    fn test_variants_agree_on_short_grab() {
        // Both variants land on the default penalty for an unsafe, unharmed outcome
        let before = state(false, false, true);
        let after = state(false, false, true);
        let simple = BurningRoomReward::new(RewardVariant::Simple);
        let refined = BurningRoomReward::new(RewardVariant::Refined);
        assert_eq!(simple.sample(&before, Action::ShortGrab, &after), DEFAULT_PENALTY);
        assert_eq!(refined.sample(&before, Action::ShortGrab, &after), DEFAULT_PENALTY);

        let saved = state(false, true, true);
        assert_eq!(simple.sample(&before, Action::ShortGrab, &saved), SHORT_GRAB_REWARD);
        assert_eq!(refined.sample(&before, Action::ShortGrab, &saved), SHORT_GRAB_REWARD);
    }

    #[test]
    fn test_long_grab_and_ask() {
        let model = BurningRoomReward::default();
        assert_eq!(model.variant(), RewardVariant::Refined);

        let s = state(true, false, true);
        assert_eq!(model.sample(&s, Action::LongGrab, &state(true, true, true)), LONG_GRAB_REWARD);
        assert_eq!(model.sample(&s, Action::LongGrab, &s), DEFAULT_PENALTY);
        assert_eq!(model.sample(&s, Action::Ask, &s), ASK_COST);
    }
}
