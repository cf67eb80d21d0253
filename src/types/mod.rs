//! # Domain Types
//!
//! Immutable value types for the burning-room decision process.
//!
//! - [`State`]: the hidden world state (fire, object, agent, human preference)
//! - [`Action`]: the closed set of actions the agent can take
//! - [`Observation`]: what the agent perceives after acting
//!
//! States compare and hash field-wise so they can key the action-value table.
//! Their text rendering is the persistence key and parses back with [`FromStr`].

use crate::error::{HestiaError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What the human wants saved first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Preference {
    Object,
    Agent,
}

impl Preference {
    pub const ALL: [Preference; 2] = [Preference::Object, Preference::Agent];

    pub fn as_str(&self) -> &'static str {
        match self {
            Preference::Object => "object",
            Preference::Agent => "agent",
        }
    }
}

impl fmt::Display for Preference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Preference {
    type Err = HestiaError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "object" => Ok(Preference::Object),
            "agent" => Ok(Preference::Agent),
            other => Err(HestiaError::ParseError(format!("unknown preference '{}'", other))),
        }
    }
}

/// Hidden world state
///
/// Transitions never mutate a state; they build a new one with the
/// `with_*` helpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct State {
    pub fire: bool,
    pub object_safe: bool,
    pub agent_safe: bool,
    pub human_preference: Preference,
}

impl State {
    pub fn new(
        fire: bool,
        object_safe: bool,
        agent_safe: bool,
        human_preference: Preference,
    ) -> Self {
        State {
            fire,
            object_safe,
            agent_safe,
            human_preference,
        }
    }

    /// Every state of the model: {fire} x {object_safe} x {agent_safe} x {preference}
    pub fn all() -> Vec<State> {
        let mut states = Vec::with_capacity(16);
        for fire in [true, false] {
            for object_safe in [true, false] {
                for agent_safe in [true, false] {
                    for preference in Preference::ALL {
                        states.push(State::new(fire, object_safe, agent_safe, preference));
                    }
                }
            }
        }
        states
    }

    pub fn with_object_safe(self, object_safe: bool) -> Self {
        State { object_safe, ..self }
    }

    pub fn with_agent_safe(self, agent_safe: bool) -> Self {
        State { agent_safe, ..self }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Fire: {}, Object Safe: {}, Agent Safe: {}, Preference: {}",
            self.fire, self.object_safe, self.agent_safe, self.human_preference
        )
    }
}

impl FromStr for State {
    type Err = HestiaError;

    fn from_str(s: &str) -> Result<Self> {
        let fields: Vec<&str> = s.split(',').collect();
        if fields.len() != 4 {
            return Err(HestiaError::ParseError(format!("expected 4 state fields in '{}'", s)));
        }

        Ok(State {
            fire: parse_flag(fields[0], "Fire")?,
            object_safe: parse_flag(fields[1], "Object Safe")?,
            agent_safe: parse_flag(fields[2], "Agent Safe")?,
            human_preference: parse_field(fields[3], "Preference")?.parse()?,
        })
    }
}

/// Value of a `Label: value` field
fn parse_field<'a>(field: &'a str, label: &str) -> Result<&'a str> {
    field
        .trim()
        .strip_prefix(label)
        .and_then(|rest| rest.strip_prefix(':'))
        .map(str::trim)
        .ok_or_else(|| {
            HestiaError::ParseError(format!("expected '{}: ...', got '{}'", label, field))
        })
}

fn parse_flag(field: &str, label: &str) -> Result<bool> {
    parse_field(field, label)?
        .parse::<bool>()
        .map_err(|e| HestiaError::ParseError(format!("{}: {}", label, e)))
}

/// The closed set of actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Fast, risky retrieval
    ShortGrab,
    /// Slow retrieval that always saves the object
    LongGrab,
    /// Ask the human; the only information-gathering action
    Ask,
}

impl Action {
    /// Fixed enumeration order, also the tie-break order for greedy selection
    pub const ALL: [Action; 3] = [Action::ShortGrab, Action::LongGrab, Action::Ask];

    pub const COUNT: usize = 3;

    /// Position of this action in [`Action::ALL`]
    pub fn index(&self) -> usize {
        match self {
            Action::ShortGrab => 0,
            Action::LongGrab => 1,
            Action::Ask => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<Action> {
        Action::ALL.get(index).copied()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::ShortGrab => "short_grab",
            Action::LongGrab => "long_grab",
            Action::Ask => "ask",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = HestiaError;

    fn from_str(s: &str) -> Result<Self> {
        Action::ALL
            .iter()
            .find(|action| action.as_str() == s.trim())
            .copied()
            .ok_or_else(|| HestiaError::ParseError(format!("unknown action '{}'", s)))
    }
}

/// What the agent perceives after an action
///
/// `None` in a field means nothing was learned this step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Observation {
    pub fire_status: Option<bool>,
    pub preference: Option<Preference>,
}

impl Observation {
    pub fn new(fire_status: bool, preference: Preference) -> Self {
        Observation {
            fire_status: Some(fire_status),
            preference: Some(preference),
        }
    }

    /// The uninformative observation
    pub fn unknown() -> Self {
        Observation::default()
    }

    pub fn is_informative(&self) -> bool {
        self.fire_status.is_some() || self.preference.is_some()
    }

    /// Every observation the model can emit, uninformative one first
    pub fn all() -> Vec<Observation> {
        let mut observations = vec![Observation::unknown()];
        for fire in [true, false] {
            for preference in Preference::ALL {
                observations.push(Observation::new(fire, preference));
            }
        }
        observations
    }
}

impl fmt::Display for Observation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.fire_status {
            Some(fire) => write!(f, "Fire Status: {}, ", fire)?,
            None => write!(f, "Fire Status: None, ")?,
        }
        match self.preference {
            Some(preference) => write!(f, "Preference: {}", preference),
            None => write!(f, "Preference: None"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_all_states_are_distinct() {
        let states = State::all();
        assert_eq!(states.len(), 16);
        let unique: HashSet<State> = states.iter().copied().collect();
        assert_eq!(unique.len(), 16);
    }

    #[test]
    fn test_state_value_equality() {
        let a = State::new(true, false, true, Preference::Object);
        let b = State::new(true, false, true, Preference::Object);
        assert_eq!(a, b);

        let mut set = HashSet::new();
        set.insert(a);
        assert!(set.contains(&b));
    }

    #[test]
    fn test_state_text_rendering() {
        let state = State::new(true, false, true, Preference::Object);
        let text = state.to_string();
        assert_eq!(text, "Fire: true, Object Safe: false, Agent Safe: true, Preference: object");
        assert_eq!(text.parse::<State>().unwrap(), state);
    }

    #[test]
    fn test_state_parse_rejects_garbage() {
        assert!("Fire: maybe, Object Safe: false, Agent Safe: true, Preference: object"
            .parse::<State>()
            .is_err());
        assert!("Fire: true".parse::<State>().is_err());
        assert!("Fire: true, Object Safe: false, Agent Safe: true, Preference: cat"
            .parse::<State>()
            .is_err());
    }

    #[test]
    fn test_action_order_and_tags() {
        for (i, action) in Action::ALL.iter().enumerate() {
            assert_eq!(action.index(), i);
            assert_eq!(Action::from_index(i), Some(*action));
            assert_eq!(action.as_str().parse::<Action>().unwrap(), *action);
        }
        assert_eq!(Action::from_index(3), None);
        assert!("jump".parse::<Action>().is_err());
    }

    #[test]
    fn test_observation_unknown() {
        let obs = Observation::unknown();
        assert!(!obs.is_informative());
        assert_eq!(obs.to_string(), "Fire Status: None, Preference: None");
        assert_eq!(Observation::all().len(), 5);
    }
}
