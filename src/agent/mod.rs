//! # Agent
//!
//! Bundles the belief with the policy, transition, reward and observation
//! models so the learning loop has one thing to hold. The agent has no
//! behaviour of its own beyond delegation; the action-value table lives
//! outside it and is passed explicitly.
//!
//! ## Example Usage
//!
//! ```rust
//! use hestia::agent::AgentBuilder;
//! use hestia::models::RewardVariant;
//!
//! let agent = AgentBuilder::new()
//!     .epsilon(0.1)
//!     .harm_probability(0.7)
//!     .reward_variant(RewardVariant::Refined)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(agent.policy().epsilon(), 0.1);
//! ```

mod builder;

pub use builder::AgentBuilder;

use crate::belief::{update_histogram, Histogram};
use crate::error::Result;
use crate::models::{BurningRoomObservation, BurningRoomReward, BurningRoomTransition};
use crate::policy::EpsilonGreedyPolicy;
use crate::types::{Action, Observation};

/// Burning-room agent: belief plus the four models
#[derive(Debug, Clone)]
pub struct Agent {
    belief: Histogram,
    policy: EpsilonGreedyPolicy,
    transition: BurningRoomTransition,
    reward: BurningRoomReward,
    observation: BurningRoomObservation,
}

impl Agent {
    pub fn new(
        belief: Histogram,
        policy: EpsilonGreedyPolicy,
        transition: BurningRoomTransition,
        reward: BurningRoomReward,
        observation: BurningRoomObservation,
    ) -> Self {
        Agent {
            belief,
            policy,
            transition,
            reward,
            observation,
        }
    }

    pub fn belief(&self) -> &Histogram {
        &self.belief
    }

    pub fn policy(&self) -> &EpsilonGreedyPolicy {
        &self.policy
    }

    pub fn transition_model(&self) -> &BurningRoomTransition {
        &self.transition
    }

    pub fn reward_model(&self) -> &BurningRoomReward {
        &self.reward
    }

    pub fn observation_model(&self) -> &BurningRoomObservation {
        &self.observation
    }

    /// Replace the belief with its Bayesian posterior after `action` / `observation`
    pub fn update_belief(&mut self, action: Action, observation: &Observation) -> Result<()> {
        self.belief = update_histogram(
            &self.belief,
            action,
            observation,
            &self.transition,
            &self.observation,
        )?;
        Ok(())
    }
}
