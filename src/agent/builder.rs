use super::Agent;
use crate::belief::{initial_belief, Histogram};
use crate::config::QLearningConfig;
use crate::error::Result;
use crate::models::{
    BurningRoomObservation, BurningRoomReward, BurningRoomTransition, RewardVariant,
    DEFAULT_HARM_PROBABILITY,
};
use crate::policy::{EpsilonGreedyPolicy, DEFAULT_EPSILON};

/// Builder pattern for [`Agent`]
pub struct AgentBuilder {
    belief: Option<Histogram>,
    epsilon: f64,
    harm_probability: f64,
    reward_variant: RewardVariant,
}

impl AgentBuilder {
    pub fn new() -> Self {
        AgentBuilder {
            belief: None,
            epsilon: DEFAULT_EPSILON,
            harm_probability: DEFAULT_HARM_PROBABILITY,
            reward_variant: RewardVariant::default(),
        }
    }

    /// Builder preloaded with the model settings of a training config
    pub fn from_config(config: &QLearningConfig) -> Self {
        AgentBuilder::new()
            .epsilon(config.epsilon)
            .harm_probability(config.harm_probability)
            .reward_variant(config.reward_variant)
    }

    /// Belief to sample states from; defaults to [`initial_belief`]
    pub fn belief(mut self, belief: Histogram) -> Self {
        self.belief = Some(belief);
        self
    }

    pub fn epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    pub fn harm_probability(mut self, probability: f64) -> Self {
        self.harm_probability = probability;
        self
    }

    pub fn reward_variant(mut self, variant: RewardVariant) -> Self {
        self.reward_variant = variant;
        self
    }

    pub fn build(self) -> Result<Agent> {
        let policy = EpsilonGreedyPolicy::new(self.epsilon)?;
        let transition = BurningRoomTransition::new(self.harm_probability)?;
        let belief = match self.belief {
            Some(belief) => belief,
            None => initial_belief()?,
        };

        Ok(Agent::new(
            belief,
            policy,
            transition,
            BurningRoomReward::new(self.reward_variant),
            BurningRoomObservation::new(),
        ))
    }
}

impl Default for AgentBuilder {
    fn default() -> Self {
        Self::new()
    }
}
