//! # Learning Loop
//!
//! Tabular Q-learning over states drawn from the agent's belief.
//!
//! Each step draws a state from the belief, lets the epsilon-greedy policy
//! pick an action, samples the transition, scores the
//! `(state, action, next_state)` triple and applies
//!
//! ```text
//! Q[s][a] += alpha * (r + gamma * max_a' Q[s'][a'] - Q[s][a])
//! ```
//!
//! The observation is sampled and recorded but does not feed back into the
//! belief. Episodes run a fixed number of steps and there is no convergence
//! check.

pub mod simulate;

pub use simulate::{simulate, RolloutMode};

use crate::agent::{Agent, AgentBuilder};
use crate::belief::BeliefState;
use crate::config::QLearningConfig;
use crate::error::Result;
use crate::metrics::RewardHistory;
use crate::models::{ObservationModel, RewardModel, TransitionModel};
use crate::policy::PolicyModel;
use crate::table::{ActionValueTable, QValue};
use crate::types::{Action, Observation, State};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// One simulated interaction
///
/// `state` is the world state the transition acted on. `believed_state` is
/// the state the policy was queried with; the two differ only in tracked
/// rollouts, where the true state stays hidden from the policy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepRecord {
    pub state: State,
    pub believed_state: State,
    pub action: Action,
    pub next_state: State,
    pub reward: f64,
    pub observation: Observation,
}

/// Apply one temporal-difference update and return the new `Q[state][action]`
pub fn q_update(
    table: &mut ActionValueTable,
    state: &State,
    action: Action,
    reward: f64,
    next_state: &State,
    alpha: f64,
    gamma: f64,
) -> Result<QValue> {
    let best_next = table.max_value(next_state)?;
    let old_value = table.value(state, action)?;
    let new_value = old_value + alpha * (reward + gamma * best_next - old_value);
    table.set(state, action, new_value)?;
    Ok(new_value)
}

/// Drives Q-learning episodes for an [`Agent`]
///
/// Owns the single random source of the run. The action-value table is
/// borrowed per call, so the caller keeps ownership between runs.
pub struct QLearner {
    agent: Agent,
    config: QLearningConfig,
    rng: StdRng,
}

impl QLearner {
    pub fn new(agent: Agent, config: QLearningConfig) -> Result<Self> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(QLearner { agent, config, rng })
    }

    /// Learner with an agent assembled from the config's model settings
    pub fn from_config(config: QLearningConfig) -> Result<Self> {
        let agent = AgentBuilder::from_config(&config).build()?;
        Self::new(agent, config)
    }

    pub fn agent(&self) -> &Agent {
        &self.agent
    }

    pub fn config(&self) -> &QLearningConfig {
        &self.config
    }

    /// Draw a state from the belief and learn from one step taken in it
    pub fn step(&mut self, table: &mut ActionValueTable) -> Result<StepRecord> {
        let state = self.agent.belief().sample(&mut self.rng);
        self.step_from(table, state)
    }

    /// Learn from one step taken in `state`
    pub fn step_from(&mut self, table: &mut ActionValueTable, state: State) -> Result<StepRecord> {
        let action = self.agent.policy().sample(&state, table, &mut self.rng)?;
        let next_state = self.agent.transition_model().sample(&state, action, &mut self.rng);
        let reward = self.agent.reward_model().sample(&state, action, &next_state);
        let observation = self
            .agent
            .observation_model()
            .sample(&next_state, action, &mut self.rng);

        let old_value = table.value(&state, action)?;
        let new_value = q_update(
            table,
            &state,
            action,
            reward,
            &next_state,
            self.config.alpha,
            self.config.gamma,
        )?;

        log::debug!(
            "[{}] {} -> [{}] reward {} observed [{}], Q {} -> {}",
            state,
            action,
            next_state,
            reward,
            observation,
            old_value,
            new_value
        );

        Ok(StepRecord {
            state,
            believed_state: state,
            action,
            next_state,
            reward,
            observation,
        })
    }

    /// Run one episode and record its cumulative reward
    pub fn run_episode(
        &mut self,
        table: &mut ActionValueTable,
        history: &mut RewardHistory,
    ) -> Result<f64> {
        history.start_episode();
        for _ in 0..self.config.steps_per_episode {
            let record = self.step(table)?;
            history.step(record.reward);
        }
        Ok(history.end_episode())
    }

    /// Run the configured number of episodes
    pub fn train(&mut self, table: &mut ActionValueTable) -> Result<RewardHistory> {
        let mut history = RewardHistory::new();

        for episode in 0..self.config.num_episodes {
            let reward = self.run_episode(table, &mut history)?;
            log::debug!("Episode {}: cumulative reward {}", episode, reward);
        }

        log::info!(
            "Trained {} episodes ({} steps), mean reward of last 10: {:.3}",
            history.episode_count(),
            history.total_steps(),
            history.avg_episode_reward(10).unwrap_or(0.0)
        );

        Ok(history)
    }
}
