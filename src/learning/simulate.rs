use super::StepRecord;
use crate::agent::Agent;
use crate::belief::BeliefState;
use crate::error::Result;
use crate::models::{ObservationModel, RewardModel, TransitionModel};
use crate::policy::PolicyModel;
use crate::table::ActionValueTable;
use rand::RngCore;

/// How a rollout chooses the state each step acts in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RolloutMode {
    /// Every step draws a fresh state from the (unchanging) belief
    Resample,
    /// One hidden true state is drawn up front and evolves with each
    /// transition. The policy only sees draws from the belief, which is
    /// updated from every observation.
    Tracked,
}

/// Run `steps` steps without learning
///
/// The table is only read, by policies that consult it.
pub fn simulate(
    agent: &mut Agent,
    policy: &dyn PolicyModel,
    table: &ActionValueTable,
    steps: usize,
    mode: RolloutMode,
    rng: &mut dyn RngCore,
) -> Result<Vec<StepRecord>> {
    let mut records = Vec::with_capacity(steps);
    let mut true_state = match mode {
        RolloutMode::Resample => None,
        RolloutMode::Tracked => Some(agent.belief().sample(rng)),
    };

    for _ in 0..steps {
        let believed_state = agent.belief().sample(rng);
        let state = true_state.unwrap_or(believed_state);

        let action = policy.sample(&believed_state, table, rng)?;
        let next_state = agent.transition_model().sample(&state, action, rng);
        let reward = agent.reward_model().sample(&state, action, &next_state);
        let observation = agent.observation_model().sample(&next_state, action, rng);

        if true_state.is_some() {
            agent.update_belief(action, &observation)?;
            true_state = Some(next_state);
        }

        records.push(StepRecord {
            state,
            believed_state,
            action,
            next_state,
            reward,
            observation,
        });
    }

    Ok(records)
}
