use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::Path;

/// Per-episode cumulative rewards, in episode order
///
/// This is the hand-off to plotting: [`RewardHistory::export_csv`] writes one
/// `episode,reward` line per completed episode.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RewardHistory {
    /// Cumulative reward of each completed episode
    episode_rewards: Vec<f64>,

    /// Steps taken in each completed episode
    episode_lengths: Vec<usize>,

    total_steps: usize,

    #[serde(skip)]
    current_episode_reward: f64,
    #[serde(skip)]
    current_episode_length: usize,
}

impl RewardHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new episode
    pub fn start_episode(&mut self) {
        self.current_episode_reward = 0.0;
        self.current_episode_length = 0;
    }

    /// Record a step within an episode
    pub fn step(&mut self, reward: f64) {
        self.current_episode_reward += reward;
        self.current_episode_length += 1;
        self.total_steps += 1;
    }

    /// End the current episode, returning its cumulative reward
    pub fn end_episode(&mut self) -> f64 {
        let reward = self.current_episode_reward;
        self.episode_rewards.push(reward);
        self.episode_lengths.push(self.current_episode_length);
        self.start_episode();
        reward
    }

    pub fn episode_rewards(&self) -> &[f64] {
        &self.episode_rewards
    }

    pub fn episode_lengths(&self) -> &[usize] {
        &self.episode_lengths
    }

    pub fn episode_count(&self) -> usize {
        self.episode_rewards.len()
    }

    pub fn total_steps(&self) -> usize {
        self.total_steps
    }

    /// Mean reward over the last `window` episodes
    pub fn avg_episode_reward(&self, window: usize) -> Option<f64> {
        if self.episode_rewards.is_empty() || window == 0 {
            return None;
        }

        let n = window.min(self.episode_rewards.len());
        let sum: f64 = self.episode_rewards.iter().rev().take(n).sum();
        Some(sum / n as f64)
    }

    /// Save history to a JSON file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let serialized = serde_json::to_string_pretty(self)?;
        std::fs::write(path, serialized)?;
        Ok(())
    }

    /// Load history from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }

    /// Export rewards as CSV for plotting
    pub fn export_csv<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut file = std::fs::File::create(path)?;

        writeln!(file, "episode,reward")?;
        for (episode, reward) in self.episode_rewards.iter().enumerate() {
            writeln!(file, "{},{}", episode, reward)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_episode_accounting() {
        let mut history = RewardHistory::new();

        history.start_episode();
        history.step(10.0);
        history.step(-0.5);
        assert_eq!(history.end_episode(), 9.5);

        history.start_episode();
        history.step(-5.0);
        history.end_episode();

        assert_eq!(history.episode_rewards(), &[9.5, -5.0]);
        assert_eq!(history.episode_lengths(), &[2, 1]);
        assert_eq!(history.total_steps(), 3);
        assert_eq!(history.avg_episode_reward(1), Some(-5.0));
        assert_eq!(history.avg_episode_reward(10), Some(2.25));
    }

    #[test]
    fn test_empty_average() {
        let history = RewardHistory::new();
        assert_eq!(history.avg_episode_reward(5), None);
        assert_eq!(history.episode_count(), 0);
    }
}
