use crate::error::{HestiaError, Result};
use crate::models::{RewardVariant, DEFAULT_HARM_PROBABILITY};
use crate::policy::DEFAULT_EPSILON;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Hyperparameters of a Q-learning run, loadable from JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QLearningConfig {
    /// Learning rate
    pub alpha: f64,
    /// Discount factor
    pub gamma: f64,
    /// Exploration rate
    pub epsilon: f64,
    pub steps_per_episode: usize,
    pub num_episodes: usize,
    /// Chance a short grab into fire harms the agent
    pub harm_probability: f64,
    pub reward_variant: RewardVariant,
    /// Seed for the shared random source; `None` seeds from entropy
    pub seed: Option<u64>,
}

impl Default for QLearningConfig {
    fn default() -> Self {
        QLearningConfig {
            alpha: 0.1,
            gamma: 0.9,
            epsilon: DEFAULT_EPSILON,
            steps_per_episode: 5,
            num_episodes: 100,
            harm_probability: DEFAULT_HARM_PROBABILITY,
            reward_variant: RewardVariant::Refined,
            seed: None,
        }
    }
}

impl QLearningConfig {
    pub fn validate(&self) -> Result<()> {
        if !(self.alpha > 0.0 && self.alpha <= 1.0) {
            return Err(invalid("alpha", format!("must be in (0, 1], got {}", self.alpha)));
        }
        if !(0.0..=1.0).contains(&self.gamma) {
            return Err(invalid("gamma", format!("must be in [0, 1], got {}", self.gamma)));
        }
        if !(0.0..=1.0).contains(&self.epsilon) {
            return Err(invalid("epsilon", format!("must be in [0, 1], got {}", self.epsilon)));
        }
        if !(0.0..=1.0).contains(&self.harm_probability) {
            return Err(invalid(
                "harm_probability",
                format!("must be in [0, 1], got {}", self.harm_probability),
            ));
        }
        if self.steps_per_episode == 0 {
            return Err(invalid("steps_per_episode", "must be greater than 0".to_string()));
        }
        if self.num_episodes == 0 {
            return Err(invalid("num_episodes", "must be greater than 0".to_string()));
        }
        Ok(())
    }

    /// Load and validate a JSON config file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        let config: QLearningConfig = serde_json::from_str(&data)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON config file, falling back to defaults if it does not exist
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            log::warn!("Config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let serialized = serde_json::to_string_pretty(self)?;
        std::fs::write(path, serialized)?;
        Ok(())
    }
}

fn invalid(name: &str, reason: String) -> HestiaError {
    HestiaError::invalid_parameter(name.to_string(), reason)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = QLearningConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.alpha, 0.1);
        assert_eq!(config.gamma, 0.9);
        assert_eq!(config.epsilon, 0.1);
        assert_eq!(config.steps_per_episode, 5);
        assert_eq!(config.num_episodes, 100);
    }

    #[test]
    fn test_validation_errors() {
        let config = QLearningConfig {
            alpha: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(HestiaError::InvalidParameter { ref name, .. }) if name == "alpha"
        ));

        let config = QLearningConfig {
            num_episodes: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = QLearningConfig {
            epsilon: 1.2,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: QLearningConfig =
            serde_json::from_str(r#"{"num_episodes": 10, "reward_variant": "simple"}"#).unwrap();
        assert_eq!(config.num_episodes, 10);
        assert_eq!(config.reward_variant, RewardVariant::Simple);
        assert_eq!(config.alpha, 0.1);
        assert_eq!(config.seed, None);
    }
}
