//! # Hestia - Decision Making in a Burning Room
//!
//! Hestia models an agent that must retrieve an object from a room that may
//! be on fire. The agent cannot see the room directly: it holds a belief over
//! hidden states, weighs a fast risky grab against a slow safe one or asking
//! the human first, and learns action values by tabular Q-learning on
//! simulated experience.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use hestia::config::QLearningConfig;
//! use hestia::learning::QLearner;
//! use hestia::table::ActionValueTable;
//!
//! let config = QLearningConfig::default();
//! let mut learner = QLearner::from_config(config).unwrap();
//!
//! let mut table = ActionValueTable::load_or_fresh("q_table.json");
//! let history = learner.train(&mut table).unwrap();
//!
//! table.save("q_table.json").unwrap();
//! history.export_csv("rewards.csv").unwrap();
//! ```
//!
//! ## Module Organization
//!
//! - [`types`] - State, action and observation value types
//! - [`models`] - Transition, reward and observation models
//! - [`belief`] - Belief distributions and the Bayesian update
//! - [`policy`] - Epsilon-greedy and random policies
//! - [`table`] - Action-value table and its persistence
//! - [`agent`] - Agent composition and builder
//! - [`learning`] - Q-learning loop and non-learning rollouts
//! - [`metrics`] - Episode reward history
//! - [`config`] - Run configuration
//! - [`error`] - Error types and result handling

pub mod agent;
pub mod belief;
pub mod config;
pub mod error;
pub mod learning;
pub mod metrics;
pub mod models;
pub mod policy;
pub mod table;
pub mod types;
