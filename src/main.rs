use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Local;
use clap::{Args, Parser, Subcommand, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;

use hestia::agent::AgentBuilder;
use hestia::belief::BeliefState;
use hestia::config::QLearningConfig;
use hestia::learning::{simulate, QLearner, RolloutMode};
use hestia::models::RewardVariant;
use hestia::policy::RandomPolicy;
use hestia::table::ActionValueTable;

/// Learn when to grab, wait, or ask in a burning room.
#[derive(Parser)]
#[command(name = "hestia", about = "Burning-room POMDP with tabular Q-learning")]
struct Cli {
    /// Log every step
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run Q-learning and persist the table
    Train(TrainArgs),
    /// Print a random-policy rollout
    Simulate(SimulateArgs),
}

#[derive(Args)]
struct TrainArgs {
    /// Path to JSON configuration file
    #[arg(long, default_value = "hestia.json")]
    config: PathBuf,

    /// Action-value table to resume from and save to (.bin for bincode)
    #[arg(long, default_value = "q_table.json")]
    table: PathBuf,

    /// Discard any saved table before training
    #[arg(long)]
    reset: bool,

    /// Write per-episode rewards as CSV
    #[arg(long)]
    history: Option<PathBuf>,

    /// Override number of episodes
    #[arg(long)]
    episodes: Option<usize>,

    /// Override steps per episode
    #[arg(long)]
    steps: Option<usize>,

    /// Override learning rate
    #[arg(long)]
    alpha: Option<f64>,

    /// Override discount factor
    #[arg(long)]
    gamma: Option<f64>,

    /// Override exploration rate
    #[arg(long)]
    epsilon: Option<f64>,

    /// Override reward shaping
    #[arg(long, value_enum)]
    variant: Option<VariantArg>,

    /// Seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Args)]
struct SimulateArgs {
    /// Number of steps
    #[arg(long, default_value_t = 5)]
    steps: usize,

    /// Keep one true state and filter the belief from observations
    #[arg(long)]
    track: bool,

    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Clone, Copy, ValueEnum)]
enum VariantArg {
    Simple,
    Refined,
}

impl From<VariantArg> for RewardVariant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::Simple => RewardVariant::Simple,
            VariantArg::Refined => RewardVariant::Refined,
        }
    }
}

fn setup_logging(verbose: bool) -> Result<(), fern::InitError> {
    let log_level = if verbose || cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}[{}] {}",
                Local::now().format("[%Y-%m-%d %H:%M:%S%.3f]"),
                record.level(),
                message
            ))
        })
        .level(log_level)
        .chain(std::io::stdout())
        .apply()?;
    Ok(())
}

fn train(args: TrainArgs) -> Result<()> {
    let mut config = QLearningConfig::load_or_default(&args.config)
        .with_context(|| format!("loading config from {}", args.config.display()))?;

    // Apply CLI overrides
    if let Some(episodes) = args.episodes {
        config.num_episodes = episodes;
    }
    if let Some(steps) = args.steps {
        config.steps_per_episode = steps;
    }
    if let Some(alpha) = args.alpha {
        config.alpha = alpha;
    }
    if let Some(gamma) = args.gamma {
        config.gamma = gamma;
    }
    if let Some(epsilon) = args.epsilon {
        config.epsilon = epsilon;
    }
    if let Some(variant) = args.variant {
        config.reward_variant = variant.into();
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    if args.reset {
        ActionValueTable::discard_saved(&args.table)
            .with_context(|| format!("removing {}", args.table.display()))?;
    }

    let mut learner = QLearner::from_config(config).context("building learner")?;

    log::info!("Initial belief:");
    for (state, probability) in learner.agent().belief().enumerate() {
        log::info!("  [{}] {}", state, probability);
    }

    let mut table = ActionValueTable::load_or_fresh(&args.table);
    let history = learner.train(&mut table).context("training")?;

    table
        .save(&args.table)
        .with_context(|| format!("saving table to {}", args.table.display()))?;

    if let Some(path) = &args.history {
        history
            .export_csv(path)
            .with_context(|| format!("writing reward history to {}", path.display()))?;
    }

    log::info!("Greedy policy:");
    for (state, action) in table.greedy_policy() {
        log::info!("  [{}] -> {}", state, action);
    }

    Ok(())
}

fn simulate_rollout(args: SimulateArgs) -> Result<()> {
    let mut agent = AgentBuilder::new().build().context("building agent")?;
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mode = if args.track {
        RolloutMode::Tracked
    } else {
        RolloutMode::Resample
    };

    let table = ActionValueTable::new();
    let records = simulate(&mut agent, &RandomPolicy, &table, args.steps, mode, &mut rng)?;

    for (i, record) in records.iter().enumerate() {
        println!("Step {} - Action: {}", i + 1, record.action);
        if mode == RolloutMode::Tracked {
            println!("Believed State: {}", record.believed_state);
        }
        println!("Next State: {}", record.next_state);
        println!("Reward: {}", record.reward);
        println!("Observation: {}", record.observation);
        println!("{}", "-".repeat(30));
    }

    if mode == RolloutMode::Tracked {
        println!("Final belief (entropy {:.3}):", agent.belief().entropy());
        for (state, probability) in agent.belief().enumerate() {
            println!("State: {}, Probability: {:.4}", state, probability);
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose).context("setting up logging")?;

    match cli.command {
        Command::Train(args) => train(args),
        Command::Simulate(args) => simulate_rollout(args),
    }
}
