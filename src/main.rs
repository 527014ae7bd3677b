use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use itertools::Itertools;
use mdp_vi::*;
use serde_json::json;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "mdp-vi")]
#[command(about = "Solve a tabular MDP with value iteration", version)]
struct Cli {
    /// JSON file describing the MDP
    mdp: PathBuf,

    /// Update discipline
    #[arg(short, long, value_enum, default_value_t = Strategy::Batch)]
    strategy: Strategy,

    /// Discount factor in (0, 1]
    #[arg(short, long, default_value_t = DEFAULT_DISCOUNT)]
    discount: f64,

    /// Iteration budget, defaults to the strategy's conventional budget
    #[arg(short, long)]
    iterations: Option<usize>,

    /// Residual threshold for prioritized sweeping
    #[arg(long, default_value_t = DEFAULT_THETA)]
    theta: f64,
}

#[derive(Clone, Copy, ValueEnum)]
enum Strategy {
    Batch,
    Cyclic,
    PrioritizedSweeping,
}

impl Cli {
    fn config(&self) -> SolverConfig {
        let strategy = match self.strategy {
            Strategy::Batch => UpdateStrategy::Batch,
            Strategy::Cyclic => UpdateStrategy::Cyclic,
            Strategy::PrioritizedSweeping => UpdateStrategy::PrioritizedSweeping { theta: self.theta },
        };
        let iterations = self
            .iterations
            .unwrap_or_else(|| strategy.default_iterations());

        SolverConfig::new(strategy, self.discount, iterations)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.config();

    let text = std::fs::read_to_string(&cli.mdp)
        .with_context(|| format!("reading {}", cli.mdp.display()))?;
    let mdp = Arc::new(
        TabularMdp::from_json(&text).with_context(|| format!("loading {}", cli.mdp.display()))?,
    );
    info!(states = mdp.len(), strategy = config.strategy.name(), "solving");

    let agent = ValueIterationAgent::new(Arc::clone(&mdp), config)?;
    let stats = agent.stats();
    let policy: MdpSolverPolicy<TabularMdp> = MdpSolverPolicy {
        mdp_solver: Arc::new(agent),
    };

    let rows = mdp
        .states()
        .into_iter()
        .map(|s| {
            json!({
                "state": s,
                "value": policy.mdp_solver.v_star(&s),
                "action": policy.policy(&s),
            })
        })
        .collect_vec();
    info!(
        "greedy policy: {}",
        mdp.states()
            .iter()
            .map(|s| format!("{s}={}", policy.policy(s).unwrap_or_else(|| "-".into())))
            .join(", ")
    );

    let report = json!({
        "config": config,
        "stats": stats,
        "states": rows,
    });
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
