use clap::Parser;

use connect4_mc::DEFAULT_TRIALS;

/// Play Connect 4 against a Monte Carlo agent
#[derive(Parser)]
pub struct Args {
    /// Number of random playouts per AI move
    #[clap(short, long, default_value_t = DEFAULT_TRIALS)]
    pub trials: usize,
    /// Seed for the AI's random playouts
    #[clap(short, long)]
    pub seed: Option<u64>,
    /// Run playouts on all cores
    #[clap(short, long)]
    pub parallel: bool,
    /// Let the AI play first
    #[clap(short, long)]
    pub ai_first: bool,
    /// Let the AI play both sides
    #[clap(long)]
    pub ai_vs_ai: bool,
    /// Write logs to this file instead of stderr
    #[clap(short, long)]
    pub log_file: Option<String>,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[clap(short, long, parse(from_occurrences))]
    pub verbose: usize,
}
