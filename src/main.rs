//! Mastermind Solver - CLI
//!
//! Constraint-based Mastermind solver: interactive play, single-secret solving,
//! benchmarks and full sweeps over every secret.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use mastermind_solver::{
    commands::{
        analyze_sequence, print_test_all_statistics, run_benchmark, run_play, run_test_all,
        solve_secret,
    },
    core::{Sequence, random_secrets},
    game::{DEFAULT_MAX_MOVES, GameConfig, HumanScorer},
    output::{print_analysis_result, print_benchmark_result, print_solve_result},
    solver::DeductionOptions,
};
use std::num::NonZeroUsize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "mastermind_solver",
    about = "Mastermind solver using constraint propagation and deduction rules",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Maximum number of guesses per game
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_MOVES)]
    max_moves: usize,

    /// Enable the (unsound) colour-subset deduction rule
    #[arg(long, global = true)]
    experimental_subset_rule: bool,

    /// Disable the differential deduction rules
    #[arg(long, global = true)]
    no_deduction: bool,

    /// Stop enumerating candidates after this many (at least 1)
    #[arg(long, global = true)]
    search_limit: Option<NonZeroUsize>,

    /// Log more (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive mode: you hold the secret and score each guess (default)
    Play,

    /// Solve a specific secret
    Solve {
        /// The secret, e.g. 0123 or "blue green purple orange"
        secret: String,

        /// Show candidate counts for each move
        #[arg(short, long)]
        details: bool,

        /// Verify every derived constraint against the secret
        #[arg(short, long)]
        audit: bool,
    },

    /// Feedback histogram of a sequence over every secret
    Analyze {
        /// Sequence to analyze
        sequence: String,

        /// Also show how the score changes from SEQUENCE to this one
        #[arg(long)]
        against: Option<String>,
    },

    /// Benchmark solver performance on random secrets
    Benchmark {
        /// Number of random secrets to test
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,

        /// Seed for the secret generator
        #[arg(short, long, default_value = "42")]
        seed: u64,
    },

    /// Test solver on ALL possible secrets
    TestAll {
        /// Limit number of secrets to test
        #[arg(short, long)]
        limit: Option<usize>,

        /// Verify every derived constraint against each secret
        #[arg(short, long)]
        audit: bool,
    },
}

impl Cli {
    fn game_config(&self) -> GameConfig {
        GameConfig::default()
            .with_max_moves(self.max_moves)
            .with_deduction(DeductionOptions {
                differential_rules: !self.no_deduction,
                colour_subset_rule: self.experimental_subset_rule,
            })
            .with_search_limit(self.search_limit.map(NonZeroUsize::get))
    }
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();
}

fn parse_sequence(text: &str) -> Result<Sequence> {
    text.parse().with_context(|| format!("Invalid sequence '{text}'"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = cli.game_config();

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => {
            run_play(&config, &mut HumanScorer::stdio()).context("Interactive game failed")?;
        }
        Commands::Solve {
            secret,
            details,
            audit,
        } => {
            let secret = parse_sequence(&secret)?;
            let config = config.with_audit(audit.then_some(secret));
            let result = solve_secret(secret, &config)
                .with_context(|| format!("Failed to solve {secret}"))?;
            print_solve_result(&result, details);
        }
        Commands::Analyze { sequence, against } => {
            let sequence = parse_sequence(&sequence)?;
            let against = against.as_deref().map(parse_sequence).transpose()?;
            print_analysis_result(&analyze_sequence(sequence, against));
        }
        Commands::Benchmark { count, seed } => {
            println!("Running benchmark on {count} random secrets (seed {seed})...");
            let secrets = random_secrets(seed, count);
            let result = run_benchmark(&secrets, &config).context("Benchmark failed")?;
            print_benchmark_result(&result);
        }
        Commands::TestAll { limit, audit } => {
            println!("\n{}", "═".repeat(70));
            println!(" Comprehensive Mastermind Solver Test ");
            println!("{}", "═".repeat(70));
            if audit {
                println!("Auditing every constraint against its secret");
            }
            println!();

            let stats = run_test_all(&config, limit, audit).context("Test run failed")?;
            print_test_all_statistics(&stats);
        }
    }

    Ok(())
}
