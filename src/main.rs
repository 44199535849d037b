//! Wordler - CLI
//!
//! Entropy-driven Wordle solver: assist a human playing the real game, let the
//! solver play itself, or play a Wordle clone against a random secret.

use anyhow::{Context, Result, anyhow};
use clap::{ArgAction, Parser, Subcommand};
use std::path::{Path, PathBuf};
use wordler::{
    bank::{Prior, loader},
    commands::{
        analyze_word, autoplay_observed, benchmark_secrets, rank_openings, random_secret,
        run_assist, run_benchmark, run_human,
    },
    config::{DEFAULT_OPENING, GameConfig, PriorParams},
    core::Word,
    output::{
        print_analysis_result, print_benchmark_result, print_openings, print_outcome, print_round,
    },
};

#[derive(Parser)]
#[command(
    name = "wordler",
    about = "Wordle solver that picks each guess by expected information",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word bank file: "word frequency" lines, or JSON {"words": {...}}
    #[arg(short, long, global = true)]
    bank: Option<PathBuf>,

    /// First guess of every game
    #[arg(short, long, global = true, default_value = DEFAULT_OPENING)]
    opening: String,

    /// Seed for tie-breaks and secret selection
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Log more (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Suggest guesses for a game played elsewhere (default)
    Assist,

    /// Let the solver play against a secret word
    Auto {
        /// The secret word (default: random bank word)
        word: Option<String>,

        /// Play even if the secret is not in the bank
        #[arg(long)]
        allow_unknown: bool,
    },

    /// Play a Wordle clone against a random secret
    Human,

    /// Benchmark solver performance on random secrets
    Benchmark {
        /// Number of games to play
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,
    },

    /// Analyze the entropy of a specific opening word
    Analyze {
        /// Word to analyze
        word: String,
    },

    /// Rank every bank word as an opening guess
    Opening {
        /// Number of openings to show
        #[arg(short = 'k', long, default_value = "10")]
        top: usize,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

/// Load the word bank from `path`, or the embedded bank
fn load_prior(path: Option<&Path>) -> Result<Prior> {
    let freqs = match path {
        Some(path) => loader::load_from_file(path)
            .with_context(|| format!("failed to load word bank {}", path.display()))?,
        None => loader::embedded().context("embedded word bank is invalid")?,
    };
    let prior = Prior::from_frequencies(freqs, PriorParams::default())?;
    log::info!("word bank holds {} words", prior.len());
    Ok(prior)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let prior = load_prior(cli.bank.as_deref())?;

    let opening = Word::new(&cli.opening)
        .with_context(|| format!("invalid opening word '{}'", cli.opening))?;
    if !prior.contains(&opening) {
        log::warn!("opening {opening} is not in the word bank");
    }
    let mut config = GameConfig::default().with_opening(opening);
    config.seed = cli.seed;

    match cli.command.unwrap_or(Commands::Assist) {
        Commands::Assist => {
            run_assist(&prior, config)?;
        }
        Commands::Auto {
            word,
            allow_unknown,
        } => run_auto_command(&prior, config, word.as_deref(), allow_unknown)?,
        Commands::Human => {
            let secret = pick_secret(&prior, cli.seed)?;
            run_human(&prior, config, secret)?;
        }
        Commands::Benchmark { count } => {
            println!("Running benchmark on {count} random words...");
            let secrets = benchmark_secrets(&prior, count, cli.seed);
            let result = run_benchmark(&prior, &config, &secrets);
            print_benchmark_result(&result);
        }
        Commands::Analyze { word } => {
            let word = Word::new(&word).with_context(|| format!("invalid word '{word}'"))?;
            print_analysis_result(&analyze_word(&prior, &word));
        }
        Commands::Opening { top } => print_openings(&rank_openings(&prior, top)),
    }

    Ok(())
}

fn run_auto_command(
    prior: &Prior,
    config: GameConfig,
    word: Option<&str>,
    allow_unknown: bool,
) -> Result<()> {
    let secret = match word {
        Some(text) => Word::new(text).with_context(|| format!("invalid secret '{text}'"))?,
        None => pick_secret(prior, config.seed)?,
    };

    let record = autoplay_observed(prior, config, &secret, allow_unknown, print_round)?;
    print_outcome(&record);
    Ok(())
}

fn pick_secret(prior: &Prior, seed: Option<u64>) -> Result<Word> {
    random_secret(prior, seed).ok_or_else(|| anyhow!("word bank is empty"))
}
