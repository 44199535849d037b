//! Display functions for game rounds and command results

use super::formatters::{entropy_bar, ordinal_suffix};
use crate::commands::{AnalysisResult, BenchmarkResult, OpeningRanking};
use crate::game::{GameRecord, GameStatus, Round};
use colored::Colorize;

/// Print the intro for assist mode
pub fn print_assist_intro() {
    println!("\n{}\n", "This is the wordler solver.".bright_cyan().bold());
    println!("On each round, I will suggest a word to use.");
    println!("Enter this word into the game, and tell me what");
    println!("the game responds with.\n");
    println!("Your response should be a 5-digit number according to");
    println!("the following key:\n");
    println!("  0 = black (letter is not in solution)");
    println!("  1 = yellow (letter in the wrong place)");
    println!("  2 = green (letter in the correct place)\n");
    println!("If the word I suggest is not in the app's wordbank,");
    println!("say \"xxxxx\".\n");
}

/// Print the intro for human play mode
pub fn print_human_intro() {
    println!("\n{}\n", "This is a wordle clone.".bright_cyan().bold());
    println!("On each round, you will guess a 5-letter word.");
    println!("I will tell you how close you are to the solution using the following hints:\n");
    println!("  ⬛ - The letter is not in the solution");
    println!("  🟨 - The letter is in the solution but not in that position");
    println!("  🟩 - The letter is in the solution at that position\n");
}

/// Print one completed turn
pub fn print_round(round: &Round) {
    println!(
        "Round {}: {} - H = {} -- {}",
        round.turn,
        round.guess.text().bright_yellow().bold(),
        format!("{:.4}", round.entropy).cyan(),
        round.pattern
    );
    log::info!(
        "round {}: {} -> {} candidates",
        round.turn,
        round.pool_before,
        round.pool_after
    );
}

/// Print the end-of-game message
pub fn print_outcome(record: &GameRecord) {
    match record.status {
        GameStatus::Won(turn) => {
            let message = format!("Got it on the {turn}{} try!", ordinal_suffix(turn));
            println!("{}", message.green().bold());
        }
        GameStatus::Lost | GameStatus::InProgress(_) => match &record.secret {
            Some(secret) => {
                let message = format!("Did not get the word ({secret})");
                println!("{}", message.red().bold());
            }
            None => println!(
                "{}",
                "Wait what was the word? So frustrating...".red().bold()
            ),
        },
    }
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "ENTROPY ANALYSIS:".bright_cyan().bold(),
        result.word.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let max_entropy = (result.pool_size as f64).log2().max(1.0);
    let bar = entropy_bar(result.metrics.entropy, max_entropy, 30);

    println!("\n📊 Against {} weighted candidates:", result.pool_size);
    println!(
        "   Entropy:     [{}] {}",
        bar.green(),
        format!("{:.4} bits", result.metrics.entropy).bright_yellow()
    );
    println!(
        "   Expected:    {:.1} candidates remain",
        result.metrics.expected_remaining
    );
    println!(
        "   Worst case:  {} candidates remain",
        result.metrics.max_partition
    );
    println!("   Responses:   {} distinct", result.metrics.partitions);
    match result.rank {
        Some(rank) => println!("   Rank:        {rank} of {}", result.pool_size),
        None => println!("   Rank:        {}", "not a bank word".bright_black()),
    }
    if let Some(weight) = result.weight {
        println!("   Prior:       {weight:.4}");
    }
}

/// Print the best opening guesses
pub fn print_openings(ranking: &OpeningRanking) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BEST OPENING GUESSES".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!("\nScored against all {} bank words:\n", ranking.pool_size);

    let max_entropy = ranking.top.first().map_or(1.0, |(_, e)| e.max(f64::EPSILON));
    for (i, (word, entropy)) in ranking.top.iter().enumerate() {
        let bar = entropy_bar(*entropy, max_entropy, 30);
        println!(
            "  {:>3}. {}  [{}] {:.4} bits",
            i + 1,
            word.text().to_uppercase().bright_yellow(),
            bar.green(),
            entropy
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", result.total_games);
    println!(
        "   Win rate:         {}",
        format!("{:.1}%", result.win_rate() * 100.0)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Average guesses:  {}",
        format!("{:.3}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Losses:           {}",
        format!("{}", result.losses).yellow()
    );
    if !result.failures.is_empty() {
        println!(
            "   Failures:         {}",
            format!("{}", result.failures.len()).red()
        );
    }
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (&turns, &count) in &result.distribution {
        let pct = (count as f64 / result.total_games as f64) * 100.0;
        let bar_width = (pct / 2.5) as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░"
                .repeat(40_usize.saturating_sub(bar_width))
                .bright_black()
        );
        println!("   {turns}: {bar} {count:4} ({pct:5.1}%)");
    }

    for (secret, err) in &result.failures {
        println!("   {} {secret}: {err}", "✗".red());
    }
}
