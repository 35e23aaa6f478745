//! Display functions for command results

use super::formatters::{create_progress_bar, format_score, length_badge};
use crate::commands::{CheckResult, HintResult, SurveyResult};
use crate::core::ValidationResult;
use colored::Colorize;

/// Print the outcome of a batch check
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Root word: {}",
        result.root_word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        let outcome = match &step.result {
            ValidationResult::Accepted(word) => {
                format!("✅ accepted {word}").green().to_string()
            }
            ValidationResult::Rejected { reason, .. } => {
                format!("❌ {}", reason.title()).red().to_string()
            }
        };
        println!(
            "{:>3}. {:<16} {outcome:<40} {:>4} → {}",
            i + 1,
            format!("{:?}", step.input),
            format_score(step.result.score_delta()),
            format_score(step.score)
        );
    }

    println!();
    println!(
        "{}",
        format!(
            "Final score {} ({} accepted, {} rejected)",
            format_score(result.final_score),
            result.accepted(),
            result.rejected()
        )
        .bold()
    );
}

/// Print every playable word for a root word
pub fn print_hints(result: &HintResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "WORDS IN".bright_cyan().bold(),
        result.root_word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    if result.is_empty() {
        println!("\nNo playable words found.");
        return;
    }

    println!(
        "\n📊 {} words, worth {} points in total\n",
        result.len(),
        result.max_score.to_string().bright_yellow()
    );

    for word in &result.words {
        println!("   {} {word}", length_badge(word).bright_black());
    }
}

/// Print root-word survey statistics
pub fn print_survey(result: &SurveyResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "ROOT WORD SURVEY".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Overview:".bright_cyan().bold());
    println!("   Root words:       {}", result.entries.len());
    println!(
        "   Average words:    {}",
        format!("{:.1}", result.average_playable())
            .bright_yellow()
            .bold()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    let Some(richest) = result.richest() else {
        return;
    };
    let best = richest.max_score as f64;

    println!("\n📈 {}", "Max score per root word:".bright_cyan().bold());
    for entry in &result.entries {
        let bar = create_progress_bar(entry.max_score as f64, best, 30);
        println!(
            "   {:<10} {} {:>4} pts {:>3} words  {}",
            entry.root_word,
            bar.green(),
            entry.max_score,
            entry.playable,
            entry.longest.as_deref().unwrap_or("-").bright_black()
        );
    }
}
