//! Simple interactive CLI mode
//!
//! Line-based game without the TUI: one word per line, plus a few commands.

use super::hints::remaining_words;
use crate::core::{GameSession, ValidationResult};
use crate::dictionary::WordListDictionary;
use crate::output::formatters::{format_score, length_badge};
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or writing output.
pub fn run_simple<R: Rng + ?Sized>(
    session: &mut GameSession<WordListDictionary>,
    root_words: &[String],
    rng: &mut R,
) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    play_lines(session, root_words, rng, stdin.lock(), &mut stdout)
}

/// Game loop over arbitrary input and output streams
///
/// Ends on `:quit` or end of input.
///
/// # Errors
///
/// Returns an error if reading a line or writing a response fails.
pub fn play_lines<R, I, W>(
    session: &mut GameSession<WordListDictionary>,
    root_words: &[String],
    rng: &mut R,
    input: I,
    output: &mut W,
) -> io::Result<()>
where
    R: Rng + ?Sized,
    I: BufRead,
    W: Write,
{
    print_banner(output)?;
    print_root(session, output)?;

    for line in input.lines() {
        let line = line?;

        match line.trim() {
            ":quit" | ":q" | ":exit" => {
                writeln!(output, "\n👋 Final score: {}\n", format_score(session.score()))?;
                return Ok(());
            }
            ":new" | ":n" | ":restart" => {
                session.restart(root_words, rng);
                writeln!(output, "\n🔄 New game started!")?;
                print_root(session, output)?;
            }
            ":hint" | ":h" => {
                let remaining = remaining_words(session);
                writeln!(
                    output,
                    "💡 {} words left to find, worth {} points",
                    remaining.len(),
                    remaining.max_score
                )?;
                if let Some(longest) = remaining.words.first() {
                    let shown: String = longest.chars().take(2).collect();
                    writeln!(
                        output,
                        "   The longest has {} letters and starts with '{shown}'",
                        longest.chars().count()
                    )?;
                }
            }
            ":words" | ":w" => {
                if session.used_words().is_empty() {
                    writeln!(output, "No words yet!")?;
                }
                for word in session.used_words() {
                    writeln!(output, "  {} {word}", length_badge(word))?;
                }
            }
            _ => {
                let result = session.submit(&line);
                print_result(session, &result, output)?;
            }
        }

        output.flush()?;
    }

    Ok(())
}

fn print_banner<W: Write>(output: &mut W) -> io::Result<()> {
    writeln!(output, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(output, "║                 Word Scramble - Simple Mode                  ║")?;
    writeln!(output, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(output, "Make as many words as you can from the root word's letters.")?;
    writeln!(output, "Each word scores its length; each mistake costs its length.\n")?;
    writeln!(output, "Commands: ':hint', ':words', ':new' for a new root word, ':quit' to exit\n")
}

fn print_root<W: Write>(
    session: &GameSession<WordListDictionary>,
    output: &mut W,
) -> io::Result<()> {
    writeln!(output, "────────────────────────────────────────────────────────────")?;
    writeln!(
        output,
        "Root word: {}",
        session.root_word().to_uppercase().bright_yellow().bold()
    )?;
    writeln!(output, "────────────────────────────────────────────────────────────")
}

fn print_result<W: Write>(
    session: &GameSession<WordListDictionary>,
    result: &ValidationResult,
    output: &mut W,
) -> io::Result<()> {
    match result {
        ValidationResult::Accepted(word) => writeln!(
            output,
            "✅ {} {}  Score: {}",
            word.green().bold(),
            format!("+{}", result.score_delta()).green(),
            format_score(session.score())
        ),
        ValidationResult::Rejected { reason, penalty } => {
            let alert = reason.alert(session.root_word());
            writeln!(
                output,
                "❌ {} {}  Score: {}",
                alert.title.red().bold(),
                format!("-{penalty}").red(),
                format_score(session.score())
            )?;
            writeln!(output, "   {}", alert.message)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn session() -> GameSession<WordListDictionary> {
        GameSession::new(
            "silkworm",
            WordListDictionary::new("en", ["silk", "worm", "milk", "ball"]),
        )
    }

    fn play(session: &mut GameSession<WordListDictionary>, script: &str) -> String {
        let roots = vec!["balloons".to_string()];
        let mut rng = StdRng::seed_from_u64(5);
        let mut output = Vec::new();
        play_lines(session, &roots, &mut rng, script.as_bytes(), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn submits_each_line() {
        let mut game = session();
        play(&mut game, "silk\nxy\nWORM\n");

        assert_eq!(game.used_words(), ["worm", "silk"]);
        assert_eq!(game.score(), 4 - 2 + 4);
    }

    #[test]
    fn quit_stops_reading() {
        let mut game = session();
        let output = play(&mut game, "silk\n:quit\nworm\n");

        assert_eq!(game.used_words(), ["silk"]);
        assert!(output.contains("Final score"));
    }

    #[test]
    fn new_game_restarts_with_fresh_root() {
        let mut game = session();
        let output = play(&mut game, "silk\n:new\nball\n");

        assert_eq!(game.root_word(), "balloons");
        assert_eq!(game.used_words(), ["ball"]);
        assert_eq!(game.score(), 4);
        assert!(output.contains("New game started"));
    }

    #[test]
    fn hint_and_words_do_not_score() {
        let mut game = session();
        let output = play(&mut game, ":hint\n:words\nmilk\n:words\n");

        assert_eq!(game.score(), 4);
        assert!(output.contains("3 words left to find"));
        assert!(output.contains("No words yet!"));
        assert!(output.contains("milk"));
    }

    #[test]
    fn rejection_prints_alert_message() {
        let mut game = session();
        let output = play(&mut game, "zebra\n");

        assert!(output.contains("You need to use letters only from 'silkworm'!"));
        assert_eq!(game.score(), -5);
    }
}
