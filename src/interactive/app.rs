//! TUI application state and logic

use crate::commands::remaining_words;
use crate::core::{Alert, GameSession, ValidationResult};
use crate::dictionary::WordListDictionary;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a> {
    pub session: GameSession<WordListDictionary>,
    pub root_words: &'a [String],
    pub rng: StdRng,
    pub input_buffer: String,
    pub alert: Option<Alert>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
    /// Playable words for the current root, found or not
    pub total_words: usize,
    pub remaining: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Typing,
    Alert,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub games_played: usize,
    pub words_found: usize,
    pub mistakes: usize,
    pub best_score: i64,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(
        session: GameSession<WordListDictionary>,
        root_words: &'a [String],
        rng: StdRng,
    ) -> Self {
        let mut app = Self {
            session,
            root_words,
            rng,
            input_buffer: String::new(),
            alert: None,
            messages: Vec::new(),
            stats: Statistics {
                games_played: 1,
                ..Statistics::default()
            },
            should_quit: false,
            input_mode: InputMode::Typing,
            total_words: 0,
            remaining: 0,
        };
        app.add_message(
            "Welcome! Build words from the letters of the root word.",
            MessageStyle::Info,
        );
        app.refresh_counts();
        app
    }

    fn refresh_counts(&mut self) {
        self.remaining = remaining_words(&self.session).len();
        self.total_words = self.remaining + self.session.used_words().len();
    }

    /// Submit whatever is in the input buffer
    pub fn submit_word(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);
        let result = self.session.submit(&input);

        match result {
            ValidationResult::Accepted(word) => {
                self.stats.words_found += 1;
                self.remaining = self.remaining.saturating_sub(1);
                self.add_message(
                    &format!("{} +{}", word.to_uppercase(), crate::core::points(&word)),
                    MessageStyle::Success,
                );
                if self.remaining == 0 {
                    self.add_message(
                        "You found every word! Ctrl-R for a new root word.",
                        MessageStyle::Success,
                    );
                }
            }
            ValidationResult::Rejected { reason, penalty } => {
                self.stats.mistakes += 1;
                self.add_message(
                    &format!("{} -{penalty}", reason.title()),
                    MessageStyle::Error,
                );
                self.alert = Some(reason.alert(self.session.root_word()));
                self.input_mode = InputMode::Alert;
            }
        }

        self.stats.best_score = self.stats.best_score.max(self.session.score());
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
        self.input_mode = InputMode::Typing;
    }

    pub fn new_game(&mut self) {
        self.session.restart(self.root_words, &mut self.rng);
        self.input_buffer.clear();
        self.dismiss_alert();
        self.messages.clear();
        self.stats.games_played += 1;
        self.add_message(
            &format!(
                "New game started! Root word: {}",
                self.session.root_word().to_uppercase()
            ),
            MessageStyle::Info,
        );
        self.refresh_counts();
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::Alert => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                    self.dismiss_alert();
                }
            }
            InputMode::Typing => match key.code {
                KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.new_game();
                }
                KeyCode::Esc => {
                    self.should_quit = true;
                }
                KeyCode::Char(c) => {
                    self.input_buffer.push(c);
                }
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => {
                    self.submit_word();
                }
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(%err, "tui exited with an error");
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    tracing::info!(
        games = app.stats.games_played,
        words = app.stats.words_found,
        best_score = app.stats.best_score,
        "session finished"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn app(root_words: &[String]) -> App<'_> {
        let session = GameSession::new(
            "silkworm",
            WordListDictionary::new("en", ["silk", "worm", "milk", "ball"]),
        );
        App::new(session, root_words, StdRng::seed_from_u64(9))
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_word(app: &mut App, word: &str) {
        for c in word.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter);
    }

    #[test]
    fn counts_playable_words() {
        let roots = vec!["balloons".to_string()];
        let app = app(&roots);
        assert_eq!(app.total_words, 3);
        assert_eq!(app.remaining, 3);
    }

    #[test]
    fn typing_and_submitting_a_word() {
        let roots = vec!["balloons".to_string()];
        let mut app = app(&roots);

        type_word(&mut app, "silk");

        assert_eq!(app.session.used_words(), ["silk"]);
        assert_eq!(app.session.score(), 4);
        assert!(app.input_buffer.is_empty());
        assert_eq!(app.remaining, 2);
        assert_eq!(app.input_mode, InputMode::Typing);
    }

    #[test]
    fn rejection_opens_alert_until_dismissed() {
        let roots = vec!["balloons".to_string()];
        let mut app = app(&roots);

        type_word(&mut app, "xy");
        assert_eq!(app.input_mode, InputMode::Alert);
        let alert = app.alert.clone().unwrap();
        assert_eq!(alert.title, "Word is too short");
        assert_eq!(app.session.score(), -2);

        // Typing is ignored while the alert is up
        press(&mut app, KeyCode::Char('a'));
        assert!(app.input_buffer.is_empty());

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.input_mode, InputMode::Typing);
        assert!(app.alert.is_none());
    }

    #[test]
    fn backspace_edits_buffer() {
        let roots = vec!["balloons".to_string()];
        let mut app = app(&roots);

        press(&mut app, KeyCode::Char('s'));
        press(&mut app, KeyCode::Char('x'));
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.input_buffer, "s");
    }

    #[test]
    fn ctrl_r_restarts() {
        let roots = vec!["balloons".to_string()];
        let mut app = app(&roots);
        type_word(&mut app, "silk");
        press(&mut app, KeyCode::Char('w'));

        app.handle_key(KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL));

        assert_eq!(app.session.root_word(), "balloons");
        assert_eq!(app.session.score(), 0);
        assert!(app.session.used_words().is_empty());
        assert!(app.input_buffer.is_empty());
        assert_eq!(app.stats.games_played, 2);
        assert_eq!(app.total_words, 1);
    }

    #[test]
    fn quit_keys() {
        let roots = vec!["balloons".to_string()];
        let mut app = app(&roots);
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);

        let mut app2 = self::app(&roots);
        app2.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app2.should_quit);
    }

    #[test]
    fn best_score_and_message_history() {
        let roots = vec!["balloons".to_string()];
        let mut app = app(&roots);

        type_word(&mut app, "silk");
        type_word(&mut app, "worm");
        type_word(&mut app, "zebra");
        press(&mut app, KeyCode::Esc); // dismiss alert, does not quit

        assert!(!app.should_quit);
        assert_eq!(app.stats.best_score, 8);
        assert_eq!(app.stats.mistakes, 1);
        assert_eq!(app.stats.words_found, 2);
        assert!(app.messages.len() <= 5);
    }
}
