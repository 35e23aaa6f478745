//! TUI rendering with ratatui
//!
//! Layout for the word scramble interface.

use super::app::{App, InputMode, MessageStyle};
use crate::output::formatters::format_score;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Found words
            Constraint::Percentage(45), // Progress and messages
        ])
        .split(chunks[1]);

    render_used_words(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);

    if let Some(alert) = &app.alert {
        render_alert(f, alert.title, &alert.message);
    }
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            app.session.root_word().to_uppercase(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("    "),
        Span::styled(
            format!("Score: {}", format_score(app.session.score())),
            Style::default().fg(score_color(app.session.score())),
        ),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .title(" 🔤 WORD SCRAMBLE ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(header, area);
}

const fn score_color(score: i64) -> Color {
    if score < 0 { Color::Red } else { Color::Green }
}

fn render_used_words(f: &mut Frame, app: &App, area: Rect) {
    let used = app.session.used_words();

    let items: Vec<ListItem> = if used.is_empty() {
        vec![
            ListItem::new("No words yet. Start typing!")
                .style(Style::default().fg(Color::DarkGray)),
        ]
    } else {
        used.iter()
            .map(|word| {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("({:>2}) ", word.chars().count()),
                        Style::default().fg(Color::Cyan),
                    ),
                    Span::raw(word.clone()),
                ]))
            })
            .collect()
    };

    let list = List::new(items).block(
        Block::default()
            .title(format!(" Found Words ({}) ", used.len()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(list, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Progress gauge
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_progress(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_progress(f: &mut Frame, app: &App, area: Rect) {
    let found = app.total_words.saturating_sub(app.remaining);
    let percent = if app.total_words == 0 {
        0
    } else {
        (found * 100 / app.total_words) as u16
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Progress ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent.min(100))
        .label(format!("{found}/{} words found", app.total_words));

    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, color) = match app.input_mode {
        InputMode::Typing => (" Enter your word | Enter to submit ", Color::Yellow),
        InputMode::Alert => (" Press Enter to continue ", Color::DarkGray),
    };

    let input = Paragraph::new(app.input_buffer.as_str())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(33),
            Constraint::Percentage(34),
        ])
        .split(area);

    let games = Paragraph::new(format!(
        "Games: {} | Best: {}",
        app.stats.games_played,
        format_score(app.stats.best_score)
    ))
    .alignment(Alignment::Center);
    f.render_widget(games, chunks[0]);

    let words = Paragraph::new(format!(
        "Found: {} | Mistakes: {}",
        app.stats.words_found, app.stats.mistakes
    ))
    .alignment(Alignment::Center);
    f.render_widget(words, chunks[1]);

    let help = Paragraph::new("Esc: Quit | Ctrl-R: Restart | Enter: Submit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

fn render_alert(f: &mut Frame, title: &str, message: &str) {
    let area = centered_rect(50, 7, f.area());

    let content = vec![
        Line::from(""),
        Line::from(message.to_string()),
        Line::from(""),
        Line::from(Span::styled(
            "[ Ok ]",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    let popup = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(format!(" {title} "))
                .title_alignment(Alignment::Center)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Red)),
        );

    f.render_widget(Clear, area);
    f.render_widget(popup, area);
}

/// Rectangle `percent_x` wide and `height` rows tall, centered in `area`
fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameSession;
    use crate::dictionary::WordListDictionary;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::{Terminal, backend::TestBackend};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn renders_root_word_and_score() {
        let roots = vec!["silkworm".to_string()];
        let session = GameSession::new("silkworm", WordListDictionary::new("en", ["silk"]));
        let mut app = App::new(session, &roots, StdRng::seed_from_u64(1));
        app.input_buffer = "silk".to_string();
        app.submit_word();

        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("SILKWORM"));
        assert!(text.contains("Score: +4"));
        assert!(text.contains("silk"));
    }

    #[test]
    fn renders_alert_popup() {
        let roots = vec!["silkworm".to_string()];
        let session = GameSession::new("silkworm", WordListDictionary::new("en", ["silk"]));
        let mut app = App::new(session, &roots, StdRng::seed_from_u64(1));
        app.input_buffer = "xy".to_string();
        app.submit_word();

        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();

        assert!(buffer_text(&terminal).contains("Word is too short"));
    }

    #[test]
    fn centered_rect_is_inside_area() {
        let area = Rect::new(0, 0, 80, 24);
        let popup = centered_rect(50, 7, area);
        assert_eq!(popup.height, 7);
        assert!(popup.x >= 20 && popup.right() <= 60);
        assert!((8..=9).contains(&popup.y));
    }
}
