//! TUI rendering with ratatui
//!
//! Single-screen layout: root word on top, entry box and remaining letters,
//! the list of found words, messages and a status bar. Rejections are shown
//! as a popup over everything else.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{RejectionReason, letter_count};
use crate::game::RoundState;
use crate::oracle::SpellingOracle;
use crate::output::formatters::{create_progress_bar, describe_word, letter_badge, remaining_letters};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui<O: SpellingOracle>(f: &mut Frame, app: &App<O>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Root word
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Entry and found words
            Constraint::Percentage(40), // Messages
        ])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_messages(f, app, main_chunks[1]);
    render_status(f, app, chunks[2]);

    if let InputMode::Alert(reason) = app.input_mode {
        render_alert(f, reason);
    }
}

fn render_header<O: SpellingOracle>(f: &mut Frame, app: &App<O>, area: Rect) {
    let root = app.round().map_or_else(String::new, |round| {
        round
            .root_word()
            .to_uppercase()
            .chars()
            .map(String::from)
            .collect::<Vec<_>>()
            .join(" ")
    });

    let header = Paragraph::new(root)
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
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

fn render_main_panel<O: SpellingOracle>(f: &mut Frame, app: &App<O>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Entry box
            Constraint::Length(3), // Remaining letters
            Constraint::Min(3),    // Found words
        ])
        .split(area);

    render_input(f, app, chunks[0]);
    render_letters(f, app, chunks[1]);
    render_used_words(f, app, chunks[2]);
}

fn render_input<O: SpellingOracle>(f: &mut Frame, app: &App<O>, area: Rect) {
    let color = match app.input_mode {
        InputMode::Typing => Color::Yellow,
        InputMode::Alert(_) => Color::DarkGray,
    };

    let input = Paragraph::new(app.input_buffer.as_str())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(" Enter your word ")
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );
    f.render_widget(input, area);
}

fn render_letters<O: SpellingOracle>(f: &mut Frame, app: &App<O>, area: Rect) {
    let letters = app.round().map_or_else(String::new, |round| {
        remaining_letters(round.root_word(), &app.input_buffer)
            .chars()
            .map(String::from)
            .collect::<Vec<_>>()
            .join(" ")
    });

    let paragraph = Paragraph::new(letters)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::White))
        .block(
            Block::default()
                .title(" Letters left ")
                .borders(Borders::ALL),
        );
    f.render_widget(paragraph, area);
}

fn render_used_words<O: SpellingOracle>(f: &mut Frame, app: &App<O>, area: Rect) {
    let Some(round) = app.round() else {
        return;
    };
    let root_len = letter_count(round.root_word());

    let items: Vec<ListItem> = round
        .used_words()
        .iter()
        .map(|word| {
            let len = letter_count(word);
            let bar = create_progress_bar(len as f64, root_len as f64, root_len.min(12));
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{} ", letter_badge(len)),
                    Style::default().fg(Color::Cyan),
                ),
                Span::styled(
                    format!("{word:<12}"),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(bar, Style::default().fg(Color::Green)),
            ]))
        })
        .collect();

    let title = format!(" Words found: {} ", round.used_words().len());
    let list = List::new(items).block(Block::default().title(title).borders(Borders::ALL));
    f.render_widget(list, area);
}

fn render_messages<O: SpellingOracle>(f: &mut Frame, app: &App<O>, area: Rect) {
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

fn render_status<O: SpellingOracle>(f: &mut Frame, app: &App<O>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(20),
            Constraint::Percentage(50),
        ])
        .split(area);

    let score = app.round().map_or(0, RoundState::score);
    let score_text = Paragraph::new(format!("Score: {score}"))
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(score_text, chunks[0]);

    let last = app
        .round()
        .and_then(|round| round.used_words().first())
        .map_or_else(|| "-".to_string(), |word| describe_word(word));
    let last_text = Paragraph::new(format!("Last: {last}")).alignment(Alignment::Center);
    f.render_widget(last_text, chunks[1]);

    let help_text = match app.input_mode {
        InputMode::Typing => "Enter: Submit | Ctrl+N: New Round | Esc: Quit",
        InputMode::Alert(_) => "Enter: OK | Ctrl+N: New Round | Ctrl+C: Quit",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

fn render_alert(f: &mut Frame, reason: RejectionReason) {
    let area = centered_rect(50, 7, f.area());

    let content = vec![
        Line::from(Span::styled(
            reason.message(),
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "[ OK ]",
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
                .title(format!(" {} ", reason.title()))
                .title_alignment(Alignment::Center)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(Color::Red)),
        );

    f.render_widget(Clear, area);
    f.render_widget(popup, area);
}

/// A rectangle `percent_x` wide and `height` tall in the middle of `area`
fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let width = u32::from(area.width) * u32::from(percent_x.min(100)) / 100;
    // At most area.width, so it fits back in a u16
    let width = u16::try_from(width).unwrap_or(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameConfig, GameSession};
    use crate::oracle::DictionaryOracle;
    use ratatui::{Terminal, backend::TestBackend};

    fn app() -> App<DictionaryOracle> {
        let oracle = DictionaryOracle::new("en", ["cat", "coat"]);
        let config = GameConfig {
            seed: Some(2),
            ..GameConfig::default()
        };
        let session = GameSession::new(vec!["taco".to_string()], oracle, config).unwrap();
        App::new(session)
    }

    fn draw(app: &App<DictionaryOracle>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn screen_shows_root_and_score() {
        let mut app = app();
        app.session.submit("coat").unwrap();

        let screen = draw(&app);
        assert!(screen.contains("T A C O"));
        assert!(screen.contains("Score: 4"));
        assert!(screen.contains("coat"));
    }

    #[test]
    fn alert_shows_rejection() {
        let mut app = app();
        app.input_mode = InputMode::Alert(RejectionReason::AlreadyUsed);

        let screen = draw(&app);
        assert!(screen.contains("Word used already"));
        assert!(screen.contains("Be more original"));
    }

    #[test]
    fn centered_rect_fits_area() {
        let area = Rect::new(0, 0, 100, 30);
        let rect = centered_rect(50, 7, area);
        assert_eq!(rect, Rect::new(25, 11, 50, 7));

        let small = Rect::new(0, 0, 10, 3);
        let rect = centered_rect(50, 7, small);
        assert_eq!(rect.height, 3);
        assert_eq!(rect.y, 0);
    }

    #[test]
    fn centered_rect_on_wide_terminal() {
        let area = Rect::new(0, 0, 2000, 30);
        let rect = centered_rect(50, 7, area);
        assert_eq!(rect, Rect::new(500, 11, 1000, 7));

        let full = centered_rect(100, 7, Rect::new(0, 0, u16::MAX, 30));
        assert_eq!(full.width, u16::MAX);
        assert_eq!(full.x, 0);
    }
}
