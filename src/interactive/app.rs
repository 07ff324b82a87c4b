//! TUI application state and logic

use crate::core::RejectionReason;
use crate::game::{GameSession, RoundState, Submission, SubmitError};
use crate::oracle::SpellingOracle;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Longest input the entry box accepts
const MAX_INPUT_LEN: usize = 32;

/// Number of status messages kept on screen
const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App<O: SpellingOracle> {
    pub session: GameSession<O>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub input_mode: InputMode,
    pub should_quit: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Typing,
    /// A rejection popup is shown until dismissed
    Alert(RejectionReason),
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<O: SpellingOracle> App<O> {
    /// Wrap a session; a round is started if none is in progress
    #[must_use]
    pub fn new(mut session: GameSession<O>) -> Self {
        if session.round().is_none() {
            session.start_round();
        }

        Self {
            session,
            input_buffer: String::new(),
            messages: vec![
                Message {
                    text: "Welcome! Make words from the letters of the root word.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Type a word and press Enter. Ctrl+N starts a new round.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            input_mode: InputMode::Typing,
            should_quit: false,
        }
    }

    /// The round on screen
    #[must_use]
    pub fn round(&self) -> Option<&RoundState> {
        self.session.round()
    }

    pub fn submit_word(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);

        match self.session.submit(&input) {
            Ok(Submission::Accepted(word)) => {
                let score = self.round().map_or(0, RoundState::score);
                self.add_message(
                    &format!("+{} for '{word}' (score {score})", word.chars().count()),
                    MessageStyle::Success,
                );
            }
            Ok(Submission::Ignored) => {}
            Err(SubmitError::Rejected(reason)) => {
                // Keep the text so it can be corrected
                self.input_buffer = input;
                self.input_mode = InputMode::Alert(reason);
                self.add_message(reason.title(), MessageStyle::Error);
            }
            Err(SubmitError::NotStarted) => {
                self.add_message("No round in progress! Press Ctrl+N.", MessageStyle::Error);
            }
        }
    }

    pub fn new_round(&mut self) {
        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Typing;
        let root = self.session.start_round().root_word().to_uppercase();
        self.add_message(&format!("New round! Root word: {root}"), MessageStyle::Info);
    }

    pub fn dismiss_alert(&mut self) {
        self.input_mode = InputMode::Typing;
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c' | 'q') => self.should_quit = true,
                KeyCode::Char('n') => self.new_round(),
                _ => {}
            }
            return;
        }

        match self.input_mode {
            InputMode::Alert(_) => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                    self.dismiss_alert();
                }
            }
            InputMode::Typing => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Char(c) => {
                    if self.input_buffer.chars().count() < MAX_INPUT_LEN {
                        self.input_buffer.push(c);
                    }
                }
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => self.submit_word(),
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
pub fn run_tui<O: SpellingOracle>(app: App<O>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B, O>(terminal: &mut Terminal<B>, mut app: App<O>) -> Result<()>
where
    B: ratatui::backend::Backend,
    O: SpellingOracle,
{
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
