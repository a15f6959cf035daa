//! TUI application state and logic

use crate::game::Game;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Longest guess the input box accepts
const MAX_INPUT_LEN: usize = 24;

/// Application state
pub struct App {
    pub game: Game,
    pub outer_letters: Vec<char>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub show_answers: bool,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl App {
    #[must_use]
    pub fn new(game: Game) -> Self {
        let outer_letters = game.shuffled_outer_letters();
        let total_words = game.solution().words.len();

        let mut app = Self {
            game,
            outer_letters,
            input_buffer: String::new(),
            messages: Vec::new(),
            show_answers: false,
            should_quit: false,
        };
        app.add_message(
            &format!("Welcome! This puzzle has {total_words} words."),
            MessageStyle::Info,
        );
        app.add_message(
            "Type a word and press Enter. Space shuffles, Tab reveals.",
            MessageStyle::Info,
        );
        app
    }

    pub fn submit(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);
        if input.is_empty() {
            return;
        }

        match self.game.guess(&input) {
            Ok(accepted) => {
                let points = accepted.word.score();
                if accepted.word.is_pangram() {
                    self.add_message(
                        &format!("🎉 PANGRAM! {} +{points}", accepted.word),
                        MessageStyle::Success,
                    );
                } else {
                    self.add_message(
                        &format!("{} +{points}", accepted.word),
                        MessageStyle::Success,
                    );
                }
                if let Some(rank) = accepted.rank_up {
                    self.add_message(&format!("⭐ New rank: {rank}"), MessageStyle::Success);
                }
                if self.game.is_complete() {
                    self.add_message("🐝 Every word found. Queen Bee!", MessageStyle::Success);
                }
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    pub fn shuffle(&mut self) {
        self.outer_letters = self.game.shuffled_outer_letters();
    }

    pub fn toggle_answers(&mut self) {
        self.show_answers = !self.show_answers;
        if self.show_answers {
            self.add_message("Answers revealed", MessageStyle::Info);
        }
    }

    /// Accept a typed character if it could be part of a word
    pub fn push_char(&mut self, c: char) {
        if c.is_ascii_alphabetic() && self.input_buffer.len() < MAX_INPUT_LEN {
            self.input_buffer.push(c.to_ascii_uppercase());
        }
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

    if let Err(err) = res {
        log::error!("TUI exited with error: {err}");
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

            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true;
                }
                KeyCode::Esc => app.should_quit = true,
                KeyCode::Char(' ') => app.shuffle(),
                KeyCode::Tab => app.toggle_answers(),
                KeyCode::Char(c) => app.push_char(c),
                KeyCode::Backspace => {
                    app.input_buffer.pop();
                }
                KeyCode::Enter => app.submit(),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
