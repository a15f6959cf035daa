//! TUI rendering with ratatui
//!
//! Visualizations for the Spelling Bee play interface.

use super::app::{App, MessageStyle};
use crate::core::ScoredWord;
use crate::output::formatters::pangram_marker;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(45), // Letters and messages
            Constraint::Percentage(55), // Progress and words
        ])
        .split(chunks[1]);

    render_left_panel(f, app, main_chunks[0]);
    render_right_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🐝 SPELLING BEE")
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Yellow)),
        );
    f.render_widget(header, area);
}

fn render_left_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(9), // Hive
            Constraint::Min(4),    // Messages
        ])
        .split(area);

    render_hive(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn letter_span(c: char, center: bool) -> Span<'static> {
    let style = if center {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    };
    Span::styled(format!(" {c} "), style)
}

/// Two outer rows around a center row, hive style
fn render_hive(f: &mut Frame, app: &App, area: Rect) {
    let outer = &app.outer_letters;
    let (top, rest) = outer.split_at(outer.len().min(2));
    let (middle, bottom) = rest.split_at(rest.len().min(2));

    let row = |letters: &[char]| {
        Line::from(
            letters
                .iter()
                .flat_map(|&c| [letter_span(c, false), Span::raw("  ")])
                .collect::<Vec<_>>(),
        )
    };

    let mut center_row = Vec::new();
    if let Some(&left) = middle.first() {
        center_row.push(letter_span(left, false));
        center_row.push(Span::raw("  "));
    }
    if let Some(center) = app.game.target().letter() {
        center_row.push(letter_span(center, true));
        center_row.push(Span::raw("  "));
    }
    if let Some(&right) = middle.get(1) {
        center_row.push(letter_span(right, false));
    }

    let content = vec![
        Line::from(""),
        row(top),
        Line::from(""),
        Line::from(center_row),
        Line::from(""),
        row(bottom),
    ];

    let hive = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .title(" Letters ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(hive, area);
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

fn render_right_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Rank gauge
            Constraint::Min(5),    // Word list
        ])
        .split(area);

    render_rank(f, app, chunks[0]);
    render_words(f, app, chunks[1]);
}

fn render_rank(f: &mut Frame, app: &App, area: Rect) {
    let game = &app.game;
    let total = game.solution().total_score;
    let percent = if total == 0 {
        100
    } else {
        (u64::from(game.score()) * 100 / u64::from(total)) as u16
    };

    let label = match game.points_to_next_rank() {
        Some(needed) => format!(
            "{} | {}/{} points | {needed} to next rank",
            game.rank(),
            game.score(),
            total
        ),
        None => format!("{} | {}/{} points", game.rank(), game.score(), total),
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Rank ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Yellow))
        .percent(percent.min(100))
        .label(label);

    f.render_widget(gauge, area);
}

fn word_line(word: &ScoredWord, app: &App, found: bool) -> Line<'static> {
    let letters = app.game.letters();
    let marker = pangram_marker(word.is_pangram(), word.is_perfect_pangram(letters));
    let style = match (found, word.is_pangram()) {
        (true, true) => Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        (true, false) => Style::default().fg(Color::Green),
        (false, _) => Style::default().fg(Color::DarkGray),
    };

    Line::from(vec![
        Span::styled(format!("{:<12}", word.word()), style),
        Span::styled(format!("{:>3} ", word.score()), Style::default().fg(Color::Cyan)),
        Span::raw(marker),
    ])
}

fn render_words(f: &mut Frame, app: &App, area: Rect) {
    let game = &app.game;

    let mut found: Vec<&ScoredWord> = game.found().iter().collect();
    found.sort_by(|a, b| a.word().cmp(b.word()));

    let mut lines: Vec<Line> = found.iter().map(|w| word_line(w, app, true)).collect();

    if app.show_answers {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Not found:",
            Style::default().add_modifier(Modifier::ITALIC),
        )));
        lines.extend(game.remaining().map(|w| word_line(w, app, false)));
    }

    let title = format!(
        " Found {}/{} words | {}/{} pangrams ",
        game.found().len(),
        game.solution().words.len(),
        game.pangrams_found(),
        game.solution().pangrams.len()
    );

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let input = Paragraph::new(app.input_buffer.as_str())
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .title(" Enter Word ")
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(Color::Yellow)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(70),
        ])
        .split(area);

    let letters = app.game.letters().to_string();
    let puzzle = Paragraph::new(format!("Puzzle: {letters}")).alignment(Alignment::Center);
    f.render_widget(puzzle, chunks[0]);

    let help = Paragraph::new("Enter: Submit | Space: Shuffle | Tab: Reveal | Esc: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}
