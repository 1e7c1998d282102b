//! UI rendering using ratatui
//!
//! One screen, top to bottom:
//! - Header: title, cumulative score, tiles left in the bag
//! - Board: one cell per slot with its bonus label
//! - Rack: held tiles
//! - Preview and feedback lines
//! - Key help

use crate::app::{App, Row};
use crate::game::{BoardSlot, Bonus, Severity, Tile};
use ratatui::{
    layout::Flex,
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

/// Width of one tile cell, borders included
const CELL_WIDTH: u16 = 9;

/// Render the game screen
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(1), // Spacer
            Constraint::Length(5), // Board
            Constraint::Length(1), // Spacer
            Constraint::Length(5), // Rack
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Preview
            Constraint::Length(1), // Feedback
            Constraint::Min(0),    // Remaining space
            Constraint::Length(1), // Footer
        ])
        .margin(1)
        .split(area);

    render_header(frame, layout[0], app);
    render_board(frame, layout[2], app);
    render_rack(frame, layout[4], app);
    render_preview(frame, layout[6], app);
    render_feedback(frame, layout[7], app);

    let footer = Paragraph::new("←→ Move  ↑↓ Board/Rack  Space Pick/Drop  Enter Submit  d Deal  r Reset  q Quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(footer, layout[9]);
}

/// Render the header: title, score, bag count
fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let header_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12), // Title
            Constraint::Min(20),    // Score
            Constraint::Length(18), // Bag
        ])
        .split(inner);

    let title = Paragraph::new("WORDSLOT")
        .style(Style::default().fg(Color::Yellow).bold())
        .alignment(Alignment::Left);
    frame.render_widget(title, header_layout[0]);

    let score = Paragraph::new(format!("Score: {}", app.session().score()))
        .style(Style::default().fg(Color::Magenta).bold())
        .alignment(Alignment::Center);
    frame.render_widget(score, header_layout[1]);

    let remaining = app.session().remaining_tiles();
    let (bag_text, bag_color) = format_remaining(remaining);
    let bag = Paragraph::new(format!("Bag: {}", bag_text))
        .style(Style::default().fg(bag_color))
        .alignment(Alignment::Right);
    frame.render_widget(bag, header_layout[2]);
}

/// Render the board slots in a row
fn render_board(frame: &mut Frame, area: Rect, app: &App) {
    let slots = app.session().board().slots();
    let cells = cell_row(area, slots.len());

    for (slot, cell) in slots.iter().zip(cells.iter()) {
        let focused = app.row == Row::Board && app.cursor == slot.index;
        let held = slot.occupant().is_some_and(|t| Some(t.id) == app.held);
        let block = Block::default()
            .borders(Borders::ALL)
            .title(slot.bonus.short_label())
            .border_style(cell_border(focused, held))
            .style(Style::default().fg(bonus_color(slot.bonus)));
        let text = format_slot(slot);
        let widget = Paragraph::new(text)
            .block(block)
            .style(Style::default().fg(Color::White).bold())
            .alignment(Alignment::Center);
        frame.render_widget(widget, *cell);
    }
}

/// Render the rack, padding empty spaces up to capacity
fn render_rack(frame: &mut Frame, area: Rect, app: &App) {
    let rack = app.session().rack();
    let cells = cell_row(area, rack.capacity());

    for (i, cell) in cells.iter().enumerate() {
        let tile = rack.tiles().get(i);
        let focused = app.row == Row::Rack && app.cursor == i;
        let held = tile.is_some_and(|t| Some(t.id) == app.held);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(cell_border(focused, held));
        let text = tile.map(format_tile).unwrap_or_default();
        let widget = Paragraph::new(text)
            .block(block)
            .style(Style::default().fg(Color::Cyan).bold())
            .alignment(Alignment::Center);
        frame.render_widget(widget, *cell);
    }
}

/// Render the live score of everything on the board
fn render_preview(frame: &mut Frame, area: Rect, app: &App) {
    let preview = app.session().preview();
    let mut text = format!("On board: {} points", preview.total);
    if preview.word_multiplier > 1 {
        text.push_str(&format!(" ({} x{})", preview.raw, preview.word_multiplier));
    }
    if app.dictionary_loading() {
        text.push_str("  [loading dictionary...]");
    }
    let widget = Paragraph::new(text).style(Style::default().fg(Color::White));
    frame.render_widget(widget, area);
}

/// Render the message from the last action
fn render_feedback(frame: &mut Frame, area: Rect, app: &App) {
    let message = app.session().message();
    let widget = Paragraph::new(message.text.as_str())
        .style(Style::default().fg(severity_color(message.severity)));
    frame.render_widget(widget, area);
}

/// Split an area into `count` fixed-width cells, centered
fn cell_row(area: Rect, count: usize) -> Vec<Rect> {
    let constraints = std::iter::repeat(Constraint::Length(CELL_WIDTH)).take(count);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .flex(Flex::Center)
        .split(area)
        .to_vec()
}

fn cell_border(focused: bool, held: bool) -> Style {
    if held {
        Style::default().fg(Color::Cyan).bold()
    } else if focused {
        Style::default().fg(Color::Yellow).bold()
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn bonus_color(bonus: Bonus) -> Color {
    match bonus {
        Bonus::None => Color::DarkGray,
        Bonus::DoubleLetter => Color::LightBlue,
        Bonus::DoubleWord => Color::LightRed,
    }
}

fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Info => Color::White,
        Severity::Success => Color::Green,
        Severity::Error => Color::Red,
    }
}

/// Tile face: letter with its value, blank shown as a space
fn format_tile(tile: &Tile) -> String {
    let face = if tile.letter.is_blank() {
        ' '
    } else {
        tile.letter.as_char()
    };
    format!("\n{} {}", face, tile.value)
}

fn format_slot(slot: &BoardSlot) -> String {
    match slot.occupant() {
        Some(tile) => format_tile(tile),
        None => String::new(),
    }
}

/// Bag count for display; zero reads as "Empty"
fn format_remaining(remaining: u32) -> (String, Color) {
    if remaining == 0 {
        ("Empty".to_string(), Color::Red)
    } else {
        (remaining.to_string(), Color::White)
    }
}
