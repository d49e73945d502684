//! Rendering for the capture shell.
//!
//! The canvas panel renders the grayscale pixel buffer with half-block
//! cells: each terminal cell carries two vertical "pixels" (▀ with a
//! foreground/background pair), so a 300x300 canvas fits a normal window.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::surface::canvas::Canvas;

use super::ShellApp;

/// Width of the character list panel.
const LIST_WIDTH: u16 = 14;

/// Render one frame of the shell.
///
/// Stores the canvas panel's inner area back on the app so the event loop
/// can translate mouse positions into canvas coordinates.
pub fn render(frame: &mut Frame, app: &mut ShellApp) {
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(frame.area());

    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(LIST_WIDTH), Constraint::Min(10)])
        .split(outer[0]);

    render_character_list(frame, app, panels[0]);
    render_canvas(frame, app, panels[1]);
    render_status_line(frame, app, outer[1]);
}

/// The unregistered-character list with the current selection highlighted.
fn render_character_list(frame: &mut Frame, app: &ShellApp, area: Rect) {
    let items: Vec<ListItem> = app
        .session
        .unregistered()
        .iter()
        .map(|symbol| ListItem::new(format!(" {symbol}")))
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("characters"))
        .highlight_style(
            Style::default()
                .add_modifier(Modifier::REVERSED)
                .add_modifier(Modifier::BOLD),
        );

    let mut state = ListState::default();
    state.select(app.session.selected_index());
    frame.render_stateful_widget(list, area, &mut state);
}

/// The drawing canvas, plus the purely visual reference-glyph overlay.
fn render_canvas(frame: &mut Frame, app: &mut ShellApp, area: Rect) {
    let title = match app.session.surface().reference() {
        Some(symbol) => format!("canvas — {symbol}"),
        None => "canvas".to_string(),
    };
    let block = Block::default().borders(Borders::ALL).title(title);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // The event loop needs this rectangle to map mouse cells to pixels.
    app.canvas_area = inner;

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let lines = halfblock_lines(app.session.surface().canvas(), inner.width, inner.height);
    frame.render_widget(Paragraph::new(lines), inner);

    // Overlay the reference glyph at the center. This lives only in the
    // widget layer; the saved raster contains nothing but strokes.
    if let Some(symbol) = app.session.surface().reference() {
        if inner.width >= 2 {
            let overlay = Rect {
                x: inner.x + inner.width / 2 - 1,
                y: inner.y + inner.height / 2,
                width: 2,
                height: 1,
            };
            frame.render_widget(
                Paragraph::new(symbol.to_string())
                    .style(Style::default().fg(Color::Rgb(150, 150, 150))),
                overlay,
            );
        }
    }
}

/// Key bindings and the most recent status message.
fn render_status_line(frame: &mut Frame, app: &ShellApp, area: Rect) {
    let remaining = app.session.unregistered().len();
    let text = format!(
        " {remaining} unregistered | s save  c clear  ↑/↓ select  q quit | {}",
        app.status
    );
    frame.render_widget(
        Paragraph::new(text).style(Style::default().fg(Color::DarkGray)),
        area,
    );
}

/// Downsample the canvas into half-block cells (2 vertical pixels per cell).
fn halfblock_lines(canvas: &Canvas, cols: u16, rows: u16) -> Vec<Line<'static>> {
    let scale_x = f64::from(canvas.width()) / f64::from(cols);
    let scale_y = f64::from(canvas.height()) / (f64::from(rows) * 2.0);

    let mut lines = Vec::with_capacity(rows as usize);
    for row in 0..rows {
        let mut spans = Vec::with_capacity(cols as usize);
        for col in 0..cols {
            let top = sample(canvas, col, u32::from(row) * 2, scale_x, scale_y);
            let bottom = sample(canvas, col, u32::from(row) * 2 + 1, scale_x, scale_y);

            let span = if top == bottom {
                Span::styled(" ", Style::default().bg(gray(top)))
            } else {
                Span::styled("▀", Style::default().fg(gray(top)).bg(gray(bottom)))
            };
            spans.push(span);
        }
        lines.push(Line::from(spans));
    }
    lines
}

/// Sample the canvas pixel covering a subcell.
fn sample(canvas: &Canvas, col: u16, subrow: u32, scale_x: f64, scale_y: f64) -> u8 {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let x = ((f64::from(col) + 0.5) * scale_x) as u32;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let y = ((f64::from(subrow) + 0.5) * scale_y) as u32;

    canvas
        .pixel(
            x.min(canvas.width().saturating_sub(1)),
            y.min(canvas.height().saturating_sub(1)),
        )
        .unwrap_or(crate::surface::canvas::PAPER)
}

/// Map a luminance value to a terminal color.
fn gray(luminance: u8) -> Color {
    Color::Rgb(luminance, luminance, luminance)
}
