//! Field rendering utilities for forms

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

fn border_style(is_active: bool, has_error: bool) -> Style {
    if has_error {
        Style::default().fg(Color::Red)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

/// Block with the field label on top and any validation message underneath
pub fn field_block<'a>(label: &'a str, is_active: bool, error: Option<&'a str>) -> Block<'a> {
    let mut block = Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(border_style(is_active, error.is_some()));

    if let Some(message) = error {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {message} "),
            Style::default().fg(Color::Red),
        )));
    }

    block
}

/// Draw a single-line text field
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    is_active: bool,
    error: Option<&str>,
) {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    };

    let display_value = if is_active {
        // Borders plus the cursor cell
        visible_tail(value, area.width.saturating_sub(3) as usize)
    } else if value.is_empty() {
        "(empty)"
    } else {
        value
    };

    let cursor = if is_active { "▌" } else { "" };

    let content = Paragraph::new(Line::from(vec![
        Span::styled(display_value, style),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]));

    frame.render_widget(content.block(field_block(label, is_active, error)), area);
}

/// The last `width` characters of `value`, so the end being typed stays in view
fn visible_tail(value: &str, width: usize) -> &str {
    let skip = value.chars().count().saturating_sub(width);
    value
        .char_indices()
        .nth(skip)
        .map_or("", |(index, _)| &value[index..])
}

/// Draw a non-text control (checkbox, select) inside a field frame
pub fn draw_choice(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    is_active: bool,
    error: Option<&str>,
) {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let content = Paragraph::new(Line::from(Span::styled(value, style)));
    frame.render_widget(content.block(field_block(label, is_active, error)), area);
}
