//! Registration form rendering

use super::field_renderer::{draw_choice, draw_field, field_block};
use crate::app::App;
use crate::registration::{FieldName, GenderOption};
use crate::state::{FormButton, FormSlot};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub const FORM_TITLE: &str = "STUDENT REGISTRATION FORM";

/// Rows needed to show the whole form without squeezing
pub const FORM_HEIGHT: u16 = 2 + 3 * 7 + BUTTON_HEIGHT + 2;

/// Draw the registration form
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),             // Title
            Constraint::Length(3),             // Name
            Constraint::Length(3),             // Address
            Constraint::Length(3),             // Mobile
            Constraint::Length(3),             // Email
            Constraint::Length(3),             // Gender
            Constraint::Length(3),             // Date of birth
            Constraint::Length(3),             // Course
            Constraint::Length(BUTTON_HEIGHT), // Actions
            Constraint::Min(0),
        ])
        .split(inner);

    let title = Paragraph::new(Span::styled(
        FORM_TITLE,
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let text_rows = [
        (FieldName::Name, chunks[1]),
        (FieldName::Address, chunks[2]),
        (FieldName::Mobile, chunks[3]),
        (FieldName::Email, chunks[4]),
        (FieldName::Dob, chunks[6]),
    ];
    for (field, row) in text_rows {
        let slot = FormSlot::Text(field);
        draw_field(
            frame,
            row,
            field.label(),
            &slot.display_value(app.store.fields()),
            app.cursor.is_active(slot),
            app.store.errors().get(field),
        );
    }

    draw_gender(frame, chunks[5], app);

    let course = FormSlot::CourseSelect;
    draw_choice(
        frame,
        chunks[7],
        course.label(),
        &course.display_value(app.store.fields()),
        app.cursor.is_active(course),
        app.store.errors().get(FieldName::Course),
    );

    draw_actions(frame, chunks[8], app);
}

/// Both checkboxes share one frame so the gender error sits under the pair
fn draw_gender(frame: &mut Frame, area: Rect, app: &App) {
    let fields = app.store.fields();
    let any_active = [GenderOption::Male, GenderOption::Female]
        .into_iter()
        .any(|option| app.cursor.is_active(FormSlot::Checkbox(option)));

    let mut spans = vec![];
    for option in [GenderOption::Male, GenderOption::Female] {
        let slot = FormSlot::Checkbox(option);
        let style = if app.cursor.is_active(slot) {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        spans.push(Span::styled(slot.display_value(fields), style));
        spans.push(Span::raw("    "));
    }

    let block = field_block(
        FieldName::Gender.label(),
        any_active,
        app.store.errors().get(FieldName::Gender),
    );
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn draw_actions(frame: &mut Frame, area: Rect, app: &App) {
    let is_focused = app.cursor.is_buttons_row_active();
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    for (button, chunk, accent) in [
        (FormButton::Register, chunks[0], Color::Yellow),
        (FormButton::Cancel, chunks[1], Color::Gray),
    ] {
        render_button(
            frame,
            chunk,
            button.label(),
            is_focused && app.cursor.selected_button == button,
            Some(accent),
        );
    }
}
