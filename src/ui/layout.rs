//! Screen layout and status bar

use crate::app::App;
use crate::platform::{RESET_SHORTCUT, SUBMIT_SHORTCUT};
use crate::registration::FormPhase;
use crate::state::FormSlot;
use crate::ui::forms::FORM_HEIGHT;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Width of the form column
const FORM_WIDTH: u16 = 72;

/// Center the form horizontally above the status bar
pub fn form_area(area: Rect) -> Rect {
    let usable_height = area.height.saturating_sub(1);
    let width = FORM_WIDTH.min(area.width);
    let height = FORM_HEIGHT.min(usable_height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (usable_height - height) / 2,
        width,
        height,
    }
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![];

    let phase_color = match app.store.phase() {
        FormPhase::Editing => Color::Gray,
        FormPhase::SubmittedInvalid => Color::Red,
        FormPhase::SubmittedValid => Color::Green,
    };
    spans.push(Span::styled(
        format!(" ● {} ", app.store.phase().label()),
        Style::default().fg(phase_color),
    ));

    spans.push(Span::styled(
        slot_hints(app.cursor.active_slot()),
        Style::default().fg(Color::Gray),
    ));

    if let Some(msg) = &app.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    // Quit hint on the right
    let quit_hint = " ^C:quit ";

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    let quit_area = Rect {
        x: area.width.saturating_sub(quit_hint.len() as u16),
        y: area.height.saturating_sub(1),
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the focused slot
fn slot_hints(slot: FormSlot) -> String {
    let common = format!("Tab:next  {SUBMIT_SHORTCUT}:register  {RESET_SHORTCUT}:cancel");
    match slot {
        FormSlot::Text(_) => format!("type to edit  {common}"),
        FormSlot::Checkbox(_) => format!("Space:toggle  {common}"),
        FormSlot::CourseSelect => format!("←/→:choose  {common}"),
        FormSlot::Actions => format!("←/→:button  Enter:press  {common}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registration::FieldName;

    #[test]
    fn test_form_area_is_centered() {
        let area = form_area(Rect::new(0, 0, 100, 50));
        assert_eq!(area.width, FORM_WIDTH);
        assert_eq!(area.x, (100 - FORM_WIDTH) / 2);
        assert_eq!(area.height, FORM_HEIGHT);
    }

    #[test]
    fn test_form_area_shrinks_to_small_terminal() {
        let area = form_area(Rect::new(0, 0, 40, 10));
        assert_eq!(area.width, 40);
        assert_eq!(area.height, 9);
        assert_eq!(area.y, 0);
    }

    #[test]
    fn test_slot_hints_mention_shortcuts() {
        let hints = slot_hints(FormSlot::Text(FieldName::Name));
        assert!(hints.contains(SUBMIT_SHORTCUT));
        assert!(hints.contains(RESET_SHORTCUT));
        assert!(slot_hints(FormSlot::CourseSelect).contains("choose"));
    }
}
