//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = layout::form_area(frame.area());

    forms::draw_registration_form(frame, area, app);

    layout::draw_status_bar(frame, app);

    // Notices render last so they overlay the form
    if let Some(notice) = app.notices.current() {
        components::render_notice_dialog(frame, notice);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::notify::Notifier;
    use crate::registration::FormFields;
    use ratatui::{backend::TestBackend, Terminal};

    fn screen_text(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(90, 40)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_rejected_notice_overlays_form() {
        let mut app = App::new(AppConfig::default());
        app.submit();
        let screen = screen_text(&app);
        assert!(screen.contains("Registration Failed"));
        assert!(screen.contains("to dismiss"));
    }

    #[test]
    fn test_status_bar_shows_phase() {
        let mut app = App::new(AppConfig::default());
        assert!(screen_text(&app).contains("Editing"));
        app.store.submit();
        assert!(screen_text(&app).contains("Needs fixes"));
    }

    #[test]
    fn test_success_notice_keeps_typed_spacing() {
        let mut app = App::new(AppConfig::default());
        app.notices.submitted(&FormFields {
            name: "Mary  Ann".to_string(),
            ..Default::default()
        });
        let screen = screen_text(&app);
        assert!(screen.contains("\"Mary  Ann\""));
        assert!(!screen.contains("\"Mary Ann\""));
    }
}
