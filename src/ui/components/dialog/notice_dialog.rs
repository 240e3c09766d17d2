//! Submit notice dialog component

use super::base::{render_dialog, DialogConfig};
use crate::notify::{Notice, NoticeKind};
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};

/// Render a success or failure notice centered on the screen
pub fn render_notice_dialog(frame: &mut Frame, notice: &Notice) {
    let color = match notice.kind {
        NoticeKind::Success => Color::Green,
        NoticeKind::Failure => Color::Red,
    };

    let hint = vec![
        Span::raw("Press "),
        Span::styled(
            "Enter",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" or "),
        Span::styled(
            "Esc",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" to dismiss"),
    ];

    render_dialog(
        frame,
        DialogConfig {
            title: &notice.title,
            title_color: color,
            border_color: color,
            message: &notice.message,
            hint: Some(hint),
            ..Default::default()
        },
    );
}
