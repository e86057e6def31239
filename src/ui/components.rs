//! Reusable UI component helpers shared by the drawing functions.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders},
};

use super::{accent, inactive, text, text_dim};

/// Bordered box with a title that lights up when its section has focus.
pub fn titled_block(title: &str, active: bool) -> Block<'_> {
    let border_color = if active { accent() } else { inactive() };
    let title_style = if active {
        Style::default().fg(accent()).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(inactive())
    };

    Block::default()
        .title(Span::styled(title, title_style))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
}

/// Single-line text input display: the externally owned value, or a dim
/// placeholder while it is empty. A trailing cursor marks focus.
pub fn input_value<'a>(value: &'a str, placeholder: &'a str, focused: bool) -> Line<'a> {
    if value.is_empty() {
        return Line::from(Span::styled(
            format!(" {}", placeholder),
            Style::default().fg(text_dim()),
        ));
    }

    let cursor = if focused { "_" } else { "" };
    Line::from(vec![
        Span::styled(format!(" {}", value), Style::default().fg(text())),
        Span::styled(cursor, Style::default().fg(accent())),
    ])
}
