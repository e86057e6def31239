mod components;

use std::sync::OnceLock;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, NavItem, Section};
use crate::theme::Theme;

// Resolve the theme once at startup; every drawing function below reads
// from this boundary instead of touching the config.
static THEME: OnceLock<Theme> = OnceLock::new();

fn theme() -> &'static Theme {
    THEME.get_or_init(Theme::load)
}

// Helper functions to get theme colors
fn accent() -> Color { theme().accent }
fn text() -> Color { theme().text }
fn text_dim() -> Color { theme().text_dim }
fn inactive() -> Color { theme().inactive }
fn bg_selected() -> Color { theme().bg_selected }
fn header() -> Color { theme().header }

pub const SEARCH_PLACEHOLDER: &str = "Search files...";

/// Sidebar width in columns
const SIDEBAR_WIDTH: u16 = 24;

/// Width of the branding area inside the header bar
const BRAND_WIDTH: u16 = 22;

/// The fixed element tree: header bar on top, then a sidebar beside the
/// flexible content pane, with a one-line key legend at the bottom.
pub struct AppLayout {
    pub header: Rect,
    pub sidebar: Rect,
    pub content: Rect,
    pub footer: Rect,
}

pub fn layout(area: Rect) -> AppLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header bar (brand + search box)
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Footer legend
        ])
        .split(area);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
        .split(rows[1]);

    AppLayout {
        header: rows[0],
        sidebar: body[0],
        content: body[1],
        footer: rows[2],
    }
}

pub fn draw(f: &mut Frame, app: &App) {
    let layout = layout(f.area());

    draw_header(f, app, layout.header);
    draw_sidebar(f, app, layout.sidebar);
    draw_content(f, layout.content);
    draw_footer(f, app, layout.footer);
}

fn draw_header(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(BRAND_WIDTH), Constraint::Min(0)])
        .split(area);

    // Brand sits on the middle row so it lines up with the search box text
    let brand = Paragraph::new(vec![
        Line::raw(""),
        Line::from(vec![
            Span::styled(" 󰉋 ", Style::default().fg(accent())),
            Span::styled(
                "Find your File",
                Style::default().fg(header()).add_modifier(Modifier::BOLD),
            ),
        ]),
    ]);
    f.render_widget(brand, chunks[0]);

    let focused = app.section == Section::Search;
    let search = Paragraph::new(components::input_value(
        &app.search_query,
        SEARCH_PLACEHOLDER,
        focused,
    ))
    .block(components::titled_block(" Search ", focused));
    f.render_widget(search, chunks[1]);
}

fn draw_sidebar(f: &mut Frame, app: &App, area: Rect) {
    let is_active = app.section == Section::Sidebar;
    let block = components::titled_block(" Navigation ", is_active);

    let lines: Vec<Line> = NavItem::ALL
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let selected = i == app.selected_nav;
            let style = if selected {
                Style::default().bg(bg_selected()).fg(text())
            } else {
                Style::default().fg(text_dim())
            };

            Line::from(vec![
                Span::styled(format!(" {} ", item.icon()), style),
                Span::styled(item.label(), style),
            ])
        })
        .collect();

    let nav = Paragraph::new(lines).block(block);
    f.render_widget(nav, area);
}

fn draw_content(f: &mut Frame, area: Rect) {
    // Content pane is a placeholder until a generated client is wired in
    let block = components::titled_block(" Files ", false);

    let empty_state = Paragraph::new(vec![
        Line::raw(""),
        Line::styled(
            "  Your files will appear here.",
            Style::default().fg(text_dim()),
        ),
        Line::styled(
            "  Run `fyf --generate` to build the API client for your backend.",
            Style::default().fg(text_dim()),
        ),
    ])
    .block(block);
    f.render_widget(empty_state, area);
}

fn draw_footer(f: &mut Frame, app: &App, area: Rect) {
    let hints: Vec<(&str, &str)> = match app.section {
        Section::Search => vec![
            ("Type", "Search"),
            ("Esc", "Clear"),
            ("Tab", "Sidebar"),
            ("Ctrl+C", "Quit"),
        ],
        Section::Sidebar => vec![
            ("↑↓", "Nav"),
            ("Tab", "Search"),
            ("q", "Quit"),
        ],
    };

    // Responsive: show fewer hints on narrow terminals
    let max_hints = if area.width < 50 { 3 } else { hints.len() };

    let hint_spans: Vec<Span> = hints
        .iter()
        .take(max_hints)
        .flat_map(|(key, action)| {
            vec![
                Span::styled(*key, Style::default().fg(accent())),
                Span::styled(format!(" {} │ ", action), Style::default().fg(text_dim())),
            ]
        })
        .collect();

    let footer = Paragraph::new(Line::from(hint_spans)).alignment(Alignment::Center);
    f.render_widget(footer, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{backend::TestBackend, Terminal};

    fn rendered_text(app: &App) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn layout_has_one_header_sidebar_and_content_in_order() {
        let layout = layout(Rect::new(0, 0, 80, 24));

        // Header spans the full width on top
        assert_eq!(layout.header.y, 0);
        assert_eq!(layout.header.width, 80);
        assert_eq!(layout.header.height, 3);

        // Body sits below the header, sidebar left of the content pane
        assert_eq!(layout.sidebar.y, layout.header.bottom());
        assert_eq!(layout.content.y, layout.sidebar.y);
        assert_eq!(layout.sidebar.x, 0);
        assert_eq!(layout.content.x, layout.sidebar.right());
        assert_eq!(layout.sidebar.width, SIDEBAR_WIDTH);
        assert_eq!(layout.content.right(), 80);

        // Footer takes the last row
        assert_eq!(layout.footer.bottom(), 24);
        assert_eq!(layout.footer.height, 1);
    }

    #[test]
    fn layout_survives_tiny_terminals() {
        let layout = layout(Rect::new(0, 0, 10, 3));

        assert!(layout.content.width <= 10);
        assert!(layout.footer.bottom() <= 3);
    }

    #[test]
    fn draw_shows_the_placeholder_while_the_query_is_empty() {
        let app = App::new();
        let text = rendered_text(&app);

        assert!(text.contains(SEARCH_PLACEHOLDER));
        assert!(text.contains("Find your File"));
        assert!(text.contains("Navigation"));
        assert!(text.contains("Files"));
    }

    #[test]
    fn draw_shows_the_query_once_typed() {
        let mut app = App::new();
        for c in "report".chars() {
            app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }

        let text = rendered_text(&app);

        assert!(text.contains("report"));
        assert!(!text.contains(SEARCH_PLACEHOLDER));
    }
}
