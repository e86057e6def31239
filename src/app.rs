use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Sidebar destinations, mirroring the backend surface
/// (entries can be soft-deleted and restored, hence Trash).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItem {
    AllFiles,
    Trash,
    Account,
}

impl NavItem {
    pub const ALL: [NavItem; 3] = [NavItem::AllFiles, NavItem::Trash, NavItem::Account];

    pub fn label(&self) -> &'static str {
        match self {
            NavItem::AllFiles => "All Files",
            NavItem::Trash => "Trash",
            NavItem::Account => "Account",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            NavItem::AllFiles => "󰈔",
            NavItem::Trash => "󰩺",
            NavItem::Account => "󰀄",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Search,
    Sidebar,
}

pub struct App {
    pub section: Section,

    /// The search field's value. The header widget only displays this
    /// string; every edit lands through `set_search_query`.
    pub search_query: String,

    /// Selected sidebar destination (index into `NavItem::ALL`)
    pub selected_nav: usize,
}

impl App {
    pub fn new() -> Self {
        Self {
            section: Section::Search,
            search_query: String::new(),
            selected_nav: 0,
        }
    }

    /// Single mutation path for the search field.
    pub fn set_search_query(&mut self, next: impl Into<String>) {
        self.search_query = next.into();
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            // Focus cycling (Search ↔ Sidebar)
            KeyCode::Tab | KeyCode::BackTab => {
                self.section = match self.section {
                    Section::Search => Section::Sidebar,
                    Section::Sidebar => Section::Search,
                };
            }

            _ => match self.section {
                Section::Search => self.handle_search_key(key),
                Section::Sidebar => self.handle_sidebar_key(key),
            },
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        // Control chords never edit the field
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return;
        }

        match key.code {
            KeyCode::Char(c) => {
                let mut next = self.search_query.clone();
                next.push(c);
                self.set_search_query(next);
            }
            KeyCode::Backspace => {
                let mut next = self.search_query.clone();
                next.pop();
                self.set_search_query(next);
            }
            KeyCode::Esc => self.set_search_query(String::new()),
            _ => {}
        }
    }

    fn handle_sidebar_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.selected_nav = (self.selected_nav + 1) % NavItem::ALL.len();
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.selected_nav = self
                    .selected_nav
                    .checked_sub(1)
                    .unwrap_or(NavItem::ALL.len() - 1);
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn typing_routes_through_the_query() {
        let mut app = App::new();

        for c in "report".chars() {
            app.handle_key(press(KeyCode::Char(c)));
        }

        assert_eq!(app.search_query, "report");
    }

    #[test]
    fn backspace_removes_the_last_character() {
        let mut app = App::new();
        app.set_search_query("repo");

        app.handle_key(press(KeyCode::Backspace));

        assert_eq!(app.search_query, "rep");
    }

    #[test]
    fn escape_clears_the_query() {
        let mut app = App::new();
        app.set_search_query("report");

        app.handle_key(press(KeyCode::Esc));

        assert_eq!(app.search_query, "");
    }

    #[test]
    fn control_chords_do_not_edit_the_field() {
        let mut app = App::new();

        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));

        assert_eq!(app.search_query, "");
    }

    #[test]
    fn tab_cycles_focus_between_search_and_sidebar() {
        let mut app = App::new();
        assert_eq!(app.section, Section::Search);

        app.handle_key(press(KeyCode::Tab));
        assert_eq!(app.section, Section::Sidebar);

        app.handle_key(press(KeyCode::Tab));
        assert_eq!(app.section, Section::Search);
    }

    #[test]
    fn sidebar_selection_wraps_both_ways() {
        let mut app = App::new();
        app.handle_key(press(KeyCode::Tab));

        app.handle_key(press(KeyCode::Up));
        assert_eq!(app.selected_nav, NavItem::ALL.len() - 1);

        app.handle_key(press(KeyCode::Down));
        assert_eq!(app.selected_nav, 0);
    }

    #[test]
    fn typing_is_ignored_while_the_sidebar_has_focus() {
        let mut app = App::new();
        app.handle_key(press(KeyCode::Tab));

        app.handle_key(press(KeyCode::Char('x')));

        assert_eq!(app.search_query, "");
    }
}
