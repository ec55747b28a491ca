//! Key bindings for the read-more list.
//!
//! - **Cursor**: `↑/k`, `↓/j`
//! - **Pages**: `pgup`, `pgdn`
//! - **Jumps**: `g/home`, `G/end`
//! - **Select**: `enter` (retries when the cursor is on the retry button)
//! - **Retry**: `r`

use super::types::FooterState;
use crate::key;
use crossterm::event::KeyCode;

/// Key bindings used by the read-more list.
#[derive(Debug, Clone)]
pub struct ReadMoreKeyMap {
    /// Move the cursor up one row.
    pub cursor_up: key::Binding,
    /// Move the cursor down one row.
    pub cursor_down: key::Binding,
    /// Move the cursor up one screen.
    pub prev_page: key::Binding,
    /// Move the cursor down one screen.
    pub next_page: key::Binding,
    /// Jump to the first row.
    pub go_to_start: key::Binding,
    /// Jump to the last row.
    pub go_to_end: key::Binding,
    /// Select the row under the cursor.
    pub select: key::Binding,
    /// Activate the retry button.
    pub retry: key::Binding,
}

impl Default for ReadMoreKeyMap {
    fn default() -> Self {
        Self {
            cursor_up: key::Binding::new(vec![KeyCode::Up, KeyCode::Char('k')])
                .with_help("↑/k", "up"),
            cursor_down: key::Binding::new(vec![KeyCode::Down, KeyCode::Char('j')])
                .with_help("↓/j", "down"),
            prev_page: key::Binding::new(vec![KeyCode::PageUp]).with_help("pgup", "prev page"),
            next_page: key::Binding::new(vec![KeyCode::PageDown]).with_help("pgdn", "next page"),
            go_to_start: key::Binding::new(vec![KeyCode::Home, KeyCode::Char('g')])
                .with_help("g/home", "go to start"),
            go_to_end: key::Binding::new(vec![KeyCode::End, KeyCode::Char('G')])
                .with_help("G/end", "go to end"),
            select: key::Binding::new(vec![KeyCode::Enter]).with_help("enter", "select"),
            retry: key::Binding::new(vec![KeyCode::Char('r')]).with_help("r", "retry"),
        }
    }
}

impl ReadMoreKeyMap {
    /// Compact help for the given footer state; the retry binding is only
    /// listed while the retry button is shown.
    pub fn short_help_for(&self, footer: FooterState) -> Vec<&key::Binding> {
        let mut bindings = vec![&self.cursor_up, &self.cursor_down, &self.select];
        if footer == FooterState::RetryVisible {
            bindings.push(&self.retry);
        }
        bindings
    }
}

impl key::KeyMap for ReadMoreKeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        self.short_help_for(FooterState::RetryVisible)
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![
            vec![
                &self.cursor_up,
                &self.cursor_down,
                &self.prev_page,
                &self.next_page,
            ],
            vec![&self.go_to_start, &self.go_to_end],
            vec![&self.select, &self.retry],
        ]
    }
}
