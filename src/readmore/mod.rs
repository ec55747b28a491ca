//! Infinite-scroll list with pinned rows and a "read more" footer.
//!
//! The list shows three kinds of rows, top to bottom:
//! - **pinned rows** supplied by the application, always first
//! - **paginated rows** built on demand by a `CellFactory`
//! - a **footer row** with an activity indicator or a retry button
//!
//! ## Fetch cycle
//!
//! Whenever the footer comes into view (and the retry button is not shown)
//! the list returns a command that asks the `PageFetcher` for the page after
//! the rows loaded so far. The page is applied in `update`: its rows are
//! appended without animation, and the footer is hidden when nothing is left
//! or refreshed in place when more remains. Refreshing the footer makes it
//! count as displayed again, so a footer that never left the screen keeps
//! loading pages until the screen is full or the data runs out.
//!
//! Failures are not detected by the list. A fetcher that fails returns an
//! empty page, and the application calls `show_retry_button`; the user (or
//! `retry`) then starts the next attempt.
//!
//! ## Example
//!
//! ```
//! use readmore_widgets::readmore::{Cell, Model, Page};
//!
//! let mut list = Model::new(
//!     |cell: Cell, row: usize| cell.with_content(format!("message #{row}")),
//!     |current: usize| async move {
//!         // load 25 more starting at `current`
//!         Page::new(25, current + 25 < 200)
//!     },
//!     80,
//!     20,
//! );
//!
//! // The footer is on screen, so laying out starts the first fetch.
//! let cmd = list.start();
//! assert!(cmd.is_some());
//! assert!(list.is_fetching());
//! ```

pub mod config;
pub mod host;
pub mod keys;
pub mod style;

mod error;
mod fetch;
mod layout;
mod model;
mod rendering;
mod types;

#[cfg(test)]
mod tests;

pub use config::{Config, RetryAffordance, DEFAULT_ESTIMATED_ROW_HEIGHT};
pub use error::ReadMoreError;
pub use fetch::PageLoadedMsg;
pub use host::{ListHost, RowAnimation, RowChange, ScrollPosition};
pub use keys::ReadMoreKeyMap;
pub use model::Model;
pub use style::ReadMoreStyles;
pub use types::{
    Cell, CellFactory, FetchFuture, FetchPhase, FooterState, IndexPath, NoMorePages, Page,
    PageFetcher, PassthroughCells, SelectionSink, CONTENT_SECTION, FOOTER_SECTION,
};

use crate::{activity, Component};
use bubbletea_rs::{Cmd, KeyMsg, Model as BubbleTeaModel, Msg, WindowSizeMsg};
use tracing::debug;

impl Model {
    /// Starts the footer's activity indicator. Return it from the embedding
    /// model's `init`; every tick handled by [`update`](Self::update)
    /// schedules the next one.
    pub fn tick(&self) -> Cmd {
        self.activity.tick()
    }

    /// Handles page results, indicator ticks, resizes and key presses.
    ///
    /// Page results and key presses that move the viewport may return the
    /// command for the next fetch.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(loaded) = msg.downcast_ref::<PageLoadedMsg>() {
            return self.apply_page(loaded);
        }
        if msg.is::<activity::TickMsg>() {
            return self.activity.update(msg);
        }
        if let Some(size) = msg.downcast_ref::<WindowSizeMsg>() {
            return self.set_size(size.width as usize, size.height as usize);
        }
        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            return self.handle_key(key_msg);
        }
        None
    }

    fn handle_key(&mut self, key_msg: &KeyMsg) -> Option<Cmd> {
        let keymap = &self.keymap;
        if keymap.cursor_up.matches(key_msg) {
            self.move_cursor(-1);
        } else if keymap.cursor_down.matches(key_msg) {
            self.move_cursor(1);
        } else if keymap.prev_page.matches(key_msg) {
            let page = self.rows_per_screen();
            self.move_cursor(-(page as isize));
        } else if keymap.next_page.matches(key_msg) {
            let page = self.rows_per_screen();
            self.move_cursor(page as isize);
        } else if keymap.go_to_start.matches(key_msg) {
            self.move_cursor_to(0);
        } else if keymap.go_to_end.matches(key_msg) {
            self.move_cursor_to(self.flat_len().saturating_sub(1));
        } else if keymap.select.matches(key_msg) {
            return self.select_cursor_row();
        } else if keymap.retry.matches(key_msg) {
            return self.retry();
        } else {
            return None;
        }
        self.sync_visible_rows(true)
    }

    /// Enter on a content row forwards its row index; Enter on the footer
    /// activates the retry button when it is shown.
    fn select_cursor_row(&mut self) -> Option<Cmd> {
        let path = self.path_at(self.cursor)?;
        if path.is_footer() {
            return self.retry();
        }
        debug!(list = self.id, row = path.row, "row selected");
        self.selected = Some(path);
        self.selection.as_ref()?.on_select(path.row)
    }
}

impl Component for Model {
    /// Focuses the list and clears the highlight left by the last selection.
    fn focus(&mut self) -> Option<Cmd> {
        self.focus = true;
        self.selected = None;
        None
    }

    fn blur(&mut self) {
        self.focus = false;
    }

    fn focused(&self) -> bool {
        self.focus
    }
}

impl BubbleTeaModel for Model {
    /// An empty 80×24 list whose fetcher reports no pages; starts the
    /// activity indicator.
    fn init() -> (Self, Option<Cmd>) {
        let model = Self::new(PassthroughCells, NoMorePages, 80, 24);
        let cmd = model.tick();
        (model, Some(cmd))
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        self.update(msg)
    }

    fn view(&self) -> String {
        self.view()
    }
}
