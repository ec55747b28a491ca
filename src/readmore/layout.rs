//! Viewport, cursor and display tracking.
//!
//! The viewport starts at `viewport_start` (a position in display order) and
//! takes rows until the available height is filled; a row that only partly
//! fits still counts as displayed. After every change the list compares the
//! rows on screen with the rows it saw last time: each newly displayed row
//! has its rendered height cached, and a newly displayed footer starts a
//! fetch unless the retry button is showing.
//!
//! A row leaves the "displayed" set when it scrolls out of view, when the
//! whole list reloads, or when it is reloaded in place. The last case is how
//! a footer that never left the screen triggers the next page.

use super::error::ReadMoreError;
use super::host::{RowChange, ScrollPosition};
use super::types::IndexPath;
use super::Model;
use bubbletea_rs::Cmd;
use std::collections::HashSet;
use tracing::trace;

impl Model {
    /// Height hint for `path`: the last rendered height, or the configured
    /// estimate when the row has never been displayed.
    pub fn estimated_height(&self, path: IndexPath) -> usize {
        self.heights
            .get(&path)
            .copied()
            .unwrap_or(self.config.estimated_row_height)
    }

    /// Last rendered height of `path`, if it was ever displayed.
    pub fn cached_height(&self, path: IndexPath) -> Option<usize> {
        self.heights.get(&path).copied()
    }

    /// Current cursor position as an index path.
    pub fn cursor(&self) -> Option<IndexPath> {
        self.path_at(self.cursor)
    }

    /// Rows that are on screen, top to bottom.
    pub fn visible_rows(&self) -> Vec<IndexPath> {
        self.layout_rows().into_iter().map(|(path, _)| path).collect()
    }

    /// Updates the available size.
    pub fn set_size(&mut self, width: usize, height: usize) -> Option<Cmd> {
        self.width = width;
        self.height = height;
        self.sync_viewport_with_cursor();
        self.sync_visible_rows(true)
    }

    /// Lays the list out for the first time, which starts the first fetch
    /// when the footer is on screen.
    pub fn start(&mut self) -> Option<Cmd> {
        self.sync_visible_rows(true)
    }

    /// Scrolls so that `path` sits at the given edge and moves the cursor to
    /// it.
    pub fn scroll_to_row(
        &mut self,
        path: IndexPath,
        position: ScrollPosition,
    ) -> Result<Option<Cmd>, ReadMoreError> {
        let flat = self.flat_index(path)?;
        self.viewport_start = match position {
            ScrollPosition::Top => flat,
            ScrollPosition::Bottom => self.start_for_bottom(flat),
        };
        self.cursor = flat;
        self.emit(RowChange::ScrollTo { path, position });
        Ok(self.sync_visible_rows(true))
    }

    /// First row that lets `flat` end at the bottom edge, measured with
    /// height hints.
    fn start_for_bottom(&self, flat: usize) -> usize {
        let mut used = 0;
        let mut start = flat;
        loop {
            let Some(path) = self.path_at(start) else {
                return flat;
            };
            used += self.estimated_height(path);
            if used >= self.height || start == 0 {
                return start;
            }
            start -= 1;
        }
    }

    /// Rendered rows from `viewport_start` until the height is filled.
    pub(super) fn layout_rows(&self) -> Vec<(IndexPath, String)> {
        let mut rows = Vec::new();
        let mut used = 0;
        let mut flat = self.viewport_start;
        while used < self.height {
            let Some(path) = self.path_at(flat) else {
                break;
            };
            let Ok(rendered) = self.render_row(path) else {
                break;
            };
            used += rendered.lines().count().max(1);
            rows.push((path, rendered));
            flat += 1;
        }
        rows
    }

    /// Diffs the rows on screen against the last pass. Newly displayed rows
    /// get their height cached; a newly displayed footer starts a fetch when
    /// `trigger_fetch` is set and the retry button is not shown.
    pub(super) fn sync_visible_rows(&mut self, trigger_fetch: bool) -> Option<Cmd> {
        let rows = self.layout_rows();
        let mut cmd = None;
        for (path, rendered) in &rows {
            if self.displayed.contains(path) {
                continue;
            }
            let height = rendered.lines().count().max(1);
            trace!(%path, height, "row displayed");
            self.heights.insert(*path, height);
            if path.is_footer() && trigger_fetch && !self.shows_retry {
                cmd = self.read_more(false);
            }
        }
        self.displayed = rows.into_iter().map(|(path, _)| path).collect::<HashSet<_>>();
        cmd
    }

    /// Moves the cursor by `delta` rows, clamped to the list.
    pub(super) fn move_cursor(&mut self, delta: isize) {
        let last = self.flat_len().saturating_sub(1);
        self.cursor = self.cursor.saturating_add_signed(delta).min(last);
        self.sync_viewport_with_cursor();
    }

    pub(super) fn move_cursor_to(&mut self, flat: usize) {
        self.cursor = flat.min(self.flat_len().saturating_sub(1));
        self.sync_viewport_with_cursor();
    }

    /// Rows that fit on one screen starting at the viewport, at least one.
    pub(super) fn rows_per_screen(&self) -> usize {
        self.layout_rows().len().max(1)
    }

    /// Keeps cursor and viewport inside the list after rows disappear.
    pub(super) fn clamp_positions(&mut self) {
        let last = self.flat_len().saturating_sub(1);
        self.cursor = self.cursor.min(last);
        self.viewport_start = self.viewport_start.min(last);
        self.sync_viewport_with_cursor();
    }

    /// Scrolls just enough to bring the cursor row fully into view.
    ///
    /// Walks up from the cursor and stops once a screen is filled, so at
    /// most one screen of rows is rendered however long the list is.
    pub(super) fn sync_viewport_with_cursor(&mut self) {
        if self.cursor <= self.viewport_start {
            self.viewport_start = self.cursor;
            return;
        }
        let mut start = self.cursor;
        let mut used = self.rendered_height(start);
        while start > self.viewport_start {
            let above = self.rendered_height(start - 1);
            if used + above > self.height {
                break;
            }
            used += above;
            start -= 1;
        }
        self.viewport_start = start;
    }

    fn rendered_height(&self, flat: usize) -> usize {
        self.path_at(flat)
            .and_then(|path| self.render_row(path).ok())
            .map_or(0, |rendered| rendered.lines().count().max(1))
    }
}
