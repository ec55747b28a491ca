//! The fetch cycle: issuing page loads, applying results, and the footer.
//!
//! A fetch is a two-stage task. [`Model::read_more`] captures the current
//! counts and returns a `Cmd` that calls the [`PageFetcher`] on the runtime's
//! executor; the future resolves to a [`PageLoadedMsg`], and `update` applies
//! it on the UI loop. Nothing in the background touches the model.
//!
//! Three checks keep late results harmless:
//! - the message carries the list id, so other lists ignore it
//! - it carries the generation, which `refresh` and `clear_data` bump
//! - the command holds a weak handle to the list and yields no message at
//!   all once the list has been dropped
//!
//! [`PageFetcher`]: super::types::PageFetcher

use super::host::{content_paths, RowAnimation, RowChange, ScrollPosition};
use super::types::{Cell, IndexPath, Page, FOOTER_SECTION};
use super::Model;
use bubbletea_rs::{Cmd, Msg};
use std::sync::Arc;
use tracing::debug;

/// Result of a page fetch, delivered back to the list that issued it.
#[derive(Debug, Clone)]
pub struct PageLoadedMsg {
    /// Id of the issuing list.
    pub id: i64,
    /// What the fetcher returned.
    pub page: Page,
    generation: u64,
    current_count: usize,
    current_total: usize,
    reload: bool,
}

impl Model {
    /// Empties the list and shows the activity indicator right away.
    ///
    /// Resets the paginated rows to zero, forgets any pending fetch, reloads
    /// everything and scrolls to the footer; the footer coming into view
    /// requests the first page.
    pub fn clear_data(&mut self) -> Option<Cmd> {
        debug!(list = self.id, "clearing data");
        self.reset_pagination();
        self.reload_data();
        self.update_footer(true);
        if self.number_of_rows(FOOTER_SECTION) > 0 {
            return self
                .scroll_to_row(IndexPath::footer(), ScrollPosition::Top)
                .ok()
                .flatten();
        }
        self.sync_visible_rows(true)
    }

    /// Reloads from the first page, replacing all rows when it arrives.
    ///
    /// The paginated rows reset to zero and the footer shows the activity
    /// indicator while the first page loads. Reaching the footer during the
    /// reload does not start a second fetch.
    pub fn refresh(&mut self) -> Option<Cmd> {
        debug!(list = self.id, "refreshing");
        self.reset_pagination();
        self.reload_data();
        self.update_footer(true);
        self.clamp_positions();
        let cmd = self.read_more(true);
        self.sync_visible_rows(false);
        cmd
    }

    /// Replaces the footer's activity indicator with the retry button.
    ///
    /// The loaded rows stay as they are. The footer no longer loads when
    /// displayed until [`retry`](Self::retry) is called.
    pub fn show_retry_button(&mut self) {
        debug!(list = self.id, "showing retry button");
        self.shows_retry = true;
        self.reload_data();
        self.sync_visible_rows(false);
    }

    /// Activates the retry button: hides it and requests the next page.
    /// Does nothing unless the retry button is on screen.
    ///
    /// A fetch still in flight is abandoned; its page is dropped when it
    /// arrives. The row counts are untouched, so the new request asks for
    /// the same page.
    pub fn retry(&mut self) -> Option<Cmd> {
        if !self.shows_retry || self.hides_footer {
            return None;
        }
        debug!(list = self.id, "retry activated");
        self.shows_retry = false;
        self.generation += 1;
        self.in_flight = false;
        self.read_more(false)
    }

    /// Replaces the pinned rows and reloads the list.
    pub fn set_pinned_rows(&mut self, rows: Vec<Cell>) -> Option<Cmd> {
        self.pinned = rows;
        self.reload_data();
        self.clamp_positions();
        self.sync_visible_rows(true)
    }

    /// Issues a fetch for the page after the rows loaded so far.
    pub(super) fn read_more(&mut self, reload: bool) -> Option<Cmd> {
        if self.in_flight && self.config.exclusive_fetch {
            debug!(list = self.id, "fetch already in flight, not starting another");
            return None;
        }

        let id = self.id;
        let generation = self.generation;
        let current_count = self.main_row_count;
        let current_total = self.all_row_count();
        let fetcher = Arc::clone(&self.fetcher);
        let alive = Arc::downgrade(&self.alive);
        self.in_flight = true;
        debug!(list = id, generation, current_count, reload, "fetching page");

        Some(Box::pin(async move {
            let page = fetcher.fetch(current_count).await;
            // the list may have gone away while the page loaded
            alive.upgrade()?;
            Some(Box::new(PageLoadedMsg {
                id,
                page,
                generation,
                current_count,
                current_total,
                reload,
            }) as Msg)
        }))
    }

    /// Applies a fetch result on the UI loop.
    pub(super) fn apply_page(&mut self, msg: &PageLoadedMsg) -> Option<Cmd> {
        if msg.id != self.id {
            return None;
        }
        if msg.generation != self.generation {
            debug!(
                list = self.id,
                stale = msg.generation,
                current = self.generation,
                "dropping page from before the last reset"
            );
            return None;
        }

        self.in_flight = false;
        let previous = self.main_row_count;
        self.main_row_count = msg.current_count + msg.page.read_count;
        debug!(
            list = self.id,
            read_count = msg.page.read_count,
            has_next = msg.page.has_next,
            main_rows = self.main_row_count,
            "page loaded"
        );

        if msg.reload {
            self.reload_data();
        } else {
            self.apply_row_delta(previous, msg.current_total);
        }

        self.update_footer(msg.page.has_next);
        self.clamp_positions();
        self.sync_visible_rows(true)
    }

    /// Inserts (or, after overlapping fetches, deletes) the rows between the
    /// previous and the new paginated count, without animation.
    fn apply_row_delta(&mut self, previous: usize, current_total: usize) {
        let pinned = self.pinned.len();
        let new_count = self.main_row_count;
        let start = pinned + previous;
        let end = pinned + new_count;
        if start != current_total {
            debug!(
                list = self.id,
                expected = current_total,
                actual = start,
                "overlapping fetch, inserting at the current end"
            );
        }

        self.animations_enabled = false;
        if new_count > previous {
            self.emit(RowChange::InsertRows {
                paths: content_paths(start, end),
                animation: RowAnimation::None,
            });
        } else if new_count < previous {
            self.emit(RowChange::DeleteRows {
                paths: content_paths(end, start),
                animation: RowAnimation::None,
            });
        }
        self.animations_enabled = true;
    }

    /// Shows or hides the footer row. Showing an already visible footer
    /// reloads it in place, which makes it count as newly displayed.
    pub(super) fn update_footer(&mut self, show: bool) {
        let footer = IndexPath::footer();
        match (show, self.hides_footer) {
            (true, true) => {
                debug!(list = self.id, "footer shown");
                self.animations_enabled = false;
                self.hides_footer = false;
                self.emit(RowChange::InsertRows {
                    paths: vec![footer],
                    animation: RowAnimation::Fade,
                });
                self.animations_enabled = true;
            }
            (false, false) => {
                debug!(list = self.id, "footer hidden");
                self.hides_footer = true;
                self.emit(RowChange::DeleteRows {
                    paths: vec![footer],
                    animation: RowAnimation::Fade,
                });
            }
            (true, false) => {
                self.animations_enabled = false;
                self.emit(RowChange::ReloadRows {
                    paths: vec![footer],
                    animation: RowAnimation::Fade,
                });
                self.animations_enabled = true;
                self.displayed.remove(&footer);
            }
            (false, true) => {}
        }
    }

    fn reset_pagination(&mut self) {
        self.main_row_count = 0;
        self.shows_retry = false;
        self.generation += 1;
        self.in_flight = false;
    }

    /// Full reload: every row counts as newly displayed afterwards.
    fn reload_data(&mut self) {
        self.emit(RowChange::ReloadData);
        self.displayed.clear();
    }

    /// Reports a change to the host, dropping animations while they are
    /// suppressed.
    pub(super) fn emit(&mut self, change: RowChange) {
        let change = if self.animations_enabled {
            change
        } else {
            without_animation(change)
        };
        if let Some(host) = self.host.as_mut() {
            host.apply(&change);
        }
    }
}

fn without_animation(change: RowChange) -> RowChange {
    match change {
        RowChange::InsertRows { paths, .. } => RowChange::InsertRows {
            paths,
            animation: RowAnimation::None,
        },
        RowChange::DeleteRows { paths, .. } => RowChange::DeleteRows {
            paths,
            animation: RowAnimation::None,
        },
        RowChange::ReloadRows { paths, .. } => RowChange::ReloadRows {
            paths,
            animation: RowAnimation::None,
        },
        other => other,
    }
}
