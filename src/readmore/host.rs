//! Row-level change notifications.
//!
//! The list renders itself, but applications that mirror it elsewhere (a
//! second renderer, an accessibility tree, a test recorder) need to hear
//! about every structural change in the same terms a table view uses: full
//! reloads, inserts, deletes, in-place reloads and scroll requests. A
//! [`ListHost`] receives those changes in the order they happen, after the
//! list's own counts were updated, so `number_of_rows` already reflects the
//! change when `apply` runs.

use super::types::IndexPath;

/// Animation requested for a row change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAnimation {
    /// Change appears immediately.
    None,
    /// Row fades in or out.
    Fade,
}

/// Where a scrolled-to row should end up in the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollPosition {
    /// Row at the top edge.
    Top,
    /// Row at the bottom edge.
    Bottom,
}

/// One structural change to the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowChange {
    /// Every section must be re-queried.
    ReloadData,
    /// Rows were inserted at these positions.
    InsertRows {
        /// Positions of the new rows.
        paths: Vec<IndexPath>,
        /// Requested animation.
        animation: RowAnimation,
    },
    /// Rows at these positions were removed.
    DeleteRows {
        /// Positions of the removed rows.
        paths: Vec<IndexPath>,
        /// Requested animation.
        animation: RowAnimation,
    },
    /// Rows at these positions must be rendered again.
    ReloadRows {
        /// Positions to refresh.
        paths: Vec<IndexPath>,
        /// Requested animation.
        animation: RowAnimation,
    },
    /// The viewport moved to show this row.
    ScrollTo {
        /// Target row.
        path: IndexPath,
        /// Where the row was placed.
        position: ScrollPosition,
    },
}

impl RowChange {
    /// Net number of rows this change adds to `section`; `None` for full
    /// reloads, which invalidate every count.
    pub fn row_delta(&self, section: usize) -> Option<isize> {
        let count = |paths: &[IndexPath]| paths.iter().filter(|p| p.section == section).count();
        match self {
            RowChange::ReloadData => None,
            RowChange::InsertRows { paths, .. } => Some(count(paths) as isize),
            RowChange::DeleteRows { paths, .. } => Some(-(count(paths) as isize)),
            RowChange::ReloadRows { .. } | RowChange::ScrollTo { .. } => Some(0),
        }
    }
}

/// Observer of structural list changes.
pub trait ListHost {
    /// Called once per change.
    fn apply(&mut self, change: &RowChange);
}

impl<F> ListHost for F
where
    F: FnMut(&RowChange),
{
    fn apply(&mut self, change: &RowChange) {
        self(change)
    }
}

/// Contiguous run of content rows `start..end`.
pub(super) fn content_paths(start: usize, end: usize) -> Vec<IndexPath> {
    (start..end).map(IndexPath::content).collect()
}
