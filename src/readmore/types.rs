//! Core types and collaborator traits for the read-more list.
//!
//! The list talks to the embedding application through four small traits:
//! - `CellFactory`: configures the cell for a paginated row
//! - `PageFetcher`: loads the next page in the background
//! - `SelectionSink`: receives selected row indices
//! - `ListHost` (see `host`): observes row insertions, deletions and reloads
//!
//! Each trait has a blanket implementation for plain closures, so simple
//! screens can pass a closure while tests substitute hand-written fakes.

use bubbletea_rs::Cmd;
use lipgloss_extras::prelude::*;
use std::fmt;
use std::future::Future;
use std::pin::Pin;

/// Section holding pinned rows followed by paginated rows.
pub const CONTENT_SECTION: usize = 0;

/// Section holding the single footer row.
pub const FOOTER_SECTION: usize = 1;

/// Position of a row: a section and a row within that section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IndexPath {
    /// Section index, [`CONTENT_SECTION`] or [`FOOTER_SECTION`].
    pub section: usize,
    /// Row within the section.
    pub row: usize,
}

impl IndexPath {
    /// Creates an index path.
    pub const fn new(section: usize, row: usize) -> Self {
        Self { section, row }
    }

    /// A row in the content section.
    pub const fn content(row: usize) -> Self {
        Self::new(CONTENT_SECTION, row)
    }

    /// The footer row.
    pub const fn footer() -> Self {
        Self::new(FOOTER_SECTION, 0)
    }

    /// Whether this is the footer row's section.
    pub fn is_footer(&self) -> bool {
        self.section == FOOTER_SECTION
    }
}

impl fmt::Display for IndexPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.section, self.row)
    }
}

/// Visible state of the footer row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FooterState {
    /// No footer row; the list is fully loaded.
    Hidden,
    /// Footer shows the activity indicator and loads on display.
    Loading,
    /// Footer shows the retry button; nothing loads until retry.
    RetryVisible,
}

/// Where the list stands in its fetch cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchPhase {
    /// Footer hidden and nothing in flight.
    Idle,
    /// A page fetch has been issued and has not been applied yet.
    Fetching,
    /// Footer shown; a fetch starts as soon as it is displayed.
    AwaitingDisplay,
    /// Retry button shown; waits for the user.
    RetryVisible,
}

/// Result of one page fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Page {
    /// Number of new items now available.
    pub read_count: usize,
    /// Whether more items remain after this page.
    pub has_next: bool,
}

impl Page {
    /// Creates a page result.
    pub const fn new(read_count: usize, has_next: bool) -> Self {
        Self {
            read_count,
            has_next,
        }
    }

    /// A page with no items and nothing after it.
    pub const fn end() -> Self {
        Self::new(0, false)
    }
}

/// The visual representation of one row.
///
/// Pinned rows are fully formed cells owned by the application. Paginated
/// rows start from a template that carries the row's cursor and selection
/// state and are filled in by the [`CellFactory`].
#[derive(Debug, Clone, Default)]
pub struct Cell {
    /// Text of the row; may span several lines.
    pub content: String,
    /// Style applied to the content.
    pub style: Style,
    /// The cursor is on this row.
    pub highlighted: bool,
    /// The row was selected and has not been cleared yet.
    pub selected: bool,
}

impl Cell {
    /// Creates a cell with the given content and no style.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    /// Replaces the content.
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Sets the style.
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Renders the content with the cell's style.
    pub fn render(&self) -> String {
        self.style.render(&self.content)
    }

    /// Height of the rendered cell in terminal lines; at least one.
    pub fn height(&self) -> usize {
        self.render().lines().count().max(1)
    }
}

/// Configures the cell for a paginated row.
///
/// Called once per row render with a template cell and the row's index among
/// the paginated rows (pinned rows are not counted). Implementations should
/// only configure the cell.
pub trait CellFactory {
    /// Returns the configured cell for paginated row `row`.
    fn configure(&self, cell: Cell, row: usize) -> Cell;
}

impl<F> CellFactory for F
where
    F: Fn(Cell, usize) -> Cell,
{
    fn configure(&self, cell: Cell, row: usize) -> Cell {
        self(cell, row)
    }
}

/// Future returned by a [`PageFetcher`].
pub type FetchFuture = Pin<Box<dyn Future<Output = Page> + Send>>;

/// Loads the page that follows `current_count` already loaded items.
///
/// `fetch` is invoked inside the background command, never on the UI loop,
/// and its future may complete on any executor thread. A failed load is
/// reported as a page with `read_count == 0`; the application decides
/// whether to call `show_retry_button`.
pub trait PageFetcher: Send + Sync {
    /// Starts loading the next page.
    fn fetch(&self, current_count: usize) -> FetchFuture;
}

impl<F, Fut> PageFetcher for F
where
    F: Fn(usize) -> Fut + Send + Sync,
    Fut: Future<Output = Page> + Send + 'static,
{
    fn fetch(&self, current_count: usize) -> FetchFuture {
        Box::pin(self(current_count))
    }
}

/// Receives the row index of every selection.
pub trait SelectionSink {
    /// Called with the selected row's index within its section.
    fn on_select(&self, row: usize) -> Option<Cmd>;
}

impl<F> SelectionSink for F
where
    F: Fn(usize) -> Option<Cmd>,
{
    fn on_select(&self, row: usize) -> Option<Cmd> {
        self(row)
    }
}

/// Returns the template unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughCells;

impl CellFactory for PassthroughCells {
    fn configure(&self, cell: Cell, _row: usize) -> Cell {
        cell
    }
}

/// Reports an empty last page right away.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoMorePages;

impl PageFetcher for NoMorePages {
    fn fetch(&self, _current_count: usize) -> FetchFuture {
        Box::pin(async { Page::end() })
    }
}
