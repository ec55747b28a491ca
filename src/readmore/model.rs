//! The read-more list model: construction, configuration and row composition.
//!
//! Rows live in two sections. Section 0 holds the pinned rows followed by the
//! paginated rows; section 1 holds the footer row whenever the footer is not
//! hidden. All positions handed to collaborators are `IndexPath`s into this
//! layout.

use super::config::Config;
use super::error::ReadMoreError;
use super::host::ListHost;
use super::keys::ReadMoreKeyMap;
use super::style::ReadMoreStyles;
use super::types::{
    Cell, CellFactory, FetchPhase, FooterState, IndexPath, PageFetcher, SelectionSink,
    CONTENT_SECTION, FOOTER_SECTION,
};
use crate::activity;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

static LAST_ID: AtomicI64 = AtomicI64::new(0);

fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

/// A scrollable list that loads more rows as its footer comes into view.
///
/// The list shows pinned rows first, then the rows loaded so far, then a
/// footer row with either an activity indicator or a retry button. When the
/// footer is displayed the list asks its [`PageFetcher`] for the next page in
/// the background and appends the result when it arrives.
///
/// # Examples
///
/// ```
/// use readmore_widgets::readmore::{Cell, Model, Page};
///
/// let list = Model::new(
///     |cell: Cell, row: usize| cell.with_content(format!("item {row}")),
///     |current: usize| async move { Page::new(20, current < 100) },
///     80,
///     24,
/// )
/// .with_pinned_rows(vec![Cell::new("Inbox")]);
///
/// assert_eq!(list.number_of_rows(0), 1);
/// assert_eq!(list.number_of_rows(1), 1); // footer, waiting to load
/// ```
pub struct Model {
    pub(super) id: i64,

    // Content
    pub(super) pinned: Vec<Cell>,
    pub(super) main_row_count: usize,
    pub(super) factory: Box<dyn CellFactory + Send + Sync>,
    pub(super) fetcher: Arc<dyn PageFetcher>,
    pub(super) selection: Option<Box<dyn SelectionSink + Send + Sync>>,
    pub(super) host: Option<Box<dyn ListHost + Send>>,

    // Appearance
    pub(super) config: Config,
    pub(super) styles: ReadMoreStyles,
    pub(super) keymap: ReadMoreKeyMap,
    pub(super) activity: activity::Model,

    // Footer
    pub(super) hides_footer: bool,
    pub(super) shows_retry: bool,

    // Fetch bookkeeping
    pub(super) generation: u64,
    pub(super) in_flight: bool,
    /// Dropped together with the model; pending fetches hold a weak handle.
    pub(super) alive: Arc<()>,
    pub(super) animations_enabled: bool,

    // Layout
    pub(super) heights: HashMap<IndexPath, usize>,
    pub(super) displayed: HashSet<IndexPath>,
    pub(super) cursor: usize,
    pub(super) viewport_start: usize,
    pub(super) selected: Option<IndexPath>,
    pub(super) focus: bool,
    pub(super) width: usize,
    pub(super) height: usize,
}

impl Model {
    /// Creates a list with no pinned rows and the default configuration.
    ///
    /// The footer starts out visible, so the first page is requested as soon
    /// as the list lays out (on [`start`](Self::start) or the first window
    /// size message).
    pub fn new<C, P>(factory: C, fetcher: P, width: usize, height: usize) -> Self
    where
        C: CellFactory + Send + Sync + 'static,
        P: PageFetcher + 'static,
    {
        Self {
            id: next_id(),
            pinned: Vec::new(),
            main_row_count: 0,
            factory: Box::new(factory),
            fetcher: Arc::new(fetcher),
            selection: None,
            host: None,
            config: Config::default(),
            styles: ReadMoreStyles::default(),
            keymap: ReadMoreKeyMap::default(),
            activity: activity::Model::new(),
            hides_footer: false,
            shows_retry: false,
            generation: 0,
            in_flight: false,
            alive: Arc::new(()),
            animations_enabled: true,
            heights: HashMap::new(),
            displayed: HashSet::new(),
            cursor: 0,
            viewport_start: 0,
            selected: None,
            focus: true,
            width,
            height,
        }
    }

    /// Applies a configuration after validating it.
    pub fn with_config(mut self, config: Config) -> Result<Self, ReadMoreError> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    /// Sets the pinned rows shown above the paginated rows.
    pub fn with_pinned_rows(mut self, rows: Vec<Cell>) -> Self {
        self.pinned = rows;
        self
    }

    /// Sets the receiver of row selections.
    pub fn with_selection_sink<S>(mut self, sink: S) -> Self
    where
        S: SelectionSink + Send + Sync + 'static,
    {
        self.selection = Some(Box::new(sink));
        self
    }

    /// Sets the observer of structural changes.
    pub fn with_host<H>(mut self, host: H) -> Self
    where
        H: ListHost + Send + 'static,
    {
        self.host = Some(Box::new(host));
        self
    }

    /// Sets the styles.
    pub fn with_styles(mut self, styles: ReadMoreStyles) -> Self {
        self.activity.style = styles.activity.clone();
        self.styles = styles;
        self
    }

    /// Sets the key bindings.
    pub fn with_keymap(mut self, keymap: ReadMoreKeyMap) -> Self {
        self.keymap = keymap;
        self
    }

    /// Sets the activity indicator frames.
    pub fn with_activity_frames(mut self, frames: activity::Frames) -> Self {
        self.activity = self.activity.with_frames(frames);
        self
    }

    /// Unique id of this list; page messages carry it.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// The configuration in use.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The pinned rows.
    pub fn pinned_rows(&self) -> &[Cell] {
        &self.pinned
    }

    /// Number of pinned rows.
    pub fn pinned_count(&self) -> usize {
        self.pinned.len()
    }

    /// Number of paginated rows loaded so far.
    pub fn main_row_count(&self) -> usize {
        self.main_row_count
    }

    /// Pinned plus paginated rows.
    pub fn all_row_count(&self) -> usize {
        self.pinned.len() + self.main_row_count
    }

    /// Always two: content and footer.
    pub fn number_of_sections(&self) -> usize {
        2
    }

    /// Rows in `section`; unknown sections have none.
    pub fn number_of_rows(&self, section: usize) -> usize {
        match section {
            CONTENT_SECTION => self.all_row_count(),
            FOOTER_SECTION if !self.hides_footer => 1,
            _ => 0,
        }
    }

    /// What the footer currently shows.
    pub fn footer_state(&self) -> FooterState {
        if self.hides_footer {
            FooterState::Hidden
        } else if self.shows_retry {
            FooterState::RetryVisible
        } else {
            FooterState::Loading
        }
    }

    /// Where the list stands in its fetch cycle.
    pub fn fetch_phase(&self) -> FetchPhase {
        match self.footer_state() {
            FooterState::RetryVisible => FetchPhase::RetryVisible,
            _ if self.in_flight => FetchPhase::Fetching,
            FooterState::Loading => FetchPhase::AwaitingDisplay,
            FooterState::Hidden => FetchPhase::Idle,
        }
    }

    /// Whether a page fetch has been issued and not yet applied.
    pub fn is_fetching(&self) -> bool {
        self.in_flight
    }

    /// Row selected and not yet cleared by focusing the list.
    pub fn selected(&self) -> Option<IndexPath> {
        self.selected
    }

    /// Returns the cell for `path`.
    ///
    /// Pinned rows come back as stored; paginated rows are built by the
    /// [`CellFactory`] from a template carrying cursor and selection state;
    /// the footer cell holds the retry button or the activity indicator.
    pub fn cell_for_row(&self, path: IndexPath) -> Result<Cell, ReadMoreError> {
        self.check_path(path)?;
        let mut template = Cell {
            highlighted: self.focus && self.path_at(self.cursor) == Some(path),
            selected: self.selected == Some(path),
            ..Cell::default()
        };

        if path.is_footer() {
            template.content = self.footer_content(template.highlighted);
            return Ok(template);
        }

        match self.pinned.get(path.row) {
            Some(pinned) => Ok(Cell {
                highlighted: template.highlighted,
                selected: template.selected,
                ..pinned.clone()
            }),
            None => Ok(self
                .factory
                .configure(template, path.row - self.pinned.len())),
        }
    }

    pub(super) fn check_path(&self, path: IndexPath) -> Result<(), ReadMoreError> {
        if path.section >= self.number_of_sections() {
            return Err(ReadMoreError::UnknownSection(path.section));
        }
        let rows = self.number_of_rows(path.section);
        if path.row >= rows {
            return Err(ReadMoreError::RowOutOfBounds { path, rows });
        }
        Ok(())
    }

    /// Rows across both sections, in display order.
    pub(super) fn flat_len(&self) -> usize {
        self.all_row_count() + self.number_of_rows(FOOTER_SECTION)
    }

    pub(super) fn path_at(&self, flat: usize) -> Option<IndexPath> {
        let all = self.all_row_count();
        if flat < all {
            Some(IndexPath::content(flat))
        } else if flat == all && !self.hides_footer {
            Some(IndexPath::footer())
        } else {
            None
        }
    }

    pub(super) fn flat_index(&self, path: IndexPath) -> Result<usize, ReadMoreError> {
        self.check_path(path)?;
        Ok(match path.section {
            CONTENT_SECTION => path.row,
            _ => self.all_row_count(),
        })
    }
}
