#![warn(missing_docs)]

//! # readmore-widgets
//!
//! An infinite-scroll list component for [bubbletea-rs](https://github.com/joshka/bubbletea-rs)
//! terminal applications.
//!
//! ## Overview
//!
//! The [`readmore`] list shows a fixed set of pinned rows, then the rows
//! loaded so far, then a footer row. When the footer scrolls into view the
//! list asks the application for the next page in the background and appends
//! the result; when nothing is left the footer disappears. If loading fails
//! the application shows a retry button in the footer instead.
//!
//! Like the other bubbletea-rs components it follows the Elm Architecture:
//! `update()` takes messages and may return a command, `view()` renders a
//! string.
//!
//! ## Modules
//!
//! - [`readmore`]: the paginated list
//! - [`activity`]: the animated indicator drawn in the footer while loading
//! - [`key`]: key bindings with help text
//!
//! ## Integration with bubbletea-rs
//!
//! ```rust
//! use readmore_widgets::prelude::*;
//! use bubbletea_rs::{Cmd, Model, Msg};
//!
//! struct App {
//!     list: ReadMoreList,
//! }
//!
//! impl Model for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let list = ReadMoreList::new(
//!             |cell: Cell, row: usize| cell.with_content(format!("row {row}")),
//!             |current: usize| async move { Page::new(20, current < 200) },
//!             80,
//!             24,
//!         );
//!         // pages start loading once the first window size arrives
//!         let cmd = list.tick();
//!         (Self { list }, Some(cmd))
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         self.list.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         self.list.view()
//!     }
//! }
//! ```

pub mod activity;
pub mod key;
pub mod readmore;

use bubbletea_rs::Cmd;

/// Focus management shared by interactive components.
///
/// A focused component receives keyboard input and shows its active state;
/// a blurred one renders as inactive.
///
/// ```rust
/// use readmore_widgets::prelude::*;
///
/// let mut list = ReadMoreList::new(PassthroughCells, NoMorePages, 80, 24);
/// list.blur();
/// assert!(!list.focused());
/// list.focus();
/// assert!(list.focused());
/// ```
pub trait Component {
    /// Focuses the component. May return a command, e.g. to start a timer.
    fn focus(&mut self) -> Option<Cmd>;

    /// Removes focus from the component.
    fn blur(&mut self);

    /// Whether the component is focused.
    fn focused(&self) -> bool;
}

pub use activity::Model as ActivityIndicator;
pub use key::{Binding, KeyMap, KeyPress};
pub use readmore::Model as ReadMoreList;

/// Commonly used types in one import.
pub mod prelude {
    pub use crate::activity::Model as ActivityIndicator;
    pub use crate::key::{Binding, KeyMap, KeyPress};
    pub use crate::readmore::{
        Cell, CellFactory, Config, FetchPhase, FooterState, IndexPath, ListHost, NoMorePages,
        Page, PageFetcher, PageLoadedMsg, PassthroughCells, ReadMoreError, ReadMoreKeyMap,
        ReadMoreStyles, RetryAffordance, RowAnimation, RowChange, ScrollPosition, SelectionSink,
    };
    pub use crate::readmore::Model as ReadMoreList;
    pub use crate::Component;
}
