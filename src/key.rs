//! Type-safe key bindings with help text.
//!
//! A [`Binding`] groups one or more key presses under a single action and
//! carries the short help text shown to users. Components expose their
//! bindings through the [`KeyMap`] trait so help views can be generated from
//! the same definitions that drive input handling.
//!
//! ```rust
//! use readmore_widgets::key::Binding;
//! use crossterm::event::{KeyCode, KeyModifiers};
//!
//! let retry = Binding::new(vec![KeyCode::Char('r')]).with_help("r", "retry");
//! let save = Binding::new(vec![(KeyCode::Char('s'), KeyModifiers::CONTROL)])
//!     .with_help("ctrl+s", "save");
//! assert_eq!(retry.help().key, "r");
//! assert!(save.enabled());
//! ```

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// A single key press: a key code plus the modifiers that must be held.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    /// The key code.
    pub code: KeyCode,
    /// Modifiers that must match exactly.
    pub modifiers: KeyModifiers,
}

impl From<KeyCode> for KeyPress {
    fn from(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }
}

impl From<(KeyCode, KeyModifiers)> for KeyPress {
    fn from((code, modifiers): (KeyCode, KeyModifiers)) -> Self {
        Self { code, modifiers }
    }
}

/// Help text for a binding, e.g. `"↑/k"` and `"up"`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// The key label.
    pub key: String,
    /// What the key does.
    pub desc: String,
}

/// A set of key presses bound to one action.
#[derive(Debug, Clone)]
pub struct Binding {
    keys: Vec<KeyPress>,
    help: Help,
    enabled: bool,
}

impl Binding {
    /// Creates an enabled binding for the given keys.
    pub fn new<K: Into<KeyPress>>(keys: Vec<K>) -> Self {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            help: Help::default(),
            enabled: true,
        }
    }

    /// Sets the help text.
    pub fn with_help(mut self, key: &str, desc: &str) -> Self {
        self.help = Help {
            key: key.to_string(),
            desc: desc.to_string(),
        };
        self
    }

    /// Enables or disables the binding. Disabled bindings never match and
    /// are left out of help views.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Whether the binding is enabled.
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// The bound key presses.
    pub fn keys(&self) -> &[KeyPress] {
        &self.keys
    }

    /// The help text.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// Reports whether `msg` is one of this binding's key presses.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        self.enabled
            && self
                .keys
                .iter()
                .any(|k| k.code == msg.key && k.modifiers == msg.modifiers)
    }
}

/// Implemented by components that expose key bindings for help views.
pub trait KeyMap {
    /// Bindings for the compact, single-line help view.
    fn short_help(&self) -> Vec<&Binding>;

    /// All bindings, grouped into columns.
    fn full_help(&self) -> Vec<Vec<&Binding>>;
}
