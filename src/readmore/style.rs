//! Styles for the read-more list.
//!
//! All defaults use `AdaptiveColor`, so they read well on light and dark
//! terminals. Fields can be replaced individually:
//!
//! ```rust
//! use readmore_widgets::readmore::ReadMoreStyles;
//! use lipgloss_extras::prelude::*;
//!
//! let mut styles = ReadMoreStyles::default();
//! styles.retry_button = Style::new().bold(true);
//! ```

use lipgloss_extras::prelude::*;

/// Gutter drawn before the row under the cursor.
pub const CURSOR_GUTTER: &str = "│ ";

/// Gutter drawn before every other row.
pub const PLAIN_GUTTER: &str = "  ";

/// Visual styling of the list.
#[derive(Debug, Clone)]
pub struct ReadMoreStyles {
    /// Row under the cursor.
    pub cursor_row: Style,
    /// Row selected and not yet cleared.
    pub selected_row: Style,
    /// Gutter of the row under the cursor.
    pub cursor_gutter: Style,
    /// Activity indicator frames.
    pub activity: Style,
    /// Text next to the activity indicator.
    pub loading_text: Style,
    /// Retry button.
    pub retry_button: Style,
    /// Retry button while the cursor is on the footer.
    pub retry_button_focused: Style,
}

impl ReadMoreStyles {
    /// Styles without colours or attributes, useful for snapshot-style
    /// assertions.
    pub fn plain() -> Self {
        Self {
            cursor_row: Style::new(),
            selected_row: Style::new(),
            cursor_gutter: Style::new(),
            activity: Style::new(),
            loading_text: Style::new(),
            retry_button: Style::new(),
            retry_button_focused: Style::new(),
        }
    }
}

impl Default for ReadMoreStyles {
    fn default() -> Self {
        let accent = AdaptiveColor {
            Light: "#EE6FF8",
            Dark: "#EE6FF8",
        };
        let subdued = AdaptiveColor {
            Light: "#9B9B9B",
            Dark: "#5C5C5C",
        };

        Self {
            cursor_row: Style::new().foreground(AdaptiveColor {
                Light: "#1a1a1a",
                Dark: "#dddddd",
            }),
            selected_row: Style::new().bold(true),
            cursor_gutter: Style::new().foreground(accent.clone()),
            activity: Style::new().foreground(AdaptiveColor {
                Light: "#8E8E8E",
                Dark: "#747373",
            }),
            loading_text: Style::new().foreground(subdued),
            retry_button: Style::new()
                .foreground(Color::from("230"))
                .background(Color::from("62"))
                .padding(0, 1, 0, 1),
            retry_button_focused: Style::new()
                .foreground(Color::from("230"))
                .background(accent)
                .padding(0, 1, 0, 1),
        }
    }
}
