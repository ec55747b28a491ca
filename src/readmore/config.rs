//! Construction-time configuration for the read-more list.
//!
//! Everything here is fixed when the list is built: retry button label and
//! icon, loading text, the height estimate for rows never displayed, and
//! whether overlapping fetches are allowed.
//!
//! ```rust
//! use readmore_widgets::readmore::{Config, RetryAffordance};
//!
//! let config = Config::default()
//!     .with_retry(RetryAffordance::new().with_text("Try again").with_icon("↻"))
//!     .with_loading_text("Fetching…");
//! assert!(config.validate().is_ok());
//! ```

use super::error::ReadMoreError;

/// Height reported for a row that has never been displayed.
pub const DEFAULT_ESTIMATED_ROW_HEIGHT: usize = 50;

/// Label used when no retry text is configured.
pub const DEFAULT_RETRY_TEXT: &str = "Retry";

/// Label and icon of the footer's retry button.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RetryAffordance {
    /// Button text; [`DEFAULT_RETRY_TEXT`] when unset.
    pub text: Option<String>,
    /// Glyph drawn before the text.
    pub icon: Option<String>,
}

impl RetryAffordance {
    /// An affordance using the default label and no icon.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the label.
    pub fn with_text(mut self, text: &str) -> Self {
        self.text = Some(text.to_string());
        self
    }

    /// Sets the icon.
    pub fn with_icon(mut self, icon: &str) -> Self {
        self.icon = Some(icon.to_string());
        self
    }

    /// The button label as displayed, icon first.
    pub fn label(&self) -> String {
        let text = self.text.as_deref().unwrap_or(DEFAULT_RETRY_TEXT);
        match &self.icon {
            Some(icon) if !icon.is_empty() => format!("{icon} {text}"),
            _ => text.to_string(),
        }
    }
}

/// Read-more list configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Retry button appearance.
    pub retry: RetryAffordance,
    /// Text next to the activity indicator.
    pub loading_text: String,
    /// Estimate for rows without a cached height.
    pub estimated_row_height: usize,
    /// Refuse to start a fetch while another one is in flight.
    pub exclusive_fetch: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            retry: RetryAffordance::default(),
            loading_text: "Loading…".to_string(),
            estimated_row_height: DEFAULT_ESTIMATED_ROW_HEIGHT,
            exclusive_fetch: true,
        }
    }
}

impl Config {
    /// Sets the retry button appearance.
    pub fn with_retry(mut self, retry: RetryAffordance) -> Self {
        self.retry = retry;
        self
    }

    /// Sets the loading text.
    pub fn with_loading_text(mut self, text: &str) -> Self {
        self.loading_text = text.to_string();
        self
    }

    /// Sets the height estimate.
    pub fn with_estimated_row_height(mut self, height: usize) -> Self {
        self.estimated_row_height = height;
        self
    }

    /// Allows or forbids overlapping fetches.
    pub fn with_exclusive_fetch(mut self, exclusive: bool) -> Self {
        self.exclusive_fetch = exclusive;
        self
    }

    /// Checks the configuration for values the list cannot work with.
    pub fn validate(&self) -> Result<(), ReadMoreError> {
        if self.estimated_row_height == 0 {
            return Err(ReadMoreError::InvalidConfig(
                "estimated_row_height must be at least 1".to_string(),
            ));
        }
        if matches!(&self.retry.text, Some(t) if t.trim().is_empty()) {
            return Err(ReadMoreError::InvalidConfig(
                "retry text must not be blank".to_string(),
            ));
        }
        Ok(())
    }
}
