//! View rendering for the read-more list.
//!
//! Rows are drawn with a two-column gutter that marks the cursor. The footer
//! is drawn centred without a gutter and shows either the retry button or
//! the activity indicator followed by the loading text.

use super::error::ReadMoreError;
use super::style::{CURSOR_GUTTER, PLAIN_GUTTER};
use super::types::{FooterState, IndexPath};
use super::Model;
use unicode_width::UnicodeWidthStr;

impl Model {
    /// Renders one row exactly as it appears on screen.
    pub(super) fn render_row(&self, path: IndexPath) -> Result<String, ReadMoreError> {
        let cell = self.cell_for_row(path)?;
        if path.is_footer() {
            return Ok(cell.content);
        }

        let mut content = cell.render();
        if cell.selected {
            content = self.styles.selected_row.render(&content);
        }
        if cell.highlighted {
            content = self.styles.cursor_row.render(&content);
        }
        let gutter = if cell.highlighted {
            self.styles.cursor_gutter.render(CURSOR_GUTTER)
        } else {
            PLAIN_GUTTER.to_string()
        };

        let lines: Vec<String> = content
            .lines()
            .map(|line| format!("{gutter}{line}"))
            .collect();
        if lines.is_empty() {
            return Ok(gutter);
        }
        Ok(lines.join("\n"))
    }

    /// Footer text for the current footer state.
    pub(super) fn footer_content(&self, focused: bool) -> String {
        match self.footer_state() {
            FooterState::RetryVisible => {
                let label = self.config.retry.label();
                let style = if focused {
                    &self.styles.retry_button_focused
                } else {
                    &self.styles.retry_button
                };
                // the button style pads one column on each side
                self.centered(&style.render(&label), label.width() + 2)
            }
            _ => {
                let frame = self.activity.frame();
                let text = &self.config.loading_text;
                let plain_width = frame.width() + 1 + text.width();
                let rendered = format!(
                    "{} {}",
                    self.activity.view(),
                    self.styles.loading_text.render(text)
                );
                self.centered(&rendered, plain_width)
            }
        }
    }

    fn centered(&self, rendered: &str, plain_width: usize) -> String {
        let pad = self.width.saturating_sub(plain_width) / 2;
        format!("{}{}", " ".repeat(pad), rendered)
    }

    /// Compact help for the bindings that apply right now.
    pub fn help_view(&self) -> String {
        self.keymap
            .short_help_for(self.footer_state())
            .into_iter()
            .filter(|b| b.enabled())
            .map(|b| format!("{} {}", b.help().key, b.help().desc))
            .collect::<Vec<_>>()
            .join(" • ")
    }

    /// Renders the rows in the viewport, cut to the available height.
    pub fn view(&self) -> String {
        let mut lines = Vec::new();
        for (_, rendered) in self.layout_rows() {
            lines.extend(rendered.lines().map(str::to_string));
        }
        lines.truncate(self.height);
        lines.join("\n")
    }
}
