//! Activity indicator shown in the footer while a page is loading.
//!
//! The indicator cycles through a set of frames, one per [`TickMsg`]. Every
//! instance has its own id so ticks addressed to one indicator never advance
//! another, and a tag so that at most one tick loop runs per indicator.
//!
//! ```rust
//! use readmore_widgets::activity::{Model, DOTS};
//!
//! let mut indicator = Model::new().with_frames(DOTS.clone());
//! let first = indicator.view();
//! indicator.update(Box::new(indicator.tick_msg()));
//! assert_ne!(indicator.view(), first);
//! ```

use bubbletea_rs::{tick as bubbletea_tick, Cmd, Msg};
use lipgloss_extras::prelude::*;
use once_cell::sync::Lazy;
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;

static LAST_ID: AtomicI64 = AtomicI64::new(0);

fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

/// Animation frames and the delay between them.
#[derive(Debug, Clone, PartialEq)]
pub struct Frames {
    /// Frames to cycle through.
    pub frames: Vec<String>,
    /// Delay between frames.
    pub interval: Duration,
}

impl Frames {
    /// Creates a frame set.
    pub fn new(frames: Vec<String>, interval: Duration) -> Self {
        Self { frames, interval }
    }
}

fn frames(items: &[&str], millis: u64) -> Frames {
    Frames::new(
        items.iter().map(|s| s.to_string()).collect(),
        Duration::from_millis(millis),
    )
}

/// `| / - \`
pub static LINE: Lazy<Frames> = Lazy::new(|| frames(&["|", "/", "-", "\\"], 100));

/// Braille dots, the default footer indicator.
pub static DOTS: Lazy<Frames> = Lazy::new(|| {
    frames(
        &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"],
        83,
    )
});

/// Text ellipsis, for terminals without good unicode coverage.
pub static ELLIPSIS: Lazy<Frames> = Lazy::new(|| frames(&["", ".", "..", "..."], 333));

/// Advances the indicator with the matching id by one frame.
#[derive(Debug, Clone)]
pub struct TickMsg {
    /// Id of the target indicator.
    pub id: i64,
    tag: i64,
}

/// Activity indicator state.
#[derive(Debug, Clone)]
pub struct Model {
    /// Frame set in use.
    pub frames: Frames,
    /// Style applied to the current frame.
    pub style: Style,
    frame: usize,
    id: i64,
    tag: i64,
}

impl Default for Model {
    fn default() -> Self {
        Self::new()
    }
}

impl Model {
    /// Creates an indicator using [`DOTS`].
    pub fn new() -> Self {
        Self {
            frames: DOTS.clone(),
            style: Style::new(),
            frame: 0,
            id: next_id(),
            tag: 0,
        }
    }

    /// Replaces the frame set and rewinds to the first frame.
    pub fn with_frames(mut self, frames: Frames) -> Self {
        self.frames = frames;
        self.frame = 0;
        self
    }

    /// Sets the style.
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Unique id of this indicator.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// A tick message addressed to this indicator.
    pub fn tick_msg(&self) -> TickMsg {
        TickMsg {
            id: self.id,
            tag: self.tag,
        }
    }

    /// Schedules the next frame.
    pub fn tick(&self) -> Cmd {
        let id = self.id;
        let tag = self.tag;
        bubbletea_tick(self.frames.interval, move |_| {
            Box::new(TickMsg { id, tag }) as Msg
        })
    }

    /// Advances one frame on a matching [`TickMsg`] and schedules the next.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        let tick = msg.downcast_ref::<TickMsg>()?;
        if tick.id != self.id || tick.tag != self.tag {
            return None;
        }
        if self.frames.frames.is_empty() {
            return None;
        }
        self.frame = (self.frame + 1) % self.frames.frames.len();
        self.tag += 1;
        Some(self.tick())
    }

    /// The current frame without styling.
    pub fn frame(&self) -> &str {
        self.frames
            .frames
            .get(self.frame)
            .map(String::as_str)
            .unwrap_or("")
    }

    /// The current frame, styled.
    pub fn view(&self) -> String {
        match self.frames.frames.get(self.frame) {
            Some(frame) => self.style.render(frame),
            None => String::new(),
        }
    }
}
