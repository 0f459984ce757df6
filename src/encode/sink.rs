use crate::foundation::error::{PizzaError, PizzaResult};
use crate::render::backend::FrameRGBA;

/// Configuration handed to a [`FrameSink`] before the first frame of an export.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SinkConfig {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// Display time of each frame in milliseconds.
    pub frame_delay_ms: u32,
    /// Number of frames that will be pushed.
    pub frame_count: u32,
}

/// Consumer of exported frames.
///
/// `push_frame` is called with strictly increasing indices starting at 0, between one `begin`
/// and one `end`.
pub trait FrameSink: Send {
    /// Called once before any frame.
    fn begin(&mut self, cfg: SinkConfig) -> PizzaResult<()>;
    /// Consume one straight-alpha frame.
    fn push_frame(&mut self, idx: u32, frame: &FrameRGBA) -> PizzaResult<()>;
    /// Called once after the last frame.
    fn end(&mut self) -> PizzaResult<()>;
}

/// Sink that keeps every frame in memory.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    frames: Vec<(u32, FrameRGBA)>,
    finished: bool,
}

impl InMemorySink {
    /// Empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration received in `begin`.
    pub fn config(&self) -> Option<SinkConfig> {
        self.cfg
    }

    /// Captured frames with their indices.
    pub fn frames(&self) -> &[(u32, FrameRGBA)] {
        &self.frames
    }

    /// Whether `end` has been called since the last `begin`.
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> PizzaResult<()> {
        self.cfg = Some(cfg);
        self.frames.clear();
        self.finished = false;
        Ok(())
    }

    fn push_frame(&mut self, idx: u32, frame: &FrameRGBA) -> PizzaResult<()> {
        if self.cfg.is_none() {
            return Err(PizzaError::encode("push_frame called before begin"));
        }
        self.frames.push((idx, frame.clone()));
        Ok(())
    }

    fn end(&mut self) -> PizzaResult<()> {
        self.finished = true;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/sink.rs"]
mod tests;
