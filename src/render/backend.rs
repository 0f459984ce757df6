use crate::foundation::core::Canvas;
use crate::foundation::error::{PizzaError, PizzaResult};

/// A rendered frame as RGBA8 pixels.
///
/// Frames handed to filters and sinks are **straight alpha**; the `premultiplied` flag keeps
/// that explicit at API boundaries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether the `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// Fully transparent straight-alpha frame.
    pub fn transparent(canvas: Canvas) -> Self {
        Self {
            width: canvas.width,
            height: canvas.height,
            data: vec![0; canvas.rgba_len()],
            premultiplied: false,
        }
    }

    /// Wrap straight-alpha bytes, checking the length against the dimensions.
    pub fn from_straight(width: u32, height: u32, data: Vec<u8>) -> PizzaResult<Self> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|v| v.checked_mul(4))
            .ok_or_else(|| PizzaError::render("frame buffer size overflow"))?;
        if data.len() != expected {
            return Err(PizzaError::render(format!(
                "frame buffer is {} bytes, expected {expected} for {width}x{height}",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
            premultiplied: false,
        })
    }

    /// Canvas describing this frame's dimensions.
    pub fn canvas(&self) -> Canvas {
        Canvas {
            width: self.width,
            height: self.height,
        }
    }

    /// Straight RGBA of the pixel at `(x, y)`.
    ///
    /// Panics when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let idx = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        [
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
            self.data[idx + 3],
        ]
    }
}
