use crate::foundation::error::{PizzaError, PizzaResult};

pub use kurbo::{Affine, BezPath, Point, Rect, Vec2};

/// Number of equal angular wedges the shape is divided into.
pub const WEDGE_COUNT: usize = 8;

/// Angular width of one wedge in radians.
pub const WEDGE_ANGLE: f64 = std::f64::consts::TAU / WEDGE_COUNT as f64;

/// Output canvas dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Create a validated canvas. Both sides must be non-zero and fit the rasterizer's `u16`.
    pub fn new(width: u32, height: u32) -> PizzaResult<Self> {
        if width == 0 || height == 0 {
            return Err(PizzaError::validation("canvas dimensions must be > 0"));
        }
        if width > u32::from(u16::MAX) || height > u32::from(u16::MAX) {
            return Err(PizzaError::validation("canvas dimensions must fit in u16"));
        }
        Ok(Self { width, height })
    }

    /// Square canvas of `side` pixels.
    pub fn square(side: u32) -> PizzaResult<Self> {
        Self::new(side, side)
    }

    /// Number of bytes in a tightly packed RGBA8 buffer of this size.
    pub fn rgba_len(self) -> usize {
        (self.width as usize) * (self.height as usize) * 4
    }

    /// Pixel-space center of the canvas.
    pub fn center(self) -> Point {
        Point::new(f64::from(self.width) / 2.0, f64::from(self.height) / 2.0)
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: 440,
            height: 440,
        }
    }
}

/// Opaque RGB color, straight (not premultiplied).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgb8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb8 {
    /// Build a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Promote to straight RGBA with the given alpha.
    pub const fn with_alpha(self, a: u8) -> Rgba8 {
        Rgba8 {
            r: self.r,
            g: self.g,
            b: self.b,
            a,
        }
    }

    /// Promote to fully opaque straight RGBA.
    pub const fn opaque(self) -> Rgba8 {
        self.with_alpha(255)
    }

    /// Channels as an array.
    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

/// Straight-alpha RGBA8 paint color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8 {
    /// Fully transparent black.
    pub const fn transparent() -> Self {
        Self {
            r: 0,
            g: 0,
            b: 0,
            a: 0,
        }
    }

    /// Build a color from straight channels.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Channels as an array.
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
