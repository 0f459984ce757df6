use kurbo::{Circle, Ellipse, Line, Shape};

use crate::foundation::core::{Affine, BezPath, Point, Rgba8};

/// Flattening tolerance used when converting shapes to paths.
const TOLERANCE: f64 = 0.05;

/// One recorded drawing operation with its fully resolved transform.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    /// Fill `path` (non-zero winding) with a solid color.
    Fill {
        /// Geometry in local coordinates.
        path: BezPath,
        /// Straight-alpha paint.
        color: Rgba8,
        /// Local-to-canvas transform in effect when recorded.
        transform: Affine,
    },
    /// Stroke `path` with round caps and joins.
    Stroke {
        /// Geometry in local coordinates.
        path: BezPath,
        /// Straight-alpha paint.
        color: Rgba8,
        /// Stroke width in local units.
        width: f64,
        /// Local-to-canvas transform in effect when recorded.
        transform: Affine,
    },
    /// Intersect the active clip with `path` until the matching [`DrawOp::PopClip`].
    PushClip {
        /// Clip geometry in local coordinates.
        path: BezPath,
        /// Local-to-canvas transform in effect when recorded.
        transform: Affine,
    },
    /// End the innermost clip.
    PopClip,
}

/// Recorded frame: an ordered list of draw operations, later ops painting over earlier ones.
#[derive(Clone, Debug, Default)]
pub struct DisplayList {
    ops: Vec<DrawOp>,
}

impl DisplayList {
    /// Borrow the recorded operations in paint order.
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Number of recorded operations.
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Return `true` when nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}

/// Immediate-mode 2D drawing surface that records into a [`DisplayList`].
///
/// The transform stack and clip stack are scoped: [`Painter::with_transform`] and
/// [`Painter::with_clip`] restore the previous state when their closure returns, whatever it
/// returns, so nested draws never leak state into their siblings.
#[derive(Debug)]
pub struct Painter {
    ops: Vec<DrawOp>,
    transform: Affine,
    clip_depth: usize,
}

impl Default for Painter {
    fn default() -> Self {
        Self::new(Affine::IDENTITY)
    }
}

impl Painter {
    /// Create a painter whose outermost transform is `base`.
    pub fn new(base: Affine) -> Self {
        Self {
            ops: Vec::new(),
            transform: base,
            clip_depth: 0,
        }
    }

    /// Current local-to-canvas transform.
    pub fn transform(&self) -> Affine {
        self.transform
    }

    /// Number of clips currently pushed.
    pub fn clip_depth(&self) -> usize {
        self.clip_depth
    }

    /// Run `f` with `local` appended to the current transform, then restore it.
    pub fn with_transform<R>(&mut self, local: Affine, f: impl FnOnce(&mut Self) -> R) -> R {
        let saved = self.transform;
        self.transform = saved * local;
        let out = f(self);
        self.transform = saved;
        out
    }

    /// Run `f` with drawing clipped to `path` (in current local coordinates), then pop the clip.
    ///
    /// The transform is also restored, so `f` may freely re-transform inside the clip.
    pub fn with_clip<R>(&mut self, path: BezPath, f: impl FnOnce(&mut Self) -> R) -> R {
        let saved = self.transform;
        self.ops.push(DrawOp::PushClip {
            path,
            transform: saved,
        });
        self.clip_depth += 1;
        let out = f(self);
        self.ops.push(DrawOp::PopClip);
        self.clip_depth -= 1;
        self.transform = saved;
        out
    }

    /// Fill an arbitrary shape.
    pub fn fill(&mut self, shape: &impl Shape, color: Rgba8) {
        self.ops.push(DrawOp::Fill {
            path: shape.to_path(TOLERANCE),
            color,
            transform: self.transform,
        });
    }

    /// Stroke an arbitrary shape.
    pub fn stroke(&mut self, shape: &impl Shape, color: Rgba8, width: f64) {
        self.ops.push(DrawOp::Stroke {
            path: shape.to_path(TOLERANCE),
            color,
            width,
            transform: self.transform,
        });
    }

    /// Fill a circle.
    pub fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba8) {
        self.fill(&Circle::new(center, radius), color);
    }

    /// Stroke a circle outline.
    pub fn stroke_circle(&mut self, center: Point, radius: f64, color: Rgba8, width: f64) {
        self.stroke(&Circle::new(center, radius), color, width);
    }

    /// Fill an ellipse rotated by `rotation` radians about its center.
    pub fn fill_ellipse(&mut self, center: Point, rx: f64, ry: f64, rotation: f64, color: Rgba8) {
        self.fill(&Ellipse::new(center, (rx, ry), rotation), color);
    }

    /// Stroke a straight segment.
    pub fn line(&mut self, p0: Point, p1: Point, color: Rgba8, width: f64) {
        self.stroke(&Line::new(p0, p1), color, width);
    }

    /// Finish recording.
    pub fn finish(self) -> DisplayList {
        debug_assert_eq!(self.clip_depth, 0, "unbalanced clip stack");
        DisplayList { ops: self.ops }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/painter.rs"]
mod tests;
