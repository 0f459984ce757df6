use kurbo::Arc;

use crate::foundation::core::{Affine, BezPath, Canvas, Point, WEDGE_ANGLE, WEDGE_COUNT};

/// Outer radius of the shape in shape units.
pub const SHAPE_RADIUS: f64 = 180.0;
/// Extra radius added to per-wedge clip pies so strokes on the rim are not cut off.
pub const CLIP_MARGIN: f64 = 25.0;
/// Space kept between the shape and the canvas edge, in shape units.
pub const CANVAS_MARGIN: f64 = 30.0;

/// Wedges drawn with the left-half selection in half topology.
pub const LEFT_WEDGES: [usize; 4] = [2, 3, 4, 5];
/// Wedges drawn with the right-half selection in half topology.
pub const RIGHT_WEDGES: [usize; 4] = [0, 1, 6, 7];

/// Start angle of wedge `k`.
pub fn wedge_start(k: usize) -> f64 {
    (k % WEDGE_COUNT) as f64 * WEDGE_ANGLE
}

/// Angle of the line bisecting wedge `k`.
pub fn wedge_bisector(k: usize) -> f64 {
    wedge_start(k) + WEDGE_ANGLE / 2.0
}

/// Closed pie slice from `center`, spanning `sweep` radians from `start`.
pub fn pie_path(center: Point, radius: f64, start: f64, sweep: f64) -> BezPath {
    let mut path = BezPath::new();
    path.move_to(center);
    path.line_to(Point::new(
        center.x + radius * start.cos(),
        center.y + radius * start.sin(),
    ));
    let arc = Arc::new(center, (radius, radius), start, sweep, 0.0);
    for el in arc.append_iter(0.05) {
        path.push(el);
    }
    path.close_path();
    path
}

/// Clip region for wedge `k`: a pie slightly larger than the shape.
pub fn wedge_clip(k: usize) -> BezPath {
    pie_path(
        Point::ORIGIN,
        SHAPE_RADIUS + CLIP_MARGIN,
        wedge_start(k),
        WEDGE_ANGLE,
    )
}

/// Placement of the shape on a canvas: shape units are centered at `center` and scaled by
/// `scale` pixels per unit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapeGeometry {
    /// Canvas-space center of the shape.
    pub center: Point,
    /// Pixels per shape unit.
    pub scale: f64,
}

impl ShapeGeometry {
    /// Fit the shape, plus margin, into `canvas`.
    pub fn fit(canvas: Canvas) -> Self {
        let side = f64::from(canvas.width.min(canvas.height));
        Self {
            center: canvas.center(),
            scale: side / (2.0 * (SHAPE_RADIUS + CANVAS_MARGIN)),
        }
    }

    /// Transform from shape units to canvas pixels.
    pub fn to_canvas(self) -> Affine {
        Affine::translate(self.center.to_vec2()) * Affine::scale(self.scale)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/geometry.rs"]
mod tests;
