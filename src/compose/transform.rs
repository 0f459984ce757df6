use crate::animation::schedule::{edge_on_scale, shows_back};
use crate::compose::face::{FaceLayout, FaceStyle, draw_side};
use crate::compose::geometry::{ShapeGeometry, wedge_bisector, wedge_clip};
use crate::foundation::core::{Affine, WEDGE_COUNT};
use crate::render::painter::Painter;

/// Transform state of the shape for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Pose {
    /// Front face, untransformed.
    Still,
    /// Whole shape rotated by the given angle.
    Rotate(f64),
    /// Whole shape flipped about its horizontal axis by the given angle.
    Flip(f64),
    /// Each wedge flipped about its own bisector by its own angle.
    Wave([f64; WEDGE_COUNT]),
}

/// Squash along the axis at `axis_angle` by `scale`, keeping the axis itself fixed.
fn squash_about(axis_angle: f64, scale: f64) -> Affine {
    Affine::rotate(axis_angle) * Affine::scale_non_uniform(1.0, scale) * Affine::rotate(-axis_angle)
}

/// Draw the shape in `pose` onto `painter`, placed by `geometry`.
///
/// The styled frame and the zone map take the same path through here, so their regions line up.
pub fn compose_pose(
    painter: &mut Painter,
    geometry: ShapeGeometry,
    pose: Pose,
    layout: &FaceLayout,
    style: FaceStyle,
) {
    painter.with_transform(geometry.to_canvas(), |p| match pose {
        Pose::Still => draw_side(p, layout, style, false),
        Pose::Rotate(angle) => {
            p.with_transform(Affine::rotate(angle), |p| {
                draw_side(p, layout, style, false)
            });
        }
        Pose::Flip(angle) => {
            let squash = Affine::scale_non_uniform(1.0, edge_on_scale(angle));
            p.with_transform(squash, |p| draw_side(p, layout, style, shows_back(angle)));
        }
        Pose::Wave(offsets) => {
            for (k, &offset) in offsets.iter().enumerate() {
                let local = squash_about(wedge_bisector(k), edge_on_scale(offset));
                p.with_transform(local, |p| {
                    p.with_clip(wedge_clip(k), |p| {
                        draw_side(p, layout, style, shows_back(offset))
                    });
                });
            }
        }
    });
}

#[cfg(test)]
#[path = "../../tests/unit/compose/transform.rs"]
mod tests;
