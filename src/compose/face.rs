//! Face drawing in shape units.
//!
//! Every face is built from the same layer stack so the styled frame and its zone map stay
//! aligned pixel for pixel. Decoration positions come from [`face_layout`], which is pure and
//! shared by both styles.

use std::f64::consts::TAU;

use crate::compose::geometry::{SHAPE_RADIUS, wedge_start};
use crate::decor::placement::{TOPPING_INNER_R, TOPPING_OUTER_R, distribute_positions, slot_position};
use crate::decor::registry::{Decoration, DecorationKind, ZoneSpan};
use crate::foundation::core::{Point, Rgba8, WEDGE_ANGLE, WEDGE_COUNT};
use crate::render::painter::Painter;
use crate::scene::selection::{SelectionState, Topology};

/// Radius of the sauce layer.
pub const SAUCE_RADIUS: f64 = 168.0;
/// Radius of the cheese layer.
pub const CHEESE_RADIUS: f64 = 155.0;

const CRUST: Rgba8 = Rgba8::new(214, 152, 78, 255);
const CRUST_EDGE: Rgba8 = Rgba8::new(158, 98, 42, 255);
const SAUCE: Rgba8 = Rgba8::new(186, 44, 30, 255);
const CHEESE: Rgba8 = Rgba8::new(250, 214, 112, 255);
const CHEESE_RING: Rgba8 = Rgba8::new(226, 178, 74, 255);
const DIVIDER: Rgba8 = Rgba8::new(150, 104, 51, 255);
const SPLIT: Rgba8 = Rgba8::new(104, 65, 29, 255);

const BACK_CRUST: Rgba8 = Rgba8::new(176, 150, 124, 255);
const DOUGH: Rgba8 = Rgba8::new(226, 202, 162, 255);
const FLOUR: Rgba8 = Rgba8::new(248, 242, 229, 255);
const CHAR: Rgba8 = Rgba8::new(121, 92, 66, 255);
const BACK_DIVIDER: Rgba8 = Rgba8::new(166, 138, 106, 255);

/// Flat zone-map crust color.
pub const ZONE_CRUST: Rgba8 = Rgba8::new(255, 140, 0, 255);
/// Flat zone-map sauce color.
pub const ZONE_SAUCE: Rgba8 = Rgba8::new(200, 20, 60, 255);
/// Flat zone-map cheese color.
pub const ZONE_CHEESE: Rgba8 = Rgba8::new(255, 240, 120, 255);
/// Flat zone-map dough color for the back face.
pub const ZONE_DOUGH: Rgba8 = Rgba8::new(240, 220, 170, 255);
const ZONE_LINE: Rgba8 = Rgba8::new(255, 255, 255, 255);

const ZONE_STROKE_WIDTH: f64 = 8.0;
const DIVIDER_WIDTH: f64 = 1.5;
const ZONE_DIVIDER_WIDTH: f64 = 4.0;

const FLOUR_SPECKS: usize = 28;
const GOLDEN_ANGLE: f64 = 2.39996;
const CHAR_MARKS: usize = 12;

/// Which rendition of a face to draw.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FaceStyle {
    /// Full styled artwork.
    #[default]
    Styled,
    /// Flat colors identifying each region, used by the neon filter.
    ZoneMap,
}

/// One point decoration drawn at one slot.
#[derive(Clone, Copy, Debug)]
pub struct PointPlacement {
    /// Wedge index.
    pub wedge: usize,
    /// Catalog entry.
    pub decoration: &'static Decoration,
    /// Position in shape units.
    pub position: Point,
}

/// One zone decoration spanning one wedge.
#[derive(Clone, Copy, Debug)]
pub struct ZonePlacement {
    /// Wedge index.
    pub wedge: usize,
    /// Catalog entry.
    pub decoration: &'static Decoration,
    /// Span to fill.
    pub span: ZoneSpan,
}

/// Resolved decoration placements for a face.
#[derive(Clone, Debug, Default)]
pub struct FaceLayout {
    /// Point decorations, wedge by wedge.
    pub points: Vec<PointPlacement>,
    /// Zone decorations, wedge by wedge.
    pub zones: Vec<ZonePlacement>,
    /// Whether the half-topology split line is drawn.
    pub split: bool,
}

/// Span covered by wedge `k` for zone decorations.
pub fn wedge_span(k: usize) -> ZoneSpan {
    ZoneSpan {
        center: Point::ORIGIN,
        start: wedge_start(k),
        sweep: WEDGE_ANGLE,
        inner: TOPPING_INNER_R,
        outer: TOPPING_OUTER_R,
    }
}

/// Resolve every decoration placement for `selection`.
pub fn face_layout(selection: &SelectionState) -> FaceLayout {
    let mut layout = FaceLayout {
        split: selection.topology == Topology::Half,
        ..FaceLayout::default()
    };
    for wedge in 0..WEDGE_COUNT {
        let set = selection.set_for_wedge(wedge);
        let points: Vec<&'static Decoration> = set.point_decorations().collect();
        let lists = distribute_positions(points.len());
        for (&decoration, slots) in points.iter().zip(&lists) {
            for &slot in slots {
                layout.points.push(PointPlacement {
                    wedge,
                    decoration,
                    position: slot_position(wedge, slot),
                });
            }
        }
        for decoration in set.zone_decorations() {
            layout.zones.push(ZonePlacement {
                wedge,
                decoration,
                span: wedge_span(wedge),
            });
        }
    }
    layout
}

fn dividers(p: &mut Painter, color: Rgba8, width: f64) {
    for k in 0..WEDGE_COUNT {
        let a = wedge_start(k);
        let end = Point::new(SHAPE_RADIUS * a.cos(), SHAPE_RADIUS * a.sin());
        p.line(Point::ORIGIN, end, color, width);
    }
}

fn split_line(p: &mut Painter, color: Rgba8, width: f64) {
    p.line(
        Point::new(0.0, -SHAPE_RADIUS),
        Point::new(0.0, SHAPE_RADIUS),
        color,
        width,
    );
}

/// Draw the styled front face.
pub fn draw_face(p: &mut Painter, layout: &FaceLayout) {
    p.fill_circle(Point::ORIGIN, SHAPE_RADIUS, CRUST);
    p.stroke_circle(Point::ORIGIN, SHAPE_RADIUS - 1.5, CRUST_EDGE, 3.0);
    p.fill_circle(Point::ORIGIN, SAUCE_RADIUS, SAUCE);
    p.fill_circle(Point::ORIGIN, CHEESE_RADIUS, CHEESE);
    p.stroke_circle(Point::ORIGIN, CHEESE_RADIUS, CHEESE_RING, 1.2);

    for placement in &layout.points {
        if let DecorationKind::Point { draw, .. } = placement.decoration.kind {
            draw(p, placement.position);
        }
    }
    for placement in &layout.zones {
        if let DecorationKind::Zone { draw, .. } = placement.decoration.kind {
            draw(p, &placement.span);
        }
    }

    dividers(p, DIVIDER, DIVIDER_WIDTH);
    if layout.split {
        split_line(p, SPLIT, 4.0);
    }
}

/// Draw the flat zone-map front face.
pub fn draw_zone_face(p: &mut Painter, layout: &FaceLayout) {
    p.fill_circle(Point::ORIGIN, SHAPE_RADIUS, ZONE_CRUST);
    p.fill_circle(Point::ORIGIN, SAUCE_RADIUS, ZONE_SAUCE);
    p.fill_circle(Point::ORIGIN, CHEESE_RADIUS, ZONE_CHEESE);

    for placement in &layout.points {
        if let DecorationKind::Point { footprint, .. } = placement.decoration.kind {
            let color = placement.decoration.zone_color().opaque();
            p.fill_circle(placement.position, footprint, color);
        }
    }
    for placement in &layout.zones {
        if let DecorationKind::Zone { trace, .. } = placement.decoration.kind {
            let color = placement.decoration.zone_color().opaque();
            p.stroke(&trace(&placement.span), color, ZONE_STROKE_WIDTH);
        }
    }

    dividers(p, ZONE_LINE, ZONE_DIVIDER_WIDTH);
    if layout.split {
        split_line(p, ZONE_LINE, 2.0 * ZONE_DIVIDER_WIDTH);
    }
}

/// Position of flour speck `i` on a golden-angle spiral.
pub fn flour_speck(i: usize) -> Point {
    let angle = i as f64 * GOLDEN_ANGLE;
    let radius = 150.0 * ((i as f64 + 0.5) / FLOUR_SPECKS as f64).sqrt();
    Point::new(radius * angle.cos(), radius * angle.sin())
}

/// Center, half-length and tilt of char mark `i`.
fn char_mark(i: usize) -> (Point, f64, f64) {
    let angle = i as f64 * TAU / CHAR_MARKS as f64 + 0.35 * (i % 3) as f64;
    let radius = 40.0 + 95.0 * ((i * 7) % CHAR_MARKS) as f64 / (CHAR_MARKS - 1) as f64;
    let tilt = angle + 0.4 * (i % 4) as f64;
    let center = Point::new(radius * angle.cos(), radius * angle.sin());
    (center, 6.0 + 2.0 * (i % 3) as f64, tilt)
}

/// Draw the styled back face: bare dough with flour and char marks.
pub fn draw_back_face(p: &mut Painter) {
    p.fill_circle(Point::ORIGIN, SHAPE_RADIUS, BACK_CRUST);
    p.fill_circle(Point::ORIGIN, SAUCE_RADIUS, DOUGH);
    for i in 0..FLOUR_SPECKS {
        p.fill_circle(flour_speck(i), 2.2, FLOUR);
    }
    for i in 0..CHAR_MARKS {
        let (center, rx, tilt) = char_mark(i);
        p.fill_ellipse(center, rx, 2.8, tilt, CHAR);
    }
    dividers(p, BACK_DIVIDER, DIVIDER_WIDTH);
}

/// Draw the flat zone-map back face.
pub fn draw_zone_back_face(p: &mut Painter) {
    p.fill_circle(Point::ORIGIN, SHAPE_RADIUS, ZONE_CRUST);
    p.fill_circle(Point::ORIGIN, SAUCE_RADIUS, ZONE_DOUGH);
    dividers(p, ZONE_LINE, ZONE_DIVIDER_WIDTH);
}

/// Draw the front or back face in `style`.
pub(crate) fn draw_side(p: &mut Painter, layout: &FaceLayout, style: FaceStyle, back: bool) {
    match (style, back) {
        (FaceStyle::Styled, false) => draw_face(p, layout),
        (FaceStyle::Styled, true) => draw_back_face(p),
        (FaceStyle::ZoneMap, false) => draw_zone_face(p, layout),
        (FaceStyle::ZoneMap, true) => draw_zone_back_face(p),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/face.rs"]
mod tests;
