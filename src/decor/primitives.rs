//! Styled draw procedures for the decoration catalog.
//!
//! All coordinates are in shape units (shape radius 180). Point decorations are drawn around
//! the given position; zone decorations fill their [`ZoneSpan`]. Nothing here is random: any
//! variation between copies of a motif is derived from its position.

use kurbo::{Arc, Rect, RoundedRect, Vec2};

use crate::decor::registry::ZoneSpan;
use crate::foundation::core::{BezPath, Point, Rgba8};
use crate::render::painter::Painter;

const PEPPERONI: Rgba8 = Rgba8::new(178, 34, 34, 255);
const PEPPERONI_RIM: Rgba8 = Rgba8::new(122, 22, 22, 255);
const PEPPERONI_SPOT: Rgba8 = Rgba8::new(206, 72, 60, 255);
const MUSHROOM_CAP: Rgba8 = Rgba8::new(214, 196, 170, 255);
const MUSHROOM_STEM: Rgba8 = Rgba8::new(240, 229, 210, 255);
const MUSHROOM_GILL: Rgba8 = Rgba8::new(160, 138, 112, 255);
const OLIVE: Rgba8 = Rgba8::new(34, 32, 36, 255);
const OLIVE_SHINE: Rgba8 = Rgba8::new(95, 92, 100, 255);
const PEPPER_GREEN: Rgba8 = Rgba8::new(46, 139, 87, 255);
const PEPPER_EDGE: Rgba8 = Rgba8::new(28, 96, 56, 255);
const ONION: Rgba8 = Rgba8::new(182, 92, 160, 255);
const ONION_INNER: Rgba8 = Rgba8::new(236, 214, 236, 255);
const BASIL: Rgba8 = Rgba8::new(58, 138, 58, 255);
const BASIL_VEIN: Rgba8 = Rgba8::new(36, 98, 38, 255);
const PINEAPPLE: Rgba8 = Rgba8::new(250, 214, 82, 255);
const PINEAPPLE_EDGE: Rgba8 = Rgba8::new(214, 168, 40, 255);
const HAM: Rgba8 = Rgba8::new(238, 150, 160, 255);
const HAM_FAT: Rgba8 = Rgba8::new(252, 214, 218, 255);
const JALAPENO: Rgba8 = Rgba8::new(70, 150, 50, 255);
const JALAPENO_FLESH: Rgba8 = Rgba8::new(198, 222, 122, 255);
const JALAPENO_SEED: Rgba8 = Rgba8::new(244, 240, 204, 255);
const SAUSAGE: Rgba8 = Rgba8::new(138, 84, 54, 255);
const SAUSAGE_DARK: Rgba8 = Rgba8::new(102, 60, 38, 255);
const TOMATO: Rgba8 = Rgba8::new(228, 62, 50, 255);
const TOMATO_SEED: Rgba8 = Rgba8::new(250, 196, 118, 255);
const HONEY: Rgba8 = Rgba8::new(232, 156, 28, 255);
const HONEY_GLINT: Rgba8 = Rgba8::new(252, 206, 107, 255);
const PESTO: Rgba8 = Rgba8::new(52, 118, 40, 255);
const PESTO_FLECK: Rgba8 = Rgba8::new(120, 168, 64, 255);
const MELTED_CHEESE: Rgba8 = Rgba8::new(254, 232, 152, 255);
const CHEESE_BUBBLE: Rgba8 = Rgba8::new(240, 196, 96, 255);

fn offset(at: Point, dx: f64, dy: f64) -> Point {
    at + Vec2::new(dx, dy)
}

/// Stable per-position tilt in `[-0.6, 0.6)` so repeated motifs don't look stamped.
fn tilt(at: Point) -> f64 {
    let h = (at.x * 12.9898 + at.y * 78.233).sin() * 43_758.545;
    (h - h.floor()) * 1.2 - 0.6
}

pub(crate) fn pepperoni(p: &mut Painter, at: Point) {
    p.fill_circle(at, 13.0, PEPPERONI);
    p.stroke_circle(at, 12.2, PEPPERONI_RIM, 1.6);
    p.fill_circle(offset(at, -4.0, -3.0), 1.8, PEPPERONI_SPOT);
    p.fill_circle(offset(at, 4.5, -1.0), 1.4, PEPPERONI_SPOT);
    p.fill_circle(offset(at, -0.5, 4.5), 1.6, PEPPERONI_SPOT);
}

pub(crate) fn mushroom(p: &mut Painter, at: Point) {
    let stem = RoundedRect::from_rect(
        Rect::new(at.x - 3.5, at.y - 1.0, at.x + 3.5, at.y + 8.0),
        1.5,
    );
    p.fill(&stem, MUSHROOM_STEM);

    let mut cap = BezPath::new();
    cap.move_to(offset(at, -11.0, 0.0));
    cap.quad_to(offset(at, -10.0, -12.0), offset(at, 0.0, -12.0));
    cap.quad_to(offset(at, 10.0, -12.0), offset(at, 11.0, 0.0));
    cap.close_path();
    p.fill(&cap, MUSHROOM_CAP);
    p.line(
        offset(at, -8.0, -1.0),
        offset(at, 8.0, -1.0),
        MUSHROOM_GILL,
        1.2,
    );
}

pub(crate) fn olive(p: &mut Painter, at: Point) {
    p.stroke_circle(at, 5.5, OLIVE, 4.0);
    let shine = Arc::new(at, (5.5, 5.5), -2.4, 0.9, 0.0);
    p.stroke(&shine, OLIVE_SHINE, 1.0);
}

pub(crate) fn green_pepper(p: &mut Painter, at: Point) {
    let start = -2.4 + tilt(at);
    let strip = Arc::new(at, (10.0, 10.0), start, 1.9, 0.0);
    p.stroke(&strip, PEPPER_EDGE, 4.6);
    p.stroke(&strip, PEPPER_GREEN, 3.0);
}

pub(crate) fn onion(p: &mut Painter, at: Point) {
    let start = -0.9 + tilt(at);
    p.stroke(&Arc::new(at, (9.5, 9.5), start, 2.6, 0.0), ONION, 2.2);
    p.stroke(
        &Arc::new(at, (6.0, 6.0), start + 0.2, 2.2, 0.0),
        ONION_INNER,
        1.6,
    );
}

pub(crate) fn basil(p: &mut Painter, at: Point) {
    let rot = tilt(at);
    p.with_transform(
        kurbo::Affine::translate(at.to_vec2()) * kurbo::Affine::rotate(rot),
        |p| {
            let mut leaf = BezPath::new();
            leaf.move_to((-10.0, 0.0));
            leaf.quad_to((0.0, -8.5), (10.0, 0.0));
            leaf.quad_to((0.0, 8.5), (-10.0, 0.0));
            leaf.close_path();
            p.fill(&leaf, BASIL);
            p.line(
                Point::new(-8.0, 0.0),
                Point::new(8.0, 0.0),
                BASIL_VEIN,
                1.0,
            );
        },
    );
}

pub(crate) fn pineapple(p: &mut Painter, at: Point) {
    let rot = tilt(at) * 0.5;
    p.with_transform(
        kurbo::Affine::translate(at.to_vec2()) * kurbo::Affine::rotate(rot),
        |p| {
            let chunk = RoundedRect::new(-6.5, -5.0, 6.5, 5.0, 2.5);
            p.fill(&chunk, PINEAPPLE);
            p.stroke(&chunk, PINEAPPLE_EDGE, 1.2);
        },
    );
}

pub(crate) fn ham(p: &mut Painter, at: Point) {
    let rot = tilt(at) * 0.7;
    p.with_transform(
        kurbo::Affine::translate(at.to_vec2()) * kurbo::Affine::rotate(rot),
        |p| {
            p.fill(&Rect::new(-6.5, -6.5, 6.5, 6.5), HAM);
            p.line(
                Point::new(-5.0, 2.5),
                Point::new(5.0, 2.5),
                HAM_FAT,
                1.6,
            );
        },
    );
}

pub(crate) fn jalapeno(p: &mut Painter, at: Point) {
    p.fill_circle(at, 8.0, JALAPENO);
    p.fill_circle(at, 5.2, JALAPENO_FLESH);
    for i in 0..3 {
        let a = f64::from(i) * std::f64::consts::TAU / 3.0 + tilt(at);
        p.fill_circle(offset(at, 2.6 * a.cos(), 2.6 * a.sin()), 1.0, JALAPENO_SEED);
    }
}

pub(crate) fn sausage(p: &mut Painter, at: Point) {
    for (dx, dy, r) in [(-4.0, -2.0, 5.5), (4.0, -3.0, 5.0), (0.0, 4.0, 5.5)] {
        p.fill_circle(offset(at, dx, dy), r, SAUSAGE);
    }
    p.fill_circle(offset(at, -3.0, -3.0), 1.3, SAUSAGE_DARK);
    p.fill_circle(offset(at, 2.0, 4.5), 1.1, SAUSAGE_DARK);
}

pub(crate) fn tomato(p: &mut Painter, at: Point) {
    p.fill_circle(at, 11.0, TOMATO);
    for i in 0..3 {
        let a = f64::from(i) * std::f64::consts::TAU / 3.0 + 0.5;
        let c = offset(at, 5.5 * a.cos(), 5.5 * a.sin());
        p.fill_ellipse(c, 3.2, 1.8, a, TOMATO_SEED);
    }
}

pub(crate) fn hot_honey_trace(span: &ZoneSpan) -> BezPath {
    let band = span.outer - span.inner;
    let near = span.inner + band * 0.3;
    let far = span.outer - band * 0.2;
    let steps = 6;
    let mut path = BezPath::new();
    for i in 0..=steps {
        let t = f64::from(i) / f64::from(steps);
        let angle = span.start + span.sweep * (0.12 + 0.76 * t);
        let r = if i % 2 == 0 { near } else { far };
        let pt = span.polar(angle, r);
        if i == 0 {
            path.move_to(pt);
        } else {
            path.line_to(pt);
        }
    }
    path
}

pub(crate) fn hot_honey(p: &mut Painter, span: &ZoneSpan) {
    let path = hot_honey_trace(span);
    p.stroke(&path, HONEY, 3.2);
    p.stroke(&path, HONEY_GLINT, 1.0);
}

pub(crate) fn pesto_trace(span: &ZoneSpan) -> BezPath {
    let mid = (span.inner + span.outer) / 2.0;
    let amp = (span.outer - span.inner) * 0.18;
    let steps = 4;
    let mut path = BezPath::new();
    path.move_to(span.polar(span.start + span.sweep * 0.1, mid));
    for i in 0..steps {
        let t0 = f64::from(i) / f64::from(steps);
        let t1 = f64::from(i + 1) / f64::from(steps);
        let a_ctrl = span.start + span.sweep * (0.1 + 0.8 * (t0 + t1) / 2.0);
        let a_end = span.start + span.sweep * (0.1 + 0.8 * t1);
        let bulge = if i % 2 == 0 { amp } else { -amp };
        path.quad_to(span.polar(a_ctrl, mid + 2.0 * bulge), span.polar(a_end, mid));
    }
    path
}

pub(crate) fn pesto(p: &mut Painter, span: &ZoneSpan) {
    let path = pesto_trace(span);
    p.stroke(&path, PESTO, 4.0);
    let mid = (span.inner + span.outer) / 2.0;
    for i in 0..3 {
        let a = span.start + span.sweep * (0.25 + 0.25 * f64::from(i));
        p.fill_circle(span.polar(a, mid), 1.4, PESTO_FLECK);
    }
}

pub(crate) fn extra_cheese_trace(span: &ZoneSpan) -> BezPath {
    let r = span.inner + (span.outer - span.inner) * 0.62;
    let arc = Arc::new(
        span.center,
        (r, r),
        span.start + span.sweep * 0.1,
        span.sweep * 0.8,
        0.0,
    );
    kurbo::Shape::to_path(&arc, 0.05)
}

pub(crate) fn extra_cheese(p: &mut Painter, span: &ZoneSpan) {
    let path = extra_cheese_trace(span);
    p.stroke(&path, MELTED_CHEESE, 10.0);
    let r = span.inner + (span.outer - span.inner) * 0.62;
    for f in [0.3, 0.7] {
        p.fill_circle(span.polar(span.start + span.sweep * f, r), 2.0, CHEESE_BUBBLE);
    }
}
