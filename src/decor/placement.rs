use crate::compose::geometry::wedge_start;
use crate::foundation::core::{Point, WEDGE_ANGLE};

/// Innermost radius a point decoration may be centered on.
pub const TOPPING_INNER_R: f64 = 40.0;
/// Outermost radius a point decoration may be centered on.
pub const TOPPING_OUTER_R: f64 = 155.0;

/// One slot inside a wedge, as fractions of the wedge's angular width and of the topping band.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Slot {
    /// Fraction of the wedge width from its start angle.
    pub angle_frac: f64,
    /// Fraction of the band from [`TOPPING_INNER_R`] to [`TOPPING_OUTER_R`].
    pub radius_frac: f64,
}

const fn slot(angle_frac: f64, radius_frac: f64) -> Slot {
    Slot {
        angle_frac,
        radius_frac,
    }
}

/// The nine fixed slots of every wedge, from the inner tip out to the crust.
pub const SLOT_TABLE: [Slot; 9] = [
    slot(0.50, 0.08),
    slot(0.28, 0.30),
    slot(0.72, 0.30),
    slot(0.50, 0.46),
    slot(0.24, 0.62),
    slot(0.76, 0.62),
    slot(0.50, 0.78),
    slot(0.30, 0.94),
    slot(0.70, 0.94),
];

const ONE: [&[usize]; 1] = [&[1, 2, 3, 7, 8]];
// Slot 0 (the narrow tip) is left empty when two decorations share a wedge.
const TWO: [&[usize]; 2] = [&[1, 3, 5, 7], &[2, 4, 6, 8]];
const THREE: [&[usize]; 3] = [&[1, 5, 6], &[2, 3, 7], &[0, 4, 8]];
const FOUR: [&[usize]; 4] = [&[1, 8], &[2, 7], &[0, 6], &[4, 5]];

/// Slot indices for each of `count` point decorations, in selection order.
///
/// Fewer decorations get denser coverage: one gets five slots, two get four each, three get
/// three each, and four or more get two each. At most four lists are returned.
pub fn distribute_positions(count: usize) -> Vec<Vec<usize>> {
    let table: &[&[usize]] = match count {
        0 => &[],
        1 => &ONE,
        2 => &TWO,
        3 => &THREE,
        _ => &FOUR,
    };
    table.iter().map(|slots| slots.to_vec()).collect()
}

/// Position of `slot` within wedge `wedge`, relative to the shape center.
pub fn slot_position(wedge: usize, slot: usize) -> Point {
    let s = SLOT_TABLE[slot];
    let angle = wedge_start(wedge) + s.angle_frac * WEDGE_ANGLE;
    let radius = TOPPING_INNER_R + s.radius_frac * (TOPPING_OUTER_R - TOPPING_INNER_R);
    Point::new(radius * angle.cos(), radius * angle.sin())
}

#[cfg(test)]
#[path = "../../tests/unit/decor/placement.rs"]
mod tests;
