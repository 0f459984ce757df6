/// Cubic ease-in/out: 0 at `t = 0`, 1 at `t = 1`, flat slope at both ends.
///
/// Input is clamped to `[0, 1]`, so progress values that overshoot (e.g. a wedge that
/// finished its flip earlier in the cycle) saturate instead of extrapolating.
pub fn ease_in_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
