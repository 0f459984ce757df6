use std::f64::consts::{PI, TAU};

use crate::animation::ease::ease_in_out_cubic;
use crate::foundation::core::WEDGE_COUNT;

/// Seconds spent easing between faces in one half of a coin flip.
pub const FLIP_TURN_SECS: f64 = 0.7;
/// Seconds a face is held still after each turn.
pub const FLIP_PAUSE_SECS: f64 = 0.35;
/// Full coin-flip cycle: turn, pause, turn back, pause.
pub const FLIP_CYCLE_SECS: f64 = 2.0 * (FLIP_TURN_SECS + FLIP_PAUSE_SECS);

/// Seconds one wedge takes for its full 360° flip.
pub const WAVE_SLICE_SECS: f64 = 0.8;
/// Delay between consecutive wedges starting their flip.
pub const WAVE_STAGGER_SECS: f64 = 0.25 * WAVE_SLICE_SECS;
/// Full wave cycle: the last wedge starts `7 * stagger` in and runs one slice.
pub const WAVE_CYCLE_SECS: f64 = WAVE_SLICE_SECS + (WEDGE_COUNT as f64 - 1.0) * WAVE_STAGGER_SECS;

/// Rotation applied per frame tick by the continuous-rotation modes.
pub const ROTATION_STEP_RAD: f64 = 0.008;
/// Nominal host tick rate used to express rotation as a duration.
pub const NOMINAL_TICK_HZ: f64 = 60.0;

/// Coin-flip angle at `time` seconds, in `[0, π]`.
///
/// `0` is face-up, `π` face-down. Time wraps with a positive modulo, so negative or very large
/// inputs are valid.
pub fn flip_angle(time: f64) -> f64 {
    let t = time.rem_euclid(FLIP_CYCLE_SECS);

    let turn_down_end = FLIP_TURN_SECS;
    let hold_down_end = turn_down_end + FLIP_PAUSE_SECS;
    let turn_up_end = hold_down_end + FLIP_TURN_SECS;

    if t < turn_down_end {
        ease_in_out_cubic(t / FLIP_TURN_SECS) * PI
    } else if t < hold_down_end {
        PI
    } else if t < turn_up_end {
        PI * (1.0 - ease_in_out_cubic((t - hold_down_end) / FLIP_TURN_SECS))
    } else {
        0.0
    }
}

/// Per-wedge flip offsets at `time` seconds, each in `[0, 2π]`.
///
/// Wedge `k` starts `k * stagger` after wedge 0; with `reverse` the cascade runs from wedge 7
/// back to wedge 0.
pub fn wave_offsets(time: f64, reverse: bool) -> [f64; WEDGE_COUNT] {
    let local = time.rem_euclid(WAVE_CYCLE_SECS);
    let mut out = [0.0; WEDGE_COUNT];
    for (k, slot) in out.iter_mut().enumerate() {
        let order = if reverse { WEDGE_COUNT - 1 - k } else { k };
        let start = order as f64 * WAVE_STAGGER_SECS;
        let progress = ((local - start) / WAVE_SLICE_SECS).clamp(0.0, 1.0);
        *slot = ease_in_out_cubic(progress) * TAU;
    }
    out
}

/// Scale factor for a face turned by `angle`: `|cos|`, floored so nothing collapses to zero.
pub fn edge_on_scale(angle: f64) -> f64 {
    angle.cos().abs().max(MIN_SCALE)
}

/// Whether a face turned by `angle` shows its back side.
pub fn shows_back(angle: f64) -> bool {
    angle.cos() < 0.0
}

/// Smallest scale factor applied when a face is edge-on to the viewer.
pub const MIN_SCALE: f64 = 0.001;

#[cfg(test)]
#[path = "../../tests/unit/animation/schedule.rs"]
mod tests;
