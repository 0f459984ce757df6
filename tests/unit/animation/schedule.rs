use super::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn cycle_lengths_match_phase_sums() {
    assert!(approx(FLIP_CYCLE_SECS, 2.1));
    assert!(approx(WAVE_CYCLE_SECS, 2.2));
    assert!(approx(WAVE_STAGGER_SECS, 0.2));
}

#[test]
fn flip_angle_phases() {
    assert!(approx(flip_angle(0.0), 0.0));
    assert!(approx(flip_angle(0.35), PI / 2.0));
    assert!(approx(flip_angle(0.7), PI));
    assert!(approx(flip_angle(0.9), PI));
    assert!(approx(flip_angle(1.05 + 0.35), PI / 2.0));
    assert!(approx(flip_angle(1.75), 0.0));
    assert!(approx(flip_angle(2.0), 0.0));
}

#[test]
fn flip_angle_is_periodic_and_bounded() {
    for i in -400..400 {
        let t = f64::from(i) * 0.0137;
        let a = flip_angle(t);
        assert!((0.0..=PI).contains(&a), "out of range at t={t}: {a}");
        assert!((a - flip_angle(t + FLIP_CYCLE_SECS)).abs() < 1e-6, "not periodic at t={t}");
    }
}

#[test]
fn flip_angle_handles_huge_and_negative_time() {
    for t in [-1e9, -2.1, -0.0001, 1e12] {
        let a = flip_angle(t);
        assert!(a.is_finite());
        assert!((0.0..=PI).contains(&a));
    }
}

#[test]
fn wave_offsets_start_at_zero() {
    let o = wave_offsets(0.0, false);
    for v in o {
        assert!(approx(v, 0.0));
    }
}

#[test]
fn wave_offsets_after_one_slice() {
    let o = wave_offsets(WAVE_SLICE_SECS, false);
    assert!(approx(o[0], TAU));
    // Wedge 4 starts exactly one slice in; later wedges are still clamped at rest.
    for k in 1..=4 {
        assert!(o[k] < o[k - 1], "wedge {k} should trail wedge {}", k - 1);
    }
    for k in 4..WEDGE_COUNT {
        assert!(approx(o[k], 0.0), "wedge {k} has not started");
    }
}

#[test]
fn wave_wedges_complete_in_order() {
    let mut done_at = [f64::NAN; WEDGE_COUNT];
    let steps = 2200;
    for i in 0..steps {
        let t = f64::from(i) * WAVE_CYCLE_SECS / f64::from(steps);
        let o = wave_offsets(t, false);
        for k in 0..WEDGE_COUNT {
            if done_at[k].is_nan() && o[k] > TAU - 1e-6 {
                done_at[k] = t;
            }
        }
    }
    for k in 1..WEDGE_COUNT {
        assert!(!done_at[k].is_nan(), "wedge {k} never completed");
        assert!(done_at[k] > done_at[k - 1], "wedge {k} completed too early");
    }
}

#[test]
fn reverse_wave_mirrors_forward() {
    for i in 0..300 {
        let t = f64::from(i) * 0.011;
        let fwd = wave_offsets(t, false);
        let rev = wave_offsets(t, true);
        for k in 0..WEDGE_COUNT {
            assert!(approx(rev[k], fwd[WEDGE_COUNT - 1 - k]));
        }
    }
}

#[test]
fn edge_on_scale_is_floored() {
    assert!(approx(edge_on_scale(0.0), 1.0));
    assert_eq!(edge_on_scale(PI / 2.0), MIN_SCALE);
    assert!(approx(edge_on_scale(PI), 1.0));
}

#[test]
fn back_face_shows_past_quarter_turn() {
    assert!(!shows_back(0.0));
    assert!(!shows_back(PI / 2.0 - 0.01));
    assert!(shows_back(PI / 2.0 + 0.01));
    assert!(shows_back(PI));
    assert!(!shows_back(TAU));
}
