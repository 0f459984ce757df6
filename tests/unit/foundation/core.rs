use super::*;

#[test]
fn canvas_rejects_zero_and_oversized_dimensions() {
    assert!(Canvas::new(0, 10).is_err());
    assert!(Canvas::new(10, 0).is_err());
    assert!(Canvas::new(70_000, 10).is_err());
    assert!(Canvas::new(64, 32).is_ok());
}

#[test]
fn canvas_center_and_len() {
    let c = Canvas::new(64, 32).unwrap();
    assert_eq!(c.center(), Point::new(32.0, 16.0));
    assert_eq!(c.rgba_len(), 64 * 32 * 4);
}

#[test]
fn wedge_angle_divides_full_turn() {
    assert!((WEDGE_ANGLE * WEDGE_COUNT as f64 - std::f64::consts::TAU).abs() < 1e-12);
}

#[test]
fn rgb_promotes_to_opaque_rgba() {
    let c = Rgb8::new(1, 2, 3).opaque();
    assert_eq!(c.to_array(), [1, 2, 3, 255]);
}
