use super::*;

#[test]
fn mul_div255_rounds() {
    assert_eq!(mul_div255_u8(255, 255), 255);
    assert_eq!(mul_div255_u8(128, 255), 128);
    assert_eq!(mul_div255_u8(0, 255), 0);
}

#[test]
fn luminance_of_white_is_255() {
    assert!((luminance(255, 255, 255) - 255.0).abs() < 1e-3);
    assert_eq!(luminance(0, 0, 0), 0.0);
}

#[test]
fn premultiply_then_unpremultiply_is_stable_for_opaque_pixels() {
    let mut px = vec![10u8, 200, 33, 255, 50, 60, 70, 0];
    premultiply_rgba8_in_place(&mut px);
    unpremultiply_rgba8_in_place(&mut px);
    assert_eq!(px, vec![10, 200, 33, 255, 0, 0, 0, 0]);
}

#[test]
fn unpremultiply_half_alpha() {
    let mut px = vec![64u8, 0, 128, 128];
    unpremultiply_rgba8_in_place(&mut px);
    assert_eq!(px, vec![128, 0, 255, 128]);
}
