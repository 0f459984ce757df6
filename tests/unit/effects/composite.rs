use super::*;

#[test]
fn screen_with_black_is_identity() {
    let dst = [120, 60, 30, 200];
    assert_eq!(blend(dst, [0, 0, 0, 0], BlendMode::Screen, 1.0), dst);
    assert_eq!(blend(dst, [0, 0, 0, 255], BlendMode::Screen, 1.0), [120, 60, 30, 255]);
}

#[test]
fn screen_with_white_saturates() {
    let out = blend([10, 200, 90, 255], [255; 4], BlendMode::Screen, 1.0);
    assert_eq!(out, [255; 4]);
}

#[test]
fn screen_never_darkens() {
    for d in [0u8, 17, 128, 254] {
        for s in [0u8, 40, 200, 255] {
            let out = blend([d, d, d, 255], [s, s, s, 255], BlendMode::Screen, 0.45);
            assert!(out[0] >= d);
        }
    }
}

#[test]
fn lighter_adds_and_clamps() {
    let out = blend([100, 200, 0, 128], [100, 100, 50, 128], BlendMode::Lighter, 1.0);
    assert_eq!(out, [200, 255, 50, 255]);
}

#[test]
fn opacity_scales_source() {
    let out = blend([0, 0, 0, 0], [200, 100, 0, 200], BlendMode::Lighter, 0.5);
    assert_eq!(out, [100, 50, 0, 100]);
    assert_eq!(blend([9, 9, 9, 9], [255; 4], BlendMode::Screen, 0.0), [9, 9, 9, 9]);
}

#[test]
fn in_place_rejects_mismatched_buffers() {
    let mut dst = vec![0u8; 8];
    assert!(blend_in_place(&mut dst, &[0u8; 4], BlendMode::Screen, 1.0).is_err());
    assert!(blend_in_place(&mut dst, &[1u8; 8], BlendMode::Lighter, 1.0).is_ok());
    assert_eq!(dst, vec![1u8; 8]);
}
