use super::*;
use crate::foundation::core::Canvas;

fn noise(len: usize) -> Vec<u8> {
    let mut state = 0x2545_f491_u32;
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            (state >> 24) as u8
        })
        .collect()
}

#[test]
fn monochrome_is_idempotent_and_keeps_alpha() {
    let mut buf = noise(4 * 64);
    let alpha: Vec<u8> = buf.chunks_exact(4).map(|px| px[3]).collect();
    monochrome(&mut buf);
    let once = buf.clone();
    monochrome(&mut buf);
    assert_eq!(buf, once);
    assert!(buf.chunks_exact(4).all(|px| px[0] == px[1] && px[1] == px[2]));
    assert_eq!(alpha, buf.chunks_exact(4).map(|px| px[3]).collect::<Vec<_>>());
}

#[test]
fn monochrome_uses_rec601_weights() {
    let mut px = [255u8, 0, 0, 200];
    monochrome(&mut px);
    assert_eq!(px, [76, 76, 76, 200]);
    let mut px = [0u8, 0, 255, 9];
    monochrome(&mut px);
    assert_eq!(px, [29, 29, 29, 9]);
}

#[test]
fn invert_is_an_involution() {
    let original = noise(4 * 50);
    let mut buf = original.clone();
    invert(&mut buf);
    assert_ne!(buf, original);
    invert(&mut buf);
    assert_eq!(buf, original);
    let mut px = [0u8, 100, 255, 17];
    invert(&mut px);
    assert_eq!(px, [255, 155, 0, 17]);
}

#[test]
fn neon_without_zone_map_is_an_error() {
    let mut frame = FrameRGBA::transparent(Canvas::square(4).unwrap());
    let err = apply_filter(FilterMode::Neon, &mut frame, None, &NeonParams::default());
    assert!(err.is_err());
}

#[test]
fn none_leaves_frame_untouched() {
    let data = noise(4 * 9);
    let mut frame = FrameRGBA::from_straight(3, 3, data.clone()).unwrap();
    apply_filter(FilterMode::None, &mut frame, None, &NeonParams::default()).unwrap();
    assert_eq!(frame.data, data);
}

#[test]
fn boundary_form_is_nullable() {
    assert_eq!(FilterMode::from_option(None), FilterMode::None);
    assert_eq!(FilterMode::Neon.to_option(), Some(FilterMode::Neon));
    assert_eq!(FilterMode::None.to_option(), None);
    let json = serde_json::to_string(&Some(FilterMode::Negative)).unwrap();
    assert_eq!(json, "\"negative\"");
    let back: Option<FilterMode> = serde_json::from_str("null").unwrap();
    assert_eq!(back, None);
    assert!(serde_json::from_str::<FilterMode>("\"sepia\"").is_err());
}
