use super::*;

fn solid(w: u32, h: u32, px: [u8; 4]) -> FrameRGBA {
    FrameRGBA::from_straight(w, h, px.repeat((w * h) as usize)).unwrap()
}

#[test]
fn sobel_is_zero_on_flat_fields_and_borders() {
    let flat = vec![3.0f32; 25];
    assert!(sobel_magnitude(&flat, 5, 5).iter().all(|&m| m == 0.0));

    let mut step = vec![0.0f32; 25];
    for y in 0..5 {
        for x in 3..5 {
            step[y * 5 + x] = 100.0;
        }
    }
    let mag = sobel_magnitude(&step, 5, 5);
    for x in 0..5 {
        assert_eq!(mag[x], 0.0);
        assert_eq!(mag[20 + x], 0.0);
    }
    assert!(mag[5 + 2] > 0.0);
    assert_eq!(mag[5 + 1], 0.0);
}

#[test]
fn sobel_is_exactly_zero_on_flat_luminance() {
    let frame = solid(12, 12, [200, 180, 40, 255]);
    let mut mag = sobel_magnitude(&luminance_map(&frame.data), 12, 12);
    assert!(mag.iter().all(|&m| m == 0.0));
    normalize(&mut mag);
    assert!(mag.iter().all(|&m| m == 0.0));
}

#[test]
fn normalize_handles_zero_max() {
    let mut z = vec![0.0f32; 4];
    normalize(&mut z);
    assert!(z.iter().all(|&v| v == 0.0));

    let mut m = vec![1.0f32, 4.0, 2.0];
    normalize(&mut m);
    assert_eq!(m, vec![0.25, 1.0, 0.5]);
}

#[test]
fn flat_frame_becomes_background() {
    let params = NeonParams {
        bloom_screen_opacity: 0.0,
        bloom_lighter_opacity: 0.0,
        ..NeonParams::default()
    };
    let mut frame = solid(12, 12, [200, 180, 40, 255]);
    let zone = solid(12, 12, [255, 0, 0, 255]);
    neon(&mut frame, &zone, &params).unwrap();
    assert!(
        frame
            .data
            .chunks_exact(4)
            .all(|px| px == [8, 5, 20, 255])
    );
}

#[test]
fn edges_glow_in_zone_color() {
    let params = NeonParams {
        glow_strength: 0.0,
        bloom_screen_opacity: 0.0,
        bloom_lighter_opacity: 0.0,
        ..NeonParams::default()
    };
    let (w, h) = (16u32, 16u32);
    let mut data = Vec::new();
    for _y in 0..h {
        for x in 0..w {
            let v = if x < 8 { 0 } else { 255 };
            data.extend_from_slice(&[v, v, v, 255]);
        }
    }
    let mut frame = FrameRGBA::from_straight(w, h, data).unwrap();
    let zone = solid(w, h, [0, 255, 0, 255]);
    neon(&mut frame, &zone, &params).unwrap();

    let edge = frame.pixel(8, 8);
    assert_eq!(edge, [8, 255, 20, 255]);
    assert_eq!(frame.pixel(2, 8), [8, 5, 20, 255]);
}

#[test]
fn alpha_is_preserved() {
    let mut frame = solid(10, 10, [90, 90, 90, 0]);
    let zone = solid(10, 10, [0, 0, 0, 0]);
    neon(&mut frame, &zone, &NeonParams::default()).unwrap();
    assert!(frame.data.chunks_exact(4).all(|px| px[3] == 0));
}

#[test]
fn mismatched_zone_map_is_rejected() {
    let mut frame = solid(4, 4, [0, 0, 0, 255]);
    let zone = solid(5, 4, [0, 0, 0, 255]);
    assert!(neon(&mut frame, &zone, &NeonParams::default()).is_err());
}

#[test]
fn params_fill_missing_fields_from_defaults() {
    let p: NeonParams = serde_json::from_str(r#"{"glow_strength":0.5}"#).unwrap();
    assert_eq!(p.glow_strength, 0.5);
    assert_eq!(p.background, [8, 5, 20]);
    assert_eq!(p.bloom_radius, 18);
}
