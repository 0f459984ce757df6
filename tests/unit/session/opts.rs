use super::*;

#[test]
fn defaults_match_documented_values() {
    let opts = DriverOpts::default();
    assert_eq!(opts.canvas, Canvas::square(440).unwrap());
    assert_eq!(opts.render.clear_rgba, None);
    assert_eq!(opts.neon, NeonParams::default());
}

#[test]
fn partial_json_keeps_defaults() {
    let opts: DriverOpts = serde_json::from_str(
        r#"{"canvas":{"width":200,"height":120},"neon":{"glow_radius":5}}"#,
    )
    .unwrap();
    assert_eq!(opts.canvas.width, 200);
    assert_eq!(opts.canvas.height, 120);
    assert_eq!(opts.neon.glow_radius, 5);
    assert_eq!(opts.neon.bloom_radius, 18);
}

#[test]
fn from_path_reads_json_file() {
    let dir = std::env::temp_dir().join(format!("pizzaiolo_opts_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("opts.json");
    std::fs::write(&path, r#"{"render":{"clear_rgba":[1,2,3,255]}}"#).unwrap();

    let opts = DriverOpts::from_path(&path).unwrap();
    assert_eq!(opts.render.clear_rgba, Some([1, 2, 3, 255]));

    std::fs::write(&path, "{ not json").unwrap();
    assert!(matches!(
        DriverOpts::from_path(&path),
        Err(PizzaError::Serde(_))
    ));
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn zero_canvas_is_rejected() {
    let opts = DriverOpts {
        canvas: Canvas {
            width: 0,
            height: 10,
        },
        ..DriverOpts::default()
    };
    assert!(opts.validate().is_err());
}

#[test]
fn unusable_neon_params_are_rejected() {
    for neon in [
        NeonParams {
            bloom_sigma: 0.0,
            ..NeonParams::default()
        },
        NeonParams {
            bloom_sigma: f32::NAN,
            ..NeonParams::default()
        },
        NeonParams {
            bloom_radius: 1_000_000,
            ..NeonParams::default()
        },
        NeonParams {
            glow_radius: 500,
            ..NeonParams::default()
        },
        NeonParams {
            bloom_screen_opacity: 2.0,
            ..NeonParams::default()
        },
    ] {
        let opts = DriverOpts {
            neon,
            ..DriverOpts::default()
        };
        assert!(
            matches!(opts.validate(), Err(PizzaError::Validation(_))),
            "{neon:?} accepted"
        );
    }
    assert!(DriverOpts::default().validate().is_ok());
}

#[test]
fn config_file_with_zero_sigma_fails_to_load() {
    let dir = std::env::temp_dir().join(format!("pizzaiolo_opts_sigma_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("opts.json");
    std::fs::write(&path, r#"{"neon":{"bloom_sigma":0}}"#).unwrap();
    assert!(matches!(
        DriverOpts::from_path(&path),
        Err(PizzaError::Validation(_))
    ));
    let _ = std::fs::remove_dir_all(&dir);
}
