use super::*;

#[test]
fn lookup_matches_id_for_every_entry() {
    for id in DecorationId::ALL {
        assert_eq!(lookup(id).id, id);
        assert_eq!(id.decoration().id, id);
    }
    assert_eq!(catalog().len(), DecorationId::ALL.len());
}

#[test]
fn ids_serialize_snake_case() {
    assert_eq!(
        serde_json::to_string(&DecorationId::GreenPepper).unwrap(),
        "\"green_pepper\""
    );
    let id: DecorationId = serde_json::from_str("\"hot_honey\"").unwrap();
    assert_eq!(id, DecorationId::HotHoney);
    assert!(serde_json::from_str::<DecorationId>("\"anchovy\"").is_err());
}

#[test]
fn zone_colors_are_distinct_and_fallback_applies() {
    let mut seen = std::collections::HashSet::new();
    for d in catalog() {
        if let Some(rgb) = d.zone_rgb {
            assert!(seen.insert(rgb), "duplicate zone color for {:?}", d.id);
            assert_ne!(rgb, DEFAULT_ZONE_RGB);
        }
    }
    assert_eq!(
        lookup(DecorationId::ExtraCheese).zone_color(),
        DEFAULT_ZONE_RGB
    );
    assert_eq!(
        lookup(DecorationId::Pepperoni).zone_color(),
        Rgb8::new(255, 0, 0)
    );
}

#[test]
fn kinds_split_point_and_zone() {
    assert!(lookup(DecorationId::Pepperoni).is_point());
    assert!(lookup(DecorationId::Olive).is_point());
    assert!(!lookup(DecorationId::HotHoney).is_point());
    assert!(!lookup(DecorationId::Pesto).is_point());
    assert!(!lookup(DecorationId::ExtraCheese).is_point());
}

#[test]
fn every_decoration_draws_something() {
    let span = ZoneSpan {
        center: Point::ORIGIN,
        start: 0.0,
        sweep: std::f64::consts::FRAC_PI_4,
        inner: 40.0,
        outer: 155.0,
    };
    for d in catalog() {
        let mut p = Painter::default();
        match d.kind {
            DecorationKind::Point { draw, footprint } => {
                assert!(footprint > 0.0);
                draw(&mut p, Point::new(100.0, 40.0));
            }
            DecorationKind::Zone { draw, trace } => {
                draw(&mut p, &span);
                assert!(!trace(&span).elements().is_empty());
            }
        }
        assert_eq!(p.transform(), crate::foundation::core::Affine::IDENTITY);
        assert!(!p.finish().is_empty(), "{:?} drew nothing", d.id);
    }
}
