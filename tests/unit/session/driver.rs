use super::*;
use crate::animation::schedule::ROTATION_STEP_RAD;
use crate::encode::sink::InMemorySink;
use crate::scene::creation::{CreationDraft, CreationId};

fn driver() -> FrameDriver {
    let opts = DriverOpts {
        canvas: Canvas::square(64).unwrap(),
        ..DriverOpts::default()
    };
    FrameDriver::new(opts).unwrap()
}

struct FailingSink {
    fail_at: u32,
}

impl FrameSink for FailingSink {
    fn begin(&mut self, _cfg: SinkConfig) -> PizzaResult<()> {
        Ok(())
    }

    fn push_frame(&mut self, idx: u32, _frame: &FrameRGBA) -> PizzaResult<()> {
        if idx == self.fail_at {
            return Err(PizzaError::encode("disk full"));
        }
        Ok(())
    }

    fn end(&mut self) -> PizzaResult<()> {
        Ok(())
    }
}

#[test]
fn rotation_advances_per_tick_and_resets_when_cleared() {
    let mut d = driver();
    d.set_animation(AnimationMode::RotateCw);
    d.render_frame(0.0).unwrap();
    d.render_frame(0.016).unwrap();
    assert!((d.rotation() - 2.0 * ROTATION_STEP_RAD).abs() < 1e-12);

    d.set_animation(AnimationMode::Flip);
    assert!(d.rotation() > 0.0);
    d.set_animation(AnimationMode::None);
    assert_eq!(d.rotation(), 0.0);
}

#[test]
fn counter_clockwise_rotation_wraps_positive() {
    let mut d = driver();
    d.set_animation(AnimationMode::RotateCcw);
    d.render_frame(0.0).unwrap();
    assert!((d.rotation() - (TAU - ROTATION_STEP_RAD)).abs() < 1e-12);
}

#[test]
fn non_rotation_modes_do_not_touch_the_accumulator() {
    let mut d = driver();
    d.set_animation(AnimationMode::WaveForward);
    d.render_frame(0.5).unwrap();
    assert_eq!(d.rotation(), 0.0);
}

#[test]
fn export_leaves_accumulator_and_live_frame_alone() {
    let mut d = driver();
    d.toggle_decoration(SelectionTarget::Whole, DecorationId::Pepperoni);
    d.set_animation(AnimationMode::RotateCw);
    for i in 0..3 {
        d.render_frame(f64::from(i) / 60.0).unwrap();
    }
    let rotation = d.rotation();
    let live = d.live_frame().cloned();

    let mut sink = InMemorySink::new();
    d.export_cycle(6, &mut sink).unwrap();

    assert_eq!(d.rotation(), rotation);
    assert_eq!(d.live_frame().cloned(), live);
    assert_eq!(sink.frames().len(), 6);
    assert!(sink.is_finished());
    let cfg = sink.config().unwrap();
    assert_eq!((cfg.width, cfg.height, cfg.frame_count), (64, 64, 6));
}

#[test]
fn failing_sink_reports_error_and_keeps_state() {
    let mut d = driver();
    d.set_animation(AnimationMode::RotateCcw);
    d.render_frame(0.0).unwrap();
    let rotation = d.rotation();
    let live = d.live_frame().cloned();

    let err = d
        .export_cycle(4, &mut FailingSink { fail_at: 2 })
        .unwrap_err();
    assert!(matches!(err, PizzaError::Encode(_)));
    assert!(err.to_string().contains("frame 2"));
    assert_eq!(d.rotation(), rotation);
    assert_eq!(d.live_frame().cloned(), live);
}

#[test]
fn capture_samples_the_flip_cycle() {
    let mut d = driver();
    d.set_animation(AnimationMode::Flip);
    let frames = d.capture_cycle(4).unwrap();
    assert_eq!(frames.len(), 4);
    // t = 0 is face up, t = 0.525 is past edge-on: the two samples differ.
    assert_ne!(frames[0], frames[1]);
    assert!(d.live_frame().is_none());
    assert!(d.capture_cycle(0).is_err());
}

#[test]
fn still_export_uses_fixed_delay() {
    let mut d = driver();
    let mut sink = InMemorySink::new();
    d.export_cycle(2, &mut sink).unwrap();
    assert_eq!(sink.config().unwrap().frame_delay_ms, STILL_FRAME_DELAY_MS);
    assert_eq!(sink.frames()[0].1, sink.frames()[1].1);
}

#[test]
fn invalid_creation_keeps_current_scene() {
    let mut d = driver();
    d.toggle_decoration(SelectionTarget::Whole, DecorationId::Olive);
    let before = d.scene().clone();
    let bad = SavedCreation {
        id: CreationId(1),
        draft: CreationDraft {
            name: String::new(),
            topology: Topology::Whole,
            toppings: Vec::new(),
            left_toppings: Vec::new(),
            right_toppings: Vec::new(),
            animation: None,
            filter: None,
        },
        created_at: 0,
    };
    assert!(d.load_creation(&bad).is_err());
    assert_eq!(d.scene(), &before);
}

#[test]
fn every_filter_renders() {
    let mut d = driver();
    d.toggle_decoration(SelectionTarget::Whole, DecorationId::Mushroom);
    d.toggle_decoration(SelectionTarget::Whole, DecorationId::HotHoney);
    for filter in [
        FilterMode::None,
        FilterMode::Mono,
        FilterMode::Negative,
        FilterMode::Neon,
    ] {
        d.set_filter(filter);
        let frame = d.render_frame(0.0).unwrap();
        assert_eq!(frame.data.len(), 64 * 64 * 4);
    }
}

#[test]
fn advance_ticks_only_moves_rotation_modes() {
    let mut d = driver();
    d.advance_ticks(10);
    assert_eq!(d.rotation(), 0.0);
    d.set_animation(AnimationMode::RotateCw);
    d.advance_ticks(10);
    assert!((d.rotation() - 10.0 * ROTATION_STEP_RAD).abs() < 1e-12);
    assert!(d.live_frame().is_none());
}

#[test]
fn render_at_starts_unrotated_and_counts_whole_ticks() {
    let mut d = driver();
    d.set_animation(AnimationMode::RotateCw);
    d.render_frame(0.0).unwrap();

    d.render_at(0.0).unwrap();
    assert_eq!(d.rotation(), 0.0);

    d.render_at(0.5).unwrap();
    assert!((d.rotation() - 30.0 * ROTATION_STEP_RAD).abs() < 1e-12);
    assert!(d.live_frame().is_some());

    d.set_animation(AnimationMode::Flip);
    d.render_at(0.9).unwrap();
    assert_eq!(d.rotation(), 0.0);
}

#[test]
fn render_at_zero_matches_the_still_frame() {
    let mut still = driver();
    still.toggle_decoration(SelectionTarget::Whole, DecorationId::Pepperoni);
    let expected = still.render_frame(0.0).unwrap();

    let mut spinning = driver();
    spinning.toggle_decoration(SelectionTarget::Whole, DecorationId::Pepperoni);
    spinning.set_animation(AnimationMode::RotateCcw);
    assert_eq!(spinning.render_at(0.0).unwrap(), expected);
}
