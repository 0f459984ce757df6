use super::*;
use crate::foundation::core::Canvas;

fn cfg() -> SinkConfig {
    SinkConfig {
        width: 2,
        height: 2,
        frame_delay_ms: 40,
        frame_count: 2,
    }
}

#[test]
fn in_memory_sink_keeps_frames_in_order() {
    let mut sink = InMemorySink::new();
    let frame = FrameRGBA::transparent(Canvas::square(2).unwrap());
    sink.begin(cfg()).unwrap();
    sink.push_frame(0, &frame).unwrap();
    sink.push_frame(1, &frame).unwrap();
    sink.end().unwrap();

    assert!(sink.is_finished());
    assert_eq!(sink.config(), Some(cfg()));
    let idx: Vec<u32> = sink.frames().iter().map(|(i, _)| *i).collect();
    assert_eq!(idx, vec![0, 1]);
}

#[test]
fn begin_resets_previous_capture() {
    let mut sink = InMemorySink::new();
    let frame = FrameRGBA::transparent(Canvas::square(2).unwrap());
    sink.begin(cfg()).unwrap();
    sink.push_frame(0, &frame).unwrap();
    sink.end().unwrap();
    sink.begin(cfg()).unwrap();
    assert!(sink.frames().is_empty());
    assert!(!sink.is_finished());
}

#[test]
fn push_before_begin_is_an_error() {
    let mut sink = InMemorySink::new();
    let frame = FrameRGBA::transparent(Canvas::square(2).unwrap());
    assert!(sink.push_frame(0, &frame).is_err());
}
