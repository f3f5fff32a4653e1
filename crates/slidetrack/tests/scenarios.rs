//! End-to-end interaction scenarios for the slide track.

use std::io::Write;
use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::Mutex;
use slidetrack::prelude::*;
use slidetrack::input::PointerFamily;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn track_with(count: usize, start: usize) -> Track<MemorySurface> {
    init_tracing();
    let config = TrackConfig::new().with_start_index(start);
    let mut track = Track::with_config(MemorySurface::uniform(800.0, count, 200.0), config);
    track.init().expect("track should initialize");
    track
}

fn record_changes(track: &Track<MemorySurface>) -> Arc<Mutex<Vec<ActiveSlideInfo>>> {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let seen_clone = seen.clone();
    track.changed.connect(move |info| seen_clone.lock().push(*info));
    seen
}

fn mouse_drag(track: &mut Track<MemorySurface>, displacement: f32) {
    let start = 400.0;
    track.handle_input(&mut MouseEvent::press(start).into());
    track.handle_input(&mut MouseEvent::moved(start + displacement / 2.0).into());
    track.handle_input(&mut MouseEvent::moved(start + displacement).into());
    track.handle_input(&mut MouseEvent::release(start + displacement).into());
}

fn touch_drag(track: &mut Track<MemorySurface>, displacement: f32) {
    let start = 400.0;
    track.handle_input(&mut TouchEvent::single(TouchPhase::Started, start).into());
    track.handle_input(&mut TouchEvent::single(TouchPhase::Moved, start + displacement).into());
    track.handle_input(&mut TouchEvent::single(TouchPhase::Ended, start + displacement).into());
}

#[test]
fn drag_forward_then_back_with_arrow() {
    let mut track = track_with(5, 0);

    mouse_drag(&mut track, 150.0);
    assert_eq!(track.active_index(), Some(1));

    assert!(track.active_prev());
    assert_eq!(track.active_index(), Some(0));
}

#[test]
fn repeated_backward_drags_stop_at_first_slide() {
    let mut track = track_with(3, 2);
    let seen = record_changes(&track);

    touch_drag(&mut track, -200.0);
    assert_eq!(track.active_index(), Some(1));

    touch_drag(&mut track, -200.0);
    assert_eq!(track.active_index(), Some(0));

    touch_drag(&mut track, -200.0);
    assert_eq!(track.active_index(), Some(0));

    let actives: Vec<usize> = seen.lock().iter().map(|info| info.active).collect();
    // The last drag has no previous slide, so it snaps back to 0.
    assert_eq!(actives, vec![1, 0, 0]);
}

#[test]
fn live_transform_follows_accelerated_displacement() {
    let mut track = track_with(4, 1);
    let before = track.movement().current_x;

    track.handle_input(&mut TouchEvent::single(TouchPhase::Started, 250.0).into());
    for x in [260.0_f32, 300.0, 180.0, 90.0] {
        track.handle_input(&mut TouchEvent::single(TouchPhase::Moved, x).into());
        let d = x - 250.0;
        assert_eq!(track.surface().translate_x(), d * 1.6 + before);
        assert_eq!(
            track.surface().transform(),
            slidetrack::surface::translate3d(d * 1.6 + before)
        );
    }
    // Nothing is committed mid-drag.
    assert_eq!(track.movement().current_x, before);
}

#[test]
fn release_decision_matches_threshold() {
    for (displacement, expected) in [
        (121.0, 2),
        (120.0, 1),
        (0.0, 1),
        (-120.0, 1),
        (-121.0, 0),
    ] {
        let mut track = track_with(3, 1);
        mouse_drag(&mut track, displacement);
        assert_eq!(
            track.active_index(),
            Some(expected),
            "displacement {displacement}"
        );
    }
}

#[test]
fn prev_and_next_are_derived_after_every_change() {
    let mut track = track_with(4, 0);
    let seen = record_changes(&track);

    for index in [3, 0, 2, 1, 3] {
        track.change_slide(index);
    }

    for info in seen.lock().iter() {
        assert_eq!(info.prev.is_none(), info.active == 0);
        assert_eq!(info.next.is_none(), info.active == 3);
    }
}

#[test]
fn edge_navigation_emits_nothing() {
    let mut track = track_with(3, 0);
    let seen = record_changes(&track);

    assert!(!track.active_prev());
    track.change_slide(2);
    assert!(!track.active_next());

    assert_eq!(seen.lock().len(), 1);
    assert_eq!(track.active_index(), Some(2));
}

#[test]
fn burst_of_resizes_reconfigures_once() {
    let mut track = track_with(3, 1);
    let seen = record_changes(&track);
    let t0 = Instant::now();

    track.surface_mut().set_viewport_width(1200.0);
    for step in 0..10 {
        track.handle_resize(t0 + Duration::from_millis(step * 30));
        assert!(!track.poll(t0 + Duration::from_millis(step * 30)));
    }

    let last = t0 + Duration::from_millis(270);
    assert!(!track.poll(last + Duration::from_millis(199)));
    assert!(track.poll(last + Duration::from_millis(200)));
    assert!(!track.poll(last + Duration::from_millis(1000)));

    // (1200 - 200) / 2 - offset
    let positions: Vec<f32> = track.slides().iter().map(|s| s.position_to_center).collect();
    assert_eq!(positions, vec![500.0, 300.0, 100.0]);
    assert_eq!(track.surface().translate_x(), 300.0);
    assert_eq!(track.movement().current_x, 300.0);
    assert_eq!(seen.lock().len(), 1);
}

#[test]
fn navigator_tracks_every_kind_of_change() {
    let mut track = track_with(4, 0);

    let mut controls = MemoryControls::new();
    let prev = controls.add_element("prev");
    let next = controls.add_element("next");
    let navigator = Navigator::new(
        &track,
        controls,
        NavigatorOptions::new().with_arrows(prev, next),
    )
    .expect("navigator should bind");
    let dots: Vec<_> = navigator.indicators().iter().map(|i| i.element).collect();

    let assert_single_active = |navigator: &Navigator<MemoryControls>, expected: usize| {
        assert_eq!(navigator.active_indicator(), Some(expected));
        navigator.with_controls(|controls| {
            assert_eq!(controls.active_elements(), vec![dots[expected]]);
        });
    };
    assert_single_active(&navigator, 0);

    mouse_drag(&mut track, 200.0);
    assert_single_active(&navigator, 1);

    navigator.click_element(&mut track, &next);
    assert_single_active(&navigator, 2);

    navigator.click_element(&mut track, &dots[0]);
    assert_single_active(&navigator, 0);
    assert_eq!(track.surface().active_items(), vec![0]);

    navigator.click(&mut track, Control::Indicator(0));
    assert_single_active(&navigator, 0);

    let t0 = Instant::now();
    track.handle_resize(t0);
    track.poll(t0 + Duration::from_millis(200));
    assert_single_active(&navigator, 0);

    navigator.click_element(&mut track, &prev);
    assert_single_active(&navigator, 0);
}

#[test]
fn mixed_families_do_not_interfere() {
    let mut track = track_with(3, 0);

    track.handle_input(&mut TouchEvent::single(TouchPhase::Started, 100.0).into());
    // Compatibility mouse events during a touch drag are ignored.
    track.handle_input(&mut MouseEvent::moved(900.0).into());
    track.handle_input(&mut MouseEvent::release(900.0).into());
    assert!(track.is_dragging());

    track.handle_input(&mut TouchEvent::single(TouchPhase::Moved, 250.0).into());
    track.handle_input(&mut TouchEvent::single(TouchPhase::Ended, 250.0).into());
    assert!(!track.is_dragging());
    assert_eq!(track.active_index(), Some(1));
}

#[test]
fn samples_report_their_family() {
    let event: InputEvent = TouchEvent::single(TouchPhase::Moved, 5.0).into();
    assert_eq!(event.sample().map(|s| s.family), Some(PointerFamily::Touch));
}

#[test]
fn config_file_drives_tuning() {
    init_tracing();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "start_index = 1\nacceleration = 2.0\nchange_threshold = 40.0\nresize_debounce_ms = 50"
    )
    .unwrap();

    let config = TrackConfig::load(file.path()).unwrap();
    let mut track = Track::with_config(MemorySurface::uniform(800.0, 3, 200.0), config);
    track.init().unwrap();
    assert_eq!(track.active_index(), Some(1));

    let before = track.movement().current_x;
    track.handle_input(&mut MouseEvent::press(0.0).into());
    track.handle_input(&mut MouseEvent::moved(50.0).into());
    assert_eq!(track.surface().translate_x(), 100.0 + before);
    track.handle_input(&mut MouseEvent::release(50.0).into());
    assert_eq!(track.active_index(), Some(2));

    let t0 = Instant::now();
    track.handle_resize(t0);
    assert!(track.poll(t0 + Duration::from_millis(50)));
}
