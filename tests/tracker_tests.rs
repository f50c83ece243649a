// Host-side tests for the pointer follower and press ripples.

mod support;

use glam::Vec2;
use grid_core::constants::*;
use grid_core::{ElementKind, InputSample, OnComplete, PointerTracker, StyleProp};
use instant::{Duration, Instant};
use support::RecordingRenderer;

fn tracker(r: &mut RecordingRenderer) -> PointerTracker<usize> {
    let mut t = PointerTracker::new();
    t.setup(r).unwrap();
    t
}

#[test]
fn setup_creates_follower_once() {
    let mut r = RecordingRenderer::standard();
    let mut t = tracker(&mut r);
    t.setup(&mut r).unwrap();
    assert_eq!(r.elements_of(ElementKind::Follower).len(), 1);
    assert_eq!(t.follower(), Some(&0));
}

#[test]
fn move_positions_follower() {
    let mut r = RecordingRenderer::standard();
    let mut t = tracker(&mut r);
    t.update_position(&mut r, &InputSample::mouse(42.0, 17.0), Instant::now());
    assert_eq!(r.visuals[0].position, Some(Vec2::new(42.0, 17.0)));
}

#[test]
fn press_spawns_fading_ripple_and_grows_follower() {
    let mut r = RecordingRenderer::standard();
    let mut t = tracker(&mut r);
    t.create_ripple_effect(&mut r, &InputSample::mouse(30.0, 40.0), Instant::now())
        .unwrap();

    let follower = &r.visuals[0];
    assert_eq!(follower.scale, Some(FOLLOWER_PRESS_SCALE));

    let ripples = r.elements_of(ElementKind::Ripple);
    assert_eq!(ripples.len(), 1);
    let ripple = &r.visuals[ripples[0]];
    assert_eq!(ripple.position, Some(Vec2::new(30.0, 40.0)));
    assert_eq!(ripple.scale, Some(RIPPLE_END_SCALE));
    assert_eq!(ripple.opacity, Some(RIPPLE_END_OPACITY));
    assert!(ripple.removal_scheduled);

    let call = r
        .animations
        .iter()
        .find(|a| a.element == ripples[0])
        .unwrap();
    assert_eq!(call.duration, RIPPLE_DURATION);
    assert_eq!(call.on_complete, OnComplete::Remove);
    assert_eq!(
        call.props,
        vec![
            StyleProp::Scale(RIPPLE_END_SCALE),
            StyleProp::Opacity(RIPPLE_END_OPACITY)
        ]
    );
}

#[test]
fn release_restores_follower_scale() {
    let mut r = RecordingRenderer::standard();
    let mut t = tracker(&mut r);
    t.create_ripple_effect(&mut r, &InputSample::mouse(0.0, 0.0), Instant::now())
        .unwrap();
    t.release(&mut r);
    assert_eq!(r.visuals[0].scale, Some(FOLLOWER_REST_SCALE));
    let last = r.animations.last().unwrap();
    assert_eq!(last.duration, FOLLOWER_SCALE_DURATION);
}

#[test]
fn overlapping_ripples_are_independent() {
    let mut r = RecordingRenderer::standard();
    let mut t = tracker(&mut r);
    let now = Instant::now();
    for i in 0..3 {
        t.create_ripple_effect(&mut r, &InputSample::mouse(i as f32, 0.0), now)
            .unwrap();
    }
    assert_eq!(r.elements_of(ElementKind::Ripple).len(), 3);
    assert_eq!(t.live_ripples().count(), 3);
}

#[test]
fn live_ripples_follow_pointer_until_expired() {
    let mut r = RecordingRenderer::standard();
    let mut t = tracker(&mut r);
    let start = Instant::now();
    t.create_ripple_effect(&mut r, &InputSample::mouse(5.0, 5.0), start)
        .unwrap();
    let ripple = r.elements_of(ElementKind::Ripple)[0];

    t.update_position(
        &mut r,
        &InputSample::mouse(8.0, 9.0),
        start + Duration::from_millis(100),
    );
    assert_eq!(r.visuals[ripple].position, Some(Vec2::new(8.0, 9.0)));

    t.update_position(&mut r, &InputSample::mouse(50.0, 60.0), start + Duration::from_secs(1));
    assert_eq!(t.live_ripples().count(), 0);
    assert_eq!(r.visuals[ripple].position, Some(Vec2::new(8.0, 9.0)));
    assert_eq!(r.visuals[0].position, Some(Vec2::new(50.0, 60.0)));
}

#[test]
fn touch_press_uses_first_touch() {
    let mut r = RecordingRenderer::standard();
    let mut t = tracker(&mut r);
    let sample = InputSample::touch(&[Vec2::new(3.0, 4.0), Vec2::new(9.0, 9.0)], &[]);
    t.create_ripple_effect(&mut r, &sample, Instant::now()).unwrap();
    let ripple = r.elements_of(ElementKind::Ripple)[0];
    assert_eq!(r.visuals[ripple].position, Some(Vec2::new(3.0, 4.0)));
}

#[test]
fn empty_touch_press_skips_ripple() {
    let mut r = RecordingRenderer::standard();
    let mut t = tracker(&mut r);
    let empty = InputSample::touch(&[], &[]);
    t.create_ripple_effect(&mut r, &empty, Instant::now()).unwrap();
    assert!(r.elements_of(ElementKind::Ripple).is_empty());
    assert_eq!(r.visuals[0].scale, Some(FOLLOWER_PRESS_SCALE));

    t.update_position(&mut r, &empty, Instant::now());
    assert_eq!(r.visuals[0].position, None);
}

#[test]
fn ripple_creation_failure_is_reported() {
    let mut r = RecordingRenderer::standard();
    r.fail_ripples = true;
    let mut t = tracker(&mut r);
    let res = t.create_ripple_effect(&mut r, &InputSample::mouse(1.0, 1.0), Instant::now());
    assert!(res.is_err());
    assert_eq!(t.live_ripples().count(), 0);
}

#[test]
fn expired_ripples_are_removed_from_renderer() {
    let mut r = RecordingRenderer::standard();
    let mut t = tracker(&mut r);
    let start = Instant::now();
    t.create_ripple_effect(&mut r, &InputSample::mouse(5.0, 5.0), start)
        .unwrap();
    let later = start + Duration::from_millis(500);
    t.create_ripple_effect(&mut r, &InputSample::mouse(6.0, 6.0), later)
        .unwrap();
    let ripples = r.elements_of(ElementKind::Ripple);

    t.prune(&mut r, start + Duration::from_millis(800));
    assert!(r.visuals[ripples[0]].removed);
    assert!(!r.visuals[ripples[1]].removed);
    assert_eq!(t.live_ripples().count(), 1);

    t.prune(&mut r, start + Duration::from_secs(2));
    assert!(r.visuals[ripples[1]].removed);
    assert_eq!(t.live_ripples().count(), 0);
    assert!(!r.visuals[0].removed);
}
