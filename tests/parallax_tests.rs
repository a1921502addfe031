//! Ring parallax tests
//!
//! Tests for:
//! - Single smoothing step arithmetic and axis mapping
//! - Convergence toward `pointer * sensitivity`
//! - Pointer offset derivation from screen coordinates

use glam::Vec2;

use skyring::animation::parallax::{BLEND, DEFAULT_SENSITIVITIES, RETAIN};
use skyring::{PointerOffset, RingState};

const EPSILON: f32 = 1e-6;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

// ============================================================================
// Smoothing step
// ============================================================================

#[test]
fn constants_sum_to_one() {
    assert!(approx_eq(RETAIN + BLEND, 1.0));
    assert_eq!(DEFAULT_SENSITIVITIES, [1.2, 0.375, -0.275]);
}

#[test]
fn first_step_from_rest() {
    let mut ring = RingState::new(1.2);
    ring.step(PointerOffset::new(0.0, 0.1));
    assert!(approx_eq(ring.rotation.x, 0.006), "got {}", ring.rotation.x);
    assert_eq!(ring.rotation.y, 0.0);
}

#[test]
fn vertical_pointer_drives_x_and_horizontal_drives_y() {
    let mut ring = RingState::new(1.0);
    ring.step(PointerOffset::new(0.2, 0.0));
    assert_eq!(ring.rotation.x, 0.0);
    assert!(approx_eq(ring.rotation.y, 0.01));
}

#[test]
fn step_blends_previous_rotation() {
    let mut ring = RingState::new(0.5);
    ring.rotation = Vec2::new(0.1, -0.2);
    ring.step(PointerOffset::new(0.4, 0.2));
    assert!(approx_eq(ring.rotation.x, 0.1 * 0.95 + 0.2 * 0.05 * 0.5));
    assert!(approx_eq(ring.rotation.y, -0.2 * 0.95 + 0.4 * 0.05 * 0.5));
}

#[test]
fn zero_pointer_decays_toward_rest() {
    let mut ring = RingState::new(1.2);
    ring.rotation = Vec2::new(0.3, -0.3);
    for _ in 0..500 {
        ring.step(PointerOffset::ZERO);
    }
    assert!(ring.rotation.length() < 1e-6);
}

#[test]
fn negative_sensitivity_leans_the_other_way() {
    let mut inner = RingState::new(DEFAULT_SENSITIVITIES[0]);
    let mut outer = RingState::new(DEFAULT_SENSITIVITIES[2]);
    let p = PointerOffset::new(0.05, 0.05);
    inner.step(p);
    outer.step(p);
    assert!(inner.rotation.x > 0.0 && outer.rotation.x < 0.0);
    assert!(inner.rotation.y > 0.0 && outer.rotation.y < 0.0);
}

// ============================================================================
// Convergence
// ============================================================================

#[test]
fn converges_to_pointer_times_sensitivity() {
    let p = PointerOffset::new(-0.12, 0.08);
    for s in DEFAULT_SENSITIVITIES {
        let mut ring = RingState::new(s);
        for _ in 0..1000 {
            ring.step(p);
        }
        let target = ring.target(p);
        assert!(approx_eq(target.x, p.y * s));
        assert!(approx_eq(target.y, p.x * s));
        assert!((ring.rotation - target).length() < 1e-5, "s = {s}: {:?} vs {target:?}", ring.rotation);
    }
}

#[test]
fn target_is_a_fixed_point() {
    let p = PointerOffset::new(0.03, -0.07);
    let mut ring = RingState::new(0.375);
    ring.rotation = ring.target(p);
    let before = ring.rotation;
    ring.step(p);
    assert!((ring.rotation - before).length() < 1e-7);
}

#[test]
fn distance_to_target_shrinks_monotonically() {
    let p = PointerOffset::new(0.1, 0.1);
    let mut ring = RingState::new(1.2);
    let mut last = (ring.rotation - ring.target(p)).length();
    for _ in 0..100 {
        ring.step(p);
        let d = (ring.rotation - ring.target(p)).length();
        assert!(d < last);
        last = d;
    }
}

// ============================================================================
// PointerOffset
// ============================================================================

#[test]
fn pointer_at_viewport_centre_is_zero() {
    let p = PointerOffset::from_screen(Vec2::new(640.0, 360.0), Vec2::new(1280.0, 720.0), 0.0003);
    assert_eq!(p, PointerOffset::ZERO);
}

#[test]
fn pointer_offset_is_scaled_distance_from_centre() {
    let p = PointerOffset::from_screen(Vec2::new(740.0, 310.0), Vec2::new(1280.0, 720.0), 0.0003);
    assert!(approx_eq(p.x, 0.03), "x = {}", p.x);
    assert!(approx_eq(p.y, -0.015), "y = {}", p.y);
}

#[test]
fn pointer_from_vec2() {
    let p: PointerOffset = Vec2::new(0.5, -0.25).into();
    assert_eq!(p, PointerOffset::new(0.5, -0.25));
    assert_eq!(PointerOffset::default(), PointerOffset::ZERO);
}
