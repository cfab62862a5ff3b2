use super::*;

fn scroller() -> SmoothScroller {
    SmoothScroller::new(SmoothScrollConfig::default(), 5000.0).unwrap()
}

#[test]
fn wheel_eases_toward_the_target() {
    let mut s = scroller();
    s.tick(0.0);
    assert_eq!(s.on_wheel(400.0), Intercept::Consumed);
    assert_eq!(s.target(), 400.0);

    let early = s.tick(100.0);
    assert!(early > 0.0 && early < 400.0);
    let later = s.tick(500.0);
    assert!(later > early && later < 400.0);

    assert_eq!(s.tick(1300.0), 400.0);
    assert!(!s.is_scrolling());
}

#[test]
fn out_cubic_front_loads_the_motion() {
    let mut s = scroller();
    s.tick(0.0);
    s.on_wheel(1000.0);
    let half = s.tick(575.0);
    // 1 - 0.5^3
    assert!((half - 875.0).abs() < 1e-6);
}

#[test]
fn target_is_clamped_to_the_limit() {
    let mut s = scroller();
    s.on_wheel(-300.0);
    assert_eq!(s.target(), 0.0);
    s.on_wheel(99_999.0);
    assert_eq!(s.target(), 5000.0);
    s.set_limit(1200.0);
    assert_eq!(s.target(), 1200.0);
    assert_eq!(s.limit(), 1200.0);
}

#[test]
fn touch_passes_through_by_default() {
    let mut s = scroller();
    assert_eq!(s.on_touch(120.0), Intercept::Passthrough);
    s.sync(120.0);
    assert_eq!(s.position(), 120.0);
    assert_eq!(s.target(), 120.0);
}

#[test]
fn disabled_wheel_smoothing_passes_through() {
    let cfg = SmoothScrollConfig {
        smooth_wheel: false,
        ..SmoothScrollConfig::default()
    };
    let mut s = SmoothScroller::new(cfg, 100.0).unwrap();
    assert_eq!(s.on_wheel(10.0), Intercept::Passthrough);
}

#[test]
fn immediate_scroll_jumps() {
    let mut s = scroller();
    s.scroll_to(2500.0, true);
    assert_eq!(s.position(), 2500.0);
    assert!(!s.is_scrolling());
}

#[test]
fn destroy_stops_motion_for_good() {
    let mut s = scroller();
    s.tick(0.0);
    s.on_wheel(500.0);
    let mid = s.tick(200.0);
    s.destroy();
    assert!(s.is_destroyed());
    assert_eq!(s.tick(5000.0), mid);
    assert_eq!(s.on_wheel(10.0), Intercept::Passthrough);
    s.scroll_to(0.0, true);
    assert_eq!(s.position(), mid);
}

#[test]
fn config_must_have_positive_duration() {
    let cfg = SmoothScrollConfig {
        duration_secs: 0.0,
        ..SmoothScrollConfig::default()
    };
    assert!(SmoothScroller::new(cfg, 100.0).is_err());
}
