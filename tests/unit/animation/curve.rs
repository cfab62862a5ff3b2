use super::*;
use crate::foundation::core::LengthUnit;

fn ramp() -> Curve<f64> {
    Curve::new(&[0.0, 1.0], &[0.0, 1.0]).unwrap()
}

#[test]
fn clamps_outside_the_table() {
    let c = ramp();
    assert_eq!(c.evaluate(-5.0), 0.0);
    assert_eq!(c.evaluate(5.0), 1.0);
    assert_eq!(evaluate(&c, -5.0), 0.0);
}

#[test]
fn interpolates_each_segment() {
    let c = Curve::new(&[0.0, 0.5, 1.0], &[0.0, 10.0, 0.0]).unwrap();
    assert_eq!(c.evaluate(0.25), 5.0);
    assert_eq!(c.evaluate(0.5), 10.0);
    assert_eq!(c.evaluate(0.75), 5.0);
}

#[test]
fn evaluation_is_idempotent() {
    let c = Curve::new(&[0.0, 0.2, 1.0], &[0.0, 0.35, 0.55]).unwrap();
    let first = c.evaluate(0.613);
    for _ in 0..100 {
        assert_eq!(c.evaluate(0.613), first);
    }
}

#[test]
fn zero_width_segment_steps_to_the_right_value() {
    let c = Curve::new(&[0.0, 0.5, 0.5, 1.0], &[0.0, 1.0, 5.0, 6.0]).unwrap();
    assert_eq!(c.evaluate(0.25), 0.5);
    assert_eq!(c.evaluate(0.5), 5.0);
    assert_eq!(c.evaluate(0.75), 5.5);
}

#[test]
fn collapsed_table_is_a_step() {
    let c = Curve::span(0.5, 0.5, 0.0, 1.0).unwrap();
    assert_eq!(c.evaluate(0.49), 0.0);
    assert_eq!(c.evaluate(0.5), 1.0);
    assert_eq!(c.evaluate(0.51), 1.0);

    let leading = Curve::new(&[0.2, 0.2, 1.0], &[0.0, 4.0, 8.0]).unwrap();
    assert_eq!(leading.evaluate(0.1), 0.0);
    assert_eq!(leading.evaluate(0.2), 4.0);
    assert_eq!(leading.evaluate(0.6), 6.0);
}

#[test]
fn non_finite_progress_reads_as_zero() {
    let c = Curve::new(&[-1.0, 1.0], &[0.0, 2.0]).unwrap();
    assert_eq!(c.evaluate(f64::NAN), 1.0);
    assert_eq!(c.evaluate(f64::INFINITY), 1.0);
}

#[test]
fn malformed_tables_are_rejected() {
    assert!(matches!(
        Curve::<f64>::new(&[], &[]),
        Err(CloserError::Curve(_))
    ));
    assert!(matches!(
        Curve::new(&[0.0, 1.0], &[0.0]),
        Err(CloserError::Curve(_))
    ));
    assert!(matches!(
        Curve::new(&[1.0, 0.0], &[0.0, 1.0]),
        Err(CloserError::Curve(_))
    ));
    assert!(matches!(
        Curve::new(&[0.0, f64::NAN], &[0.0, 1.0]),
        Err(CloserError::Curve(_))
    ));
}

#[test]
fn mixed_length_units_are_rejected() {
    let err = Curve::span(0.0, 1.0, CssLength::vw(-22.0), CssLength::px(0.0)).unwrap_err();
    assert!(err.to_string().contains("cannot be interpolated"));
}

#[test]
fn lengths_interpolate_in_their_unit() {
    let c = Curve::span(0.0, 1.0, CssLength::vw(-22.0), CssLength::vw(-2.0)).unwrap();
    let mid = c.evaluate(0.5);
    assert_eq!(mid.unit, LengthUnit::Vw);
    assert_eq!(mid.value, -12.0);
}

#[test]
fn colors_interpolate_per_channel() {
    let c = Curve::span(
        0.0,
        1.0,
        Rgba::new(0, 100, 255, 0.2),
        Rgba::new(255, 100, 0, 0.4),
    )
    .unwrap();
    let mid = c.evaluate(0.5);
    assert_eq!((mid.r, mid.g, mid.b), (128, 100, 128));
    assert!((mid.a - 0.3).abs() < 1e-12);
}

#[test]
fn vectors_interpolate_per_component() {
    let c = Curve::span(0.0, 1.0, Vec2::new(-30.0, 18.0), Vec2::ZERO).unwrap();
    assert_eq!(c.evaluate(0.5), Vec2::new(-15.0, 9.0));
    assert_eq!(c.domain(), (0.0, 1.0));
    assert_eq!(c.points().len(), 2);
}
