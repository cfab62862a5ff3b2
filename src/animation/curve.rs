use crate::foundation::{
    core::{CssLength, Rgba, Vec2},
    error::{CloserError, CloserResult},
    math::lerp,
};

/// Values that can be blended between two breakpoints.
pub trait Lerp: Sized + Clone {
    /// Blend `a` toward `b` by `t` (0 gives `a`, 1 gives `b`).
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;

    /// Whether two values can share a segment. Checked once, when a curve is
    /// built.
    fn compatible(_a: &Self, _b: &Self) -> bool {
        true
    }
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        lerp(*a, *b, t)
    }
}

impl Lerp for f32 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        lerp(f64::from(*a), f64::from(*b), t) as f32
    }
}

impl Lerp for Vec2 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Vec2::new(lerp(a.x, b.x, t), lerp(a.y, b.y, t))
    }
}

impl Lerp for Rgba {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        fn lerp_u8(a: u8, b: u8, t: f64) -> u8 {
            lerp(f64::from(a), f64::from(b), t).round().clamp(0.0, 255.0) as u8
        }

        Self {
            r: lerp_u8(a.r, b.r, t),
            g: lerp_u8(a.g, b.g, t),
            b: lerp_u8(a.b, b.b, t),
            a: lerp(a.a, b.a, t),
        }
    }
}

impl Lerp for CssLength {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            value: lerp(a.value, b.value, t),
            unit: a.unit,
        }
    }

    fn compatible(a: &Self, b: &Self) -> bool {
        a.unit == b.unit
    }
}

/// One control point of a breakpoint table.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Breakpoint<T> {
    pub at: f64,
    pub value: T,
}

/// Piecewise-linear curve over progress. Inputs are non-decreasing and the
/// table is never empty, so evaluation cannot fail once built.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Curve<T> {
    points: Vec<Breakpoint<T>>,
}

impl<T: Lerp> Curve<T> {
    /// Build from parallel input/output slices, the way motion tables are
    /// usually written (`[0, 0.55, 1] -> [a, b, c]`).
    pub fn new(inputs: &[f64], outputs: &[T]) -> CloserResult<Self> {
        if inputs.len() != outputs.len() {
            return Err(CloserError::curve(format!(
                "input/output length mismatch ({} inputs, {} outputs)",
                inputs.len(),
                outputs.len()
            )));
        }
        let points = inputs
            .iter()
            .zip(outputs)
            .map(|(&at, value)| Breakpoint {
                at,
                value: value.clone(),
            })
            .collect();
        Self::from_points(points)
    }

    /// Two-point curve `[from, to] -> [a, b]`.
    pub fn span(from: f64, to: f64, a: T, b: T) -> CloserResult<Self> {
        Self::from_points(vec![
            Breakpoint { at: from, value: a },
            Breakpoint { at: to, value: b },
        ])
    }

    pub fn from_points(points: Vec<Breakpoint<T>>) -> CloserResult<Self> {
        if points.is_empty() {
            return Err(CloserError::curve("breakpoint table must not be empty"));
        }
        if let Some(p) = points.iter().find(|p| !p.at.is_finite()) {
            return Err(CloserError::curve(format!(
                "breakpoint input must be finite (got {})",
                p.at
            )));
        }
        if !points.windows(2).all(|w| w[0].at <= w[1].at) {
            return Err(CloserError::curve(
                "breakpoint inputs must be non-decreasing",
            ));
        }
        if !points
            .windows(2)
            .all(|w| T::compatible(&w[0].value, &w[1].value))
        {
            return Err(CloserError::curve(
                "adjacent breakpoint outputs cannot be interpolated",
            ));
        }
        Ok(Self { points })
    }

    pub fn points(&self) -> &[Breakpoint<T>] {
        &self.points
    }

    /// First and last breakpoint inputs.
    pub fn domain(&self) -> (f64, f64) {
        (self.first().at, self.last().at)
    }

    /// Evaluate at `progress`. Values outside the table clamp to the nearest
    /// endpoint; a zero-width segment steps to its right-hand value, also when
    /// it sits at the first input. Non-finite progress reads as 0.
    pub fn evaluate(&self, progress: f64) -> T {
        let p = if progress.is_finite() { progress } else { 0.0 };

        let first = self.first();
        if p < first.at {
            return first.value.clone();
        }
        let last = self.last();
        if p >= last.at {
            return last.value.clone();
        }

        // first.at <= p < last.at, so 1 <= idx < len.
        let idx = self.points.partition_point(|k| k.at <= p);
        let a = &self.points[idx - 1];
        let b = &self.points[idx];
        let denom = b.at - a.at;
        if denom <= 0.0 {
            return b.value.clone();
        }
        T::lerp(&a.value, &b.value, (p - a.at) / denom)
    }

    fn first(&self) -> &Breakpoint<T> {
        &self.points[0]
    }

    fn last(&self) -> &Breakpoint<T> {
        &self.points[self.points.len() - 1]
    }
}

/// Free-function form of [`Curve::evaluate`].
pub fn evaluate<T: Lerp>(table: &Curve<T>, progress: f64) -> T {
    table.evaluate(progress)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/curve.rs"]
mod tests;
