//! Composable samplers. Anything that turns a progress value into an output
//! implements [`Sample`]; combinators chain and post-process without holding
//! state, so a whole chain can be re-sampled every frame.

use crate::{
    animation::curve::{Curve, Lerp},
    foundation::core::blur_filter,
};

pub trait Sample {
    type Output;

    fn sample(&self, progress: f64) -> Self::Output;
}

impl<T: Lerp> Sample for Curve<T> {
    type Output = T;

    fn sample(&self, progress: f64) -> T {
        self.evaluate(progress)
    }
}

impl<S: Sample + ?Sized> Sample for &S {
    type Output = S::Output;

    fn sample(&self, progress: f64) -> S::Output {
        (**self).sample(progress)
    }
}

/// Always the same value, whatever the progress.
#[derive(Clone, Debug, PartialEq)]
pub struct Constant<T>(pub T);

impl<T: Clone> Sample for Constant<T> {
    type Output = T;

    fn sample(&self, _progress: f64) -> T {
        self.0.clone()
    }
}

/// Post-processes the output of `inner` (e.g. a blur radius into a filter
/// string).
#[derive(Clone, Debug)]
pub struct Map<S, F> {
    inner: S,
    f: F,
}

impl<S, F, U> Sample for Map<S, F>
where
    S: Sample,
    F: Fn(S::Output) -> U,
{
    type Output = U;

    fn sample(&self, progress: f64) -> U {
        (self.f)(self.inner.sample(progress))
    }
}

/// Feeds the scalar output of `first` as the progress of `second`.
#[derive(Clone, Debug)]
pub struct Chain<A, B> {
    first: A,
    second: B,
}

impl<A, B> Sample for Chain<A, B>
where
    A: Sample<Output = f64>,
    B: Sample,
{
    type Output = B::Output;

    fn sample(&self, progress: f64) -> B::Output {
        self.second.sample(self.first.sample(progress))
    }
}

pub fn map<S, F, U>(inner: S, f: F) -> Map<S, F>
where
    S: Sample,
    F: Fn(S::Output) -> U,
{
    Map { inner, f }
}

pub fn chain<A, B>(first: A, second: B) -> Chain<A, B>
where
    A: Sample<Output = f64>,
    B: Sample,
{
    Chain { first, second }
}

/// Method-call sugar for [`map`] and [`chain`].
pub trait SampleExt: Sample + Sized {
    fn map<F, U>(self, f: F) -> Map<Self, F>
    where
        F: Fn(Self::Output) -> U,
    {
        map(self, f)
    }

    fn then<B>(self, next: B) -> Chain<Self, B>
    where
        Self: Sample<Output = f64>,
        B: Sample,
    {
        chain(self, next)
    }
}

impl<S: Sample> SampleExt for S {}

/// A blur radius curve formatted as a CSS `blur(Npx)` filter.
pub type BlurCurve = Map<Curve<f64>, fn(f64) -> String>;

pub fn blur_curve(radius_px: Curve<f64>) -> BlurCurve {
    radius_px.map(blur_filter as fn(f64) -> String)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ops.rs"]
mod tests;
