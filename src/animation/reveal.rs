use crate::{
    animation::{
        curve::Curve,
        ops::{BlurCurve, Sample, blur_curve},
    },
    foundation::error::{CloserError, CloserResult},
    story::model::{LineStyle, MotionPolicy},
};

/// Share of the panel range each line takes to fade in.
pub const FADE_FRACTION: f64 = 0.18;
/// Vertical offset a line starts from.
pub const LINE_RISE: f64 = 12.0;
/// Blur radius (px) a line starts from.
pub const LINE_BLUR_PX: f64 = 6.0;

/// Progress window over which one line fades in.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct RevealWindow {
    pub appear_at: f64,
    pub fade_end: f64,
}

/// Staggered windows for `n` lines over `[start, end]`. Line `i` appears at
/// `start + (end - start) * i / (n - 1)` and finishes fading at most
/// `FADE_FRACTION` of the range later, never past `end`.
pub fn reveal_windows(n: usize, start: f64, end: f64) -> Vec<RevealWindow> {
    let span = end - start;
    (0..n)
        .map(|i| {
            let t = if n <= 1 {
                0.0
            } else {
                i as f64 / (n - 1) as f64
            };
            let appear_at = start + span * t;
            RevealWindow {
                appear_at,
                fade_end: end.min(appear_at + span * FADE_FRACTION),
            }
        })
        .collect()
}

#[derive(Clone, Debug)]
struct RevealLine {
    text: String,
    window: RevealWindow,
    opacity: Curve<f64>,
    rise: Curve<f64>,
    filter: BlurCurve,
}

/// A stack of text lines revealed one after another as progress moves through
/// a sub-range.
#[derive(Clone, Debug)]
pub struct LineReveal {
    lines: Vec<RevealLine>,
}

impl LineReveal {
    pub fn new<I, S>(lines: I, start: f64, end: f64) -> CloserResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if !start.is_finite() || !end.is_finite() || start > end {
            return Err(CloserError::validation(format!(
                "line reveal range must be finite with start <= end (got {start}..{end})"
            )));
        }

        let texts: Vec<String> = lines.into_iter().map(Into::into).collect();
        let windows = reveal_windows(texts.len(), start, end);
        let lines = texts
            .into_iter()
            .zip(windows)
            .map(|(text, window)| {
                let (a, b) = (window.appear_at, window.fade_end);
                Ok(RevealLine {
                    text,
                    window,
                    opacity: Curve::span(a, b, 0.0, 1.0)?,
                    rise: Curve::span(a, b, LINE_RISE, 0.0)?,
                    filter: blur_curve(Curve::span(a, b, LINE_BLUR_PX, 0.0)?),
                })
            })
            .collect::<CloserResult<Vec<_>>>()?;

        Ok(Self { lines })
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn windows(&self) -> Vec<RevealWindow> {
        self.lines.iter().map(|l| l.window).collect()
    }

    pub fn sample(&self, progress: f64, motion: MotionPolicy) -> Vec<LineStyle> {
        self.lines
            .iter()
            .map(|line| LineStyle {
                text: line.text.clone(),
                opacity: line.opacity.evaluate(progress),
                y: motion.offset(line.rise.evaluate(progress)),
                filter: motion.filter(|| line.filter.sample(progress)),
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/reveal.rs"]
mod tests;
