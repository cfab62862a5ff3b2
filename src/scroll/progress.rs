use std::str::FromStr;

use crate::foundation::{
    error::{CloserError, CloserResult},
    math::{clamp01, fmt_css_number},
};

/// A point where a tracked region meets the viewport: a fraction down the
/// target (`start` = 0, `center` = 0.5, `end` = 1) aligned with a fraction
/// down the viewport. Written the CSS way, e.g. `"start 80%"` or
/// `"end end"`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ScrollOffset {
    pub target: f64,
    pub viewport: f64,
}

impl ScrollOffset {
    pub const fn new(target: f64, viewport: f64) -> Self {
        Self { target, viewport }
    }
}

fn parse_edge(token: &str) -> CloserResult<f64> {
    match token {
        "start" => Ok(0.0),
        "center" => Ok(0.5),
        "end" => Ok(1.0),
        _ => {
            let v = if let Some(pct) = token.strip_suffix('%') {
                pct.parse::<f64>().map(|v| v / 100.0)
            } else {
                token.parse::<f64>()
            };
            match v {
                Ok(v) if v.is_finite() => Ok(v),
                _ => Err(CloserError::validation(format!(
                    "invalid scroll offset edge '{token}'"
                ))),
            }
        }
    }
}

impl FromStr for ScrollOffset {
    type Err = CloserError;

    fn from_str(s: &str) -> CloserResult<Self> {
        let mut parts = s.split_whitespace();
        let (Some(target), Some(viewport), None) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(CloserError::validation(format!(
                "scroll offset must be '<target> <viewport>' (got '{s}')"
            )));
        };
        Ok(Self {
            target: parse_edge(target)?,
            viewport: parse_edge(viewport)?,
        })
    }
}

impl TryFrom<String> for ScrollOffset {
    type Error = CloserError;

    fn try_from(s: String) -> CloserResult<Self> {
        s.parse()
    }
}

impl From<ScrollOffset> for String {
    fn from(o: ScrollOffset) -> Self {
        let target = if o.target == 0.0 {
            "start".to_string()
        } else if o.target == 0.5 {
            "center".to_string()
        } else if o.target == 1.0 {
            "end".to_string()
        } else {
            fmt_css_number(o.target)
        };
        format!("{target} {}%", fmt_css_number(o.viewport * 100.0))
    }
}

/// Start and end offsets of a tracked region.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScrollRange {
    pub start: ScrollOffset,
    pub end: ScrollOffset,
}

impl ScrollRange {
    /// Whole-target tracking: progress 0 when the target's top meets the
    /// viewport's top, 1 when the bottoms meet.
    pub const FULL: Self = Self {
        start: ScrollOffset::new(0.0, 0.0),
        end: ScrollOffset::new(1.0, 1.0),
    };

    pub fn parse(start: &str, end: &str) -> CloserResult<Self> {
        Ok(Self {
            start: start.parse()?,
            end: end.parse()?,
        })
    }
}

/// Vertical extent of an element in document coordinates.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Region {
    pub top: f64,
    pub height: f64,
}

impl Region {
    pub const fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    pub fn bottom(self) -> f64 {
        self.top + self.height
    }
}

/// Scroll position at which `offset` is satisfied for `region`.
fn scroll_at(offset: ScrollOffset, region: Region, viewport_height: f64) -> f64 {
    region.top + offset.target * region.height - offset.viewport * viewport_height
}

/// Normalised progress of `region` through `range` at `scroll_y`. Always in
/// `[0, 1]`; a range that ends before it starts behaves as a step at its end.
pub fn region_progress(
    range: ScrollRange,
    region: Region,
    viewport_height: f64,
    scroll_y: f64,
) -> f64 {
    let from = scroll_at(range.start, region, viewport_height);
    let to = scroll_at(range.end, region, viewport_height);
    let span = to - from;
    if span <= 0.0 {
        return if scroll_y >= to { 1.0 } else { 0.0 };
    }
    clamp01((scroll_y - from) / span)
}

/// Handle returned by [`ProgressSource::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(f64)>;

/// Latest progress sample plus the callbacks interested in it. Publishing
/// notifies every subscriber synchronously, in subscription order.
#[derive(Default)]
pub struct ProgressSource {
    latest: f64,
    next_id: u64,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
}

impl std::fmt::Debug for ProgressSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProgressSource")
            .field("latest", &self.latest)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl ProgressSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> f64 {
        self.latest
    }

    pub fn subscribe(&mut self, f: impl FnMut(f64) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(f)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    pub fn publish(&mut self, progress: f64) {
        self.latest = progress;
        for (_, f) in &mut self.subscribers {
            f(progress);
        }
    }

    pub fn clear(&mut self) {
        self.subscribers.clear();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/progress.rs"]
mod tests;
