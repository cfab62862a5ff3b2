use crate::{
    animation::ease::Ease,
    foundation::{
        error::{CloserError, CloserResult},
        math::lerp,
    },
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SmoothScrollConfig {
    /// Seconds an eased scroll takes to reach its target.
    pub duration_secs: f64,
    pub easing: Ease,
    pub smooth_wheel: bool,
    pub smooth_touch: bool,
    pub wheel_multiplier: f64,
}

impl Default for SmoothScrollConfig {
    fn default() -> Self {
        Self {
            duration_secs: 1.15,
            easing: Ease::OutCubic,
            smooth_wheel: true,
            smooth_touch: false,
            wheel_multiplier: 1.0,
        }
    }
}

impl SmoothScrollConfig {
    pub fn validate(&self) -> CloserResult<()> {
        if !self.duration_secs.is_finite() || self.duration_secs <= 0.0 {
            return Err(CloserError::validation(
                "smooth scroll duration must be finite and > 0",
            ));
        }
        if !self.wheel_multiplier.is_finite() || self.wheel_multiplier <= 0.0 {
            return Err(CloserError::validation(
                "wheel multiplier must be finite and > 0",
            ));
        }
        Ok(())
    }
}

/// What happened to an input delta.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intercept {
    /// The scroller took the delta and will ease toward it.
    Consumed,
    /// Not smoothed; the native scroll mechanism should apply it.
    Passthrough,
}

#[derive(Clone, Copy, Debug)]
struct Tween {
    from: f64,
    to: f64,
    elapsed_secs: f64,
}

/// Eases the scroll position toward a target set by wheel input. Advanced by
/// [`tick`](Self::tick) once per animation frame with the frame timestamp in
/// milliseconds.
#[derive(Clone, Debug)]
pub struct SmoothScroller {
    cfg: SmoothScrollConfig,
    limit: f64,
    current: f64,
    target: f64,
    tween: Option<Tween>,
    last_tick_ms: Option<f64>,
    destroyed: bool,
}

impl SmoothScroller {
    pub fn new(cfg: SmoothScrollConfig, limit: f64) -> CloserResult<Self> {
        cfg.validate()?;
        Ok(Self {
            cfg,
            limit: limit.max(0.0),
            current: 0.0,
            target: 0.0,
            tween: None,
            last_tick_ms: None,
            destroyed: false,
        })
    }

    pub fn position(&self) -> f64 {
        self.current
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn limit(&self) -> f64 {
        self.limit
    }

    pub fn is_scrolling(&self) -> bool {
        self.tween.is_some()
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    pub fn set_limit(&mut self, limit: f64) {
        self.limit = limit.max(0.0);
        self.target = self.target.clamp(0.0, self.limit);
        self.current = self.current.clamp(0.0, self.limit);
    }

    pub fn on_wheel(&mut self, delta: f64) -> Intercept {
        if self.destroyed || !self.cfg.smooth_wheel {
            return Intercept::Passthrough;
        }
        self.scroll_to(self.target + delta * self.cfg.wheel_multiplier, false);
        Intercept::Consumed
    }

    pub fn on_touch(&mut self, delta: f64) -> Intercept {
        if self.destroyed || !self.cfg.smooth_touch {
            return Intercept::Passthrough;
        }
        self.scroll_to(self.target + delta, false);
        Intercept::Consumed
    }

    /// Start easing toward `y`, or jump there when `immediate`.
    pub fn scroll_to(&mut self, y: f64, immediate: bool) {
        if self.destroyed || !y.is_finite() {
            return;
        }
        self.target = y.clamp(0.0, self.limit);
        if immediate || self.target == self.current {
            self.current = self.target;
            self.tween = None;
            return;
        }
        self.tween = Some(Tween {
            from: self.current,
            to: self.target,
            elapsed_secs: 0.0,
        });
    }

    /// Adopt a position the native scroll mechanism reached on its own
    /// (passthrough input).
    pub fn sync(&mut self, y: f64) {
        if self.destroyed || !y.is_finite() {
            return;
        }
        self.current = y.clamp(0.0, self.limit);
        self.target = self.current;
        self.tween = None;
    }

    /// Advance to `now_ms` and return the scroll position for this frame.
    pub fn tick(&mut self, now_ms: f64) -> f64 {
        if self.destroyed {
            return self.current;
        }
        let dt_secs = match self.last_tick_ms {
            Some(prev) if now_ms > prev => (now_ms - prev) / 1000.0,
            _ => 0.0,
        };
        self.last_tick_ms = Some(now_ms);

        if let Some(mut tw) = self.tween {
            tw.elapsed_secs += dt_secs;
            let t = (tw.elapsed_secs / self.cfg.duration_secs).min(1.0);
            if t >= 1.0 {
                self.current = tw.to;
                self.tween = None;
            } else {
                self.current = lerp(tw.from, tw.to, self.cfg.easing.apply(t));
                self.tween = Some(tw);
            }
        }
        self.current
    }

    /// Stop all motion; later input passes through and ticks are no-ops.
    pub fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        self.destroyed = true;
        self.tween = None;
        tracing::debug!(position = self.current, "smooth scroller destroyed");
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/smooth.rs"]
mod tests;
