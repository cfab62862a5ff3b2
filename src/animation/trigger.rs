use crate::foundation::error::{CloserError, CloserResult};

/// One-shot effect trigger with a hysteresis band: fires once when progress
/// reaches `fire_at`, then stays quiet until progress drops back to
/// `rearm_at` or below.
#[derive(Clone, Debug, PartialEq)]
pub struct HysteresisTrigger {
    fire_at: f64,
    rearm_at: f64,
    armed: bool,
}

impl HysteresisTrigger {
    pub fn new(fire_at: f64, rearm_at: f64) -> CloserResult<Self> {
        if !fire_at.is_finite() || !rearm_at.is_finite() {
            return Err(CloserError::validation("trigger thresholds must be finite"));
        }
        if rearm_at >= fire_at {
            return Err(CloserError::validation(format!(
                "rearm threshold ({rearm_at}) must be below fire threshold ({fire_at})"
            )));
        }
        Ok(Self {
            fire_at,
            rearm_at,
            armed: true,
        })
    }

    pub fn fire_at(&self) -> f64 {
        self.fire_at
    }

    pub fn rearm_at(&self) -> f64 {
        self.rearm_at
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Whether [`observe_gated`](Self::observe_gated) would fire for this
    /// sample. Changes nothing.
    pub fn would_fire(&self, progress: f64, allowed: bool) -> bool {
        self.armed && allowed && progress >= self.fire_at
    }

    /// Feed one progress sample; returns `true` when the effect should fire.
    pub fn observe(&mut self, progress: f64) -> bool {
        self.observe_gated(progress, true)
    }

    /// Like [`observe`](Self::observe), but firing is suppressed while
    /// `allowed` is false. Re-arming still happens, and a suppressed crossing
    /// does not consume the shot.
    pub fn observe_gated(&mut self, progress: f64, allowed: bool) -> bool {
        if progress.is_nan() {
            return false;
        }
        let mut fired = false;
        if self.would_fire(progress, allowed) {
            self.armed = false;
            fired = true;
            tracing::debug!(progress, fire_at = self.fire_at, "trigger fired");
        }
        if !self.armed && progress <= self.rearm_at {
            self.armed = true;
            tracing::debug!(progress, rearm_at = self.rearm_at, "trigger re-armed");
        }
        fired
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/trigger.rs"]
mod tests;
