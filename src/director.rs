//! The long-lived page controller: mounted once with a config, a flag store
//! and a presentation sink, driven once per animation frame, disposed on
//! teardown.

use std::time::Instant;

use crate::{
    animation::trigger::HysteresisTrigger,
    config::Config,
    effects::particles::{Burst, FieldSite, ParticleField},
    foundation::{error::CloserResult, math::SplitMix64},
    gate::{
        passcode::{Gate, SubmitOutcome},
        store::FlagStore,
    },
    present::sink::PresentationSink,
    scroll::{
        progress::{ProgressSource, SubscriptionId},
        smooth::{Intercept, SmoothScroller},
    },
    story::{
        choreography::Story,
        layout::{PageLayout, RegionProgress},
        model::MotionPolicy,
    },
};

pub const HERO_PARTICLE_INTENSITY: f64 = 1.0;
pub const FINALE_PARTICLE_INTENSITY: f64 = 1.2;

pub struct Director<K: PresentationSink> {
    story: Story,
    layout: PageLayout,
    motion: MotionPolicy,
    soft_mode: bool,
    confetti: HysteresisTrigger,
    scroller: Option<SmoothScroller>,
    scroll_y: f64,
    gate: Gate<Box<dyn FlagStore>>,
    progress: ProgressSource,
    hero_field: Option<ParticleField>,
    finale_field: Option<ParticleField>,
    rng: SplitMix64,
    sink: K,
    disposed: bool,
}

impl<K: PresentationSink> std::fmt::Debug for Director<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Director")
            .field("motion", &self.motion)
            .field("soft_mode", &self.soft_mode)
            .field("scroll_y", &self.scroll_y)
            .field("confetti", &self.confetti)
            .field("gate", &self.gate.state())
            .field("disposed", &self.disposed)
            .finish_non_exhaustive()
    }
}

impl<K: PresentationSink> Director<K> {
    /// Build every curve, read the unlock flag, and start the smooth
    /// scroller unless reduced motion is requested.
    pub fn mount(config: &Config, store: Box<dyn FlagStore>, sink: K) -> CloserResult<Self> {
        config.validate()?;

        let motion = MotionPolicy::from_reduce_flag(config.reduce_motion);
        let layout = config.layout.clone();
        let scroller = if motion.is_reduced() {
            None
        } else {
            Some(SmoothScroller::new(
                config.smooth_scroll.clone(),
                layout.max_scroll(),
            )?)
        };

        let mut rng = SplitMix64::new(config.seed);
        let (hero_field, finale_field) = if motion.is_reduced() {
            (None, None)
        } else {
            (
                Some(ParticleField::new(HERO_PARTICLE_INTENSITY, &mut rng)),
                Some(ParticleField::new(FINALE_PARTICLE_INTENSITY, &mut rng)),
            )
        };

        let gate = Gate::open(store, &config.passcode.code, &config.passcode.hint);

        tracing::debug!(
            reduce_motion = config.reduce_motion,
            unlocked = gate.is_unlocked(),
            "director mounted"
        );

        let mut director = Self {
            story: Story::new()?,
            layout,
            motion,
            soft_mode: false,
            confetti: HysteresisTrigger::new(config.confetti.fire_at, config.confetti.rearm_at)?,
            scroller,
            scroll_y: 0.0,
            gate,
            progress: ProgressSource::new(),
            hero_field,
            finale_field,
            rng,
            sink,
            disposed: false,
        };
        director.emit_particle_fields()?;
        Ok(director)
    }

    /// Hand the ambient fields to the sink once; they live as long as the
    /// page.
    fn emit_particle_fields(&mut self) -> CloserResult<()> {
        if let Some(field) = &self.hero_field {
            self.sink.particles(FieldSite::Hero, field)?;
        }
        if let Some(field) = &self.finale_field {
            self.sink.particles(FieldSite::Finale, field)?;
        }
        Ok(())
    }

    pub fn sink(&self) -> &K {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut K {
        &mut self.sink
    }

    pub fn motion(&self) -> MotionPolicy {
        self.motion
    }

    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    pub fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    pub fn has_smooth_scroller(&self) -> bool {
        self.scroller.is_some()
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn soft_mode(&self) -> bool {
        self.soft_mode
    }

    pub fn hero_particles(&self) -> Option<&ParticleField> {
        self.hero_field.as_ref()
    }

    pub fn finale_particles(&self) -> Option<&ParticleField> {
        self.finale_field.as_ref()
    }

    pub fn gate(&self) -> &Gate<Box<dyn FlagStore>> {
        &self.gate
    }

    /// Register a callback that receives page progress once per frame.
    pub fn on_progress(&mut self, f: impl FnMut(f64) + 'static) -> SubscriptionId {
        self.progress.subscribe(f)
    }

    pub fn off_progress(&mut self, id: SubscriptionId) -> bool {
        self.progress.unsubscribe(id)
    }

    pub fn wheel(&mut self, delta: f64) {
        if self.disposed {
            return;
        }
        let intercept = match self.scroller.as_mut() {
            Some(s) => s.on_wheel(delta),
            None => Intercept::Passthrough,
        };
        if intercept == Intercept::Passthrough {
            self.native_scroll(delta);
        }
    }

    pub fn touch(&mut self, delta: f64) {
        if self.disposed {
            return;
        }
        let intercept = match self.scroller.as_mut() {
            Some(s) => s.on_touch(delta),
            None => Intercept::Passthrough,
        };
        if intercept == Intercept::Passthrough {
            self.native_scroll(delta);
        }
    }

    fn native_scroll(&mut self, delta: f64) {
        if !delta.is_finite() {
            return;
        }
        self.scroll_y = (self.scroll_y + delta).clamp(0.0, self.layout.max_scroll());
        if let Some(s) = self.scroller.as_mut() {
            s.sync(self.scroll_y);
        }
    }

    /// Jump straight to `y` without easing.
    pub fn jump_to(&mut self, y: f64) {
        if self.disposed || !y.is_finite() {
            return;
        }
        self.scroll_y = y.clamp(0.0, self.layout.max_scroll());
        if let Some(s) = self.scroller.as_mut() {
            s.scroll_to(self.scroll_y, true);
        }
    }

    /// Scroll back to the top ("Replay"); eased when smooth scrolling is on.
    pub fn replay(&mut self) {
        if self.disposed {
            return;
        }
        if let Some(s) = self.scroller.as_mut() {
            s.scroll_to(0.0, false);
        } else {
            self.jump_to(0.0);
        }
    }

    /// Advance one animation frame. Progress for every region comes from a
    /// single scroll sample, so all values in the emitted frame agree.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn frame(&mut self, now_ms: f64) -> CloserResult<()> {
        if self.disposed {
            return Ok(());
        }
        if let Some(s) = self.scroller.as_mut() {
            self.scroll_y = s.tick(now_ms);
        }

        let regions = self.layout.progress_at(self.scroll_y);
        self.progress.publish(regions.page);

        let frame = self.story.sample(&regions, self.motion, self.soft_mode);
        self.sink.frame(&frame)?;

        // The shot is only spent once the burst reached the sink.
        let allowed = !self.motion.is_reduced();
        if self.confetti.would_fire(regions.page, allowed) {
            let burst = Burst::confetti(&mut self.rng);
            self.sink.burst(&burst)?;
        }
        self.confetti.observe_gated(regions.page, allowed);
        Ok(())
    }

    /// Progress of every region at the current scroll position.
    pub fn regions(&self) -> RegionProgress {
        self.layout.progress_at(self.scroll_y)
    }

    /// Flip soft mode; switching it on sparkles.
    pub fn toggle_soft_mode(&mut self) -> CloserResult<bool> {
        self.soft_mode = !self.soft_mode;
        if self.soft_mode && !self.disposed {
            let burst = Burst::sparkle(&mut self.rng);
            self.sink.burst(&burst)?;
        }
        Ok(self.soft_mode)
    }

    pub fn submit_passcode(&mut self, input: &str, now: Instant) -> CloserResult<SubmitOutcome> {
        self.gate.set_input(input);
        let outcome = self.gate.submit(now);
        if outcome == SubmitOutcome::Unlocked && !self.disposed {
            let burst = Burst::sparkle(&mut self.rng);
            self.sink.burst(&burst)?;
        }
        Ok(outcome)
    }

    pub fn is_shaking(&self, now: Instant) -> bool {
        self.gate.is_shaking(now)
    }

    pub fn relock(&mut self) {
        self.gate.relock();
    }

    /// Tear down: destroy the smooth scroller and drop every progress
    /// subscriber. Later frames and input are ignored.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        if let Some(mut s) = self.scroller.take() {
            s.destroy();
        }
        self.progress.clear();
        self.disposed = true;
        tracing::debug!("director disposed");
    }
}

impl<K: PresentationSink> Drop for Director<K> {
    fn drop(&mut self) {
        self.dispose();
    }
}

#[cfg(test)]
#[path = "../tests/unit/director.rs"]
mod tests;
