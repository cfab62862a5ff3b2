//! Closer is the scroll-driven engine behind a small animated greeting page.
//!
//! Every visual property on the page is a pure function of a scroll
//! progress value in `[0, 1]`. This crate owns those functions and the small
//! amount of state around them; it never touches a rendering surface.
//!
//! # Pipeline overview
//!
//! 1. **Measure**: `scroll_y -> RegionProgress` (page, stage, memories and per-card progress)
//! 2. **Sample**: `RegionProgress -> SceneFrame` through piecewise-linear [`Curve`]s
//! 3. **Present**: each [`SceneFrame`] and one-shot [`Burst`] goes to a [`PresentationSink`]
//!
//! [`Director`] ties the pipeline to input: wheel and touch deltas, the
//! optional [`SmoothScroller`], the finale [`HysteresisTrigger`], soft mode,
//! and the passcode [`Gate`] backed by a [`FlagStore`].
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: a given config, seed and input sequence always yields
//!   the same frames and bursts.
//! - **Malformed tables fail at construction**: sampling a built [`Curve`]
//!   never fails.
#![forbid(unsafe_code)]

mod animation;
mod config;
mod director;
mod effects;
mod foundation;
mod gate;
mod present;
mod scroll;
mod story;

pub use animation::curve::{Breakpoint, Curve, Lerp, evaluate};
pub use animation::ease::Ease;
pub use animation::ops::{
    BlurCurve, Chain, Constant, Map, Sample, SampleExt, blur_curve, chain, map,
};
pub use animation::reveal::{
    FADE_FRACTION, LINE_BLUR_PX, LINE_RISE, LineReveal, RevealWindow, reveal_windows,
};
pub use animation::trigger::HysteresisTrigger;
pub use config::{Config, ConfettiConfig, PasscodeConfig};
pub use director::{Director, FINALE_PARTICLE_INTENSITY, HERO_PARTICLE_INTENSITY};
pub use effects::particles::{
    Burst, BurstKind, CONFETTI_LIFETIME_MS, CONFETTI_PIECES, Dot, FIELD_DENSITY, FieldSite,
    ParticleField, Piece, SPARKLE_LIFETIME_MS, SPARKLE_PIECES,
};
pub use foundation::core::{CssLength, LengthUnit, Rgba, Vec2, blur_filter};
pub use foundation::error::{CloserError, CloserResult};
pub use foundation::math::SplitMix64;
pub use gate::passcode::{
    DEFAULT_CODE, DEFAULT_HINT, Gate, GateState, SHAKE_DURATION, SubmitOutcome, UNLOCKED_HINT,
    check, normalize,
};
pub use gate::store::{FileStore, FlagStore, MemoryStore, UNLOCK_KEY, UNLOCKED_VALUE};
pub use present::sink::{JsonLinesSink, PresentationSink, RecordingSink};
pub use scroll::progress::{
    ProgressSource, Region, ScrollOffset, ScrollRange, SubscriptionId, region_progress,
};
pub use scroll::smooth::{Intercept, SmoothScrollConfig, SmoothScroller};
pub use story::choreography::{
    Backdrop, FINALE_REVEAL_END, FINALE_REVEAL_START, MEMORIES, STAGE_PANELS, STAGE_WHISPER, Story,
};
pub use story::layout::{PageLayout, RegionProgress};
pub use story::model::{
    BackdropStyle, CardStyle, FinaleStyle, HeroStyle, LayerStyle, LineStyle, MemoriesStyle,
    MotionPolicy, OrbsStyle, PanelStyle, PillStyle, SceneFrame, StageStyle,
};
