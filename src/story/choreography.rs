//! The fixed set of scroll-mapped effects on the page. Every table is built
//! once in [`Story::new`]; [`Story::sample`] only evaluates.

use crate::{
    animation::{
        curve::{Curve, Lerp},
        ops::{BlurCurve, Sample, blur_curve},
        reveal::LineReveal,
    },
    foundation::{
        core::{CssLength, Rgba, Vec2},
        error::CloserResult,
    },
    story::{
        layout::RegionProgress,
        model::{
            BackdropStyle, CardStyle, FinaleStyle, HeroStyle, LayerStyle, MemoriesStyle,
            MotionPolicy, OrbsStyle, PanelStyle, PillStyle, SceneFrame, StageStyle,
        },
    },
};

/// Page progress at which the finale card starts fading in. The confetti
/// trigger re-arms at or below this value.
pub const FINALE_REVEAL_START: f64 = 0.78;
/// Page progress at which the finale card is fully shown. The confetti
/// trigger fires here.
pub const FINALE_REVEAL_END: f64 = 0.92;

pub const STAGE_WHISPER: &str = "Even silence carries meaning.";

/// Label, progress sub-range and lines of each stage panel.
pub const STAGE_PANELS: [(&str, f64, f64, [&str; 3]); 3] = [
    (
        "At the top",
        0.08,
        0.42,
        [
            "Distance feels loud.",
            "Silence feels heavier than it should.",
            "Even simple days can feel incomplete.",
        ],
    ),
    (
        "As you keep going",
        0.26,
        0.68,
        [
            "But then… warmth returns.",
            "The world steadies.",
            "And the space between us starts shrinking.",
        ],
    ),
    (
        "Near the end",
        0.55,
        0.98,
        [
            "Not because everything is perfect ",
            "but because we keep choosing kindness.",
            "And choosing each other.",
        ],
    ),
];

/// Image and caption of each memory card, in page order.
pub const MEMORIES: [(&str, &str); 4] = [
    ("/memories/m1.jpeg", "A moment I replay in my head."),
    ("/memories/m2.jpeg", "The kind of happy that feels calm."),
    ("/memories/m3.jpeg", "One of my favorite versions of you."),
    ("/memories/m4.jpeg", "Sexy as always🥰."),
];

const CARD_ROTATION_DEG: [f64; 4] = [-10.0, 8.0, -6.0, 10.0];
const CARD_DRIFT_X: [f64; 4] = [-30.0, 18.0, -18.0, 30.0];

/// Two-colour radial backdrop: a tinted glow near the top fading into a dark
/// shade.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Backdrop {
    pub tint: Rgba,
    pub shade: Rgba,
}

impl Backdrop {
    pub fn to_css(self) -> String {
        format!(
            "radial-gradient(1200px 800px at 50% 10%, {}, {})",
            self.tint.to_css(),
            self.shade.to_css()
        )
    }
}

impl Lerp for Backdrop {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            tint: Rgba::lerp(&a.tint, &b.tint, t),
            shade: Rgba::lerp(&a.shade, &b.shade, t),
        }
    }
}

#[derive(Clone, Debug)]
struct Fade {
    opacity: Curve<f64>,
    y: Curve<f64>,
}

impl Fade {
    fn new(from: f64, to: f64, rise: f64) -> CloserResult<Self> {
        Ok(Self {
            opacity: Curve::span(from, to, 0.0, 1.0)?,
            y: Curve::span(from, to, rise, 0.0)?,
        })
    }

    fn sample(&self, p: f64, motion: MotionPolicy, filter: &str) -> LayerStyle {
        LayerStyle {
            opacity: self.opacity.evaluate(p),
            y: motion.offset(self.y.evaluate(p)),
            filter: motion.filter(|| filter.to_string()),
        }
    }
}

#[derive(Clone, Debug)]
struct Orbs {
    left_x: Curve<CssLength>,
    right_x: Curve<CssLength>,
    glow: Curve<f64>,
    scale: Curve<f64>,
    bridge_opacity: Curve<f64>,
    bridge_scale_x: Curve<f64>,
}

#[derive(Clone, Debug)]
struct Stage {
    connector_scale_y: Curve<f64>,
    connector_opacity: Curve<f64>,
    grid_y: Curve<f64>,
    grid_opacity: Curve<f64>,
    whisper: Fade,
    bottom_scale: Curve<f64>,
    panels: Vec<(String, LineReveal)>,
}

#[derive(Clone, Debug)]
struct Card {
    image: String,
    caption: String,
    opacity: Curve<f64>,
    offset: Curve<Vec2>,
    rotate: Curve<f64>,
    filter: BlurCurve,
}

/// All scroll-mapped effects of the page.
#[derive(Clone, Debug)]
pub struct Story {
    backdrop: Curve<Backdrop>,
    vignette: Curve<f64>,
    hero_fade: Curve<f64>,
    orbs: Orbs,
    stage: Stage,
    memories_header: Fade,
    cards: Vec<Card>,
    finale: Fade,
}

impl Story {
    pub fn new() -> CloserResult<Self> {
        let backdrop = Curve::new(
            &[0.0, 0.55, 1.0],
            &[
                Backdrop {
                    tint: Rgba::new(120, 170, 255, 0.18),
                    shade: Rgba::new(0, 0, 0, 0.90),
                },
                Backdrop {
                    tint: Rgba::new(255, 120, 185, 0.16),
                    shade: Rgba::new(0, 0, 0, 0.90),
                },
                Backdrop {
                    tint: Rgba::new(255, 205, 120, 0.18),
                    shade: Rgba::new(0, 0, 0, 0.88),
                },
            ],
        )?;

        let orbs = Orbs {
            left_x: Curve::span(0.0, 1.0, CssLength::vw(-22.0), CssLength::vw(-2.8))?,
            right_x: Curve::span(0.0, 1.0, CssLength::vw(22.0), CssLength::vw(2.8))?,
            glow: Curve::span(0.0, 1.0, 0.25, 0.85)?,
            scale: Curve::span(0.0, 1.0, 0.92, 1.08)?,
            bridge_opacity: Curve::span(0.25, 1.0, 0.0, 1.0)?,
            bridge_scale_x: Curve::span(0.0, 1.0, 0.5, 1.0)?,
        };

        let panels = STAGE_PANELS
            .iter()
            .map(|(label, start, end, lines)| {
                Ok((label.to_string(), LineReveal::new(*lines, *start, *end)?))
            })
            .collect::<CloserResult<Vec<_>>>()?;

        let stage = Stage {
            connector_scale_y: Curve::span(0.0, 1.0, 0.05, 1.0)?,
            connector_opacity: Curve::new(&[0.0, 0.2, 1.0], &[0.0, 0.35, 0.55])?,
            grid_y: Curve::span(0.0, 1.0, 14.0, -6.0)?,
            grid_opacity: Curve::span(0.0, 0.12, 0.0, 1.0)?,
            whisper: Fade::new(0.05, 0.22, 10.0)?,
            bottom_scale: Curve::span(0.45, 0.95, 0.985, 1.0)?,
            panels,
        };

        let cards = MEMORIES
            .iter()
            .enumerate()
            .map(|(i, (image, caption))| {
                let rot = CARD_ROTATION_DEG[i % 4];
                let drift = CARD_DRIFT_X[i % 4];
                Ok(Card {
                    image: image.to_string(),
                    caption: caption.to_string(),
                    opacity: Curve::new(&[0.0, 0.35, 1.0], &[0.0, 1.0, 1.0])?,
                    offset: Curve::span(0.0, 1.0, Vec2::new(drift, 18.0), Vec2::ZERO)?,
                    rotate: Curve::span(0.0, 1.0, rot, rot * 0.25)?,
                    filter: blur_curve(Curve::new(&[0.0, 0.5, 1.0], &[8.0, 0.0, 0.0])?),
                })
            })
            .collect::<CloserResult<Vec<_>>>()?;

        Ok(Self {
            backdrop,
            vignette: Curve::span(0.0, 1.0, 0.78, 0.64)?,
            hero_fade: Curve::span(0.0, 0.08, 1.0, 0.0)?,
            orbs,
            stage,
            memories_header: Fade::new(0.0, 0.15, 10.0)?,
            cards,
            finale: Fade::new(FINALE_REVEAL_START, FINALE_REVEAL_END, 16.0)?,
        })
    }

    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    /// Evaluate every effect for one frame. `progress.cards` shorter than the
    /// card list leaves the remaining cards at progress 0.
    pub fn sample(
        &self,
        progress: &RegionProgress,
        motion: MotionPolicy,
        soft_mode: bool,
    ) -> SceneFrame {
        let page = progress.page;
        let show_particles = !motion.is_reduced();

        let orbs = &self.orbs;
        let stage = &self.stage;
        let shift = |len: CssLength| {
            CssLength {
                value: motion.offset(len.value),
                ..len
            }
            .to_css()
        };

        let panels = stage
            .panels
            .iter()
            .enumerate()
            .map(|(i, (label, reveal))| PanelStyle {
                label: label.clone(),
                // Only the closing panel "sighs" open.
                scale: if i + 1 == stage.panels.len() {
                    motion.scale(stage.bottom_scale.evaluate(progress.stage))
                } else {
                    1.0
                },
                lines: reveal.sample(progress.stage, motion),
            })
            .collect();

        let cards = self
            .cards
            .iter()
            .enumerate()
            .map(|(i, card)| {
                let p = progress.cards.get(i).copied().unwrap_or(0.0);
                CardStyle {
                    image: card.image.clone(),
                    caption: card.caption.clone(),
                    progress: p,
                    opacity: card.opacity.evaluate(p),
                    offset: motion.offset2(card.offset.evaluate(p)),
                    rotate_deg: motion.rotation(card.rotate.evaluate(p)),
                    filter: motion.filter(|| card.filter.sample(p)),
                }
            })
            .collect();

        let finale = self.finale.sample(page, motion, "none");

        SceneFrame {
            progress: page,
            soft_mode,
            backdrop: BackdropStyle {
                background_image: self.backdrop.evaluate(page).to_css(),
                vignette_opacity: self.vignette.evaluate(page),
            },
            hero: HeroStyle {
                title_opacity: self.hero_fade.evaluate(page),
                hint_opacity: self.hero_fade.evaluate(page),
                show_particles,
            },
            orbs: OrbsStyle {
                left_x: shift(orbs.left_x.evaluate(page)),
                right_x: shift(orbs.right_x.evaluate(page)),
                glow: orbs.glow.evaluate(page),
                scale: motion.scale(orbs.scale.evaluate(page)),
                bridge_opacity: orbs.bridge_opacity.evaluate(page),
                bridge_scale_x: motion.scale(orbs.bridge_scale_x.evaluate(page)),
            },
            stage: StageStyle {
                progress: progress.stage,
                whisper: stage
                    .whisper
                    .sample(progress.stage, motion, "blur(0px)"),
                grid: LayerStyle {
                    opacity: stage.grid_opacity.evaluate(progress.stage),
                    y: motion.offset(stage.grid_y.evaluate(progress.stage)),
                    filter: "none".to_string(),
                },
                connector_opacity: stage.connector_opacity.evaluate(progress.stage),
                connector_scale_y: motion.scale(stage.connector_scale_y.evaluate(progress.stage)),
                panels,
            },
            memories: MemoriesStyle {
                progress: progress.memories,
                header: self.memories_header.sample(progress.memories, motion, "none"),
                cards,
            },
            finale: FinaleStyle {
                opacity: finale.opacity,
                y: finale.y,
                show_particles,
            },
            pill: PillStyle::from_progress(page),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/story/choreography.rs"]
mod tests;
