use crate::foundation::{core::CssLength, math::SplitMix64};

pub const CONFETTI_PIECES: usize = 110;
pub const CONFETTI_LIFETIME_MS: u64 = 3200;
pub const SPARKLE_PIECES: usize = 26;
pub const SPARKLE_LIFETIME_MS: u64 = 1600;
/// Dots in an ambient field at intensity 1.
pub const FIELD_DENSITY: f64 = 26.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BurstKind {
    Confetti,
    Sparkle,
}

/// One spawned element of a burst. Positions are percentages of the
/// container.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Piece {
    pub left: CssLength,
    pub top: CssLength,
    pub rotate_deg: f64,
    pub opacity: f64,
    pub duration_secs: f64,
    pub delay_secs: f64,
}

/// A one-shot particle effect. The presentation layer spawns `pieces` and
/// removes the whole burst after `lifetime_ms`.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Burst {
    pub kind: BurstKind,
    pub lifetime_ms: u64,
    pub pieces: Vec<Piece>,
}

impl Burst {
    /// Falling confetti across the full width, starting just above the top.
    pub fn confetti(rng: &mut SplitMix64) -> Self {
        let pieces = (0..CONFETTI_PIECES)
            .map(|_| Piece {
                left: CssLength::percent(rng.next_f64() * 100.0),
                top: CssLength::percent(-8.0),
                rotate_deg: rng.next_f64() * 360.0,
                opacity: 0.7 + rng.next_f64() * 0.25,
                duration_secs: 1.6 + rng.next_f64() * 1.4,
                delay_secs: rng.next_f64() * 0.12,
            })
            .collect();
        Self {
            kind: BurstKind::Confetti,
            lifetime_ms: CONFETTI_LIFETIME_MS,
            pieces,
        }
    }

    /// Small twinkle around the centre of the screen.
    pub fn sparkle(rng: &mut SplitMix64) -> Self {
        let pieces = (0..SPARKLE_PIECES)
            .map(|_| Piece {
                left: CssLength::percent(50.0 + (rng.next_f64() * 30.0 - 15.0)),
                top: CssLength::percent(50.0 + (rng.next_f64() * 20.0 - 10.0)),
                rotate_deg: 0.0,
                opacity: 1.0,
                duration_secs: 0.0,
                delay_secs: rng.next_f64() * 0.2,
            })
            .collect();
        Self {
            kind: BurstKind::Sparkle,
            lifetime_ms: SPARKLE_LIFETIME_MS,
            pieces,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Dot {
    pub x: CssLength,
    pub y: CssLength,
    pub size: CssLength,
    pub drift_secs: f64,
    pub opacity: f64,
}

/// Section an ambient [`ParticleField`] belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldSite {
    Hero,
    Finale,
}

/// Slow-drifting background dots. Generated once per section and reused for
/// the section's lifetime.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ParticleField {
    pub intensity: f64,
    pub dots: Vec<Dot>,
}

impl ParticleField {
    pub fn new(intensity: f64, rng: &mut SplitMix64) -> Self {
        let intensity = if intensity.is_finite() {
            intensity.max(0.0)
        } else {
            0.0
        };
        let count = (FIELD_DENSITY * intensity).floor() as usize;
        let dots = (0..count)
            .map(|_| Dot {
                x: CssLength::percent(rng.next_f64() * 100.0),
                y: CssLength::percent(rng.next_f64() * 100.0),
                size: CssLength::rem(0.6 + rng.next_f64() * 1.6),
                drift_secs: 6.0 + rng.next_f64() * 10.0,
                opacity: 0.08 + rng.next_f64() * 0.12,
            })
            .collect();
        Self { intensity, dots }
    }

    pub fn len(&self) -> usize {
        self.dots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dots.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/particles.rs"]
mod tests;
