//! Per-frame output of the choreography. Every field is a plain value the
//! presentation layer can apply directly; nothing here refers back to a
//! curve or a rendering surface.

use crate::foundation::core::Vec2;

/// Whether motion-bearing properties animate.
///
/// Under [`MotionPolicy::Reduced`] translation, rotation, scale and blur are
/// pinned to identity while opacity still follows its curve.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MotionPolicy {
    #[default]
    Full,
    Reduced,
}

impl MotionPolicy {
    pub fn from_reduce_flag(reduce: bool) -> Self {
        if reduce { Self::Reduced } else { Self::Full }
    }

    pub fn is_reduced(self) -> bool {
        self == Self::Reduced
    }

    pub fn offset(self, v: f64) -> f64 {
        if self.is_reduced() { 0.0 } else { v }
    }

    pub fn offset2(self, v: Vec2) -> Vec2 {
        if self.is_reduced() { Vec2::ZERO } else { v }
    }

    pub fn rotation(self, deg: f64) -> f64 {
        self.offset(deg)
    }

    pub fn scale(self, s: f64) -> f64 {
        if self.is_reduced() { 1.0 } else { s }
    }

    pub fn filter(self, f: impl FnOnce() -> String) -> String {
        if self.is_reduced() {
            "none".to_string()
        } else {
            f()
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SceneFrame {
    /// Page-wide progress this frame was derived from.
    pub progress: f64,
    pub soft_mode: bool,
    pub backdrop: BackdropStyle,
    pub hero: HeroStyle,
    pub orbs: OrbsStyle,
    pub stage: StageStyle,
    pub memories: MemoriesStyle,
    pub finale: FinaleStyle,
    pub pill: PillStyle,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct BackdropStyle {
    pub background_image: String,
    pub vignette_opacity: f64,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct HeroStyle {
    pub title_opacity: f64,
    pub hint_opacity: f64,
    pub show_particles: bool,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct OrbsStyle {
    pub left_x: String,
    pub right_x: String,
    pub glow: f64,
    pub scale: f64,
    pub bridge_opacity: f64,
    pub bridge_scale_x: f64,
}

/// Opacity plus a vertical offset and optional filter; the shape most
/// scroll-revealed blocks share.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct LayerStyle {
    pub opacity: f64,
    pub y: f64,
    pub filter: String,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct LineStyle {
    pub text: String,
    pub opacity: f64,
    pub y: f64,
    pub filter: String,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct PanelStyle {
    pub label: String,
    pub scale: f64,
    pub lines: Vec<LineStyle>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct StageStyle {
    pub progress: f64,
    pub whisper: LayerStyle,
    pub grid: LayerStyle,
    pub connector_opacity: f64,
    pub connector_scale_y: f64,
    pub panels: Vec<PanelStyle>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct CardStyle {
    pub image: String,
    pub caption: String,
    pub progress: f64,
    pub opacity: f64,
    pub offset: Vec2,
    pub rotate_deg: f64,
    pub filter: String,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct MemoriesStyle {
    pub progress: f64,
    pub header: LayerStyle,
    pub cards: Vec<CardStyle>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FinaleStyle {
    pub opacity: f64,
    pub y: f64,
    pub show_particles: bool,
}

/// The "Scroll NN%" indicator in the top bar.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct PillStyle {
    pub percent: u8,
    pub text: String,
    pub fill_width: String,
}

impl PillStyle {
    pub fn from_progress(progress: f64) -> Self {
        let percent = (crate::foundation::math::clamp01(progress) * 100.0).round() as u8;
        Self {
            percent,
            text: format!("{percent}%"),
            fill_width: format!("{percent}%"),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/story/model.rs"]
mod tests;
