use crate::foundation::math::fmt_css_number;

pub use kurbo::Vec2;

/// Straight (non-premultiplied) colour as written in CSS: 8-bit channels and a
/// fractional alpha.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64, // 0..1
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub fn to_css(self) -> String {
        format!(
            "rgba({},{},{},{})",
            self.r,
            self.g,
            self.b,
            fmt_css_number(self.a.clamp(0.0, 1.0))
        )
    }
}

/// Units a [`CssLength`] may carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    Px,
    Vw,
    Percent,
    Rem,
}

impl LengthUnit {
    fn suffix(self) -> &'static str {
        match self {
            Self::Px => "px",
            Self::Vw => "vw",
            Self::Percent => "%",
            Self::Rem => "rem",
        }
    }
}

/// A length with an explicit unit, e.g. `-22vw`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CssLength {
    pub value: f64,
    pub unit: LengthUnit,
}

impl CssLength {
    pub const fn px(value: f64) -> Self {
        Self {
            value,
            unit: LengthUnit::Px,
        }
    }

    pub const fn vw(value: f64) -> Self {
        Self {
            value,
            unit: LengthUnit::Vw,
        }
    }

    pub const fn percent(value: f64) -> Self {
        Self {
            value,
            unit: LengthUnit::Percent,
        }
    }

    pub const fn rem(value: f64) -> Self {
        Self {
            value,
            unit: LengthUnit::Rem,
        }
    }

    pub fn to_css(self) -> String {
        format!("{}{}", fmt_css_number(self.value), self.unit.suffix())
    }
}

/// Formats a blur radius as a CSS filter expression.
pub fn blur_filter(radius_px: f64) -> String {
    format!("blur({}px)", fmt_css_number(radius_px.max(0.0)))
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
