use std::path::{Path, PathBuf};

use crate::{
    foundation::error::{CloserError, CloserResult},
    gate::passcode::{DEFAULT_CODE, DEFAULT_HINT},
    scroll::smooth::SmoothScrollConfig,
    story::{
        choreography::{FINALE_REVEAL_END, FINALE_REVEAL_START},
        layout::PageLayout,
    },
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PasscodeConfig {
    pub code: String,
    pub hint: String,
}

impl Default for PasscodeConfig {
    fn default() -> Self {
        Self {
            code: DEFAULT_CODE.to_string(),
            hint: DEFAULT_HINT.to_string(),
        }
    }
}

/// Hysteresis band of the finale confetti. Defaults to the finale card's
/// own fade window so the burst lands as the card finishes revealing.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ConfettiConfig {
    pub fire_at: f64,
    pub rearm_at: f64,
}

impl Default for ConfettiConfig {
    fn default() -> Self {
        Self {
            fire_at: FINALE_REVEAL_END,
            rearm_at: FINALE_REVEAL_START,
        }
    }
}

/// Everything tunable about the page. Every field has a default, so `{}` is
/// a valid config.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Config {
    pub reduce_motion: bool,
    pub passcode: PasscodeConfig,
    pub smooth_scroll: SmoothScrollConfig,
    pub confetti: ConfettiConfig,
    pub layout: PageLayout,
    /// Seed for particle placement.
    pub seed: u64,
    /// Where the unlock flag is persisted. `None` keeps it in memory.
    pub store_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reduce_motion: false,
            passcode: PasscodeConfig::default(),
            smooth_scroll: SmoothScrollConfig::default(),
            confetti: ConfettiConfig::default(),
            layout: PageLayout::default(),
            seed: 0x0812,
            store_path: None,
        }
    }
}

impl Config {
    pub fn from_json_str(s: &str) -> CloserResult<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load(path: &Path) -> CloserResult<Self> {
        let s = std::fs::read_to_string(path).map_err(|e| {
            CloserError::config(format!("read config '{}': {e}", path.display()))
        })?;
        Self::from_json_str(&s)
    }

    pub fn validate(&self) -> CloserResult<()> {
        if self.passcode.code.trim().is_empty() {
            return Err(CloserError::config("passcode must not be blank"));
        }
        let c = self.confetti;
        if !(0.0..=1.0).contains(&c.fire_at) || !(0.0..=1.0).contains(&c.rearm_at) {
            return Err(CloserError::config(
                "confetti thresholds must lie in [0, 1]",
            ));
        }
        if c.rearm_at >= c.fire_at {
            return Err(CloserError::config(
                "confetti rearm_at must be below fire_at",
            ));
        }
        self.smooth_scroll.validate()?;
        self.layout.validate()?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
