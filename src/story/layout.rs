use crate::{
    foundation::error::{CloserError, CloserResult},
    scroll::progress::{Region, ScrollOffset, ScrollRange, region_progress},
};

/// Progress of every tracked region, all derived from one scroll sample.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct RegionProgress {
    pub page: f64,
    pub stage: f64,
    pub memories: f64,
    pub cards: Vec<f64>,
}

/// Where each tracked section sits in the document, and how its progress
/// window is anchored to the viewport.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PageLayout {
    pub viewport_height: f64,
    pub page: Region,
    pub stage: Region,
    pub memories: Region,
    pub cards: Vec<Region>,
    pub page_range: ScrollRange,
    pub stage_range: ScrollRange,
    pub memories_range: ScrollRange,
    pub card_range: ScrollRange,
}

impl Default for PageLayout {
    fn default() -> Self {
        let viewport_height = 900.0;
        let stage = Region::new(900.0, 1800.0);
        let memories = Region::new(2700.0, 1700.0);
        let cards = (0..4)
            .map(|i| Region::new(memories.top + 260.0 + 340.0 * f64::from(i), 320.0))
            .collect();
        Self {
            viewport_height,
            page: Region::new(0.0, 5600.0),
            stage,
            memories,
            cards,
            page_range: ScrollRange::FULL,
            stage_range: ScrollRange {
                start: ScrollOffset::new(0.0, 0.8),
                end: ScrollOffset::new(1.0, 0.25),
            },
            memories_range: ScrollRange {
                start: ScrollOffset::new(0.0, 0.8),
                end: ScrollOffset::new(1.0, 0.2),
            },
            card_range: ScrollRange {
                start: ScrollOffset::new(0.0, 0.85),
                end: ScrollOffset::new(1.0, 0.6),
            },
        }
    }
}

impl PageLayout {
    pub fn validate(&self) -> CloserResult<()> {
        if !self.viewport_height.is_finite() || self.viewport_height <= 0.0 {
            return Err(CloserError::validation("viewport height must be > 0"));
        }
        let all = [self.page, self.stage, self.memories]
            .into_iter()
            .chain(self.cards.iter().copied());
        for r in all {
            if !r.top.is_finite() || !r.height.is_finite() || r.height < 0.0 {
                return Err(CloserError::validation(format!(
                    "section region must be finite with height >= 0 (got top {} height {})",
                    r.top, r.height
                )));
            }
        }
        if self.page.height < self.viewport_height {
            return Err(CloserError::validation(
                "page must be at least one viewport tall",
            ));
        }
        Ok(())
    }

    /// Largest reachable scroll position.
    pub fn max_scroll(&self) -> f64 {
        (self.page.bottom() - self.viewport_height).max(0.0)
    }

    /// Scroll position at which page progress equals `progress`.
    pub fn scroll_for_page_progress(&self, progress: f64) -> f64 {
        crate::foundation::math::clamp01(progress) * self.max_scroll()
    }

    pub fn progress_at(&self, scroll_y: f64) -> RegionProgress {
        let vh = self.viewport_height;
        RegionProgress {
            page: region_progress(self.page_range, self.page, vh, scroll_y),
            stage: region_progress(self.stage_range, self.stage, vh, scroll_y),
            memories: region_progress(self.memories_range, self.memories, vh, scroll_y),
            cards: self
                .cards
                .iter()
                .map(|&card| region_progress(self.card_range, card, vh, scroll_y))
                .collect(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/story/layout.rs"]
mod tests;
