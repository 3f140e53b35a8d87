use super::parallax::{LayoutHeights, ParallaxMapper, ParallaxRange, NEUTRAL_OFFSET};
use super::viewport::ViewportSize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeroPhase {
    /// Nothing laid out yet.
    #[default]
    Unmeasured,
    /// Heights known, range computed, no scroll seen since.
    Measured,
    /// Scroll ticks are driving the offset.
    Interactive,
}

/// Parallax state of the hero menu.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HeroState {
    phase: HeroPhase,
    mapper: ParallaxMapper,
    viewport: ViewportSize,
    range: ParallaxRange,
    progress: f64,
}

impl HeroState {
    pub fn new(mapper: ParallaxMapper) -> Self {
        Self {
            mapper,
            ..Self::default()
        }
    }

    pub fn phase(&self) -> HeroPhase {
        self.phase
    }

    pub fn range(&self) -> ParallaxRange {
        self.range
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn viewport(&self) -> ViewportSize {
        self.viewport
    }

    /// Computes the range from fresh heights. Incomplete heights leave the
    /// hero unmeasured.
    pub fn measure(&mut self, heights: LayoutHeights) -> HeroPhase {
        if heights.is_complete() {
            self.range = ParallaxRange::from_heights(heights);
            self.phase = HeroPhase::Measured;
        } else {
            self.range = ParallaxRange::NONE;
            self.phase = HeroPhase::Unmeasured;
        }
        self.phase
    }

    pub fn scroll(&mut self, progress: f64) {
        self.progress = progress;
        if self.phase == HeroPhase::Measured {
            self.phase = HeroPhase::Interactive;
        }
    }

    /// A resize invalidates the cached range, so the hero is measured again.
    pub fn resize(&mut self, viewport: ViewportSize, heights: LayoutHeights) -> HeroPhase {
        self.viewport = viewport;
        self.range = ParallaxRange::NONE;
        self.measure(heights)
    }

    pub fn is_parallax_active(&self) -> bool {
        self.phase != HeroPhase::Unmeasured && self.mapper.is_active(self.viewport.width)
    }

    pub fn offset(&self) -> f64 {
        if self.phase == HeroPhase::Unmeasured {
            return NEUTRAL_OFFSET;
        }
        self.mapper.map(self.progress, self.range, self.viewport.width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::scroll::ScrollRegion;

    fn heights(container: f64, menu: f64) -> LayoutHeights {
        LayoutHeights::new(Some(container), Some(menu))
    }

    #[test]
    fn test_lifecycle() {
        let mut hero = HeroState::default();
        assert_eq!(hero.phase(), HeroPhase::Unmeasured);
        assert_eq!(hero.offset(), 0.0);

        hero.scroll(0.5);
        assert_eq!(hero.phase(), HeroPhase::Unmeasured);

        assert_eq!(
            hero.resize(ViewportSize::new(1280, 800), heights(600.0, 250.0)),
            HeroPhase::Measured
        );
        hero.scroll(0.25);
        assert_eq!(hero.phase(), HeroPhase::Interactive);
        assert_eq!(hero.offset(), 225.0);

        hero.scroll(1.0);
        assert_eq!(hero.phase(), HeroPhase::Interactive);
        assert_eq!(hero.offset(), 0.0);
    }

    #[test]
    fn test_resize_returns_to_measured() {
        let mut hero = HeroState::default();
        hero.resize(ViewportSize::new(1024, 768), heights(500.0, 200.0));
        hero.scroll(0.1);
        assert_eq!(hero.phase(), HeroPhase::Interactive);

        hero.resize(ViewportSize::new(1100, 768), heights(700.0, 200.0));
        assert_eq!(hero.phase(), HeroPhase::Measured);
        assert_eq!(hero.range(), ParallaxRange::new(460.0, 0.0));
    }

    #[test]
    fn test_missing_heights_stay_unmeasured() {
        let mut hero = HeroState::default();
        let phase = hero.resize(
            ViewportSize::new(1024, 768),
            LayoutHeights::new(None, Some(100.0)),
        );
        assert_eq!(phase, HeroPhase::Unmeasured);
        hero.scroll(0.7);
        assert_eq!(hero.offset(), 0.0);
        assert!(!hero.is_parallax_active());
    }

    #[test]
    fn test_end_to_end_desktop() {
        let region = ScrollRegion::new(0.0, 900.0);
        let mut hero = HeroState::default();
        // 20 - 100 * 1.2 gives a range of -100..0
        hero.resize(ViewportSize::new(1024, 768), heights(20.0, 100.0));
        assert_eq!(hero.range(), ParallaxRange::new(-100.0, 0.0));
        hero.scroll(region.progress_at(450.0));
        assert!(hero.is_parallax_active());
        assert_eq!(hero.offset(), -50.0);
    }

    #[test]
    fn test_end_to_end_phone() {
        let region = ScrollRegion::new(0.0, 900.0);
        let mut hero = HeroState::default();
        hero.resize(ViewportSize::new(375, 812), heights(600.0, 250.0));
        for position in [0.0, 120.0, 450.0, 900.0, 2000.0] {
            hero.scroll(region.progress_at(position));
            assert_eq!(hero.offset(), 0.0);
        }
        assert!(!hero.is_parallax_active());
    }
}
