use super::viewport::{Breakpoint, BreakpointTable};

/// Offset used whenever parallax is inactive.
pub const NEUTRAL_OFFSET: f64 = 0.0;

/// How far past its own height the menu travels relative to its container.
pub const MENU_TRAVEL: f64 = 1.2;

/// Client heights measured after layout; `None` until the node exists.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LayoutHeights {
    pub container: Option<f64>,
    pub menu: Option<f64>,
}

impl LayoutHeights {
    pub fn new(container: Option<f64>, menu: Option<f64>) -> Self {
        let usable = |v: Option<f64>| v.filter(|h| h.is_finite() && *h >= 0.0);
        Self {
            container: usable(container),
            menu: usable(menu),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.container.is_some() && self.menu.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ParallaxRange {
    pub start: f64,
    pub end: f64,
}

impl ParallaxRange {
    pub const NONE: Self = Self {
        start: 0.0,
        end: 0.0,
    };

    /// Non-finite bounds degenerate to [`ParallaxRange::NONE`].
    pub fn new(start: f64, end: f64) -> Self {
        if start.is_finite() && end.is_finite() {
            Self { start, end }
        } else {
            Self::NONE
        }
    }

    /// The menu starts pushed down by the free space in its container and
    /// settles at zero once the region has been scrolled through.
    pub fn from_heights(heights: LayoutHeights) -> Self {
        match (heights.container, heights.menu) {
            (Some(container), Some(menu)) => Self::new(container - menu * MENU_TRAVEL, 0.0),
            _ => Self::NONE,
        }
    }

    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }

    /// Linear interpolation from `start` to `end`. Hits both endpoints
    /// exactly and never leaves `[min, max]`.
    pub fn lerp(&self, progress: f64) -> f64 {
        // unreadable progress counts as zero progress, which maps to `start`;
        // the zero offset default is `ParallaxMapper`'s, for inactive parallax
        let p = if progress.is_finite() {
            progress.clamp(0.0, 1.0)
        } else {
            0.0
        };
        if p == 0.0 {
            return self.start;
        }
        if p == 1.0 {
            return self.end;
        }
        let (lo, hi) = if self.start <= self.end {
            (self.start, self.end)
        } else {
            (self.end, self.start)
        };
        (self.start + p * (self.end - self.start)).clamp(lo, hi)
    }
}

/// Applies a [`ParallaxRange`] only on viewports at least `md` wide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParallaxMapper {
    min_width: Option<u32>,
}

impl Default for ParallaxMapper {
    fn default() -> Self {
        Self::new(&BreakpointTable::default())
    }
}

impl ParallaxMapper {
    pub fn new(table: &BreakpointTable) -> Self {
        Self {
            min_width: table.width(Breakpoint::Md),
        }
    }

    pub fn is_active(&self, viewport_width: u32) -> bool {
        self.min_width.is_some_and(|min| viewport_width >= min)
    }

    pub fn map(&self, progress: f64, range: ParallaxRange, viewport_width: u32) -> f64 {
        if !self.is_active(viewport_width) {
            return NEUTRAL_OFFSET;
        }
        range.lerp(progress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DESKTOP: u32 = 1024;
    const PHONE: u32 = 375;

    fn sample_ranges() -> Vec<ParallaxRange> {
        vec![
            ParallaxRange::new(-100.0, 0.0),
            ParallaxRange::new(0.0, -100.0),
            ParallaxRange::new(0.1, 0.7),
            ParallaxRange::new(313.4, -27.9),
            ParallaxRange::new(1e9, 1e-9),
            ParallaxRange::NONE,
        ]
    }

    #[test]
    fn test_endpoints_exact() {
        let mapper = ParallaxMapper::default();
        for range in sample_ranges() {
            assert_eq!(mapper.map(0.0, range, DESKTOP), range.start);
            assert_eq!(mapper.map(1.0, range, DESKTOP), range.end);
        }
    }

    #[test]
    fn test_output_within_range() {
        let mapper = ParallaxMapper::default();
        for range in sample_ranges() {
            let lo = range.start.min(range.end);
            let hi = range.start.max(range.end);
            for step in 0..=100 {
                let out = mapper.map(step as f64 / 100.0, range, DESKTOP);
                assert!(lo <= out && out <= hi, "{out} outside {range:?}");
            }
        }
    }

    #[test]
    fn test_half_way_on_desktop() {
        let mapper = ParallaxMapper::default();
        let range = ParallaxRange::new(-100.0, 0.0);
        assert_eq!(mapper.map(0.5, range, DESKTOP), -50.0);
    }

    #[test]
    fn test_neutral_below_md() {
        let mapper = ParallaxMapper::default();
        let range = ParallaxRange::new(-100.0, 0.0);
        for progress in [0.0, 0.3, 0.5, 1.0] {
            assert_eq!(mapper.map(progress, range, PHONE), NEUTRAL_OFFSET);
            assert_eq!(mapper.map(progress, range, 767), NEUTRAL_OFFSET);
        }
        assert!(mapper.is_active(768));
    }

    #[test]
    fn test_out_of_range_progress_is_clamped() {
        let range = ParallaxRange::new(-100.0, 0.0);
        assert_eq!(range.lerp(-2.0), -100.0);
        assert_eq!(range.lerp(7.0), 0.0);
        assert_eq!(range.lerp(f64::NAN), -100.0);
    }

    #[test]
    fn test_unreadable_progress_is_zero_progress() {
        let mapper = ParallaxMapper::default();
        let range = ParallaxRange::new(-100.0, 0.0);
        for progress in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert_eq!(mapper.map(progress, range, DESKTOP), range.start);
            assert_eq!(mapper.map(progress, range, PHONE), NEUTRAL_OFFSET);
        }
    }

    #[test]
    fn test_unmeasured_heights_give_no_range() {
        let range = ParallaxRange::from_heights(LayoutHeights::new(Some(600.0), None));
        assert_eq!(range, ParallaxRange::NONE);
        assert_eq!(ParallaxMapper::default().map(0.4, range, DESKTOP), 0.0);

        let range = ParallaxRange::from_heights(LayoutHeights::new(Some(f64::NAN), Some(10.0)));
        assert!(range.is_degenerate());
    }

    #[test]
    fn test_range_from_heights() {
        let range = ParallaxRange::from_heights(LayoutHeights::new(Some(600.0), Some(250.0)));
        assert_eq!(range, ParallaxRange::new(300.0, 0.0));
    }

    #[test]
    fn test_non_finite_range_degenerates() {
        assert_eq!(ParallaxRange::new(f64::INFINITY, 0.0), ParallaxRange::NONE);
    }
}
