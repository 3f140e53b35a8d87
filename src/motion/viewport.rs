use std::fmt;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct ViewportSize {
    pub width: u32,
    pub height: u32,
}

impl ViewportSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Builds a size from the floating point values the browser reports.
    /// Anything negative or non-finite collapses to zero.
    pub fn from_f64(width: f64, height: f64) -> Self {
        let px = |v: f64| {
            if v.is_finite() && v > 0.0 {
                v.min(u32::MAX as f64) as u32
            } else {
                0
            }
        };
        Self::new(px(width), px(height))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Breakpoint {
    Sm,
    Md,
    Lg,
    Xl,
    Xxl,
}

impl Breakpoint {
    pub fn name(&self) -> &'static str {
        match self {
            Breakpoint::Sm => "sm",
            Breakpoint::Md => "md",
            Breakpoint::Lg => "lg",
            Breakpoint::Xl => "xl",
            Breakpoint::Xxl => "2xl",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "sm" => Some(Breakpoint::Sm),
            "md" => Some(Breakpoint::Md),
            "lg" => Some(Breakpoint::Lg),
            "xl" => Some(Breakpoint::Xl),
            "2xl" => Some(Breakpoint::Xxl),
            _ => None,
        }
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Tailwind's default screens, which the page markup is written against.
pub const TAILWIND_SCREENS: [(Breakpoint, u32); 5] = [
    (Breakpoint::Sm, 640),
    (Breakpoint::Md, 768),
    (Breakpoint::Lg, 1024),
    (Breakpoint::Xl, 1280),
    (Breakpoint::Xxl, 1536),
];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BreakpointError {
    #[error("breakpoint {later} ({later_width}px) is not wider than {earlier} ({earlier_width}px)")]
    NotIncreasing {
        earlier: Breakpoint,
        earlier_width: u32,
        later: Breakpoint,
        later_width: u32,
    },
    #[error("breakpoint {0} is defined more than once")]
    Duplicate(Breakpoint),
}

/// Ordered breakpoint to minimum width mapping. Widths strictly increase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakpointTable {
    entries: Vec<(Breakpoint, u32)>,
}

impl Default for BreakpointTable {
    fn default() -> Self {
        Self {
            entries: TAILWIND_SCREENS.to_vec(),
        }
    }
}

impl BreakpointTable {
    pub fn new(entries: Vec<(Breakpoint, u32)>) -> Result<Self, BreakpointError> {
        for (i, (bp, _)) in entries.iter().enumerate() {
            if entries[..i].iter().any(|(other, _)| other == bp) {
                return Err(BreakpointError::Duplicate(*bp));
            }
        }
        for pair in entries.windows(2) {
            let (earlier, earlier_width) = pair[0];
            let (later, later_width) = pair[1];
            if later_width <= earlier_width {
                return Err(BreakpointError::NotIncreasing {
                    earlier,
                    earlier_width,
                    later,
                    later_width,
                });
            }
        }
        Ok(Self { entries })
    }

    pub fn width(&self, breakpoint: Breakpoint) -> Option<u32> {
        self.entries
            .iter()
            .find(|(bp, _)| *bp == breakpoint)
            .map(|(_, w)| *w)
    }

    pub fn width_of(&self, name: &str) -> Option<u32> {
        Breakpoint::from_name(name).and_then(|bp| self.width(bp))
    }

    /// Largest breakpoint whose minimum width fits in `width`.
    pub fn classify(&self, width: u32) -> Option<Breakpoint> {
        self.entries
            .iter()
            .take_while(|(_, min)| *min <= width)
            .last()
            .map(|(bp, _)| *bp)
    }

    /// A breakpoint missing from the table is never reached.
    pub fn is_at_least(&self, width: u32, breakpoint: Breakpoint) -> bool {
        self.width(breakpoint).is_some_and(|min| width >= min)
    }

    pub fn iter(&self) -> impl Iterator<Item = &(Breakpoint, u32)> {
        self.entries.iter()
    }
}

/// Latest known window size plus its breakpoint classification.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ViewportTracker {
    size: ViewportSize,
    table: BreakpointTable,
}

impl ViewportTracker {
    pub fn new(table: BreakpointTable) -> Self {
        Self {
            size: ViewportSize::default(),
            table,
        }
    }

    /// Returns whether the size actually changed.
    pub fn handle_resize(&mut self, size: ViewportSize) -> bool {
        if self.size == size {
            return false;
        }
        self.size = size;
        true
    }

    pub fn size(&self) -> ViewportSize {
        self.size
    }

    pub fn breakpoint(&self) -> Option<Breakpoint> {
        self.table.classify(self.size.width)
    }

    pub fn is_at_least(&self, breakpoint: Breakpoint) -> bool {
        self.table.is_at_least(self.size.width, breakpoint)
    }

    pub fn table(&self) -> &BreakpointTable {
        &self.table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_widths() {
        let table = BreakpointTable::default();
        assert_eq!(table.width_of("sm"), Some(640));
        assert_eq!(table.width_of("md"), Some(768));
        assert_eq!(table.width_of("2xl"), Some(1536));
        assert_eq!(table.width_of("3xl"), None);
    }

    #[test]
    fn test_rejects_non_increasing_widths() {
        let res = BreakpointTable::new(vec![(Breakpoint::Sm, 640), (Breakpoint::Md, 640)]);
        assert_eq!(
            res,
            Err(BreakpointError::NotIncreasing {
                earlier: Breakpoint::Sm,
                earlier_width: 640,
                later: Breakpoint::Md,
                later_width: 640,
            })
        );

        let res = BreakpointTable::new(vec![(Breakpoint::Md, 768), (Breakpoint::Sm, 640)]);
        assert!(res.is_err());
    }

    #[test]
    fn test_rejects_duplicates() {
        let res = BreakpointTable::new(vec![(Breakpoint::Md, 700), (Breakpoint::Md, 800)]);
        assert_eq!(res, Err(BreakpointError::Duplicate(Breakpoint::Md)));
    }

    #[test]
    fn test_classify() {
        let table = BreakpointTable::default();
        assert_eq!(table.classify(0), None);
        assert_eq!(table.classify(375), None);
        assert_eq!(table.classify(640), Some(Breakpoint::Sm));
        assert_eq!(table.classify(767), Some(Breakpoint::Sm));
        assert_eq!(table.classify(768), Some(Breakpoint::Md));
        assert_eq!(table.classify(1024), Some(Breakpoint::Lg));
        assert_eq!(table.classify(4000), Some(Breakpoint::Xxl));
    }

    #[test]
    fn test_missing_breakpoint_never_reached() {
        let table = BreakpointTable::new(vec![(Breakpoint::Sm, 600)]).unwrap();
        assert!(table.is_at_least(10_000, Breakpoint::Sm));
        assert!(!table.is_at_least(10_000, Breakpoint::Md));
    }

    #[test]
    fn test_tracker_resize() {
        let mut tracker = ViewportTracker::default();
        assert_eq!(tracker.size(), ViewportSize::default());
        assert_eq!(tracker.breakpoint(), None);

        assert!(tracker.handle_resize(ViewportSize::new(1024, 768)));
        assert!(!tracker.handle_resize(ViewportSize::new(1024, 768)));
        assert_eq!(tracker.breakpoint(), Some(Breakpoint::Lg));
        assert!(tracker.is_at_least(Breakpoint::Md));

        assert!(tracker.handle_resize(ViewportSize::new(375, 812)));
        assert!(!tracker.is_at_least(Breakpoint::Md));
    }

    #[test]
    fn test_size_from_browser_values() {
        assert_eq!(ViewportSize::from_f64(1024.0, 700.5), ViewportSize::new(1024, 700));
        assert_eq!(ViewportSize::from_f64(f64::NAN, -3.0), ViewportSize::default());
    }
}
