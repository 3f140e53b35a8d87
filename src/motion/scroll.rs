/// Document offset and height of the region whose traversal is tracked.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollRegion {
    pub start: f64,
    pub height: f64,
}

impl ScrollRegion {
    pub const fn new(start: f64, height: f64) -> Self {
        Self { start, height }
    }

    pub fn end(&self) -> f64 {
        self.start + self.height
    }

    /// `clamp((position - start) / height, 0, 1)`, with 0 for anything that
    /// cannot be measured.
    pub fn progress_at(&self, position: f64) -> f64 {
        if !position.is_finite()
            || !self.start.is_finite()
            || !self.height.is_finite()
            || self.height <= 0.0
        {
            return 0.0;
        }
        if position <= self.start {
            return 0.0;
        }
        if position >= self.end() {
            return 1.0;
        }
        ((position - self.start) / self.height).clamp(0.0, 1.0)
    }
}

/// Keeps only the newest progress value for a region.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScrollProgressTracker {
    region: Option<ScrollRegion>,
    position: Option<f64>,
    latest: f64,
}

impl ScrollProgressTracker {
    pub fn new(region: Option<ScrollRegion>) -> Self {
        Self {
            region,
            ..Self::default()
        }
    }

    /// Records a scroll tick and returns the resulting progress.
    pub fn observe(&mut self, position: f64) -> f64 {
        self.position = Some(position);
        self.latest = self.compute();
        self.latest
    }

    /// Re-targets the tracker; the last known position is re-evaluated.
    pub fn set_region(&mut self, region: Option<ScrollRegion>) {
        self.region = region;
        self.latest = self.compute();
    }

    pub fn reset(&mut self) {
        self.position = None;
        self.latest = 0.0;
    }

    pub fn progress(&self) -> f64 {
        self.latest
    }

    pub fn region(&self) -> Option<ScrollRegion> {
        self.region
    }

    fn compute(&self) -> f64 {
        match (self.region, self.position) {
            (Some(region), Some(position)) => region.progress_at(position),
            _ => 0.0,
        }
    }
}
