use std::time::Duration;

/// Delay between two consecutive menu entries.
pub const DEFAULT_STEP: Duration = Duration::from_millis(150);

pub type Task = Box<dyn FnOnce() + 'static>;

/// Something that can run a task after a delay and cancel it again.
pub trait Scheduler {
    type Handle;

    /// Returns `None` if the task could not be scheduled.
    fn schedule(&self, delay: Duration, task: Task) -> Option<Self::Handle>;

    /// Cancelling a handle whose task already ran must be harmless.
    fn cancel(&self, handle: Self::Handle);
}

/// Reveals still waiting on the scheduler. Dropping this cancels them.
#[must_use = "dropping PendingReveals cancels every reveal that has not fired"]
pub struct PendingReveals<S: Scheduler> {
    scheduler: S,
    handles: Vec<S::Handle>,
}

impl<S: Scheduler> PendingReveals<S> {
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}

impl<S: Scheduler> Drop for PendingReveals<S> {
    fn drop(&mut self) {
        for handle in self.handles.drain(..) {
            self.scheduler.cancel(handle);
        }
    }
}

/// One-shot staggered reveal of `entries` menu items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuRevealSequencer {
    entries: usize,
    step: Duration,
    started: bool,
}

impl MenuRevealSequencer {
    pub fn new(entries: usize, step: Duration) -> Self {
        Self {
            entries,
            step,
            started: false,
        }
    }

    pub fn entries(&self) -> usize {
        self.entries
    }

    pub fn has_started(&self) -> bool {
        self.started
    }

    /// Entry `i` is due `i * step` after mount.
    pub fn delay_for(&self, index: usize) -> Option<Duration> {
        if index >= self.entries {
            return None;
        }
        let factor = u32::try_from(index).unwrap_or(u32::MAX);
        Some(self.step.saturating_mul(factor))
    }

    /// Schedules every entry. Only the first call does anything.
    pub fn start<S, F>(&mut self, scheduler: S, reveal: F) -> Option<PendingReveals<S>>
    where
        S: Scheduler,
        F: Fn(usize) + Clone + 'static,
    {
        if self.started {
            return None;
        }
        self.started = true;
        let handles = (0..self.entries)
            .filter_map(|i| {
                let delay = self.delay_for(i)?;
                let reveal = reveal.clone();
                scheduler.schedule(delay, Box::new(move || reveal(i)))
            })
            .collect();
        Some(PendingReveals { scheduler, handles })
    }
}

/// How many entries are visible. Revealing entry `i` also reveals every
/// entry before it, so visibility always grows in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RevealState {
    total: usize,
    revealed: usize,
}

impl RevealState {
    pub fn new(total: usize) -> Self {
        Self { total, revealed: 0 }
    }

    /// Returns whether anything new became visible.
    pub fn reveal(&mut self, index: usize) -> bool {
        let next = index.saturating_add(1).min(self.total);
        if next <= self.revealed {
            return false;
        }
        self.revealed = next;
        true
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        index < self.revealed
    }

    pub fn revealed(&self) -> usize {
        self.revealed
    }

    pub fn is_complete(&self) -> bool {
        self.revealed == self.total
    }
}
