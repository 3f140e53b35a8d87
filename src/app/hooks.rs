use std::time::Duration;

use leptos::prelude::*;
use leptos_use::{use_window_scroll, use_window_size, UseWindowSizeReturn};

use crate::motion::{
    MenuRevealSequencer, RevealState, Scheduler, ScrollProgressTracker, ScrollRegion,
    ViewportSize, ViewportTracker,
};

/// Current viewport. Stays at the zero size while rendering on the server;
/// the resize listener is released with the calling owner.
pub fn use_viewport() -> ReadSignal<ViewportTracker> {
    let UseWindowSizeReturn { width, height } = use_window_size();
    let tracker = RwSignal::new(ViewportTracker::default());
    Effect::new(move |_| {
        let size = ViewportSize::from_f64(width.get(), height.get());
        tracker.maybe_update(|t| t.handle_resize(size));
    });
    tracker.read_only()
}

/// Progress through `region`; only the newest scroll tick counts.
pub fn use_scroll_progress(region: Signal<Option<ScrollRegion>>) -> Memo<f64> {
    let (_, scroll_y) = use_window_scroll();
    let tracker = RwSignal::new(ScrollProgressTracker::default());
    Effect::new(move |_| {
        let region = region.get();
        tracker.update(|t| t.set_region(region));
    });
    Effect::new(move |_| {
        let y = scroll_y.get();
        tracker.update(|t| {
            t.observe(y);
        });
    });
    Memo::new(move |_| tracker.with(ScrollProgressTracker::progress))
}

/// Browser timers.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    type Handle = TimeoutHandle;

    fn schedule(&self, delay: Duration, task: crate::motion::reveal::Task) -> Option<TimeoutHandle> {
        match set_timeout_with_handle(task, delay) {
            Ok(handle) => Some(handle),
            Err(err) => {
                log::warn!("could not schedule menu reveal: {err:?}");
                None
            }
        }
    }

    fn cancel(&self, handle: TimeoutHandle) {
        handle.clear();
    }
}

/// Staggers `entries` menu items in once the component mounts.
pub fn use_menu_reveal(entries: usize, step: Duration) -> ReadSignal<RevealState> {
    let (state, set_state) = signal(RevealState::new(entries));
    let sequencer = StoredValue::new(MenuRevealSequencer::new(entries, step));
    Effect::new(move |_| {
        let reveal = move |i: usize| set_state.maybe_update(|s| s.reveal(i));
        let pending = sequencer
            .try_update_value(|s| s.start(TimeoutScheduler, reveal))
            .flatten();
        if let Some(pending) = pending {
            log::debug!("scheduled {} menu reveals", pending.len());
            on_cleanup(move || drop(pending));
        }
    });
    state
}
