//! Scroll and viewport driven motion for the hero section.
//!
//! Everything in here is plain data plus pure functions so it can be
//! exercised without a browser. The `app` hooks feed it window signals
//! from leptos-use.

pub mod hero;
pub mod parallax;
pub mod reveal;
pub mod scroll;
pub mod viewport;

pub use hero::{HeroPhase, HeroState};
pub use parallax::{LayoutHeights, ParallaxMapper, ParallaxRange, NEUTRAL_OFFSET};
pub use reveal::{MenuRevealSequencer, PendingReveals, RevealState, Scheduler};
pub use scroll::{ScrollProgressTracker, ScrollRegion};
pub use viewport::{Breakpoint, BreakpointError, BreakpointTable, ViewportSize, ViewportTracker};
