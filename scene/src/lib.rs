//! Scene-side collaborators of the roll estimator
//!
//! Simple geometry and bookkeeping that lives alongside the stabilized
//! camera: a fixed-path object recycler that streams pooled instances past
//! the viewer, and an annular arc region used to hit-test taps against an
//! on-screen dial.

mod arc_region;
mod recycler;

pub use arc_region::ArcRegion;
pub use recycler::{Recycler, RecyclerConfig, Slot, SlotState, DEFAULT_POOL_SIZE};
