//! System history engine: the patient's clinical activity feed.
//!
//! Normalizes records from eight independently-owned sources into one
//! canonical `Vec<Activity>`, merges them newest-first, applies the
//! kind/role-group/time filter pipeline, then derives per-day groups and
//! the two chart projections. Everything past the fetch is a pure
//! transform, safe to recompute on every filter change.

pub mod assemble;
pub mod charts;
pub mod group;
pub mod normalize;
pub mod roles;
pub mod session;
pub mod types;

pub use assemble::*;
pub use charts::*;
pub use group::*;
pub use roles::*;
pub use session::*;
pub use types::*;

// ── Tests ──────────────────────────────────────────────────────────────────
