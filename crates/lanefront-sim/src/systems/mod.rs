//! ECS systems that operate on the unit world each tick.
//!
//! Systems are free functions that take `&mut World` (or `&World` for read-only).
//! Per-run state they need is passed in explicitly.

pub mod cleanup;
pub mod combat;
pub mod snapshot;
