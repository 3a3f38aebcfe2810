//! Sequential multi-vehicle allocation.
//!
//! Vehicles are processed strictly in input order: each round solves the
//! dual-constraint knapsack against the current pool, removes the chosen
//! items, and hands the shrunken pool to the next vehicle. Rounds share the
//! pool as mutable state, so no two rounds can run concurrently.

mod allocator;

pub use allocator::{allocate_round, plan_loads};
