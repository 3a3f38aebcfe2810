//! # u-loading
//!
//! Cargo load planning library: a dual-constraint (weight + volume) 0/1
//! knapsack solved exactly by dynamic programming, with backward
//! reconstruction of the chosen subset and a sequential allocation loop
//! that fills a fleet of vehicles from a shrinking item pool.
//!
//! ## Modules
//!
//! - [`models`] — Domain types (Item, Money, Vehicle, ItemPool, manifests)
//! - [`knapsack`] — DP capacity table and solution reconstruction
//! - [`allocation`] — Sequential per-vehicle rounds and the pending report
//! - [`io`] — Instance parsing and report formatting
//! - [`error`] — Error types
//!
//! ## Example
//!
//! ```
//! use u_loading::allocation::plan_loads;
//! use u_loading::models::{Item, Money, Vehicle};
//!
//! let items = vec![
//!     Item::new("ITEM01", Money::parse("49.99").unwrap(), 2, 1),
//!     Item::new("ITEM02", Money::parse("100.00").unwrap(), 49, 10),
//! ];
//! let vehicles = vec![Vehicle::new("ABC1D23", 50, 100)];
//!
//! let run = plan_loads(items, &vehicles).unwrap();
//! assert_eq!(run.manifests()[0].item_codes(), ["ITEM02".to_string()]);
//! assert_eq!(run.pending().item_codes(), ["ITEM01".to_string()]);
//! ```

pub mod allocation;
pub mod error;
pub mod io;
pub mod knapsack;
pub mod models;

pub use error::{Error, Result};
