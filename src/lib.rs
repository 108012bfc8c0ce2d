//! # Trapped-material
//!
//! `trapped-material` measures how much material (water, sand, ...) a row of bars of varying
//! heights holds once it has been poured over them and allowed to run off both ends.  The core is
//! [`trapped_volume`], a two-pass sweep toward the highest bar.  [`fill_profile`] raises the pooled
//! cells in place instead, and [`row_volumes`] / [`fill_rows`] apply the same to every row of an
//! `ndarray` grid in parallel.
//!
//! ## Example
//!
//! ```
//! use trapped_material::trapped_volume;
//!
//! let heights = vec![0, 1, 0, 2, 1, 0, 1, 3, 2, 1, 2, 1];
//! let volume = trapped_volume(&heights).expect("Failed to measure profile");
//! assert_eq!(volume, 6);
//! ```
mod error;
mod grid;
mod profile;

pub use error::MaterialError;
pub use grid::{fill_rows, row_volumes};
pub use profile::{fill_profile, peak, trapped_volume};
