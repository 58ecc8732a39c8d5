//! Lifetime cell family.
//!
//! The module tree is intentionally stratified:
//! - `raw::*` holds the only direct `MaybeUninit` operations.
//! - `life::*` is the discriminant-free `LifeCell` and its lifetime transitions.
//! - `occupied::*` are the proof-carrying views and their passthrough operators.

pub mod life;
pub mod occupied;
pub(crate) mod raw;

pub use life::LifeCell;
pub use occupied::{Occupied, OccupiedRef};
