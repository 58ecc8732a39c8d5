//! Centralized unsafe accessors for the raw cell layer.
//!
//! This module exists to *concentrate* and *standardize* the unsafe
//! initialization operations used by `LifeCell` and its occupancy views.
//!
//! ## Design rule
//! - Higher layers (`cell::life`, `cell::occupied`) should not call
//!   `MaybeUninit::assume_init_*` directly.
//! - Instead, they should call the small, audited surface here.

pub(crate) mod maybe_uninit;
