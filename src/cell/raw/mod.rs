//! Raw building blocks.
//!
//! This layer exposes no public surface and concentrates the unsafe code of
//! the crate in a single module.

pub(crate) mod access;
