//! Lifecycle tracing.
//!
//! With the `tracing` feature enabled every lifetime transition of a
//! `LifeCell` emits a `TRACE` event under the `lifecell` target. Without it the
//! macro expands to an empty block.

/// Records a lifetime transition for a cell holding `$ty`.
macro_rules! lifecycle {
    ($ty:ty, $op:literal) => {{
        #[cfg(feature = "tracing")]
        {
            tracing::trace!(
                target: "lifecell",
                op = $op,
                ty = core::any::type_name::<$ty>(),
                "life cell transition"
            );
        }
    }};
}

pub(crate) use lifecycle;
