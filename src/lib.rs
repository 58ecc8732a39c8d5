//! # `lifecell` - Discriminant-Free Lifetime Cells
//!
//! A [`LifeCell<T>`] is storage for exactly one `T` that never records whether a
//! value currently lives in it. It is what `Option<T>` would be without the
//! tag: same size, same alignment as `T`, no flag, no sentinel, no niche.
//!
//! Knowing whether a cell is occupied is the caller's job. That knowledge
//! usually comes for free from control flow: a field that is only reachable
//! after a constructor succeeded, a slot guarded by a state machine kept
//! elsewhere, a buffer whose fill level is tracked by its owner.
//!
//! ## Safety Model
//!
//! - **Starting a lifetime is safe.** `construct*` and `new*` only write. Writing
//!   over a live value leaks it, which Rust considers safe.
//! - **Relying on a lifetime is `unsafe`.** `get`, `destroy`, `replace*`, `take`,
//!   `iter` and `assume_occupied*` each carry an occupancy precondition in their
//!   `# Safety` section. Nothing is checked at runtime.
//! - **Proofs make the rest safe.** Construct operations return an
//!   [`Occupied`] view, and [`LifeCell::assume_occupied_mut`] creates one. While a
//!   view exists, access, comparison, indexing, iteration, assignment and even
//!   destruction are safe.
//! - **Dropping a cell never drops its value.**
//!
//! ## Construction Failure
//!
//! Fallible constructors (`try_construct_with`, `try_construct_from`,
//! `try_new_with`) run before the storage is touched, so an error leaves the
//! cell empty and is returned unchanged. A panicking constructor closure
//! likewise leaves the cell empty.
//!
//! ## Features
//!
//! - `tracing`: emit a `TRACE` event under the `lifecell` target on each
//!   lifetime transition.
//! - `serde`: serialize occupancy views as `T`; deserialize into an occupied
//!   `LifeCell<T>`.
//!
//! ## Example
//!
//! ```rust
//! use lifecell::LifeCell;
//!
//! let mut cell = LifeCell::<Vec<i32>>::new(vec![1, 2, 3]);
//!
//! // SAFETY: constructed on initialization.
//! let view = unsafe { cell.assume_occupied() };
//! assert_eq!(view.len(), 3);
//! assert_eq!(view.into_iter().copied().collect::<Vec<_>>(), [1, 2, 3]);
//!
//! // SAFETY: still occupied.
//! unsafe { cell.destroy() };
//!
//! let mut occupied = cell.construct_from_iter([4, 5]);
//! occupied[0] = 40;
//! assert_eq!(*occupied, [40, 5]);
//! occupied.destroy();
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod cell;
#[cfg(feature = "serde")]
mod serde_impls;
mod trace;

pub use cell::{LifeCell, Occupied, OccupiedRef};

// Compile-time assertions for the zero-overhead layout claim.
const _: () = {
    use core::mem;

    // Same size and alignment as the held type, for a spread of layouts.
    assert!(mem::size_of::<LifeCell<u8>>() == mem::size_of::<u8>());
    assert!(mem::size_of::<LifeCell<u64>>() == mem::size_of::<u64>());
    assert!(mem::align_of::<LifeCell<u64>>() == mem::align_of::<u64>());
    assert!(mem::size_of::<LifeCell<[u16; 3]>>() == mem::size_of::<[u16; 3]>());
    assert!(mem::align_of::<LifeCell<[u16; 3]>>() == mem::align_of::<[u16; 3]>());
    assert!(mem::size_of::<LifeCell<String>>() == mem::size_of::<String>());
    assert!(mem::size_of::<LifeCell<()>>() == 0);

    // A tagged `Option` pays for its discriminant; the cell does not.
    assert!(mem::size_of::<LifeCell<u64>>() < mem::size_of::<Option<u64>>());

    // Views are a single pointer.
    assert!(mem::size_of::<Occupied<'static, u64>>() == mem::size_of::<usize>());
    assert!(mem::size_of::<OccupiedRef<'static, u64>>() == mem::size_of::<usize>());
};
