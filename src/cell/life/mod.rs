//! `LifeCell`: storage for one `T` whose lifetime the caller controls.
//!
//! A `LifeCell<T>` is laid out exactly like `T` and carries no discriminant.
//! Whether it currently holds a live value is known only to the surrounding
//! program. Operations that need a live value are `unsafe` and document that
//! precondition; operations that only ever *start* a lifetime are safe and hand
//! back an [`Occupied`](crate::Occupied) proof.
//!
//! ## State machine (tracked by the caller)
//!
//! ```text
//! Empty    --construct* / new*------> Occupied
//! Occupied --destroy / take---------> Empty
//! Occupied --replace* / assign------> Occupied
//! ```
//!
//! Every other transition is a contract violation. Constructing over a live
//! value leaks it; destroying, reading or replacing an empty cell is undefined
//! behavior.
//!
//! Dropping a `LifeCell` never drops the value inside it.

mod access;
mod lifecycle;

use core::{fmt, mem::MaybeUninit};

use crate::cell::raw::access::maybe_uninit as mu;

/// Discriminant-free storage for one `T`.
///
/// # Example
///
/// ```rust
/// use lifecell::LifeCell;
///
/// let mut cell = LifeCell::<Vec<i32>>::empty();
///
/// cell.construct_from_iter([1, 2, 3]);
/// // SAFETY: constructed on the line above.
/// assert_eq!(unsafe { cell.get() }, &[1, 2, 3]);
///
/// // SAFETY: still occupied; empty afterwards.
/// unsafe { cell.destroy() };
///
/// let occupied = cell.construct(vec![4, 5]);
/// assert_eq!(occupied.len(), 2);
/// occupied.destroy();
/// ```
#[repr(transparent)]
pub struct LifeCell<T> {
    slot: MaybeUninit<T>,
}

impl<T> LifeCell<T> {
    /// Creates an empty cell. No `T` is constructed.
    #[inline(always)]
    pub const fn empty() -> Self {
        Self {
            slot: MaybeUninit::uninit(),
        }
    }

    /// Creates an array of `N` empty cells.
    #[inline]
    pub const fn empty_array<const N: usize>() -> [Self; N] {
        [const { Self::empty() }; N]
    }

    /// Creates an occupied cell holding `value`.
    #[inline(always)]
    pub const fn new(value: T) -> Self {
        Self {
            slot: MaybeUninit::new(value),
        }
    }

    /// Creates an occupied cell holding the value returned by `f`.
    ///
    /// If `f` panics no cell is produced.
    #[inline]
    pub fn new_with<F>(f: F) -> Self
    where
        F: FnOnce() -> T,
    {
        let mut cell = Self::empty();
        cell.construct_with(f);
        cell
    }

    /// Creates an occupied cell holding `T::from(args)`.
    #[inline]
    pub fn new_from<A>(args: A) -> Self
    where
        T: From<A>,
    {
        Self::new(T::from(args))
    }

    /// Creates an occupied cell from a fallible constructor.
    ///
    /// # Errors
    /// Returns the constructor's error unchanged.
    #[inline]
    pub fn try_new_with<E, F>(f: F) -> Result<Self, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        f().map(Self::new)
    }

    /// Wraps raw uninitialized storage. Occupancy carries over unchanged.
    #[inline(always)]
    pub const fn from_maybe_uninit(slot: MaybeUninit<T>) -> Self {
        Self { slot }
    }

    /// Unwraps the raw storage. Occupancy carries over unchanged.
    #[inline(always)]
    pub const fn into_maybe_uninit(self) -> MaybeUninit<T> {
        self.slot
    }

    /// Views the raw storage.
    #[inline(always)]
    pub const fn as_maybe_uninit(&self) -> &MaybeUninit<T> {
        &self.slot
    }

    /// Views the raw storage mutably.
    ///
    /// Writing through the returned reference changes the cell's occupancy
    /// exactly as it would for a bare `MaybeUninit<T>`.
    #[inline(always)]
    pub fn as_maybe_uninit_mut(&mut self) -> &mut MaybeUninit<T> {
        &mut self.slot
    }

    /// Consumes an occupied cell and returns its value.
    ///
    /// # Safety
    /// The cell must be occupied.
    #[inline(always)]
    pub unsafe fn into_inner(self) -> T {
        // SAFETY: caller asserts occupancy; `self` is consumed so the value
        // cannot be observed again.
        unsafe { mu::read(&self.slot) }
    }
}

/// Copies the raw storage, occupied or not, as `MaybeUninit<T>` does.
impl<T: Copy> Clone for LifeCell<T> {
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Copy> Copy for LifeCell<T> {}

impl<T> Default for LifeCell<T> {
    /// Creates an empty cell.
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> From<T> for LifeCell<T> {
    /// Creates an occupied cell holding `value`.
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T, U> FromIterator<U> for LifeCell<T>
where
    T: FromIterator<U>,
{
    /// Creates an occupied cell holding `T::from_iter(iter)`.
    fn from_iter<I: IntoIterator<Item = U>>(iter: I) -> Self {
        Self::new(T::from_iter(iter))
    }
}

impl<T> fmt::Debug for LifeCell<T> {
    /// Never reads the storage: the cell cannot know whether it is occupied.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LifeCell").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_new_holds_value() {
        let cell = LifeCell::new(String::from("held"));
        assert_eq!(unsafe { cell.into_inner() }, "held");
    }

    #[test]
    fn test_new_from_matches_direct_construction() {
        let cell: LifeCell<String> = LifeCell::new_from("abc");
        assert_eq!(unsafe { cell.get() }, &String::from("abc"));
        drop(unsafe { cell.into_inner() });
    }

    #[test]
    fn test_try_new_with_propagates_error() {
        let res: Result<LifeCell<u8>, &str> = LifeCell::try_new_with(|| Err("rejected"));
        assert_eq!(res.err(), Some("rejected"));
    }

    #[test]
    fn test_from_iterator_builds_occupied_cell() {
        let cell: LifeCell<Vec<u8>> = (1..=3).collect();
        assert_eq!(unsafe { cell.into_inner() }, vec![1, 2, 3]);
    }

    #[test]
    fn test_drop_does_not_drop_value() {
        let rc = Rc::new(());
        {
            let _cell = LifeCell::new(Rc::clone(&rc));
        }
        // The clone leaked with the cell.
        assert_eq!(Rc::strong_count(&rc), 2);
    }

    #[test]
    fn test_debug_does_not_read_storage() {
        let cell = LifeCell::<Cell<u8>>::empty();
        assert_eq!(format!("{cell:?}"), "LifeCell { .. }");
    }

    #[test]
    fn test_copy_duplicates_storage() {
        let original = LifeCell::new((4u8, 'x'));
        let mut copy = original;
        assert_eq!(unsafe { *copy.get() }, (4, 'x'));

        unsafe { copy.get_mut().0 = 5 };
        assert_eq!(unsafe { original.get() }.0, 4);
        assert_eq!(unsafe { copy.get() }.0, 5);

        let empty = LifeCell::<u32>::empty();
        let mut cells = [empty; 2];
        cells[0].construct(1);
        assert_eq!(unsafe { *cells[0].get() }, 1);
    }

    #[test]
    fn test_maybe_uninit_round_trip() {
        let cell = LifeCell::from_maybe_uninit(MaybeUninit::new(9u16));
        let slot = cell.into_maybe_uninit();
        assert_eq!(unsafe { slot.assume_init() }, 9);
    }

    #[test]
    fn test_empty_array_is_storage_only() {
        let cells = LifeCell::<String>::empty_array::<4>();
        assert_eq!(cells.len(), 4);
        assert_eq!(core::mem::size_of_val(&cells), 4 * core::mem::size_of::<String>());
    }
}
