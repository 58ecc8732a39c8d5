//! Unchecked access to the held value.

use core::mem;

use crate::cell::raw::access::maybe_uninit as mu;
use crate::{Occupied, OccupiedRef};

use super::LifeCell;

impl<T> LifeCell<T> {
    /// Returns a shared reference to the held value.
    ///
    /// # Safety
    /// The cell must be occupied for the whole lifetime of the returned reference.
    #[inline(always)]
    pub const unsafe fn get(&self) -> &T {
        // SAFETY: caller asserts occupancy.
        unsafe { mu::assume_init_ref(self.as_maybe_uninit()) }
    }

    /// Returns an exclusive reference to the held value.
    ///
    /// # Safety
    /// The cell must be occupied for the whole lifetime of the returned reference.
    #[inline(always)]
    pub unsafe fn get_mut(&mut self) -> &mut T {
        // SAFETY: caller asserts occupancy.
        unsafe { mu::assume_init_mut(self.as_maybe_uninit_mut()) }
    }

    /// Asserts that the cell is occupied, returning a read-only view that
    /// forwards comparisons, indexing, iteration and formatting to the value.
    ///
    /// # Safety
    /// The cell must be occupied for the whole lifetime of the returned view.
    #[inline(always)]
    pub unsafe fn assume_occupied(&self) -> OccupiedRef<'_, T> {
        // SAFETY: caller asserts occupancy.
        unsafe { OccupiedRef::new_unchecked(self) }
    }

    /// Asserts that the cell is occupied, returning an exclusive view.
    ///
    /// Every operation on the view is safe, including ones that end the
    /// value's lifetime ([`Occupied::destroy`], [`Occupied::take`]).
    ///
    /// # Safety
    /// The cell must be occupied.
    #[inline(always)]
    pub unsafe fn assume_occupied_mut(&mut self) -> Occupied<'_, T> {
        // SAFETY: caller asserts occupancy.
        unsafe { Occupied::new_unchecked(self) }
    }

    /// Iterates over the held value, as `(&value).into_iter()` would.
    ///
    /// Only available when `&T` is iterable.
    ///
    /// # Safety
    /// The cell must be occupied while the iterator is alive.
    #[inline]
    pub unsafe fn iter<'a>(&'a self) -> <&'a T as IntoIterator>::IntoIter
    where
        &'a T: IntoIterator,
    {
        // SAFETY: caller asserts occupancy.
        unsafe { self.get() }.into_iter()
    }

    /// Iterates mutably over the held value, as `(&mut value).into_iter()` would.
    ///
    /// Only available when `&mut T` is iterable.
    ///
    /// # Safety
    /// The cell must be occupied while the iterator is alive.
    #[inline]
    pub unsafe fn iter_mut<'a>(&'a mut self) -> <&'a mut T as IntoIterator>::IntoIter
    where
        &'a mut T: IntoIterator,
    {
        // SAFETY: caller asserts occupancy.
        unsafe { self.get_mut() }.into_iter()
    }

    /// Returns a raw pointer to the storage.
    ///
    /// Obtaining the pointer is always safe; reading through it requires the
    /// cell to be occupied.
    #[inline(always)]
    pub const fn as_ptr(&self) -> *const T {
        self.as_maybe_uninit().as_ptr()
    }

    /// Returns a raw mutable pointer to the storage.
    ///
    /// Writing a `T` through it starts a lifetime exactly like
    /// [`construct`](Self::construct).
    #[inline(always)]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.as_maybe_uninit_mut().as_mut_ptr()
    }

    /// Exchanges the raw storage of two cells, occupancy included.
    ///
    /// No `T` is read or dropped, so this is safe in every state combination.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self.as_maybe_uninit_mut(), other.as_maybe_uninit_mut());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_mut_writes_through() {
        let mut cell = LifeCell::new(1u64);
        unsafe {
            *cell.get_mut() += 41;
            assert_eq!(*cell.get(), 42);
        }
    }

    #[test]
    fn test_iter_matches_value_iteration() {
        let mut cell = LifeCell::new(vec![3, 1, 2]);
        let seen: Vec<_> = unsafe { cell.iter() }.copied().collect();
        assert_eq!(seen, vec![3, 1, 2]);

        for x in unsafe { cell.iter_mut() } {
            *x *= 10;
        }
        assert_eq!(unsafe { cell.take() }, vec![30, 10, 20]);
    }

    #[test]
    fn test_pointer_addresses_storage() {
        let mut cell = LifeCell::new(5i32);
        let q = cell.as_mut_ptr().cast_const();
        let p = cell.as_ptr();
        assert_eq!(p, q);
        assert_eq!(unsafe { *p }, 5);
    }

    #[test]
    fn test_swap_exchanges_occupancy() {
        let mut occupied = LifeCell::new(String::from("moved"));
        let mut empty = LifeCell::empty();
        occupied.swap(&mut empty);
        // `occupied` is now empty; `empty` holds the string.
        assert_eq!(unsafe { empty.take() }, "moved");
        occupied.construct_from("fresh").destroy();
    }
}
