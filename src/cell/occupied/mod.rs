//! Occupancy views: borrows of a `LifeCell` that are known to hold a value.
//!
//! The only `unsafe` step is *obtaining* a view
//! ([`LifeCell::assume_occupied`], [`LifeCell::assume_occupied_mut`]), or it is
//! handed out by a construct operation that just started the lifetime. Once a
//! view exists every operation on it is safe, and the passthrough operators in
//! this module make it usable wherever a `&T` / `&mut T` is expected.

mod ops;

use crate::cell::raw::access::maybe_uninit as mu;
use crate::trace::lifecycle;
use crate::LifeCell;

/// Exclusive borrow of an occupied [`LifeCell`].
pub struct Occupied<'a, T> {
    cell: &'a mut LifeCell<T>,
}

/// Shared borrow of an occupied [`LifeCell`].
pub struct OccupiedRef<'a, T> {
    cell: &'a LifeCell<T>,
}

impl<'a, T> Occupied<'a, T> {
    /// # Safety
    /// `cell` must be occupied.
    #[inline(always)]
    pub(crate) unsafe fn new_unchecked(cell: &'a mut LifeCell<T>) -> Self {
        Self { cell }
    }

    /// Returns a shared reference to the value.
    #[inline(always)]
    pub fn value(&self) -> &T {
        // SAFETY: an `Occupied` only exists for an occupied cell.
        unsafe { mu::assume_init_ref(self.cell.as_maybe_uninit()) }
    }

    /// Returns an exclusive reference to the value.
    #[inline(always)]
    pub fn value_mut(&mut self) -> &mut T {
        // SAFETY: an `Occupied` only exists for an occupied cell.
        unsafe { mu::assume_init_mut(self.cell.as_maybe_uninit_mut()) }
    }

    /// Converts the view into a reference with the view's full lifetime.
    #[inline(always)]
    pub fn into_mut(self) -> &'a mut T {
        // SAFETY: an `Occupied` only exists for an occupied cell.
        unsafe { mu::assume_init_mut(self.cell.as_maybe_uninit_mut()) }
    }

    /// Reborrows as a read-only view.
    #[inline(always)]
    pub fn shared(&self) -> OccupiedRef<'_, T> {
        OccupiedRef { cell: &*self.cell }
    }

    /// Returns the underlying cell, giving up the occupancy proof.
    #[inline(always)]
    pub fn into_cell(self) -> &'a mut LifeCell<T> {
        self.cell
    }

    /// Assigns `value` to the held object, dropping the previous value.
    ///
    /// Behaves exactly like `*reference = value`: if the old value's
    /// destructor panics, `value` is still stored.
    #[inline]
    pub fn assign(&mut self, value: T) -> &mut T {
        lifecycle!(T, "assign");
        let slot = self.value_mut();
        *slot = value;
        slot
    }

    /// Assigns `T::from(args)` to the held object.
    #[inline]
    pub fn assign_from<A>(&mut self, args: A) -> &mut T
    where
        T: From<A>,
    {
        self.assign(T::from(args))
    }

    /// Replaces the held value with `value`, returning the old one.
    #[inline]
    pub fn replace_value(&mut self, value: T) -> T {
        lifecycle!(T, "replace");
        core::mem::replace(self.value_mut(), value)
    }

    /// Builds a new value with `f` and assigns it over the held one.
    ///
    /// `f` runs while the old value is still alive; if it panics the cell
    /// keeps the old value.
    #[inline]
    pub fn replace_with<F>(&mut self, f: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        let value = f();
        self.assign(value)
    }

    /// Ends the value's lifetime, running its destructor.
    #[inline]
    pub fn destroy(self) {
        // SAFETY: an `Occupied` only exists for an occupied cell, and it is
        // consumed here.
        unsafe { self.cell.destroy() }
    }

    /// Moves the value out, leaving the cell empty.
    #[inline]
    pub fn take(self) -> T {
        // SAFETY: an `Occupied` only exists for an occupied cell, and it is
        // consumed here.
        unsafe { self.cell.take() }
    }
}

impl<'a, T> OccupiedRef<'a, T> {
    /// # Safety
    /// `cell` must be occupied for `'a`.
    #[inline(always)]
    pub(crate) unsafe fn new_unchecked(cell: &'a LifeCell<T>) -> Self {
        Self { cell }
    }

    /// Returns a shared reference to the value.
    #[inline(always)]
    pub fn value(&self) -> &'a T {
        self.into_ref()
    }

    /// Converts the view into a reference with the view's full lifetime.
    #[inline(always)]
    pub fn into_ref(self) -> &'a T {
        // SAFETY: an `OccupiedRef` only exists for a cell occupied during `'a`.
        unsafe { mu::assume_init_ref(self.cell.as_maybe_uninit()) }
    }

    /// Returns the underlying cell.
    #[inline(always)]
    pub fn cell(&self) -> &'a LifeCell<T> {
        self.cell
    }
}

impl<T> Clone for OccupiedRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for OccupiedRef<'_, T> {}
