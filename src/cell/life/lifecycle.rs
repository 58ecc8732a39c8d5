//! Starting and ending the lifetime of the held value.

use crate::cell::raw::access::maybe_uninit as mu;
use crate::trace::lifecycle;
use crate::Occupied;

use super::LifeCell;

impl<T> LifeCell<T> {
    /// Starts the lifetime of `value` in this cell.
    ///
    /// The cell must be empty. Constructing over a live value does not run its
    /// destructor; the old value leaks.
    #[inline]
    pub fn construct(&mut self, value: T) -> Occupied<'_, T> {
        lifecycle!(T, "construct");
        mu::write(self.as_maybe_uninit_mut(), value);
        // SAFETY: written on the previous line.
        unsafe { Occupied::new_unchecked(self) }
    }

    /// Starts the lifetime of the value returned by `f`.
    ///
    /// `f` runs before the storage is touched: if it panics the cell is left
    /// as it was.
    #[inline]
    pub fn construct_with<F>(&mut self, f: F) -> Occupied<'_, T>
    where
        F: FnOnce() -> T,
    {
        self.construct(f())
    }

    /// Starts the lifetime of `T::from(args)`.
    #[inline]
    pub fn construct_from<A>(&mut self, args: A) -> Occupied<'_, T>
    where
        T: From<A>,
    {
        self.construct(T::from(args))
    }

    /// Starts the lifetime of `T::from_iter(iter)`.
    #[inline]
    pub fn construct_from_iter<I>(&mut self, iter: I) -> Occupied<'_, T>
    where
        I: IntoIterator,
        T: FromIterator<I::Item>,
    {
        self.construct(T::from_iter(iter))
    }

    /// Starts the lifetime of the value produced by a fallible constructor.
    ///
    /// # Errors
    /// Returns the constructor's error unchanged; the cell is untouched.
    #[inline]
    pub fn try_construct_with<E, F>(&mut self, f: F) -> Result<Occupied<'_, T>, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        let value = f()?;
        Ok(self.construct(value))
    }

    /// Starts the lifetime of `T::try_from(args)`.
    ///
    /// # Errors
    /// Returns the conversion error; the cell is untouched.
    #[inline]
    pub fn try_construct_from<A>(&mut self, args: A) -> Result<Occupied<'_, T>, T::Error>
    where
        T: TryFrom<A>,
    {
        self.try_construct_with(|| T::try_from(args))
    }

    /// Ends the lifetime of the held value, running its destructor.
    ///
    /// The cell is empty afterwards, even if the destructor panics.
    ///
    /// # Safety
    /// The cell must be occupied.
    #[inline]
    pub unsafe fn destroy(&mut self) {
        lifecycle!(T, "destroy");
        // SAFETY: caller asserts occupancy.
        unsafe { mu::drop_in_place(self.as_maybe_uninit_mut()) }
    }

    /// Moves the held value out, leaving the cell empty without running the
    /// destructor.
    ///
    /// # Safety
    /// The cell must be occupied.
    #[inline]
    pub unsafe fn take(&mut self) -> T {
        lifecycle!(T, "take");
        // SAFETY: caller asserts occupancy; the cell is empty from here on.
        unsafe { mu::read(self.as_maybe_uninit()) }
    }

    /// Destroys the held value and constructs `value` in its place.
    ///
    /// # Safety
    /// The cell must be occupied.
    #[inline]
    pub unsafe fn replace(&mut self, value: T) -> Occupied<'_, T> {
        // SAFETY: caller asserts occupancy.
        unsafe { self.destroy() };
        self.construct(value)
    }

    /// Destroys the held value, then constructs the value returned by `f`.
    ///
    /// The old value is gone before `f` runs. If `f` panics the cell is left
    /// empty and must be treated as such.
    ///
    /// # Safety
    /// The cell must be occupied.
    #[inline]
    pub unsafe fn replace_with<F>(&mut self, f: F) -> Occupied<'_, T>
    where
        F: FnOnce() -> T,
    {
        // SAFETY: caller asserts occupancy.
        unsafe { self.destroy() };
        self.construct_with(f)
    }

    /// Destroys the held value and constructs `T::from(args)` in its place.
    ///
    /// # Safety
    /// The cell must be occupied.
    #[inline]
    pub unsafe fn replace_from<A>(&mut self, args: A) -> Occupied<'_, T>
    where
        T: From<A>,
    {
        // SAFETY: caller asserts occupancy.
        unsafe { self.replace_with(|| T::from(args)) }
    }

    /// Destroys the held value and constructs `T::from_iter(iter)` in its place.
    ///
    /// # Safety
    /// The cell must be occupied.
    #[inline]
    pub unsafe fn replace_from_iter<I>(&mut self, iter: I) -> Occupied<'_, T>
    where
        I: IntoIterator,
        T: FromIterator<I::Item>,
    {
        // SAFETY: caller asserts occupancy.
        unsafe { self.replace_with(|| T::from_iter(iter)) }
    }

    /// Destroys the held value, then runs a fallible constructor.
    ///
    /// # Errors
    /// Returns the constructor's error unchanged; the cell is left empty.
    ///
    /// # Safety
    /// The cell must be occupied.
    #[inline]
    pub unsafe fn try_replace_with<E, F>(&mut self, f: F) -> Result<Occupied<'_, T>, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        // SAFETY: caller asserts occupancy.
        unsafe { self.destroy() };
        self.try_construct_with(f)
    }
}
