//! Passthrough operators for occupancy views.
//!
//! Every impl forwards to the same operation on the held value and is bounded
//! on `T` offering it: a view of a `T` without `Index<I>` is not indexable, a
//! view of a `T` whose `&T` is not iterable cannot be iterated, and so on.
//! Comparison results are returned unchanged, so `partial_cmp` still yields
//! `None` for unordered values.

use core::{
    borrow::{Borrow, BorrowMut},
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    ops::{Deref, DerefMut, Index, IndexMut},
};

use super::{Occupied, OccupiedRef};

/// Read-only passthroughs shared by both views.
macro_rules! forward_read_only {
    ($view:ident) => {
        impl<T> Deref for $view<'_, T> {
            type Target = T;

            #[inline(always)]
            fn deref(&self) -> &T {
                self.value()
            }
        }

        impl<T> AsRef<T> for $view<'_, T> {
            #[inline(always)]
            fn as_ref(&self) -> &T {
                self.value()
            }
        }

        impl<T> Borrow<T> for $view<'_, T> {
            #[inline(always)]
            fn borrow(&self) -> &T {
                self.value()
            }
        }

        impl<T, I> Index<I> for $view<'_, T>
        where
            T: Index<I>,
        {
            type Output = T::Output;

            #[inline(always)]
            fn index(&self, index: I) -> &T::Output {
                self.value().index(index)
            }
        }

        impl<T: Eq> Eq for $view<'_, T> {}

        impl<T: Ord> Ord for $view<'_, T> {
            #[inline]
            fn cmp(&self, other: &Self) -> Ordering {
                Ord::cmp(self.value(), other.value())
            }
        }

        impl<T: Hash> Hash for $view<'_, T> {
            #[inline]
            fn hash<H: Hasher>(&self, state: &mut H) {
                self.value().hash(state);
            }
        }

        impl<T: fmt::Debug> fmt::Debug for $view<'_, T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Debug::fmt(self.value(), f)
            }
        }

        impl<T: fmt::Display> fmt::Display for $view<'_, T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(self.value(), f)
            }
        }
    };
}

forward_read_only!(Occupied);
forward_read_only!(OccupiedRef);

/// Comparisons between any two views, forwarded to the held values.
macro_rules! forward_compare {
    ($lhs:ident, $rhs:ident) => {
        impl<'b, T, U> PartialEq<$rhs<'b, U>> for $lhs<'_, T>
        where
            T: PartialEq<U>,
        {
            #[inline]
            fn eq(&self, other: &$rhs<'b, U>) -> bool {
                PartialEq::eq(self.value(), other.value())
            }

            #[allow(clippy::partialeq_ne_impl)]
            #[inline]
            fn ne(&self, other: &$rhs<'b, U>) -> bool {
                PartialEq::ne(self.value(), other.value())
            }
        }

        impl<'b, T, U> PartialOrd<$rhs<'b, U>> for $lhs<'_, T>
        where
            T: PartialOrd<U>,
        {
            #[inline]
            fn partial_cmp(&self, other: &$rhs<'b, U>) -> Option<Ordering> {
                PartialOrd::partial_cmp(self.value(), other.value())
            }

            #[inline]
            fn lt(&self, other: &$rhs<'b, U>) -> bool {
                PartialOrd::lt(self.value(), other.value())
            }

            #[inline]
            fn le(&self, other: &$rhs<'b, U>) -> bool {
                PartialOrd::le(self.value(), other.value())
            }

            #[inline]
            fn gt(&self, other: &$rhs<'b, U>) -> bool {
                PartialOrd::gt(self.value(), other.value())
            }

            #[inline]
            fn ge(&self, other: &$rhs<'b, U>) -> bool {
                PartialOrd::ge(self.value(), other.value())
            }
        }
    };
}

forward_compare!(Occupied, Occupied);
forward_compare!(Occupied, OccupiedRef);
forward_compare!(OccupiedRef, Occupied);
forward_compare!(OccupiedRef, OccupiedRef);

impl<T> DerefMut for Occupied<'_, T> {
    #[inline(always)]
    fn deref_mut(&mut self) -> &mut T {
        self.value_mut()
    }
}

impl<T> AsMut<T> for Occupied<'_, T> {
    #[inline(always)]
    fn as_mut(&mut self) -> &mut T {
        self.value_mut()
    }
}

impl<T> BorrowMut<T> for Occupied<'_, T> {
    #[inline(always)]
    fn borrow_mut(&mut self) -> &mut T {
        self.value_mut()
    }
}

impl<T, I> IndexMut<I> for Occupied<'_, T>
where
    T: IndexMut<I>,
{
    #[inline(always)]
    fn index_mut(&mut self, index: I) -> &mut T::Output {
        self.value_mut().index_mut(index)
    }
}

impl<'a, T> IntoIterator for OccupiedRef<'a, T>
where
    &'a T: IntoIterator,
{
    type Item = <&'a T as IntoIterator>::Item;
    type IntoIter = <&'a T as IntoIterator>::IntoIter;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.into_ref().into_iter()
    }
}

impl<'a, 'b, T> IntoIterator for &'b OccupiedRef<'a, T>
where
    &'b T: IntoIterator,
{
    type Item = <&'b T as IntoIterator>::Item;
    type IntoIter = <&'b T as IntoIterator>::IntoIter;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        let value: &'b T = self.value();
        value.into_iter()
    }
}

impl<'a, T> IntoIterator for Occupied<'a, T>
where
    &'a mut T: IntoIterator,
{
    type Item = <&'a mut T as IntoIterator>::Item;
    type IntoIter = <&'a mut T as IntoIterator>::IntoIter;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.into_mut().into_iter()
    }
}

impl<'b, T> IntoIterator for &'b Occupied<'_, T>
where
    &'b T: IntoIterator,
{
    type Item = <&'b T as IntoIterator>::Item;
    type IntoIter = <&'b T as IntoIterator>::IntoIter;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.value().into_iter()
    }
}

impl<'b, T> IntoIterator for &'b mut Occupied<'_, T>
where
    &'b mut T: IntoIterator,
{
    type Item = <&'b mut T as IntoIterator>::Item;
    type IntoIter = <&'b mut T as IntoIterator>::IntoIter;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.value_mut().into_iter()
    }
}
