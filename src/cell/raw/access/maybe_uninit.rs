//! Unsafe, centralized operations on `MaybeUninit<T>` slots.
//!
//! `LifeCell<T>` stores its value as a bare `MaybeUninit<T>`. These helpers are
//! the single place to audit:
//! - writes (`MaybeUninit::write`)
//! - reads (`assume_init_read`)
//! - drops (`assume_init_drop`)
//! - conversion to references (`assume_init_ref` / `assume_init_mut`)
//!
//! ## Core invariant
//! No helper here knows whether the slot is initialized. That fact is owned by
//! the caller of the public `unsafe` cell API, or witnessed by an `Occupied`
//! view whose existence proves it.

use core::mem::MaybeUninit;

/// Starts the lifetime of `value` in `slot`, returning a reference to it.
///
/// If `slot` already held a live value, that value is overwritten without
/// running its destructor (it leaks). This is never memory-unsafe.
#[inline(always)]
pub(crate) fn write<T>(slot: &mut MaybeUninit<T>, value: T) -> &mut T {
    slot.write(value)
}

/// Interprets an initialized slot as `&T`.
///
/// # Safety
/// - `slot` must be initialized.
#[inline(always)]
pub(crate) const unsafe fn assume_init_ref<T>(slot: &MaybeUninit<T>) -> &T {
    // SAFETY: caller asserts `slot` is initialized.
    unsafe { slot.assume_init_ref() }
}

/// Interprets an initialized slot as `&mut T`.
///
/// # Safety
/// - `slot` must be initialized.
#[inline(always)]
pub(crate) unsafe fn assume_init_mut<T>(slot: &mut MaybeUninit<T>) -> &mut T {
    // SAFETY: caller asserts `slot` is initialized; exclusivity comes from `&mut`.
    unsafe { slot.assume_init_mut() }
}

/// Bitwise-moves an initialized value out of a slot.
///
/// # Safety
/// - `slot` must be initialized.
/// - The slot must be treated as uninitialized afterwards; reading it again or
///   dropping it in place would duplicate the value.
#[inline(always)]
pub(crate) unsafe fn read<T>(slot: &MaybeUninit<T>) -> T {
    // SAFETY: caller asserts initialization and takes over ownership of the value.
    unsafe { slot.assume_init_read() }
}

/// Drops an initialized value in place.
///
/// # Safety
/// - `slot` must be initialized.
/// - Must not be called more than once for the same logical value.
#[inline(always)]
pub(crate) unsafe fn drop_in_place<T>(slot: &mut MaybeUninit<T>) {
    // SAFETY: caller asserts initialization and drop uniqueness.
    unsafe { slot.assume_init_drop() }
}
