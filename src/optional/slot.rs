//! Unsafe, centralized operations on the `MaybeUninit<T>` payload slot.
//!
//! `Optional<T>` stores its payload inline as `MaybeUninit<T>`. Every raw
//! read, write, drop and reference conversion on that slot goes through the
//! helpers here so there is a single place to audit:
//! - construction (`write`)
//! - move-out (`read`)
//! - destruction (`drop_in_place`)
//! - conversion to references (`assume_init_ref` / `assume_init_mut`)
//!
//! ## Core invariant
//! The slot holds a live `T` *exactly when* the owning container's `active`
//! flag is set. Callers flip the flag on only after a `write` has completed,
//! and flip it off before the value is read out or dropped.

use core::{mem::MaybeUninit, ptr};

/// Interprets an initialized slot as `&T`.
///
/// # Safety
/// - `slot` must be initialized.
#[inline(always)]
pub(super) unsafe fn assume_init_ref<T>(slot: &MaybeUninit<T>) -> &T {
    // SAFETY: caller asserts `slot` is initialized.
    unsafe { slot.assume_init_ref() }
}

/// Interprets an initialized slot as `&mut T`.
///
/// # Safety
/// - `slot` must be initialized.
#[inline(always)]
pub(super) unsafe fn assume_init_mut<T>(slot: &mut MaybeUninit<T>) -> &mut T {
    // SAFETY: caller asserts `slot` is initialized; `&mut` proves exclusivity.
    unsafe { slot.assume_init_mut() }
}

/// Constructs `value` in the slot and returns a reference to it.
///
/// Any bytes previously in the slot are overwritten without being dropped, so
/// the slot must not hold a live value.
#[inline(always)]
pub(super) fn write<T>(slot: &mut MaybeUninit<T>, value: T) -> &mut T {
    slot.write(value)
}

/// Bitwise-moves the initialized value out of the slot.
///
/// # Safety
/// - `slot` must be initialized.
/// - The slot must be treated as uninitialized afterwards; reading or dropping
///   it again would duplicate ownership.
#[inline(always)]
pub(super) unsafe fn read<T>(slot: &MaybeUninit<T>) -> T {
    // SAFETY: caller asserts initialization and gives up the slot's ownership.
    unsafe { ptr::read(slot.as_ptr()) }
}

/// Drops the initialized value in place.
///
/// # Safety
/// - `slot` must be initialized.
/// - Must not be called more than once for the same logical value.
#[inline(always)]
pub(super) unsafe fn drop_in_place<T>(slot: &mut MaybeUninit<T>) {
    // SAFETY: caller asserts initialization and drop uniqueness.
    unsafe { ptr::drop_in_place(slot.as_mut_ptr()) }
}
