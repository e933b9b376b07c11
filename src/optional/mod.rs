//! `Optional<T>` — zero-or-one `T` stored inline, with an explicit activation flag.
//!
//! All `MaybeUninit` unsafe operations are delegated to `slot`. This module
//! owns the `active` flag and is the only place that flips it.

mod combinators;
mod convert;
mod cmp;
mod slot;


use core::mem::MaybeUninit;
use core::ops::{Deref, DerefMut};

use crate::InactiveAccess;

/// A value-or-nothing container that stores its payload in place.
///
/// The payload lives in an inline, `T`-aligned slot; no heap allocation is
/// ever made. The slot holds a live `T` if and only if [`has_value`] is `true`.
///
/// Borrowing reads ([`value`], [`value_mut`]) and consuming reads
/// ([`into_value`], [`release`]) are separate operations; pick the one that
/// matches whether the container is still needed afterwards.
///
/// [`has_value`]: Optional::has_value
/// [`value`]: Optional::value
/// [`value_mut`]: Optional::value_mut
/// [`into_value`]: Optional::into_value
/// [`release`]: Optional::release
#[must_use = "dropping an `Optional` immediately destroys its value"]
pub struct Optional<T> {
    // Layout: payload first; keep `active` in tail padding.
    value: MaybeUninit<T>,
    active: bool,
}

impl<T> Optional<T> {
    /// Creates an inactive container.
    #[inline(always)]
    pub const fn new() -> Self {
        Self {
            value: MaybeUninit::uninit(),
            active: false,
        }
    }

    /// Creates an inactive container. Alias of [`Optional::new`].
    #[inline(always)]
    pub const fn none() -> Self {
        Self::new()
    }

    /// Creates an active container holding `value`.
    #[inline]
    pub fn some(value: T) -> Self {
        let mut this = Self::new();
        this.construct(value);
        this
    }

    /// Creates an active container from the value produced by `init`.
    ///
    /// If `init` panics, no container is produced.
    #[inline]
    pub fn from_fn<F>(init: F) -> Self
    where
        F: FnOnce() -> T,
    {
        let mut this = Self::new();
        this.construct(init());
        this
    }

    /// Creates an active container from a fallible constructor.
    ///
    /// # Errors
    /// Returns whatever error `init` returns; no container is produced.
    #[inline]
    pub fn try_from_fn<E, F>(init: F) -> Result<Self, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        let mut this = Self::new();
        this.construct(init()?);
        Ok(this)
    }

    /// Returns `true` if the container holds a live value.
    #[inline(always)]
    pub const fn has_value(&self) -> bool {
        self.active
    }

    /// Borrows the contained value.
    ///
    /// # Errors
    /// Returns [`InactiveAccess`] if the container is inactive.
    #[inline]
    pub fn value(&self) -> Result<&T, InactiveAccess> {
        self.ensure_active()?;
        // SAFETY: `active` is set.
        Ok(unsafe { slot::assume_init_ref(&self.value) })
    }

    /// Mutably borrows the contained value.
    ///
    /// # Errors
    /// Returns [`InactiveAccess`] if the container is inactive.
    #[inline]
    pub fn value_mut(&mut self) -> Result<&mut T, InactiveAccess> {
        self.ensure_active()?;
        // SAFETY: `active` is set.
        Ok(unsafe { slot::assume_init_mut(&mut self.value) })
    }

    /// Consumes the container and returns its value.
    ///
    /// # Errors
    /// Returns [`InactiveAccess`] if the container is inactive.
    #[inline]
    pub fn into_value(mut self) -> Result<T, InactiveAccess> {
        self.release()
    }

    /// Returns a clone of the contained value, or `fallback` if inactive.
    #[inline]
    pub fn value_or(&self, fallback: T) -> T
    where
        T: Clone,
    {
        match self.as_option() {
            Some(value) => value.clone(),
            None => fallback,
        }
    }

    /// Returns a clone of the contained value, or the result of `fallback` if inactive.
    ///
    /// `fallback` is only called when the container is inactive.
    #[inline]
    pub fn value_or_else<F>(&self, fallback: F) -> T
    where
        T: Clone,
        F: FnOnce() -> T,
    {
        match self.as_option() {
            Some(value) => value.clone(),
            None => fallback(),
        }
    }

    /// Consumes the container, returning its value or `fallback` if inactive.
    #[inline]
    pub fn into_value_or(mut self, fallback: T) -> T {
        self.take_live().unwrap_or(fallback)
    }

    /// Consumes the container, returning its value or the result of `fallback`.
    #[inline]
    pub fn into_value_or_else<F>(mut self, fallback: F) -> T
    where
        F: FnOnce() -> T,
    {
        self.take_live().unwrap_or_else(fallback)
    }

    /// Destroys the current value (if any) and stores `value`.
    #[inline]
    pub fn emplace(&mut self, value: T) -> &mut T {
        lifecycle!(trace, T, "emplace");
        self.clear();
        self.construct(value)
    }

    /// Destroys the current value (if any) and stores the value produced by `init`.
    ///
    /// The old value is destroyed before `init` runs. If `init` panics, the
    /// container is left inactive.
    #[inline]
    pub fn emplace_with<F>(&mut self, init: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        lifecycle!(trace, T, "emplace");
        self.clear();
        let value = init();
        self.construct(value)
    }

    /// Destroys the current value (if any) and stores the value produced by a
    /// fallible constructor.
    ///
    /// # Errors
    /// Returns whatever error `init` returns. The old value has already been
    /// destroyed at that point, so the container is left inactive.
    #[inline]
    pub fn try_emplace_with<E, F>(&mut self, init: F) -> Result<&mut T, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        lifecycle!(trace, T, "emplace");
        self.clear();
        let value = init()?;
        Ok(self.construct(value))
    }

    /// Returns the contained value, constructing it with `init` first if inactive.
    #[inline]
    pub fn get_or_emplace_with<F>(&mut self, init: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        if !self.active {
            let value = init();
            self.construct(value);
        }
        // SAFETY: either already active or constructed above.
        unsafe { slot::assume_init_mut(&mut self.value) }
    }

    /// Destroys the contained value, if any. Idempotent.
    #[inline]
    pub fn clear(&mut self) {
        if self.active {
            lifecycle!(trace, T, "clear");
            // Flag goes first so an unwinding destructor cannot run twice.
            self.active = false;
            // SAFETY: was active; the flag no longer claims the slot.
            unsafe { slot::drop_in_place(&mut self.value) }
        }
    }

    /// Moves the value out, leaving the container inactive.
    ///
    /// # Errors
    /// Returns [`InactiveAccess`] if the container is inactive.
    #[inline]
    pub fn release(&mut self) -> Result<T, InactiveAccess> {
        self.ensure_active()?;
        lifecycle!(trace, T, "release");
        self.active = false;
        // SAFETY: was active; the flag no longer claims the slot.
        Ok(unsafe { slot::read(&self.value) })
    }

    /// Moves the contents into a new container, leaving `self` inactive.
    #[inline]
    pub fn take(&mut self) -> Self {
        self.take_live().into()
    }

    /// Stores `value`, returning the previous contents.
    #[inline]
    pub fn replace(&mut self, value: T) -> Self {
        let previous = self.take();
        self.construct(value);
        previous
    }

    /// Replaces the contents with a clone of `source`'s.
    ///
    /// `self` is cleared first. If cloning panics, `self` is left inactive.
    #[inline]
    pub fn assign(&mut self, source: &Self)
    where
        T: Clone,
    {
        self.clear();
        if let Some(value) = source.as_option() {
            let value = value.clone();
            self.construct(value);
        }
    }

    /// Moves `source`'s contents into `self`, leaving `source` inactive.
    ///
    /// `self` is cleared first.
    #[inline]
    pub fn assign_from(&mut self, source: &mut Self) {
        self.clear();
        if let Some(value) = source.take_live() {
            self.construct(value);
        }
    }

    /// Writes `value` into the empty slot and marks the container active.
    #[inline(always)]
    fn construct(&mut self, value: T) -> &mut T {
        debug_assert!(!self.active, "construct over a live value");
        lifecycle!(trace, T, "construct");
        let live = slot::write(&mut self.value, value);
        self.active = true;
        live
    }

    /// Moves the value out without reporting inactivity.
    #[inline(always)]
    fn take_live(&mut self) -> Option<T> {
        if !self.active {
            return None;
        }
        lifecycle!(trace, T, "release");
        self.active = false;
        // SAFETY: was active; the flag no longer claims the slot.
        Some(unsafe { slot::read(&self.value) })
    }

    #[inline(always)]
    fn ensure_active(&self) -> Result<(), InactiveAccess> {
        if self.active {
            Ok(())
        } else {
            lifecycle!(debug, T, "inactive access");
            Err(InactiveAccess)
        }
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Optional<T> {
    fn clone(&self) -> Self {
        match self.as_option() {
            Some(value) => Self::some(value.clone()),
            None => Self::new(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.assign(source);
    }
}

impl<T> Deref for Optional<T> {
    type Target = T;

    /// # Panics
    /// Panics with [`InactiveAccess`]'s message if the container is inactive.
    #[track_caller]
    fn deref(&self) -> &T {
        match self.value() {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> DerefMut for Optional<T> {
    /// # Panics
    /// Panics with [`InactiveAccess`]'s message if the container is inactive.
    #[track_caller]
    fn deref_mut(&mut self) -> &mut T {
        match self.value_mut() {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> Drop for Optional<T> {
    fn drop(&mut self) {
        self.clear();
    }
}
