//! Conversions to and from `core::option::Option` and the empty marker.

use super::{slot, Optional};
use crate::Nullopt;

impl<T> Optional<T> {
    /// Borrows the value as a standard `Option`.
    #[inline]
    pub fn as_option(&self) -> Option<&T> {
        if self.active {
            // SAFETY: `active` is set.
            Some(unsafe { slot::assume_init_ref(&self.value) })
        } else {
            None
        }
    }

    /// Mutably borrows the value as a standard `Option`.
    #[inline]
    pub fn as_option_mut(&mut self) -> Option<&mut T> {
        if self.active {
            // SAFETY: `active` is set.
            Some(unsafe { slot::assume_init_mut(&mut self.value) })
        } else {
            None
        }
    }

    /// Converts into a standard `Option`, moving the value out.
    #[inline]
    pub fn into_option(mut self) -> Option<T> {
        self.take_live()
    }
}

impl<T> From<Nullopt> for Optional<T> {
    #[inline]
    fn from(_: Nullopt) -> Self {
        Self::new()
    }
}

impl<T> From<Option<T>> for Optional<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::some(value),
            None => Self::new(),
        }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    #[inline]
    fn from(value: Optional<T>) -> Self {
        value.into_option()
    }
}
