//! Chaining and mapping over the contained value.

use super::Optional;

impl<T> Optional<T> {
    /// Runs `f` on the contained value for its side effect and returns the
    /// container.
    ///
    /// `f` is not called when the container is inactive. Whatever `f` returns
    /// is discarded; use [`Optional::bind`] to chain into a new container.
    ///
    /// ```
    /// use inplace_optional::Optional;
    ///
    /// let grown = Optional::some(vec![1]).and_then(|v| v.push(2));
    /// assert!(grown.contains(&vec![1, 2]));
    /// ```
    #[inline]
    pub fn and_then<R, F>(mut self, f: F) -> Self
    where
        F: FnOnce(&mut T) -> R,
    {
        if let Some(value) = self.as_option_mut() {
            let _ = f(value);
        }
        self
    }

    /// Borrowing form of [`Optional::and_then`].
    #[inline]
    pub fn and_then_ref<R, F>(&self, f: F) -> &Self
    where
        F: FnOnce(&T) -> R,
    {
        if let Some(value) = self.as_option() {
            let _ = f(value);
        }
        self
    }

    /// Consumes the container and maps its value through `f`.
    ///
    /// An inactive container yields an inactive `Optional<U>` without calling `f`.
    #[inline]
    pub fn transform<U, F>(mut self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        match self.take_live() {
            Some(value) => Optional::some(f(value)),
            None => Optional::new(),
        }
    }

    /// Maps a borrow of the value through `f`, leaving `self` untouched.
    #[inline]
    pub fn transform_ref<U, F>(&self, f: F) -> Optional<U>
    where
        F: FnOnce(&T) -> U,
    {
        match self.as_option() {
            Some(value) => Optional::some(f(value)),
            None => Optional::new(),
        }
    }

    /// Consumes the container and chains into the container returned by `f`.
    #[inline]
    pub fn bind<U, F>(mut self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> Optional<U>,
    {
        match self.take_live() {
            Some(value) => f(value),
            None => Optional::new(),
        }
    }
}
