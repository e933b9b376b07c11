//! Equality between containers and against bare values.

use super::Optional;

/// Equal iff both are inactive, or both are active with equal values.
impl<T, U> PartialEq<Optional<U>> for Optional<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Optional<U>) -> bool {
        match (self.as_option(), other.as_option()) {
            (Some(lhs), Some(rhs)) => lhs == rhs,
            (None, None) => true,
            _ => false,
        }
    }
}

impl<T: Eq> Eq for Optional<T> {}

impl<T> Optional<T> {
    /// Returns `true` if the container is active and its value equals `value`.
    ///
    /// The comparison is never evaluated for an inactive container.
    #[inline]
    pub fn contains<U>(&self, value: &U) -> bool
    where
        T: PartialEq<U>,
    {
        self.as_option().is_some_and(|held| held == value)
    }
}
