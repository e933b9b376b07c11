//! The empty marker.

/// Marker requesting an inactive `Optional`.
///
/// ```
/// use inplace_optional::{Optional, NULLOPT};
///
/// let empty: Optional<String> = NULLOPT.into();
/// assert!(!empty.has_value());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Nullopt;

/// The `Nullopt` singleton.
pub const NULLOPT: Nullopt = Nullopt;
