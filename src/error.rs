/// The error returned when a value is requested from an inactive `Optional`.
///
/// This is the only failure the container itself reports. Errors or panics
/// raised by the payload's own constructors pass through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InactiveAccess;

impl core::fmt::Display for InactiveAccess {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("bad optional access")
    }
}

impl std::error::Error for InactiveAccess {}
