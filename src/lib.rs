//! # `inplace_optional` - Allocation-Free Optional Container
//!
//! [`Optional<T>`] holds zero or one `T` in an inline, `T`-aligned slot and
//! tracks whether that slot is live with an explicit activation flag. It never
//! allocates, and it gives callers direct control over when the payload is
//! constructed and destroyed.
//!
//! ## Core invariant
//!
//! The slot holds a live `T` **if and only if** [`Optional::has_value`] is `true`.
//!
//! - The flag is raised only after a value has been fully written. A panicking
//!   or failing constructor therefore leaves the container inactive.
//! - The flag is lowered before the value is moved out or dropped. Every value
//!   is destroyed exactly once, including when its destructor unwinds.
//! - Assignment takes the source by a separate borrow, so a container can never
//!   be assigned from itself.
//!
//! ## Access
//!
//! | operation | inactive container |
//! |---|---|
//! | [`Optional::value`] / [`Optional::value_mut`] / [`Optional::release`] / [`Optional::into_value`] | `Err(InactiveAccess)` |
//! | `*opt` (`Deref` / `DerefMut`) | panics with the `InactiveAccess` message |
//! | [`Optional::value_or`] / [`Optional::into_value_or`] | returns the fallback |
//! | [`Optional::transform`] / [`Optional::and_then`] | skips the closure |
//!
//! ## Example
//!
//! ```rust
//! use inplace_optional::{InactiveAccess, Optional, NULLOPT};
//!
//! let mut answer = Optional::some(42);
//! assert!(answer.has_value());
//! assert_eq!(answer.value(), Ok(&42));
//! assert_eq!(answer.value_or(7), 42);
//!
//! answer.emplace(5);
//! assert_eq!(*answer, 5);
//!
//! assert_eq!(answer.release(), Ok(5));
//! assert_eq!(answer.release(), Err(InactiveAccess));
//!
//! let empty: Optional<i32> = NULLOPT.into();
//! assert_eq!(empty.value_or(7), 7);
//! ```
//!
//! ## Features
//!
//! - `tracing`: emit `TRACE` events for construct/emplace/clear/release and a
//!   `DEBUG` event for inactive access, tagged with the payload type name. Every
//!   `construct` is matched by exactly one `clear` or `release`.

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

#[macro_use]
mod trace;

mod error;
mod nullopt;
pub mod optional;

pub use error::InactiveAccess;
pub use nullopt::{Nullopt, NULLOPT};
pub use optional::Optional;

// Compile-time assertions for the in-place layout.
const _: () = {
    use core::mem;

    // The marker carries no data.
    assert!(mem::size_of::<Nullopt>() == 0);

    // Payload is stored inline: at most one extra alignment unit for the flag.
    assert!(mem::size_of::<Optional<u64>>() <= mem::size_of::<u64>() + mem::align_of::<u64>());
    assert!(mem::size_of::<Optional<u8>>() == 2);

    // Alignment follows the payload.
    assert!(mem::align_of::<Optional<u64>>() == mem::align_of::<u64>());
    assert!(mem::align_of::<Optional<u16>>() == mem::align_of::<u16>());
};
