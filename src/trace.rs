//! Lifecycle instrumentation.
//!
//! With the `tracing` feature enabled, `lifecycle!` emits a `tracing` event
//! tagged with the payload type name. Without it, the macro expands to nothing.

#[cfg(feature = "tracing")]
macro_rules! lifecycle {
    ($level:ident, $ty:ty, $event:literal) => {
        ::tracing::$level!(payload = ::core::any::type_name::<$ty>(), $event)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! lifecycle {
    ($level:ident, $ty:ty, $event:literal) => {};
}
