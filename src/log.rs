//! `debug!` and `trace!` for panelmark's own diagnostics: label placement,
//! figure batches and their rollback at debug level, hold-flag restoration at
//! trace level.
//!
//! Built with the `tracing` feature these re-export the `tracing` macros.
//! Otherwise they swallow their arguments, and the library has no logging
//! dependency at all.

#[cfg(feature = "tracing")]
pub use tracing::{debug, trace};

#[cfg(not(feature = "tracing"))]
#[macro_export]
#[doc(hidden)]
macro_rules! debug {
    ($($tokens:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
#[doc(hidden)]
macro_rules! trace {
    ($($tokens:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub use crate::{debug, trace};
