/* 📖 # hello_base

Foundation shared by the hello crates: the error type with context and span
traces, and the tracing bootstrap used by the binary.
*/

pub mod error;
pub mod tracing;

pub use ::tracing::{debug, error, info, instrument, trace, warn};
pub use error::{ErrorKind, HelloError, HelloResult, ResultExt};
pub use self::tracing::init_tracing;
