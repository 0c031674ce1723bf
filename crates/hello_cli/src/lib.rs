//! Greeting formatter and the entry procedure behind the `hello` binary.

pub mod greeting;
pub mod run;

pub use greeting::{DEFAULT_NAME, greet};
pub use run::run;
