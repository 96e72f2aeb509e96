//! Thread-safe, non-blocking logging library.
//!
//! Log calls push a formatted record onto a channel consumed by a
//! dedicated writer thread, so callers never wait on file I/O.

pub mod error;
mod level;
mod logger;
mod record;
mod writer;

pub use error::{LoggingError, Result};
pub use level::LogLevel;
pub use logger::Logger;
