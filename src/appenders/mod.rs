//! Built-in appender implementations

pub mod console;
pub mod file;

pub use console::ConsoleAppender;
pub use file::FileAppender;
