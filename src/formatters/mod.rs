//! Concrete formatter implementations

pub mod category;
pub mod default;

pub use category::CategoryFormatter;
pub use default::DefaultFormatter;
