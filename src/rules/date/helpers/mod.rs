pub mod parse;
pub mod producers;
pub mod render;

// Re-export commonly used functions
pub use parse::*;
pub use producers::*;
