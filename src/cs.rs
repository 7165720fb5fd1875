pub mod dynamic;
pub mod sort;
pub mod string;

// Re-export all modules
pub use dynamic::*;
pub use sort::*;
pub use string::*;
