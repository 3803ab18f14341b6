//! Configuration types
//!
//! Bus pin assignment is fixed per hardware family and chosen at build time;
//! the remaining settings are plain `const`-constructible values.

pub mod pins;
pub mod types;

pub use pins::*;
pub use types::*;
