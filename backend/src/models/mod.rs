pub mod eclipse;

pub use eclipse::*;
