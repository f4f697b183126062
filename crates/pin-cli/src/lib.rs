//! CLI library components for the PIN code generator.

pub mod logging;
pub mod pipeline;
pub mod summary;
