//! Library components for the datasweep CLI.

pub mod logging;
pub mod pipeline;
