//! Library side of the trailer dashboard CLI.

pub mod logging;
pub mod pipeline;
pub mod settings;
pub mod summary;
