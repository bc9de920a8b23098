//! Demo pages for a freight business, rendered with any theme

pub use trellis_showcase::*;
