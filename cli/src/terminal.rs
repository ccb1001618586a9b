//! Everything that draws to, or reads from, the operator's terminal.

pub mod colors;
pub mod format;
pub mod input;
pub mod logging;
pub mod print;
pub mod spinner;
