//! Library components of the `regcheck` command.

pub mod check;
pub mod logging;
pub mod render;
