//! Library side of the `coderule` command-line tool.

pub mod logging;
pub mod reports;
pub mod rules;
