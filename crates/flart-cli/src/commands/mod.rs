//! Command handlers.
//!
//! Each handler translates parsed arguments into core service calls and
//! renders the result. No generation rules live here.

pub mod completions;
pub mod config;
pub mod generate;
pub mod init;
pub mod interactive;
pub mod model;
pub mod runner;
pub mod screen;
