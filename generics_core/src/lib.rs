//! Process-level plumbing for the demo binary: console logging and
//! configuration loading.

pub mod config;
pub mod logger;
