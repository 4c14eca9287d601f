//! Shared helpers for probes

pub mod command;
pub mod file;
pub mod parsing;
