//! CLI library components for the employee roster.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod render;
pub mod settings;
