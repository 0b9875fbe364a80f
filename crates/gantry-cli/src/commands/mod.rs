//! Command handlers. Each module translates parsed arguments into calls on
//! the core services and prints the outcome.

pub mod completions;
pub mod config;
pub mod scaffold;
