//! CLI subcommand implementations.

pub mod agenda;
pub mod display;
pub mod normalize;
pub mod prepare;
