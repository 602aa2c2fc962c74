//! Command modules for the ahkt CLI.
//!
//! This module contains implementations for all available subcommands.
//! Each subcommand is implemented in its own file following a standardized pattern.

pub mod common;
pub mod traits;

pub mod fold;
pub mod lists;
pub mod style;

// Re-export command types
pub use fold::{FoldArgs, FoldCommand};
pub use lists::{ListsArgs, ListsCommand};
pub use style::{StyleArgs, StyleCommand};
