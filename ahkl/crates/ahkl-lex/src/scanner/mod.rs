//! Scanner module.
//!
//! This module organizes the scanner into smaller, focused components:
//! - `core` - Scanner struct, dispatch and new-token detection
//! - `identifier` - Keywords, variables and member names
//! - `number` - Number literals
//! - `string` - Strings, escapes and special keys
//! - `operator` - Operators and assignments
//! - `comment` - Line comments, comment blocks and special lines

mod comment;
mod core;
mod identifier;
mod number;
mod operator;
mod string;

pub use self::core::{scan, NumericKind, ScanFlags, Scanner};
