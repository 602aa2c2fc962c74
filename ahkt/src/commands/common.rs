//! Common types and utilities for ahkt commands.
//!
//! This module provides shared types, constants, and utility functions
//! used across all command implementations to ensure consistency.

use std::fmt;
use std::io::Write;
use std::path::Path;
use std::str::FromStr;

use ahkl_lex::{AhkLexer, TextDocument};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::{AhktError, Result};

// ============================================================================
// Output Format
// ============================================================================

/// Supported formats for printed results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One record per line
    #[default]
    Text,
    /// A single JSON document
    Json,
}

impl OutputFormat {
    /// The name used on the command line and in configuration.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = AhktError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(AhktError::Validation(format!(
                "{} {}",
                error_messages::UNKNOWN_FORMAT,
                s
            ))),
        }
    }
}

// ============================================================================
// Script Loading
// ============================================================================

/// Read a script into an unstyled document.
pub fn read_script(path: &Path) -> Result<TextDocument> {
    if !path.exists() {
        return Err(AhktError::Validation(format!(
            "{} {}",
            error_messages::INPUT_PATH_NOT_EXIST,
            path.display()
        )));
    }
    if !path.is_file() {
        return Err(AhktError::Validation(format!(
            "{} {}",
            error_messages::INPUT_PATH_NOT_FILE,
            path.display()
        )));
    }

    let bytes = std::fs::read(path).map_err(|e| {
        AhktError::FileOperation(format!(
            "{} {}: {}",
            error_messages::READ_FAILED,
            path.display(),
            e
        ))
    })?;
    Ok(TextDocument::new(bytes))
}

/// Build a lexer over the keyword lists of `config`.
pub fn lexer_from_config(config: &Config) -> Result<AhkLexer> {
    Ok(AhkLexer::with_tables(config.keywords.to_tables()?))
}

/// Read `path` and style it from scratch.
pub fn styled_script(path: &Path, config: &Config) -> Result<TextDocument> {
    let lexer = lexer_from_config(config)?;
    let mut doc = read_script(path)?;
    let restyle = lexer.restyle_all(&mut doc);
    tracing::debug!(
        path = %path.display(),
        bytes = restyle.range.len(),
        final_state = ?restyle.final_state,
        "styled script"
    );
    Ok(doc)
}

/// Write `value` as pretty JSON followed by a newline.
pub fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

// ============================================================================
// Error Messages
// ============================================================================

/// Standard error message templates.
pub mod error_messages {
    /// Error when input path does not exist.
    pub const INPUT_PATH_NOT_EXIST: &str = "Input path does not exist:";

    /// Error when input path is not a file.
    pub const INPUT_PATH_NOT_FILE: &str = "Input path is not a file:";

    /// Error when a script cannot be read.
    pub const READ_FAILED: &str = "Failed to read";

    /// Error when an unknown format is specified.
    pub const UNKNOWN_FORMAT: &str = "Unknown format:";

    /// Error when an edit offset lies outside the script.
    pub const OFFSET_OUT_OF_RANGE: &str = "Edit offset is past the end of the script:";
}
