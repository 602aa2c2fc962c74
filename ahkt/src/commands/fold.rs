//! Fold command implementation.
//!
//! Styles a script and prints the fold level of each line.

use std::io::Write;
use std::path::PathBuf;

use ahkl_lex::FoldLevel;
use serde::Serialize;

use crate::commands::common::{styled_script, write_json, OutputFormat};
use crate::commands::traits::{Command, CommandDescription};
use crate::config::Config;
use crate::error::Result;

/// Arguments for the fold command.
#[derive(Debug, Clone, Default)]
pub struct FoldArgs {
    /// Script to fold.
    pub file: PathBuf,
    /// Output format; the configured one when unset.
    pub format: Option<OutputFormat>,
    /// Print levels in the packed host encoding.
    pub packed: bool,
}

/// Fold level of one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LineFold {
    /// Zero-based line number
    pub line: usize,
    /// Nesting depth
    pub level: i32,
    /// Whether the line opens a region
    pub header: bool,
    /// Packed encoding, when requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub packed: Option<u32>,
}

/// Fold command handler.
pub struct FoldCommand {
    args: FoldArgs,
    config: Config,
}

impl FoldCommand {
    /// Use `config` for keyword lists and output defaults.
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    fn line_fold(&self, line: usize, level: FoldLevel) -> LineFold {
        LineFold {
            line,
            level: level.level,
            header: level.header,
            packed: self.args.packed.then(|| level.to_packed()),
        }
    }
}

impl Command for FoldCommand {
    type Args = FoldArgs;
    type Output = Vec<LineFold>;

    fn new(args: Self::Args) -> Self {
        Self {
            args,
            config: Config::default(),
        }
    }

    fn execute(&self) -> Result<Self::Output> {
        let doc = styled_script(&self.args.file, &self.config)?;
        Ok(doc
            .fold_levels()
            .iter()
            .enumerate()
            .map(|(line, &level)| self.line_fold(line, level))
            .collect())
    }

    fn render<W: Write>(&self, output: &Self::Output, out: &mut W) -> Result<()> {
        let format = self.args.format.unwrap_or(self.config.output.format);
        if format == OutputFormat::Json {
            return write_json(out, output);
        }

        for fold in output {
            let marker = if fold.header { "+" } else { " " };
            match fold.packed {
                Some(packed) => writeln!(
                    out,
                    "{}\t{}{}\t{:#06x}",
                    fold.line + 1,
                    marker,
                    fold.level,
                    packed
                )?,
                None => writeln!(out, "{}\t{}{}", fold.line + 1, marker, fold.level)?,
            }
        }
        Ok(())
    }

    fn name() -> &'static str {
        "fold"
    }
}

impl CommandDescription for FoldCommand {
    fn description() -> &'static str {
        "Print the fold level of every line"
    }
}
