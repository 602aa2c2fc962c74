//! Style command implementation.
//!
//! Styles a script and prints its runs of equally styled bytes. With
//! `--from`, the script is treated as edited at that offset and only the
//! runs restyled by the edit are printed.

use std::io::Write;
use std::path::PathBuf;

use ahkl_lex::{Document, StyledSpan, TextDocument};
use serde::Serialize;

use crate::commands::common::{
    error_messages, lexer_from_config, read_script, write_json, OutputFormat,
};
use crate::commands::traits::{Command, CommandDescription};
use crate::config::Config;
use crate::error::{AhktError, Result};

/// Arguments for the style command.
#[derive(Debug, Clone, Default)]
pub struct StyleArgs {
    /// Script to style.
    pub file: PathBuf,
    /// Output format; the configured one when unset.
    pub format: Option<OutputFormat>,
    /// Report only what an edit at this offset restyles.
    pub from: Option<usize>,
    /// Print the text of each run.
    pub show_text: bool,
}

/// One printed run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpanRecord {
    /// First byte of the run
    pub start: usize,
    /// One past the last byte
    pub end: usize,
    /// Style name
    pub style: &'static str,
    /// Text of the run, when requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Output of the style command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyleReport {
    /// Bytes covered by the reported runs
    pub start: usize,
    /// End of the reported range
    pub end: usize,
    /// State at the end of the script
    pub final_state: String,
    /// The runs
    pub spans: Vec<SpanRecord>,
}

/// Style command handler.
pub struct StyleCommand {
    args: StyleArgs,
    config: Config,
}

impl StyleCommand {
    /// Use `config` for keyword lists and output defaults.
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    fn format(&self) -> OutputFormat {
        self.args.format.unwrap_or(self.config.output.format)
    }

    fn record(&self, doc: &TextDocument, span: &StyledSpan) -> SpanRecord {
        let text = self
            .args
            .show_text
            .then(|| String::from_utf8_lossy(&doc.text()[span.range.clone()]).into_owned());
        SpanRecord {
            start: span.range.start,
            end: span.range.end,
            style: span.style.name(),
            text,
        }
    }
}

impl Command for StyleCommand {
    type Args = StyleArgs;
    type Output = StyleReport;

    fn new(args: Self::Args) -> Self {
        Self {
            args,
            config: Config::default(),
        }
    }

    fn execute(&self) -> Result<Self::Output> {
        let lexer = lexer_from_config(&self.config)?;
        let mut doc = read_script(&self.args.file)?;
        let mut restyle = lexer.restyle_all(&mut doc);

        if let Some(offset) = self.args.from {
            if offset > doc.length() {
                return Err(AhktError::Validation(format!(
                    "{} {}",
                    error_messages::OFFSET_OUT_OF_RANGE,
                    offset
                )));
            }
            restyle = lexer.restyle(&mut doc, offset);
        }

        let range = restyle.range.clone();
        let spans = doc
            .spans()
            .iter()
            .filter(|span| span.range.end > range.start && span.range.start < range.end)
            .map(|span| self.record(&doc, span))
            .collect();

        Ok(StyleReport {
            start: range.start,
            end: range.end,
            final_state: format!("{:?}", restyle.final_state),
            spans,
        })
    }

    fn render<W: Write>(&self, output: &Self::Output, out: &mut W) -> Result<()> {
        match self.format() {
            OutputFormat::Json => write_json(out, output),
            OutputFormat::Text => {
                for span in &output.spans {
                    match &span.text {
                        Some(text) => writeln!(
                            out,
                            "{}..{}\t{}\t{:?}",
                            span.start, span.end, span.style, text
                        )?,
                        None => writeln!(out, "{}..{}\t{}", span.start, span.end, span.style)?,
                    }
                }
                Ok(())
            },
        }
    }

    fn name() -> &'static str {
        "style"
    }
}

impl CommandDescription for StyleCommand {
    fn description() -> &'static str {
        "Print the styled runs of a script"
    }
}
