//! Lists command implementation.
//!
//! Prints the eight keyword lists the lexer accepts, in host index order,
//! with the number of words configured for each.

use std::io::Write;

use ahkl_lex::{AhkLexer, KeywordClass};
use serde::Serialize;

use crate::commands::common::{lexer_from_config, write_json, OutputFormat};
use crate::commands::traits::{Command, CommandDescription};
use crate::config::Config;
use crate::error::Result;

/// Arguments for the lists command.
#[derive(Debug, Clone, Default)]
pub struct ListsArgs {
    /// Output format; the configured one when unset.
    pub format: Option<OutputFormat>,
    /// Print the configured words of every list.
    pub words: bool,
}

/// Description of one keyword list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListInfo {
    /// Host word list index
    pub index: usize,
    /// Key of the list in the `[keywords]` configuration table
    pub key: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Style words of this list are painted with
    pub style: &'static str,
    /// Number of configured words
    pub count: usize,
    /// The words, when requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub words: Option<Vec<String>>,
}

/// Lists command handler.
pub struct ListsCommand {
    args: ListsArgs,
    config: Config,
}

impl ListsCommand {
    /// Use `config` for keyword lists and output defaults.
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }
}

impl Command for ListsCommand {
    type Args = ListsArgs;
    type Output = Vec<ListInfo>;

    fn new(args: Self::Args) -> Self {
        Self {
            args,
            config: Config::default(),
        }
    }

    fn execute(&self) -> Result<Self::Output> {
        let lexer = lexer_from_config(&self.config)?;
        let descriptions = AhkLexer::word_list_descriptions();

        Ok(KeywordClass::ALL
            .iter()
            .map(|&class| {
                let list = lexer.tables().list(class);
                ListInfo {
                    index: class.index(),
                    key: class.key(),
                    description: descriptions[class.index()],
                    style: class.style().name(),
                    count: list.len(),
                    words: self
                        .args
                        .words
                        .then(|| list.iter().map(str::to_string).collect()),
                }
            })
            .collect())
    }

    fn render<W: Write>(&self, output: &Self::Output, out: &mut W) -> Result<()> {
        let format = self.args.format.unwrap_or(self.config.output.format);
        if format == OutputFormat::Json {
            return write_json(out, output);
        }

        for info in output {
            writeln!(
                out,
                "{}\t{}\t{}\t{} word(s)",
                info.index, info.key, info.description, info.count
            )?;
            if let Some(words) = &info.words {
                if !words.is_empty() {
                    writeln!(out, "\t{}", words.join(" "))?;
                }
            }
        }
        Ok(())
    }

    fn name() -> &'static str {
        "lists"
    }
}

impl CommandDescription for ListsCommand {
    fn description() -> &'static str {
        "Show the keyword lists and their configured sizes"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lists_command_name() {
        assert_eq!(<ListsCommand as Command>::name(), "lists");
    }

    #[test]
    fn test_lists_default_config() {
        let infos = ListsCommand::new(ListsArgs::default()).execute().unwrap();
        assert_eq!(infos.len(), 8);
        assert_eq!(infos[0].key, "keywords");
        assert_eq!(infos[3].description, "sent keys");
        assert_eq!(infos[7].style, "udf");
        assert!(infos.iter().all(|info| info.count == 0));
    }

    #[test]
    fn test_lists_with_words() {
        let mut config = Config::default();
        config.keywords.functions = vec!["MsgBox".to_string(), "Send".to_string()];
        let args = ListsArgs {
            words: true,
            ..ListsArgs::default()
        };
        let command = ListsCommand::new(args).with_config(config);
        let infos = command.execute().unwrap();
        assert_eq!(infos[1].count, 2);
        assert_eq!(
            infos[1].words,
            Some(vec!["msgbox".to_string(), "send".to_string()])
        );

        let mut out = Vec::new();
        command.render(&infos, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("1\tfunctions\tfunctions\t2 word(s)\n\tmsgbox send\n"));
    }
}
