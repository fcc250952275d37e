use clap::ValueEnum;
use serde::Serialize;

use crate::{command::Cli, value::EntryView};

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
#[allow(clippy::upper_case_acronyms)]
pub(crate) enum Output {
    Plain,
    JSON,
    YAML,
    None,
}

#[derive(Debug, PartialEq)]
pub enum CommandOutput {
    Plain(String),
    Names(Vec<String>),
    Entries(Vec<EntryView>),
}
pub type CommandResult = color_eyre::eyre::Result<CommandOutput>;

impl From<&str> for CommandOutput {
    fn from(text: &str) -> Self {
        CommandOutput::Plain(text.to_owned())
    }
}
impl From<String> for CommandOutput {
    fn from(text: String) -> Self {
        CommandOutput::Plain(text)
    }
}
impl From<()> for CommandOutput {
    fn from(_: ()) -> Self {
        CommandOutput::Plain(String::new())
    }
}

pub struct RenderConfig {
    pub output: Output,
    pub quiet: bool,
}

impl RenderConfig {
    pub fn new(cli: &Cli) -> Self {
        Self {
            output: cli.output,
            quiet: cli.quiet,
        }
    }

    pub fn render_result(&self, result: CommandResult) -> color_eyre::eyre::Result<()> {
        // Errors will be passed through to the caller, and rendered by the main function
        let output = result?;

        if self.quiet || self.output == Output::None {
            return Ok(());
        }

        let text = self.format(&output)?;
        if !text.is_empty() {
            println!("{}", text.trim_end());
        }
        Ok(())
    }

    fn format(&self, output: &CommandOutput) -> color_eyre::eyre::Result<String> {
        match (self.output, output) {
            (_, CommandOutput::Plain(text)) => Ok(text.clone()),
            (Output::Plain, CommandOutput::Names(names)) => Ok(names.join("\n")),
            (Output::Plain, CommandOutput::Entries(entries)) => Ok(entries
                .iter()
                .map(EntryView::line)
                .collect::<Vec<_>>()
                .join("\n")),
            (_, CommandOutput::Names(names)) => self.serialize(names),
            (_, CommandOutput::Entries(entries)) => self.serialize(entries),
        }
    }

    fn serialize<T: Serialize>(&self, data: &T) -> color_eyre::eyre::Result<String> {
        Ok(match self.output {
            Output::YAML => serde_yaml::to_string(data)?,
            _ => serde_json::to_string_pretty(data)?,
        })
    }
}
