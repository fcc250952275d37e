#![doc = include_str!("../README.md")]

use clap::{CommandFactory, Parser};
use color_eyre::eyre::Result;
use prefs_settings::SettingsManager;
use prefs_store::SuiteRegistry;
use tracing_subscriber::{
    EnvFilter, prelude::__tracing_subscriber_SubscriberExt as _, util::SubscriberInitExt as _,
};

use crate::{
    command::*,
    render::{CommandOutput, CommandResult},
    value::{EntryView, parse_value},
};

mod command;
mod render;
mod state;
mod value;

fn main() -> Result<()> {
    // the log level hierarchy is determined by:
    //    - if RUST_LOG is detected at runtime
    //    - if RUST_LOG is provided at compile time
    //    - default to INFO
    let filter = EnvFilter::builder()
        .with_default_directive(
            option_env!("RUST_LOG")
                .unwrap_or("info")
                .parse()
                .expect("should provide valid log level at compile time."),
        )
        // parse directives from the RUST_LOG environment variable,
        // overriding the default directive for matching targets.
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    color_eyre::install()?;

    let cli = Cli::parse();
    let render_config = render::RenderConfig::new(&cli);

    let Some(command) = cli.command else {
        let mut cmd = Cli::command();
        cmd.print_help()?;
        return Ok(());
    };

    let result = state::open_registry(cli.file)
        .map_err(color_eyre::eyre::Report::from)
        .and_then(|registry| process_command(command, &registry, &cli.suite));

    // Render the result of the command
    render_config.render_result(result)
}

fn process_command(command: Commands, registry: &SuiteRegistry, suite: &str) -> CommandResult {
    let manager = || SettingsManager::for_suite(registry, suite);

    match command {
        Commands::Keys => {
            let mut keys = manager()?.all_keys()?;
            keys.sort();
            Ok(CommandOutput::Names(keys))
        }
        Commands::Get { key } => match manager()?.get_raw(&key)? {
            Some(value) => Ok(CommandOutput::Entries(vec![EntryView::new(key, &value)])),
            None => Ok(format!("{key} is not set in suite {suite}").into()),
        },
        Commands::Set { key, value, kind } => {
            manager()?.set_raw(&key, parse_value(kind, &value)?)?;
            Ok(().into())
        }
        Commands::Remove { key } => Ok(manager()?.remove_setting(&key)?.into()),
        Commands::Clear => {
            let removed = manager()?.clear_all_settings()?;
            Ok(format!("Removed {removed} keys from suite {suite}").into())
        }
        Commands::Dump => Ok(CommandOutput::Entries(
            manager()?
                .snapshot()?
                .iter()
                .map(|(key, value)| EntryView::new(key.clone(), value))
                .collect(),
        )),
        Commands::Suites => Ok(CommandOutput::Names(registry.suite_names()?)),
    }
}
