use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use prefs_store::DEFAULT_SUITE;

use crate::render::Output;

pub const FILE_ENV: &str = "PREFS_FILE";
pub const SUITE_ENV: &str = "PREFS_SUITE";

#[derive(Parser, Clone)]
#[command(name = "prefs", version, about = "Inspect and edit settings suites", long_about = None)]
pub struct Cli {
    // Optional as a workaround for https://github.com/clap-rs/clap/issues/3572
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[arg(short = 'o', long, global = true, value_enum, default_value_t = Output::Plain)]
    pub output: Output,

    #[arg(
        short = 'f',
        long,
        global = true,
        env = FILE_ENV,
        help = "The settings file. Defaults to prefs.sqlite in the user config directory."
    )]
    pub file: Option<PathBuf>,

    #[arg(
        short = 's',
        long,
        global = true,
        env = SUITE_ENV,
        default_value = DEFAULT_SUITE,
        help = "The suite to operate on."
    )]
    pub suite: String,

    #[arg(
        short = 'q',
        long,
        global = true,
        help = "Don't return anything to stdout."
    )]
    pub quiet: bool,
}

#[derive(Subcommand, Clone)]
pub enum Commands {
    #[command(long_about = "List every key stored in the suite.")]
    Keys,

    #[command(long_about = "Print the value stored under a key, with its kind.")]
    Get { key: String },

    #[command(long_about = "Store a value under a key, replacing any previous value.")]
    Set {
        key: String,
        value: String,

        #[arg(
            short = 'k',
            long,
            value_enum,
            default_value_t = KindArg::Text,
            help = "The kind to store the value as. Bytes are given as base64."
        )]
        kind: KindArg,
    },

    #[command(long_about = "Remove a key from the suite. Removing an absent key succeeds.")]
    Remove { key: String },

    #[command(long_about = "Remove every key from the suite. Other suites are untouched.")]
    Clear,

    #[command(long_about = "Print every entry of the suite.")]
    Dump,

    #[command(long_about = "List the suites present in the settings file.")]
    Suites,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug)]
pub enum KindArg {
    Bool,
    Text,
    Int,
    Double,
    Float,
    Bytes,
}
