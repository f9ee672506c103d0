use std::path::PathBuf;
use clap::{command, Subcommand, Parser, ValueEnum};
use indicatif::ProgressStyle;
use log::LevelFilter;

#[derive(Parser, Clone, Debug)]
pub struct Cli {
    #[command(subcommand)]
    pub sub_command: CliSubCommand,
    #[clap(env, long, default_value = "Info")]
    pub rust_log: LogLevel,
}

#[derive(Clone, Debug, Subcommand)]
pub enum CliSubCommand {
    /// Generate a manifest from the files in a folder
    Generate {
        #[clap(env, long)]
        folder: String,
        #[clap(long)]
        out: Option<PathBuf>,
        #[clap(long)]
        recursive: bool,
    },
    /// Build a manifest from newline-separated path list files
    Collect {
        #[clap(long, required = true)]
        list: Vec<PathBuf>,
        #[clap(env, long)]
        destination_folder: Option<String>,
        #[clap(long)]
        out: Option<PathBuf>,
    },
    /// Copy the files named in a manifest from source to destination
    Copy {
        #[clap(env, long)]
        manifest: PathBuf,
        #[clap(env, long)]
        source_folder: String,
        #[clap(env, long)]
        destination_folder: String,
    },
    /// Check that every file in a manifest is present in the destination
    Validate {
        #[clap(env, long)]
        manifest: PathBuf,
        #[clap(env, long)]
        destination_folder: String,
    },
    /// List the files directly inside a folder
    ListFiles {
        #[clap(env, long)]
        folder: String,
    },
    /// Show or extend the tag list
    Tags {
        #[clap(long)]
        add: Option<String>,
    },
    /// Show recently used manifests and folders
    History,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

pub fn copy_progress_style() -> ProgressStyle {
    ProgressStyle::with_template("{bar:40.cyan/blue} [Eta: {eta}]\n[{pos}/{len}] {wide_msg}")
        .unwrap()
}

pub fn scan_progress_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner} {prefix} {elapsed}\n{wide_msg}")
        .unwrap()
        .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
}
