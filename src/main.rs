use clap::Parser;
use simplelog::{ColorChoice, CombinedLogger, TerminalMode, TermLogger};
use cli::Cli;

mod cli;
mod history;
mod job;
mod manifest;
mod tags;
pub mod fs_utils;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    CombinedLogger::init(
        vec![
            TermLogger::new(cli.rust_log.into(), simplelog::Config::default(), TerminalMode::Mixed, ColorChoice::Auto)
        ]
    )?;

    match cli.sub_command {
        cli::CliSubCommand::Generate {
            folder,
            out,
            recursive,
        } => job::generate::handle_generate(folder, out, recursive).await?,
        cli::CliSubCommand::Collect {
            list,
            destination_folder,
            out,
        } => job::generate::handle_collect(list, destination_folder, out).await?,
        cli::CliSubCommand::Copy {
            manifest,
            source_folder,
            destination_folder,
        } => job::copy::handle_copy(manifest, source_folder, destination_folder).await?,
        cli::CliSubCommand::Validate {
            manifest,
            destination_folder,
        } => job::validate::handle_validate(manifest, destination_folder).await?,
        cli::CliSubCommand::ListFiles { folder } => job::handle_list_files(folder).await?,
        cli::CliSubCommand::Tags { add } => tags::handle_tags(add)?,
        cli::CliSubCommand::History => history::handle_history()?,
    }

    Ok(())
}
