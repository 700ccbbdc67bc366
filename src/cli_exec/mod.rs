use anyhow::{Context, Result};

use skulink::Resolver;
use skulink::model::AppConfig;
use skulink::source::{
    LinkingSource, RemoteLinkingTable, TableFile, recent_linking_file, resolve_token,
};
use skulink::store::ConfigStore;

use crate::cli_commands::lookup::SourceArgs;
use crate::{Commands, ConfigCommands};

mod config_ops;
mod lookup;
mod source_select;

pub(crate) fn handle_command(command: Commands) -> Result<()> {
    match command {
        Commands::Init(args) => config_ops::handle_init_command(args.path, args.force)?,
        Commands::Config { command } => config_ops::handle_config_command(command)?,
        Commands::ChannelSkus(args) => lookup::handle_channel_skus_command(args)?,
        Commands::CentralSkus(args) => lookup::handle_central_skus_command(args)?,
        Commands::Linked(args) => lookup::handle_linked_command(args)?,
        Commands::Channels(args) => lookup::handle_channels_command(args)?,
        Commands::Aliases(args) => lookup::handle_aliases_command(args)?,
        Commands::Stats(args) => lookup::handle_stats_command(args)?,
    }
    Ok(())
}
