use std::path::PathBuf;

use clap::Subcommand;

pub(crate) mod config;
pub(crate) mod lookup;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Initialize a config directory (.skulink)
    Init(config::InitArgs),

    /// Show or change configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// List the channel SKUs linked to a central SKU
    ChannelSkus(lookup::ChannelSkusArgs),

    /// List the central SKUs linked to a channel SKU
    CentralSkus(lookup::CentralSkusArgs),

    /// Check whether a central SKU is linked on a channel
    Linked(lookup::LinkedArgs),

    /// List the channels in the linking table
    Channels(lookup::ListArgs),

    /// List accepted channel names and aliases
    Aliases(lookup::ListArgs),

    /// Summarize the linking table
    Stats(lookup::ListArgs),
}

#[derive(Subcommand)]
pub(crate) enum ConfigCommands {
    /// Show the configuration
    Show {
        #[arg(long)]
        json: bool,
    },

    /// Set the inventory API used when no file is given
    SetRemote {
        #[arg(long)]
        url: String,
        /// Bearer token (SKULINK_TOKEN overrides it)
        #[arg(long)]
        token: Option<String>,
        #[arg(long)]
        export_path: Option<String>,
    },

    /// Set the backup directory used by --recent
    SetBackups {
        #[arg(long)]
        dir: PathBuf,
        /// Export file name inside a backup, without the date prefix
        #[arg(long)]
        file_name: String,
        /// Number of newest backups to pass over
        #[arg(long)]
        skip_newest: Option<usize>,
    },

    /// Set the linking table column names
    SetColumns {
        #[arg(long)]
        central_id: Option<String>,
        #[arg(long)]
        channel_name: Option<String>,
        #[arg(long)]
        channel_id: Option<String>,
    },
}
