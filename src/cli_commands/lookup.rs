use std::path::PathBuf;

use clap::Args;

#[derive(Args)]
pub(crate) struct SourceArgs {
    /// Linking table CSV export (defaults to the configured remote)
    #[arg(long, conflicts_with = "recent")]
    pub(crate) file: Option<PathBuf>,
    /// Use the export from the newest settled backup
    #[arg(long)]
    pub(crate) recent: bool,
}

#[derive(Args)]
pub(crate) struct ChannelSkusArgs {
    pub(crate) central_id: String,
    /// Channel name or alias
    #[arg(short, long)]
    pub(crate) channel: String,
    /// Print only the first match (fails when there is none)
    #[arg(long)]
    pub(crate) first: bool,
    /// Emit JSON
    #[arg(long)]
    pub(crate) json: bool,
    #[command(flatten)]
    pub(crate) source: SourceArgs,
}

#[derive(Args)]
pub(crate) struct CentralSkusArgs {
    pub(crate) channel_id: String,
    /// Channel name or alias (defaults to all channels)
    #[arg(short, long)]
    pub(crate) channel: Option<String>,
    /// Print only the first match (fails when there is none)
    #[arg(long)]
    pub(crate) first: bool,
    /// Emit JSON
    #[arg(long)]
    pub(crate) json: bool,
    #[command(flatten)]
    pub(crate) source: SourceArgs,
}

#[derive(Args)]
pub(crate) struct LinkedArgs {
    pub(crate) central_id: String,
    /// Channel name or alias
    #[arg(short, long)]
    pub(crate) channel: String,
    #[command(flatten)]
    pub(crate) source: SourceArgs,
}

#[derive(Args)]
pub(crate) struct ListArgs {
    /// Emit JSON
    #[arg(long)]
    pub(crate) json: bool,
    #[command(flatten)]
    pub(crate) source: SourceArgs,
}
