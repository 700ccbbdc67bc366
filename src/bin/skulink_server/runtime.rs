use axum::Router;
use axum::routing::get;
use tracing::info;

use super::handlers::{central_skus, channel_skus, healthz, linked, list_channels};
use super::*;

#[derive(Clone, Parser)]
#[command(name = "skulink-server")]
#[command(about = "Read-only SKU lookups over one linking table snapshot", long_about = None)]
pub(super) struct Args {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:8090")]
    addr: SocketAddr,

    /// Write bound address to this file (dev/test convenience)
    #[arg(long)]
    addr_file: Option<PathBuf>,

    /// Linking table CSV export
    #[arg(long, conflicts_with = "remote_url")]
    file: Option<PathBuf>,

    /// Inventory API base URL (defaults to the configured remote)
    #[arg(long)]
    remote_url: Option<String>,

    /// Bearer token for the inventory API
    #[arg(long)]
    token: Option<String>,

    #[arg(long, default_value = DEFAULT_EXPORT_PATH)]
    export_path: String,

    /// Log debug output
    #[arg(short, long)]
    verbose: bool,
}

pub(super) async fn run() -> Result<()> {
    let args = Args::parse();
    skulink::logging::init_tracing(args.verbose);

    // The blocking HTTP client must not be created or dropped on a runtime thread.
    let loader_args = args.clone();
    let resolver = tokio::task::spawn_blocking(move || {
        let source = open_source(&loader_args)?;
        info!(source = %source.describe(), "loading linking table");
        Resolver::load(source.as_ref())
            .with_context(|| format!("load linking table from {}", source.describe()))
    })
    .await
    .context("join linking table loader")??;

    let app = Router::new()
        .route("/healthz", get(healthz))
        .route("/channels", get(list_channels))
        .route("/central/:central_id/channels/:channel", get(channel_skus))
        .route("/central/:central_id/linked/:channel", get(linked))
        .route("/channel-skus/:channel_id", get(central_skus))
        .with_state(Arc::new(resolver));

    let listener = tokio::net::TcpListener::bind(args.addr)
        .await
        .with_context(|| format!("bind {}", args.addr))?;
    let local_addr = listener.local_addr().context("read listener local addr")?;
    info!(addr = %local_addr, "skulink-server listening");

    if let Some(addr_file) = &args.addr_file {
        std::fs::write(addr_file, local_addr.to_string())
            .with_context(|| format!("write addr file {}", addr_file.display()))?;
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

fn open_source(args: &Args) -> Result<Box<dyn LinkingSource + Send>> {
    let cwd = std::env::current_dir().context("get current dir")?;
    let cfg = match ConfigStore::find(&cwd)? {
        Some(store) => store.read_config()?,
        None => AppConfig::default(),
    };

    if let Some(path) = &args.file {
        return Ok(Box::new(TableFile::new(path, cfg.columns)));
    }

    let remote = match &args.remote_url {
        Some(url) => RemoteConfig {
            base_url: url.clone(),
            token: None,
            export_path: args.export_path.clone(),
        },
        None => cfg
            .remote
            .clone()
            .context("no linking table source (pass --file or --remote-url)")?,
    };
    let token = args.token.clone().or_else(|| resolve_token(&remote));
    Ok(Box::new(RemoteLinkingTable::new(remote, token, cfg.columns)?))
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}
