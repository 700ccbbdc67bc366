use tracing::info;

use super::*;

/// Config of the nearest `.skulink` directory, or defaults when there is none.
pub(super) fn load_config() -> Result<AppConfig> {
    let cwd = std::env::current_dir().context("get current dir")?;
    match ConfigStore::find(&cwd)? {
        Some(store) => store.read_config(),
        None => Ok(AppConfig::default()),
    }
}

pub(super) fn open_source(args: &SourceArgs, cfg: &AppConfig) -> Result<Box<dyn LinkingSource>> {
    if let Some(path) = &args.file {
        return Ok(Box::new(TableFile::new(path, cfg.columns.clone())));
    }

    if args.recent {
        let backups = cfg.backups.as_ref().context(
            "no backups configured (run `skulink config set-backups --dir ... --file-name ...`)",
        )?;
        let path = recent_linking_file(backups)?;
        return Ok(Box::new(TableFile::new(path, cfg.columns.clone())));
    }

    let remote = cfg.remote.clone().context(
        "no linking table source (pass --file or --recent, or run `skulink config set-remote --url ...`)",
    )?;
    let token = resolve_token(&remote);
    Ok(Box::new(RemoteLinkingTable::new(
        remote,
        token,
        cfg.columns.clone(),
    )?))
}

pub(super) fn load_resolver(args: &SourceArgs) -> Result<Resolver> {
    let cfg = load_config()?;
    let source = open_source(args, &cfg)?;
    info!(source = %source.describe(), "loading linking table");
    Resolver::load(source.as_ref())
        .with_context(|| format!("load linking table from {}", source.describe()))
}
