use std::path::PathBuf;

use skulink::model::{BackupConfig, DEFAULT_EXPORT_PATH, RemoteConfig};

use super::*;

pub(super) fn handle_init_command(path: Option<PathBuf>, force: bool) -> Result<()> {
    let root = match path {
        Some(p) => p,
        None => std::env::current_dir().context("get current dir")?,
    };
    let store = ConfigStore::init(&root, force)?;
    println!("Initialized skulink config at {}", store.dir().display());
    Ok(())
}

pub(super) fn handle_config_command(command: ConfigCommands) -> Result<()> {
    let store = ConfigStore::discover(&std::env::current_dir().context("get current dir")?)?;
    let mut cfg = store.read_config()?;

    match command {
        ConfigCommands::Show { json } => {
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&cfg).context("serialize config json")?
                );
                return Ok(());
            }
            println!(
                "columns: {} / {} / {}",
                cfg.columns.central_id, cfg.columns.channel_name, cfg.columns.channel_id
            );
            match &cfg.remote {
                Some(remote) => {
                    println!("remote: {}{}", remote.base_url, remote.export_path);
                    println!(
                        "token: {}",
                        if remote.token.is_some() { "set" } else { "unset" }
                    );
                }
                None => println!("remote: none"),
            }
            match &cfg.backups {
                Some(b) => println!(
                    "backups: {} ({}, skip newest {})",
                    b.dir.display(),
                    b.file_name,
                    b.skip_newest
                ),
                None => println!("backups: none"),
            }
            return Ok(());
        }
        ConfigCommands::SetRemote {
            url,
            token,
            export_path,
        } => {
            let previous = cfg.remote.take();
            cfg.remote = Some(RemoteConfig {
                base_url: url,
                token: token.or_else(|| previous.as_ref().and_then(|r| r.token.clone())),
                export_path: export_path
                    .or_else(|| previous.map(|r| r.export_path))
                    .unwrap_or_else(|| DEFAULT_EXPORT_PATH.to_string()),
            });
            println!("Remote configured");
        }
        ConfigCommands::SetBackups {
            dir,
            file_name,
            skip_newest,
        } => {
            let skip_newest = skip_newest
                .or_else(|| cfg.backups.as_ref().map(|b| b.skip_newest))
                .unwrap_or(2);
            cfg.backups = Some(BackupConfig {
                dir,
                file_name,
                skip_newest,
            });
            println!("Backups configured");
        }
        ConfigCommands::SetColumns {
            central_id,
            channel_name,
            channel_id,
        } => {
            if let Some(v) = central_id {
                cfg.columns.central_id = v;
            }
            if let Some(v) = channel_name {
                cfg.columns.channel_name = v;
            }
            if let Some(v) = channel_id {
                cfg.columns.channel_id = v;
            }
            println!("Columns configured");
        }
    }

    store.write_config(&cfg)
}
