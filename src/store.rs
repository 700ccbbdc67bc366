use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};

use crate::model::{AppConfig, CONFIG_VERSION};

const STORE_DIR: &str = ".skulink";
const CONFIG_FILE: &str = "config.json";

/// The `.skulink` directory holding `config.json`.
#[derive(Clone, Debug)]
pub struct ConfigStore {
    root: PathBuf,
}

impl ConfigStore {
    pub fn store_dir(root: &Path) -> PathBuf {
        root.join(STORE_DIR)
    }

    pub fn open(root: &Path) -> Result<Self> {
        let dir = Self::store_dir(root);
        if !dir.is_dir() {
            return Err(anyhow!(
                "No {} directory found at {} (run `skulink init`)",
                STORE_DIR,
                dir.display()
            ));
        }
        Ok(Self { root: dir })
    }

    pub fn init(root: &Path, force: bool) -> Result<Self> {
        let dir = Self::store_dir(root);
        if dir.exists() && !force {
            return Err(anyhow!(
                "{} already exists at {} (use --force to re-init)",
                STORE_DIR,
                dir.display()
            ));
        }
        fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;

        let store = Self { root: dir };
        store.write_config(&AppConfig::default())?;
        Ok(store)
    }

    /// Nearest `.skulink` directory at or above `start`, if any.
    pub fn find(start: &Path) -> Result<Option<Self>> {
        let start = start
            .canonicalize()
            .with_context(|| format!("canonicalize {}", start.display()))?;
        for dir in start.ancestors() {
            if Self::store_dir(dir).is_dir() {
                return Self::open(dir).map(Some);
            }
        }
        Ok(None)
    }

    pub fn discover(start: &Path) -> Result<Self> {
        Self::find(start)?.ok_or_else(|| anyhow!("No .skulink directory found (run `skulink init`)"))
    }

    pub fn dir(&self) -> &Path {
        &self.root
    }

    pub fn config_path(&self) -> PathBuf {
        self.root.join(CONFIG_FILE)
    }

    pub fn read_config(&self) -> Result<AppConfig> {
        let path = self.config_path();
        let bytes = fs::read(&path).with_context(|| format!("read {}", path.display()))?;
        let cfg: AppConfig =
            serde_json::from_slice(&bytes).with_context(|| format!("parse {}", path.display()))?;
        if cfg.version != CONFIG_VERSION {
            anyhow::bail!(
                "unsupported config version {} in {} (expected {})",
                cfg.version,
                path.display(),
                CONFIG_VERSION
            );
        }
        Ok(cfg)
    }

    pub fn write_config(&self, cfg: &AppConfig) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(cfg).context("serialize config")?;
        write_atomic(&self.config_path(), &bytes).context("write config.json")
    }
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("create parent directories")?;
    }
    let tmp = path.with_extension(format!("tmp.{}", std::process::id()));
    fs::write(&tmp, bytes).with_context(|| format!("write temp file {}", tmp.display()))?;
    fs::rename(&tmp, path)
        .with_context(|| format!("rename {} -> {}", tmp.display(), path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "tests/store_tests.rs"]
mod tests;
