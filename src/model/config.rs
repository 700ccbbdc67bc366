use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub const CONFIG_VERSION: u32 = 1;
pub const DEFAULT_EXPORT_PATH: &str = "/api/linking-table";

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AppConfig {
    pub version: u32,

    #[serde(default)]
    pub columns: ColumnNames,

    #[serde(default)]
    pub remote: Option<RemoteConfig>,

    #[serde(default)]
    pub backups: Option<BackupConfig>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            columns: ColumnNames::default(),
            remote: None,
            backups: None,
        }
    }
}

/// Header names of the three linking columns in tabular exports.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnNames {
    pub central_id: String,
    pub channel_name: String,
    pub channel_id: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            central_id: "StockSKU".to_string(),
            channel_name: "Sub Source".to_string(),
            channel_id: "ChannelSKU".to_string(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RemoteConfig {
    pub base_url: String,

    // SKULINK_TOKEN takes precedence over a stored token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    #[serde(default = "default_export_path")]
    pub export_path: String,
}

fn default_export_path() -> String {
    DEFAULT_EXPORT_PATH.to_string()
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BackupConfig {
    /// Directory holding one dated subdirectory per backup run.
    pub dir: PathBuf,

    /// Linking export name inside a backup, prefixed with `<date>_`.
    pub file_name: String,

    /// Number of newest backups to pass over; those may still be in progress.
    #[serde(default = "default_skip_newest")]
    pub skip_newest: usize,
}

fn default_skip_newest() -> usize {
    2
}
