mod config;
mod row;

pub use self::config::{
    AppConfig, BackupConfig, CONFIG_VERSION, ColumnNames, DEFAULT_EXPORT_PATH, RemoteConfig,
};
pub use self::row::{LinkField, LinkRecord, LinkRow};
