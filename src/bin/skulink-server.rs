use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use clap::Parser;

use skulink::model::{AppConfig, DEFAULT_EXPORT_PATH, RemoteConfig};
use skulink::resolver::ChannelChoice;
use skulink::source::{LinkingSource, RemoteLinkingTable, TableFile, resolve_token};
use skulink::store::ConfigStore;
use skulink::{LookupError, Resolver};

#[path = "skulink_server/handlers.rs"]
mod handlers;
#[path = "skulink_server/http_error.rs"]
mod http_error;
#[path = "skulink_server/runtime.rs"]
mod runtime;

#[tokio::main]
async fn main() {
    if let Err(err) = runtime::run().await {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}
