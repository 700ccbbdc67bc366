use std::time::Duration;

use anyhow::{Context, Result};
use serde_json::Value;
use tracing::{info, warn};

use super::LinkingSource;
use crate::model::{ColumnNames, LinkRecord, RemoteConfig};

pub const TOKEN_ENV: &str = "SKULINK_TOKEN";

/// The linking table export of the inventory system's HTTP API.
pub struct RemoteLinkingTable {
    remote: RemoteConfig,
    token: Option<String>,
    columns: ColumnNames,
    client: reqwest::blocking::Client,
}

impl RemoteLinkingTable {
    pub fn new(remote: RemoteConfig, token: Option<String>, columns: ColumnNames) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent("skulink")
            .timeout(Duration::from_secs(60))
            .build()
            .context("build reqwest client")?;
        Ok(Self {
            remote,
            token,
            columns,
            client,
        })
    }

    pub fn url(&self) -> String {
        format!(
            "{}{}",
            self.remote.base_url.trim_end_matches('/'),
            self.remote.export_path
        )
    }

    fn fetch(&self) -> Result<Value> {
        let mut req = self.client.get(self.url());
        if let Some(token) = &self.token {
            req = req.header(reqwest::header::AUTHORIZATION, format!("Bearer {}", token));
        }
        let resp = req.send().context("linking table request")?;
        ensure_ok(resp, "linking table")?
            .json()
            .context("parse linking table json")
    }
}

impl LinkingSource for RemoteLinkingTable {
    fn describe(&self) -> String {
        format!("remote {}", self.url())
    }

    fn load(&self) -> Result<Vec<LinkRecord>> {
        let body = with_retries("fetch linking table", || self.fetch())?;
        let records = records_from_json(body, &self.columns)?;
        info!(url = %self.url(), rows = records.len(), "loaded linking table");
        Ok(records)
    }
}

/// Token from `SKULINK_TOKEN`, falling back to the configured one.
pub fn resolve_token(remote: &RemoteConfig) -> Option<String> {
    std::env::var(TOKEN_ENV)
        .ok()
        .filter(|t| !t.is_empty())
        .or_else(|| remote.token.clone())
}

/// Accepts either a bare array of row objects or `{"rows": [...]}`.
///
/// Objects are keyed by the configured column names. Numbers are taken as
/// their decimal text; null, missing or other values leave the field unset.
pub fn records_from_json(body: Value, columns: &ColumnNames) -> Result<Vec<LinkRecord>> {
    let rows = match body {
        Value::Array(rows) => rows,
        Value::Object(mut obj) => match obj.remove("rows") {
            Some(Value::Array(rows)) => rows,
            _ => anyhow::bail!("linking table response has no `rows` array"),
        },
        _ => anyhow::bail!("linking table response must be an array or an object"),
    };

    rows.iter()
        .enumerate()
        .map(|(i, row)| {
            let obj = row
                .as_object()
                .with_context(|| format!("linking table row {} is not an object", i + 1))?;
            let field = |name: &str| match obj.get(name) {
                Some(Value::String(s)) if !s.trim().is_empty() => Some(s.clone()),
                Some(Value::Number(n)) => Some(n.to_string()),
                _ => None,
            };
            Ok(LinkRecord {
                central_id: field(&columns.central_id),
                channel_name: field(&columns.channel_name),
                channel_id: field(&columns.channel_id),
            })
        })
        .collect()
}

fn ensure_ok(
    resp: reqwest::blocking::Response,
    label: &str,
) -> Result<reqwest::blocking::Response> {
    if resp.status() == reqwest::StatusCode::UNAUTHORIZED {
        anyhow::bail!(
            "unauthorized (token invalid/expired; set {} or run `skulink config set-remote --token ...`)",
            TOKEN_ENV
        );
    }
    if resp.status() == reqwest::StatusCode::FORBIDDEN {
        anyhow::bail!("forbidden (token lacks access to the linking table export)");
    }
    resp.error_for_status()
        .with_context(|| format!("{} status", label))
}

pub(super) fn with_retries<T>(label: &str, mut f: impl FnMut() -> Result<T>) -> Result<T> {
    const ATTEMPTS: usize = 3;
    let mut last: Option<anyhow::Error> = None;
    for i in 0..ATTEMPTS {
        match f() {
            Ok(v) => return Ok(v),
            Err(err) => {
                if i + 1 < ATTEMPTS {
                    warn!(attempt = i + 1, error = %format!("{:#}", err), "{} failed, retrying", label);
                    std::thread::sleep(Duration::from_millis(200 * (1 << i)));
                }
                last = Some(err);
            }
        }
    }
    Err(last
        .unwrap_or_else(|| anyhow::anyhow!("unknown error"))
        .context(label.to_string()))
}

#[cfg(test)]
#[path = "../tests/source/remote_tests.rs"]
mod tests;
