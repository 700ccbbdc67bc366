use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::LookupError;

/// One link between a central SKU and a channel SKU.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LinkRow {
    pub central_id: String,
    pub channel_name: String,
    pub channel_id: String,
}

impl LinkRow {
    pub fn new(
        central_id: impl Into<String>,
        channel_name: impl Into<String>,
        channel_id: impl Into<String>,
    ) -> Self {
        Self {
            central_id: central_id.into(),
            channel_name: channel_name.into(),
            channel_id: channel_id.into(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LinkField {
    CentralId,
    ChannelName,
    ChannelId,
}

impl LinkField {
    pub fn as_str(&self) -> &'static str {
        match self {
            LinkField::CentralId => "central_id",
            LinkField::ChannelName => "channel_name",
            LinkField::ChannelId => "channel_id",
        }
    }
}

impl fmt::Display for LinkField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A row as handed over by a linking table source, before validation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LinkRecord {
    pub central_id: Option<String>,
    pub channel_name: Option<String>,
    pub channel_id: Option<String>,
}

impl LinkRecord {
    /// Validates the record; `position` is its 1-based place in the source.
    pub fn into_row(self, position: usize) -> Result<LinkRow, LookupError> {
        let missing = |field| LookupError::MalformedRow { position, field };
        Ok(LinkRow {
            central_id: self.central_id.ok_or_else(|| missing(LinkField::CentralId))?,
            channel_name: self
                .channel_name
                .ok_or_else(|| missing(LinkField::ChannelName))?,
            channel_id: self.channel_id.ok_or_else(|| missing(LinkField::ChannelId))?,
        })
    }
}

impl From<LinkRow> for LinkRecord {
    fn from(row: LinkRow) -> Self {
        Self {
            central_id: Some(row.central_id),
            channel_name: Some(row.channel_name),
            channel_id: Some(row.channel_id),
        }
    }
}

#[cfg(test)]
#[path = "../tests/model/row_tests.rs"]
mod tests;
