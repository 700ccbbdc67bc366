use anyhow::Result;
use serde::Serialize;
use tracing::info;

use crate::aliases::ChannelAliases;
use crate::error::LookupError;
use crate::index::{ReverseIndex, SkuIndex};
use crate::model::{LinkRecord, LinkRow};
use crate::source::LinkingSource;

/// Bidirectional SKU lookups over one snapshot of the linking table.
///
/// Immutable once built; load a new snapshot by building a new resolver.
#[derive(Clone, Debug, Default)]
pub struct Resolver {
    index: SkuIndex,
    reverse: ReverseIndex,
    aliases: ChannelAliases,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct IndexStats {
    pub rows: usize,
    pub central_ids: usize,
    pub channels: usize,
    pub links: usize,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChannelChoice {
    pub display: String,
    pub canonical: String,
}

impl Resolver {
    pub fn from_rows(rows: impl IntoIterator<Item = LinkRow>) -> Self {
        let rows: Vec<LinkRow> = rows.into_iter().collect();
        let index = SkuIndex::build(&rows);
        let reverse = ReverseIndex::build(&index);
        let aliases = ChannelAliases::build(index.channels());
        info!(
            rows = index.row_count(),
            central_ids = index.len(),
            channels = index.channel_count(),
            aliases = aliases.len(),
            "built sku index"
        );
        Self {
            index,
            reverse,
            aliases,
        }
    }

    /// Validates every record before building anything; the first record
    /// with a missing field aborts construction.
    pub fn from_records(
        records: impl IntoIterator<Item = LinkRecord>,
    ) -> Result<Self, LookupError> {
        let rows = records
            .into_iter()
            .enumerate()
            .map(|(i, record)| record.into_row(i + 1))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_rows(rows))
    }

    pub fn load(source: &dyn LinkingSource) -> Result<Self> {
        let records = source.load()?;
        Ok(Self::from_records(records)?)
    }

    pub fn canonical_channel(&self, channel: &str) -> Result<&str, LookupError> {
        self.aliases.resolve(channel)
    }

    /// Channel SKUs linked to `central_id` on `channel` (name or alias).
    pub fn channel_ids_for(&self, central_id: &str, channel: &str) -> Result<&[String], LookupError> {
        let canonical = self.aliases.resolve(channel)?;
        let links = self
            .index
            .links(central_id)
            .ok_or_else(|| LookupError::UnknownCentralId(central_id.to_string()))?;
        Ok(links.get(canonical).map(Vec::as_slice).unwrap_or_default())
    }

    /// Central SKUs linked to `channel_id`, searching one channel or all.
    pub fn central_ids_for(
        &self,
        channel_id: &str,
        channel: Option<&str>,
    ) -> Result<Vec<String>, LookupError> {
        let canonical = channel.map(|c| self.aliases.resolve(c)).transpose()?;
        Ok(self.reverse.central_ids(channel_id, canonical))
    }

    /// Lenient existence check: an unknown central SKU is simply not linked.
    pub fn is_linked(&self, central_id: &str, channel: &str) -> Result<bool, LookupError> {
        let canonical = self.aliases.resolve(channel)?;
        Ok(self
            .index
            .channel_ids(central_id, canonical)
            .is_some_and(|ids| !ids.is_empty()))
    }

    pub fn channels(&self) -> impl Iterator<Item = &str> {
        self.index.channels()
    }

    pub fn central_ids(&self) -> impl Iterator<Item = &str> {
        self.index.central_ids()
    }

    /// Channels present in the data with their picker labels, sorted by label.
    pub fn channel_choices(&self) -> Vec<ChannelChoice> {
        let mut out: Vec<ChannelChoice> = self
            .index
            .channels()
            .map(|canonical| ChannelChoice {
                display: self
                    .aliases
                    .display_name(canonical)
                    .unwrap_or(canonical)
                    .to_string(),
                canonical: canonical.to_string(),
            })
            .collect();
        out.sort_by(|a, b| a.display.cmp(&b.display));
        out
    }

    pub fn aliases(&self) -> &ChannelAliases {
        &self.aliases
    }

    pub fn index(&self) -> &SkuIndex {
        &self.index
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats {
            rows: self.index.row_count(),
            central_ids: self.index.len(),
            channels: self.index.channel_count(),
            links: self.index.link_count(),
        }
    }
}

#[cfg(test)]
#[path = "tests/resolver_tests.rs"]
mod tests;
