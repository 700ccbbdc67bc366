//! Central SKU index built from a linking table.
//!
//! Every central SKU owns its own `channel -> channel SKUs` map holding an
//! entry for each channel seen anywhere in the table, so a lookup for a known
//! central SKU and a known channel always finds a (possibly empty) list.

use std::collections::{BTreeMap, BTreeSet};

use crate::model::LinkRow;

mod reverse;
pub use self::reverse::ReverseIndex;

/// Channel SKUs of one central SKU, keyed by canonical channel name.
pub type ChannelLinks = BTreeMap<String, Vec<String>>;

#[derive(Clone, Debug, Default)]
pub struct SkuIndex {
    channels: BTreeSet<String>,
    entries: BTreeMap<String, ChannelLinks>,
    rows: usize,
}

impl SkuIndex {
    pub fn build(rows: &[LinkRow]) -> Self {
        let channels: BTreeSet<String> = rows.iter().map(|r| r.channel_name.clone()).collect();

        let mut entries: BTreeMap<String, ChannelLinks> = BTreeMap::new();
        for row in rows {
            let links = entries
                .entry(row.central_id.clone())
                .or_insert_with(|| empty_links(&channels));
            links
                .entry(row.channel_name.clone())
                .or_default()
                .push(row.channel_id.clone());
        }

        Self {
            channels,
            entries,
            rows: rows.len(),
        }
    }

    pub fn channels(&self) -> impl Iterator<Item = &str> {
        self.channels.iter().map(String::as_str)
    }

    pub fn has_channel(&self, canonical: &str) -> bool {
        self.channels.contains(canonical)
    }

    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }

    pub fn central_ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn contains(&self, central_id: &str) -> bool {
        self.entries.contains_key(central_id)
    }

    pub fn links(&self, central_id: &str) -> Option<&ChannelLinks> {
        self.entries.get(central_id)
    }

    pub fn channel_ids(&self, central_id: &str, canonical: &str) -> Option<&[String]> {
        self.entries
            .get(central_id)
            .and_then(|links| links.get(canonical))
            .map(Vec::as_slice)
    }

    pub(crate) fn entries(&self) -> impl Iterator<Item = (&str, &ChannelLinks)> {
        self.entries.iter().map(|(id, links)| (id.as_str(), links))
    }

    /// Number of distinct central SKUs.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of rows the index was built from.
    pub fn row_count(&self) -> usize {
        self.rows
    }

    /// Total channel SKUs across all central SKUs, duplicates included.
    pub fn link_count(&self) -> usize {
        self.entries
            .values()
            .flat_map(|links| links.values())
            .map(Vec::len)
            .sum()
    }

    /// Linear scan for the central SKUs linked to `channel_id`.
    ///
    /// Searches only `canonical` when given, otherwise every channel. Each
    /// central SKU appears once, in index order.
    pub fn scan_central_ids(&self, channel_id: &str, canonical: Option<&str>) -> Vec<String> {
        let mut out = Vec::new();
        for (central_id, links) in &self.entries {
            let found = match canonical {
                Some(channel) => links
                    .get(channel)
                    .is_some_and(|ids| ids.iter().any(|id| id == channel_id)),
                None => links
                    .values()
                    .any(|ids| ids.iter().any(|id| id == channel_id)),
            };
            if found {
                out.push(central_id.clone());
            }
        }
        out
    }
}

fn empty_links(channels: &BTreeSet<String>) -> ChannelLinks {
    channels
        .iter()
        .map(|channel| (channel.clone(), Vec::new()))
        .collect()
}

#[cfg(test)]
#[path = "tests/index_tests.rs"]
mod tests;
