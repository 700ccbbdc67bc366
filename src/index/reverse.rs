use std::collections::{BTreeMap, HashMap};

use super::SkuIndex;

/// Inverted view of a [`SkuIndex`]: canonical channel -> channel SKU ->
/// central SKUs.
///
/// Answers the same questions as [`SkuIndex::scan_central_ids`] without
/// walking every central SKU per query.
#[derive(Clone, Debug, Default)]
pub struct ReverseIndex {
    by_channel: BTreeMap<String, HashMap<String, Vec<String>>>,
}

impl ReverseIndex {
    pub fn build(index: &SkuIndex) -> Self {
        let mut by_channel: BTreeMap<String, HashMap<String, Vec<String>>> = BTreeMap::new();
        for (central_id, links) in index.entries() {
            for (channel, channel_ids) in links {
                let ids = by_channel.entry(channel.clone()).or_default();
                for channel_id in channel_ids {
                    let centrals = ids.entry(channel_id.clone()).or_default();
                    // Central SKUs arrive in index order, so a repeat is always the last entry.
                    if centrals.last().map(String::as_str) != Some(central_id) {
                        centrals.push(central_id.to_string());
                    }
                }
            }
        }
        Self { by_channel }
    }

    pub fn central_ids(&self, channel_id: &str, canonical: Option<&str>) -> Vec<String> {
        match canonical {
            Some(channel) => self
                .by_channel
                .get(channel)
                .and_then(|ids| ids.get(channel_id))
                .cloned()
                .unwrap_or_default(),
            None => {
                let mut out: Vec<String> = self
                    .by_channel
                    .values()
                    .filter_map(|ids| ids.get(channel_id))
                    .flatten()
                    .cloned()
                    .collect();
                out.sort();
                out.dedup();
                out
            }
        }
    }
}

#[cfg(test)]
#[path = "../tests/index/reverse_tests.rs"]
mod tests;
