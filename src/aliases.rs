//! Channel name normalization.
//!
//! Users type channel names however they like ("amazon.de", " EBAY ",
//! "Amazon UK"). The alias table maps the normalized form of every accepted
//! spelling to the canonical channel name used as the index key.

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use crate::error::LookupError;

/// Informal names for one store.
#[derive(Clone, Copy, Debug)]
pub struct AliasGroup {
    /// Channel name as recorded in the linking table.
    pub canonical: &'static str,
    /// Label for channel pickers.
    pub display: Option<&'static str>,
    pub aliases: &'static [&'static str],
}

pub const ALIAS_GROUPS: &[AliasGroup] = &[
    AliasGroup {
        canonical: "EBAY0",
        display: Some("eBay"),
        aliases: &["ebay"],
    },
    AliasGroup {
        canonical: "Stc Stores",
        display: Some("Amazon UK"),
        aliases: &["amazon", "amazonuk", "amazon uk", "amazon.co.uk"],
    },
    AliasGroup {
        canonical: "STC Stores France",
        display: Some("Amazon FR"),
        aliases: &["amazon france", "amazonfr", "amazon fr", "amazon.fr"],
    },
    AliasGroup {
        canonical: "STC Stores Germany",
        display: Some("Amazon DE"),
        aliases: &["amazon germany", "amazonde", "amazon de", "amazon.de"],
    },
    AliasGroup {
        canonical: "STC Stores Spain",
        display: Some("Amazon ES"),
        aliases: &["amazon spain", "amazones", "amazon es", "amazon.es"],
    },
    AliasGroup {
        canonical: "STC Stores Italy",
        display: None,
        aliases: &["amazon italy", "amazonit", "amazon it", "amazon.it"],
    },
    AliasGroup {
        canonical: "STC Stores USA",
        display: Some("Amazon USA"),
        aliases: &[
            "amazon us",
            "amazonus",
            "amazon.com",
            "amazon usa",
            "amazonusa",
            "amazon america",
            "amazonamerica",
        ],
    },
    AliasGroup {
        canonical: "STC Stores Canada",
        display: None,
        aliases: &["amazon canada", "amazonca", "amazon ca", "amazon.ca"],
    },
    AliasGroup {
        canonical: "STC Stores Mexico",
        display: None,
        aliases: &[
            "amazon mexico",
            "amazonmx",
            "amazon mx",
            "amazon.mx",
            "amazon.com.mx",
        ],
    },
    AliasGroup {
        canonical: "stcstores.co.uk (shopify)",
        display: Some("Shopify"),
        aliases: &["shopify", "stcstores.co.uk", "stcstores.com"],
    },
];

pub fn normalize_channel(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Normalized spelling -> canonical channel name.
#[derive(Clone, Debug, Default)]
pub struct ChannelAliases {
    channels: BTreeSet<String>,
    table: BTreeMap<String, String>,
    display: BTreeMap<String, &'static str>,
}

impl ChannelAliases {
    pub fn build<'a>(channels: impl IntoIterator<Item = &'a str>) -> Self {
        Self::with_groups(channels, ALIAS_GROUPS)
    }

    /// Registers every channel under its own normalized name, then each
    /// group whose canonical channel is present.
    ///
    /// Group membership is matched case-insensitively and aliases point at
    /// the spelling found in the data. An alias never replaces an existing
    /// entry, so canonical names always resolve to themselves.
    pub fn with_groups<'a>(
        channels: impl IntoIterator<Item = &'a str>,
        groups: &[AliasGroup],
    ) -> Self {
        let channels: Vec<&str> = channels.into_iter().collect();
        let mut table = BTreeMap::new();
        for channel in &channels {
            table
                .entry(normalize_channel(channel))
                .or_insert_with(|| channel.to_string());
        }

        let mut display = BTreeMap::new();
        for group in groups {
            let Some(canonical) = find_channel(&channels, group.canonical) else {
                debug!(channel = group.canonical, "alias group skipped, channel not in data");
                continue;
            };
            for alias in group.aliases {
                table
                    .entry(normalize_channel(alias))
                    .or_insert_with(|| canonical.to_string());
            }
            if let Some(label) = group.display {
                display.entry(canonical.to_string()).or_insert(label);
            }
            debug!(
                channel = canonical,
                aliases = group.aliases.len(),
                "alias group registered"
            );
        }

        Self {
            channels: channels.iter().map(|c| c.to_string()).collect(),
            table,
            display,
        }
    }

    /// Canonical channel for `input`.
    ///
    /// An exact canonical name always resolves to itself, even when another
    /// channel shares its normalized form.
    pub fn resolve(&self, input: &str) -> Result<&str, LookupError> {
        if let Some(canonical) = self.channels.get(input) {
            return Ok(canonical.as_str());
        }
        self.table
            .get(&normalize_channel(input))
            .map(String::as_str)
            .ok_or_else(|| LookupError::UnknownChannel(input.to_string()))
    }

    pub fn display_name(&self, canonical: &str) -> Option<&'static str> {
        self.display.get(canonical).copied()
    }

    /// `(normalized alias, canonical channel)` pairs, sorted by alias.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.table.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

fn find_channel<'a>(channels: &[&'a str], wanted: &str) -> Option<&'a str> {
    channels
        .iter()
        .find(|c| **c == wanted)
        .or_else(|| channels.iter().find(|c| c.eq_ignore_ascii_case(wanted)))
        .copied()
}

#[cfg(test)]
#[path = "tests/aliases_tests.rs"]
mod tests;
