use std::collections::BTreeMap;

use super::source_select::load_resolver;
use super::*;
use crate::cli_commands::lookup::{CentralSkusArgs, ChannelSkusArgs, LinkedArgs, ListArgs};

pub(super) fn handle_channel_skus_command(args: ChannelSkusArgs) -> Result<()> {
    let resolver = load_resolver(&args.source)?;
    let ids = resolver.channel_ids_for(&args.central_id, &args.channel)?;
    print_matches(ids, args.first, args.json)
}

pub(super) fn handle_central_skus_command(args: CentralSkusArgs) -> Result<()> {
    let resolver = load_resolver(&args.source)?;
    let ids = resolver.central_ids_for(&args.channel_id, args.channel.as_deref())?;
    print_matches(&ids, args.first, args.json)
}

pub(super) fn handle_linked_command(args: LinkedArgs) -> Result<()> {
    let resolver = load_resolver(&args.source)?;
    let linked = resolver.is_linked(&args.central_id, &args.channel)?;
    println!("{}", linked);
    Ok(())
}

pub(super) fn handle_channels_command(args: ListArgs) -> Result<()> {
    let resolver = load_resolver(&args.source)?;
    let choices = resolver.channel_choices();
    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&choices).context("serialize channels json")?
        );
        return Ok(());
    }
    for choice in choices {
        if choice.display == choice.canonical {
            println!("{}", choice.canonical);
        } else {
            println!("{} ({})", choice.canonical, choice.display);
        }
    }
    Ok(())
}

pub(super) fn handle_aliases_command(args: ListArgs) -> Result<()> {
    let resolver = load_resolver(&args.source)?;
    if args.json {
        let table: BTreeMap<&str, &str> = resolver.aliases().entries().collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&table).context("serialize aliases json")?
        );
        return Ok(());
    }
    for (alias, canonical) in resolver.aliases().entries() {
        println!("{} -> {}", alias, canonical);
    }
    Ok(())
}

pub(super) fn handle_stats_command(args: ListArgs) -> Result<()> {
    let resolver = load_resolver(&args.source)?;
    let stats = resolver.stats();
    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&stats).context("serialize stats json")?
        );
    } else {
        println!("rows: {}", stats.rows);
        println!("central_skus: {}", stats.central_ids);
        println!("channels: {}", stats.channels);
        println!("links: {}", stats.links);
    }
    Ok(())
}

fn print_matches(ids: &[String], first: bool, json: bool) -> Result<()> {
    let shown = if first {
        match ids.first() {
            Some(_) => &ids[..1],
            None => anyhow::bail!("no match"),
        }
    } else {
        ids
    };

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(shown).context("serialize matches json")?
        );
    } else {
        for id in shown {
            println!("{}", id);
        }
    }
    Ok(())
}
