//! Safelist CLI
//!
//! Builds a whitelist from presets and JSON feature files and prints the
//! merged policy.
//!
//! Usage:
//!   safelist links tables            Merge two presets and print them
//!   safelist css -f extra.json       Add a feature file on top of a preset
//!   safelist links --json            Print the policy as JSON
//!   safelist --list                  List the available presets

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use owo_colors::OwoColorize;
use safelist::{Feature, Preset, Whitelist, load_feature};
use strum::IntoEnumIterator;

/// Print the merged whitelist built from presets and feature files.
#[derive(Parser, Debug)]
#[command(name = "safelist", version, about)]
struct Cli {
    /// Presets to merge (css, document, links, tables)
    presets: Vec<Preset>,

    /// JSON feature files to merge after the presets
    #[arg(short, long = "feature", value_name = "FILE")]
    features: Vec<PathBuf>,

    /// Print the merged policy as JSON
    #[arg(short, long)]
    json: bool,

    /// List the available presets and exit
    #[arg(short, long)]
    list: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.list {
        for preset in Preset::iter() {
            println!("{:<10} {}", preset.green(), preset.description());
        }
        return Ok(());
    }

    let mut whitelist = Whitelist::from_presets(cli.presets);
    for path in &cli.features {
        let feature = load_feature(path)
            .with_context(|| format!("loading feature file '{}'", path.display()))?;
        let _ = whitelist.add_feature(&feature);
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&whitelist)?);
    } else {
        print_policy(whitelist.as_feature());
    }

    Ok(())
}

fn print_policy(policy: &Feature) {
    if policy.is_empty() {
        println!("{}", "(empty whitelist)".dimmed());
        return;
    }

    println!("{}", "=== Tags ===".bold());
    println!("  {}", join(policy.tags()));

    println!("\n{}", "=== Attributes ===".bold());
    for (tag, keys) in policy.attributes() {
        println!("  {:<10} {}", tag.cyan(), join(keys));
    }

    println!("\n{}", "=== Enforced ===".bold());
    for (tag, attrs) in policy.enforced() {
        for (key, value) in attrs {
            println!("  {:<10} {key}={}", tag.cyan(), value.yellow());
        }
    }

    println!("\n{}", "=== Protocols ===".bold());
    for (tag, attrs) in policy.protocols() {
        for (key, schemes) in attrs {
            println!("  {:<10} {key}: {}", tag.cyan(), join(schemes));
        }
    }
}

fn join<'a>(items: impl IntoIterator<Item = &'a String>) -> String {
    items
        .into_iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
