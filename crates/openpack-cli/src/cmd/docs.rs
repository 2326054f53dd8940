use crate::output::print_json;
use anyhow::Context;
use clap::Subcommand;
use openpack_core::{config::DocsConfig, docgen};
use std::path::Path;

#[derive(Subcommand)]
pub enum DocsSubcommand {
    /// Render the stream configs into the data-stream document
    Generate,

    /// Fail if the document on disk differs from a fresh render
    Check,
}

pub fn run(root: &Path, subcmd: DocsSubcommand, json: bool) -> anyhow::Result<()> {
    let config = DocsConfig::load(root).context("failed to load docs config")?;
    match subcmd {
        DocsSubcommand::Generate => generate(root, &config, json),
        DocsSubcommand::Check => check(root, &config, json),
    }
}

fn generate(root: &Path, config: &DocsConfig, json: bool) -> anyhow::Result<()> {
    let report = docgen::generate(root, config).context("failed to generate docs")?;
    if json {
        print_json(&report)?;
    } else {
        println!(
            "Wrote {} ({} streams, {} bytes)",
            report.output.display(),
            report.streams,
            report.bytes
        );
    }
    Ok(())
}

fn check(root: &Path, config: &DocsConfig, json: bool) -> anyhow::Result<()> {
    let report = docgen::check(root, config).context("failed to render docs")?;
    if json {
        print_json(&report)?;
    } else if report.up_to_date {
        println!("{} is up to date.", report.output.display());
    }
    if !report.up_to_date {
        anyhow::bail!(
            "{} is out of date; run 'openpack docs generate'",
            report.output.display()
        );
    }
    Ok(())
}
