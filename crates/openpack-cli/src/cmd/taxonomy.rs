use crate::output::{join_values, print_json, print_table};
use anyhow::Context;
use clap::Subcommand;
use openpack_core::activity::IgnoreSelection;
use openpack_core::annotation::{self, AnnotConfig};

#[derive(Subcommand)]
pub enum TaxonomySubcommand {
    /// List registered annotation configs
    List,

    /// Show the classes of one taxonomy
    #[command(disable_version_flag = true)]
    Show {
        /// Annotation name, e.g. openpack-actions
        name: String,
        /// Annotation version (default: latest registered)
        #[arg(long)]
        version: Option<String>,
    },
}

pub fn run(subcmd: TaxonomySubcommand, json: bool) -> anyhow::Result<()> {
    match subcmd {
        TaxonomySubcommand::List => list(json),
        TaxonomySubcommand::Show { name, version } => show(&name, version.as_deref(), json),
    }
}

/// Resolve an annotation config by name and optional version.
pub fn lookup(name: &str, version: Option<&str>) -> anyhow::Result<&'static AnnotConfig> {
    let found = match version {
        Some(v) => annotation::find(name, v),
        None => annotation::find_by_name(name),
    };
    found.with_context(|| format!("no taxonomy registered as '{name}'"))
}

fn list(json: bool) -> anyhow::Result<()> {
    let annotations = annotation::annotations();
    if json {
        #[derive(serde::Serialize)]
        struct Entry<'a> {
            name: &'a str,
            version: &'a str,
            classes: usize,
            path: Option<String>,
        }

        let entries: Vec<Entry> = annotations
            .iter()
            .map(|a| Entry {
                name: &a.name,
                version: &a.version,
                classes: a.classes.map(|c| c.len()).unwrap_or(0),
                path: a.path.as_ref().map(|p| format!("{}{}", p.dir, p.fname)),
            })
            .collect();
        return print_json(&entries);
    }

    let rows = annotations
        .iter()
        .map(|a| {
            vec![
                a.name.clone(),
                if a.version.is_empty() {
                    "-".to_string()
                } else {
                    a.version.clone()
                },
                a.classes.map(|c| c.len().to_string()).unwrap_or_default(),
            ]
        })
        .collect();
    print_table(&["NAME", "VERSION", "CLASSES"], rows);
    Ok(())
}

fn show(name: &str, version: Option<&str>, json: bool) -> anyhow::Result<()> {
    let annot = lookup(name, version)?;
    let set = annot.act_set()?;

    if json {
        let value = serde_json::json!({
            "name": annot.name,
            "version": annot.version,
            "classes": set.classes(),
            "ignore_index": set.get_ignore_index(),
            "ignore_id": set.get_ignore_id(),
        });
        return print_json(&value);
    }

    println!("{} ({} classes)", annot.key(), set.len());
    println!();
    let rows = set
        .iter()
        .enumerate()
        .map(|(i, c)| {
            vec![
                i.to_string(),
                c.id.to_string(),
                c.name.clone(),
                if c.is_ignore { "yes" } else { "" }.to_string(),
            ]
        })
        .collect();
    print_table(&["INDEX", "ID", "NAME", "IGNORE"], rows);
    println!();
    println!("Ignore index: {}", describe(&set.get_ignore_index()));
    println!("Ignore ID:    {}", describe(&set.get_ignore_id()));
    Ok(())
}

fn describe<T: Copy + ToString>(sel: &IgnoreSelection<T>) -> String {
    match sel {
        IgnoreSelection::One(v) => v.to_string(),
        IgnoreSelection::Many(vs) => join_values(vs),
    }
}
