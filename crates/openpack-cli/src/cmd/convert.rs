use crate::cmd::taxonomy::lookup;
use crate::output::{join_values, print_json};
use anyhow::Context;
use clap::ValueEnum;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Space {
    /// Class ID → positional index
    Index,
    /// Positional index → class ID
    Id,
}

fn parse_all<T>(values: &[String]) -> anyhow::Result<Vec<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    values
        .iter()
        .map(|v| {
            v.trim()
                .parse::<T>()
                .with_context(|| format!("invalid value '{v}'"))
        })
        .collect()
}

pub fn run(
    taxonomy: &str,
    version: Option<&str>,
    to: Space,
    values: &[String],
    json: bool,
) -> anyhow::Result<()> {
    let annot = lookup(taxonomy, version)?;
    let set = annot.act_set()?;

    let output: Vec<u64> = match to {
        Space::Index => {
            let ids: Vec<u32> = parse_all(values)?;
            set.convert_id_to_index(&ids)
                .with_context(|| format!("cannot translate IDs with {}", annot.key()))?
                .into_iter()
                .map(|i| i as u64)
                .collect()
        }
        Space::Id => {
            let index: Vec<usize> = parse_all(values)?;
            set.convert_index_to_id(&index)
                .with_context(|| format!("cannot translate indices with {}", annot.key()))?
                .into_iter()
                .map(u64::from)
                .collect()
        }
    };

    if json {
        print_json(&output)?;
    } else {
        println!("{}", join_values(&output));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_all_accepts_whitespace() {
        let v: Vec<u32> = parse_all(&[" 100".to_string(), "8100 ".to_string()]).unwrap();
        assert_eq!(v, vec![100, 8100]);
    }

    #[test]
    fn parse_all_rejects_negative_index() {
        assert!(parse_all::<usize>(&["-1".to_string()]).is_err());
    }
}
