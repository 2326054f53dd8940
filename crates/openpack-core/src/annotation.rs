use crate::activity::ActSet;
use crate::error::{OpenPackError, Result};
use crate::taxonomy;
use regex::Regex;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;
use std::sync::OnceLock;

// ---------------------------------------------------------------------------
// TaxonomyKey
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TaxonomyKey {
    pub name: String,
    pub version: String,
}

impl fmt::Display for TaxonomyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.version.is_empty() {
            f.write_str(&self.name)
        } else {
            write!(f, "{}@{}", self.name, self.version)
        }
    }
}

// ---------------------------------------------------------------------------
// AnnotPath
// ---------------------------------------------------------------------------

/// Location of per-session annotation files. Both parts may hold
/// `${dotted.key}` placeholders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnnotPath {
    pub dir: String,
    pub fname: String,
}

// ---------------------------------------------------------------------------
// AnnotConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnnotConfig {
    pub name: String,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<AnnotPath>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classes: Option<&'static ActSet>,
}

impl AnnotConfig {
    pub fn key(&self) -> TaxonomyKey {
        TaxonomyKey {
            name: self.name.clone(),
            version: self.version.clone(),
        }
    }

    /// The activity set this annotation is labelled with.
    pub fn act_set(&self) -> Result<&'static ActSet> {
        self.classes
            .ok_or_else(|| OpenPackError::TaxonomyNotFound(self.key().to_string()))
    }

    /// Substitute placeholders in `path` and join `dir` with `fname`.
    pub fn resolve_path(&self, vars: &HashMap<String, String>) -> Result<PathBuf> {
        let path = self
            .path
            .as_ref()
            .ok_or_else(|| OpenPackError::NoAnnotationPath(self.name.clone()))?;
        let dir = interpolate(&path.dir, vars)?;
        let fname = interpolate(&path.fname, vars)?;
        Ok(PathBuf::from(dir).join(fname))
    }
}

static PLACEHOLDER_RE: OnceLock<Regex> = OnceLock::new();

fn placeholder_re() -> &'static Regex {
    PLACEHOLDER_RE.get_or_init(|| Regex::new(r"\$\{([A-Za-z0-9_.\-]+)\}").unwrap())
}

/// Replace every `${key}` in `template` with `vars[key]`.
pub fn interpolate(template: &str, vars: &HashMap<String, String>) -> Result<String> {
    if let Some(missing) = placeholder_re()
        .captures_iter(template)
        .map(|c| c[1].to_string())
        .find(|k| !vars.contains_key(k))
    {
        return Err(OpenPackError::UnresolvedPlaceholder(missing));
    }
    let out = placeholder_re().replace_all(template, |c: &regex::Captures| vars[&c[1]].clone());
    Ok(out.into_owned())
}

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

static ANNOTATIONS: OnceLock<Vec<AnnotConfig>> = OnceLock::new();

/// All annotation configs shipped with the dataset, in registration order.
pub fn annotations() -> &'static [AnnotConfig] {
    ANNOTATIONS.get_or_init(|| {
        vec![
            AnnotConfig {
                name: "openpack-operations".to_string(),
                version: "v3.2.2".to_string(),
                path: None,
                classes: Some(taxonomy::openpack_operations()),
            },
            AnnotConfig {
                name: "openpack-actions".to_string(),
                version: "v3.2.2".to_string(),
                path: None,
                classes: Some(taxonomy::openpack_actions()),
            },
            AnnotConfig {
                name: "activity-1s".to_string(),
                version: String::new(),
                path: Some(AnnotPath {
                    dir: "${path.openpack.rootdir}/${user.name}/annotation/activity-1s/"
                        .to_string(),
                    fname: "${session}.csv".to_string(),
                }),
                classes: Some(taxonomy::openpack_workprocess_classes()),
            },
        ]
    })
}

pub fn find(name: &str, version: &str) -> Result<&'static AnnotConfig> {
    annotations()
        .iter()
        .find(|a| a.name == name && a.version == version)
        .ok_or_else(|| {
            OpenPackError::TaxonomyNotFound(
                TaxonomyKey {
                    name: name.to_string(),
                    version: version.to_string(),
                }
                .to_string(),
            )
        })
}

/// Look up by name alone. When several versions share a name the last
/// registered one wins.
pub fn find_by_name(name: &str) -> Result<&'static AnnotConfig> {
    annotations()
        .iter()
        .rev()
        .find(|a| a.name == name)
        .ok_or_else(|| OpenPackError::TaxonomyNotFound(name.to_string()))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn registry_keys_are_unique() {
        let mut keys: Vec<TaxonomyKey> = annotations().iter().map(|a| a.key()).collect();
        let n = keys.len();
        keys.sort_by(|a, b| a.to_string().cmp(&b.to_string()));
        keys.dedup();
        assert_eq!(keys.len(), n);
    }

    #[test]
    fn find_by_name_and_version() {
        let ops = find("openpack-operations", "v3.2.2").unwrap();
        assert_eq!(ops.act_set().unwrap().len(), 11);
        assert!(find("openpack-operations", "v1.0.0").is_err());
    }

    #[test]
    fn find_by_name_only() {
        let actions = find_by_name("openpack-actions").unwrap();
        assert_eq!(actions.version, "v3.2.2");
        let err = find_by_name("nope").unwrap_err();
        assert!(matches!(err, OpenPackError::TaxonomyNotFound(ref k) if k == "nope"));
    }

    #[test]
    fn key_display_omits_empty_version() {
        assert_eq!(find_by_name("activity-1s").unwrap().key().to_string(), "activity-1s");
        assert_eq!(
            find_by_name("openpack-actions").unwrap().key().to_string(),
            "openpack-actions@v3.2.2"
        );
    }

    #[test]
    fn resolve_activity_1s_path() {
        let cfg = find_by_name("activity-1s").unwrap();
        let path = cfg
            .resolve_path(&vars(&[
                ("path.openpack.rootdir", "/data/openpack"),
                ("user.name", "U0102"),
                ("session", "S0300"),
            ]))
            .unwrap();
        assert_eq!(
            path,
            PathBuf::from("/data/openpack/U0102/annotation/activity-1s/S0300.csv")
        );
    }

    #[test]
    fn resolve_path_reports_missing_placeholder() {
        let cfg = find_by_name("activity-1s").unwrap();
        let err = cfg
            .resolve_path(&vars(&[("path.openpack.rootdir", "/data")]))
            .unwrap_err();
        assert!(matches!(err, OpenPackError::UnresolvedPlaceholder(ref k) if k == "user.name"));
    }

    #[test]
    fn resolve_path_without_template_fails() {
        let cfg = find_by_name("openpack-operations").unwrap();
        let err = cfg.resolve_path(&HashMap::new()).unwrap_err();
        assert!(matches!(err, OpenPackError::NoAnnotationPath(_)));
    }

    #[test]
    fn interpolate_leaves_plain_text() {
        assert_eq!(interpolate("plain/dir", &HashMap::new()).unwrap(), "plain/dir");
    }
}
