use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Directory constants
// ---------------------------------------------------------------------------

pub const CONFIGS_DIR: &str = "configs";
pub const STREAM_CONFIG_DIR: &str = "configs/dataset/stream";
pub const TEMPLATES_DIR: &str = "tools/docs/templates";

pub const DOCS_CONFIG_FILE: &str = "configs/docs.yaml";
pub const DATA_STREAM_TEMPLATE: &str = "DATA_STREAM.md.jinja";
pub const DATA_STREAM_DOC: &str = "docs/DATA_STREAM.md";

pub const STREAM_CONFIG_EXT: &str = "yaml";

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn docs_config_path(root: &Path) -> PathBuf {
    root.join(DOCS_CONFIG_FILE)
}

/// `<root>/<dir>/<name>.<ext>`
pub fn stream_config_path(root: &Path, dir: &str, name: &str, ext: &str) -> PathBuf {
    root.join(dir).join(format!("{name}.{ext}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stream_config_path_joins_name_and_extension() {
        let p = stream_config_path(Path::new("/data"), STREAM_CONFIG_DIR, "e4-acc", "yaml");
        assert_eq!(p, PathBuf::from("/data/configs/dataset/stream/e4-acc.yaml"));
    }

    #[test]
    fn docs_config_lives_under_configs() {
        let p = docs_config_path(Path::new("/repo"));
        assert!(p.starts_with(Path::new("/repo").join(CONFIGS_DIR)));
    }
}
