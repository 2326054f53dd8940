//! Data-stream configuration files (`configs/dataset/stream/<name>.yaml`).
//!
//! The schema belongs to the dataset loaders; here a stream config is an
//! opaque mapping handed to the docs template as-is.

use crate::config::DocsConfig;
use crate::error::{OpenPackError, Result};
use crate::paths;
use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StreamConfig(pub Mapping);

impl StreamConfig {
    /// The `name` key, when present and a string.
    pub fn name(&self) -> Option<&str> {
        self.get("name").and_then(Value::as_str)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Read and parse one stream config. Any failure names the path.
    pub fn load(path: &Path) -> Result<Self> {
        tracing::info!(path = %path.display(), "load DataStreamConfig");
        let data = std::fs::read_to_string(path).map_err(|e| OpenPackError::ConfigLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        serde_yaml::from_str(&data).map_err(|e| OpenPackError::ConfigLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }
}

/// Load every configured stream in order. Stops at the first failure.
pub fn load_all(root: &Path, cfg: &DocsConfig) -> Result<Vec<StreamConfig>> {
    if cfg.streams.is_empty() {
        return Err(OpenPackError::EmptyStreamList);
    }
    let mut streams = Vec::with_capacity(cfg.streams.len());
    for name in &cfg.streams {
        let path = paths::stream_config_path(root, &cfg.stream_dir, name, &cfg.stream_ext);
        let stream = StreamConfig::load(&path)?;
        if let Some(declared) = stream.name() {
            if declared != name {
                tracing::warn!(file = %name, declared, "stream name differs from file name");
            }
        }
        streams.push(stream);
    }
    Ok(streams)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_stream(root: &Path, name: &str, body: &str) {
        let dir = root.join(paths::STREAM_CONFIG_DIR);
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(format!("{name}.yaml")), body).unwrap();
    }

    fn cfg(streams: &[&str]) -> DocsConfig {
        DocsConfig {
            streams: streams.iter().map(|s| s.to_string()).collect(),
            ..DocsConfig::default()
        }
    }

    #[test]
    fn loads_streams_in_configured_order() {
        let dir = TempDir::new().unwrap();
        write_stream(dir.path(), "e4-acc", "name: e4-acc\nframe_rate: 32\n");
        write_stream(dir.path(), "atr-qags", "name: atr-qags\nframe_rate: 30\n");

        let streams = load_all(dir.path(), &cfg(&["e4-acc", "atr-qags"])).unwrap();
        let names: Vec<_> = streams.iter().filter_map(|s| s.name()).collect();
        assert_eq!(names, vec!["e4-acc", "atr-qags"]);
        assert_eq!(streams[0].get("frame_rate").and_then(Value::as_u64), Some(32));
    }

    #[test]
    fn missing_stream_names_path() {
        let dir = TempDir::new().unwrap();
        write_stream(dir.path(), "e4-acc", "name: e4-acc\n");

        let err = load_all(dir.path(), &cfg(&["e4-acc", "e4-bvp"])).unwrap_err();
        match err {
            OpenPackError::ConfigLoad { path, .. } => assert!(path.ends_with("e4-bvp.yaml")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn non_mapping_stream_is_rejected() {
        let dir = TempDir::new().unwrap();
        write_stream(dir.path(), "lidar-depth", "- a\n- b\n");
        let err = load_all(dir.path(), &cfg(&["lidar-depth"])).unwrap_err();
        assert!(matches!(err, OpenPackError::ConfigLoad { .. }));
    }

    #[test]
    fn empty_stream_list_fails() {
        let dir = TempDir::new().unwrap();
        let err = load_all(dir.path(), &cfg(&[])).unwrap_err();
        assert!(matches!(err, OpenPackError::EmptyStreamList));
    }
}
