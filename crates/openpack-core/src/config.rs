use crate::error::Result;
use crate::paths;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

// ---------------------------------------------------------------------------
// ConfigWarning / WarnLevel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigWarning {
    pub level: WarnLevel,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarnLevel {
    Warning,
    Error,
}

// ---------------------------------------------------------------------------
// DocsConfig
// ---------------------------------------------------------------------------

/// Data streams documented in `docs/DATA_STREAM.md`, in output order.
pub const TARGET_DATA_STREAMS: &[&str] = &[
    "atr-qags",
    "e4-acc",
    "e4-bvp",
    "e4-eda",
    "e4-temp",
    "kinect-2d-kpt",
    "kinect-3d-kpt",
    "kinect-depth2",
    "rs02-depth",
    "lidar-depth",
    "system-ht-original",
    "system-order-sheet",
    "system-printer",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocsConfig {
    #[serde(default = "default_streams")]
    pub streams: Vec<String>,
    #[serde(default = "default_stream_dir")]
    pub stream_dir: String,
    #[serde(default = "default_stream_ext")]
    pub stream_ext: String,
    #[serde(default = "default_template_dir")]
    pub template_dir: String,
    #[serde(default = "default_template")]
    pub template: String,
    #[serde(default = "default_output")]
    pub output: String,
}

fn default_streams() -> Vec<String> {
    TARGET_DATA_STREAMS.iter().map(|s| s.to_string()).collect()
}

fn default_stream_dir() -> String {
    paths::STREAM_CONFIG_DIR.to_string()
}

fn default_stream_ext() -> String {
    paths::STREAM_CONFIG_EXT.to_string()
}

fn default_template_dir() -> String {
    paths::TEMPLATES_DIR.to_string()
}

fn default_template() -> String {
    paths::DATA_STREAM_TEMPLATE.to_string()
}

fn default_output() -> String {
    paths::DATA_STREAM_DOC.to_string()
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            streams: default_streams(),
            stream_dir: default_stream_dir(),
            stream_ext: default_stream_ext(),
            template_dir: default_template_dir(),
            template: default_template(),
            output: default_output(),
        }
    }
}

impl DocsConfig {
    /// Load `configs/docs.yaml`, falling back to defaults when it is absent.
    pub fn load(root: &Path) -> Result<Self> {
        let path = paths::docs_config_path(root);
        match crate::io::read_if_exists(&path)? {
            Some(data) => {
                tracing::debug!(path = %path.display(), "loading docs config");
                Ok(serde_yaml::from_str(&data)?)
            }
            None => Ok(Self::default()),
        }
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        let path = paths::docs_config_path(root);
        let data = serde_yaml::to_string(self)?;
        crate::io::atomic_write(&path, data.as_bytes())
    }

    // -----------------------------------------------------------------------
    // Validation
    // -----------------------------------------------------------------------

    pub fn validate(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();

        if self.streams.is_empty() {
            warnings.push(ConfigWarning {
                level: WarnLevel::Error,
                message: "no data streams listed in 'streams'".to_string(),
            });
        }

        let mut seen = HashSet::new();
        for name in &self.streams {
            if !seen.insert(name.as_str()) {
                warnings.push(ConfigWarning {
                    level: WarnLevel::Warning,
                    message: format!("stream '{name}' is listed more than once"),
                });
            }
        }

        if Path::new(&self.output).is_absolute() {
            warnings.push(ConfigWarning {
                level: WarnLevel::Warning,
                message: format!(
                    "output '{}' is absolute; it will be written outside the project",
                    self.output
                ),
            });
        }

        if self.template.trim().is_empty() {
            warnings.push(ConfigWarning {
                level: WarnLevel::Error,
                message: "template name is empty".to_string(),
            });
        }

        warnings
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
