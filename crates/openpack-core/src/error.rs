use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OpenPackError {
    #[error("unknown class IDs: {0:?}")]
    UnknownClassIds(Vec<u32>),

    #[error("unknown class indices: {0:?}")]
    UnknownClassIndices(Vec<usize>),

    #[error("duplicate class ID {0} in activity set")]
    DuplicateClassId(u32),

    #[error("taxonomy not found: {0}")]
    TaxonomyNotFound(String),

    #[error("annotation '{0}' has no path template")]
    NoAnnotationPath(String),

    #[error("no value for placeholder '${{{0}}}'")]
    UnresolvedPlaceholder(String),

    #[error("failed to load stream config {}: {reason}", .path.display())]
    ConfigLoad { path: PathBuf, reason: String },

    #[error("template render failed: {0}")]
    TemplateRender(String),

    #[error("no data streams configured")]
    EmptyStreamList,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

impl OpenPackError {
    /// True for errors raised when labels do not belong to the active taxonomy.
    pub fn is_unknown_label(&self) -> bool {
        matches!(
            self,
            OpenPackError::UnknownClassIds(_) | OpenPackError::UnknownClassIndices(_)
        )
    }
}

impl From<minijinja::Error> for OpenPackError {
    fn from(e: minijinja::Error) -> Self {
        // Alternate formatting keeps the template name and line in the message.
        OpenPackError::TemplateRender(format!("{e:#}"))
    }
}

pub type Result<T> = std::result::Result<T, OpenPackError>;
