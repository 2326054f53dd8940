//! Renders the data-stream configs into `docs/DATA_STREAM.md`.

use crate::config::DocsConfig;
use crate::error::Result;
use crate::stream::{self, StreamConfig};
use minijinja::{context, path_loader, Environment};
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize)]
pub struct GenerateReport {
    pub streams: usize,
    pub output: PathBuf,
    pub bytes: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    pub output: PathBuf,
    pub up_to_date: bool,
}

fn environment(root: &Path, cfg: &DocsConfig) -> Environment<'static> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.set_loader(path_loader(root.join(&cfg.template_dir)));
    env
}

/// Render already-loaded stream configs through the configured template.
pub fn render(root: &Path, cfg: &DocsConfig, streams: &[StreamConfig]) -> Result<String> {
    let env = environment(root, cfg);
    let template = env.get_template(&cfg.template)?;
    Ok(template.render(context! { streams => streams })?)
}

/// Load every stream, render, and overwrite the output file.
pub fn generate(root: &Path, cfg: &DocsConfig) -> Result<GenerateReport> {
    let streams = stream::load_all(root, cfg)?;
    let text = render(root, cfg, &streams)?;

    let output = root.join(&cfg.output);
    tracing::info!(path = %output.display(), "write {}", cfg.output);
    crate::io::atomic_write(&output, text.as_bytes())?;

    Ok(GenerateReport {
        streams: streams.len(),
        output,
        bytes: text.len(),
    })
}

/// Render without writing and compare against the file on disk.
pub fn check(root: &Path, cfg: &DocsConfig) -> Result<CheckReport> {
    let streams = stream::load_all(root, cfg)?;
    let text = render(root, cfg, &streams)?;
    let output = root.join(&cfg.output);
    let current = crate::io::read_if_exists(&output)?;
    Ok(CheckReport {
        up_to_date: current.as_deref() == Some(text.as_str()),
        output,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OpenPackError;
    use crate::paths;
    use tempfile::TempDir;

    const TEMPLATE: &str = "# Data Streams\n\
{% for s in streams %}\n\
- {{ s.name }} ({{ s.frame_rate | default('-') }})\n\
{% endfor %}\n";

    fn setup(streams: &[(&str, &str)]) -> (TempDir, DocsConfig) {
        let dir = TempDir::new().unwrap();
        let stream_dir = dir.path().join(paths::STREAM_CONFIG_DIR);
        std::fs::create_dir_all(&stream_dir).unwrap();
        for (name, body) in streams {
            std::fs::write(stream_dir.join(format!("{name}.yaml")), body).unwrap();
        }
        let tmpl_dir = dir.path().join(paths::TEMPLATES_DIR);
        std::fs::create_dir_all(&tmpl_dir).unwrap();
        std::fs::write(tmpl_dir.join(paths::DATA_STREAM_TEMPLATE), TEMPLATE).unwrap();

        let cfg = DocsConfig {
            streams: streams.iter().map(|(n, _)| n.to_string()).collect(),
            ..DocsConfig::default()
        };
        (dir, cfg)
    }

    #[test]
    fn generate_writes_streams_in_order() {
        let (dir, cfg) = setup(&[
            ("e4-acc", "name: e4-acc\nframe_rate: 32\n"),
            ("atr-qags", "name: atr-qags\n"),
        ]);
        let report = generate(dir.path(), &cfg).unwrap();
        assert_eq!(report.streams, 2);

        let text = std::fs::read_to_string(dir.path().join("docs/DATA_STREAM.md")).unwrap();
        assert_eq!(report.bytes, text.len());
        assert!(text.starts_with("# Data Streams\n"));
        let acc = text.find("- e4-acc (32)").unwrap();
        let atr = text.find("- atr-qags (-)").unwrap();
        assert!(acc < atr);
    }

    #[test]
    fn generate_overwrites_existing_output() {
        let (dir, cfg) = setup(&[("e4-bvp", "name: e4-bvp\n")]);
        let out = dir.path().join("docs/DATA_STREAM.md");
        std::fs::create_dir_all(out.parent().unwrap()).unwrap();
        std::fs::write(&out, "stale content ".repeat(100)).unwrap();

        generate(dir.path(), &cfg).unwrap();
        let text = std::fs::read_to_string(&out).unwrap();
        assert!(!text.contains("stale"));
        assert!(text.contains("e4-bvp"));
    }

    #[test]
    fn missing_stream_aborts_without_output() {
        let (dir, mut cfg) = setup(&[("e4-eda", "name: e4-eda\n")]);
        cfg.streams.push("e4-temp".to_string());

        let err = generate(dir.path(), &cfg).unwrap_err();
        assert!(matches!(err, OpenPackError::ConfigLoad { .. }));
        assert!(!dir.path().join("docs/DATA_STREAM.md").exists());
    }

    #[test]
    fn missing_template_is_render_error() {
        let (dir, mut cfg) = setup(&[("e4-eda", "name: e4-eda\n")]);
        cfg.template = "MISSING.md.jinja".to_string();
        let err = generate(dir.path(), &cfg).unwrap_err();
        assert!(matches!(err, OpenPackError::TemplateRender(_)));
    }

    #[test]
    fn broken_template_is_render_error() {
        let (dir, cfg) = setup(&[("e4-eda", "name: e4-eda\n")]);
        std::fs::write(
            dir.path()
                .join(paths::TEMPLATES_DIR)
                .join(paths::DATA_STREAM_TEMPLATE),
            "{% for s in streams %}",
        )
        .unwrap();
        let err = generate(dir.path(), &cfg).unwrap_err();
        assert!(matches!(err, OpenPackError::TemplateRender(_)));
    }

    #[test]
    fn check_detects_drift() {
        let (dir, cfg) = setup(&[("rs02-depth", "name: rs02-depth\n")]);
        assert!(!check(dir.path(), &cfg).unwrap().up_to_date);

        generate(dir.path(), &cfg).unwrap();
        assert!(check(dir.path(), &cfg).unwrap().up_to_date);

        std::fs::write(
            dir.path().join(paths::STREAM_CONFIG_DIR).join("rs02-depth.yaml"),
            "name: rs02-depth\nframe_rate: 15\n",
        )
        .unwrap();
        assert!(!check(dir.path(), &cfg).unwrap().up_to_date);
    }
}
