use std::fs;
use std::path::{Path, PathBuf};

use super::{RoiCanvasConfig, CONFIG_FILE_NAME};
use crate::core::{Error, Result};

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Parse a TOML document, replacing invalid sections with their defaults.
pub fn parse_and_validate_config(contents: &str) -> Result<RoiCanvasConfig> {
    let mut config = toml::from_str::<RoiCanvasConfig>(contents).map_err(|e| {
        Error::Configuration(format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e))
    })?;

    if let Err(e) = config.portfolio.validate() {
        log::warn!("Invalid portfolio settings: {}. Using defaults.", e);
        config.portfolio = Default::default();
    }

    Ok(config)
}

fn try_load_config_from_path(config_path: &Path) -> Option<RoiCanvasConfig> {
    let contents = match fs::read_to_string(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            if e.kind() != std::io::ErrorKind::NotFound {
                log::warn!(
                    "Failed to read config file {}: {}",
                    config_path.display(),
                    e
                );
            }
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("{}. Using defaults.", e);
            None
        }
    }
}

/// `start` followed by its parents, at most `max_depth` entries.
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search `start` and its ancestors for the nearest config file.
pub fn load_config_from(start: PathBuf) -> RoiCanvasConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            RoiCanvasConfig::default()
        })
}

pub fn load_config() -> RoiCanvasConfig {
    match std::env::current_dir() {
        Ok(dir) => load_config_from(dir),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            RoiCanvasConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_BUDGET, DEFAULT_CONFIG};
    use crate::output::OutputFormat;
    use tempfile::TempDir;

    #[test]
    fn empty_document_uses_defaults() {
        let config = parse_and_validate_config("").unwrap();
        assert_eq!(config, RoiCanvasConfig::default());
        assert_eq!(config.portfolio.default_budget, DEFAULT_BUDGET);
    }

    #[test]
    fn default_template_parses() {
        let config = parse_and_validate_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.canvas.designed_by, "AI ROI Canvas Agent");
        assert_eq!(config.output.default_format, OutputFormat::Terminal);
    }

    #[test]
    fn reads_overrides() {
        let config = parse_and_validate_config(
            "[portfolio]\ndefault_budget = 250000.0\n[output]\ndefault_format = \"markdown\"\n",
        )
        .unwrap();
        assert_eq!(config.portfolio.default_budget, 250_000.0);
        assert_eq!(config.output.default_format, OutputFormat::Markdown);
    }

    #[test]
    fn negative_budget_falls_back_to_default() {
        let config = parse_and_validate_config("[portfolio]\ndefault_budget = -5.0\n").unwrap();
        assert_eq!(config.portfolio.default_budget, DEFAULT_BUDGET);
    }

    #[test]
    fn malformed_toml_is_an_error() {
        let err = parse_and_validate_config("[portfolio\n").unwrap_err();
        assert!(matches!(&err, Error::Configuration(msg) if msg.contains(".roicanvas.toml")));
        assert!(err.to_string().starts_with("Configuration error:"));
    }

    #[test]
    fn ancestors_are_bounded() {
        let dirs: Vec<_> = directory_ancestors(PathBuf::from("/a/b/c/d"), 2).collect();
        assert_eq!(dirs, vec![PathBuf::from("/a/b/c/d"), PathBuf::from("/a/b/c")]);
    }

    #[test]
    fn finds_config_in_parent_directory() {
        let root = TempDir::new().unwrap();
        let nested = root.path().join("one").join("two");
        fs::create_dir_all(&nested).unwrap();
        fs::write(
            root.path().join(CONFIG_FILE_NAME),
            "[canvas]\ndesigned_by = \"Strategy Team\"\n",
        )
        .unwrap();

        let config = load_config_from(nested);
        assert_eq!(config.canvas.designed_by, "Strategy Team");
    }
}
