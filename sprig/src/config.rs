//! Project configuration (`sprig.toml`).
//!
//! Configuration supplies defaults only; everything is resolved into the
//! request up front, so generation itself reads no ambient state.

use std::path::{Path, PathBuf};

use miette::{Diagnostic, NamedSource, SourceSpan};
use serde::Deserialize;
use sprig_core::Case;
use thiserror::Error;

/// Result type for configuration loading (boxed to reduce size on stack)
pub(crate) type Result<T> = std::result::Result<T, Box<ConfigError>>;

/// File consulted when `--config` is not given.
pub(crate) const CONFIG_FILE: &str = "sprig.toml";

#[derive(Debug, Error, Diagnostic)]
pub(crate) enum ConfigError {
    #[error("failed to read `{}`", .path.display())]
    #[diagnostic(code(sprig::config::read))]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration")]
    #[diagnostic(code(sprig::config::parse))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct Config {
    #[serde(default)]
    pub defaults: Defaults,
}

/// Defaults threaded into request construction.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct Defaults {
    /// Naming convention applied when `--case` is not given.
    pub convention: Option<Case>,
    /// Target directory applied when `--dir` is not given.
    pub dir: Option<PathBuf>,
}

impl Config {
    /// Load configuration from `path`, or from `./sprig.toml` when present.
    /// A missing default file yields empty defaults.
    pub fn load(path: Option<&Path>) -> Result<Config> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => {
                let default = PathBuf::from(CONFIG_FILE);
                if !default.exists() {
                    return Ok(Config::default());
                }
                default
            }
        };

        let content = std::fs::read_to_string(&path).map_err(|source| {
            Box::new(ConfigError::Read {
                path: path.clone(),
                source,
            })
        })?;

        Self::parse(&path, &content)
    }

    fn parse(path: &Path, content: &str) -> Result<Config> {
        toml::from_str(content).map_err(|e| {
            Box::new(ConfigError::Parse {
                src: NamedSource::new(path.display().to_string(), content.to_string()),
                span: e.span().map(SourceSpan::from),
                message: e.message().to_string(),
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let config = Config::parse(
            Path::new("sprig.toml"),
            "[defaults]\nconvention = \"kebab\"\ndir = \"src/components\"\n",
        )
        .unwrap();
        assert_eq!(config.defaults.convention, Some(Case::Kebab));
        assert_eq!(
            config.defaults.dir,
            Some(PathBuf::from("src/components"))
        );
    }

    #[test]
    fn test_empty_config() {
        let config = Config::parse(Path::new("sprig.toml"), "").unwrap();
        assert_eq!(config.defaults.convention, None);
        assert_eq!(config.defaults.dir, None);
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let err = Config::parse(
            Path::new("sprig.toml"),
            "[defaults]\nconventoin = \"kebab\"\n",
        )
        .unwrap_err();
        assert!(matches!(*err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_invalid_convention_is_rejected() {
        let err = Config::parse(
            Path::new("sprig.toml"),
            "[defaults]\nconvention = \"upper\"\n",
        )
        .unwrap_err();
        assert!(matches!(*err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_explicit_missing_file_is_an_error() {
        let temp = tempfile::TempDir::new().unwrap();
        let missing = temp.path().join("nope").join(CONFIG_FILE);
        let err = Config::load(Some(&missing)).unwrap_err();
        assert!(matches!(*err, ConfigError::Read { .. }));
    }
}
