//! Layered configuration builder.

use std::path::{Path, PathBuf};

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::ConfigLoader;
use crate::config::merger::ConfigMerger;
use crate::config::schema::Config;
use crate::config::validator::ConfigValidator;
use crate::error::Result;

/// Builds a [`Config`] from every configuration source.
///
/// Layers are applied lowest precedence first: built-in defaults, the
/// `config.yaml` file in the data directory, `SLIMPATH_*` environment
/// variables, command-line overrides, then programmatic overrides. The
/// merged result is validated before it is returned.
///
/// # Examples
///
/// ```
/// use slimpath::config::{Config, ConfigBuilder};
///
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_config(Config { variable: Some("PSModulePath".into()), ..Default::default() })
///     .build()
///     .unwrap();
/// assert_eq!(config.variable(), "PSModulePath");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    data_dir: Option<PathBuf>,
    skip_files: bool,
    skip_env: bool,
    cli: Option<Config>,
    programmatic: Option<Config>,
}

impl ConfigBuilder {
    /// Create a builder that reads every source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read `config.yaml` from `dir` instead of `~/.slimpath`.
    ///
    /// The directory also becomes the resulting `data_dir`.
    #[must_use]
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = Some(dir.into());
        self
    }

    /// Don't read any configuration file.
    #[must_use]
    pub fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Don't read `SLIMPATH_*` environment variables.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Values given on the command line.
    #[must_use]
    pub fn with_cli_overrides(mut self, config: Config) -> Self {
        self.cli = Some(config);
        self
    }

    /// Values that override every other source.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.programmatic = Some(config);
        self
    }

    /// The data directory this builder will read from, if set.
    #[must_use]
    pub fn data_dir(&self) -> Option<&Path> {
        self.data_dir.as_deref()
    }

    /// Merge all sources and validate the result.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file cannot be read or parsed,
    /// an environment variable is invalid, or the merged configuration
    /// fails validation.
    pub fn build(self) -> Result<Config> {
        let mut config = Config::default();

        if !self.skip_files {
            if let Some(source) = ConfigLoader::load_user_config(self.data_dir.as_deref())? {
                log::debug!("loaded configuration from {}", source.path.display());
                config = ConfigMerger::merge(vec![source]);
            }
        }

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        if let Some(ref cli) = self.cli {
            ConfigMerger::merge_into(&mut config, cli);
        }

        if self.data_dir.is_some() {
            config.data_dir.clone_from(&self.data_dir);
        }

        if let Some(ref programmatic) = self.programmatic {
            ConfigMerger::merge_into(&mut config, programmatic);
        }

        ConfigValidator::validate(&config)?;
        Ok(config)
    }
}
