//! Saved filter views.
//!
//! A view is a named chain of selectors, stored as JSON in the user's
//! configuration directory:
//!
//! ```json
//! {
//!   "views": {
//!     "starred-inbox": ["folder:Inbox", "star"],
//!     "bin": ["trash"]
//!   },
//!   "default_view": "starred-inbox"
//! }
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::filter::Pipeline;

/// Persistent configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Saved views by name.
    #[serde(default)]
    pub views: BTreeMap<String, Vec<String>>,
    /// View applied when no filters are given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_view: Option<String>,
}

impl Config {
    /// Location of the configuration file, `<config dir>/mailsift/config.json`.
    #[must_use]
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("mailsift")
            .join("config.json")
    }

    /// Load from the default location.
    ///
    /// # Errors
    ///
    /// See [`Config::load`].
    pub fn load_default() -> Result<Self> {
        Self::load(&Self::default_path())
    }

    /// Load and validate configuration from `path`.
    ///
    /// A missing file gives the default (empty) configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid JSON, or
    /// fails [`Config::validate`].
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(?path, "No configuration file, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;

        debug!(?path, views = config.views.len(), "Loaded configuration");
        Ok(config)
    }

    /// Write configuration to `path`, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or file cannot be written.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;

        info!("Configuration saved to {:?}", path);
        Ok(())
    }

    /// Build the pipeline for a saved view.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownView`] if no such view exists, or
    /// [`Error::InvalidSelector`] if one of its selectors does not parse.
    pub fn view(&self, name: &str) -> Result<Pipeline> {
        let selectors = self
            .views
            .get(name)
            .ok_or_else(|| Error::UnknownView(name.to_string()))?;
        Pipeline::parse(selectors)
    }

    /// Build the pipeline for the default view, if one is set.
    ///
    /// # Errors
    ///
    /// Same as [`Config::view`].
    pub fn default_pipeline(&self) -> Result<Option<Pipeline>> {
        self.default_view
            .as_deref()
            .map(|name| self.view(name))
            .transpose()
    }

    /// Add or replace a view after checking its selectors.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] for an empty name or
    /// [`Error::InvalidSelector`] for a bad selector. The configuration is
    /// left unchanged on error.
    pub fn set_view(&mut self, name: impl Into<String>, selectors: Vec<String>) -> Result<()> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(Error::Config("view name is empty".to_string()));
        }
        Pipeline::parse(&selectors)?;
        self.views.insert(name, selectors);
        Ok(())
    }

    /// Check that every view parses and the default view exists.
    ///
    /// # Errors
    ///
    /// Returns the first problem found.
    pub fn validate(&self) -> Result<()> {
        for (name, selectors) in &self.views {
            if name.trim().is_empty() {
                return Err(Error::Config("view name is empty".to_string()));
            }
            Pipeline::parse(selectors)?;
        }

        if let Some(name) = &self.default_view
            && !self.views.contains_key(name)
        {
            return Err(Error::Config(format!(
                "default view {name:?} is not defined"
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::EmailFilter;

    fn sample_config() -> Config {
        let mut config = Config::default();
        config
            .set_view(
                "starred-inbox",
                vec!["folder:Inbox".to_string(), "star".to_string()],
            )
            .unwrap();
        config.set_view("bin", vec!["trash".to_string()]).unwrap();
        config
    }

    #[test]
    fn test_view_pipeline() {
        let config = sample_config();
        let pipeline = config.view("starred-inbox").unwrap();

        assert_eq!(
            pipeline.filters(),
            [EmailFilter::folder("Inbox"), EmailFilter::star()]
        );
    }

    #[test]
    fn test_unknown_view() {
        let err = sample_config().view("nope").unwrap_err();
        assert!(matches!(err, Error::UnknownView(name) if name == "nope"));
    }

    #[test]
    fn test_set_view_rejects_bad_input() {
        let mut config = sample_config();

        assert!(matches!(
            config.set_view("bad", vec!["colour:red".to_string()]),
            Err(Error::InvalidSelector(_))
        ));
        assert!(matches!(
            config.set_view("  ", vec!["star".to_string()]),
            Err(Error::Config(_))
        ));
        assert!(!config.views.contains_key("bad"));
    }

    #[test]
    fn test_default_pipeline() {
        let mut config = sample_config();
        assert!(config.default_pipeline().unwrap().is_none());

        config.default_view = Some("bin".to_string());
        let pipeline = config.default_pipeline().unwrap().unwrap();
        assert_eq!(pipeline.filters(), [EmailFilter::trash()]);
    }

    #[test]
    fn test_validate_default_view_must_exist() {
        let mut config = sample_config();
        config.default_view = Some("missing".to_string());
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let mut config = sample_config();
        config.default_view = Some("starred-inbox".to_string());
        config.save(&path).unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_rejects_invalid_view() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"views": {"x": ["bogus"]}}"#).unwrap();

        assert!(matches!(
            Config::load(&path),
            Err(Error::InvalidSelector(_))
        ));
    }

    #[test]
    fn test_load_rejects_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(matches!(Config::load(&path), Err(Error::Serde(_))));
    }
}
