//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;
use mailsift_core::{Config, EmailFilter, Pipeline};

/// Filter and search email records.
///
/// Reads a JSON array of email records, keeps the ones matching every given
/// filter, and prints them back as JSON in their original order.
#[derive(Debug, Parser)]
#[command(name = "mailsift", author, version, about)]
pub struct Cli {
    /// JSON file holding an array of email records
    ///
    /// Standard input is read when the path is absent or `-`.
    #[arg(value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Keep records filed under this folder (exact match)
    #[arg(long, value_name = "NAME")]
    pub folder: Option<String>,

    /// Keep records with this flag type (ignores case)
    #[arg(long = "type", value_name = "FLAG")]
    pub flag_type: Option<String>,

    /// Keep starred records
    #[arg(long)]
    pub star: bool,

    /// Keep trashed records
    #[arg(long)]
    pub trash: bool,

    /// Keep records whose recipient contains this text (ignores case)
    #[arg(long, value_name = "QUERY")]
    pub search: Option<String>,

    /// Add a filter by selector, e.g. `folder:Inbox`, `star`, `to:bob`
    ///
    /// May be repeated. Selector filters run after the dedicated flags.
    #[arg(long = "filter", short = 'f', value_name = "SELECTOR")]
    pub filters: Vec<EmailFilter>,

    /// Start from a saved view
    #[arg(long, value_name = "NAME")]
    pub view: Option<String>,

    /// Override the configuration file path
    #[arg(long, short, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the number of matching records instead of the records
    #[arg(long)]
    pub count: bool,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}

impl Cli {
    /// Configuration path, honoring `--config`.
    #[must_use]
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::default_path)
    }

    /// Build the filter chain described by the arguments.
    ///
    /// Order: saved view, `--folder`, `--type`, `--star`, `--trash`,
    /// `--search`, then each `--filter`. When nothing is given the
    /// configured default view applies, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if a named or default view is unknown or invalid.
    pub fn pipeline(&self, config: &Config) -> mailsift_core::Result<Pipeline> {
        let mut pipeline = match &self.view {
            Some(name) => config.view(name)?,
            None => Pipeline::new(),
        };

        if let Some(folder) = &self.folder {
            pipeline.push(EmailFilter::folder(folder.as_str()));
        }
        if let Some(flag) = &self.flag_type {
            pipeline.push(EmailFilter::flag_type(flag.as_str()));
        }
        if self.star {
            pipeline.push(EmailFilter::star());
        }
        if self.trash {
            pipeline.push(EmailFilter::trash());
        }
        if let Some(query) = &self.search {
            pipeline.push(EmailFilter::search(query.as_str()));
        }
        pipeline.extend(self.filters.iter().cloned());

        if pipeline.is_empty()
            && self.view.is_none()
            && let Some(default) = config.default_pipeline()?
        {
            return Ok(default);
        }

        Ok(pipeline)
    }
}
