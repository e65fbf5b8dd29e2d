use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::SiteConfig;
use crate::error::{Error, Result};
use crate::resolve::{self, Reference};
use crate::settings::{self, ConfigFormat};
use crate::stamp::Stamp;
use crate::validate::{self, Diagnostics};

/// A loaded site config together with where it came from.
pub struct Site {
    pub config: SiteConfig,
    pub config_path: PathBuf,
    pub content_root: PathBuf,
}

/// A referenced page as listed by [`Site::pages`].
#[derive(Clone, Debug, Serialize)]
pub struct Page {
    #[serde(flatten)]
    pub reference: Reference,
    pub stamp: Option<Stamp>,
}

impl Site {
    /// Loads the config at `config`, or the one discovered under `dir`.
    ///
    /// `content_root` overrides the directory page links resolve against.
    pub fn open(config: Option<&Path>, dir: &Path, content_root: Option<&Path>) -> Result<Site> {
        let config_path = match config {
            Some(path) => path.to_path_buf(),
            None => settings::discover(dir)?,
        };
        let site_config = settings::load(&config_path)?;
        let content_root = match content_root {
            Some(root) => root.to_path_buf(),
            None => settings::content_root(&config_path, dir),
        };
        info!(root = %content_root.display(), "content root");

        Ok(Site {
            config: site_config,
            config_path,
            content_root,
        })
    }

    /// Validates the config and, with `check_files`, that every page it
    /// references exists. Returns the (possibly empty) warnings on success;
    /// reporting them is left to the caller.
    pub fn check(&self, strict: bool, check_files: bool) -> Result<Diagnostics> {
        let diagnostics = validate::validate(&self.config)
            .into_result(strict)
            .map_err(Error::Invalid)?;
        for warning in diagnostics.warnings() {
            debug!("{warning}");
        }

        if check_files {
            let references = self.references();
            let missing = resolve::missing(&references);
            for reference in &missing {
                let file = reference
                    .file
                    .as_deref()
                    .map(|f| f.display().to_string())
                    .unwrap_or_default();
                warn!(field = %reference.field, link = %reference.link, %file, "page not found");
            }
            if !missing.is_empty() {
                return Err(Error::MissingPages {
                    count: missing.len(),
                    root: self.content_root.clone(),
                });
            }
        }

        Ok(diagnostics)
    }

    pub fn references(&self) -> Vec<Reference> {
        resolve::resolve_all(&self.config, &self.content_root)
    }

    /// Every reference with its last-updated stamp, when that feature is on
    /// and the page exists.
    pub fn pages(&self) -> Result<Vec<Page>> {
        let label = self.config.last_updated().label();
        self.references()
            .into_iter()
            .map(|reference| -> Result<Page> {
                let stamp = match (label, &reference.file) {
                    (Some(label), Some(file)) if reference.exists => {
                        Some(Stamp::for_file(label, file)?)
                    }
                    _ => None,
                };
                Ok(Page { reference, stamp })
            })
            .collect()
    }

    pub fn outline(&self) -> Result<String> {
        crate::outline::render(&self.config)
    }

    pub fn convert(&self, format: ConfigFormat) -> Result<String> {
        settings::to_string(&self.config, format)
    }
}
