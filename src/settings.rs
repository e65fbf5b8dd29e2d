//! Reading and writing site configs on disk.
//!
//! A config is TOML or JSON, picked by file extension. Both spell keys the
//! same way the site builder does (`themeConfig`, `lineNumbers`, ...).

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use tracing::{debug, info};

use crate::config::SiteConfig;
use crate::error::{Error, Result};

/// Directory the site builder keeps its config in.
pub const CONFIG_DIR: &str = ".vuepress";

/// Candidates tried by [`discover`], relative to the site directory.
const CANDIDATES: [&str; 3] = [
    ".vuepress/config.toml",
    ".vuepress/config.json",
    "docsite.toml",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Json,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> Result<ConfigFormat> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Ok(ConfigFormat::Toml),
            Some("json") => Ok(ConfigFormat::Json),
            _ => Err(Error::UnsupportedFormat(path.to_path_buf())),
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            ConfigFormat::Toml => "toml",
            ConfigFormat::Json => "json",
        }
    }
}

impl fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ConfigFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "toml" => Ok(ConfigFormat::Toml),
            "json" => Ok(ConfigFormat::Json),
            other => Err(format!("unknown format `{other}` (expected toml or json)")),
        }
    }
}

pub fn parse(content: &str, format: ConfigFormat) -> Result<SiteConfig> {
    let config = match format {
        ConfigFormat::Toml => toml::from_str(content)?,
        ConfigFormat::Json => serde_json::from_str(content)?,
    };
    Ok(config)
}

pub fn to_string(config: &SiteConfig, format: ConfigFormat) -> Result<String> {
    let out = match format {
        ConfigFormat::Toml => toml::to_string_pretty(config)?,
        ConfigFormat::Json => serde_json::to_string_pretty(config)?,
    };
    Ok(out)
}

pub fn load(path: &Path) -> Result<SiteConfig> {
    let format = ConfigFormat::from_path(path)?;
    let content = fs::read_to_string(path).map_err(|e| Error::Read(path.to_path_buf(), e))?;
    let config = parse(&content, format)?;
    info!(path = %path.display(), %format, "loaded site config");
    Ok(config)
}

/// Finds the config for the site rooted at `site_dir`.
///
/// Falls back to `$XDG_CONFIG_HOME/docsite/config.toml` when the site
/// directory has none. Anything else, including a home directory the XDG
/// lookup cannot work out, is [`Error::NotFound`].
pub fn discover(site_dir: &Path) -> Result<PathBuf> {
    for candidate in CANDIDATES {
        let path = site_dir.join(candidate);
        debug!(path = %path.display(), "looking for site config");
        if path.is_file() {
            return Ok(path);
        }
    }

    let user_config = xdg::BaseDirectories::with_prefix("docsite")
        .ok()
        .and_then(|dirs| dirs.find_config_file("config.toml"));
    if let Some(path) = user_config {
        debug!(path = %path.display(), "using user config");
        return Ok(path);
    }

    let searched = CANDIDATES
        .iter()
        .map(|c| site_dir.join(c).display().to_string())
        .chain(std::iter::once("$XDG_CONFIG_HOME/docsite/config.toml".to_string()))
        .collect::<Vec<_>>()
        .join(", ");
    Err(Error::NotFound { searched })
}

/// Directory that page links are resolved against.
///
/// For `docs/.vuepress/config.toml` that is `docs`. A config kept anywhere
/// else (the user's XDG directory, a `-c` path) says nothing about where the
/// pages live, so the site directory is used.
pub fn content_root(config_path: &Path, site_dir: &Path) -> PathBuf {
    let parent = config_path.parent().unwrap_or_else(|| Path::new(""));
    if parent.file_name().map_or(false, |n| n == CONFIG_DIR) {
        let root = parent.parent().unwrap_or_else(|| Path::new(""));
        if root.as_os_str().is_empty() {
            return PathBuf::from(".");
        }
        return root.to_path_buf();
    }
    site_dir.to_path_buf()
}
