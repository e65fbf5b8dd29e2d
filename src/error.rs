use std::path::PathBuf;

use thiserror::Error;

use crate::validate::Diagnostics;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("could not read `{}`", .0.display())]
    Read(PathBuf, #[source] std::io::Error),

    #[error("could not write `{}`", .0.display())]
    Write(PathBuf, #[source] std::io::Error),

    #[error("no site config found (searched {searched})")]
    NotFound { searched: String },

    #[error("unsupported config format for `{}` (expected .toml or .json)", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("could not parse TOML config: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("could not serialize config as TOML: {0}")]
    TomlWrite(#[from] toml::ser::Error),

    #[error("JSON config error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("template error: {0}")]
    Template(#[from] tinytemplate::error::Error),

    // No #[from]: the diagnostics already print every problem.
    #[error("{0}")]
    Invalid(Diagnostics),

    #[error("{count} referenced page(s) not found under `{}`", .root.display())]
    MissingPages { count: usize, root: PathBuf },
}
