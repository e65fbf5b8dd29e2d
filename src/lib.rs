//! Typed loading, validation and inspection of a documentation site's
//! configuration (`base`, `title`, `markdown`, `themeConfig`).

pub mod cli;
pub mod config;
pub mod contexts;
pub mod error;
pub mod outline;
pub mod resolve;
pub mod settings;
pub mod site;
pub mod stamp;
pub mod validate;

pub use config::{LastUpdated, Markdown, NavLink, SidebarSection, SiteConfig, ThemeConfig};
pub use error::{Error, Result};
pub use site::Site;
