use serde::{Deserialize, Serialize};

/// Label shown next to a page's timestamp when `lastUpdated = true`.
pub const DEFAULT_LAST_UPDATED_LABEL: &str = "Last Updated";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    #[serde(default = "default_base")]
    pub base: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub markdown: Markdown,
    #[serde(default)]
    pub theme_config: ThemeConfig,
}

impl Default for SiteConfig {
    fn default() -> SiteConfig {
        SiteConfig {
            base: default_base(),
            title: String::new(),
            description: String::new(),
            markdown: Markdown::default(),
            theme_config: ThemeConfig::default(),
        }
    }
}

fn default_base() -> String {
    "/".to_string()
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Markdown {
    #[serde(default)]
    pub line_numbers: bool,
}

// `last_updated` comes first: TOML wants plain values ahead of the
// `[[themeConfig.nav]]` and `[[themeConfig.sidebar]]` tables.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeConfig {
    #[serde(default)]
    pub last_updated: LastUpdated,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub nav: Vec<NavLink>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sidebar: Vec<SidebarSection>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub text: String,
    pub link: String,
}

/// A named group in the side navigation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SidebarSection {
    pub title: String,
    pub path: String,
    #[serde(default = "default_collapsable")]
    pub collapsable: bool,
    #[serde(default = "default_sidebar_depth")]
    pub sidebar_depth: u32,
    #[serde(default)]
    pub children: Vec<String>,
}

fn default_collapsable() -> bool {
    true
}

fn default_sidebar_depth() -> u32 {
    1
}

/// Either a display label or an on/off switch.
///
/// `false` turns the feature off, `true` turns it on with
/// [`DEFAULT_LAST_UPDATED_LABEL`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LastUpdated {
    Enabled(bool),
    Label(String),
}

impl Default for LastUpdated {
    fn default() -> LastUpdated {
        LastUpdated::Enabled(false)
    }
}

impl LastUpdated {
    /// The label to display, or `None` when the feature is off.
    pub fn label(&self) -> Option<&str> {
        match self {
            LastUpdated::Enabled(false) => None,
            LastUpdated::Enabled(true) => Some(DEFAULT_LAST_UPDATED_LABEL),
            LastUpdated::Label(label) => Some(label),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.label().is_some()
    }
}

impl SiteConfig {
    pub fn nav(&self) -> &[NavLink] {
        &self.theme_config.nav
    }

    pub fn sidebar(&self) -> &[SidebarSection] {
        &self.theme_config.sidebar
    }

    pub fn last_updated(&self) -> &LastUpdated {
        &self.theme_config.last_updated
    }
}
