use serde::Serialize;

use crate::config::{NavLink, SidebarSection, SiteConfig};

#[derive(Serialize)]
pub struct SiteContext<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub base: &'a str,
    pub line_numbers: bool,
}

#[derive(Serialize)]
pub struct OutlineContext<'a> {
    pub site: SiteContext<'a>,
    pub nav: &'a [NavLink],
    pub sections: &'a [SidebarSection],
    pub last_updated: Option<&'a str>,
    pub has_nav: bool,
    pub has_sidebar: bool,
}

impl<'a> OutlineContext<'a> {
    pub fn new(config: &'a SiteConfig) -> OutlineContext<'a> {
        OutlineContext {
            site: SiteContext {
                title: &config.title,
                description: &config.description,
                base: &config.base,
                line_numbers: config.markdown.line_numbers,
            },
            nav: config.nav(),
            sections: config.sidebar(),
            last_updated: config.last_updated().label(),
            has_nav: !config.nav().is_empty(),
            has_sidebar: !config.sidebar().is_empty(),
        }
    }
}
