use tinytemplate::TinyTemplate;

use crate::config::SiteConfig;
use crate::contexts::OutlineContext;
use crate::error::Result;

const OUTLINE_TEMPLATE: &str = "{site.title}
{site.description}
base: {site.base}
line numbers: {{ if site.line_numbers }}on{{ else }}off{{ endif }}
last updated: {{ if last_updated }}{last_updated}{{ else }}off{{ endif }}
{{ if has_nav }}
nav:
{{ for item in nav }}  - {item.text} -> {item.link}
{{ endfor }}{{ endif }}{{ if has_sidebar }}
sidebar:
{{ for section in sections }}  [{section.title}] {section.path} (depth {section.sidebarDepth}{{ if section.collapsable }}, collapsable{{ endif }})
{{ for child in section.children }}    - {child}
{{ endfor }}{{ endfor }}{{ endif }}";

/// Plain-text summary of a site's identity and navigation.
pub fn render(config: &SiteConfig) -> Result<String> {
    let mut tt = TinyTemplate::new();
    tt.set_default_formatter(&tinytemplate::format_unescaped);
    tt.add_template("outline", OUTLINE_TEMPLATE)?;

    let context = OutlineContext::new(config);
    Ok(tt.render("outline", &context)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LastUpdated, NavLink, SidebarSection};

    #[test]
    fn test_render_full_outline() {
        let mut config = SiteConfig {
            base: "/notes/".to_string(),
            title: "Notes".to_string(),
            description: "Things & stuff".to_string(),
            ..SiteConfig::default()
        };
        config.markdown.line_numbers = true;
        config.theme_config.last_updated = LastUpdated::Label("Updated".to_string());
        config.theme_config.nav.push(NavLink {
            text: "Home".to_string(),
            link: "/".to_string(),
        });
        config.theme_config.sidebar.push(SidebarSection {
            title: "Start".to_string(),
            path: "/a".to_string(),
            collapsable: true,
            sidebar_depth: 2,
            children: vec!["/a".to_string(), "/b".to_string()],
        });

        let out = render(&config).unwrap();
        assert!(out.starts_with("Notes\nThings & stuff\nbase: /notes/\n"));
        assert!(out.contains("line numbers: on\n"));
        assert!(out.contains("last updated: Updated\n"));
        assert!(out.contains("  - Home -> /\n"));
        assert!(out.contains("  [Start] /a (depth 2, collapsable)\n"));
        assert!(out.contains("    - /a\n    - /b\n"));
    }

    #[test]
    fn test_render_minimal_outline() {
        let config = SiteConfig {
            title: "Bare".to_string(),
            ..SiteConfig::default()
        };
        let out = render(&config).unwrap();
        assert!(out.contains("line numbers: off\n"));
        assert!(out.contains("last updated: off\n"));
        assert!(!out.contains("nav:"));
        assert!(!out.contains("sidebar:"));
    }
}
