//! Mapping the links in a config onto markdown files under the content root.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use crate::config::SiteConfig;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Target {
    /// Points off-site; never checked.
    External,
    /// A markdown source file under the content root.
    Page(PathBuf),
}

/// One link found in the config, with where it ended up.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Reference {
    pub field: String,
    pub link: String,
    pub file: Option<PathBuf>,
    pub exists: bool,
}

impl Reference {
    pub fn is_external(&self) -> bool {
        self.file.is_none()
    }
}

/// Whether `link` carries a URL scheme (`https:`, `mailto:`) or is
/// protocol-relative.
pub fn is_external(link: &str) -> bool {
    if link.starts_with("//") {
        return true;
    }
    match link.find(':') {
        Some(idx) if idx > 0 => {
            let scheme = &link[..idx];
            scheme.starts_with(|c: char| c.is_ascii_alphabetic())
                && scheme
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        _ => false,
    }
}

/// Resolves a site link to the markdown file it is built from.
///
/// A trailing `/` means the directory's `README.md`, or `index.md` when
/// only that exists.
pub fn resolve(link: &str, root: &Path) -> Target {
    if is_external(link) {
        return Target::External;
    }

    let link = link.split(&['#', '?'][..]).next().unwrap_or_default();
    let relative = link.trim_start_matches('/');

    if relative.is_empty() || link.ends_with('/') {
        let dir = root.join(relative);
        let readme = dir.join("README.md");
        if !readme.is_file() {
            let index = dir.join("index.md");
            if index.is_file() {
                return Target::Page(index);
            }
        }
        return Target::Page(readme);
    }

    let file = if let Some(stem) = relative.strip_suffix(".html") {
        format!("{stem}.md")
    } else if relative.ends_with(".md") {
        relative.to_string()
    } else {
        format!("{relative}.md")
    };
    Target::Page(root.join(file))
}

/// Every link in `config`, in order: nav, then each sidebar section's
/// `path` followed by its children.
pub fn resolve_all(config: &SiteConfig, root: &Path) -> Vec<Reference> {
    let mut links: Vec<(String, &str)> = Vec::new();
    for (i, nav) in config.nav().iter().enumerate() {
        links.push((format!("themeConfig.nav[{i}].link"), nav.link.as_str()));
    }
    for (i, section) in config.sidebar().iter().enumerate() {
        links.push((format!("themeConfig.sidebar[{i}].path"), section.path.as_str()));
        for (j, child) in section.children.iter().enumerate() {
            links.push((format!("themeConfig.sidebar[{i}].children[{j}]"), child.as_str()));
        }
    }

    links
        .into_iter()
        .map(|(field, link)| {
            let reference = match resolve(link, root) {
                Target::External => Reference {
                    field,
                    link: link.to_string(),
                    file: None,
                    exists: true,
                },
                Target::Page(file) => {
                    let exists = file.is_file();
                    Reference {
                        field,
                        link: link.to_string(),
                        file: Some(file),
                        exists,
                    }
                }
            };
            debug!(link = %reference.link, exists = reference.exists, "resolved link");
            reference
        })
        .collect()
}

pub fn missing(references: &[Reference]) -> Vec<&Reference> {
    references.iter().filter(|r| !r.exists).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{NavLink, SidebarSection};
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_is_external() {
        assert!(is_external("https://github.com/mrcoto/kotlin_notes/"));
        assert!(is_external("mailto:someone@example.com"));
        assert!(is_external("//cdn.example.com/x"));
        assert!(!is_external("/content/chapter1"));
        assert!(!is_external("/a:b"));
        assert!(!is_external("guide/intro"));
    }

    #[test]
    fn test_resolve_page_forms() {
        let root = Path::new("docs");
        assert_eq!(
            resolve("/content/chapter1", root),
            Target::Page(PathBuf::from("docs/content/chapter1.md"))
        );
        assert_eq!(
            resolve("/content/chapter1.html#setup", root),
            Target::Page(PathBuf::from("docs/content/chapter1.md"))
        );
        assert_eq!(
            resolve("/content/chapter1.md?x=1", root),
            Target::Page(PathBuf::from("docs/content/chapter1.md"))
        );
        assert_eq!(resolve("https://example.com", root), Target::External);
    }

    #[test]
    fn test_resolve_directory_links() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("guide")).unwrap();
        fs::write(dir.path().join("guide/index.md"), "# Guide").unwrap();

        assert_eq!(
            resolve("/", dir.path()),
            Target::Page(dir.path().join("README.md"))
        );
        assert_eq!(
            resolve("/guide/", dir.path()),
            Target::Page(dir.path().join("guide/index.md"))
        );
    }

    #[test]
    fn test_resolve_all_reports_missing() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("README.md"), "# Home").unwrap();
        fs::create_dir(dir.path().join("content")).unwrap();
        fs::write(dir.path().join("content/one.md"), "# One").unwrap();

        let mut config = SiteConfig::default();
        config.theme_config.nav = vec![
            NavLink {
                text: "Home".to_string(),
                link: "/".to_string(),
            },
            NavLink {
                text: "GitHub".to_string(),
                link: "https://github.com".to_string(),
            },
        ];
        config.theme_config.sidebar.push(SidebarSection {
            title: "Start".to_string(),
            path: "/content/one".to_string(),
            collapsable: true,
            sidebar_depth: 1,
            children: vec!["/content/one".to_string(), "/content/two".to_string()],
        });

        let refs = resolve_all(&config, dir.path());
        let fields: Vec<&str> = refs.iter().map(|r| r.field.as_str()).collect();
        assert_eq!(
            fields,
            vec![
                "themeConfig.nav[0].link",
                "themeConfig.nav[1].link",
                "themeConfig.sidebar[0].path",
                "themeConfig.sidebar[0].children[0]",
                "themeConfig.sidebar[0].children[1]",
            ]
        );
        assert!(refs[1].is_external());

        let absent = missing(&refs);
        assert_eq!(absent.len(), 1);
        assert_eq!(absent[0].link, "/content/two");
        assert_eq!(absent[0].file, Some(dir.path().join("content/two.md")));
    }
}
