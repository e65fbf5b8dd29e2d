use std::fs;
use std::path::Path;

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::error::{Error, Result};

pub const STAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// When a page was last changed, with the label it is shown under.
#[derive(Clone, Debug, Serialize)]
pub struct Stamp {
    pub label: String,
    #[serde(with = "stamp_format")]
    pub modified: DateTime<Local>,
}

mod stamp_format {
    use chrono::{DateTime, Local};
    use serde::Serializer;

    use super::STAMP_FORMAT;

    pub fn serialize<S>(date: &DateTime<Local>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.format(STAMP_FORMAT).to_string())
    }
}

impl Stamp {
    pub fn for_file(label: &str, path: &Path) -> Result<Stamp> {
        let modified = fs::metadata(path)
            .and_then(|m| m.modified())
            .map_err(|e| Error::Read(path.to_path_buf(), e))?;
        Ok(Stamp {
            label: label.to_string(),
            modified: DateTime::<Local>::from(modified),
        })
    }

    pub fn display(&self) -> String {
        format!("{}: {}", self.label, self.modified.format(STAMP_FORMAT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::TempDir;

    #[test]
    fn test_display() {
        let stamp = Stamp {
            label: "Última Vez Actualizado".to_string(),
            modified: Local.with_ymd_and_hms(2021, 3, 4, 5, 6, 7).unwrap(),
        };
        assert_eq!(stamp.display(), "Última Vez Actualizado: 2021-03-04 05:06:07");
    }

    #[test]
    fn test_serializes_formatted_date() {
        let stamp = Stamp {
            label: "Updated".to_string(),
            modified: Local.with_ymd_and_hms(2020, 1, 2, 3, 4, 5).unwrap(),
        };
        let json = serde_json::to_string(&stamp).unwrap();
        assert_eq!(json, r#"{"label":"Updated","modified":"2020-01-02 03:04:05"}"#);
    }

    #[test]
    fn test_for_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("page.md");
        fs::write(&path, "# Page").unwrap();
        let stamp = Stamp::for_file("Updated", &path).unwrap();
        assert_eq!(stamp.label, "Updated");
        assert!(stamp.display().starts_with("Updated: "));
    }

    #[test]
    fn test_for_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = Stamp::for_file("Updated", &dir.path().join("nope.md")).unwrap_err();
        assert!(matches!(err, Error::Read(..)));
    }
}
