use crate::constants::{
    AFTERWORD_FILE, GETTING_STARTED_PAGE, HOME_PAGE, PREFACE_FILE, RESERVED_DIR_PREFIXES,
    SUPPLEMENTARY_TITLE,
};
use crate::error::Result;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Names the sidebar builder treats specially.
///
/// Every field has a default, so a config file only needs the keys it
/// changes:
///
/// ```toml
/// afterword = "后记_威科夫的智慧.md"
/// reserved_dir_prefixes = ["指标工具箱", "public"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SidebarConfig {
    /// Pinned to the front of the sidebar when present at the root
    pub preface: String,
    /// Pinned after the last chapter when present at the root
    pub afterword: String,
    pub home_page: String,
    pub getting_started: String,
    /// Root directories starting with any of these are not chapters
    pub reserved_dir_prefixes: Vec<String>,
    pub supplementary_title: String,
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            preface: PREFACE_FILE.to_string(),
            afterword: AFTERWORD_FILE.to_string(),
            home_page: HOME_PAGE.to_string(),
            getting_started: GETTING_STARTED_PAGE.to_string(),
            reserved_dir_prefixes: RESERVED_DIR_PREFIXES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            supplementary_title: SUPPLEMENTARY_TITLE.to_string(),
        }
    }
}

impl SidebarConfig {
    /// Load a config from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Root files that never land in the supplementary group
    pub fn is_reserved_root_file(&self, name: &str) -> bool {
        [
            &self.home_page,
            &self.getting_started,
            &self.preface,
            &self.afterword,
        ]
        .iter()
        .any(|reserved| reserved.as_str() == name)
    }

    /// Whether a root directory name can be a chapter
    pub fn is_chapter_dir_name(&self, name: &str) -> bool {
        !name.starts_with('.')
            && !self
                .reserved_dir_prefixes
                .iter()
                .any(|prefix| name.starts_with(prefix.as_str()))
    }
}
