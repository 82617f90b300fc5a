/// Chinese numeral characters and their ranks, one through ten
pub const NUMERAL_RANKS: &[(char, u32)] = &[
    ('一', 1),
    ('二', 2),
    ('三', 3),
    ('四', 4),
    ('五', 5),
    ('六', 6),
    ('七', 7),
    ('八', 8),
    ('九', 9),
    ('十', 10),
];

/// Rank given to any name without a recognizable chapter or section numeral
pub const SENTINEL_RANK: u32 = 99;

/// Matches `第<numerals>章` or `第<numerals>节`, capturing the numeral run
pub const CHAPTER_NUMERAL_PATTERN: &str = r"第([一二三四五六七八九十]+)[节章]";

/// Get the rank of a single numeral character
pub fn numeral_value(c: char) -> Option<u32> {
    NUMERAL_RANKS
        .iter()
        .find(|&&(numeral, _)| numeral == c)
        .map(|&(_, rank)| rank)
}

// ============================================================================
// Well-known Root Files
// ============================================================================

/// Site home page
pub const HOME_PAGE: &str = "README.md";

/// Getting-started page, linked from the theme rather than the sidebar
pub const GETTING_STARTED_PAGE: &str = "get-started.md";

pub const PREFACE_FILE: &str = "前言.md";

pub const AFTERWORD_FILE: &str = "后记.md";

/// Title of the trailing group collecting leftover root pages
pub const SUPPLEMENTARY_TITLE: &str = "补充内容";

// ============================================================================
// Exclusion Rules
// ============================================================================

/// Root folders holding tooling or assets rather than chapters
pub const RESERVED_DIR_PREFIXES: &[&str] = &["指标工具箱"];

/// Per-chapter index file, never listed as a page
pub const CHAPTER_INDEX_FILE: &str = "README.md";

pub const MARKDOWN_EXTENSION: &str = ".md";

// ============================================================================
// Navbar
// ============================================================================

pub const NAVBAR_HOME_TEXT: &str = "首页";

pub const NAVBAR_HOME_LINK: &str = "/";
