//! Sidebar construction from the documentation root.
//!
//! The root holds one directory per chapter plus a handful of well-known
//! pages. The resulting tree is, in order:
//!
//! 1. the preface link, if present
//! 2. one collapsible group per non-empty chapter, by chapter numeral
//! 3. the afterword link, if present
//! 4. a non-collapsible group of any remaining root pages
//!
//! The tree is rebuilt from the filesystem on every run.

use crate::config::SidebarConfig;
use crate::constants::{
    CHAPTER_INDEX_FILE, MARKDOWN_EXTENSION, NAVBAR_HOME_LINK, NAVBAR_HOME_TEXT, SENTINEL_RANK,
};
use crate::error::{Error, Result};
use crate::models::{NavbarItem, SidebarNode};
use crate::ranking::sort_by_rank;
use std::path::Path;
use walkdir::WalkDir;

// ============================================================================
// Directory Listing
// ============================================================================

/// Immediate children of a directory, split by kind, in enumeration order
#[derive(Debug, Default)]
struct DirListing {
    dirs: Vec<String>,
    markdown_files: Vec<String>,
}

/// List a single directory level. Any read failure is returned, not skipped.
///
/// Entries are classified through their path so symlinked pages and chapters
/// count as what they point to; dangling links are neither. Names that are
/// not valid UTF-8 cannot become sidebar links and are skipped.
fn list_dir(dir: &Path) -> Result<DirListing> {
    let mut listing = DirListing::default();

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry?;
        let Some(name) = entry.file_name().to_str() else {
            tracing::warn!(path = %entry.path().display(), "Skipping entry with non UTF-8 name");
            continue;
        };
        let path = entry.path();

        if path.is_dir() {
            listing.dirs.push(name.to_string());
        } else if path.is_file() && name.ends_with(MARKDOWN_EXTENSION) {
            listing.markdown_files.push(name.to_string());
        }
    }

    Ok(listing)
}

fn root_link(file: &str) -> String {
    format!("/{}", file)
}

fn page_link(chapter: &str, file: &str) -> String {
    format!("/{}/{}", chapter, file)
}

/// Display text for a chapter directory: `第一章_聪明钱` -> `第一章 聪明钱`
fn chapter_title(dir_name: &str) -> String {
    dir_name.replace('_', " ")
}

// ============================================================================
// Sidebar Generation
// ============================================================================

/// Build the group for one chapter directory, or `None` if it has no pages
fn build_chapter_group(root: &Path, chapter: &str) -> Result<Option<SidebarNode>> {
    let pages: Vec<String> = list_dir(&root.join(chapter))?
        .markdown_files
        .into_iter()
        .filter(|name| name != CHAPTER_INDEX_FILE)
        .collect();

    if pages.is_empty() {
        tracing::debug!(chapter, "Skipping chapter without pages");
        return Ok(None);
    }

    let children = sort_by_rank(pages)
        .into_iter()
        .map(|(rank, page)| {
            if rank == SENTINEL_RANK {
                tracing::debug!(chapter, page = %page, "Page has no section numeral, sorting last");
            }
            page_link(chapter, &page)
        })
        .collect();
    Ok(Some(SidebarNode::group(chapter_title(chapter), true, children)))
}

/// Build the sidebar tree for the documentation root.
///
/// A missing, non-directory or unreadable root is an error; names without a
/// chapter numeral never are, they just sort last.
pub fn build_sidebar(root: &Path, config: &SidebarConfig) -> Result<Vec<SidebarNode>> {
    if !root.is_dir() {
        return Err(Error::RootNotDirectory(root.to_path_buf()));
    }

    let listing = list_dir(root)?;
    let mut sidebar = Vec::new();

    if root.join(&config.preface).is_file() {
        sidebar.push(SidebarNode::link(root_link(&config.preface)));
    }

    let chapters: Vec<&String> = listing
        .dirs
        .iter()
        .filter(|name| config.is_chapter_dir_name(name))
        .collect();

    for (rank, chapter) in sort_by_rank(chapters) {
        if rank == SENTINEL_RANK {
            tracing::debug!(chapter = %chapter, "Chapter has no numeral, sorting last");
        }
        if let Some(group) = build_chapter_group(root, chapter)? {
            sidebar.push(group);
        }
    }

    if root.join(&config.afterword).is_file() {
        sidebar.push(SidebarNode::link(root_link(&config.afterword)));
    }

    let supplementary: Vec<String> = listing
        .markdown_files
        .iter()
        .filter(|name| !config.is_reserved_root_file(name))
        .map(|name| root_link(name))
        .collect();

    if !supplementary.is_empty() {
        sidebar.push(SidebarNode::group(
            config.supplementary_title.clone(),
            false,
            supplementary,
        ));
    }

    tracing::info!(
        root = %root.display(),
        entries = sidebar.len(),
        "Built sidebar"
    );

    Ok(sidebar)
}

// ============================================================================
// Navbar Generation
// ============================================================================

/// Build the navbar: a home link, then a shortcut to the first chapter's
/// first page labelled with its chapter token (`第一章`).
pub fn build_navbar(sidebar: &[SidebarNode]) -> Vec<NavbarItem> {
    let mut navbar = vec![NavbarItem {
        text: NAVBAR_HOME_TEXT.to_string(),
        link: NAVBAR_HOME_LINK.to_string(),
    }];

    // Chapter groups are the collapsible ones; the supplementary group is not
    let first_chapter = sidebar.iter().find_map(|node| match node {
        SidebarNode::Group(group) if group.collapsible => group
            .children
            .first()
            .map(|link| (group.text.as_str(), link)),
        _ => None,
    });

    if let Some((title, link)) = first_chapter {
        let text = title.split(' ').next().unwrap_or(title);
        navbar.push(NavbarItem {
            text: text.to_string(),
            link: link.clone(),
        });
    }

    navbar
}
