//! Ordering of chapters and sections by their Chinese numerals.
//!
//! Names such as `第三章_威氏逃顶策略` or `第十二节_总结.md` carry their position
//! in the book. Anything that cannot be read that way sorts last.

use crate::constants::{numeral_value, CHAPTER_NUMERAL_PATTERN, SENTINEL_RANK};
use regex::Regex;
use std::sync::LazyLock;

static CHAPTER_NUMERAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(CHAPTER_NUMERAL_PATTERN).expect("chapter numeral pattern"));

/// Rank a chapter or section name by the first `第…章` / `第…节` token it contains.
///
/// Supports one through nineteen. Everything else, including twenty and
/// above, returns [`SENTINEL_RANK`].
pub fn numeral_rank(name: &str) -> u32 {
    let Some(caps) = CHAPTER_NUMERAL.captures(name) else {
        return SENTINEL_RANK;
    };

    let numerals: Vec<char> = caps[1].chars().collect();
    match numerals.as_slice() {
        [single] => numeral_value(*single).unwrap_or(SENTINEL_RANK),
        ['十', unit] => match numeral_value(*unit) {
            Some(value) if value < 10 => 10 + value,
            _ => SENTINEL_RANK,
        },
        _ => SENTINEL_RANK,
    }
}

/// Stable ascending sort by numeral rank; equal ranks keep their input order.
///
/// Each name comes back paired with its rank so callers can spot the
/// sentinel ones without ranking again.
pub fn sort_by_rank<T: AsRef<str>>(names: Vec<T>) -> Vec<(u32, T)> {
    let mut ranked: Vec<(u32, T)> = names
        .into_iter()
        .map(|name| (numeral_rank(name.as_ref()), name))
        .collect();
    ranked.sort_by_key(|&(rank, _)| rank);
    ranked
}
