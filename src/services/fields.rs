// src/services/fields.rs

//! Single-field extractors.
//!
//! Title, rank and URL come from a post's title row; the rest come from its
//! subtext cell. Each extractor is a pure function of the node it is given.
//! Exact machine-readable values (href, timestamp) are read from attributes,
//! everything else from visible text with light cleanup.

use std::sync::LazyLock;

use chrono::{DateTime, NaiveDateTime, Utc};
use regex::Regex;

use crate::error::{AppError, Result};
use crate::models::ListingSelectors;
use crate::utils::dom::{Node, find_one};

const SELECTORS: ListingSelectors = ListingSelectors::HACKER_NEWS;

/// Format of the age span's `title` attribute.
pub const POSTED_AT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

static NON_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^0-9]+").expect("static regex is valid"));

/// Visible text of the row's single title anchor.
pub fn extract_title<N: Node>(title_row: &N) -> Result<String> {
    Ok(find_one(title_row, SELECTORS.title)?.text())
}

/// Rank number, e.g. `7` from `"7."`.
pub fn extract_rank<N: Node>(title_row: &N) -> Result<u32> {
    let text = find_one(title_row, SELECTORS.rank)?.text();
    let digits = text.trim();
    let digits = digits.strip_suffix('.').unwrap_or(digits);
    parse_number(digits)
}

/// The story link's `href`, verbatim.
pub fn extract_url<N: Node>(title_row: &N) -> Result<String> {
    let link = find_one(title_row, SELECTORS.link)?;
    Ok(link.attr("href").unwrap_or_default())
}

/// Submitter handle, or an empty string when the post has none (job posts).
pub fn extract_author<N: Node>(subtext: &N) -> Result<String> {
    let users = subtext.find(SELECTORS.author)?;
    Ok(match users.as_slice() {
        [user] => user.text(),
        _ => String::new(),
    })
}

/// Points, from either `"1234 points"` or `"1 point"`.
pub fn extract_score<N: Node>(subtext: &N) -> Result<u32> {
    let text = find_one(subtext, SELECTORS.score)?.text();
    let text = text.trim();
    let digits = text
        .strip_suffix("points")
        .or_else(|| text.strip_suffix("point"))
        .unwrap_or(text);
    parse_number(digits.trim())
}

/// Comment count from the subtext links.
///
/// The site links a post without comments as "discuss", which counts as
/// zero. Otherwise the link reading "N comment(s)" carries the count. Any
/// change to that wording makes every row fail here.
pub fn extract_comment_count<N: Node>(subtext: &N) -> Result<u32> {
    let mut count_text = None;
    for link in subtext.find(SELECTORS.comment_link)? {
        let text = link.text();
        if text.contains("discuss") {
            return Ok(0);
        }
        if text.contains("comment") {
            count_text = Some(NON_DIGITS.replace_all(&text, "").into_owned());
        }
    }

    let digits = count_text.ok_or(AppError::UnexpectedFormat)?;
    parse_number(&digits)
}

/// Submission time from the age span's `title` attribute.
///
/// The attribute may carry a trailing epoch value after a space; only the
/// leading `YYYY-MM-DDTHH:MM:SS` token is read.
pub fn extract_posted_at<N: Node>(subtext: &N) -> Result<DateTime<Utc>> {
    let age = find_one(subtext, SELECTORS.age)?;
    let title = age.attr("title").ok_or(AppError::UnexpectedFormat)?;
    let stamp = title
        .split_whitespace()
        .next()
        .ok_or(AppError::UnexpectedFormat)?;

    NaiveDateTime::parse_from_str(stamp, POSTED_AT_FORMAT)
        .map(|dt| dt.and_utc())
        .map_err(|_| AppError::UnexpectedFormat)
}

fn parse_number(s: &str) -> Result<u32> {
    s.parse().map_err(|_| AppError::UnexpectedFormat)
}
