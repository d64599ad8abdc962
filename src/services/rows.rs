// src/services/rows.rs

//! Post row grouping and row extraction.

use crate::error::Result;
use crate::models::{ListingSelectors, Post};
use crate::utils::dom::{Node, find_one};

use super::fields::{
    extract_author, extract_comment_count, extract_posted_at, extract_rank, extract_score,
    extract_title, extract_url,
};

/// Rows making up one post in the listing table.
#[derive(Debug, Clone)]
pub struct PostRows<N> {
    /// Row holding rank, title and link
    pub title: N,

    /// Row holding the subtext cell
    pub subtext: N,
}

/// Number of table rows per post: title, subtext, spacer.
const ROWS_PER_POST: usize = 3;

/// Group the listing table's rows into posts.
///
/// Every post occupies a title row, a subtext row and a spacer row. A
/// trailing incomplete group (the "More" link rows) is dropped.
pub fn post_row_groups<N: Node>(document: &N) -> Result<Vec<PostRows<N>>> {
    let rows = document.find(ListingSelectors::HACKER_NEWS.row)?;
    Ok(rows
        .chunks_exact(ROWS_PER_POST)
        .map(|group| PostRows {
            title: group[0].clone(),
            subtext: group[1].clone(),
        })
        .collect())
}

/// Build a post from its title row and subtext cell.
///
/// Fields are extracted in a fixed order and the first failure is returned.
pub fn extract_post<N: Node>(title_row: &N, subtext: &N) -> Result<Post> {
    let title = extract_title(title_row)?;
    let rank = extract_rank(title_row)?;
    let url = extract_url(title_row)?;
    let author = extract_author(subtext)?;
    let score = extract_score(subtext)?;
    let comment_count = extract_comment_count(subtext)?;
    let posted_at = extract_posted_at(subtext)?;

    Ok(Post {
        rank,
        title,
        score,
        author,
        url,
        comment_count,
        posted_at,
    })
}

/// Extract every post in a listing document, all or nothing.
pub fn extract_posts<N: Node>(document: &N) -> Result<Vec<Post>> {
    post_row_groups(document)?
        .iter()
        .map(|rows| {
            let cell = find_one(&rows.subtext, ListingSelectors::HACKER_NEWS.subtext)?;
            extract_post(&rows.title, &cell)
        })
        .collect()
}
