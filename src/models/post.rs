//! Post data structure.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::resolve;

/// Root URL that relative post links are resolved against.
pub const SITE_ROOT: &str = "https://news.ycombinator.com/";

/// A single story scraped from a listing page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Post {
    /// Position on the page, starting at 1 on the front page
    pub rank: u32,

    /// Story title as displayed
    pub title: String,

    /// Points received from voting
    pub score: u32,

    /// Submitter handle (empty string when the listing has no author)
    pub author: String,

    /// Link target exactly as found in the markup (may be empty or relative)
    pub url: String,

    /// Number of comments at retrieval time
    pub comment_count: u32,

    /// Submission time
    pub posted_at: DateTime<Utc>,
}

impl Post {
    /// Link target resolved against the site root.
    ///
    /// Returns `None` for posts without a link.
    pub fn absolute_url(&self) -> Option<String> {
        if self.url.is_empty() {
            return None;
        }
        resolve(SITE_ROOT, &self.url)
    }

    /// Format post for display using a template.
    ///
    /// Supported placeholders:
    /// - `{rank}`, `{title}`, `{score}`, `{author}`
    /// - `{url}` (as scraped), `{link}` (resolved, see [`Post::absolute_url`])
    /// - `{comments}`, `{posted_at}`
    pub fn format(&self, template: &str) -> String {
        let link = self.absolute_url().unwrap_or_default();
        template
            .replace("{rank}", &self.rank.to_string())
            .replace("{title}", &self.title)
            .replace("{score}", &self.score.to_string())
            .replace("{author}", &self.author)
            .replace("{url}", &self.url)
            .replace("{link}", &link)
            .replace("{comments}", &self.comment_count.to_string())
            .replace("{posted_at}", &self.posted_at.to_rfc3339())
    }
}
