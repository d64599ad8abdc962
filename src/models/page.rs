//! Page data structure.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Post;

/// One fetched listing page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Page {
    /// Posts in on-page order
    pub posts: Vec<Post>,

    /// Page number; page 1 is the front page
    pub number: u32,

    /// When the request for the page completed
    pub retrieved_at: DateTime<Utc>,
}

impl Page {
    /// Number of posts on the page.
    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}
