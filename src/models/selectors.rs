// src/models/selectors.rs

//! CSS selectors for scraping a listing page.

/// CSS selectors locating each post field in the listing markup.
///
/// Row selectors are applied from the document root, title selectors from a
/// title row, and the rest from a subtext cell. Class predicates use
/// substring matching (`[class*=...]`) so extra classes on an element do not
/// break a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListingSelectors {
    /// Every row of the post listing table
    pub row: &'static str,

    /// Metadata cell within the second row of a post
    pub subtext: &'static str,

    /// Title anchor within the title row
    pub title: &'static str,

    /// Rank span within the title row
    pub rank: &'static str,

    /// Link-styled anchor carrying the story href
    pub link: &'static str,

    /// Submitter anchor within the subtext cell
    pub author: &'static str,

    /// Points span within the subtext cell
    pub score: &'static str,

    /// Candidate comment links within the subtext cell
    pub comment_link: &'static str,

    /// Age span whose `title` attribute holds the submission time
    pub age: &'static str,
}

impl ListingSelectors {
    /// Markup contract of the Hacker News listing pages.
    pub const HACKER_NEWS: Self = Self {
        row: "table[class*='itemlist'] > tbody > tr",
        subtext: "td[class*='subtext']",
        title: "td > a",
        rank: "td > span[class*='rank']",
        link: "td > a[class*='titlelink']",
        author: "a[class*='hnuser']",
        score: "span[class*='score']",
        comment_link: "a",
        age: "span[class*='age']",
    };
}

impl Default for ListingSelectors {
    fn default() -> Self {
        Self::HACKER_NEWS
    }
}
