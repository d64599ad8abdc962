//! Listing markup fixtures and an in-memory document source for tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::io;

use scraper::{ElementRef, Html, Selector};

use crate::error::{AppError, Result};
use crate::utils::http::DocumentSource;

pub fn parse(html: &str) -> Html {
    Html::parse_document(html)
}

pub fn select_one<'a>(doc: &'a Html, css: &str) -> ElementRef<'a> {
    let sel = Selector::parse(css).unwrap();
    doc.select(&sel).next().unwrap()
}

/// Title row markup (`<tr>` only).
pub fn title_tr(rank: &str, title: &str, href: &str) -> String {
    format!(
        r#"<tr class="athing" id="30520542">
  <td align="right" valign="top" class="title"><span class="rank">{rank}</span></td>
  <td valign="top" class="votelinks"><center><a id="up_30520542" href="vote?id=30520542&amp;how=up"><div class="votearrow" title="upvote"></div></a></center></td>
  <td class="title"><a href="{href}" class="titlelink">{title}</a><span class="sitebit comhead"> (<a href="from?site=example.com"><span class="sitestr">example.com</span></a>)</span></td>
</tr>"#
    )
}

/// Title row wrapped in its own table.
pub fn title_row(rank: &str, title: &str, href: &str) -> String {
    format!("<table>{}</table>", title_tr(rank, title, href))
}

/// Subtext row markup (`<tr>` only) around arbitrary cell content.
pub fn subtext_tr(inner: &str) -> String {
    format!(r#"<tr><td colspan="2"></td><td class="subtext">{inner}</td></tr>"#)
}

/// Subtext cell wrapped in its own table.
pub fn subtext_cell(inner: &str) -> String {
    format!(r#"<table><tr><td class="subtext">{inner}</td></tr></table>"#)
}

/// Subtext content of a regular story.
pub fn story_subtext(score: &str, author: &str, posted: &str, comments: &str) -> String {
    format!(
        r#"<span class="score" id="score_30520542">{score}</span> by <a href="user?id={author}" class="hnuser">{author}</a> <span class="age" title="{posted}"><a href="item?id=30520542">3 hours ago</a></span> <span id="unv_30520542"></span> | <a href="hide?id=30520542&amp;goto=news">hide</a> | <a href="item?id=30520542">{comments}</a>"#
    )
}

pub const SPACER_TR: &str = r#"<tr class="spacer" style="height:5px"></tr>"#;

/// Complete row triple for a story ranked `rank`.
pub fn story_rows(rank: u32) -> String {
    format!(
        "{}{}{}",
        title_tr(
            &format!("{rank}."),
            &format!("Story number {rank}"),
            &format!("https://example.com/{rank}")
        ),
        subtext_tr(&story_subtext(
            &format!("{} points", rank * 10),
            &format!("user{rank}"),
            "2022-03-01T12:30:00",
            &format!("{rank}&nbsp;comments")
        )),
        SPACER_TR
    )
}

/// Full listing document with the trailing "More" rows the site appends.
pub fn listing(rows: &str) -> String {
    format!(
        r#"<html><head><title>Hacker News</title></head><body>
<center><table id="hnmain"><tr><td>
<table border="0" cellpadding="0" cellspacing="0" class="itemlist">
{rows}
<tr class="morespace" style="height:10px"></tr>
<tr><td colspan="2"></td><td class="title"><a href="news?p=2" class="morelink" rel="next">More</a></td></tr>
</table>
</td></tr></table></center></body></html>"#
    )
}

/// Listing of `count` stories ranked from `first_rank`.
pub fn listing_of(first_rank: u32, count: u32) -> String {
    let rows: String = (first_rank..first_rank + count).map(story_rows).collect();
    listing(&rows)
}

/// Serves canned HTML per URL and records every request in order.
#[derive(Default)]
pub struct FixtureSource {
    pages: HashMap<String, String>,
    requests: RefCell<Vec<String>>,
}

impl FixtureSource {
    pub fn with_page(mut self, url: impl Into<String>, html: impl Into<String>) -> Self {
        self.pages.insert(url.into(), html.into());
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

impl DocumentSource for FixtureSource {
    fn fetch(&self, url: &str) -> Result<Html> {
        self.requests.borrow_mut().push(url.to_string());
        self.pages
            .get(url)
            .map(|html| Html::parse_document(html))
            .ok_or_else(|| AppError::Io(io::Error::new(io::ErrorKind::NotFound, url.to_string())))
    }
}
