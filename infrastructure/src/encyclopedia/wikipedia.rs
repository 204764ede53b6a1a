//! MediaWiki action API client
//!
//! Summaries come from `prop=extracts` (plain-text intro, limited sentence
//! count). Disambiguation pages are detected through `pageprops` and answered
//! with their first list entries as candidates. Those are read from the
//! rendered page (`action=parse`) because `prop=links` sorts by title. With
//! auto-suggest enabled, a missing title is retried once with the top
//! full-text search hit.

use async_trait::async_trait;
use early_detect_application::Encyclopedia;
use early_detect_domain::{EncyclopediaOutcome, MAX_CANDIDATES};
use scraper::{ElementRef, Html, Selector};
use serde::Deserialize;
use tracing::debug;

/// Result of a single title lookup
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum PageLookup {
    Extract { title: String, text: String },
    Disambiguation { title: String },
    Missing,
}

#[derive(Debug, Deserialize)]
struct ApiResponse<Q> {
    query: Option<Q>,
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    code: String,
    info: String,
}

#[derive(Debug, Deserialize)]
struct PagesQuery {
    #[serde(default)]
    pages: Vec<Page>,
}

#[derive(Debug, Deserialize)]
struct Page {
    title: String,
    #[serde(default)]
    missing: bool,
    #[serde(default)]
    invalid: bool,
    extract: Option<String>,
    pageprops: Option<PageProps>,
}

#[derive(Debug, Deserialize)]
struct PageProps {
    disambiguation: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ParseResponse {
    parse: Option<ParsedPage>,
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct ParsedPage {
    text: String,
}

#[derive(Debug, Deserialize)]
struct SearchQuery {
    #[serde(default)]
    search: Vec<SearchHit>,
}

#[derive(Debug, Deserialize)]
struct SearchHit {
    title: String,
}

fn decode<Q: serde::de::DeserializeOwned>(body: &str) -> Result<Q, String> {
    let response: ApiResponse<Q> =
        serde_json::from_str(body).map_err(|e| format!("invalid API response: {}", e))?;
    if let Some(err) = response.error {
        return Err(format!("{} ({})", err.info, err.code));
    }
    response
        .query
        .ok_or_else(|| "API response has no query result".to_string())
}

pub(crate) fn parse_extract(body: &str) -> Result<PageLookup, String> {
    let query: PagesQuery = decode(body)?;
    let Some(page) = query.pages.into_iter().next() else {
        return Ok(PageLookup::Missing);
    };
    if page.missing || page.invalid {
        return Ok(PageLookup::Missing);
    }
    if page
        .pageprops
        .as_ref()
        .is_some_and(|p| p.disambiguation.is_some())
    {
        return Ok(PageLookup::Disambiguation { title: page.title });
    }
    match page.extract.map(|t| t.trim().to_string()) {
        Some(text) if !text.is_empty() => Ok(PageLookup::Extract {
            title: page.title,
            text,
        }),
        _ => Ok(PageLookup::Missing),
    }
}

/// Title prefixes of links that never name an article.
const NON_ARTICLE_PREFIXES: [&str; 8] = [
    "Help:",
    "Wikipedia:",
    "Special:",
    "File:",
    "Category:",
    "Template:",
    "Portal:",
    "Talk:",
];

/// Containers whose list items are not disambiguation entries.
const SKIPPED_CONTAINERS: [&str; 4] = ["navbox", "toc", "hatnote", "mw-references-wrap"];

pub(crate) fn parse_candidates(body: &str) -> Result<Vec<String>, String> {
    let response: ParseResponse =
        serde_json::from_str(body).map_err(|e| format!("invalid API response: {}", e))?;
    if let Some(err) = response.error {
        return Err(format!("{} ({})", err.info, err.code));
    }
    let page = response
        .parse
        .ok_or_else(|| "API response has no parse result".to_string())?;
    list_entries(&page.text)
}

/// Article titles linked from list items, in page order.
fn list_entries(html: &str) -> Result<Vec<String>, String> {
    let item_sel = Selector::parse("li").map_err(|e| e.to_string())?;
    let link_sel = Selector::parse(r#"a[href^="/wiki/"][title]"#).map_err(|e| e.to_string())?;

    let document = Html::parse_fragment(html);
    let mut candidates: Vec<String> = Vec::new();

    for item in document.select(&item_sel) {
        if candidates.len() >= MAX_CANDIDATES {
            break;
        }
        let skipped = item
            .ancestors()
            .filter_map(ElementRef::wrap)
            .any(|e| e.value().classes().any(|c| SKIPPED_CONTAINERS.contains(&c)));
        if skipped {
            continue;
        }
        let Some(title) = item
            .select(&link_sel)
            .next()
            .and_then(|a| a.value().attr("title"))
        else {
            continue;
        };
        if NON_ARTICLE_PREFIXES.iter().any(|p| title.starts_with(p))
            || candidates.iter().any(|c| c == title)
        {
            continue;
        }
        candidates.push(title.to_string());
    }

    Ok(candidates)
}

pub(crate) fn parse_search(body: &str) -> Result<Option<String>, String> {
    let query: SearchQuery = decode(body)?;
    Ok(query.search.into_iter().next().map(|h| h.title))
}

/// Encyclopedia adapter for any MediaWiki site (Wikipedia by default)
pub struct WikipediaClient {
    client: reqwest::Client,
    api_url: String,
    auto_suggest: bool,
}

impl WikipediaClient {
    /// `base_url` is the site root, e.g. `https://en.wikipedia.org`.
    pub fn new(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            api_url: format!("{}/w/api.php", base_url.trim_end_matches('/')),
            auto_suggest: true,
        }
    }

    pub fn with_auto_suggest(mut self, enabled: bool) -> Self {
        self.auto_suggest = enabled;
        self
    }

    async fn get(&self, action: &str, params: &[(&str, &str)]) -> Result<String, String> {
        let response = self
            .client
            .get(&self.api_url)
            .query(&[("action", action), ("format", "json"), ("formatversion", "2")])
            .query(params)
            .send()
            .await
            .map_err(|e| format!("request failed: {}", e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(format!("HTTP {}", status.as_u16()));
        }
        response
            .text()
            .await
            .map_err(|e| format!("failed to read response: {}", e))
    }

    async fn lookup(&self, title: &str, sentences: usize) -> Result<PageLookup, String> {
        let sentences = sentences.to_string();
        let body = self
            .get(
                "query",
                &[
                ("prop", "extracts|pageprops"),
                ("ppprop", "disambiguation"),
                ("exsentences", &sentences),
                ("explaintext", "1"),
                ("exintro", "1"),
                ("redirects", "1"),
                ("titles", title),
                ],
            )
            .await?;
        parse_extract(&body)
    }

    async fn candidates(&self, title: &str) -> Result<Vec<String>, String> {
        let body = self
            .get(
                "parse",
                &[
                    ("page", title),
                    ("prop", "text"),
                    ("redirects", "1"),
                    ("disableeditsection", "1"),
                ],
            )
            .await?;
        parse_candidates(&body)
    }

    async fn suggest(&self, title: &str) -> Result<Option<String>, String> {
        let body = self
            .get(
                "query",
                &[("list", "search"), ("srsearch", title), ("srlimit", "1")],
            )
            .await?;
        parse_search(&body)
    }

    async fn resolve(&self, title: &str, sentences: usize) -> Result<EncyclopediaOutcome, String> {
        let mut lookup = self.lookup(title, sentences).await?;

        if lookup == PageLookup::Missing && self.auto_suggest {
            match self.suggest(title).await? {
                Some(suggestion) if suggestion != title => {
                    debug!("No page for '{}', trying '{}'", title, suggestion);
                    lookup = self.lookup(&suggestion, sentences).await?;
                }
                _ => {}
            }
        }

        match lookup {
            PageLookup::Extract { title, text } => {
                debug!("Summary from '{}' ({} chars)", title, text.len());
                Ok(EncyclopediaOutcome::Summary(text))
            }
            PageLookup::Disambiguation { title } => {
                Ok(EncyclopediaOutcome::ambiguous(self.candidates(&title).await?))
            }
            PageLookup::Missing => Ok(EncyclopediaOutcome::NotFound),
        }
    }
}

#[async_trait]
impl Encyclopedia for WikipediaClient {
    fn name(&self) -> &str {
        "Wikipedia"
    }

    async fn summarize(&self, title: &str, sentences: usize) -> EncyclopediaOutcome {
        match self.resolve(title, sentences).await {
            Ok(outcome) => outcome,
            Err(detail) => {
                debug!("MediaWiki request for '{}' failed: {}", title, detail);
                EncyclopediaOutcome::TransientError(detail)
            }
        }
    }
}
