//! Hospital search over DuckDuckGo's HTML endpoint
//!
//! The HTML endpoint needs no API key and returns a plain result list:
//!
//! ```html
//! <div class="result results_links web-result">
//!   <a class="result__a" href="//duckduckgo.com/l/?uddg=https%3A%2F%2Fexample.org%2F">Title</a>
//!   <a class="result__snippet" href="...">Snippet text</a>
//! </div>
//! ```
//!
//! Sponsored entries (`result--ad`) are skipped and redirect links are
//! unwrapped to their `uddg` target.

use crate::config::FileSearchConfig;
use async_trait::async_trait;
use early_detect_application::{HospitalSearch, SearchError};
use early_detect_domain::HospitalResult;
use early_detect_domain::core::string::collapse_whitespace;
use reqwest::Url;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

pub struct DuckDuckGoSearch {
    client: reqwest::Client,
    endpoint: String,
    region: String,
}

impl DuckDuckGoSearch {
    pub fn new(client: reqwest::Client, config: &FileSearchConfig) -> Self {
        Self {
            client,
            endpoint: config.endpoint.clone(),
            region: config.region.clone(),
        }
    }
}

#[async_trait]
impl HospitalSearch for DuckDuckGoSearch {
    async fn search(
        &self,
        query: &str,
        max_results: usize,
    ) -> Result<Vec<HospitalResult>, SearchError> {
        debug!("Searching: {}", query);
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("q", query), ("kl", self.region.as_str())])
            .send()
            .await
            .map_err(|e| SearchError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Status(status.as_u16()));
        }

        let html = response
            .text()
            .await
            .map_err(|e| SearchError::RequestFailed(e.to_string()))?;

        let results = parse_results(&html, max_results)?;
        debug!("Search returned {} results", results.len());
        Ok(results)
    }
}

fn selector(css: &str) -> Result<Selector, SearchError> {
    Selector::parse(css).map_err(|e| SearchError::Parse(format!("selector '{}': {}", css, e)))
}

fn element_text(element: ElementRef) -> String {
    collapse_whitespace(&element.text().collect::<String>())
}

/// Extract up to `max_results` organic results, in page order.
pub(crate) fn parse_results(html: &str, max_results: usize) -> Result<Vec<HospitalResult>, SearchError> {
    let result_sel = selector("div.result")?;
    let title_sel = selector("a.result__a")?;
    let snippet_sel = selector(".result__snippet")?;

    let document = Html::parse_document(html);
    let mut results = Vec::new();

    for result in document.select(&result_sel) {
        if results.len() >= max_results {
            break;
        }
        if result.value().classes().any(|c| c == "result--ad") {
            continue;
        }
        let Some(anchor) = result.select(&title_sel).next() else {
            continue;
        };
        let Some(link) = anchor.value().attr("href").and_then(resolve_link) else {
            continue;
        };
        let title = element_text(anchor);
        if title.is_empty() {
            continue;
        }
        let snippet = result
            .select(&snippet_sel)
            .next()
            .map(element_text)
            .unwrap_or_default();

        results.push(HospitalResult::new(title, link, snippet));
    }

    Ok(results)
}

/// Turn a result href into the destination URL.
///
/// Protocol-relative links get `https:`; `/l/?uddg=` redirects are unwrapped.
pub(crate) fn resolve_link(href: &str) -> Option<String> {
    let href = href.trim();
    if href.is_empty() {
        return None;
    }
    let absolute = if href.starts_with("//") {
        format!("https:{}", href)
    } else if href.starts_with('/') {
        format!("https://duckduckgo.com{}", href)
    } else {
        href.to_string()
    };

    let url = Url::parse(&absolute).ok()?;
    if url.path().starts_with("/l/")
        && let Some((_, target)) = url.query_pairs().find(|(k, _)| k == "uddg")
    {
        return Some(target.into_owned());
    }
    Some(url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
<html><body>
<div class="results">
  <div class="result results_links result--ad">
    <a class="result__a" href="https://duckduckgo.com/y.js?ad_provider=x">Sponsored Clinic</a>
    <a class="result__snippet">Book now</a>
  </div>
  <div class="result results_links web-result">
    <h2 class="result__title">
      <a class="result__a" href="//duckduckgo.com/l/?uddg=https%3A%2F%2Fwww.massgeneral.org%2Finfectious%2Ddiseases&amp;rut=abc">Infectious Diseases | Massachusetts
        General Hospital</a>
    </h2>
    <a class="result__snippet" href="//duckduckgo.com/l/?uddg=x">Schedule an   appointment with our <b>infectious disease</b> specialists.</a>
  </div>
  <div class="result results_links web-result">
    <a class="result__a" href="https://www.bmc.org/appointments">Boston Medical Center</a>
  </div>
  <div class="result results_links web-result">
    <a class="result__a">No link</a>
  </div>
  <div class="result results_links web-result">
    <a class="result__a" href="https://www.brighamandwomens.org/">Brigham and Women's</a>
    <a class="result__snippet">Top ranked.</a>
  </div>
</div>
</body></html>
"#;

    #[test]
    fn test_parse_results() {
        let results = parse_results(PAGE, 5).unwrap();
        assert_eq!(results.len(), 3);

        assert_eq!(
            results[0].title,
            "Infectious Diseases | Massachusetts General Hospital"
        );
        assert_eq!(results[0].link, "https://www.massgeneral.org/infectious-diseases");
        assert_eq!(
            results[0].snippet,
            "Schedule an appointment with our infectious disease specialists."
        );

        assert_eq!(results[1].title, "Boston Medical Center");
        assert_eq!(results[1].snippet, "");
        assert_eq!(results[2].link, "https://www.brighamandwomens.org/");
    }

    #[test]
    fn test_parse_results_respects_limit() {
        let results = parse_results(PAGE, 2).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[1].title, "Boston Medical Center");
        assert!(parse_results(PAGE, 0).unwrap().is_empty());
    }

    #[test]
    fn test_parse_empty_page() {
        assert!(parse_results("<html><body>No results.</body></html>", 5)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_resolve_link() {
        assert_eq!(
            resolve_link("//duckduckgo.com/l/?uddg=https%3A%2F%2Fexample.org%2Fa%3Fb%3D1&rut=x").as_deref(),
            Some("https://example.org/a?b=1")
        );
        assert_eq!(
            resolve_link("/l/?uddg=https%3A%2F%2Fexample.org%2F").as_deref(),
            Some("https://example.org/")
        );
        assert_eq!(
            resolve_link("https://example.org/x").as_deref(),
            Some("https://example.org/x")
        );
        assert_eq!(resolve_link(""), None);
        assert_eq!(resolve_link("not a url"), None);
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_error() {
        let config = FileSearchConfig {
            endpoint: "http://127.0.0.1:9/html/".into(),
            ..Default::default()
        };
        let search = DuckDuckGoSearch::new(reqwest::Client::new(), &config);
        let err = search.search("Malaria hospital near Boston", 5).await.unwrap_err();
        assert!(matches!(err, SearchError::RequestFailed(_)));
    }
}
