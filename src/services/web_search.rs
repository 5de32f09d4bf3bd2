use scraper::{Html, Selector};
use serde::Serialize;

use crate::domain::{clean_serp_anchor, first_allowed_url};

const GOOGLE_URL: &str = "https://www.google.com/search";
const NUM_RESULTS: usize = 5;

#[derive(Serialize)]
struct GoogleQuery {
    q: String,
    num: usize,
}

pub enum SearchOutcome {
    /// First of the fetched results whose URL contains an allow-listed substring.
    Match(String),
    /// Search ran but nothing passed the allow-list (or the page had no results).
    NoMatch,
    Failed(reqwest::Error),
}

/// Candidate-URL finder over a scraped search result page. Points at Google
/// by default; the result-page URL is injectable so tests can serve a canned
/// page from a local listener.
pub struct SearchClient {
    client: reqwest::Client,
    search_url: String,
}

impl SearchClient {
    pub fn new(client: reqwest::Client) -> Self {
        Self::with_search_url(client, GOOGLE_URL.to_string())
    }

    pub fn with_search_url(client: reqwest::Client, search_url: String) -> Self {
        SearchClient { client, search_url }
    }

    /// Fetches the result page for the topic and scans the first
    /// `NUM_RESULTS` organic URLs against the domain allow-list. No retries;
    /// a blocked or empty result page is the same as no match.
    pub async fn find_candidate_url(&self, topic: &str) -> SearchOutcome {
        let query = GoogleQuery {
            q: topic.to_string(),
            num: NUM_RESULTS,
        };

        let response = match self
            .client
            .get(&self.search_url)
            .query(&query)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => return SearchOutcome::Failed(e),
        };

        let html_content = match response.text().await {
            Ok(text) => text,
            Err(e) => return SearchOutcome::Failed(e),
        };

        let html_document = Html::parse_document(&html_content);
        let a_tag_selector = Selector::parse("a").unwrap();

        let result_urls: Vec<String> = html_document
            .select(&a_tag_selector)
            .filter_map(|tag| tag.value().attr("href"))
            .filter_map(clean_serp_anchor)
            .take(NUM_RESULTS)
            .collect();

        if result_urls.is_empty() {
            log::warn!("Found no search results for topic: {}", topic);
            return SearchOutcome::NoMatch;
        }

        log::info!(
            "Scanning {} search results for topic: {}",
            result_urls.len(),
            topic
        );

        match first_allowed_url(result_urls) {
            Some(url) => SearchOutcome::Match(url),
            None => SearchOutcome::NoMatch,
        }
    }
}
