use std::time::Duration;

use scraper::{ElementRef, Html};

const SCRAPE_TIMEOUT: Duration = Duration::from_secs(10);
const SKIPPED_TAGS: [&str; 3] = ["script", "style", "noscript"];

/// Fetches the candidate page and extracts its visible text. The body is
/// parsed as HTML whatever its content type; scraping a PDF or an image just
/// produces little or no text, which downgrades to the topic-only prompt.
pub async fn scrape_visible_text(
    client: &reqwest::Client,
    url: &str,
) -> Result<String, reqwest::Error> {
    let response = client.get(url).timeout(SCRAPE_TIMEOUT).send().await?;
    let html_content = response.text().await?;

    Ok(extract_visible_text(&html_content))
}

/// Plain text of the document with `script`, `style` and `noscript` subtrees
/// removed; remaining text nodes are joined by newlines and the whole result
/// is trimmed.
pub fn extract_visible_text(html: &str) -> String {
    let html_document = Html::parse_document(html);

    let mut chunks: Vec<String> = vec![];
    collect_text_nodes(html_document.root_element(), &mut chunks);

    chunks.join("\n").trim().to_string()
}

fn collect_text_nodes(element: ElementRef, chunks: &mut Vec<String>) {
    if SKIPPED_TAGS.contains(&element.value().name()) {
        return;
    }

    for child in element.children() {
        if let Some(text) = child.value().as_text() {
            let text = text.trim();
            if !text.is_empty() {
                chunks.push(text.to_string());
            }
        } else if let Some(child_element) = ElementRef::wrap(child) {
            collect_text_nodes(child_element, chunks);
        }
    }
}
