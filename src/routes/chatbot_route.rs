use actix_web::{post, web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::{
    domain::build_prompt,
    services::{scrape_visible_text, GroqClient, SearchClient, SearchOutcome},
};

#[derive(Deserialize)]
pub struct ChatbotRequest {
    prompt: String,
}

#[derive(Serialize)]
pub struct ChatbotResponse {
    result: String,
    source: String,
}

/*
1. Find a candidate URL for the topic via web search (allow-listed domains only)
2. Scrape the candidate page's visible text, if a URL was found
3. Build the prompt from the scraped context, or from the topic alone
4. Ask the completion endpoint for a short description
Every upstream failure downgrades the prompt instead of failing the request;
the response is always 200 with best-effort content.
*/
#[post("/chatbot")]
async fn chatbot(
    body: web::Json<ChatbotRequest>,
    http_client: web::Data<reqwest::Client>,
    search_client: web::Data<SearchClient>,
    groq_client: web::Data<GroqClient>,
) -> HttpResponse {
    let topic = body.prompt.as_str();

    let candidate_url = match search_client.find_candidate_url(topic).await {
        SearchOutcome::Match(url) => Some(url),
        SearchOutcome::NoMatch => None,
        SearchOutcome::Failed(e) => {
            log::error!("Search failed for topic {}: {:?}", topic, e);
            None
        }
    };

    // A scrape failure does not erase the found URL from the response.
    let scraped_text = match candidate_url.as_deref() {
        Some(url) => match scrape_visible_text(&http_client, url).await {
            Ok(text) => Some(text),
            Err(e) => {
                log::error!("Failed to scrape {}: {:?}", url, e);
                None
            }
        },
        None => None,
    };

    let prompt = build_prompt(topic, scraped_text.as_deref());
    let result = groq_client.describe_topic(&prompt).await;

    HttpResponse::Ok().json(ChatbotResponse {
        result,
        source: candidate_url.unwrap_or_else(|| "None".to_string()),
    })
}
