use std::net::TcpListener;

use env_logger::Env;
use scout::{
    configuration::get_configuration,
    services::{GroqClient, SearchClient},
    startup::run,
};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let configuration = get_configuration().expect("Failed to read configuration.");

    let address = format!(
        "{}:{}",
        configuration.application.host, configuration.application.port
    );
    let listener = TcpListener::bind(address)?;

    // One client for the search and scrape calls, reused across requests.
    let http_client = reqwest::Client::new();
    let search_client = SearchClient::new(http_client.clone());
    let groq_client = GroqClient::new(configuration.llm);

    run(listener, http_client, search_client, groq_client)?.await
}
