pub mod groq_client;
pub mod page_scraper;
pub mod web_search;

pub use groq_client::*;
pub use page_scraper::*;
pub use web_search::*;
