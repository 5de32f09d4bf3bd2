use url::Url;

/// Domains considered authoritative enough to scrape. Checked by plain
/// substring containment against the whole URL, in this order per URL.
/// Note the tail entries (`.org`, `.in`, `.com`) are intentionally broad;
/// the upstream curated list reads exactly like this.
pub const ALLOWED_DOMAINS: [&str; 7] = [
    "shiksha.com",
    "careers360.com",
    ".ac.in",
    ".edu.in",
    ".org",
    ".in",
    ".com",
];

pub fn matches_allow_list(url: &str) -> bool {
    ALLOWED_DOMAINS.iter().any(|domain| url.contains(domain))
}

/// First URL in the batch containing any allow-listed substring. The scan
/// does not stop at the first result; a later match in the same batch wins
/// over earlier non-matching results.
pub fn first_allowed_url<I>(urls: I) -> Option<String>
where
    I: IntoIterator<Item = String>,
{
    urls.into_iter().find(|url| matches_allow_list(url))
}

/// Normalizes an anchor href scraped from a Google result page into an
/// organic-result URL. Organic links come wrapped as `/url?q=<target>&sa=...`;
/// bare absolute links are kept unless they point at a google.com host
/// (Google's own navigation chrome). Relative and non-http links are dropped.
pub fn clean_serp_anchor(href: &str) -> Option<String> {
    let target = match href.strip_prefix("/url?q=") {
        Some(wrapped) => wrapped.split('&').next().unwrap_or(wrapped),
        None => href,
    };

    let parsed_url = Url::parse(target).ok()?;
    if parsed_url.scheme() != "http" && parsed_url.scheme() != "https" {
        return None;
    }

    match parsed_url.host_str() {
        None | Some("") => None,
        Some(host) if host.contains("google.com") => None,
        Some(_) => Some(target.to_string()),
    }
}
