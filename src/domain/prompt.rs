/// Hard cap on scraped context embedded in the prompt. Counted in characters,
/// not bytes, and not word-boundary aware; a truncation may cut mid-word.
pub const MAX_CONTEXT_CHARS: usize = 3000;

/// Builds the single prompt sent to the completion endpoint. Exactly one of
/// two templates is produced: the description template around the scraped
/// context when it is present and non-empty, the topic-only template
/// otherwise.
pub fn build_prompt(topic: &str, scraped_text: Option<&str>) -> String {
    match scraped_text {
        Some(text) if !text.is_empty() => {
            let context: String = text.chars().take(MAX_CONTEXT_CHARS).collect();
            format!(
                "Give a brief and accurate description of the following topic based on this info:\n{}",
                context
            )
        }
        _ => format!("Give a short and clear explanation about: {}", topic),
    }
}
