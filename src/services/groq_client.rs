use anyhow::Context;
use async_openai::{
    config::OpenAIConfig,
    types::{
        ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequestArgs,
    },
    Client,
};

use crate::configuration::LlmSettings;

const SYSTEM_INSTRUCTION: &str =
    "You are a helpful assistant that gives brief and accurate descriptions of topics or institutions.";
const TEMPERATURE: f32 = 0.4;

/// Chat-completion client for the Groq OpenAI-compatible endpoint. Built once
/// at startup from explicit settings; never reads the environment at call time.
pub struct GroqClient {
    client: Client<OpenAIConfig>,
    model: String,
}

impl GroqClient {
    pub fn new(settings: LlmSettings) -> Self {
        let config = OpenAIConfig::new()
            .with_api_key(settings.api_key)
            .with_api_base(settings.base_url);

        GroqClient {
            client: Client::with_config(config),
            model: settings.model,
        }
    }

    /// Single completion call. Every failure (auth, network, malformed
    /// response) is converted into a visible error string handed back to the
    /// caller as a normal result.
    pub async fn describe_topic(&self, prompt: &str) -> String {
        match self.complete(prompt).await {
            Ok(text) => text,
            Err(e) => {
                log::error!("Completion request failed: {:?}", e);
                format!("❌ Groq API Error: {}", e)
            }
        }
    }

    async fn complete(&self, prompt: &str) -> anyhow::Result<String> {
        let request = CreateChatCompletionRequestArgs::default()
            .model(self.model.as_str())
            .temperature(TEMPERATURE)
            .messages([
                ChatCompletionRequestSystemMessageArgs::default()
                    .content(SYSTEM_INSTRUCTION)
                    .build()?
                    .into(),
                ChatCompletionRequestUserMessageArgs::default()
                    .content(prompt)
                    .build()?
                    .into(),
            ])
            .build()?;

        let response = self.client.chat().create(request).await?;

        let first_choice = response
            .choices
            .first()
            .context("No choices in completion response")?
            .message
            .content
            .clone()
            .context("No content in completion message")?;

        Ok(first_choice)
    }
}

#[cfg(test)]
mod tests {
    use super::GroqClient;
    use crate::configuration::LlmSettings;

    fn unreachable_client() -> GroqClient {
        // Nothing listens on port 1; the call fails fast with a connect error.
        GroqClient::new(LlmSettings {
            api_key: "test-key".to_string(),
            base_url: "http://127.0.0.1:1/v1".to_string(),
            model: "llama3-8b-8192".to_string(),
        })
    }

    #[actix_web::test]
    async fn failed_completion_becomes_error_marker_string() {
        let client = unreachable_client();
        let result = client.describe_topic("Give a short and clear explanation about: x").await;

        assert!(result.starts_with("❌ Groq API Error: "));
        assert!(result.len() > "❌ Groq API Error: ".len());
    }
}
