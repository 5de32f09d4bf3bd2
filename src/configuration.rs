use serde::Deserialize;
use serde_aux::field_attributes::deserialize_number_from_string;

#[derive(Deserialize, Clone)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub llm: LlmSettings,
}

#[derive(Deserialize, Clone)]
pub struct ApplicationSettings {
    pub host: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
}

#[derive(Deserialize, Clone)]
pub struct LlmSettings {
    // Missing key is not a startup error; every completion call fails instead.
    #[serde(default)]
    pub api_key: String,
    pub base_url: String,
    pub model: String,
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir().expect("Failed to determine the current directory");

    let settings = config::Config::builder()
        .set_default("application.host", "0.0.0.0")?
        .set_default("application.port", "8000")?
        .set_default("llm.base_url", "https://api.groq.com/openai/v1")?
        .set_default("llm.model", "llama3-8b-8192")?
        .add_source(config::File::from(base_path.join("configuration.yaml")).required(false))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    let mut settings = settings.try_deserialize::<Settings>()?;

    if let Ok(api_key) = std::env::var("GROQ_API_KEY") {
        settings.llm.api_key = api_key;
    }
    if let Ok(base_url) = std::env::var("GROQ_API_BASE") {
        settings.llm.base_url = base_url;
    }

    Ok(settings)
}
