use anyhow::Result;

/// Application configuration loaded from environment variables.
///
/// Both API keys are optional: the CLI wiring substitutes deterministic
/// offline adapters for whatever is missing. The workflow core itself
/// never inspects credentials.
#[derive(Debug, Clone)]
pub struct AppConfig {
    // AI / LLM
    pub openai_api_key: Option<String>,
    pub openai_model: String,

    // Web search
    pub serper_api_key: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let config = Self {
            openai_api_key: std::env::var("OPENAI_API_KEY").ok().filter(|k| !k.is_empty()),
            openai_model: std::env::var("OPENAI_MODEL")
                .unwrap_or_else(|_| "gpt-4o".to_string()),
            serper_api_key: std::env::var("SERPER_API_KEY").ok().filter(|k| !k.is_empty()),
        };

        config.log_keys();
        Ok(config)
    }

    fn log_keys(&self) {
        fn preview_opt(val: &Option<String>) -> String {
            match val {
                Some(v) if !v.is_empty() => {
                    let n = v.len().min(5);
                    format!("{}...({} chars)", &v[..n], v.len())
                }
                _ => "<not set>".to_string(),
            }
        }

        tracing::info!("Config loaded:");
        tracing::info!("  OPENAI_API_KEY: {}", preview_opt(&self.openai_api_key));
        tracing::info!("  OPENAI_MODEL: {}", self.openai_model);
        tracing::info!("  SERPER_API_KEY: {}", preview_opt(&self.serper_api_key));
    }
}
