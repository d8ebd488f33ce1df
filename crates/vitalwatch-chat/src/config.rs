pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";

/// Provider credentials and model names. A provider without a key is
/// simply left out of the chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatConfig {
    pub openai_api_key: Option<String>,
    pub openai_model: String,
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            openai_api_key: None,
            openai_model: DEFAULT_OPENAI_MODEL.to_string(),
            gemini_api_key: None,
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
        }
    }
}

impl ChatConfig {
    pub fn has_any_provider(&self) -> bool {
        self.openai_api_key.is_some() || self.gemini_api_key.is_some()
    }
}
