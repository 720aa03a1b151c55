use std::{sync::Arc, time::Duration};

use async_openai::{config::OpenAIConfig, Client};
use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use crate::{
    config::Config,
    constants::prompts::JSON_ONLY_SYSTEM_PROMPT,
    errors::GeneratorError,
    services::retry::RetryPolicy,
};

static CODE_FENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)```(?i:json)?(.*?)(?:```|$)").expect("CODE_FENCE is a valid regex pattern")
});

/// One chat-completion call.
#[derive(Clone, Debug, PartialEq)]
pub struct CompletionRequest {
    pub model: String,
    pub system: Option<String>,
    pub user: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

/// Sampling budget for a family of calls.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CompletionParams {
    pub temperature: f32,
    pub max_tokens: u32,
}

impl CompletionParams {
    pub const QUESTION: CompletionParams = CompletionParams {
        temperature: 0.8,
        max_tokens: 200,
    };
    pub const ROADMAP: CompletionParams = CompletionParams {
        temperature: 0.7,
        max_tokens: 4000,
    };
    pub const CLASSIFIER: CompletionParams = CompletionParams {
        temperature: 0.0,
        max_tokens: 5,
    };
    pub const TUTOR: CompletionParams = CompletionParams {
        temperature: 0.7,
        max_tokens: 1000,
    };
}

/// Raw text completion against a hosted model.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, GeneratorError>;
}

/// Groq's OpenAI-compatible chat endpoint, called with untyped JSON bodies.
pub struct GroqClient {
    client: Client<OpenAIConfig>,
    timeout: Duration,
}

impl GroqClient {
    pub fn new(api_base: &str, api_key: &str, timeout: Duration) -> Self {
        let config = OpenAIConfig::new()
            .with_api_base(api_base)
            .with_api_key(api_key);

        Self {
            client: Client::with_config(config),
            timeout,
        }
    }

    /// Builds a client when a credential is configured.
    pub fn from_config(config: &Config) -> Option<Self> {
        let api_key = config.groq_api_key.as_ref()?;
        Some(Self::new(
            &config.groq_api_base,
            api_key.expose_secret(),
            config.generator_timeout(),
        ))
    }
}

#[async_trait]
impl CompletionClient for GroqClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, GeneratorError> {
        let mut messages = Vec::with_capacity(2);
        if let Some(system) = &request.system {
            messages.push(json!({ "role": "system", "content": system }));
        }
        messages.push(json!({ "role": "user", "content": request.user }));

        let body = json!({
            "model": request.model,
            "messages": messages,
            "temperature": request.temperature,
            "max_tokens": request.max_tokens,
        });

        let chat = self.client.chat();
        let call = chat.create_byot(body);
        let response: Value = tokio::time::timeout(self.timeout, call)
            .await
            .map_err(|_| GeneratorError::Timeout(self.timeout))??;

        extract_message_content(&response)
    }
}

fn extract_message_content(response: &Value) -> Result<String, GeneratorError> {
    response
        .pointer("/choices/0/message/content")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|content| !content.is_empty())
        .map(str::to_string)
        .ok_or(GeneratorError::EmptyResponse)
}

/// Removes a surrounding ```json ... ``` or ``` ... ``` fence, if any.
pub fn strip_code_fences(content: &str) -> &str {
    match CODE_FENCE.captures(content).and_then(|c| c.get(1)) {
        Some(inner) => inner.as_str().trim(),
        None => content.trim(),
    }
}

/// Parses model output as JSON after fence stripping.
pub fn parse_json_content(content: &str) -> Result<Value, GeneratorError> {
    let cleaned = strip_code_fences(content);
    serde_json::from_str(cleaned).map_err(|e| {
        log::debug!("Unparseable generator content: {}", cleaned);
        GeneratorError::Parse(e.to_string())
    })
}

/// The generator boundary: model selection, retry discipline and output decoding.
#[derive(Clone)]
pub struct CompletionService {
    client: Option<Arc<dyn CompletionClient>>,
    retry: RetryPolicy,
    model: String,
    chat_model: String,
}

impl CompletionService {
    pub fn new(
        client: Option<Arc<dyn CompletionClient>>,
        retry: RetryPolicy,
        model: impl Into<String>,
        chat_model: impl Into<String>,
    ) -> Self {
        Self {
            client,
            retry,
            model: model.into(),
            chat_model: chat_model.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let client = GroqClient::from_config(config)
            .map(|c| Arc::new(c) as Arc<dyn CompletionClient>);
        let retry = RetryPolicy::new(config.generator_max_attempts, config.generator_backoff());

        Self::new(client, retry, &config.groq_model, &config.groq_chat_model)
    }

    /// A service with no client; every call fails with `NotConfigured`.
    pub fn disabled() -> Self {
        Self::new(None, RetryPolicy::default(), "", "")
    }

    pub fn is_configured(&self) -> bool {
        self.client.is_some()
    }

    /// Requests a JSON document and decodes it into `T`.
    ///
    /// Transport, parse and schema failures are all retried under the same policy.
    pub async fn generate_typed<T, V>(
        &self,
        label: &str,
        prompt: &str,
        params: CompletionParams,
        validate: V,
    ) -> Result<T, GeneratorError>
    where
        T: DeserializeOwned,
        V: Fn(&T) -> Result<(), String>,
    {
        let client = self.client.as_ref().ok_or(GeneratorError::NotConfigured)?;
        let request = CompletionRequest {
            model: self.model.clone(),
            system: Some(JSON_ONLY_SYSTEM_PROMPT.to_string()),
            user: prompt.to_string(),
            temperature: params.temperature,
            max_tokens: params.max_tokens,
        };

        let request = &request;
        let validate = &validate;
        self.retry
            .run(label, move |_| async move {
                let content = client.complete(request).await?;
                let value = parse_json_content(&content)?;
                let typed: T = serde_json::from_value(value)
                    .map_err(|e| GeneratorError::Schema(e.to_string()))?;
                validate(&typed).map_err(GeneratorError::Schema)?;
                Ok(typed)
            })
            .await
    }

    /// Free-form text completion on the chat model.
    pub async fn complete_text(
        &self,
        label: &str,
        system: Option<&str>,
        user: &str,
        params: CompletionParams,
    ) -> Result<String, GeneratorError> {
        let client = self.client.as_ref().ok_or(GeneratorError::NotConfigured)?;
        let request = CompletionRequest {
            model: self.chat_model.clone(),
            system: system.map(str::to_string),
            user: user.to_string(),
            temperature: params.temperature,
            max_tokens: params.max_tokens,
        };

        let request = &request;
        self.retry
            .run(label, move |_| async move { client.complete(request).await })
            .await
    }
}
