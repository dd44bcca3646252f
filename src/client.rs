use async_trait::async_trait;
use log::{debug, info};
use crate::config::{
  DEFAULT_MAX_TOKENS, PROVIDER_DEFAULT_TEMPERATURE
};
use crate::error::Error;
use crate::message::ChatMessage;
use crate::providers::{ChatModel, GroqChatModel};
use crate::request::ChatResult;

/// Host-facing Groq provider: the descriptor plus a ready chat model
#[derive(Debug, Clone)]
pub struct GroqProvider
{   model: GroqChatModel
}

impl GroqProvider
{   pub const ID: &'static str = "groq";
    pub const NAME: &'static str = "Groq";
    pub const MODEL_ID_KEY: &'static str = "model";

    pub fn builder() -> GroqProviderBuilder
    {   GroqProviderBuilder::default()
    }

    /// Static description the host uses to list and render the provider
    pub fn descriptor() -> crate::ProviderDescriptor
    {   crate::ProviderDescriptor
        {   id: Self::ID.to_string()
          , name: Self::NAME.to_string()
          , model_id_key: Self::MODEL_ID_KEY.to_string()
          , models: crate::MODELS.iter().map(|m| m.to_string()).collect()
          , auth_strategy: Self::auth_strategy()
          , fields: vec![
              crate::TextField
              {   key: "temperature".to_string()
                , label: "Temperature (0.0 - 2.0)".to_string()
                , format: crate::FieldFormat::Text
              }
            , crate::TextField
              {   key: "max_tokens".to_string()
                , label: "Max tokens".to_string()
                , format: crate::FieldFormat::Text
              }
            ]
        }
    }

    pub fn auth_strategy() -> crate::EnvAuthStrategy
    {   crate::EnvAuthStrategy
        {   name: crate::GROQ_API_KEY_ENV.to_string()
          , keyword_param: "api_key".to_string()
        }
    }

    pub fn config(&self) -> &crate::config::GroqConfig
    {   self.model.config()
    }

    pub fn chat_model(&self) -> &GroqChatModel
    {   &self.model
    }

    /// See [`GroqChatModel::generate_blocking`]
    pub fn generate_blocking(
      &self
    , messages: &[ChatMessage]
    , stop: Option<&[String]>
    ) -> Result<ChatResult, Error>
    {   self.model.generate_blocking(messages, stop)
    }
}

#[async_trait]
impl ChatModel for GroqProvider
{   fn llm_type(&self) -> &'static str
    {   self.model.llm_type()
    }

    async fn generate(
      &self
    , messages: &[ChatMessage]
    , stop: Option<&[String]>
    ) -> Result<ChatResult, Error>
    {   self.model.generate(messages, stop).await
    }
}

/// Provider construction step. Unset values fall back once, here:
/// model → `MODELS[0]`, max_tokens → 4096, temperature → 1.1,
/// api_key → the auth strategy's env var.
#[derive(Debug, Clone, Default)]
pub struct GroqProviderBuilder
{   inner: crate::config::GroqConfigBuilder
  , auth_strategy: Option<crate::EnvAuthStrategy>
}

impl GroqProviderBuilder
{   pub fn model_id(mut self, model: impl Into<String>) -> Self
    {   self.inner = self.inner.model(model);
        self
    }

    pub fn api_key(mut self, key: impl Into<String>) -> Self
    {   self.inner = self.inner.api_key(key);
        self
    }

    pub fn max_tokens(mut self, max_tokens: u32) -> Self
    {   self.inner = self.inner.max_tokens(max_tokens);
        self
    }

    pub fn temperature(mut self, temperature: f32) -> Self
    {   self.inner = self.inner.temperature(temperature);
        self
    }

    pub fn api_base(mut self, api_base: impl Into<String>) -> Self
    {   self.inner = self.inner.api_base(api_base);
        self
    }

    pub fn timeout_secs(mut self, secs: u64) -> Self
    {   self.inner = self.inner.timeout_secs(secs);
        self
    }

    /// Apply a host-rendered text field (`temperature` / `max_tokens`)
    pub fn field(mut self, key: &str, value: &str)
      -> Result<Self, Error>
    {   self.inner = self.inner.field(key, value)?;
        Ok(self)
    }

    /// Override where the API key is looked up
    pub fn auth_strategy(
      mut self
    , strategy: crate::EnvAuthStrategy
    ) -> Self
    {   self.auth_strategy = Some(strategy);
        self
    }

    pub fn build(self) -> Result<GroqProvider, Error>
    {   let mut inner = self.inner;

        if !inner.has_model()
        {   debug!("No model id given, using {}", crate::MODELS[0]);
            inner = inner.model(crate::MODELS[0]);
        }
        if !inner.has_max_tokens()
        {   inner = inner.max_tokens(DEFAULT_MAX_TOKENS);
        }
        if !inner.has_temperature()
        {   inner = inner.temperature(PROVIDER_DEFAULT_TEMPERATURE);
        }
        if !inner.has_api_key()
        {   let strategy = self.auth_strategy
              .unwrap_or_else(GroqProvider::auth_strategy);
            debug!("Resolving API key from {}", strategy.name);
            inner = inner.api_key(strategy.resolve()?);
        }

        let model = GroqChatModel::new(inner.build()?)?;
        info!("Groq provider ready: {}", model.config().model);
        Ok(GroqProvider { model })
    }
}
