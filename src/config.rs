//! Configuration for the Groq chat model

use serde::{Deserialize, Serialize};
use log::debug;
use crate::error::Error;

/// Groq's OpenAI-compatible API root
pub const GROQ_API_BASE: &str
  = "https://api.groq.com/openai/v1";

/// Completion length used when none is configured
pub const DEFAULT_MAX_TOKENS: u32 = 4096;

/// Temperature fallback of the bare chat model.
///
/// Note: the provider applies its own fallback,
/// [`PROVIDER_DEFAULT_TEMPERATURE`] (1.1), before this one is ever
/// consulted. The two values disagree; both are kept as-is.
pub const MODEL_DEFAULT_TEMPERATURE: f32 = 1.0;

/// Temperature fallback applied by `GroqProvider` at construction.
/// See [`MODEL_DEFAULT_TEMPERATURE`].
pub const PROVIDER_DEFAULT_TEMPERATURE: f32 = 1.1;

/// Resolved, immutable chat model configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct GroqConfig
{   /// Groq model identifier
    pub model: String
  , /// Bearer credential
    pub api_key: String
  , /// Max tokens to generate
    pub max_tokens: u32
  , /// Sampling temperature
    pub temperature: f32
  , /// API base URL
    pub api_base: String
  , /// Request timeout in seconds (HTTP client default when unset)
    pub timeout_secs: Option<u64>
}

// Hand-written so the key never reaches a log line.
impl std::fmt::Debug for GroqConfig
{   fn fmt(&self, f: &mut std::fmt::Formatter<'_>)
      -> std::fmt::Result
    {   f.debug_struct("GroqConfig")
          .field("model", &self.model)
          .field("api_key", &"<redacted>")
          .field("max_tokens", &self.max_tokens)
          .field("temperature", &self.temperature)
          .field("api_base", &self.api_base)
          .field("timeout_secs", &self.timeout_secs)
          .finish()
    }
}

impl GroqConfig
{   pub fn builder() -> GroqConfigBuilder
    {   GroqConfigBuilder::default()
    }

    /// Full URL of the chat completions endpoint
    pub fn chat_completions_url(&self) -> String
    {   format!(
          "{}/chat/completions",
          self.api_base.trim_end_matches('/')
        )
    }
}

/// Builder with named fields; unset fields fall back at `build()`:
/// max_tokens → 4096, temperature → 1.0, api_base → Groq.
/// `model` and `api_key` have no fallback.
#[derive(Debug, Clone, Default)]
pub struct GroqConfigBuilder
{   model: Option<String>
  , api_key: Option<String>
  , max_tokens: Option<u32>
  , temperature: Option<f32>
  , api_base: Option<String>
  , timeout_secs: Option<u64>
}

impl GroqConfigBuilder
{   pub fn model(mut self, model: impl Into<String>) -> Self
    {   self.model = Some(model.into());
        self
    }

    pub fn api_key(mut self, key: impl Into<String>) -> Self
    {   self.api_key = Some(key.into());
        self
    }

    pub fn max_tokens(mut self, max_tokens: u32) -> Self
    {   self.max_tokens = Some(max_tokens);
        self
    }

    pub fn temperature(mut self, temperature: f32) -> Self
    {   self.temperature = Some(temperature);
        self
    }

    pub fn api_base(mut self, api_base: impl Into<String>) -> Self
    {   self.api_base = Some(api_base.into());
        self
    }

    pub fn timeout_secs(mut self, secs: u64) -> Self
    {   self.timeout_secs = Some(secs);
        self
    }

    pub fn has_model(&self) -> bool
    {   self.model.as_deref().is_some_and(|m| !m.is_empty())
    }

    pub fn has_api_key(&self) -> bool
    {   self.api_key.as_deref().is_some_and(|k| !k.is_empty())
    }

    pub fn has_max_tokens(&self) -> bool
    {   self.max_tokens.is_some()
    }

    pub fn has_temperature(&self) -> bool
    {   self.temperature.is_some()
    }

    /// Apply a host-rendered text field. Values arrive as raw text;
    /// an empty value leaves the field unset.
    pub fn field(mut self, key: &str, value: &str)
      -> Result<Self, Error>
    {   let value = value.trim();
        if value.is_empty()
        {   debug!("Field {} left empty", key);
            return Ok(self);
        }
        match key
        {   "temperature" => {
              let t: f32 = value.parse().map_err(|_| {
                Error::InvalidConfiguration(
                  format!("temperature must be a number, got {:?}", value)
                )
              })?;
              self.temperature = Some(t);
            }
          , "max_tokens" => {
              let n: u32 = value.parse().map_err(|_| {
                Error::InvalidConfiguration(
                  format!(
                    "max_tokens must be a positive integer, got {:?}",
                    value
                  )
                )
              })?;
              self.max_tokens = Some(n);
            }
          , other => {
              return Err(Error::InvalidConfiguration(
                format!("Unknown field: {}", other)
              ));
            }
        }
        Ok(self)
    }

    pub fn build(self) -> Result<GroqConfig, Error>
    {   let model = self.model
          .filter(|m| !m.is_empty())
          .ok_or_else(|| {
            Error::InvalidConfiguration(
              "model is required".to_string()
            )
          })?;
        let api_key = self.api_key
          .filter(|k| !k.is_empty())
          .ok_or_else(|| {
            Error::MissingApiKey(format!("Groq:{}", model))
          })?;

        let config = GroqConfig
        {   model
          , api_key
          , max_tokens: self.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS)
          , temperature: self.temperature
              .unwrap_or(MODEL_DEFAULT_TEMPERATURE)
          , api_base: self.api_base
              .unwrap_or_else(|| GROQ_API_BASE.to_string())
          , timeout_secs: self.timeout_secs
        };
        debug!("Built {:?}", config);
        Ok(config)
    }
}
