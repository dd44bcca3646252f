use async_trait::async_trait;
use log::{debug, trace, error};
use std::time::Duration;
use crate::config::GroqConfig;
use crate::error::Error;
use crate::message::ChatMessage;
use crate::request::{ChatResult, GroqChatRequest, GroqChatResponse};

/// Chat model that calls the Groq chat completions endpoint directly.
///
/// Each `generate` issues exactly one POST; there is no retry, caching
/// or fallback model. The configuration is read-only, so one instance
/// can serve concurrent callers.
#[derive(Debug, Clone)]
pub struct GroqChatModel
{   config: GroqConfig
  , http_client: reqwest::Client
}

impl GroqChatModel
{   pub fn new(config: GroqConfig) -> Result<Self, Error>
    {   debug!("Creating GroqChatModel for: {}", config.model);
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs
        {   builder = builder.timeout(Duration::from_secs(secs));
        }
        let http_client = builder.build().map_err(|e| {
          error!("Failed to build HTTP client: {}", e);
          Error::InvalidConfiguration(e.to_string())
        })?;

        Ok(GroqChatModel
        {   config
          , http_client
        })
    }

    pub fn config(&self) -> &GroqConfig
    {   &self.config
    }

    async fn handle_generate(
      &self
    , messages: &[ChatMessage]
    , stop: Option<&[String]>
    ) -> Result<ChatResult, Error>
    {   debug!(
          "Handling generate for {} with {} messages",
          self.config.model, messages.len()
        );

        let request
          = GroqChatRequest::new(&self.config, messages, stop);

        trace!("Groq request: {:?}", request);

        let response = self.http_client
          .post(self.config.chat_completions_url())
          .header(
            "Authorization",
            format!("Bearer {}", self.config.api_key)
          )
          .header("Content-Type", "application/json")
          .json(&request)
          .send()
          .await
          .map_err(|e| {
            error!("HTTP error: {}", e);
            Error::Transport(e.to_string())
          })?;

        let status = response.status();
        trace!("Groq response status: {}", status);

        if !status.is_success()
        {   let body = response.text().await
              .unwrap_or_else(|_|
                "Unknown error".to_string()
              );
            error!("Groq API error {}: {}", status, body);
            return Err(Error::Request
            {   status: status.as_u16()
              , body
            });
        }

        let body = response.text().await.map_err(|e| {
          error!("Failed to read response body: {}", e);
          Error::Transport(e.to_string())
        })?;
        let chat_response: GroqChatResponse
          = serde_json::from_str(&body).map_err(|e| {
            error!("Parse error: {}", e);
            Error::Parse(e.to_string())
          })?;

        let result = ChatResult::from_response(chat_response)
          .map_err(|e| {
            error!("No choices in response");
            e
          })?;
        debug!("Groq returned {} generation(s)", result.generations.len());
        Ok(result)
    }

    /// Blocking form of `generate`: runs the request on a private
    /// current-thread runtime and parks the caller until it finishes.
    /// Must not be called from inside an async runtime.
    pub fn generate_blocking(
      &self
    , messages: &[ChatMessage]
    , stop: Option<&[String]>
    ) -> Result<ChatResult, Error>
    {   if tokio::runtime::Handle::try_current().is_ok()
        {   error!("generate_blocking called inside an async runtime");
            return Err(Error::Other(
              "generate_blocking cannot run inside an async runtime; \
               await generate instead".to_string()
            ));
        }
        let runtime = tokio::runtime::Builder::new_current_thread()
          .enable_all()
          .build()
          .map_err(|e| {
            error!("Failed to start runtime: {}", e);
            Error::Other(e.to_string())
          })?;
        runtime.block_on(self.handle_generate(messages, stop))
    }
}

#[async_trait]
impl crate::providers::ChatModel for GroqChatModel
{   fn llm_type(&self) -> &'static str
    {   "groq-chat"
    }

    async fn generate(
      &self
    , messages: &[ChatMessage]
    , stop: Option<&[String]>
    ) -> Result<ChatResult, Error>
    {   self.handle_generate(messages, stop).await
    }
}
