//! Wire request/response bodies and the chat result envelope

use serde::{Deserialize, Serialize};
use crate::message::{ChatMessage, MessageKind, WireRole};

// ===== Outgoing =====

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireMessage
{   pub role: WireRole
  , pub content: String
}

impl From<&ChatMessage> for WireMessage
{   fn from(m: &ChatMessage) -> Self
    {   WireMessage
        {   role: m.wire_role()
          , content: m.content.clone()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroqChatRequest
{   pub model: String
  , pub messages: Vec<WireMessage>
  , pub max_tokens: u32
  , pub temperature: f32
  , #[serde(skip_serializing_if = "Option::is_none")]
    pub stop: Option<Vec<String>>
}

impl GroqChatRequest
{   /// Build a request body from the config and the caller's messages.
    /// `stop` only makes it onto the wire when it holds at least one entry.
    pub fn new(
      config: &crate::config::GroqConfig
    , messages: &[ChatMessage]
    , stop: Option<&[String]>
    ) -> Self
    {   GroqChatRequest
        {   model: config.model.clone()
          , messages: messages.iter().map(WireMessage::from).collect()
          , max_tokens: config.max_tokens
          , temperature: config.temperature
          , stop: stop
              .filter(|s| !s.is_empty())
              .map(|s| s.to_vec())
        }
    }
}

// ===== Incoming =====

#[derive(Debug, Clone, Deserialize)]
pub struct GroqChatResponse
{   #[serde(default)]
    pub id: Option<String>
  , #[serde(default)]
    pub model: Option<String>
  , pub choices: Vec<Choice>
  , #[serde(default)]
    pub usage: Option<Usage>
}

#[derive(Debug, Clone, Deserialize)]
pub struct Choice
{   pub message: ResponseMessage
  , #[serde(default)]
    pub finish_reason: Option<String>
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResponseMessage
{   pub content: String
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Usage
{   #[serde(default)]
    pub prompt_tokens: Option<u32>
  , #[serde(default)]
    pub completion_tokens: Option<u32>
  , #[serde(default)]
    pub total_tokens: Option<u32>
}

// ===== Result envelope =====

/// One completion produced by the model
#[derive(Debug, Clone, PartialEq)]
pub struct ChatGeneration
{   pub message: ChatMessage
  , pub finish_reason: Option<String>
}

impl ChatGeneration
{   pub fn text(&self) -> &str
    {   &self.message.content
    }
}

/// Provider metadata reported alongside the generations
#[derive(Debug, Clone, PartialEq)]
pub struct LlmOutput
{   pub model: Option<String>
  , pub usage: Option<Usage>
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatResult
{   pub generations: Vec<ChatGeneration>
  , pub llm_output: Option<LlmOutput>
}

impl ChatResult
{   /// Wrap the first choice of a response as a single generation
    pub fn from_response(
      response: GroqChatResponse
    ) -> crate::error::Result<Self>
    {   let GroqChatResponse { model, choices, usage, .. } = response;
        let choice = choices.into_iter()
          .next()
          .ok_or(crate::error::Error::NoChoicesInResponse)?;

        let llm_output = if model.is_some() || usage.is_some()
        {   Some(LlmOutput { model, usage })
        } else
        {   None
        };

        Ok(ChatResult
        {   generations: vec![
              ChatGeneration
              {   message: ChatMessage::new(
                    MessageKind::Ai,
                    choice.message.content
                  )
                , finish_reason: choice.finish_reason
              }
            ]
          , llm_output
        })
    }

    /// Text of the first generation
    pub fn text(&self) -> Option<&str>
    {   self.generations.first().map(|g| g.text())
    }
}
