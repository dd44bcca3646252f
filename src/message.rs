//! Chat message kinds and their mapping onto Groq wire roles

use serde::{Deserialize, Serialize};

/// Who produced a chat message, as tagged by the caller
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MessageKind
{   /// Instructions framing the conversation
    System
  , /// A turn written by the user
    Human
  , /// A turn previously produced by the model
    Ai
  , /// Any other tag (tool, function, generic chat roles...)
    Other(String)
}

impl MessageKind
{   /// Parse a host-side message tag
    pub fn from_tag(tag: &str) -> Self
    {   match tag
        {   "system" => MessageKind::System
          , "ai" | "assistant" => MessageKind::Ai
          , "human" | "user" => MessageKind::Human
          , other => MessageKind::Other(other.to_string())
        }
    }
}

/// Role as it appears in the Groq (OpenAI style) request body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WireRole
{   System
  , Assistant
  , User
}

impl WireRole
{   pub fn as_str(&self) -> &'static str
    {   match self
        {   WireRole::System => "system"
          , WireRole::Assistant => "assistant"
          , WireRole::User => "user"
        }
    }
}

impl From<&MessageKind> for WireRole
{   fn from(kind: &MessageKind) -> Self
    {   match kind
        {   MessageKind::System => WireRole::System
          , MessageKind::Ai => WireRole::Assistant
          , MessageKind::Human => WireRole::User
          // Lossy: unrecognised tags are sent as user turns.
          , MessageKind::Other(_) => WireRole::User
        }
    }
}

/// A role-tagged unit of conversational text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage
{   pub kind: MessageKind
  , pub content: String
}

impl ChatMessage
{   pub fn new(kind: MessageKind, content: impl Into<String>) -> Self
    {   ChatMessage
        {   kind
          , content: content.into()
        }
    }

    pub fn system(content: impl Into<String>) -> Self
    {   Self::new(MessageKind::System, content)
    }

    pub fn human(content: impl Into<String>) -> Self
    {   Self::new(MessageKind::Human, content)
    }

    pub fn ai(content: impl Into<String>) -> Self
    {   Self::new(MessageKind::Ai, content)
    }

    pub fn wire_role(&self) -> WireRole
    {   WireRole::from(&self.kind)
    }
}
