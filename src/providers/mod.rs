//! Chat model contract and its Groq implementation

pub mod groq;

use async_trait::async_trait;
use crate::message::ChatMessage;
use crate::request::ChatResult;

// Re-export for convenience
pub use groq::GroqChatModel;

/// The generate contract a host drives: one call in, one result out
#[async_trait]
pub trait ChatModel: Send + Sync
{   /// Short identifier of the model family
    fn llm_type(&self) -> &'static str;

    /// Produce a completion for `messages`, honouring `stop` if given
    async fn generate(
      &self
    , messages: &[ChatMessage]
    , stop: Option<&[String]>
    ) -> crate::error::Result<ChatResult>;
}
