pub mod error;
pub mod config;
pub mod message;
pub mod request;
pub mod providers;
pub mod client;
use serde::{Deserialize, Serialize};

pub use client::{GroqProvider, GroqProviderBuilder};
pub use config::{GroqConfig, GroqConfigBuilder};
pub use error::Error;
pub use message::{ChatMessage, MessageKind, WireRole};
pub use providers::{ChatModel, GroqChatModel};
pub use request::{ChatGeneration, ChatResult};

/*

groq-provider exposes Groq-hosted models to a notebook chat host.

A host lists providers through their `ProviderDescriptor`, renders the
declared fields, resolves the API key through the auth strategy and
then drives `ChatModel::generate`. One generate = one HTTP request.

*/

/// Models offered in the host's dropdown. The first one is the default.
pub const MODELS: [&str; 4] =
[   "llama-3.3-70b-versatile"
  , "llama-3.1-8b-instant"
  , "llama-3.1-70b-versatile"
  , "deepseek-r1-distill-llama-70b"
];

/// Env var holding the Groq credential
pub const GROQ_API_KEY_ENV: &str = "GROQ_API_KEY";

// ===== Provider structures =====

/// How the host finds the credential: read env var `name` and hand it
/// to the provider as `keyword_param`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvAuthStrategy
{   pub name: String
  , pub keyword_param: String
}

impl EnvAuthStrategy
{   /// Read the credential from the environment
    pub fn resolve(&self) -> Result<String, crate::error::Error>
    {   match std::env::var(&self.name)
        {   Ok(key) if !key.is_empty() => Ok(key)
          , _ => {
              log::error!("{} is not set", self.name);
              Err(crate::error::Error::MissingApiKey(self.name.clone()))
            }
        }
    }
}

/// Input format of a host-rendered text field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldFormat
{   Text
  , Json
  , Jsonpath
}

/// A user-configurable field the host renders as an input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextField
{   pub key: String
  , pub label: String
  , pub format: FieldFormat
}

/// Everything a host needs to list and configure a provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderDescriptor
{   /// Stable provider id
    pub id: String
  , /// Human-readable name
    pub name: String
  , /// Keyword under which the chosen model id is passed
    pub model_id_key: String
  , /// Model ids, default first
    pub models: Vec<String>
  , /// Credential lookup
    pub auth_strategy: EnvAuthStrategy
  , /// Extra fields shown in the configuration UI
    pub fields: Vec<TextField>
}
