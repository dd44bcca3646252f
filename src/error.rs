use std::fmt;

/// Error type for Groq provider operations
/// Implements Clone so results can be handed back to a host freely
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error
{   /// API key is missing (names the env var or provider)
    MissingApiKey(String)
  , /// Request never produced a response (DNS, refused, timeout)
    Transport(String)
  , /// Groq answered with a non-success HTTP status
    Request
    {   status: u16
      , body: String
    }
  , /// Response body did not have the expected shape
    Parse(String)
  , /// No choices in API response
    NoChoicesInResponse
  , /// Invalid configuration
    InvalidConfiguration(String)
  , /// Generic error
    Other(String)
}

impl Error
{   /// HTTP status carried by a request error, if any
    pub fn status(&self) -> Option<u16>
    {   match self
        {   Error::Request { status, .. } => Some(*status)
          , _ => None
        }
    }
}

impl fmt::Display for Error
{   fn fmt(&self, f: &mut fmt::Formatter<'_>)
      -> fmt::Result
    {   match self
        {   Error::MissingApiKey(source) => {
              write!(f, "Missing API key: {}", source)
            }
          , Error::Transport(msg) => {
              write!(f, "Transport error: {}", msg)
            }
          , Error::Request { status, body } => {
              write!(f,
                "Groq request failed with status {}: {}",
                status, body
              )
            }
          , Error::Parse(msg) => {
              write!(f, "Parse error: {}", msg)
            }
          , Error::NoChoicesInResponse => {
              write!(f, "API response contained no choices")
            }
          , Error::InvalidConfiguration(msg) => {
              write!(f, "Invalid configuration: {}", msg)
            }
          , Error::Other(msg) => {
              write!(f, "Error: {}", msg)
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<String> for Error
{   fn from(s: String) -> Self
    {   Error::Other(s)
    }
}

impl From<&str> for Error
{   fn from(s: &str) -> Self
    {   Error::Other(s.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
