pub(crate) mod collaborator;
pub(crate) mod error;
pub(crate) mod openai;

#[cfg(feature = "test-utils")]
pub mod testing;


pub use collaborator::AiCollaborator;
pub use error::{AiError, Result as AiResult};
pub use openai::{DEFAULT_CHAT_MODEL, DEFAULT_TRANSCRIPTION_MODEL, OpenAiClient, parse_bullets};
