use crate::AiResult;

use async_trait::async_trait;

/// The three capabilities the managers need from an AI provider.
///
/// Implementations must be cheap to share behind an `Arc`; the managers
/// hold one instance for the lifetime of the process.
#[async_trait]
pub trait AiCollaborator: Send + Sync {
    /// Speech-to-text for an uploaded audio or video file.
    async fn transcribe(&self, bytes: Vec<u8>, filename: &str, mimetype: &str)
    -> AiResult<String>;

    /// Short, actionable improvement notes for a script excerpt.
    async fn suggest_script_improvements(
        &self,
        excerpt: &str,
        context: Option<&str>,
    ) -> AiResult<Vec<String>>;

    /// Free-form visual direction for a scene.
    async fn suggest_storyboard_ideas(&self, description: &str, genre: &str)
    -> AiResult<String>;
}
