//! Scripted [`AiCollaborator`] for tests of crates that sit on top of fp-ai.

use crate::{AiCollaborator, AiError, AiResult};

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Notify;

pub const TRANSCRIPT_TEXT: &str = "We meet at the harbour when the rain stops.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FakeMode {
    Succeed,
    Fail,
    /// Never answers; callers hit their timeout
    Hang,
    /// Succeeds once [`FakeAi::release`] is called
    Gated,
}

pub struct FakeAi {
    mode: FakeMode,
    calls: AtomicUsize,
    entered: Notify,
    released: Notify,
}

impl FakeAi {
    pub fn new(mode: FakeMode) -> Self {
        Self {
            mode,
            calls: AtomicUsize::new(0),
            entered: Notify::new(),
            released: Notify::new(),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Resolves once a gated call is waiting for [`FakeAi::release`].
    pub async fn entered(&self) {
        self.entered.notified().await;
    }

    pub fn release(&self) {
        self.released.notify_one();
    }

    async fn respond<T>(&self, value: T) -> AiResult<T> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.mode {
            FakeMode::Succeed => Ok(value),
            FakeMode::Fail => Err(AiError::api(500, "provider exploded")),
            FakeMode::Hang => {
                tokio::time::sleep(Duration::from_secs(3600)).await;
                Ok(value)
            }
            FakeMode::Gated => {
                self.entered.notify_one();
                self.released.notified().await;
                Ok(value)
            }
        }
    }
}

#[async_trait]
impl AiCollaborator for FakeAi {
    async fn transcribe(&self, _bytes: Vec<u8>, _filename: &str, _mimetype: &str) -> AiResult<String> {
        self.respond(TRANSCRIPT_TEXT.to_string()).await
    }

    async fn suggest_script_improvements(
        &self,
        _excerpt: &str,
        _context: Option<&str>,
    ) -> AiResult<Vec<String>> {
        self.respond(vec![
            "Open on the boat".to_string(),
            "Cut the voiceover".to_string(),
        ])
        .await
    }

    async fn suggest_storyboard_ideas(&self, description: &str, genre: &str) -> AiResult<String> {
        self.respond(format!("{genre}: {description}")).await
    }
}
