use crate::TranscriptDto;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct TranscriptResponse {
    pub transcript: TranscriptDto,
}

/// Newest first
#[derive(Debug, Serialize)]
pub struct TranscriptListResponse {
    pub transcripts: Vec<TranscriptDto>,
}
