use fp_core::ResearchNote;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ResearchNoteResponse {
    pub note: ResearchNote,
}
