use fp_core::AiSuggestion;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SuggestionListResponse {
    pub suggestions: Vec<AiSuggestion>,
}
