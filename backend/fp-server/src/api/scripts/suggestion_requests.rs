use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct AddSuggestionRequest {
    pub suggestion: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct GenerateSuggestionsRequest {
    /// Free-form direction passed to the AI collaborator
    #[serde(default)]
    pub context: Option<String>,
}
