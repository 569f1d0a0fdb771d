use serde::Deserialize;

/// Query parameters for transcript search
#[derive(Debug, Deserialize)]
pub struct SearchTranscriptsQuery {
    #[serde(default)]
    pub q: String,
}
