use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateStoryboardRequest {
    pub title: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateStoryboardRequest {
    pub title: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SceneCommentRequest {
    pub comment: String,
}
