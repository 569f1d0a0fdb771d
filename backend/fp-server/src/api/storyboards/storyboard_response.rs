use crate::StoryboardDto;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct StoryboardResponse {
    pub storyboard: StoryboardDto,
}

/// AI visual direction for a single scene
#[derive(Debug, Serialize)]
pub struct SceneIdeasResponse {
    pub scene_id: String,
    pub ideas: String,
}
