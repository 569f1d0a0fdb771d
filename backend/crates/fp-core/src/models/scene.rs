use crate::{CameraMovement, Lighting, SceneComment, ShotType};

use serde::{Deserialize, Serialize};

/// One panel of a storyboard. `id` and `order` are unique within the storyboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scene {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    /// URL or path to the panel image
    pub image: Option<String>,
    pub shot_type: Option<ShotType>,
    pub camera_movement: Option<CameraMovement>,
    pub lighting: Option<Lighting>,
    pub notes: Option<String>,
    /// Seconds
    pub duration: Option<u32>,
    pub order: i32,
    #[serde(default)]
    pub comments: Vec<SceneComment>,
}

impl Scene {
    pub fn new(id: String, title: String, order: i32) -> Self {
        Self {
            id,
            title,
            description: None,
            image: None,
            shot_type: None,
            camera_movement: None,
            lighting: None,
            notes: None,
            duration: None,
            order,
            comments: Vec::new(),
        }
    }

    /// Apply only the fields present in `patch`.
    pub fn apply(&mut self, patch: ScenePatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = Some(description);
        }
        if let Some(image) = patch.image {
            self.image = Some(image);
        }
        if let Some(shot_type) = patch.shot_type {
            self.shot_type = Some(shot_type);
        }
        if let Some(camera_movement) = patch.camera_movement {
            self.camera_movement = Some(camera_movement);
        }
        if let Some(lighting) = patch.lighting {
            self.lighting = Some(lighting);
        }
        if let Some(notes) = patch.notes {
            self.notes = Some(notes);
        }
        if let Some(duration) = patch.duration {
            self.duration = Some(duration);
        }
        if let Some(order) = patch.order {
            self.order = order;
        }
    }
}

/// Partial update for a [`Scene`]. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScenePatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub shot_type: Option<ShotType>,
    pub camera_movement: Option<CameraMovement>,
    pub lighting: Option<Lighting>,
    pub notes: Option<String>,
    pub duration: Option<u32>,
    pub order: Option<i32>,
}
