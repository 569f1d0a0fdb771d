use crate::{
    Attribution, CoreError, Result as CoreErrorResult, Scene, SceneComment, ScenePatch,
};

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Ordered shot list for a project. Scenes are kept sorted by `order`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Storyboard {
    pub id: Uuid,
    pub project_id: Uuid,
    pub author_id: Uuid,
    pub title: String,
    pub scenes: Vec<Scene>,
    pub collaborators: Vec<Attribution>,
    pub version: i32,
    pub last_edited: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Storyboard {
    pub fn new(project_id: Uuid, author_id: Uuid, title: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            project_id,
            author_id,
            title,
            scenes: Vec::new(),
            collaborators: vec![Attribution::new(author_id, "author")],
            version: 1,
            last_edited: now,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn touch(&mut self) {
        let now = Utc::now();
        self.last_edited = now;
        self.updated_at = now;
        self.version += 1;
    }

    /// Version bump without touching `last_edited`, used for comments.
    pub fn bump(&mut self) {
        self.updated_at = Utc::now();
        self.version += 1;
    }

    pub fn scene(&self, scene_id: &str) -> Option<&Scene> {
        self.scenes.iter().find(|s| s.id == scene_id)
    }

    #[track_caller]
    pub fn add_scene(&mut self, scene: Scene) -> CoreErrorResult<()> {
        if self.scene(&scene.id).is_some() {
            return Err(CoreError::DuplicateScene {
                field: "id",
                value: scene.id,
                location: ErrorLocation::from(Location::caller()),
            });
        }
        self.ensure_order_free(scene.order, None)?;

        self.scenes.push(scene);
        self.sort_scenes();
        Ok(())
    }

    #[track_caller]
    pub fn update_scene(&mut self, scene_id: &str, patch: ScenePatch) -> CoreErrorResult<()> {
        if let Some(order) = patch.order {
            self.ensure_order_free(order, Some(scene_id))?;
        }

        let scene = self.scene_mut(scene_id)?;
        scene.apply(patch);
        self.sort_scenes();
        Ok(())
    }

    #[track_caller]
    pub fn remove_scene(&mut self, scene_id: &str) -> CoreErrorResult<Scene> {
        let index = self
            .scenes
            .iter()
            .position(|s| s.id == scene_id)
            .ok_or_else(|| Self::scene_not_found(scene_id))?;

        Ok(self.scenes.remove(index))
    }

    #[track_caller]
    pub fn add_comment(
        &mut self,
        scene_id: &str,
        user_id: Uuid,
        comment: String,
    ) -> CoreErrorResult<()> {
        let scene = self.scene_mut(scene_id)?;
        scene.comments.push(SceneComment {
            user_id,
            comment,
            timestamp: Utc::now(),
        });
        Ok(())
    }

    #[track_caller]
    fn scene_mut(&mut self, scene_id: &str) -> CoreErrorResult<&mut Scene> {
        self.scenes
            .iter_mut()
            .find(|s| s.id == scene_id)
            .ok_or_else(|| Self::scene_not_found(scene_id))
    }

    #[track_caller]
    fn ensure_order_free(&self, order: i32, except: Option<&str>) -> CoreErrorResult<()> {
        let taken = self
            .scenes
            .iter()
            .any(|s| s.order == order && Some(s.id.as_str()) != except);

        if taken {
            return Err(CoreError::DuplicateScene {
                field: "order",
                value: order.to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        Ok(())
    }

    fn sort_scenes(&mut self) {
        self.scenes.sort_by_key(|s| s.order);
    }

    #[track_caller]
    fn scene_not_found(scene_id: &str) -> CoreError {
        CoreError::NotFound {
            entity: "Scene",
            id: scene_id.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
