use crate::support::{authorize, load_project, parse_optional_enum, required, stale, with_timeout};
use crate::{SceneInput, SceneInputPatch, ServiceError, ServiceResult};

use fp_ai::AiCollaborator;
use fp_core::{
    Action, CameraMovement, Lighting, Project, Scene, ScenePatch, ShotType, Storyboard,
};
use fp_db::{ProjectRepository, StoryboardRepository};

use std::sync::Arc;
use std::time::Duration;

use log::{info, warn};
use sqlx::SqlitePool;
use uuid::Uuid;

pub struct StoryboardManager {
    projects: ProjectRepository,
    storyboards: StoryboardRepository,
    ai: Arc<dyn AiCollaborator>,
    ai_timeout: Duration,
}

impl StoryboardManager {
    pub fn new(pool: SqlitePool, ai: Arc<dyn AiCollaborator>, ai_timeout: Duration) -> Self {
        Self {
            projects: ProjectRepository::new(pool.clone()),
            storyboards: StoryboardRepository::new(pool),
            ai,
            ai_timeout,
        }
    }

    pub async fn create(
        &self,
        principal: Uuid,
        project_id: Uuid,
        title: &str,
    ) -> ServiceResult<Storyboard> {
        let project = load_project(&self.projects, project_id).await?;
        authorize(principal, &project, Action::Edit)?;

        let title = required(title, "title")?;
        if self.storyboards.find_by_project(project.id).await?.is_some() {
            return Err(ServiceError::conflict(format!(
                "Project {} already has a storyboard",
                project.id
            )));
        }

        let storyboard = Storyboard::new(project.id, principal, title);
        self.storyboards.create(&storyboard).await?;
        info!(
            "Storyboard {} created for project {}",
            storyboard.id, project.id
        );

        Ok(storyboard)
    }

    pub async fn get(&self, principal: Uuid, storyboard_id: Uuid) -> ServiceResult<Storyboard> {
        let (storyboard, _) = self.load(principal, storyboard_id, Action::Read).await?;
        Ok(storyboard)
    }

    pub async fn get_for_project(
        &self,
        principal: Uuid,
        project_id: Uuid,
    ) -> ServiceResult<Storyboard> {
        let project = load_project(&self.projects, project_id).await?;
        authorize(principal, &project, Action::Read)?;

        self.storyboards
            .find_by_project(project.id)
            .await?
            .ok_or_else(|| {
                ServiceError::not_found("Storyboard", format!("for project {}", project.id))
            })
    }

    pub async fn update(
        &self,
        principal: Uuid,
        storyboard_id: Uuid,
        title: Option<&str>,
    ) -> ServiceResult<Storyboard> {
        let (mut storyboard, _) = self.load(principal, storyboard_id, Action::Edit).await?;

        if let Some(title) = title {
            storyboard.title = required(title, "title")?;
        }

        self.touch_and_save(&mut storyboard, principal).await?;
        Ok(storyboard)
    }

    /// Insert a scene. Scene `id` and `order` must both be unused.
    pub async fn add_scene(
        &self,
        principal: Uuid,
        storyboard_id: Uuid,
        input: SceneInput,
    ) -> ServiceResult<Storyboard> {
        let (mut storyboard, _) = self.load(principal, storyboard_id, Action::Edit).await?;

        let scene = Self::build_scene(input)?;
        storyboard.add_scene(scene)?;

        self.touch_and_save(&mut storyboard, principal).await?;
        Ok(storyboard)
    }

    pub async fn update_scene(
        &self,
        principal: Uuid,
        storyboard_id: Uuid,
        scene_id: &str,
        input: SceneInputPatch,
    ) -> ServiceResult<Storyboard> {
        let (mut storyboard, _) = self.load(principal, storyboard_id, Action::Edit).await?;

        let patch = Self::build_patch(input)?;
        storyboard.update_scene(scene_id, patch)?;

        self.touch_and_save(&mut storyboard, principal).await?;
        Ok(storyboard)
    }

    pub async fn remove_scene(
        &self,
        principal: Uuid,
        storyboard_id: Uuid,
        scene_id: &str,
    ) -> ServiceResult<Storyboard> {
        let (mut storyboard, _) = self.load(principal, storyboard_id, Action::Edit).await?;

        storyboard.remove_scene(scene_id)?;

        self.touch_and_save(&mut storyboard, principal).await?;
        Ok(storyboard)
    }

    /// Any project member may comment, including those without edit rights.
    pub async fn add_scene_comment(
        &self,
        principal: Uuid,
        storyboard_id: Uuid,
        scene_id: &str,
        comment: &str,
    ) -> ServiceResult<Storyboard> {
        let (mut storyboard, _) = self.load(principal, storyboard_id, Action::Read).await?;

        let comment = required(comment, "comment")?;
        storyboard.add_comment(scene_id, principal, comment)?;

        let expected = storyboard.version;
        storyboard.bump();
        self.save(&storyboard, expected).await?;

        Ok(storyboard)
    }

    pub async fn delete(&self, principal: Uuid, storyboard_id: Uuid) -> ServiceResult<()> {
        let storyboard = self.find(storyboard_id).await?;
        let project = load_project(&self.projects, storyboard.project_id).await?;
        authorize(
            principal,
            &project,
            Action::DeleteAttached {
                author_id: storyboard.author_id,
            },
        )?;

        self.storyboards.delete(storyboard.id).await?;
        info!("Storyboard {} deleted by {}", storyboard.id, principal);

        Ok(())
    }

    /// Visual direction for one scene, using the project's genre.
    pub async fn generate_ideas(
        &self,
        principal: Uuid,
        storyboard_id: Uuid,
        scene_id: &str,
    ) -> ServiceResult<String> {
        let (storyboard, project) = self.load(principal, storyboard_id, Action::Read).await?;

        let scene = storyboard
            .scene(scene_id)
            .ok_or_else(|| ServiceError::not_found("Scene", scene_id))?;
        let description = scene.description.as_deref().unwrap_or(&scene.title);

        with_timeout(
            self.ai_timeout,
            self.ai
                .suggest_storyboard_ideas(description, project.genre.as_str()),
        )
        .await
        .inspect_err(|e| warn!("Storyboard ideas for scene {} failed: {}", scene_id, e))
    }

    async fn find(&self, storyboard_id: Uuid) -> ServiceResult<Storyboard> {
        self.storyboards
            .find_by_id(storyboard_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Storyboard", storyboard_id))
    }

    async fn load(
        &self,
        principal: Uuid,
        storyboard_id: Uuid,
        action: Action,
    ) -> ServiceResult<(Storyboard, Project)> {
        let storyboard = self.find(storyboard_id).await?;
        let project = load_project(&self.projects, storyboard.project_id).await?;
        authorize(principal, &project, action)?;
        Ok((storyboard, project))
    }

    async fn touch_and_save(
        &self,
        storyboard: &mut Storyboard,
        principal: Uuid,
    ) -> ServiceResult<()> {
        let expected = storyboard.version;
        storyboard.touch();
        self.save(storyboard, expected).await?;
        info!(
            "Storyboard {} updated to version {} by {}",
            storyboard.id, storyboard.version, principal
        );
        Ok(())
    }

    async fn save(&self, storyboard: &Storyboard, expected_version: i32) -> ServiceResult<()> {
        if !self.storyboards.update(storyboard, expected_version).await? {
            return Err(stale("Storyboard"));
        }
        Ok(())
    }

    fn build_scene(input: SceneInput) -> ServiceResult<Scene> {
        let title = required(&input.title, "title")?;
        let id = match input.id {
            Some(id) => required(&id, "id")?,
            None => Uuid::new_v4().to_string(),
        };

        let mut scene = Scene::new(id, title, input.order);
        scene.description = input.description;
        scene.image = input.image;
        scene.shot_type = parse_optional_enum::<ShotType>(input.shot_type.as_deref(), "shot_type")?;
        scene.camera_movement = parse_optional_enum::<CameraMovement>(
            input.camera_movement.as_deref(),
            "camera_movement",
        )?;
        scene.lighting = parse_optional_enum::<Lighting>(input.lighting.as_deref(), "lighting")?;
        scene.notes = input.notes;
        scene.duration = input.duration;
        Ok(scene)
    }

    fn build_patch(input: SceneInputPatch) -> ServiceResult<ScenePatch> {
        Ok(ScenePatch {
            title: input
                .title
                .as_deref()
                .map(|t| required(t, "title"))
                .transpose()?,
            description: input.description,
            image: input.image,
            shot_type: parse_optional_enum(input.shot_type.as_deref(), "shot_type")?,
            camera_movement: parse_optional_enum(
                input.camera_movement.as_deref(),
                "camera_movement",
            )?,
            lighting: parse_optional_enum(input.lighting.as_deref(), "lighting")?,
            notes: input.notes,
            duration: input.duration,
            order: input.order,
        })
    }
}
