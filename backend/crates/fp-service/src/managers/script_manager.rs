use crate::support::{authorize, load_project, required, stale, with_timeout};
use crate::{NewScript, ScriptPatch, ServiceError, ServiceResult};

use fp_ai::AiCollaborator;
use fp_core::{Action, AiSuggestion, Script};
use fp_db::{ProjectRepository, ScriptRepository};

use std::sync::Arc;
use std::time::Duration;

use log::{info, warn};
use sqlx::SqlitePool;
use uuid::Uuid;

pub struct ScriptManager {
    projects: ProjectRepository,
    scripts: ScriptRepository,
    ai: Arc<dyn AiCollaborator>,
    ai_timeout: Duration,
}

impl ScriptManager {
    pub fn new(pool: SqlitePool, ai: Arc<dyn AiCollaborator>, ai_timeout: Duration) -> Self {
        Self {
            projects: ProjectRepository::new(pool.clone()),
            scripts: ScriptRepository::new(pool),
            ai,
            ai_timeout,
        }
    }

    pub async fn create(
        &self,
        principal: Uuid,
        project_id: Uuid,
        input: NewScript,
    ) -> ServiceResult<Script> {
        let project = load_project(&self.projects, project_id).await?;
        authorize(principal, &project, Action::Edit)?;

        let title = required(&input.title, "title")?;
        if self.scripts.find_by_project(project.id).await?.is_some() {
            return Err(ServiceError::conflict(format!(
                "Project {} already has a script",
                project.id
            )));
        }

        let script = Script::new(project.id, principal, title, input.content);
        self.scripts.create(&script).await?;
        info!("Script {} created for project {}", script.id, project.id);

        Ok(script)
    }

    pub async fn get(&self, principal: Uuid, script_id: Uuid) -> ServiceResult<Script> {
        let script = self.load(principal, script_id, Action::Read).await?;
        Ok(script)
    }

    pub async fn get_for_project(&self, principal: Uuid, project_id: Uuid) -> ServiceResult<Script> {
        let project = load_project(&self.projects, project_id).await?;
        authorize(principal, &project, Action::Read)?;

        self.scripts
            .find_by_project(project.id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Script", format!("for project {}", project.id)))
    }

    /// Title and/or content. Metadata is only recomputed when content changes,
    /// but every update refreshes `last_edited` and bumps the version.
    pub async fn update(
        &self,
        principal: Uuid,
        script_id: Uuid,
        patch: ScriptPatch,
    ) -> ServiceResult<Script> {
        let mut script = self.load(principal, script_id, Action::Edit).await?;

        if let Some(expected) = patch.expected_version
            && expected != script.version
        {
            return Err(ServiceError::conflict(format!(
                "Script {} is at version {}, expected {}",
                script.id, script.version, expected
            )));
        }

        let title = patch.title.as_deref().map(|t| required(t, "title")).transpose()?;
        if let Some(title) = title {
            script.title = title;
        }
        if let Some(content) = patch.content {
            script.set_content(content);
        }
        if principal != script.author_id {
            script.credit(principal, "editor");
        }

        let expected = script.version;
        script.touch();
        self.save(&script, expected).await?;
        info!("Script {} updated to version {}", script.id, script.version);

        Ok(script)
    }

    pub async fn delete(&self, principal: Uuid, script_id: Uuid) -> ServiceResult<()> {
        let script = self.find(script_id).await?;
        let project = load_project(&self.projects, script.project_id).await?;
        authorize(
            principal,
            &project,
            Action::DeleteAttached {
                author_id: script.author_id,
            },
        )?;

        self.scripts.delete(script.id).await?;
        info!("Script {} deleted by {}", script.id, principal);

        Ok(())
    }

    pub async fn add_suggestion(
        &self,
        principal: Uuid,
        script_id: Uuid,
        text: &str,
    ) -> ServiceResult<AiSuggestion> {
        let mut script = self.load(principal, script_id, Action::Edit).await?;
        let text = required(text, "suggestion")?;

        let suggestion = script.add_suggestion(text).clone();

        let expected = script.version;
        script.bump();
        self.save(&script, expected).await?;

        Ok(suggestion)
    }

    /// Idempotent: applying an already-applied suggestion succeeds without a write.
    pub async fn apply_suggestion(
        &self,
        principal: Uuid,
        script_id: Uuid,
        suggestion_id: Uuid,
    ) -> ServiceResult<Script> {
        let mut script = self.load(principal, script_id, Action::Edit).await?;

        let already_applied = script
            .ai_suggestions
            .iter()
            .any(|s| s.id == suggestion_id && s.applied);
        script.apply_suggestion(suggestion_id)?;
        if already_applied {
            return Ok(script);
        }

        let expected = script.version;
        script.bump();
        self.save(&script, expected).await?;

        Ok(script)
    }

    /// Ask the AI collaborator for improvements and append each as a suggestion.
    pub async fn generate_suggestions(
        &self,
        principal: Uuid,
        script_id: Uuid,
        context: Option<&str>,
    ) -> ServiceResult<Vec<AiSuggestion>> {
        let mut script = self.load(principal, script_id, Action::Edit).await?;

        let texts = with_timeout(
            self.ai_timeout,
            self.ai.suggest_script_improvements(&script.content, context),
        )
        .await
        .inspect_err(|e| warn!("Suggestion request for script {} failed: {}", script.id, e))?;

        let expected = script.version;
        let added: Vec<AiSuggestion> = texts
            .into_iter()
            .map(|t| script.add_suggestion(t).clone())
            .collect();

        script.bump();
        self.save(&script, expected).await?;
        info!("{} suggestions added to script {}", added.len(), script.id);

        Ok(added)
    }

    async fn find(&self, script_id: Uuid) -> ServiceResult<Script> {
        self.scripts
            .find_by_id(script_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Script", script_id))
    }

    /// Load a script and check `action` against its parent project.
    async fn load(&self, principal: Uuid, script_id: Uuid, action: Action) -> ServiceResult<Script> {
        let script = self.find(script_id).await?;
        let project = load_project(&self.projects, script.project_id).await?;
        authorize(principal, &project, action)?;
        Ok(script)
    }

    async fn save(&self, script: &Script, expected_version: i32) -> ServiceResult<()> {
        if !self.scripts.update(script, expected_version).await? {
            return Err(stale("Script"));
        }
        Ok(())
    }
}
