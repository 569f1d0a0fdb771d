use crate::support::{
    authorize, load_project, parse_enum, parse_optional_enum, required, stale,
};
use crate::{
    CollaboratorPatch, NewCollaborator, NewProject, NewResearchNote, ProjectPatch, ServiceError,
    ServiceResult,
};

use fp_core::{
    Action, Collaborator, CollaboratorRole, Genre, Permissions, Project, ProjectStatus,
    ResearchKind, ResearchNote,
};
use fp_db::{ProjectRepository, UserRepository};

use log::info;
use sqlx::SqlitePool;
use uuid::Uuid;

/// Owns the project aggregate: its fields, its access-control list and its
/// research notes.
pub struct ProjectManager {
    projects: ProjectRepository,
    users: UserRepository,
}

impl ProjectManager {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            projects: ProjectRepository::new(pool.clone()),
            users: UserRepository::new(pool),
        }
    }

    /// Any registered user may create a project; they become its owner.
    pub async fn create(&self, owner: Uuid, input: NewProject) -> ServiceResult<Project> {
        let title = required(&input.title, "title")?;
        let genre = parse_optional_enum::<Genre>(input.genre.as_deref(), "genre")?;

        if !self.users.exists(owner).await? {
            return Err(ServiceError::not_found("User", owner));
        }

        let mut project = Project::new(owner, title);
        project.description = input.description;
        if let Some(genre) = genre {
            project.genre = genre;
        }

        self.projects.create(&project).await?;
        info!("Project {} created by {}", project.id, owner);

        Ok(project)
    }

    pub async fn get(&self, principal: Uuid, project_id: Uuid) -> ServiceResult<Project> {
        let project = load_project(&self.projects, project_id).await?;
        authorize(principal, &project, Action::Read)?;
        Ok(project)
    }

    /// Projects the principal owns or collaborates on, most recently updated first.
    pub async fn get_visible(&self, principal: Uuid) -> ServiceResult<Vec<Project>> {
        Ok(self.projects.find_visible_to(principal).await?)
    }

    pub async fn update(
        &self,
        principal: Uuid,
        project_id: Uuid,
        patch: ProjectPatch,
    ) -> ServiceResult<Project> {
        let mut project = load_project(&self.projects, project_id).await?;
        authorize(principal, &project, Action::Edit)?;

        let title = patch.title.as_deref().map(|t| required(t, "title")).transpose()?;
        let genre = parse_optional_enum::<Genre>(patch.genre.as_deref(), "genre")?;
        let status = parse_optional_enum::<ProjectStatus>(patch.status.as_deref(), "status")?;

        if let Some(title) = title {
            project.title = title;
        }
        if let Some(description) = patch.description {
            project.description = Some(description);
        }
        if let Some(genre) = genre {
            project.genre = genre;
        }
        if let Some(status) = status {
            project.set_status(status)?;
        }

        self.save(&mut project).await?;
        info!("Project {} updated by {}", project.id, principal);

        Ok(project)
    }

    pub async fn add_collaborator(
        &self,
        principal: Uuid,
        project_id: Uuid,
        input: NewCollaborator,
    ) -> ServiceResult<Project> {
        let mut project = load_project(&self.projects, project_id).await?;
        authorize(principal, &project, Action::ManageCollaborators)?;

        let role = parse_optional_enum::<CollaboratorRole>(input.role.as_deref(), "role")?
            .unwrap_or_default();

        if !self.users.exists(input.user_id).await? {
            return Err(ServiceError::not_found("User", input.user_id));
        }

        project.add_collaborator(Collaborator::new(
            input.user_id,
            role,
            Permissions {
                can_edit: input.can_edit,
                can_delete: input.can_delete,
            },
        ))?;

        self.save(&mut project).await?;
        info!(
            "User {} added to project {} as {}",
            input.user_id, project.id, role
        );

        Ok(project)
    }

    pub async fn update_collaborator_permissions(
        &self,
        principal: Uuid,
        project_id: Uuid,
        user_id: Uuid,
        patch: CollaboratorPatch,
    ) -> ServiceResult<Project> {
        let mut project = load_project(&self.projects, project_id).await?;
        authorize(principal, &project, Action::ManageCollaborators)?;

        let role = parse_optional_enum::<CollaboratorRole>(patch.role.as_deref(), "role")?;

        let collaborator = project.collaborator_mut(user_id)?;
        if let Some(role) = role {
            collaborator.role = role;
        }
        if let Some(can_edit) = patch.can_edit {
            collaborator.permissions.can_edit = can_edit;
        }
        if let Some(can_delete) = patch.can_delete {
            collaborator.permissions.can_delete = can_delete;
        }

        self.save(&mut project).await?;
        info!("Permissions of {} on project {} updated", user_id, project.id);

        Ok(project)
    }

    pub async fn remove_collaborator(
        &self,
        principal: Uuid,
        project_id: Uuid,
        user_id: Uuid,
    ) -> ServiceResult<Project> {
        let mut project = load_project(&self.projects, project_id).await?;
        authorize(principal, &project, Action::ManageCollaborators)?;

        project.remove_collaborator(user_id)?;

        self.save(&mut project).await?;
        info!("User {} removed from project {}", user_id, project.id);

        Ok(project)
    }

    pub async fn add_research_note(
        &self,
        principal: Uuid,
        project_id: Uuid,
        input: NewResearchNote,
    ) -> ServiceResult<ResearchNote> {
        let mut project = load_project(&self.projects, project_id).await?;
        authorize(principal, &project, Action::Edit)?;

        let title = required(&input.title, "title")?;
        let kind = match input.kind.as_deref() {
            Some(kind) => parse_enum::<ResearchKind>(kind, "kind")?,
            None => ResearchKind::default(),
        };

        let note = ResearchNote::new(title, input.content, kind);
        project.add_research_note(note.clone());

        self.save(&mut project).await?;

        Ok(note)
    }

    pub async fn remove_research_note(
        &self,
        principal: Uuid,
        project_id: Uuid,
        note_id: Uuid,
    ) -> ServiceResult<Project> {
        let mut project = load_project(&self.projects, project_id).await?;
        authorize(principal, &project, Action::Edit)?;

        project.remove_research_note(note_id)?;

        self.save(&mut project).await?;

        Ok(project)
    }

    /// Owner only. Removes the script, storyboard, transcripts and
    /// collaborator rows along with the project.
    pub async fn delete(&self, principal: Uuid, project_id: Uuid) -> ServiceResult<()> {
        let project = load_project(&self.projects, project_id).await?;
        authorize(principal, &project, Action::Delete)?;

        if !self.projects.delete(project.id).await? {
            return Err(ServiceError::not_found("Project", project.id));
        }
        info!("Project {} deleted by {}", project.id, principal);

        Ok(())
    }

    /// Persist a mutated project. A concurrent change since it was loaded
    /// turns into a Conflict instead of being overwritten.
    async fn save(&self, project: &mut Project) -> ServiceResult<()> {
        let expected = project.version;
        project.touch();
        if !self.projects.update(project, expected).await? {
            return Err(stale("Project"));
        }
        Ok(())
    }
}
