use crate::{ServiceError, ServiceResult};

use fp_core::{Action, CoreError, Project, decide};
use fp_db::ProjectRepository;

use std::future::Future;
use std::str::FromStr;
use std::time::Duration;

use uuid::Uuid;

pub(crate) async fn load_project(
    projects: &ProjectRepository,
    project_id: Uuid,
) -> ServiceResult<Project> {
    projects
        .find_by_id(project_id)
        .await?
        .ok_or_else(|| ServiceError::not_found("Project", project_id))
}

#[track_caller]
pub(crate) fn authorize(principal: Uuid, project: &Project, action: Action) -> ServiceResult<()> {
    decide(principal, project, action).into_result()?;
    Ok(())
}

/// Trimmed, non-empty.
#[track_caller]
pub(crate) fn required(value: &str, field: &str) -> ServiceResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ServiceError::validation(field, format!("{field} is required")));
    }
    Ok(trimmed.to_string())
}

/// Parse an enumerated value, reporting failures against `field`.
#[track_caller]
pub(crate) fn parse_enum<T>(value: &str, field: &str) -> ServiceResult<T>
where
    T: FromStr<Err = CoreError>,
{
    T::from_str(value.trim()).map_err(|_| {
        ServiceError::validation(field, format!("'{}' is not a valid {field}", value.trim()))
    })
}

#[track_caller]
pub(crate) fn parse_optional_enum<T>(value: Option<&str>, field: &str) -> ServiceResult<Option<T>>
where
    T: FromStr<Err = CoreError>,
{
    value.map(|v| parse_enum(v, field)).transpose()
}

/// Run an AI call with an upper bound on its duration.
pub(crate) async fn with_timeout<T, F>(limit: Duration, call: F) -> ServiceResult<T>
where
    F: Future<Output = fp_ai::AiResult<T>>,
{
    match tokio::time::timeout(limit, call).await {
        Ok(result) => Ok(result?),
        Err(_) => Err(ServiceError::upstream(format!(
            "AI provider did not answer within {}s",
            limit.as_secs()
        ))),
    }
}

/// Conflict raised when a compare-and-swap write loses the race.
#[track_caller]
pub(crate) fn stale(entity: &str) -> ServiceError {
    ServiceError::conflict(format!("{entity} was modified concurrently; reload and retry"))
}
