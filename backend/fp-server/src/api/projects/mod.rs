pub mod project_dto;
pub mod project_list_response;
pub mod project_response;
#[allow(clippy::module_inception)]
pub mod projects;
pub mod research_note_response;
