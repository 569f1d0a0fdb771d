pub mod storyboard_dto;
pub mod storyboard_requests;
pub mod storyboard_response;
#[allow(clippy::module_inception)]
pub mod storyboards;
