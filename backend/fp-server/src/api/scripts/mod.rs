pub mod script_dto;
pub mod script_response;
#[allow(clippy::module_inception)]
pub mod scripts;
pub mod suggestion_list_response;
pub mod suggestion_requests;
