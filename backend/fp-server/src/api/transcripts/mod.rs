pub mod search_query;
pub mod transcript_dto;
pub mod transcript_response;
#[allow(clippy::module_inception)]
pub mod transcripts;
