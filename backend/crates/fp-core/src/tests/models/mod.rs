mod project;
mod project_status;
mod script;
mod storyboard;
mod transcript;
mod user;
