use crate::ScriptDto;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ScriptResponse {
    pub script: ScriptDto,
}
