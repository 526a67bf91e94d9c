use serde::Serialize;

/// Normalized outcome of a z/OS files operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ZosFilesResponse {
    pub success: bool,
    pub command_response: String,
}

impl ZosFilesResponse {
    pub fn success(command_response: impl Into<String>) -> Self {
        Self {
            success: true,
            command_response: command_response.into(),
        }
    }
}
