use serde::Deserialize;

use crate::core::YqError;

/// The `{code, description}` error object every envelope family embeds.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiError {
    #[serde(default)]
    pub(crate) code: String,
    #[serde(default)]
    pub(crate) description: String,
}

impl From<ApiError> for YqError {
    fn from(e: ApiError) -> Self {
        Self::Api {
            code: e.code,
            description: e.description,
        }
    }
}
