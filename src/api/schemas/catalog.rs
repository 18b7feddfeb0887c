use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: &'static str,
}
