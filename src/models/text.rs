use serde::{Deserialize, Serialize};

// Body of `POST /text` and response of `GET /text/:hash`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct TextDocument {
    pub text: String,
}

// Response of `POST /text`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct HashDocument {
    pub hash: String,
}
