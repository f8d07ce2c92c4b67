//! Board JSON Codec
//!
//! Layout: `[{"id": n, "title": s, "cards": [{"id": n, "text": s}, ...]}, ...]`

use crate::domain::List;

pub fn encode(lists: &[List]) -> Result<String, serde_json::Error> {
    serde_json::to_string(lists)
}

pub fn decode(json: &str) -> Result<Vec<List>, serde_json::Error> {
    serde_json::from_str(json)
}
