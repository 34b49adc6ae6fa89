use rust_embed::Embed;
use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Embed)]
#[folder = "content"]
pub struct Content;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("content file not found: {0}")]
    NotFound(String),
    #[error("couldn't parse {name}: {reason}")]
    ParseError { name: String, reason: String },
}

/// Reads an embedded JSON file from `content/` and deserializes it.
pub fn read_json<T: DeserializeOwned>(name: &str) -> Result<T, ContentError> {
    let file = Content::get(name).ok_or_else(|| ContentError::NotFound(name.to_string()))?;
    parse_json(name, &file.data)
}

pub(crate) fn parse_json<T: DeserializeOwned>(name: &str, data: &[u8]) -> Result<T, ContentError> {
    serde_json::from_slice(data).map_err(|e| ContentError::ParseError {
        name: name.to_string(),
        reason: e.to_string(),
    })
}
