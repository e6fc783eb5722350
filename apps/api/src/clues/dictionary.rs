/// Dictionary client — looks up word definitions over HTTP.
///
/// Speaks the free-dictionary response shape:
/// `[{ "meanings": [{ "definitions": [{ "definition": "..." }] }] }]`.
/// Only the first definition of the first meaning of the first entry is used.
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;
use tracing::debug;

use crate::clues::{DefinitionLookup, LookupError};

pub const DEFAULT_DICTIONARY_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";

#[derive(Debug, Deserialize)]
struct DictionaryEntry {
    #[serde(default)]
    meanings: Vec<Meaning>,
}

#[derive(Debug, Deserialize)]
struct Meaning {
    #[serde(default)]
    definitions: Vec<Definition>,
}

#[derive(Debug, Deserialize)]
struct Definition {
    definition: String,
}

/// HTTP-backed `DefinitionLookup`.
#[derive(Clone)]
pub struct DictionaryClient {
    client: Client,
    base_url: Url,
}

impl DictionaryClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, LookupError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| LookupError::InvalidUrl(format!("{base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(LookupError::InvalidUrl(base_url.to_string()));
        }

        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base_url })
    }

    /// `{base_url}/{word}`, with the word percent-encoded as a single path segment.
    fn entry_url(&self, word: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(word);
        }
        url
    }
}

/// `Ok(false)` when the dictionary has no entry for the word. Other failures are
/// errors so the caller can log them before falling back.
fn has_entry(status: StatusCode) -> Result<bool, LookupError> {
    if status == StatusCode::NOT_FOUND {
        return Ok(false);
    }
    if !status.is_success() {
        return Err(LookupError::Status {
            status: status.as_u16(),
        });
    }
    Ok(true)
}

#[async_trait]
impl DefinitionLookup for DictionaryClient {
    /// A 404 means "no definition". Any other non-success status is a
    /// `LookupError::Status`.
    async fn lookup(&self, word: &str) -> Result<Option<String>, LookupError> {
        let response = self.client.get(self.entry_url(word)).send().await?;

        if !has_entry(response.status())? {
            debug!(word, "no dictionary entry");
            return Ok(None);
        }

        let body = response.text().await?;
        first_definition(&body)
    }
}

/// Pulls the first non-blank definition out of a dictionary response body.
fn first_definition(body: &str) -> Result<Option<String>, LookupError> {
    let entries: Vec<DictionaryEntry> = serde_json::from_str(body)?;
    Ok(entries
        .into_iter()
        .next()
        .and_then(|entry| entry.meanings.into_iter().next())
        .and_then(|meaning| meaning.definitions.into_iter().next())
        .map(|d| d.definition.trim().to_string())
        .filter(|d| !d.is_empty()))
}
