//! Clue generation — turns placed words into clue text.
//!
//! Definitions come from a pluggable `DefinitionLookup`. A lookup that errors or
//! finds nothing falls back to a fixed phrase, so clue generation itself never fails.
//!
//! `AppState` holds an `Arc<dyn DefinitionLookup>`: `DictionaryClient` in
//! production, `OfflineLookup` when lookups are disabled.

pub mod dictionary;

use std::collections::BTreeMap;

use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, warn};

pub use dictionary::DictionaryClient;

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("dictionary returned status {status}")]
    Status { status: u16 },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid dictionary URL: {0}")]
    InvalidUrl(String),
}

/// Source of word definitions. `Ok(None)` means the word is unknown.
#[async_trait]
pub trait DefinitionLookup: Send + Sync {
    async fn lookup(&self, word: &str) -> Result<Option<String>, LookupError>;
}

/// Lookup that knows no words; every clue uses the fallback text.
pub struct OfflineLookup;

#[async_trait]
impl DefinitionLookup for OfflineLookup {
    async fn lookup(&self, _word: &str) -> Result<Option<String>, LookupError> {
        Ok(None)
    }
}

/// Builds a clue for every distinct, non-empty word.
///
/// Lookups run one at a time, once per word. Failures are logged and replaced by
/// `fallback_clue`.
pub async fn generate_clues<S: AsRef<str>>(
    words: &[S],
    lookup: &dyn DefinitionLookup,
) -> BTreeMap<String, String> {
    let mut clues = BTreeMap::new();

    for word in words {
        let word: &str = word.as_ref();
        if word.is_empty() || clues.contains_key(word) {
            continue;
        }

        let definition = match lookup.lookup(word).await {
            Ok(definition) => definition.filter(|d| !d.trim().is_empty()),
            Err(e) => {
                warn!("Could not find definition for {word}: {e}");
                None
            }
        };

        let clue = definition.unwrap_or_else(|| {
            debug!(word, "using fallback clue");
            fallback_clue(word)
        });
        clues.insert(word.to_string(), clue);
    }

    clues
}

/// "A term related to <Word>", with the word capitalised.
pub fn fallback_clue(word: &str) -> String {
    format!("A term related to {}", capitalize(word))
}

/// Uppercases the first character and lowercases the rest.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Canned definitions; records every word it was asked about.
    struct StubLookup {
        definitions: HashMap<&'static str, &'static str>,
        calls: Mutex<Vec<String>>,
    }

    impl StubLookup {
        fn new(definitions: &[(&'static str, &'static str)]) -> Self {
            Self {
                definitions: definitions.iter().copied().collect(),
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl DefinitionLookup for StubLookup {
        async fn lookup(&self, word: &str) -> Result<Option<String>, LookupError> {
            self.calls.lock().unwrap().push(word.to_string());
            Ok(self.definitions.get(word).map(|d| d.to_string()))
        }
    }

    struct FailingLookup;

    #[async_trait]
    impl DefinitionLookup for FailingLookup {
        async fn lookup(&self, _word: &str) -> Result<Option<String>, LookupError> {
            Err(LookupError::Status { status: 503 })
        }
    }

    #[test]
    fn test_fallback_capitalizes() {
        assert_eq!(fallback_clue("python"), "A term related to Python");
        assert_eq!(fallback_clue("pYTHON"), "A term related to Python");
        assert_eq!(fallback_clue("érable"), "A term related to Érable");
    }

    #[tokio::test]
    async fn test_definition_used_when_found() {
        let lookup = StubLookup::new(&[("kernel", "Core of an operating system.")]);
        let clues = generate_clues(&["kernel", "daemon"], &lookup).await;
        assert_eq!(clues["kernel"], "Core of an operating system.");
        assert_eq!(clues["daemon"], "A term related to Daemon");
    }

    #[tokio::test]
    async fn test_lookup_once_per_distinct_word() {
        let lookup = StubLookup::new(&[]);
        let clues = generate_clues(&["cache", "cache", "", "query"], &lookup).await;
        assert_eq!(clues.len(), 2);
        assert_eq!(*lookup.calls.lock().unwrap(), vec!["cache", "query"]);
    }

    #[tokio::test]
    async fn test_lookup_errors_degrade_to_fallback() {
        let clues = generate_clues(&["network"], &FailingLookup).await;
        assert_eq!(clues["network"], "A term related to Network");
    }

    #[tokio::test]
    async fn test_offline_lookup_always_falls_back() {
        let clues = generate_clues(&["lambda"], &OfflineLookup).await;
        assert_eq!(clues["lambda"], "A term related to Lambda");
    }
}
