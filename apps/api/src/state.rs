use std::sync::Arc;

use crate::clues::DefinitionLookup;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable definition source. Default: DictionaryClient. OfflineLookup when
    /// CLUE_LOOKUP_ENABLED=false.
    pub definitions: Arc<dyn DefinitionLookup>,
}
