// Puzzle generation pipeline: document → keywords → crossword → clues.
// The crossword engine itself lives in `crate::crossword` and knows nothing about HTTP.
// All definition lookups go through the injected DefinitionLookup.

pub mod handlers;
pub mod pipeline;
