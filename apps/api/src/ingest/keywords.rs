use std::collections::BTreeSet;

/// Tokens of this many characters or fewer are never keywords.
const MAX_SKIPPED_CHARS: usize = 3;

/// Common English function words and filler verbs that make poor puzzle answers.
const STOP_WORDS: &[&str] = &[
    "about", "above", "after", "again", "against", "also", "among", "been", "before", "being",
    "below", "between", "both", "but", "came", "can", "cannot", "come", "could", "did", "does",
    "doing", "done", "down", "during", "each", "even", "every", "from", "further", "gets",
    "give", "goes", "going", "have", "having", "here", "hers", "herself", "himself", "into",
    "itself", "just", "know", "like", "made", "make", "many", "more", "most", "much", "must",
    "myself", "need", "never", "next", "once", "only", "other", "ought", "ours", "ourselves",
    "over", "same", "says", "shall", "should", "since", "some", "still", "such", "take",
    "than", "that", "their", "theirs", "them", "themselves", "then", "there", "these", "they",
    "this", "those", "though", "through", "thus", "together", "under", "until", "upon", "used",
    "using", "very", "want", "well", "were", "what", "when", "where", "whether", "which",
    "while", "whom", "whose", "will", "with", "within", "without", "would", "your", "yours",
    "yourself", "yourselves",
];

/// Extracts candidate keywords from free text.
///
/// Splits on anything that is not a letter, lowercases, drops stop words and
/// tokens of `MAX_SKIPPED_CHARS` or fewer characters, then dedups. Output is
/// sorted ascending so the same document always yields the same list.
pub fn extract_keywords(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphabetic())
        .filter(|token| token.chars().count() > MAX_SKIPPED_CHARS)
        .map(str::to_lowercase)
        .filter(|token| !STOP_WORDS.contains(&token.as_str()))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
