//! Candidate vocabulary built from the host's language definition.

use crate::editor::LanguageDefinition;

/// Directive-style tokens offered regardless of the active language.
pub const DIRECTIVE_TOKENS: [&str; 7] = [
    "#include", "#ifdef", "#ifndef", "#endif", "#define", "#error", "#pragma",
];

/// The full, unfiltered candidate list for the active language.
///
/// Built once per language definition: the directive tokens first, then
/// every identifier name longer than one character, then every keyword
/// longer than one character, each table in its insertion order.
/// Single-character tokens are excluded as noise. Entries are not
/// deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateVocabulary {
    entries: Vec<String>,
}

impl CandidateVocabulary {
    /// An empty vocabulary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the vocabulary for a language definition.
    ///
    /// An empty definition yields only the directive tokens.
    pub fn from_language(language: &LanguageDefinition) -> Self {
        let mut entries: Vec<String> =
            DIRECTIVE_TOKENS.iter().map(|s| s.to_string()).collect();

        entries.extend(
            language
                .identifiers()
                .iter()
                .filter(|identifier| identifier.name.chars().count() > 1)
                .map(|identifier| identifier.name.clone()),
        );

        entries.extend(
            language
                .keywords()
                .iter()
                .filter(|keyword| keyword.chars().count() > 1)
                .cloned(),
        );

        tracing::debug!(
            target: "caret_complete::vocabulary",
            language = %language.name,
            entries = entries.len(),
            "vocabulary built"
        );

        Self { entries }
    }

    /// The candidate entries, in vocabulary order.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the vocabulary has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The entries whose char prefix equals `base_word` exactly.
    ///
    /// Matching is case-sensitive; an empty base word matches everything.
    /// Order is preserved.
    pub fn filter_prefix(&self, base_word: &str) -> Vec<String> {
        self.entries
            .iter()
            .filter(|entry| entry.starts_with(base_word))
            .cloned()
            .collect()
    }
}
