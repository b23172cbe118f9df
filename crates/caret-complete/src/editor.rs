//! The host editor interface and a rope-backed reference implementation.
//!
//! The autocomplete controller never holds a reference to the host editor
//! across frames; every call receives the editor again and re-reads caret
//! position and line text through [`TextEditorHost`]. The trait is exactly
//! the surface the controller needs (four queries and two mutations), so a
//! host can be faked for tests, which is what [`RopeEditor`] is: a minimal,
//! monospace, rope-backed host used by the integration tests and the
//! headless demo.

use ropey::Rope;

use crate::geometry::Size;

// ============================================================================
// Positions and Ranges
// ============================================================================

/// A caret position as (line, column).
///
/// Both indices are zero-based, and `column` counts Unicode scalar values
/// (chars), not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextPosition {
    /// Zero-based line index.
    pub line: usize,
    /// Zero-based column, in chars from the line start.
    pub column: usize,
}

impl TextPosition {
    /// Create a new position.
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// A half-open text range: `start` is included, `end` is not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextRange {
    /// First position of the range.
    pub start: TextPosition,
    /// One past the last position of the range.
    pub end: TextPosition,
}

impl TextRange {
    /// Create a new range.
    pub const fn new(start: TextPosition, end: TextPosition) -> Self {
        Self { start, end }
    }
}

// ============================================================================
// Language Definition
// ============================================================================

/// A named identifier known to the host's language, with the declaration
/// text shown in tooltips or documentation panes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    /// The identifier name as it appears in source text.
    pub name: String,
    /// Human-readable declaration or description.
    pub declaration: String,
}

impl Identifier {
    /// Create a new identifier entry.
    pub fn new(name: impl Into<String>, declaration: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            declaration: declaration.into(),
        }
    }
}

/// The host language's keyword and identifier tables.
///
/// Both tables preserve insertion order; the candidate vocabulary is built
/// from them in that order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageDefinition {
    /// Display name of the language.
    pub name: String,
    /// Language keywords, in insertion order.
    keywords: Vec<String>,
    /// Known identifiers, in insertion order.
    identifiers: Vec<Identifier>,
}

impl LanguageDefinition {
    /// Create an empty language definition with the given display name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            keywords: Vec::new(),
            identifiers: Vec::new(),
        }
    }

    /// Append a keyword.
    pub fn add_keyword(&mut self, keyword: impl Into<String>) {
        self.keywords.push(keyword.into());
    }

    /// Append keywords using builder pattern.
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords.extend(keywords.into_iter().map(Into::into));
        self
    }

    /// Append an identifier.
    pub fn add_identifier(&mut self, identifier: Identifier) {
        self.identifiers.push(identifier);
    }

    /// Append an identifier using builder pattern.
    pub fn with_identifier(
        mut self,
        name: impl Into<String>,
        declaration: impl Into<String>,
    ) -> Self {
        self.identifiers.push(Identifier::new(name, declaration));
        self
    }

    /// The keywords, in insertion order.
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// The identifiers, in insertion order.
    pub fn identifiers(&self) -> &[Identifier] {
        &self.identifiers
    }
}

// ============================================================================
// Host Interface
// ============================================================================

/// The capability surface the autocomplete controller consumes from the
/// host text editor.
///
/// Coordinates follow the host's text model: lines and char-based columns.
/// Pixel queries describe the caret inside the host's text area; the screen
/// origin of that text area is passed separately to
/// [`AutoCompleter::render`](crate::completer::AutoCompleter::render), so a
/// host with a gutter folds the gutter width into that origin.
pub trait TextEditorHost {
    /// The active language definition.
    fn language_definition(&self) -> &LanguageDefinition;

    /// The current caret position.
    fn cursor_position(&self) -> TextPosition;

    /// The full text of the line containing the caret, without the trailing
    /// line break.
    fn current_line_text(&self) -> String;

    /// Pixel offset from the start of the caret's line to the caret column.
    fn caret_pixel_offset(&self) -> f32;

    /// The per-character advance (width, height) at the caret.
    fn char_advance(&self) -> Size;

    /// Delete the half-open range from `range.start` to `range.end`.
    ///
    /// Out-of-bounds coordinates are clamped, not rejected; the host must
    /// treat the whole call as a single atomic edit for undo purposes.
    fn delete_range(&mut self, range: TextRange);

    /// Insert text at the caret, moving the caret past the inserted text.
    fn insert_text(&mut self, text: &str);
}

// ============================================================================
// Reference Host
// ============================================================================

/// A minimal rope-backed editor host with monospace metrics.
///
/// This is not a widget: it exists so the controller can be driven without a
/// real editor: in the integration tests, in the headless demo, and as a
/// template for host implementors.
#[derive(Debug, Clone)]
pub struct RopeEditor {
    rope: Rope,
    cursor: TextPosition,
    language: LanguageDefinition,
    char_advance: Size,
}

impl Default for RopeEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl RopeEditor {
    /// Create an empty editor.
    pub fn new() -> Self {
        Self {
            rope: Rope::new(),
            cursor: TextPosition::default(),
            language: LanguageDefinition::default(),
            char_advance: Size::new(8.0, 16.0),
        }
    }

    /// Create an editor holding the given text, caret at the origin.
    pub fn with_text(text: impl AsRef<str>) -> Self {
        Self {
            rope: Rope::from_str(text.as_ref()),
            ..Self::new()
        }
    }

    /// Set the active language definition using builder pattern.
    pub fn with_language(mut self, language: LanguageDefinition) -> Self {
        self.language = language;
        self
    }

    /// Replace the active language definition.
    pub fn set_language(&mut self, language: LanguageDefinition) {
        self.language = language;
    }

    /// The current text content.
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// Move the caret, clamping to the document bounds.
    pub fn set_cursor_position(&mut self, line: usize, column: usize) {
        let line = line.min(self.rope.len_lines().saturating_sub(1));
        let column = column.min(self.line_len_chars(line));
        self.cursor = TextPosition::new(line, column);
    }

    /// Length of a line in chars, excluding the trailing line break.
    fn line_len_chars(&self, line: usize) -> usize {
        if line >= self.rope.len_lines() {
            return 0;
        }
        let len = self.rope.line(line).len_chars();
        // Don't count the newline character at the end
        if line + 1 < self.rope.len_lines() {
            len.saturating_sub(1)
        } else {
            len
        }
    }

    /// Convert (line, column) to a char index, clamping both coordinates.
    fn position_to_char(&self, pos: TextPosition) -> usize {
        let line = pos.line.min(self.rope.len_lines().saturating_sub(1));
        let line_start = self.rope.line_to_char(line);
        line_start + pos.column.min(self.line_len_chars(line))
    }
}

impl TextEditorHost for RopeEditor {
    fn language_definition(&self) -> &LanguageDefinition {
        &self.language
    }

    fn cursor_position(&self) -> TextPosition {
        self.cursor
    }

    fn current_line_text(&self) -> String {
        if self.cursor.line >= self.rope.len_lines() {
            return String::new();
        }
        let line = self.rope.line(self.cursor.line).to_string();
        line.trim_end_matches(['\n', '\r']).to_string()
    }

    fn caret_pixel_offset(&self) -> f32 {
        self.cursor.column as f32 * self.char_advance.width
    }

    fn char_advance(&self) -> Size {
        self.char_advance
    }

    fn delete_range(&mut self, range: TextRange) {
        let start = self.position_to_char(range.start);
        let end = self.position_to_char(range.end);
        if start >= end {
            return;
        }
        self.rope.remove(start..end);
        let (line, column) = {
            let line = self.rope.char_to_line(start);
            (line, start - self.rope.line_to_char(line))
        };
        self.cursor = TextPosition::new(line, column);
    }

    fn insert_text(&mut self, text: &str) {
        let at = self.position_to_char(self.cursor);
        self.rope.insert(at, text);
        let end = at + text.chars().count();
        let line = self.rope.char_to_line(end);
        self.cursor = TextPosition::new(line, end - self.rope.line_to_char(line));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn editor_with_line(text: &str, column: usize) -> RopeEditor {
        let mut editor = RopeEditor::with_text(text);
        editor.set_cursor_position(0, column);
        editor
    }

    #[test]
    fn test_current_line_excludes_newline() {
        let mut editor = RopeEditor::with_text("first line\nsecond");
        editor.set_cursor_position(0, 3);
        assert_eq!(editor.current_line_text(), "first line");
        editor.set_cursor_position(1, 0);
        assert_eq!(editor.current_line_text(), "second");
    }

    #[test]
    fn test_cursor_clamped_to_line() {
        let mut editor = RopeEditor::with_text("abc\ndefgh");
        editor.set_cursor_position(0, 99);
        assert_eq!(editor.cursor_position(), TextPosition::new(0, 3));
        editor.set_cursor_position(99, 2);
        assert_eq!(editor.cursor_position(), TextPosition::new(1, 2));
    }

    #[test]
    fn test_insert_moves_caret() {
        let mut editor = editor_with_line("he", 2);
        editor.insert_text("llo");
        assert_eq!(editor.text(), "hello");
        assert_eq!(editor.cursor_position(), TextPosition::new(0, 5));
    }

    #[test]
    fn test_delete_range_same_line() {
        let mut editor = editor_with_line("hello world", 11);
        editor.delete_range(TextRange::new(
            TextPosition::new(0, 5),
            TextPosition::new(0, 11),
        ));
        assert_eq!(editor.text(), "hello");
        assert_eq!(editor.cursor_position(), TextPosition::new(0, 5));
    }

    #[test]
    fn test_delete_range_clamps_out_of_bounds() {
        let mut editor = editor_with_line("short", 5);
        editor.delete_range(TextRange::new(
            TextPosition::new(0, 2),
            TextPosition::new(7, 42),
        ));
        assert_eq!(editor.text(), "sh");
    }

    #[test]
    fn test_delete_inverted_range_is_noop() {
        let mut editor = editor_with_line("text", 4);
        editor.delete_range(TextRange::new(
            TextPosition::new(0, 3),
            TextPosition::new(0, 1),
        ));
        assert_eq!(editor.text(), "text");
    }

    #[test]
    fn test_caret_pixel_offset_is_monospace() {
        let editor = editor_with_line("abcdef", 4);
        let advance = editor.char_advance();
        assert_eq!(editor.caret_pixel_offset(), 4.0 * advance.width);
    }

    #[test]
    fn test_multibyte_columns_count_chars() {
        let mut editor = RopeEditor::with_text("héllo");
        editor.set_cursor_position(0, 5);
        assert_eq!(editor.cursor_position().column, 5);
        editor.delete_range(TextRange::new(
            TextPosition::new(0, 1),
            TextPosition::new(0, 2),
        ));
        assert_eq!(editor.text(), "hllo");
    }

    #[test]
    fn test_language_definition_order_preserved() {
        let language = LanguageDefinition::new("demo")
            .with_keywords(["while", "for", "if"])
            .with_identifier("print", "fn print(text)")
            .with_identifier("assert", "fn assert(cond)");
        assert_eq!(language.keywords(), ["while", "for", "if"]);
        assert_eq!(language.identifiers()[0].name, "print");
        assert_eq!(language.identifiers()[1].name, "assert");
    }
}
