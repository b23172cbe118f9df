//! The autocomplete controller.
//!
//! [`AutoCompleter`] tracks the word under the caret, filters the candidate
//! vocabulary by literal prefix, renders a selectable dropdown one line below
//! the caret, and commits the chosen candidate back into the host's buffer.
//!
//! The controller is driven by the host's per-frame loop:
//!
//! 1. [`handle_key_event`](AutoCompleter::handle_key_event) before the
//!    editor's own key handling; a `true` return means the event was consumed.
//! 2. [`render`](AutoCompleter::render) once per frame, after the editor's
//!    text has been drawn.
//! 3. [`handle_mouse_move`](AutoCompleter::handle_mouse_move) and
//!    [`handle_mouse_press`](AutoCompleter::handle_mouse_press) for pointer
//!    interaction with the popup.
//!
//! # Example
//!
//! ```
//! use caret_complete::{
//!     AutoCompleter, Key, KeyPressEvent, KeyboardModifiers, LanguageDefinition,
//!     Point, RecordingPainter, RopeEditor,
//! };
//!
//! let language = LanguageDefinition::new("demo").with_keywords(["format", "for"]);
//! let mut editor = RopeEditor::with_text("fo").with_language(language);
//! editor.set_cursor_position(0, 2);
//!
//! let mut completer = AutoCompleter::new();
//! completer.initialize(&editor);
//!
//! // Ctrl+Space opens the popup
//! let open = KeyPressEvent::new(Key::Space, KeyboardModifiers::CTRL, "");
//! assert!(completer.handle_key_event(&mut editor, &open));
//!
//! let mut painter = RecordingPainter::new();
//! completer.render(&editor, &mut painter, Point::ZERO);
//! assert_eq!(completer.filtered_candidates(), ["format", "for"]);
//! ```

use caret_complete_core::Signal;

use crate::editor::{TextEditorHost, TextPosition, TextRange};
use crate::events::{Key, KeyPressEvent};
use crate::geometry::{Point, Rect};
use crate::paint::{Painter, PopupStyle, Stroke};
use crate::popup::PopupState;
use crate::vocabulary::CandidateVocabulary;

/// Characters that terminate a base word, besides whitespace.
const DELIMITER_PUNCTUATION: &str = "()[]{}.,-<>;:=\\/+%^&|'\"";

/// Row label shown when no candidate matches the base word.
const NO_RESULTS_LABEL: &str = "No results";

/// Check whether a character terminates a base word.
///
/// Delimiters are whitespace and the fixed punctuation set
/// `()[]{}.,-<>;:=\/+%^&|'"`; letters, digits, underscore and everything
/// else are word characters.
pub fn is_character_delimiter(c: char) -> bool {
    c.is_whitespace() || DELIMITER_PUNCTUATION.contains(c)
}

/// The run of non-delimiter characters immediately left of the caret.
///
/// Scans the caret's line backwards from the caret column; columns count
/// chars, so the scan is Unicode-codepoint-wise.
pub fn autocomplete_base_word(editor: &dyn TextEditorHost) -> String {
    let line: Vec<char> = editor.current_line_text().chars().collect();
    let word_end = editor.cursor_position().column.min(line.len());
    let mut word_start = word_end;
    while word_start > 0 && !is_character_delimiter(line[word_start - 1]) {
        word_start -= 1;
    }
    line[word_start..word_end].iter().collect()
}

/// Inline autocomplete popup controller for a code-editor text widget.
///
/// The controller owns no text and no window: it re-reads the caret and line
/// through [`TextEditorHost`] every call, draws through [`Painter`], and
/// mutates the host buffer only inside [`complete`](Self::complete).
///
/// # Signals
///
/// - `activated(String)`: a candidate was committed (Enter or click)
/// - `highlighted(String)`: the selected row changed
pub struct AutoCompleter {
    /// All candidates for the active language.
    vocabulary: CandidateVocabulary,
    /// Candidates matching the current base word, in vocabulary order.
    filtered: Vec<String>,
    /// Transient popup state.
    state: PopupState,
    /// Appearance configuration.
    style: PopupStyle,

    /// Signal emitted when a candidate is committed.
    pub activated: Signal<String>,
    /// Signal emitted when the highlighted candidate changes.
    pub highlighted: Signal<String>,
}

impl Default for AutoCompleter {
    fn default() -> Self {
        Self::new()
    }
}

impl AutoCompleter {
    /// Create a controller with an empty vocabulary and default style.
    pub fn new() -> Self {
        Self {
            vocabulary: CandidateVocabulary::new(),
            filtered: Vec::new(),
            state: PopupState::default(),
            style: PopupStyle::default(),
            activated: Signal::new(),
            highlighted: Signal::new(),
        }
    }

    /// Set the popup style using builder pattern.
    pub fn with_style(mut self, style: PopupStyle) -> Self {
        self.style = style;
        self
    }

    /// The popup style.
    pub fn style(&self) -> &PopupStyle {
        &self.style
    }

    /// Replace the popup style.
    pub fn set_style(&mut self, style: PopupStyle) {
        self.style = style;
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// (Re)build the candidate vocabulary from the host's language definition.
    ///
    /// Call whenever the active language changes. Closes the popup if open.
    pub fn initialize(&mut self, editor: &dyn TextEditorHost) {
        self.vocabulary = CandidateVocabulary::from_language(editor.language_definition());
        self.filtered.clear();
        self.close();
    }

    /// Whether the popup is currently open.
    pub fn is_open(&self) -> bool {
        self.state.open
    }

    /// Index of the selected row in the filtered list.
    pub fn selection(&self) -> usize {
        self.state.selection
    }

    /// The candidates matching the current base word, in vocabulary order.
    pub fn filtered_candidates(&self) -> &[String] {
        &self.filtered
    }

    /// The base word the current filtered list was computed for.
    pub fn last_search_key(&self) -> &str {
        &self.state.last_search_key
    }

    /// The full candidate vocabulary.
    pub fn vocabulary(&self) -> &CandidateVocabulary {
        &self.vocabulary
    }

    /// The popup rectangle laid out by the last render pass.
    pub fn popup_rect(&self) -> Rect {
        self.state.rect
    }

    fn close(&mut self) {
        self.state.open = false;
        self.state.reload_pending = false;
        self.state.reset();
    }

    // =========================================================================
    // Key Handling
    // =========================================================================

    /// Interpret a key event, returning `true` when it was consumed.
    ///
    /// While closed, only Ctrl+Space is consumed (it opens the popup with a
    /// reload pending). While open, Escape closes, the arrow keys move the
    /// selection with wrap-around, and Enter (either variant) commits the
    /// selected candidate and closes. Every other key is declined so the
    /// host editor keeps handling it; typing continues to update the base
    /// word while the popup stays open.
    pub fn handle_key_event(
        &mut self,
        editor: &mut dyn TextEditorHost,
        event: &KeyPressEvent,
    ) -> bool {
        if !self.state.open {
            // Open popup with Ctrl+Space
            if event.modifiers.control && event.key == Key::Space {
                self.state.open = true;
                self.state.reload_pending = true;
                tracing::debug!(
                    target: "caret_complete::completer",
                    "popup opened"
                );
                return true;
            }
            return false;
        }

        match event.key {
            Key::Escape => {
                self.close();
                true
            }
            Key::ArrowDown => {
                self.move_selection_down();
                true
            }
            Key::ArrowUp => {
                self.move_selection_up();
                true
            }
            Key::Enter | Key::NumpadEnter => {
                if let Some(candidate) = self.selected_candidate() {
                    self.complete(editor, &candidate);
                }
                self.close();
                true
            }
            _ => false,
        }
    }

    /// The candidate at the (clamped) selection, if any.
    fn selected_candidate(&self) -> Option<String> {
        if self.filtered.is_empty() {
            return None;
        }
        let index = self.state.selection.min(self.filtered.len() - 1);
        Some(self.filtered[index].clone())
    }

    /// Advance the selection, wrapping to the top past the last candidate.
    fn move_selection_down(&mut self) {
        if self.filtered.is_empty() {
            return;
        }
        self.state.selection = if self.state.selection + 1 < self.filtered.len() {
            self.state.selection + 1
        } else {
            0
        };
        self.state
            .ensure_selection_visible(self.filtered.len(), self.style.max_visible_rows);
        self.emit_highlighted();
    }

    /// Retreat the selection, wrapping to the bottom below the first row.
    fn move_selection_up(&mut self) {
        if self.filtered.is_empty() {
            return;
        }
        self.state.selection = if self.state.selection > 0 {
            self.state.selection - 1
        } else {
            self.filtered.len() - 1
        };
        self.state
            .ensure_selection_visible(self.filtered.len(), self.style.max_visible_rows);
        self.emit_highlighted();
    }

    fn emit_highlighted(&self) {
        if let Some(candidate) = self.filtered.get(self.state.selection) {
            self.highlighted.emit(candidate.clone());
        }
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Draw the popup for this frame.
    ///
    /// `origin` is the screen position of the host's text area (the host
    /// folds any gutter into it). The popup is anchored at the caret's pixel
    /// offset, one line below the caret line. The base word is recomputed
    /// every pass; the filtered list only when a reload is pending or the
    /// base word changed since the last pass.
    pub fn render(&mut self, editor: &dyn TextEditorHost, painter: &mut dyn Painter, origin: Point) {
        if !self.state.open {
            return;
        }

        let base_word = autocomplete_base_word(editor);
        if self.state.reload_pending || base_word != self.state.last_search_key {
            self.refilter(base_word);
        }

        let cursor = editor.cursor_position();
        let advance = editor.char_advance();
        let rows = self.style.max_visible_rows.min(self.filtered.len() + 1);
        let rect = Rect::new(
            origin.x + editor.caret_pixel_offset(),
            origin.y + (cursor.line as f32 + 1.0) * advance.height,
            self.style.width,
            self.style.row_height * rows as f32,
        );
        self.state.rect = rect;
        self.state
            .ensure_selection_visible(self.filtered.len(), self.style.max_visible_rows);

        painter.fill_rect(rect, self.style.background_color);
        painter.stroke_rect(rect, &Stroke::new(self.style.border_color, 1.0));

        let text_inset_y = (self.style.row_height - advance.height).max(0.0) / 2.0;

        if self.filtered.is_empty() {
            painter.draw_text(
                NO_RESULTS_LABEL,
                Point::new(
                    rect.left() + self.style.text_padding,
                    rect.top() + text_inset_y,
                ),
                self.style.disabled_text_color,
            );
            return;
        }

        let visible = self
            .state
            .visible_range(self.filtered.len(), self.style.max_visible_rows);
        for (visual_index, index) in visible.enumerate() {
            let row_rect = Rect::new(
                rect.left() + 1.0,
                rect.top() + 1.0 + visual_index as f32 * self.style.row_height,
                rect.width() - 2.0,
                self.style.row_height,
            );

            let is_selected = index == self.state.selection;
            let is_hovered = self.state.hovered == Some(index) && !is_selected;

            if is_selected {
                painter.fill_rect(row_rect, self.style.selection_color);
            } else if is_hovered {
                painter.fill_rect(row_rect, self.style.hover_color);
            }

            let text_color = if is_selected {
                self.style.selected_text_color
            } else {
                self.style.text_color
            };
            painter.draw_text(
                &self.filtered[index],
                Point::new(
                    row_rect.left() + self.style.text_padding,
                    row_rect.top() + text_inset_y,
                ),
                text_color,
            );
        }

        self.draw_scroll_indicator(painter, rect);
    }

    /// Recompute the filtered list for a new base word.
    fn refilter(&mut self, base_word: String) {
        self.filtered = self.vocabulary.filter_prefix(&base_word);
        self.state.reload_pending = false;
        self.state.selection = 0;
        self.state.scroll_offset = 0;
        self.state.hovered = None;
        tracing::debug!(
            target: "caret_complete::completer",
            word = %base_word,
            matches = self.filtered.len(),
            "candidate filter recomputed"
        );
        self.state.last_search_key = base_word;
        self.emit_highlighted();
    }

    /// Draw a proportional scroll thumb when the list overflows the viewport.
    fn draw_scroll_indicator(&self, painter: &mut dyn Painter, rect: Rect) {
        let max_rows = self.style.max_visible_rows;
        if self.filtered.len() <= max_rows {
            return;
        }

        let indicator_width = 4.0;
        let track_height = rect.height() - 2.0;
        let thumb_height = (max_rows as f32 / self.filtered.len() as f32) * track_height;
        let thumb_y = (self.state.scroll_offset as f32
            / (self.filtered.len() - max_rows) as f32)
            * (track_height - thumb_height);

        let track_rect = Rect::new(
            rect.right() - indicator_width - 2.0,
            rect.top() + 1.0,
            indicator_width,
            track_height,
        );
        let thumb_rect = Rect::new(
            track_rect.left(),
            track_rect.top() + thumb_y,
            indicator_width,
            thumb_height.max(10.0),
        );

        painter.fill_rect(track_rect, self.style.scroll_track_color);
        painter.fill_rect(thumb_rect, self.style.scroll_thumb_color);
    }

    // =========================================================================
    // Mouse Handling
    // =========================================================================

    /// Track the hovered row. Returns `true` if the point is over the popup.
    pub fn handle_mouse_move(&mut self, pos: Point) -> bool {
        if !self.state.open {
            return false;
        }
        if !self.state.rect.contains(pos) {
            self.state.hovered = None;
            return false;
        }
        self.state.hovered = self.row_at(pos);
        true
    }

    /// Handle a mouse press. Clicking a candidate row commits it exactly as
    /// the keyboard path does and closes the popup.
    ///
    /// Returns `true` if the press landed inside the popup (and so should
    /// not reach the editor underneath).
    pub fn handle_mouse_press(&mut self, editor: &mut dyn TextEditorHost, pos: Point) -> bool {
        if !self.state.open {
            return false;
        }
        if !self.state.rect.contains(pos) {
            return false;
        }
        if let Some(index) = self.row_at(pos) {
            self.state.selection = index;
            let candidate = self.filtered[index].clone();
            self.complete(editor, &candidate);
            self.close();
        }
        true
    }

    /// The candidate row under a point inside the popup rect, if any.
    fn row_at(&self, pos: Point) -> Option<usize> {
        let local_y = pos.y - self.state.rect.top() - 1.0;
        if local_y < 0.0 {
            return None;
        }
        let index = (local_y / self.style.row_height) as usize + self.state.scroll_offset;
        (index < self.filtered.len()).then_some(index)
    }

    // =========================================================================
    // Commit
    // =========================================================================

    /// Replace the base word with `value` in the host buffer.
    ///
    /// Deletes the span of `last_search_key` chars ending at the caret, then
    /// inserts `value` at the caret. No-op while the popup is closed. This
    /// does not close the popup or reset state; the key and mouse paths do
    /// that after calling it.
    pub fn complete(&mut self, editor: &mut dyn TextEditorHost, value: &str) {
        if !self.state.open {
            return;
        }

        if !self.filtered.is_empty() {
            self.state.selection = self.state.selection.min(self.filtered.len() - 1);
        }

        let cursor = editor.cursor_position();
        let key_len = self.state.last_search_key.chars().count();
        let start = TextPosition::new(cursor.line, cursor.column.saturating_sub(key_len));
        editor.delete_range(TextRange::new(start, cursor));
        editor.insert_text(value);

        tracing::debug!(
            target: "caret_complete::completer",
            candidate = %value,
            "candidate committed"
        );
        self.activated.emit(value.to_string());
    }
}

impl std::fmt::Debug for AutoCompleter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AutoCompleter")
            .field("open", &self.state.open)
            .field("selection", &self.state.selection)
            .field("last_search_key", &self.state.last_search_key)
            .field("vocabulary_len", &self.vocabulary.len())
            .field("filtered_len", &self.filtered.len())
            .finish()
    }
}
