//! Painting seam between the popup and the host's drawing loop.
//!
//! The autocomplete popup owns no window and no font stack; it draws by
//! issuing calls on the [`Painter`] trait, which the host's immediate-mode
//! render loop implements on top of whatever backend it uses. A
//! [`RecordingPainter`] implementation is provided so the emitted display
//! list can be inspected in tests and headless demos.

use crate::geometry::{Point, Rect};

// ============================================================================
// Color
// ============================================================================

/// A color with premultiplied alpha, components in the 0.0-1.0 range.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    /// Create a new color from RGBA components (0.0-1.0 range).
    ///
    /// Note: This expects premultiplied alpha. Use [`from_rgba`](Self::from_rgba)
    /// for non-premultiplied input.
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create a color from non-premultiplied RGBA components.
    #[inline]
    pub fn from_rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self {
            r: r * a,
            g: g * a,
            b: b * a,
            a,
        }
    }

    /// Create a color from 8-bit RGBA components (0-255 range).
    #[inline]
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::from_rgba(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    /// Create an opaque color from RGB components.
    #[inline]
    pub const fn from_rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create an opaque color from 8-bit RGB components.
    #[inline]
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

    /// Opaque black.
    pub const BLACK: Self = Self::from_rgb(0.0, 0.0, 0.0);
    /// Opaque white.
    pub const WHITE: Self = Self::from_rgb(1.0, 1.0, 1.0);
    /// Fully transparent.
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);
}

// ============================================================================
// Stroke
// ============================================================================

/// Outline description for rectangle borders.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    /// Stroke color.
    pub color: Color,
    /// Stroke width in pixels.
    pub width: f32,
}

impl Stroke {
    /// Create a new stroke with the given color and width.
    #[inline]
    pub const fn new(color: Color, width: f32) -> Self {
        Self { color, width }
    }
}

impl Default for Stroke {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: 1.0,
        }
    }
}

// ============================================================================
// Painter
// ============================================================================

/// The drawing interface the popup paints through.
///
/// Hosts implement this on top of their per-frame draw list. All coordinates
/// are in the same screen space as the cursor position passed to
/// [`AutoCompleter::render`](crate::completer::AutoCompleter::render).
pub trait Painter {
    /// Fill a rectangle with a solid color.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Stroke the outline of a rectangle.
    fn stroke_rect(&mut self, rect: Rect, stroke: &Stroke);

    /// Draw a single line of text with its top-left corner at `origin`.
    fn draw_text(&mut self, text: &str, origin: Point, color: Color);
}

/// A single recorded drawing operation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    FillRect { rect: Rect, color: Color },
    StrokeRect { rect: Rect, stroke: Stroke },
    Text {
        text: String,
        origin: Point,
        color: Color,
    },
}

/// A [`Painter`] that records operations instead of rasterizing them.
///
/// Used by the integration tests and the headless demo to assert on what the
/// popup drew in a frame.
#[derive(Debug, Default)]
pub struct RecordingPainter {
    ops: Vec<DrawOp>,
}

impl RecordingPainter {
    /// Create an empty recording painter.
    pub fn new() -> Self {
        Self::default()
    }

    /// The operations recorded so far, in draw order.
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Discard all recorded operations.
    pub fn clear(&mut self) {
        self.ops.clear();
    }

    /// The text runs drawn this frame, in draw order.
    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Painter for RecordingPainter {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.ops.push(DrawOp::FillRect { rect, color });
    }

    fn stroke_rect(&mut self, rect: Rect, stroke: &Stroke) {
        self.ops.push(DrawOp::StrokeRect {
            rect,
            stroke: *stroke,
        });
    }

    fn draw_text(&mut self, text: &str, origin: Point, color: Color) {
        self.ops.push(DrawOp::Text {
            text: text.to_string(),
            origin,
            color,
        });
    }
}

// ============================================================================
// Popup Style
// ============================================================================

/// Appearance configuration for the autocomplete popup.
#[derive(Debug, Clone, PartialEq)]
pub struct PopupStyle {
    /// Popup background color.
    pub background_color: Color,
    /// Popup border color.
    pub border_color: Color,
    /// Candidate text color.
    pub text_color: Color,
    /// Text color for the selected row.
    pub selected_text_color: Color,
    /// Text color for the "No results" placeholder.
    pub disabled_text_color: Color,
    /// Background color for the selected row.
    pub selection_color: Color,
    /// Background color for the hovered row.
    pub hover_color: Color,
    /// Scroll indicator track color.
    pub scroll_track_color: Color,
    /// Scroll indicator thumb color.
    pub scroll_thumb_color: Color,
    /// Fixed popup width in pixels.
    pub width: f32,
    /// Height of one candidate row in pixels.
    pub row_height: f32,
    /// Maximum number of rows shown before the list scrolls.
    pub max_visible_rows: usize,
    /// Horizontal padding between the popup edge and row text.
    pub text_padding: f32,
}

impl Default for PopupStyle {
    fn default() -> Self {
        Self {
            background_color: Color::WHITE,
            border_color: Color::from_rgb8(180, 180, 180),
            text_color: Color::BLACK,
            selected_text_color: Color::WHITE,
            disabled_text_color: Color::from_rgb8(128, 128, 128),
            selection_color: Color::from_rgba8(51, 153, 255, 200),
            hover_color: Color::from_rgba8(200, 200, 200, 100),
            scroll_track_color: Color::from_rgb8(240, 240, 240),
            scroll_thumb_color: Color::from_rgb8(180, 180, 180),
            width: 200.0,
            row_height: 24.0,
            max_visible_rows: 10,
            text_padding: 4.0,
        }
    }
}

impl PopupStyle {
    /// Create a style with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the fixed popup width.
    pub fn with_width(mut self, width: f32) -> Self {
        self.width = width.max(1.0);
        self
    }

    /// Set the row height.
    pub fn with_row_height(mut self, height: f32) -> Self {
        self.row_height = height.max(1.0);
        self
    }

    /// Set the maximum number of visible rows.
    pub fn with_max_visible_rows(mut self, rows: usize) -> Self {
        self.max_visible_rows = rows.max(1);
        self
    }

    /// Set the background color.
    pub fn with_background_color(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    /// Set the candidate text color.
    pub fn with_text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }

    /// Set the selected-row background color.
    pub fn with_selection_color(mut self, color: Color) -> Self {
        self.selection_color = color;
        self
    }

    /// Set the border color.
    pub fn with_border_color(mut self, color: Color) -> Self {
        self.border_color = color;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_premultiplied_rgba() {
        let color = Color::from_rgba(1.0, 0.5, 0.0, 0.5);
        assert_eq!(color.r, 0.5);
        assert_eq!(color.g, 0.25);
        assert_eq!(color.b, 0.0);
        assert_eq!(color.a, 0.5);
    }

    #[test]
    fn test_recording_painter_captures_ops() {
        let mut painter = RecordingPainter::new();
        painter.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Color::WHITE);
        painter.draw_text("hello", Point::new(2.0, 2.0), Color::BLACK);

        assert_eq!(painter.ops().len(), 2);
        assert_eq!(painter.texts(), vec!["hello"]);

        painter.clear();
        assert!(painter.ops().is_empty());
    }

    #[test]
    fn test_style_builder_clamps() {
        let style = PopupStyle::new()
            .with_width(0.0)
            .with_row_height(0.0)
            .with_max_visible_rows(0);
        assert_eq!(style.width, 1.0);
        assert_eq!(style.row_height, 1.0);
        assert_eq!(style.max_visible_rows, 1);
    }
}
