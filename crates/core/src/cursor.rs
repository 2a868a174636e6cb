//! Track the position of the pointer.
use crate::Point;

/// The last known position of the pointer.
///
/// Two coordinate spaces are kept side by side:
///
/// - `document` is relative to the scrollable document and is what a menu is
///   positioned against.
/// - `viewport` is relative to the visible viewport and is what overflow is
///   measured against.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CursorPosition {
    /// The position relative to the document (`pageX`, `pageY`).
    pub document: Point,

    /// The position relative to the viewport (`clientX`, `clientY`).
    pub viewport: Point,
}

impl CursorPosition {
    /// Creates a new [`CursorPosition`] from its document and viewport
    /// coordinates.
    pub const fn new(document: Point, viewport: Point) -> Self {
        Self { document, viewport }
    }

    /// Creates a [`CursorPosition`] for a document that is not scrolled, where
    /// both coordinate spaces coincide.
    pub const fn unscrolled(position: Point) -> Self {
        Self::new(position, position)
    }
}
