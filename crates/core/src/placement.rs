//! Position a menu so it stays inside the viewport.
//!
//! A menu opens at the cursor, growing down and to the right. When it would
//! overflow the viewport on an axis, it flips on that axis and grows up or to
//! the left of the cursor instead.
use crate::{CursorPosition, Size};

/// The resolved position of a menu surface, in document pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// The distance from the top of the document to the top of the menu.
    pub top: f32,

    /// The distance from the left of the document to the left of the menu.
    pub left: f32,

    /// The maximum height the menu may take before it scrolls.
    pub max_height: f32,

    /// Whether the menu was moved above the cursor.
    pub flipped_vertically: bool,

    /// Whether the menu was moved to the left of the cursor.
    pub flipped_horizontally: bool,
}

/// Computes the [`Placement`] of a menu of the given `menu` size.
///
/// Overflow is measured in viewport space against the `viewport` client size,
/// while the result is expressed in document space so it can be used with
/// absolute positioning.
pub fn place(menu: Size, cursor: CursorPosition, viewport: Size) -> Placement {
    let (top, max_height, flipped_vertically) = vertical(
        menu.height,
        cursor.document.y,
        cursor.viewport.y,
        viewport.height,
    );

    let (left, flipped_horizontally) = horizontal(
        menu.width,
        cursor.document.x,
        cursor.viewport.x,
        viewport.width,
    );

    Placement {
        top,
        left,
        max_height,
        flipped_vertically,
        flipped_horizontally,
    }
}

/// Returns the top, the max height and whether the menu flipped.
fn vertical(height: f32, document: f32, viewport: f32, max: f32) -> (f32, f32, bool) {
    if height + viewport > max {
        (document - height, document, true)
    } else {
        (document, max - document, false)
    }
}

/// Returns the left and whether the menu flipped.
fn horizontal(width: f32, document: f32, viewport: f32, max: f32) -> (f32, bool) {
    if width + viewport > max {
        (document - width, true)
    } else {
        (document, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Point;

    const VIEWPORT: Size = Size::new(800.0, 600.0);

    fn cursor(document: (f32, f32), viewport: (f32, f32)) -> CursorPosition {
        CursorPosition::new(document.into(), viewport.into())
    }

    #[test]
    fn test_opens_below_cursor() {
        let placement = place(
            Size::new(120.0, 100.0),
            cursor((50.0, 200.0), (50.0, 200.0)),
            VIEWPORT,
        );

        assert!(!placement.flipped_vertically);
        assert_eq!(placement.top, 200.0);
        assert_eq!(placement.max_height, 400.0);
    }

    #[test]
    fn test_flips_above_cursor() {
        let placement = place(
            Size::new(120.0, 100.0),
            cursor((50.0, 550.0), (50.0, 550.0)),
            VIEWPORT,
        );

        assert!(placement.flipped_vertically);
        assert_eq!(placement.top, 450.0);
        assert_eq!(placement.max_height, 550.0);
    }

    #[test]
    fn test_exact_fit_does_not_flip() {
        let placement = place(
            Size::new(120.0, 100.0),
            cursor((680.0, 500.0), (680.0, 500.0)),
            VIEWPORT,
        );

        assert!(!placement.flipped_vertically);
        assert!(!placement.flipped_horizontally);
        assert_eq!(placement.top, 500.0);
        assert_eq!(placement.left, 680.0);
    }

    #[test]
    fn test_opens_right_of_cursor() {
        let placement = place(
            Size::new(120.0, 100.0),
            cursor((300.0, 10.0), (300.0, 10.0)),
            VIEWPORT,
        );

        assert!(!placement.flipped_horizontally);
        assert_eq!(placement.left, 300.0);
    }

    #[test]
    fn test_flips_left_of_cursor() {
        let placement = place(
            Size::new(120.0, 100.0),
            cursor((750.0, 10.0), (750.0, 10.0)),
            VIEWPORT,
        );

        assert!(placement.flipped_horizontally);
        assert_eq!(placement.left, 630.0);
    }

    #[test]
    fn test_scrolled_document() {
        // Overflow is decided in viewport space, position in document space.
        let placement = place(
            Size::new(120.0, 100.0),
            cursor((760.0, 1550.0), (760.0, 550.0)),
            VIEWPORT,
        );

        assert!(placement.flipped_vertically);
        assert!(placement.flipped_horizontally);
        assert_eq!(placement.top, 1450.0);
        assert_eq!(placement.max_height, 1550.0);
        assert_eq!(placement.left, 640.0);
    }

    #[test]
    fn test_scrolled_document_without_flip() {
        let placement = place(
            Size::new(120.0, 100.0),
            cursor((10.0, 1100.0), (10.0, 100.0)),
            VIEWPORT,
        );

        assert!(!placement.flipped_vertically);
        assert_eq!(placement.top, 1100.0);
        assert_eq!(placement.max_height, 600.0 - 1100.0);
        assert_eq!(Point::new(placement.left, placement.top), Point::new(10.0, 1100.0));
    }
}
