//! Convert DOM values into popmenu values.
use crate::core::{CursorPosition, Error, Point};

use wasm_bindgen::{JsCast, JsValue};

/// Converts the coordinates of a [`web_sys::MouseEvent`] into a
/// [`CursorPosition`].
pub fn cursor(event: &web_sys::MouseEvent) -> CursorPosition {
    CursorPosition::new(
        Point::new(event.page_x() as f32, event.page_y() as f32),
        Point::new(event.client_x() as f32, event.client_y() as f32),
    )
}

/// Returns the [`web_sys::Node`] an event was dispatched to, if any.
pub fn target(event: &web_sys::Event) -> Option<web_sys::Node> {
    event.target()?.dyn_into().ok()
}

/// Converts a thrown [`JsValue`] into an [`Error`].
pub fn error(value: JsValue) -> Error {
    Error::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
}
