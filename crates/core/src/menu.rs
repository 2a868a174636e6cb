//! Context menu model.
//!
//! A context menu is described by an ordered list of [`MenuItem`]s. The list is
//! declarative: a host turns it into a rendered surface on every open and
//! throws the surface away on close.
//!
//! ```
//! use popmenu_core::menu::{self, MenuItem};
//!
//! let items = vec![
//!     menu::button!("cut", "Cut"),
//!     menu::button!("copy", "Copy"),
//!     menu::separator!(),
//!     MenuItem::button("paste", "Paste"),
//! ];
//!
//! assert_eq!(items.iter().filter(|item| item.is_button()).count(), 3);
//! ```
//!
//! With the `serde` feature, items use the same shape as their JSON
//! counterparts: `{ "type": "button", "name": "cut", "text": "Cut" }` and
//! `{ "type": "hr" }`.

/// An entry of a context menu.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "type", rename_all = "lowercase")
)]
pub enum MenuItem {
    /// A horizontal divider between groups of items.
    #[cfg_attr(feature = "serde", serde(rename = "hr"))]
    Separator,

    /// A clickable item.
    Button {
        /// The identifier reported back to listeners when the item is
        /// clicked.
        name: String,

        /// The label displayed to the user.
        text: String,
    },
}

impl MenuItem {
    /// Creates a new [`MenuItem::Button`].
    pub fn button(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self::Button {
            name: name.into(),
            text: text.into(),
        }
    }

    /// Creates a new [`MenuItem::Separator`].
    pub const fn separator() -> Self {
        Self::Separator
    }

    /// Returns the identifier of the item, if it is clickable.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Button { name, .. } => Some(name),
            Self::Separator => None,
        }
    }

    /// Returns the label of the item, if it has one.
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Button { text, .. } => Some(text),
            Self::Separator => None,
        }
    }

    /// Returns `true` if the item reacts to clicks.
    pub fn is_button(&self) -> bool {
        matches!(self, Self::Button { .. })
    }
}

/// Creates a [`MenuItem::Button`](crate::menu::MenuItem::Button).
///
/// ```
/// use popmenu_core::menu;
///
/// let item = menu::button!("open", "Open…");
/// assert_eq!(item.name(), Some("open"));
/// ```
#[macro_export]
macro_rules! menu_button {
    ($name:expr, $text:expr $(,)?) => {
        $crate::menu::MenuItem::button($name, $text)
    };
}

/// Creates a [`MenuItem::Separator`](crate::menu::MenuItem::Separator).
#[macro_export]
macro_rules! menu_separator {
    () => {
        $crate::menu::MenuItem::Separator
    };
}

#[doc(inline)]
pub use crate::menu_button as button;
#[doc(inline)]
pub use crate::menu_separator as separator;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_accessors() {
        let item = MenuItem::button("copy", "Copy");
        assert!(item.is_button());
        assert_eq!(item.name(), Some("copy"));
        assert_eq!(item.text(), Some("Copy"));
    }

    #[test]
    fn test_separator_accessors() {
        let item = MenuItem::separator();
        assert!(!item.is_button());
        assert_eq!(item.name(), None);
        assert_eq!(item.text(), None);
    }

    #[test]
    fn test_macros() {
        assert_eq!(button!("a", "A"), MenuItem::button("a", "A"));
        assert_eq!(separator!(), MenuItem::Separator);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_contract() {
        let items: Vec<MenuItem> = serde_json::from_str(
            r#"[
                { "type": "button", "name": "a", "text": "A" },
                { "type": "hr" },
                { "type": "button", "name": "b", "text": "B" }
            ]"#,
        )
        .unwrap();

        assert_eq!(
            items,
            vec![
                MenuItem::button("a", "A"),
                MenuItem::Separator,
                MenuItem::button("b", "B"),
            ]
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serialize_separator() {
        let json = serde_json::to_string(&MenuItem::Separator).unwrap();
        assert_eq!(json, r#"{"type":"hr"}"#);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_unknown_type_is_rejected() {
        let result = serde_json::from_str::<MenuItem>(r#"{ "type": "submenu" }"#);
        assert!(result.is_err());
    }
}
