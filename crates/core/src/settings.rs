//! Configure a context menu.
use crate::Stylesheet;

/// The default class of a menu surface.
pub const DEFAULT_CLASS: &str = "context-menu";

/// The default class of a clickable item.
pub const DEFAULT_BUTTON_CLASS: &str = "context-menu-btn";

/// Decides which pointer presses count as "inside" an open menu.
///
/// A press outside an open menu closes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OutsideClick {
    /// Only the menu surface and its direct children are inside.
    ///
    /// Presses on anything nested deeper in an item close the menu.
    #[default]
    DirectChild,

    /// The menu surface and everything nested in it are inside.
    Descendant,
}

/// The settings of a context menu.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Settings {
    /// The class given to the menu surface.
    ///
    /// By default, it is `context-menu`.
    pub class: String,

    /// The class given to clickable items.
    ///
    /// By default, it is `context-menu-btn`.
    pub button_class: String,

    /// The rules inserted into the stylesheet owned by the menu.
    ///
    /// By default, it is [`Stylesheet::default_for`] the default classes.
    /// `None` leaves the stylesheet empty so the page can style the menu.
    pub stylesheet: Option<Stylesheet>,

    /// Which presses keep an open menu open.
    ///
    /// By default, it is [`OutsideClick::DirectChild`].
    pub outside_click: OutsideClick,
}

impl Settings {
    /// Sets the classes of the surface and its clickable items.
    ///
    /// The default stylesheet, if still in place, follows the new classes.
    pub fn classes(mut self, class: impl Into<String>, button_class: impl Into<String>) -> Self {
        let follows_defaults = self.stylesheet.as_ref()
            == Some(&Stylesheet::default_for(&self.class, &self.button_class));

        self.class = class.into();
        self.button_class = button_class.into();

        if follows_defaults {
            self.stylesheet = Some(Stylesheet::default_for(&self.class, &self.button_class));
        }

        self
    }

    /// Sets the [`Stylesheet`] of the menu.
    pub fn stylesheet(mut self, stylesheet: impl Into<Option<Stylesheet>>) -> Self {
        self.stylesheet = stylesheet.into();
        self
    }

    /// Sets the [`OutsideClick`] policy of the menu.
    pub fn outside_click(mut self, outside_click: OutsideClick) -> Self {
        self.outside_click = outside_click;
        self
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            class: DEFAULT_CLASS.to_owned(),
            button_class: DEFAULT_BUTTON_CLASS.to_owned(),
            stylesheet: Some(Stylesheet::default_for(DEFAULT_CLASS, DEFAULT_BUTTON_CLASS)),
            outside_click: OutsideClick::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();

        assert_eq!(settings.class, "context-menu");
        assert_eq!(settings.button_class, "context-menu-btn");
        assert_eq!(settings.outside_click, OutsideClick::DirectChild);
        assert_eq!(settings.stylesheet.map(|s| s.rules.len()), Some(4));
    }

    #[test]
    fn test_classes_update_default_stylesheet() {
        let settings = Settings::default().classes("menu", "item");

        assert_eq!(
            settings.stylesheet,
            Some(Stylesheet::default_for("menu", "item"))
        );
    }

    #[test]
    fn test_classes_keep_custom_stylesheet() {
        let custom = Stylesheet::new();
        let settings = Settings::default()
            .stylesheet(custom.clone())
            .classes("menu", "item");

        assert_eq!(settings.stylesheet, Some(custom));
    }

    #[test]
    fn test_no_stylesheet() {
        let settings = Settings::default().stylesheet(None);
        assert_eq!(settings.stylesheet, None);
    }
}
