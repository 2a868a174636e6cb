//! Handle events of a context menu.
use crate::Error;

use std::fmt;
use std::str::FromStr;

/// The kind of user action a listener observes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum EventKind {
    /// A [`MenuItem::Button`] was clicked.
    ///
    /// [`MenuItem::Button`]: crate::MenuItem::Button
    #[cfg_attr(feature = "serde", serde(rename = "clickButton"))]
    ClickButton,
}

impl EventKind {
    /// Every known [`EventKind`].
    pub const ALL: &'static [Self] = &[Self::ClickButton];

    /// Returns the wire name of the [`EventKind`].
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ClickButton => "clickButton",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| Error::UnknownEventKind(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_click_button() {
        assert_eq!("clickButton".parse::<EventKind>(), Ok(EventKind::ClickButton));
    }

    #[test]
    fn test_display_round_trip() {
        let kind = EventKind::ClickButton;
        assert_eq!(kind.to_string().parse::<EventKind>(), Ok(kind));
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            "click".parse::<EventKind>(),
            Err(Error::UnknownEventKind("click".to_owned()))
        );
    }
}
