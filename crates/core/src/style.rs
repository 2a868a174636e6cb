//! Default styling of a context menu.
//!
//! Styling is plain CSS: a [`Stylesheet`] is an ordered list of [`Rule`]s that
//! a host inserts into a stylesheet it owns, one rule at a time.

use std::fmt;

/// A single CSS rule.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rule {
    /// The selector the rule applies to.
    pub selector: String,

    /// The `property: value` pairs of the rule, in order.
    pub declarations: Vec<(String, String)>,
}

impl Rule {
    /// Creates an empty [`Rule`] for the given selector.
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            declarations: Vec::new(),
        }
    }

    /// Adds a declaration to the [`Rule`].
    pub fn declare(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.declarations.push((property.into(), value.into()));
        self
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {{", self.selector)?;

        for (property, value) in &self.declarations {
            write!(f, " {property}: {value};")?;
        }

        f.write_str(" }")
    }
}

/// An ordered set of [`Rule`]s.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stylesheet {
    /// The rules, in insertion order.
    pub rules: Vec<Rule>,
}

impl Stylesheet {
    /// Creates an empty [`Stylesheet`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a [`Rule`] to the [`Stylesheet`].
    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    /// The default look of a menu whose surface has the class `class` and
    /// whose clickable items have the class `button_class`.
    ///
    /// ```
    /// use popmenu_core::Stylesheet;
    ///
    /// let stylesheet = Stylesheet::default_for("context-menu", "context-menu-btn");
    ///
    /// assert_eq!(
    ///     stylesheet.rules[2].to_string(),
    ///     ".context-menu .context-menu-btn { cursor: pointer; }"
    /// );
    /// ```
    pub fn default_for(class: &str, button_class: &str) -> Self {
        Self::new()
            .rule(
                Rule::new(format!(".{class}"))
                    .declare("position", "absolute")
                    .declare("display", "initial")
                    .declare("overflow", "auto")
                    .declare("width", "120px")
                    .declare("padding", "5px")
                    .declare("border", "1px solid #f5f5f5")
                    .declare("border-radius", "5px")
                    .declare("background-color", "white")
                    .declare("box-shadow", "0px 0px 19px 0px rgba(0, 0, 0, 0.2)"),
            )
            .rule(
                Rule::new(format!(".{class} li"))
                    .declare("border-radius", "5px")
                    .declare("padding", "5px 2px"),
            )
            .rule(Rule::new(format!(".{class} .{button_class}")).declare("cursor", "pointer"))
            .rule(
                Rule::new(format!(".{class} .{button_class}:hover"))
                    .declare("background-color", "#f0f8ff"),
            )
    }
}
