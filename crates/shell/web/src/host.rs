//! Render context menus into the DOM.
use crate::conversion;
use crate::core::style::Stylesheet;
use crate::core::{Error, Host, MenuItem, OutsideClick, Placement, Settings, Size};

use wasm_bindgen::JsCast;
use web_sys::{CssStyleSheet, Document, Element, HtmlElement, HtmlStyleElement, Node};

/// The attribute holding the position of a clickable item in its menu.
pub const INDEX_ATTRIBUTE: &str = "data-popmenu-index";

/// A [`Host`] rendering menus as `<ul>` elements appended to the body of a
/// document.
///
/// It owns a `<style>` element injected into the head of the document when it
/// is created. The element stays in place until the host is disposed.
#[derive(Debug)]
pub struct WebHost {
    document: Document,
    body: HtmlElement,
    style: HtmlStyleElement,
}

impl WebHost {
    /// Creates a [`WebHost`] for the document of the current window.
    pub fn new(settings: &Settings) -> Result<Self, Error> {
        let window = web_sys::window().ok_or(Error::WindowUnavailable)?;
        let document = window.document().ok_or(Error::DocumentUnavailable)?;

        Self::with_document(document, settings)
    }

    /// Creates a [`WebHost`] for the given document.
    pub fn with_document(document: Document, settings: &Settings) -> Result<Self, Error> {
        let head = document.head().ok_or(Error::HeadUnavailable)?;
        let body = document.body().ok_or(Error::BodyUnavailable)?;

        let style: HtmlStyleElement = create(&document, "style")?;
        let _ = style
            .append_child(&document.create_text_node(""))
            .map_err(conversion::error)?;
        let _ = head.append_child(&style).map_err(conversion::error)?;

        let inserted = style
            .sheet()
            .and_then(|sheet| sheet.dyn_into::<CssStyleSheet>().ok())
            .ok_or(Error::StylesheetUnavailable)
            .and_then(|sheet| match &settings.stylesheet {
                Some(stylesheet) => insert_rules(&sheet, stylesheet),
                None => Ok(()),
            });

        if let Err(error) = inserted {
            style.remove();
            return Err(error);
        }

        Ok(Self {
            document,
            body,
            style,
        })
    }

    /// Returns the document the [`WebHost`] renders into.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Returns the `<style>` element owned by the [`WebHost`].
    pub fn style(&self) -> &HtmlStyleElement {
        &self.style
    }
}

impl Host for WebHost {
    type Surface = HtmlElement;
    type Target = Node;

    fn build(&mut self, items: &[MenuItem], settings: &Settings) -> Result<HtmlElement, Error> {
        let menu: HtmlElement = create(&self.document, "ul")?;
        menu.set_class_name(&settings.class);

        // Attached hidden, so it can be measured before it is placed.
        menu.style()
            .set_property("visibility", "hidden")
            .map_err(conversion::error)?;

        for (index, item) in items.iter().enumerate() {
            let element: HtmlElement = match item {
                MenuItem::Separator => create(&self.document, "hr")?,
                MenuItem::Button { text, .. } => {
                    let button: HtmlElement = create(&self.document, "li")?;
                    button.set_class_name(&settings.button_class);
                    button.set_text_content(Some(text.as_str()));
                    button
                        .set_attribute(INDEX_ATTRIBUTE, &index.to_string())
                        .map_err(conversion::error)?;
                    button
                }
            };

            let _ = menu.append_child(&element).map_err(conversion::error)?;
        }

        let _ = self.body.append_child(&menu).map_err(conversion::error)?;

        Ok(menu)
    }

    fn measure(&self, surface: &HtmlElement) -> Size {
        Size::new(surface.client_width() as f32, surface.client_height() as f32)
    }

    fn viewport(&self) -> Size {
        self.document
            .document_element()
            .map(|root| Size::new(root.client_width() as f32, root.client_height() as f32))
            .unwrap_or(Size::ZERO)
    }

    fn place(&mut self, surface: &HtmlElement, placement: Placement) -> Result<(), Error> {
        let style = surface.style();

        for (property, value) in [
            ("max-height", placement.max_height),
            ("top", placement.top),
            ("left", placement.left),
        ] {
            style
                .set_property(property, &format!("{value}px"))
                .map_err(conversion::error)?;
        }

        Ok(())
    }

    fn reveal(&mut self, surface: &HtmlElement) -> Result<(), Error> {
        let _ = surface
            .style()
            .remove_property("visibility")
            .map_err(conversion::error)?;

        Ok(())
    }

    fn remove(&mut self, surface: HtmlElement) {
        surface.remove();
    }

    fn contains(&self, surface: &HtmlElement, target: &Node, policy: OutsideClick) -> bool {
        let surface: &Node = surface;

        match policy {
            OutsideClick::DirectChild => {
                target.is_same_node(Some(surface))
                    || target
                        .parent_node()
                        .is_some_and(|parent| parent.is_same_node(Some(surface)))
            }
            OutsideClick::Descendant => surface.contains(Some(target)),
        }
    }

    fn item_at(&self, surface: &HtmlElement, target: &Node) -> Option<usize> {
        let element = match target.dyn_ref::<Element>() {
            Some(element) => element.clone(),
            None => target.parent_element()?,
        };

        let item = element
            .closest(&format!("[{INDEX_ATTRIBUTE}]"))
            .ok()
            .flatten()?;

        let surface: &Node = surface;
        let node: &Node = &item;

        if !surface.contains(Some(node)) {
            return None;
        }

        item.get_attribute(INDEX_ATTRIBUTE)?.parse().ok()
    }

    fn dispose(&mut self) {
        self.style.remove();
    }
}

fn create<T>(document: &Document, tag: &str) -> Result<T, Error>
where
    T: JsCast,
{
    document
        .create_element(tag)
        .map_err(conversion::error)?
        .dyn_into()
        .map_err(|element| Error::Dom(format!("<{tag}> is not a {}", element.tag_name())))
}

fn insert_rules(sheet: &CssStyleSheet, stylesheet: &Stylesheet) -> Result<(), Error> {
    for rule in &stylesheet.rules {
        let index = sheet.css_rules().map_err(conversion::error)?.length();

        let _ = sheet
            .insert_rule_with_index(&rule.to_string(), index)
            .map_err(conversion::error)?;
    }

    log::debug!(
        "Context menu: inserted {} stylesheet rule(s)",
        stylesheet.rules.len()
    );

    Ok(())
}
