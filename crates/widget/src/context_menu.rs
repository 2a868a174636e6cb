//! A context menu is a menu in a graphical user interface that appears upon
//! user interaction, such as a right-click mouse operation.
//!
//! # Example
//!
//! ```ignore
//! use popmenu_widget::ContextMenu;
//! use popmenu_widget::core::{EventKind, Settings, menu};
//!
//! let mut context_menu = ContextMenu::new(host, Settings::default());
//!
//! context_menu.add_event_handler(EventKind::ClickButton, |name, row: &usize| {
//!     println!("{name} clicked on row {row}");
//! });
//!
//! context_menu.open(
//!     Some(vec![
//!         menu::button!("rename", "Rename"),
//!         menu::separator!(),
//!         menu::button!("delete", "Delete"),
//!     ]),
//!     42,
//! );
//! ```
use crate::core::placement;
use crate::core::{CursorPosition, Error, EventKind, Host, MenuItem, Settings};

use std::fmt;
use std::rc::Rc;

/// A callback invoked with the name of the clicked item and the payload the
/// menu was opened with.
type Callback<P> = Rc<dyn Fn(&str, &P)>;

/// A listener registered on a [`ContextMenu`].
pub struct Listener<P> {
    kind: EventKind,
    callback: Callback<P>,
}

impl<P> Listener<P> {
    /// Returns the [`EventKind`] the listener observes.
    pub fn kind(&self) -> EventKind {
        self.kind
    }

    /// Invokes the listener.
    pub fn call(&self, name: &str, payload: &P) {
        (self.callback)(name, payload);
    }
}

impl<P> fmt::Debug for Listener<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listener")
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

/// A pending click on an item, ready to be delivered.
///
/// It owns everything dispatching needs, so no borrow of the [`ContextMenu`]
/// is held while listeners run. Listeners are then free to call back into the
/// menu.
#[must_use]
pub struct Activation<P> {
    name: String,
    payload: Rc<P>,
    callbacks: Vec<Callback<P>>,
}

impl<P> Activation<P> {
    /// Returns the name of the clicked item.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the payload the menu was opened with.
    pub fn payload(&self) -> &P {
        &self.payload
    }

    /// Invokes every matching listener, in registration order.
    pub fn dispatch(self) {
        log::debug!(
            "Context menu: dispatching {:?} to {} listener(s)",
            self.name,
            self.callbacks.len()
        );

        for callback in &self.callbacks {
            callback(&self.name, &self.payload);
        }
    }
}

impl<P> fmt::Debug for Activation<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Activation")
            .field("name", &self.name)
            .field("listeners", &self.callbacks.len())
            .finish_non_exhaustive()
    }
}

struct OpenMenu<S, P> {
    surface: S,
    items: Vec<MenuItem>,
    payload: Rc<P>,
}

/// A context menu rendered through a [`Host`].
///
/// At most one menu is open at any time. Opening a menu closes the previous
/// one first.
pub struct ContextMenu<H, P>
where
    H: Host,
{
    host: H,
    settings: Settings,
    cursor: CursorPosition,
    listeners: Vec<Listener<P>>,
    open: Option<OpenMenu<H::Surface, P>>,
    is_disposed: bool,
}

impl<H, P> ContextMenu<H, P>
where
    H: Host,
{
    /// Creates a new [`ContextMenu`] rendering through the given [`Host`].
    pub fn new(host: H, settings: Settings) -> Self {
        Self {
            host,
            settings,
            cursor: CursorPosition::default(),
            listeners: Vec::new(),
            open: None,
            is_disposed: false,
        }
    }

    /// Returns the [`Host`] of the [`ContextMenu`].
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Returns the [`Host`] of the [`ContextMenu`] mutably.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Returns the [`Settings`] of the [`ContextMenu`].
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Returns the last known [`CursorPosition`].
    pub fn cursor(&self) -> CursorPosition {
        self.cursor
    }

    /// Returns `true` if a menu is currently open.
    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    /// Returns `true` if [`dispose`](Self::dispose) has been called.
    pub fn is_disposed(&self) -> bool {
        self.is_disposed
    }

    /// Returns the items of the open menu, if any.
    pub fn items(&self) -> Option<&[MenuItem]> {
        self.open.as_ref().map(|open| open.items.as_slice())
    }

    /// Returns the surface of the open menu, if any.
    pub fn surface(&self) -> Option<&H::Surface> {
        self.open.as_ref().map(|open| &open.surface)
    }

    /// Returns the registered listeners, in registration order.
    pub fn listeners(&self) -> &[Listener<P>] {
        &self.listeners
    }

    /// Registers a listener for the given [`EventKind`].
    ///
    /// Listeners are never deduplicated; registering the same kind twice
    /// invokes both listeners.
    pub fn add_event_handler(&mut self, kind: EventKind, callback: impl Fn(&str, &P) + 'static) {
        self.listeners.push(Listener {
            kind,
            callback: Rc::new(callback),
        });
    }

    /// Opens a menu with the given items at the last known cursor position.
    ///
    /// Any open menu is closed first. `None` only closes. The `payload` is
    /// handed to listeners when an item of this menu is clicked.
    pub fn open(&mut self, items: Option<Vec<MenuItem>>, payload: P) {
        self.close();

        if self.is_disposed {
            log::warn!("Context menu: open called after dispose, ignoring");
            return;
        }

        let Some(items) = items else {
            return;
        };

        match self.show(&items) {
            Ok(surface) => {
                log::debug!("Context menu: opened with {} item(s)", items.len());

                self.open = Some(OpenMenu {
                    surface,
                    items,
                    payload: Rc::new(payload),
                });
            }
            Err(error) => {
                log::warn!("Context menu: failed to open: {error}");
            }
        }
    }

    fn show(&mut self, items: &[MenuItem]) -> Result<H::Surface, Error> {
        let surface = self.host.build(items, &self.settings)?;

        let placement = placement::place(
            self.host.measure(&surface),
            self.cursor,
            self.host.viewport(),
        );

        log::debug!("Context menu: placing at {placement:?}");

        let shown = match self.host.place(&surface, placement) {
            Ok(()) => self.host.reveal(&surface),
            Err(error) => Err(error),
        };

        match shown {
            Ok(()) => Ok(surface),
            Err(error) => {
                self.host.remove(surface);
                Err(error)
            }
        }
    }

    /// Closes the open menu, if any.
    pub fn close(&mut self) {
        if let Some(open) = self.open.take() {
            log::debug!("Context menu: closed");
            self.host.remove(open.surface);
        }
    }

    /// Records a new pointer position.
    pub fn pointer_moved(&mut self, cursor: CursorPosition) {
        if self.is_disposed {
            return;
        }

        log::trace!("Context menu: pointer moved to {cursor:?}");
        self.cursor = cursor;
    }

    /// Handles a pointer press on `target`, closing the open menu if the press
    /// happened outside of it.
    pub fn pointer_pressed(&mut self, target: &H::Target) {
        if self.is_disposed {
            return;
        }

        let Some(open) = &self.open else {
            return;
        };

        if !self
            .host
            .contains(&open.surface, target, self.settings.outside_click)
        {
            log::debug!("Context menu: pressed outside");
            self.close();
        }
    }

    /// Returns the pending [`Activation`] of the item at `index` of the open
    /// menu, if it is a button.
    pub fn activation(&self, index: usize) -> Option<Activation<P>> {
        let open = self.open.as_ref()?;
        let name = open.items.get(index)?.name()?;

        let callbacks = self
            .listeners
            .iter()
            .filter(|listener| listener.kind == EventKind::ClickButton)
            .map(|listener| Rc::clone(&listener.callback))
            .collect();

        Some(Activation {
            name: name.to_owned(),
            payload: Rc::clone(&open.payload),
            callbacks,
        })
    }

    /// Returns the pending [`Activation`] of the item `target` belongs to, if
    /// any.
    pub fn activation_at(&self, target: &H::Target) -> Option<Activation<P>> {
        let open = self.open.as_ref()?;
        let index = self.host.item_at(&open.surface, target)?;

        self.activation(index)
    }

    /// Clicks the item at `index` of the open menu.
    ///
    /// Every [`EventKind::ClickButton`] listener is invoked, then the menu
    /// closes. Indices that are not buttons are ignored.
    pub fn click(&mut self, index: usize) {
        if let Some(activation) = self.activation(index) {
            activation.dispatch();
            self.close();
        }
    }

    /// Closes the open menu and releases the resources of the [`Host`].
    ///
    /// Afterwards, the menu ignores pointer input and refuses to open.
    pub fn dispose(&mut self) {
        if self.is_disposed {
            return;
        }

        self.close();
        self.host.dispose();
        self.is_disposed = true;

        log::debug!("Context menu: disposed");
    }
}

impl<H, P> fmt::Debug for ContextMenu<H, P>
where
    H: Host,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContextMenu")
            .field("settings", &self.settings)
            .field("cursor", &self.cursor)
            .field("listeners", &self.listeners.len())
            .field("is_open", &self.is_open())
            .field("is_disposed", &self.is_disposed)
            .finish_non_exhaustive()
    }
}
