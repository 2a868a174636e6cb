//! A shell for popmenu on top of the DOM.
//!
//! `popmenu_web` binds a [`popmenu_widget::ContextMenu`] to the document of
//! the current window:
//!
//! - a [`WebHost`] renders menus as `<ul>` elements and owns the injected
//!   stylesheet,
//! - document-level observers feed it pointer moves, pointer presses and
//!   clicks on its items.
//!
//! ```ignore
//! use popmenu_web::ContextMenu;
//! use popmenu_web::core::{EventKind, menu};
//!
//! let context_menu = ContextMenu::new()?;
//!
//! context_menu.add_event_handler(EventKind::ClickButton, |name, row: &u32| {
//!     log::info!("{name} on row {row}");
//! });
//!
//! // e.g. from a `contextmenu` listener
//! context_menu.open(
//!     Some(vec![menu::button!("copy", "Copy"), menu::separator!()]),
//!     7,
//! );
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]
pub use popmenu_widget as widget;
pub use popmenu_widget::core;

pub mod conversion;
pub mod host;

mod observer;

pub use host::WebHost;

use crate::core::{CursorPosition, Error, EventKind, MenuItem, Settings};
use crate::observer::Observers;

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

type Controller<P> = popmenu_widget::ContextMenu<WebHost, P>;

struct Shared<P> {
    menu: RefCell<Controller<P>>,
    observers: RefCell<Option<Observers>>,
}

/// A context menu living in the document of the current window.
///
/// Handles are cheap to clone and share the same menu. The document observers
/// are removed when the menu is [disposed](Self::dispose) or when the last
/// handle is dropped.
pub struct ContextMenu<P: 'static> {
    shared: Rc<Shared<P>>,
}

impl<P: 'static> ContextMenu<P> {
    /// Creates a new [`ContextMenu`] with the default [`Settings`].
    pub fn new() -> Result<Self, Error> {
        Self::with_settings(Settings::default())
    }

    /// Creates a new [`ContextMenu`] with the given [`Settings`].
    ///
    /// The stylesheet of the menu is injected and the document observers are
    /// installed right away.
    pub fn with_settings(settings: Settings) -> Result<Self, Error> {
        let host = WebHost::new(&settings)?;
        let document = host.document().clone();

        let shared = Rc::new(Shared {
            menu: RefCell::new(Controller::new(host, settings)),
            observers: RefCell::new(None),
        });

        match Observers::install(&document, &shared) {
            Ok(observers) => {
                *shared.observers.borrow_mut() = Some(observers);
            }
            Err(error) => {
                shared.menu.borrow_mut().dispose();
                return Err(error);
            }
        }

        log::debug!("Context menu: ready");

        Ok(Self { shared })
    }

    /// Opens a menu with the given items at the last known cursor position.
    ///
    /// Any open menu is closed first. `None` only closes.
    pub fn open(&self, items: Option<Vec<MenuItem>>, payload: P) {
        self.update(|menu| menu.open(items, payload));
    }

    /// Closes the open menu, if any.
    pub fn close(&self) {
        self.update(Controller::close);
    }

    /// Returns `true` if a menu is currently open.
    pub fn is_open(&self) -> bool {
        self.shared.menu.borrow().is_open()
    }

    /// Returns the last known [`CursorPosition`].
    pub fn cursor(&self) -> CursorPosition {
        self.shared.menu.borrow().cursor()
    }

    /// Registers a listener for the given [`EventKind`].
    pub fn add_event_handler(&self, kind: EventKind, callback: impl Fn(&str, &P) + 'static) {
        self.update(|menu| menu.add_event_handler(kind, callback));
    }

    /// Returns the number of registered listeners.
    pub fn listeners(&self) -> usize {
        self.shared.menu.borrow().listeners().len()
    }

    /// Closes the open menu, removes the injected stylesheet and stops
    /// observing the document.
    pub fn dispose(&self) {
        self.update(Controller::dispose);

        // Dropping the observers removes their listeners.
        drop(self.shared.observers.borrow_mut().take());
    }

    /// Returns `true` if the menu has been disposed.
    pub fn is_disposed(&self) -> bool {
        self.shared.menu.borrow().is_disposed()
    }

    fn update(&self, f: impl FnOnce(&mut Controller<P>)) {
        match self.shared.menu.try_borrow_mut() {
            Ok(mut menu) => f(&mut *menu),
            Err(_) => {
                log::warn!("Context menu: busy, ignoring re-entrant call");
            }
        }
    }
}

impl<P: 'static> Clone for ContextMenu<P> {
    fn clone(&self) -> Self {
        Self {
            shared: Rc::clone(&self.shared),
        }
    }
}

impl<P: 'static> fmt::Debug for ContextMenu<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ContextMenu")
            .field(&self.shared.menu)
            .finish()
    }
}
