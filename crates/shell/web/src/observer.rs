//! Observe the document on behalf of a context menu.
use crate::conversion;
use crate::core::Error;
use crate::{Controller, Shared};

use std::rc::{Rc, Weak};

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, MouseEvent};

type Callback = Closure<dyn FnMut(MouseEvent)>;

/// The listeners a context menu keeps on its document.
///
/// They are removed from the document when dropped.
pub(crate) struct Observers {
    document: Document,
    listeners: Vec<(&'static str, Callback)>,
}

impl Observers {
    /// Starts observing pointer moves, pointer presses and clicks on the
    /// given document.
    pub(crate) fn install<P: 'static>(
        document: &Document,
        shared: &Rc<Shared<P>>,
    ) -> Result<Self, Error> {
        let mut observers = Self {
            document: document.clone(),
            listeners: Vec::with_capacity(3),
        };

        observers.listen(
            "mousemove",
            observe(shared, |menu, event| {
                menu.pointer_moved(conversion::cursor(&event));
            }),
        )?;

        observers.listen(
            "mousedown",
            observe(shared, |menu, event| {
                if let Some(target) = conversion::target(&event) {
                    menu.pointer_pressed(&target);
                }
            }),
        )?;

        observers.listen("click", activate(shared))?;

        Ok(observers)
    }

    fn listen(&mut self, event: &'static str, callback: Callback) -> Result<(), Error> {
        self.document
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .map_err(conversion::error)?;

        self.listeners.push((event, callback));

        Ok(())
    }
}

impl Drop for Observers {
    fn drop(&mut self) {
        for (event, callback) in &self.listeners {
            if let Err(error) = self
                .document
                .remove_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            {
                log::warn!(
                    "Context menu: failed to stop observing {event}: {}",
                    conversion::error(error)
                );
            }
        }

        log::debug!(
            "Context menu: stopped observing {} event(s)",
            self.listeners.len()
        );
    }
}

/// Forwards events to the menu while it is alive and not busy.
fn observe<P: 'static>(
    shared: &Rc<Shared<P>>,
    mut f: impl FnMut(&mut Controller<P>, MouseEvent) + 'static,
) -> Callback {
    let shared = Rc::downgrade(shared);

    Closure::new(move |event: MouseEvent| {
        let Some(shared) = shared.upgrade() else {
            return;
        };

        let Ok(mut menu) = shared.menu.try_borrow_mut() else {
            log::trace!("Context menu: busy, dropping {}", event.type_());
            return;
        };

        f(&mut *menu, event);
    })
}

/// Dispatches clicks on menu items.
///
/// No borrow of the menu is held while listeners run, so they can open
/// another menu or dispose of this one.
fn activate<P: 'static>(shared: &Rc<Shared<P>>) -> Callback {
    let shared: Weak<Shared<P>> = Rc::downgrade(shared);

    Closure::new(move |event: MouseEvent| {
        let Some(shared) = shared.upgrade() else {
            return;
        };

        let Some(target) = conversion::target(&event) else {
            return;
        };

        let activation = match shared.menu.try_borrow() {
            Ok(menu) => menu.activation_at(&target),
            Err(_) => return,
        };

        if let Some(activation) = activation {
            activation.dispatch();

            if let Ok(mut menu) = shared.menu.try_borrow_mut() {
                menu.close();
            }
        }
    })
}
