//! popmenu is a small context menu for the Web.
//!
//! A menu opens at the cursor, flips above or to the left of it when it would
//! overflow the viewport, reports clicks on its items to the listeners you
//! register, and closes itself when the user presses anywhere else.
//!
//! # Overview
//!
//! ```ignore
//! use popmenu::{ContextMenu, EventKind, menu};
//!
//! let context_menu = ContextMenu::new()?;
//!
//! context_menu.add_event_handler(EventKind::ClickButton, |name, file: &String| {
//!     log::info!("{name} {file}");
//! });
//!
//! context_menu.open(
//!     Some(vec![
//!         menu::button!("open", "Open"),
//!         menu::button!("rename", "Rename"),
//!         menu::separator!(),
//!         menu::button!("delete", "Delete"),
//!     ]),
//!     String::from("notes.txt"),
//! );
//! ```
//!
//! Menus only exist one at a time: opening a menu closes the previous one.
//!
//! # Crates
//!
//! - [`core`] holds the item model, the placement algorithm and the [`Host`]
//!   trait.
//! - [`widget`] holds the host-agnostic controller.
//! - `web` (only on `wasm32`) binds the controller to the DOM.
#![cfg_attr(docsrs, feature(doc_cfg))]
pub use popmenu_core as core;
pub use popmenu_widget as widget;

#[cfg(target_arch = "wasm32")]
pub use popmenu_web as web;

pub use crate::core::menu;
pub use crate::core::placement;
pub use crate::core::{
    CursorPosition, Error, EventKind, Host, MenuItem, OutsideClick, Placement, Point, Settings,
    Size, Stylesheet,
};

#[cfg(target_arch = "wasm32")]
pub use web::ContextMenu;
