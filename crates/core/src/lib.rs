//! The core library of [popmenu].
//!
//! This library holds the basic types that the rest of the crates share: the
//! [`MenuItem`] model, cursor tracking, the viewport [`placement`] algorithm,
//! the default [`Stylesheet`], and the [`Host`] trait that a shell implements
//! to render a menu into a concrete environment.
//!
//! It is host-agnostic on purpose, so nothing in here touches the DOM.
//!
//! [popmenu]: https://docs.rs/popmenu
#![cfg_attr(docsrs, feature(doc_cfg))]
pub mod cursor;
pub mod event;
pub mod host;
pub mod menu;
pub mod placement;
pub mod settings;
pub mod style;

mod error;
mod point;
mod size;

pub use cursor::CursorPosition;
pub use error::Error;
pub use event::EventKind;
pub use host::Host;
pub use menu::MenuItem;
pub use placement::Placement;
pub use point::Point;
pub use settings::{OutsideClick, Settings};
pub use size::Size;
pub use style::{Rule, Stylesheet};
