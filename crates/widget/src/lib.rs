//! The context menu controller of [popmenu].
//!
//! [`ContextMenu`] holds every decision a context menu makes: when a surface is
//! built and torn down, where it goes, and who hears about clicks. It renders
//! through any [`Host`](crate::core::Host), so it runs the same in a browser and
//! in tests.
//!
//! [popmenu]: https://docs.rs/popmenu
#![cfg_attr(docsrs, feature(doc_cfg))]
pub use popmenu_core as core;

pub mod context_menu;

pub use context_menu::{Activation, ContextMenu, Listener};
