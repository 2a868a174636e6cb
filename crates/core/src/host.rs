//! Render context menus into an environment.
use crate::{Error, MenuItem, OutsideClick, Placement, Settings, Size};

/// An environment able to display a context menu.
///
/// A [`Host`] owns the concrete representation of a menu (its _surface_),
/// while the controller decides when surfaces are built, placed, revealed and
/// removed. The web shell implements it on top of the DOM.
pub trait Host {
    /// A rendered menu.
    type Surface;

    /// Something a pointer can press on.
    type Target: ?Sized;

    /// Builds a surface holding the given items, in order, and attaches it to
    /// the document.
    ///
    /// The surface must be attached so it can be measured, but it must stay
    /// hidden until [`reveal`](Self::reveal) is called.
    fn build(&mut self, items: &[MenuItem], settings: &Settings) -> Result<Self::Surface, Error>;

    /// Returns the rendered size of an attached surface.
    fn measure(&self, surface: &Self::Surface) -> Size;

    /// Returns the client size of the viewport.
    fn viewport(&self) -> Size;

    /// Moves a surface to the given [`Placement`].
    fn place(&mut self, surface: &Self::Surface, placement: Placement) -> Result<(), Error>;

    /// Makes a placed surface visible.
    fn reveal(&mut self, surface: &Self::Surface) -> Result<(), Error>;

    /// Detaches a surface from the document and disposes of it.
    fn remove(&mut self, surface: Self::Surface);

    /// Returns `true` if a press on `target` happened inside `surface`,
    /// according to the [`OutsideClick`] policy.
    fn contains(
        &self,
        surface: &Self::Surface,
        target: &Self::Target,
        policy: OutsideClick,
    ) -> bool;

    /// Returns the index of the item of `surface` that `target` belongs to,
    /// if any.
    ///
    /// Hosts that route clicks themselves can keep the default.
    fn item_at(&self, _surface: &Self::Surface, _target: &Self::Target) -> Option<usize> {
        None
    }

    /// Releases every resource the [`Host`] acquired when it was created.
    ///
    /// It is called once, after the last surface has been removed.
    fn dispose(&mut self) {}
}
