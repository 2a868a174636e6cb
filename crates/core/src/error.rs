/// An error that can occur while setting up or driving a context menu.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The global `window` object is not available.
    #[error("the global window is not available")]
    WindowUnavailable,

    /// The window has no document attached.
    #[error("the document is not available")]
    DocumentUnavailable,

    /// The document has no `<head>` to host the stylesheet.
    #[error("the document has no head element")]
    HeadUnavailable,

    /// The document has no `<body>` to host menus.
    #[error("the document has no body element")]
    BodyUnavailable,

    /// The injected `<style>` element did not expose a usable stylesheet.
    #[error("style is not initialized")]
    StylesheetUnavailable,

    /// A call into the document threw.
    #[error("DOM operation failed: {0}")]
    Dom(String),

    /// An event kind name did not match any known [`EventKind`].
    ///
    /// [`EventKind`]: crate::EventKind
    #[error("unknown event kind: {0:?}")]
    UnknownEventKind(String),
}
