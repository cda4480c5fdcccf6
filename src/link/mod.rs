//! # Link Widgets
//!
//! The widget core: clickable file links, icon decorations, the command
//! orchestration control surface, and the uniform list container.
//!
//! ## Components
//!
//! - [`FileLink`]: a clickable reference to a file-system path plus
//!   optional cursor coordinates; activation builds an open command
//!   through an injected [`CommandBuilder`].
//! - [`Icon`] / [`IconSet`]: ordered, positioned decorations attached to
//!   a link.
//! - [`CommandLink`]: play/stop/status/settings control surface with a
//!   run-state machine and spinner animation.
//! - [`FileLinkList`]: insertion-ordered container wrapping items with
//!   toggle/remove controls under strict identity discipline.
//!
//! The host owns the render loop, layout, and input dispatch. Widgets emit
//! [`LinkEvent`]s into an [`EventQueue`] the host drains; the only
//! time-based behavior is the spinner's [`Interval`](timer::Interval),
//! polled from the host's frame loop.

pub mod command_link;
pub mod events;
pub mod file_link;
pub mod icon;
pub mod link_list;
pub mod timer;

pub use command_link::{CommandLink, StatusUpdate, DEFAULT_SPINNER_INTERVAL, SPINNER_FRAMES};
pub use events::{EventQueue, LinkEvent};
pub use file_link::{CommandBuilder, FileLink};
pub use icon::{Icon, IconPosition, IconSet};
pub use link_list::{FileLinkList, LinkItem, ListEntry};

/// Validation errors for structural operations. Soft misses (unknown icon
/// names, absent items, disabled affordances) are reported as
/// `bool`/`Option` returns instead and never reach this type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LinkError {
    #[error("icon name must not be empty")]
    EmptyIconName,
    #[error("list items must carry an explicit, non-empty id")]
    MissingItemId,
    #[error("duplicate item id: {0}")]
    DuplicateItemId(String),
}
