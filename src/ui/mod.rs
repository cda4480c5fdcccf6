//! # UI Module
//!
//! Presentation glue for the link widgets: semantic color themes, ratatui
//! view adapters, and persisted appearance configuration.
//!
//! The views render only each widget's own structure into the area the
//! host hands them:
//!
//! ```text
//! FileLinkView      ✓ main.rs 🔒            (icons-before, name, icons-after)
//! CommandLinkView   ⠙ ⏹ tests ⚙            (status, play/stop, name, settings)
//! FileLinkListView  ☐ ⠙ ⏹ tests ⚙ ×        (one row per item, toggle/remove)
//! ```
//!
//! Layout, focus, and input dispatch stay with the host.

pub mod config;
pub mod render;
pub mod theme;

pub use config::Config;
pub use render::{CommandLinkView, FileLinkListView, FileLinkView};
pub use theme::Theme;
