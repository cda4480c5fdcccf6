//! filelink: interactive terminal-UI widgets for file links, icon
//! decorations, command orchestration, and uniform lists.
//!
//! The widgets are composed inside a host terminal application: the host
//! owns the render loop, layout, and input dispatch, while the widgets
//! describe their own structure, expose mutators, and emit
//! [`LinkEvent`]s into an [`EventQueue`] the host drains each frame.

pub mod link;
pub mod logging;
pub mod ui;
pub mod util;

pub use link::{
    CommandBuilder, CommandLink, EventQueue, FileLink, FileLinkList, Icon, IconPosition, IconSet,
    LinkError, LinkEvent, LinkItem, StatusUpdate, DEFAULT_SPINNER_INTERVAL, SPINNER_FRAMES,
};
pub use logging::{disable_logging, setup_logging};
pub use util::{format_duration, format_time_ago, sanitize_id};
