//! Typed notifications emitted by the widgets.
//!
//! Widgets never call back into the host. Every user-input reaction and
//! structural change is pushed synchronously, in invocation order, into an
//! [`EventQueue`] that the host drains between frames of its event loop.

use std::collections::VecDeque;
use std::path::PathBuf;

/// A notification emitted by a widget for the host to act on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkEvent {
    /// A file link was activated; `argv` is the command built by the injected
    /// [`CommandBuilder`](crate::link::CommandBuilder). The host executes it
    /// (or ignores it); the core never spawns processes.
    OpenRequested {
        path: PathBuf,
        line: Option<u32>,
        column: Option<u32>,
        argv: Vec<String>,
    },
    /// A clickable, visible icon was activated. Carries the glyph displayed
    /// at the time of the click.
    IconActivated {
        path: PathBuf,
        name: String,
        glyph: String,
    },
    /// An item's toggle state was set (possibly to the value it already had).
    ToggleChanged { identity: String, is_toggled: bool },
    /// An item was actually removed from its list.
    ItemRemoved { identity: String },
    /// The play affordance was activated while idle. State is unchanged; the
    /// host decides whether to start work and report it via `set_status`.
    RunRequested {
        name: String,
        output_path: Option<PathBuf>,
    },
    /// The stop affordance was activated while running.
    StopRequested {
        name: String,
        output_path: Option<PathBuf>,
    },
    /// The settings affordance was activated.
    SettingsRequested { name: String },
    /// A command's output link was activated.
    OutputActivated { output_path: PathBuf },
}

/// FIFO queue of [`LinkEvent`]s.
///
/// Mutators that emit notifications take `&mut EventQueue`; the host owns
/// one queue, threads it through input dispatch, and drains it once per
/// frame. Emission order is exactly invocation order.
#[derive(Debug, Default)]
pub struct EventQueue {
    events: VecDeque<LinkEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: LinkEvent) {
        self.events.push_back(event);
    }

    /// Remove and return all queued events, oldest first.
    pub fn drain(&mut self) -> Vec<LinkEvent> {
        self.events.drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
