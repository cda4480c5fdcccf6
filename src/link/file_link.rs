//! Clickable file reference with optional cursor coordinates and icon
//! decorations.

use crate::link::events::{EventQueue, LinkEvent};
use crate::link::icon::{Icon, IconSet};
use crate::util::resolve_path;
use crossterm::event::{KeyCode, KeyEvent};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Host-supplied collaborator that turns `(path, line, column)` into the
/// argv of an external open/editor invocation. The core only builds the
/// vector; execution is entirely the host's job.
///
/// Builders are explicit per-constructor values; there is no process-wide
/// default to mutate.
#[derive(Clone)]
pub struct CommandBuilder(Arc<dyn Fn(&Path, Option<u32>, Option<u32>) -> Vec<String> + Send + Sync>);

impl CommandBuilder {
    pub fn new(
        builder: impl Fn(&Path, Option<u32>, Option<u32>) -> Vec<String> + Send + Sync + 'static,
    ) -> Self {
        Self(Arc::new(builder))
    }

    pub fn build(&self, path: &Path, line: Option<u32>, column: Option<u32>) -> Vec<String> {
        (self.0)(path, line, column)
    }
}

impl fmt::Debug for CommandBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CommandBuilder(..)")
    }
}

/// The minimal clickable file reference.
///
/// The path is resolved exactly once, at construction, and has no setter.
/// Line and column are 1-based and independent; a column without a line is
/// allowed and meaningful only to builders that use it.
#[derive(Debug, Clone)]
pub struct FileLink {
    path: PathBuf,
    line: Option<u32>,
    column: Option<u32>,
    display_name: String,
    id: Option<String>,
    command_builder: Option<CommandBuilder>,
    icons: IconSet,
}

impl FileLink {
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = resolve_path(path);
        let display_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self {
            path,
            line: None,
            column: None,
            display_name,
            id: None,
            command_builder: None,
            icons: IconSet::new(),
        }
    }

    pub fn with_line(mut self, line: u32) -> Self {
        self.line = Some(line);
        self
    }

    pub fn with_column(mut self, column: u32) -> Self {
        self.column = Some(column);
        self
    }

    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = name.into();
        self
    }

    /// Explicit identity for insertion into a [`FileLinkList`]. Lists refuse
    /// items without one.
    ///
    /// [`FileLinkList`]: crate::link::FileLinkList
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_command_builder(mut self, builder: CommandBuilder) -> Self {
        self.command_builder = Some(builder);
        self
    }

    pub fn with_icon(mut self, icon: Icon) -> Self {
        self.icons.add(icon);
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn line(&self) -> Option<u32> {
        self.line
    }

    pub fn column(&self) -> Option<u32> {
        self.column
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn icons(&self) -> &IconSet {
        &self.icons
    }

    // ------------------------------------------------------------------ //
    // Icon mutators
    // ------------------------------------------------------------------ //

    pub fn add_icon(&mut self, icon: Icon) {
        self.icons.add(icon);
    }

    pub fn remove_icon(&mut self, name: &str) -> bool {
        self.icons.remove(name)
    }

    pub fn set_icon_visible(&mut self, name: &str, visible: bool) -> bool {
        self.icons.set_visible(name, visible)
    }

    pub fn update_icon(&mut self, name: &str, glyph: Option<&str>, tooltip: Option<&str>) -> bool {
        self.icons.update(name, glyph, tooltip)
    }

    /// Activate a clickable, visible icon and emit
    /// [`LinkEvent::IconActivated`]. Returns `false` when the activation was
    /// a no-op (unknown, hidden, or not clickable).
    pub fn activate_icon(&self, name: &str, events: &mut EventQueue) -> bool {
        match self.icons.activate(name) {
            Some(glyph) => {
                tracing::trace!(path = %self.path.display(), icon = name, "icon activated");
                events.push(LinkEvent::IconActivated {
                    path: self.path.clone(),
                    name: name.to_string(),
                    glyph,
                });
                true
            }
            None => false,
        }
    }

    // ------------------------------------------------------------------ //
    // Activation
    // ------------------------------------------------------------------ //

    /// Activate the link: build the open command through the injected
    /// builder and emit [`LinkEvent::OpenRequested`]. Without a builder the
    /// activation is a no-op and returns `false`.
    pub fn activate(&self, events: &mut EventQueue) -> bool {
        let Some(builder) = &self.command_builder else {
            return false;
        };
        let argv = builder.build(&self.path, self.line, self.column);
        tracing::debug!(path = %self.path.display(), ?argv, "open requested");
        events.push(LinkEvent::OpenRequested {
            path: self.path.clone(),
            line: self.line,
            column: self.column,
            argv,
        });
        true
    }

    /// Handle a key event scoped to this link: Enter activates the link,
    /// any character bound as an icon activation key activates that icon.
    /// Returns whether the key was consumed.
    pub fn handle_key(&self, key: KeyEvent, events: &mut EventQueue) -> bool {
        match key.code {
            KeyCode::Enter => self.activate(events),
            KeyCode::Char(c) => match self.icons.find_by_key(c) {
                Some(name) => self.activate_icon(name, events),
                None => false,
            },
            _ => false,
        }
    }
}
