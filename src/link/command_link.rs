//! Command orchestration widget: status display, play/stop toggle, optional
//! settings affordance, and an optional embedded output link.
//!
//! Layout described to the host: `[status/spinner] [▶/⏹] name [⚙?]`.
//!
//! The widget owns no execution engine. `request_run`/`request_stop` emit
//! one-shot notifications and leave state untouched; the host reports
//! reality back through [`CommandLink::set_status`], the single mutator
//! that changes displayed state. While running with the spinner active, an
//! externally set status glyph is buffered and shown the instant running
//! ends.

use crate::link::events::{EventQueue, LinkEvent};
use crate::link::file_link::{CommandBuilder, FileLink};
use crate::link::timer::Interval;
use crate::util::{resolve_path, sanitize_id};
use crossterm::event::{KeyCode, KeyEvent};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Spinner frames cycled while a command runs without an explicit icon.
pub const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Default spinner cadence; overridable per widget and via
/// [`Config`](crate::ui::config::Config).
pub const DEFAULT_SPINNER_INTERVAL: Duration = Duration::from_millis(100);

const PLAY_GLYPH: &str = "▶";
const STOP_GLYPH: &str = "⏹";
const SETTINGS_GLYPH: &str = "⚙";

/// Partial status update applied by [`CommandLink::set_status`]. Absent
/// fields leave the corresponding state unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatusUpdate<'a> {
    pub icon: Option<&'a str>,
    pub running: Option<bool>,
    pub tooltip: Option<&'a str>,
}

#[derive(Debug, Clone)]
struct Spinner {
    interval: Interval,
    frame_index: usize,
}

/// The play/stop/status/settings control surface for one named command.
#[derive(Debug, Clone)]
pub struct CommandLink {
    name: String,
    id: String,
    output_path: Option<PathBuf>,
    output_link: Option<FileLink>,
    command_builder: Option<CommandBuilder>,
    status_glyph: String,
    status_tooltip: Option<String>,
    name_tooltip: Option<String>,
    running: bool,
    show_settings: bool,
    spinner: Option<Spinner>,
    spinner_interval: Duration,
}

impl CommandLink {
    /// Create an idle command link. The widget ID is derived from the name
    /// via [`sanitize_id`] unless overridden with [`CommandLink::with_id`].
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let id = sanitize_id(&name);
        Self {
            name,
            id,
            output_path: None,
            output_link: None,
            command_builder: None,
            status_glyph: "❓".to_string(),
            status_tooltip: None,
            name_tooltip: None,
            running: false,
            show_settings: false,
            spinner: None,
            spinner_interval: DEFAULT_SPINNER_INTERVAL,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_output_path(mut self, path: impl AsRef<Path>) -> Self {
        self.set_output_path(Some(path));
        self
    }

    pub fn with_command_builder(mut self, builder: CommandBuilder) -> Self {
        self.command_builder = Some(builder);
        self
    }

    pub fn with_initial_status(mut self, glyph: impl Into<String>) -> Self {
        self.status_glyph = glyph.into();
        self
    }

    pub fn with_status_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.status_tooltip = Some(tooltip.into());
        self
    }

    pub fn with_settings(mut self) -> Self {
        self.show_settings = true;
        self
    }

    pub fn with_spinner_interval(mut self, interval: Duration) -> Self {
        self.spinner_interval = interval;
        self
    }

    // ------------------------------------------------------------------ //
    // Queries
    // ------------------------------------------------------------------ //

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn output_path(&self) -> Option<&Path> {
        self.output_path.as_deref()
    }

    /// The embedded output-inspection link, present iff an output path is
    /// set.
    pub fn output_link(&self) -> Option<&FileLink> {
        self.output_link.as_ref()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn show_settings(&self) -> bool {
        self.show_settings
    }

    /// The underlying status glyph attribute. Spinner frames never
    /// overwrite it.
    pub fn status_glyph(&self) -> &str {
        &self.status_glyph
    }

    pub fn status_tooltip(&self) -> Option<&str> {
        self.status_tooltip.as_deref()
    }

    pub fn name_tooltip(&self) -> Option<&str> {
        self.name_tooltip.as_deref()
    }

    /// Tooltip for the command-name display. Survives the label ↔ output
    /// link swap in both directions.
    pub fn set_name_tooltip(&mut self, tooltip: Option<&str>) {
        self.name_tooltip = tooltip.map(ToString::to_string);
    }

    /// What the status cell currently shows: a spinner frame while the
    /// spinner is active, the status glyph otherwise.
    pub fn display_glyph(&self) -> &str {
        match &self.spinner {
            Some(spinner) if self.running => SPINNER_FRAMES[spinner.frame_index],
            _ => &self.status_glyph,
        }
    }

    /// The play/stop control mirrors the run state: play while idle, stop
    /// while running.
    pub fn play_stop_glyph(&self) -> &'static str {
        if self.running {
            STOP_GLYPH
        } else {
            PLAY_GLYPH
        }
    }

    pub fn settings_glyph(&self) -> &'static str {
        SETTINGS_GLYPH
    }

    // ------------------------------------------------------------------ //
    // Host-facing mutators
    // ------------------------------------------------------------------ //

    /// Apply a status update. This is the only operation that changes
    /// displayed run state.
    ///
    /// - `running=Some(true)` without an icon starts the spinner; the
    ///   status glyph is untouched by frames and restored verbatim when
    ///   running ends.
    /// - `running=Some(true)` with an icon shows the icon statically; no
    ///   spinner tick is scheduled, but the widget is still running for
    ///   play/stop purposes.
    /// - `running=Some(false)` cancels the spinner (idempotent) and shows
    ///   the (possibly just set) status glyph.
    /// - `tooltip` applies immediately regardless of run state.
    pub fn set_status(&mut self, update: StatusUpdate<'_>, now: Instant) {
        if let Some(icon) = update.icon {
            self.status_glyph = icon.to_string();
        }
        if let Some(tooltip) = update.tooltip {
            self.status_tooltip = Some(tooltip.to_string());
        }
        if let Some(running) = update.running {
            let was_running = self.running;
            self.running = running;
            if running && !was_running {
                if update.icon.is_none() {
                    self.spinner = Some(Spinner {
                        interval: Interval::new(self.spinner_interval, now),
                        frame_index: 0,
                    });
                }
                tracing::debug!(command = %self.name, "entered running state");
            } else if !running && was_running {
                if let Some(mut spinner) = self.spinner.take() {
                    spinner.interval.cancel();
                }
                tracing::debug!(command = %self.name, glyph = %self.status_glyph, "left running state");
            }
        }
    }

    /// Advance the spinner animation. Called by the host's event loop each
    /// frame; a no-op unless a spinner is active and due.
    pub fn on_tick(&mut self, now: Instant) {
        if let Some(spinner) = &mut self.spinner {
            let ticks = spinner.interval.poll(now);
            if ticks > 0 {
                spinner.frame_index = (spinner.frame_index + ticks as usize) % SPINNER_FRAMES.len();
            }
        }
    }

    /// Set or clear the output file path. Setting it replaces the plain
    /// name label with an embedded [`FileLink`] wired to the path; clearing
    /// it swaps the label back. The name tooltip survives both directions.
    pub fn set_output_path(&mut self, path: Option<impl AsRef<Path>>) {
        match path {
            Some(path) => {
                let resolved = resolve_path(path);
                let mut link = FileLink::new(&resolved).with_display_name(self.name.clone());
                if let Some(builder) = &self.command_builder {
                    link = link.with_command_builder(builder.clone());
                }
                self.output_path = Some(resolved);
                self.output_link = Some(link);
            }
            None => {
                self.output_path = None;
                self.output_link = None;
            }
        }
    }

    // ------------------------------------------------------------------ //
    // Input-driven operations
    // ------------------------------------------------------------------ //

    /// Request a run. Valid only while idle; emits
    /// [`LinkEvent::RunRequested`] and does not change state; the host
    /// decides whether work actually starts.
    pub fn request_run(&self, events: &mut EventQueue) -> bool {
        if self.running {
            return false;
        }
        events.push(LinkEvent::RunRequested {
            name: self.name.clone(),
            output_path: self.output_path.clone(),
        });
        true
    }

    /// Request a stop. Valid only while running; emits
    /// [`LinkEvent::StopRequested`] and does not change state.
    pub fn request_stop(&self, events: &mut EventQueue) -> bool {
        if !self.running {
            return false;
        }
        events.push(LinkEvent::StopRequested {
            name: self.name.clone(),
            output_path: self.output_path.clone(),
        });
        true
    }

    /// Activate the play/stop control: issues exactly one of
    /// `request_run` / `request_stop` depending on run state.
    pub fn toggle_play_stop(&self, events: &mut EventQueue) {
        if self.running {
            self.request_stop(events);
        } else {
            self.request_run(events);
        }
    }

    /// Request the settings surface. A no-op while settings are disabled.
    pub fn request_settings(&self, events: &mut EventQueue) -> bool {
        if !self.show_settings {
            return false;
        }
        events.push(LinkEvent::SettingsRequested {
            name: self.name.clone(),
        });
        true
    }

    /// Activate the output link, if one is set: the embedded link builds
    /// its open command (emitting [`LinkEvent::OpenRequested`] when a
    /// builder is present), then [`LinkEvent::OutputActivated`] is emitted.
    pub fn open_output(&self, events: &mut EventQueue) -> bool {
        let (Some(link), Some(path)) = (&self.output_link, &self.output_path) else {
            return false;
        };
        link.activate(events);
        events.push(LinkEvent::OutputActivated {
            output_path: path.clone(),
        });
        true
    }

    /// Key bindings scoped to this widget: `o` opens the output, `space` /
    /// `p` toggles play/stop, `s` requests settings when enabled. Returns
    /// whether the key was consumed.
    pub fn handle_key(&self, key: KeyEvent, events: &mut EventQueue) -> bool {
        match key.code {
            KeyCode::Char('o') => self.open_output(events),
            KeyCode::Char(' ') | KeyCode::Char('p') => {
                self.toggle_play_stop(events);
                true
            }
            KeyCode::Char('s') => self.request_settings(events),
            _ => false,
        }
    }
}
