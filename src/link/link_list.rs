//! Uniform list container for link widgets.
//!
//! Wraps heterogeneous children ([`FileLink`] or [`CommandLink`]) with
//! toggle/remove affordances and enforces strict identity discipline:
//! every inserted item must carry an explicit, non-empty, unique identity.
//! Identities are compared case-sensitively, exactly as given; hosts use
//! them as correlation keys for events.

use crate::link::command_link::CommandLink;
use crate::link::events::{EventQueue, LinkEvent};
use crate::link::file_link::FileLink;
use crate::link::LinkError;
use std::collections::HashSet;

/// A widget that can be wrapped by a [`FileLinkList`].
#[derive(Debug, Clone)]
pub enum LinkItem {
    File(FileLink),
    Command(CommandLink),
}

impl LinkItem {
    /// The item's identity, if it carries one. `FileLink`s need an explicit
    /// `with_id`; `CommandLink`s always have one (derived from the command
    /// name).
    pub fn identity(&self) -> Option<&str> {
        match self {
            LinkItem::File(link) => link.id(),
            LinkItem::Command(link) => Some(link.id()),
        }
    }

    pub fn as_file(&self) -> Option<&FileLink> {
        match self {
            LinkItem::File(link) => Some(link),
            LinkItem::Command(_) => None,
        }
    }

    pub fn as_command(&self) -> Option<&CommandLink> {
        match self {
            LinkItem::Command(link) => Some(link),
            LinkItem::File(_) => None,
        }
    }

    pub fn as_command_mut(&mut self) -> Option<&mut CommandLink> {
        match self {
            LinkItem::Command(link) => Some(link),
            LinkItem::File(_) => None,
        }
    }
}

impl From<FileLink> for LinkItem {
    fn from(link: FileLink) -> Self {
        LinkItem::File(link)
    }
}

impl From<CommandLink> for LinkItem {
    fn from(link: CommandLink) -> Self {
        LinkItem::Command(link)
    }
}

/// One wrapped item: the widget plus the wrapper-owned toggle state.
#[derive(Debug)]
pub struct ListEntry {
    identity: String,
    item: LinkItem,
    toggled: bool,
}

impl ListEntry {
    pub fn identity(&self) -> &str {
        &self.identity
    }

    pub fn item(&self) -> &LinkItem {
        &self.item
    }

    pub fn item_mut(&mut self) -> &mut LinkItem {
        &mut self.item
    }

    pub fn is_toggled(&self) -> bool {
        self.toggled
    }
}

/// Insertion-ordered container of identity-checked link widgets with
/// uniform toggle/remove controls and batch operations.
#[derive(Debug, Default)]
pub struct FileLinkList {
    entries: Vec<ListEntry>,
    ids: HashSet<String>,
    show_toggles: bool,
    show_remove: bool,
}

impl FileLinkList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show toggle controls for every item.
    pub fn with_toggles(mut self) -> Self {
        self.show_toggles = true;
        self
    }

    /// Show remove controls for every item.
    pub fn with_remove(mut self) -> Self {
        self.show_remove = true;
        self
    }

    pub fn show_toggles(&self) -> bool {
        self.show_toggles
    }

    pub fn show_remove(&self) -> bool {
        self.show_remove
    }

    /// Add an item with the given initial toggle state.
    ///
    /// Fails atomically, leaving the container unchanged, when the item
    /// carries no identity, an empty identity, or one already present.
    pub fn add_item(&mut self, item: impl Into<LinkItem>, toggled: bool) -> Result<(), LinkError> {
        let item = item.into();
        let identity = match item.identity() {
            Some(id) if !id.is_empty() => id.to_string(),
            _ => return Err(LinkError::MissingItemId),
        };
        if self.ids.contains(&identity) {
            return Err(LinkError::DuplicateItemId(identity));
        }
        tracing::debug!(identity = %identity, "item added to list");
        self.ids.insert(identity.clone());
        self.entries.push(ListEntry {
            identity,
            item,
            toggled,
        });
        Ok(())
    }

    /// Remove an item by identity, returning the detached widget so the
    /// host decides whether to destroy it. Soft miss: removing an absent
    /// identity returns `None` and emits nothing.
    pub fn remove_item(&mut self, identity: &str, events: &mut EventQueue) -> Option<LinkItem> {
        let index = self.entries.iter().position(|e| e.identity == identity)?;
        let entry = self.entries.remove(index);
        self.ids.remove(identity);
        tracing::debug!(identity = %identity, "item removed from list");
        events.push(LinkEvent::ItemRemoved {
            identity: entry.identity.clone(),
        });
        Some(entry.item)
    }

    /// Remove every item. A bulk operation: no per-item notifications are
    /// emitted. Returns the detached widgets in display order.
    pub fn clear(&mut self) -> Vec<LinkItem> {
        self.ids.clear();
        self.entries.drain(..).map(|e| e.item).collect()
    }

    /// Set every item's toggle state to `value`, emitting one
    /// [`LinkEvent::ToggleChanged`] per item in insertion order, including
    /// items whose state did not change, since hosts refresh aggregate
    /// counts from the notifications. A no-op when toggles are disabled.
    pub fn toggle_all(&mut self, value: bool, events: &mut EventQueue) {
        if !self.show_toggles {
            return;
        }
        for entry in &mut self.entries {
            entry.toggled = value;
            events.push(LinkEvent::ToggleChanged {
                identity: entry.identity.clone(),
                is_toggled: value,
            });
        }
    }

    /// Set one item's toggle state, with the same observability as
    /// [`FileLinkList::toggle_all`]. Soft miss on unknown identity; a no-op
    /// when toggles are disabled.
    pub fn set_toggled(&mut self, identity: &str, value: bool, events: &mut EventQueue) -> bool {
        if !self.show_toggles {
            return false;
        }
        match self.entries.iter_mut().find(|e| e.identity == identity) {
            Some(entry) => {
                entry.toggled = value;
                events.push(LinkEvent::ToggleChanged {
                    identity: entry.identity.clone(),
                    is_toggled: value,
                });
                true
            }
            None => false,
        }
    }

    /// Flip one item's toggle state (the wrapper-control path). Returns the
    /// new state, or `None` on a soft miss.
    pub fn toggle(&mut self, identity: &str, events: &mut EventQueue) -> Option<bool> {
        if !self.show_toggles {
            return None;
        }
        let current = self
            .entries
            .iter()
            .find(|e| e.identity == identity)
            .map(ListEntry::is_toggled)?;
        self.set_toggled(identity, !current, events);
        Some(!current)
    }

    /// Remove every toggled item, each through the [`FileLinkList::remove_item`]
    /// path (one removal notification per item, insertion order). Returns
    /// the detached widgets.
    pub fn remove_selected(&mut self, events: &mut EventQueue) -> Vec<LinkItem> {
        if !self.show_toggles {
            return Vec::new();
        }
        let selected: Vec<String> = self
            .entries
            .iter()
            .filter(|e| e.toggled)
            .map(|e| e.identity.clone())
            .collect();
        selected
            .iter()
            .filter_map(|identity| self.remove_item(identity, events))
            .collect()
    }

    // ------------------------------------------------------------------ //
    // Queries: pure, insertion order
    // ------------------------------------------------------------------ //

    pub fn entries(&self) -> &[ListEntry] {
        &self.entries
    }

    pub fn items(&self) -> impl Iterator<Item = &LinkItem> {
        self.entries.iter().map(ListEntry::item)
    }

    /// Currently toggled items. Empty when toggles are disabled.
    pub fn toggled_items(&self) -> Vec<&LinkItem> {
        if !self.show_toggles {
            return Vec::new();
        }
        self.entries
            .iter()
            .filter(|e| e.toggled)
            .map(ListEntry::item)
            .collect()
    }

    pub fn get(&self, identity: &str) -> Option<&LinkItem> {
        self.entries
            .iter()
            .find(|e| e.identity == identity)
            .map(ListEntry::item)
    }

    pub fn get_mut(&mut self, identity: &str) -> Option<&mut LinkItem> {
        self.entries
            .iter_mut()
            .find(|e| e.identity == identity)
            .map(ListEntry::item_mut)
    }

    pub fn is_toggled(&self, identity: &str) -> Option<bool> {
        self.entries
            .iter()
            .find(|e| e.identity == identity)
            .map(ListEntry::is_toggled)
    }

    pub fn contains(&self, identity: &str) -> bool {
        self.ids.contains(identity)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
