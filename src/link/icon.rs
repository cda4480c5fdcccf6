//! Icon decorations attached to a file link.
//!
//! An [`IconSet`] keeps a display-ordered collection of named [`Icon`]s,
//! split into two positional groups (before / after the link label).
//! Ordering inside a group is numeric-first: icons with an explicit
//! `order_index` sort ascending by that index, then icons without one follow
//! in insertion order. Mutators fail soft; operating on an unknown name
//! returns `false` rather than erroring, because hosts drive the set
//! speculatively while items come and go.

use crate::link::LinkError;

/// Which side of the link label an icon is displayed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconPosition {
    Before,
    After,
}

/// A single named decoration.
///
/// Built with [`Icon::new`] plus `with_*` methods. `position` is optional on
/// the icon itself: a fresh insert without one lands in the `Before` group,
/// while a replace without one inherits the replaced icon's group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Icon {
    name: String,
    glyph: String,
    tooltip: Option<String>,
    clickable: bool,
    visible: bool,
    position: Option<IconPosition>,
    order_index: Option<i32>,
    activation_key: Option<char>,
}

impl Icon {
    /// Create an icon. The name must be non-empty; it is the replace /
    /// lookup key within the owning link.
    pub fn new(name: impl Into<String>, glyph: impl Into<String>) -> Result<Self, LinkError> {
        let name = name.into();
        if name.is_empty() {
            return Err(LinkError::EmptyIconName);
        }
        Ok(Self {
            name,
            glyph: glyph.into(),
            tooltip: None,
            clickable: false,
            visible: true,
            position: None,
            order_index: None,
            activation_key: None,
        })
    }

    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }

    pub fn clickable(mut self) -> Self {
        self.clickable = true;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    pub fn with_position(mut self, position: IconPosition) -> Self {
        self.position = Some(position);
        self
    }

    pub fn with_order_index(mut self, index: i32) -> Self {
        self.order_index = Some(index);
        self
    }

    /// Bind a single key, scoped to the owning widget, that activates this
    /// icon.
    pub fn with_activation_key(mut self, key: char) -> Self {
        self.activation_key = Some(key);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn glyph(&self) -> &str {
        &self.glyph
    }

    pub fn tooltip(&self) -> Option<&str> {
        self.tooltip.as_deref()
    }

    pub fn is_clickable(&self) -> bool {
        self.clickable
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn order_index(&self) -> Option<i32> {
        self.order_index
    }

    pub fn activation_key(&self) -> Option<char> {
        self.activation_key
    }
}

#[derive(Debug, Clone)]
struct Slot {
    icon: Icon,
    position: IconPosition,
    seq: u64,
}

/// Ordered collection of icons owned by a link.
#[derive(Debug, Clone, Default)]
pub struct IconSet {
    slots: Vec<Slot>,
    next_seq: u64,
}

impl IconSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an icon, or replace the existing one with the same name.
    ///
    /// A replace keeps the original insertion rank and, when the new icon
    /// does not specify a position, the original positional group.
    pub fn add(&mut self, icon: Icon) {
        if let Some(slot) = self.slots.iter_mut().find(|s| s.icon.name == icon.name) {
            if let Some(position) = icon.position {
                slot.position = position;
            }
            slot.icon = icon;
            return;
        }
        let position = icon.position.unwrap_or(IconPosition::Before);
        let seq = self.next_seq;
        self.next_seq += 1;
        self.slots.push(Slot { icon, position, seq });
    }

    /// Remove an icon by name. Soft miss: returns `false` if absent.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.slots.len();
        self.slots.retain(|s| s.icon.name != name);
        self.slots.len() != before
    }

    /// Show or hide an icon. Soft miss: returns `false` if absent.
    pub fn set_visible(&mut self, name: &str, visible: bool) -> bool {
        match self.slots.iter_mut().find(|s| s.icon.name == name) {
            Some(slot) => {
                slot.icon.visible = visible;
                true
            }
            None => false,
        }
    }

    /// Partially update an icon's glyph and/or tooltip; absent fields are
    /// left unchanged. Soft miss: returns `false` if absent.
    pub fn update(&mut self, name: &str, glyph: Option<&str>, tooltip: Option<&str>) -> bool {
        match self.slots.iter_mut().find(|s| s.icon.name == name) {
            Some(slot) => {
                if let Some(glyph) = glyph {
                    slot.icon.glyph = glyph.to_string();
                }
                if let Some(tooltip) = tooltip {
                    slot.icon.tooltip = Some(tooltip.to_string());
                }
                true
            }
            None => false,
        }
    }

    /// Activate an icon. Permitted only when the icon is clickable and
    /// visible; returns the glyph displayed at the time of the click, or
    /// `None` when the activation was a no-op.
    pub fn activate(&self, name: &str) -> Option<String> {
        self.slots
            .iter()
            .find(|s| s.icon.name == name && s.icon.clickable && s.icon.visible)
            .map(|s| s.icon.glyph.clone())
    }

    /// The display sequence for one positional group: explicitly indexed
    /// icons first (ascending, insertion order breaking ties), then
    /// index-less icons in insertion order.
    pub fn resolve_order(&self, position: IconPosition) -> Vec<&Icon> {
        let mut group: Vec<&Slot> = self.slots.iter().filter(|s| s.position == position).collect();
        group.sort_by_key(|s| {
            (
                s.icon.order_index.is_none(),
                s.icon.order_index.unwrap_or(0),
                s.seq,
            )
        });
        group.into_iter().map(|s| &s.icon).collect()
    }

    /// Like [`IconSet::resolve_order`], restricted to visible icons.
    pub fn visible_icons(&self, position: IconPosition) -> Vec<&Icon> {
        self.resolve_order(position)
            .into_iter()
            .filter(|i| i.visible)
            .collect()
    }

    pub fn get(&self, name: &str) -> Option<&Icon> {
        self.slots.iter().find(|s| s.icon.name == name).map(|s| &s.icon)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Name of the first visible, clickable icon bound to `key`, if any.
    pub fn find_by_key(&self, key: char) -> Option<&str> {
        self.slots
            .iter()
            .find(|s| s.icon.activation_key == Some(key) && s.icon.clickable && s.icon.visible)
            .map(|s| s.icon.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
