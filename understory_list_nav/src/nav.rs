// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Roving-focus navigation over host-owned items.

use crate::key::{Key, KeyEvent, NamedKey, NavKeys};
use crate::request::{ListRequest, Request};

/// An item the list can activate.
///
/// The active item is the list's single tab stop. Items are owned by the host;
/// the controller only ever holds their indices for the duration of a call.
pub trait ListItem {
    /// Disabled items are skipped by navigation and never become active.
    fn is_disabled(&self) -> bool;
    /// Whether this item is the tab stop.
    fn is_active(&self) -> bool;
    /// Makes this item the tab stop.
    fn activate(&mut self);
    /// Removes this item from the tab order.
    fn deactivate(&mut self);
    /// Moves keyboard focus to this item.
    fn focus(&mut self);
}

/// What happens when navigation runs off either end of the list.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum WrapMode {
    /// Stop at the ends; the active item stays put.
    #[default]
    Never,
    /// Continue from the opposite end.
    Wrap,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Step {
    Forward,
    Backward,
}

/// Index of the first enabled, active item.
pub fn active_item<I: ListItem>(items: &[I]) -> Option<usize> {
    items
        .iter()
        .position(|item| !item.is_disabled() && item.is_active())
}

/// Index of the first enabled item.
pub fn first_enabled<I: ListItem>(items: &[I]) -> Option<usize> {
    items.iter().position(|item| !item.is_disabled())
}

/// Index of the last enabled item.
pub fn last_enabled<I: ListItem>(items: &[I]) -> Option<usize> {
    items.iter().rposition(|item| !item.is_disabled())
}

fn step_enabled<I: ListItem>(
    items: &[I],
    from: usize,
    wrap: WrapMode,
    step: Step,
) -> Option<usize> {
    let len = items.len();
    // At most one full lap, which lands back on `from` when it is the only enabled item.
    for distance in 1..=len {
        let index = match step {
            Step::Forward => {
                let raw = from + distance;
                if raw >= len && wrap == WrapMode::Never {
                    return None;
                }
                raw % len
            }
            Step::Backward => {
                if distance > from && wrap == WrapMode::Never {
                    return None;
                }
                (from + len - distance % len) % len
            }
        };
        if !items[index].is_disabled() {
            return Some(index);
        }
    }
    None
}

/// Makes `index` the only active item and focuses it.
///
/// Every other item is deactivated first, so at most one item is active at
/// any point.
pub fn activate_item<I: ListItem>(items: &mut [I], index: usize) {
    for (i, item) in items.iter_mut().enumerate() {
        if i != index && item.is_active() {
            item.deactivate();
        }
    }
    items[index].activate();
    items[index].focus();
}

/// Keyboard navigation policy for one list.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ListNavigation {
    /// End-of-list behavior.
    pub wrap: WrapMode,
    /// Whether inline arrows are mirrored.
    pub rtl: bool,
    /// Keys this list responds to.
    pub navigable_keys: NavKeys,
}

impl ListNavigation {
    /// Activates the enabled item after the active one.
    ///
    /// With no active item the first enabled item is activated. Returns `None`
    /// and leaves the active item alone when there is nothing to move to.
    pub fn activate_next_item<I: ListItem>(&self, items: &mut [I]) -> Option<usize> {
        self.step(items, Step::Forward)
    }

    /// Activates the enabled item before the active one.
    ///
    /// With no active item the last enabled item is activated.
    pub fn activate_previous_item<I: ListItem>(&self, items: &mut [I]) -> Option<usize> {
        self.step(items, Step::Backward)
    }

    /// Activates the first enabled item.
    pub fn activate_first_item<I: ListItem>(&self, items: &mut [I]) -> Option<usize> {
        let index = first_enabled(items)?;
        activate_item(items, index);
        Some(index)
    }

    /// Activates the last enabled item.
    pub fn activate_last_item<I: ListItem>(&self, items: &mut [I]) -> Option<usize> {
        let index = last_enabled(items)?;
        activate_item(items, index);
        Some(index)
    }

    fn step<I: ListItem>(&self, items: &mut [I], step: Step) -> Option<usize> {
        let target = match active_item(items) {
            Some(from) => step_enabled(items, from, self.wrap, step)?,
            None => match step {
                Step::Forward => first_enabled(items)?,
                Step::Backward => last_enabled(items)?,
            },
        };
        activate_item(items, target);
        Some(target)
    }

    /// Handles a navigation key.
    ///
    /// Prevented events and keys outside [`ListNavigation::navigable_keys`]
    /// are ignored. Handled events are marked prevented even when the list
    /// is empty. Returns the newly active index.
    pub fn handle_keydown<I: ListItem>(
        &self,
        event: &mut KeyEvent,
        items: &mut [I],
    ) -> Option<usize> {
        if event.default_prevented() {
            return None;
        }
        let flag = NavKeys::for_key(event.key)?;
        if !self.navigable_keys.contains(flag) {
            return None;
        }
        event.prevent_default();

        let (inline_next, inline_previous) = if self.rtl {
            (NamedKey::ArrowLeft, NamedKey::ArrowRight)
        } else {
            (NamedKey::ArrowRight, NamedKey::ArrowLeft)
        };
        let result = match event.key {
            Key::Named(NamedKey::ArrowDown) => self.activate_next_item(items),
            Key::Named(NamedKey::ArrowUp) => self.activate_previous_item(items),
            Key::Named(key) if key == inline_next => self.activate_next_item(items),
            Key::Named(key) if key == inline_previous => self.activate_previous_item(items),
            Key::Named(NamedKey::Home) => self.activate_first_item(items),
            Key::Named(NamedKey::End) => self.activate_last_item(items),
            _ => None,
        };
        log::trace!("list navigation {:?} -> {result:?}", event.key);
        result
    }

    /// Re-establishes the tab stop after the item sequence changed.
    ///
    /// Keeps the first enabled active item and deactivates any others. When
    /// no item is active, the first enabled item becomes the tab stop without
    /// receiving focus.
    pub fn on_slot_change<I: ListItem>(&self, items: &mut [I]) -> Option<usize> {
        let keep = active_item(items);
        for (i, item) in items.iter_mut().enumerate() {
            if Some(i) != keep && item.is_active() {
                item.deactivate();
            }
        }
        if keep.is_some() {
            return keep;
        }
        let first = first_enabled(items)?;
        items[first].activate();
        Some(first)
    }

    /// Deactivates every item.
    pub fn on_deactivate_items<I: ListItem>(&self, items: &mut [I]) {
        for item in items.iter_mut() {
            item.deactivate();
        }
    }

    /// Activates `index` on the item's own request.
    ///
    /// Disabled or out-of-range items are refused.
    pub fn on_request_activation<I: ListItem>(&self, items: &mut [I], index: usize) -> bool {
        match items.get(index) {
            Some(item) if !item.is_disabled() => {
                activate_item(items, index);
                true
            }
            _ => false,
        }
    }

    /// The first enabled active item.
    pub fn active_item<I: ListItem>(&self, items: &[I]) -> Option<usize> {
        active_item(items)
    }

    /// Consumes the activation requests and marks them handled.
    ///
    /// Selection requests are left for an enclosing controller. Returns
    /// whether the request was consumed.
    pub fn handle_request<I: ListItem>(
        &self,
        request: &mut Request<ListRequest>,
        items: &mut [I],
    ) -> bool {
        match request.message {
            ListRequest::DeactivateItems => self.on_deactivate_items(items),
            ListRequest::RequestActivation => {
                self.on_request_activation(items, request.origin);
            }
            ListRequest::RequestSelection { .. } => return false,
        }
        request.mark_handled();
        true
    }
}
