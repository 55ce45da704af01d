// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Menu states, notifications, and the messages items send to their menu.

use understory_list_nav::{Key, ListRequest, NamedKey};

/// Where a menu is in its open/close cycle.
///
/// ```text
/// Closed → Positioning → OpeningAnimation → FocusingDefault → Open
///        → BeforeClose → ClosingAnimation → Closed
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum MenuState {
    /// Hidden.
    #[default]
    Closed,
    /// Waiting for the surface to be measured and placed.
    Positioning,
    /// The open animation is running.
    OpeningAnimation,
    /// Applying the default focus policy.
    FocusingDefault,
    /// Fully open.
    Open,
    /// Restoring focus before the close animation.
    BeforeClose,
    /// The close animation is running.
    ClosingAnimation,
}

impl MenuState {
    /// Whether the menu is open or on its way to open.
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(
            self,
            Self::Positioning | Self::OpeningAnimation | Self::FocusingDefault | Self::Open
        )
    }
}

/// Notifications dispatched to the host.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MenuEvent {
    /// The menu started opening.
    Opening,
    /// The menu finished opening.
    Opened,
    /// The menu started closing.
    Closing,
    /// The menu is hidden.
    Closed,
}

/// Why an item asked its menu to close.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CloseReason {
    /// An item was chosen with the pointer or a selection key.
    ClickSelection,
    /// A closing key was pressed on an item.
    Keydown(Key),
    /// The host closed the menu.
    Programmatic,
}

/// Messages items and nested menus send to a menu.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MenuRequest {
    /// Close the menu.
    CloseMenu {
        /// What triggered the close.
        reason: CloseReason,
    },
    /// A list request for the menu's item list.
    List(ListRequest),
    /// Re-enable typeahead, for example after a submenu closed.
    ActivateTypeahead,
    /// Suspend typeahead, for example while a submenu is open.
    DeactivateTypeahead,
    /// Keep the menu open when focus leaves it.
    StayOpenOnFocusout,
    /// Close the menu again when focus leaves it.
    CloseOnFocusout,
}

/// Where a pointer event or a focus change landed, relative to the menu.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Region {
    /// Inside the menu's subtree.
    Menu,
    /// On the anchor.
    Anchor,
    /// Anywhere else.
    Outside,
}

/// Keys that close a menu when pressed on an item.
#[must_use]
pub const fn is_closable_key(key: Key) -> bool {
    matches!(key, Key::Named(NamedKey::Escape | NamedKey::Tab))
}

/// Keys that choose an item.
#[must_use]
pub const fn is_selectable_key(key: Key) -> bool {
    matches!(key, Key::Named(NamedKey::Enter) | Key::Character(' '))
}
