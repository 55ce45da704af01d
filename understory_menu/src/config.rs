// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Menu configuration.

use understory_anchor::{Corner, Edge, PositionProps, Positioning, RepositionStrategy};
use understory_typeahead::DEFAULT_DELAY_MS;

/// What receives focus once a menu has opened.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum DefaultFocus {
    /// Leave focus alone.
    None,
    /// Focus the list container; no item becomes active.
    ListRoot,
    /// Activate and focus the first enabled item.
    #[default]
    FirstItem,
    /// Activate and focus the last enabled item.
    LastItem,
}

/// Direction the surface grows in while opening.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum OpenDirection {
    /// The menu corner is on its block-start edge.
    Down,
    /// The menu corner is on its block-end edge.
    Up,
}

/// Configuration for a [`Menu`](crate::Menu).
#[derive(Clone, Debug, PartialEq)]
pub struct MenuConfig {
    /// Corner of the anchor the menu attaches to.
    pub anchor_corner: Corner,
    /// Corner of the menu pinned to the anchor corner.
    pub menu_corner: Corner,
    /// Frame the menu is positioned in.
    pub positioning: Positioning,
    /// Horizontal offset in pixels.
    pub x_offset: f64,
    /// Vertical offset in pixels.
    pub y_offset: f64,
    /// How an overflowing menu is brought back on screen.
    pub reposition_strategy: RepositionStrategy,
    /// Never flip the block corners.
    pub disable_block_flip: bool,
    /// Never flip the inline corners.
    pub disable_inline_flip: bool,
    /// Skip the open and close animations.
    pub quick: bool,
    /// Keep the menu open when the user clicks outside of it.
    pub stay_open_on_outside_click: bool,
    /// Keep the menu open when focus leaves it.
    pub stay_open_on_focusout: bool,
    /// Do not return focus to the previously focused element on close.
    pub skip_restore_focus: bool,
    /// Focus target once the menu has opened.
    pub default_focus: DefaultFocus,
    /// Stop arrow navigation at the ends of the list.
    pub no_navigation_wrap: bool,
    /// Whether this menu is nested in another menu.
    ///
    /// A submenu navigates with the arrows along its own axis and closes on
    /// the arrow pointing back at its parent.
    pub is_submenu: bool,
    /// Typeahead session delay in milliseconds.
    pub typeahead_delay: u64,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            anchor_corner: Corner::END_START,
            menu_corner: Corner::START_START,
            positioning: Positioning::Absolute,
            x_offset: 0.0,
            y_offset: 0.0,
            reposition_strategy: RepositionStrategy::Move,
            disable_block_flip: false,
            disable_inline_flip: false,
            quick: false,
            stay_open_on_outside_click: false,
            stay_open_on_focusout: false,
            skip_restore_focus: false,
            default_focus: DefaultFocus::FirstItem,
            no_navigation_wrap: false,
            is_submenu: false,
            typeahead_delay: DEFAULT_DELAY_MS,
        }
    }
}

impl MenuConfig {
    /// Open direction implied by [`MenuConfig::menu_corner`].
    #[must_use]
    pub fn open_direction(&self) -> OpenDirection {
        match self.menu_corner.block {
            Edge::Start => OpenDirection::Down,
            Edge::End => OpenDirection::Up,
        }
    }

    /// Positioning snapshot for the given open state.
    #[must_use]
    pub fn position_props(&self, is_open: bool) -> PositionProps {
        PositionProps {
            anchor_corner: self.anchor_corner,
            surface_corner: self.menu_corner,
            positioning: self.positioning,
            is_open,
            x_offset: self.x_offset,
            y_offset: self.y_offset,
            strategy: self.reposition_strategy,
            disable_block_flip: self.disable_block_flip,
            disable_inline_flip: self.disable_inline_flip,
        }
    }
}
