// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_menu --heading-base-level=0

//! Understory Menu: a headless menu lifecycle.
//!
//! A [`Menu`] ties together the pieces a dropdown or context menu needs:
//!
//! - placement next to its anchor through [`understory_anchor`],
//! - roving-focus keyboard navigation through [`understory_list_nav`],
//! - typeahead through [`understory_typeahead`],
//! - cancellable open and close animations ([`animation`]),
//! - focus capture and restoration,
//! - dismissal on Escape, outside clicks and focus leaving the menu.
//!
//! The host implements [`MenuHost`]: it owns the anchor, the surface and the
//! items, renders [`SurfaceStyle`](understory_anchor::SurfaceStyle) and
//! [`AnimationFrame`] values, and drives time by calling [`Menu::tick`].
//!
//! ## Lifecycle
//!
//! ```text
//! Closed → Positioning → OpeningAnimation → FocusingDefault → Open
//!        → BeforeClose → ClosingAnimation → Closed
//! ```
//!
//! [`Menu::open`] and [`Menu::close`] return a [`Completion`] that resolves
//! when the animation finishes, is aborted by a newer open or close, or is
//! skipped because there is nothing to animate. Opening while a close
//! animation runs aborts it, so a quick close-then-open ends up open.
//!
//! ## Events
//!
//! Hosts forward:
//!
//! - keydowns inside the menu to [`Menu::handle_keydown`],
//! - window pointer-downs and clicks to [`Menu::handle_pointerdown`] and
//!   [`Menu::handle_window_click`],
//! - focus leaving the menu to [`Menu::handle_focusout`],
//! - [`MenuRequest`]s bubbling up from items to [`Menu::handle_request`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod animation;
pub mod config;
pub mod lifecycle;
pub mod menu;

pub use animation::{AnimationFrame, AnimationOutcome, Completion};
pub use config::{DefaultFocus, MenuConfig, OpenDirection};
pub use lifecycle::{
    CloseReason, MenuEvent, MenuRequest, MenuState, Region, is_closable_key, is_selectable_key,
};
pub use menu::{Menu, MenuHost};
