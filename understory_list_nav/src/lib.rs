// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_list_nav --heading-base-level=0

//! Understory List Nav: roving-focus keyboard navigation for lists and menus.
//!
//! A roving-focus list has exactly one _active_ item, the one reachable with
//! Tab. Arrow keys, Home and End move the active item; disabled items are
//! skipped and never break wraparound.
//!
//! Items stay owned by the host. They implement [`ListItem`] and are passed
//! to [`ListNavigation`] as a slice in navigation order for each call.
//!
//! ```rust
//! use understory_list_nav::{KeyEvent, ListItem, ListNavigation, NamedKey, WrapMode};
//!
//! #[derive(Default)]
//! struct Row { disabled: bool, active: bool, focused: bool }
//!
//! impl ListItem for Row {
//!     fn is_disabled(&self) -> bool { self.disabled }
//!     fn is_active(&self) -> bool { self.active }
//!     fn activate(&mut self) { self.active = true; }
//!     fn deactivate(&mut self) { self.active = false; self.focused = false; }
//!     fn focus(&mut self) { self.focused = true; }
//! }
//!
//! let mut rows = [Row::default(), Row { disabled: true, ..Row::default() }, Row::default()];
//! let nav = ListNavigation { wrap: WrapMode::Wrap, ..ListNavigation::default() };
//!
//! let mut down = KeyEvent::named(NamedKey::ArrowDown);
//! assert_eq!(nav.handle_keydown(&mut down, &mut rows), Some(0));
//! assert!(down.default_prevented());
//!
//! // The disabled row is skipped, then navigation wraps.
//! assert_eq!(nav.activate_next_item(&mut rows), Some(2));
//! assert_eq!(nav.activate_next_item(&mut rows), Some(0));
//! assert!(rows[0].focused && !rows[2].active);
//! ```
//!
//! Items talk back to their list through [`request::Request`] values passed
//! up with [`request::bubble`]; [`ListNavigation::handle_request`] consumes
//! the activation requests.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod key;
pub mod nav;
pub mod request;

pub use key::{Key, KeyEvent, NamedKey, NavKeys};
pub use nav::{ListItem, ListNavigation, WrapMode, activate_item, active_item};
pub use request::{ListRequest, Outcome, Request, SelectionSource, bubble};
