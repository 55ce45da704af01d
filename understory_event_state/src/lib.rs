// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_event_state --heading-base-level=0

//! Understory Event State: event state managers for UI interactions.
//!
//! This crate provides small, focused state machines for interactions that
//! need state carried across several events:
//!
//! - [`range`]: two-handle range drags that keep the handles ordered and let
//!   a collapsed range be pulled apart from either side.
//!
//! ## Design Philosophy
//!
//! Each state manager is designed to be:
//!
//! - **Minimal and focused**: Each handles one specific interaction pattern
//! - **Stateful but simple**: Track just enough state to compute transitions
//! - **Integration-friendly**: Work with any event routing system
//!
//! The crate does not assume any particular UI framework or event system.
//! Managers accept plain values and return the corrections to apply.
//!
//! ### Range drags
//!
//! ```rust
//! use understory_event_state::range::{Handle, RangeAction, RangeValues, StartSource};
//!
//! let mut values = RangeValues::new(20.0, 60.0);
//! let mut action = RangeAction::begin(Handle::Start, values, StartSource::Pointer);
//!
//! // The start handle cannot pass the end handle.
//! assert!(action.drag_to(&mut values, 75.0));
//! assert_eq!(values, RangeValues::new(60.0, 60.0));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

pub mod range;
