// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Upward requests from items to the controllers that contain them.
//!
//! An item does not call its list or menu directly. It builds a [`Request`]
//! and hands it to [`bubble`], which offers it to each enclosing level from
//! the innermost outward until one of them stops it.
//!
//! ```
//! use understory_list_nav::request::{Outcome, Request, bubble};
//!
//! #[derive(Debug)]
//! enum Msg { Close }
//!
//! let mut seen = Vec::new();
//! let mut request = Request::new(3, Msg::Close);
//! let handled = bubble(["submenu", "menu", "window"], &mut request, |level, req| {
//!     seen.push(level);
//!     if level == "menu" {
//!         req.mark_handled();
//!         Outcome::Stop
//!     } else {
//!         Outcome::Continue
//!     }
//! });
//! assert!(handled);
//! assert_eq!(seen, ["submenu", "menu"]);
//! ```

/// Whether propagation should go on after a handler ran.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Offer the request to the next enclosing level.
    Continue,
    /// Stop here.
    Stop,
}

/// A message travelling upward from an item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Request<M> {
    /// Index of the originating item in its list.
    pub origin: usize,
    /// Payload.
    pub message: M,
    handled: bool,
}

impl<M> Request<M> {
    /// Creates an unhandled request.
    pub const fn new(origin: usize, message: M) -> Self {
        Self {
            origin,
            message,
            handled: false,
        }
    }

    /// Records that some level acted on the request.
    pub fn mark_handled(&mut self) {
        self.handled = true;
    }

    /// Whether some level acted on the request.
    #[must_use]
    pub const fn is_handled(&self) -> bool {
        self.handled
    }
}

/// Offers `request` to each of `levels`, innermost first.
///
/// Propagation ends when a handler returns [`Outcome::Stop`]. Returns whether
/// the request was marked handled.
pub fn bubble<L, M>(
    levels: impl IntoIterator<Item = L>,
    request: &mut Request<M>,
    mut handler: impl FnMut(L, &mut Request<M>) -> Outcome,
) -> bool {
    for level in levels {
        if handler(level, request) == Outcome::Stop {
            break;
        }
    }
    request.is_handled()
}

/// Why a selection request was raised.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SelectionSource {
    /// The user interacted with the item.
    Interaction,
    /// The host changed the item's `selected` property.
    Property,
}

/// Requests items raise for their list.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ListRequest {
    /// Deactivate every item, for example when the pointer leaves the list.
    DeactivateItems,
    /// Make the origin the active item, for example on hover.
    RequestActivation,
    /// The origin's selection state changed.
    RequestSelection {
        /// What triggered the change.
        source: SelectionSource,
        /// The new selection state.
        selected: bool,
    },
}
