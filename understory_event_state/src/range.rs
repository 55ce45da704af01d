// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two-handle range drag: keep the handles ordered, and let a collapsed range
//! be pulled apart from either side.
//!
//! ## Usage
//!
//! 1) On pointer or key down on a handle, call [`RangeAction::begin`] with the current values.
//! 2) Each time the live handle's value changes, call [`RangeAction::drag_to`]
//!    (or write the value yourself and call [`RangeAction::apply`]).
//! 3) Route further input to [`RangeAction::target`], which may change once after a flip.
//! 4) Drop the action on pointer or key up.
//!
//! ## Minimal example
//!
//! ```
//! use understory_event_state::range::{Handle, RangeAction, RangeValues, StartSource};
//!
//! // Both handles sit at 50.
//! let mut values = RangeValues::new(50.0, 50.0);
//! let mut action = RangeAction::begin(Handle::Start, values, StartSource::Pointer);
//!
//! // Dragging the start handle to the right pulls the end handle instead.
//! assert!(action.drag_to(&mut values, 70.0));
//! assert_eq!(values, RangeValues::new(50.0, 70.0));
//! assert_eq!(action.target(), Handle::End);
//! ```

/// One of the two handles of a range.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Handle {
    /// The lower handle.
    Start,
    /// The upper handle.
    End,
}

impl Handle {
    /// The other handle.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Start => Self::End,
            Self::End => Self::Start,
        }
    }
}

/// Values of both handles.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct RangeValues {
    /// Lower value.
    pub start: f64,
    /// Upper value.
    pub end: f64,
}

impl RangeValues {
    /// Creates a pair of values.
    #[must_use]
    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Value of `handle`.
    #[must_use]
    pub const fn get(&self, handle: Handle) -> f64 {
        match handle {
            Handle::Start => self.start,
            Handle::End => self.end,
        }
    }

    /// Sets the value of `handle`.
    pub fn set(&mut self, handle: Handle, value: f64) {
        match handle {
            Handle::Start => self.start = value,
            Handle::End => self.end = value,
        }
    }
}

/// What started the interaction.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum StartSource {
    /// A pointer press. Only pointer drags may flip.
    Pointer,
    /// A key press.
    Key,
}

/// State of one range interaction, from down to up.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RangeAction {
    target: Handle,
    fixed: Handle,
    snapshot: RangeValues,
    can_flip: bool,
    flipped: bool,
}

impl RangeAction {
    /// Starts an interaction on `target`.
    #[must_use]
    pub fn begin(target: Handle, values: RangeValues, source: StartSource) -> Self {
        Self {
            target,
            fixed: target.other(),
            snapshot: values,
            can_flip: source == StartSource::Pointer,
            flipped: false,
        }
    }

    /// The handle being dragged.
    #[must_use]
    pub const fn target(&self) -> Handle {
        self.target
    }

    /// The handle that stays put.
    #[must_use]
    pub const fn fixed(&self) -> Handle {
        self.fixed
    }

    /// Values at the start of the interaction.
    #[must_use]
    pub const fn snapshot(&self) -> RangeValues {
        self.snapshot
    }

    /// Whether the handles swapped roles.
    #[must_use]
    pub const fn is_flipped(&self) -> bool {
        self.flipped
    }

    /// Writes `value` to the live handle and applies [`RangeAction::apply`].
    pub fn drag_to(&mut self, values: &mut RangeValues, value: f64) -> bool {
        values.set(self.target, value);
        self.apply(values)
    }

    /// Corrects `values` after the live handle moved.
    ///
    /// A pointer drag on a collapsed range that crosses the fixed handle
    /// swaps roles once: the dragged handle returns to its starting value and
    /// the other handle takes the dragged value. Otherwise a crossing handle
    /// is clamped to the fixed one. Returns whether `values` was changed.
    pub fn apply(&mut self, values: &mut RangeValues) -> bool {
        let mut corrected = false;
        let collapsed = self.snapshot.start == self.snapshot.end;
        if self.can_flip && collapsed && self.crosses(values) {
            let dragged = values.get(self.target);
            values.set(self.target, self.snapshot.get(self.target));
            values.set(self.fixed, dragged);
            core::mem::swap(&mut self.target, &mut self.fixed);
            self.can_flip = false;
            self.flipped = true;
            corrected = true;
        }
        if self.crosses(values) {
            values.set(self.target, values.get(self.fixed));
            corrected = true;
        }
        corrected
    }

    fn crosses(&self, values: &RangeValues) -> bool {
        match self.target {
            Handle::Start => values.start > values.end,
            Handle::End => values.end < values.start,
        }
    }
}
