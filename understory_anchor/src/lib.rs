// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_anchor --heading-base-level=0

//! Understory Anchor: viewport-aware placement of a floating surface next to an anchor box.
//!
//! This crate positions a _surface_ (a menu panel, a listbox, a tooltip) relative
//! to an _anchor_ (the button or field that opened it). It is headless: the host
//! owns both elements, measures them, and renders the [`SurfaceStyle`] the
//! controller publishes.
//!
//! Placement is described by two logical [`Corner`]s: the anchor corner the
//! surface attaches to and the surface corner pinned there. Each axis is solved
//! separately. When the surface would overflow the viewport on an axis, that
//! axis is solved again with both corners flipped, and whichever solution
//! overflows less wins. Remaining overflow is corrected either by moving the
//! surface back into view or by shrinking it ([`RepositionStrategy`]).
//!
//! ## Layers
//!
//! - [`geometry`]: pure single-axis math ([`compute_block`], [`compute_inline`]).
//! - [`compute_placement`]: both axes, flipping, and overflow correction for a
//!   fully measured [`PositionRequest`].
//! - [`SurfacePositionController`]: the asynchronous pass that measures through a
//!   [`SurfaceHost`], plus open/close change detection in
//!   [`SurfacePositionController::on_update`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Rect, Size, Vec2};
//! use understory_anchor::{
//!     Corner, Direction, InsetProperty, PositionRequest, Positioning, RepositionStrategy,
//!     Viewport, compute_placement,
//! };
//!
//! let request = PositionRequest {
//!     anchor: Rect::new(10.0, 500.0, 110.0, 520.0),
//!     surface: Rect::new(0.0, 0.0, 100.0, 300.0),
//!     anchor_corner: Corner::END_START,
//!     surface_corner: Corner::START_START,
//!     positioning: Positioning::Fixed,
//!     x_offset: 0.0,
//!     y_offset: 0.0,
//!     strategy: RepositionStrategy::Move,
//!     viewport: Viewport { size: Size::new(800.0, 600.0), scroll: Vec2::ZERO },
//!     scrollbar: Vec2::ZERO,
//!     direction: Direction::Ltr,
//!     disable_block_flip: false,
//!     disable_inline_flip: false,
//! };
//!
//! // There is no room below the anchor, so the surface opens upward.
//! let placement = compute_placement(&request);
//! assert!(placement.block_flipped);
//! assert_eq!(placement.style.block, Some((InsetProperty::Bottom, 100.0)));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod controller;
pub mod corner;
pub mod geometry;
pub mod style;

pub use controller::{
    Placement, PositionProps, PositionRequest, PositionTarget, RepositionStrategy, SurfaceHost,
    SurfacePositionController, UpdateOutcome, Viewport, compute_placement,
};
pub use corner::{Corner, Edge, ParseCornerError};
pub use geometry::{
    AxisInput, AxisPlacement, Direction, InsetProperty, Positioning, compute_block,
    compute_inline,
};
pub use style::{Display, SurfaceStyle};
