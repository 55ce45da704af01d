// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-axis placement math.
//!
//! Each axis is solved independently: given where the anchor sits in the
//! viewport, which anchor edge the surface attaches to, and which surface edge
//! is pinned, compute the inset to write and how far the surface would spill
//! past the far edge of the viewport.
//!
//! The block axis has no writing direction; the inline axis mirrors its
//! start/end measurements in right-to-left content.

use crate::corner::Edge;

/// Coordinate frame that computed insets are expressed in.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Positioning {
    /// Relative to the nearest positioned ancestor.
    ///
    /// Only the anchor-relative offset is written; the host is expected to
    /// position the surface inside the anchor's containing block.
    #[default]
    Absolute,
    /// Relative to the viewport.
    Fixed,
    /// Relative to the document, tracking page scroll.
    Document,
    /// Relative to the viewport, promoted to the platform top layer.
    Popover,
}

impl Positioning {
    /// Whether insets include the anchor's viewport position.
    #[must_use]
    pub const fn is_viewport_relative(self) -> bool {
        matches!(self, Self::Fixed | Self::Document | Self::Popover)
    }

    /// Whether insets include the document scroll offset.
    #[must_use]
    pub const fn is_document_relative(self) -> bool {
        matches!(self, Self::Document)
    }
}

/// Inline writing direction of the surface.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Left to right.
    #[default]
    Ltr,
    /// Right to left.
    Rtl,
}

/// Name of the inset property a placement writes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum InsetProperty {
    /// `inset-block-start`
    BlockStart,
    /// `inset-block-end`
    BlockEnd,
    /// `inset-inline-start`
    InlineStart,
    /// `inset-inline-end`
    InlineEnd,
    /// `top`
    Top,
    /// `bottom`
    Bottom,
    /// `left`
    Left,
    /// `right`
    Right,
}

impl InsetProperty {
    /// CSS property name.
    #[must_use]
    pub const fn css_name(self) -> &'static str {
        match self {
            Self::BlockStart => "inset-block-start",
            Self::BlockEnd => "inset-block-end",
            Self::InlineStart => "inset-inline-start",
            Self::InlineEnd => "inset-inline-end",
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

/// Inputs for solving one axis.
///
/// `anchor_near` / `anchor_far` are the anchor's viewport coordinates along the
/// axis (`top`/`bottom` or `left`/`right`), independent of writing direction.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct AxisInput {
    /// Anchor's near (top/left) viewport coordinate.
    pub anchor_near: f64,
    /// Anchor's far (bottom/right) viewport coordinate.
    pub anchor_far: f64,
    /// Surface extent along the axis.
    pub surface_extent: f64,
    /// Anchor edge the surface attaches to.
    pub anchor_edge: Edge,
    /// Surface edge pinned to the attachment point.
    pub surface_edge: Edge,
    /// Extra signed offset in pixels.
    pub offset: f64,
    /// Frame the inset is expressed in.
    pub positioning: Positioning,
    /// Viewport extent along the axis (inner size, including scrollbars).
    pub viewport_extent: f64,
    /// Scrollbar thickness along the axis.
    pub scrollbar: f64,
    /// Document scroll offset along the axis.
    pub scroll: f64,
}

impl AxisInput {
    fn anchor_extent(&self) -> f64 {
        self.anchor_far - self.anchor_near
    }
}

/// Result of solving one axis.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AxisPlacement {
    /// Inset value for [`AxisPlacement::property`], in pixels.
    pub inset: f64,
    /// How far the surface would overflow the viewport's far edge; zero when it fits.
    pub out_of_bounds: f64,
    /// Property the inset is written to.
    pub property: InsetProperty,
}

/// Solves the block axis.
#[must_use]
pub fn compute_block(input: &AxisInput) -> AxisPlacement {
    let property = match (input.positioning.is_viewport_relative(), input.surface_edge) {
        (false, Edge::Start) => InsetProperty::BlockStart,
        (false, Edge::End) => InsetProperty::BlockEnd,
        (true, Edge::Start) => InsetProperty::Top,
        (true, Edge::End) => InsetProperty::Bottom,
    };
    solve(input, false, property)
}

/// Solves the inline axis for the given writing direction.
#[must_use]
pub fn compute_inline(input: &AxisInput, direction: Direction) -> AxisPlacement {
    let rtl = direction == Direction::Rtl;
    let property = if input.positioning.is_viewport_relative() {
        // Physical side that the logical edge lands on.
        match (input.surface_edge, rtl) {
            (Edge::Start, false) | (Edge::End, true) => InsetProperty::Left,
            (Edge::End, false) | (Edge::Start, true) => InsetProperty::Right,
        }
    } else {
        match input.surface_edge {
            Edge::Start => InsetProperty::InlineStart,
            Edge::End => InsetProperty::InlineEnd,
        }
    };
    solve(input, rtl, property)
}

fn solve(input: &AxisInput, mirrored: bool, property: InsetProperty) -> AxisPlacement {
    let one_end = input.anchor_edge != input.surface_edge;
    let anchor_offset = if one_end { input.anchor_extent() } else { 0.0 } + input.offset;

    // Distance from the viewport edge the surface edge is measured from.
    let from_near = input.anchor_near;
    let from_far = input.viewport_extent - input.anchor_far - input.scrollbar;
    let frame_offset = match (input.surface_edge, mirrored) {
        (Edge::Start, false) | (Edge::End, true) => from_near,
        (Edge::End, false) | (Edge::Start, true) => from_far,
    };
    let document_offset = match (input.surface_edge, mirrored) {
        (Edge::Start, false) | (Edge::End, true) => input.scroll,
        (Edge::End, false) | (Edge::Start, true) => -input.scroll,
    };

    let remaining = input.viewport_extent - frame_offset - anchor_offset - input.surface_extent;
    let out_of_bounds = (-remaining).max(0.0);

    let mut inset = anchor_offset;
    if input.positioning.is_viewport_relative() {
        inset += frame_offset;
    }
    if input.positioning.is_document_relative() {
        inset += document_offset;
    }

    AxisPlacement {
        inset,
        out_of_bounds,
        property,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(anchor_edge: Edge, surface_edge: Edge, positioning: Positioning) -> AxisInput {
        AxisInput {
            anchor_near: 100.0,
            anchor_far: 120.0,
            surface_extent: 50.0,
            anchor_edge,
            surface_edge,
            offset: 0.0,
            positioning,
            viewport_extent: 600.0,
            scrollbar: 0.0,
            scroll: 0.0,
        }
    }

    #[test]
    fn same_edge_overlaps_anchor() {
        let p = compute_block(&block(Edge::Start, Edge::Start, Positioning::Fixed));
        assert_eq!(p.inset, 100.0);
        assert_eq!(p.out_of_bounds, 0.0);
        assert_eq!(p.property, InsetProperty::Top);
    }

    #[test]
    fn opposite_edge_places_surface_after_anchor() {
        let p = compute_block(&block(Edge::End, Edge::Start, Positioning::Fixed));
        assert_eq!(p.inset, 120.0);
        assert_eq!(p.out_of_bounds, 0.0);
    }

    #[test]
    fn end_edge_measures_from_far_side() {
        let mut input = block(Edge::Start, Edge::End, Positioning::Fixed);
        input.scrollbar = 15.0;
        let p = compute_block(&input);
        // 600 - 120 - 15 from the bottom, plus the anchor's own height.
        assert_eq!(p.inset, 465.0 + 20.0);
        assert_eq!(p.property, InsetProperty::Bottom);
    }

    #[test]
    fn absolute_frame_only_writes_anchor_offset() {
        let mut input = block(Edge::End, Edge::Start, Positioning::Absolute);
        input.offset = 4.0;
        let p = compute_block(&input);
        assert_eq!(p.inset, 24.0);
        assert_eq!(p.property, InsetProperty::BlockStart);
    }

    #[test]
    fn document_frame_tracks_scroll() {
        let mut input = block(Edge::End, Edge::Start, Positioning::Document);
        input.scroll = 300.0;
        assert_eq!(compute_block(&input).inset, 420.0);

        input.surface_edge = Edge::End;
        input.anchor_edge = Edge::Start;
        // 600 - 120 from the bottom, + anchor height, - scroll.
        assert_eq!(compute_block(&input).inset, 480.0 + 20.0 - 300.0);
    }

    #[test]
    fn overflow_is_reported_past_far_edge() {
        let mut input = block(Edge::End, Edge::Start, Positioning::Fixed);
        input.surface_extent = 500.0;
        let p = compute_block(&input);
        assert_eq!(p.out_of_bounds, 20.0);
    }

    #[test]
    fn inline_rtl_mirrors_measurement_and_property() {
        let input = AxisInput {
            anchor_near: 10.0,
            anchor_far: 110.0,
            surface_extent: 100.0,
            anchor_edge: Edge::Start,
            surface_edge: Edge::Start,
            offset: 0.0,
            positioning: Positioning::Fixed,
            viewport_extent: 800.0,
            scrollbar: 0.0,
            scroll: 0.0,
        };
        let ltr = compute_inline(&input, Direction::Ltr);
        assert_eq!(ltr.inset, 10.0);
        assert_eq!(ltr.property, InsetProperty::Left);

        let rtl = compute_inline(&input, Direction::Rtl);
        assert_eq!(rtl.inset, 690.0);
        assert_eq!(rtl.property, InsetProperty::Right);
    }

    #[test]
    fn inline_absolute_keeps_logical_property() {
        let input = AxisInput {
            surface_edge: Edge::End,
            positioning: Positioning::Absolute,
            viewport_extent: 800.0,
            ..AxisInput::default()
        };
        assert_eq!(
            compute_inline(&input, Direction::Rtl).property,
            InsetProperty::InlineEnd
        );
    }
}
