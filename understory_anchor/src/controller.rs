// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Surface positioning: both axes, corner flipping, overflow correction, and
//! open/close change detection.

use core::future::Future;

use kurbo::{Rect, Size, Vec2};

use crate::corner::Corner;
use crate::geometry::{
    AxisInput, AxisPlacement, Direction, Positioning, compute_block, compute_inline,
};
use crate::style::{Display, SurfaceStyle};

/// How an overflowing surface is pulled back into the viewport.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum RepositionStrategy {
    /// Shift the surface by the overflow amount.
    #[default]
    Move,
    /// Keep the position and shrink the surface by the overflow amount.
    Resize,
}

/// Configuration snapshot compared on every update.
#[derive(Clone, Debug, PartialEq)]
pub struct PositionProps {
    /// Anchor corner the surface attaches to.
    pub anchor_corner: Corner,
    /// Surface corner pinned to the anchor corner.
    pub surface_corner: Corner,
    /// Frame the insets are expressed in.
    pub positioning: Positioning,
    /// Whether the surface should be shown.
    pub is_open: bool,
    /// Inline-axis offset in pixels.
    pub x_offset: f64,
    /// Block-axis offset in pixels.
    pub y_offset: f64,
    /// Overflow correction strategy.
    pub strategy: RepositionStrategy,
    /// Never try the flipped block corners.
    pub disable_block_flip: bool,
    /// Never try the flipped inline corners.
    pub disable_inline_flip: bool,
}

impl Default for PositionProps {
    fn default() -> Self {
        Self {
            anchor_corner: Corner::END_START,
            surface_corner: Corner::START_START,
            positioning: Positioning::Absolute,
            is_open: false,
            x_offset: 0.0,
            y_offset: 0.0,
            strategy: RepositionStrategy::Move,
            disable_block_flip: false,
            disable_inline_flip: false,
        }
    }
}

/// Viewport snapshot taken at the start of a positioning pass.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Viewport {
    /// Inner size of the window, scrollbars included.
    pub size: Size,
    /// Document scroll offset.
    pub scroll: Vec2,
}

/// Everything one placement needs, measured up front.
#[derive(Clone, Debug, PartialEq)]
pub struct PositionRequest {
    /// Anchor box in viewport coordinates.
    pub anchor: Rect,
    /// Surface box; only its size is used.
    pub surface: Rect,
    /// Anchor corner.
    pub anchor_corner: Corner,
    /// Surface corner.
    pub surface_corner: Corner,
    /// Frame.
    pub positioning: Positioning,
    /// Inline-axis offset.
    pub x_offset: f64,
    /// Block-axis offset.
    pub y_offset: f64,
    /// Overflow correction strategy.
    pub strategy: RepositionStrategy,
    /// Viewport snapshot.
    pub viewport: Viewport,
    /// Scrollbar thickness: `x` is the vertical bar's width, `y` the
    /// horizontal bar's height.
    pub scrollbar: Vec2,
    /// Writing direction of the surface.
    pub direction: Direction,
    /// See [`PositionProps::disable_block_flip`].
    pub disable_block_flip: bool,
    /// See [`PositionProps::disable_inline_flip`].
    pub disable_inline_flip: bool,
}

/// Outcome of a placement.
#[derive(Clone, Debug, PartialEq)]
pub struct Placement {
    /// Chosen block-axis solution, before overflow correction.
    pub block: AxisPlacement,
    /// Chosen inline-axis solution, before overflow correction.
    pub inline: AxisPlacement,
    /// Whether the block corners were flipped.
    pub block_flipped: bool,
    /// Whether the inline corners were flipped.
    pub inline_flipped: bool,
    /// Final style, with the strategy applied.
    pub style: SurfaceStyle,
}

/// Computes a placement for a fully measured request.
///
/// Each axis is solved for the configured corners first. If the surface
/// overflows and flipping is allowed, the axis is solved again with both
/// corners flipped and the smaller overflow wins. The two axes decide
/// independently.
#[must_use]
pub fn compute_placement(request: &PositionRequest) -> Placement {
    let block_input = |anchor: Corner, surface: Corner| AxisInput {
        anchor_near: request.anchor.y0,
        anchor_far: request.anchor.y1,
        surface_extent: request.surface.height(),
        anchor_edge: anchor.block,
        surface_edge: surface.block,
        offset: request.y_offset,
        positioning: request.positioning,
        viewport_extent: request.viewport.size.height,
        scrollbar: request.scrollbar.y,
        scroll: request.viewport.scroll.y,
    };
    let inline_input = |anchor: Corner, surface: Corner| AxisInput {
        anchor_near: request.anchor.x0,
        anchor_far: request.anchor.x1,
        surface_extent: request.surface.width(),
        anchor_edge: anchor.inline,
        surface_edge: surface.inline,
        offset: request.x_offset,
        positioning: request.positioning,
        viewport_extent: request.viewport.size.width,
        scrollbar: request.scrollbar.x,
        scroll: request.viewport.scroll.x,
    };

    let (anchor, surface) = (request.anchor_corner, request.surface_corner);

    let mut block = compute_block(&block_input(anchor, surface));
    let mut block_flipped = false;
    if block.out_of_bounds > 0.0 && !request.disable_block_flip {
        let flipped = compute_block(&block_input(anchor.flip_block(), surface.flip_block()));
        if flipped.out_of_bounds < block.out_of_bounds {
            log::debug!(
                "block overflow {} -> {} after flipping to {}",
                block.out_of_bounds,
                flipped.out_of_bounds,
                surface.flip_block()
            );
            block = flipped;
            block_flipped = true;
        }
    }

    let mut inline = compute_inline(&inline_input(anchor, surface), request.direction);
    let mut inline_flipped = false;
    if inline.out_of_bounds > 0.0 && !request.disable_inline_flip {
        let flipped = compute_inline(
            &inline_input(anchor.flip_inline(), surface.flip_inline()),
            request.direction,
        );
        if flipped.out_of_bounds < inline.out_of_bounds {
            log::debug!(
                "inline overflow {} -> {} after flipping to {}",
                inline.out_of_bounds,
                flipped.out_of_bounds,
                surface.flip_inline()
            );
            inline = flipped;
            inline_flipped = true;
        }
    }

    let mut style = SurfaceStyle {
        display: Display::Block,
        opacity: Some(1.0),
        ..SurfaceStyle::default()
    };
    let (block_inset, inline_inset) = match request.strategy {
        RepositionStrategy::Move => (
            block.inset - block.out_of_bounds,
            inline.inset - inline.out_of_bounds,
        ),
        RepositionStrategy::Resize => {
            if block.out_of_bounds > 0.0 {
                style.height = Some(request.surface.height() - block.out_of_bounds);
            }
            if inline.out_of_bounds > 0.0 {
                style.width = Some(request.surface.width() - inline.out_of_bounds);
            }
            (block.inset, inline.inset)
        }
    };
    style.block = Some((block.property, block_inset));
    style.inline = Some((inline.property, inline_inset));

    Placement {
        block,
        inline,
        block_flipped,
        inline_flipped,
        style,
    }
}

/// A box the controller can measure: an anchor or a surface.
pub trait PositionTarget {
    /// Border box in viewport coordinates.
    fn bounding_rect(&self) -> Rect;

    /// Box used for placement.
    ///
    /// Defaults to [`PositionTarget::bounding_rect`]. Override it to anchor to
    /// an inner element rather than the host's own box.
    fn position_rect(&self) -> Rect {
        self.bounding_rect()
    }

    /// Whether the target is still attached to the document.
    fn is_connected(&self) -> bool {
        true
    }

    /// Whether the target can be promoted to the platform top layer.
    fn supports_top_layer(&self) -> bool {
        false
    }

    /// Promotes the target to the top layer.
    fn show_top_layer(&mut self) {}

    /// Removes the target from the top layer.
    fn hide_top_layer(&mut self) {}
}

/// The environment a [`SurfacePositionController`] runs in.
///
/// Hosts own the anchor and surface, measure the viewport, render published
/// styles, and receive the open/close callbacks.
pub trait SurfaceHost {
    /// Anchor target type.
    type Anchor: PositionTarget;
    /// Surface target type.
    type Surface: PositionTarget;

    /// Current anchor, if any.
    fn anchor(&self) -> Option<&Self::Anchor>;
    /// Current surface, if any.
    fn surface(&self) -> Option<&Self::Surface>;
    /// Current surface, mutably.
    fn surface_mut(&mut self) -> Option<&mut Self::Surface>;

    /// Viewport size and scroll offset.
    fn viewport(&self) -> Viewport;

    /// Box of a transparent, fixed, `inset: 0` probe element.
    ///
    /// The probe spans the viewport minus its scrollbars; the difference to
    /// [`Viewport::size`] is the scrollbar thickness. The probe must not
    /// outlive the call.
    fn measure_viewport_probe(&mut self) -> Rect;

    /// Writing direction of the surface.
    fn direction(&self) -> Direction {
        Direction::Ltr
    }

    /// Receives a newly published style and schedules a render.
    fn publish_style(&mut self, style: &SurfaceStyle);

    /// Resolves once the last published style has been rendered.
    fn update_complete(&mut self) -> impl Future<Output = ()>;

    /// Called after the surface has been positioned for a newly opened state.
    fn on_open(&mut self) {}

    /// Called before the surface is hidden; a closing animation may run here.
    fn before_close(&mut self) -> impl Future<Output = ()> {
        core::future::ready(())
    }

    /// Called after the surface has been hidden.
    fn on_close(&mut self) {}
}

/// What [`SurfacePositionController::on_update`] did.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum UpdateOutcome {
    /// Nothing relevant changed.
    Unchanged,
    /// Something changed, but there is no anchor or no surface, or one of
    /// them disappeared during the pass.
    Skipped,
    /// Changes were recorded while closed.
    Recorded,
    /// The surface was positioned for a closed → open transition.
    Opened,
    /// The surface was repositioned while open.
    Repositioned,
    /// The surface was hidden for an open → closed transition.
    Closed,
}

/// Positions a surface next to an anchor and publishes the resulting style.
#[derive(Clone, Debug, Default)]
pub struct SurfacePositionController {
    style: SurfaceStyle,
    last: Option<PositionProps>,
    top_layer: bool,
    revision: u64,
}

impl SurfacePositionController {
    /// Creates a controller with a hidden surface.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The style the host should currently render.
    #[must_use]
    pub fn surface_style(&self) -> &SurfaceStyle {
        &self.style
    }

    /// The last snapshot acted upon by [`SurfacePositionController::on_update`].
    #[must_use]
    pub fn last_props(&self) -> Option<&PositionProps> {
        self.last.as_ref()
    }

    /// Counter bumped every time a style is published.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Runs one positioning pass.
    ///
    /// Returns `None` without touching the style when the anchor or the
    /// surface is missing. If either disappears while waiting for the host to
    /// render, the surface is hidden again and `None` is returned.
    pub async fn position<H: SurfaceHost>(
        &mut self,
        props: &PositionProps,
        host: &mut H,
    ) -> Option<Placement> {
        if host.anchor().is_none() || host.surface().is_none() {
            log::trace!("position: no anchor or surface");
            return None;
        }

        // Read before anything below can toggle scrollbars.
        let viewport = host.viewport();
        let probe = host.measure_viewport_probe();
        let scrollbar = Vec2::new(
            (viewport.size.width - probe.x1).max(0.0),
            (viewport.size.height - probe.y1).max(0.0),
        );

        // Hidden surfaces measure as empty boxes.
        self.publish(host, SurfaceStyle::measuring());
        host.update_complete().await;

        if props.positioning == Positioning::Popover
            && let Some(surface) = host.surface_mut()
            && surface.supports_top_layer()
            && surface.is_connected()
        {
            surface.show_top_layer();
            self.top_layer = true;
        }

        let (Some(anchor), Some(surface)) = (host.anchor(), host.surface()) else {
            log::trace!("position: target disconnected while measuring");
            self.hide(host);
            return None;
        };
        let request = PositionRequest {
            anchor: anchor.position_rect(),
            surface: surface.position_rect(),
            anchor_corner: props.anchor_corner,
            surface_corner: props.surface_corner,
            positioning: props.positioning,
            x_offset: props.x_offset,
            y_offset: props.y_offset,
            strategy: props.strategy,
            viewport,
            scrollbar,
            direction: host.direction(),
            disable_block_flip: props.disable_block_flip,
            disable_inline_flip: props.disable_inline_flip,
        };
        let placement = compute_placement(&request);
        self.publish(host, placement.style.clone());
        Some(placement)
    }

    /// Reacts to a host update.
    ///
    /// Does nothing unless `props` differs from the last snapshot and both
    /// targets are present. Opening positions the surface and then calls
    /// [`SurfaceHost::on_open`]; closing awaits [`SurfaceHost::before_close`],
    /// hides the surface, and calls [`SurfaceHost::on_close`]. Changes while
    /// closed are only recorded.
    ///
    /// A pass abandoned because a target disappeared leaves the surface
    /// hidden, skips `on_open`, and does not record `props`.
    pub async fn on_update<H: SurfaceHost>(
        &mut self,
        props: &PositionProps,
        host: &mut H,
    ) -> UpdateOutcome {
        if self.last.as_ref() == Some(props) {
            return UpdateOutcome::Unchanged;
        }
        if host.anchor().is_none() || host.surface().is_none() {
            return UpdateOutcome::Skipped;
        }

        let was_open = self.last.as_ref().is_some_and(|last| last.is_open);

        match (was_open, props.is_open) {
            (false, true) => {
                if self.position(props, host).await.is_none() {
                    return UpdateOutcome::Skipped;
                }
                self.last = Some(props.clone());
                host.on_open();
                UpdateOutcome::Opened
            }
            (true, true) => {
                if self.position(props, host).await.is_none() {
                    // Hidden now; the next open snapshot is a fresh open.
                    self.mark_closed();
                    return UpdateOutcome::Skipped;
                }
                self.last = Some(props.clone());
                UpdateOutcome::Repositioned
            }
            (true, false) => {
                self.last = Some(props.clone());
                host.before_close().await;
                self.close(host);
                host.on_close();
                UpdateOutcome::Closed
            }
            (false, false) => {
                self.last = Some(props.clone());
                UpdateOutcome::Recorded
            }
        }
    }

    /// Hides the surface and leaves the top layer if it was entered.
    pub fn close<H: SurfaceHost>(&mut self, host: &mut H) {
        self.hide(host);
        self.mark_closed();
    }

    fn hide<H: SurfaceHost>(&mut self, host: &mut H) {
        self.publish(host, SurfaceStyle::hidden());
        if self.top_layer {
            self.top_layer = false;
            if let Some(surface) = host.surface_mut()
                && surface.is_connected()
            {
                surface.hide_top_layer();
            }
        }
    }

    /// Records the closed state without hiding the surface.
    ///
    /// A later open snapshot is then seen as a transition even while a
    /// closing animation keeps the surface on screen.
    pub fn mark_closed(&mut self) {
        if let Some(last) = &mut self.last {
            last.is_open = false;
        }
    }

    fn publish<H: SurfaceHost>(&mut self, host: &mut H, style: SurfaceStyle) {
        self.style = style;
        self.revision = self.revision.wrapping_add(1);
        host.publish_style(&self.style);
    }
}
