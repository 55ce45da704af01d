// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Open and close animations as explicit, cancellable tasks.
//!
//! An [`AnimationTask`] is a set of [`Track`]s sampled against a clock the
//! host advances. The task owns a [`CancelToken`] handed out by the menu's
//! [`AnimationSignal`], and a [`Completion`] future that resolves exactly once
//! with an [`AnimationOutcome`]. Re-arming the signal cancels the previous
//! token, so starting a new animation always aborts the old one.
//!
//! ```
//! use understory_menu::animation::{AnimationKind, AnimationOutcome, AnimationSignal, AnimationTask, open_tracks};
//! use understory_menu::OpenDirection;
//!
//! let mut signal = AnimationSignal::default();
//! let mut task = AnimationTask::new(
//!     AnimationKind::Open,
//!     open_tracks(200.0, 4, OpenDirection::Down),
//!     4,
//!     signal.rearm(),
//! );
//! let completion = task.completion();
//!
//! let frame = task.sample(1_000);
//! assert_eq!(frame.surface_height, Some(0.0));
//! assert!(task.sample(1_500).settled);
//!
//! task.finish(AnimationOutcome::Finished);
//! assert_eq!(completion.outcome(), Some(AnimationOutcome::Finished));
//! ```

use alloc::rc::Rc;
use alloc::vec;
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};
use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll, Waker};

use kurbo::{CubicBez, ParamCurve, Point};

use crate::config::OpenDirection;

/// Total open duration.
pub const OPEN_DURATION_MS: f64 = 500.0;
/// Surface fade-in duration when opening.
pub const OPEN_SURFACE_OPACITY_MS: f64 = 50.0;
/// Per-item fade-in duration when opening.
pub const OPEN_ITEM_OPACITY_MS: f64 = 250.0;

/// Total close duration.
pub const CLOSE_DURATION_MS: f64 = 150.0;
/// Surface fade-out duration when closing.
pub const CLOSE_SURFACE_OPACITY_MS: f64 = 50.0;
/// Per-item fade-out duration when closing.
pub const CLOSE_ITEM_OPACITY_MS: f64 = 50.0;
/// Delay before the first item starts fading out.
pub const CLOSE_ITEM_INITIAL_DELAY_MS: f64 = 50.0;
/// Fraction of the full height the surface shrinks to while closing.
pub const CLOSE_END_HEIGHT: f64 = 0.35;

/// Timing function of a track.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Easing {
    /// Constant rate.
    Linear,
    /// CSS `cubic-bezier(x1, y1, x2, y2)`.
    CubicBezier {
        /// First control point x.
        x1: f64,
        /// First control point y.
        y1: f64,
        /// Second control point x.
        x2: f64,
        /// Second control point y.
        y2: f64,
    },
}

impl Easing {
    /// Material emphasized easing, used for opening.
    pub const EMPHASIZED: Self = Self::CubicBezier {
        x1: 0.3,
        y1: 0.0,
        x2: 0.0,
        y2: 1.0,
    };

    /// Material emphasized-accelerate easing, used for closing.
    pub const EMPHASIZED_ACCELERATE: Self = Self::CubicBezier {
        x1: 0.3,
        y1: 0.0,
        x2: 0.8,
        y2: 0.15,
    };

    /// Maps linear progress `t` in `[0, 1]` to eased progress.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        match self {
            Self::Linear => t,
            Self::CubicBezier { x1, y1, x2, y2 } => {
                let curve = CubicBez::new(
                    Point::ZERO,
                    Point::new(x1, y1),
                    Point::new(x2, y2),
                    Point::new(1.0, 1.0),
                );
                // x(s) is monotonic for control x in [0, 1]; bisect for s.
                let (mut lo, mut hi) = (0.0, 1.0);
                for _ in 0..40 {
                    let mid = 0.5 * (lo + hi);
                    if curve.eval(mid).x < t {
                        lo = mid;
                    } else {
                        hi = mid;
                    }
                }
                curve.eval(0.5 * (lo + hi)).y
            }
        }
    }
}

/// What a track animates.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TrackTarget {
    /// Surface height in pixels.
    SurfaceHeight,
    /// Vertical translation of the item slot, keeping the far edge pinned.
    SlotTranslateY,
    /// Surface opacity.
    SurfaceOpacity,
    /// Opacity of the item at this index.
    ItemOpacity(usize),
}

/// One animated value.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Track {
    /// Animated property.
    pub target: TrackTarget,
    /// Value before and at the start.
    pub from: f64,
    /// Value at the end and after.
    pub to: f64,
    /// Start offset in milliseconds.
    pub delay: f64,
    /// Duration in milliseconds.
    pub duration: f64,
    /// Timing function.
    pub easing: Easing,
}

impl Track {
    /// Time at which the track has reached `to`.
    #[must_use]
    pub fn end_time(&self) -> f64 {
        self.delay + self.duration
    }

    /// Value at `elapsed` milliseconds after the task started.
    #[must_use]
    pub fn sample(&self, elapsed: f64) -> f64 {
        if self.duration <= 0.0 {
            return if elapsed >= self.delay { self.to } else { self.from };
        }
        let t = (elapsed - self.delay) / self.duration;
        self.from + (self.to - self.from) * self.easing.apply(t)
    }
}

/// Tracks for opening a surface of `height` with `items` items.
///
/// The height grows from zero. When opening upward the slot is translated by
/// the missing height so that the last item stays pinned to the anchor, and
/// items fade in from the bottom.
#[must_use]
pub fn open_tracks(height: f64, items: usize, direction: OpenDirection) -> Vec<Track> {
    let upward = direction == OpenDirection::Up;
    let mut tracks = vec![
        Track {
            target: TrackTarget::SurfaceHeight,
            from: 0.0,
            to: height,
            delay: 0.0,
            duration: OPEN_DURATION_MS,
            easing: Easing::EMPHASIZED,
        },
        Track {
            target: TrackTarget::SurfaceOpacity,
            from: 0.0,
            to: 1.0,
            delay: 0.0,
            duration: OPEN_SURFACE_OPACITY_MS,
            easing: Easing::Linear,
        },
    ];
    if upward {
        tracks.push(Track {
            target: TrackTarget::SlotTranslateY,
            from: -height,
            to: 0.0,
            delay: 0.0,
            duration: OPEN_DURATION_MS,
            easing: Easing::EMPHASIZED,
        });
    }
    if items > 0 {
        let stagger = (OPEN_DURATION_MS - OPEN_ITEM_OPACITY_MS) / items as f64;
        for i in 0..items {
            let index = if upward { items - 1 - i } else { i };
            tracks.push(Track {
                target: TrackTarget::ItemOpacity(index),
                from: 0.0,
                to: 1.0,
                delay: stagger * i as f64,
                duration: OPEN_ITEM_OPACITY_MS,
                easing: Easing::Linear,
            });
        }
    }
    tracks
}

/// Tracks for closing a surface of `height` with `items` items.
///
/// Mirrors [`open_tracks`]: the surface shrinks to [`CLOSE_END_HEIGHT`] of its
/// height, fades out after a delay, and items fade out toward the anchor.
#[must_use]
pub fn close_tracks(height: f64, items: usize, direction: OpenDirection) -> Vec<Track> {
    // A menu that opened upward closes downward.
    let downward = direction == OpenDirection::Up;
    let mut tracks = vec![
        Track {
            target: TrackTarget::SurfaceHeight,
            from: height,
            to: height * CLOSE_END_HEIGHT,
            delay: 0.0,
            duration: CLOSE_DURATION_MS,
            easing: Easing::EMPHASIZED_ACCELERATE,
        },
        Track {
            target: TrackTarget::SurfaceOpacity,
            from: 1.0,
            to: 0.0,
            delay: CLOSE_DURATION_MS - CLOSE_SURFACE_OPACITY_MS,
            duration: CLOSE_SURFACE_OPACITY_MS,
            easing: Easing::Linear,
        },
    ];
    if downward {
        tracks.push(Track {
            target: TrackTarget::SlotTranslateY,
            from: 0.0,
            to: -height * (1.0 - CLOSE_END_HEIGHT),
            delay: 0.0,
            duration: CLOSE_DURATION_MS,
            easing: Easing::EMPHASIZED_ACCELERATE,
        });
    }
    if items > 0 {
        let stagger = (CLOSE_DURATION_MS - CLOSE_ITEM_INITIAL_DELAY_MS - CLOSE_ITEM_OPACITY_MS)
            / items as f64;
        for i in 0..items {
            let index = if downward { items - 1 - i } else { i };
            tracks.push(Track {
                target: TrackTarget::ItemOpacity(index),
                from: 1.0,
                to: 0.0,
                delay: CLOSE_ITEM_INITIAL_DELAY_MS + stagger * i as f64,
                duration: CLOSE_ITEM_OPACITY_MS,
                easing: Easing::Linear,
            });
        }
    }
    tracks
}

/// How an animation ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AnimationOutcome {
    /// Ran to the end.
    Finished,
    /// Cancelled by a newer open or close.
    Aborted,
    /// Never ran because the surface or slot was missing.
    Skipped,
}

/// Cancellation flag shared between a task and its signal.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    /// Creates a live token.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancels the token and every clone of it.
    pub fn cancel(&self) {
        self.0.set(true);
    }

    /// Whether the token was cancelled.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

/// Shared cancellation signal, re-armed by every animate call.
#[derive(Debug, Default)]
pub struct AnimationSignal {
    current: Option<CancelToken>,
}

impl AnimationSignal {
    /// Cancels the outstanding token, if any, and hands out a fresh one.
    pub fn rearm(&mut self) -> CancelToken {
        self.abort();
        let token = CancelToken::new();
        self.current = Some(token.clone());
        token
    }

    /// Cancels the outstanding token.
    pub fn abort(&mut self) {
        if let Some(token) = self.current.take() {
            token.cancel();
        }
    }
}

#[derive(Debug, Default)]
struct CompletionState {
    outcome: Option<AnimationOutcome>,
    waker: Option<Waker>,
}

/// Resolves once with the outcome of an animation.
///
/// Awaiting a completion never hangs past the end of its task: finishing,
/// aborting and skipping all resolve it.
#[derive(Clone, Debug, Default)]
pub struct Completion(Rc<RefCell<CompletionState>>);

impl Completion {
    /// Creates an unresolved completion.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a completion that is already resolved.
    #[must_use]
    pub fn resolved(outcome: AnimationOutcome) -> Self {
        let completion = Self::new();
        completion.resolve(outcome);
        completion
    }

    /// The outcome, if resolved.
    #[must_use]
    pub fn outcome(&self) -> Option<AnimationOutcome> {
        self.0.borrow().outcome
    }

    /// Resolves the completion. Only the first call has an effect.
    pub fn resolve(&self, outcome: AnimationOutcome) -> bool {
        let waker = {
            let mut state = self.0.borrow_mut();
            if state.outcome.is_some() {
                return false;
            }
            state.outcome = Some(outcome);
            state.waker.take()
        };
        if let Some(waker) = waker {
            waker.wake();
        }
        true
    }
}

impl Future for Completion {
    type Output = AnimationOutcome;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let mut state = self.0.borrow_mut();
        match state.outcome {
            Some(outcome) => Poll::Ready(outcome),
            None => {
                state.waker = Some(cx.waker().clone());
                Poll::Pending
            }
        }
    }
}

/// Which way an animation runs.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AnimationKind {
    /// Opening.
    Open,
    /// Closing.
    Close,
}

/// Animated values for one frame.
///
/// `None` and an empty item list mean "no override". A settled frame carries
/// no overrides; hosts drop any animated styles when they see one.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AnimationFrame {
    /// Surface height override.
    pub surface_height: Option<f64>,
    /// Slot translation override.
    pub slot_translate_y: Option<f64>,
    /// Surface opacity override.
    pub surface_opacity: Option<f64>,
    /// Item opacity overrides, by item index.
    pub item_opacity: Vec<f64>,
    /// Whether the animation has ended.
    pub settled: bool,
}

impl AnimationFrame {
    /// A frame without overrides that ends the animation.
    #[must_use]
    pub fn settled() -> Self {
        Self {
            settled: true,
            ..Self::default()
        }
    }
}

/// A running animation: tracks, cancellation token, and completion.
#[derive(Debug)]
pub struct AnimationTask {
    kind: AnimationKind,
    tracks: Vec<Track>,
    items: usize,
    start: Option<u64>,
    token: CancelToken,
    completion: Completion,
}

impl AnimationTask {
    /// Creates a task. Its timeline starts at the first [`AnimationTask::sample`].
    #[must_use]
    pub fn new(kind: AnimationKind, tracks: Vec<Track>, items: usize, token: CancelToken) -> Self {
        Self {
            kind,
            tracks,
            items,
            start: None,
            token,
            completion: Completion::new(),
        }
    }

    /// Direction of the task.
    #[must_use]
    pub fn kind(&self) -> AnimationKind {
        self.kind
    }

    /// The task's tracks.
    #[must_use]
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// A handle to the task's completion.
    #[must_use]
    pub fn completion(&self) -> Completion {
        self.completion.clone()
    }

    /// Whether the task's token was cancelled.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Length of the timeline in milliseconds.
    #[must_use]
    pub fn duration(&self) -> f64 {
        self.tracks.iter().map(Track::end_time).fold(0.0, f64::max)
    }

    /// Samples every track at `now_ms`.
    pub fn sample(&mut self, now_ms: u64) -> AnimationFrame {
        let start = *self.start.get_or_insert(now_ms);
        let elapsed = now_ms.saturating_sub(start) as f64;
        if elapsed >= self.duration() {
            return AnimationFrame::settled();
        }

        let mut frame = AnimationFrame {
            item_opacity: vec![1.0; self.items],
            ..AnimationFrame::default()
        };
        for track in &self.tracks {
            let value = track.sample(elapsed);
            match track.target {
                TrackTarget::SurfaceHeight => frame.surface_height = Some(value),
                TrackTarget::SlotTranslateY => frame.slot_translate_y = Some(value),
                TrackTarget::SurfaceOpacity => frame.surface_opacity = Some(value),
                TrackTarget::ItemOpacity(index) => {
                    if let Some(slot) = frame.item_opacity.get_mut(index) {
                        *slot = value;
                    }
                }
            }
        }
        frame
    }

    /// Resolves the completion and cancels the token.
    pub fn finish(&self, outcome: AnimationOutcome) -> bool {
        self.token.cancel();
        self.completion.resolve(outcome)
    }
}
