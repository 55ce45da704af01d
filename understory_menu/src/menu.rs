// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The menu state machine.

use understory_anchor::{
    Direction, PositionTarget, SurfaceHost, SurfacePositionController, SurfaceStyle,
    UpdateOutcome,
};
use understory_list_nav::{Key, KeyEvent, ListNavigation, NamedKey, NavKeys, Request, WrapMode};
use understory_typeahead::{Typeahead, TypeaheadItem};

use crate::animation::{
    AnimationFrame, AnimationKind, AnimationOutcome, AnimationSignal, AnimationTask, Completion,
    close_tracks, open_tracks,
};
use crate::config::{DefaultFocus, MenuConfig};
use crate::lifecycle::{CloseReason, MenuEvent, MenuRequest, MenuState, Region};

/// The environment a [`Menu`] runs in.
///
/// Extends [`SurfaceHost`] with the menu's items, focus handling, animation
/// rendering, and notifications.
///
/// [`SurfaceHost::on_open`] runs once the surface is placed and
/// [`SurfaceHost::on_close`] once it is hidden again. The close animation
/// stands in for [`SurfaceHost::before_close`], which a menu never awaits.
pub trait MenuHost: SurfaceHost {
    /// Item type.
    type Item: TypeaheadItem;
    /// Handle to a focusable element outside the menu.
    type Focus;

    /// Items in navigation order.
    fn items(&self) -> &[Self::Item];
    /// Items in navigation order, mutably.
    fn items_mut(&mut self) -> &mut [Self::Item];

    /// The element that currently has focus.
    fn focused(&self) -> Option<Self::Focus>;
    /// Moves focus back to `target`.
    fn restore_focus(&mut self, target: Self::Focus);
    /// Focuses the list container itself.
    fn focus_list_root(&mut self);

    /// Whether the element wrapping the items exists. Animations need it.
    fn slot_present(&self) -> bool {
        true
    }

    /// Renders one animation frame.
    fn apply_frame(&mut self, frame: &AnimationFrame);

    /// Receives a lifecycle notification.
    fn dispatch(&mut self, event: MenuEvent);
}

/// A headless menu: positioning, open/close animation, focus, and dismissal.
///
/// `F` is the host's [`MenuHost::Focus`] type, used to remember what had
/// focus before the menu opened.
#[derive(Debug)]
pub struct Menu<F> {
    config: MenuConfig,
    state: MenuState,
    position: SurfacePositionController,
    typeahead: Typeahead,
    signal: AnimationSignal,
    animation: Option<AnimationTask>,
    captured_focus: Option<F>,
    pointer_down: Option<Region>,
}

impl<F> Default for Menu<F> {
    fn default() -> Self {
        Self::new(MenuConfig::default())
    }
}

impl<F> Menu<F> {
    /// Creates a closed menu.
    #[must_use]
    pub fn new(config: MenuConfig) -> Self {
        Self {
            typeahead: Typeahead::with_delay(config.typeahead_delay),
            config,
            state: MenuState::Closed,
            position: SurfacePositionController::new(),
            signal: AnimationSignal::default(),
            animation: None,
            captured_focus: None,
            pointer_down: None,
        }
    }

    /// Current configuration.
    #[must_use]
    pub fn config(&self) -> &MenuConfig {
        &self.config
    }

    /// Replaces the configuration.
    ///
    /// Call [`Menu::update`] afterwards to reposition an open menu.
    pub fn set_config(&mut self, config: MenuConfig) {
        self.typeahead.set_delay(config.typeahead_delay);
        self.config = config;
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> MenuState {
        self.state
    }

    /// Whether the menu is open or opening.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// Style the host should render on the surface.
    #[must_use]
    pub fn surface_style(&self) -> &SurfaceStyle {
        self.position.surface_style()
    }

    /// The positioning controller.
    #[must_use]
    pub fn positioner(&self) -> &SurfacePositionController {
        &self.position
    }

    /// The typeahead controller.
    #[must_use]
    pub fn typeahead(&self) -> &Typeahead {
        &self.typeahead
    }

    /// The running animation, if any.
    #[must_use]
    pub fn animation(&self) -> Option<&AnimationTask> {
        self.animation.as_ref()
    }

    fn navigation<H: SurfaceHost>(&self, host: &H) -> ListNavigation {
        let rtl = host.direction() == Direction::Rtl;
        ListNavigation {
            wrap: if self.config.no_navigation_wrap {
                WrapMode::Never
            } else {
                WrapMode::Wrap
            },
            rtl,
            navigable_keys: if self.config.is_submenu {
                NavKeys::submenu(rtl)
            } else {
                NavKeys::TOP_LEVEL
            },
        }
    }

    /// Opens the menu.
    ///
    /// Allowed while closed or closing; a running close animation is aborted.
    /// Returns the completion of the open animation, or `None` when the menu
    /// was already open or could not be positioned.
    pub async fn open<H: MenuHost<Focus = F>>(&mut self, host: &mut H) -> Option<Completion> {
        let was_closing = self.state == MenuState::ClosingAnimation;
        match self.state {
            MenuState::Closed => {}
            MenuState::ClosingAnimation => self.abort_animation(host),
            state => {
                log::trace!("open ignored while {state:?}");
                return None;
            }
        }

        // Before anything can move focus.
        self.captured_focus = host.focused();
        self.state = MenuState::Positioning;
        let props = self.config.position_props(true);
        match self.position.on_update(&props, host).await {
            UpdateOutcome::Opened | UpdateOutcome::Repositioned => {}
            outcome => {
                log::debug!("menu open abandoned: {outcome:?}");
                self.captured_focus = None;
                if was_closing {
                    // The aborted close still has to hide the surface.
                    self.complete_close(host, AnimationOutcome::Skipped);
                }
                self.state = MenuState::Closed;
                return None;
            }
        }

        if self.config.default_focus != DefaultFocus::None {
            let navigation = self.navigation(host);
            navigation.on_deactivate_items(host.items_mut());
        }

        log::debug!("menu opening");
        host.dispatch(MenuEvent::Opening);
        if self.config.quick {
            self.complete_open(host, AnimationOutcome::Finished);
            return Some(Completion::resolved(AnimationOutcome::Finished));
        }
        self.state = MenuState::OpeningAnimation;
        Some(self.start_animation(AnimationKind::Open, host))
    }

    /// Closes the menu, restoring focus unless configured not to.
    ///
    /// The surface is hidden and [`SurfaceHost::on_close`] runs when the
    /// close animation ends. Returns the completion of the close animation,
    /// or `None` when the menu was not open.
    pub fn close<H: MenuHost<Focus = F>>(&mut self, host: &mut H) -> Option<Completion> {
        let restore = !self.config.skip_restore_focus;
        self.close_with(host, restore)
    }

    fn close_with<H: MenuHost<Focus = F>>(
        &mut self,
        host: &mut H,
        restore_focus: bool,
    ) -> Option<Completion> {
        if !self.state.is_open() {
            return None;
        }
        self.abort_animation(host);

        self.state = MenuState::BeforeClose;
        // Positioning must not see the menu as open while it animates out.
        self.position.mark_closed();
        if let Some(target) = self.captured_focus.take()
            && restore_focus
        {
            host.restore_focus(target);
        }

        log::debug!("menu closing");
        host.dispatch(MenuEvent::Closing);
        if self.config.quick {
            self.complete_close(host, AnimationOutcome::Finished);
            return Some(Completion::resolved(AnimationOutcome::Finished));
        }
        self.state = MenuState::ClosingAnimation;
        Some(self.start_animation(AnimationKind::Close, host))
    }

    /// Advances the running animation to `now_ms`.
    ///
    /// Returns the outcome when the animation ended on this tick.
    pub fn tick<H: MenuHost<Focus = F>>(
        &mut self,
        now_ms: u64,
        host: &mut H,
    ) -> Option<AnimationOutcome> {
        let task = self.animation.as_mut()?;
        let kind = task.kind();
        let outcome = if task.is_cancelled() {
            AnimationOutcome::Aborted
        } else if host.surface().is_none() || !host.slot_present() {
            AnimationOutcome::Skipped
        } else {
            let frame = task.sample(now_ms);
            log::trace!("{kind:?} frame at {now_ms}: {frame:?}");
            host.apply_frame(&frame);
            if !frame.settled {
                return None;
            }
            AnimationOutcome::Finished
        };

        if let Some(task) = self.animation.take() {
            task.finish(outcome);
        }
        if outcome == AnimationOutcome::Skipped {
            host.apply_frame(&AnimationFrame::settled());
        }
        self.complete(kind, outcome, host);
        Some(outcome)
    }

    /// Forwards configuration changes to the positioner.
    ///
    /// An open menu is repositioned; changes to a closed menu are recorded
    /// for its next open.
    pub async fn update<H: MenuHost<Focus = F>>(&mut self, host: &mut H) -> UpdateOutcome {
        let open = matches!(
            self.state,
            MenuState::OpeningAnimation | MenuState::FocusingDefault | MenuState::Open
        );
        let props = self.config.position_props(open);
        self.position.on_update(&props, host).await
    }

    /// Handles a keydown inside the menu at `now_ms`.
    ///
    /// Escape closes the menu, as does the closing arrow of a submenu (left,
    /// or right in RTL). Other keys go to typeahead and then to list
    /// navigation. Returns the newly active item.
    pub fn handle_keydown<H: MenuHost<Focus = F>>(
        &mut self,
        event: &mut KeyEvent,
        now_ms: u64,
        host: &mut H,
    ) -> Option<usize> {
        if !self.state.is_open() || event.default_prevented() {
            return None;
        }
        if event.key == Key::Named(NamedKey::Escape) || self.is_closing_arrow(&event.key, host) {
            event.prevent_default();
            self.close(host);
            return None;
        }
        let navigation = self.navigation(host);
        if let Some(found) = self.typeahead.on_keydown(event, now_ms, host.items_mut()) {
            return Some(found);
        }
        navigation.handle_keydown(event, host.items_mut())
    }

    fn is_closing_arrow<H: SurfaceHost>(&self, key: &Key, host: &H) -> bool {
        if !self.config.is_submenu {
            return false;
        }
        let closing = if host.direction() == Direction::Rtl {
            NamedKey::ArrowRight
        } else {
            NamedKey::ArrowLeft
        };
        *key == Key::Named(closing)
    }

    /// Records where a pointer went down. Call from a capturing window listener.
    pub fn handle_pointerdown(&mut self, region: Region) {
        self.pointer_down = Some(region);
    }

    /// Handles a click anywhere in the window.
    ///
    /// Clicks outside the menu and its anchor close it unless
    /// [`MenuConfig::stay_open_on_outside_click`] is set. Returns whether the
    /// menu started closing.
    pub fn handle_window_click<H: MenuHost<Focus = F>>(
        &mut self,
        region: Region,
        host: &mut H,
    ) -> bool {
        self.pointer_down = None;
        if region != Region::Outside || self.config.stay_open_on_outside_click {
            return false;
        }
        self.close(host).is_some()
    }

    /// Handles focus leaving an element of the menu.
    ///
    /// `related` is where focus went, `None` when it went nowhere. Focus moving
    /// within the menu, to the anchor during a click, or to nothing during a
    /// click on the menu itself keeps the menu open. Otherwise the menu closes
    /// without restoring focus. A recorded pointer-down excuses only the next
    /// focus-out. Returns whether the menu started closing.
    pub fn handle_focusout<H: MenuHost<Focus = F>>(
        &mut self,
        related: Option<Region>,
        host: &mut H,
    ) -> bool {
        if self.config.stay_open_on_focusout || !self.state.is_open() {
            return false;
        }
        if related == Some(Region::Menu) {
            return false;
        }
        let pointer = self.pointer_down.take();
        if pointer == Some(Region::Anchor) {
            return false;
        }
        match related {
            Some(Region::Anchor) if pointer.is_some() => return false,
            None if pointer == Some(Region::Menu) => return false,
            _ => {}
        }
        self.close_with(host, false).is_some()
    }

    /// Handles a request bubbling up from an item or a nested menu.
    ///
    /// Returns whether the request was consumed; unconsumed requests should
    /// keep bubbling.
    pub fn handle_request<H: MenuHost<Focus = F>>(
        &mut self,
        request: &mut Request<MenuRequest>,
        host: &mut H,
    ) -> bool {
        match request.message {
            MenuRequest::CloseMenu { reason } => {
                // Tab already moves focus on its own.
                let tabbed = reason == CloseReason::Keydown(Key::Named(NamedKey::Tab));
                let restore = !self.config.skip_restore_focus && !tabbed;
                self.close_with(host, restore);
            }
            MenuRequest::List(message) => {
                let navigation = self.navigation(host);
                let mut inner = Request::new(request.origin, message);
                if !navigation.handle_request(&mut inner, host.items_mut()) {
                    return false;
                }
            }
            MenuRequest::ActivateTypeahead => self.typeahead.set_active(true),
            MenuRequest::DeactivateTypeahead => self.typeahead.set_active(false),
            MenuRequest::StayOpenOnFocusout => self.config.stay_open_on_focusout = true,
            MenuRequest::CloseOnFocusout => self.config.stay_open_on_focusout = false,
        }
        request.mark_handled();
        true
    }

    /// Re-establishes the tab stop after the host's items changed.
    pub fn handle_slot_change<H: MenuHost<Focus = F>>(&mut self, host: &mut H) -> Option<usize> {
        let navigation = self.navigation(host);
        navigation.on_slot_change(host.items_mut())
    }

    fn start_animation<H: MenuHost<Focus = F>>(
        &mut self,
        kind: AnimationKind,
        host: &mut H,
    ) -> Completion {
        let token = self.signal.rearm();
        let height = host.surface().map(|surface| {
            self.position
                .surface_style()
                .height
                .unwrap_or_else(|| surface.position_rect().height())
        });
        let Some(height) = height.filter(|_| host.slot_present()) else {
            log::debug!("{kind:?} animation skipped: no surface or slot");
            token.cancel();
            self.complete(kind, AnimationOutcome::Skipped, host);
            return Completion::resolved(AnimationOutcome::Skipped);
        };

        let items = host.items().len();
        let direction = self.config.open_direction();
        let tracks = match kind {
            AnimationKind::Open => open_tracks(height, items, direction),
            AnimationKind::Close => close_tracks(height, items, direction),
        };
        let task = AnimationTask::new(kind, tracks, items, token);
        let completion = task.completion();
        self.animation = Some(task);
        completion
    }

    fn abort_animation<H: MenuHost<Focus = F>>(&mut self, host: &mut H) {
        self.signal.abort();
        if let Some(task) = self.animation.take() {
            log::debug!("{:?} animation aborted", task.kind());
            task.finish(AnimationOutcome::Aborted);
            host.apply_frame(&AnimationFrame::settled());
        }
    }

    fn complete<H: MenuHost<Focus = F>>(
        &mut self,
        kind: AnimationKind,
        outcome: AnimationOutcome,
        host: &mut H,
    ) {
        if outcome == AnimationOutcome::Aborted {
            return;
        }
        match kind {
            AnimationKind::Open => self.complete_open(host, outcome),
            AnimationKind::Close => self.complete_close(host, outcome),
        }
    }

    fn complete_open<H: MenuHost<Focus = F>>(&mut self, host: &mut H, outcome: AnimationOutcome) {
        if outcome == AnimationOutcome::Aborted {
            return;
        }
        self.state = MenuState::FocusingDefault;
        let navigation = self.navigation(host);
        match self.config.default_focus {
            DefaultFocus::None => {}
            DefaultFocus::ListRoot => host.focus_list_root(),
            DefaultFocus::FirstItem => {
                if navigation.activate_first_item(host.items_mut()).is_none() {
                    host.focus_list_root();
                }
            }
            DefaultFocus::LastItem => {
                if navigation.activate_last_item(host.items_mut()).is_none() {
                    host.focus_list_root();
                }
            }
        }
        self.state = MenuState::Open;
        log::debug!("menu opened ({outcome:?})");
        host.dispatch(MenuEvent::Opened);
    }

    fn complete_close<H: MenuHost<Focus = F>>(&mut self, host: &mut H, outcome: AnimationOutcome) {
        if outcome == AnimationOutcome::Aborted {
            return;
        }
        self.position.close(host);
        host.on_close();
        self.state = MenuState::Closed;
        self.typeahead.end();
        self.pointer_down = None;
        log::debug!("menu closed ({outcome:?})");
        host.dispatch(MenuEvent::Closed);
    }
}
