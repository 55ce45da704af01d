// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A console host shared by the demos.
//!
//! [`ConsoleHost`] stands in for a document: it keeps the anchor and surface
//! boxes, the menu items, and prints whatever the menu asks it to render.

use core::future::{Future, ready};

use kurbo::{Rect, Size, Vec2};
use understory_anchor::{PositionTarget, SurfaceHost, SurfaceStyle, Viewport};
use understory_list_nav::ListItem;
use understory_menu::{AnimationFrame, MenuEvent, MenuHost};
use understory_typeahead::TypeaheadItem;

/// A fixed box.
#[derive(Debug)]
pub struct Frame(pub Rect);

impl PositionTarget for Frame {
    fn bounding_rect(&self) -> Rect {
        self.0
    }
}

/// A labelled menu item.
#[derive(Debug)]
pub struct MenuRow {
    /// Visible label.
    pub label: &'static str,
    /// Whether the row is disabled.
    pub disabled: bool,
    /// Whether the row is the tab stop.
    pub active: bool,
}

impl MenuRow {
    /// An enabled row.
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            disabled: false,
            active: false,
        }
    }
}

impl ListItem for MenuRow {
    fn is_disabled(&self) -> bool {
        self.disabled
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn activate(&mut self) {
        self.active = true;
    }

    fn deactivate(&mut self) {
        self.active = false;
    }

    fn focus(&mut self) {
        println!("  focus -> {}", self.label);
    }
}

impl TypeaheadItem for MenuRow {
    fn typeahead_text(&self) -> &str {
        self.label
    }
}

/// Prints everything a menu renders.
#[derive(Debug)]
pub struct ConsoleHost {
    /// The button that opens the menu.
    pub anchor: Frame,
    /// The menu panel.
    pub surface: Frame,
    /// Viewport size.
    pub viewport: Size,
    /// Menu rows.
    pub rows: Vec<MenuRow>,
    /// Name of the focused element outside the menu.
    pub focused: Option<&'static str>,
    /// Print every animation frame instead of only settled ones.
    pub verbose_frames: bool,
}

impl ConsoleHost {
    /// A host with a 1024×768 viewport and the given rows.
    pub fn new(anchor: Rect, surface: Size, rows: &[&'static str]) -> Self {
        Self {
            anchor: Frame(anchor),
            surface: Frame(Rect::from_origin_size((0.0, 0.0), surface)),
            viewport: Size::new(1024.0, 768.0),
            rows: rows.iter().copied().map(MenuRow::new).collect(),
            focused: Some("menu-button"),
            verbose_frames: false,
        }
    }

    /// Label of the active row.
    pub fn active_label(&self) -> Option<&'static str> {
        self.rows.iter().find(|row| row.active).map(|row| row.label)
    }
}

impl SurfaceHost for ConsoleHost {
    type Anchor = Frame;
    type Surface = Frame;

    fn anchor(&self) -> Option<&Frame> {
        Some(&self.anchor)
    }

    fn surface(&self) -> Option<&Frame> {
        Some(&self.surface)
    }

    fn surface_mut(&mut self) -> Option<&mut Frame> {
        Some(&mut self.surface)
    }

    fn viewport(&self) -> Viewport {
        Viewport {
            size: self.viewport,
            scroll: Vec2::ZERO,
        }
    }

    fn measure_viewport_probe(&mut self) -> Rect {
        self.viewport.to_rect()
    }

    fn publish_style(&mut self, style: &SurfaceStyle) {
        println!("  style: {}", style.css());
    }

    fn update_complete(&mut self) -> impl Future<Output = ()> {
        ready(())
    }
}

impl MenuHost for ConsoleHost {
    type Item = MenuRow;
    type Focus = &'static str;

    fn items(&self) -> &[MenuRow] {
        &self.rows
    }

    fn items_mut(&mut self) -> &mut [MenuRow] {
        &mut self.rows
    }

    fn focused(&self) -> Option<&'static str> {
        self.focused
    }

    fn restore_focus(&mut self, target: &'static str) {
        println!("  focus -> {target}");
        self.focused = Some(target);
    }

    fn focus_list_root(&mut self) {
        println!("  focus -> list");
    }

    fn apply_frame(&mut self, frame: &AnimationFrame) {
        if frame.settled {
            println!("  frame: settled");
        } else if self.verbose_frames {
            println!(
                "  frame: height={:?} opacity={:?} items={:?}",
                frame.surface_height, frame.surface_opacity, frame.item_opacity
            );
        }
    }

    fn dispatch(&mut self, event: MenuEvent) {
        println!("  event: {event:?}");
    }
}
