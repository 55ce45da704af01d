// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Menu lifecycle basics.
//!
//! Open a menu under a button, drive its open animation with a fake clock,
//! navigate with arrows and typeahead, then dismiss it with Escape.
//!
//! Run:
//! - `cargo run -p understory_demos --example menu_basics`

use kurbo::{Rect, Size};
use pollster::block_on;
use understory_demos::ConsoleHost;
use understory_list_nav::{KeyEvent, NamedKey};
use understory_menu::{Menu, MenuConfig};

fn main() {
    let mut host = ConsoleHost::new(
        Rect::new(24.0, 700.0, 124.0, 732.0),
        Size::new(180.0, 160.0),
        &["Cut", "Copy", "Paste", "Paste special", "Select all"],
    );
    host.verbose_frames = true;
    let mut menu = Menu::new(MenuConfig::default());

    // The button sits near the bottom, so the menu flips above it.
    println!("open:");
    let opened = block_on(menu.open(&mut host)).expect("anchor and surface are present");

    let mut now = 0;
    while menu.tick(now, &mut host).is_none() {
        now += 100;
    }
    println!("open animation: {:?}", opened.outcome());
    println!("active: {:?}", host.active_label());

    println!("keys:");
    for mut event in [
        KeyEvent::named(NamedKey::ArrowDown),
        KeyEvent::named(NamedKey::End),
        KeyEvent::named(NamedKey::ArrowDown),
    ] {
        let moved = menu.handle_keydown(&mut event, now, &mut host);
        println!("{:?} -> {moved:?}", event.key);
    }

    println!("typeahead:");
    for c in "paste s".chars() {
        now += 50;
        let mut event = KeyEvent::character(c);
        menu.handle_keydown(&mut event, now, &mut host);
    }
    println!("active: {:?}", host.active_label());

    println!("escape:");
    let mut escape = KeyEvent::named(NamedKey::Escape);
    menu.handle_keydown(&mut escape, now, &mut host);
    host.verbose_frames = false;
    while menu.tick(now, &mut host).is_none() {
        now += 50;
    }
    println!("state: {:?}", menu.state());
}
