// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `understory_typeahead` crate.

use understory_list_nav::{Key, KeyEvent, ListItem, NamedKey};
use understory_typeahead::{DEFAULT_DELAY_MS, Typeahead, TypeaheadItem};

#[derive(Debug)]
struct Item {
    label: &'static str,
    disabled: bool,
    active: bool,
    focused: bool,
}

impl ListItem for Item {
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
        self.focused = false;
    }

    fn focus(&mut self) {
        self.focused = true;
    }
}

impl TypeaheadItem for Item {
    fn typeahead_text(&self) -> &str {
        self.label
    }
}

fn items(labels: &[&'static str]) -> Vec<Item> {
    labels
        .iter()
        .map(|&label| Item {
            label,
            disabled: false,
            active: false,
            focused: false,
        })
        .collect()
}

fn type_char(t: &mut Typeahead, c: char, now: u64, items: &mut [Item]) -> Option<usize> {
    t.on_keydown(&mut KeyEvent::character(c), now, items)
}

fn active(items: &[Item]) -> Vec<&'static str> {
    items
        .iter()
        .filter(|item| item.active)
        .map(|item| item.label)
        .collect()
}

#[test]
fn repeated_character_cycles_candidates() {
    let mut list = items(&["Cat", "Car", "Dog"]);
    let mut t = Typeahead::new();
    assert_eq!(type_char(&mut t, 'c', 0, &mut list), Some(0));
    assert_eq!(active(&list), ["Cat"]);
    assert_eq!(type_char(&mut t, 'c', 100, &mut list), Some(1));
    assert_eq!(active(&list), ["Car"]);
    assert_eq!(type_char(&mut t, 'c', 200, &mut list), Some(0));
    assert_eq!(active(&list), ["Cat"]);
    assert!(list[0].focused);
}

#[test]
fn pause_starts_a_new_buffer() {
    let mut list = items(&["Cat", "Cd player", "Dog"]);
    let mut t = Typeahead::new();
    type_char(&mut t, 'c', 0, &mut list);
    assert_eq!(type_char(&mut t, 'd', DEFAULT_DELAY_MS + 1, &mut list), Some(2));
    assert_eq!(t.buffer(), "d");
}

#[test]
fn within_delay_builds_a_prefix() {
    let mut list = items(&["Cat", "Cd player", "Dog"]);
    let mut t = Typeahead::new();
    type_char(&mut t, 'c', 0, &mut list);
    assert_eq!(type_char(&mut t, 'd', DEFAULT_DELAY_MS, &mut list), Some(1));
    assert!(t.is_typing_in_progress(DEFAULT_DELAY_MS + 10));
    assert!(!t.is_typing_in_progress(2 * DEFAULT_DELAY_MS + 1));
}

#[test]
fn cycling_starts_after_the_active_item() {
    let mut list = items(&["Apple", "Banana", "Blueberry", "Cherry"]);
    list[2].active = true;
    let mut t = Typeahead::new();
    // Starts after Blueberry and wraps to Banana.
    assert_eq!(type_char(&mut t, 'b', 0, &mut list), Some(1));
    assert_eq!(active(&list), ["Banana"]);
}

#[test]
fn disabled_items_never_match() {
    let mut list = items(&["Alpha", "Beta", "Bravo"]);
    list[1].disabled = true;
    let mut t = Typeahead::new();
    assert_eq!(type_char(&mut t, 'b', 0, &mut list), Some(2));
    assert_eq!(type_char(&mut t, 'b', 10, &mut list), Some(2));
}

#[test]
fn no_match_keeps_the_active_item_and_ends_the_session() {
    let mut list = items(&["Alpha", "Beta"]);
    let mut t = Typeahead::new();
    type_char(&mut t, 'b', 0, &mut list);
    assert_eq!(type_char(&mut t, 'z', 10, &mut list), None);
    assert_eq!(active(&list), ["Beta"]);
    assert!(!t.is_typing_in_progress(10));
    assert_eq!(t.buffer(), "");
}

#[test]
fn space_and_controls_do_not_start_a_session() {
    let mut list = items(&["Alpha"]);
    let mut t = Typeahead::new();
    for key in [
        Key::SPACE,
        Key::Named(NamedKey::Enter),
        Key::Named(NamedKey::Escape),
        Key::Named(NamedKey::ArrowDown),
        Key::Named(NamedKey::Tab),
    ] {
        let mut event = KeyEvent::new(key);
        assert_eq!(t.on_keydown(&mut event, 0, &mut list), None);
        assert!(!event.default_prevented());
    }
    assert!(active(&list).is_empty());
}

#[test]
fn space_inside_a_session_is_consumed() {
    let mut list = items(&["New file", "New folder"]);
    let mut t = Typeahead::new();
    for (i, c) in "new f".chars().enumerate() {
        let mut event = KeyEvent::character(c);
        t.on_keydown(&mut event, i as u64 * 10, &mut list);
        assert_eq!(event.default_prevented(), c == ' ');
    }
    assert_eq!(type_char(&mut t, 'o', 60, &mut list), Some(1));
    assert_eq!(t.buffer(), "new fo");
}

#[test]
fn enter_and_arrows_end_the_session_without_consuming() {
    let mut list = items(&["Alpha", "Beta"]);
    let mut t = Typeahead::new();
    type_char(&mut t, 'a', 0, &mut list);
    let mut down = KeyEvent::named(NamedKey::ArrowDown);
    assert_eq!(t.on_keydown(&mut down, 10, &mut list), None);
    assert!(!down.default_prevented());
    assert!(!t.is_typing_in_progress(10));
}

#[test]
fn prevented_or_inactive_is_ignored() {
    let mut list = items(&["Alpha"]);
    let mut t = Typeahead::new();
    let mut event = KeyEvent::character('a');
    event.prevent_default();
    assert_eq!(t.on_keydown(&mut event, 0, &mut list), None);

    t.set_active(false);
    assert_eq!(type_char(&mut t, 'a', 0, &mut list), None);
    assert!(active(&list).is_empty());
}

#[test]
fn labels_are_trimmed_and_case_insensitive() {
    let mut list = items(&["   ZEBRA  ", "zebu"]);
    let mut t = Typeahead::with_delay(50);
    assert_eq!(t.delay(), 50);
    type_char(&mut t, 'Z', 0, &mut list);
    type_char(&mut t, 'E', 10, &mut list);
    assert_eq!(type_char(&mut t, 'B', 20, &mut list), Some(0));
    assert_eq!(type_char(&mut t, 'U', 30, &mut list), Some(1));
}
