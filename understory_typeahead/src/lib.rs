// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_typeahead --heading-base-level=0

//! Understory Typeahead: jump to list items by typing the start of their label.
//!
//! Keystrokes arriving within a short delay of each other form one _session_
//! and are appended to a buffer. The first item whose label starts with the
//! buffer becomes active. Typing the same character repeatedly cycles through
//! every item starting with that character instead.
//!
//! Timestamps are supplied by the caller in milliseconds, so the controller
//! never reads a clock and sessions are fully deterministic in tests.
//!
//! ```rust
//! use understory_list_nav::{KeyEvent, ListItem};
//! use understory_typeahead::{Typeahead, TypeaheadItem};
//!
//! struct Pet { label: &'static str, active: bool }
//!
//! impl ListItem for Pet {
//!     fn is_disabled(&self) -> bool { false }
//!     fn is_active(&self) -> bool { self.active }
//!     fn activate(&mut self) { self.active = true; }
//!     fn deactivate(&mut self) { self.active = false; }
//!     fn focus(&mut self) {}
//! }
//!
//! impl TypeaheadItem for Pet {
//!     fn typeahead_text(&self) -> &str { self.label }
//! }
//!
//! let mut items = ["Cat", "Car", "Dog"].map(|label| Pet { label, active: false });
//! let mut typeahead = Typeahead::new();
//!
//! let c = || KeyEvent::character('c');
//! assert_eq!(typeahead.on_keydown(&mut c(), 0, &mut items), Some(0));
//! assert_eq!(typeahead.on_keydown(&mut c(), 50, &mut items), Some(1));
//! assert_eq!(typeahead.on_keydown(&mut c(), 100, &mut items), Some(0));
//!
//! // After a pause a new session starts.
//! assert_eq!(typeahead.on_keydown(&mut KeyEvent::character('d'), 400, &mut items), Some(2));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;
use smallvec::SmallVec;
use understory_list_nav::{Key, KeyEvent, ListItem, NamedKey, activate_item, active_item};

/// Default gap between keystrokes that still continues a session.
pub const DEFAULT_DELAY_MS: u64 = 200;

/// An item that can be matched by typing.
pub trait TypeaheadItem: ListItem {
    /// Text matched against the buffer. Leading and trailing whitespace is
    /// ignored and matching is case-insensitive.
    fn typeahead_text(&self) -> &str;
}

#[derive(Clone, Debug)]
struct Record {
    index: usize,
    label: String,
}

/// Buffered typeahead state for one list.
#[derive(Clone, Debug)]
pub struct Typeahead {
    delay: u64,
    active: bool,
    typing: bool,
    buffer: String,
    last_keystroke: u64,
    records: Vec<Record>,
    /// First character → positions in `records`, ascending.
    by_first_char: HashMap<char, SmallVec<[usize; 4]>>,
    current: Option<usize>,
}

impl Default for Typeahead {
    fn default() -> Self {
        Self::with_delay(DEFAULT_DELAY_MS)
    }
}

impl Typeahead {
    /// Creates an enabled controller with [`DEFAULT_DELAY_MS`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an enabled controller with a custom session delay.
    #[must_use]
    pub fn with_delay(delay_ms: u64) -> Self {
        Self {
            delay: delay_ms,
            active: true,
            typing: false,
            buffer: String::new(),
            last_keystroke: 0,
            records: Vec::new(),
            by_first_char: HashMap::new(),
            current: None,
        }
    }

    /// The session delay in milliseconds.
    #[must_use]
    pub fn delay(&self) -> u64 {
        self.delay
    }

    /// Changes the session delay.
    pub fn set_delay(&mut self, delay_ms: u64) {
        self.delay = delay_ms;
    }

    /// Whether new sessions may start.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Enables or disables typeahead. Disabling ends a running session.
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
        if !active {
            self.end();
        }
    }

    /// The current buffer, lowercased.
    #[must_use]
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Whether a session is running at `now_ms`.
    ///
    /// Hosts use this to keep Space from selecting while the user is typing
    /// a label that contains one.
    #[must_use]
    pub fn is_typing_in_progress(&self, now_ms: u64) -> bool {
        self.typing && now_ms.saturating_sub(self.last_keystroke) <= self.delay
    }

    /// Ends the session and drops its snapshot.
    pub fn end(&mut self) {
        if self.typing {
            log::trace!("typeahead session ended at {:?}", self.buffer);
        }
        self.typing = false;
        self.buffer.clear();
        self.records.clear();
        self.by_first_char.clear();
        self.current = None;
    }

    /// Handles a keydown at `now_ms`, returning the newly matched item.
    pub fn on_keydown<I: TypeaheadItem>(
        &mut self,
        event: &mut KeyEvent,
        now_ms: u64,
        items: &mut [I],
    ) -> Option<usize> {
        if self.typing && now_ms.saturating_sub(self.last_keystroke) > self.delay {
            self.end();
        }

        if !self.typing {
            if !self.active || event.default_prevented() || !starts_session(event.key) {
                return None;
            }
            self.begin(items);
        }

        match event.key {
            Key::Named(NamedKey::Enter | NamedKey::Escape) => {
                self.end();
                return None;
            }
            key if key.is_arrow() => {
                self.end();
                return None;
            }
            key if key.is_space() => {
                event.prevent_default();
                self.buffer.push(' ');
            }
            key => {
                let c = key.printable()?;
                self.buffer.extend(c.to_lowercase());
            }
        }
        self.last_keystroke = now_ms;

        let Some(found) = self.find(items) else {
            log::trace!("typeahead: no match for {:?}", self.buffer);
            self.end();
            return None;
        };
        self.current = Some(found);
        activate_item(items, found);
        Some(found)
    }

    fn begin<I: TypeaheadItem>(&mut self, items: &[I]) {
        self.typing = true;
        self.buffer.clear();
        self.records.clear();
        self.by_first_char.clear();
        for (index, item) in items.iter().enumerate() {
            let label = item.typeahead_text().trim().to_lowercase();
            if let Some(first) = label.chars().next() {
                self.by_first_char
                    .entry(first)
                    .or_default()
                    .push(self.records.len());
            }
            self.records.push(Record { index, label });
        }
        self.current = active_item(items);
    }

    fn find<I: TypeaheadItem>(&self, items: &[I]) -> Option<usize> {
        let enabled = |index: usize| items.get(index).is_some_and(|item| !item.is_disabled());
        let mut chars = self.buffer.chars();
        let first = chars.next()?;

        if chars.all(|c| c == first) {
            // Cycle among items starting with `first`, beginning after the current match.
            let candidates = self.by_first_char.get(&first)?;
            let split = self.current.map_or(0, |current| {
                candidates.partition_point(|&pos| self.records[pos].index <= current)
            });
            let (before, after) = candidates.split_at(split);
            return after
                .iter()
                .chain(before)
                .map(|&pos| self.records[pos].index)
                .find(|&index| enabled(index));
        }

        let start = self
            .current
            .and_then(|current| self.records.iter().position(|r| r.index == current))
            .unwrap_or(0);
        let (before, after) = self.records.split_at(start);
        after
            .iter()
            .chain(before)
            .find(|record| record.label.starts_with(self.buffer.as_str()) && enabled(record.index))
            .map(|record| record.index)
    }
}

fn starts_session(key: Key) -> bool {
    !key.is_space() && !key.is_arrow() && key.printable().is_some()
}
