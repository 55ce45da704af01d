// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard input as seen by list controllers.

/// Keys without a printable character.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NamedKey {
    /// `ArrowUp`
    ArrowUp,
    /// `ArrowDown`
    ArrowDown,
    /// `ArrowLeft`
    ArrowLeft,
    /// `ArrowRight`
    ArrowRight,
    /// `Home`
    Home,
    /// `End`
    End,
    /// `PageUp`
    PageUp,
    /// `PageDown`
    PageDown,
    /// `Enter`
    Enter,
    /// `Escape`
    Escape,
    /// `Tab`
    Tab,
    /// `Backspace`
    Backspace,
    /// `Delete`
    Delete,
    /// A modifier key on its own (`Shift`, `Control`, `Alt`, `Meta`).
    Modifier,
}

/// A logical key.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// A non-printable key.
    Named(NamedKey),
    /// A key producing a character. The space bar is `Character(' ')`.
    Character(char),
}

impl Key {
    /// The space bar.
    pub const SPACE: Self = Self::Character(' ');

    /// Returns `true` for the space bar.
    #[must_use]
    pub const fn is_space(self) -> bool {
        matches!(self, Self::Character(' '))
    }

    /// Returns `true` for one of the four arrow keys.
    #[must_use]
    pub const fn is_arrow(self) -> bool {
        matches!(
            self,
            Self::Named(
                NamedKey::ArrowUp | NamedKey::ArrowDown | NamedKey::ArrowLeft | NamedKey::ArrowRight
            )
        )
    }

    /// The printable character, if any. Control characters do not count.
    #[must_use]
    pub fn printable(self) -> Option<char> {
        match self {
            Self::Character(c) if !c.is_control() => Some(c),
            _ => None,
        }
    }
}

/// A keydown event that controllers may claim.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct KeyEvent {
    /// The key pressed.
    pub key: Key,
    default_prevented: bool,
}

impl KeyEvent {
    /// Creates an unclaimed event.
    #[must_use]
    pub const fn new(key: Key) -> Self {
        Self {
            key,
            default_prevented: false,
        }
    }

    /// Shorthand for a [`Key::Named`] event.
    #[must_use]
    pub const fn named(key: NamedKey) -> Self {
        Self::new(Key::Named(key))
    }

    /// Shorthand for a [`Key::Character`] event.
    #[must_use]
    pub const fn character(c: char) -> Self {
        Self::new(Key::Character(c))
    }

    /// Marks the event as handled.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// Whether some handler already claimed the event.
    #[must_use]
    pub const fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

bitflags::bitflags! {
    /// Keys a list responds to.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct NavKeys: u8 {
        /// Next item.
        const ARROW_DOWN  = 0b0000_0001;
        /// Previous item.
        const ARROW_UP    = 0b0000_0010;
        /// Next item in LTR, previous in RTL.
        const ARROW_RIGHT = 0b0000_0100;
        /// Previous item in LTR, next in RTL.
        const ARROW_LEFT  = 0b0000_1000;
        /// First item.
        const HOME        = 0b0001_0000;
        /// Last item.
        const END         = 0b0010_0000;
    }
}

impl NavKeys {
    /// Every navigation key; used by top-level lists and menus.
    pub const TOP_LEVEL: Self = Self::all();

    /// Keys for a nested submenu.
    ///
    /// The inline arrow pointing back toward the parent menu closes the
    /// submenu instead of navigating.
    #[must_use]
    pub const fn submenu(rtl: bool) -> Self {
        let close = if rtl { Self::ARROW_RIGHT } else { Self::ARROW_LEFT };
        Self::TOP_LEVEL.difference(close)
    }

    /// The flag for `key`, if it is a navigation key.
    #[must_use]
    pub const fn for_key(key: Key) -> Option<Self> {
        match key {
            Key::Named(NamedKey::ArrowDown) => Some(Self::ARROW_DOWN),
            Key::Named(NamedKey::ArrowUp) => Some(Self::ARROW_UP),
            Key::Named(NamedKey::ArrowRight) => Some(Self::ARROW_RIGHT),
            Key::Named(NamedKey::ArrowLeft) => Some(Self::ARROW_LEFT),
            Key::Named(NamedKey::Home) => Some(Self::HOME),
            Key::Named(NamedKey::End) => Some(Self::END),
            _ => None,
        }
    }
}

impl Default for NavKeys {
    fn default() -> Self {
        Self::TOP_LEVEL
    }
}
