// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Logical box corners.
//!
//! A [`Corner`] names one corner of a box as a `(block, inline)` pair of
//! [`Edge`]s. Corners are writing-mode aware: `start` on the inline axis is the
//! left side in LTR and the right side in RTL.
//!
//! ```
//! use understory_anchor::{Corner, Edge};
//!
//! let corner: Corner = " End-Start ".parse().unwrap();
//! assert_eq!(corner, Corner::END_START);
//! assert_eq!(corner.block, Edge::End);
//! assert_eq!(corner.flip_block(), Corner::START_START);
//! assert_eq!(corner.to_string(), "end-start");
//! ```

use core::fmt;
use core::str::FromStr;

/// One edge of a box along a single logical axis.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Edge {
    /// The logical start edge (top for the block axis, left in LTR for the inline axis).
    #[default]
    Start,
    /// The logical end edge.
    End,
}

impl Edge {
    /// Returns the opposite edge.
    #[must_use]
    pub const fn flip(self) -> Self {
        match self {
            Self::Start => Self::End,
            Self::End => Self::Start,
        }
    }

    /// Lowercase keyword for this edge.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::End => "end",
        }
    }

    fn parse(text: &str) -> Option<Self> {
        if text.eq_ignore_ascii_case("start") {
            Some(Self::Start)
        } else if text.eq_ignore_ascii_case("end") {
            Some(Self::End)
        } else {
            None
        }
    }
}

/// A logical corner of a box: a block edge paired with an inline edge.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Corner {
    /// Edge along the block axis.
    pub block: Edge,
    /// Edge along the inline axis.
    pub inline: Edge,
}

impl Corner {
    /// Block start, inline start.
    pub const START_START: Self = Self::new(Edge::Start, Edge::Start);
    /// Block start, inline end.
    pub const START_END: Self = Self::new(Edge::Start, Edge::End);
    /// Block end, inline start.
    pub const END_START: Self = Self::new(Edge::End, Edge::Start);
    /// Block end, inline end.
    pub const END_END: Self = Self::new(Edge::End, Edge::End);

    /// Creates a corner from its two edges.
    #[must_use]
    pub const fn new(block: Edge, inline: Edge) -> Self {
        Self { block, inline }
    }

    /// Returns this corner with the block edge flipped.
    #[must_use]
    pub const fn flip_block(self) -> Self {
        Self::new(self.block.flip(), self.inline)
    }

    /// Returns this corner with the inline edge flipped.
    #[must_use]
    pub const fn flip_inline(self) -> Self {
        Self::new(self.block, self.inline.flip())
    }

    /// Parses `text`, falling back to `fallback` when it is malformed.
    ///
    /// Hosts that accept corners as free-form attributes use this to keep a
    /// typo from disabling placement altogether.
    #[must_use]
    pub fn parse_or(text: &str, fallback: Self) -> Self {
        text.parse().unwrap_or_else(|err: ParseCornerError| {
            log::debug!("{err}; using {fallback}");
            fallback
        })
    }
}

impl fmt::Display for Corner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.block.as_str(), self.inline.as_str())
    }
}

/// Error returned when a corner string is not of the form `"<block>-<inline>"`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseCornerError {
    _private: (),
}

impl fmt::Display for ParseCornerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("corner must be one of start-start, start-end, end-start, end-end")
    }
}

impl core::error::Error for ParseCornerError {}

impl FromStr for Corner {
    type Err = ParseCornerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = ParseCornerError { _private: () };
        let (block, inline) = s.trim().split_once('-').ok_or(err.clone())?;
        match (Edge::parse(block), Edge::parse(inline)) {
            (Some(block), Some(inline)) => Ok(Self::new(block, inline)),
            _ => Err(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn parses_case_insensitively_and_trims() {
        assert_eq!("start-end".parse(), Ok(Corner::START_END));
        assert_eq!("  END-END\t".parse(), Ok(Corner::END_END));
        assert_eq!("Start-Start".parse(), Ok(Corner::START_START));
    }

    #[test]
    fn rejects_malformed_corners() {
        assert!("start".parse::<Corner>().is_err());
        assert!("middle-start".parse::<Corner>().is_err());
        assert!("start-end-end".parse::<Corner>().is_err());
        assert!("".parse::<Corner>().is_err());
    }

    #[test]
    fn parse_or_uses_fallback() {
        assert_eq!(Corner::parse_or("bogus", Corner::END_START), Corner::END_START);
        assert_eq!(Corner::parse_or("start-end", Corner::END_START), Corner::START_END);
    }

    #[test]
    fn double_flip_is_identity() {
        for corner in [
            Corner::START_START,
            Corner::START_END,
            Corner::END_START,
            Corner::END_END,
        ] {
            assert_eq!(corner.flip_block().flip_block(), corner);
            assert_eq!(corner.flip_inline().flip_inline(), corner);
            assert_ne!(corner.flip_block(), corner);
            assert_eq!(corner.flip_block().inline, corner.inline);
            assert_eq!(corner.flip_inline().block, corner.block);
        }
    }

    #[test]
    fn display_is_normalized() {
        assert_eq!(Corner::END_START.to_string(), "end-start");
        let parsed: Corner = "END-start".parse().unwrap();
        assert_eq!(parsed.to_string(), "end-start");
    }
}
