// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The style directive published to the host.

use core::fmt;

use crate::geometry::InsetProperty;

/// Surface `display` state.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Display {
    /// Not rendered.
    #[default]
    None,
    /// Rendered as a block.
    Block,
}

/// Style map for the positioned surface.
///
/// A style either carries a full placement (both insets) or no placement at
/// all; the controller never publishes one axis without the other.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SurfaceStyle {
    /// Whether the surface is rendered.
    pub display: Display,
    /// Surface opacity, `None` to leave it unset.
    pub opacity: Option<f64>,
    /// Block-axis inset.
    pub block: Option<(InsetProperty, f64)>,
    /// Inline-axis inset.
    pub inline: Option<(InsetProperty, f64)>,
    /// Height override emitted by the resize strategy.
    pub height: Option<f64>,
    /// Width override emitted by the resize strategy.
    pub width: Option<f64>,
}

impl SurfaceStyle {
    /// `display: none`.
    #[must_use]
    pub fn hidden() -> Self {
        Self::default()
    }

    /// `display: block; opacity: 0`, used while measuring the surface.
    #[must_use]
    pub fn measuring() -> Self {
        Self {
            display: Display::Block,
            opacity: Some(0.0),
            ..Self::default()
        }
    }

    /// Returns `true` if the surface is rendered.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.display == Display::Block
    }

    /// Returns a [`fmt::Display`] adapter that renders CSS declarations.
    ///
    /// ```
    /// use understory_anchor::{InsetProperty, SurfaceStyle};
    ///
    /// let mut style = SurfaceStyle::measuring();
    /// style.opacity = Some(1.0);
    /// style.block = Some((InsetProperty::Top, 120.5));
    /// style.inline = Some((InsetProperty::Left, 10.0));
    /// assert_eq!(
    ///     style.css().to_string(),
    ///     "display:block;opacity:1;top:120.5px;left:10px"
    /// );
    /// ```
    #[must_use]
    pub fn css(&self) -> Css<'_> {
        Css(self)
    }
}

/// CSS declaration rendering of a [`SurfaceStyle`]; see [`SurfaceStyle::css`].
#[derive(Debug)]
pub struct Css<'a>(&'a SurfaceStyle);

impl fmt::Display for Css<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let style = self.0;
        match style.display {
            Display::None => f.write_str("display:none")?,
            Display::Block => f.write_str("display:block")?,
        }
        if let Some(opacity) = style.opacity {
            write!(f, ";opacity:{opacity}")?;
        }
        for (property, value) in [style.block, style.inline].into_iter().flatten() {
            write!(f, ";{}:{value}px", property.css_name())?;
        }
        if let Some(height) = style.height {
            write!(f, ";height:{height}px")?;
        }
        if let Some(width) = style.width {
            write!(f, ";width:{width}px")?;
        }
        Ok(())
    }
}
