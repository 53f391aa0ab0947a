//! Cell styling types
//!
//! This module contains types for cell formatting:
//! - [`Style`] - Complete cell style descriptor
//! - [`FontStyle`] - Font settings
//! - [`FillStyle`] - Background fill
//! - [`BorderStyle`] - Cell borders
//! - [`Alignment`] - Text alignment
//! - [`Color`] - Hex color parsing used at the engine boundary
//!
//! and the flyweight machinery built on top of them:
//! - [`StyleRegistry`] - Deduplicates descriptors into shared [`StyleHandle`]s
//! - [`StyleApplier`] - Registers handles with an engine and assigns them to cells

mod alignment;
mod applier;
mod border;
mod color;
mod fill;
mod font;
mod registry;

pub use alignment::{Alignment, HorizontalAlignment, VerticalAlignment};
pub use applier::{translate, StyleApplier};
pub use border::{BorderEdge, BorderLineStyle, BorderStyle};
pub use color::Color;
pub use fill::{FillStyle, PatternType};
pub use font::{FontStyle, Underline};
pub use registry::{RegistryStats, StyleHandle, StyleId, StyleRegistry};

use std::fmt;
use std::hash::{BuildHasher, Hash, Hasher};

/// Complete cell style
///
/// A style is a plain value: nothing is validated on construction, and two
/// styles are the same style only if every field matches exactly. Styles are
/// deduplicated via [`StyleRegistry`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Style {
    /// Font settings
    pub font: FontStyle,
    /// Fill/background settings
    pub fill: FillStyle,
    /// Border settings
    pub border: BorderStyle,
    /// Text alignment
    pub alignment: Alignment,
    /// Number format string (e.g., "#,##0.00")
    pub number_format: Option<String>,
    /// Cell protection
    pub protection: Option<Protection>,
}

impl Style {
    /// Create a new default style
    pub fn new() -> Self {
        Self::default()
    }

    /// Set font to bold
    pub fn bold(mut self, bold: bool) -> Self {
        self.font.bold = bold;
        self
    }

    /// Set font to italic
    pub fn italic(mut self, italic: bool) -> Self {
        self.font.italic = italic;
        self
    }

    /// Set underline style
    pub fn underline(mut self, underline: Underline) -> Self {
        self.font.underline = underline;
        self
    }

    /// Set font size in points
    pub fn font_size(mut self, size: f64) -> Self {
        self.font.size = Some(size);
        self
    }

    /// Set font family
    pub fn font_family<S: Into<String>>(mut self, family: S) -> Self {
        self.font.family = Some(family.into());
        self
    }

    /// Set font color
    pub fn font_color<S: Into<String>>(mut self, color: S) -> Self {
        self.font.color = Some(color.into());
        self
    }

    /// Set fill color (solid fill)
    pub fn fill_color<S: Into<String>>(mut self, color: S) -> Self {
        self.fill = FillStyle::solid(color);
        self
    }

    /// Set all four borders
    pub fn border_all<S: Into<String>>(mut self, style: BorderLineStyle, color: S) -> Self {
        self.border = BorderStyle::all(style, color);
        self
    }

    /// Set number format string
    pub fn number_format<S: Into<String>>(mut self, format: S) -> Self {
        self.number_format = Some(format.into());
        self
    }

    /// Set horizontal alignment
    pub fn horizontal_alignment(mut self, align: HorizontalAlignment) -> Self {
        self.alignment.horizontal = Some(align);
        self
    }

    /// Set vertical alignment
    pub fn vertical_alignment(mut self, align: VerticalAlignment) -> Self {
        self.alignment.vertical = Some(align);
        self
    }

    /// Enable text wrapping
    pub fn wrap_text(mut self, wrap: bool) -> Self {
        self.alignment.wrap_text = wrap;
        self
    }

    /// Set cell protection
    pub fn protection(mut self, protection: Protection) -> Self {
        self.protection = Some(protection);
        self
    }

    /// Check if this style carries no formatting at all
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Deterministic content digest
    ///
    /// Equal styles always produce equal digests. Unequal styles may collide.
    pub fn content_hash(&self) -> StyleHash {
        let mut hasher = ContentHasher.build_hasher();
        self.hash(&mut hasher);
        StyleHash(hasher.finish())
    }
}

/// Cell protection settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Protection {
    /// Cell is locked (protected when sheet is protected)
    pub locked: bool,
    /// Formula is hidden when sheet is protected
    pub hidden: bool,
}

impl Protection {
    /// Create default protection (locked, not hidden)
    pub fn new() -> Self {
        Self {
            locked: true,
            hidden: false,
        }
    }

    /// Create unlocked protection
    pub fn unlocked() -> Self {
        Self {
            locked: false,
            hidden: false,
        }
    }
}

impl Default for Protection {
    fn default() -> Self {
        Self::new()
    }
}

/// 64-bit content digest of a [`Style`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StyleHash(pub u64);

impl fmt::Display for StyleHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

/// Fixed-seed hasher used for style content digests
///
/// Unlike a randomly seeded hasher, every instance produces the same digest for
/// the same input, within and across processes built from the same sources.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContentHasher;

const CONTENT_SEEDS: [u64; 4] = [
    0x243f_6a88_85a3_08d3,
    0x1319_8a2e_0370_7344,
    0xa409_3822_299f_31d0,
    0x082e_fa98_ec4e_6c89,
];

impl BuildHasher for ContentHasher {
    type Hasher = ahash::AHasher;

    fn build_hasher(&self) -> Self::Hasher {
        ahash::RandomState::with_seeds(
            CONTENT_SEEDS[0],
            CONTENT_SEEDS[1],
            CONTENT_SEEDS[2],
            CONTENT_SEEDS[3],
        )
        .build_hasher()
    }
}
