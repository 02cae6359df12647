// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Category palette.
//!
//! Categories are colored by their first-seen position. The palette is passed in as
//! configuration so that running out of colors has one well-defined policy.

extern crate alloc;

use alloc::vec::Vec;

use peniko::Color;

/// The default 55-entry category palette, in assignment order.
pub const DEFAULT_PALETTE_HEX: [u32; 55] = [
    0xFDA339, 0x94A559, 0x9E9E9E, 0xC2CEDC, 0x3A9A38, 0xFF6633, 0xFFB399, 0xFF33FF, 0xFFFF99,
    0x00B3E6, 0xE6B333, 0x3366E6, 0x999966, 0x99FF99, 0xB34D4D, 0x80B300, 0x809900, 0xE6B3B3,
    0x6680B3, 0x66991A, 0xFF99E6, 0xCCFF1A, 0xFF1A66, 0xE6331A, 0x33FFCC, 0x66994D, 0xB366CC,
    0x4D8000, 0xB33300, 0xCC80CC, 0x66664D, 0x991AFF, 0xE666FF, 0x4DB3FF, 0x1AB399, 0xE666B3,
    0x33991A, 0xCC9999, 0xB3B31A, 0x00E680, 0x4D8066, 0x809980, 0xE6FF80, 0x1AFF33, 0x999933,
    0xFF3380, 0xCCCC00, 0x66E64D, 0x4D80CC, 0x9900B3, 0xE64D66, 0x4DB380, 0xFF4D4D, 0x99E6E6,
    0x6666FF,
];

/// Neutral gray used when a fallback color is requested.
pub const NEUTRAL_GRAY: Color = Color::from_rgba8(0x9E, 0x9E, 0x9E, 0xFF);

/// Converts a `0xRRGGBB` literal into an opaque color.
pub fn rgb_hex(hex: u32) -> Color {
    let [_, r, g, b] = hex.to_be_bytes();
    Color::from_rgb8(r, g, b)
}

/// What to do when there are more categories than palette entries.
#[derive(Clone, Copy, Debug)]
pub enum PaletteExhaustion {
    /// Wrap around to the start of the palette.
    Cycle,
    /// Give every category past the end of the palette the same color.
    Fallback(Color),
}

/// An ordered list of category colors plus an exhaustion policy.
#[derive(Clone, Debug)]
pub struct Palette {
    colors: Vec<Color>,
    exhaustion: PaletteExhaustion,
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(DEFAULT_PALETTE_HEX.iter().copied().map(rgb_hex).collect())
    }
}

impl Palette {
    /// Creates a palette that cycles when exhausted.
    pub fn new(colors: Vec<Color>) -> Self {
        Self {
            colors,
            exhaustion: PaletteExhaustion::Cycle,
        }
    }

    /// Sets the exhaustion policy.
    pub fn with_exhaustion(mut self, exhaustion: PaletteExhaustion) -> Self {
        self.exhaustion = exhaustion;
        self
    }

    /// Returns the configured exhaustion policy.
    pub fn exhaustion(&self) -> PaletteExhaustion {
        self.exhaustion
    }

    /// Returns the number of distinct palette entries.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Returns `true` if the palette has no entries.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Returns `true` if `index` falls past the end of the palette.
    pub fn is_exhausted_at(&self, index: usize) -> bool {
        index >= self.colors.len()
    }

    /// Returns the color for the category at `index` in first-seen order.
    pub fn color(&self, index: usize) -> Color {
        if let Some(c) = self.colors.get(index) {
            return *c;
        }
        match self.exhaustion {
            PaletteExhaustion::Fallback(c) => c,
            PaletteExhaustion::Cycle if self.colors.is_empty() => NEUTRAL_GRAY,
            PaletteExhaustion::Cycle => self.colors[index % self.colors.len()],
        }
    }
}
