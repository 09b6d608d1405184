//! Custom glyphs for the HD44780 character generator RAM (CG-RAM).
//!
//! A glyph is a 5 column by 8 row pixel grid. The driver does not care how the caller stores its
//! bitmaps, it only needs to ask whether a given pixel is lit. Anything that can answer that question
//! implements [`GlyphSource`]. [`Glyph`] is the row-encoded form the controller actually stores.

/// Width of a glyph in pixels.
pub const GLYPH_WIDTH: u8 = 5;
/// Height of a glyph in pixels.
pub const GLYPH_HEIGHT: u8 = 8;

/// CG-RAM slot that holds the heart glyph after `init`.
pub const HEART_SLOT: u8 = 0;
/// CG-RAM slot that holds the cross glyph after `init`.
pub const CROSS_SLOT: u8 = 1;

/// A read-only 5x8 pixel grid that can be programmed into a CG-RAM slot.
pub trait GlyphSource {
    /// Returns `true` if the pixel at `column` (0-4) and `row` (0-7) is lit.
    fn pixel_at(&self, column: u8, row: u8) -> bool;
}

/// A glyph as it is stored by the controller: one byte per row, where the leftmost column is bit 4
/// and the rightmost column is bit 0.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Glyph([u8; 8]);

impl Glyph {
    /// Filled heart, programmed into [`HEART_SLOT`] during initialization.
    pub const HEART: Glyph = Glyph([0, 10, 31, 31, 31, 14, 4, 0]);
    /// Cross, programmed into [`CROSS_SLOT`] during initialization.
    pub const CROSS: Glyph = Glyph([6, 6, 15, 15, 6, 6, 6, 6]);

    /// Create a glyph from already encoded rows. Bits above bit 4 are ignored by the controller.
    pub const fn new(rows: [u8; 8]) -> Self {
        Self(rows)
    }

    /// Encode any pixel source into rows.
    pub fn from_source<G>(source: &G) -> Self
    where
        G: GlyphSource + ?Sized,
    {
        let mut rows = [0u8; 8];
        for (row, value) in rows.iter_mut().enumerate() {
            for column in 0..GLYPH_WIDTH {
                if source.pixel_at(column, row as u8) {
                    *value |= 1 << (GLYPH_WIDTH - 1 - column);
                }
            }
        }
        Self(rows)
    }

    /// The encoded rows, top to bottom.
    pub const fn rows(&self) -> [u8; 8] {
        self.0
    }
}

impl GlyphSource for Glyph {
    fn pixel_at(&self, column: u8, row: u8) -> bool {
        self.0[row as usize] & (1 << (GLYPH_WIDTH - 1 - column)) != 0
    }
}

/// Row-major boolean grid, indexed as `grid[row][column]`.
impl GlyphSource for [[bool; 5]; 8] {
    fn pixel_at(&self, column: u8, row: u8) -> bool {
        self[row as usize][column as usize]
    }
}
