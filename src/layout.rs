//! Physical layout of the eyes array
//!
//! Two rings of eight pixels chained on one data line. The index tables below
//! describe that wiring; they are measured layout data, not computed paths.

/// Number of pixels on the strip
pub const PIXEL_COUNT: usize = 16;

/// Number of pixels in one eye
pub const EYE_PIXELS: usize = PIXEL_COUNT / 2;

/// Upper half of both eyes, left to right
pub const SCANNER_UPPER: [usize; 10] = [6, 7, 0, 1, 2, 14, 15, 8, 9, 10];

/// Lower half of both eyes, left to right
pub const SCANNER_LOWER: [usize; 10] = [6, 5, 4, 3, 2, 14, 13, 12, 11, 10];

/// Figure eight loop through both eyes
pub const FIGURE_EIGHT: [usize; PIXEL_COUNT] =
    [2, 3, 4, 5, 6, 7, 0, 1, 14, 13, 12, 11, 10, 9, 8, 15];

/// How many LED segments the firmware addresses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EyeLayout {
    /// One segment, effects address the buffer as a single eye
    Single,
    /// Two segments, effects mirror motion onto the second eye
    #[default]
    Dual,
}

impl EyeLayout {
    pub const fn is_dual(self) -> bool {
        matches!(self, Self::Dual)
    }
}

/// Pixel in the second eye matching position `i` of the first, half a turn ahead
pub const fn opposite_eye_index(i: usize) -> usize {
    EYE_PIXELS + (EYE_PIXELS / 2 + i) % EYE_PIXELS
}
