//! Finds the content of an image that is surrounded by a uniform black or white border.
//!
//! The color of the border is guessed from the corners of the image, see
//! [`BackgroundMode::detect`]. The border is then peeled off one line at a time from each
//! side, see [`BorderConf::content_bounds`].

use std::fmt;

use image::{DynamicImage, GenericImageView, Rgb};

mod background;
mod scan;

pub use background::BackgroundMode;

/// All channels at or below this makes a pixel black-ish
pub const DEFAULT_BLACK_THRESHOLD: u8 = 60;
/// All channels at or above this makes a pixel white-ish
pub const DEFAULT_WHITE_THRESHOLD: u8 = 195;
/// Minimum fraction of background pixels for a line to be part of the border
pub const DEFAULT_NOISE_TOLERANCE: f64 = 0.95;
/// How many following lines must be border for a stray line to be skipped as noise
pub const DEFAULT_LOOKAHEAD: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BorderConf {
    black_threshold: u8,
    white_threshold: u8,
    noise_tolerance: f64,
    lookahead: usize,
}

impl Default for BorderConf {
    fn default() -> Self {
        Self {
            black_threshold: DEFAULT_BLACK_THRESHOLD,
            white_threshold: DEFAULT_WHITE_THRESHOLD,
            noise_tolerance: DEFAULT_NOISE_TOLERANCE,
            lookahead: DEFAULT_LOOKAHEAD,
        }
    }
}

impl BorderConf {
    pub fn black_threshold(mut self, threshold: u8) -> Self {
        self.black_threshold = threshold;
        self
    }

    pub fn white_threshold(mut self, threshold: u8) -> Self {
        self.white_threshold = threshold;
        self
    }

    pub fn noise_tolerance(mut self, tolerance: f64) -> Self {
        self.noise_tolerance = tolerance;
        self
    }

    /// Zero disables the skipping of noisy lines
    pub fn lookahead(mut self, lookahead: usize) -> Self {
        self.lookahead = lookahead;
        self
    }

    pub fn is_blackish(&self, rgb: Rgb<u8>) -> bool {
        rgb.0.iter().all(|&channel| channel <= self.black_threshold)
    }

    pub fn is_whiteish(&self, rgb: Rgb<u8>) -> bool {
        rgb.0.iter().all(|&channel| channel >= self.white_threshold)
    }
}

/// Finds the content of `img` using the default configuration
pub fn content_bounds<I, P>(img: &I) -> Bounds
where
    I: GenericImageView<Pixel = P>,
    P: image::Pixel<Subpixel = u8>,
{
    BorderConf::default().content_bounds(img)
}

/// An axis aligned rectangle. The min corner is inclusive and the max corner is exclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Hash)]
pub struct Bounds {
    pub min_x: u32,
    pub min_y: u32,
    pub max_x: u32,
    pub max_y: u32,
}

impl Bounds {
    pub const EMPTY: Self = Self::new(0, 0, 0, 0);

    pub const fn new(min_x: u32, min_y: u32, max_x: u32, max_y: u32) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    pub fn of_image<I: GenericImageView>(img: &I) -> Self {
        let (width, height) = img.dimensions();
        Self::new(0, 0, width, height)
    }

    pub fn is_empty(&self) -> bool {
        self.min_x >= self.max_x || self.min_y >= self.max_y
    }

    pub fn width(&self) -> u32 {
        self.max_x.saturating_sub(self.min_x)
    }

    pub fn height(&self) -> u32 {
        self.max_y.saturating_sub(self.min_y)
    }

    /// Whether `other` lies completely inside of `self`. Empty rectangles are inside of
    /// everything.
    pub fn contains(&self, other: &Bounds) -> bool {
        other.is_empty()
            || (self.min_x <= other.min_x
                && self.min_y <= other.min_y
                && other.max_x <= self.max_x
                && other.max_y <= self.max_y)
    }

    /// Copies out the part of `img` covered by these bounds
    pub fn crop(&self, img: &DynamicImage) -> DynamicImage {
        img.crop_imm(self.min_x, self.min_y, self.width(), self.height())
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({},{})-({},{})",
            self.min_x, self.min_y, self.max_x, self.max_y
        )
    }
}
