use std::{cmp::Ordering, fmt};

use image::{GenericImageView, Pixel, Rgb};

use super::BorderConf;

/// The color of the border, if any
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BackgroundMode {
    None,
    Black,
    White,
}

impl BackgroundMode {
    /// Guesses the color of the border by looking at the four corners of the image.
    /// Empty images have no border.
    pub fn detect<I, P>(conf: &BorderConf, img: &I) -> Self
    where
        I: GenericImageView<Pixel = P>,
        P: Pixel<Subpixel = u8>,
    {
        let (width, height) = img.dimensions();
        if width == 0 || height == 0 {
            return Self::None;
        }

        let corners = [
            (0, 0),
            (width - 1, 0),
            (0, height - 1),
            (width - 1, height - 1),
        ];

        let mut blacks = 0;
        let mut whites = 0;
        for (x, y) in corners {
            let rgb = img.get_pixel(x, y).to_rgb();
            if conf.is_blackish(rgb) {
                blacks += 1;
            } else if conf.is_whiteish(rgb) {
                whites += 1;
            }
        }

        Self::from_corner_counts(blacks, whites)
    }

    fn from_corner_counts(blacks: usize, whites: usize) -> Self {
        match blacks.cmp(&whites) {
            Ordering::Greater => Self::Black,
            Ordering::Less => Self::White,
            // NOTE: a tie goes to black
            Ordering::Equal if blacks > 0 => Self::Black,
            Ordering::Equal => Self::None,
        }
    }

    /// Whether the pixel has the color of this kind of border
    pub fn matches(self, conf: &BorderConf, rgb: Rgb<u8>) -> bool {
        match self {
            Self::None => false,
            Self::Black => conf.is_blackish(rgb),
            Self::White => conf.is_whiteish(rgb),
        }
    }
}

impl fmt::Display for BackgroundMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::None => "none",
            Self::Black => "black",
            Self::White => "white",
        };
        write!(f, "{name}")
    }
}
