use image::{ImageBuffer, Rgb, RgbImage};

use crate::borders::Bounds;

pub const WHITE: Rgb<u8> = Rgb([u8::MAX, u8::MAX, u8::MAX]);
pub const BLACK: Rgb<u8> = Rgb([u8::MIN, u8::MIN, u8::MIN]);

pub fn filled(width: u32, height: u32, red: u8, green: u8, blue: u8) -> RgbImage {
    let mut buf = ImageBuffer::new(width, height);
    buf.enumerate_pixels_mut()
        .for_each(|(_, _, pixel)| *pixel = Rgb([red, green, blue]));
    buf
}

pub fn construct_rgb(raw: &[&[Rgb<u8>]]) -> RgbImage {
    assert!(raw.windows(2).all(|w| w[0].len() == w[1].len()));
    let height = raw.len() as u32;
    let width = raw.iter().next().map(|row| row.len()).unwrap_or(0) as u32;
    RgbImage::from_fn(width, height, |x, y| raw[y as usize][x as usize])
}

/// Colors the part of `img` covered by `area`. Whatever is outside of the image is ignored.
pub fn paint(img: &mut RgbImage, area: Bounds, color: Rgb<u8>) {
    let max_x = area.max_x.min(img.width());
    let max_y = area.max_y.min(img.height());
    for y in area.min_y..max_y {
        for x in area.min_x..max_x {
            img.put_pixel(x, y, color);
        }
    }
}
