use std::ops::Range;

use image::{GenericImageView, Pixel, Rgb};

use super::{BackgroundMode, BorderConf, Bounds};

impl BorderConf {
    /// Finds the smallest rectangle containing everything that isn't part of the border.
    /// The result is empty if the whole image is border, and the whole image if the
    /// border color could not be determined.
    pub fn content_bounds<I, P>(&self, img: &I) -> Bounds
    where
        I: GenericImageView<Pixel = P>,
        P: Pixel<Subpixel = u8>,
    {
        self.content_bounds_in_mode(img, BackgroundMode::detect(self, img))
    }

    /// Same as `content_bounds`, but with an already detected border color
    pub fn content_bounds_in_mode<I, P>(&self, img: &I, mode: BackgroundMode) -> Bounds
    where
        I: GenericImageView<Pixel = P>,
        P: Pixel<Subpixel = u8>,
    {
        let full = Bounds::of_image(img);
        if mode == BackgroundMode::None || full.is_empty() {
            return full;
        }

        let (width, height) = img.dimensions();

        let all_columns = 0..width;
        let top = self.border_len(height, |y| {
            self.is_row_removable(img, mode, y, all_columns.clone())
        });
        if top >= height {
            return Bounds::EMPTY;
        }

        let bottom = self.border_len(height - top, |i| {
            self.is_row_removable(img, mode, height - 1 - i, all_columns.clone())
        });

        // NOTE: the columns are only judged by the rows that are left
        let rows = top..height - bottom;
        let left = self.border_len(width, |x| {
            self.is_column_removable(img, mode, x, rows.clone())
        });
        if left >= width {
            return Bounds::EMPTY;
        }

        let right = self.border_len(width - left, |i| {
            self.is_column_removable(img, mode, width - 1 - i, rows.clone())
        });

        Bounds::new(left, rows.start, width - right, rows.end)
    }

    /// Whether row `y` is mostly border when looking at `columns`
    pub fn is_row_removable<I, P>(
        &self,
        img: &I,
        mode: BackgroundMode,
        y: u32,
        columns: Range<u32>,
    ) -> bool
    where
        I: GenericImageView<Pixel = P>,
        P: Pixel<Subpixel = u8>,
    {
        self.is_mostly(mode, columns.map(|x| img.get_pixel(x, y).to_rgb()))
    }

    /// Whether column `x` is mostly border when looking at `rows`
    pub fn is_column_removable<I, P>(
        &self,
        img: &I,
        mode: BackgroundMode,
        x: u32,
        rows: Range<u32>,
    ) -> bool
    where
        I: GenericImageView<Pixel = P>,
        P: Pixel<Subpixel = u8>,
    {
        self.is_mostly(mode, rows.map(|y| img.get_pixel(x, y).to_rgb()))
    }

    fn is_mostly(&self, mode: BackgroundMode, line: impl Iterator<Item = Rgb<u8>>) -> bool {
        let (matching, total) = line.fold((0_usize, 0_usize), |(matching, total), rgb| {
            (matching + usize::from(mode.matches(self, rgb)), total + 1)
        });

        total > 0 && (matching as f64) / (total as f64) >= self.noise_tolerance
    }

    /// Counts how many of the first `len` lines belong to the border, i.e., returns the
    /// index of the first line of content. A line that isn't removable on its own is still
    /// skipped if all of the `lookahead` lines after it are removable.
    fn border_len(&self, len: u32, is_removable: impl Fn(u32) -> bool) -> u32 {
        let lookahead = u32::try_from(self.lookahead).unwrap_or(u32::MAX);
        let is_noise = |i: u32| {
            lookahead > 0
                && i.checked_add(lookahead).is_some_and(|last| last < len)
                && (i + 1..=i + lookahead).all(&is_removable)
        };

        (0..len)
            .find(|&i| !is_removable(i) && !is_noise(i))
            .unwrap_or(len)
    }
}
