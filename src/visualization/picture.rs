//! Growable RGB canvas backed by a flat byte buffer.
//!
//! Pixels are stored row-major as RGB triples with the origin at the top
//! left, so `values.len() == width * height * 3` at all times. Reading
//! outside the canvas yields black; writing outside it grows the canvas,
//! filling new pixels with white and keeping existing pixels where they were.

use std::path::{Path, PathBuf};

use image::{ImageFormat, RgbImage};
use serde::Deserialize;
use thiserror::Error;

/// Errors raised at the codec boundary
#[derive(Error, Debug)]
pub enum PictureError {
    #[error("failed to decode image '{path}': {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to encode image '{path}': {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("picture of {width}x{height} pixels cannot be encoded")]
    Dimensions { width: usize, height: usize },
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl RgbColor {
    pub const WHITE: RgbColor = RgbColor::new(255, 255, 255);
    pub const BLACK: RgbColor = RgbColor::new(0, 0, 0);
    pub const RED: RgbColor = RgbColor::new(255, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn gray(level: u8) -> Self {
        Self::new(level, level, level)
    }

    /// Integer mean of the three channels
    pub fn gray_level(&self) -> u8 {
        ((self.r as u16 + self.g as u16 + self.b as u16) / 3) as u8
    }
}

impl Default for RgbColor {
    fn default() -> Self {
        Self::WHITE
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Picture {
    values: Vec<u8>,
    width: usize,
    height: usize,
}

impl Picture {
    /// Empty 0x0 picture
    pub fn new() -> Self {
        Self::default()
    }

    /// Picture with every pixel set to `color`
    pub fn filled(width: usize, height: usize, color: RgbColor) -> Self {
        let values = [color.r, color.g, color.b].repeat(width * height);
        Self { values, width, height }
    }

    /// Picture from rows of gray levels; short rows are padded with white
    pub fn from_grays(grays: &[Vec<u8>]) -> Self {
        let width = grays.iter().map(Vec::len).max().unwrap_or(0);
        let mut pic = Self::filled(width, grays.len(), RgbColor::WHITE);
        for (y, row) in grays.iter().enumerate() {
            for (x, &level) in row.iter().enumerate() {
                pic.set(x, y, RgbColor::gray(level));
            }
        }
        pic
    }

    /// Decode a picture from an image file (PNG or any format `image` reads)
    pub fn open(path: impl AsRef<Path>) -> Result<Self, PictureError> {
        let path = path.as_ref();
        let img = image::open(path)
            .map_err(|source| PictureError::Decode {
                path: path.to_path_buf(),
                source,
            })?
            .to_rgb8();

        Ok(Self {
            width: img.width() as usize,
            height: img.height() as usize,
            values: img.into_raw(),
        })
    }

    /// Encode this picture as PNG
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), PictureError> {
        let path = path.as_ref();
        let dims = PictureError::Dimensions {
            width: self.width,
            height: self.height,
        };
        let (Ok(w), Ok(h)) = (u32::try_from(self.width), u32::try_from(self.height)) else {
            return Err(dims);
        };
        let img = RgbImage::from_raw(w, h, self.values.clone()).ok_or(dims)?;

        img.save_with_format(path, ImageFormat::Png)
            .map_err(|source| PictureError::Encode {
                path: path.to_path_buf(),
                source,
            })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    fn offset(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.width && y < self.height).then(|| 3 * (y * self.width + x))
    }

    fn channel(&self, x: usize, y: usize, c: usize) -> u8 {
        self.offset(x, y).map_or(0, |i| self.values[i + c])
    }

    pub fn red(&self, x: usize, y: usize) -> u8 {
        self.channel(x, y, 0)
    }

    pub fn green(&self, x: usize, y: usize) -> u8 {
        self.channel(x, y, 1)
    }

    pub fn blue(&self, x: usize, y: usize) -> u8 {
        self.channel(x, y, 2)
    }

    /// Pixel color, black outside the canvas
    pub fn get(&self, x: usize, y: usize) -> RgbColor {
        RgbColor::new(self.red(x, y), self.green(x, y), self.blue(x, y))
    }

    /// Write a pixel, growing the canvas if (x, y) lies outside it
    pub fn set(&mut self, x: usize, y: usize, color: RgbColor) {
        self.ensure(x, y);
        let i = 3 * (y * self.width + x);
        self.values[i..i + 3].copy_from_slice(&[color.r, color.g, color.b]);
    }

    /// Grow so that (x, y) is a valid pixel
    fn ensure(&mut self, x: usize, y: usize) {
        if x < self.width && y < self.height {
            return;
        }
        let new_width = self.width.max(x + 1);
        let new_height = self.height.max(y + 1);

        let mut values = vec![255u8; 3 * new_width * new_height];
        let row_len = 3 * self.width;
        for (row, src) in self.values.chunks_exact(row_len.max(1)).enumerate().take(self.height) {
            let dst = 3 * row * new_width;
            values[dst..dst + row_len].copy_from_slice(src);
        }

        self.values = values;
        self.width = new_width;
        self.height = new_height;
    }

    /// Paste `other` with its top-left corner at (x, y), growing as needed.
    /// Pasted pixels replace the destination.
    pub fn add(&mut self, other: &Picture, x: usize, y: usize) {
        if other.is_empty() {
            return;
        }
        self.ensure(x + other.width - 1, y + other.height - 1);

        let row_len = 3 * other.width;
        for (row, src) in other.values.chunks_exact(row_len).enumerate() {
            let dst = 3 * ((y + row) * self.width + x);
            self.values[dst..dst + row_len].copy_from_slice(src);
        }
    }

    /// Nearest-neighbour upscale by an integer factor, in place
    pub fn scale(&mut self, factor: usize) {
        if factor == 1 {
            return;
        }
        let new_width = self.width * factor;
        let new_height = self.height * factor;

        let mut values = Vec::with_capacity(3 * new_width * new_height);
        for y in 0..new_height {
            let src_y = y / factor;
            for x in 0..new_width {
                let i = 3 * (src_y * self.width + x / factor);
                values.extend_from_slice(&self.values[i..i + 3]);
            }
        }

        self.values = values;
        self.width = new_width;
        self.height = new_height;
    }

    /// Gray level of every pixel, `height` rows of `width` values.
    /// Uses the integer mean (r + g + b) / 3, so gray pictures round-trip.
    pub fn grays(&self) -> Vec<Vec<u8>> {
        (0..self.height)
            .map(|y| (0..self.width).map(|x| self.get(x, y).gray_level()).collect())
            .collect()
    }

    /// Raw RGB bytes, row-major
    pub fn as_raw(&self) -> &[u8] {
        &self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn growth_from_empty_keeps_row_layout() {
        let mut pic = Picture::new();
        pic.set(1, 0, RgbColor::RED);
        pic.set(0, 2, RgbColor::BLACK);

        assert_eq!((pic.width(), pic.height()), (2, 3));
        assert_eq!(pic.as_raw().len(), 2 * 3 * 3);
        assert_eq!(pic.get(1, 0), RgbColor::RED);
        assert_eq!(pic.get(0, 2), RgbColor::BLACK);
        assert_eq!(pic.get(0, 0), RgbColor::WHITE);
    }

    #[test]
    fn gray_level_is_integer_mean() {
        assert_eq!(RgbColor::new(10, 20, 31).gray_level(), 20);
        assert_eq!(RgbColor::WHITE.gray_level(), 255);
    }
}
