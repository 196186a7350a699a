use crate::error::{RenderError, Result};
use crate::helpers::Pixel;
use std::ops::{Deref, DerefMut};

/// Raster of 8 bit RGB pixels stored row by row from the top left corner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Film {
    width: usize,
    height: usize,
    buffer: Vec<Pixel>,
}

impl Film {
    pub fn new(width: usize, height: usize) -> Result<Self> {
        let len = width
            .checked_mul(height)
            .filter(|&len| len > 0)
            .ok_or(RenderError::InvalidDimensions { width, height })?;

        Ok(Self {
            width,
            height,
            buffer: vec![Pixel::default(); len],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline(always)]
    fn index(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    pub fn get(&self, x: usize, y: usize) -> Option<Pixel> {
        self.index(x, y).map(|i| self.buffer[i])
    }

    /// Store `pixel` at `(x, y)`, returning the pixel it replaced
    ///
    /// Positions outside the film are ignored and yield `None`.
    pub fn set(&mut self, x: usize, y: usize, pixel: Pixel) -> Option<Pixel> {
        let i = self.index(x, y)?;
        Some(std::mem::replace(&mut self.buffer[i], pixel))
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Pixel]> {
        self.buffer.chunks(self.width)
    }

    /// Interleaved `r, g, b` bytes, row by row
    pub fn to_rgb8(&self) -> Vec<u8> {
        self.buffer
            .iter()
            .flat_map(|p| [p.red, p.green, p.blue])
            .collect()
    }
}

impl Deref for Film {
    type Target = [Pixel];
    fn deref(&self) -> &Self::Target {
        &self.buffer
    }
}

impl DerefMut for Film {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.buffer
    }
}
