//! Per-pixel coverage masks for exact collision testing
//!
//! A `CoverageMask` is a 2D boolean grid of a sprite's opaque pixels,
//! computed once when assets are built. Collision between two sprites is
//! a shifted intersection of their masks - never a bounding-box
//! approximation. The empty intersection rectangle doubles as the cheap
//! reject path.

use serde::{Deserialize, Serialize};

/// Boolean coverage grid of one sprite frame
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageMask {
    w: usize,
    h: usize,
    bits: Vec<bool>,
}

impl CoverageMask {
    /// Fully transparent mask
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            bits: vec![false; w * h],
        }
    }

    /// Fully opaque mask
    pub fn solid(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            bits: vec![true; w * h],
        }
    }

    /// Build from per-pixel opacity, one alpha byte per pixel in row-major
    /// order. A pixel is covered when its alpha exceeds `threshold`.
    pub fn from_opacity(w: usize, h: usize, alpha: &[u8], threshold: u8) -> Self {
        assert_eq!(alpha.len(), w * h, "opacity buffer does not match {w}x{h}");
        Self {
            w,
            h,
            bits: alpha.iter().map(|&a| a > threshold).collect(),
        }
    }

    /// Build from ASCII art rows; `#` marks a covered pixel. Handy for
    /// tests and built-in sprites.
    pub fn from_rows(rows: &[&str]) -> Self {
        let h = rows.len();
        let w = rows.first().map_or(0, |r| r.len());
        debug_assert!(rows.iter().all(|r| r.len() == w), "ragged mask rows");
        let bits = rows
            .iter()
            .flat_map(|row| row.bytes().map(|b| b == b'#'))
            .collect();
        Self { w, h, bits }
    }

    pub fn width(&self) -> usize {
        self.w
    }

    pub fn height(&self) -> usize {
        self.h
    }

    /// Covered-pixel test; out-of-bounds coordinates are transparent.
    pub fn get(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 {
            return false;
        }
        let (x, y) = (x as usize, y as usize);
        x < self.w && y < self.h && self.bits[y * self.w + x]
    }

    /// Set one pixel; out-of-bounds writes are dropped.
    pub fn set(&mut self, x: i32, y: i32, covered: bool) {
        if x >= 0 && y >= 0 && (x as usize) < self.w && (y as usize) < self.h {
            self.bits[y as usize * self.w + x as usize] = covered;
        }
    }

    /// Mark a rectangle covered (clipped to the mask bounds).
    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32) {
        for dy in 0..h {
            for dx in 0..w {
                self.set(x + dx, y + dy, true);
            }
        }
    }

    /// Mirror across the horizontal axis (used for the upper obstacle
    /// segment, which is the lower one upside down).
    pub fn flipped_vertical(&self) -> Self {
        let mut bits = Vec::with_capacity(self.bits.len());
        for y in (0..self.h).rev() {
            bits.extend_from_slice(&self.bits[y * self.w..(y + 1) * self.w]);
        }
        Self {
            w: self.w,
            h: self.h,
            bits,
        }
    }

    /// Shifted intersection test. `offset` is `other`'s top-left relative
    /// to this mask's top-left. Returns the first intersecting pixel in
    /// this mask's coordinates, scanning row-major.
    pub fn overlap(&self, other: &CoverageMask, offset: (i32, i32)) -> Option<(i32, i32)> {
        let (ox, oy) = offset;
        let x0 = ox.max(0);
        let y0 = oy.max(0);
        let x1 = (ox + other.w as i32).min(self.w as i32);
        let y1 = (oy + other.h as i32).min(self.h as i32);
        for y in y0..y1 {
            for x in x0..x1 {
                if self.get(x, y) && other.get(x - ox, y - oy) {
                    return Some((x, y));
                }
            }
        }
        None
    }
}
