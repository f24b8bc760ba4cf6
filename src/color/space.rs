//! Quantized RGB colours and enumeration of the full colour cube

use crate::io::error::{AlgorithmError, Result, invalid_parameter};
use std::fmt;

/// RGB colour with channels normalized to `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    red: f64,
    green: f64,
    blue: f64,
}

impl Color {
    /// Create a colour from normalized channel values
    pub const fn new(red: f64, green: f64, blue: f64) -> Self {
        Self { red, green, blue }
    }

    /// Red channel in `[0, 1]`
    pub const fn red(&self) -> f64 {
        self.red
    }

    /// Green channel in `[0, 1]`
    pub const fn green(&self) -> f64 {
        self.green
    }

    /// Blue channel in `[0, 1]`
    pub const fn blue(&self) -> f64 {
        self.blue
    }

    /// HSB brightness, the largest channel value
    pub fn brightness(&self) -> f64 {
        self.red.max(self.green).max(self.blue)
    }

    /// HSB hue in degrees, `[0, 360)`; greys have hue 0
    pub fn hue(&self) -> f64 {
        let max = self.brightness();
        let min = self.red.min(self.green).min(self.blue);
        let chroma = max - min;
        if chroma <= 0.0 {
            return 0.0;
        }

        let sector = if (max - self.red).abs() < f64::EPSILON {
            (self.green - self.blue) / chroma
        } else if (max - self.green).abs() < f64::EPSILON {
            (self.blue - self.red) / chroma + 2.0
        } else {
            (self.red - self.green) / chroma + 4.0
        };

        (sector * 60.0).rem_euclid(360.0)
    }

    /// Opaque 8-bit RGBA representation
    pub fn to_rgba8(&self) -> [u8; 4] {
        [
            channel_to_u8(self.red),
            channel_to_u8(self.green),
            channel_to_u8(self.blue),
            u8::MAX,
        ]
    }
}

fn channel_to_u8(value: f64) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b, _] = self.to_rgba8();
        write!(f, "#{r:02x}{g:02x}{b:02x}")
    }
}

/// Every quantized colour for a channel depth, each exactly once
#[derive(Debug, Clone)]
pub struct ColorSpace {
    depth: usize,
}

impl ColorSpace {
    /// Create a colour space with `depth` levels per channel
    ///
    /// # Errors
    ///
    /// Returns an error if `depth` is zero or `depth³` overflows
    pub fn new(depth: usize) -> Result<Self> {
        if depth == 0 {
            return Err(invalid_parameter(
                "color.depth",
                &depth,
                &"must be at least 1",
            ));
        }
        if depth.checked_pow(3).is_none() {
            return Err(invalid_parameter(
                "color.depth",
                &depth,
                &"colour count overflows",
            ));
        }
        Ok(Self { depth })
    }

    /// Create a colour space that exactly fills a `width` x `height` grid
    ///
    /// # Errors
    ///
    /// Returns an error if `depth³ ≠ width × height`
    pub fn for_grid(depth: usize, width: usize, height: usize) -> Result<Self> {
        let space = Self::new(depth)?;
        if width.checked_mul(height) != Some(space.len()) {
            return Err(AlgorithmError::DimensionMismatch {
                depth,
                width,
                height,
            });
        }
        Ok(space)
    }

    /// Quantization levels per channel
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// Total number of colours, `depth³`
    pub const fn len(&self) -> usize {
        self.depth * self.depth * self.depth
    }

    /// Always false, a valid space holds at least one colour
    pub const fn is_empty(&self) -> bool {
        self.depth == 0
    }

    /// Enumerate the cube with red outermost and blue innermost
    ///
    /// Channel level `k` maps to `k / depth`.
    pub fn colors(&self) -> Vec<Color> {
        let depth = self.depth;
        let level = |k: usize| k as f64 / depth as f64;

        let mut colors = Vec::with_capacity(self.len());
        for r in 0..depth {
            for g in 0..depth {
                for b in 0..depth {
                    colors.push(Color::new(level(r), level(g), level(b)));
                }
            }
        }
        colors
    }
}
