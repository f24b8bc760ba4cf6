//! Colour distance functions and the name registry used by configuration

use crate::color::space::Color;
use crate::io::error::{AlgorithmError, Result};
use std::collections::BTreeMap;
use std::fmt;

/// Distance between two colours; zero for identical colours
pub type DistanceFn = fn(&Color, &Color) -> f64;

/// Sum of squared per-channel differences
pub fn squared_euclidean(a: &Color, b: &Color) -> f64 {
    let dr = a.red() - b.red();
    let dg = a.green() - b.green();
    let db = a.blue() - b.blue();
    dr * dr + dg * dg + db * db
}

/// Squared difference of hue in degrees
pub fn squared_hue_difference(a: &Color, b: &Color) -> f64 {
    let dh = a.hue() - b.hue();
    dh * dh
}

/// Squared difference of HSB brightness
pub fn squared_brightness_difference(a: &Color, b: &Color) -> f64 {
    let dv = a.brightness() - b.brightness();
    dv * dv
}

/// A distance function together with the name it was resolved from
#[derive(Clone, Copy)]
pub struct ColorDistance {
    name: &'static str,
    function: DistanceFn,
}

impl ColorDistance {
    /// Pair a registry name with its function
    pub const fn new(name: &'static str, function: DistanceFn) -> Self {
        Self { name, function }
    }

    /// Registry name
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Evaluate the distance between two colours
    #[inline]
    pub fn apply(&self, a: &Color, b: &Color) -> f64 {
        (self.function)(a, b)
    }
}

impl Default for ColorDistance {
    fn default() -> Self {
        Self::new(SQUARED_EUCLIDEAN, squared_euclidean)
    }
}

impl fmt::Debug for ColorDistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ColorDistance").field(&self.name).finish()
    }
}

/// Registry name of [`squared_euclidean`]
pub const SQUARED_EUCLIDEAN: &str = "squared_euclidean";
/// Registry name of [`squared_hue_difference`]
pub const SQUARED_HUE_DIFFERENCE: &str = "squared_hue_difference";
/// Registry name of [`squared_brightness_difference`]
pub const SQUARED_BRIGHTNESS_DIFFERENCE: &str = "squared_brightness_difference";

/// Mapping from distance names to implementations
///
/// Names are stored lowercase and looked up case-insensitively.
#[derive(Debug, Clone)]
pub struct DistanceRegistry {
    entries: BTreeMap<String, ColorDistance>,
}

impl Default for DistanceRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

impl DistanceRegistry {
    /// Create a registry with no entries
    pub const fn empty() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Create a registry holding the three built-in distances
    pub fn with_builtins() -> Self {
        let mut registry = Self::empty();
        registry.register(SQUARED_EUCLIDEAN, squared_euclidean);
        registry.register(SQUARED_HUE_DIFFERENCE, squared_hue_difference);
        registry.register(SQUARED_BRIGHTNESS_DIFFERENCE, squared_brightness_difference);
        registry
    }

    /// Add or replace an entry
    pub fn register(&mut self, name: &'static str, function: DistanceFn) {
        self.entries
            .insert(name.to_ascii_lowercase(), ColorDistance::new(name, function));
    }

    /// Look up a distance by name, ignoring ASCII case
    ///
    /// # Errors
    ///
    /// Returns an error if no entry matches `name`
    pub fn resolve(&self, name: &str) -> Result<ColorDistance> {
        self.entries
            .get(&name.trim().to_ascii_lowercase())
            .copied()
            .ok_or_else(|| AlgorithmError::UnknownDistance {
                name: name.to_string(),
            })
    }

    /// Registered names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.values().map(ColorDistance::name)
    }
}
